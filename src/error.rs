use thiserror::Error;

/// Process exit codes
pub mod exit_code {
    pub const NO_PROBLEMS: i32 = 0;
    pub const INVALID_ARGUMENT: i32 = 1;
    pub const MISSING_REQUIRED_ARGUMENT: i32 = 2;
    pub const WEB_API_DISABLED: i32 = 3;
    pub const RUNTIME_FAILURE: i32 = 4;
}

/// Tracker error types
#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("The argument `{0}` is required.")]
    MissingArgument(&'static str),

    #[error("The argument `{name}` {reason}.")]
    InvalidArgument { name: &'static str, reason: String },

    #[error("WebAPI is disabled. Please follow the documentation on how to enable this.")]
    ApiDisabled,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl TrackerError {
    /// Exit code the process terminates with for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            TrackerError::InvalidArgument { .. } => exit_code::INVALID_ARGUMENT,
            TrackerError::MissingArgument(_) => exit_code::MISSING_REQUIRED_ARGUMENT,
            TrackerError::ApiDisabled => exit_code::WEB_API_DISABLED,
            TrackerError::Http(_) | TrackerError::Io(_) | TrackerError::Json(_) => {
                exit_code::RUNTIME_FAILURE
            }
        }
    }

    /// Configuration-class errors are reported to the user, not logged as failures
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            TrackerError::MissingArgument(_)
                | TrackerError::InvalidArgument { .. }
                | TrackerError::ApiDisabled
        )
    }
}

/// Result type for tracker operations
pub type Result<T> = std::result::Result<T, TrackerError>;
