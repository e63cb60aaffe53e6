use std::path::PathBuf;
use std::time::Duration;

/// Version reported by `-version`
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// File the status log is appended to when `-output` is not given
pub const DEFAULT_OUTPUT_FILE: &str = "output.txt";

pub const DEFAULT_INTERVAL_MINUTES: u64 = 5;
pub const MIN_INTERVAL_MINUTES: u64 = 1;
pub const MAX_INTERVAL_MINUTES: u64 = 200;

/// Flag values as they come off the command line, before validation
#[derive(Debug, Clone)]
pub struct Flags {
    /// Sametime user id to track
    pub user_id: String,

    /// Output file for the status log
    pub output: PathBuf,

    /// Minutes between polls
    pub interval: u64,

    /// Print the version and exit
    pub version: bool,
}

/// Validated tracker settings, built once at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Sametime user id to track
    pub user_id: String,

    /// Output file for the status log
    pub output: PathBuf,

    /// Minutes between polls, within the accepted range
    pub interval_minutes: u32,
}

impl Settings {
    /// Poll interval as a duration
    pub fn interval(&self) -> Duration {
        Duration::from_secs(u64::from(self.interval_minutes) * 60)
    }
}

impl Default for Flags {
    fn default() -> Self {
        Self {
            user_id: String::new(),
            output: PathBuf::from(DEFAULT_OUTPUT_FILE),
            interval: DEFAULT_INTERVAL_MINUTES,
            version: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_default() {
        let flags = Flags::default();
        assert_eq!(flags.user_id, "");
        assert_eq!(flags.output, PathBuf::from("output.txt"));
        assert_eq!(flags.interval, 5);
        assert!(!flags.version);
    }

    #[test]
    fn test_interval_duration() {
        let settings = Settings {
            user_id: "bob".to_string(),
            output: PathBuf::from("output.txt"),
            interval_minutes: 5,
        };
        assert_eq!(settings.interval(), Duration::from_secs(300));
    }

    #[test]
    fn test_version_constant() {
        assert_eq!(VERSION, "0.1.2");
    }
}
