//! Configuration module
//!
//! Turns command-line flags into validated `Settings`.
//! Validation runs in a fixed order: version, user id, interval, then a
//! single probe of the status endpoint.

mod args;
mod types;

pub use args::normalize_args;
#[allow(unused_imports)]
pub use types::{
    Flags, Settings, DEFAULT_INTERVAL_MINUTES, DEFAULT_OUTPUT_FILE, MAX_INTERVAL_MINUTES,
    MIN_INTERVAL_MINUTES, VERSION,
};

use crate::client::StatusSource;
use crate::error::{Result, TrackerError};

/// Outcome of resolving the command line
#[derive(Debug, PartialEq, Eq)]
pub enum Resolution {
    /// `-version` was given; nothing else is checked
    ShowVersion,
    /// Settings are valid and the status endpoint answered
    Track(Settings),
}

/// Validate flags without touching the network
pub fn validate(flags: Flags) -> Result<Resolution> {
    if flags.version {
        return Ok(Resolution::ShowVersion);
    }

    if flags.user_id.is_empty() {
        return Err(TrackerError::MissingArgument("userid"));
    }

    if !(MIN_INTERVAL_MINUTES..=MAX_INTERVAL_MINUTES).contains(&flags.interval) {
        return Err(TrackerError::InvalidArgument {
            name: "interval",
            reason: format!(
                "must be between {} and {}",
                MIN_INTERVAL_MINUTES, MAX_INTERVAL_MINUTES
            ),
        });
    }

    // Range checked above
    let interval_minutes = flags.interval as u32;

    Ok(Resolution::Track(Settings {
        user_id: flags.user_id,
        output: flags.output,
        interval_minutes,
    }))
}

/// Validate flags, then confirm the status endpoint is reachable
pub fn resolve(flags: Flags, source: &dyn StatusSource) -> Result<Resolution> {
    let resolution = validate(flags)?;

    if let Resolution::Track(settings) = &resolution {
        source.probe(&settings.user_id)?;
    }

    Ok(resolution)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::path::PathBuf;

    /// Source that counts probes and answers with a fixed outcome
    struct CountingSource {
        reachable: bool,
        probes: Cell<usize>,
    }

    impl CountingSource {
        fn new(reachable: bool) -> Self {
            Self {
                reachable,
                probes: Cell::new(0),
            }
        }
    }

    impl StatusSource for CountingSource {
        fn fetch(&self, _user_id: &str) -> Result<Vec<u8>> {
            Ok(b"{}".to_vec())
        }

        fn probe(&self, _user_id: &str) -> Result<()> {
            self.probes.set(self.probes.get() + 1);
            if self.reachable {
                Ok(())
            } else {
                Err(TrackerError::ApiDisabled)
            }
        }
    }

    fn flags(user_id: &str, interval: u64) -> Flags {
        Flags {
            user_id: user_id.to_string(),
            interval,
            ..Flags::default()
        }
    }

    #[test]
    fn test_version_wins_over_invalid_flags() {
        let source = CountingSource::new(false);
        let mut f = flags("", 0);
        f.version = true;

        let resolution = resolve(f, &source).unwrap();
        assert_eq!(resolution, Resolution::ShowVersion);
        assert_eq!(source.probes.get(), 0);
    }

    #[test]
    fn test_missing_user_id() {
        let source = CountingSource::new(true);
        let err = resolve(flags("", 5), &source).unwrap_err();
        assert_eq!(err.exit_code(), 2);
        assert_eq!(source.probes.get(), 0);
    }

    #[test]
    fn test_missing_user_id_checked_before_interval() {
        let err = validate(flags("", 0)).unwrap_err();
        assert!(matches!(err, TrackerError::MissingArgument("userid")));
    }

    #[test]
    fn test_interval_out_of_range() {
        for interval in [0, 201, 1_000, u64::MAX] {
            let source = CountingSource::new(true);
            let err = resolve(flags("bob", interval), &source).unwrap_err();
            assert_eq!(err.exit_code(), 1, "interval {}", interval);
            assert_eq!(source.probes.get(), 0);
        }
    }

    #[test]
    fn test_interval_bounds_accepted() {
        for interval in [1, 200] {
            match validate(flags("bob", interval)).unwrap() {
                Resolution::Track(settings) => {
                    assert_eq!(u64::from(settings.interval_minutes), interval)
                }
                other => panic!("Expected Track, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_unreachable_api() {
        let source = CountingSource::new(false);
        let err = resolve(flags("bob", 5), &source).unwrap_err();
        assert_eq!(err.exit_code(), 3);
        assert_eq!(source.probes.get(), 1);
    }

    #[test]
    fn test_resolve_success_probes_once() {
        let source = CountingSource::new(true);
        let resolution = resolve(flags("bob", 10), &source).unwrap();
        assert_eq!(
            resolution,
            Resolution::Track(Settings {
                user_id: "bob".to_string(),
                output: PathBuf::from("output.txt"),
                interval_minutes: 10,
            })
        );
        assert_eq!(source.probes.get(), 1);
    }
}
