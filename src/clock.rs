//! All things time-related.

pub use chrono::{DateTime, Local, Utc};

/// Tells time and returns the time.
///
/// Generally you will want to retrieve time using [`SystemClock`],
/// but in tests you may want to implement a `Clock` with a fixed time.
pub trait Clock {
    /// The current time.
    fn now(&self) -> DateTime<Utc>;
}

/// Interacts with the system clock to get the current time.
#[derive(Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Converts a unix timestamp, in (possibly fractional) seconds, into a
/// human-readable date-time string in the system's local timezone.
///
/// The Reddit API reports creation times as float seconds; this is the
/// normalizer applied column-wise to produce the derived `timestamp`
/// column of the exported tables.
pub fn local_datetime(timestamp: f64) -> String {
    let secs = timestamp.trunc() as i64;
    let nsecs = (timestamp.fract() * 1e9) as u32;
    // Timestamps returned by the API are always well within chrono's
    // representable range.
    let datetime = DateTime::from_timestamp(secs, nsecs).unwrap_or(DateTime::UNIX_EPOCH);
    datetime
        .with_timezone(&Local)
        .format("%Y-%m-%d %H:%M:%S")
        .to_string()
}

#[cfg(test)]
mod tests {
    mod clock {
        use super::super::*;
        use std::ops::Sub;

        #[test]
        fn it_returns_the_system_time() {
            let clock = SystemClock::default();
            let delta = Utc::now().sub(clock.now());
            let secs = delta.num_seconds();
            assert_eq!(secs, 0);
        }
    }

    mod local_datetime {
        use super::super::*;

        #[test]
        fn it_converts_a_unix_timestamp_to_local_time() {
            let expected = DateTime::from_timestamp(1_500_000_000, 0)
                .unwrap()
                .with_timezone(&Local)
                .format("%Y-%m-%d %H:%M:%S")
                .to_string();
            assert_eq!(local_datetime(1_500_000_000.0), expected);
        }

        #[test]
        fn it_truncates_fractional_seconds_from_the_display_form() {
            assert_eq!(local_datetime(1_500_000_000.75), local_datetime(1_500_000_000.0));
        }

        #[test]
        fn it_converts_the_epoch() {
            let expected = DateTime::UNIX_EPOCH
                .with_timezone(&Local)
                .format("%Y-%m-%d %H:%M:%S")
                .to_string();
            assert_eq!(local_datetime(0.0), expected);
        }
    }
}
