//! All things time-related.

pub use chrono::{DateTime, TimeDelta, Utc};
use thiserror::Error;

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

/// A time-related error.
#[derive(Debug, Error)]
pub enum Error {
    /// Relative times can only be computed for the past.
    #[error("cannot get relative time for future time {timestamp} (now is {now})")]
    FutureTimestamp {
        /// The current time.
        now: DateTime<Utc>,

        /// The offending timestamp.
        timestamp: DateTime<Utc>,
    },
}

const HOUR_SECS: i64 = 3600;
const DAY: i64 = 24;
const MONTH: i64 = 30 * DAY;
const YEAR: i64 = 12 * MONTH;

/// Converts a timestamp from the past into a coarse, human-readable time
/// relative to `now`, such as "2 hours ago" or "5 years ago".
///
/// Months are always 30 days and years 12 such months, so a year is 360
/// days. Counts are rounded up, so 61 minutes ago is "an hour ago" but 91 minutes ago is
/// "2 hours ago".
///
/// Returns an error if `timestamp` is after `now`.
///
/// # Examples
///
/// ```
/// use hn::clock::{relative_time, DateTime, TimeDelta};
/// let now = DateTime::from_timestamp(10_000_000, 0).unwrap();
/// let then = now - TimeDelta::minutes(45);
/// assert_eq!(relative_time(now, then).unwrap(), "45 min ago");
/// ```
pub fn relative_time(now: DateTime<Utc>, timestamp: DateTime<Utc>) -> Result<String, Error> {
    if timestamp > now {
        return Err(Error::FutureTimestamp { now, timestamp });
    }

    let elapsed = now - timestamp;
    let secs = elapsed.as_seconds_f64();
    let ceil = |unit_secs: i64| (secs / unit_secs as f64).ceil() as i64;

    let s = if elapsed < TimeDelta::seconds(90) {
        String::from("a minute ago")
    } else if elapsed < TimeDelta::minutes(50) {
        format!("{} min ago", ceil(60))
    } else if elapsed < TimeDelta::minutes(90) {
        String::from("an hour ago")
    } else if elapsed < TimeDelta::hours(21) {
        format!("{} hours ago", ceil(HOUR_SECS))
    } else if elapsed < TimeDelta::hours(36) {
        String::from("a day ago")
    } else if elapsed < TimeDelta::hours(25 * DAY) {
        format!("{} days ago", ceil(DAY * HOUR_SECS))
    } else if elapsed < TimeDelta::hours(45 * DAY) {
        String::from("a month ago")
    } else if elapsed < TimeDelta::hours(11 * MONTH) {
        format!("{} months ago", ceil(MONTH * HOUR_SECS))
    } else if elapsed < TimeDelta::hours(17 * MONTH) {
        String::from("a year ago")
    } else {
        format!("{} years ago", ceil(YEAR * HOUR_SECS))
    };

    Ok(s)
}
