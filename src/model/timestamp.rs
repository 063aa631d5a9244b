use std::fmt;
use std::ops::Add;

use serde::{Deserialize, Serialize};

pub const MILLIS_PER_SECOND: u64 = 1_000;

/// Simulated time in milliseconds since the owning clock started.
///
/// Natural `u64` ordering equals chronological ordering.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SimTime(u64);

impl SimTime {
    pub const ZERO: SimTime = SimTime(0);

    pub fn from_millis(millis: u64) -> Self {
        Self(millis)
    }

    pub fn from_secs(secs: u64) -> Self {
        Self(secs * MILLIS_PER_SECOND)
    }

    pub fn as_millis(self) -> u64 {
        self.0
    }

    /// Time advanced by `millis`, saturating at `u64::MAX`.
    pub fn plus_millis(self, millis: u64) -> Self {
        Self(self.0.saturating_add(millis))
    }
}

/// Convert a duration in (possibly fractional) seconds to whole milliseconds.
///
/// Negative and non-finite inputs map to zero.
pub fn secs_to_millis(secs: f64) -> u64 {
    if !secs.is_finite() || secs <= 0.0 {
        return 0;
    }
    (secs * MILLIS_PER_SECOND as f64).round() as u64
}

impl Add<u64> for SimTime {
    type Output = SimTime;

    fn add(self, millis: u64) -> SimTime {
        self.plus_millis(millis)
    }
}

impl fmt::Display for SimTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "T+{}.{:03}s",
            self.0 / MILLIS_PER_SECOND,
            self.0 % MILLIS_PER_SECOND
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn secs_convert_to_millis() {
        assert_eq!(SimTime::from_secs(300).as_millis(), 300_000);
        assert_eq!(secs_to_millis(1.5), 1_500);
        assert_eq!(secs_to_millis(-3.0), 0);
        assert_eq!(secs_to_millis(f64::NAN), 0);
    }

    #[test]
    fn chronological_ordering() {
        let a = SimTime::from_millis(999);
        let b = SimTime::from_secs(1);
        assert!(a < b);
        assert_eq!(a + 1, b);
    }

    #[test]
    fn addition_saturates() {
        let t = SimTime::from_millis(u64::MAX - 1);
        assert_eq!(t.plus_millis(10).as_millis(), u64::MAX);
    }

    #[test]
    fn serde_is_plain_number() {
        let json = serde_json::to_value(SimTime::from_millis(42)).unwrap();
        assert_eq!(json, 42);
    }

    #[test]
    fn display_format() {
        assert_eq!(SimTime::from_millis(61_005).to_string(), "T+61.005s");
    }
}
