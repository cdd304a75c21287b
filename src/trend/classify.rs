//! Doubling-time classification
//!
//! Maps a doubling time in days onto a unit-appropriate label. Boundaries
//! are half-open: 60 days belongs to the months bucket and 730 days to the
//! years bucket.

use serde::{Deserialize, Serialize};
use std::fmt;

const DAYS_PER_MONTH: f64 = 30.44;
const DAYS_PER_YEAR: f64 = 365.25;

/// Magnitude/direction bucket for a doubling time
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrendClass {
    /// Negative doubling time: the series is decreasing, and the magnitude
    /// is a halving time rather than a doubling time
    Decreasing,
    /// Under 60 days
    Days,
    /// 60 days up to (not including) 730 days
    Months,
    /// 730 days and beyond, including an infinite doubling time
    YearsAndMonths,
}

/// A classified doubling time, ready for display
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct DoublingTime {
    days: f64,
    class: TrendClass,
}

impl DoublingTime {
    /// Classify a doubling time in days (possibly infinite)
    pub fn classify(days: f64) -> Self {
        let class = if days < 0.0 {
            TrendClass::Decreasing
        } else if days < 60.0 {
            TrendClass::Days
        } else if days < 730.0 {
            TrendClass::Months
        } else {
            TrendClass::YearsAndMonths
        };
        Self { days, class }
    }

    /// Doubling time in days, as classified
    #[inline]
    pub fn days(&self) -> f64 {
        self.days
    }

    /// The bucket this doubling time falls in
    #[inline]
    pub fn class(&self) -> TrendClass {
        self.class
    }
}

impl fmt::Display for DoublingTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.class {
            TrendClass::Decreasing => write!(
                f,
                "PSA is decreasing (rate constant implies halving in {:.1} days, not doubling)",
                self.days.abs()
            ),
            TrendClass::Days => write!(f, "{:.1} days", self.days),
            TrendClass::Months => write!(f, "{:.1} months", self.days / DAYS_PER_MONTH),
            TrendClass::YearsAndMonths => write!(
                f,
                "{:.2} years ({:.1} months)",
                self.days / DAYS_PER_YEAR,
                self.days / DAYS_PER_MONTH
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_is_decreasing() {
        let dt = DoublingTime::classify(-50.0);
        assert_eq!(dt.class(), TrendClass::Decreasing);
        let text = dt.to_string();
        assert!(text.contains("decreasing"));
        assert!(text.contains("halving in 50.0 days"));
    }

    #[test]
    fn test_days_bucket() {
        let dt = DoublingTime::classify(45.0);
        assert_eq!(dt.class(), TrendClass::Days);
        assert_eq!(dt.to_string(), "45.0 days");
    }

    #[test]
    fn test_months_bucket() {
        let dt = DoublingTime::classify(400.0);
        assert_eq!(dt.class(), TrendClass::Months);
        assert_eq!(dt.to_string(), "13.1 months");
    }

    #[test]
    fn test_years_bucket_shows_both_units() {
        let dt = DoublingTime::classify(1000.0);
        assert_eq!(dt.class(), TrendClass::YearsAndMonths);
        assert_eq!(dt.to_string(), "2.74 years (32.9 months)");
    }

    #[test]
    fn test_boundaries_are_half_open() {
        assert_eq!(DoublingTime::classify(0.0).class(), TrendClass::Days);
        assert_eq!(DoublingTime::classify(59.999).class(), TrendClass::Days);
        assert_eq!(DoublingTime::classify(60.0).class(), TrendClass::Months);
        assert_eq!(DoublingTime::classify(729.999).class(), TrendClass::Months);
        assert_eq!(
            DoublingTime::classify(730.0).class(),
            TrendClass::YearsAndMonths
        );
    }

    #[test]
    fn test_infinite_doubling_time_is_handled() {
        let dt = DoublingTime::classify(f64::INFINITY);
        assert_eq!(dt.class(), TrendClass::YearsAndMonths);
        // Must format without panicking.
        assert!(dt.to_string().contains("years"));
    }
}
