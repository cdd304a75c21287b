//! Measurement value objects
//!
//! [`Measurement`] is a single dated PSA value; [`MeasurementSeries`] is the
//! chronologically ordered collection the rest of the pipeline consumes.
//! Both are plain value objects, rebuilt from scratch on every submission.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single dated lab value
///
/// Values are non-negative by construction (the parser rejects negative
/// tokens). A zero value is displayable but is excluded from fitting.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    date: NaiveDate,
    value: f64,
}

impl Measurement {
    /// Create a measurement
    ///
    /// Debug-asserts that `value` is non-negative and finite; the parser
    /// guarantees this for anything it produces.
    pub fn new(date: NaiveDate, value: f64) -> Self {
        debug_assert!(value.is_finite() && value >= 0.0);
        Self { date, value }
    }

    /// Calendar date of the measurement
    #[inline]
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Measured value (ng/mL)
    #[inline]
    pub fn value(&self) -> f64 {
        self.value
    }
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}  {:.3}", self.date.format("%b %-d, %Y"), self.value)
    }
}

/// A chronologically sorted sequence of measurements
///
/// Construction sorts by date ascending with a stable sort, so measurements
/// sharing a date keep their input order. The series has no identity beyond
/// one computation; every submission rebuilds it.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct MeasurementSeries {
    measurements: Vec<Measurement>,
}

impl MeasurementSeries {
    /// Build a series from measurements in any order
    pub fn from_unsorted(mut measurements: Vec<Measurement>) -> Self {
        measurements.sort_by_key(Measurement::date);
        Self { measurements }
    }

    /// The measurements, oldest first
    #[inline]
    pub fn measurements(&self) -> &[Measurement] {
        &self.measurements
    }

    /// Iterate over the measurements, oldest first
    pub fn iter(&self) -> std::slice::Iter<'_, Measurement> {
        self.measurements.iter()
    }

    /// Number of measurements
    #[inline]
    pub fn len(&self) -> usize {
        self.measurements.len()
    }

    /// Whether the series holds no measurements
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.measurements.is_empty()
    }

    /// Earliest measurement, if any
    #[inline]
    pub fn first(&self) -> Option<&Measurement> {
        self.measurements.first()
    }

    /// Latest measurement, if any
    #[inline]
    pub fn last(&self) -> Option<&Measurement> {
        self.measurements.last()
    }
}

impl<'a> IntoIterator for &'a MeasurementSeries {
    type Item = &'a Measurement;
    type IntoIter = std::slice::Iter<'a, Measurement>;

    fn into_iter(self) -> Self::IntoIter {
        self.measurements.iter()
    }
}

impl fmt::Display for MeasurementSeries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "MeasurementSeries ({} points)", self.len())?;
        for m in &self.measurements {
            writeln!(f, "  {}", m)?;
        }
        Ok(())
    }
}
