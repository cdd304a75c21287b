//! Weighted least-squares exponential fitting
//!
//! Fits `value(t) = A · e^(B·t)` to a measurement series, with `t` in days
//! since the earliest qualifying measurement. The fit is performed on the
//! log-linear model `ln(y) = ln(A) + B·x` with per-point weights `w = y²`,
//! which weights large values more heavily — the standard choice when the
//! error is multiplicative.
//!
//! Reference: <https://mathworld.wolfram.com/LeastSquaresFittingExponential.html>

use chrono::NaiveDate;
use nalgebra::{Matrix2, Vector2};
use serde::{Deserialize, Serialize};

use super::error::TrendError;
use crate::data::MeasurementSeries;

/// Determinant magnitude below which the normal equations count as singular
const SINGULAR_TOL: f64 = 1e-15;

/// A fitted exponential model `value(t) = scale · e^(rate · t)`
///
/// `t` is measured in whole days since [`FitModel::epoch`], the date of the
/// earliest measurement used in the fit.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct FitModel {
    scale: f64,
    rate: f64,
    epoch: NaiveDate,
}

impl FitModel {
    /// Scale factor `A` (positive)
    #[inline]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Rate constant `B` per day (signed; negative for a decreasing series)
    #[inline]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Time origin of the fit
    #[inline]
    pub fn epoch(&self) -> NaiveDate {
        self.epoch
    }

    /// Doubling time in days, `ln(2) / rate`
    ///
    /// Negative for a decreasing series, where the magnitude is a halving
    /// time rather than a doubling time. Infinite when the rate is zero;
    /// classification handles that case, it is not an error.
    #[inline]
    pub fn doubling_time_days(&self) -> f64 {
        std::f64::consts::LN_2 / self.rate
    }

    /// Predicted value at an arbitrary date
    ///
    /// Extrapolation beyond the measured range is permitted and expected.
    pub fn predict(&self, date: NaiveDate) -> f64 {
        self.scale * (self.rate * elapsed_days(self.epoch, date)).exp()
    }
}

/// Signed whole-day distance from `epoch` to `date`
#[inline]
pub(crate) fn elapsed_days(epoch: NaiveDate, date: NaiveDate) -> f64 {
    date.signed_duration_since(epoch).num_days() as f64
}

/// Fit an exponential model to a measurement series
///
/// Measurements with non-positive values are excluded first; at least two
/// must remain. Fails with [`TrendError::DegenerateFit`] when the weighted
/// normal equations are singular, which happens only for pathological input
/// (every qualifying measurement on the same day).
pub fn fit_exponential(series: &MeasurementSeries) -> Result<FitModel, TrendError> {
    let qualifying: Vec<_> = series.iter().filter(|m| m.value() > 0.0).collect();
    if qualifying.len() < 2 {
        return Err(TrendError::InsufficientData {
            n: qualifying.len(),
            required: 2,
        });
    }

    // Series is sorted, so the first qualifying measurement is the earliest.
    let epoch = qualifying[0].date();

    // Weighted sums for the log-linear normal equations, weights w = y².
    let (mut s1, mut s2, mut s3, mut s4, mut s5) = (0.0, 0.0, 0.0, 0.0, 0.0);
    for m in &qualifying {
        let x = elapsed_days(epoch, m.date());
        let y = m.value();
        let w = y * y;
        let ln_y = y.ln();
        s1 += w;
        s2 += w * x;
        s3 += w * x * x;
        s4 += w * ln_y;
        s5 += w * x * ln_y;
    }

    let coeffs = Matrix2::new(s1, s2, s2, s3);
    if coeffs.determinant().abs() < SINGULAR_TOL {
        return Err(TrendError::DegenerateFit);
    }

    let solution = coeffs
        .lu()
        .solve(&Vector2::new(s4, s5))
        .ok_or(TrendError::DegenerateFit)?;

    Ok(FitModel {
        scale: solution[0].exp(),
        rate: solution[1],
        epoch,
    })
}
