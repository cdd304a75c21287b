//! Session: the explicitly-owned cache around the pure pipeline
//!
//! The calculator is recomputed from scratch on every text submission, but
//! unrelated UI events (projection-window changes, theme toggles, chart
//! clicks) need to re-render the last successful result. [`Session`] owns
//! that single cached slot; the core functions stay pure.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::classify::DoublingTime;
use super::curve::{
    project_curve, projection_end, CurvePoint, DEFAULT_PROJECTION_YEARS, MIN_PROJECTION_YEARS,
};
use super::error::TrendError;
use super::fit::{fit_exponential, FitModel};
use crate::data::{parse_measurements, MeasurementSeries};

/// One successful trend computation: the parsed series, the fitted model,
/// and its classified doubling time
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TrendReport {
    series: MeasurementSeries,
    fit: FitModel,
    doubling_time: DoublingTime,
}

impl TrendReport {
    /// Run the full pipeline on a block of input text
    pub fn from_text(text: &str) -> Result<Self, TrendError> {
        let series = parse_measurements(text);
        let fit = fit_exponential(&series)?;
        let doubling_time = DoublingTime::classify(fit.doubling_time_days());
        Ok(Self {
            series,
            fit,
            doubling_time,
        })
    }

    /// The parsed, chronologically ordered measurements
    #[inline]
    pub fn series(&self) -> &MeasurementSeries {
        &self.series
    }

    /// The fitted exponential model
    #[inline]
    pub fn fit(&self) -> &FitModel {
        &self.fit
    }

    /// The classified doubling time
    #[inline]
    pub fn doubling_time(&self) -> &DoublingTime {
        &self.doubling_time
    }

    /// Weekly projection curve from the first measurement to `years` past
    /// the last one (clamped to at least half a year)
    pub fn projection(&self, years: f64) -> Vec<CurvePoint> {
        // A successful fit implies a non-empty series.
        let start = self
            .series
            .first()
            .map(|m| m.date())
            .unwrap_or(self.fit.epoch());
        let last = self
            .series
            .last()
            .map(|m| m.date())
            .unwrap_or(self.fit.epoch());
        project_curve(&self.fit, start, projection_end(last, years))
    }

    /// Expected value at an arbitrary date (the chart-click query)
    pub fn expected_at(&self, date: NaiveDate) -> f64 {
        self.fit.predict(date)
    }
}

/// Owner of the single cached "last successful result"
///
/// There is exactly one writer ([`Session::submit`]) and it runs to
/// completion before any reader observes the new state; a failed submission
/// leaves the previous result untouched.
#[derive(Debug, Clone, Default)]
pub struct Session {
    projection_years: Option<f64>,
    last: Option<TrendReport>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse, fit, and classify a new block of input text
    ///
    /// On success the cached report is overwritten wholesale and the
    /// projection window resets to the default span. On failure the cache
    /// is left as it was.
    pub fn submit(&mut self, text: &str) -> Result<&TrendReport, TrendError> {
        let report = TrendReport::from_text(text)?;
        self.projection_years = None;
        Ok(self.last.insert(report))
    }

    /// The last successful report, for re-rendering
    #[inline]
    pub fn last(&self) -> Option<&TrendReport> {
        self.last.as_ref()
    }

    /// Adjust the projection window, clamped to at least half a year
    pub fn set_projection_years(&mut self, years: f64) {
        self.projection_years = Some(years.max(MIN_PROJECTION_YEARS));
    }

    /// Current projection span in years
    #[inline]
    pub fn projection_years(&self) -> f64 {
        self.projection_years.unwrap_or(DEFAULT_PROJECTION_YEARS)
    }

    /// Projection curve for the cached report under the current window
    pub fn projection(&self) -> Option<Vec<CurvePoint>> {
        self.last
            .as_ref()
            .map(|report| report.projection(self.projection_years()))
    }
}
