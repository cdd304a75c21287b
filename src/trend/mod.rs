//! PSA trend analysis: exponential fitting and doubling-time classification
//!
//! This module turns an ordered measurement series into a fitted exponential
//! model, a classified doubling time, and a projection curve for charting.
//!
//! # Pipeline
//!
//! | Step | Input | Output |
//! |------|-------|--------|
//! | [`fit_exponential`] | [`crate::data::MeasurementSeries`] | [`FitModel`] |
//! | [`DoublingTime::classify`] | doubling time in days | bucketed, displayable label |
//! | [`project_curve`] | model + date window | weekly [`CurvePoint`] samples |
//! | [`FitModel::predict`] | model + arbitrary date | expected value |
//!
//! # Usage
//!
//! ```rust,ignore
//! use psatrend::prelude::*;
//!
//! let mut session = Session::new();
//! let report = session.submit("1.2 2024-01-01\n2.4 2024-04-01\n4.8 2024-07-01")?;
//!
//! println!("Doubling time: {}", report.doubling_time());
//! for point in report.projection(2.0) {
//!     println!("{}  {:.3}", point.date, point.value);
//! }
//! ```

mod classify;
mod curve;
mod error;
mod fit;
mod session;


pub use classify::{DoublingTime, TrendClass};
pub use curve::{
    project_curve, projection_end, CurvePoint, DEFAULT_PROJECTION_YEARS, MIN_PROJECTION_YEARS,
};
pub use error::TrendError;
pub use fit::{fit_exponential, FitModel};
pub use session::{Session, TrendReport};
