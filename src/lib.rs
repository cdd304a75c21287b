//! psatrend: trend analysis for serial PSA measurements
//!
//! Ingests an unstructured, dated log of PSA lab values, fits a weighted
//! least-squares exponential model, derives a clinically meaningful doubling
//! (or halving) time, and samples a projection curve for charting.
//!
//! The crate is pure: every function is a deterministic value-in/value-out
//! computation with no I/O. Presentation layers own event wiring and call in
//! through [`trend::Session`], which holds the single cached last result.

pub mod data;
pub mod trend;

pub use data::{parse_measurements, Measurement, MeasurementSeries};
pub use trend::{
    fit_exponential, project_curve, CurvePoint, DoublingTime, FitModel, Session, TrendClass,
    TrendError, TrendReport,
};

pub mod prelude {
    pub use crate::data::{parse_measurements, Measurement, MeasurementSeries};
    pub use crate::trend::{
        fit_exponential, project_curve, CurvePoint, DoublingTime, FitModel, Session, TrendClass,
        TrendError, TrendReport,
    };
}
