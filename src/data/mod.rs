//! Ingestion of pasted PSA logs into ordered measurement series

mod measurement;
mod parse;

pub use measurement::{Measurement, MeasurementSeries};
pub use parse::{parse_date_token, parse_line, parse_measurements};
