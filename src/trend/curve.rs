//! Projection curve sampling
//!
//! Produces evenly spaced predicted points along a fitted model for
//! charting. Point queries at arbitrary dates go through
//! [`FitModel::predict`] directly.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use super::fit::FitModel;

/// Sampling cadence of the projection curve
const STEP_DAYS: i64 = 7;

/// Days per year used when turning a projection span into a window end
const DAYS_PER_YEAR: f64 = 365.25;

/// Shortest allowed projection span beyond the last measurement, in years
pub const MIN_PROJECTION_YEARS: f64 = 0.5;

/// Default projection span beyond the last measurement, in years
pub const DEFAULT_PROJECTION_YEARS: f64 = 2.0;

/// One sampled point on the projection curve
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct CurvePoint {
    pub date: NaiveDate,
    pub value: f64,
}

/// Sample the fitted curve weekly from `start` through `end`
///
/// The first sample sits exactly on `start`; the last is the final weekly
/// step that does not pass `end`. An `end` before `start` yields an empty
/// curve.
pub fn project_curve(model: &FitModel, start: NaiveDate, end: NaiveDate) -> Vec<CurvePoint> {
    let mut points = Vec::new();
    let mut date = start;
    while date <= end {
        points.push(CurvePoint {
            date,
            value: model.predict(date),
        });
        date += Duration::days(STEP_DAYS);
    }
    points
}

/// Window end for a projection reaching `years` past the last measurement
///
/// `years` is clamped to [`MIN_PROJECTION_YEARS`].
pub fn projection_end(last_measurement: NaiveDate, years: f64) -> NaiveDate {
    let years = years.max(MIN_PROJECTION_YEARS);
    last_measurement + Duration::days((years * DAYS_PER_YEAR).round() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Measurement, MeasurementSeries};
    use crate::trend::fit::fit_exponential;
    use approx::assert_relative_eq;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn doubling_model() -> FitModel {
        let series = MeasurementSeries::from_unsorted(vec![
            Measurement::new(d(2024, 1, 1), 2.0),
            Measurement::new(d(2024, 3, 31), 4.0), // 90 days later
        ]);
        fit_exponential(&series).unwrap()
    }

    #[test]
    fn test_weekly_cadence_and_inclusive_last_sample() {
        let model = doubling_model();
        let curve = project_curve(&model, d(2024, 1, 1), d(2024, 1, 31));

        // Jan 1, 8, 15, 22, 29; Feb 5 would pass the end.
        assert_eq!(curve.len(), 5);
        assert_eq!(curve[0].date, d(2024, 1, 1));
        assert_eq!(curve[4].date, d(2024, 1, 29));
        for pair in curve.windows(2) {
            assert_eq!((pair[1].date - pair[0].date).num_days(), 7);
        }
    }

    #[test]
    fn test_end_on_a_sample_is_included() {
        let model = doubling_model();
        let curve = project_curve(&model, d(2024, 1, 1), d(2024, 1, 15));
        assert_eq!(curve.last().unwrap().date, d(2024, 1, 15));
    }

    #[test]
    fn test_end_before_start_yields_empty_curve() {
        let model = doubling_model();
        assert!(project_curve(&model, d(2024, 2, 1), d(2024, 1, 1)).is_empty());
    }

    #[test]
    fn test_curve_values_follow_the_model() {
        let model = doubling_model();
        let curve = project_curve(&model, d(2024, 1, 1), d(2024, 12, 31));
        for point in &curve {
            assert_relative_eq!(point.value, model.predict(point.date), max_relative = 1e-12);
        }
        // Exact doubling model: the curve starts on the fitted scale.
        assert_relative_eq!(curve[0].value, 2.0, epsilon = 1e-9);
    }

    #[test]
    fn test_growth_is_strictly_monotonic() {
        let model = doubling_model();
        let curve = project_curve(&model, d(2024, 1, 1), d(2025, 1, 1));
        for pair in curve.windows(2) {
            assert!(pair[1].value > pair[0].value);
        }

        // And strictly decreasing for a negative rate.
        let series = MeasurementSeries::from_unsorted(vec![
            Measurement::new(d(2024, 1, 1), 8.0),
            Measurement::new(d(2024, 3, 31), 4.0),
        ]);
        let decay = fit_exponential(&series).unwrap();
        let curve = project_curve(&decay, d(2024, 1, 1), d(2025, 1, 1));
        for pair in curve.windows(2) {
            assert!(pair[1].value < pair[0].value);
        }
    }

    #[test]
    fn test_projection_end_clamps_short_spans() {
        let last = d(2024, 7, 1);
        // Half a year is the floor.
        assert_eq!(projection_end(last, 0.1), projection_end(last, 0.5));
        assert_eq!(
            projection_end(last, 2.0),
            last + Duration::days((2.0 * 365.25_f64).round() as i64)
        );
    }
}
