//! Requested billing periods and their calendar date ranges.

use chrono::{Datelike, NaiveDate, Utc};
use serde::Deserialize;
use serde_json::Value;
use std::fmt;

use crate::domain::error::ReportError;

/// Earliest year the upstream holds billing data for.
pub const MIN_YEAR: i32 = 2020;

/// A raw, caller-supplied month/year pair.
///
/// Month and year may arrive as JSON numbers or numeric strings; both forms
/// are accepted and coerced during validation. Missing or `null` fields are
/// detected as absent.
#[derive(Debug, Clone, Deserialize)]
pub struct PeriodSelection {
    #[serde(default)]
    pub month: Option<Value>,
    #[serde(default)]
    pub year: Option<Value>,
}

/// A validated (month, year) unit for which invoices are fetched.
///
/// Immutable once validated; only [`validate_periods`] produces values from
/// caller input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Period {
    month: u32,
    year: i32,
}

impl Period {
    /// Builds a period from already-validated parts.
    pub fn new(month: u32, year: i32) -> Self {
        debug_assert!((1..=12).contains(&month));
        Self { month, year }
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// The inclusive calendar range covering this period's whole month.
    ///
    /// The end day comes from the proleptic Gregorian calendar's month
    /// length, so leap-year Februaries resolve to the 29th. Total for any
    /// validated period.
    pub fn date_range(&self) -> DateRange {
        let start = NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .expect("validated period has month in 1-12");

        let next_month = if self.month == 12 {
            NaiveDate::from_ymd_opt(self.year + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(self.year, self.month + 1, 1)
        }
        .expect("first day of successor month always exists");

        let end = next_month
            .pred_opt()
            .expect("successor month is never the minimum date");

        DateRange { start, end }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.month, self.year)
    }
}

/// Inclusive calendar range derived from a [`Period`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// Validates a list of raw selections into periods.
///
/// All-or-nothing: the first invalid selection aborts the whole call;
/// partially-valid lists are never partially accepted.
///
/// # Errors
///
/// - [`ReportError::EmptySelection`] for an empty list
/// - [`ReportError::MissingField`] when month or year is absent
/// - [`ReportError::InvalidMonth`] when a month is unparseable or outside 1-12
/// - [`ReportError::InvalidYear`] when a year is unparseable or outside
///   `[MIN_YEAR, current_year + 1]`
pub fn validate_periods(selections: &[PeriodSelection]) -> Result<Vec<Period>, ReportError> {
    if selections.is_empty() {
        return Err(ReportError::EmptySelection);
    }

    let max_year = Utc::now().year() + 1;
    let mut periods = Vec::with_capacity(selections.len());

    for selection in selections {
        let (Some(raw_month), Some(raw_year)) = (&selection.month, &selection.year) else {
            return Err(ReportError::MissingField);
        };

        let month = parse_int(raw_month).ok_or(ReportError::InvalidMonth)?;
        if !(1..=12).contains(&month) {
            return Err(ReportError::InvalidMonth);
        }

        let year = parse_int(raw_year).ok_or(ReportError::InvalidYear { max: max_year })?;
        if year < i64::from(MIN_YEAR) || year > i64::from(max_year) {
            return Err(ReportError::InvalidYear { max: max_year });
        }

        periods.push(Period::new(month as u32, year as i32));
    }

    Ok(periods)
}

fn parse_int(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn selection(month: Value, year: Value) -> PeriodSelection {
        PeriodSelection {
            month: Some(month),
            year: Some(year),
        }
    }

    #[test]
    fn test_date_range_standard_months() {
        let range = Period::new(1, 2023).date_range();
        assert_eq!(range.start, NaiveDate::from_ymd_opt(2023, 1, 1).unwrap());
        assert_eq!(range.end, NaiveDate::from_ymd_opt(2023, 1, 31).unwrap());

        let range = Period::new(4, 2023).date_range();
        assert_eq!(range.end, NaiveDate::from_ymd_opt(2023, 4, 30).unwrap());
    }

    #[test]
    fn test_date_range_february_leap_years() {
        let range = Period::new(2, 2024).date_range();
        assert_eq!(range.end, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());

        let range = Period::new(2, 2023).date_range();
        assert_eq!(range.end, NaiveDate::from_ymd_opt(2023, 2, 28).unwrap());
    }

    #[test]
    fn test_date_range_december_crosses_year() {
        let range = Period::new(12, 2022).date_range();
        assert_eq!(range.start, NaiveDate::from_ymd_opt(2022, 12, 1).unwrap());
        assert_eq!(range.end, NaiveDate::from_ymd_opt(2022, 12, 31).unwrap());
    }

    #[test]
    fn test_validate_rejects_empty_list() {
        assert_eq!(validate_periods(&[]), Err(ReportError::EmptySelection));
    }

    #[test]
    fn test_validate_rejects_missing_fields() {
        let missing_year = PeriodSelection {
            month: Some(json!(3)),
            year: None,
        };
        assert_eq!(
            validate_periods(&[missing_year]),
            Err(ReportError::MissingField)
        );
    }

    #[test]
    fn test_validate_null_counts_as_missing() {
        let parsed: PeriodSelection =
            serde_json::from_value(json!({ "month": null, "year": 2023 })).unwrap();
        assert_eq!(validate_periods(&[parsed]), Err(ReportError::MissingField));
    }

    #[test]
    fn test_validate_month_bounds() {
        assert_eq!(
            validate_periods(&[selection(json!(0), json!(2023))]),
            Err(ReportError::InvalidMonth)
        );
        assert_eq!(
            validate_periods(&[selection(json!(13), json!(2023))]),
            Err(ReportError::InvalidMonth)
        );
        assert_eq!(
            validate_periods(&[selection(json!("abc"), json!(2023))]),
            Err(ReportError::InvalidMonth)
        );
    }

    #[test]
    fn test_validate_year_bounds() {
        let max = Utc::now().year() + 1;
        assert_eq!(
            validate_periods(&[selection(json!(1), json!(2019))]),
            Err(ReportError::InvalidYear { max })
        );
        assert_eq!(
            validate_periods(&[selection(json!(1), json!(max + 1))]),
            Err(ReportError::InvalidYear { max })
        );
    }

    #[test]
    fn test_validate_accepts_numeric_strings() {
        let periods =
            validate_periods(&[selection(json!("2"), json!("2023"))]).unwrap();
        assert_eq!(periods, vec![Period::new(2, 2023)]);
    }

    #[test]
    fn test_validate_is_all_or_nothing() {
        let result = validate_periods(&[
            selection(json!(1), json!(2023)),
            selection(json!(13), json!(2023)),
        ]);
        assert_eq!(result, Err(ReportError::InvalidMonth));
    }
}
