//! Parsing of raw user input
//!
//! Every failure here becomes `FinmanError::InvalidInput` and happens before
//! any storage call, so a rejected field never causes a partial write.

use chrono::NaiveDate;

use crate::error::{FinmanError, FinmanResult};
use crate::models::{Amount, ExpenseId};

/// Parse a monetary field, naming the field in the error
pub fn parse_amount(field: &str, raw: &str) -> FinmanResult<Amount> {
    Amount::parse(raw).map_err(|e| {
        tracing::warn!(field, raw, "rejected amount");
        FinmanError::InvalidInput(format!("Invalid {} value: {}", field, e))
    })
}

/// Parse an expense ID such as `7` or `exp-7`
pub fn parse_expense_id(raw: &str) -> FinmanResult<ExpenseId> {
    ExpenseId::parse(raw)
        .map_err(|_| FinmanError::InvalidInput(format!("Invalid expense ID: '{}'", raw)))
}

/// Parse a `YYYY-MM-DD` date
pub fn parse_date(raw: &str) -> FinmanResult<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|_| {
        FinmanError::InvalidInput(format!("Invalid date '{}'. Use YYYY-MM-DD", raw))
    })
}

/// Parse a months count bounded by the selector's maximum
pub fn parse_months(raw: &str, max_months: u32) -> FinmanResult<u32> {
    let months: u32 = raw.trim().parse().map_err(|_| {
        FinmanError::InvalidInput(format!("Invalid months value: '{}'", raw))
    })?;
    check_months(months, max_months)
}

/// Check an already numeric months count against the selector's maximum
pub fn check_months(months: u32, max_months: u32) -> FinmanResult<u32> {
    if months > max_months {
        return Err(FinmanError::InvalidInput(format!(
            "Months must be between 0 and {}, got {}",
            max_months, months
        )));
    }

    Ok(months)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_amount_names_field() {
        let err = parse_amount("income", "lots").unwrap_err();
        assert!(err.is_invalid_input());
        assert!(err.to_string().contains("income"));
        assert_eq!(parse_amount("income", "2000").unwrap(), Amount::new(2000.0));
    }

    #[test]
    fn test_parse_expense_id() {
        assert_eq!(parse_expense_id("exp-4").unwrap(), ExpenseId::from_raw(4));
        assert!(parse_expense_id("four").unwrap_err().is_invalid_input());
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2025-01-31").unwrap(),
            NaiveDate::from_ymd_opt(2025, 1, 31).unwrap()
        );
        assert!(parse_date("31/01/2025").unwrap_err().is_invalid_input());
        assert!(parse_date("2025-02-30").is_err());
    }

    #[test]
    fn test_parse_months_bounds() {
        assert_eq!(parse_months("0", 12).unwrap(), 0);
        assert_eq!(parse_months("12", 12).unwrap(), 12);
        assert!(parse_months("13", 12).unwrap_err().is_invalid_input());
        assert!(parse_months("-1", 12).unwrap_err().is_invalid_input());
        assert!(parse_months("three", 12).is_err());
    }

    #[test]
    fn test_check_months_applies_same_bound() {
        assert_eq!(check_months(6, 12).unwrap(), 6);
        assert_eq!(check_months(0, 0).unwrap(), 0);
        assert!(check_months(24, 12).unwrap_err().is_invalid_input());
    }
}
