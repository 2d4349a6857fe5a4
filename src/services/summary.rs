//! Summary calculations
//!
//! Pure functions deriving display metrics from values read out of storage.
//! Nothing here touches the database.

use crate::models::Amount;

/// Projection of income and spending over a number of months
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectedSummary {
    pub months: u32,
    pub total_expenses: Amount,
    /// Zero when `months` is zero
    pub avg_monthly_expense: Amount,
    /// `income * months - total_expenses`
    pub estimated_savings: Amount,
}

/// Total deducted from income: the sum of all expenses
pub fn deducted(total_expenses: Amount) -> Amount {
    total_expenses
}

/// Share of income left after deductions, as a percentage
///
/// Defined as `0` when income is zero.
pub fn remaining_percent(income: Amount, deducted: Amount) -> f64 {
    if income.is_zero() {
        return 0.0;
    }
    ((income.value() - deducted.value()) / income.value()) * 100.0
}

/// Project savings over `months` assuming constant monthly income
pub fn projected_summary(income: Amount, months: u32, total_expenses: Amount) -> ProjectedSummary {
    let avg_monthly_expense = if months == 0 {
        Amount::zero()
    } else {
        total_expenses / f64::from(months)
    };

    ProjectedSummary {
        months,
        total_expenses,
        avg_monthly_expense,
        estimated_savings: income * f64::from(months) - total_expenses,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_deducted_is_total() {
        assert_eq!(deducted(Amount::new(400.0)), Amount::new(400.0));
    }

    #[test]
    fn test_remaining_percent() {
        assert!(close(
            remaining_percent(Amount::new(2000.0), Amount::new(400.0)),
            80.0
        ));
        assert!(close(
            remaining_percent(Amount::new(1000.0), Amount::new(1500.0)),
            -50.0
        ));
    }

    #[test]
    fn test_remaining_percent_zero_income() {
        for deducted in [0.0, 1.0, -25.0, 1e9] {
            assert_eq!(remaining_percent(Amount::zero(), Amount::new(deducted)), 0.0);
        }
    }

    #[test]
    fn test_projection() {
        let summary = projected_summary(Amount::new(1000.0), 3, Amount::new(400.0));
        assert_eq!(summary.months, 3);
        assert_eq!(summary.total_expenses, Amount::new(400.0));
        assert_eq!(summary.estimated_savings.value(), 2600.0);
        assert!(close(summary.avg_monthly_expense.value(), 400.0 / 3.0));
        assert_eq!(summary.avg_monthly_expense.to_string(), "133.33");
    }

    #[test]
    fn test_projection_zero_months() {
        for total in [0.0, 400.0, -12.0] {
            let summary = projected_summary(Amount::new(1000.0), 0, Amount::new(total));
            assert_eq!(summary.avg_monthly_expense, Amount::zero());
            assert_eq!(summary.estimated_savings.value(), -total);
        }
    }
}
