//! Derived display metrics for budgets. Pure functions, no I/O.

use crate::models::Budget;

/// Sum of all expense amounts recorded against a budget.
pub fn total_spent(budget: &Budget) -> f64 {
    budget.expenses.iter().map(|e| e.amount).sum()
}

/// Limit minus spending. Negative when the budget is overspent.
pub fn remaining(budget: &Budget) -> f64 {
    budget.limit - total_spent(budget)
}

/// Share of the limit already spent, clamped to [0, 100] for the progress
/// bar. A zero limit reads as 0% rather than dividing by zero.
pub fn percent_used(budget: &Budget) -> f64 {
    if budget.limit <= 0.0 {
        return 0.0;
    }
    // multiply before dividing so clean ratios like 110 of 200 come out
    // exactly 55.0
    (total_spent(budget) * 100.0 / budget.limit).min(100.0)
}

/// Roll-up across every budget a user owns, shown on the dashboard stat
/// cards.
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct PortfolioSummary {
    pub budget_count: usize,
    pub limit_sum: f64,
    pub spending_sum: f64,
    pub remaining: f64,
    /// Raw usage ratio in percent, not clamped; the dashboard colors values
    /// past 100 red instead of capping them.
    pub avg_usage_percent: f64,
}

impl PortfolioSummary {
    pub fn of(budgets: &[Budget]) -> Self {
        let limit_sum: f64 = budgets.iter().map(|b| b.limit).sum();
        let spending_sum: f64 = budgets.iter().map(total_spent).sum();
        let avg_usage_percent = if limit_sum > 0.0 {
            spending_sum / limit_sum * 100.0
        } else {
            0.0
        };
        PortfolioSummary {
            budget_count: budgets.len(),
            limit_sum,
            spending_sum,
            remaining: limit_sum - spending_sum,
            avg_usage_percent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Expense};

    fn budget(id: i64, limit: f64, amounts: &[f64]) -> Budget {
        Budget {
            id,
            name: format!("budget-{id}"),
            limit,
            user_id: "tester".to_string(),
            expenses: amounts
                .iter()
                .enumerate()
                .map(|(i, &amount)| Expense {
                    id: i as i64 + 1,
                    description: format!("expense-{i}"),
                    amount,
                    category: Category::General,
                    date: String::new(),
                    budget_id: id,
                })
                .collect(),
        }
    }

    #[test]
    fn groceries_scenario() {
        let b = budget(1, 200.0, &[50.0, 60.0]);
        assert_eq!(total_spent(&b), 110.0);
        assert_eq!(remaining(&b), 90.0);
        assert_eq!(percent_used(&b), 55.0);
    }

    #[test]
    fn overspent_budget_goes_negative_but_percent_clamps() {
        let b = budget(1, 100.0, &[150.0]);
        assert_eq!(remaining(&b), -50.0);
        assert_eq!(percent_used(&b), 100.0);
    }

    #[test]
    fn percent_used_is_exact_for_even_ratios() {
        assert_eq!(percent_used(&budget(1, 200.0, &[50.0, 60.0])), 55.0);
        assert_eq!(percent_used(&budget(1, 400.0, &[110.0])), 27.5);
        assert_eq!(percent_used(&budget(1, 80.0, &[20.0])), 25.0);
    }

    #[test]
    fn percent_used_stays_in_range_whenever_limit_is_positive() {
        for spent in [0.0, 1.0, 99.9, 100.0, 250.0, 10_000.0] {
            let p = percent_used(&budget(1, 100.0, &[spent]));
            assert!((0.0..=100.0).contains(&p), "{spent} gave {p}");
        }
    }

    #[test]
    fn zero_limit_reads_as_zero_percent() {
        assert_eq!(percent_used(&budget(1, 0.0, &[25.0])), 0.0);
        assert_eq!(percent_used(&budget(1, 0.0, &[])), 0.0);
    }

    #[test]
    fn empty_budget_spends_nothing() {
        let b = budget(1, 75.0, &[]);
        assert_eq!(total_spent(&b), 0.0);
        assert_eq!(remaining(&b), 75.0);
        assert_eq!(percent_used(&b), 0.0);
    }

    #[test]
    fn portfolio_rolls_up_across_budgets() {
        let budgets = vec![budget(1, 200.0, &[50.0, 60.0]), budget(2, 100.0, &[90.0])];
        let summary = PortfolioSummary::of(&budgets);
        assert_eq!(summary.budget_count, 2);
        assert_eq!(summary.limit_sum, 300.0);
        assert_eq!(summary.spending_sum, 200.0);
        assert_eq!(summary.remaining, 100.0);
        assert!((summary.avg_usage_percent - 66.666).abs() < 0.01);
    }

    #[test]
    fn empty_portfolio_has_no_usage() {
        let summary = PortfolioSummary::of(&[]);
        assert_eq!(summary.budget_count, 0);
        assert_eq!(summary.limit_sum, 0.0);
        assert_eq!(summary.avg_usage_percent, 0.0);
    }

    #[test]
    fn portfolio_usage_can_exceed_100() {
        let summary = PortfolioSummary::of(&[budget(1, 100.0, &[150.0])]);
        assert_eq!(summary.remaining, -50.0);
        assert_eq!(summary.avg_usage_percent, 150.0);
    }
}
