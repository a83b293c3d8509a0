//! Monthly spending summary
//!
//! Aggregation over a slice of expenses for dashboard-style reporting:
//! total spent, record count and a per-category breakdown.

use std::collections::BTreeMap;

use chrono::Datelike;
use serde::Serialize;

use super::expense::{Category, Expense};

/// Aggregate view of one calendar month of spending
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlySummary {
    pub year: i32,
    pub month: u32,
    pub total: f64,
    pub count: usize,
    /// Spend per category, only categories with at least one record
    pub by_category: BTreeMap<Category, f64>,
}

impl MonthlySummary {
    /// Computes the summary for the given calendar month.
    ///
    /// Records from other months are ignored, so the full cached collection
    /// can be passed in as-is.
    pub fn compute(expenses: &[Expense], year: i32, month: u32) -> Self {
        let mut total = 0.0;
        let mut count = 0;
        let mut by_category = BTreeMap::new();

        for e in expenses {
            if e.date.year() != year || e.date.month() != month {
                continue;
            }
            total += e.amount;
            count += 1;
            *by_category.entry(e.category).or_insert(0.0) += e.amount;
        }

        Self {
            year,
            month,
            total,
            count,
            by_category,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::expense::ExpenseId;
    use chrono::{TimeZone, Utc};

    fn expense(title: &str, amount: f64, category: Category, month: u32) -> Expense {
        Expense {
            id: ExpenseId::Remote(format!("id-{title}")),
            title: title.to_string(),
            amount,
            category,
            date: Utc.with_ymd_and_hms(2026, month, 10, 9, 0, 0).unwrap(),
            receipt_url: None,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn sums_only_the_requested_month() {
        let expenses = vec![
            expense("lunch", 12.0, Category::Food, 3),
            expense("bus", 3.0, Category::Transport, 3),
            expense("rent", 900.0, Category::Bills, 4),
        ];
        let s = MonthlySummary::compute(&expenses, 2026, 3);
        assert_eq!(s.count, 2);
        assert!((s.total - 15.0).abs() < f64::EPSILON);
        assert!(!s.by_category.contains_key(&Category::Bills));
    }

    #[test]
    fn breakdown_accumulates_per_category() {
        let expenses = vec![
            expense("lunch", 12.0, Category::Food, 3),
            expense("dinner", 20.0, Category::Food, 3),
        ];
        let s = MonthlySummary::compute(&expenses, 2026, 3);
        assert!((s.by_category[&Category::Food] - 32.0).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_input_yields_zeroes() {
        let s = MonthlySummary::compute(&[], 2026, 1);
        assert_eq!(s.count, 0);
        assert_eq!(s.total, 0.0);
        assert!(s.by_category.is_empty());
    }
}
