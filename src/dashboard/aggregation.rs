//! Transaction data aggregation and transformation for the charts and summary.
//!
//! Provides the reductions behind every derived view: totals by month label,
//! totals by category, budget-versus-spend rows and the overall summary
//! figures. Each reduction is recomputed from the current transaction
//! sequence on every render, so the views never hold state of their own.

use time::{Date, Month};

use crate::ledger::{Budget, Transaction};

/// One row of the budget chart: a budgeted category paired with its spend.
#[derive(Debug, Clone, PartialEq)]
pub(super) struct BudgetRow {
    /// The budgeted category.
    pub(super) category: String,
    /// The budgeted amount per month.
    pub(super) budgeted: f64,
    /// The total amount spent in the category, zero if it has no transactions.
    pub(super) spent: f64,
}

/// Aggregates transaction amounts by the abbreviated month name of their date.
///
/// Returns one (label, total) pair per distinct month label, ordered by first
/// appearance in the sequence rather than by calendar order. Months from
/// different calendar years share a label and are merged into one total.
pub(super) fn aggregate_by_month(transactions: &[Transaction]) -> Vec<(String, f64)> {
    let mut totals: Vec<(String, f64)> = Vec::new();

    for transaction in transactions {
        let label = month_label(transaction.date);

        match totals.iter_mut().find(|(month, _)| *month == label) {
            Some((_, total)) => *total += transaction.amount,
            None => totals.push((label, transaction.amount)),
        }
    }

    totals
}

/// Aggregates transaction amounts by category.
///
/// The same reduction as [aggregate_by_month] keyed by category text instead
/// of month label, again in first-appearance order.
pub(super) fn aggregate_by_category(transactions: &[Transaction]) -> Vec<(String, f64)> {
    let mut totals: Vec<(String, f64)> = Vec::new();

    for transaction in transactions {
        let category = transaction.category.as_ref();

        match totals.iter_mut().find(|(name, _)| name.as_str() == category) {
            Some((_, total)) => *total += transaction.amount,
            None => totals.push((category.to_owned(), transaction.amount)),
        }
    }

    totals
}

/// Pairs every budgeted category with its spend total.
///
/// Emits one row per category present in the budget list, in budget insertion
/// order, with a spend of zero when the category has no transactions yet.
/// Categories with spend but no budget entry are omitted.
pub(super) fn budget_rows(budgets: &[Budget], transactions: &[Transaction]) -> Vec<BudgetRow> {
    let spend_by_category = aggregate_by_category(transactions);

    budgets
        .iter()
        .map(|budget| {
            let spent = spend_by_category
                .iter()
                .find(|(category, _)| category.as_str() == budget.category.as_ref())
                .map(|(_, total)| *total)
                .unwrap_or(0.0);

            BudgetRow {
                category: budget.category.to_string(),
                budgeted: budget.amount,
                spent,
            }
        })
        .collect()
}

/// The sum of all transaction amounts currently in the sequence.
pub(super) fn total_expenses(transactions: &[Transaction]) -> f64 {
    transactions
        .iter()
        .map(|transaction| transaction.amount)
        .sum()
}

/// The descriptions of the last `count` transactions, oldest first.
pub(super) fn recent_descriptions(transactions: &[Transaction], count: usize) -> Vec<String> {
    let start = transactions.len().saturating_sub(count);

    transactions[start..]
        .iter()
        .map(|transaction| transaction.description.clone())
        .collect()
}

/// Formats the month of `date` as a three-letter abbreviation, e.g. "Jan".
fn month_label(date: Date) -> String {
    match date.month() {
        Month::January => "Jan",
        Month::February => "Feb",
        Month::March => "Mar",
        Month::April => "Apr",
        Month::May => "May",
        Month::June => "Jun",
        Month::July => "Jul",
        Month::August => "Aug",
        Month::September => "Sep",
        Month::October => "Oct",
        Month::November => "Nov",
        Month::December => "Dec",
    }
    .to_string()
}
