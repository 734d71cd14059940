//! The summary cards shown between the charts and the budget form.

use maud::{Markup, html};

use crate::{
    dashboard::aggregation::{recent_descriptions, total_expenses},
    html::format_currency,
    ledger::Transaction,
};

/// How many of the latest transactions to name in the summary.
const RECENT_TRANSACTION_COUNT: usize = 3;

/// Renders the summary section: the total-expenses figure and the most
/// recent transaction descriptions.
///
/// Both figures are recomputed from the current sequence on every render, so
/// they stay correct after every add and delete.
pub(super) fn summary_view(transactions: &[Transaction]) -> Markup {
    let total = total_expenses(transactions);
    let recent = recent_descriptions(transactions, RECENT_TRANSACTION_COUNT).join(", ");

    html! {
        section id="summary" class="w-full mx-auto mb-8" {
            div class="grid grid-cols-1 sm:grid-cols-2 gap-4" {
                div
                    class="bg-white dark:bg-gray-800 border border-gray-200
                        dark:border-gray-700 rounded-lg p-4 shadow-md"
                {
                    h3 class="text-sm font-medium text-gray-600 dark:text-gray-400" {
                        "Total Expenses"
                    }
                    p id="total-expenses" class="text-2xl font-semibold" {
                        (format_currency(total))
                    }
                }

                div
                    class="bg-white dark:bg-gray-800 border border-gray-200
                        dark:border-gray-700 rounded-lg p-4 shadow-md"
                {
                    h3 class="text-sm font-medium text-gray-600 dark:text-gray-400" {
                        "Recent Transactions"
                    }

                    @if recent.is_empty() {
                        p class="text-sm text-gray-600 dark:text-gray-400" {
                            "No transactions yet"
                        }
                    } @else {
                        p class="text-sm" { (recent) }
                    }
                }
            }
        }
    }
}
