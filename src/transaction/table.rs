//! The transaction list view.

use maud::{Markup, html};

use crate::{
    endpoints::{self, format_endpoint},
    html::{
        BUTTON_DELETE_STYLE, CATEGORY_BADGE_STYLE, TABLE_CELL_STYLE, TABLE_HEADER_STYLE,
        TABLE_ROW_STYLE, format_currency,
    },
    ledger::Transaction,
};

/// Render the transaction list as a table, in sequence order.
///
/// Each row carries a delete button that swaps the refreshed page content in
/// on completion.
pub(crate) fn transactions_table(transactions: &[Transaction]) -> Markup {
    if transactions.is_empty() {
        return html! {
            p class="text-gray-600 dark:text-gray-400"
            {
                "Nothing here yet. Transactions will show up here once you add some."
            }
        };
    }

    html! {
        div class="overflow-x-auto rounded-lg shadow w-full"
        {
            table class="w-full text-sm text-left text-gray-500 dark:text-gray-400"
            {
                thead class=(TABLE_HEADER_STYLE)
                {
                    tr
                    {
                        th scope="col" class=(TABLE_CELL_STYLE) { "Date" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Description" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Amount" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Category" }
                        th scope="col" class=(TABLE_CELL_STYLE)
                        {
                            span class="sr-only" { "Delete" }
                        }
                    }
                }

                tbody
                {
                    @for transaction in transactions {
                        tr class=(TABLE_ROW_STYLE)
                        {
                            td class=(TABLE_CELL_STYLE) { (transaction.date) }
                            td class=(TABLE_CELL_STYLE) { (transaction.description) }
                            td class=(TABLE_CELL_STYLE) { (format_currency(transaction.amount)) }
                            td class=(TABLE_CELL_STYLE)
                            {
                                span class=(CATEGORY_BADGE_STYLE) { (transaction.category) }
                            }
                            td class=(TABLE_CELL_STYLE)
                            {
                                button
                                    type="button"
                                    hx-delete=(format_endpoint(endpoints::DELETE_TRANSACTION, transaction.id))
                                    hx-target="#dashboard-content"
                                    hx-swap="innerHTML"
                                    hx-target-error="#alert-container"
                                    class=(BUTTON_DELETE_STYLE)
                                {
                                    "Delete"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
