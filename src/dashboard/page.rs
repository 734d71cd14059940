//! The tracker page handler and its htmx content partial.
//!
//! The whole application is this one page. Every mutation endpoint responds
//! with [dashboard_content], which htmx swaps into the `#dashboard-content`
//! container, so the charts, summary and list always reflect the current
//! ledger contents.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};
use time::{Date, OffsetDateTime};

use crate::{
    AppState, Error,
    budget::budget_form,
    dashboard::{
        cards::summary_view,
        charts::{
            DashboardChart, budget_chart, category_pie_chart, charts_script, charts_view,
            monthly_spending_chart,
        },
    },
    html::{HeadElement, base, dollar_input_styles},
    ledger::Ledger,
    timezone::get_local_offset,
    transaction::{transaction_form, transactions_table},
};

/// The state needed for displaying the tracker page.
#[derive(Debug, Clone)]
pub struct DashboardState {
    /// The in-memory state store.
    pub ledger: Arc<Mutex<Ledger>>,
    /// The local timezone as a canonical timezone name, e.g. "Pacific/Auckland".
    pub local_timezone: String,
}

impl FromRef<AppState> for DashboardState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            ledger: state.ledger.clone(),
            local_timezone: state.local_timezone.clone(),
        }
    }
}

/// Display the tracker page with the current ledger contents.
pub async fn get_dashboard_page(State(state): State<DashboardState>) -> Result<Response, Error> {
    let local_timezone = get_local_offset(&state.local_timezone).ok_or_else(|| {
        tracing::error!("Invalid timezone {}", state.local_timezone);
        Error::InvalidTimezone(state.local_timezone.clone())
    })?;
    let today = OffsetDateTime::now_utc().to_offset(local_timezone).date();

    let ledger = state.ledger.lock().map_err(|error| {
        tracing::error!("could not acquire state store lock: {error}");
        Error::StateLock
    })?;

    Ok(dashboard_view(&ledger, today).into_response())
}

/// The inner HTML of the `#dashboard-content` container.
///
/// Rendered by the page handler on a full page load and returned by every
/// mutation endpoint for htmx to swap in.
pub(crate) fn dashboard_content(ledger: &Ledger, today: Date) -> Markup {
    let transactions = ledger.transactions();

    let charts = [
        DashboardChart {
            id: "monthly-spending-chart",
            options: monthly_spending_chart(transactions).to_string(),
        },
        DashboardChart {
            id: "category-pie-chart",
            options: category_pie_chart(transactions).to_string(),
        },
        DashboardChart {
            id: "budget-chart",
            options: budget_chart(ledger.budgets(), transactions).to_string(),
        },
    ];

    html!(
        section id="add-transaction" class="w-full max-w-md mx-auto mb-8"
        {
            h2 class="text-xl font-semibold mb-4" { "Add Transaction" }
            (transaction_form(today))
        }

        section id="charts" class="w-full mx-auto mb-8"
        {
            (charts_view(&charts[..2]))
        }

        (summary_view(transactions))

        section id="set-budget" class="w-full max-w-md mx-auto mb-8"
        {
            h2 class="text-xl font-semibold mb-4" { "Set Budget" }
            (budget_form())
        }

        section id="budgets" class="w-full mx-auto mb-8"
        {
            (charts_view(&charts[2..]))
        }

        section id="transactions" class="w-full mx-auto mb-8"
        {
            h2 class="text-xl font-semibold mb-4" { "Transactions" }
            (transactions_table(transactions))
        }

        (charts_script(&charts))
    )
}

/// Renders the full tracker page around the content partial.
fn dashboard_view(ledger: &Ledger, today: Date) -> Markup {
    let content = html!(
        div
            class="flex flex-col items-center px-2 lg:px-6 lg:py-8 mx-auto
                max-w-screen-xl text-gray-900 dark:text-white"
        {
            h1 class="text-2xl font-bold my-6" { "Personal Finance Visualizer" }

            div id="dashboard-content" class="w-full flex flex-col items-center"
            {
                (dashboard_content(ledger, today))
            }
        }
    );

    let scripts = [
        HeadElement::ScriptLink("/static/echarts.6.0.0.min.js".to_owned()),
        dollar_input_styles(),
    ];

    base("Tracker", &scripts, &content)
}
