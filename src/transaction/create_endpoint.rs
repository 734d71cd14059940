//! Defines the endpoint for creating a new transaction.
use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
// Must use axum_extra's Form since that parses an empty string as None instead
// of crashing like axum::Form.
use axum_extra::extract::Form;
use axum_htmx::HxRequest;
use serde::Deserialize;
use time::Date;

use crate::{
    AppState, Error,
    dashboard::dashboard_content,
    endpoints,
    ledger::{CategoryName, Ledger, Transaction},
    timezone::get_local_offset,
};

/// The state needed to create a transaction.
#[derive(Debug, Clone)]
pub struct CreateTransactionState {
    /// The in-memory state store.
    pub ledger: Arc<Mutex<Ledger>>,
    /// The local timezone as a canonical timezone name, e.g. "Pacific/Auckland".
    pub local_timezone: String,
}

impl FromRef<AppState> for CreateTransactionState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            ledger: state.ledger.clone(),
            local_timezone: state.local_timezone.clone(),
        }
    }
}

/// The form data for creating a transaction.
///
/// The amount and date are optional so that an empty field reaches the
/// handler as `None` instead of failing deserialization; the handler performs
/// the presence checks itself.
#[derive(Debug, Deserialize)]
pub struct TransactionForm {
    /// Text detailing the transaction.
    #[serde(default)]
    pub description: String,
    /// The value of the transaction in dollars.
    pub amount: Option<f64>,
    /// The date when the transaction occurred.
    pub date: Option<Date>,
    /// The category the transaction belongs to.
    #[serde(default)]
    pub category: String,
}

/// A route handler for creating a new transaction.
///
/// A submission with any of the four fields empty is silently discarded: the
/// response is 204 No Content, so htmx performs no swap and the store is left
/// untouched. A valid submission appends one record and responds with the
/// refreshed page content (or a redirect to the tracker page for non-htmx
/// requests), which clears the form.
pub async fn create_transaction_endpoint(
    State(state): State<CreateTransactionState>,
    HxRequest(is_htmx): HxRequest,
    Form(form): Form<TransactionForm>,
) -> Response {
    let (Some(amount), Some(date)) = (form.amount, form.date) else {
        return StatusCode::NO_CONTENT.into_response();
    };

    let Ok(category) = CategoryName::new(&form.category) else {
        return StatusCode::NO_CONTENT.into_response();
    };

    if form.description.trim().is_empty() {
        return StatusCode::NO_CONTENT.into_response();
    }

    let Some(local_timezone) = get_local_offset(&state.local_timezone) else {
        tracing::error!("Invalid timezone {}", state.local_timezone);
        return Error::InvalidTimezone(state.local_timezone).into_alert_response();
    };

    let mut ledger = match state.ledger.lock() {
        Ok(ledger) => ledger,
        Err(error) => {
            tracing::error!("could not acquire state store lock: {error}");
            return Error::StateLock.into_alert_response();
        }
    };

    ledger.add_transaction(Transaction::draft(amount, date, &form.description, category));

    if is_htmx {
        let today = time::OffsetDateTime::now_utc().to_offset(local_timezone).date();
        dashboard_content(&ledger, today).into_response()
    } else {
        Redirect::to(endpoints::ROOT).into_response()
    }
}
