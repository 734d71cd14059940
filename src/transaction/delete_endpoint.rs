//! Defines the endpoint for deleting a transaction.
use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, Path, State},
    response::{IntoResponse, Redirect, Response},
};
use axum_htmx::HxRequest;

use crate::{
    AppState, Error,
    dashboard::dashboard_content,
    endpoints,
    ledger::{Ledger, TransactionId},
    timezone::get_local_offset,
};

/// The state needed to delete a transaction.
#[derive(Debug, Clone)]
pub struct DeleteTransactionState {
    /// The in-memory state store.
    pub ledger: Arc<Mutex<Ledger>>,
    /// The local timezone as a canonical timezone name, e.g. "Pacific/Auckland".
    pub local_timezone: String,
}

impl FromRef<AppState> for DeleteTransactionState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            ledger: state.ledger.clone(),
            local_timezone: state.local_timezone.clone(),
        }
    }
}

/// A route handler for deleting a transaction by its identifier.
///
/// Removes the matching record if there is one; an absent identifier is a
/// no-op. Either way the handler responds with the refreshed page content (or
/// a redirect to the tracker page for non-htmx requests).
pub async fn delete_transaction_endpoint(
    State(state): State<DeleteTransactionState>,
    HxRequest(is_htmx): HxRequest,
    Path(transaction_id): Path<TransactionId>,
) -> Response {
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

    let rows_affected = ledger.delete_transaction(transaction_id);

    if rows_affected == 0 {
        tracing::debug!("ignored delete for missing transaction {transaction_id}");
    }

    if is_htmx {
        let today = time::OffsetDateTime::now_utc().to_offset(local_timezone).date();
        dashboard_content(&ledger, today).into_response()
    } else {
        Redirect::to(endpoints::ROOT).into_response()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use axum::{
        extract::{Path, State},
        response::IntoResponse,
    };
    use axum_htmx::HxRequest;
    use time::macros::date;

    use crate::{
        ledger::{CategoryName, Ledger, Transaction},
        test_utils::assert_status_ok,
        transaction::delete_endpoint::DeleteTransactionState,
    };

    use super::delete_transaction_endpoint;

    fn get_test_state() -> DeleteTransactionState {
        DeleteTransactionState {
            ledger: Arc::new(Mutex::new(Ledger::new())),
            local_timezone: "Etc/UTC".to_owned(),
        }
    }

    #[tokio::test]
    async fn deletes_the_matching_transaction() {
        let state = get_test_state();
        let (first_id, second) = {
            let mut ledger = state.ledger.lock().unwrap();
            let first = ledger.add_transaction(Transaction::draft(
                1.23,
                date!(2024 - 01 - 15),
                "first",
                CategoryName::new_unchecked("Food"),
            ));
            let second = ledger.add_transaction(Transaction::draft(
                4.56,
                date!(2024 - 02 - 01),
                "second",
                CategoryName::new_unchecked("Rent"),
            ));
            (first.id, second)
        };

        let response =
            delete_transaction_endpoint(State(state.clone()), HxRequest(true), Path(first_id))
                .await
                .into_response();

        assert_status_ok(&response);
        assert_eq!(state.ledger.lock().unwrap().transactions(), &[second]);
    }

    #[tokio::test]
    async fn missing_transaction_is_a_no_op() {
        let state = get_test_state();
        let transaction = {
            let mut ledger = state.ledger.lock().unwrap();
            ledger.add_transaction(Transaction::draft(
                1.23,
                date!(2024 - 01 - 15),
                "first",
                CategoryName::new_unchecked("Food"),
            ))
        };

        let response = delete_transaction_endpoint(
            State(state.clone()),
            HxRequest(true),
            Path(transaction.id + 99),
        )
        .await
        .into_response();

        assert_status_ok(&response);
        assert_eq!(state.ledger.lock().unwrap().transactions(), &[transaction]);
    }
}
