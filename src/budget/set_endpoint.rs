//! Defines the endpoint for setting a category's budget.
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

use crate::{
    AppState, Error,
    dashboard::dashboard_content,
    endpoints,
    ledger::{CategoryName, Ledger},
    timezone::get_local_offset,
};

/// The state needed to set a budget.
#[derive(Debug, Clone)]
pub struct SetBudgetState {
    /// The in-memory state store.
    pub ledger: Arc<Mutex<Ledger>>,
    /// The local timezone as a canonical timezone name, e.g. "Pacific/Auckland".
    pub local_timezone: String,
}

impl FromRef<AppState> for SetBudgetState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            ledger: state.ledger.clone(),
            local_timezone: state.local_timezone.clone(),
        }
    }
}

/// The form data for setting a budget.
#[derive(Debug, Deserialize)]
pub struct BudgetForm {
    /// The category the budget applies to.
    #[serde(default)]
    pub category: String,
    /// The budgeted amount per month.
    pub amount: Option<f64>,
}

/// A route handler for setting the budget of a category.
///
/// A submission with either field empty is silently discarded (204 No
/// Content, no swap, no state change). A valid submission sets or overwrites
/// the budget entry for the category and responds with the refreshed page
/// content (or a redirect to the tracker page for non-htmx requests), which
/// clears the form.
pub async fn set_budget_endpoint(
    State(state): State<SetBudgetState>,
    HxRequest(is_htmx): HxRequest,
    Form(form): Form<BudgetForm>,
) -> Response {
    let Some(amount) = form.amount else {
        return StatusCode::NO_CONTENT.into_response();
    };

    let Ok(category) = CategoryName::new(&form.category) else {
        return StatusCode::NO_CONTENT.into_response();
    };

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

    ledger.set_budget(category, amount);

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

    use axum::{extract::State, http::StatusCode, response::IntoResponse};
    use axum_extra::extract::Form;
    use axum_htmx::HxRequest;

    use crate::{
        budget::set_endpoint::{BudgetForm, SetBudgetState},
        ledger::{Budget, CategoryName, Ledger},
        test_utils::assert_status_ok,
    };

    use super::set_budget_endpoint;

    fn get_test_state() -> SetBudgetState {
        SetBudgetState {
            ledger: Arc::new(Mutex::new(Ledger::new())),
            local_timezone: "Etc/UTC".to_owned(),
        }
    }

    #[tokio::test]
    async fn can_set_budget() {
        let state = get_test_state();
        let form = BudgetForm {
            category: "Rent".to_string(),
            amount: Some(200.0),
        };

        let response = set_budget_endpoint(State(state.clone()), HxRequest(true), Form(form))
            .await
            .into_response();

        assert_status_ok(&response);
        assert_eq!(
            state.ledger.lock().unwrap().budgets(),
            &[Budget {
                category: CategoryName::new_unchecked("Rent"),
                amount: 200.0
            }]
        );
    }

    #[tokio::test]
    async fn setting_twice_overwrites_instead_of_accumulating() {
        let state = get_test_state();

        for amount in [100.0, 150.0] {
            let form = BudgetForm {
                category: "Food".to_string(),
                amount: Some(amount),
            };
            set_budget_endpoint(State(state.clone()), HxRequest(true), Form(form))
                .await
                .into_response();
        }

        assert_eq!(
            state.ledger.lock().unwrap().budgets(),
            &[Budget {
                category: CategoryName::new_unchecked("Food"),
                amount: 150.0
            }]
        );
    }

    #[tokio::test]
    async fn empty_field_discards_submission_without_state_change() {
        let incomplete_forms = [
            BudgetForm {
                category: "".to_string(),
                amount: Some(100.0),
            },
            BudgetForm {
                category: "Food".to_string(),
                amount: None,
            },
        ];

        for form in incomplete_forms {
            let state = get_test_state();

            let response = set_budget_endpoint(State(state.clone()), HxRequest(true), Form(form))
                .await
                .into_response();

            assert_eq!(response.status(), StatusCode::NO_CONTENT);
            assert!(
                state.ledger.lock().unwrap().budgets().is_empty(),
                "want no state change for an incomplete form"
            );
        }
    }

    #[test]
    fn empty_form_fields_deserialize_as_missing() {
        let form_data = "category=&amount=";
        let form: BudgetForm = serde_html_form::from_str(form_data).unwrap();

        assert_eq!(form.category, "");
        assert_eq!(form.amount, None);
    }
}
