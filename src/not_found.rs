//! Defines the template and route handler for the 404 not found page.
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use crate::html::error_view;

/// The requested page or resource does not exist.
pub struct NotFoundError;

impl IntoResponse for NotFoundError {
    fn into_response(self) -> Response {
        let html = Html(
            error_view(
                "Not Found",
                "404",
                "Sorry, that page does not exist.",
                "Check the address for typos or head back home.",
            )
            .into_string(),
        );

        (StatusCode::NOT_FOUND, html).into_response()
    }
}

/// The fallback handler for requests that match no route.
pub async fn get_404_not_found() -> Response {
    NotFoundError.into_response()
}
