//! Alert fragments for displaying error messages to the user.
//!
//! Alerts are rendered into the `#alert-container` element of the page shell
//! by the htmx response-targets extension when an endpoint responds with an
//! error status. Successful mutations re-render the page content instead, so
//! there is no success variant.

use maud::{Markup, html};

/// An error alert with a headline and details.
#[derive(Debug, Clone, PartialEq)]
pub struct Alert {
    /// Short headline for the alert.
    pub message: String,
    /// Longer explanation shown under the headline.
    pub details: String,
}

impl Alert {
    /// Create a new error alert.
    pub fn error(message: &str, details: &str) -> Self {
        Self {
            message: message.to_owned(),
            details: details.to_owned(),
        }
    }

    /// Render the alert as an HTML fragment.
    ///
    /// The fragment also un-hides the alert container, since the container
    /// starts out hidden on every page load.
    pub fn into_html(self) -> Markup {
        html!(
            div
                class="p-4 mb-4 rounded-lg border border-red-300 bg-red-50 \
                    text-red-800 dark:bg-gray-800 dark:border-red-800 \
                    dark:text-red-400"
                role="alert"
                onclick="this.parentElement.classList.add('hidden')"
            {
                p class="font-medium" { (self.message) }

                @if !self.details.is_empty() {
                    p class="text-sm" { (self.details) }
                }
            }

            script
            {
                "document.getElementById('alert-container').classList.remove('hidden');"
            }
        )
    }
}

#[cfg(test)]
mod alert_tests {
    use scraper::{Html, Selector};

    use crate::alert::Alert;

    #[test]
    fn renders_message_and_details() {
        let alert = Alert::error("Something went wrong", "Check the server logs.");

        let html = Html::parse_fragment(&alert.into_html().into_string());

        let paragraphs: Vec<String> = html
            .select(&Selector::parse("p").unwrap())
            .map(|p| p.text().collect::<Vec<_>>().join(""))
            .collect();
        assert_eq!(
            paragraphs,
            vec!["Something went wrong", "Check the server logs."]
        );
    }

    #[test]
    fn omits_empty_details() {
        let alert = Alert::error("Something went wrong", "");

        let html = Html::parse_fragment(&alert.into_html().into_string());

        let paragraphs = html.select(&Selector::parse("p").unwrap()).count();
        assert_eq!(paragraphs, 1);
    }
}
