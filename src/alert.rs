//! Alert system for displaying success and error messages to users.
//!
//! Alerts are HTML fragments that htmx swaps into the page's alert container.

use axum::response::{IntoResponse, Response};
use maud::{Markup, html};

/// An alert message to display to the user.
#[derive(Debug, Clone, PartialEq)]
pub enum Alert {
    /// A success message without details.
    SuccessSimple { message: String },
    /// An error message with extra details.
    Error { message: String, details: String },
}

impl Alert {
    pub fn into_html(self) -> Markup {
        let (is_error, message, details) = match self {
            Alert::SuccessSimple { message } => (false, message, String::new()),
            Alert::Error { message, details } => (true, message, details),
        };

        let style = if is_error {
            "flex items-start gap-3 p-4 mb-4 text-sm rounded-lg shadow \
            text-red-800 bg-red-50 border border-red-300 \
            dark:bg-gray-800 dark:text-red-400 dark:border-red-800"
        } else {
            "flex items-start gap-3 p-4 mb-4 text-sm rounded-lg shadow \
            text-green-800 bg-green-50 border border-green-300 \
            dark:bg-gray-800 dark:text-green-400 dark:border-green-800"
        };

        // Template adapted from https://flowbite.com/docs/components/alerts/
        html!(
            div
                role="alert"
                class=(style)
                data-alert-type=(if is_error { "error" } else { "success" })
            {
                div class="flex-1"
                {
                    p class="font-medium" { (message) }

                    @if !details.is_empty() {
                        p class="mt-1" { (details) }
                    }
                }

                button
                    type="button"
                    aria-label="Dismiss"
                    class="ms-auto font-bold"
                    onclick="this.closest('[role=alert]').remove()"
                {
                    "×"
                }
            }
        )
    }
}

impl IntoResponse for Alert {
    fn into_response(self) -> Response {
        self.into_html().into_response()
    }
}

#[cfg(test)]
mod alert_tests {
    use scraper::{Html, Selector};

    use crate::{alert::Alert, test_utils::assert_valid_html};

    #[test]
    fn error_alert_contains_message_and_details() {
        let alert = Alert::Error {
            message: "Flight is full".to_owned(),
            details: "Choose a different flight.".to_owned(),
        };

        let html = Html::parse_fragment(&alert.into_html().into_string());

        assert_valid_html(&html);
        let root = html
            .select(&Selector::parse("div[role=alert]").unwrap())
            .next()
            .expect("no alert found");
        assert_eq!(root.value().attr("data-alert-type"), Some("error"));
        let text = root.text().collect::<String>();
        assert!(text.contains("Flight is full"));
        assert!(text.contains("Choose a different flight."));
    }

    #[test]
    fn simple_success_alert_has_no_details() {
        let alert = Alert::SuccessSimple {
            message: "Flight removed".to_owned(),
        };

        let html = Html::parse_fragment(&alert.into_html().into_string());

        assert_valid_html(&html);
        let paragraphs = html.select(&Selector::parse("p").unwrap()).count();
        assert_eq!(paragraphs, 1, "want 1 paragraph, got {paragraphs}");
    }
}
