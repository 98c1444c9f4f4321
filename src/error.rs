//! Defines the app level error type and conversions to rendered HTML pages and alerts.
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{
    alert::Alert,
    error_pages::{InternalServerError, NotFoundError},
    flight::FlightId,
    ticket::TicketId,
};

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// A required text field was empty or only contained whitespace.
    ///
    /// The string is the human readable name of the field, e.g. "airline".
    #[error("{0} cannot be empty")]
    EmptyField(&'static str),

    /// The email address used to book a flight is not a valid email address.
    #[error("\"{0}\" is not a valid email address")]
    InvalidEmail(String),

    /// A flight must be created with at least one seat.
    #[error("a flight must have at least one seat, got {0}")]
    InvalidSeatCount(i64),

    /// A flight's price must be a finite, non-negative number.
    #[error("a flight's price must be zero or more, got {0}")]
    InvalidPrice(f64),

    /// A passenger row with this email already exists.
    ///
    /// Bookings reuse the existing passenger, so this only surfaces for
    /// inserts that skip the email lookup.
    #[error("the email address is already in use")]
    DuplicateEmail,

    /// Tried to book a flight that has no seats left.
    #[error("flight {0} has no seats available")]
    FlightFull(FlightId),

    /// Tried to remove a flight that still has tickets referencing it.
    ///
    /// Flights are not removed while tickets reference them so that ticket
    /// history is never orphaned.
    #[error("flight {0} cannot be removed because tickets have been issued for it")]
    FlightHasTickets(FlightId),

    /// Tried to cancel a ticket that has already been cancelled.
    #[error("ticket {0} has already been cancelled")]
    TicketAlreadyCancelled(TicketId),

    /// The flight ID does not refer to a flight in the database.
    #[error("could not find a flight with the ID {0}")]
    FlightNotFound(FlightId),

    /// The ticket ID does not refer to a ticket in the database.
    #[error("could not find a ticket with the ID {0}")]
    TicketNotFound(TicketId),

    /// The requested resource was not found.
    ///
    /// Internally, this error may occur when a query returns no rows.
    #[error("the requested resource could not be found")]
    NotFound,

    /// An unhandled/unexpected SQL error.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),

    /// Could not acquire the database lock
    #[error("could not acquire the database lock")]
    DatabaseLockError,
}

/// The broad category of an [Error].
///
/// Callers use the kind to decide how to report a failure without matching on
/// every variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The input was missing or invalid. Nothing was written.
    Validation,
    /// The operation conflicts with the current state of the data.
    ConstraintViolation,
    /// The operation referred to an ID that does not exist.
    NotFound,
    /// The underlying database failed.
    Storage,
}

impl Error {
    /// Classify the error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::EmptyField(_)
            | Error::InvalidEmail(_)
            | Error::InvalidSeatCount(_)
            | Error::InvalidPrice(_) => ErrorKind::Validation,
            Error::DuplicateEmail
            | Error::FlightFull(_)
            | Error::FlightHasTickets(_)
            | Error::TicketAlreadyCancelled(_) => ErrorKind::ConstraintViolation,
            Error::FlightNotFound(_) | Error::TicketNotFound(_) | Error::NotFound => {
                ErrorKind::NotFound
            }
            Error::SqlError(_) | Error::DatabaseLockError => ErrorKind::Storage,
        }
    }

    fn status_code(&self) -> StatusCode {
        match self.kind() {
            ErrorKind::Validation => StatusCode::BAD_REQUEST,
            ErrorKind::ConstraintViolation => StatusCode::CONFLICT,
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::Storage => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Trim `value` and return it, or [Error::EmptyField] naming `field` if nothing is left.
pub(crate) fn non_empty(value: &str, field: &'static str) -> Result<String, Error> {
    let value = value.trim();

    if value.is_empty() {
        Err(Error::EmptyField(field))
    } else {
        Ok(value.to_owned())
    }
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        match value {
            // Code 2067 occurs when a UNIQUE constraint failed.
            rusqlite::Error::SqliteFailure(sql_error, Some(ref desc))
                if sql_error.extended_code == 2067 && desc.ends_with("passenger.email") =>
            {
                Error::DuplicateEmail
            }
            rusqlite::Error::QueryReturnedNoRows => Error::NotFound,
            error => {
                tracing::error!("an unhandled SQL error occurred: {}", error);
                Error::SqlError(error)
            }
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::NotFound | Error::FlightNotFound(_) | Error::TicketNotFound(_) => {
                NotFoundError.into_response()
            }
            Error::DatabaseLockError => InternalServerError::default().into_response(),
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                InternalServerError::default().into_response()
            }
        }
    }
}

impl Error {
    /// Convert the error into an HTTP response with an HTML alert.
    pub fn into_alert_response(self) -> Response {
        let status_code = self.status_code();
        let description = capitalize(&self.to_string());

        let alert = match self {
            Error::EmptyField(_)
            | Error::InvalidEmail(_)
            | Error::InvalidSeatCount(_)
            | Error::InvalidPrice(_) => Alert::Error {
                message: "Invalid details".to_owned(),
                details: description,
            },
            Error::DuplicateEmail => Alert::Error {
                message: "Duplicate email address".to_owned(),
                details: "A passenger with this email address already exists.".to_owned(),
            },
            Error::FlightFull(flight_id) => Alert::Error {
                message: "Flight is full".to_owned(),
                details: format!(
                    "Flight {flight_id} has no seats available. Choose a different flight."
                ),
            },
            Error::FlightHasTickets(flight_id) => Alert::Error {
                message: "Could not remove flight".to_owned(),
                details: format!(
                    "Tickets have been issued for flight {flight_id}, \
                    so it cannot be removed without losing ticket history."
                ),
            },
            Error::TicketAlreadyCancelled(ticket_id) => Alert::Error {
                message: "Could not cancel ticket".to_owned(),
                details: format!("Ticket {ticket_id} has already been cancelled."),
            },
            Error::FlightNotFound(flight_id) => Alert::Error {
                message: "Flight not found".to_owned(),
                details: format!(
                    "Could not find a flight with the ID {flight_id}. \
                    Try refreshing the page to see if the flight has been removed."
                ),
            },
            Error::TicketNotFound(ticket_id) => Alert::Error {
                message: "Ticket not found".to_owned(),
                details: format!("Could not find a ticket with the ID {ticket_id}."),
            },
            _ => Alert::Error {
                message: "Something went wrong".to_owned(),
                details: "An unexpected error occurred, check the server logs for more details."
                    .to_owned(),
            },
        };

        (status_code, alert.into_html()).into_response()
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();

    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod error_kind_tests {
    use axum::http::StatusCode;

    use crate::{Error, ErrorKind, error::non_empty};

    #[test]
    fn classifies_errors() {
        let cases = [
            (Error::EmptyField("name"), ErrorKind::Validation),
            (Error::InvalidEmail("foo".to_owned()), ErrorKind::Validation),
            (Error::InvalidSeatCount(0), ErrorKind::Validation),
            (Error::InvalidPrice(-1.0), ErrorKind::Validation),
            (Error::DuplicateEmail, ErrorKind::ConstraintViolation),
            (Error::FlightFull(1), ErrorKind::ConstraintViolation),
            (Error::FlightHasTickets(1), ErrorKind::ConstraintViolation),
            (Error::TicketAlreadyCancelled(1), ErrorKind::ConstraintViolation),
            (Error::FlightNotFound(1), ErrorKind::NotFound),
            (Error::TicketNotFound(1), ErrorKind::NotFound),
            (Error::NotFound, ErrorKind::NotFound),
            (Error::DatabaseLockError, ErrorKind::Storage),
        ];

        for (error, want_kind) in cases {
            assert_eq!(error.kind(), want_kind, "wrong kind for {error:?}");
        }
    }

    #[test]
    fn alert_status_follows_kind() {
        assert_eq!(
            Error::EmptyField("name").into_alert_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            Error::FlightFull(1).into_alert_response().status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            Error::TicketNotFound(1).into_alert_response().status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            Error::DatabaseLockError.into_alert_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn non_empty_trims_value() {
        assert_eq!(non_empty("  Delta ", "airline"), Ok("Delta".to_owned()));
    }

    #[test]
    fn non_empty_rejects_whitespace() {
        assert_eq!(non_empty("\n\t ", "airline"), Err(Error::EmptyField("airline")));
    }

    #[test]
    fn maps_no_rows_to_not_found() {
        let error = Error::from(rusqlite::Error::QueryReturnedNoRows);

        assert_eq!(error, Error::NotFound);
    }
}
