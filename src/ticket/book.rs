//! Ticket booking endpoint.

use axum::{
    Form,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_htmx::HxRedirect;

use crate::{
    ReservationStore, endpoints,
    ticket::{BookingForm, BookingRequest},
};

/// Handle the booking form. Redirects to the tickets page on success.
pub async fn book_ticket_endpoint(
    State(store): State<ReservationStore>,
    Form(form): Form<BookingForm>,
) -> Response {
    let request = match BookingRequest::try_from(&form) {
        Ok(request) => request,
        Err(error) => return error.into_alert_response(),
    };

    match store.book_flight(&request) {
        Ok(_) => (
            HxRedirect(endpoints::TICKETS_VIEW.to_owned()),
            StatusCode::SEE_OTHER,
        )
            .into_response(),
        Err(error) => error.into_alert_response(),
    }
}
