//! Ticket cancellation endpoint.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_htmx::HxRedirect;

use crate::{ReservationStore, endpoints, ticket::TicketId};

/// Handle ticket cancellation. Redirects to the tickets page on success so
/// the status and seat counts are shown fresh.
pub async fn cancel_ticket_endpoint(
    Path(ticket_id): Path<TicketId>,
    State(store): State<ReservationStore>,
) -> Response {
    match store.cancel_ticket(ticket_id) {
        Ok(_) => (
            HxRedirect(endpoints::TICKETS_VIEW.to_owned()),
            StatusCode::SEE_OTHER,
        )
            .into_response(),
        Err(error) => error.into_alert_response(),
    }
}
