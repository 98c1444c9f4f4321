//! Flight removal endpoint.

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
};

use crate::{ReservationStore, alert::Alert, flight::FlightId};

/// Handle flight removal. Returns a success alert or an error alert.
pub async fn delete_flight_endpoint(
    Path(flight_id): Path<FlightId>,
    State(store): State<ReservationStore>,
) -> Response {
    match store.remove_flight(flight_id) {
        Ok(()) => Alert::SuccessSimple {
            message: format!("Flight {flight_id} removed"),
        }
        .into_response(),
        Err(error) => error.into_alert_response(),
    }
}
