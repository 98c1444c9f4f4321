//! Flight creation endpoint.

use axum::{
    Form,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_htmx::HxRedirect;

use crate::{
    ReservationStore, endpoints,
    flight::{FlightForm, NewFlight},
};

/// Handle the add flight form. Redirects to the flights page on success.
pub async fn create_flight_endpoint(
    State(store): State<ReservationStore>,
    Form(form): Form<FlightForm>,
) -> Response {
    let new_flight = match NewFlight::try_from(&form) {
        Ok(new_flight) => new_flight,
        Err(error) => return error.into_alert_response(),
    };

    match store.add_flight(new_flight) {
        Ok(_) => (
            HxRedirect(endpoints::FLIGHTS_VIEW.to_owned()),
            StatusCode::SEE_OTHER,
        )
            .into_response(),
        Err(error) => error.into_alert_response(),
    }
}
