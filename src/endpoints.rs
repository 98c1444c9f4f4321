//! The API endpoints URIs.
//!
//! For endpoints that take a parameter, e.g., '/api/flights/{flight_id}', use [format_endpoint].

/// The root route which redirects to the booking page.
pub const ROOT: &str = "/";
/// The page for booking a ticket on an available flight.
pub const BOOK_VIEW: &str = "/book";
/// The page for adding and removing flights.
pub const FLIGHTS_VIEW: &str = "/flights";
/// The page for listing and cancelling tickets.
pub const TICKETS_VIEW: &str = "/tickets";
/// The read-only page listing all flights and tickets.
pub const DATA_VIEW: &str = "/data";
/// The page to display when an internal server error occurs.
pub const INTERNAL_ERROR_VIEW: &str = "/error";

/// The route to add a flight.
pub const FLIGHTS_API: &str = "/api/flights";
/// The route to remove a flight.
pub const DELETE_FLIGHT: &str = "/api/flights/{flight_id}";
/// The route to book a ticket.
pub const TICKETS_API: &str = "/api/tickets";
/// The route to cancel a ticket.
pub const CANCEL_TICKET: &str = "/api/tickets/{ticket_id}/cancel";

/// Replace the parameter in `endpoint_path` with `id`.
///
/// A parameter is a string that starts with a left brace, followed by
/// lowercase letters or underscores, and ends with a right brace.
/// For example, in the endpoint path '/api/flights/{flight_id}', '{flight_id}' is the parameter.
///
/// This function assumes that an endpoint path only contains ASCII characters
/// and a single parameter.
///
/// If no parameter is found in `endpoint_path`, the function returns the
/// the original `endpoint_path`.
pub fn format_endpoint(endpoint_path: &str, id: i64) -> String {
    let param_start = match endpoint_path.find('{') {
        Some(start) => start,
        None => return endpoint_path.to_string(),
    };

    let param_end = endpoint_path[param_start..]
        .find('}')
        .map(|end| param_start + end + 1)
        .unwrap_or(endpoint_path.len());

    format!(
        "{}{}{}",
        &endpoint_path[..param_start],
        id,
        &endpoint_path[param_end..]
    )
}
