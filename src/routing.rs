//! Application router configuration.

use axum::{
    Router,
    response::Redirect,
    routing::{delete, get, post},
};

use crate::{
    AppState,
    data_page::get_data_page,
    endpoints,
    error_pages::{get_404_not_found, get_internal_server_error_page},
    flight::{create_flight_endpoint, delete_flight_endpoint, get_flights_page},
    ticket::{book_ticket_endpoint, cancel_ticket_endpoint, get_book_page, get_tickets_page},
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    let pages = Router::new()
        .route(endpoints::ROOT, get(get_index_page))
        .route(endpoints::BOOK_VIEW, get(get_book_page))
        .route(endpoints::FLIGHTS_VIEW, get(get_flights_page))
        .route(endpoints::TICKETS_VIEW, get(get_tickets_page))
        .route(endpoints::DATA_VIEW, get(get_data_page))
        .route(
            endpoints::INTERNAL_ERROR_VIEW,
            get(get_internal_server_error_page),
        );

    let api = Router::new()
        .route(endpoints::FLIGHTS_API, post(create_flight_endpoint))
        .route(endpoints::DELETE_FLIGHT, delete(delete_flight_endpoint))
        .route(endpoints::TICKETS_API, post(book_ticket_endpoint))
        .route(endpoints::CANCEL_TICKET, post(cancel_ticket_endpoint));

    pages
        .merge(api)
        .fallback(get_404_not_found)
        .with_state(state)
}

/// The root path '/' redirects to the booking page.
async fn get_index_page() -> Redirect {
    Redirect::to(endpoints::BOOK_VIEW)
}
