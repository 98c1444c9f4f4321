//! Flight Desk is a web app for managing airline flights and booking tickets.
//!
//! This library provides the reservation store, which keeps seat counts
//! consistent under concurrent bookings, and an HTTP server that directly
//! serves HTML pages for it.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum_server::Handle;
use tokio::signal;

mod alert;
mod app_state;
mod data_page;
mod database_id;
mod db;
mod endpoints;
mod error;
mod error_pages;
mod flight;
mod html;
mod logging;
mod navigation;
mod passenger;
mod routing;
mod store;
mod ticket;

#[cfg(test)]
mod test_utils;

pub use app_state::AppState;
pub use database_id::DatabaseId;
pub use db::initialize as initialize_db;
pub use error::{Error, ErrorKind};
pub use flight::{Flight, FlightId, NewFlight};
pub use logging::{LOG_BODY_LENGTH_LIMIT, logging_middleware};
pub use passenger::{NewPassenger, Passenger, PassengerId};
pub use routing::build_router;
pub use store::ReservationStore;
pub use ticket::{BookingRequest, Ticket, TicketId, TicketStatus, TicketSummary};

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        if let Err(error) = signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {error}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(error) => {
                tracing::error!("failed to install terminate signal handler: {error}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
        },
    }

    handle.graceful_shutdown(Some(Duration::from_secs(1)));
}
