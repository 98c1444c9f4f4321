//! Implements a struct that holds the state of the server.

use rusqlite::Connection;

use crate::{Error, ReservationStore};

/// The state of the server.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The flights, passengers and tickets.
    pub store: ReservationStore,
}

impl AppState {
    /// Create a new [AppState] with a SQLite database connection.
    ///
    /// This function will initialize the database by adding the tables for the domain models.
    ///
    /// # Errors
    /// Returns an error if the database cannot be initialized.
    pub fn new(db_connection: Connection) -> Result<Self, Error> {
        Ok(Self {
            store: ReservationStore::new(db_connection)?,
        })
    }
}
