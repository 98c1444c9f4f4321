//! Database operations for flights.

use rusqlite::{Connection, Row, TransactionBehavior};

use crate::{
    Error,
    flight::{Flight, FlightId, NewFlight},
};

/// Create the flight table.
///
/// The seat count and price can never be negative, even if a statement
/// bypasses the checks in this module.
pub fn create_flight_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS flight (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            airline TEXT NOT NULL,
            origin TEXT NOT NULL,
            destination TEXT NOT NULL,
            departure_time TEXT NOT NULL,
            seats_available INTEGER NOT NULL CHECK (seats_available >= 0),
            price REAL NOT NULL CHECK (price >= 0)
        )",
        (),
    )?;

    Ok(())
}

/// Add a flight and return it with its generated ID.
///
/// All of the flight's seats start out available.
pub fn add_flight(new_flight: NewFlight, connection: &Connection) -> Result<Flight, Error> {
    connection.execute(
        "INSERT INTO flight (airline, origin, destination, departure_time, seats_available, price)
        VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        (
            &new_flight.airline,
            &new_flight.origin,
            &new_flight.destination,
            &new_flight.departure_time,
            new_flight.seats,
            new_flight.price,
        ),
    )?;

    let id = connection.last_insert_rowid();

    Ok(Flight {
        id,
        airline: new_flight.airline,
        origin: new_flight.origin,
        destination: new_flight.destination,
        departure_time: new_flight.departure_time,
        seats_available: new_flight.seats,
        price: new_flight.price,
    })
}

/// Retrieve a single flight by ID.
///
/// # Errors
/// Returns [Error::FlightNotFound] if there is no flight with `flight_id`.
pub fn get_flight(flight_id: FlightId, connection: &Connection) -> Result<Flight, Error> {
    connection
        .prepare(
            "SELECT id, airline, origin, destination, departure_time, seats_available, price
            FROM flight WHERE id = :id",
        )?
        .query_row(&[(":id", &flight_id)], map_row)
        .map_err(|error| match error {
            rusqlite::Error::QueryReturnedNoRows => Error::FlightNotFound(flight_id),
            error => error.into(),
        })
}

/// Retrieve the flights that have at least one seat available, ordered by ID.
pub fn get_available_flights(connection: &Connection) -> Result<Vec<Flight>, Error> {
    connection
        .prepare(
            "SELECT id, airline, origin, destination, departure_time, seats_available, price
            FROM flight WHERE seats_available > 0 ORDER BY id ASC",
        )?
        .query_map([], map_row)?
        .map(|maybe_flight| maybe_flight.map_err(Error::from))
        .collect()
}

/// Retrieve every flight, including full flights, ordered by ID.
pub fn get_all_flights(connection: &Connection) -> Result<Vec<Flight>, Error> {
    connection
        .prepare(
            "SELECT id, airline, origin, destination, departure_time, seats_available, price
            FROM flight ORDER BY id ASC",
        )?
        .query_map([], map_row)?
        .map(|maybe_flight| maybe_flight.map_err(Error::from))
        .collect()
}

/// Remove a flight.
///
/// A flight that any ticket refers to, booked or cancelled, is kept so that
/// the ticket history stays intact.
///
/// # Errors
/// This function will return a:
/// - [Error::FlightHasTickets] if a ticket refers to the flight,
/// - [Error::FlightNotFound] if there is no flight with `flight_id`,
/// - [Error::SqlError] if there is some other SQL error.
pub fn remove_flight(flight_id: FlightId, connection: &mut Connection) -> Result<(), Error> {
    let transaction = connection.transaction_with_behavior(TransactionBehavior::Immediate)?;

    let ticket_count: i64 = transaction.query_row(
        "SELECT COUNT(id) FROM ticket WHERE flight_id = ?1",
        [flight_id],
        |row| row.get(0),
    )?;

    if ticket_count > 0 {
        return Err(Error::FlightHasTickets(flight_id));
    }

    let rows_affected = transaction.execute("DELETE FROM flight WHERE id = ?1", [flight_id])?;

    if rows_affected == 0 {
        return Err(Error::FlightNotFound(flight_id));
    }

    transaction.commit()?;

    Ok(())
}

fn map_row(row: &Row) -> Result<Flight, rusqlite::Error> {
    Ok(Flight {
        id: row.get(0)?,
        airline: row.get(1)?,
        origin: row.get(2)?,
        destination: row.get(3)?,
        departure_time: row.get(4)?,
        seats_available: row.get(5)?,
        price: row.get(6)?,
    })
}
