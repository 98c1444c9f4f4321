//! Core ticket domain types and queries.

use std::{fmt::Display, str::FromStr};

use rusqlite::{
    Connection, Row, ToSql,
    types::{FromSql, FromSqlError, FromSqlResult, ToSqlOutput, ValueRef},
};
use serde::{Deserialize, Serialize};

use crate::{Error, database_id::DatabaseId, flight::FlightId, passenger::PassengerId};

/// Database identifier for a ticket.
pub type TicketId = DatabaseId;

/// Where a ticket is in its lifecycle.
///
/// A ticket starts out [TicketStatus::Booked] and can only move to
/// [TicketStatus::Cancelled], which is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Hash)]
pub enum TicketStatus {
    /// The ticket holds a seat on its flight.
    Booked,
    /// The ticket's seat has been returned to the flight.
    Cancelled,
}

impl TicketStatus {
    /// The status as it is stored in the database and shown to users.
    pub fn as_str(&self) -> &'static str {
        match self {
            TicketStatus::Booked => "Booked",
            TicketStatus::Cancelled => "Cancelled",
        }
    }
}

impl Display for TicketStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The text stored in the status column was not a known ticket status.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("\"{0}\" is not a valid ticket status")]
pub struct InvalidTicketStatus(String);

impl FromStr for TicketStatus {
    type Err = InvalidTicketStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Booked" => Ok(TicketStatus::Booked),
            "Cancelled" => Ok(TicketStatus::Cancelled),
            other => Err(InvalidTicketStatus(other.to_owned())),
        }
    }
}

impl ToSql for TicketStatus {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

impl FromSql for TicketStatus {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        value
            .as_str()?
            .parse()
            .map_err(|error| FromSqlError::Other(Box::new(error)))
    }
}

/// A booking that links one passenger to one flight.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ticket {
    /// The ID of the ticket.
    pub id: TicketId,
    /// The passenger holding the ticket.
    pub passenger_id: PassengerId,
    /// The flight the ticket is for.
    pub flight_id: FlightId,
    /// Whether the ticket still holds a seat.
    pub status: TicketStatus,
}

/// A ticket joined with its passenger and flight, for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TicketSummary {
    /// The ticket's ID.
    pub ticket_id: TicketId,
    /// The name of the passenger holding the ticket.
    pub passenger_name: String,
    /// The airline operating the flight.
    pub airline: String,
    /// Where the flight departs from.
    pub origin: String,
    /// Where the flight lands.
    pub destination: String,
    /// Whether the ticket is booked or cancelled.
    pub status: TicketStatus,
}

/// Create the ticket table.
///
/// Flights cannot be deleted while a ticket refers to them.
pub fn create_ticket_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute_batch(
        "CREATE TABLE IF NOT EXISTS ticket (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            passenger_id INTEGER NOT NULL,
            flight_id INTEGER NOT NULL,
            status TEXT NOT NULL DEFAULT 'Booked' CHECK (status IN ('Booked', 'Cancelled')),
            FOREIGN KEY(passenger_id) REFERENCES passenger(id),
            FOREIGN KEY(flight_id) REFERENCES flight(id) ON DELETE RESTRICT
        );

        CREATE INDEX IF NOT EXISTS idx_ticket_flight_id ON ticket(flight_id);",
    )?;

    Ok(())
}

/// Retrieve a single ticket by ID.
///
/// # Errors
/// Returns [Error::TicketNotFound] if there is no ticket with `ticket_id`.
pub fn get_ticket(ticket_id: TicketId, connection: &Connection) -> Result<Ticket, Error> {
    connection
        .prepare("SELECT id, passenger_id, flight_id, status FROM ticket WHERE id = :id")?
        .query_row(&[(":id", &ticket_id)], map_row)
        .map_err(|error| match error {
            rusqlite::Error::QueryReturnedNoRows => Error::TicketNotFound(ticket_id),
            error => error.into(),
        })
}

/// Retrieve every ticket with its passenger's name and flight details, ordered by ticket ID.
///
/// Tickets whose passenger or flight no longer exists are left out.
pub fn get_ticket_summaries(connection: &Connection) -> Result<Vec<TicketSummary>, Error> {
    connection
        .prepare(
            "SELECT t.id, p.name, f.airline, f.origin, f.destination, t.status
            FROM ticket t
            INNER JOIN passenger p ON t.passenger_id = p.id
            INNER JOIN flight f ON t.flight_id = f.id
            ORDER BY t.id ASC",
        )?
        .query_map([], |row| {
            Ok(TicketSummary {
                ticket_id: row.get(0)?,
                passenger_name: row.get(1)?,
                airline: row.get(2)?,
                origin: row.get(3)?,
                destination: row.get(4)?,
                status: row.get(5)?,
            })
        })?
        .map(|maybe_summary| maybe_summary.map_err(Error::from))
        .collect()
}

fn map_row(row: &Row) -> Result<Ticket, rusqlite::Error> {
    Ok(Ticket {
        id: row.get(0)?,
        passenger_id: row.get(1)?,
        flight_id: row.get(2)?,
        status: row.get(3)?,
    })
}


#[cfg(test)]
mod ticket_query_tests {
    use rusqlite::Connection;

    use crate::{
        Error,
        db::initialize,
        ticket::{Ticket, TicketStatus, TicketSummary, get_ticket, get_ticket_summaries},
    };

    fn get_test_connection() -> Connection {
        let connection = Connection::open_in_memory().unwrap();
        initialize(&connection).expect("Could not initialize database");
        connection
            .execute_batch(
                "INSERT INTO passenger (name, email) VALUES ('Alice', 'alice@x.com');
                INSERT INTO passenger (name, email) VALUES ('Bob', 'bob@x.com');
                INSERT INTO flight (airline, origin, destination, departure_time, seats_available, price)
                    VALUES ('Delta', 'JFK', 'LAX', '2024-05-01T08:00', 2, 350.0);
                INSERT INTO ticket (passenger_id, flight_id) VALUES (1, 1);
                INSERT INTO ticket (passenger_id, flight_id, status) VALUES (2, 1, 'Cancelled');",
            )
            .expect("Could not insert test data");
        connection
    }

    #[test]
    fn ticket_status_defaults_to_booked() {
        let connection = get_test_connection();

        let ticket = get_ticket(1, &connection);

        assert_eq!(
            ticket,
            Ok(Ticket {
                id: 1,
                passenger_id: 1,
                flight_id: 1,
                status: TicketStatus::Booked,
            })
        );
    }

    #[test]
    fn get_ticket_with_invalid_id_returns_ticket_not_found() {
        let connection = get_test_connection();

        assert_eq!(get_ticket(42, &connection), Err(Error::TicketNotFound(42)));
    }

    #[test]
    fn summaries_join_passenger_and_flight() {
        let connection = get_test_connection();

        let summaries = get_ticket_summaries(&connection).unwrap();

        assert_eq!(
            summaries,
            vec![
                TicketSummary {
                    ticket_id: 1,
                    passenger_name: "Alice".to_owned(),
                    airline: "Delta".to_owned(),
                    origin: "JFK".to_owned(),
                    destination: "LAX".to_owned(),
                    status: TicketStatus::Booked,
                },
                TicketSummary {
                    ticket_id: 2,
                    passenger_name: "Bob".to_owned(),
                    airline: "Delta".to_owned(),
                    origin: "JFK".to_owned(),
                    destination: "LAX".to_owned(),
                    status: TicketStatus::Cancelled,
                },
            ]
        );
    }

    #[test]
    fn summaries_are_empty_without_tickets() {
        let connection = Connection::open_in_memory().unwrap();
        initialize(&connection).unwrap();

        assert_eq!(get_ticket_summaries(&connection), Ok(vec![]));
    }
}
