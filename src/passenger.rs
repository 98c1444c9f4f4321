//! Code for creating the passenger table and finding passengers by email.

use std::str::FromStr;

use email_address::EmailAddress;
use rusqlite::{Connection, OptionalExtension, Row};
use serde::Serialize;

use crate::{Error, database_id::DatabaseId, error::non_empty};

/// Database identifier for a passenger.
pub type PassengerId = DatabaseId;

/// A person who has booked at least one ticket.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Passenger {
    /// The passenger's ID in the application database.
    pub id: PassengerId,
    /// The passenger's name as entered on their first booking.
    pub name: String,
    /// The passenger's email address, unique across all passengers.
    pub email: String,
}

/// The validated details of a passenger making a booking.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPassenger {
    name: String,
    email: EmailAddress,
}

impl NewPassenger {
    /// Validate the details of a passenger.
    ///
    /// # Errors
    ///
    /// Returns an [Error::EmptyField] if `name` or `email` is empty, or an
    /// [Error::InvalidEmail] if `email` is not a valid email address.
    pub fn new(name: &str, email: &str) -> Result<Self, Error> {
        let name = non_empty(name, "name")?;
        let email = non_empty(email, "email")?;
        let email = EmailAddress::from_str(&email).map_err(|_| Error::InvalidEmail(email))?;

        Ok(Self { name, email })
    }

    /// The passenger's trimmed name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The passenger's validated email address.
    pub fn email(&self) -> &EmailAddress {
        &self.email
    }
}

/// Create the passenger table.
///
/// Emails are compared case-insensitively so that "Alice@X.com" and
/// "alice@x.com" refer to the same passenger.
pub fn create_passenger_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS passenger (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            email TEXT NOT NULL UNIQUE COLLATE NOCASE
        )",
        (),
    )?;

    Ok(())
}

/// Get the passenger with `email`, inserting a new passenger if there is none.
///
/// An existing passenger is returned unchanged, i.e. the name in
/// `new_passenger` is ignored if the email is already known.
///
/// # Errors
///
/// Returns an [Error::SqlError] if there is an SQL error.
pub fn find_or_create_passenger(
    new_passenger: &NewPassenger,
    connection: &Connection,
) -> Result<Passenger, Error> {
    let email = new_passenger.email().to_string();

    let existing = connection
        .query_row(
            "SELECT id, name, email FROM passenger WHERE email = ?1",
            (&email,),
            map_row,
        )
        .optional()?;

    if let Some(passenger) = existing {
        return Ok(passenger);
    }

    connection.execute(
        "INSERT INTO passenger (name, email) VALUES (?1, ?2)",
        (new_passenger.name(), &email),
    )?;

    Ok(Passenger {
        id: connection.last_insert_rowid(),
        name: new_passenger.name().to_owned(),
        email,
    })
}

/// Count the passengers in the database.
pub fn count_passengers(connection: &Connection) -> Result<i64, Error> {
    connection
        .query_row("SELECT COUNT(id) FROM passenger", [], |row| row.get(0))
        .map_err(Error::from)
}

fn map_row(row: &Row) -> Result<Passenger, rusqlite::Error> {
    Ok(Passenger {
        id: row.get(0)?,
        name: row.get(1)?,
        email: row.get(2)?,
    })
}
