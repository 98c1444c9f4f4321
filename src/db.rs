/*! Sets up the application's SQLite database. */

use std::time::Duration;

use rusqlite::{Connection, Transaction, TransactionBehavior};

use crate::{
    Error, flight::create_flight_table, passenger::create_passenger_table,
    ticket::create_ticket_table,
};

/// How long a statement waits for another connection's write lock before failing.
pub const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Configure the connection and create the tables for the domain models.
///
/// Foreign key enforcement is switched on for `connection`, which SQLite
/// leaves off by default. Existing tables are left untouched.
///
/// # Errors
/// Returns an [Error::SqlError] if the connection cannot be configured or a table cannot be created.
pub fn initialize(connection: &Connection) -> Result<(), Error> {
    connection.pragma_update(None, "foreign_keys", true)?;
    connection.busy_timeout(BUSY_TIMEOUT)?;

    let transaction = Transaction::new_unchecked(connection, TransactionBehavior::Exclusive)?;

    create_passenger_table(&transaction)?;
    create_flight_table(&transaction)?;
    create_ticket_table(&transaction)?;

    transaction.commit()?;

    Ok(())
}

#[cfg(test)]
mod initialize_tests {
    use rusqlite::Connection;

    use super::initialize;

    #[test]
    fn can_initialize_twice() {
        let connection = Connection::open_in_memory().unwrap();

        assert_eq!(initialize(&connection), Ok(()));
        assert_eq!(initialize(&connection), Ok(()));
    }

    #[test]
    fn enables_foreign_keys() {
        let connection = Connection::open_in_memory().unwrap();
        initialize(&connection).unwrap();

        let foreign_keys: i64 = connection
            .query_row("PRAGMA foreign_keys", [], |row| row.get(0))
            .unwrap();

        assert_eq!(foreign_keys, 1);
    }

    #[test]
    fn ticket_requires_existing_flight() {
        let connection = Connection::open_in_memory().unwrap();
        initialize(&connection).unwrap();
        connection
            .execute(
                "INSERT INTO passenger (name, email) VALUES ('Alice', 'alice@x.com')",
                (),
            )
            .unwrap();

        let result = connection.execute(
            "INSERT INTO ticket (passenger_id, flight_id) VALUES (1, 42)",
            (),
        );

        assert!(result.is_err(), "want foreign key error, got {result:?}");
    }
}
