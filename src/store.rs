//! The reservation store shared by every request handler.

use std::sync::{Arc, Mutex, MutexGuard};

use axum::extract::FromRef;
use rusqlite::Connection;

use crate::{
    AppState, Error, ErrorKind,
    db::initialize,
    flight::{
        self, Flight, FlightId, NewFlight, get_all_flights, get_available_flights, get_flight,
    },
    passenger::count_passengers,
    ticket::{self, BookingRequest, Ticket, TicketId, TicketSummary, get_ticket},
};

/// Flights, passengers and tickets backed by a single SQLite connection.
///
/// Cloning the store is cheap and every clone refers to the same connection.
/// Each operation holds the connection for its whole duration, and the
/// operations that write more than one row do so in a single transaction.
#[derive(Debug, Clone)]
pub struct ReservationStore {
    connection: Arc<Mutex<Connection>>,
}

impl ReservationStore {
    /// Create a store from an open connection, creating the tables if needed.
    ///
    /// # Errors
    /// Returns an [Error::SqlError] if the database could not be initialized.
    pub fn new(connection: Connection) -> Result<Self, Error> {
        initialize(&connection)?;

        Ok(Self {
            connection: Arc::new(Mutex::new(connection)),
        })
    }

    /// The flights that still have at least one seat, ordered by ID.
    pub fn list_available_flights(&self) -> Result<Vec<Flight>, Error> {
        get_available_flights(&*self.lock()?)
            .inspect_err(|error| tracing::error!("could not list available flights: {error}"))
    }

    /// Every flight including full ones, ordered by ID.
    pub fn list_all_flights(&self) -> Result<Vec<Flight>, Error> {
        get_all_flights(&*self.lock()?)
            .inspect_err(|error| tracing::error!("could not list flights: {error}"))
    }

    /// A single flight, or [Error::FlightNotFound].
    pub fn get_flight(&self, flight_id: FlightId) -> Result<Flight, Error> {
        get_flight(flight_id, &*self.lock()?)
    }

    /// Add a flight with all of its seats available.
    pub fn add_flight(&self, new_flight: NewFlight) -> Result<Flight, Error> {
        let result = flight::add_flight(new_flight, &*self.lock()?);
        log_outcome("add flight", &result);

        if let Ok(flight) = &result {
            tracing::info!(
                "added flight {} from {} to {} with {} seats",
                flight.id,
                flight.origin,
                flight.destination,
                flight.seats_available
            );
        }

        result
    }

    /// Remove a flight that no ticket refers to.
    pub fn remove_flight(&self, flight_id: FlightId) -> Result<(), Error> {
        let result = flight::remove_flight(flight_id, &mut *self.lock()?);
        log_outcome("remove flight", &result);

        if result.is_ok() {
            tracing::info!("removed flight {flight_id}");
        }

        result
    }

    /// Book one seat on a flight for a passenger.
    pub fn book_flight(&self, request: &BookingRequest) -> Result<Ticket, Error> {
        let result = ticket::book_flight(request, &mut *self.lock()?);
        log_outcome("book flight", &result);

        if let Ok(ticket) = &result {
            tracing::info!(
                "booked ticket {} on flight {} for passenger {}",
                ticket.id,
                ticket.flight_id,
                ticket.passenger_id
            );
        }

        result
    }

    /// Cancel a booked ticket and return its seat to the flight.
    pub fn cancel_ticket(&self, ticket_id: TicketId) -> Result<Ticket, Error> {
        let result = ticket::cancel_ticket(ticket_id, &mut *self.lock()?);
        log_outcome("cancel ticket", &result);

        if let Ok(ticket) = &result {
            tracing::info!(
                "cancelled ticket {} on flight {}",
                ticket.id,
                ticket.flight_id
            );
        }

        result
    }

    /// Every ticket with its passenger's name and flight details, ordered by ticket ID.
    pub fn list_tickets(&self) -> Result<Vec<TicketSummary>, Error> {
        ticket::get_ticket_summaries(&*self.lock()?)
            .inspect_err(|error| tracing::error!("could not list tickets: {error}"))
    }

    /// A single ticket, or [Error::TicketNotFound].
    pub fn get_ticket(&self, ticket_id: TicketId) -> Result<Ticket, Error> {
        get_ticket(ticket_id, &*self.lock()?)
    }

    /// The number of distinct passengers who have booked a ticket.
    pub fn count_passengers(&self) -> Result<i64, Error> {
        count_passengers(&*self.lock()?)
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>, Error> {
        self.connection
            .lock()
            .inspect_err(|error| tracing::error!("could not acquire database lock: {error}"))
            .map_err(|_| Error::DatabaseLockError)
    }
}

fn log_outcome<T>(operation: &str, result: &Result<T, Error>) {
    if let Err(error) = result {
        match error.kind() {
            ErrorKind::Storage => tracing::error!("could not {operation}: {error}"),
            _ => tracing::warn!("rejected request to {operation}: {error}"),
        }
    }
}

impl FromRef<AppState> for ReservationStore {
    fn from_ref(state: &AppState) -> Self {
        state.store.clone()
    }
}

#[cfg(test)]
mod reservation_store_tests {
    use std::thread;

    use rusqlite::Connection;

    use crate::{
        Error, ReservationStore,
        flight::NewFlight,
        ticket::{BookingRequest, TicketStatus, TicketSummary},
    };

    fn get_test_store() -> ReservationStore {
        let connection = Connection::open_in_memory().unwrap();
        ReservationStore::new(connection).expect("Could not create store")
    }

    fn new_flight(airline: &str, origin: &str, destination: &str, seats: i64) -> NewFlight {
        NewFlight::new(airline, origin, destination, "2024-05-01T08:00", seats, 350.0).unwrap()
    }

    #[test]
    fn books_and_lists_ticket() {
        let store = get_test_store();
        let flight = store.add_flight(new_flight("Delta", "JFK", "LAX", 2)).unwrap();

        let ticket = store
            .book_flight(&BookingRequest::new("Alice", "alice@x.com", flight.id).unwrap())
            .unwrap();

        assert_eq!(ticket.status, TicketStatus::Booked);
        assert_eq!(store.get_flight(flight.id).unwrap().seats_available, 1);
        assert_eq!(
            store.list_tickets(),
            Ok(vec![TicketSummary {
                ticket_id: ticket.id,
                passenger_name: "Alice".to_owned(),
                airline: "Delta".to_owned(),
                origin: "JFK".to_owned(),
                destination: "LAX".to_owned(),
                status: TicketStatus::Booked,
            }])
        );
    }

    #[test]
    fn add_book_cancel_walkthrough() {
        let store = get_test_store();

        let flight = store
            .add_flight(NewFlight::new("Delta", "JFK", "LAX", "2024-05-01T08:00", 2, 350.0).unwrap())
            .unwrap();
        assert_eq!((flight.id, flight.seats_available), (1, 2));

        let ticket = store
            .book_flight(&BookingRequest::new("Alice", "alice@x.com", 1).unwrap())
            .unwrap();
        assert_eq!((ticket.id, ticket.status), (1, TicketStatus::Booked));
        assert_eq!(store.get_flight(1).unwrap().seats_available, 1);

        let ticket = store.cancel_ticket(1).unwrap();
        assert_eq!((ticket.id, ticket.status), (1, TicketStatus::Cancelled));
        assert_eq!(store.get_flight(1).unwrap().seats_available, 2);
    }

    #[test]
    fn full_flight_drops_out_of_available_flights() {
        let store = get_test_store();
        let full = store.add_flight(new_flight("Delta", "JFK", "LAX", 1)).unwrap();
        let open = store.add_flight(new_flight("United", "SFO", "ORD", 1)).unwrap();
        store
            .book_flight(&BookingRequest::new("Alice", "alice@x.com", full.id).unwrap())
            .unwrap();

        let available = store.list_available_flights().unwrap();
        let all = store.list_all_flights().unwrap();

        assert_eq!(available, vec![open]);
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].seats_available, 0);
    }

    #[test]
    fn cancelled_ticket_stays_listed() {
        let store = get_test_store();
        let flight = store.add_flight(new_flight("Delta", "JFK", "LAX", 1)).unwrap();
        let ticket = store
            .book_flight(&BookingRequest::new("Alice", "alice@x.com", flight.id).unwrap())
            .unwrap();

        store.cancel_ticket(ticket.id).unwrap();

        let tickets = store.list_tickets().unwrap();
        assert_eq!(tickets.len(), 1);
        assert_eq!(tickets[0].status, TicketStatus::Cancelled);
        assert_eq!(store.get_flight(flight.id).unwrap().seats_available, 1);
    }

    #[test]
    fn cannot_remove_flight_with_cancelled_ticket() {
        let store = get_test_store();
        let flight = store.add_flight(new_flight("Delta", "JFK", "LAX", 1)).unwrap();
        let ticket = store
            .book_flight(&BookingRequest::new("Alice", "alice@x.com", flight.id).unwrap())
            .unwrap();
        store.cancel_ticket(ticket.id).unwrap();

        let result = store.remove_flight(flight.id);

        assert_eq!(result, Err(Error::FlightHasTickets(flight.id)));
    }

    #[test]
    fn removed_flight_is_no_longer_listed() {
        let store = get_test_store();
        let flight = store.add_flight(new_flight("Delta", "JFK", "LAX", 1)).unwrap();

        store.remove_flight(flight.id).unwrap();

        assert_eq!(store.list_all_flights(), Ok(vec![]));
        assert_eq!(store.get_flight(flight.id), Err(Error::FlightNotFound(flight.id)));
    }

    #[test]
    fn seats_never_go_negative_over_many_bookings_and_cancellations() {
        let store = get_test_store();
        let flight = store.add_flight(new_flight("Delta", "JFK", "LAX", 2)).unwrap();
        let mut booked = Vec::new();

        for i in 0..5 {
            let request =
                BookingRequest::new("Passenger", &format!("p{i}@x.com"), flight.id).unwrap();

            match store.book_flight(&request) {
                Ok(ticket) => booked.push(ticket.id),
                Err(error) => assert_eq!(error, Error::FlightFull(flight.id)),
            }

            let seats_available = store.get_flight(flight.id).unwrap().seats_available;
            assert!(seats_available >= 0);
            assert_eq!(seats_available, 2 - booked.len() as i64);

            if i % 2 == 1 {
                if let Some(ticket_id) = booked.pop() {
                    store.cancel_ticket(ticket_id).unwrap();
                }
            }
        }
    }

    #[test]
    fn concurrent_bookings_for_last_seat_only_one_succeeds() {
        let store = get_test_store();
        let flight = store.add_flight(new_flight("Delta", "JFK", "LAX", 1)).unwrap();

        let handles = ["alice@x.com", "bob@x.com"].map(|email| {
            let store = store.clone();
            let request = BookingRequest::new("Passenger", email, flight.id).unwrap();

            thread::spawn(move || store.book_flight(&request))
        });

        let results = handles
            .into_iter()
            .map(|handle| handle.join().expect("booking thread panicked"))
            .collect::<Vec<_>>();

        let successes = results.iter().filter(|result| result.is_ok()).count();
        let full = results
            .iter()
            .filter(|result| **result == Err(Error::FlightFull(flight.id)))
            .count();
        assert_eq!(successes, 1, "want exactly one booking, got {results:?}");
        assert_eq!(full, 1, "want exactly one FlightFull, got {results:?}");
        assert_eq!(store.get_flight(flight.id).unwrap().seats_available, 0);
    }

    #[test]
    fn bookings_from_separate_connections_never_oversell() {
        let db_path =
            std::env::temp_dir().join(format!("flight_desk_oversell_{}.db", std::process::id()));
        let _ = std::fs::remove_file(&db_path);

        let store = ReservationStore::new(Connection::open(&db_path).unwrap()).unwrap();
        let flight = store.add_flight(new_flight("Delta", "JFK", "LAX", 1)).unwrap();

        let stores = (0..8)
            .map(|_| ReservationStore::new(Connection::open(&db_path).unwrap()).unwrap())
            .collect::<Vec<_>>();
        let handles = stores
            .into_iter()
            .enumerate()
            .map(|(i, store)| {
                let request =
                    BookingRequest::new("Passenger", &format!("passenger{i}@x.com"), flight.id)
                        .unwrap();

                thread::spawn(move || store.book_flight(&request))
            })
            .collect::<Vec<_>>();

        let results = handles
            .into_iter()
            .map(|handle| handle.join().expect("booking thread panicked"))
            .collect::<Vec<_>>();

        let successes = results.iter().filter(|result| result.is_ok()).count();
        assert_eq!(successes, 1, "want exactly one booking, got {results:?}");
        assert!(
            results
                .iter()
                .all(|result| result.is_ok() || *result == Err(Error::FlightFull(flight.id))),
            "want the other bookings to fail with FlightFull, got {results:?}"
        );
        assert_eq!(store.get_flight(flight.id).unwrap().seats_available, 0);

        drop(store);
        let _ = std::fs::remove_file(&db_path);
    }

    #[test]
    fn reopening_store_keeps_existing_data() {
        let connection = Connection::open_in_memory().unwrap();
        crate::db::initialize(&connection).unwrap();
        connection
            .execute(
                "INSERT INTO flight (airline, origin, destination, departure_time, seats_available, price)
                VALUES ('Delta', 'JFK', 'LAX', '08:00', 3, 100.0)",
                (),
            )
            .unwrap();

        let store = ReservationStore::new(connection).unwrap();

        assert_eq!(store.list_all_flights().unwrap().len(), 1);
    }
}
