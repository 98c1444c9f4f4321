//! Booking and cancelling tickets.
//!
//! Both operations change a flight's seat count and a ticket in the same
//! transaction, so a failure part way through leaves the database as it was.

use rusqlite::{Connection, TransactionBehavior};
use serde::Deserialize;

use crate::{
    Error,
    flight::{FlightId, get_flight},
    passenger::{NewPassenger, find_or_create_passenger},
    ticket::{Ticket, TicketId, TicketStatus, get_ticket},
};

/// A validated request to book one seat on a flight.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingRequest {
    /// Who the ticket is for.
    pub passenger: NewPassenger,
    /// The flight to take a seat on.
    pub flight_id: FlightId,
}

impl BookingRequest {
    /// Validate the passenger's details for a booking.
    ///
    /// # Errors
    /// Returns the validation errors of [NewPassenger::new].
    pub fn new(name: &str, email: &str, flight_id: FlightId) -> Result<Self, Error> {
        Ok(Self {
            passenger: NewPassenger::new(name, email)?,
            flight_id,
        })
    }
}

/// Form data for booking a flight.
#[derive(Debug, Deserialize)]
pub struct BookingForm {
    /// The passenger's full name.
    pub name: String,
    /// The passenger's email address.
    pub email: String,
    /// The flight to book.
    pub flight_id: FlightId,
}

impl TryFrom<&BookingForm> for BookingRequest {
    type Error = Error;

    fn try_from(form: &BookingForm) -> Result<Self, Self::Error> {
        BookingRequest::new(&form.name, &form.email, form.flight_id)
    }
}

/// Book a seat on a flight and issue a ticket for it.
///
/// The passenger is looked up by email and created if they have not booked
/// before. The seat is taken with a conditional update, so two bookings
/// racing for the last seat cannot both succeed.
///
/// # Errors
/// This function will return a:
/// - [Error::FlightNotFound] if the flight does not exist,
/// - [Error::FlightFull] if the flight has no seats left,
/// - [Error::SqlError] if there is some other SQL error.
pub fn book_flight(request: &BookingRequest, connection: &mut Connection) -> Result<Ticket, Error> {
    let transaction = connection.transaction_with_behavior(TransactionBehavior::Immediate)?;

    get_flight(request.flight_id, &transaction)?;

    let seats_taken = transaction.execute(
        "UPDATE flight SET seats_available = seats_available - 1
        WHERE id = ?1 AND seats_available > 0",
        [request.flight_id],
    )?;

    if seats_taken == 0 {
        return Err(Error::FlightFull(request.flight_id));
    }

    let passenger = find_or_create_passenger(&request.passenger, &transaction)?;

    transaction.execute(
        "INSERT INTO ticket (passenger_id, flight_id, status) VALUES (?1, ?2, ?3)",
        (passenger.id, request.flight_id, TicketStatus::Booked),
    )?;

    let ticket = Ticket {
        id: transaction.last_insert_rowid(),
        passenger_id: passenger.id,
        flight_id: request.flight_id,
        status: TicketStatus::Booked,
    };

    transaction.commit()?;

    Ok(ticket)
}

/// Cancel a booked ticket and give its seat back to the flight.
///
/// # Errors
/// This function will return a:
/// - [Error::TicketNotFound] if the ticket does not exist,
/// - [Error::TicketAlreadyCancelled] if the ticket was cancelled before,
/// - [Error::SqlError] if there is some other SQL error.
pub fn cancel_ticket(ticket_id: TicketId, connection: &mut Connection) -> Result<Ticket, Error> {
    let transaction = connection.transaction_with_behavior(TransactionBehavior::Immediate)?;

    let mut ticket = get_ticket(ticket_id, &transaction)?;

    if ticket.status == TicketStatus::Cancelled {
        return Err(Error::TicketAlreadyCancelled(ticket_id));
    }

    transaction.execute(
        "UPDATE ticket SET status = ?1 WHERE id = ?2",
        (TicketStatus::Cancelled, ticket_id),
    )?;
    transaction.execute(
        "UPDATE flight SET seats_available = seats_available + 1 WHERE id = ?1",
        [ticket.flight_id],
    )?;

    transaction.commit()?;

    ticket.status = TicketStatus::Cancelled;

    Ok(ticket)
}
