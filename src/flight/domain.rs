//! Core flight domain types.

use serde::{Deserialize, Serialize};

use crate::{Error, database_id::DatabaseId, error::non_empty};

/// Database identifier for a flight.
pub type FlightId = DatabaseId;

/// A scheduled flight with a finite number of seats.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Flight {
    /// The ID of the flight.
    pub id: FlightId,
    /// The airline operating the flight, e.g. "Delta".
    pub airline: String,
    /// Where the flight departs from, e.g. "JFK".
    pub origin: String,
    /// Where the flight arrives, e.g. "LAX".
    pub destination: String,
    /// When the flight departs. This is free text and is not parsed.
    pub departure_time: String,
    /// The number of seats that can still be booked. Never negative.
    pub seats_available: i64,
    /// The price of a ticket in dollars.
    pub price: f64,
}

/// The validated details for a flight that has not been added yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewFlight {
    pub(crate) airline: String,
    pub(crate) origin: String,
    pub(crate) destination: String,
    pub(crate) departure_time: String,
    pub(crate) seats: i64,
    pub(crate) price: f64,
}

impl NewFlight {
    /// Validate the details of a new flight.
    ///
    /// Text fields are trimmed.
    ///
    /// # Errors
    ///
    /// This function will return a:
    /// - [Error::EmptyField] if any of the text fields are empty,
    /// - [Error::InvalidSeatCount] if `seats` is less than one,
    /// - [Error::InvalidPrice] if `price` is negative or not a finite number.
    pub fn new(
        airline: &str,
        origin: &str,
        destination: &str,
        departure_time: &str,
        seats: i64,
        price: f64,
    ) -> Result<Self, Error> {
        let airline = non_empty(airline, "airline")?;
        let origin = non_empty(origin, "origin")?;
        let destination = non_empty(destination, "destination")?;
        let departure_time = non_empty(departure_time, "departure time")?;

        if seats < 1 {
            return Err(Error::InvalidSeatCount(seats));
        }

        if !price.is_finite() || price < 0.0 {
            return Err(Error::InvalidPrice(price));
        }

        Ok(Self {
            airline,
            origin,
            destination,
            departure_time,
            seats,
            price,
        })
    }
}

/// Form data for adding a flight.
#[derive(Debug, Serialize, Deserialize)]
pub struct FlightForm {
    /// The airline operating the flight.
    pub airline: String,
    /// The departure airport.
    pub origin: String,
    /// The arrival airport.
    pub destination: String,
    /// When the flight leaves, as entered.
    pub departure_time: String,
    /// How many seats the flight starts with.
    pub seats: i64,
    /// The ticket price in dollars.
    pub price: f64,
}

impl TryFrom<&FlightForm> for NewFlight {
    type Error = Error;

    fn try_from(form: &FlightForm) -> Result<Self, Self::Error> {
        NewFlight::new(
            &form.airline,
            &form.origin,
            &form.destination,
            &form.departure_time,
            form.seats,
            form.price,
        )
    }
}
