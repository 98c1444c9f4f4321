//! Flights and their seat inventory.

mod create;
mod db;
mod delete;
mod domain;
mod flights_page;
mod table;

pub use create::create_flight_endpoint;
pub use db::{
    add_flight, create_flight_table, get_all_flights, get_available_flights, get_flight,
    remove_flight,
};
pub use delete::delete_flight_endpoint;
pub use domain::{Flight, FlightForm, FlightId, NewFlight};
pub use flights_page::get_flights_page;
pub use table::{FlightActions, flights_table};
