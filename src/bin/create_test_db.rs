use std::error::Error;
use std::path::Path;
use std::process::exit;

use clap::Parser;
use rusqlite::Connection;

use flight_desk::{BookingRequest, NewFlight, ReservationStore};

/// A utility for creating a test database for the flight_desk server.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to save the SQLite database to.
    #[arg(long, short)]
    output_path: String,
}

/// Airline, origin, destination, departure time, seats and price.
const FLIGHTS: [(&str, &str, &str, &str, i64, f64); 5] = [
    ("Delta", "JFK", "LAX", "2025-05-01T08:00", 3, 350.0),
    ("United", "SFO", "ORD", "2025-05-02T13:30", 2, 219.5),
    ("American", "DFW", "MIA", "2025-05-03T06:45", 1, 189.99),
    ("Alaska", "SEA", "ANC", "2025-05-04T17:15", 4, 275.0),
    ("JetBlue", "BOS", "FLL", "2025-05-05T10:00", 2, 149.0),
];

/// Create and populate a database for manual testing.
fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let output_path = Path::new(&args.output_path);

    match output_path.extension() {
        None => {
            eprintln!("Output path must include a file extension (e.g., 'flights.db').");
            exit(1);
        }
        Some(extension) if extension.is_empty() => {
            eprintln!("Output path must include a file extension (e.g., 'flights.db').");
            exit(1);
        }
        _ => {}
    }

    if output_path.is_file() {
        eprintln!("File already exists at {output_path:#?}!");
        exit(1);
    }

    println!("Creating database at {output_path:#?}");
    let store = ReservationStore::new(Connection::open(output_path)?)?;

    println!("Adding flights...");
    let mut flight_ids = Vec::with_capacity(FLIGHTS.len());

    for (airline, origin, destination, departure_time, seats, price) in FLIGHTS {
        let new_flight = NewFlight::new(airline, origin, destination, departure_time, seats, price)?;
        flight_ids.push(store.add_flight(new_flight)?.id);
    }

    println!("Booking tickets...");
    let alice = BookingRequest::new("Alice Example", "alice@example.com", flight_ids[0])?;
    let bob = BookingRequest::new("Bob Example", "bob@example.com", flight_ids[2])?;
    store.book_flight(&alice)?;
    let cancelled = store.book_flight(&bob)?;
    store.cancel_ticket(cancelled.id)?;

    println!("Success!");

    Ok(())
}
