//! The page for booking a ticket on an available flight.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    Error, ReservationStore, endpoints,
    flight::{Flight, FlightActions, flights_table},
    html::{
        BUTTON_PRIMARY_STYLE, FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE, PAGE_CONTAINER_STYLE, base,
        format_currency, text_input,
    },
    navigation::NavBar,
};

/// Render the booking page. Only flights with seats left can be booked.
pub async fn get_book_page(State(store): State<ReservationStore>) -> Result<Response, Error> {
    let flights = store.list_available_flights()?;

    Ok(book_view(&flights).into_response())
}

fn book_view(flights: &[Flight]) -> Markup {
    let nav_bar = NavBar::new(endpoints::BOOK_VIEW).into_html();

    let content = html!(
        (nav_bar)

        main class=(PAGE_CONTAINER_STYLE)
        {
            section class="w-full space-y-4 mb-8"
            {
                h1 class="text-xl font-bold" { "Available Flights" }
                (flights_table(flights, FlightActions::None))
            }

            @if !flights.is_empty() {
                section class="w-full max-w-md"
                {
                    h2 class="text-xl font-bold mb-4" { "Book a Ticket" }
                    (booking_form(flights))
                }
            }
        }
    );

    base("Book a Flight", &[], &content)
}

fn booking_form(flights: &[Flight]) -> Markup {
    html!(
        form
            hx-post=(endpoints::TICKETS_API)
            hx-target-error="#alert-container"
            class="w-full space-y-4 md:space-y-6"
        {
            (text_input("name", "Name", "Jane Doe"))

            div
            {
                label for="email" class=(FORM_LABEL_STYLE) { "Email" }

                input
                    id="email"
                    type="email"
                    name="email"
                    placeholder="jane@example.com"
                    required
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label for="flight_id" class=(FORM_LABEL_STYLE) { "Flight" }

                select
                    id="flight_id"
                    name="flight_id"
                    required
                    class=(FORM_TEXT_INPUT_STYLE)
                {
                    @for flight in flights {
                        option value=(flight.id)
                        {
                            (flight.airline) ": " (flight.origin) " → " (flight.destination)
                            " (" (flight.departure_time) ") " (format_currency(flight.price))
                        }
                    }
                }
            }

            button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Book Ticket" }
        }
    )
}
