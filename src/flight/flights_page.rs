//! The page for adding and removing flights.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    Error, ReservationStore, endpoints,
    flight::{
        Flight,
        table::{FlightActions, flights_table},
    },
    html::{
        BUTTON_PRIMARY_STYLE, FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE, PAGE_CONTAINER_STYLE, base,
        dollar_input_styles, text_input,
    },
    navigation::NavBar,
};

/// Render the flight management page with every flight, including full ones.
pub async fn get_flights_page(State(store): State<ReservationStore>) -> Result<Response, Error> {
    let flights = store.list_all_flights()?;

    Ok(flights_view(&flights).into_response())
}

fn flights_view(flights: &[Flight]) -> Markup {
    let nav_bar = NavBar::new(endpoints::FLIGHTS_VIEW).into_html();

    let content = html!(
        (nav_bar)

        main class=(PAGE_CONTAINER_STYLE)
        {
            section class="w-full max-w-md mb-8"
            {
                h1 class="text-xl font-bold mb-4" { "Add a Flight" }
                (new_flight_form())
            }

            section class="w-full space-y-4"
            {
                h2 class="text-xl font-bold" { "All Flights" }
                (flights_table(flights, FlightActions::Remove))
            }
        }
    );

    base("Manage Flights", &[dollar_input_styles()], &content)
}

fn new_flight_form() -> Markup {
    html!(
        form
            hx-post=(endpoints::FLIGHTS_API)
            hx-target-error="#alert-container"
            class="w-full space-y-4 md:space-y-6"
        {
            (text_input("airline", "Airline", "Delta"))
            (text_input("origin", "Origin", "JFK"))
            (text_input("destination", "Destination", "LAX"))

            div
            {
                label for="departure_time" class=(FORM_LABEL_STYLE) { "Departure Time" }

                input
                    id="departure_time"
                    type="datetime-local"
                    name="departure_time"
                    required
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label for="seats" class=(FORM_LABEL_STYLE) { "Seats" }

                input
                    id="seats"
                    type="number"
                    name="seats"
                    min="1"
                    step="1"
                    value="1"
                    required
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label for="price" class=(FORM_LABEL_STYLE) { "Price" }

                div class="input-wrapper"
                {
                    input
                        id="price"
                        type="number"
                        name="price"
                        min="0"
                        step="0.01"
                        placeholder="0.00"
                        required
                        class=(FORM_TEXT_INPUT_STYLE);
                }
            }

            button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Add Flight" }
        }
    )
}
