//! A read-only view of everything in the reservation store.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    Error, ReservationStore, endpoints,
    flight::{Flight, FlightActions, flights_table},
    html::{PAGE_CONTAINER_STYLE, base},
    navigation::NavBar,
    ticket::{TicketActions, TicketStatus, TicketSummary, tickets_table},
};

/// Render all flights and all tickets without any actions.
pub async fn get_data_page(State(store): State<ReservationStore>) -> Result<Response, Error> {
    let flights = store.list_all_flights()?;
    let tickets = store.list_tickets()?;
    let passenger_count = store.count_passengers()?;

    Ok(data_view(&flights, &tickets, passenger_count).into_response())
}

fn data_view(flights: &[Flight], tickets: &[TicketSummary], passenger_count: i64) -> Markup {
    let nav_bar = NavBar::new(endpoints::DATA_VIEW).into_html();
    let booked_seats = tickets
        .iter()
        .filter(|ticket| ticket.status == TicketStatus::Booked)
        .count();

    let content = html!(
        (nav_bar)

        main class=(PAGE_CONTAINER_STYLE)
        {
            section class="w-full space-y-4 mb-8"
            {
                h1 class="text-xl font-bold" { "Flights" }
                (flights_table(flights, FlightActions::None))
            }

            section class="w-full space-y-4"
            {
                h2 class="text-xl font-bold" { "Tickets" }

                p id="ticket-stats" class="text-sm text-gray-600 dark:text-gray-400"
                {
                    (booked_seats) " booked ticket(s) across "
                    (passenger_count) " passenger(s)."
                }

                (tickets_table(tickets, TicketActions::None))
            }
        }
    );

    base("View Data", &[], &content)
}
