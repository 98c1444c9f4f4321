//! The page for listing and cancelling tickets.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    Error, ReservationStore, endpoints,
    html::{LINK_STYLE, PAGE_CONTAINER_STYLE, base},
    navigation::NavBar,
    ticket::{
        TicketSummary,
        table::{TicketActions, tickets_table},
    },
};

/// Render every ticket, booked or cancelled, with a cancel button for booked ones.
pub async fn get_tickets_page(State(store): State<ReservationStore>) -> Result<Response, Error> {
    let tickets = store.list_tickets()?;

    Ok(tickets_view(&tickets).into_response())
}

fn tickets_view(tickets: &[TicketSummary]) -> Markup {
    let nav_bar = NavBar::new(endpoints::TICKETS_VIEW).into_html();

    let content = html!(
        (nav_bar)

        main class=(PAGE_CONTAINER_STYLE)
        {
            section class="w-full space-y-4"
            {
                header class="flex justify-between flex-wrap items-end lg:max-w-5xl lg:mx-auto"
                {
                    h1 class="text-xl font-bold" { "Tickets" }

                    a href=(endpoints::BOOK_VIEW) class=(LINK_STYLE) { "Book a Flight" }
                }

                (tickets_table(tickets, TicketActions::Cancel))
            }
        }
    );

    base("Manage Tickets", &[], &content)
}
