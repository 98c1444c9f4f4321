use maud::{Markup, html};

use crate::{
    endpoints::{self, format_endpoint},
    html::{
        BOOKED_BADGE_STYLE, BUTTON_DELETE_STYLE, CANCELLED_BADGE_STYLE, TABLE_CELL_STYLE,
        TABLE_HEADER_STYLE, TABLE_ROW_STYLE, TABLE_STYLE,
    },
    ticket::{TicketStatus, TicketSummary},
};

/// Whether the tickets table shows a cancel button for booked tickets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TicketActions {
    None,
    Cancel,
}

fn status_badge(status: TicketStatus) -> Markup {
    let style = match status {
        TicketStatus::Booked => BOOKED_BADGE_STYLE,
        TicketStatus::Cancelled => CANCELLED_BADGE_STYLE,
    };

    html!(span class=(style) { (status.as_str()) })
}

/// Render `tickets` as a table, or a placeholder row if there are none.
pub fn tickets_table(tickets: &[TicketSummary], actions: TicketActions) -> Markup {
    let column_count = if actions == TicketActions::Cancel { 5 } else { 4 };

    let table_row = |ticket: &TicketSummary| {
        html!(
            tr class=(TABLE_ROW_STYLE) data-ticket-id=(ticket.ticket_id)
            {
                td class=(TABLE_CELL_STYLE) { (ticket.ticket_id) }
                td class=(TABLE_CELL_STYLE) { (ticket.passenger_name) }
                td class=(TABLE_CELL_STYLE)
                {
                    (ticket.airline) ": " (ticket.origin) " → " (ticket.destination)
                }
                td class=(TABLE_CELL_STYLE) { (status_badge(ticket.status)) }

                @if actions == TicketActions::Cancel {
                    td class=(TABLE_CELL_STYLE)
                    {
                        @if ticket.status == TicketStatus::Booked {
                            button
                                hx-post=(format_endpoint(endpoints::CANCEL_TICKET, ticket.ticket_id))
                                hx-confirm={
                                    "Are you sure you want to cancel ticket " (ticket.ticket_id)
                                    " for " (ticket.passenger_name) "?"
                                }
                                hx-target-error="#alert-container"
                                class=(BUTTON_DELETE_STYLE)
                            {
                                "Cancel"
                            }
                        }
                    }
                }
            }
        )
    };

    html!(
        section class="dark:bg-gray-800 lg:max-w-5xl w-full lg:mx-auto overflow-x-auto"
        {
            table class=(TABLE_STYLE)
            {
                thead class=(TABLE_HEADER_STYLE)
                {
                    tr
                    {
                        th scope="col" class=(TABLE_CELL_STYLE) { "Ticket" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Passenger" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Flight" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Status" }

                        @if actions == TicketActions::Cancel {
                            th scope="col" class=(TABLE_CELL_STYLE) { "Actions" }
                        }
                    }
                }

                tbody
                {
                    @for ticket in tickets {
                        (table_row(ticket))
                    }

                    @if tickets.is_empty() {
                        tr
                        {
                            td
                                colspan=(column_count)
                                class="px-6 py-4 text-center text-gray-500 dark:text-gray-400"
                            {
                                "No tickets booked."
                            }
                        }
                    }
                }
            }
        }
    )
}
