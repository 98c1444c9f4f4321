use maud::{Markup, html};

use crate::{
    endpoints::{self, format_endpoint},
    flight::Flight,
    html::{
        BUTTON_DELETE_STYLE, TABLE_CELL_STYLE, TABLE_HEADER_STYLE, TABLE_ROW_STYLE, TABLE_STYLE,
        format_currency,
    },
};

/// Whether the flights table shows a button for removing each flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlightActions {
    None,
    Remove,
}

/// Render `flights` as a table, or a placeholder row if there are none.
pub fn flights_table(flights: &[Flight], actions: FlightActions) -> Markup {
    let column_count = if actions == FlightActions::Remove { 7 } else { 6 };

    let table_row = |flight: &Flight| {
        html!(
            tr class=(TABLE_ROW_STYLE) data-flight-id=(flight.id)
            {
                td class=(TABLE_CELL_STYLE) { (flight.id) }
                td class=(TABLE_CELL_STYLE) { (flight.airline) }
                td class=(TABLE_CELL_STYLE) { (flight.origin) " → " (flight.destination) }
                td class=(TABLE_CELL_STYLE) { (flight.departure_time) }
                td class=(TABLE_CELL_STYLE) { (flight.seats_available) }
                td class={(TABLE_CELL_STYLE) " tabular-nums"} { (format_currency(flight.price)) }

                @if actions == FlightActions::Remove {
                    td class=(TABLE_CELL_STYLE)
                    {
                        button
                            hx-delete=(format_endpoint(endpoints::DELETE_FLIGHT, flight.id))
                            hx-confirm={
                                "Are you sure you want to remove flight " (flight.id) " from "
                                (flight.origin) " to " (flight.destination) "?"
                            }
                            hx-target="closest tr"
                            hx-target-error="#alert-container"
                            hx-swap="delete"
                            class=(BUTTON_DELETE_STYLE)
                        {
                            "Remove"
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
                        th scope="col" class=(TABLE_CELL_STYLE) { "ID" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Airline" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Route" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Departure" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Seats Available" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Price" }

                        @if actions == FlightActions::Remove {
                            th scope="col" class=(TABLE_CELL_STYLE) { "Actions" }
                        }
                    }
                }

                tbody
                {
                    @for flight in flights {
                        (table_row(flight))
                    }

                    @if flights.is_empty() {
                        tr
                        {
                            td
                                colspan=(column_count)
                                class="px-6 py-4 text-center text-gray-500 dark:text-gray-400"
                            {
                                "No flights available."
                            }
                        }
                    }
                }
            }
        }
    )
}
