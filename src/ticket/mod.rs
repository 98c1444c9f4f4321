//! Tickets, booking and cancellation.

mod book;
mod book_page;
mod booking;
mod cancel;
mod domain;
mod table;
mod tickets_page;

pub use book::book_ticket_endpoint;
pub use book_page::get_book_page;
pub use booking::{BookingForm, BookingRequest, book_flight, cancel_ticket};
pub use cancel::cancel_ticket_endpoint;
pub use domain::{
    Ticket, TicketId, TicketStatus, TicketSummary, create_ticket_table, get_ticket,
    get_ticket_summaries,
};
pub use table::{TicketActions, tickets_table};
pub use tickets_page::get_tickets_page;
