pub mod tickets;

pub use tickets::TicketService;
