pub mod chart;
pub mod config;
pub mod error;
pub mod models;
pub mod services;

pub use error::{ErrorKind, Result, TicketError};
pub use models::{Hall, Screening, Seat, SeatStatus, Ticket};
pub use services::TicketService;
