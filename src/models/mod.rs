pub mod hall;
pub mod screening;
pub mod seat;
pub mod ticket;

pub use hall::Hall;
pub use screening::Screening;
pub use seat::{Seat, SeatStatus};
pub use ticket::Ticket;
