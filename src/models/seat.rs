use serde::{Deserialize, Serialize};
use std::fmt;

/// Место в зале: ряд + номер. Два места с одинаковыми координатами — одно место.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Seat {
    pub row: u32,
    pub number: u32,
}

impl Seat {
    pub fn new(row: u32, number: u32) -> Self {
        Self { row, number }
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ряд {}, Место {}", self.row, self.number)
    }
}

/// Статус места. Переходы между статусами делает только TicketService.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SeatStatus {
    Free,
    Reserved,
    Sold,
}

impl fmt::Display for SeatStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SeatStatus::Free => "свободно",
            SeatStatus::Reserved => "забронировано",
            SeatStatus::Sold => "продано",
        };
        f.write_str(s)
    }
}
