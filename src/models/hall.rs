use serde::{Deserialize, Serialize};

use crate::error::{Result, TicketError};
use crate::models::Seat;

/// Кинозал: название и размеры. Поставляется фабрикой зала,
/// используется только при создании сеанса.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hall {
    name: String,
    rows: u32,
    seats_per_row: u32,
}

impl Hall {
    pub fn new(name: impl Into<String>, rows: u32, seats_per_row: u32) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(TicketError::EmptyHallName);
        }
        if rows == 0 || seats_per_row == 0 {
            return Err(TicketError::InvalidLayout {
                rows,
                seats_per_row,
            });
        }
        Ok(Self {
            name,
            rows,
            seats_per_row,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn seats_per_row(&self) -> u32 {
        self.seats_per_row
    }

    pub fn capacity(&self) -> usize {
        (self.rows as usize) * (self.seats_per_row as usize)
    }

    /// Все места зала в порядке обхода: ряд за рядом, места по возрастанию.
    /// Возвращает новый список, внутреннее состояние менять нельзя.
    pub fn all_seats(&self) -> Vec<Seat> {
        let mut seats = Vec::with_capacity(self.capacity());
        for row in 1..=self.rows {
            for number in 1..=self.seats_per_row {
                seats.push(Seat::new(row, number));
            }
        }
        seats
    }

    pub fn contains(&self, seat: Seat) -> bool {
        (1..=self.rows).contains(&seat.row) && (1..=self.seats_per_row).contains(&seat.number)
    }
}
