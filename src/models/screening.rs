use chrono::{DateTime, Utc};
use std::collections::HashMap;

use crate::error::{Result, TicketError};
use crate::models::{Hall, Seat, SeatStatus};

/// Киносеанс. Владеет картой статусов всех мест зала и отвергает
/// координаты вне планировки. Статусы меняет только TicketService.
#[derive(Debug, Clone)]
pub struct Screening {
    id: String,
    title: String,
    hall: Hall,
    starts_at: DateTime<Utc>,
    seat_status: HashMap<Seat, SeatStatus>,
}

impl Screening {
    pub(crate) fn new(
        id: String,
        title: String,
        hall: Hall,
        starts_at: DateTime<Utc>,
    ) -> Result<Self> {
        if title.trim().is_empty() {
            return Err(TicketError::EmptyTitle);
        }
        // Каждое место планировки получает запись со статусом FREE.
        let seat_status = hall
            .all_seats()
            .into_iter()
            .map(|seat| (seat, SeatStatus::Free))
            .collect();
        Ok(Self {
            id,
            title,
            hall,
            starts_at,
            seat_status,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn hall(&self) -> &Hall {
        &self.hall
    }

    pub fn starts_at(&self) -> DateTime<Utc> {
        self.starts_at
    }

    fn validate_seat(&self, seat: Seat) -> Result<()> {
        if self.hall.contains(seat) {
            Ok(())
        } else {
            Err(TicketError::InvalidSeat(seat))
        }
    }

    /// Статус места. Координата вне планировки — ошибка валидации,
    /// даже если запись в карте почему-то есть.
    pub fn seat_status(&self, seat: Seat) -> Result<SeatStatus> {
        self.validate_seat(seat)?;
        Ok(self
            .seat_status
            .get(&seat)
            .copied()
            .unwrap_or(SeatStatus::Free))
    }

    pub(crate) fn set_seat_status(&mut self, seat: Seat, status: SeatStatus) -> Result<()> {
        self.validate_seat(seat)?;
        self.seat_status.insert(seat, status);
        Ok(())
    }

    fn seats_with_status(&self, wanted: SeatStatus) -> Vec<Seat> {
        // Обход через планировку, а не через HashMap: порядок
        // ряд за рядом, стабильный между вызовами.
        self.hall
            .all_seats()
            .into_iter()
            .filter(|seat| self.seat_status.get(seat) == Some(&wanted))
            .collect()
    }

    pub fn available_seats(&self) -> Vec<Seat> {
        self.seats_with_status(SeatStatus::Free)
    }

    pub fn reserved_seats(&self) -> Vec<Seat> {
        self.seats_with_status(SeatStatus::Reserved)
    }

    pub fn sold_seats(&self) -> Vec<Seat> {
        self.seats_with_status(SeatStatus::Sold)
    }

    /// Места ряда `row` с номерами из `[from_seat, to_seat]`.
    /// Ряд вне зала, перевернутый или выходящий за планировку
    /// диапазон — ошибка валидации.
    pub fn seats_in_range(&self, row: u32, from_seat: u32, to_seat: u32) -> Result<Vec<Seat>> {
        if row < 1 || row > self.hall.rows() {
            return Err(TicketError::InvalidRow(row));
        }
        if from_seat < 1 || to_seat > self.hall.seats_per_row() || from_seat > to_seat {
            return Err(TicketError::InvalidRange {
                from: from_seat,
                to: to_seat,
            });
        }
        Ok((from_seat..=to_seat)
            .map(|number| Seat::new(row, number))
            .collect())
    }
}
