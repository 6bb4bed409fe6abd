use crate::models::{Seat, SeatStatus};
use thiserror::Error;

/// Класс ошибки: позволяет вызывающему отличить плохой запрос
/// от ссылки на несуществующий объект и от конфликта состояния.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    NotFound,
    Conflict,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TicketError {
    #[error("Название зала не может быть пустым")]
    EmptyHallName,

    #[error("Название фильма не может быть пустым")]
    EmptyTitle,

    #[error("Количество рядов и мест должно быть положительным")]
    InvalidLayout { rows: u32, seats_per_row: u32 },

    #[error("Неверное место: {0}")]
    InvalidSeat(Seat),

    #[error("Неверный номер ряда: {0}")]
    InvalidRow(u32),

    #[error("Неверный диапазон мест: {from}-{to}")]
    InvalidRange { from: u32, to: u32 },

    #[error("Сеанс не найден: {0}")]
    ScreeningNotFound(String),

    #[error("Билет не найден: {0}")]
    TicketNotFound(String),

    /// Место занято: несёт текущий статус, чтобы вызывающий мог
    /// среагировать без повторного запроса.
    #[error("Место уже {status}: {seat}")]
    SeatUnavailable { seat: Seat, status: SeatStatus },

    #[error("Билет уже отменен или подтвержден: {0}")]
    TicketInactive(String),

    #[error("Билет уже продан: {0}")]
    NotAReservation(String),
}

impl TicketError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            TicketError::EmptyHallName
            | TicketError::EmptyTitle
            | TicketError::InvalidLayout { .. }
            | TicketError::InvalidSeat(_)
            | TicketError::InvalidRow(_)
            | TicketError::InvalidRange { .. } => ErrorKind::Validation,
            TicketError::ScreeningNotFound(_) | TicketError::TicketNotFound(_) => {
                ErrorKind::NotFound
            }
            TicketError::SeatUnavailable { .. }
            | TicketError::TicketInactive(_)
            | TicketError::NotAReservation(_) => ErrorKind::Conflict,
        }
    }
}

pub type Result<T> = std::result::Result<T, TicketError>;
