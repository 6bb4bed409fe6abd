use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::Seat;

/// Билет: запись об одной продаже или брони места на сеанс.
/// Идентичность билета не зависит от его жизненного цикла:
/// отмененные и подтвержденные билеты остаются в системе для истории.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ticket {
    pub id: String,
    pub screening_id: String,
    pub seat: Seat,
    pub issued_at: DateTime<Utc>,
    pub active: bool,
    pub is_reservation: bool,
}

impl Ticket {
    pub(crate) fn new(
        id: String,
        screening_id: String,
        seat: Seat,
        is_reservation: bool,
    ) -> Self {
        Self {
            id,
            screening_id,
            seat,
            issued_at: Utc::now(),
            active: true,
            is_reservation,
        }
    }
}

impl fmt::Display for Ticket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if !self.active {
            "Недействителен"
        } else if self.is_reservation {
            "Забронирован"
        } else {
            "Продан"
        };
        write!(
            f,
            "Билет № {} | Сеанс: {} | {} | Статус: {}",
            self.id, self.screening_id, self.seat, status
        )
    }
}
