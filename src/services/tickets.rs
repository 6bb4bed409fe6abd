use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::{debug, info};

use crate::chart;
use crate::error::{Result, TicketError};
use crate::models::{Hall, Screening, Seat, SeatStatus, Ticket};

/// Начальное значение счетчика билетов: первый билет получает id T1001.
const TICKET_COUNTER_SEED: u64 = 1000;

/// Оркестратор системы: владеет всеми сеансами и билетами и является
/// единственным писателем статусов мест и флагов активности билетов.
///
/// Каждый сеанс живет под собственным RwLock, поэтому операции над
/// разными сеансами идут параллельно, а операции над одним сеансом
/// линеаризуются: проверка статуса места и его изменение — одна
/// критическая секция, двойная продажа невозможна. Порядок захвата
/// при касании обоих реестров всегда один: сначала сеанс, затем
/// реестр билетов.
pub struct TicketService {
    screenings: RwLock<HashMap<String, Arc<RwLock<Screening>>>>,
    tickets: RwLock<HashMap<String, Ticket>>,
    ticket_counter: AtomicU64,
    screening_counter: AtomicU64,
}

impl TicketService {
    pub fn new() -> Self {
        Self::with_starting_ticket_counter(TICKET_COUNTER_SEED)
    }

    /// Стартовое значение счетчика задается при создании системы,
    /// дальше счетчик только растет: id билетов никогда не переиспользуются.
    pub fn with_starting_ticket_counter(seed: u64) -> Self {
        Self {
            screenings: RwLock::new(HashMap::new()),
            tickets: RwLock::new(HashMap::new()),
            ticket_counter: AtomicU64::new(seed),
            screening_counter: AtomicU64::new(0),
        }
    }

    fn next_ticket_id(&self) -> String {
        format!("T{}", self.ticket_counter.fetch_add(1, Ordering::SeqCst) + 1)
    }

    fn screening_handle(&self, screening_id: &str) -> Result<Arc<RwLock<Screening>>> {
        self.screenings
            .read()
            .get(screening_id)
            .cloned()
            .ok_or_else(|| TicketError::ScreeningNotFound(screening_id.to_string()))
    }

    /// Создает новый киносеанс: все места свободны.
    pub fn create_screening(
        &self,
        title: impl Into<String>,
        hall: Hall,
        starts_at: DateTime<Utc>,
    ) -> Result<Screening> {
        let id = format!(
            "S{}",
            self.screening_counter.fetch_add(1, Ordering::SeqCst) + 1
        );
        let screening = Screening::new(id.clone(), title.into(), hall, starts_at)?;
        self.screenings
            .write()
            .insert(id.clone(), Arc::new(RwLock::new(screening.clone())));
        info!(
            "🎬 Создан сеанс {}: «{}», мест {}",
            id,
            screening.title(),
            screening.hall().capacity()
        );
        Ok(screening)
    }

    fn issue_ticket(
        &self,
        screening_id: &str,
        row: u32,
        number: u32,
        is_reservation: bool,
    ) -> Result<Ticket> {
        let handle = self.screening_handle(screening_id)?;
        let mut screening = handle.write();

        let seat = Seat::new(row, number);
        let status = screening.seat_status(seat)?;
        if status != SeatStatus::Free {
            return Err(TicketError::SeatUnavailable { seat, status });
        }

        let ticket_id = self.next_ticket_id();
        let ticket = Ticket::new(
            ticket_id.clone(),
            screening_id.to_string(),
            seat,
            is_reservation,
        );
        let new_status = if is_reservation {
            SeatStatus::Reserved
        } else {
            SeatStatus::Sold
        };
        screening.set_seat_status(seat, new_status)?;
        self.tickets.write().insert(ticket_id, ticket.clone());

        debug!(
            "🎟 Билет {} ({}): сеанс {}, {}",
            ticket.id,
            if is_reservation { "бронь" } else { "продажа" },
            screening_id,
            seat
        );
        Ok(ticket)
    }

    /// Покупка билета на указанное место.
    pub fn buy_ticket(&self, screening_id: &str, row: u32, number: u32) -> Result<Ticket> {
        self.issue_ticket(screening_id, row, number, false)
    }

    /// Бронирование места: временное удержание, превращается в продажу
    /// через `confirm_reservation`.
    pub fn reserve_ticket(&self, screening_id: &str, row: u32, number: u32) -> Result<Ticket> {
        self.issue_ticket(screening_id, row, number, true)
    }

    /// Подтверждение брони. Выпускает НОВЫЙ проданный билет с новым id,
    /// бронь помечается недействительной и остается в системе для истории.
    /// Дальнейшие операции идут по id нового билета.
    pub fn confirm_reservation(&self, ticket_id: &str) -> Result<Ticket> {
        let screening_id = self.ticket_screening_id(ticket_id)?;
        let handle = self.screening_handle(&screening_id)?;
        let mut screening = handle.write();
        let mut tickets = self.tickets.write();

        let reservation = tickets
            .get(ticket_id)
            .ok_or_else(|| TicketError::TicketNotFound(ticket_id.to_string()))?;
        if !reservation.active {
            return Err(TicketError::TicketInactive(ticket_id.to_string()));
        }
        if !reservation.is_reservation {
            return Err(TicketError::NotAReservation(ticket_id.to_string()));
        }
        let seat = reservation.seat;

        let sold_id = self.next_ticket_id();
        let sold = Ticket::new(sold_id.clone(), screening_id.clone(), seat, false);

        if let Some(reservation) = tickets.get_mut(ticket_id) {
            reservation.active = false;
        }
        screening.set_seat_status(seat, SeatStatus::Sold)?;
        tickets.insert(sold_id, sold.clone());

        info!(
            "✅ Бронь {} подтверждена: выпущен билет {} (сеанс {}, {})",
            ticket_id, sold.id, screening_id, seat
        );
        Ok(sold)
    }

    /// Отмена билета: возврат продажи или снятие брони. Место снова
    /// свободно, билет недействителен. Повторная отмена — конфликт.
    pub fn cancel_ticket(&self, ticket_id: &str) -> Result<()> {
        let screening_id = self.ticket_screening_id(ticket_id)?;
        let handle = self.screening_handle(&screening_id)?;
        let mut screening = handle.write();
        let mut tickets = self.tickets.write();

        let ticket = tickets
            .get(ticket_id)
            .ok_or_else(|| TicketError::TicketNotFound(ticket_id.to_string()))?;
        if !ticket.active {
            return Err(TicketError::TicketInactive(ticket_id.to_string()));
        }
        let seat = ticket.seat;

        screening.set_seat_status(seat, SeatStatus::Free)?;
        if let Some(ticket) = tickets.get_mut(ticket_id) {
            ticket.active = false;
        }

        info!("↩️ Билет {} отменен, место {} снова свободно", ticket_id, seat);
        Ok(())
    }

    /// Свободные места сеанса в порядке планировки (ряд за рядом).
    pub fn get_available_seats(&self, screening_id: &str) -> Result<Vec<Seat>> {
        let handle = self.screening_handle(screening_id)?;
        let screening = handle.read();
        Ok(screening.available_seats())
    }

    /// Все действующие билеты по всем сеансам.
    pub fn get_all_active_tickets(&self) -> Vec<Ticket> {
        let tickets = self.tickets.read();
        let mut active: Vec<Ticket> = tickets.values().filter(|t| t.active).cloned().collect();
        active.sort_by(|a, b| a.id.cmp(&b.id));
        active
    }

    /// Места ряда в диапазоне номеров, с валидацией ряда и диапазона.
    pub fn get_seats_in_range(
        &self,
        screening_id: &str,
        row: u32,
        from_seat: u32,
        to_seat: u32,
    ) -> Result<Vec<Seat>> {
        let handle = self.screening_handle(screening_id)?;
        let screening = handle.read();
        screening.seats_in_range(row, from_seat, to_seat)
    }

    /// Продажа свободных мест диапазона. Занятые места молча
    /// пропускаются: это частичный успех по контракту, вызывающий
    /// обязан смотреть на количество возвращенных билетов.
    pub fn buy_tickets_in_range(
        &self,
        screening_id: &str,
        row: u32,
        from_seat: u32,
        to_seat: u32,
    ) -> Result<Vec<Ticket>> {
        let handle = self.screening_handle(screening_id)?;
        let mut screening = handle.write();
        let seats = screening.seats_in_range(row, from_seat, to_seat)?;

        let mut tickets = self.tickets.write();
        let mut sold = Vec::new();
        for seat in seats {
            if screening.seat_status(seat)? != SeatStatus::Free {
                continue;
            }
            let ticket_id = self.next_ticket_id();
            let ticket = Ticket::new(ticket_id.clone(), screening_id.to_string(), seat, false);
            screening.set_seat_status(seat, SeatStatus::Sold)?;
            tickets.insert(ticket_id, ticket.clone());
            sold.push(ticket);
        }

        info!(
            "🎟 Продажа диапазона: сеанс {}, ряд {}, места {}-{}, продано {}",
            screening_id,
            row,
            from_seat,
            to_seat,
            sold.len()
        );
        Ok(sold)
    }

    /// Снимок сеанса по id.
    pub fn get_screening(&self, screening_id: &str) -> Result<Screening> {
        let handle = self.screening_handle(screening_id)?;
        let screening = handle.read();
        Ok(screening.clone())
    }

    /// Снимки всех сеансов, по возрастанию id.
    pub fn screenings(&self) -> Vec<Screening> {
        let screenings = self.screenings.read();
        let mut all: Vec<Screening> = screenings.values().map(|s| s.read().clone()).collect();
        all.sort_by(|a, b| a.id().cmp(b.id()));
        all
    }

    /// Билет по id, включая недействительные.
    pub fn get_ticket(&self, ticket_id: &str) -> Result<Ticket> {
        self.tickets
            .read()
            .get(ticket_id)
            .cloned()
            .ok_or_else(|| TicketError::TicketNotFound(ticket_id.to_string()))
    }

    /// Схема зала для сеанса в виде псевдографики.
    pub fn seating_chart(&self, screening_id: &str) -> Result<String> {
        let handle = self.screening_handle(screening_id)?;
        let screening = handle.read();
        Ok(chart::seating_chart(&screening))
    }

    fn ticket_screening_id(&self, ticket_id: &str) -> Result<String> {
        self.tickets
            .read()
            .get(ticket_id)
            .map(|t| t.screening_id.clone())
            .ok_or_else(|| TicketError::TicketNotFound(ticket_id.to_string()))
    }
}

impl Default for TicketService {
    fn default() -> Self {
        Self::new()
    }
}
