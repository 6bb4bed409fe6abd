use chrono::{TimeZone, Utc};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cinema_ticket_system::{config::Config, Hall, TicketService};

// Демонстрация работы системы: полный цикл продажа/бронь/подтверждение/отмена.
fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = Config::from_env();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.app.rust_log))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Cinema Ticket System demo");

    let ticket_system = TicketService::with_starting_ticket_counter(config.tickets.starting_counter);

    // Создаем кинозал и сеанс
    let hall = Hall::new(
        config.hall.name.clone(),
        config.hall.rows,
        config.hall.seats_per_row,
    )?;
    let screening = ticket_system.create_screening(
        "Мстители: Финал",
        hall,
        Utc.with_ymd_and_hms(2026, 5, 15, 18, 30, 0).single().expect("valid demo datetime"),
    )?;

    info!("Сеанс: {}", screening.title());
    info!(
        "Доступно свободных мест: {}",
        ticket_system.get_available_seats(screening.id())?.len()
    );

    // Покупаем билет
    let sold_ticket = ticket_system.buy_ticket(screening.id(), 5, 10)?;
    info!("Куплен билет: {}", sold_ticket);

    // Бронируем место и подтверждаем бронь
    let reserved_ticket = ticket_system.reserve_ticket(screening.id(), 5, 11)?;
    info!("Забронирован билет: {}", reserved_ticket);

    let confirmed_ticket = ticket_system.confirm_reservation(&reserved_ticket.id)?;
    info!("Подтвержден билет из брони: {}", confirmed_ticket);
    println!("{}", serde_json::to_string_pretty(&confirmed_ticket)?);

    // Отменяем купленный билет (возврат)
    ticket_system.cancel_ticket(&sold_ticket.id)?;
    info!("Отменен билет с id: {}", sold_ticket.id);

    // Покупаем несколько мест подряд
    let range_tickets = ticket_system.buy_tickets_in_range(screening.id(), 3, 2, 6)?;
    info!("Продано билетов в диапазоне: {}", range_tickets.len());

    info!(
        "Доступно свободных мест: {}",
        ticket_system.get_available_seats(screening.id())?.len()
    );

    info!("Купленные билеты:");
    for ticket in ticket_system.get_all_active_tickets() {
        info!("{}", ticket.id);
    }

    // Схема зала
    println!("{}", ticket_system.seating_chart(screening.id())?);

    Ok(())
}
