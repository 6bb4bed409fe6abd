use serde::Deserialize;
use std::env;

// Главная структура конфигурации - контейнер для всех настроек.
// Ядро системы получает значения обычными аргументами конструкторов;
// чтение окружения нужно только демонстрационному бинарнику.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub app: AppConfig,
    pub hall: HallConfig,
    pub tickets: TicketsConfig,
}

// Настройки приложения
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub rust_log: String,
}

// Параметры кинозала
#[derive(Debug, Clone, Deserialize)]
pub struct HallConfig {
    pub name: String,
    pub rows: u32,
    pub seats_per_row: u32,
}

// Настройки выпуска билетов
#[derive(Debug, Clone, Deserialize)]
pub struct TicketsConfig {
    pub starting_counter: u64,
}

impl Config {
    pub fn from_env() -> Self {
        Config {
            app: AppConfig {
                rust_log: env::var("RUST_LOG")
                    .unwrap_or_else(|_| "cinema_ticket_system=debug".to_string()),
            },
            hall: HallConfig {
                name: env::var("HALL_NAME").unwrap_or_else(|_| "Большой зал".to_string()),
                rows: env::var("HALL_ROWS")
                    .unwrap_or_else(|_| "10".to_string())
                    .parse()
                    .expect("HALL_ROWS must be a valid number"),
                seats_per_row: env::var("HALL_SEATS_PER_ROW")
                    .unwrap_or_else(|_| "15".to_string())
                    .parse()
                    .expect("HALL_SEATS_PER_ROW must be a valid number"),
            },
            tickets: TicketsConfig {
                starting_counter: env::var("TICKET_STARTING_COUNTER")
                    .unwrap_or_else(|_| "1000".to_string())
                    .parse()
                    .expect("TICKET_STARTING_COUNTER must be a valid number"),
            },
        }
    }
}
