//! Схема зала в виде псевдографики. Только чтение, состояние не меняет.

use std::fmt::Write;

use crate::models::{Screening, Seat, SeatStatus};

/// Отображение статуса в символ схемы. Полное по вариантам:
/// новый статус не скомпилируется без символа.
fn symbol(status: SeatStatus) -> char {
    match status {
        SeatStatus::Free => '.',
        SeatStatus::Sold => '█',
        SeatStatus::Reserved => 'R',
    }
}

/// Строит схему мест сеанса: заголовок с номерами мест и строка на
/// каждый ряд. Места вне планировки здесь невозможны — обход идет
/// строго по размерам зала.
pub fn seating_chart(screening: &Screening) -> String {
    let hall = screening.hall();
    let mut out = String::new();

    out.push_str("       ");
    for number in 1..=hall.seats_per_row() {
        let _ = write!(out, "{:<3} ", number);
    }
    out.push('\n');

    for row in 1..=hall.rows() {
        let _ = write!(out, "{:<5} ", row);
        for number in 1..=hall.seats_per_row() {
            let status = screening
                .seat_status(Seat::new(row, number))
                .unwrap_or(SeatStatus::Free);
            let _ = write!(out, "{:<3} ", symbol(status));
        }
        out.push('\n');
    }

    out
}
