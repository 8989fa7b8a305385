//! Calendar labels in Brazilian Portuguese, the locale of the reference data.
//!
//! All helpers take the same `NaiveDate` the engine keys bookings by.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::Serialize;

const MONTHS: [&str; 12] = [
    "janeiro", "fevereiro", "março", "abril", "maio", "junho",
    "julho", "agosto", "setembro", "outubro", "novembro", "dezembro",
];

const MONTHS_SHORT: [&str; 12] = [
    "JAN", "FEV", "MAR", "ABR", "MAI", "JUN", "JUL", "AGO", "SET", "OUT", "NOV", "DEZ",
];

fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "segunda-feira",
        Weekday::Tue => "terça-feira",
        Weekday::Wed => "quarta-feira",
        Weekday::Thu => "quinta-feira",
        Weekday::Fri => "sexta-feira",
        Weekday::Sat => "sábado",
        Weekday::Sun => "domingo",
    }
}

fn month_index(date: NaiveDate) -> usize {
    date.month0() as usize
}

/// `10 de junho de 2024`
pub fn format_date_title(date: NaiveDate) -> String {
    format!("{} de {} de {}", date.day(), MONTHS[month_index(date)], date.year())
}

/// `Segunda-feira`
pub fn format_weekday(date: NaiveDate) -> String {
    let name = weekday_name(date.weekday());
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Day number and upper-case short month for the date badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayAndMonth {
    pub day: u32,
    pub month: &'static str,
}

pub fn day_and_month(date: NaiveDate) -> DayAndMonth {
    DayAndMonth {
        day: date.day(),
        month: MONTHS_SHORT[month_index(date)],
    }
}

/// `10/06`
pub fn format_short_date(date: NaiveDate) -> String {
    format!("{:02}/{:02}", date.day(), date.month())
}
