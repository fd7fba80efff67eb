pub mod config;
pub mod file;
pub mod stdin;

use chrono::{Local, NaiveDate};

/// Start date for schedules: the flag if given, otherwise today.
pub fn start_date_or_today(date: Option<NaiveDate>) -> NaiveDate {
    date.unwrap_or_else(|| Local::now().date_naive())
}
