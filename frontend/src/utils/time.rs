use chrono::{DateTime, Local, NaiveDate, Utc};

/// Current date as the browser sees it; the log filter defaults to this.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Day-first timestamp rendering, keeping the wall-clock exactly as the
/// server reported it.
pub fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.format("%d/%m/%Y %H:%M:%S").to_string()
}

/// `HH:MM` for table cells.
pub fn format_clock(timestamp: &DateTime<Utc>) -> String {
    timestamp.format("%H:%M").to_string()
}
