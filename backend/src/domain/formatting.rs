//! US-style display helpers for dates, times and money.
//!
//! Values that cannot be parsed are returned unchanged so a screen never
//! shows less than what was stored.

use chrono::NaiveTime;

use crate::domain::record_store::parse_date_time;

/// `"2024-01-05"` becomes `"January 5, 2024"`
pub fn format_date(value: &str) -> String {
    match parse_date_time(value) {
        Some(parsed) => parsed.format("%B %-d, %Y").to_string(),
        None => value.to_string(),
    }
}

/// `"14:30"` becomes `"02:30:00 PM"`; full timestamps use their time part
pub fn format_time(value: &str) -> String {
    let trimmed = value.trim();
    let time = NaiveTime::parse_from_str(trimmed, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M"))
        .ok()
        .or_else(|| parse_date_time(trimmed).map(|parsed| parsed.time()));

    match time {
        Some(time) => time.format("%I:%M:%S %p").to_string(),
        None => value.to_string(),
    }
}

/// `1234.5` becomes `"$1,234.50"`, `-12.0` becomes `"-$12.00"`.
/// Non-finite amounts display as zero, matching how totals treat them.
pub fn format_currency(amount: f64) -> String {
    let amount = if amount.is_finite() { amount } else { 0.0 };
    let fixed = format!("{:.2}", amount.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let negative = amount < 0.0 && fixed != "0.00";
    format!("{}${}.{}", if negative { "-" } else { "" }, grouped, cents)
}
