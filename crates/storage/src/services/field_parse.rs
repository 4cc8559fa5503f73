//! Parse-or-default helpers for the text fields of a receipt.
//!
//! Each helper returns `None` when the field is not usable. Scoring rules treat
//! `None` as "contributes nothing" and carry on with the rest of the receipt.

use std::str::FromStr;

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const TIME_FORMAT: &str = "%H:%M";

/// Parses a non-negative decimal amount such as `"35.35"` or `"9"`.
pub fn parse_amount(raw: &str) -> Option<Decimal> {
    let amount = Decimal::from_str(raw).ok()?;
    if amount < Decimal::ZERO {
        return None;
    }
    Some(amount)
}

/// Parses a calendar date in `YYYY-MM-DD` form.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, DATE_FORMAT).ok()
}

/// Parses a 24-hour time of day in `HH:MM` form.
pub fn parse_time(raw: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(raw, TIME_FORMAT).ok()
}
