use chrono::NaiveDate;

use crate::errors::{BookingError, BookingResult};
use crate::models::{CLOSING_HOUR, OPENING_HOUR};

/// An identity number is exactly 8 digits. Anything else is refused
/// before any network call is made.
pub fn validate_dni(dni: &str) -> BookingResult<()> {
    if dni.is_empty() {
        return Err(BookingError::Validation(
            "An identity number is required".to_string(),
        ));
    }
    if dni.len() != 8 || !dni.bytes().all(|b| b.is_ascii_digit()) {
        return Err(BookingError::Validation(
            "The identity number must be exactly 8 digits".to_string(),
        ));
    }
    Ok(())
}

pub fn validate_hour(hour: u32) -> BookingResult<()> {
    if !(OPENING_HOUR..=CLOSING_HOUR).contains(&hour) {
        return Err(BookingError::Validation(format!(
            "The hour must be between {OPENING_HOUR}:00 and {CLOSING_HOUR}:00"
        )));
    }
    Ok(())
}

/// Parses a `YYYY-MM-DD` form value into a real calendar date.
pub fn parse_date(input: &str) -> BookingResult<NaiveDate> {
    let input = input.trim();
    if input.is_empty() {
        return Err(BookingError::Validation("A date is required".to_string()));
    }
    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .map_err(|_| BookingError::Validation(format!("'{input}' is not a valid date")))
}

/// Parses an hour form value. Accepts the `HH:MM` shape an HTML time input
/// submits as well as a bare hour, then checks clinic hours.
pub fn parse_hour(input: &str) -> BookingResult<u32> {
    let input = input.trim();
    if input.is_empty() {
        return Err(BookingError::Validation("An hour is required".to_string()));
    }
    let hour_part = input.split(':').next().unwrap_or_default();
    let hour: u32 = hour_part
        .parse()
        .map_err(|_| BookingError::Validation(format!("'{input}' is not a valid hour")))?;
    validate_hour(hour)?;
    Ok(hour)
}
