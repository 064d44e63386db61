//! Validation helper functions for new to-do items
//!
//! This module contains the checks applied before an item is created:
//! required fields, date parsing and time-of-day parsing.

use crate::error::ValidationError;
use chrono::{NaiveDate, NaiveTime};

/// Accepted time-of-day formats, as produced by a time picker
const TIME_FORMATS: [&str; 2] = ["%H:%M", "%H:%M:%S"];

/// Parse and validate a date field
///
/// # Arguments
/// * `date_str` - Date string in YYYY-MM-DD format
///
/// # Returns
/// Result containing parsed NaiveDate or error
pub fn parse_date(date_str: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
        .map_err(|_| ValidationError::InvalidDate(date_str.to_string()))
}

/// Parse and validate a time-of-day field
///
/// # Arguments
/// * `time_str` - Time string in HH:MM or HH:MM:SS format
///
/// # Returns
/// Result containing parsed NaiveTime or error
pub fn parse_time(time_str: &str) -> Result<NaiveTime, ValidationError> {
    TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveTime::parse_from_str(time_str, fmt).ok())
        .ok_or_else(|| ValidationError::InvalidTime(time_str.to_string()))
}

/// Validate the three inputs of a new item
///
/// Checks run in the order the user is told about them: task text first,
/// then the presence of both date and time, then their formats.
///
/// # Arguments
/// * `text` - Task description
/// * `date` - Date field (may be empty)
/// * `time` - Reminder time field (may be empty)
pub fn validate_new_item(text: &str, date: &str, time: &str) -> Result<(), ValidationError> {
    if text.is_empty() {
        return Err(ValidationError::EmptyTask);
    }
    if date.is_empty() || time.is_empty() {
        return Err(ValidationError::MissingSchedule);
    }
    parse_date(date)?;
    parse_time(time)?;
    Ok(())
}
