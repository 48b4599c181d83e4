//! Departure time handling.
//!
//! Favorite journey departure times arrive as "HH:MM" strings. This module
//! provides a validated wrapper that insists on the zero-padded 24-hour
//! format: "02:14" is accepted, "2:14" is not.

use chrono::{NaiveTime, Timelike};
use std::fmt;

/// Error returned when parsing an invalid time string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid time: {reason}")]
pub struct TimeError {
    reason: &'static str,
}

impl TimeError {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

/// A time of day for a favorite journey departure.
///
/// # Examples
///
/// ```
/// use friends_server::domain::DepartureTime;
///
/// let time = DepartureTime::parse_hhmm("02:14").unwrap();
/// assert_eq!(time.to_string(), "02:14");
///
/// // Zero padding is required
/// assert!(DepartureTime::parse_hhmm("2:14").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DepartureTime(NaiveTime);

impl DepartureTime {
    /// Parse a time from "HH:MM" format.
    ///
    /// # Examples
    ///
    /// ```
    /// use friends_server::domain::DepartureTime;
    ///
    /// // Valid times
    /// assert!(DepartureTime::parse_hhmm("00:00").is_ok());
    /// assert!(DepartureTime::parse_hhmm("23:59").is_ok());
    /// assert!(DepartureTime::parse_hhmm("14:30").is_ok());
    ///
    /// // Invalid formats
    /// assert!(DepartureTime::parse_hhmm("1430").is_err());
    /// assert!(DepartureTime::parse_hhmm("14:3").is_err());
    /// assert!(DepartureTime::parse_hhmm("25:00").is_err());
    /// ```
    pub fn parse_hhmm(s: &str) -> Result<Self, TimeError> {
        // Must be exactly 5 characters: HH:MM
        if s.len() != 5 {
            return Err(TimeError::new("expected HH:MM format"));
        }

        let bytes = s.as_bytes();

        // Check colon position
        if bytes[2] != b':' {
            return Err(TimeError::new("expected colon at position 2"));
        }

        // Parse hours
        let hour =
            parse_two_digits(&bytes[0..2]).ok_or_else(|| TimeError::new("invalid hour digits"))?;
        if hour > 23 {
            return Err(TimeError::new("hour must be 0-23"));
        }

        // Parse minutes
        let minute = parse_two_digits(&bytes[3..5])
            .ok_or_else(|| TimeError::new("invalid minute digits"))?;
        if minute > 59 {
            return Err(TimeError::new("minute must be 0-59"));
        }

        let time = NaiveTime::from_hms_opt(hour, minute, 0)
            .ok_or_else(|| TimeError::new("invalid time"))?;

        Ok(Self(time))
    }

    /// Returns the hour (0-23).
    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    /// Returns the minute (0-59).
    pub fn minute(&self) -> u32 {
        self.0.minute()
    }
}

impl fmt::Debug for DepartureTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DepartureTime({:02}:{:02})", self.hour(), self.minute())
    }
}

impl fmt::Display for DepartureTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

/// Parse two ASCII digit bytes into a u32.
fn parse_two_digits(bytes: &[u8]) -> Option<u32> {
    if bytes.len() != 2 {
        return None;
    }
    let d1 = (bytes[0] as char).to_digit(10)?;
    let d2 = (bytes[1] as char).to_digit(10)?;
    Some(d1 * 10 + d2)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    prop_compose! {
        fn valid_time()(hour in 0u32..24, minute in 0u32..60) -> String {
            format!("{:02}:{:02}", hour, minute)
        }
    }

    proptest! {
        /// Any valid HH:MM string parses successfully
        #[test]
        fn valid_hhmm_parses(time_str in valid_time()) {
            prop_assert!(DepartureTime::parse_hhmm(&time_str).is_ok());
        }

        /// Parse then display roundtrips
        #[test]
        fn parse_display_roundtrip(time_str in valid_time()) {
            let parsed = DepartureTime::parse_hhmm(&time_str).unwrap();
            prop_assert_eq!(parsed.to_string(), time_str);
        }

        /// Invalid hour is rejected
        #[test]
        fn invalid_hour_rejected(hour in 24u32..100, minute in 0u32..60) {
            let s = format!("{:02}:{:02}", hour, minute);
            prop_assert!(DepartureTime::parse_hhmm(&s).is_err());
        }

        /// Invalid minute is rejected
        #[test]
        fn invalid_minute_rejected(hour in 0u32..24, minute in 60u32..100) {
            let s = format!("{:02}:{:02}", hour, minute);
            prop_assert!(DepartureTime::parse_hhmm(&s).is_err());
        }

        /// Unpadded hours are rejected
        #[test]
        fn unpadded_hour_rejected(hour in 0u32..10, minute in 0u32..60) {
            let s = format!("{}:{:02}", hour, minute);
            prop_assert!(DepartureTime::parse_hhmm(&s).is_err());
        }
    }
}
