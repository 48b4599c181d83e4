//! Day-of-week type.

use std::fmt;

/// Error returned when parsing an invalid day of the week.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid day of week: {reason}")]
pub struct InvalidDayOfWeek {
    reason: &'static str,
}

/// A day of the week.
///
/// Parsing accepts exactly the seven English weekday names with a leading
/// capital and the rest lowercase. No other spelling is accepted; in
/// particular, case is never corrected on the caller's behalf.
///
/// # Examples
///
/// ```
/// use friends_server::domain::DayOfWeek;
///
/// let day = DayOfWeek::parse("Tuesday").unwrap();
/// assert_eq!(day.as_str(), "Tuesday");
///
/// assert!(DayOfWeek::parse("tuesday").is_err());
/// assert!(DayOfWeek::parse("TUESDAY").is_err());
/// assert!(DayOfWeek::parse("Tue").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl DayOfWeek {
    /// All seven days, Monday first.
    pub const ALL: [DayOfWeek; 7] = [
        DayOfWeek::Monday,
        DayOfWeek::Tuesday,
        DayOfWeek::Wednesday,
        DayOfWeek::Thursday,
        DayOfWeek::Friday,
        DayOfWeek::Saturday,
        DayOfWeek::Sunday,
    ];

    /// Parse a day name from a string.
    ///
    /// The input must exactly match one of the seven English weekday names
    /// with correct capitalization.
    pub fn parse(s: &str) -> Result<Self, InvalidDayOfWeek> {
        match s {
            "Monday" => Ok(DayOfWeek::Monday),
            "Tuesday" => Ok(DayOfWeek::Tuesday),
            "Wednesday" => Ok(DayOfWeek::Wednesday),
            "Thursday" => Ok(DayOfWeek::Thursday),
            "Friday" => Ok(DayOfWeek::Friday),
            "Saturday" => Ok(DayOfWeek::Saturday),
            "Sunday" => Ok(DayOfWeek::Sunday),
            _ => Err(InvalidDayOfWeek {
                reason: "must be a capitalized English weekday name",
            }),
        }
    }

    /// Returns the day name as a string slice.
    pub fn as_str(&self) -> &'static str {
        match self {
            DayOfWeek::Monday => "Monday",
            DayOfWeek::Tuesday => "Tuesday",
            DayOfWeek::Wednesday => "Wednesday",
            DayOfWeek::Thursday => "Thursday",
            DayOfWeek::Friday => "Friday",
            DayOfWeek::Saturday => "Saturday",
            DayOfWeek::Sunday => "Sunday",
        }
    }
}

impl fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_all_days() {
        for day in DayOfWeek::ALL {
            assert_eq!(DayOfWeek::parse(day.as_str()), Ok(day));
        }
    }

    #[test]
    fn reject_wrong_case() {
        assert!(DayOfWeek::parse("tuesday").is_err());
        assert!(DayOfWeek::parse("TUESDAY").is_err());
        assert!(DayOfWeek::parse("tUESDAY").is_err());
    }

    #[test]
    fn reject_abbreviations() {
        assert!(DayOfWeek::parse("Tue").is_err());
        assert!(DayOfWeek::parse("Tues").is_err());
        assert!(DayOfWeek::parse("Mon").is_err());
    }

    #[test]
    fn reject_other_strings() {
        assert!(DayOfWeek::parse("").is_err());
        assert!(DayOfWeek::parse("Tuesday ").is_err());
        assert!(DayOfWeek::parse(" Tuesday").is_err());
        assert!(DayOfWeek::parse("Dimarts").is_err());
    }

    #[test]
    fn display_roundtrips() {
        for day in DayOfWeek::ALL {
            assert_eq!(DayOfWeek::parse(&day.to_string()), Ok(day));
        }
    }
}
