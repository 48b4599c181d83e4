//! Station name type.

use std::fmt;

/// Error returned when parsing an invalid station name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid station name: {reason}")]
pub struct InvalidStationName {
    reason: &'static str,
}

/// A well-formed station name.
///
/// Station names are the full textual names of stations ("Barcelona"),
/// never short codes ("BCN"). This type enforces the format contract only;
/// whether a name denotes a real station is the
/// [`StationRegistry`](crate::stations::StationRegistry)'s job.
///
/// A well-formed name starts with an uppercase ASCII letter, contains only
/// ASCII letters plus interior spaces, hyphens and apostrophes, ends with a
/// letter, and has at least one lowercase letter. The last rule is what
/// rejects all-uppercase abbreviation codes.
///
/// # Examples
///
/// ```
/// use friends_server::domain::StationName;
///
/// let bcn = StationName::parse("Barcelona").unwrap();
/// assert_eq!(bcn.as_str(), "Barcelona");
///
/// // Multi-word names are fine
/// assert!(StationName::parse("Sant Cugat").is_ok());
///
/// // Abbreviation codes are rejected
/// assert!(StationName::parse("BCN").is_err());
/// assert!(StationName::parse("MAD").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StationName(String);

impl StationName {
    /// Parse a station name from a string.
    pub fn parse(s: &str) -> Result<Self, InvalidStationName> {
        let bytes = s.as_bytes();

        if bytes.len() < 2 {
            return Err(InvalidStationName {
                reason: "must be at least 2 characters",
            });
        }

        if !bytes[0].is_ascii_uppercase() {
            return Err(InvalidStationName {
                reason: "must start with an uppercase letter",
            });
        }

        if !bytes[bytes.len() - 1].is_ascii_alphabetic() {
            return Err(InvalidStationName {
                reason: "must end with a letter",
            });
        }

        for &b in bytes {
            if !b.is_ascii_alphabetic() && b != b' ' && b != b'-' && b != b'\'' {
                return Err(InvalidStationName {
                    reason: "must be letters, spaces, hyphens or apostrophes",
                });
            }
        }

        if !bytes.iter().any(|b| b.is_ascii_lowercase()) {
            return Err(InvalidStationName {
                reason: "looks like a station code, not a full name",
            });
        }

        Ok(StationName(s.to_string()))
    }

    /// Returns the station name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for StationName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationName({})", self.0)
    }
}

impl fmt::Display for StationName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Strategy for generating valid single-word station names
    fn valid_station_string() -> impl Strategy<Value = String> {
        proptest::string::string_regex("[A-Z][a-z]{1,15}").unwrap()
    }

    proptest! {
        /// Roundtrip: parse then as_str returns the original
        #[test]
        fn roundtrip(s in valid_station_string()) {
            let name = StationName::parse(&s).unwrap();
            prop_assert_eq!(name.as_str(), s.as_str());
        }

        /// All-uppercase strings are always rejected
        #[test]
        fn all_uppercase_rejected(s in "[A-Z]{2,10}") {
            prop_assert!(StationName::parse(&s).is_err());
        }

        /// Strings with digits are rejected
        #[test]
        fn digits_rejected(s in "[A-Z][a-z0-9]{1,10}".prop_filter("has digit", |s| s.chars().any(|c| c.is_ascii_digit()))) {
            prop_assert!(StationName::parse(&s).is_err());
        }
    }
}
