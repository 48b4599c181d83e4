//! Username type.

use std::fmt;

/// Error returned when parsing an invalid username.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid username: {reason}")]
pub struct InvalidUsername {
    reason: &'static str,
}

/// A valid username.
///
/// Usernames are always at least 3 lowercase ASCII letters. This type
/// guarantees that any `Username` value is valid by construction.
///
/// # Examples
///
/// ```
/// use friends_server::domain::Username;
///
/// let robert = Username::parse("robert").unwrap();
/// assert_eq!(robert.as_str(), "robert");
///
/// // Uppercase is rejected
/// assert!(Username::parse("Robert").is_err());
///
/// // Too short is rejected
/// assert!(Username::parse("sh").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Username(String);

impl Username {
    /// Parse a username from a string.
    ///
    /// The input must be at least 3 lowercase ASCII letters (a-z).
    pub fn parse(s: &str) -> Result<Self, InvalidUsername> {
        let bytes = s.as_bytes();

        if bytes.len() < 3 {
            return Err(InvalidUsername {
                reason: "must be at least 3 characters",
            });
        }

        for &b in bytes {
            if !b.is_ascii_lowercase() {
                return Err(InvalidUsername {
                    reason: "must be lowercase ASCII letters a-z",
                });
            }
        }

        Ok(Username(s.to_string()))
    }

    /// Returns the username as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Username({})", self.0)
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_usernames() {
        assert!(Username::parse("robert").is_ok());
        assert!(Username::parse("ana").is_ok());
        assert!(Username::parse("montserrat").is_ok());
        assert!(Username::parse("aaa").is_ok());
    }

    #[test]
    fn reject_too_short() {
        assert!(Username::parse("").is_err());
        assert!(Username::parse("a").is_err());
        assert!(Username::parse("sh").is_err());
    }

    #[test]
    fn reject_uppercase() {
        assert!(Username::parse("Robert").is_err());
        assert!(Username::parse("ROBERT").is_err());
        assert!(Username::parse("robErt").is_err());
    }

    #[test]
    fn reject_non_letters() {
        assert!(Username::parse("rob3rt").is_err());
        assert!(Username::parse("rob ert").is_err());
        assert!(Username::parse("rob-ert").is_err());
        assert!(Username::parse("robërt").is_err());
    }

    #[test]
    fn as_str_roundtrip() {
        let u = Username::parse("robert").unwrap();
        assert_eq!(u.as_str(), "robert");
    }

    #[test]
    fn display() {
        let u = Username::parse("maria").unwrap();
        assert_eq!(format!("{}", u), "maria");
    }

    #[test]
    fn debug() {
        let u = Username::parse("joan").unwrap();
        assert_eq!(format!("{:?}", u), "Username(joan)");
    }

    #[test]
    fn equality() {
        let a = Username::parse("robert").unwrap();
        let b = Username::parse("robert").unwrap();
        let c = Username::parse("maria").unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn ordering_is_lexical() {
        let a = Username::parse("ana").unwrap();
        let b = Username::parse("bernat").unwrap();
        assert!(a < b);
    }

    #[test]
    fn hash_consistent_with_eq() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(Username::parse("robert").unwrap());
        assert!(set.contains(&Username::parse("robert").unwrap()));
        assert!(!set.contains(&Username::parse("maria").unwrap()));
    }
}
