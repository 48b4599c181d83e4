//! Domain error types.
//!
//! These errors represent business-rule violations raised when creating
//! friends or favorite journeys. They are distinct from field-format
//! errors, which each validated type reports on its own.

use super::{StationName, Username};

/// Domain-level errors for rule violations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// A friend with this username is already stored
    #[error("friend {0} already exists")]
    FriendAlreadyExists(Username),

    /// No friend with this username is stored
    #[error("user {0} does not exist")]
    UserDoesNotExist(Username),

    /// A journey must connect two different stations
    #[error("origin and destination are both {0}")]
    SameOriginDestination(StationName),

    /// A departure day/time needs a stored journey to attach to
    #[error("user {0} has no favorite journey to schedule")]
    NoFavoriteJourney(Username),
}
