//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{FavoriteJourney, Friend};

/// Request to create a friend.
#[derive(Debug, Deserialize)]
pub struct CreateFriendRequest {
    /// Requested username
    pub username: String,
}

/// A created or listed friend.
#[derive(Debug, Serialize)]
pub struct FriendResponse {
    /// The friend's username
    pub username: String,
}

/// Response listing all friends.
#[derive(Debug, Serialize)]
pub struct FriendListResponse {
    /// Stored friends, sorted by username
    pub friends: Vec<FriendResponse>,
}

/// Request to set a favorite journey or its departure day/time.
///
/// The endpoint accepts two payload shapes: `{origin, destination}` to
/// store a journey, or `{dayOfWeek, time}` to schedule the stored one.
/// All fields are optional here; the handler decides which shape was
/// submitted and rejects anything incomplete.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteJourneyRequest {
    /// Origin station name
    pub origin: Option<String>,

    /// Destination station name
    pub destination: Option<String>,

    /// Day of the week, capitalized (e.g. "Tuesday")
    pub day_of_week: Option<String>,

    /// Departure time, zero-padded 24-hour "HH:MM"
    pub time: Option<String>,
}

/// Response for a stored journey.
#[derive(Debug, Serialize)]
pub struct JourneyResponse {
    /// Origin station name
    pub origin: String,

    /// Destination station name
    pub destination: String,
}

/// Response for a scheduled departure.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartureResponse {
    /// Day of the week
    pub day_of_week: String,

    /// Departure time
    pub time: String,
}

/// Full favorite journey as stored, for the read endpoint.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteJourneyView {
    /// Origin station name
    pub origin: String,

    /// Destination station name
    pub destination: String,

    /// Scheduled day, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day_of_week: Option<String>,

    /// Scheduled time, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

// Conversion implementations

impl FriendResponse {
    /// Create from a domain Friend.
    pub fn from_friend(friend: &Friend) -> Self {
        Self {
            username: friend.username().to_string(),
        }
    }
}

impl JourneyResponse {
    /// Create from a domain FavoriteJourney, echoing both stations.
    pub fn from_journey(journey: &FavoriteJourney) -> Self {
        Self {
            origin: journey.origin().to_string(),
            destination: journey.destination().to_string(),
        }
    }
}

impl FavoriteJourneyView {
    /// Create from a domain FavoriteJourney.
    pub fn from_journey(journey: &FavoriteJourney) -> Self {
        Self {
            origin: journey.origin().to_string(),
            destination: journey.destination().to_string(),
            day_of_week: journey.departure().map(|d| d.day.to_string()),
            time: journey.departure().map(|d| d.time.to_string()),
        }
    }
}
