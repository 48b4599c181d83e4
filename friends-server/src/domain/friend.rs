//! Friend and favorite journey records.

use super::{DayOfWeek, DepartureTime, DomainError, StationName, Username};

/// A weekly departure slot for a favorite journey.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Departure {
    /// Day of the week the journey is taken
    pub day: DayOfWeek,

    /// Departure time on that day
    pub time: DepartureTime,
}

/// A favorite journey between two stations.
///
/// The origin and destination are guaranteed distinct; a journey is never
/// constructed with the same station at both ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FavoriteJourney {
    origin: StationName,
    destination: StationName,
    departure: Option<Departure>,
}

impl FavoriteJourney {
    /// Create a journey between two stations.
    ///
    /// Fails when origin and destination are the same station. The
    /// comparison is an exact, case-sensitive match on the validated names.
    pub fn new(origin: StationName, destination: StationName) -> Result<Self, DomainError> {
        if origin == destination {
            return Err(DomainError::SameOriginDestination(origin));
        }
        Ok(Self {
            origin,
            destination,
            departure: None,
        })
    }

    /// Returns the origin station.
    pub fn origin(&self) -> &StationName {
        &self.origin
    }

    /// Returns the destination station.
    pub fn destination(&self) -> &StationName {
        &self.destination
    }

    /// Returns the departure day/time, if one has been set.
    pub fn departure(&self) -> Option<&Departure> {
        self.departure.as_ref()
    }

    /// Set the departure day/time.
    pub fn set_departure(&mut self, departure: Departure) {
        self.departure = Some(departure);
    }
}

/// A registered user record.
///
/// Identified by username; immutable once created apart from its favorite
/// journey, which can be replaced or scheduled per request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Friend {
    username: Username,
    favorite_journey: Option<FavoriteJourney>,
}

impl Friend {
    /// Create a new friend with no favorite journey.
    pub fn new(username: Username) -> Self {
        Self {
            username,
            favorite_journey: None,
        }
    }

    /// Returns the friend's username.
    pub fn username(&self) -> &Username {
        &self.username
    }

    /// Returns the friend's favorite journey, if one is stored.
    pub fn favorite_journey(&self) -> Option<&FavoriteJourney> {
        self.favorite_journey.as_ref()
    }

    /// Replace the friend's favorite journey, returning the stored snapshot.
    ///
    /// Any previously stored journey, including its departure day/time,
    /// is discarded.
    pub fn set_favorite_journey(&mut self, journey: FavoriteJourney) -> FavoriteJourney {
        self.favorite_journey = Some(journey.clone());
        journey
    }

    /// Attach a departure day/time to the stored favorite journey.
    ///
    /// Fails with [`DomainError::NoFavoriteJourney`] when the friend has no
    /// journey to schedule.
    pub fn schedule_departure(
        &mut self,
        departure: Departure,
    ) -> Result<FavoriteJourney, DomainError> {
        match &mut self.favorite_journey {
            Some(journey) => {
                journey.set_departure(departure);
                Ok(journey.clone())
            }
            None => Err(DomainError::NoFavoriteJourney(self.username.clone())),
        }
    }
}
