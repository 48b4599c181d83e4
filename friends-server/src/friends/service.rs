//! Friend domain rules.

use tracing::debug;

use crate::domain::{Departure, DomainError, FavoriteJourney, Friend, StationName, Username};

use super::store::FriendStore;

/// Enforces the friend/journey business rules against the store.
///
/// Callers hand in already format-validated field types; this service
/// checks the rules that depend on stored state (uniqueness, existence)
/// and the journey construction invariant, then persists the outcome.
/// Each operation is atomic: the rule check and the mutation happen under
/// one store lock.
#[derive(Clone)]
pub struct FriendService {
    store: FriendStore,
}

impl FriendService {
    /// Create a service over the given store.
    pub fn new(store: FriendStore) -> Self {
        Self { store }
    }

    /// Create a new friend.
    ///
    /// Fails with [`DomainError::FriendAlreadyExists`] when a friend with
    /// that username is already stored.
    pub async fn create_friend(&self, username: Username) -> Result<Friend, DomainError> {
        let friend = Friend::new(username.clone());
        if self.store.insert_if_absent(friend.clone()).await {
            debug!("created friend {username}");
            Ok(friend)
        } else {
            Err(DomainError::FriendAlreadyExists(username))
        }
    }

    /// Set a friend's favorite journey, replacing any previous one.
    ///
    /// Fails with [`DomainError::UserDoesNotExist`] when the friend is
    /// absent, and with [`DomainError::SameOriginDestination`] when the
    /// two stations are the same. The existence check runs first.
    pub async fn set_favorite_journey(
        &self,
        username: &Username,
        origin: StationName,
        destination: StationName,
    ) -> Result<FavoriteJourney, DomainError> {
        let stored = self
            .store
            .modify(username, move |friend| {
                let journey = FavoriteJourney::new(origin, destination)?;
                Ok(friend.set_favorite_journey(journey))
            })
            .await
            .ok_or_else(|| DomainError::UserDoesNotExist(username.clone()))??;

        debug!("stored favorite journey for {username}");
        Ok(stored)
    }

    /// Attach a departure day/time to a friend's favorite journey.
    ///
    /// Fails with [`DomainError::UserDoesNotExist`] when the friend is
    /// absent, and with [`DomainError::NoFavoriteJourney`] when there is
    /// no stored journey to schedule. No origin/destination comparison
    /// occurs on this path.
    pub async fn set_departure(
        &self,
        username: &Username,
        departure: Departure,
    ) -> Result<FavoriteJourney, DomainError> {
        let stored = self
            .store
            .modify(username, move |friend| friend.schedule_departure(departure))
            .await
            .ok_or_else(|| DomainError::UserDoesNotExist(username.clone()))??;

        debug!("scheduled departure for {username}");
        Ok(stored)
    }

    /// Look up a friend by username.
    ///
    /// Fails with [`DomainError::UserDoesNotExist`] when absent.
    pub async fn friend(&self, username: &Username) -> Result<Friend, DomainError> {
        self.store
            .get(username)
            .await
            .ok_or_else(|| DomainError::UserDoesNotExist(username.clone()))
    }

    /// Return all stored friends, sorted by username.
    pub async fn friends(&self) -> Vec<Friend> {
        self.store.list().await
    }
}
