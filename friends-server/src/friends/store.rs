//! In-memory friend store.

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::{Friend, Username};

/// Thread-safe keyed store of friends.
///
/// Each mutation runs under the write lock, so a check-then-mutate
/// sequence inside one call is atomic with respect to concurrent requests
/// targeting the same username.
#[derive(Clone, Default)]
pub struct FriendStore {
    inner: Arc<RwLock<HashMap<Username, Friend>>>,
}

impl FriendStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a friend by username.
    pub async fn get(&self, username: &Username) -> Option<Friend> {
        let guard = self.inner.read().await;
        guard.get(username).cloned()
    }

    /// Return all stored friends, sorted by username.
    pub async fn list(&self) -> Vec<Friend> {
        let guard = self.inner.read().await;
        let mut friends: Vec<Friend> = guard.values().cloned().collect();
        friends.sort_by(|a, b| a.username().cmp(b.username()));
        friends
    }

    /// Store a friend unless one with the same username already exists.
    ///
    /// Returns `true` when the friend was stored, `false` when the
    /// username was already taken.
    pub async fn insert_if_absent(&self, friend: Friend) -> bool {
        let mut guard = self.inner.write().await;
        match guard.entry(friend.username().clone()) {
            std::collections::hash_map::Entry::Occupied(_) => false,
            std::collections::hash_map::Entry::Vacant(entry) => {
                entry.insert(friend);
                true
            }
        }
    }

    /// Run a mutation against a stored friend under the write lock.
    ///
    /// Returns `None` when no friend with that username is stored;
    /// otherwise the closure's result.
    pub async fn modify<T>(
        &self,
        username: &Username,
        f: impl FnOnce(&mut Friend) -> T,
    ) -> Option<T> {
        let mut guard = self.inner.write().await;
        guard.get_mut(username).map(f)
    }

    /// Get the number of stored friends.
    pub async fn len(&self) -> usize {
        let guard = self.inner.read().await;
        guard.len()
    }

    /// Check if the store is empty.
    pub async fn is_empty(&self) -> bool {
        let guard = self.inner.read().await;
        guard.is_empty()
    }
}
