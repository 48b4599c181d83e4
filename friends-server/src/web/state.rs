//! Application state for the web layer.

use crate::friends::FriendService;
use crate::stations::StationRegistry;

/// Shared application state.
///
/// Contains all the services needed to handle requests. Both members are
/// cheap clones around shared interior state.
#[derive(Clone)]
pub struct AppState {
    /// Friend rules and storage
    pub friends: FriendService,

    /// Recognized station names
    pub stations: StationRegistry,
}

impl AppState {
    /// Create a new app state.
    pub fn new(friends: FriendService, stations: StationRegistry) -> Self {
        Self { friends, stations }
    }
}
