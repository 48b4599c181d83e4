//! Domain types for friends and their favorite journeys.
//!
//! This module contains the core domain model types that represent
//! validated user data. All types enforce their invariants at construction
//! time, so code that receives these types can trust their validity.

mod day;
mod error;
mod friend;
mod station;
mod time;
mod username;

pub use day::{DayOfWeek, InvalidDayOfWeek};
pub use error::DomainError;
pub use friend::{Departure, FavoriteJourney, Friend};
pub use station::{InvalidStationName, StationName};
pub use time::{DepartureTime, TimeError};
pub use username::{InvalidUsername, Username};
