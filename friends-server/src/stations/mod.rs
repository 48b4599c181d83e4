//! Station catalogue and name lookup.
//!
//! Provides the closed vocabulary of full station names used to validate
//! journey origins and destinations, loaded from a JSON catalogue file at
//! startup or from the built-in default list.

mod error;
mod registry;

pub use error::StationError;
pub use registry::StationRegistry;
