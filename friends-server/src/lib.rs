//! Friends and favorite journeys server.
//!
//! A web application that stores user "friend" records and each friend's
//! favorite journey between two named stations, optionally with a weekly
//! departure day and time.

pub mod domain;
pub mod friends;
pub mod stations;
pub mod web;
