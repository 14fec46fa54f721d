//! Errors for caller-side route planning lookups.
//!
//! The generator itself is infallible; these cover resolving ids against the
//! catalog before it runs.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouteError {
    #[error("unknown airport `{0}`")]
    UnknownAirport(String),

    #[error("unknown location `{location}` in airport `{airport}`")]
    UnknownLocation { airport: String, location: String },

    #[error("start and destination are the same location `{0}`")]
    IdenticalEndpoints(String),
}
