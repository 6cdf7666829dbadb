//! Client for the public OSRM routing HTTP API.
//!
//! Five services are exposed (`nearest`, `route`, `table`, `match`, `trip`),
//! each available through [`OsrmClient`] (async) or [`OsrmBlockingClient`]
//! (blocking). Both clients share the same validation and URL assembly; a
//! call builds a fresh connection from its [`ClientConfig`], issues a single
//! GET and hands back the parsed JSON document untouched. Responses in which
//! the service itself reports a problem (`code`/`message` bodies) are still
//! ordinary successful documents at this layer.

pub mod client;
pub mod config;
pub mod coordinate;
pub mod error;
pub mod profile;
pub mod query;

pub use client::{OSRM_BASE_URL, OsrmBlockingClient, OsrmClient};
pub use config::{ClientConfig, ProxyConfig};
pub use coordinate::{Bearing, Coordinate};
pub use error::{OsrmError, ValidationError};
pub use profile::Profile;
pub use query::{
    Gaps, Geometries, MatchOptions, NearestOptions, Overview, RouteOptions, ServiceRequest,
    TableOptions, TripEndpoint, TripOptions,
};
