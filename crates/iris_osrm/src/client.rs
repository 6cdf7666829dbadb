use serde_json::Value;
use tracing::debug;

use crate::config::ClientConfig;
use crate::coordinate::Coordinate;
use crate::error::OsrmError;
use crate::profile::Profile;
use crate::query::{
    self, MatchOptions, NearestOptions, RouteOptions, ServiceRequest, TableOptions, TripOptions,
};

/// Public OSRM endpoint. The scheme is fixed at build time: disabling the
/// default `https` feature falls back to plain HTTP.
#[cfg(feature = "https")]
pub const OSRM_BASE_URL: &str = "https://router.project-osrm.org";
#[cfg(not(feature = "https"))]
pub const OSRM_BASE_URL: &str = "http://router.project-osrm.org";

/// Non-blocking client. Calls yield at the network await point and resume
/// when the response arrives; the hosting runtime schedules them.
///
/// Holds only the immutable [`ClientConfig`]; every call builds its own
/// connection, so concurrent calls through one client never share state.
#[derive(Debug, Clone, Default)]
pub struct OsrmClient {
    config: ClientConfig,
}

impl OsrmClient {
    pub fn new(config: ClientConfig) -> Self {
        OsrmClient { config }
    }

    /// Snap one coordinate to the road network, returning up to
    /// `options.number` candidates.
    pub async fn nearest(
        &self,
        profile: Profile,
        coordinates: &[Coordinate],
        options: &NearestOptions,
    ) -> Result<Value, OsrmError> {
        self.execute(query::nearest(profile, coordinates, options)?)
            .await
    }

    /// Fastest route through the coordinates in the given order.
    pub async fn route(
        &self,
        profile: Profile,
        coordinates: &[Coordinate],
        options: &RouteOptions,
    ) -> Result<Value, OsrmError> {
        self.execute(query::route(profile, coordinates, options)?)
            .await
    }

    /// Duration matrix between the coordinates; empty source or destination
    /// index lists select all of them.
    pub async fn table(
        &self,
        profile: Profile,
        coordinates: &[Coordinate],
        options: &TableOptions,
    ) -> Result<Value, OsrmError> {
        self.execute(query::table(profile, coordinates, options)?)
            .await
    }

    /// Map-match a recorded trace onto the road network (service name
    /// `match`).
    pub async fn matching(
        &self,
        profile: Profile,
        coordinates: &[Coordinate],
        options: &MatchOptions,
    ) -> Result<Value, OsrmError> {
        self.execute(query::matching(profile, coordinates, options)?)
            .await
    }

    /// Solve the travelling-salesman ordering over the coordinates.
    pub async fn trip(
        &self,
        profile: Profile,
        coordinates: &[Coordinate],
        options: &TripOptions,
    ) -> Result<Value, OsrmError> {
        self.execute(query::trip(profile, coordinates, options)?)
            .await
    }

    async fn execute(&self, request: ServiceRequest) -> Result<Value, OsrmError> {
        let url = request.url(OSRM_BASE_URL);
        let client = self.config.build_client()?;

        debug!(service = request.service, %url, "issuing request");

        let body = client.get(&url).send().await?.text().await?;
        let document = serde_json::from_str(&body)?;

        Ok(document)
    }
}

/// Blocking client. Calls occupy the calling thread until the response is
/// resolved or the configured timeout expires. Same validation and URL
/// assembly as [`OsrmClient`].
#[derive(Debug, Clone, Default)]
pub struct OsrmBlockingClient {
    config: ClientConfig,
}

impl OsrmBlockingClient {
    pub fn new(config: ClientConfig) -> Self {
        OsrmBlockingClient { config }
    }

    pub fn nearest(
        &self,
        profile: Profile,
        coordinates: &[Coordinate],
        options: &NearestOptions,
    ) -> Result<Value, OsrmError> {
        self.execute(query::nearest(profile, coordinates, options)?)
    }

    pub fn route(
        &self,
        profile: Profile,
        coordinates: &[Coordinate],
        options: &RouteOptions,
    ) -> Result<Value, OsrmError> {
        self.execute(query::route(profile, coordinates, options)?)
    }

    pub fn table(
        &self,
        profile: Profile,
        coordinates: &[Coordinate],
        options: &TableOptions,
    ) -> Result<Value, OsrmError> {
        self.execute(query::table(profile, coordinates, options)?)
    }

    pub fn matching(
        &self,
        profile: Profile,
        coordinates: &[Coordinate],
        options: &MatchOptions,
    ) -> Result<Value, OsrmError> {
        self.execute(query::matching(profile, coordinates, options)?)
    }

    pub fn trip(
        &self,
        profile: Profile,
        coordinates: &[Coordinate],
        options: &TripOptions,
    ) -> Result<Value, OsrmError> {
        self.execute(query::trip(profile, coordinates, options)?)
    }

    fn execute(&self, request: ServiceRequest) -> Result<Value, OsrmError> {
        let url = request.url(OSRM_BASE_URL);
        let client = self.config.build_blocking_client()?;

        debug!(service = request.service, %url, "issuing request");

        let body = client.get(&url).send()?.text()?;
        let document = serde_json::from_str(&body)?;

        Ok(document)
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::error::ValidationError;

    // Validation must fire before any connection is attempted, so these
    // calls return immediately even though no network is reachable.

    #[tokio::test]
    async fn test_async_validation_precedes_network() {
        let client = OsrmClient::default();

        let err = client
            .nearest(Profile::Car, &[], &NearestOptions::default())
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            OsrmError::Validation(ValidationError::SingleCoordinate(0))
        ));
    }

    #[test]
    fn test_blocking_validation_precedes_network() {
        let client = OsrmBlockingClient::default();

        let err = client
            .route(
                Profile::Car,
                &[Coordinate::new(52.517037, 13.388860)],
                &RouteOptions::default(),
            )
            .unwrap_err();

        assert!(matches!(
            err,
            OsrmError::Validation(ValidationError::TooFewCoordinates {
                service: "route",
                count: 1
            })
        ));
    }
}
