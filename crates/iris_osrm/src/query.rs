use std::fmt::Display;
use std::fmt::Write;

use serde::{Deserialize, Serialize};

use crate::coordinate::{Bearing, Coordinate, encode_bearings, encode_coordinates};
use crate::error::ValidationError;
use crate::profile::Profile;

pub const API_VERSION: &str = "v1";

/// Wire encoding for returned geometry.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Geometries {
    #[default]
    Polyline,
    Polyline6,
    Geojson,
}

impl Display for Geometries {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Geometries::Polyline => "polyline",
                Geometries::Polyline6 => "polyline6",
                Geometries::Geojson => "geojson",
            }
        )
    }
}

/// Requested level of detail for the overall route geometry.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Overview {
    #[default]
    Full,
    False,
}

impl Display for Overview {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Overview::Full => "full",
                Overview::False => "false",
            }
        )
    }
}

/// How `match` treats gaps in the input trace.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gaps {
    #[default]
    Split,
    Ignore,
}

impl Display for Gaps {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Gaps::Split => "split",
                Gaps::Ignore => "ignore",
            }
        )
    }
}

/// Endpoint policy for `trip`: let the solver pick any coordinate, or pin
/// the first one.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TripEndpoint {
    #[default]
    Any,
    First,
}

impl Display for TripEndpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                TripEndpoint::Any => "any",
                TripEndpoint::First => "first",
            }
        )
    }
}

#[derive(Debug, Clone)]
pub struct NearestOptions {
    /// How many snapped candidates to return. The service rejects values
    /// below 2, so validation does too.
    pub number: u32,
    pub generate_hints: bool,
    pub bearings: Vec<Bearing>,
    pub hints: Vec<String>,
}

impl Default for NearestOptions {
    fn default() -> Self {
        NearestOptions {
            number: 2,
            generate_hints: true,
            bearings: Vec::new(),
            hints: Vec::new(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct RouteOptions {
    pub alternatives: bool,
    pub steps: bool,
    pub continue_straight: bool,
    pub geometries: Geometries,
    pub overview: Overview,
    pub generate_hints: bool,
    pub bearings: Vec<Bearing>,
    pub hints: Vec<String>,
}

impl Default for RouteOptions {
    fn default() -> Self {
        RouteOptions {
            alternatives: false,
            steps: false,
            continue_straight: false,
            geometries: Geometries::default(),
            overview: Overview::default(),
            generate_hints: true,
            bearings: Vec::new(),
            hints: Vec::new(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct TableOptions {
    /// Coordinate indices used as sources; empty means all of them.
    pub sources: Vec<usize>,
    /// Coordinate indices used as destinations; empty means all of them.
    pub destinations: Vec<usize>,
    pub generate_hints: bool,
    pub bearings: Vec<Bearing>,
    pub hints: Vec<String>,
}

impl Default for TableOptions {
    fn default() -> Self {
        TableOptions {
            sources: Vec::new(),
            destinations: Vec::new(),
            generate_hints: true,
            bearings: Vec::new(),
            hints: Vec::new(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct MatchOptions {
    pub steps: bool,
    pub geometries: Geometries,
    pub overview: Overview,
    /// Unix timestamps aligned with the trace coordinates; omitted from the
    /// query when empty.
    pub timestamps: Vec<u64>,
    pub gaps: Gaps,
    pub tidy: bool,
    pub generate_hints: bool,
    pub bearings: Vec<Bearing>,
    pub hints: Vec<String>,
}

impl Default for MatchOptions {
    fn default() -> Self {
        MatchOptions {
            steps: false,
            geometries: Geometries::default(),
            overview: Overview::default(),
            timestamps: Vec::new(),
            gaps: Gaps::default(),
            tidy: false,
            generate_hints: true,
            bearings: Vec::new(),
            hints: Vec::new(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct TripOptions {
    pub steps: bool,
    pub geometries: Geometries,
    pub overview: Overview,
    pub roundtrip: bool,
    pub source: TripEndpoint,
    pub destination: TripEndpoint,
    pub generate_hints: bool,
    pub bearings: Vec<Bearing>,
    pub hints: Vec<String>,
}

impl Default for TripOptions {
    fn default() -> Self {
        TripOptions {
            steps: false,
            geometries: Geometries::default(),
            overview: Overview::default(),
            roundtrip: true,
            source: TripEndpoint::default(),
            destination: TripEndpoint::default(),
            generate_hints: true,
            bearings: Vec::new(),
            hints: Vec::new(),
        }
    }
}

/// Everything the transport layer needs to issue one call. Produced by the
/// per-service builders below, after validation has passed.
#[derive(Debug, Clone)]
pub struct ServiceRequest {
    pub service: &'static str,
    pub profile: Profile,
    pub coordinates: Vec<Coordinate>,
    pub generate_hints: bool,
    pub bearings: Vec<Bearing>,
    pub hints: Vec<String>,
    /// Service-specific query suffix, already assembled.
    pub options: String,
}

impl ServiceRequest {
    /// Compose the final URL against `base`:
    /// `<base>/<service>/v1/<profile>/<lon,lat;...>.json?<query>`.
    ///
    /// Query order is fixed (hint generation, bearings, hints, then the
    /// service suffix) so identical inputs render byte-identical URLs.
    pub fn url(&self, base: &str) -> String {
        let mut url = format!(
            "{}/{}/{}/{}/{}.json?generate_hints={}",
            base,
            self.service,
            API_VERSION,
            self.profile,
            encode_coordinates(&self.coordinates),
            self.generate_hints,
        );

        if !self.bearings.is_empty() {
            let _ = write!(url, "&bearings={}", encode_bearings(&self.bearings));
        }

        if !self.hints.is_empty() {
            let _ = write!(url, "&hints={}", self.hints.join(";"));
        }

        if !self.options.is_empty() {
            url.push('&');
            url.push_str(&self.options);
        }

        url
    }
}

fn require_at_least_two(
    service: &'static str,
    coordinates: &[Coordinate],
) -> Result<(), ValidationError> {
    if coordinates.len() < 2 {
        return Err(ValidationError::TooFewCoordinates {
            service,
            count: coordinates.len(),
        });
    }

    Ok(())
}

/// Indices joined by `;`, or `all` when the list is empty.
fn index_list(indices: &[usize]) -> String {
    if indices.is_empty() {
        String::from("all")
    } else {
        indices
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(";")
    }
}

pub fn nearest(
    profile: Profile,
    coordinates: &[Coordinate],
    options: &NearestOptions,
) -> Result<ServiceRequest, ValidationError> {
    if coordinates.len() != 1 {
        return Err(ValidationError::SingleCoordinate(coordinates.len()));
    }
    if options.number <= 1 {
        return Err(ValidationError::NearestNumber(options.number));
    }

    Ok(ServiceRequest {
        service: "nearest",
        profile,
        coordinates: coordinates.to_vec(),
        generate_hints: options.generate_hints,
        bearings: options.bearings.clone(),
        hints: options.hints.clone(),
        options: format!("number={}", options.number),
    })
}

pub fn route(
    profile: Profile,
    coordinates: &[Coordinate],
    options: &RouteOptions,
) -> Result<ServiceRequest, ValidationError> {
    require_at_least_two("route", coordinates)?;

    // annotations is pinned to true; the service misbehaves without it.
    let suffix = format!(
        "alternatives={}&steps={}&annotations=true&continue_straight={}&geometries={}&overview={}",
        options.alternatives,
        options.steps,
        options.continue_straight,
        options.geometries,
        options.overview,
    );

    Ok(ServiceRequest {
        service: "route",
        profile,
        coordinates: coordinates.to_vec(),
        generate_hints: options.generate_hints,
        bearings: options.bearings.clone(),
        hints: options.hints.clone(),
        options: suffix,
    })
}

pub fn table(
    profile: Profile,
    coordinates: &[Coordinate],
    options: &TableOptions,
) -> Result<ServiceRequest, ValidationError> {
    require_at_least_two("table", coordinates)?;

    let suffix = format!(
        "sources={}&destinations={}",
        index_list(&options.sources),
        index_list(&options.destinations),
    );

    Ok(ServiceRequest {
        service: "table",
        profile,
        coordinates: coordinates.to_vec(),
        generate_hints: options.generate_hints,
        bearings: options.bearings.clone(),
        hints: options.hints.clone(),
        options: suffix,
    })
}

pub fn matching(
    profile: Profile,
    coordinates: &[Coordinate],
    options: &MatchOptions,
) -> Result<ServiceRequest, ValidationError> {
    require_at_least_two("match", coordinates)?;

    let mut suffix = format!(
        "steps={}&annotations=true&geometries={}&overview={}&gaps={}&tidy={}",
        options.steps,
        options.geometries,
        options.overview,
        options.gaps,
        options.tidy,
    );

    if !options.timestamps.is_empty() {
        let joined = options
            .timestamps
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(";");
        let _ = write!(suffix, "&timestamps={joined}");
    }

    Ok(ServiceRequest {
        service: "match",
        profile,
        coordinates: coordinates.to_vec(),
        generate_hints: options.generate_hints,
        bearings: options.bearings.clone(),
        hints: options.hints.clone(),
        options: suffix,
    })
}

pub fn trip(
    profile: Profile,
    coordinates: &[Coordinate],
    options: &TripOptions,
) -> Result<ServiceRequest, ValidationError> {
    require_at_least_two("trip", coordinates)?;

    let suffix = format!(
        "steps={}&annotations=true&geometries={}&overview={}&roundtrip={}&source={}&destination={}",
        options.steps,
        options.geometries,
        options.overview,
        options.roundtrip,
        options.source,
        options.destination,
    );

    Ok(ServiceRequest {
        service: "trip",
        profile,
        coordinates: coordinates.to_vec(),
        generate_hints: options.generate_hints,
        bearings: options.bearings.clone(),
        hints: options.hints.clone(),
        options: suffix,
    })
}
