use thiserror::Error;

/// Failure of a client call.
///
/// A well-formed JSON body in which the service reports a semantic problem
/// (its `code`/`message` convention) is not an error at this layer; callers
/// get it back as an ordinary document and inspect it themselves.
#[derive(Debug, Error)]
pub enum OsrmError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("malformed JSON response: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Precondition violated before any request was issued. Never retried,
/// surfaced to the caller immediately.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("nearest takes exactly one coordinate, got {0}")]
    SingleCoordinate(usize),

    #[error("{service} needs at least two coordinates, got {count}")]
    TooFewCoordinates {
        service: &'static str,
        count: usize,
    },

    #[error("number must be greater than 1, got {0}")]
    NearestNumber(u32),

    #[error("bearing value {0} is outside 0..=360")]
    BearingValue(u16),

    #[error("bearing range {0} is outside 0..=180")]
    BearingRange(u16),
}
