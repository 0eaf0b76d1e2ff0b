//! Extraction error and diagnostic types.

use std::path::PathBuf;

/// Errors that stop a whole feature collection from loading.
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    /// The file could not be opened or read
    #[error("could not read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document is not valid JSON
    #[error("could not decode JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The document is JSON but not a feature collection
    #[error("not a feature collection: {0}")]
    NotFeatureCollection(&'static str),
}

/// Why a single feature was left out of the catalog.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SkipReason {
    /// The feature object could not be decoded
    #[error("malformed feature: {0}")]
    MalformedFeature(String),

    /// The feature has no geometry
    #[error("feature has no geometry")]
    MissingGeometry,

    /// The geometry is not a point
    #[error("geometry is a {0}, not a Point")]
    NotPoint(&'static str),

    /// The point position has fewer than two elements
    #[error("point has {0} coordinate(s), expected at least 2")]
    MalformedCoordinates(usize),

    /// The description property exists but is not a string
    #[error("description is not a string")]
    MalformedDescription,

    /// No station name row in the description
    #[error("no station name in description")]
    NameNotFound,

    /// The name does not mark a rail station
    #[error("{0:?} is not a rail station")]
    NotRailStation(String),
}

impl SkipReason {
    /// True for broken input, false for features that are simply filtered out.
    pub fn is_malformed(&self) -> bool {
        matches!(
            self,
            SkipReason::MalformedFeature(_)
                | SkipReason::MalformedCoordinates(_)
                | SkipReason::MalformedDescription
        )
    }
}

/// A feature that was skipped, by position in the collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedFeature {
    pub index: usize,
    pub reason: SkipReason,
}
