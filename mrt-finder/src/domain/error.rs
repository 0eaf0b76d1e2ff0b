//! Domain error types.
//!
//! These errors describe invalid arguments to the locator. They are
//! distinct from the I/O and decoding errors raised while loading data.

/// Errors returned by [`crate::locate::locate`] in place of a map.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LocateError {
    /// The input location set is empty
    #[error("no locations provided")]
    NoLocations,

    /// The station catalog is empty
    #[error("no station data provided or loaded")]
    NoStations,
}
