//! Domain types for the station locator.
//!
//! Coordinates are always latitude-first once they enter this module.
//! Stations are immutable values; a catalog is a plain `Vec<Station>`.

mod coordinate;
mod error;
mod station;

pub use coordinate::{Coordinate, EARTH_RADIUS_KM, InvalidCoordinate, centroid};
pub use error::LocateError;
pub use station::Station;
