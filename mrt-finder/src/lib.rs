//! Nearest MRT station finder.
//!
//! Loads station exits from an LTA GeoJSON export, finds the station
//! closest to the center of a group of locations, and draws the result on
//! an interactive map. Also converts DMS angles to decimal degrees.

pub mod config;
pub mod dms;
pub mod domain;
pub mod extract;
pub mod locate;
pub mod map;

pub use config::{ExtractConfig, MapConfig};
pub use dms::dms_to_dd;
pub use domain::{Coordinate, LocateError, Station};
pub use extract::{Extraction, load_stations, read_stations};
pub use locate::{Located, Nearest, locate};
pub use map::{MapArtifact, render_html};
