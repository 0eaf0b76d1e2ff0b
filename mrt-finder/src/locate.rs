//! Nearest-station lookup.
//!
//! Given a handful of input locations and a station catalog, find the
//! station closest to the centroid of the locations and build a map of the
//! result. The search is a plain linear scan; catalogs are a few hundred
//! station exits at most.

use tracing::warn;

use crate::config::MapConfig;
use crate::domain::{Coordinate, LocateError, Station, centroid};
use crate::map::{MapArtifact, build_map};

/// The closest station to a point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Nearest<'a> {
    pub station: &'a Station,
    pub distance_km: f64,
}

/// Everything [`locate`] produces.
#[derive(Debug, Clone)]
pub struct Located<'a> {
    /// One human-readable line naming the station and its distance.
    pub summary: String,
    /// `None` when no station has a finite distance to the center.
    pub nearest: Option<Nearest<'a>>,
    pub center: Coordinate,
    pub map: MapArtifact,
}

/// Name reported when no station could be measured.
pub const UNKNOWN_STATION: &str = "Unknown";

/// Find the station nearest to `point`.
///
/// Distances use the haversine formula. The scan keeps the first station
/// at the minimal distance: a later station only replaces the current best
/// when it is strictly closer than everything seen so far. A station whose
/// distance is NaN or infinite never qualifies. Returns `None` when no
/// station does, which includes an empty catalog.
pub fn nearest_station<'a>(point: &Coordinate, stations: &'a [Station]) -> Option<Nearest<'a>> {
    let mut min_km = f64::INFINITY;
    let mut best = None;

    for station in stations {
        let distance_km = station.distance_km(point);
        if distance_km < min_km {
            min_km = distance_km;
            best = Some(Nearest {
                station,
                distance_km,
            });
        }
    }

    best
}

/// Format the one-line result description.
///
/// Without a station the line reads `Unknown` with an `inf` distance.
pub fn summary_line(nearest: Option<&Nearest<'_>>) -> String {
    let (name, distance_km) = match nearest {
        Some(n) => (n.station.name.as_str(), n.distance_km),
        None => (UNKNOWN_STATION, f64::INFINITY),
    };
    format!("The nearest MRT station is: {name} (distance: {distance_km:.2} km)")
}

/// Locate the station nearest to the centroid of `locations`.
///
/// Fails with [`LocateError::NoLocations`] when `locations` is empty and
/// with [`LocateError::NoStations`] when the catalog is empty, checked in
/// that order. No map is produced on failure.
///
/// A non-empty catalog in which no station has a finite distance still
/// succeeds: the summary names no station and the map has no station marker.
pub fn locate<'a>(
    locations: &[Coordinate],
    stations: &'a [Station],
    config: &MapConfig,
) -> Result<Located<'a>, LocateError> {
    let center = centroid(locations).ok_or(LocateError::NoLocations)?;
    if stations.is_empty() {
        return Err(LocateError::NoStations);
    }

    let nearest = nearest_station(&center, stations);
    if nearest.is_none() {
        warn!(
            stations = stations.len(),
            "no station has a finite distance to the center"
        );
    }

    let summary = summary_line(nearest.as_ref());
    let map = build_map(locations, center, nearest.map(|n| n.station), config);

    Ok(Located {
        summary,
        nearest,
        center,
        map,
    })
}
