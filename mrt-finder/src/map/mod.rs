//! Render-ready map description.
//!
//! A [`MapArtifact`] is plain data: a center, a zoom level, an optional
//! polygon and a list of markers. It carries no rendering state and can be
//! serialized to JSON or turned into a standalone HTML page with
//! [`render_html`].

mod render;

use serde::Serialize;

use crate::config::{AreaStyle, MapConfig, MarkerStyle};
use crate::domain::{Coordinate, Station};

pub use render::{RenderError, render_html};

/// What a marker stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerRole {
    Input,
    Center,
    NearestStation,
}

/// A single map marker.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub position: Coordinate,
    pub popup: String,
    pub role: MarkerRole,
    pub style: MarkerStyle,
}

/// Semi-transparent filled polygon through the input locations.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AreaPolygon {
    /// Vertices in input order (no hull is computed).
    pub points: Vec<Coordinate>,
    pub popup: String,
    #[serde(flatten)]
    pub style: AreaStyle,
}

/// A map ready to be drawn.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapArtifact {
    pub center: Coordinate,
    pub zoom: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub polygon: Option<AreaPolygon>,
    pub markers: Vec<Marker>,
}

impl MapArtifact {
    /// Markers with the given role, in insertion order.
    pub fn markers_with_role(&self, role: MarkerRole) -> impl Iterator<Item = &Marker> {
        self.markers.iter().filter(move |m| m.role == role)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Build the map for a set of input locations.
///
/// Markers are added in a fixed order: one per input location, then the
/// center, then the nearest station when there is one. The polygon is only
/// drawn once there are at least `config.polygon_min_points` locations.
pub fn build_map(
    locations: &[Coordinate],
    center: Coordinate,
    nearest: Option<&Station>,
    config: &MapConfig,
) -> MapArtifact {
    let polygon = (locations.len() >= config.polygon_min_points).then(|| AreaPolygon {
        points: locations.to_vec(),
        popup: "Input Area".to_string(),
        style: config.area.clone(),
    });

    let mut markers: Vec<Marker> = locations
        .iter()
        .map(|&position| Marker {
            position,
            popup: "Input Location".to_string(),
            role: MarkerRole::Input,
            style: config.input_marker.clone(),
        })
        .collect();

    markers.push(Marker {
        position: center,
        popup: "Center Point".to_string(),
        role: MarkerRole::Center,
        style: config.center_marker.clone(),
    });

    if let Some(station) = nearest {
        markers.push(Marker {
            position: station.coordinate,
            popup: format!("Nearest MRT: {}", station.name),
            role: MarkerRole::NearestStation,
            style: config.station_marker.clone(),
        });
    }

    MapArtifact {
        center,
        zoom: config.zoom,
        polygon,
        markers,
    }
}
