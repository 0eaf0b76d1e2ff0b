//! Configuration for station extraction and map building.
//!
//! The defaults match the LTA "MRT station exit" GeoJSON layout and the
//! folium styling the maps have always used.

use serde::Serialize;

/// Configuration for reading stations out of a feature collection.
#[derive(Debug, Clone)]
pub struct ExtractConfig {
    /// Feature property holding the HTML attribute table.
    pub description_property: String,

    /// Table key whose value is the station name.
    pub name_key: String,

    /// Substring a name must contain to count as a rail station.
    pub station_marker: String,
}

impl ExtractConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(
        description_property: impl Into<String>,
        name_key: impl Into<String>,
        station_marker: impl Into<String>,
    ) -> Self {
        Self {
            description_property: description_property.into(),
            name_key: name_key.into(),
            station_marker: station_marker.into(),
        }
    }
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self::new("Description", "STATION_NA", "MRT STATION")
    }
}

/// Icon and colour of a map marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MarkerStyle {
    pub color: String,
    pub icon: String,
    /// Icon font prefix, `None` for the default glyphicon set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
}

impl MarkerStyle {
    pub fn new(color: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            color: color.into(),
            icon: icon.into(),
            prefix: None,
        }
    }

    /// Use an icon from another font set (e.g. `"fa"` for Font Awesome).
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }
}

/// Stroke and fill of the input area polygon.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AreaStyle {
    pub color: String,
    pub fill_color: String,
    pub fill_opacity: f64,
}

impl Default for AreaStyle {
    fn default() -> Self {
        Self {
            color: "#3186cc".to_string(),
            fill_color: "#3186cc".to_string(),
            fill_opacity: 0.2,
        }
    }
}

/// Configuration for the map produced by the locator.
#[derive(Debug, Clone)]
pub struct MapConfig {
    /// Initial zoom level.
    pub zoom: u8,

    /// Minimum number of input locations before the area polygon is drawn.
    pub polygon_min_points: usize,

    pub area: AreaStyle,
    pub input_marker: MarkerStyle,
    pub center_marker: MarkerStyle,
    pub station_marker: MarkerStyle,
}

impl MapConfig {
    /// Set the initial zoom level.
    pub fn with_zoom(mut self, zoom: u8) -> Self {
        self.zoom = zoom;
        self
    }
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            zoom: 14,
            polygon_min_points: 3,
            area: AreaStyle::default(),
            input_marker: MarkerStyle::new("blue", "info-sign"),
            center_marker: MarkerStyle::new("green", "star"),
            station_marker: MarkerStyle::new("red", "train").with_prefix("fa"),
        }
    }
}
