//! Station extraction from GeoJSON feature collections.
//!
//! Reads point features, pulls the station name out of each feature's HTML
//! description, and keeps those whose name marks a rail station. One bad
//! feature never aborts the load: it is recorded as a [`SkippedFeature`]
//! and the scan carries on. Stations come out in file order with no
//! sorting or deduplication.

mod description;
mod error;

use std::fs;
use std::path::Path;

use geojson::{Feature, Geometry, JsonObject, JsonValue};
use tracing::{debug, error, info, warn};

use crate::config::ExtractConfig;
use crate::domain::{Coordinate, Station};

pub use description::{DescriptionParser, RowPatternParser};
pub use error::{ExtractError, SkipReason, SkippedFeature};

/// Result of scanning a feature collection.
#[derive(Debug, Default)]
pub struct Extraction {
    /// Stations in source order.
    pub stations: Vec<Station>,

    /// Features that did not produce a station.
    pub skipped: Vec<SkippedFeature>,

    /// Set when the document itself could not be loaded.
    pub failure: Option<ExtractError>,
}

impl Extraction {
    /// Number of features that were looked at.
    pub fn feature_count(&self) -> usize {
        self.stations.len() + self.skipped.len()
    }

    /// Skipped features that were broken rather than filtered out.
    pub fn malformed(&self) -> impl Iterator<Item = &SkippedFeature> {
        self.skipped.iter().filter(|s| s.reason.is_malformed())
    }

    fn failed(failure: ExtractError) -> Self {
        Self {
            failure: Some(failure),
            ..Self::default()
        }
    }
}

/// Load stations from a GeoJSON file with the default configuration.
///
/// Never fails. A missing file or an undecodable document is logged and
/// yields an empty station list, with the cause kept in
/// [`Extraction::failure`].
pub fn load_stations(path: impl AsRef<Path>) -> Extraction {
    let path = path.as_ref();
    match read_stations(path, &ExtractConfig::default()) {
        Ok(extraction) => extraction,
        Err(e) => {
            error!(path = %path.display(), "failed to load stations: {e}");
            Extraction::failed(e)
        }
    }
}

/// Load stations from a GeoJSON file.
pub fn read_stations(
    path: impl AsRef<Path>,
    config: &ExtractConfig,
) -> Result<Extraction, ExtractError> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).map_err(|source| ExtractError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let extraction = parse_stations(&raw, config)?;
    info!(
        path = %path.display(),
        stations = extraction.stations.len(),
        skipped = extraction.skipped.len(),
        "loaded station catalog"
    );
    Ok(extraction)
}

/// Parse stations from GeoJSON text.
pub fn parse_stations(raw: &str, config: &ExtractConfig) -> Result<Extraction, ExtractError> {
    let document: JsonValue = serde_json::from_str(raw)?;
    extract_stations(document, &RowPatternParser::new(), config)
}

/// Extract stations from an already-decoded JSON document.
///
/// A top-level object without a `features` member is an empty collection.
pub fn extract_stations(
    document: JsonValue,
    parser: &impl DescriptionParser,
    config: &ExtractConfig,
) -> Result<Extraction, ExtractError> {
    let JsonValue::Object(mut top) = document else {
        return Err(ExtractError::NotFeatureCollection(
            "top level is not an object",
        ));
    };

    let features = match top.remove("features") {
        None => Vec::new(),
        Some(JsonValue::Array(features)) => features,
        Some(_) => {
            return Err(ExtractError::NotFeatureCollection(
                "`features` is not an array",
            ));
        }
    };

    let mut extraction = Extraction::default();

    for (index, raw_feature) in features.into_iter().enumerate() {
        match station_from_value(raw_feature, parser, config) {
            Ok(station) => extraction.stations.push(station),
            Err(reason) => {
                if reason.is_malformed() {
                    warn!(index, "skipping feature: {reason}");
                } else {
                    debug!(index, "skipping feature: {reason}");
                }
                extraction.skipped.push(SkippedFeature { index, reason });
            }
        }
    }

    Ok(extraction)
}

/// Read one raw feature object.
///
/// Only `geometry` and `properties` are looked at. The feature's own `type`,
/// `id` and any other members are ignored, so loosely formed exports still
/// load. A missing or `null` geometry is [`SkipReason::MissingGeometry`];
/// a missing or `null` properties object is treated as empty.
fn station_from_value(
    value: JsonValue,
    parser: &impl DescriptionParser,
    config: &ExtractConfig,
) -> Result<Station, SkipReason> {
    let JsonValue::Object(mut object) = value else {
        return Err(SkipReason::MalformedFeature(
            "feature is not an object".to_string(),
        ));
    };

    let geometry = match object.remove("geometry") {
        None | Some(JsonValue::Null) => return Err(SkipReason::MissingGeometry),
        Some(JsonValue::Object(geometry)) => decode_geometry(geometry)?,
        Some(_) => {
            return Err(SkipReason::MalformedFeature(
                "geometry is not an object".to_string(),
            ));
        }
    };

    let properties = match object.get("properties") {
        None | Some(JsonValue::Null) => None,
        Some(JsonValue::Object(properties)) => Some(properties),
        Some(_) => {
            return Err(SkipReason::MalformedFeature(
                "properties is not an object".to_string(),
            ));
        }
    };

    station_from_parts(&geometry, properties, parser, config)
}

fn decode_geometry(object: JsonObject) -> Result<Geometry, SkipReason> {
    Geometry::try_from(object).map_err(|e| SkipReason::MalformedFeature(e.to_string()))
}

/// Turn one decoded feature into a station, or say why not.
pub fn station_from_feature(
    feature: &Feature,
    parser: &impl DescriptionParser,
    config: &ExtractConfig,
) -> Result<Station, SkipReason> {
    let geometry = feature
        .geometry
        .as_ref()
        .ok_or(SkipReason::MissingGeometry)?;
    station_from_parts(geometry, feature.properties.as_ref(), parser, config)
}

fn station_from_parts(
    geometry: &Geometry,
    properties: Option<&JsonObject>,
    parser: &impl DescriptionParser,
    config: &ExtractConfig,
) -> Result<Station, SkipReason> {
    let position = match &geometry.value {
        geojson::Value::Point(position) => position,
        other => return Err(SkipReason::NotPoint(geometry_kind(other))),
    };

    // GeoJSON positions are [longitude, latitude, ...].
    let coordinate = match position.as_slice() {
        [lon, lat, ..] => Coordinate::from_lon_lat(*lon, *lat),
        short => return Err(SkipReason::MalformedCoordinates(short.len())),
    };

    let description = match properties.and_then(|p| p.get(&config.description_property)) {
        None => "",
        Some(value) => value.as_str().ok_or(SkipReason::MalformedDescription)?,
    };

    let name = parser
        .field(description, &config.name_key)
        .ok_or(SkipReason::NameNotFound)?;

    if !name.contains(&config.station_marker) {
        return Err(SkipReason::NotRailStation(name));
    }

    Ok(Station { name, coordinate })
}

fn geometry_kind(value: &geojson::Value) -> &'static str {
    match value {
        geojson::Value::Point(_) => "Point",
        geojson::Value::MultiPoint(_) => "MultiPoint",
        geojson::Value::LineString(_) => "LineString",
        geojson::Value::MultiLineString(_) => "MultiLineString",
        geojson::Value::Polygon(_) => "Polygon",
        geojson::Value::MultiPolygon(_) => "MultiPolygon",
        geojson::Value::GeometryCollection(_) => "GeometryCollection",
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    fn feature() -> impl Strategy<Value = JsonValue> {
        let name = prop_oneof![
            "[A-Z]{3,10} MRT STATION",
            "[A-Z]{3,10} LRT STATION",
            "[A-Z]{3,10} BUS INTERCHANGE",
        ];
        let kind = prop_oneof![Just("Point"), Just("LineString")];
        (name, kind, 103.6f64..104.0, 1.2f64..1.5).prop_map(|(name, kind, lon, lat)| {
            let coordinates = if kind == "Point" {
                json!([lon, lat])
            } else {
                json!([[lon, lat], [lon, lat]])
            };
            json!({
                "type": "Feature",
                "properties": { "Description": format!("<th>STATION_NA</th> <td>{name}</td>") },
                "geometry": { "type": kind, "coordinates": coordinates },
            })
        })
    }

    proptest! {
        /// Never more stations than features, and every name is a rail station
        #[test]
        fn output_bounded_and_filtered(features in prop::collection::vec(feature(), 0..30)) {
            let count = features.len();
            let result = extract_stations(
                json!({ "type": "FeatureCollection", "features": features }),
                &RowPatternParser::new(),
                &ExtractConfig::default(),
            ).unwrap();

            prop_assert!(result.stations.len() <= count);
            prop_assert_eq!(result.feature_count(), count);
            for station in &result.stations {
                prop_assert!(station.name.contains("MRT STATION"));
            }
        }
    }
}
