//! Station records.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Coordinate;

/// A named station at a fixed coordinate.
///
/// Stations are created by the extractor and never mutated afterwards.
/// A catalog is simply a `Vec<Station>` in source order; duplicate names
/// and coordinates are allowed (one record per station exit).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Station {
    pub name: String,
    pub coordinate: Coordinate,
}

impl Station {
    pub fn new(name: impl Into<String>, coordinate: impl Into<Coordinate>) -> Self {
        Self {
            name: name.into(),
            coordinate: coordinate.into(),
        }
    }

    /// Great-circle distance from this station to `point`, in kilometres.
    pub fn distance_km(&self, point: &Coordinate) -> f64 {
        self.coordinate.haversine_km(point)
    }
}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.coordinate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_from_tuple() {
        let s = Station::new("ALPHA MRT STATION", (1.30, 103.80));
        assert_eq!(s.name, "ALPHA MRT STATION");
        assert_eq!(s.coordinate, Coordinate::new(1.30, 103.80));
    }

    #[test]
    fn distance_to_own_coordinate() {
        let s = Station::new("ALPHA MRT STATION", (1.30, 103.80));
        assert_eq!(s.distance_km(&Coordinate::new(1.30, 103.80)), 0.0);
    }

    #[test]
    fn display() {
        let s = Station::new("ALPHA MRT STATION", (1.5, 103.5));
        assert_eq!(s.to_string(), "ALPHA MRT STATION (1.5, 103.5)");
    }

    #[test]
    fn serializes_latitude_first() {
        let s = Station::new("ALPHA MRT STATION", (1.5, 103.5));
        let json = serde_json::to_value(&s).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "ALPHA MRT STATION",
                "coordinate": { "lat": 1.5, "lon": 103.5 }
            })
        );
    }
}
