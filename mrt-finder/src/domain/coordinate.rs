//! Geographic coordinate type and great-circle distance.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Mean Earth radius in kilometres (IUGG).
pub const EARTH_RADIUS_KM: f64 = 6371.0088;

/// Error returned when parsing an invalid `lat,lon` pair.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid coordinate {input:?}: {reason}")]
pub struct InvalidCoordinate {
    input: String,
    reason: &'static str,
}

/// A latitude/longitude pair in decimal degrees.
///
/// Latitude always comes first. GeoJSON positions are longitude-first and
/// must be swapped on the way in (see [`Coordinate::from_lon_lat`]).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Build a coordinate from a longitude-first position.
    pub fn from_lon_lat(lon: f64, lat: f64) -> Self {
        Self { lat, lon }
    }

    /// Parse a `lat,lon` pair such as `"1.3521,103.8198"`.
    ///
    /// ```
    /// use mrt_finder::domain::Coordinate;
    ///
    /// let c = Coordinate::parse("1.3, 103.8").unwrap();
    /// assert_eq!(c, Coordinate::new(1.3, 103.8));
    ///
    /// assert!(Coordinate::parse("1.3").is_err());
    /// assert!(Coordinate::parse("north,east").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, InvalidCoordinate> {
        let invalid = |reason| InvalidCoordinate {
            input: s.to_string(),
            reason,
        };

        let (lat, lon) = s
            .split_once(',')
            .ok_or_else(|| invalid("expected `lat,lon`"))?;
        let lat: f64 = lat
            .trim()
            .parse()
            .map_err(|_| invalid("latitude is not a number"))?;
        let lon: f64 = lon
            .trim()
            .parse()
            .map_err(|_| invalid("longitude is not a number"))?;

        if !lat.is_finite() || !lon.is_finite() {
            return Err(invalid("must be finite"));
        }

        Ok(Self { lat, lon })
    }

    /// Great-circle distance to `other` in kilometres (haversine formula).
    pub fn haversine_km(&self, other: &Coordinate) -> f64 {
        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();
        let d_lat = lat2 - lat1;
        let d_lon = (other.lon - self.lon).to_radians();

        let a = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
        2.0 * EARTH_RADIUS_KM * a.sqrt().asin()
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((lat, lon): (f64, f64)) -> Self {
        Self { lat, lon }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.lat, self.lon)
    }
}

/// Arithmetic mean of the latitudes and longitudes.
///
/// This is not a geodesic centroid. It is only a good approximation for
/// small, local clusters of points far from the antimeridian and the poles.
/// Returns `None` for an empty slice.
pub fn centroid(points: &[Coordinate]) -> Option<Coordinate> {
    if points.is_empty() {
        return None;
    }

    let n = points.len() as f64;
    let lat: f64 = points.iter().map(|p| p.lat).sum();
    let lon: f64 = points.iter().map(|p| p.lon).sum();

    Some(Coordinate::new(lat / n, lon / n))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_lon_lat_swaps() {
        let c = Coordinate::from_lon_lat(103.8, 1.3);
        assert_eq!(c.lat, 1.3);
        assert_eq!(c.lon, 103.8);
    }

    #[test]
    fn centroid_of_two_points() {
        let points = [Coordinate::new(1.0, 103.0), Coordinate::new(1.2, 103.2)];
        assert_eq!(centroid(&points), Some(Coordinate::new(1.1, 103.1)));
    }

    #[test]
    fn centroid_of_one_point_is_itself() {
        let p = Coordinate::new(1.3521, 103.8198);
        assert_eq!(centroid(&[p]), Some(p));
    }

    #[test]
    fn centroid_of_nothing() {
        assert_eq!(centroid(&[]), None);
    }

    #[test]
    fn haversine_zero_for_same_point() {
        let p = Coordinate::new(1.30, 103.80);
        assert_eq!(p.haversine_km(&p), 0.0);
    }

    #[test]
    fn haversine_one_degree_of_latitude() {
        // One degree along a meridian is R * pi / 180.
        let a = Coordinate::new(0.0, 103.0);
        let b = Coordinate::new(1.0, 103.0);
        let expected = EARTH_RADIUS_KM * std::f64::consts::PI / 180.0;
        assert!((a.haversine_km(&b) - expected).abs() < 1e-9);
    }

    #[test]
    fn haversine_known_distance() {
        // Raffles Place to Jurong East, roughly 13.3 km.
        let raffles = Coordinate::new(1.2837, 103.8515);
        let jurong = Coordinate::new(1.3331, 103.7422);
        let d = raffles.haversine_km(&jurong);
        assert!((d - 13.33).abs() < 0.05, "got {d}");
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(Coordinate::parse("").is_err());
        assert!(Coordinate::parse("1.3;103.8").is_err());
        assert!(Coordinate::parse("1.3,").is_err());
        assert!(Coordinate::parse("NaN,103.8").is_err());
    }

    #[test]
    fn parse_error_display() {
        let err = Coordinate::parse("abc").unwrap_err();
        assert_eq!(err.to_string(), "invalid coordinate \"abc\": expected `lat,lon`");
    }

    #[test]
    fn display() {
        assert_eq!(Coordinate::new(1.5, 103.25).to_string(), "(1.5, 103.25)");
    }
}
