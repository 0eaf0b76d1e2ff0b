//! Degrees/minutes/seconds to decimal degrees.

/// Sign of a DMS angle, from its hemisphere letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hemisphere {
    /// North, east, or anything unrecognized.
    Positive,
    /// South or west.
    Negative,
}

impl Hemisphere {
    /// Classify a hemisphere code, case-insensitively.
    ///
    /// Only `S` and `W` are negative. Every other character, including
    /// nonsense such as `'x'`, is treated as positive rather than rejected.
    pub fn from_code(code: char) -> Self {
        match code {
            'S' | 's' | 'W' | 'w' => Hemisphere::Negative,
            _ => Hemisphere::Positive,
        }
    }

    fn apply(self, value: f64) -> f64 {
        match self {
            Hemisphere::Positive => value,
            Hemisphere::Negative => -value,
        }
    }
}

/// Convert a DMS angle to signed decimal degrees.
///
/// Inputs are not range-checked: minutes or seconds outside `[0, 60)` are
/// simply carried through the formula.
///
/// ```
/// use mrt_finder::dms::dms_to_dd;
///
/// assert_eq!(dms_to_dd(1.0, 30.0, 0.0, 'N'), 1.5);
/// assert_eq!(dms_to_dd(1.0, 30.0, 0.0, 'S'), -1.5);
/// assert_eq!(dms_to_dd(1.0, 30.0, 0.0, 'x'), 1.5);
/// ```
pub fn dms_to_dd(degrees: f64, minutes: f64, seconds: f64, direction: char) -> f64 {
    let decimal = degrees + minutes / 60.0 + seconds / 3600.0;
    Hemisphere::from_code(direction).apply(decimal)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn north_and_south() {
        assert_eq!(dms_to_dd(1.0, 30.0, 0.0, 'N'), 1.5);
        assert_eq!(dms_to_dd(1.0, 30.0, 0.0, 'S'), -1.5);
    }

    #[test]
    fn east_and_west() {
        assert_eq!(dms_to_dd(103.0, 45.0, 0.0, 'E'), 103.75);
        assert_eq!(dms_to_dd(103.0, 45.0, 0.0, 'W'), -103.75);
    }

    #[test]
    fn lowercase_codes() {
        assert_eq!(dms_to_dd(1.0, 30.0, 0.0, 's'), -1.5);
        assert_eq!(dms_to_dd(1.0, 30.0, 0.0, 'w'), -1.5);
        assert_eq!(dms_to_dd(1.0, 30.0, 0.0, 'n'), 1.5);
    }

    #[test]
    fn unknown_code_is_positive() {
        assert_eq!(dms_to_dd(1.0, 30.0, 0.0, 'x'), 1.5);
        assert_eq!(dms_to_dd(1.0, 30.0, 0.0, ' '), 1.5);
        assert_eq!(Hemisphere::from_code('?'), Hemisphere::Positive);
    }

    #[test]
    fn seconds() {
        // 1°21'7.56" N is the latitude of Singapore's centroid.
        let dd = dms_to_dd(1.0, 21.0, 7.56, 'N');
        assert!((dd - 1.3521).abs() < 1e-12);
    }

    #[test]
    fn out_of_range_parts_pass_through() {
        assert_eq!(dms_to_dd(0.0, 90.0, 0.0, 'N'), 1.5);
        assert_eq!(dms_to_dd(0.0, 0.0, 5400.0, 'W'), -1.5);
    }
}
