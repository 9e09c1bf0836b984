use std::fmt;

use crate::common::unit::{EMUS_PER_INCH, EMUS_PER_PT, EMUS_PER_TWIP};

/// Length measurement stored in EMUs (English Metric Units).
///
/// WordprocessingML measures page geometry and column widths in twips and
/// font sizes in half-points, while DrawingML uses EMUs directly. `Length`
/// keeps a single canonical value and converts on the way out.
///
/// # Examples
///
/// ```rust
/// use ave_docgen::common::Length;
///
/// let column = Length::from_inches(4.5);
/// assert_eq!(column.twips(), 6480);
/// assert_eq!(Length::from_pt(12.0).twips(), 240);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Length {
    emus: i64,
}

impl Length {
    /// Create a length from EMUs.
    #[inline]
    pub const fn from_emus(emus: i64) -> Self {
        Self { emus }
    }

    /// Create a length from inches.
    #[inline]
    pub fn from_inches(inches: f64) -> Self {
        Self {
            emus: (inches * EMUS_PER_INCH as f64).round() as i64,
        }
    }

    /// Create a length from points.
    #[inline]
    pub fn from_pt(pt: f64) -> Self {
        Self {
            emus: (pt * EMUS_PER_PT as f64).round() as i64,
        }
    }

    /// Value in EMUs.
    #[inline]
    pub const fn emus(&self) -> i64 {
        self.emus
    }

    /// Value in twentieths of a point (dxa).
    #[inline]
    pub const fn twips(&self) -> i64 {
        self.emus / EMUS_PER_TWIP
    }

    /// Value in half-points, the unit of `w:sz`.
    #[inline]
    pub const fn half_points(&self) -> i64 {
        self.emus * 2 / EMUS_PER_PT
    }

    /// Value in inches.
    #[inline]
    pub fn inches(&self) -> f64 {
        self.emus as f64 / EMUS_PER_INCH as f64
    }

    /// Value in points.
    #[inline]
    pub fn points(&self) -> f64 {
        self.emus as f64 / EMUS_PER_PT as f64
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}pt", self.points())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inch_conversions() {
        let inch = Length::from_inches(1.0);
        assert_eq!(inch.emus(), 914_400);
        assert_eq!(inch.twips(), 1440);
        assert_eq!(Length::from_inches(0.8).twips(), 1152);
    }

    #[test]
    fn test_point_conversions() {
        assert_eq!(Length::from_pt(11.0).half_points(), 22);
        assert_eq!(Length::from_pt(14.0).half_points(), 28);
        assert_eq!(Length::from_pt(8.0).half_points(), 16);
        assert!((Length::from_pt(12.0).points() - 12.0).abs() < f64::EPSILON);
    }
}
