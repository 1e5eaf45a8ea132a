use std::fmt;

use crate::common::unit::{EMUS_PER_INCH, EMUS_PER_PT};

/// Length measurement in EMUs.
///
/// Presentation geometry (positions, sizes, line widths) is stored in EMUs
/// (English Metric Units), the native unit of Office Open XML.
///
/// # Examples
///
/// ```rust
/// use pptx_fixtures::common::Length;
///
/// let width = Length::inches(10.0);
/// assert_eq!(width.emus(), 9_144_000);
///
/// let line = Length::pt(1.0);
/// assert_eq!(line.emus(), 12_700);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Length {
    emus: i64,
}

impl Length {
    /// Create a length from EMUs (English Metric Units).
    #[inline]
    pub const fn from_emus(emus: i64) -> Self {
        Self { emus }
    }

    /// Create a length from inches.
    #[inline]
    pub fn inches(inches: f64) -> Self {
        Self {
            emus: (inches * EMUS_PER_INCH as f64).round() as i64,
        }
    }

    /// Create a length from points (1/72 inch).
    #[inline]
    pub fn pt(points: f64) -> Self {
        Self {
            emus: (points * EMUS_PER_PT as f64).round() as i64,
        }
    }

    #[inline]
    pub const fn emus(&self) -> i64 {
        self.emus
    }

    #[inline]
    pub fn as_inches(&self) -> f64 {
        self.emus as f64 / EMUS_PER_INCH as f64
    }

    #[inline]
    pub fn as_pt(&self) -> f64 {
        self.emus as f64 / EMUS_PER_PT as f64
    }
}

impl From<i64> for Length {
    fn from(emus: i64) -> Self {
        Self::from_emus(emus)
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}\"", self.as_inches())
    }
}
