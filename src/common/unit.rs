//! Unit conversion utilities.
//!
//! DrawingML stores geometry in EMUs and font sizes in hundredths of a point.

pub const EMUS_PER_INCH: i64 = 914_400;
pub const EMUS_PER_PT: i64 = 12_700;

/// Font sizes in `a:rPr/@sz` and `a:defRPr/@sz` are centipoints.
pub const CENTIPOINTS_PER_PT: f64 = 100.0;

#[inline]
pub fn pt_to_centipoints(pt: f64) -> u32 {
    (pt * CENTIPOINTS_PER_PT).round() as u32
}

#[inline]
pub fn centipoints_to_pt(centipoints: u32) -> f64 {
    centipoints as f64 / CENTIPOINTS_PER_PT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centipoints() {
        assert_eq!(pt_to_centipoints(18.0), 1800);
        assert_eq!(pt_to_centipoints(10.5), 1050);
        assert_eq!(centipoints_to_pt(1400), 14.0);
    }
}
