//! Unit conversion utilities.
//!
//! DrawingML positions and sizes are expressed in English Metric Units (EMU);
//! font sizes are written in hundredths of a point.

/// A length in English Metric Units (914400 EMU = 1 inch).
pub type Emu = i64;

pub const EMUS_PER_INCH: i64 = 914_400;

/// Convert inches to EMU.
#[inline]
pub fn inches(value: f64) -> Emu {
    (value * EMUS_PER_INCH as f64).round() as Emu
}

/// Font size in points to the `sz` attribute value (hundredths of a point).
#[inline]
pub fn pt_to_centipoints(pt: f64) -> u32 {
    (pt * 100.0).round() as u32
}

/// `sz` attribute value back to points.
#[inline]
pub fn centipoints_to_pt(sz: u32) -> f64 {
    sz as f64 / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inches() {
        assert_eq!(inches(1.0), 914_400);
        assert_eq!(inches(10.0), 9_144_000);
        assert_eq!(inches(0.5), 457_200);
        assert_eq!(inches(6.9), 6_309_360);
    }

    #[test]
    fn test_centipoints() {
        assert_eq!(pt_to_centipoints(18.0), 1800);
        assert_eq!(pt_to_centipoints(10.5), 1050);
        assert_eq!(centipoints_to_pt(1600), 16.0);
    }
}
