//! Length units used by the built-in configuration.
//!
//! All lengths in this crate are expressed in PostScript points (1/72 inch).

/// Points per inch.
pub const INCH: f32 = 72.0;

/// Points per centimetre.
pub const CM: f32 = INCH / 2.54;

/// ISO A4 page size `(width, height)` in points.
pub const A4: (f32, f32) = (21.0 * CM, 29.7 * CM);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_a4_is_roughly_595_by_842() {
        assert!((A4.0 - 595.2756).abs() < 0.01);
        assert!((A4.1 - 841.8898).abs() < 0.01);
    }
}
