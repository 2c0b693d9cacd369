//! Rec. 601 luminance.

/// Upper bound of [`luminance_milli`], reached by pure white.
pub const MILLI_MAX: u64 = 255_000;

/// Weighted sum `299 R + 587 G + 114 B`, in thousandths of a channel step.
///
/// Integer weights keep white exactly at [`MILLI_MAX`], which the float
/// formula misses by one ulp.
pub fn luminance_milli([r, g, b]: [u8; 3]) -> u32 {
    299 * u32::from(r) + 587 * u32::from(g) + 114 * u32::from(b)
}

/// Luminance of an RGB triple normalised to `[0, 1]`.
pub fn luminance(rgb: [u8; 3]) -> f32 {
    (luminance_milli(rgb) as f64 / MILLI_MAX as f64) as f32
}
