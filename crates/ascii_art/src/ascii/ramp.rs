use std::str::FromStr;

use crate::image_pipeline::luma;
use crate::AsciiError;

/// Ten glyph ramp, sparsest first.
pub const DEFAULT_RAMP: &str = " .:-=+*#%@";

/// Paul Bourke's 69 glyph ramp, sparsest first.
pub const EXTENDED_RAMP: &str =
    " .'`^\",:;Il!i><~+_-?][}{1)(|\\/tfjrxnuvczXYUJCLQ0Zmwqpdbkhao*#MW&8%B@$";

/// Named ramp presets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RampKind {
    #[default]
    Default,
    Extended,
}

impl RampKind {
    pub fn glyphs(self) -> &'static str {
        match self {
            RampKind::Default => DEFAULT_RAMP,
            RampKind::Extended => EXTENDED_RAMP,
        }
    }
}

impl FromStr for RampKind {
    type Err = AsciiError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.trim().to_ascii_lowercase().as_str() {
            "default" => Ok(RampKind::Default),
            "extended" => Ok(RampKind::Extended),
            other => Err(AsciiError::InvalidConfig(format!(
                "unknown ramp {other:?} (expected \"default\" or \"extended\")"
            ))),
        }
    }
}

/// Ordered glyphs used to represent increasing brightness.
///
/// Index `0` is drawn for the darkest pixels and the last index for the
/// brightest ones.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GlyphRamp {
    chars: Vec<char>,
}

impl GlyphRamp {
    pub fn preset(kind: RampKind) -> Self {
        Self { chars: kind.glyphs().chars().collect() }
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn max_level(&self) -> usize {
        self.chars.len() - 1
    }

    /// Ramp index for a pixel: `floor(L * (len - 1))`, mirrored when `invert`
    /// is set so that inverted and plain levels always sum to `len - 1`.
    pub fn level_for(&self, rgb: [u8; 3], invert: bool) -> usize {
        let max_level = self.max_level() as u64;
        let scaled = u64::from(luma::luminance_milli(rgb)) * max_level / luma::MILLI_MAX;
        let level = scaled.min(max_level) as usize;
        if invert {
            self.max_level() - level
        } else {
            level
        }
    }

    pub fn char_at(&self, level: usize) -> char {
        self.chars[level.min(self.max_level())]
    }
}

impl From<RampKind> for GlyphRamp {
    fn from(kind: RampKind) -> Self {
        Self::preset(kind)
    }
}
