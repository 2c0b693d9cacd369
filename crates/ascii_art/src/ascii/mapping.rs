use super::grid::{CellGlyph, GlyphGrid};
use super::ramp::GlyphRamp;

pub struct GlyphMapper {
    ramp: GlyphRamp,
    invert: bool,
}

impl GlyphMapper {
    pub fn new(ramp: GlyphRamp, invert: bool) -> Self {
        Self { ramp, invert }
    }

    pub fn map_cell(&self, rgb: [u8; 3]) -> CellGlyph {
        let level = self.ramp.level_for(rgb, self.invert);
        CellGlyph { ch: self.ramp.char_at(level), level, rgb }
    }

    /// Map row-major samples into a `width x height` grid.
    pub fn map_samples(&self, samples: &[[u8; 3]], width: u32, height: u32) -> GlyphGrid {
        let cells = samples.iter().map(|&rgb| self.map_cell(rgb)).collect();
        GlyphGrid::new(width, height, cells)
    }
}
