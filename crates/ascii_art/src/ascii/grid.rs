use super::ansi::{self, ColorMode};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellGlyph {
    pub ch: char,
    /// Ramp index the glyph was taken from.
    pub level: usize,
    /// Sampled source color.
    pub rgb: [u8; 3],
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GlyphGrid {
    pub width: u32,
    pub height: u32,
    pub cells: Vec<CellGlyph>,
}

impl GlyphGrid {
    pub fn new(width: u32, height: u32, cells: Vec<CellGlyph>) -> Self {
        assert_eq!(width as usize * height as usize, cells.len());
        Self { width, height, cells }
    }

    /// Plain glyph rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = String> + '_ {
        let width = self.width as usize;
        self.cells.chunks(width).map(|row| row.iter().map(|cell| cell.ch).collect::<String>())
    }

    /// Rows with every cell wrapped in the escapes for `mode`.
    pub fn lines(&self, mode: ColorMode) -> impl Iterator<Item = String> + '_ {
        let width = self.width as usize;
        self.cells.chunks(width).map(move |row| {
            let mut line = String::with_capacity(row.len() * if mode.is_colored() { 24 } else { 1 });
            for cell in row {
                ansi::push_cell(&mut line, cell.ch, cell.rgb, mode);
            }
            line
        })
    }
}
