use crate::AsciiError;

/// Default height/width compensation for terminal character cells.
pub const DEFAULT_CELL_ASPECT: f32 = 0.55;

/// Largest output grid, in cells, a render may produce.
pub const MAX_CELLS: u64 = 1 << 24;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TargetGeometry {
    pub columns: u32,
    pub rows: u32,
    pub cell_aspect: f32,
}

impl TargetGeometry {
    /// Grid for `columns` characters over a `source_width x source_height`
    /// image.
    ///
    /// Fails with `UnsupportedImage` for an empty source and with
    /// `InvalidConfig` for zero columns or a grid above [`MAX_CELLS`].
    pub fn derive(
        source_width: u32,
        source_height: u32,
        columns: u32,
        cell_aspect: f32,
    ) -> Result<TargetGeometry, AsciiError> {
        if source_width == 0 || source_height == 0 {
            return Err(AsciiError::UnsupportedImage(format!(
                "image has zero dimension ({source_width}x{source_height})"
            )));
        }
        if columns == 0 {
            return Err(AsciiError::InvalidConfig("output width must be positive".into()));
        }

        let image_ratio = f64::from(source_height) / f64::from(source_width);
        let rows = (f64::from(columns) * image_ratio * f64::from(cell_aspect)).round().max(1.0);
        let cells = f64::from(columns) * rows;
        if !cells.is_finite() || cells > MAX_CELLS as f64 {
            return Err(AsciiError::InvalidConfig(format!(
                "output grid of {columns} columns x {rows} rows exceeds {MAX_CELLS} cells"
            )));
        }

        Ok(TargetGeometry { columns, rows: rows as u32, cell_aspect })
    }

    pub fn cell_count(&self) -> usize {
        self.columns as usize * self.rows as usize
    }

    /// Nearest source pixel for output cell `(column, row)`.
    pub fn source_pixel(
        &self,
        column: u32,
        row: u32,
        source_width: u32,
        source_height: u32,
    ) -> (u32, u32) {
        let x = u64::from(column) * u64::from(source_width) / u64::from(self.columns);
        let y = u64::from(row) * u64::from(source_height) / u64::from(self.rows);
        let x = (x as u32).min(source_width - 1);
        let y = (y as u32).min(source_height - 1);
        (x, y)
    }
}
