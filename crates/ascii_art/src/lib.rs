//! Raster image to ASCII art rendering.
//!
//! ```no_run
//! use ascii_art::{render, RenderConfig, RampKind};
//!
//! let image = image::open("photo.png")?;
//! let config = RenderConfig::builder().output_width(80).ramp(RampKind::Extended).build()?;
//! for line in render(&image, &config)? {
//!     println!("{line}");
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod ascii;
mod config;
mod image_pipeline;

use std::io;
use std::path::Path;

use log::debug;

pub use ascii::{
    ansi::{self, ColorMode},
    grid::{CellGlyph, GlyphGrid},
    mapping::GlyphMapper,
    ramp::{GlyphRamp, RampKind, DEFAULT_RAMP, EXTENDED_RAMP},
};
pub use config::{RenderConfig, RenderConfigBuilder};
pub use image_pipeline::{
    loader::PixelSource,
    luma::luminance,
    resize::{TargetGeometry, DEFAULT_CELL_ASPECT, MAX_CELLS},
};

#[derive(Debug, thiserror::Error)]
pub enum AsciiError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("unsupported image: {0}")]
    UnsupportedImage(String),
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl From<image::ImageError> for AsciiError {
    fn from(err: image::ImageError) -> Self {
        match err {
            image::ImageError::IoError(err) => AsciiError::Io(err),
            other => AsciiError::UnsupportedImage(other.to_string()),
        }
    }
}

#[derive(Clone, Debug)]
pub struct RenderOutput {
    pub grid: GlyphGrid,
    pub geometry: TargetGeometry,
    pub color_mode: ColorMode,
}

impl RenderOutput {
    /// Output lines, top to bottom, with color escapes when enabled.
    pub fn lines(&self) -> Vec<String> {
        self.grid.lines(self.color_mode).collect()
    }
}

#[derive(Default)]
pub struct AsciiRenderer;

impl AsciiRenderer {
    pub fn render_path<P: AsRef<Path>>(
        &self,
        path: P,
        config: &RenderConfig,
    ) -> Result<RenderOutput, AsciiError> {
        let image = image_pipeline::loader::load_image(path.as_ref())?;
        self.render_image(&image, config)
    }

    pub fn render_image<I: PixelSource + ?Sized>(
        &self,
        image: &I,
        config: &RenderConfig,
    ) -> Result<RenderOutput, AsciiError> {
        let (width, height) = image.dimensions();
        let geometry =
            TargetGeometry::derive(width, height, config.output_width(), config.cell_aspect())?;
        debug!(
            "rendering {}x{} image into {}x{} cells (cell aspect {})",
            width, height, geometry.columns, geometry.rows, geometry.cell_aspect
        );

        let mut samples = Vec::with_capacity(geometry.cell_count());
        for row in 0..geometry.rows {
            for column in 0..geometry.columns {
                let (x, y) = geometry.source_pixel(column, row, width, height);
                samples.push(image.pixel_at(x, y));
            }
        }

        let mapper = GlyphMapper::new(config.glyph_ramp(), config.invert());
        let grid = mapper.map_samples(&samples, geometry.columns, geometry.rows);

        Ok(RenderOutput { grid, geometry, color_mode: config.color_mode() })
    }
}

/// Render `image` into text lines, one per output row.
pub fn render<I: PixelSource + ?Sized>(
    image: &I,
    config: &RenderConfig,
) -> Result<Vec<String>, AsciiError> {
    AsciiRenderer.render_image(image, config).map(|output| output.lines())
}
