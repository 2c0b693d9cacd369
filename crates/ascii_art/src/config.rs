use crate::ascii::ansi::ColorMode;
use crate::ascii::ramp::{GlyphRamp, RampKind};
use crate::image_pipeline::resize::{DEFAULT_CELL_ASPECT, MAX_CELLS};
use crate::AsciiError;

/// Validated, immutable render settings.
///
/// Built through [`RenderConfig::builder`]; every field is checked once in
/// [`RenderConfigBuilder::build`] so rendering never sees a bad value.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderConfig {
    output_width: u32,
    ramp: RampKind,
    color: bool,
    background: bool,
    invert: bool,
    cell_aspect: f32,
}

impl RenderConfig {
    pub fn builder() -> RenderConfigBuilder {
        RenderConfigBuilder::default()
    }

    /// Default settings for `output_width` columns.
    pub fn new(output_width: u32) -> Result<Self, AsciiError> {
        Self::builder().output_width(output_width).build()
    }

    pub fn output_width(&self) -> u32 {
        self.output_width
    }

    pub fn ramp(&self) -> RampKind {
        self.ramp
    }

    pub fn glyph_ramp(&self) -> GlyphRamp {
        GlyphRamp::preset(self.ramp)
    }

    pub fn color(&self) -> bool {
        self.color
    }

    pub fn background(&self) -> bool {
        self.background
    }

    pub fn invert(&self) -> bool {
        self.invert
    }

    pub fn cell_aspect(&self) -> f32 {
        self.cell_aspect
    }

    pub fn color_mode(&self) -> ColorMode {
        ColorMode::from_flags(self.color, self.background)
    }
}

#[derive(Clone, Debug)]
enum RampChoice {
    Kind(RampKind),
    Name(String),
}

#[derive(Clone, Debug)]
pub struct RenderConfigBuilder {
    output_width: i64,
    ramp: RampChoice,
    color: bool,
    background: bool,
    invert: bool,
    cell_aspect: f32,
}

impl Default for RenderConfigBuilder {
    fn default() -> Self {
        Self {
            output_width: 100,
            ramp: RampChoice::Kind(RampKind::Default),
            color: false,
            background: false,
            invert: false,
            cell_aspect: DEFAULT_CELL_ASPECT,
        }
    }
}

impl RenderConfigBuilder {
    pub fn output_width(mut self, width: impl Into<i64>) -> Self {
        self.output_width = width.into();
        self
    }

    pub fn ramp(mut self, kind: RampKind) -> Self {
        self.ramp = RampChoice::Kind(kind);
        self
    }

    /// Select a ramp by name; unknown names fail in [`Self::build`].
    pub fn ramp_name(mut self, name: impl Into<String>) -> Self {
        self.ramp = RampChoice::Name(name.into());
        self
    }

    pub fn color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn background(mut self, background: bool) -> Self {
        self.background = background;
        self
    }

    pub fn invert(mut self, invert: bool) -> Self {
        self.invert = invert;
        self
    }

    pub fn cell_aspect(mut self, cell_aspect: f32) -> Self {
        self.cell_aspect = cell_aspect;
        self
    }

    pub fn build(self) -> Result<RenderConfig, AsciiError> {
        if self.output_width <= 0 {
            return Err(AsciiError::InvalidConfig(format!(
                "output width must be positive, got {}",
                self.output_width
            )));
        }
        if self.output_width as u64 > MAX_CELLS {
            return Err(AsciiError::InvalidConfig(format!(
                "output width {} exceeds {MAX_CELLS} columns",
                self.output_width
            )));
        }
        let output_width = self.output_width as u32;

        if !self.cell_aspect.is_finite() || self.cell_aspect <= 0.0 {
            return Err(AsciiError::InvalidConfig(format!(
                "cell aspect must be a positive number, got {}",
                self.cell_aspect
            )));
        }

        let ramp = match self.ramp {
            RampChoice::Kind(kind) => kind,
            RampChoice::Name(name) => name.parse()?,
        };

        Ok(RenderConfig {
            output_width,
            ramp,
            color: self.color,
            background: self.background,
            invert: self.invert,
            cell_aspect: self.cell_aspect,
        })
    }
}
