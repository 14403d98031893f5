//! In-memory [`Surface`] used by headless runs and tests.

use glam::Vec2;

use crate::{Color, Rect, RenderingError, Surface, SurfaceSize};

/// Width of a glyph relative to the font size under the fixed-width metrics.
const GLYPH_WIDTH_RATIO: f32 = 0.5;

/// Primitive draw call captured by [`RecordingSurface`].
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    /// Whole-surface clear.
    Fill(Color),
    /// Filled rectangle.
    Rectangle {
        /// Covered region.
        rect: Rect,
        /// Fill color.
        color: Color,
    },
    /// Circle outline.
    CircleLines {
        /// Circle center.
        center: Vec2,
        /// Outer radius.
        radius: f32,
        /// Stroke thickness.
        thickness: f32,
        /// Stroke color.
        color: Color,
    },
    /// Text anchored at its top-left corner.
    Text {
        /// Rendered string.
        text: String,
        /// Top-left corner of the text box.
        position: Vec2,
        /// Font size in pixels.
        font_size: f32,
        /// Text color.
        color: Color,
    },
}

/// Surface that records draw calls instead of rasterising them.
///
/// Text is measured with fixed-width metrics: every glyph is half the font
/// size wide and one font size tall.
#[derive(Clone, Debug)]
pub struct RecordingSurface {
    size: SurfaceSize,
    pending: Vec<DrawOp>,
    last_frame: Vec<DrawOp>,
    frames_presented: u64,
    fail_presents: bool,
}

impl RecordingSurface {
    /// Creates an empty surface of the given size.
    #[must_use]
    pub fn new(size: SurfaceSize) -> Self {
        Self {
            size,
            pending: Vec::new(),
            last_frame: Vec::new(),
            frames_presented: 0,
            fail_presents: false,
        }
    }

    /// Creates a surface whose every present call fails.
    #[must_use]
    pub fn failing(size: SurfaceSize) -> Self {
        Self {
            fail_presents: true,
            ..Self::new(size)
        }
    }

    /// Draw calls of the most recently presented frame.
    #[must_use]
    pub fn last_frame(&self) -> &[DrawOp] {
        &self.last_frame
    }

    /// Number of frames presented so far.
    #[must_use]
    pub const fn frames_presented(&self) -> u64 {
        self.frames_presented
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> SurfaceSize {
        self.size
    }

    fn fill(&mut self, color: Color) {
        self.pending.push(DrawOp::Fill(color));
    }

    fn draw_rectangle(&mut self, rect: Rect, color: Color) {
        self.pending.push(DrawOp::Rectangle { rect, color });
    }

    fn draw_circle_lines(&mut self, center: Vec2, radius: f32, thickness: f32, color: Color) {
        self.pending.push(DrawOp::CircleLines {
            center,
            radius,
            thickness,
            color,
        });
    }

    fn draw_text(&mut self, text: &str, top_left: Vec2, font_size: f32, color: Color) {
        self.pending.push(DrawOp::Text {
            text: text.to_owned(),
            position: top_left,
            font_size,
            color,
        });
    }

    fn measure_text(&self, text: &str, font_size: f32) -> Vec2 {
        let glyphs = text.chars().count() as f32;
        Vec2::new(glyphs * font_size * GLYPH_WIDTH_RATIO, font_size)
    }

    fn present(&mut self) -> Result<(), RenderingError> {
        if self.fail_presents {
            self.pending.clear();
            return Err(RenderingError::PresentFailed {
                reason: "recording surface configured to fail".to_owned(),
            });
        }

        self.last_frame = std::mem::take(&mut self.pending);
        self.frames_presented += 1;
        Ok(())
    }
}
