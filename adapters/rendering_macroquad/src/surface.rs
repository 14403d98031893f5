use glam::Vec2;
use gridclaim_rendering::{Color, Rect, RenderingError, Surface, SurfaceSize};
use macroquad::{shapes, text, window};

/// [`Surface`] drawing straight into the macroquad window.
///
/// The size is captured once when the surface is created; the window is not
/// resizable so the board layout stays valid for the whole session. Frames
/// become visible when the render loop yields to `next_frame`, so
/// [`Surface::present`] never fails.
#[derive(Clone, Copy, Debug)]
pub struct MacroquadSurface {
    size: SurfaceSize,
}

impl MacroquadSurface {
    /// Captures the current screen dimensions. Must be called from within
    /// the macroquad window future.
    #[must_use]
    pub fn from_screen() -> Self {
        Self {
            size: SurfaceSize::new(window::screen_width(), window::screen_height()),
        }
    }
}

impl Surface for MacroquadSurface {
    fn size(&self) -> SurfaceSize {
        self.size
    }

    fn fill(&mut self, color: Color) {
        window::clear_background(to_macroquad_color(color));
    }

    fn draw_rectangle(&mut self, rect: Rect, color: Color) {
        shapes::draw_rectangle(
            rect.x,
            rect.y,
            rect.width,
            rect.height,
            to_macroquad_color(color),
        );
    }

    fn draw_circle_lines(&mut self, center: Vec2, radius: f32, thickness: f32, color: Color) {
        // Macroquad strokes centred on the radius; the contract strokes inwards.
        shapes::draw_circle_lines(
            center.x,
            center.y,
            radius - thickness * 0.5,
            thickness,
            to_macroquad_color(color),
        );
    }

    fn draw_text(&mut self, text: &str, top_left: Vec2, font_size: f32, color: Color) {
        let dimensions = text::measure_text(text, None, font_size as u16, 1.0);
        let _ = text::draw_text(
            text,
            top_left.x,
            top_left.y + dimensions.offset_y,
            font_size,
            to_macroquad_color(color),
        );
    }

    fn measure_text(&self, text: &str, font_size: f32) -> Vec2 {
        let dimensions = text::measure_text(text, None, font_size as u16, 1.0);
        Vec2::new(dimensions.width, dimensions.height)
    }

    fn present(&mut self) -> Result<(), RenderingError> {
        Ok(())
    }
}

fn to_macroquad_color(color: Color) -> macroquad::color::Color {
    macroquad::color::Color::new(color.red, color.green, color.blue, color.alpha)
}
