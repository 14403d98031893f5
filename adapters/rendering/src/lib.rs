#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Shared rendering contracts for Grid Claim adapters.
//!
//! The controller describes each frame as a backend-agnostic [`Scene`] and
//! hands it to [`FrameRenderer`], which lays it out with [`BoardLayout`] and
//! issues primitive draw calls against any [`Surface`] implementation.

mod buttons;
mod layout;
mod recording;
mod renderer;

pub use buttons::{Button, ButtonBar};
pub use layout::BoardLayout;
pub use recording::{DrawOp, RecordingSurface};
pub use renderer::FrameRenderer;

use glam::Vec2;
use gridclaim_core::{BotId, CellCoord, Rgb};
use std::{error::Error, fmt};

/// RGBA color used when presenting frames.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    /// Red channel intensity in the range 0.0..=1.0.
    pub red: f32,
    /// Green channel intensity in the range 0.0..=1.0.
    pub green: f32,
    /// Blue channel intensity in the range 0.0..=1.0.
    pub blue: f32,
    /// Alpha channel intensity in the range 0.0..=1.0.
    pub alpha: f32,
}

impl Color {
    /// Opaque white used as the board background.
    pub const WHITE: Color = Color::from_rgb_u8(255, 255, 255);
    /// Opaque black used for outlines and text.
    pub const BLACK: Color = Color::from_rgb_u8(0, 0, 0);
    /// Opaque grey used as the scoreboard background.
    pub const GREY: Color = Color::from_rgb_u8(128, 128, 128);
    /// Opaque slate used to fill buttons.
    pub const BUTTON: Color = Color::from_rgb_u8(119, 136, 153);

    /// Creates a new color from floating point channels.
    #[must_use]
    pub const fn new(red: f32, green: f32, blue: f32, alpha: f32) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Creates an opaque color from byte RGB values.
    #[must_use]
    pub const fn from_rgb_u8(red: u8, green: u8, blue: u8) -> Self {
        Self {
            red: red as f32 / 255.0,
            green: green as f32 / 255.0,
            blue: blue as f32 / 255.0,
            alpha: 1.0,
        }
    }

    /// Creates an opaque color from a core RGB triple.
    #[must_use]
    pub const fn from_rgb(rgb: Rgb) -> Self {
        Self::from_rgb_u8(rgb.red(), rgb.green(), rgb.blue())
    }

    /// Returns the same color with its alpha replaced by `alpha / 255`.
    #[must_use]
    pub const fn with_alpha_u8(self, alpha: u8) -> Self {
        Self {
            alpha: alpha as f32 / 255.0,
            ..self
        }
    }
}

/// Pixel dimensions of a drawing surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceSize {
    /// Width in pixels.
    pub width: f32,
    /// Height in pixels.
    pub height: f32,
}

impl SurfaceSize {
    /// Creates a new surface size descriptor.
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Length of the shorter side, which bounds the square board.
    #[must_use]
    pub fn shorter_side(&self) -> f32 {
        self.width.min(self.height)
    }
}

/// Axis-aligned rectangle in screen space with its origin at the top-left.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    /// Left edge in pixels.
    pub x: f32,
    /// Top edge in pixels.
    pub y: f32,
    /// Width in pixels.
    pub width: f32,
    /// Height in pixels.
    pub height: f32,
}

impl Rect {
    /// Creates a new rectangle.
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Reports whether the point lies inside the rectangle, edges included.
    #[must_use]
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.x
            && point.x <= self.x + self.width
            && point.y >= self.y
            && point.y <= self.y + self.height
    }

    /// Center point of the rectangle.
    #[must_use]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width * 0.5, self.y + self.height * 0.5)
    }
}

/// Drawing surface and text metrics consumed by [`FrameRenderer`].
pub trait Surface {
    /// Pixel dimensions of the surface.
    fn size(&self) -> SurfaceSize;

    /// Clears the whole surface with a single color.
    fn fill(&mut self, color: Color);

    /// Fills an axis-aligned rectangle.
    fn draw_rectangle(&mut self, rect: Rect, color: Color);

    /// Strokes a circle outline of the given thickness, measured inwards.
    fn draw_circle_lines(&mut self, center: Vec2, radius: f32, thickness: f32, color: Color);

    /// Draws text with its bounding box anchored at `top_left`.
    fn draw_text(&mut self, text: &str, top_left: Vec2, font_size: f32, color: Color);

    /// Measures the bounding box of `text` rendered at `font_size`.
    fn measure_text(&self, text: &str, font_size: f32) -> Vec2;

    /// Makes the frame drawn since the previous call visible.
    fn present(&mut self) -> Result<(), RenderingError>;
}

/// Single board cell together with its resolved fill color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CellPresentation {
    /// Grid coordinate of the cell.
    pub cell: CellCoord,
    /// Bot owning the cell, or the neutral id.
    pub owner: BotId,
    /// Fill color derived from the owner.
    pub color: Color,
}

/// Bot marker drawn on top of the board.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BotPresentation {
    /// Grid cell currently occupied by the bot.
    pub cell: CellCoord,
    /// Ring color identifying the bot.
    pub color: Color,
}

/// Leaderboard line rendered in the scoreboard panel.
#[derive(Clone, Debug, PartialEq)]
pub struct ScoreRowPresentation {
    /// Identifier of the bot, drawn over the swatch when labels are shown.
    pub id: BotId,
    /// Display name of the bot.
    pub name: String,
    /// Share of the board expressed as a whole percentage.
    pub percentage: u32,
    /// Swatch color identifying the bot.
    pub color: Color,
}

/// Round counter shown above the button bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoundPresentation {
    /// Rounds played since the last setup.
    pub current: u32,
    /// Total rounds in the game.
    pub total: u32,
}

impl RoundPresentation {
    /// Formats the readout with fixed-width, left-aligned counters.
    #[must_use]
    pub fn readout(&self) -> String {
        format!("Round: {:<4}/{:<4}", self.current, self.total)
    }
}

/// Scene description of a single frame.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    /// Every board cell in row-major order.
    pub cells: Vec<CellPresentation>,
    /// Bot markers in roster order.
    pub bots: Vec<BotPresentation>,
    /// Leaderboard rows, best first.
    pub scoreboard: Vec<ScoreRowPresentation>,
    /// Buttons shown below the scoreboard.
    pub buttons: Vec<Button>,
    /// Round counter readout.
    pub round: RoundPresentation,
    /// Whether owner ids are drawn over cells and swatches.
    pub show_labels: bool,
}

/// Errors raised while presenting frames.
#[derive(Debug, PartialEq, Eq)]
pub enum RenderingError {
    /// The backend could not make the frame visible.
    PresentFailed {
        /// Backend-specific description of the failure.
        reason: String,
    },
}

impl fmt::Display for RenderingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PresentFailed { reason } => {
                write!(f, "failed to present frame: {reason}")
            }
        }
    }
}

impl Error for RenderingError {}
