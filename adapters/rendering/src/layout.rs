//! Screen-space geometry of the square board and the scoreboard panel.

use glam::Vec2;
use gridclaim_core::{CellCoord, ConfigurationError};

use crate::{Rect, SurfaceSize};

/// Pixel layout of the board derived from the surface and grid dimensions.
///
/// The board is anchored to the bottom-left corner of the surface with grid
/// row `0` drawn as the bottom row. Recompute the layout whenever the
/// simulation is set up again.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoardLayout {
    surface: SurfaceSize,
    grid_length: u32,
    cell_length: f32,
}

impl BoardLayout {
    /// Fraction of the cell length used as the bot marker radius.
    pub const BOT_RADIUS_RATIO: f32 = 0.4;

    /// Derives the layout for a square grid of `grid_length` cells per side.
    ///
    /// Fails when the grid is empty or the surface cannot give every cell at
    /// least one whole pixel.
    pub fn compute(surface: SurfaceSize, grid_length: u32) -> Result<Self, ConfigurationError> {
        if grid_length == 0 {
            return Err(ConfigurationError::DegenerateBoard {
                length: grid_length,
            });
        }

        let cell_length = (surface.shorter_side() / grid_length as f32).floor();
        if cell_length.is_nan() || cell_length < 1.0 {
            return Err(ConfigurationError::SurfaceTooSmall {
                width: surface.width.max(0.0) as u32,
                height: surface.height.max(0.0) as u32,
                length: grid_length,
            });
        }

        Ok(Self {
            surface,
            grid_length,
            cell_length,
        })
    }

    /// Side length of a single cell in whole pixels.
    #[must_use]
    pub const fn cell_length(&self) -> f32 {
        self.cell_length
    }

    /// Number of cells along each board edge.
    #[must_use]
    pub const fn grid_length(&self) -> u32 {
        self.grid_length
    }

    /// Surface dimensions the layout was computed for.
    #[must_use]
    pub const fn surface(&self) -> SurfaceSize {
        self.surface
    }

    /// Screen rectangle covered by the provided cell.
    #[must_use]
    pub fn cell_rect(&self, cell: CellCoord) -> Rect {
        let w = self.cell_length;
        Rect::new(
            cell.column() as f32 * w,
            self.surface.height - (cell.row() as f32 + 1.0) * w,
            w,
            w,
        )
    }

    /// Screen position of the center of a bot standing on the provided cell.
    #[must_use]
    pub fn bot_center(&self, cell: CellCoord) -> Vec2 {
        let w = self.cell_length;
        Vec2::new(
            (cell.column() as f32 + 0.5) * w,
            self.surface.height - (cell.row() as f32 + 0.5) * w,
        )
    }

    /// Radius of the bot marker.
    #[must_use]
    pub fn bot_radius(&self) -> f32 {
        self.cell_length * Self::BOT_RADIUS_RATIO
    }

    /// Region right of the square board reserved for the scoreboard.
    #[must_use]
    pub fn panel(&self) -> Rect {
        let left = self.surface.shorter_side();
        Rect::new(
            left,
            0.0,
            (self.surface.width - left).max(0.0),
            self.surface.height,
        )
    }
}
