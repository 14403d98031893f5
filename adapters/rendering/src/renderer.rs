//! Draws a [`Scene`] onto a [`Surface`].

use glam::Vec2;

use crate::{
    BoardLayout, BotPresentation, Button, CellPresentation, Color, Rect, RenderingError,
    RoundPresentation, Scene, ScoreRowPresentation, Surface,
};

/// Alpha applied to claimed and unclaimed cells so the board reads as a wash.
const CELL_ALPHA: u8 = 100;
/// Alpha applied to owner-id overlays.
const LABEL_ALPHA: u8 = 50;
/// Font size of scoreboard names and percentages.
const SCOREBOARD_FONT_SIZE: f32 = 24.0;
const SCOREBOARD_BORDER: f32 = 10.0;
const SCOREBOARD_SPACING: f32 = 5.0;
/// Horizontal position of the percentage column relative to the panel width.
const SCORE_COLUMN_RATIO: f32 = 0.8;
/// Gap between the first button and the round readout.
const READOUT_OFFSET: f32 = 10.0;

/// Stateless renderer turning scenes into surface draw calls.
#[derive(Clone, Copy, Debug)]
pub struct FrameRenderer {
    layout: BoardLayout,
}

impl FrameRenderer {
    /// Creates a renderer for the provided layout.
    #[must_use]
    pub const fn new(layout: BoardLayout) -> Self {
        Self { layout }
    }

    /// Layout the renderer draws with.
    #[must_use]
    pub const fn layout(&self) -> BoardLayout {
        self.layout
    }

    /// Draws the complete frame and presents it.
    pub fn render<S>(&self, scene: &Scene, surface: &mut S) -> Result<(), RenderingError>
    where
        S: Surface + ?Sized,
    {
        surface.fill(Color::WHITE);
        self.draw_cells(&scene.cells, scene.show_labels, surface);
        self.draw_bots(&scene.bots, surface);
        self.draw_scoreboard(&scene.scoreboard, scene.show_labels, surface);
        draw_buttons(&scene.buttons, scene.round, surface);
        surface.present()
    }

    fn draw_cells<S>(&self, cells: &[CellPresentation], show_labels: bool, surface: &mut S)
    where
        S: Surface + ?Sized,
    {
        let w = self.layout.cell_length();
        let font_size = (w * 0.8).ceil();
        let label_color = Color::BLACK.with_alpha_u8(LABEL_ALPHA);

        for cell in cells {
            let rect = self.layout.cell_rect(cell.cell);
            surface.draw_rectangle(rect, cell.color.with_alpha_u8(CELL_ALPHA));

            if show_labels {
                let text = cell.owner.get().to_string();
                draw_centered_text(surface, &text, rect.center(), font_size, label_color);
            }
        }
    }

    fn draw_bots<S>(&self, bots: &[BotPresentation], surface: &mut S)
    where
        S: Surface + ?Sized,
    {
        let w = self.layout.cell_length();
        let radius = self.layout.bot_radius();
        let ring_thickness = (w / 3.0).ceil();
        let border_thickness = (w / 10.0).ceil();

        for bot in bots {
            let center = self.layout.bot_center(bot.cell);
            surface.draw_circle_lines(center, radius, ring_thickness, bot.color);
            surface.draw_circle_lines(center, radius, border_thickness, Color::BLACK);
        }
    }

    fn draw_scoreboard<S>(&self, rows: &[ScoreRowPresentation], show_labels: bool, surface: &mut S)
    where
        S: Surface + ?Sized,
    {
        let panel = self.layout.panel();
        surface.draw_rectangle(panel, Color::GREY);

        let line_height = surface.measure_text("I", SCOREBOARD_FONT_SIZE).y;
        let swatch_size = (line_height * 0.95).ceil();
        let name_x = panel.x + SCOREBOARD_BORDER + swatch_size + SCOREBOARD_SPACING;
        let score_x = panel.x + panel.width * SCORE_COLUMN_RATIO;
        let label_color = Color::BLACK.with_alpha_u8(LABEL_ALPHA);
        let mut y = panel.y + SCOREBOARD_BORDER;

        for row in rows {
            let swatch = Rect::new(panel.x + SCOREBOARD_BORDER, y, swatch_size, swatch_size);
            surface.draw_rectangle(swatch, row.color);

            if show_labels {
                let text = row.id.get().to_string();
                draw_centered_text(surface, &text, swatch.center(), swatch_size, label_color);
            }

            surface.draw_text(
                &row.name,
                Vec2::new(name_x, y),
                SCOREBOARD_FONT_SIZE,
                Color::BLACK,
            );
            surface.draw_text(
                &format!("{} %", row.percentage),
                Vec2::new(score_x, y),
                SCOREBOARD_FONT_SIZE,
                Color::BLACK,
            );

            y += line_height + SCOREBOARD_SPACING;
        }
    }
}

fn draw_buttons<S>(buttons: &[Button], round: RoundPresentation, surface: &mut S)
where
    S: Surface + ?Sized,
{
    let Some(first) = buttons.first() else {
        return;
    };
    let font_size = (first.bounds().height * 0.8).ceil();

    for button in buttons {
        let bounds = button.bounds();
        surface.draw_rectangle(bounds, Color::BUTTON);
        draw_centered_text(
            surface,
            button.label(),
            bounds.center(),
            font_size,
            Color::BLACK,
        );
    }

    let readout = round.readout();
    let size = surface.measure_text(&readout, font_size);
    let anchor = first.bounds();
    let position = Vec2::new(anchor.x, anchor.y - READOUT_OFFSET - size.y * 0.5);
    surface.draw_text(&readout, position, font_size, Color::BLACK);
}

fn draw_centered_text<S>(surface: &mut S, text: &str, center: Vec2, font_size: f32, color: Color)
where
    S: Surface + ?Sized,
{
    let size = surface.measure_text(text, font_size);
    surface.draw_text(text, center - size * 0.5, font_size, color);
}
