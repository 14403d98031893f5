//! Fixed-position button bar bound to controller commands.

use glam::Vec2;
use gridclaim_core::ControlCommand;

use crate::{Rect, SurfaceSize};

/// Immutable on-screen affordance bound to a single command.
#[derive(Clone, Debug, PartialEq)]
pub struct Button {
    bounds: Rect,
    label: String,
    command: ControlCommand,
}

impl Button {
    /// Creates a new button covering `bounds`.
    #[must_use]
    pub fn new<T>(bounds: Rect, label: T, command: ControlCommand) -> Self
    where
        T: Into<String>,
    {
        Self {
            bounds,
            label: label.into(),
            command,
        }
    }

    /// Screen rectangle covered by the button.
    #[must_use]
    pub const fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Text drawn at the center of the button.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Command executed when the button is clicked.
    #[must_use]
    pub const fn command(&self) -> ControlCommand {
        self.command
    }

    /// Reports whether the point lies on the button, edges included.
    #[must_use]
    pub fn contains(&self, point: Vec2) -> bool {
        self.bounds.contains(point)
    }
}

/// Ordered collection of buttons; earlier buttons win overlapping hits.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ButtonBar {
    buttons: Vec<Button>,
}

impl ButtonBar {
    /// Size of every standard button in pixels.
    pub const BUTTON_SIZE: Vec2 = Vec2::new(50.0, 30.0);
    /// Gap kept around every standard button in pixels.
    pub const BORDER: f32 = 5.0;

    /// Creates a bar from explicitly positioned buttons.
    #[must_use]
    pub fn from_buttons(buttons: Vec<Button>) -> Self {
        Self { buttons }
    }

    /// Lays out one button per [`ControlCommand`] left to right along the
    /// bottom edge of the scoreboard panel.
    #[must_use]
    pub fn standard(surface: SurfaceSize) -> Self {
        let size = Self::BUTTON_SIZE;
        let border = Self::BORDER;
        let top = surface.height - border - size.y;
        let mut left = surface.shorter_side() + border;

        let buttons = ControlCommand::ALL
            .iter()
            .map(|command| {
                let button = Button::new(
                    Rect::new(left, top, size.x, size.y),
                    command.label(),
                    *command,
                );
                left += size.x + 2.0 * border;
                button
            })
            .collect();

        Self { buttons }
    }

    /// Buttons in registration order.
    #[must_use]
    pub fn buttons(&self) -> &[Button] {
        &self.buttons
    }

    /// First button, in registration order, containing the point.
    #[must_use]
    pub fn hit(&self, point: Vec2) -> Option<&Button> {
        self.buttons.iter().find(|button| button.contains(point))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_bar_is_laid_out_left_to_right() {
        let bar = ButtonBar::standard(SurfaceSize::new(1000.0, 600.0));
        let buttons = bar.buttons();

        assert_eq!(buttons.len(), ControlCommand::ALL.len());
        assert_eq!(buttons[0].bounds(), Rect::new(605.0, 565.0, 50.0, 30.0));
        assert_eq!(buttons[1].bounds(), Rect::new(665.0, 565.0, 50.0, 30.0));
        assert_eq!(buttons[5].label(), "Id#");
        assert_eq!(buttons[5].command(), ControlCommand::ToggleLabels);
    }

    #[test]
    fn hit_prefers_earlier_buttons_when_overlapping() {
        let bar = ButtonBar::from_buttons(vec![
            Button::new(Rect::new(0.0, 0.0, 10.0, 10.0), "a", ControlCommand::Play),
            Button::new(Rect::new(5.0, 5.0, 10.0, 10.0), "b", ControlCommand::Pause),
        ]);

        let hit = bar.hit(Vec2::new(7.0, 7.0)).map(Button::command);
        assert_eq!(hit, Some(ControlCommand::Play));
        let hit = bar.hit(Vec2::new(12.0, 12.0)).map(Button::command);
        assert_eq!(hit, Some(ControlCommand::Pause));
        assert!(bar.hit(Vec2::new(16.0, 16.0)).is_none());
    }
}
