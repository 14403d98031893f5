#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Macroquad-backed window for Grid Claim.
//!
//! Macroquad's optional audio stack depends on native ALSA development
//! libraries, which are unavailable in the containerised CI environment, so
//! the crate depends on macroquad without its default `audio` feature.
//!
//! The window hosts a [`GameController`] drawing onto a [`MacroquadSurface`].
//! Every display frame polls keyboard shortcuts and mouse clicks, then either
//! processes a controller tick, when the [`TickScheduler`] says one is due, or
//! redraws the current state.

mod scheduler;
mod surface;

pub use scheduler::TickScheduler;
pub use surface::MacroquadSurface;

use std::{sync::mpsc, time::Duration};

use anyhow::{Context, Result};
use glam::Vec2;
use gridclaim_controller::GameController;
use gridclaim_core::{ControlCommand, GameMode, Simulation};
use macroquad::input::{
    is_key_pressed, is_mouse_button_pressed, mouse_position, KeyCode, MouseButton,
};
use tracing::{debug, info};

const DEFAULT_WINDOW_WIDTH: i32 = 1200;
const DEFAULT_WINDOW_HEIGHT: i32 = 800;

/// Snapshot of edge-triggered keyboard shortcuts observed during a single frame.
#[derive(Clone, Copy, Debug, Default)]
struct KeyboardShortcuts {
    /// `Q` or `Escape` to quit the game loop.
    quit_requested: bool,
    /// `Space` toggles between playing and paused.
    toggle_play: bool,
    /// `S` advances a single round.
    single_step: bool,
    /// `F` plays at the fast pace.
    fast_forward: bool,
    /// `R` restarts the game.
    reset: bool,
    /// `I` toggles owner-id overlays.
    toggle_labels: bool,
}

impl KeyboardShortcuts {
    fn poll() -> Self {
        Self {
            quit_requested: is_key_pressed(KeyCode::Escape) || is_key_pressed(KeyCode::Q),
            toggle_play: is_key_pressed(KeyCode::Space),
            single_step: is_key_pressed(KeyCode::S),
            fast_forward: is_key_pressed(KeyCode::F),
            reset: is_key_pressed(KeyCode::R),
            toggle_labels: is_key_pressed(KeyCode::I),
        }
    }

    /// Commands requested this frame, in the order the buttons are laid out.
    fn commands(self, mode: GameMode) -> Vec<ControlCommand> {
        let mut commands = Vec::new();
        if self.toggle_play {
            commands.push(if mode == GameMode::Paused {
                ControlCommand::Play
            } else {
                ControlCommand::Pause
            });
        }
        if self.single_step {
            commands.push(ControlCommand::SingleStep);
        }
        if self.fast_forward {
            commands.push(ControlCommand::FastForward);
        }
        if self.reset {
            commands.push(ControlCommand::Reset);
        }
        if self.toggle_labels {
            commands.push(ControlCommand::ToggleLabels);
        }
        commands
    }
}

/// Window host implemented on top of macroquad.
#[derive(Clone, Debug)]
pub struct MacroquadBackend {
    swap_interval: Option<i32>,
    window_title: String,
    window_width: i32,
    window_height: i32,
}

impl Default for MacroquadBackend {
    fn default() -> Self {
        Self {
            swap_interval: None,
            window_title: "Grid Claim".to_owned(),
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
        }
    }
}

impl MacroquadBackend {
    /// Returns a backend that requests the platform's default swap interval.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Configures the backend to request a specific swap interval from the platform.
    #[must_use]
    pub fn with_swap_interval(mut self, swap_interval: Option<i32>) -> Self {
        self.swap_interval = swap_interval;
        self
    }

    /// Configures the backend to either synchronise presentation with the display refresh rate
    /// or render as fast as possible.
    #[must_use]
    pub fn with_vsync(self, enabled: bool) -> Self {
        let swap_interval = if enabled { Some(1) } else { Some(0) };
        self.with_swap_interval(swap_interval)
    }

    /// Configures the window dimensions in pixels. The board occupies the
    /// square on the left, the scoreboard the remaining width.
    #[must_use]
    pub fn with_window_size(mut self, width: u32, height: u32) -> Self {
        self.window_width = i32::try_from(width).unwrap_or(i32::MAX);
        self.window_height = i32::try_from(height).unwrap_or(i32::MAX);
        self
    }

    /// Configures the window title.
    #[must_use]
    pub fn with_title<T>(mut self, title: T) -> Self
    where
        T: Into<String>,
    {
        self.window_title = title.into();
        self
    }

    /// Opens the window and runs the game until the user quits.
    ///
    /// `build` is invoked once inside the window, where the screen size is
    /// known, to create the controller around a [`MacroquadSurface`]. Errors
    /// raised while building or driving the controller close the window and
    /// are returned to the caller.
    pub fn run<S, B>(self, build: B) -> Result<()>
    where
        S: Simulation + 'static,
        B: FnOnce(MacroquadSurface) -> Result<GameController<S, MacroquadSurface>> + 'static,
    {
        let Self {
            swap_interval,
            window_title,
            window_width,
            window_height,
        } = self;

        let mut config = macroquad::window::Conf {
            window_title,
            window_width,
            window_height,
            window_resizable: false,
            ..macroquad::window::Conf::default()
        };
        if let Some(swap_interval) = swap_interval {
            config.platform.swap_interval = Some(swap_interval);
        }

        let (outcome_sender, outcome_receiver) = mpsc::channel::<Result<()>>();

        macroquad::Window::from_config(config, async move {
            let surface = MacroquadSurface::from_screen();
            let outcome = match build(surface).context("failed to create game controller") {
                Ok(mut controller) => drive(&mut controller).await,
                Err(error) => Err(error),
            };
            let _ = outcome_sender.send(outcome);
        });

        outcome_receiver.try_recv().unwrap_or(Ok(()))
    }
}

async fn drive<S>(controller: &mut GameController<S, MacroquadSurface>) -> Result<()>
where
    S: Simulation,
{
    info!("window opened");
    let mut scheduler = TickScheduler::new();

    loop {
        let keyboard = KeyboardShortcuts::poll();
        if keyboard.quit_requested {
            info!("quit requested");
            return Ok(());
        }

        for command in keyboard.commands(controller.mode()) {
            controller
                .handle_command(command)
                .with_context(|| format!("failed to apply {command:?}"))?;
        }

        if is_mouse_button_pressed(MouseButton::Left) {
            let (x, y) = mouse_position();
            if controller
                .resolve_click(Vec2::new(x, y))
                .context("failed to apply button click")?
                .is_none()
            {
                debug!(x, y, "click outside every button");
            }
        }

        let frame_time = Duration::from_secs_f32(macroquad::time::get_frame_time().max(0.0));
        if scheduler.advance(frame_time) {
            let delay = controller.process().context("failed to process tick")?;
            scheduler.reschedule(delay);
        } else {
            controller.redraw().context("failed to redraw frame")?;
        }

        macroquad::window::next_frame().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn space_plays_when_paused_and_pauses_otherwise() {
        let shortcuts = KeyboardShortcuts {
            toggle_play: true,
            ..KeyboardShortcuts::default()
        };

        assert_eq!(
            shortcuts.commands(GameMode::Paused),
            vec![ControlCommand::Play]
        );
        assert_eq!(
            shortcuts.commands(GameMode::Playing),
            vec![ControlCommand::Pause]
        );
        assert_eq!(
            shortcuts.commands(GameMode::SingleStep),
            vec![ControlCommand::Pause]
        );
    }

    #[test]
    fn simultaneous_shortcuts_follow_button_order() {
        let shortcuts = KeyboardShortcuts {
            toggle_labels: true,
            reset: true,
            single_step: true,
            ..KeyboardShortcuts::default()
        };

        assert_eq!(
            shortcuts.commands(GameMode::Paused),
            vec![
                ControlCommand::SingleStep,
                ControlCommand::Reset,
                ControlCommand::ToggleLabels,
            ]
        );
    }

    #[test]
    fn no_shortcuts_means_no_commands() {
        assert!(KeyboardShortcuts::default()
            .commands(GameMode::Playing)
            .is_empty());
    }

    #[test]
    fn window_size_builder_overrides_defaults() {
        let backend = MacroquadBackend::new()
            .with_window_size(640, 480)
            .with_vsync(false)
            .with_title("arena");

        assert_eq!(backend.window_width, 640);
        assert_eq!(backend.window_height, 480);
        assert_eq!(backend.swap_interval, Some(0));
        assert_eq!(backend.window_title, "arena");
    }
}
