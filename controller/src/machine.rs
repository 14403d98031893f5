//! Tick-driven state machine coupling user commands to the simulation.

use std::time::Duration;

use glam::Vec2;
use gridclaim_core::{ControlCommand, GameMode, Pace, Simulation};
use gridclaim_rendering::{BoardLayout, Button, ButtonBar, FrameRenderer, Scene, Surface};
use tracing::{debug, info, trace};

use crate::{scene::build_scene, ControllerConfig, ControllerError};

/// Drives a [`Simulation`] round by round and renders it onto a [`Surface`].
///
/// The controller is single-threaded: commands take effect on the next call
/// to [`GameController::process`], which never sleeps. The delay it returns
/// is advisory only and ignores the time spent producing the frame, so hosts
/// that drive it from a cooperative scheduler may honour it loosely.
#[derive(Debug)]
pub struct GameController<S, F> {
    simulation: S,
    surface: F,
    config: ControllerConfig,
    renderer: FrameRenderer,
    buttons: ButtonBar,
    mode: GameMode,
    pace: Pace,
    done: bool,
    show_labels: bool,
}

impl<S, F> GameController<S, F>
where
    S: Simulation,
    F: Surface,
{
    /// Sets up the simulation and lays out the board and the button bar.
    ///
    /// The controller starts paused at normal pace with labels hidden.
    pub fn new(
        mut simulation: S,
        surface: F,
        config: ControllerConfig,
    ) -> Result<Self, ControllerError> {
        let renderer = prepare(&mut simulation, &surface, config)?;
        let buttons = ButtonBar::standard(surface.size());

        Ok(Self {
            simulation,
            surface,
            config,
            renderer,
            buttons,
            mode: GameMode::Paused,
            pace: Pace::Normal,
            done: false,
            show_labels: false,
        })
    }

    /// Applies a user command. Only [`ControlCommand::Reset`] can fail, in
    /// which case the simulation error is returned and the game stays paused.
    pub fn handle_command(&mut self, command: ControlCommand) -> Result<(), ControllerError> {
        match command {
            ControlCommand::Play => {
                self.mode = GameMode::Playing;
                self.pace = Pace::Normal;
            }
            ControlCommand::Pause => self.mode = GameMode::Paused,
            ControlCommand::SingleStep => self.mode = GameMode::SingleStep,
            ControlCommand::FastForward => {
                self.mode = GameMode::Playing;
                self.pace = Pace::Fast;
            }
            ControlCommand::Reset => {
                self.mode = GameMode::Resetting;
                if let Err(error) = self.setup() {
                    self.mode = GameMode::Paused;
                    return Err(error);
                }
                self.mode = GameMode::SingleStep;
            }
            ControlCommand::ToggleLabels => self.show_labels = !self.show_labels,
        }

        debug!(
            ?command,
            mode = ?self.mode,
            pace = ?self.pace,
            show_labels = self.show_labels,
            "command applied"
        );
        Ok(())
    }

    /// Hit-tests the button bar and applies the command of the first button,
    /// in registration order, whose bounds include `point`.
    ///
    /// Clicks outside every button are ignored and yield `Ok(None)`.
    pub fn resolve_click(
        &mut self,
        point: Vec2,
    ) -> Result<Option<ControlCommand>, ControllerError> {
        let Some(command) = self.buttons.hit(point).map(Button::command) else {
            return Ok(None);
        };

        debug!(x = point.x, y = point.y, ?command, "button clicked");
        self.handle_command(command)?;
        Ok(Some(command))
    }

    /// Runs one tick: advances the simulation unless paused, renders the
    /// current state, and returns the recommended wait before the next tick.
    ///
    /// A concluded game is set up again before the next step, so pressing
    /// play after the final round starts a fresh game.
    pub fn process(&mut self) -> Result<Duration, ControllerError> {
        if self.mode != GameMode::Paused {
            self.advance()?;
        }

        self.redraw()?;
        Ok(self.advisory_delay())
    }

    /// Renders and presents the current state without advancing it.
    pub fn redraw(&mut self) -> Result<(), ControllerError> {
        let scene = self.scene()?;
        self.renderer.render(&scene, &mut self.surface)?;
        Ok(())
    }

    /// Captures the frame that the next render would draw.
    pub fn scene(&self) -> Result<Scene, ControllerError> {
        Ok(build_scene(
            &self.simulation,
            &self.buttons,
            self.show_labels,
        )?)
    }

    /// Recommended delay before the next tick for the current pace.
    #[must_use]
    pub fn advisory_delay(&self) -> Duration {
        match self.pace {
            Pace::Fast => Duration::ZERO,
            Pace::Normal => Duration::from_secs(1) / self.config.tick_rates().rate(Pace::Normal),
        }
    }

    /// Current game mode.
    #[must_use]
    pub const fn mode(&self) -> GameMode {
        self.mode
    }

    /// Current pace.
    #[must_use]
    pub const fn pace(&self) -> Pace {
        self.pace
    }

    /// Whether the simulation reported that the game concluded.
    #[must_use]
    pub const fn is_done(&self) -> bool {
        self.done
    }

    /// Whether owner ids are overlaid on the board.
    #[must_use]
    pub const fn show_labels(&self) -> bool {
        self.show_labels
    }

    /// Read-only access to the driven simulation.
    #[must_use]
    pub const fn simulation(&self) -> &S {
        &self.simulation
    }

    /// Read-only access to the drawing surface.
    #[must_use]
    pub const fn surface(&self) -> &F {
        &self.surface
    }

    /// Layout used for the current game.
    #[must_use]
    pub const fn layout(&self) -> BoardLayout {
        self.renderer.layout()
    }

    /// Buttons in hit-test order.
    #[must_use]
    pub fn buttons(&self) -> &[Button] {
        self.buttons.buttons()
    }

    /// Session configuration.
    #[must_use]
    pub const fn config(&self) -> ControllerConfig {
        self.config
    }

    fn setup(&mut self) -> Result<(), ControllerError> {
        self.renderer = prepare(&mut self.simulation, &self.surface, self.config)?;
        self.done = false;
        Ok(())
    }

    fn advance(&mut self) -> Result<(), ControllerError> {
        if self.done {
            info!("restarting concluded game");
            self.setup()?;
        }

        let concluded = self.simulation.step()?;
        trace!(
            round = self.simulation.current_round(),
            mode = ?self.mode,
            "round processed"
        );

        if concluded {
            self.done = true;
            self.mode = GameMode::Paused;
            info!(
                rounds = self.simulation.current_round(),
                "game concluded"
            );
        }

        if self.mode == GameMode::SingleStep {
            self.mode = GameMode::Paused;
        }

        Ok(())
    }
}

fn prepare<S, F>(
    simulation: &mut S,
    surface: &F,
    config: ControllerConfig,
) -> Result<FrameRenderer, ControllerError>
where
    S: Simulation,
    F: Surface,
{
    let round_budget = config.round_budget();
    simulation.setup(round_budget)?;

    let grid_length = simulation.grid().length();
    let layout = BoardLayout::compute(surface.size(), grid_length)?;
    info!(
        rounds = round_budget.get(),
        grid_length,
        cell_length = layout.cell_length(),
        "simulation set up"
    );
    Ok(FrameRenderer::new(layout))
}
