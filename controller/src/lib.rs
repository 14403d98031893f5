#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Game controller that paces a grid simulation and presents it.
//!
//! [`GameController`] owns a [`Simulation`](gridclaim_core::Simulation) and a
//! [`Surface`](gridclaim_rendering::Surface). Hosts call
//! [`GameController::process`] once per tick and wait the returned advisory
//! delay; user input reaches the controller through
//! [`GameController::handle_command`] or [`GameController::resolve_click`].

mod machine;
mod scene;

pub use machine::GameController;

use gridclaim_core::{ConfigurationError, DomainError, RoundBudget, SimulationError, TickRates};
use gridclaim_rendering::RenderingError;
use thiserror::Error;

/// Session-wide settings applied every time the simulation is set up.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ControllerConfig {
    round_budget: RoundBudget,
    tick_rates: TickRates,
}

impl ControllerConfig {
    /// Creates a configuration with the default tick rates.
    #[must_use]
    pub fn new(round_budget: RoundBudget) -> Self {
        Self {
            round_budget,
            tick_rates: TickRates::default(),
        }
    }

    /// Overrides the tick rates used to derive the advisory delay.
    #[must_use]
    pub fn with_tick_rates(mut self, tick_rates: TickRates) -> Self {
        self.tick_rates = tick_rates;
        self
    }

    /// Round budget passed to every setup.
    #[must_use]
    pub const fn round_budget(&self) -> RoundBudget {
        self.round_budget
    }

    /// Tick rates associated with each pace.
    #[must_use]
    pub const fn tick_rates(&self) -> TickRates {
        self.tick_rates
    }
}

/// Failures surfaced by the controller. None of them are retried.
#[derive(Debug, PartialEq, Error)]
pub enum ControllerError {
    /// The session configuration or board geometry is unusable.
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
    /// The simulation broke its contract with the controller.
    #[error(transparent)]
    Domain(#[from] DomainError),
    /// The simulation failed to set up or step.
    #[error(transparent)]
    Simulation(#[from] SimulationError),
    /// The frame could not be presented.
    #[error(transparent)]
    Rendering(#[from] RenderingError),
}
