//! Optional TOML session configuration.
//!
//! ```toml
//! [game]
//! rounds = 1000
//! grid_length = 40
//! seed = 42
//! normal_rate = 10
//! fast_rate = 50
//!
//! [window]
//! width = 1200
//! height = 800
//! vsync = true
//! ```
//!
//! Every field is optional and falls back to the defaults below.

use std::{fs, path::Path};

use anyhow::{Context, Result};
use gridclaim_controller::ControllerConfig;
use gridclaim_core::{RoundBudget, TickRates};
use gridclaim_world::{DEFAULT_GRID_LENGTH, DEFAULT_SEED};
use serde::Deserialize;

const DEFAULT_ROUNDS: u32 = 1000;

/// Full session configuration after defaults are applied.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct ArenaConfig {
    pub(crate) game: GameSection,
    pub(crate) window: WindowSection,
}

/// Settings applied to the simulation and the controller.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct GameSection {
    pub(crate) rounds: u32,
    pub(crate) grid_length: u32,
    pub(crate) seed: u64,
    pub(crate) normal_rate: u32,
    pub(crate) fast_rate: u32,
}

impl Default for GameSection {
    fn default() -> Self {
        Self {
            rounds: DEFAULT_ROUNDS,
            grid_length: DEFAULT_GRID_LENGTH,
            seed: DEFAULT_SEED,
            normal_rate: TickRates::DEFAULT_NORMAL,
            fast_rate: TickRates::DEFAULT_FAST,
        }
    }
}

/// Settings applied to the macroquad window.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct WindowSection {
    pub(crate) width: u32,
    pub(crate) height: u32,
    pub(crate) vsync: bool,
}

impl Default for WindowSection {
    fn default() -> Self {
        Self {
            width: 1200,
            height: 800,
            vsync: true,
        }
    }
}

impl ArenaConfig {
    /// Reads and parses the file at `path`.
    pub(crate) fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::parse(&contents)
            .with_context(|| format!("failed to parse config file {}", path.display()))
    }

    /// Parses a TOML document.
    pub(crate) fn parse(contents: &str) -> Result<Self> {
        toml::from_str(contents).context("invalid arena configuration")
    }

    /// Validates the game section into controller settings.
    pub(crate) fn controller_config(&self) -> Result<ControllerConfig> {
        let rounds = RoundBudget::new(self.game.rounds).context("invalid `game.rounds`")?;
        let rates = TickRates::new(self.game.normal_rate, self.game.fast_rate)
            .context("invalid tick rates")?;
        Ok(ControllerConfig::new(rounds).with_tick_rates(rates))
    }
}
