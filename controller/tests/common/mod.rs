#![allow(dead_code)]

use gridclaim_controller::{ControllerConfig, GameController};
use gridclaim_core::{
    BotId, BotSnapshot, BotView, CellCoord, ColorMap, ConfigurationError, GridView,
    OwnershipGrid, RoundBudget, ScoreTable, Simulation, SimulationError,
};
use gridclaim_rendering::{RecordingSurface, SurfaceSize};

/// Deterministic simulation: bot `i` starts on row `i - 1`, claims its start
/// cell, and walks one column to the right per round claiming every cell.
#[derive(Debug)]
pub struct StripSimulation {
    grid: OwnershipGrid,
    bot_count: u32,
    columns: Vec<u32>,
    color_map: ColorMap,
    round: u32,
    budget: u32,
    setups: u32,
    failing_setup: Option<u32>,
    uncolored: Option<BotId>,
}

impl StripSimulation {
    pub fn new(length: u32, bot_count: u32) -> Self {
        Self {
            grid: OwnershipGrid::new(length).expect("stub board is non-empty"),
            bot_count,
            columns: Vec::new(),
            color_map: ColorMap::new(),
            round: 0,
            budget: 0,
            setups: 0,
            failing_setup: None,
            uncolored: None,
        }
    }

    /// Makes the `nth` call to `setup` (1-based) and every later one fail.
    pub fn failing_from_setup(mut self, nth: u32) -> Self {
        self.failing_setup = Some(nth);
        self
    }

    /// Leaves the bot out of the color map.
    pub fn without_color_for(mut self, bot: BotId) -> Self {
        self.uncolored = Some(bot);
        self
    }

    pub fn setups(&self) -> u32 {
        self.setups
    }

    fn bot_ids(&self) -> impl Iterator<Item = BotId> {
        (1..=self.bot_count).map(BotId::new)
    }

    fn cell_of(&self, index: usize) -> CellCoord {
        CellCoord::new(self.columns[index], index as u32)
    }
}

impl Simulation for StripSimulation {
    fn setup(&mut self, round_budget: RoundBudget) -> Result<(), SimulationError> {
        self.setups += 1;
        if self.failing_setup.is_some_and(|nth| self.setups >= nth) {
            return Err(SimulationError::Configuration(
                ConfigurationError::DegenerateBoard { length: 0 },
            ));
        }

        self.grid.clear();
        self.round = 0;
        self.budget = round_budget.get();
        self.columns = vec![0; self.bot_count as usize];
        self.color_map.clear();

        for (index, bot) in self.bot_ids().enumerate() {
            if Some(bot) != self.uncolored {
                self.color_map.assign(bot, index);
            }
            let _ = self.grid.claim(self.cell_of(index), bot);
        }
        Ok(())
    }

    fn step(&mut self) -> Result<bool, SimulationError> {
        if self.budget == 0 {
            return Err(SimulationError::NotInitialised);
        }

        self.round += 1;
        let last_column = self.grid.length() - 1;
        let bots: Vec<BotId> = self.bot_ids().collect();
        for (index, bot) in bots.into_iter().enumerate() {
            self.columns[index] = (self.columns[index] + 1).min(last_column);
            let _ = self.grid.claim(self.cell_of(index), bot);
        }
        Ok(self.round >= self.budget)
    }

    fn grid(&self) -> GridView<'_> {
        self.grid.view()
    }

    fn color_map(&self) -> &ColorMap {
        &self.color_map
    }

    fn bots(&self) -> BotView {
        let snapshots = self
            .bot_ids()
            .enumerate()
            .filter(|(index, _)| *index < self.columns.len())
            .map(|(index, id)| BotSnapshot {
                id,
                cell: self.cell_of(index),
                name: format!("strip-{}", id.get()),
            })
            .collect();
        BotView::from_snapshots(snapshots)
    }

    fn current_round(&self) -> u32 {
        self.round
    }

    fn round_budget(&self) -> u32 {
        self.budget
    }

    fn score(&self) -> ScoreTable {
        self.bot_ids()
            .map(|bot| (bot, self.grid.count_owned_by(bot)))
            .collect()
    }
}

pub type TestController = GameController<StripSimulation, RecordingSurface>;

pub fn surface() -> RecordingSurface {
    RecordingSurface::new(SurfaceSize::new(800.0, 400.0))
}

pub fn config(rounds: u32) -> ControllerConfig {
    ControllerConfig::new(RoundBudget::new(rounds).expect("positive round budget"))
}

pub fn controller(length: u32, bots: u32, rounds: u32) -> TestController {
    GameController::new(StripSimulation::new(length, bots), surface(), config(rounds))
        .expect("controller sets up")
}
