#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Reference arena in which simple bots race to claim a square board.
//!
//! [`ArenaWorld`] implements [`Simulation`] so the game controller can drive
//! it. Every bot moves one cell per round according to its [`Policy`] and
//! claims the cell it lands on, taking it from any previous owner. A bot's
//! score is the number of cells it owns.

mod policy;

pub use policy::{Direction, Policy, RandomWalk, Spiral, Sweep};

use gridclaim_core::{
    BotId, BotSnapshot, BotView, CellCoord, ColorMap, ConfigurationError, GridView,
    OwnershipGrid, RoundBudget, ScoreTable, Simulation, SimulationError,
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, trace};

/// Side length used when no explicit board size is configured.
pub const DEFAULT_GRID_LENGTH: u32 = 40;

/// Seed used when no explicit seed is configured.
pub const DEFAULT_SEED: u64 = 0x6772_6964_636c_6169;

#[derive(Debug)]
struct Bot {
    id: BotId,
    name: String,
    policy: Box<dyn Policy>,
    cell: CellCoord,
}

/// Deterministic arena seeded once per setup.
#[derive(Debug)]
pub struct ArenaWorld {
    seed: u64,
    rng: ChaCha8Rng,
    grid: OwnershipGrid,
    bots: Vec<Bot>,
    color_map: ColorMap,
    round: u32,
    budget: Option<RoundBudget>,
}

impl ArenaWorld {
    /// Creates an empty arena with a `grid_length` by `grid_length` board.
    pub fn new(grid_length: u32, seed: u64) -> Result<Self, ConfigurationError> {
        Ok(Self {
            seed,
            rng: ChaCha8Rng::seed_from_u64(seed),
            grid: OwnershipGrid::new(grid_length)?,
            bots: Vec::new(),
            color_map: ColorMap::new(),
            round: 0,
            budget: None,
        })
    }

    /// Creates an arena populated with the built-in roster of four bots.
    pub fn with_default_roster(grid_length: u32, seed: u64) -> Result<Self, ConfigurationError> {
        let mut world = Self::new(grid_length, seed)?;
        let _ = world.add_bot("Wanderer", RandomWalk);
        let _ = world.add_bot("Sweeper", Sweep::new());
        let _ = world.add_bot("Spinner", Spiral::new());
        let _ = world.add_bot("Drifter", RandomWalk);
        Ok(world)
    }

    /// Registers a bot and returns its identifier. Bots join the board on the
    /// next setup, in registration order.
    pub fn add_bot<N, P>(&mut self, name: N, policy: P) -> BotId
    where
        N: Into<String>,
        P: Policy + 'static,
    {
        let id = BotId::new(self.bots.len() as u32 + 1);
        self.bots.push(Bot {
            id,
            name: name.into(),
            policy: Box::new(policy),
            cell: CellCoord::new(0, 0),
        });
        id
    }

    /// Seed the random number generator is reset to on every setup.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Number of registered bots.
    #[must_use]
    pub fn bot_count(&self) -> usize {
        self.bots.len()
    }
}

impl Simulation for ArenaWorld {
    fn setup(&mut self, round_budget: RoundBudget) -> Result<(), SimulationError> {
        self.rng = ChaCha8Rng::seed_from_u64(self.seed);
        self.grid.clear();
        self.color_map.clear();
        self.round = 0;
        self.budget = Some(round_budget);

        let length = self.grid.length();
        for (index, bot) in self.bots.iter_mut().enumerate() {
            bot.policy.reset();
            bot.cell = CellCoord::new(
                self.rng.gen_range(0..length),
                self.rng.gen_range(0..length),
            );
            let _ = self.grid.claim(bot.cell, bot.id);
            self.color_map.assign(bot.id, index);
        }

        debug!(
            bots = self.bots.len(),
            grid_length = length,
            seed = self.seed,
            "arena set up"
        );
        Ok(())
    }

    fn step(&mut self) -> Result<bool, SimulationError> {
        let budget = self.budget.ok_or(SimulationError::NotInitialised)?;

        let length = self.grid.length();
        for bot in &mut self.bots {
            let direction = bot.policy.choose(bot.cell, &self.grid.view(), &mut self.rng);
            if let Some(next) = direction.step_from(bot.cell, length) {
                bot.cell = next;
            }
            let _ = self.grid.claim(bot.cell, bot.id);
        }

        self.round += 1;
        trace!(round = self.round, "arena round resolved");
        Ok(self.round >= budget.get())
    }

    fn grid(&self) -> GridView<'_> {
        self.grid.view()
    }

    fn color_map(&self) -> &ColorMap {
        &self.color_map
    }

    fn bots(&self) -> BotView {
        BotView::from_snapshots(
            self.bots
                .iter()
                .map(|bot| BotSnapshot {
                    id: bot.id,
                    cell: bot.cell,
                    name: bot.name.clone(),
                })
                .collect(),
        )
    }

    fn current_round(&self) -> u32 {
        self.round
    }

    fn round_budget(&self) -> u32 {
        self.budget.map_or(0, |budget| budget.get())
    }

    fn score(&self) -> ScoreTable {
        self.bots
            .iter()
            .map(|bot| (bot.id, self.grid.count_owned_by(bot.id)))
            .collect()
    }
}
