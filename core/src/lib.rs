#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the Grid Claim workspace.
//!
//! This crate defines the vocabulary that connects the game controller, the
//! simulation it drives, and the adapters that present it. The controller
//! accepts [`ControlCommand`] values from adapters, advances any type that
//! implements [`Simulation`], and reads the simulation back exclusively
//! through immutable views such as [`GridView`] and [`BotView`].

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Canonical banner emitted when the experience boots.
pub const WELCOME_BANNER: &str = "Welcome to Grid Claim.";

/// Describes how the controller advances the simulation on each tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameMode {
    /// Rounds advance on every processed tick.
    Playing,
    /// The simulation is frozen; ticks only redraw the board.
    Paused,
    /// Exactly one round advances on the next tick, then the game pauses.
    SingleStep,
    /// Rounds advance as fast as the caller drives the controller.
    FastForward,
    /// The simulation is being reinitialised.
    Resetting,
}

/// Pace at which rounds advance while the game is running.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Pace {
    /// Interactive pace driven by the normal tick rate.
    Normal,
    /// Unthrottled pace; the controller asks for no delay between ticks.
    Fast,
}

/// Closed set of user commands understood by the controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ControlCommand {
    /// Run the simulation at normal pace.
    Play,
    /// Freeze the simulation.
    Pause,
    /// Advance exactly one round and pause again.
    SingleStep,
    /// Run the simulation at fast pace.
    FastForward,
    /// Reinitialise the simulation with the configured round budget.
    Reset,
    /// Toggle the owner-id overlay on cells and scoreboard swatches.
    ToggleLabels,
}

impl ControlCommand {
    /// Every command in the order the default button bar presents them.
    pub const ALL: [ControlCommand; 6] = [
        ControlCommand::Play,
        ControlCommand::Pause,
        ControlCommand::SingleStep,
        ControlCommand::FastForward,
        ControlCommand::Reset,
        ControlCommand::ToggleLabels,
    ];

    /// Short label shown on the button bound to the command.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Play => "Play",
            Self::Pause => "Stop",
            Self::SingleStep => "Step",
            Self::FastForward => "Fast",
            Self::Reset => "Reset",
            Self::ToggleLabels => "Id#",
        }
    }
}

/// Tick rates, in ticks per second, associated with each [`Pace`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TickRates {
    normal: u32,
    fast: u32,
}

impl TickRates {
    /// Tick rate used by the normal pace unless configured otherwise.
    pub const DEFAULT_NORMAL: u32 = 10;
    /// Tick rate used by the fast pace unless configured otherwise.
    pub const DEFAULT_FAST: u32 = 50;

    /// Creates a validated pair of tick rates.
    ///
    /// Both rates must be positive.
    pub fn new(normal: u32, fast: u32) -> Result<Self, ConfigurationError> {
        if normal == 0 {
            return Err(ConfigurationError::InvalidTickRate { pace: Pace::Normal });
        }
        if fast == 0 {
            return Err(ConfigurationError::InvalidTickRate { pace: Pace::Fast });
        }
        Ok(Self { normal, fast })
    }

    /// Tick rate associated with the provided pace.
    #[must_use]
    pub const fn rate(&self, pace: Pace) -> u32 {
        match pace {
            Pace::Normal => self.normal,
            Pace::Fast => self.fast,
        }
    }
}

impl Default for TickRates {
    fn default() -> Self {
        Self {
            normal: Self::DEFAULT_NORMAL,
            fast: Self::DEFAULT_FAST,
        }
    }
}

/// Number of rounds a game lasts before the simulation concludes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RoundBudget(u32);

impl RoundBudget {
    /// Validates and wraps a round budget. Zero rounds is rejected.
    pub fn new(rounds: u32) -> Result<Self, ConfigurationError> {
        if rounds == 0 {
            return Err(ConfigurationError::InvalidRoundBudget { rounds });
        }
        Ok(Self(rounds))
    }

    /// Retrieves the number of rounds.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

/// Stable numeric identity of a bot. The value `0` marks unclaimed cells.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct BotId(u32);

impl BotId {
    /// Owner id stored in cells that no bot has claimed.
    pub const NEUTRAL: BotId = BotId(0);

    /// Creates a new bot identifier with the provided numeric value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Retrieves the numeric representation of the identifier.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }

    /// Reports whether the id denotes an unclaimed cell.
    #[must_use]
    pub const fn is_neutral(&self) -> bool {
        self.0 == 0
    }
}

/// Location of a single grid cell. Row `0` is the bottom row of the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellCoord {
    column: u32,
    row: u32,
}

impl CellCoord {
    /// Creates a new grid cell coordinate.
    #[must_use]
    pub const fn new(column: u32, row: u32) -> Self {
        Self { column, row }
    }

    /// Zero-based column index of the cell.
    #[must_use]
    pub const fn column(&self) -> u32 {
        self.column
    }

    /// Zero-based row index of the cell.
    #[must_use]
    pub const fn row(&self) -> u32 {
        self.row
    }
}

/// Opaque RGB triple.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    red: u8,
    green: u8,
    blue: u8,
}

impl Rgb {
    /// Creates a new color from byte RGB components.
    #[must_use]
    pub const fn from_rgb(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Red component of the color.
    #[must_use]
    pub const fn red(&self) -> u8 {
        self.red
    }

    /// Green component of the color.
    #[must_use]
    pub const fn green(&self) -> u8 {
        self.green
    }

    /// Blue component of the color.
    #[must_use]
    pub const fn blue(&self) -> u8 {
        self.blue
    }
}

/// Read-only view of the square ownership grid.
///
/// Cells are stored row-major starting at the bottom row, so the owner of
/// `(column, row)` lives at `row * length + column`.
#[derive(Clone, Copy, Debug)]
pub struct GridView<'a> {
    cells: &'a [BotId],
    length: u32,
}

impl<'a> GridView<'a> {
    /// Captures a grid view backed by the provided cell slice.
    ///
    /// Fails when the board is empty or the slice does not hold exactly
    /// `length * length` cells.
    pub fn new(cells: &'a [BotId], length: u32) -> Result<Self, ConfigurationError> {
        if length == 0 {
            return Err(ConfigurationError::DegenerateBoard { length });
        }
        let expected = u64::from(length) * u64::from(length);
        if cells.len() as u64 != expected {
            return Err(ConfigurationError::MismatchedGrid {
                length,
                cells: cells.len(),
            });
        }
        Ok(Self { cells, length })
    }

    /// Side length of the board measured in cells.
    #[must_use]
    pub const fn length(&self) -> u32 {
        self.length
    }

    /// Total number of addressable cells.
    #[must_use]
    pub fn cell_count(&self) -> u64 {
        self.cells.len() as u64
    }

    /// Returns the owner of the provided cell, or `None` when out of bounds.
    #[must_use]
    pub fn owner(&self, cell: CellCoord) -> Option<BotId> {
        if cell.column() >= self.length || cell.row() >= self.length {
            return None;
        }
        let width = usize::try_from(self.length).ok()?;
        let row = usize::try_from(cell.row()).ok()?;
        let column = usize::try_from(cell.column()).ok()?;
        self.cells.get(row * width + column).copied()
    }

    /// Iterates every cell with its owner in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (CellCoord, BotId)> + 'a {
        let length = self.length;
        self.cells.iter().enumerate().map(move |(index, owner)| {
            let index = index as u64;
            let column = (index % u64::from(length)) as u32;
            let row = (index / u64::from(length)) as u32;
            (CellCoord::new(column, row), *owner)
        })
    }
}

/// Owned square board where every cell starts unclaimed.
///
/// Simulations keep one of these and lend it out through
/// [`OwnershipGrid::view`], which cannot fail because the storage always
/// matches the side length.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OwnershipGrid {
    cells: Vec<BotId>,
    length: u32,
}

impl OwnershipGrid {
    /// Allocates a `length * length` board of neutral cells.
    pub fn new(length: u32) -> Result<Self, ConfigurationError> {
        if length == 0 {
            return Err(ConfigurationError::DegenerateBoard { length });
        }
        let side = length as usize;
        Ok(Self {
            cells: vec![BotId::NEUTRAL; side * side],
            length,
        })
    }

    /// Side length of the board measured in cells.
    #[must_use]
    pub const fn length(&self) -> u32 {
        self.length
    }

    /// Marks the cell as owned by `owner`. Returns `false` when the cell lies
    /// outside the board.
    pub fn claim(&mut self, cell: CellCoord, owner: BotId) -> bool {
        match self.index(cell) {
            Some(index) => {
                self.cells[index] = owner;
                true
            }
            None => false,
        }
    }

    /// Returns every cell to the neutral owner.
    pub fn clear(&mut self) {
        self.cells.fill(BotId::NEUTRAL);
    }

    /// Number of cells currently owned by `owner`.
    #[must_use]
    pub fn count_owned_by(&self, owner: BotId) -> u32 {
        self.cells.iter().filter(|cell| **cell == owner).count() as u32
    }

    /// Borrows the board as a read-only view.
    #[must_use]
    pub fn view(&self) -> GridView<'_> {
        GridView {
            cells: &self.cells,
            length: self.length,
        }
    }

    fn index(&self, cell: CellCoord) -> Option<usize> {
        if cell.column() >= self.length || cell.row() >= self.length {
            return None;
        }
        Some(cell.row() as usize * self.length as usize + cell.column() as usize)
    }
}

/// Immutable representation of a single bot used for queries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BotSnapshot {
    /// Stable identifier of the bot.
    pub id: BotId,
    /// Cell currently occupied by the bot.
    pub cell: CellCoord,
    /// Display name shown on the scoreboard.
    pub name: String,
}

/// Read-only roster of bots in the order the simulation registered them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BotView {
    snapshots: Vec<BotSnapshot>,
}

impl BotView {
    /// Creates a view preserving the provided roster order.
    #[must_use]
    pub fn from_snapshots(snapshots: Vec<BotSnapshot>) -> Self {
        Self { snapshots }
    }

    /// Iterator over the bots in roster order.
    pub fn iter(&self) -> impl Iterator<Item = &BotSnapshot> {
        self.snapshots.iter()
    }

    /// Number of bots in the roster.
    #[must_use]
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Reports whether the roster is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Consumes the view, yielding the underlying snapshots.
    #[must_use]
    pub fn into_vec(self) -> Vec<BotSnapshot> {
        self.snapshots
    }
}

/// Mapping from bot id to palette index, produced by the simulation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ColorMap {
    indices: BTreeMap<BotId, usize>,
}

impl ColorMap {
    /// Creates an empty color map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Assigns a palette index to the provided bot, replacing any previous entry.
    pub fn assign(&mut self, bot: BotId, index: usize) {
        let _ = self.indices.insert(bot, index);
    }

    /// Palette index assigned to the bot, if any.
    #[must_use]
    pub fn palette_index(&self, bot: BotId) -> Option<usize> {
        self.indices.get(&bot).copied()
    }

    /// Removes every assignment.
    pub fn clear(&mut self) {
        self.indices.clear();
    }
}

impl FromIterator<(BotId, usize)> for ColorMap {
    fn from_iter<T: IntoIterator<Item = (BotId, usize)>>(iter: T) -> Self {
        Self {
            indices: iter.into_iter().collect(),
        }
    }
}

/// Raw per-bot scores reported by the simulation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScoreTable {
    scores: BTreeMap<BotId, u32>,
}

impl ScoreTable {
    /// Creates an empty score table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the score of a bot, replacing any previous value.
    pub fn insert(&mut self, bot: BotId, score: u32) {
        let _ = self.scores.insert(bot, score);
    }

    /// Score recorded for the bot, if any.
    #[must_use]
    pub fn get(&self, bot: BotId) -> Option<u32> {
        self.scores.get(&bot).copied()
    }

    /// Iterates scores ordered by bot id.
    pub fn iter(&self) -> impl Iterator<Item = (BotId, u32)> + '_ {
        self.scores.iter().map(|(bot, score)| (*bot, *score))
    }
}

impl FromIterator<(BotId, u32)> for ScoreTable {
    fn from_iter<T: IntoIterator<Item = (BotId, u32)>>(iter: T) -> Self {
        Self {
            scores: iter.into_iter().collect(),
        }
    }
}

/// Invalid configuration detected while preparing a game session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    /// A game must last at least one round.
    #[error("round budget must be positive (received {rounds})")]
    InvalidRoundBudget {
        /// Rejected round count.
        rounds: u32,
    },
    /// The board must contain at least one cell.
    #[error("grid length must be positive (received {length})")]
    DegenerateBoard {
        /// Rejected side length.
        length: u32,
    },
    /// The cell storage does not describe a square board of the reported length.
    #[error("grid of length {length} cannot be backed by {cells} cells")]
    MismatchedGrid {
        /// Reported side length.
        length: u32,
        /// Number of cells provided.
        cells: usize,
    },
    /// Tick rates must be positive.
    #[error("tick rate for {pace:?} pace must be positive")]
    InvalidTickRate {
        /// Pace whose rate was rejected.
        pace: Pace,
    },
    /// The drawing surface cannot fit a single pixel per cell.
    #[error("surface of {width}x{height} px cannot fit a board of length {length}")]
    SurfaceTooSmall {
        /// Surface width in pixels.
        width: u32,
        /// Surface height in pixels.
        height: u32,
        /// Board side length in cells.
        length: u32,
    },
}

/// Contract violation between the controller and the simulation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Percentages cannot be computed against a zero maximum score.
    #[error("maximum possible score is zero")]
    ZeroMaximumScore,
    /// A bot owns cells or appears in the roster without a palette assignment.
    #[error("bot {bot:?} has no color assignment")]
    MissingColorAssignment {
        /// Bot lacking an assignment.
        bot: BotId,
    },
    /// A bot in the roster has no entry in the score table.
    #[error("bot {bot:?} has no score entry")]
    MissingScore {
        /// Bot lacking a score.
        bot: BotId,
    },
}

/// Failure reported by a [`Simulation`] implementation.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SimulationError {
    /// The simulation rejected its configuration.
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
    /// The simulation detected an internal contract violation.
    #[error(transparent)]
    Domain(#[from] DomainError),
    /// A round was requested before the simulation was set up.
    #[error("simulation stepped before setup")]
    NotInitialised,
}

/// Narrow interface through which the controller drives a grid simulation.
///
/// The controller never mutates simulation state other than through
/// [`Simulation::setup`] and [`Simulation::step`]; everything else is read
/// back through immutable views.
pub trait Simulation {
    /// (Re)initialises grid, bots, and round counter. Must be repeatable and
    /// produce the same initial state every time for the same budget.
    fn setup(&mut self, round_budget: RoundBudget) -> Result<(), SimulationError>;

    /// Advances exactly one round. Returns `true` once the game has concluded.
    fn step(&mut self) -> Result<bool, SimulationError>;

    /// Current ownership grid.
    fn grid(&self) -> GridView<'_>;

    /// Palette assignment for every bot.
    fn color_map(&self) -> &ColorMap;

    /// Bots in roster order.
    fn bots(&self) -> BotView;

    /// Number of rounds played since the last setup.
    fn current_round(&self) -> u32;

    /// Round budget applied by the last setup.
    fn round_budget(&self) -> u32;

    /// Raw score of every bot.
    fn score(&self) -> ScoreTable;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_budget_rejects_zero() {
        assert_eq!(
            RoundBudget::new(0),
            Err(ConfigurationError::InvalidRoundBudget { rounds: 0 })
        );
        assert_eq!(RoundBudget::new(1000).map(|budget| budget.get()), Ok(1000));
    }

    #[test]
    fn tick_rates_reject_zero_for_either_pace() {
        assert_eq!(
            TickRates::new(0, 50),
            Err(ConfigurationError::InvalidTickRate { pace: Pace::Normal })
        );
        assert_eq!(
            TickRates::new(10, 0),
            Err(ConfigurationError::InvalidTickRate { pace: Pace::Fast })
        );
        let rates = TickRates::default();
        assert_eq!(rates.rate(Pace::Normal), 10);
        assert_eq!(rates.rate(Pace::Fast), 50);
    }

    #[test]
    fn grid_view_rejects_empty_board() {
        let error = GridView::new(&[], 0).expect_err("empty board must be rejected");
        assert_eq!(error, ConfigurationError::DegenerateBoard { length: 0 });
    }

    #[test]
    fn grid_view_rejects_mismatched_storage() {
        let cells = [BotId::NEUTRAL; 5];
        let error = GridView::new(&cells, 2).expect_err("five cells cannot form a 2x2 board");
        assert_eq!(
            error,
            ConfigurationError::MismatchedGrid {
                length: 2,
                cells: 5
            }
        );
    }

    #[test]
    fn grid_view_indexes_rows_from_the_bottom() {
        let cells = [
            BotId::new(1),
            BotId::NEUTRAL,
            BotId::NEUTRAL,
            BotId::new(2),
        ];
        let grid = GridView::new(&cells, 2).expect("valid grid");

        assert_eq!(grid.owner(CellCoord::new(0, 0)), Some(BotId::new(1)));
        assert_eq!(grid.owner(CellCoord::new(1, 1)), Some(BotId::new(2)));
        assert_eq!(grid.owner(CellCoord::new(2, 0)), None);
        assert_eq!(grid.cell_count(), 4);

        let coords: Vec<CellCoord> = grid.iter().map(|(cell, _)| cell).collect();
        assert_eq!(
            coords,
            vec![
                CellCoord::new(0, 0),
                CellCoord::new(1, 0),
                CellCoord::new(0, 1),
                CellCoord::new(1, 1),
            ]
        );
    }

    #[test]
    fn ownership_grid_claims_cells_inside_the_board() {
        let mut grid = OwnershipGrid::new(3).expect("valid board");
        assert!(grid.claim(CellCoord::new(2, 1), BotId::new(4)));
        assert!(!grid.claim(CellCoord::new(3, 0), BotId::new(4)));

        let view = grid.view();
        assert_eq!(view.cell_count(), 9);
        assert_eq!(view.owner(CellCoord::new(2, 1)), Some(BotId::new(4)));
        assert_eq!(grid.count_owned_by(BotId::new(4)), 1);
        assert_eq!(grid.count_owned_by(BotId::NEUTRAL), 8);

        grid.clear();
        assert_eq!(grid.count_owned_by(BotId::new(4)), 0);
        assert_eq!(
            OwnershipGrid::new(0),
            Err(ConfigurationError::DegenerateBoard { length: 0 })
        );
    }

    #[test]
    fn neutral_bot_id_is_zero() {
        assert!(BotId::NEUTRAL.is_neutral());
        assert!(!BotId::new(3).is_neutral());
        assert_eq!(BotId::default(), BotId::NEUTRAL);
    }

    #[test]
    fn bot_view_preserves_roster_order() {
        let view = BotView::from_snapshots(vec![
            BotSnapshot {
                id: BotId::new(7),
                cell: CellCoord::new(0, 0),
                name: "seven".to_owned(),
            },
            BotSnapshot {
                id: BotId::new(2),
                cell: CellCoord::new(1, 0),
                name: "two".to_owned(),
            },
        ]);

        let ids: Vec<BotId> = view.iter().map(|bot| bot.id).collect();
        assert_eq!(ids, vec![BotId::new(7), BotId::new(2)]);
        assert_eq!(view.len(), 2);
    }

    #[test]
    fn command_labels_follow_button_bar_order() {
        let labels: Vec<&str> = ControlCommand::ALL
            .iter()
            .map(|command| command.label())
            .collect();
        assert_eq!(labels, vec!["Play", "Stop", "Step", "Fast", "Reset", "Id#"]);
    }
}
