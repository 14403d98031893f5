//! Movement policies steering the reference bots.

use std::fmt;

use gridclaim_core::{CellCoord, GridView};
use rand::{Rng, RngCore};

/// Compass direction a bot can move in during a round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards higher rows.
    North,
    /// Towards higher columns.
    East,
    /// Towards lower rows.
    South,
    /// Towards lower columns.
    West,
}

impl Direction {
    /// Directions in clockwise order starting north.
    pub const ALL: [Self; 4] = [Self::North, Self::East, Self::South, Self::West];

    /// Next direction clockwise.
    #[must_use]
    pub const fn clockwise(self) -> Self {
        match self {
            Self::North => Self::East,
            Self::East => Self::South,
            Self::South => Self::West,
            Self::West => Self::North,
        }
    }

    /// Direction pointing the other way.
    #[must_use]
    pub const fn reversed(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::East => Self::West,
            Self::South => Self::North,
            Self::West => Self::East,
        }
    }

    /// Neighbouring cell in this direction, or `None` when it would leave a
    /// board of the given side length.
    #[must_use]
    pub fn step_from(self, cell: CellCoord, length: u32) -> Option<CellCoord> {
        let (column, row) = (cell.column(), cell.row());
        let (column, row) = match self {
            Self::North => (column, row.checked_add(1)?),
            Self::East => (column.checked_add(1)?, row),
            Self::South => (column, row.checked_sub(1)?),
            Self::West => (column.checked_sub(1)?, row),
        };
        (column < length && row < length).then_some(CellCoord::new(column, row))
    }
}

/// Decides where a bot heads next.
///
/// Policies are reset at every setup so that a seeded arena replays the same
/// game. A bot whose chosen direction leaves the board stays in place.
pub trait Policy: fmt::Debug {
    /// Forgets any state accumulated during the previous game.
    fn reset(&mut self);

    /// Picks the direction for the upcoming round.
    fn choose(&mut self, position: CellCoord, grid: &GridView<'_>, rng: &mut dyn RngCore)
        -> Direction;
}

/// Moves in a uniformly random direction every round.
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomWalk;

impl Policy for RandomWalk {
    fn reset(&mut self) {}

    fn choose(
        &mut self,
        _position: CellCoord,
        _grid: &GridView<'_>,
        rng: &mut dyn RngCore,
    ) -> Direction {
        Direction::ALL[rng.gen_range(0..Direction::ALL.len())]
    }
}

/// Sweeps the board row by row, reversing at the edges.
#[derive(Clone, Copy, Debug)]
pub struct Sweep {
    horizontal: Direction,
    vertical: Direction,
}

impl Sweep {
    /// Creates a sweep that starts heading east and climbs north.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            horizontal: Direction::East,
            vertical: Direction::North,
        }
    }
}

impl Default for Sweep {
    fn default() -> Self {
        Self::new()
    }
}

impl Policy for Sweep {
    fn reset(&mut self) {
        *self = Self::new();
    }

    fn choose(
        &mut self,
        position: CellCoord,
        grid: &GridView<'_>,
        _rng: &mut dyn RngCore,
    ) -> Direction {
        let length = grid.length();
        if self.horizontal.step_from(position, length).is_some() {
            return self.horizontal;
        }

        self.horizontal = self.horizontal.reversed();
        if self.vertical.step_from(position, length).is_none() {
            self.vertical = self.vertical.reversed();
        }
        self.vertical
    }
}

/// Walks an outward square spiral, turning clockwise.
#[derive(Clone, Copy, Debug)]
pub struct Spiral {
    heading: Direction,
    leg_length: u32,
    travelled: u32,
    legs_at_length: u32,
}

impl Spiral {
    /// Creates a spiral whose first leg heads east.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            heading: Direction::East,
            leg_length: 1,
            travelled: 0,
            legs_at_length: 0,
        }
    }
}

impl Default for Spiral {
    fn default() -> Self {
        Self::new()
    }
}

impl Policy for Spiral {
    fn reset(&mut self) {
        *self = Self::new();
    }

    fn choose(
        &mut self,
        _position: CellCoord,
        _grid: &GridView<'_>,
        _rng: &mut dyn RngCore,
    ) -> Direction {
        if self.travelled == self.leg_length {
            self.travelled = 0;
            self.heading = self.heading.clockwise();
            self.legs_at_length += 1;
            if self.legs_at_length == 2 {
                self.legs_at_length = 0;
                self.leg_length += 1;
            }
        }

        self.travelled += 1;
        self.heading
    }
}
