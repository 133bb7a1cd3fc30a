//! Compass directions and direction sets.
//!
//! The road network treats the four travel directions as a small closed set,
//! so both the per-cell allowed-direction lookup and the movement engine work
//! with a fieldless enum plus a `u8` bitset rather than any keyed structure.
//! North increases `y`; East increases `x`.

use std::fmt;

// ── Direction ─────────────────────────────────────────────────────────────────

/// One of the four one-way travel directions.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// All directions in canonical order (N, S, E, W).  The collision
    /// resolver and blocked-turn search iterate this order so behaviour is
    /// reproducible across runs.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    /// Unit step vector `(dx, dy)` for one cell of travel.
    #[inline]
    pub fn vector(self) -> (i64, i64) {
        match self {
            Direction::North => (0, 1),
            Direction::South => (0, -1),
            Direction::East => (1, 0),
            Direction::West => (-1, 0),
        }
    }

    #[inline]
    pub fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
        }
    }

    /// `true` for East/West.
    #[inline]
    pub fn is_horizontal(self) -> bool {
        matches!(self, Direction::East | Direction::West)
    }

    /// `true` for North/South.
    #[inline]
    pub fn is_vertical(self) -> bool {
        !self.is_horizontal()
    }

    /// One-letter label, useful for snapshots and log lines.
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::North => "N",
            Direction::South => "S",
            Direction::East => "E",
            Direction::West => "W",
        }
    }

    #[inline]
    fn bit(self) -> u8 {
        match self {
            Direction::North => 0b0001,
            Direction::South => 0b0010,
            Direction::East => 0b0100,
            Direction::West => 0b1000,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── DirSet ────────────────────────────────────────────────────────────────────

/// Set of allowed departure directions for one grid cell, packed into a `u8`.
///
/// A cell with an empty set is not traversable.  A cell is an *intersection*
/// when the set contains both a horizontal and a vertical direction.
#[derive(Copy, Clone, PartialEq, Eq, Default, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DirSet(u8);

impl DirSet {
    pub const EMPTY: DirSet = DirSet(0);

    #[inline]
    pub fn insert(&mut self, dir: Direction) {
        self.0 |= dir.bit();
    }

    #[inline]
    pub fn contains(self, dir: Direction) -> bool {
        self.0 & dir.bit() != 0
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// `true` when the set holds East or West.
    #[inline]
    pub fn has_horizontal(self) -> bool {
        self.0 & (Direction::East.bit() | Direction::West.bit()) != 0
    }

    /// `true` when the set holds North or South.
    #[inline]
    pub fn has_vertical(self) -> bool {
        self.0 & (Direction::North.bit() | Direction::South.bit()) != 0
    }

    /// Iterate members in canonical N, S, E, W order.
    pub fn iter(self) -> impl Iterator<Item = Direction> {
        Direction::ALL.into_iter().filter(move |d| self.contains(*d))
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }
}

impl fmt::Display for DirSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, d) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{d}")?;
        }
        write!(f, "}}")
    }
}

impl FromIterator<Direction> for DirSet {
    fn from_iter<I: IntoIterator<Item = Direction>>(iter: I) -> Self {
        let mut set = DirSet::EMPTY;
        for d in iter {
            set.insert(d);
        }
        set
    }
}
