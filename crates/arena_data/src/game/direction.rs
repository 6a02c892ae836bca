use enum_ordinalize::Ordinalize;
use serde::{Deserialize, Serialize};

use crate::game::coord::TileCoord;

/// One of the six edges of a hex cell, or [`HexDirection::None`].
///
/// The real directions are ordered clockwise, starting from [`HexDirection::Up`] in a flat-top layout
/// with the y axis pointing down. The ordinal of a real direction is its index into [`TileCoord::DIRECTIONS`].
#[repr(i8)]
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Ordinalize, Serialize, Deserialize)]
pub enum HexDirection {
    #[default]
    None = -1,
    Up = 0,
    RightUp = 1,
    RightDown = 2,
    Down = 3,
    LeftDown = 4,
    LeftUp = 5,
}

impl HexDirection {
    /// The six real directions, clockwise from [`HexDirection::Up`].
    pub const ALL: [Self; 6] = [
        Self::Up,
        Self::RightUp,
        Self::RightDown,
        Self::Down,
        Self::LeftDown,
        Self::LeftUp,
    ];

    /// Gets the direction at `index`, wrapping around in both directions.
    #[inline]
    #[must_use]
    pub const fn from_index(index: isize) -> Self {
        Self::ALL[index.rem_euclid(6) as usize]
    }

    /// The index of this direction into [`Self::ALL`] and [`TileCoord::DIRECTIONS`], or `None` for the sentinel.
    #[inline]
    #[must_use]
    pub fn index(self) -> Option<usize> {
        usize::try_from(self.ordinal()).ok()
    }

    #[inline]
    #[must_use]
    pub const fn is_none(self) -> bool {
        matches!(self, Self::None)
    }

    /// The opposite direction. The inverse of [`HexDirection::None`] is itself.
    #[inline]
    #[must_use]
    pub fn inverse(self) -> Self {
        self.rotate(3)
    }

    /// Rotates clockwise by one edge.
    #[inline]
    #[must_use]
    pub fn cw(self) -> Self {
        self.rotate(1)
    }

    /// Rotates counter-clockwise by one edge.
    #[inline]
    #[must_use]
    pub fn ccw(self) -> Self {
        self.rotate(-1)
    }

    /// Rotates clockwise by `turns` edges (negative turns rotate counter-clockwise).
    #[inline]
    #[must_use]
    pub fn rotate(self, turns: isize) -> Self {
        match self.index() {
            Some(index) => Self::from_index(index as isize + turns),
            None => Self::None,
        }
    }

    /// The unit offset of this direction, or `None` for the sentinel.
    #[inline]
    #[must_use]
    pub fn offset(self) -> Option<TileCoord> {
        self.index().map(|index| TileCoord::DIRECTIONS[index])
    }
}
