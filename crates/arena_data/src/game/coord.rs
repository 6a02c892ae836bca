use std::{
    fmt::{Display, Formatter},
    ops::{Add, Mul, Neg, Sub},
};

use serde::{Deserialize, Serialize};
use serde_tuple::{Deserialize_tuple, Serialize_tuple};
use thiserror::Error;

use crate::{
    game::direction::HexDirection,
    math::{Float, Int, UInt, Vec2, consts},
};

/// The type that will be used to represent a tile's coordinates.
pub type TileUnit = Int;
pub type UnsignedTileUnit = UInt;

/// The default tolerance of [`FractHex::approximately_equal`].
pub const DEFAULT_EPSILON: Float = 0.001;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CoordError {
    #[error("a real hex direction is required, but HexDirection::None was given")]
    NoDirection,
    #[error("a region extent of {0} is over the maximum of {max}", max = crate::game::region::MAX_EXTENT)]
    TooLarge(UnsignedTileUnit),
}

/// Represents a tile's coordinate, in axial form.
///
/// The third, cube axis `s` is never stored; `q + r + s == 0` always holds, see [`Self::s`].
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize_tuple, Deserialize_tuple)]
pub struct TileCoord {
    pub q: TileUnit,
    pub r: TileUnit,
}

impl TileCoord {
    /// Creates a new coordinate `(q, r)`.
    #[inline]
    #[must_use]
    pub const fn new(q: TileUnit, r: TileUnit) -> Self {
        Self { q, r }
    }

    #[inline]
    #[must_use]
    pub const fn s(self) -> TileUnit {
        -self.q - self.r
    }

    pub const ZERO: Self = Self::new(0, 0);

    pub const UP: Self = Self::new(0, -1);
    pub const RIGHT_UP: Self = Self::new(1, -1);
    pub const RIGHT_DOWN: Self = Self::new(1, 0);
    pub const DOWN: Self = Self::new(0, 1);
    pub const LEFT_DOWN: Self = Self::new(-1, 1);
    pub const LEFT_UP: Self = Self::new(-1, 0);

    /// The unit offsets of each edge, indexed by [`HexDirection`].
    pub const DIRECTIONS: [Self; 6] = [
        Self::UP,
        Self::RIGHT_UP,
        Self::RIGHT_DOWN,
        Self::DOWN,
        Self::LEFT_DOWN,
        Self::LEFT_UP,
    ];
}

impl TileCoord {
    #[inline]
    #[must_use]
    pub const fn add(self, rhs: Self) -> Self {
        Self::new(self.q + rhs.q, self.r + rhs.r)
    }

    #[inline]
    #[must_use]
    pub const fn sub(self, rhs: Self) -> Self {
        Self::new(self.q - rhs.q, self.r - rhs.r)
    }

    #[inline]
    #[must_use]
    pub const fn mul(self, rhs: TileUnit) -> Self {
        Self::new(self.q * rhs, self.r * rhs)
    }

    #[inline]
    #[must_use]
    pub const fn neg(self) -> Self {
        Self::new(-self.q, -self.r)
    }

    /// The adjacent coordinate across the edge `direction`.
    #[inline]
    pub fn neighbor(self, direction: HexDirection) -> Result<Self, CoordError> {
        direction
            .offset()
            .map(|offset| self.add(offset))
            .ok_or(CoordError::NoDirection)
    }

    /// Creates a list of the neighbors, in the order of [`Self::DIRECTIONS`].
    #[inline]
    #[must_use]
    pub const fn neighbors(self) -> [Self; 6] {
        [
            self.add(Self::DIRECTIONS[0]),
            self.add(Self::DIRECTIONS[1]),
            self.add(Self::DIRECTIONS[2]),
            self.add(Self::DIRECTIONS[3]),
            self.add(Self::DIRECTIONS[4]),
            self.add(Self::DIRECTIONS[5]),
        ]
    }

    /// Rotates `self` around the origin clockwise, by one edge.
    #[inline]
    #[must_use]
    pub const fn cw(self) -> Self {
        Self::new(-self.r, -self.s())
    }

    /// Rotates `self` around the origin counter-clockwise, by one edge.
    #[inline]
    #[must_use]
    pub const fn ccw(self) -> Self {
        Self::new(-self.s(), -self.q)
    }

    /// Rotates `self` around the origin counter-clockwise by `m` edges.
    #[inline]
    #[must_use]
    pub const fn rotate_ccw(self, m: u32) -> Self {
        match m % 6 {
            1 => self.ccw(),
            2 => self.ccw().ccw(),
            3 => self.neg(),
            4 => self.cw().cw(),
            5 => self.cw(),
            _ => self,
        }
    }

    /// Computes the distance from the origin, in tiles.
    #[inline]
    #[must_use]
    pub const fn length(self) -> TileUnit {
        let [q, r, s] = [self.q.abs(), self.r.abs(), self.s().abs()];
        if q >= r && q >= s {
            q
        } else if r >= s {
            r
        } else {
            s
        }
    }

    /// Computes the distance from the origin as an unsigned integer.
    #[inline]
    #[must_use]
    pub const fn ulength(self) -> UnsignedTileUnit {
        let [q, r, s] = [self.q.unsigned_abs(), self.r.unsigned_abs(), self.s().unsigned_abs()];
        if q >= r && q >= s {
            q
        } else if r >= s {
            r
        } else {
            s
        }
    }

    /// The number of steps between adjacent tiles needed to get from `a` to `b`.
    #[inline]
    #[must_use]
    pub const fn distance(a: Self, b: Self) -> UnsignedTileUnit {
        b.sub(a).ulength()
    }

    #[inline]
    #[must_use]
    pub fn to_pixel(self, layout: &HexLayout) -> Vec2 {
        layout.to_pixel(self)
    }

    /// [`TileCoord::to_pixel`] on a flat-top layout of the given size.
    #[inline]
    #[must_use]
    pub fn to_pixel_with(self, size: Float) -> Vec2 {
        self.to_pixel(&HexLayout::flat(size))
    }

    /// Converts a pixel position into a fractional coordinate. See [`FractHex::rounded`] for getting a real tile.
    #[inline]
    #[must_use]
    pub fn from_pixel(pixel: Vec2, layout: &HexLayout) -> FractHex {
        layout.from_pixel(pixel)
    }

    /// Creates a minimal string representation of the coordinate, usable as a key.
    #[inline]
    #[must_use]
    pub fn to_minimal_string(self) -> String {
        format!("{},{}", self.q, self.r)
    }
}

impl Display for TileCoord {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("[{}, {}]", self.q, self.r))
    }
}

impl From<(TileUnit, TileUnit)> for TileCoord {
    fn from((q, r): (TileUnit, TileUnit)) -> Self {
        Self::new(q, r)
    }
}

impl Add for TileCoord {
    type Output = TileCoord;

    fn add(self, rhs: TileCoord) -> Self::Output {
        self.add(rhs)
    }
}

impl Sub for TileCoord {
    type Output = TileCoord;

    fn sub(self, rhs: TileCoord) -> Self::Output {
        self.sub(rhs)
    }
}

impl Mul<TileUnit> for TileCoord {
    type Output = TileCoord;

    fn mul(self, rhs: TileUnit) -> Self::Output {
        self.mul(rhs)
    }
}

impl Mul<TileCoord> for TileUnit {
    type Output = TileCoord;

    fn mul(self, rhs: TileCoord) -> Self::Output {
        rhs.mul(self)
    }
}

impl Neg for TileCoord {
    type Output = TileCoord;

    fn neg(self) -> Self::Output {
        self.neg()
    }
}

/// A fractional axial coordinate, as produced by pixel-to-hex conversion.
///
/// It doesn't address a tile until it gets [rounded](Self::rounded).
#[derive(Debug, Default, Copy, Clone, PartialEq, Serialize_tuple, Deserialize_tuple)]
pub struct FractHex {
    pub q: Float,
    pub r: Float,
}

impl FractHex {
    #[inline]
    #[must_use]
    pub const fn new(q: Float, r: Float) -> Self {
        Self { q, r }
    }

    #[inline]
    #[must_use]
    pub const fn s(self) -> Float {
        -self.q - self.r
    }

    /// Snaps to the nearest tile with cube rounding.
    ///
    /// Every axis is rounded on its own, then the axis that moved the most is recomputed from the other two,
    /// so the result always satisfies `q + r + s == 0`. Ties go to `q`, then `r`, then `s`.
    #[must_use]
    pub fn rounded(self) -> TileCoord {
        let [q, r, s] = [self.q.round(), self.r.round(), self.s().round()];
        let [dq, dr, ds] = [(q - self.q).abs(), (r - self.r).abs(), (s - self.s()).abs()];

        let (q, r) = if dq >= dr && dq >= ds {
            (-r - s, r)
        } else if dr >= ds {
            (q, -q - s)
        } else {
            (q, r)
        };

        TileCoord::new(q as TileUnit, r as TileUnit)
    }

    /// Returns true if both axes of `a` and `b` differ by less than `epsilon`.
    #[inline]
    #[must_use]
    pub fn approximately_equal(a: Self, b: Self, epsilon: Float) -> bool {
        (a.q - b.q).abs() < epsilon && (a.r - b.r).abs() < epsilon
    }

    /// [`Self::approximately_equal`] with [`DEFAULT_EPSILON`].
    #[inline]
    #[must_use]
    pub fn approx_eq(self, other: Self) -> bool {
        Self::approximately_equal(self, other, DEFAULT_EPSILON)
    }
}

impl From<TileCoord> for FractHex {
    fn from(value: TileCoord) -> Self {
        Self::new(value.q as Float, value.r as Float)
    }
}

/// The orientation of the hex cells on screen. Must stay the same for the whole lifetime of a board.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HexOrientation {
    /// Cells have a flat edge on top, and neighbors straight above and below.
    #[default]
    Flat,
    /// Cells have a corner on top, and neighbors straight to the left and right.
    Pointy,
}

impl HexOrientation {
    /// Row-major matrix taking `(q, r)` to a unit-size pixel position.
    #[inline]
    #[must_use]
    pub const fn forward_matrix(self) -> [Float; 4] {
        match self {
            HexOrientation::Flat => [1.5, 0.0, consts::SQRT_3 / 2.0, consts::SQRT_3],
            HexOrientation::Pointy => [consts::SQRT_3, consts::SQRT_3 / 2.0, 0.0, 1.5],
        }
    }

    /// Row-major matrix taking a unit-size pixel position to `(q, r)`, the inverse of [`Self::forward_matrix`].
    #[inline]
    #[must_use]
    pub const fn inverse_matrix(self) -> [Float; 4] {
        match self {
            HexOrientation::Flat => [2.0 / 3.0, 0.0, -1.0 / 3.0, consts::SQRT_3 / 3.0],
            HexOrientation::Pointy => [consts::SQRT_3 / 3.0, -1.0 / 3.0, 0.0, 2.0 / 3.0],
        }
    }

    /// Angle of the first corner of a cell, in degrees.
    #[inline]
    #[must_use]
    pub const fn start_angle(self) -> Float {
        match self {
            HexOrientation::Flat => 0.0,
            HexOrientation::Pointy => -30.0,
        }
    }
}

/// How tiles map onto pixels: the orientation of the cells, and the distance from a cell's center to its corners.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct HexLayout {
    pub orientation: HexOrientation,
    pub size: Float,
}

impl HexLayout {
    #[inline]
    #[must_use]
    pub const fn new(orientation: HexOrientation, size: Float) -> Self {
        Self { orientation, size }
    }

    #[inline]
    #[must_use]
    pub const fn flat(size: Float) -> Self {
        Self::new(HexOrientation::Flat, size)
    }

    #[inline]
    #[must_use]
    pub const fn pointy(size: Float) -> Self {
        Self::new(HexOrientation::Pointy, size)
    }

    /// The pixel position of the center of `coord`.
    #[inline]
    #[must_use]
    pub fn to_pixel(&self, coord: TileCoord) -> Vec2 {
        self.fract_to_pixel(FractHex::from(coord))
    }

    #[inline]
    #[must_use]
    pub fn fract_to_pixel(&self, hex: FractHex) -> Vec2 {
        let [f0, f1, f2, f3] = self.orientation.forward_matrix();

        Vec2::new(f0.mul_add(hex.q, f1 * hex.r), f2.mul_add(hex.q, f3 * hex.r)) * self.size
    }

    #[inline]
    #[must_use]
    pub fn from_pixel(&self, pixel: Vec2) -> FractHex {
        let [b0, b1, b2, b3] = self.orientation.inverse_matrix();
        let p = pixel / self.size;

        FractHex::new(b0.mul_add(p.x, b1 * p.y), b2.mul_add(p.x, b3 * p.y))
    }

    /// The tile containing `pixel`.
    #[inline]
    #[must_use]
    pub fn resolve(&self, pixel: Vec2) -> TileCoord {
        self.from_pixel(pixel).rounded()
    }

    /// The on-screen size of the board canvas.
    #[inline]
    #[must_use]
    pub fn board_extent(&self) -> Vec2 {
        Vec2::new(15.0, 7.0 * consts::SQRT_3) * self.size
    }
}
