use hashbrown::HashSet;
use serde::{Deserialize, Serialize};

use crate::game::{
    coord::{CoordError, TileCoord, TileUnit, UnsignedTileUnit},
    direction::HexDirection,
};

/// The largest radius, width or height a checked region may have.
pub const MAX_EXTENT: UnsignedTileUnit = 1024;

/// A hex-shaped area of every tile within `radius` steps of `center`.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct DiskRegion {
    center: TileCoord,
    radius: UnsignedTileUnit,
}

impl DiskRegion {
    #[inline]
    #[must_use]
    pub const fn center(&self) -> TileCoord {
        self.center
    }

    #[inline]
    #[must_use]
    pub const fn radius(&self) -> UnsignedTileUnit {
        self.radius
    }

    #[inline]
    #[must_use]
    pub const fn contains(&self, coord: TileCoord) -> bool {
        TileCoord::distance(self.center, coord) <= self.radius
    }

    /// The centered hexagonal number `3n(n + 1) + 1`.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        let n = self.radius as usize;

        3 * n * (n + 1) + 1
    }

    #[inline]
    fn signed_radius(&self) -> TileUnit {
        self.radius.cast_signed()
    }

    /// The range of `dr` for a given `dq`, inclusive on both ends.
    #[inline]
    fn column(&self, dq: TileUnit) -> (TileUnit, TileUnit) {
        let radius = self.signed_radius();

        ((-radius).max(-dq - radius), radius.min(-dq + radius))
    }
}

/// A parallelogram spanned by `width` steps towards `direction`, and `height` steps towards the direction two
/// edges clockwise from it.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct ParallelogramRegion {
    origin: TileCoord,
    direction: HexDirection,
    width: UnsignedTileUnit,
    height: UnsignedTileUnit,
}

impl ParallelogramRegion {
    #[inline]
    #[must_use]
    pub const fn origin(&self) -> TileCoord {
        self.origin
    }

    #[inline]
    #[must_use]
    pub const fn direction(&self) -> HexDirection {
        self.direction
    }

    #[inline]
    #[must_use]
    pub const fn width(&self) -> UnsignedTileUnit {
        self.width
    }

    #[inline]
    #[must_use]
    pub const fn height(&self) -> UnsignedTileUnit {
        self.height
    }

    /// The index of [`Self::direction`], always valid since construction rejects [`HexDirection::None`].
    #[inline]
    fn direction_index(&self) -> usize {
        self.direction.index().unwrap_or_default()
    }

    /// The unit steps along the width and height axes.
    #[inline]
    #[must_use]
    pub fn axes(&self) -> (TileCoord, TileCoord) {
        let index = self.direction_index();

        (TileCoord::DIRECTIONS[index], TileCoord::DIRECTIONS[(index + 2) % 6])
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, coord: TileCoord) -> bool {
        // rotating the offset so that `direction` lands on `Up` turns the axes into (0, -1) and (1, 0)
        let local = (coord - self.origin).rotate_ccw(self.direction_index() as u32);
        let along = -local.r;
        let across = local.q;

        (0..=self.width.cast_signed()).contains(&along) && (0..=self.height.cast_signed()).contains(&across)
    }

    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        (self.width as usize + 1) * (self.height as usize + 1)
    }
}

/// A generated area of tiles. Iterating over it yields every tile in it exactly once.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(try_from = "TileRegionDef", into = "TileRegionDef")]
pub enum TileRegion {
    Disk(DiskRegion),
    Parallelogram(ParallelogramRegion),
}

impl Default for TileRegion {
    fn default() -> Self {
        Self::disk(TileCoord::new(5, 1), 4)
    }
}

impl TileRegion {
    /// Every tile within `radius` steps of `center`. A radius of 0 is just the center.
    #[inline]
    #[must_use]
    pub const fn disk(center: TileCoord, radius: UnsignedTileUnit) -> Self {
        Self::Disk(DiskRegion { center, radius })
    }

    /// [`Self::disk`], rejecting a radius over [`MAX_EXTENT`].
    #[inline]
    pub const fn try_disk(center: TileCoord, radius: UnsignedTileUnit) -> Result<Self, CoordError> {
        if radius > MAX_EXTENT {
            return Err(CoordError::TooLarge(radius));
        }

        Ok(Self::disk(center, radius))
    }

    /// A `(width + 1) * (height + 1)` parallelogram starting at `origin`.
    ///
    /// A width or height of 0 yields a line, and both being 0 yields only the origin.
    /// Neither may be over [`MAX_EXTENT`].
    #[inline]
    pub fn parallelogram(
        origin: TileCoord,
        direction: HexDirection,
        width: UnsignedTileUnit,
        height: UnsignedTileUnit,
    ) -> Result<Self, CoordError> {
        if direction.is_none() {
            return Err(CoordError::NoDirection);
        }
        if width > MAX_EXTENT || height > MAX_EXTENT {
            return Err(CoordError::TooLarge(width.max(height)));
        }

        Ok(Self::Parallelogram(ParallelogramRegion {
            origin,
            direction,
            width,
            height,
        }))
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, coord: TileCoord) -> bool {
        match self {
            TileRegion::Disk(v) => v.contains(coord),
            TileRegion::Parallelogram(v) => v.contains(coord),
        }
    }

    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        match self {
            TileRegion::Disk(v) => v.len(),
            TileRegion::Parallelogram(v) => v.len(),
        }
    }

    /// Regions always contain at least one tile.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    #[inline]
    #[must_use]
    pub fn to_set(self) -> HashSet<TileCoord> {
        self.into_iter().collect()
    }
}

/// Every tile within `radius` steps of `center`.
#[inline]
#[must_use]
pub fn circle(center: TileCoord, radius: UnsignedTileUnit) -> HashSet<TileCoord> {
    TileRegion::disk(center, radius).to_set()
}

/// Every tile of the parallelogram described by [`TileRegion::parallelogram`].
#[inline]
pub fn rectangle(
    origin: TileCoord,
    direction: HexDirection,
    width: UnsignedTileUnit,
    height: UnsignedTileUnit,
) -> Result<HashSet<TileCoord>, CoordError> {
    TileRegion::parallelogram(origin, direction, width, height).map(TileRegion::to_set)
}

/// The serialized form of [`TileRegion`], checked on the way in.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub enum TileRegionDef {
    Disk {
        center: TileCoord,
        radius: UnsignedTileUnit,
    },
    Parallelogram {
        origin: TileCoord,
        direction: HexDirection,
        width: UnsignedTileUnit,
        height: UnsignedTileUnit,
    },
}

impl TryFrom<TileRegionDef> for TileRegion {
    type Error = CoordError;

    fn try_from(value: TileRegionDef) -> Result<Self, Self::Error> {
        match value {
            TileRegionDef::Disk { center, radius } => Self::try_disk(center, radius),
            TileRegionDef::Parallelogram {
                origin,
                direction,
                width,
                height,
            } => Self::parallelogram(origin, direction, width, height),
        }
    }
}

impl From<TileRegion> for TileRegionDef {
    fn from(value: TileRegion) -> Self {
        match value {
            TileRegion::Disk(v) => TileRegionDef::Disk {
                center: v.center,
                radius: v.radius,
            },
            TileRegion::Parallelogram(v) => TileRegionDef::Parallelogram {
                origin: v.origin,
                direction: v.direction,
                width: v.width,
                height: v.height,
            },
        }
    }
}

#[derive(Debug, Clone)]
pub struct ExactSizeCoordIterator {
    region: TileRegion,
    count: usize,
    x: TileUnit,
    y: TileUnit,
}

impl ExactSizeCoordIterator {
    #[inline]
    #[must_use]
    pub fn new(region: TileRegion) -> Self {
        let (x, y) = match region {
            TileRegion::Disk(v) => {
                let dq = -v.signed_radius();

                (dq, v.column(dq).0)
            }
            TileRegion::Parallelogram(_) => (0, 0),
        };

        Self {
            region,
            count: region.len(),
            x,
            y,
        }
    }
}

impl Iterator for ExactSizeCoordIterator {
    type Item = TileCoord;

    fn next(&mut self) -> Option<Self::Item> {
        if self.count == 0 {
            return None;
        }

        let result = match self.region {
            TileRegion::Disk(v) => {
                let dq = self.x;
                let dr = self.y;

                #[cfg(debug_assertions)]
                if dq > v.signed_radius() {
                    panic!("ExactSizeCoordIterator exceeded the radius of a TileRegion::Disk. Iterator state: {self:?}")
                }

                let result = v.center + TileCoord::new(dq, dr);

                if dr == v.column(dq).1 {
                    self.x = dq + 1;
                    self.y = v.column(dq + 1).0;
                } else {
                    self.y = dr + 1;
                }

                result
            }
            TileRegion::Parallelogram(v) => {
                let i = self.x;
                let j = self.y;
                let (along, across) = v.axes();

                #[cfg(debug_assertions)]
                if j > v.height.cast_signed() {
                    panic!(
                        "ExactSizeCoordIterator exceeded the height of a TileRegion::Parallelogram. Iterator state: {self:?}"
                    )
                }

                let result = v.origin + along * i + across * j;

                if i == v.width.cast_signed() {
                    self.x = 0;
                    self.y = j + 1;
                } else {
                    self.x = i + 1;
                }

                result
            }
        };

        self.count -= 1;
        Some(result)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.count, Some(self.count))
    }
}

impl ExactSizeIterator for ExactSizeCoordIterator {}

impl IntoIterator for TileRegion {
    type Item = TileCoord;
    type IntoIter = ExactSizeCoordIterator;

    fn into_iter(self) -> Self::IntoIter {
        ExactSizeCoordIterator::new(self)
    }
}
