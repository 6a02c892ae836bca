use std::{
    fs::{File, read_to_string},
    io::Write,
    path::Path,
};

use arena_data::{
    game::{
        coord::{HexLayout, HexOrientation},
        region::TileRegion,
    },
    math::Float,
};
use ron::ser::PrettyConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    board::{BoardMode, BoardState},
    persistent,
};

pub static OPTIONS_PATH: &str = "options.ron";

#[derive(Debug, Error)]
pub enum OptionsError {
    #[error("cell size must be a positive number of pixels, got {0}")]
    InvalidCellSize(Float),
    #[error("options failed to parse: {0}")]
    Parse(#[from] ron::error::SpannedError),
    #[error("options failed to serialize: {0}")]
    Serialize(#[from] ron::Error),
}

/// The distance in pixels from the center of a cell to its corners.
///
/// Any finite positive size can be configured. Stepping it with [`CellSize::increase`] and [`CellSize::decrease`]
/// stays within [`CellSize::MIN`] and [`CellSize::MAX`], a pixel at a time.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "Float", into = "Float")]
pub struct CellSize(Float);

impl CellSize {
    pub const MIN: Float = 32.0;
    pub const MAX: Float = 48.0;
    pub const DEFAULT: Float = 40.0;
    pub const STEP: Float = 1.0;

    pub fn new(pixels: Float) -> Result<Self, OptionsError> {
        if !pixels.is_finite() || pixels <= 0.0 {
            return Err(OptionsError::InvalidCellSize(pixels));
        }

        Ok(Self(pixels))
    }

    pub const fn get(self) -> Float {
        self.0
    }

    /// Steps up by a pixel, up to [`Self::MAX`]. Does nothing if already at or over it.
    pub fn increase(self) -> Self {
        if !self.can_increase() {
            return self;
        }

        Self((self.0 + Self::STEP).min(Self::MAX))
    }

    /// Steps down by a pixel, down to [`Self::MIN`]. Does nothing if already at or under it.
    pub fn decrease(self) -> Self {
        if !self.can_decrease() {
            return self;
        }

        Self((self.0 - Self::STEP).max(Self::MIN))
    }

    pub const fn reset() -> Self {
        Self(Self::DEFAULT)
    }

    pub fn can_increase(self) -> bool {
        self.0 < Self::MAX
    }

    pub fn can_decrease(self) -> bool {
        self.0 > Self::MIN
    }

    pub fn is_default(self) -> bool {
        self.0 == Self::DEFAULT
    }
}

impl Default for CellSize {
    fn default() -> Self {
        Self::reset()
    }
}

impl TryFrom<Float> for CellSize {
    type Error = OptionsError;

    fn try_from(value: Float) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CellSize> for Float {
    fn from(value: CellSize) -> Self {
        value.0
    }
}

/// Everything a board deployment is configured with.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaOptions {
    pub cell_size: CellSize,
    pub orientation: HexOrientation,
    /// The mode the board starts out in.
    pub initial_mode: BoardMode,
    /// The tiles the board starts out with.
    pub seed: TileRegion,
}

impl ArenaOptions {
    pub fn layout(&self) -> HexLayout {
        HexLayout::new(self.orientation, self.cell_size.get())
    }

    /// Creates a fresh board, seeded and in its initial mode.
    pub fn board(&self) -> BoardState {
        let mut board = BoardState::from_region(self.seed);
        board.set_mode(self.initial_mode);

        board
    }

    pub fn from_ron_str(s: &str) -> Result<Self, OptionsError> {
        Ok(persistent::ron_options().from_str(s)?)
    }

    pub fn to_ron_string(&self) -> Result<String, OptionsError> {
        Ok(persistent::ron_options().to_string_pretty(self, PrettyConfig::default())?)
    }

    /// Loads the options at `path`, falling back to the defaults if they are missing or broken,
    /// then writes them back so that the file is always complete.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        log::info!("Loading options from {}...", path.display());

        let file = read_to_string(path).unwrap_or_default();

        let this = Self::from_ron_str(&file)
            .inspect_err(|err| log::warn!("Error parsing options! A fresh one will be created. Error: {err}"))
            .unwrap_or_default();

        if let Err(err) = this.save(path) {
            log::error!("Error saving options! {err}");
        }

        this
    }

    pub fn save(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let path = path.as_ref();

        log::info!("Serializing options...");
        log::debug!("\n{self:?}");

        let document = self
            .to_ron_string()
            .inspect_err(|err| log::warn!("Error writing options! Error: {err}"))?;

        log::info!("Saving options to {}...", path.display());

        let mut file = File::create(path)?;
        write!(&mut file, "{document}")?;

        log::info!("Saved options!");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_size_steps_within_bounds() {
        let mut size = CellSize::default();
        assert!(size.is_default());

        for _ in 0..20 {
            size = size.increase();
        }
        assert_eq!(size.get(), CellSize::MAX);
        assert!(!size.can_increase());

        for _ in 0..20 {
            size = size.decrease();
        }
        assert_eq!(size.get(), CellSize::MIN);
        assert!(!size.can_decrease());
        assert!(size.can_increase());
    }

    #[test]
    fn cell_size_rejects_nonsense() {
        assert!(CellSize::new(0.0).is_err());
        assert!(CellSize::new(-3.0).is_err());
        assert!(CellSize::new(Float::NAN).is_err());
        assert_eq!(CellSize::new(41.5).map(CellSize::get).ok(), Some(41.5));
    }

    #[test]
    fn configured_sizes_are_kept_but_steps_are_bounded() {
        let small = CellSize::new(20.0).unwrap();
        assert_eq!(small.get(), 20.0);
        assert!(!small.can_decrease());
        assert_eq!(small.decrease(), small);
        assert_eq!(small.increase().get(), 21.0);

        let large = CellSize::new(100.0).unwrap();
        assert_eq!(large.get(), 100.0);
        assert_eq!(large.increase(), large);
        assert_eq!(large.decrease().get(), 99.0);

        assert_eq!(CellSize::new(47.5).unwrap().increase().get(), CellSize::MAX);
    }
}
