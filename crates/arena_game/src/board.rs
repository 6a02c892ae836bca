use arena_data::{
    display::{Biome, CreatureProfile},
    game::{coord::TileCoord, region::TileRegion},
};
use hashbrown::HashSet;
use serde::{Deserialize, Serialize};

/// Decides what a click on the board does.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BoardMode {
    /// Clicks do nothing.
    None,
    /// Clicks toggle tiles. Removing a tile also removes the creature standing on it.
    EditTiles,
    /// Clicks toggle creatures, but only on top of tiles.
    EditCreatures,
    /// Clicks select the creature under the pointer, or clear the selection.
    #[default]
    Select,
}

/// What a single click ended up doing to the board.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClickOutcome {
    Ignored,
    TileAdded,
    TileRemoved { creature_removed: bool },
    CreatureAdded,
    CreatureRemoved,
    Selected,
    SelectionCleared,
}

/// The tiles and creatures of a board, and how it is being interacted with.
///
/// Every creature always stands on a tile; none of the operations here can break that.
#[derive(Debug, Clone, Default)]
pub struct BoardState {
    tiles: HashSet<TileCoord>,
    creatures: HashSet<TileCoord>,
    mode: BoardMode,
    selection: Option<TileCoord>,
    hover: TileCoord,
    information: Option<String>,
}

impl BoardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a board with no creatures, covered with the given tiles.
    pub fn with_tiles(tiles: impl IntoIterator<Item = TileCoord>) -> Self {
        Self {
            tiles: tiles.into_iter().collect(),
            ..Default::default()
        }
    }

    pub fn from_region(region: TileRegion) -> Self {
        let this = Self::with_tiles(region);
        log::debug!("Seeded board with {} tiles from {region:?}", this.tiles.len());

        this
    }

    pub fn tiles(&self) -> &HashSet<TileCoord> {
        &self.tiles
    }

    pub fn creatures(&self) -> &HashSet<TileCoord> {
        &self.creatures
    }

    pub fn mode(&self) -> BoardMode {
        self.mode
    }

    pub fn selection(&self) -> Option<TileCoord> {
        self.selection
    }

    /// The tile most recently under the pointer.
    pub fn hover(&self) -> TileCoord {
        self.hover
    }

    /// The message left by the last activated ability.
    pub fn information(&self) -> Option<&str> {
        self.information.as_deref()
    }

    pub fn has_tile(&self, coord: TileCoord) -> bool {
        self.tiles.contains(&coord)
    }

    pub fn has_creature(&self, coord: TileCoord) -> bool {
        self.creatures.contains(&coord)
    }

    /// Switches the mode. Leaving [`BoardMode::Select`] drops the selection and the information message.
    pub fn set_mode(&mut self, mode: BoardMode) {
        if mode != BoardMode::Select {
            self.selection = None;
            self.information = None;
        }

        if self.mode != mode {
            log::debug!("Board mode changed from {:?} to {mode:?}", self.mode);
        }
        self.mode = mode;
    }

    pub fn set_hover(&mut self, coord: TileCoord) {
        if self.hover != coord {
            log::trace!("Hovering over {coord}");
        }
        self.hover = coord;
    }

    /// Adds a tile, returning false if there already was one.
    pub fn add_tile(&mut self, coord: TileCoord) -> bool {
        self.tiles.insert(coord)
    }

    /// Removes a tile along with the creature on it.
    ///
    /// Returns `None` if there was no tile, otherwise whether a creature got removed too.
    pub fn remove_tile(&mut self, coord: TileCoord) -> Option<bool> {
        if !self.tiles.remove(&coord) {
            return None;
        }

        Some(self.remove_creature(coord))
    }

    /// Places a creature, returning false if there is no tile to place it on or the spot is already taken.
    pub fn add_creature(&mut self, coord: TileCoord) -> bool {
        self.tiles.contains(&coord) && self.creatures.insert(coord)
    }

    /// Removes a creature, returning false if there was none.
    pub fn remove_creature(&mut self, coord: TileCoord) -> bool {
        if self.selection == Some(coord) {
            self.selection = None;
        }

        self.creatures.remove(&coord)
    }

    /// The display profile of the creature at `coord`, by its position among the sorted creatures.
    pub fn profile_of(&self, coord: TileCoord) -> Option<CreatureProfile> {
        if !self.has_creature(coord) {
            return None;
        }

        let index = self.creatures.iter().filter(|v| **v < coord).count();

        Some(CreatureProfile::generate(index))
    }

    /// Activates the `icon`th ability icon of the creature at `coord`, leaving a message in [`Self::information`].
    ///
    /// Only works while selecting, on a creature that is hovered or selected, and on an icon that is both
    /// interactable and enabled. Returns whether the ability got activated.
    pub fn activate_ability(&mut self, coord: TileCoord, icon: usize) -> bool {
        if self.mode != BoardMode::Select || (self.hover != coord && self.selection != Some(coord)) {
            return false;
        }

        let Some(profile) = self.profile_of(coord) else {
            return false;
        };

        let Some(ability) = profile.icons.get(icon).filter(|v| v.interactable && v.enabled) else {
            log::debug!("Icon {icon} of the creature at {coord} can't be activated");
            return false;
        };

        let message = format!("Clicked on {} ({}) of {}", ability.icon, ability.tooltip, profile.name);
        log::debug!("{message}");
        self.information = Some(message);

        true
    }

    /// Applies a click on `coord` according to the current mode.
    pub fn click(&mut self, coord: TileCoord) -> ClickOutcome {
        let outcome = match self.mode {
            BoardMode::None => ClickOutcome::Ignored,
            BoardMode::EditTiles => match self.remove_tile(coord) {
                Some(creature_removed) => ClickOutcome::TileRemoved { creature_removed },
                None => {
                    self.add_tile(coord);

                    ClickOutcome::TileAdded
                }
            },
            BoardMode::EditCreatures => {
                if !self.has_tile(coord) {
                    ClickOutcome::Ignored
                } else if self.remove_creature(coord) {
                    ClickOutcome::CreatureRemoved
                } else {
                    self.add_creature(coord);

                    ClickOutcome::CreatureAdded
                }
            }
            BoardMode::Select => {
                if self.has_creature(coord) {
                    self.selection = Some(coord);

                    ClickOutcome::Selected
                } else {
                    self.selection = None;

                    ClickOutcome::SelectionCleared
                }
            }
        };

        debug_assert!(self.creatures.is_subset(&self.tiles));
        log::debug!("Clicked {coord} in {:?}: {outcome:?}", self.mode);

        outcome
    }

    /// Takes a read-only copy of the board for rendering.
    pub fn snapshot(&self) -> BoardSnapshot {
        let mut tiles = self.tiles.iter().copied().collect::<Vec<_>>();
        tiles.sort_unstable();

        let mut creatures = self.creatures.iter().copied().collect::<Vec<_>>();
        creatures.sort_unstable();

        BoardSnapshot {
            tiles,
            creatures,
            mode: self.mode,
            selection: self.selection,
            hover: self.hover,
            information: self.information.clone(),
        }
    }
}

/// A copy of a [`BoardState`], with tiles and creatures in sorted order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub tiles: Vec<TileCoord>,
    pub creatures: Vec<TileCoord>,
    pub mode: BoardMode,
    pub selection: Option<TileCoord>,
    pub hover: TileCoord,
    pub information: Option<String>,
}

impl BoardSnapshot {
    pub fn tile_count(&self) -> usize {
        self.tiles.len()
    }

    pub fn creature_count(&self) -> usize {
        self.creatures.len()
    }

    pub fn tile_biomes(&self) -> impl Iterator<Item = (TileCoord, Biome)> + '_ {
        self.tiles
            .iter()
            .enumerate()
            .map(|(i, coord)| (*coord, Biome::for_index(i)))
    }

    pub fn biome_of(&self, coord: TileCoord) -> Option<Biome> {
        self.tiles.binary_search(&coord).ok().map(Biome::for_index)
    }

    pub fn creature_profiles(&self) -> impl Iterator<Item = (TileCoord, CreatureProfile)> + '_ {
        self.creatures
            .iter()
            .enumerate()
            .map(|(i, coord)| (*coord, CreatureProfile::generate(i)))
    }

    pub fn profile_of(&self, coord: TileCoord) -> Option<CreatureProfile> {
        self.creatures
            .binary_search(&coord)
            .ok()
            .map(CreatureProfile::generate)
    }

    pub fn selected_profile(&self) -> Option<CreatureProfile> {
        self.selection.and_then(|coord| self.profile_of(coord))
    }

    /// Whether the creature at `coord` should show its ability icons, which is when it's hovered while selecting.
    pub fn shows_icons(&self, coord: TileCoord) -> bool {
        self.mode == BoardMode::Select && self.hover == coord
    }
}
