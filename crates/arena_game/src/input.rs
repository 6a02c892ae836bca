use arena_data::{
    game::coord::{HexLayout, HexOrientation, TileCoord},
    math::{Float, Vec2},
};
use serde::{Deserialize, Serialize};

use crate::{
    board::{BoardMode, BoardState, ClickOutcome},
    persistent::options::{ArenaOptions, CellSize},
};

/// The pointer and toolbar events a board reacts to.
///
/// Positions are in pixels, relative to the top-left corner of the board.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub enum BoardInputEvent {
    Click { pos: Vec2 },
    Move { pos: Vec2 },
    SetMode { mode: BoardMode },
    /// Sets the cell size to `pixels`. Sizes that aren't finite and positive are ignored.
    Resize { pixels: Float },
    ZoomIn,
    ZoomOut,
    ZoomReset,
    /// Activates the `icon`th ability icon of the creature at `coord`, see [`BoardState::activate_ability`].
    ActivateAbility { coord: TileCoord, icon: usize },
}

/// What handling a [`BoardInputEvent`] did.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub enum InputOutcome {
    Clicked { coord: TileCoord, outcome: ClickOutcome },
    Hovered { coord: TileCoord },
    ModeChanged { mode: BoardMode },
    Resized { cell_size: CellSize },
    AbilityActivated { coord: TileCoord, icon: usize, activated: bool },
}

/// Turns pixel positions into tiles, and feeds the resulting clicks and moves into a [`BoardState`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PointerResolver {
    orientation: HexOrientation,
    cell_size: CellSize,
}

impl PointerResolver {
    pub fn new(orientation: HexOrientation, cell_size: CellSize) -> Self {
        Self { orientation, cell_size }
    }

    pub fn from_options(options: &ArenaOptions) -> Self {
        Self::new(options.orientation, options.cell_size)
    }

    pub fn cell_size(&self) -> CellSize {
        self.cell_size
    }

    pub fn layout(&self) -> HexLayout {
        HexLayout::new(self.orientation, self.cell_size.get())
    }

    /// The tile under `pixel`.
    pub fn resolve(&self, pixel: Vec2) -> TileCoord {
        self.layout().resolve(pixel)
    }

    /// Handles a single event, running it to completion before returning.
    pub fn handle(&mut self, board: &mut BoardState, event: BoardInputEvent) -> InputOutcome {
        match event {
            BoardInputEvent::Click { pos } => {
                let coord = self.resolve(pos);
                let outcome = board.click(coord);

                InputOutcome::Clicked { coord, outcome }
            }
            BoardInputEvent::Move { pos } => {
                let coord = self.resolve(pos);
                board.set_hover(coord);

                InputOutcome::Hovered { coord }
            }
            BoardInputEvent::SetMode { mode } => {
                board.set_mode(mode);

                InputOutcome::ModeChanged { mode }
            }
            BoardInputEvent::Resize { pixels } => match CellSize::new(pixels) {
                Ok(cell_size) => self.resize(cell_size),
                Err(err) => {
                    log::warn!("Ignoring resize: {err}");

                    InputOutcome::Resized {
                        cell_size: self.cell_size,
                    }
                }
            },
            BoardInputEvent::ZoomIn => self.resize(self.cell_size.increase()),
            BoardInputEvent::ZoomOut => self.resize(self.cell_size.decrease()),
            BoardInputEvent::ZoomReset => self.resize(CellSize::reset()),
            BoardInputEvent::ActivateAbility { coord, icon } => InputOutcome::AbilityActivated {
                coord,
                icon,
                activated: board.activate_ability(coord, icon),
            },
        }
    }

    fn resize(&mut self, cell_size: CellSize) -> InputOutcome {
        if self.cell_size != cell_size {
            log::debug!("Cell size changed from {} to {}", self.cell_size.get(), cell_size.get());
        }
        self.cell_size = cell_size;

        InputOutcome::Resized { cell_size }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zoom_changes_resolution() {
        let mut resolver = PointerResolver::new(HexOrientation::Flat, CellSize::reset());
        let mut board = BoardState::new();
        let pixel = TileCoord::new(4, 0).to_pixel(&resolver.layout());

        assert_eq!(resolver.resolve(pixel), TileCoord::new(4, 0));

        for _ in 0..8 {
            resolver.handle(&mut board, BoardInputEvent::ZoomIn);
        }
        assert_eq!(resolver.cell_size().get(), CellSize::MAX);
        // 240px across at 48px cells is 3.33 cells
        assert_eq!(resolver.resolve(pixel), TileCoord::new(3, 0));

        let outcome = resolver.handle(&mut board, BoardInputEvent::ZoomReset);
        assert_eq!(
            outcome,
            InputOutcome::Resized {
                cell_size: CellSize::reset()
            }
        );
        assert_eq!(resolver.resolve(pixel), TileCoord::new(4, 0));
    }

    #[test]
    fn small_configured_sizes_resolve_at_their_own_scale() {
        let resolver = PointerResolver::new(HexOrientation::Flat, CellSize::new(20.0).unwrap());
        let pixel = TileCoord::new(4, 0).to_pixel(&HexLayout::flat(20.0));

        assert_eq!(resolver.layout(), HexLayout::flat(20.0));
        assert_eq!(resolver.resolve(pixel), TileCoord::new(4, 0));
    }

    #[test]
    fn resize_keeps_sizes_and_ignores_nonsense() {
        let mut resolver = PointerResolver::new(HexOrientation::Flat, CellSize::reset());
        let mut board = BoardState::new();

        resolver.handle(&mut board, BoardInputEvent::Resize { pixels: 12.0 });
        assert_eq!(resolver.cell_size().get(), 12.0);

        resolver.handle(&mut board, BoardInputEvent::Resize { pixels: 45.0 });
        assert_eq!(resolver.cell_size().get(), 45.0);

        let outcome = resolver.handle(&mut board, BoardInputEvent::Resize { pixels: -1.0 });
        assert_eq!(resolver.cell_size().get(), 45.0);
        assert_eq!(
            outcome,
            InputOutcome::Resized {
                cell_size: resolver.cell_size()
            }
        );
    }
}
