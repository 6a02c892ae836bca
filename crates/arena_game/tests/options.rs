use std::{env, fs, path::PathBuf, process};

use arena_data::game::{
    coord::{HexOrientation, TileCoord},
    direction::HexDirection,
    region::TileRegion,
};
use arena_game::{
    board::BoardMode,
    input::PointerResolver,
    persistent::options::{ArenaOptions, CellSize},
};

fn scratch_path(name: &str) -> PathBuf {
    let dir = env::temp_dir().join(format!("arena_options_{}", process::id()));
    fs::create_dir_all(&dir).unwrap();

    dir.join(name)
}

#[test]
fn test_defaults() {
    let options = ArenaOptions::default();

    assert_eq!(options.cell_size.get(), 40.0);
    assert_eq!(options.orientation, HexOrientation::Flat);
    assert_eq!(options.initial_mode, BoardMode::Select);
    assert_eq!(options.seed, TileRegion::disk(TileCoord::new(5, 1), 4));
    assert_eq!(options.layout().board_extent().x, 600.0);
}

#[test]
fn test_ron_round_trip() {
    let options = ArenaOptions {
        cell_size: CellSize::new(36.0).unwrap(),
        orientation: HexOrientation::Pointy,
        initial_mode: BoardMode::EditTiles,
        seed: TileRegion::parallelogram(TileCoord::new(-2, 3), HexDirection::LeftDown, 4, 2).unwrap(),
    };

    let document = options.to_ron_string().unwrap();
    assert_eq!(ArenaOptions::from_ron_str(&document).unwrap(), options);
}

#[test]
fn test_partial_document() {
    let options = ArenaOptions::from_ron_str("(cell_size: 100.0, orientation: Pointy)").unwrap();

    assert_eq!(options.cell_size.get(), 100.0);
    assert_eq!(options.orientation, HexOrientation::Pointy);
    assert_eq!(options.seed, TileRegion::default());
}

#[test]
fn test_rejects_bad_documents() {
    assert!(ArenaOptions::from_ron_str("(cell_size: -4.0)").is_err());
    assert!(ArenaOptions::from_ron_str("(seed: Disk(center: (0, 0), radius: -1))").is_err());
    assert!(ArenaOptions::from_ron_str("(orientation: Sideways)").is_err());
    assert!(ArenaOptions::from_ron_str("(seed: Disk(center: (0, 0), radius: 4000000000))").is_err());
}

#[test]
fn test_load_creates_missing_file() {
    let path = scratch_path("missing.ron");
    let _ = fs::remove_file(&path);

    let options = ArenaOptions::load(&path);
    assert_eq!(options, ArenaOptions::default());

    let written = fs::read_to_string(&path).unwrap();
    assert_eq!(ArenaOptions::from_ron_str(&written).unwrap(), options);
}

#[test]
fn test_load_falls_back_on_broken_file() {
    let path = scratch_path("broken.ron");
    fs::write(&path, "(cell_size: 0.0, orientation: Pointy)").unwrap();

    let options = ArenaOptions::load(&path);
    assert_eq!(options, ArenaOptions::default());
}

#[test]
fn test_load_keeps_valid_file() {
    let path = scratch_path("valid.ron");
    fs::write(&path, "(cell_size: 33.0)").unwrap();

    let options = ArenaOptions::load(&path);
    assert_eq!(options.cell_size.get(), 33.0);
    assert_eq!(options.orientation, HexOrientation::Flat);
}

#[test]
fn test_configured_cell_size_drives_resolution() {
    let options = ArenaOptions::from_ron_str("(cell_size: 20.0)").unwrap();
    assert_eq!(options.cell_size.get(), 20.0);

    let resolver = PointerResolver::from_options(&options);
    let pixel = TileCoord::new(4, 0).to_pixel_with(20.0);

    assert_eq!(resolver.resolve(pixel), TileCoord::new(4, 0));
}

#[test]
fn test_board_from_options() {
    let board = ArenaOptions::default().board();
    assert_eq!(board.mode(), BoardMode::Select);
    assert_eq!(board.tiles().len(), 61);

    let options = ArenaOptions::from_ron_str("(initial_mode: EditCreatures)").unwrap();
    assert_eq!(options.board().mode(), BoardMode::EditCreatures);
}

#[test]
fn test_load_falls_back_on_oversized_seed() {
    let path = scratch_path("oversized.ron");
    fs::write(&path, "(seed: Parallelogram(origin: (0, 0), direction: Up, width: 4294967295, height: 2))").unwrap();

    let options = ArenaOptions::load(&path);
    assert_eq!(options.seed, TileRegion::default());
}
