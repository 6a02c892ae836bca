use std::{env, fs, fs::File};

use anyhow::Context;
use arena_data::display::hex_corners;
use arena_game::{
    input::{BoardInputEvent, PointerResolver},
    persistent::{
        self,
        options::{ArenaOptions, OPTIONS_PATH},
    },
};
use ron::ser::PrettyConfig;

fn init_logger() -> anyhow::Result<()> {
    let filter = "info";

    let mut builder = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter));
    if let Ok(file) = env::var("LOG_FILE") {
        let file = Box::new(File::create(&file).with_context(|| format!("log file {file} could not be created"))?);

        builder.target(env_logger::Target::Pipe(file));
    }
    builder.init();

    Ok(())
}

/// Reads a RON list of [`BoardInputEvent`]s to replay against the board.
fn read_script(path: &str) -> anyhow::Result<Vec<BoardInputEvent>> {
    let document = fs::read_to_string(path).with_context(|| format!("script {path} could not be read"))?;

    persistent::ron_options()
        .from_str(&document)
        .with_context(|| format!("script {path} failed to parse"))
}

fn main() -> anyhow::Result<()> {
    init_logger()?;

    log::info!("Starting Elemental Arena board...");

    let options = ArenaOptions::load(OPTIONS_PATH);
    let mut resolver = PointerResolver::from_options(&options);
    let mut board = options.board();

    let extent = options.layout().board_extent();
    log::info!(
        "Board is {}x{} pixels with {} tiles",
        extent.x,
        extent.y,
        board.tiles().len()
    );
    log::debug!("Cell corners: {:?}", hex_corners(&options.layout()));

    let events = match env::args().nth(1) {
        Some(path) => read_script(&path)?,
        None => {
            log::warn!("No input script given, showing the seeded board only.");

            Vec::new()
        }
    };

    for event in events {
        let outcome = resolver.handle(&mut board, event);

        log::info!("{event:?} -> {outcome:?}");
    }

    let snapshot = board.snapshot();
    let pretty = PrettyConfig::default();

    println!("{}", persistent::ron_options().to_string_pretty(&snapshot, pretty.clone())?);

    if let Some(profile) = snapshot.selected_profile() {
        log::info!("Selected {} ({})", profile.name, profile.short_name());

        println!("{}", persistent::ron_options().to_string_pretty(&profile, pretty)?);
    }

    log::info!("Goodbye!");

    Ok(())
}
