use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};

use overworld::{Board, BoardParameters, Coordinate, Interface, StatusQueue, saveload};

#[derive(Parser, Debug)]
#[command(name = "overworld")]
#[command(about = "Explore a procedurally generated overworld")]
struct Args {
    /// Random seed (uses a time-derived seed if not specified)
    #[arg(short, long)]
    seed: Option<u32>,

    /// Load a saved board instead of generating a fresh one
    #[arg(long)]
    load: Option<PathBuf>,

    /// Save the board after rendering
    #[arg(long)]
    save: Option<PathBuf>,

    /// Snapshot encoding used by --load and --save
    #[arg(long, value_enum, default_value = "json")]
    format: SaveFormat,

    /// Current x position
    #[arg(long, default_value_t = 0)]
    x: i32,

    /// Current y position
    #[arg(long, default_value_t = 0)]
    y: i32,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum SaveFormat {
    Json,
    Binary,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();
    let position = Coordinate::new(args.x, args.y);

    let mut board = match &args.load {
        Some(path) => match args.format {
            SaveFormat::Json => saveload::load_json(path, position),
            SaveFormat::Binary => saveload::load_binary(path, position),
        }
        .with_context(|| format!("loading board from {}", path.display()))?,
        None => {
            let parameters = match args.seed {
                Some(seed) => BoardParameters::with_seed(seed),
                None => BoardParameters::default(),
            };
            Board::new(parameters)
        }
    };
    // Make sure the window around the requested position is populated even
    // when it reaches past what construction or the snapshot covered.
    board.generate_view(position);

    let status_rows = StatusQueue::default();
    status_rows.enqueue("Character Name");
    status_rows.enqueue("==============");
    status_rows.enqueue("");
    status_rows.enqueue(format!("Seed: {}", board.seed()));
    status_rows.enqueue("HP: 25");

    let interface = Interface::new();
    print!("{}", interface.render(&board, position, &status_rows)?);

    if let Some(path) = &args.save {
        match args.format {
            SaveFormat::Json => saveload::save_json(&board, path),
            SaveFormat::Binary => saveload::save_binary(&board, path),
        }
        .with_context(|| format!("saving board to {}", path.display()))?;
    }

    Ok(())
}
