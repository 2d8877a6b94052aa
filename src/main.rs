//! Gomoku position analyzer
//!
//! Reads a board in glyph format (`*` or `.` empty, `b` black, `w` white,
//! one row per line) and prints the outcome, the score, the pattern counts
//! and the engine's suggested move.

use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use gomoku::{pattern_tally, AIEngine, Board, Stone, SCORED_LENGTHS};

#[derive(Parser, Debug)]
#[command(author, version, about = "Analyze a Gomoku position", long_about = None)]
struct Args {
    /// Board file; read from stdin when omitted
    board: Option<PathBuf>,

    /// Start from an empty board of this size instead of reading one
    #[arg(long, conflicts_with = "board")]
    empty: Option<usize>,

    /// Side to suggest a move for
    #[arg(short, long, value_enum, default_value_t = Side::Black)]
    color: Side,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Side {
    Black,
    White,
}

impl From<Side> for Stone {
    fn from(side: Side) -> Stone {
        match side {
            Side::Black => Stone::Black,
            Side::White => Stone::White,
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if args.debug { "debug" } else { "info" })
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut board = load_board(&args)?;
    info!(size = board.size(), stones = board.stone_count(), "board loaded");

    let engine = AIEngine::new();
    let color = Stone::from(args.color);

    println!("{}", board.render());
    println!("Outcome: {}", engine.outcome(&board));
    println!("Score:   {}", engine.evaluate(&board));

    let tally = pattern_tally(&board);
    println!("Patterns (open/semi-open):");
    for length in SCORED_LENGTHS {
        let black = tally.count(Stone::Black, length)?;
        let white = tally.count(Stone::White, length)?;
        println!(
            "  length {length}: black {}/{}, white {}/{}",
            black.open, black.semi_open, white.open, white.semi_open
        );
    }

    let result = engine.get_move_with_stats(&mut board, color)?;
    match result.best_move {
        Some(pos) => println!(
            "Suggested move for {:?}: {pos} (score {}, {} candidates, {}ms)",
            args.color, result.score, result.nodes, result.time_ms
        ),
        None => println!("No move suggested for {:?}", args.color),
    }

    Ok(())
}

fn load_board(args: &Args) -> Result<Board> {
    if let Some(size) = args.empty {
        return Board::try_new(size).context("invalid --empty size");
    }

    let text = match &args.board {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read board from {}", path.display()))?,
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("failed to read board from stdin")?;
            text
        }
    };

    text.parse::<Board>().context("invalid board")
}
