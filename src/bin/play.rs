//! Interactive terminal 2048
//!
//! Usage: cargo run --bin play [--seed 42] [--size 4] [--best-file path]

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use rust_2048::{
    direction_for_key, Direction, EngineConfig, FeedbackCue, GameRng, GameSession, GridEngine,
    JsonFileStore, MoveResult, Tile,
};

const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const RESET: &str = "\x1b[0m";

/// Play 2048 in the terminal
#[derive(Parser, Debug)]
#[command(name = "play")]
#[command(about = "Play 2048 in the terminal", long_about = None)]
struct Args {
    /// Random seed (defaults to entropy)
    #[arg(long)]
    seed: Option<u64>,

    /// Grid side length
    #[arg(long)]
    size: Option<usize>,

    /// File holding the best score
    #[arg(long, default_value = ".2048_best.json")]
    best_file: PathBuf,

    /// JSON engine config
    #[arg(long)]
    config: Option<PathBuf>,
}

fn load_config(args: &Args) -> anyhow::Result<EngineConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            EngineConfig::from_json(&text)?
        }
        None => EngineConfig::default(),
    };
    if let Some(size) = args.size {
        config = config.with_size(size);
    }
    Ok(config)
}

fn cue_text(cue: FeedbackCue, win_value: Tile) -> Option<String> {
    match cue {
        FeedbackCue::Move => None,
        FeedbackCue::Merge => Some("merge!".to_string()),
        FeedbackCue::BigMerge => Some("BIG merge!".to_string()),
        FeedbackCue::Win => Some(format!(
            "You reached {win_value}! (k = keep going, n = new game)"
        )),
        FeedbackCue::GameOver => Some("Game over! (u = undo, n = new game)".to_string()),
    }
}

fn render(session: &GameSession<JsonFileStore>, last: Option<&MoveResult>) {
    println!();
    println!(
        "{BOLD}Score:{RESET} {}   {BOLD}Best:{RESET} {}",
        session.score(),
        session.best_score()
    );
    print!("{}", session.grid());
    if let Some(result) = last {
        let win_value = session.engine().config().win_value;
        for text in result.cues().into_iter().filter_map(|cue| cue_text(cue, win_value)) {
            println!("{BOLD}{text}{RESET}");
        }
    }
    println!("{DIM}w/a/s/d or arrow names to move, u undo, n new game, k keep going, q quit{RESET}");
}

fn parse_direction(input: &str) -> Option<Direction> {
    direction_for_key(input).or_else(|| input.parse().ok())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rust_2048=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let args = Args::parse();
    let config = load_config(&args)?;
    let rng = match args.seed {
        Some(seed) => GameRng::new(seed),
        None => GameRng::from_entropy(),
    };
    tracing::info!(seed = rng.seed(), size = config.size, "Starting game");

    let engine = GridEngine::new(config, rng)?;
    let mut session = GameSession::new(engine, JsonFileStore::new(&args.best_file));
    render(&session, None);

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line.context("reading stdin")?;
        let input = line.trim();
        let mut last = None;

        match input {
            "q" | "quit" => break,
            "u" | "undo" => {
                if session.undo().is_none() {
                    println!("Nothing to undo.");
                }
            }
            "n" | "new" => {
                session.restart();
            }
            "k" | "keep" => session.keep_playing(),
            _ => match parse_direction(input) {
                Some(dir) => match session.handle_move(dir) {
                    Some(result) => last = Some(result),
                    None => println!("The game is over. Press n for a new game or u to undo."),
                },
                None => println!("Unknown command: {input:?}"),
            },
        }

        render(&session, last.as_ref());
        io::stdout().flush()?;
    }

    println!("Goodbye!");
    Ok(())
}
