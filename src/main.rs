use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use draughts_engine::GameSession;
use shashki::{autoplay, replay, Tap};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "shashki")]
#[command(about = "Replay Russian draughts taps against a saved game", long_about = None)]
#[command(version)]
struct Cli {
    /// JSON state file to resume from and write back to
    #[arg(short, long, env = "SHASHKI_STATE")]
    state: Option<PathBuf>,

    /// Ignore any saved state and start from the initial position
    #[arg(long)]
    new: bool,

    /// Steps to play with the fallback player after the taps
    #[arg(long, default_value_t = 0)]
    autoplay: usize,

    /// Print the saved JSON blob
    #[arg(long)]
    print_state: bool,

    /// Taps to apply in order, e.g. `5,0-4,1`
    taps: Vec<Tap>,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let mut session = match &cli.state {
        Some(path) if !cli.new && path.exists() => {
            let blob = fs::read_to_string(path)
                .with_context(|| format!("Failed to read state file {}", path.display()))?;
            info!("[CLI] Resuming game from {}", path.display());
            GameSession::deserialize(&blob)
        }
        _ => GameSession::new(),
    };

    let report = replay(&mut session, &cli.taps);
    for outcome in &report.applied {
        println!("{}", outcome.message);
    }

    if report.is_clean() && cli.autoplay > 0 {
        for outcome in autoplay(&mut session, cli.autoplay) {
            println!("{}", outcome.message);
        }
    }

    let counts = session.piece_counts();
    println!();
    print!("{}", session.board());
    println!(
        "White: {}  Black: {}  To move: {}  Result: {}",
        counts.white,
        counts.black,
        session.side_to_move(),
        session.state().outcome
    );

    let blob = session.serialize().context("Failed to serialize game state")?;
    if let Some(path) = &cli.state {
        fs::write(path, &blob)
            .with_context(|| format!("Failed to write state file {}", path.display()))?;
        info!("[CLI] Saved game to {}", path.display());
    }
    if cli.print_state {
        println!("{blob}");
    }

    if let Some(err) = report.rejected {
        bail!(err);
    }
    Ok(())
}
