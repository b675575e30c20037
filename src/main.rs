//! Goban-Rules: a small-board Go rule engine.
//!
//! ## Usage
//!
//! - `goban-rules` - Show a demo
//! - `goban-rules replay D4 E4 pass ...` - Replay a move list
//! - `goban-rules selfplay --seed 7` - Let two random players finish a game

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use goban_rules::board::{Vertex, format_vertex, parse_vertex};
use goban_rules::constants::DEFAULT_SIZE;
use goban_rules::game::{GameState, TransitionKind};

/// Goban-Rules: a small-board Go rule engine
#[derive(Parser)]
#[command(name = "goban-rules")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Board size (NxN)
    #[arg(short, long, default_value_t = DEFAULT_SIZE)]
    size: usize,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a short scripted capture demo
    Demo,
    /// Play a list of vertices (e.g. D4, pass) alternately starting with Black
    Replay {
        #[arg(required = true)]
        moves: Vec<String>,
    },
    /// Play out a game between two players choosing uniformly among legal moves
    Selfplay {
        /// RNG seed, random if omitted
        #[arg(long)]
        seed: Option<u64>,
        /// Stop after this many moves even if the game has not ended
        #[arg(long, default_value_t = 1000)]
        max_moves: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut game = GameState::new(cli.size)
        .with_context(|| format!("cannot create a {0}x{0} game", cli.size))?;

    match cli.command {
        Some(Commands::Replay { moves }) => replay(&mut game, &moves)?,
        Some(Commands::Selfplay { seed, max_moves }) => selfplay(&mut game, seed, max_moves)?,
        Some(Commands::Demo) | None => run_demo(&mut game)?,
    }

    print_summary(&game);
    Ok(())
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// A lone white stone with one liberty, captured by Black.
fn run_demo(game: &mut GameState) -> Result<()> {
    if game.size() < 4 {
        bail!("the demo needs a board of at least 4x4");
    }
    println!("Goban-Rules: small-board Go rule engine\n");

    // Black surrounds (1,1) on three sides while White plays elsewhere
    let far = game.size() - 1;
    let script = [(0, 1), (1, 1), (1, 0), (far, far), (1, 2), (far, far - 1), (2, 1)];
    for (row, col) in script {
        let t = game
            .play(row, col)
            .with_context(|| format!("demo move ({row}, {col}) was refused"))?;
        if let TransitionKind::Placed {
            color, captured, ..
        } = t.kind
        {
            println!(
                "{color} plays {}{}",
                format_vertex((row, col), game.size())?,
                if captured.is_empty() {
                    String::new()
                } else {
                    format!(", capturing {}", captured.len())
                }
            );
        }
    }
    Ok(())
}

fn replay(game: &mut GameState, moves: &[String]) -> Result<()> {
    for (i, mv) in moves.iter().enumerate() {
        if game.is_terminal() {
            bail!("move {} ({mv}) comes after the game ended", i + 1);
        }
        let vertex = parse_vertex(mv, game.size())?;
        match vertex {
            Vertex::Pass => {
                game.pass()?;
            }
            Vertex::Play((row, col)) => {
                game.play(row, col)
                    .with_context(|| format!("move {} ({mv}) is illegal", i + 1))?;
            }
        }
    }
    Ok(())
}

fn selfplay(game: &mut GameState, seed: Option<u64>, max_moves: usize) -> Result<()> {
    let mut rng = match seed {
        Some(s) => fastrand::Rng::with_seed(s),
        None => fastrand::Rng::new(),
    };

    let mut played = 0;
    while !game.is_terminal() && played < max_moves {
        let legal = game.legal_moves();
        match rng.choice(legal) {
            Some((row, col)) => {
                game.play(row, col).with_context(|| {
                    format!("selfplay move {} ({row}, {col}) was refused", played + 1)
                })?;
            }
            None => {
                game.pass()?;
            }
        }
        played += 1;
    }
    info!(played, "selfplay finished");
    Ok(())
}

fn print_summary(game: &GameState) {
    println!("\n{}", game.board());
    let captures = game.captures();
    println!(
        "Captured: {} black, {} white",
        captures.black, captures.white
    );
    let score = game.score();
    println!(
        "Score: black {} ({} stones), white {} ({} stones)",
        score.black_score, score.black_area, score.white_score, score.white_area
    );
    match game.winner() {
        Some(winner) => println!("Game over, winner: {winner}"),
        None => println!("Game in progress, {} to move", game.current_player()),
    }
}
