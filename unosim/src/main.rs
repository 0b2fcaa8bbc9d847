use clap::Parser;
use color_eyre::Result;
use runo::{
    config::GameConfig,
    constants::{DEFAULT_SEED, MIN_PLAYERS},
    turn::GameStatus,
    uno::Uno,
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Plays a game of UNO between computer players and prints every turn.
#[derive(Parser)]
#[command(name = "unosim", version, about, long_about = None)]
struct Args {
    /// Number of players, 2 to 4
    #[arg(short, long, default_value_t = MIN_PLAYERS)]
    players: usize,

    /// Seed for the deal and reshuffles
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// Stop after this many turns even if nobody has won
    #[arg(long, default_value_t = 1000)]
    max_turns: usize,

    /// Refuse player counts outside 2 to 4 instead of clamping them
    #[arg(long)]
    strict: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    init_tracing(args.verbose);

    let config = GameConfig::new(args.players).with_seed(args.seed);
    let mut uno = if args.strict {
        Uno::try_new(config)?
    } else {
        if config.validate().is_err() {
            warn!(requested = args.players, "player count out of range, clamping");
        }
        Uno::with_config(config)
    };

    let config = uno.config();
    info!(
        players = config.player_count,
        seed = config.seed,
        hand_size = config.hand_size,
        "starting game"
    );
    println!("{}", uno.describe_state());

    let mut turns = 0;
    while !uno.is_game_over() && turns < args.max_turns {
        uno.play_turn();
        turns += 1;
        println!("{}", uno.describe_state());
    }

    match uno.status() {
        GameStatus::Won(player) => println!("Player {player} wins after {turns} turns"),
        GameStatus::Stalemate => println!("Stalemate after {turns} turns"),
        GameStatus::InProgress => println!("No winner after {turns} turns"),
    }

    Ok(())
}
