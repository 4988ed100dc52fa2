//! Arena - command-line match runner
//!
//! Plays a series of games between two agents and prints the tally:
//!
//! ```text
//! arena --game connect-four --player1 mcts --player2 minimax --episodes 20
//! ```
//!
//! Log verbosity comes from `RUST_LOG` when set, otherwise `--log-level`.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::info;

use mcts_arena::agents::{Agent, HumanAgent, MinimaxAgent, MinimaxConfig, RandomAgent};
use mcts_arena::arena::{run_match, MatchConfig, MatchResults};
use mcts_arena::core::{GameRng, GameState};
use mcts_arena::games::{ConnectFour, TicTacToe};
use mcts_arena::mcts::{MCTSAgent, MCTSConfig};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum GameKind {
    TicTacToe,
    ConnectFour,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum AgentKind {
    Random,
    Mcts,
    Minimax,
    Human,
}

impl AgentKind {
    fn label(self) -> &'static str {
        match self {
            AgentKind::Random => "Random",
            AgentKind::Mcts => "MCTS",
            AgentKind::Minimax => "Minimax",
            AgentKind::Human => "Human",
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "arena")]
#[command(about = "Play matches between game-playing agents")]
struct Args {
    /// Game to play
    #[arg(long, value_enum, default_value_t = GameKind::TicTacToe)]
    game: GameKind,

    /// Agent for player 1 (X, moves first in Connect Four)
    #[arg(long, value_enum, default_value_t = AgentKind::Mcts)]
    player1: AgentKind,

    /// Agent for player 2 (O)
    #[arg(long, value_enum, default_value_t = AgentKind::Random)]
    player2: AgentKind,

    /// Number of games
    #[arg(long, default_value_t = 10)]
    episodes: u32,

    /// MCTS simulations per move
    #[arg(long, default_value_t = 1000)]
    simulations: u32,

    /// MCTS UCB1 exploration constant
    #[arg(long, default_value_t = std::f64::consts::SQRT_2)]
    exploration: f64,

    /// Minimax search depth
    #[arg(long, default_value_t = 5)]
    depth: u32,

    /// Base random seed (player 2 uses seed + 1); drawn from OS entropy when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Show the board during the last game
    #[arg(long)]
    render_last: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn init_tracing(level: &str) -> Result<()> {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    Ok(())
}

fn build_agent<S: GameState + 'static>(
    kind: AgentKind,
    seat: u64,
    base_seed: u64,
    args: &Args,
) -> Result<Box<dyn Agent<S>>> {
    let seed = base_seed.wrapping_add(seat - 1);
    let name = format!("{}-{}", kind.label(), seat);

    let agent: Box<dyn Agent<S>> = match kind {
        AgentKind::Random => Box::new(RandomAgent::new(seed).with_name(name)),
        AgentKind::Mcts => {
            let config = MCTSConfig::default()
                .with_simulations(args.simulations)
                .with_exploration(args.exploration)
                .with_seed(seed);
            let agent = MCTSAgent::new(config).context("invalid MCTS configuration")?;
            Box::new(agent.with_name(name))
        }
        AgentKind::Minimax => {
            let config = MinimaxConfig::default().with_max_depth(args.depth);
            let agent = MinimaxAgent::new(config).context("invalid minimax configuration")?;
            Box::new(agent.with_name(name))
        }
        AgentKind::Human => Box::new(HumanAgent::stdio().with_name(name)),
    };
    Ok(agent)
}

fn play<S: GameState + 'static>(mut game: S, seed: u64, args: &Args) -> Result<MatchResults> {
    let mut agent1 = build_agent::<S>(args.player1, 1, seed, args)?;
    let mut agent2 = build_agent::<S>(args.player2, 2, seed, args)?;

    let config = MatchConfig::default()
        .with_episodes(args.episodes)
        .with_render_last_game(args.render_last)
        .with_seed(seed);

    info!(
        game = ?args.game,
        seed,
        agent1 = agent1.name(),
        agent2 = agent2.name(),
        episodes = config.num_episodes,
        "Starting match"
    );

    let results = run_match(&mut game, &mut *agent1, &mut *agent2, &config)
        .context("match aborted")?;

    println!("\n{}", "=".repeat(60));
    println!("Final Results:");
    println!("  {} wins: {}", agent1.name(), results.agent1_wins);
    println!("  {} wins: {}", agent2.name(), results.agent2_wins);
    println!("  Draws: {}", results.draws);
    println!(
        "  {} win rate: {:.2}%",
        agent1.name(),
        results.agent1_win_rate() * 100.0
    );
    println!("  Average game length: {:.1} moves", results.average_plies());
    println!("{}\n", "=".repeat(60));

    Ok(results)
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(&args.log_level)?;

    // Logged with the match start so an unseeded run can be replayed
    let seed = args.seed.unwrap_or_else(|| GameRng::from_entropy().seed());

    match args.game {
        GameKind::TicTacToe => play(TicTacToe::new(), seed, &args)?,
        GameKind::ConnectFour => play(ConnectFour::new(), seed, &args)?,
    };

    Ok(())
}
