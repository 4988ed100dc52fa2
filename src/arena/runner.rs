//! Match driver.

use tracing::info;

use crate::agents::Agent;
use crate::core::{AgentError, GameRng, GameState, Player, StepOutcome};

use super::config::MatchConfig;
use super::results::{GameOutcome, MatchResults};

/// Play `config.num_episodes` games of `game` between two agents.
///
/// `agent1` plays `Player::One` and `agent2` plays `Player::Two`. Before
/// each game both agents are reset and the game is reset with a `GameRng`
/// seeded from `config.seed`; who moves first is up to the game.
pub fn run_match<'a, S: GameState>(
    game: &mut S,
    agent1: &mut (dyn Agent<S> + 'a),
    agent2: &mut (dyn Agent<S> + 'a),
    config: &MatchConfig,
) -> Result<MatchResults, AgentError> {
    config.validate()?;

    let mut rng = GameRng::new(config.seed);
    let mut results = MatchResults::default();

    for episode in 1..=config.num_episodes {
        agent1.reset();
        agent2.reset();

        let render = config.render_last_game && episode == config.num_episodes;
        if render {
            game.set_visual(true);
            println!("\n{}", "=".repeat(50));
            println!("Game {}/{} (with visualization)", episode, config.num_episodes);
            println!("{}\n", "=".repeat(50));
        }

        game.reset(&mut rng);
        let (outcome, plies) = play_game(game, agent1, agent2)?;
        results.record(outcome, plies);

        let result = match outcome {
            GameOutcome::Winner(Player::One) => format!("{} wins", agent1.name()),
            GameOutcome::Winner(Player::Two) => format!("{} wins", agent2.name()),
            GameOutcome::Draw => "draw".to_string(),
        };
        info!(episode, plies, "Game {}: {} after {} moves", episode, result, plies);

        if render {
            game.set_visual(false);
        }
    }

    info!(
        agent1 = agent1.name(),
        agent2 = agent2.name(),
        agent1_wins = results.agent1_wins,
        agent2_wins = results.agent2_wins,
        draws = results.draws,
        "Match finished"
    );
    Ok(results)
}

/// Play one game from the current position to the end.
fn play_game<'a, S: GameState>(
    game: &mut S,
    agent1: &mut (dyn Agent<S> + 'a),
    agent2: &mut (dyn Agent<S> + 'a),
) -> Result<(GameOutcome, u32), AgentError> {
    game.display();
    let mut plies = 0;

    loop {
        let mover = game.current_player();
        let agent = match mover {
            Player::One => &mut *agent1,
            Player::Two => &mut *agent2,
        };

        if game.is_visual() {
            println!("{} ({}) is thinking...", agent.name(), mover.symbol());
        }
        let action = agent.select_action(game)?;
        if game.is_visual() {
            println!("{} plays action: {}\n", agent.name(), action);
        }

        let outcome = game.step(action)?;
        game.display();
        plies += 1;

        if let StepOutcome::Finished { reward } = outcome {
            return Ok((GameOutcome::from_reward(mover, reward), plies));
        }
    }
}
