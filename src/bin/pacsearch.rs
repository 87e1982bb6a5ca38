//! pacsearch CLI - run the search algorithms and game-tree agents on ASCII
//! maze layouts
//!
//! Two subcommands:
//! - `solve`: find a path to the first food pellet with a chosen algorithm
//! - `play`: play a full game with a chosen agent against random ghosts

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand, ValueEnum};
use rand::SeedableRng;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use serde::Serialize;

use pacsearch::{
    Agent, AgentConfig, AlphaBetaAgent, EvaluationKind, ExpectimaxAgent, GameOutcome, GameState,
    Layout, MinimaxAgent, PACMAN, PacmanState, PositionSearchProblem, ReflexAgent, a_star_search,
    better_evaluation, breadth_first_search, depth_first_search, manhattan_heuristic,
    score_evaluation, uniform_cost_search,
};

const DEFAULT_LAYOUT: &str = "\
%%%%%%%%%%
%P...%...%
%.%%.%.%.%
%.%..o%..%
%.%%%.%%.%
%....G...%
%%%%%%%%%%";

#[derive(Parser)]
#[command(name = "pacsearch")]
#[command(version, about = "Search algorithms and game-tree agents for maze layouts", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a maze: path from the Pacman start to the first food pellet
    Solve(SolveArgs),

    /// Play a game with a decision agent against random ghosts
    Play(PlayArgs),
}

#[derive(Args)]
struct SolveArgs {
    /// Layout file to load (defaults to a built-in maze)
    #[arg(long)]
    layout: Option<PathBuf>,

    /// Search algorithm to run
    #[arg(long, value_enum, default_value_t = Algorithm::AStar)]
    algorithm: Algorithm,
}

#[derive(Args)]
struct PlayArgs {
    /// Layout file to load (defaults to a built-in maze)
    #[arg(long)]
    layout: Option<PathBuf>,

    /// Decision agent for Pacman
    #[arg(long, value_enum, default_value_t = AgentKind::AlphaBeta)]
    agent: AgentKind,

    /// Search depth in full agent rounds
    #[arg(long, default_value_t = 2)]
    depth: u32,

    /// Use the hand-tuned board evaluation instead of the raw score
    #[arg(long)]
    better_eval: bool,

    /// Seed for the ghost policy and stochastic tie-breaking
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Stop the game after this many rounds
    #[arg(long, default_value_t = 200)]
    max_turns: u32,

    /// Render the board after every round
    #[arg(long)]
    show: bool,

    /// Print the final summary as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Algorithm {
    Dfs,
    Bfs,
    Ucs,
    AStar,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum AgentKind {
    Reflex,
    Minimax,
    AlphaBeta,
    Expectimax,
}

#[derive(Debug, Serialize)]
struct GameSummary {
    turns: u32,
    score: f64,
    outcome: &'static str,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Solve(args) => solve(args),
        Commands::Play(args) => play(args),
    }
}

fn load_layout(path: &Option<PathBuf>) -> Result<Arc<Layout>> {
    let text = match path {
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("read layout {}", path.display()))?
        }
        None => DEFAULT_LAYOUT.to_string(),
    };
    Ok(Arc::new(Layout::parse(&text)?))
}

fn solve(args: SolveArgs) -> Result<()> {
    let layout = load_layout(&args.layout)?;
    let Some(&goal) = layout.food.first() else {
        bail!("layout has no food to search for");
    };
    let start = layout.pacman_start;
    let problem = PositionSearchProblem::new(layout, start, goal)?;

    let path = match args.algorithm {
        Algorithm::Dfs => depth_first_search(&problem),
        Algorithm::Bfs => breadth_first_search(&problem),
        Algorithm::Ucs => uniform_cost_search(&problem),
        Algorithm::AStar => a_star_search(&problem, manhattan_heuristic),
    };

    match path {
        Some(path) => {
            let actions: Vec<String> = path.iter().map(|action| action.to_string()).collect();
            println!("{} actions from {start} to {goal}", path.len());
            println!("{}", actions.join(" "));
        }
        None => println!("no path from {start} to {goal}"),
    }
    Ok(())
}

fn build_agent(
    kind: AgentKind,
    config: &AgentConfig,
) -> Result<Box<dyn Agent<PacmanState>>, pacsearch::Error> {
    let evaluation: fn(&PacmanState) -> f64 = match config.evaluation {
        EvaluationKind::Score => score_evaluation::<PacmanState>,
        EvaluationKind::Better => better_evaluation::<PacmanState>,
    };
    let seed = config.seed.unwrap_or(0);

    Ok(match kind {
        AgentKind::Reflex => Box::new(ReflexAgent::new(seed)),
        AgentKind::Minimax => Box::new(MinimaxAgent::new(config.depth, evaluation)?),
        AgentKind::AlphaBeta => Box::new(AlphaBetaAgent::new(config.depth, evaluation)?),
        AgentKind::Expectimax => Box::new(ExpectimaxAgent::new(config.depth, evaluation)?),
    })
}

fn play(args: PlayArgs) -> Result<()> {
    let layout = load_layout(&args.layout)?;
    let evaluation = if args.better_eval {
        EvaluationKind::Better
    } else {
        EvaluationKind::Score
    };
    let config = AgentConfig::new(args.depth)
        .with_evaluation(evaluation)
        .with_seed(args.seed);
    let mut agent = build_agent(args.agent, &config)?;

    let mut state = PacmanState::new(layout);
    let mut rng = StdRng::seed_from_u64(args.seed);
    let mut turns = 0;

    while state.outcome().is_none() && turns < args.max_turns {
        let action = agent.action(&state)?;
        state = state.generate_successor(PACMAN, &action);

        for ghost in 1..state.num_agents() {
            if state.outcome().is_some() {
                break;
            }
            let actions = state.legal_actions(ghost);
            let Some(action) = actions.choose(&mut rng) else {
                continue;
            };
            state = state.generate_successor(ghost, action);
        }

        turns += 1;
        if args.show {
            println!("round {turns}, score {}", state.score());
            println!("{state}");
        }
    }

    let summary = GameSummary {
        turns,
        score: state.score(),
        outcome: match state.outcome() {
            Some(GameOutcome::Win) => "win",
            Some(GameOutcome::Lose) => "lose",
            None => "unfinished",
        },
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!(
            "{} after {} rounds with score {}",
            summary.outcome, summary.turns, summary.score
        );
    }
    Ok(())
}
