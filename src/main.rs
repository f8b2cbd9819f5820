//! Terminal driver: plays a game between humans and/or engines.
//!
//! Run with:
//! `cargo run --release -- --white human --black engine --depth 3`
//! `RUST_LOG=debug cargo run -- --white greedy --black random --max-plies 40`
//!
//! Human commands: a coordinate move such as `e2e4`, `undo`, `moves`, `fen`,
//! `quit`.

use std::io::{self, BufRead, Write};

use log::{debug, info};

use ray_chess::engines::engine_greedy::GreedyEngine;
use ray_chess::engines::engine_negamax::NegamaxEngine;
use ray_chess::engines::engine_random::RandomEngine;
use ray_chess::engines::engine_trait::{Engine, GoParams};
use ray_chess::game_state::chess_rules::STARTING_POSITION_FEN;
use ray_chess::game_state::chess_types::Color;
use ray_chess::game_state::game_state::GameState;
use ray_chess::moves::chess_move::Move;
use ray_chess::moves::move_notation::{disambiguation_for, move_to_notation};
use ray_chess::search::negamax::DEFAULT_SEARCH_DEPTH;
use ray_chess::utils::algebraic::square_to_algebraic;
use ray_chess::utils::pgn::{game_result, moves_notation_text, write_pgn};
use ray_chess::utils::render_game_state::render_game_state;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PlayerKind {
    Human,
    Negamax,
    Greedy,
    Random,
}

impl PlayerKind {
    fn parse(text: &str) -> Result<Self, String> {
        match text {
            "human" => Ok(PlayerKind::Human),
            "engine" | "negamax" => Ok(PlayerKind::Negamax),
            "greedy" => Ok(PlayerKind::Greedy),
            "random" => Ok(PlayerKind::Random),
            _ => Err(format!("unknown player kind: {text}")),
        }
    }

    fn label(self) -> &'static str {
        match self {
            PlayerKind::Human => "Human",
            PlayerKind::Negamax => "Negamax",
            PlayerKind::Greedy => "Greedy",
            PlayerKind::Random => "Random",
        }
    }
}

#[derive(Debug, Clone)]
struct DriverOptions {
    white: PlayerKind,
    black: PlayerKind,
    depth: u8,
    fen: String,
    max_plies: Option<usize>,
}

impl Default for DriverOptions {
    fn default() -> Self {
        Self {
            white: PlayerKind::Human,
            black: PlayerKind::Negamax,
            depth: DEFAULT_SEARCH_DEPTH,
            fen: STARTING_POSITION_FEN.to_owned(),
            max_plies: None,
        }
    }
}

impl DriverOptions {
    fn from_args(mut args: impl Iterator<Item = String>) -> Result<Self, String> {
        let mut options = DriverOptions::default();

        while let Some(flag) = args.next() {
            let mut value = || args.next().ok_or(format!("missing value for {flag}"));
            match flag.as_str() {
                "--white" => options.white = PlayerKind::parse(&value()?)?,
                "--black" => options.black = PlayerKind::parse(&value()?)?,
                "--depth" => {
                    options.depth = value()?
                        .parse()
                        .map_err(|_| "--depth expects a small positive number".to_owned())?
                }
                "--fen" => options.fen = value()?,
                "--max-plies" => {
                    options.max_plies = Some(
                        value()?
                            .parse()
                            .map_err(|_| "--max-plies expects a number".to_owned())?,
                    )
                }
                _ => return Err(format!("unknown argument: {flag}")),
            }
        }

        Ok(options)
    }
}

enum Player {
    Human,
    Engine(Box<dyn Engine>),
}

fn make_player(kind: PlayerKind, depth: u8) -> Player {
    match kind {
        PlayerKind::Human => Player::Human,
        PlayerKind::Negamax => Player::Engine(Box::new(NegamaxEngine::with_depth(depth))),
        PlayerKind::Greedy => Player::Engine(Box::new(GreedyEngine::new())),
        PlayerKind::Random => Player::Engine(Box::new(RandomEngine::new())),
    }
}

enum TurnOutcome {
    Moved,
    Undone,
    Quit,
}

fn main() -> Result<(), String> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let options = DriverOptions::from_args(std::env::args().skip(1))?;
    let mut game = GameState::from_fen(&options.fen)?;
    let mut players = [
        make_player(options.white, options.depth),
        make_player(options.black, options.depth),
    ];

    let stdin = io::stdin();
    let mut input = stdin.lock();

    loop {
        let legal = game.get_legal_moves();
        println!("\n{}", render_game_state(&game));

        if game.is_game_over() {
            break;
        }
        if options
            .max_plies
            .is_some_and(|max_plies| game.move_log.len() >= max_plies)
        {
            info!("stopping after {} plies", game.move_log.len());
            break;
        }

        let side = game.side_to_move;
        let outcome = match &mut players[side.index()] {
            Player::Human => human_turn(&mut game, &mut input)?,
            Player::Engine(engine) => engine_turn(&mut game, engine.as_mut(), &legal)?,
        };

        match outcome {
            TurnOutcome::Moved => log_position(&game),
            TurnOutcome::Undone => debug!("took back one half-move"),
            TurnOutcome::Quit => break,
        }
    }

    println!("{}", moves_notation_text(&game.notation_log));
    println!("result: {}", game_result(&game));
    println!(
        "\n{}",
        write_pgn(&game, &options.fen, options.white.label(), options.black.label())
    );

    Ok(())
}

fn human_turn(game: &mut GameState, input: &mut impl BufRead) -> Result<TurnOutcome, String> {
    loop {
        let side = match game.side_to_move {
            Color::Light => "white",
            Color::Dark => "black",
        };
        print!("{side}> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        let mut line = String::new();
        let read = input.read_line(&mut line).map_err(|e| e.to_string())?;
        if read == 0 {
            return Ok(TurnOutcome::Quit);
        }

        match line.trim() {
            "" => continue,
            "quit" => return Ok(TurnOutcome::Quit),
            "undo" => {
                if game.undo_move().is_none() {
                    println!("nothing to undo");
                    continue;
                }
                return Ok(TurnOutcome::Undone);
            }
            "fen" => println!("{}", game.get_fen()),
            "moves" => {
                let legal = game.get_legal_moves();
                let listed: Vec<String> = legal
                    .iter()
                    .map(|mv| {
                        format!(
                            "{} ({})",
                            mv.to_long_algebraic(),
                            move_to_notation(mv, disambiguation_for(mv, &legal))
                        )
                    })
                    .collect();
                println!("{}", listed.join(", "));
            }
            text => match game.try_move_text(text) {
                Ok(_) => return Ok(TurnOutcome::Moved),
                Err(err) => println!("{err}"),
            },
        }
    }
}

fn engine_turn(
    game: &mut GameState,
    engine: &mut dyn Engine,
    legal: &[Move],
) -> Result<TurnOutcome, String> {
    let output = engine.choose_move(game, &GoParams::default())?;
    for line in &output.info_lines {
        debug!("{line}");
    }

    let mv = output.require_move().map_err(|e| e.to_string())?;
    game.apply_move_in_context(&mv, legal);
    info!(
        "{} plays {} ({})",
        engine.name(),
        game.notation_log.last().map(String::as_str).unwrap_or("?"),
        output.score
    );
    Ok(TurnOutcome::Moved)
}

fn log_position(game: &GameState) {
    debug!(
        "{} | castling {:?} | kings {} {} | {}",
        game.notation_log.last().map(String::as_str).unwrap_or(""),
        game.castling_rights,
        square_to_algebraic(game.king_square(Color::Light)),
        square_to_algebraic(game.king_square(Color::Dark)),
        game.get_fen()
    );
}
