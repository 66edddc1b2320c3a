use std::error::Error;
use std::io::{self, BufRead, Write};

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use kingside::engines::search_bot::Difficulty;
use kingside::game_state::chess_types::{Color, GameState};
use kingside::session::game_session::{GameConfig, GameMode, GameSession};
use kingside::utils::algebraic::parse_candidate_move;
use kingside::utils::render_game_state::render_game_state;

/// Play chess in the terminal against the bot or another human.
#[derive(Debug, Parser)]
#[command(name = "kingside", version)]
struct Args {
    /// human-vs-bot or human-vs-human
    #[arg(long, default_value_t = GameMode::HumanVsBot)]
    mode: GameMode,

    /// easy, medium or hard
    #[arg(long, default_value_t = Difficulty::Medium)]
    difficulty: Difficulty,

    /// Color the human plays against the bot
    #[arg(long, default_value_t = Color::White)]
    color: Color,

    /// Start from this position instead of the initial one
    #[arg(long)]
    fen: Option<String>,
}

const HELP: &str = "moves: e2e4 | e2 e4 | e2-e4    commands: undo, hint, board, fen, new, help, quit";

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let config = GameConfig {
        mode: args.mode,
        difficulty: args.difficulty,
        player_color: args.color,
    };
    let state = match args.fen.as_deref() {
        Some(fen) => GameState::from_fen(fen)?,
        None => GameState::new_game(),
    };
    info!(?config, "starting kingside");

    let mut session = GameSession::with_state(config, state);
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    println!("{HELP}");
    println!("{}", render_game_state(session.state()));

    loop {
        if session.is_bot_turn() && !session.state().is_game_over() {
            let mv = session.play_bot_turn()?;
            println!("bot plays {} ({}{})", mv.notation, mv.from, mv.to);
            println!("{}", render_game_state(session.state()));
            continue;
        }
        if session.state().is_game_over() {
            println!("game over: {}", session.state().status);
        }

        print!("> ");
        io::stdout().flush()?;
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        let input = line.trim();

        match input {
            "" => {}
            "quit" | "exit" => break,
            "help" => println!("{HELP}"),
            "board" => println!("{}", render_game_state(session.state())),
            "fen" => println!("{}", session.state().get_fen()),
            "new" => {
                session.restart();
                println!("{}", render_game_state(session.state()));
            }
            "undo" => match session.undo() {
                Ok(()) => println!("{}", render_game_state(session.state())),
                Err(err) => println!("{err}"),
            },
            "hint" => {
                let hints = session.suggestions();
                if hints.is_empty() {
                    println!("no moves available");
                }
                for hint in hints {
                    println!("  {}{}  {}", hint.from, hint.to, hint.notation);
                }
            }
            text => match parse_candidate_move(text) {
                Ok(candidate) => match session.commit_move(candidate.from, candidate.to) {
                    Ok(mv) => {
                        println!("you play {}", mv.notation);
                        println!("{}", render_game_state(session.state()));
                    }
                    Err(err) => println!("{err}"),
                },
                Err(err) => println!("{err}; type 'help' for commands"),
            },
        }
    }

    Ok(())
}
