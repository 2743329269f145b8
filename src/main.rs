//! Game Cave native runner
//!
//! Lists the gallery, runs headless autopilot demos of the arena games and
//! plays the number guesser over stdin. Rendering belongs to the browser host.

use std::env;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use game_cave::board::{ConnectFour, TicTacToe};
use game_cave::catalog::{self, GameId};
use game_cave::consts::*;
use game_cave::settings::Difficulty;
use game_cave::sim::{
    ArenaGame, BrickBreaker, Direction, FrameLoop, GameEvent, Pong, Snake, TickInput,
};
use game_cave::words::NumberGuesser;
use game_cave::{GameError, Settings};

/// Host frame length used by the demos (60 fps)
const FRAME_MS: u32 = 16;
const DEFAULT_DEMO_FRAMES: u64 = 20_000;

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let mut args = env::args().skip(1);
    let command = args.next();
    let rest: Vec<String> = args.collect();
    match command.as_deref() {
        None | Some("list") => {
            list_games();
            Ok(())
        }
        Some("demo") => {
            let (game, flags) = rest
                .split_first()
                .ok_or_else(|| "demo needs a game: pong, breakout or snake".to_string())?;
            let options = Options::parse(flags)?;
            run_demo(game, &options)
        }
        Some("guess") => {
            let options = Options::parse(&rest)?;
            play_number_guesser(options.seed)
        }
        Some("-h") | Some("--help") => {
            print_help();
            Ok(())
        }
        Some(other) => Err(format!("Unknown command '{other}'. Run with --help.")),
    }
}

/// Flags shared by the subcommands
#[derive(Debug)]
struct Options {
    seed: u64,
    frames: u64,
    config: Option<PathBuf>,
    difficulty: Option<Difficulty>,
    json: bool,
}

impl Options {
    fn parse(args: &[String]) -> Result<Self, String> {
        let mut options = Options {
            seed: clock_seed(),
            frames: DEFAULT_DEMO_FRAMES,
            config: None,
            difficulty: None,
            json: false,
        };
        for arg in args {
            if let Some(value) = arg.strip_prefix("--seed=") {
                options.seed = value
                    .parse()
                    .map_err(|_| format!("Invalid seed '{value}'"))?;
            } else if let Some(value) = arg.strip_prefix("--frames=") {
                options.frames = value
                    .parse()
                    .map_err(|_| format!("Invalid frame count '{value}'"))?;
            } else if let Some(value) = arg.strip_prefix("--config=") {
                options.config = Some(PathBuf::from(value));
            } else if let Some(value) = arg.strip_prefix("--difficulty=") {
                let preset = Difficulty::from_str(value)
                    .ok_or_else(|| format!("Unknown difficulty '{value}'"))?;
                options.difficulty = Some(preset);
            } else if arg == "--json" {
                options.json = true;
            } else {
                return Err(format!("Unknown option '{arg}'. Run with --help."));
            }
        }
        Ok(options)
    }

    fn settings(&self) -> Settings {
        let mut settings = Settings::load_or_default(self.config.as_deref());
        if let Some(preset) = self.difficulty {
            settings.apply_preset(preset);
        }
        settings
    }
}

fn clock_seed() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

fn list_games() {
    println!("Game Cave");
    println!();
    for game in catalog::registry() {
        let tag = if game.id.is_arena() { " (demo)" } else { "" };
        println!("  {:<20} {}{}", game.id.as_str(), game.description, tag);
    }
}

fn print_help() {
    println!("game-cave");
    println!("\nUsage:");
    println!("  game-cave list");
    println!("  game-cave demo <pong|breakout|snake|tic-tac-toe|connect-four> [--seed=N] [--frames=N]");
    println!("                 [--config=PATH] [--difficulty=easy|normal|hard] [--json]");
    println!("  game-cave guess [--seed=N]");
    println!("\nNotes:");
    println!("  RUST_LOG=info shows game events.");
}

fn run_demo(name: &str, options: &Options) -> Result<(), String> {
    let settings = options.settings();
    let id = match name {
        "breakout" => GameId::BrickBreaker,
        other => GameId::from_str(other).ok_or_else(|| format!("Unknown game '{other}'"))?,
    };
    log::info!("Demo {} with seed {}", id.as_str(), options.seed);
    match id {
        GameId::Pong => {
            let game = Pong::with_tuning(options.seed, settings.pong.clone());
            let game = drive(game, options.frames, |pong| {
                let target = pong.ball.center().y - PONG_PADDLE_HEIGHT / 2.0;
                TickInput::paddle(target)
            });
            println!(
                "Pong: {} - {} ({:?}) after {} frames",
                game.player_score, game.ai_score, game.phase, game.frame
            );
            print_snapshot(options, &game);
        }
        GameId::BrickBreaker => {
            let game = BrickBreaker::with_tuning(options.seed, settings.breakout.clone());
            let game = drive(game, options.frames, |breakout| {
                let target = breakout.ball.center().x - BREAKOUT_PADDLE_WIDTH / 2.0;
                TickInput::paddle(target)
            });
            println!(
                "Brick Breaker: score {}, {} lives, {} bricks left ({:?})",
                game.score,
                game.lives,
                game.live_bricks(),
                game.phase
            );
            print_snapshot(options, &game);
        }
        GameId::Snake => {
            let mut snake = Snake::with_tuning(options.seed, settings.snake.clone());
            for _ in 0..options.frames {
                if let Some(direction) = snake_autopilot(&snake) {
                    snake.press(direction);
                }
                snake.advance(FRAME_MS);
                if snake.phase.is_over() {
                    break;
                }
            }
            println!(
                "Snake: score {}, length {}, interval {} ms ({:?})",
                snake.score,
                snake.body.len(),
                snake.interval_ms,
                snake.phase
            );
            print_snapshot(options, &snake);
        }
        GameId::TicTacToe => {
            let mut game = TicTacToe::new();
            for index in [4, 0, 8, 2, 1, 7, 6, 3, 5] {
                game.play(index).map_err(|e| e.to_string())?;
            }
            println!("Tic-Tac-Toe: {}", game.status());
        }
        GameId::ConnectFour => {
            let mut game = ConnectFour::new();
            for col in [3, 3, 4, 4, 5, 5, 6] {
                game.drop_disc(col).map_err(|e| e.to_string())?;
            }
            match game.winner() {
                Some(disc) => println!(
                    "Connect Four: player {} wins on {:?}",
                    disc.number(),
                    game.winning_cells()
                ),
                None => println!("Connect Four: no winner"),
            }
        }
        other => return Err(format!("No demo for '{}'", other.as_str())),
    }
    Ok(())
}

/// Run an arena game in a frame loop until it ends or `frames` run out
fn drive<G, F>(game: G, frames: u64, mut autopilot: F) -> G
where
    G: ArenaGame + Clone,
    F: FnMut(&G) -> TickInput,
{
    let mut frame_loop = FrameLoop::new(game);
    frame_loop.start();
    while frame_loop.frames() < frames {
        let input = autopilot(frame_loop.game());
        let Some(events) = frame_loop.on_frame(&input) else {
            break;
        };
        for event in events {
            match event {
                GameEvent::WallBounce | GameEvent::PaddleHit(_) => {}
                other => log::debug!("{:?}", other),
            }
        }
    }
    frame_loop.game().clone()
}

/// Greedy move toward the food that does not crash on the next step
fn snake_autopilot(snake: &Snake) -> Option<Direction> {
    let head = snake.head();
    let delta = snake.food - head;
    let mut preferred = Vec::with_capacity(4);
    if delta.x > 0 {
        preferred.push(Direction::Right);
    } else if delta.x < 0 {
        preferred.push(Direction::Left);
    }
    if delta.y > 0 {
        preferred.push(Direction::Down);
    } else if delta.y < 0 {
        preferred.push(Direction::Up);
    }
    preferred.extend([Direction::Up, Direction::Right, Direction::Down, Direction::Left]);

    let current = snake.heading.next();
    preferred.into_iter().find(|&direction| {
        let cell = head + direction.delta();
        direction != current.opposite()
            && cell.x >= 0
            && cell.y >= 0
            && cell.x < SNAKE_GRID
            && cell.y < SNAKE_GRID
            && !snake.body.contains(&cell)
    })
}

fn print_snapshot<G: ArenaGame + serde::Serialize>(options: &Options, game: &G) {
    if options.json {
        println!("{}", game.snapshot_json());
    }
}

fn play_number_guesser(seed: u64) -> Result<(), String> {
    let mut game = NumberGuesser::new(seed);
    println!("{}", game.message);
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("> ");
        io::stdout()
            .flush()
            .map_err(|err| format!("Failed to flush stdout: {err}"))?;
        let Some(line) = lines.next() else {
            return Ok(());
        };
        let line = line.map_err(|err| format!("Failed to read input: {err}"))?;
        if line.trim().eq_ignore_ascii_case("q") {
            return Ok(());
        }
        match game.guess(&line) {
            Ok(feedback) => println!("{feedback}"),
            Err(GameError::InvalidInput(msg)) => println!("{msg}"),
            Err(err) => return Err(err.to_string()),
        }
        if game.won {
            return Ok(());
        }
    }
}
