//! Car Soccer entry point
//!
//! Headless match runner: command line choices drive the setup menu, then the
//! fixed-step simulation runs with the player car on a simple chase
//! autopilot. Goals are logged as they happen; the final score (and
//! optionally a JSON frame snapshot) goes to stdout.

use std::time::{Duration, Instant};

use car_soccer::consts::SIM_DT;
use car_soccer::settings::{ColorScheme, Difficulty, SessionConfig};
use car_soccer::sim::{MatchState, TickInput, tick};
use car_soccer::{Menu, MenuInput};

/// Command line options for a headless run
#[derive(Debug, Clone)]
struct RunConfig {
    difficulty: Difficulty,
    scheme: ColorScheme,
    /// RNG seed for reproducibility (None = drawn at startup)
    seed: Option<u64>,
    /// Number of ticks to simulate
    ticks: u64,
    /// Pace the loop at the simulation rate instead of flat out
    realtime: bool,
    /// Print the final frame as JSON
    snapshot: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::default(),
            scheme: ColorScheme::default(),
            seed: None,
            // one simulated minute
            ticks: 3600,
            realtime: false,
            snapshot: false,
        }
    }
}

impl RunConfig {
    /// Parse configuration from command line arguments
    fn from_args() -> Result<Self, String> {
        let args: Vec<String> = std::env::args().collect();
        let mut config = Self::default();

        let mut i = 1;
        while i < args.len() {
            match args[i].as_str() {
                "--difficulty" => {
                    i += 1;
                    let value = args
                        .get(i)
                        .ok_or_else(|| "--difficulty needs a value".to_string())?;
                    config.difficulty = Difficulty::from_str(value)
                        .ok_or_else(|| format!("unknown difficulty '{value}'"))?;
                }
                "--scheme" => {
                    i += 1;
                    let value = args
                        .get(i)
                        .ok_or_else(|| "--scheme needs a value".to_string())?;
                    config.scheme = ColorScheme::from_str(value)
                        .ok_or_else(|| format!("unknown color scheme '{value}'"))?;
                }
                "--seed" => {
                    i += 1;
                    let value = args
                        .get(i)
                        .ok_or_else(|| "--seed needs a value".to_string())?;
                    config.seed = Some(
                        value
                            .parse()
                            .map_err(|_| format!("bad seed '{value}'"))?,
                    );
                }
                "--ticks" => {
                    i += 1;
                    let value = args
                        .get(i)
                        .ok_or_else(|| "--ticks needs a value".to_string())?;
                    config.ticks = value
                        .parse()
                        .map_err(|_| format!("bad tick count '{value}'"))?;
                }
                "--realtime" => {
                    config.realtime = true;
                }
                "--snapshot" => {
                    config.snapshot = true;
                }
                "--help" | "-h" => {
                    print_help();
                    std::process::exit(0);
                }
                other => {
                    return Err(format!("unknown option '{other}'"));
                }
            }
            i += 1;
        }

        Ok(config)
    }
}

fn print_help() {
    println!(
        r#"Car Soccer - headless match runner

USAGE:
    car-soccer [OPTIONS]

OPTIONS:
    --difficulty <NAME>  Opponent difficulty: easy, medium, hard (default: medium)
    --scheme <NAME>      Color scheme: default, ocean, night (default: default)
    --seed <N>           RNG seed for reproducibility (default: random)
    --ticks <N>          Number of 60 Hz ticks to simulate (default: 3600)
    --realtime           Pace the loop at 60 Hz instead of flat out
    --snapshot           Print the final frame as JSON
    --help, -h           Show this help

EXAMPLES:
    # One simulated minute on hard, reproducible
    car-soccer --difficulty hard --seed 42

    # Ten seconds, night colors, final frame as JSON
    car-soccer --ticks 600 --scheme night --snapshot
"#
    );
}

/// Walk the setup menu to the requested entries, the same path an
/// interactive frontend would take
fn select_session(run: &RunConfig) -> SessionConfig {
    let mut menu = Menu::new();
    while ColorScheme::ALL[menu.highlighted()] != run.scheme {
        menu.handle(MenuInput::Down);
    }
    menu.handle(MenuInput::Confirm);
    while Difficulty::ALL[menu.highlighted()] != run.difficulty {
        menu.handle(MenuInput::Down);
    }
    menu.handle(MenuInput::Confirm)
        .unwrap_or_else(|| menu.config())
}

/// Chase autopilot standing in for a human driver
fn autopilot(state: &MatchState) -> TickInput {
    let car = state.player.body.pos;
    let ball = state.ball.body.pos;
    TickInput {
        up: car.y > ball.y,
        down: car.y < ball.y,
        left: car.x > ball.x,
        right: car.x < ball.x,
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let run = match RunConfig::from_args() {
        Ok(run) => run,
        Err(err) => {
            eprintln!("error: {err}");
            eprintln!();
            print_help();
            std::process::exit(2);
        }
    };

    let seed = run.seed.unwrap_or_else(rand::random);
    let session = select_session(&run);
    log::info!(
        "starting match: seed {}, difficulty {}, scheme {}",
        seed,
        session.difficulty.as_str(),
        session.colors.as_str()
    );

    let mut state = MatchState::new(session, seed);
    let tick_budget = Duration::from_secs_f32(SIM_DT);

    for _ in 0..run.ticks {
        let started = Instant::now();
        let input = autopilot(&state);
        tick(&mut state, &input);

        if run.realtime {
            let elapsed = started.elapsed();
            if elapsed < tick_budget {
                std::thread::sleep(tick_budget - elapsed);
            }
        }
    }

    println!(
        "final score after {} ticks: player {} - opponent {}",
        state.time_ticks, state.player_score, state.opponent_score
    );

    if run.snapshot {
        match serde_json::to_string_pretty(&state.snapshot()) {
            Ok(json) => println!("{json}"),
            Err(err) => log::error!("failed to serialize snapshot: {err}"),
        }
    }
}
