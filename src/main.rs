//! Ball Pop headless driver
//!
//! Runs a session without a window: ticks the simulation at its configured
//! rate and stands in for the player by clicking random arena points.
//!
//! Usage: `ball-pop [config.json] [ticks] [seed]`

use std::time::Duration;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use ball_pop::{SimConfig, SimError, Simulation};

/// Ticks to run when none are given
const DEFAULT_TICKS: u64 = 120;
/// A simulated click every this many ticks
const CLICK_EVERY: u64 = 4;
const DEFAULT_SEED: u64 = 0x5eed;

struct Args {
    config_path: Option<String>,
    ticks: u64,
    seed: u64,
    /// Sleep between ticks to match the tick rate
    realtime: bool,
}

fn parse_args() -> Args {
    let mut args = Args {
        config_path: None,
        ticks: DEFAULT_TICKS,
        seed: DEFAULT_SEED,
        realtime: false,
    };

    let mut positional = 0;
    for arg in std::env::args().skip(1) {
        if arg == "--realtime" {
            args.realtime = true;
            continue;
        }
        match positional {
            0 => args.config_path = Some(arg),
            1 => match arg.parse() {
                Ok(ticks) => args.ticks = ticks,
                Err(_) => log::warn!("Ignoring invalid tick count '{}'", arg),
            },
            2 => match arg.parse() {
                Ok(seed) => args.seed = seed,
                Err(_) => log::warn!("Ignoring invalid seed '{}'", arg),
            },
            _ => log::warn!("Ignoring extra argument '{}'", arg),
        }
        positional += 1;
    }

    args
}

fn load_config(path: Option<&str>) -> Result<SimConfig, SimError> {
    let Some(path) = path else {
        log::info!("Using default configuration");
        return Ok(SimConfig::default());
    };

    let json = match std::fs::read_to_string(path) {
        Ok(json) => json,
        Err(e) => {
            log::warn!("Could not read {}: {}, using defaults", path, e);
            return Ok(SimConfig::default());
        }
    };
    let config = SimConfig::from_json(&json)?;
    log::info!("Loaded configuration from {}", path);
    Ok(config)
}

/// Wall-clock length of one tick, if representable
fn frame_duration(tick_rate: f32) -> Option<Duration> {
    match Duration::try_from_secs_f32(1.0 / tick_rate) {
        Ok(frame) => Some(frame),
        Err(e) => {
            log::warn!("Tick rate {} has no usable frame time ({}), not pacing", tick_rate, e);
            None
        }
    }
}

fn run(args: &Args) -> Result<u64, SimError> {
    let config = load_config(args.config_path.as_deref())?;
    let (width, height) = (config.width, config.height);
    let frame = if args.realtime {
        frame_duration(config.tick_rate)
    } else {
        None
    };

    let mut sim = Simulation::new(config, args.seed)?;
    // Separate stream so clicks don't perturb the session's own draws
    let mut player = Pcg32::seed_from_u64(args.seed.wrapping_add(1));

    let mut collisions = 0;
    for t in 1..=args.ticks {
        collisions += sim.tick().collisions;

        if t % CLICK_EVERY == 0 {
            let x = player.random_range(0.0..width);
            let y = player.random_range(0.0..height);
            if let Some(id) = sim.pointer_down(x, y)? {
                log::info!("Tick {}: popped {:?}, score {}", t, id, sim.current_score());
            }
        }

        if let Some(frame) = frame {
            std::thread::sleep(frame);
        }
    }

    log::info!(
        "Finished {} ticks, {} collisions, {} bodies live",
        sim.tick_count(),
        collisions,
        sim.list_bodies().len()
    );
    Ok(sim.current_score())
}

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    env_logger::init();
    log::info!("Ball Pop (headless) starting...");

    let args = parse_args();
    match run(&args) {
        Ok(score) => println!("{}", score),
        Err(e) => {
            log::error!("{}", e);
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    }
}
