//! Idle animation demo runner.
//!
//! Headless driver for the idle animation systems using:
//! - **bevy_ecs** for the entity-component-system world and schedule
//! - **configparser** for the INI defaults
//! - **clap** for command-line overrides
//!
//! # Main Loop
//!
//! 1. Load `idle.ini` (defaults if missing), apply CLI overrides
//! 2. Spawn one character with a note, a motion snapshot and a sprite
//! 3. Run a fixed number of ticks: a scripted walk, then the idle systems
//! 4. Log every idle start and finish
//!
//! # Running
//!
//! ```sh
//! RUST_LOG=debug cargo run -- --ticks 1200 --seed 42
//! ```

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use clap::Parser;
use log::{error, info, warn};
use std::path::PathBuf;

use idleanim::components::charactermotion::{CharacterMotion, Direction};
use idleanim::components::characternote::CharacterNote;
use idleanim::components::charactersprite::CharacterSprite;
use idleanim::components::idleanimation::IdleState;
use idleanim::events::idle::{IdleFinishedEvent, IdleStartedEvent};
use idleanim::events::idlerequest::{RequestIdleEvent, request_idle_observer};
use idleanim::resources::idleconfig::IdleConfig;
use idleanim::resources::idlerng::IdleRng;
use idleanim::systems::idleanimation::{idle_animation_system, refresh_idle_profiles};

const SAMPLE_NOTES: &str = "\
A sleepy villager.
<IdleAnim: Villager_yawn, 0, 2, 70>
<IdleAnim: Villager_stretch, 0, 2, 30>
<IdleAnimMinTime: 2>
<IdleAnimMaxTime: 6>
";

/// Idle animation runner
#[derive(Parser)]
#[command(version, about = "Runs the idle animation systems on a scripted character.")]
struct Cli {
    /// INI file with the idle defaults.
    #[arg(long, value_name = "PATH", default_value = "./idle.ini")]
    config: PathBuf,

    /// File with the character's note tags. A built-in sample is used if absent.
    #[arg(long, value_name = "PATH")]
    notes: Option<PathBuf>,

    /// Override the default minimum idle time in seconds.
    #[arg(long)]
    min_time: Option<f32>,

    /// Override the default maximum idle time in seconds.
    #[arg(long)]
    max_time: Option<f32>,

    /// Override the idle probability (0-100).
    #[arg(long)]
    probability: Option<f32>,

    /// Seed for the idle random source.
    #[arg(long)]
    seed: Option<u64>,

    /// Number of ticks to simulate.
    #[arg(long, default_value_t = 900)]
    ticks: u32,

    /// Seconds the character walks before standing still.
    #[arg(long, default_value_t = 1.0)]
    walk_seconds: f32,

    /// Facing of the character when standing, as a keypad code (2, 4, 6 or 8).
    #[arg(long, value_name = "CODE", default_value_t = 2)]
    facing: u8,

    /// Request an idle on this tick, as a scripted event would.
    #[arg(long, value_name = "TICK")]
    request_at: Option<u32>,

    /// Write the effective configuration to the config path and exit.
    #[arg(long)]
    save_config: bool,
}

/// Scripted host movement: walk right for a while, then stand facing
/// `facing`.
#[derive(Resource)]
struct WalkScript {
    walk_ticks: u32,
    facing: Direction,
    tick: u32,
}

fn scripted_walk(mut script: ResMut<WalkScript>, mut query: Query<&mut CharacterMotion>) {
    let moving = script.tick < script.walk_ticks;
    for mut motion in query.iter_mut() {
        motion.moving = moving;
        motion.facing = if moving {
            Direction::Right
        } else {
            script.facing
        };
    }
    script.tick += 1;
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = IdleConfig::with_path(&cli.config);
    if let Err(e) = config.load_from_file() {
        warn!("{}; using defaults", e);
    }
    if let Some(min) = cli.min_time {
        config.min_idle_time = min;
    }
    if let Some(max) = cli.max_time {
        config.max_idle_time = max;
    }
    if let Some(probability) = cli.probability {
        config.set_idle_probability(probability);
    }

    if cli.save_config {
        if let Err(e) = config.save_to_file() {
            error!("{}", e);
            std::process::exit(1);
        }
        return;
    }

    let notes = match &cli.notes {
        Some(path) => match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) => {
                error!("Failed to read notes {}: {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => SAMPLE_NOTES.to_string(),
    };

    let Some(facing) = Direction::from_code(cli.facing) else {
        error!("Invalid facing code {}; expected 2, 4, 6 or 8", cli.facing);
        std::process::exit(1);
    };

    // --------------- ECS world + resources ---------------
    let walk_ticks = (cli.walk_seconds.max(0.0) * config.tick_rate as f32) as u32;
    let tick_rate = config.tick_rate;

    let mut world = World::new();
    world.insert_resource(match cli.seed {
        Some(seed) => IdleRng::with_seed(seed),
        None => IdleRng::default(),
    });
    world.insert_resource(WalkScript {
        walk_ticks,
        facing,
        tick: 0,
    });
    world.insert_resource(config);

    world.add_observer(request_idle_observer);
    world.add_observer(|trigger: On<IdleStartedEvent>| {
        let event = trigger.event();
        info!("{:?} started idle '{}'", event.entity, event.animation);
    });
    world.add_observer(|trigger: On<IdleFinishedEvent>| {
        info!("{:?} finished idling", trigger.event().entity);
    });
    world.flush();

    let character = world
        .spawn((
            CharacterNote::new(notes),
            CharacterMotion::standing(facing),
            CharacterSprite::new("Villager", 1, facing),
        ))
        .id();

    let mut update = Schedule::default();
    update.add_systems(scripted_walk);
    update.add_systems(refresh_idle_profiles);
    update.add_systems(
        idle_animation_system
            .after(refresh_idle_profiles)
            .after(scripted_walk),
    );

    // --------------- Main loop ---------------
    for tick in 0..cli.ticks {
        if cli.request_at == Some(tick) {
            world.trigger(RequestIdleEvent { entity: character });
        }
        update.run(&mut world);
    }

    let sprite = world.get::<CharacterSprite>(character);
    let state = world.get::<IdleState>(character);
    if let (Some(sprite), Some(state)) = (sprite, state) {
        info!(
            "After {} ticks: sheet='{}' pattern={} facing={} idling={} timer={:.2}s",
            cli.ticks,
            sprite.sheet_name,
            sprite.pattern,
            sprite.facing.code(),
            state.is_idling(),
            state.idle_timer(tick_rate)
        );
    }
}
