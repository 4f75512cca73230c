//! Headless simulation runner.
//!
//! Generates a world from the configured seed, spawns the starting horde,
//! and steps the core at a fixed rate. Hosts embedding the core (renderer,
//! UI) drive [`game::update::tick`] themselves instead.

use sim_core::{AiComponent, AiState};

use game::config::SimConfig;
use game::state::SimState;
use game::update;
use game::zombie::Zombie;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Starting openhorde simulation core");

    if let Err(e) = run() {
        log::error!("{:#}", e);
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let config = SimConfig::load();
    let delta = (1.0 / config.tick_rate_hz) as f32;
    let total_ticks = (config.run_seconds * config.tick_rate_hz).ceil() as u64;

    let mut state = SimState::new(config)?;

    for _ in 0..total_ticks {
        update::tick(&mut state, delta);

        for event in state.events.drain() {
            log::debug!("{:?}", event);
        }

        if state.player_died {
            log::info!("simulation ended early: player died");
            break;
        }
    }

    let (alive, dead) = {
        let mut alive = 0;
        let mut dead = 0;
        for (_, ai) in state.world.query::<&AiComponent>().with::<&Zombie>().iter() {
            if ai.state == AiState::Dead {
                dead += 1;
            } else {
                alive += 1;
            }
        }
        (alive, dead)
    };

    log::info!(
        "simulated {:.1}s over {} ticks: {} zombies alive ({} dead), player hp {:.1}, hunger {:.1}, thirst {:.1}, {}",
        state.clock.elapsed_seconds(),
        state.clock.frame_count(),
        alive,
        dead,
        state.player.health.current,
        state.player.survival.hunger,
        state.player.survival.thirst,
        if state.day_night.is_night() { "night" } else { "day" }
    );

    Ok(())
}
