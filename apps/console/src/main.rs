mod config;
mod game_events;
mod game_loop;
mod main_lib;
mod render;
mod scheduler;

use config::Config;
use main_lib::{build_state, init_tracing};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();
    let config = Config::from_env();
    let state = build_state(&config)?;

    // Racer noise runs on its own interval (disabled when PB_RACER_TICK_MS=0)
    let ticker = scheduler::start_racer_ticker(
        state.engine.clone(),
        config.racer_tick,
        state.seed.wrapping_add(2),
    );

    let result = game_loop::run_game(state, &config).await;
    if let Some(handle) = ticker {
        handle.abort();
    }
    result
}
