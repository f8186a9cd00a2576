//! The console day loop.

use std::time::Duration;

use chrono::NaiveDate;
use piggybank_core::catalog::Catalog;
use piggybank_core::events::GameEvent;
use piggybank_core::utils::time_utils::{consecutive_days, local_today};
use piggybank_core::SavingsEngine;
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::time::{interval, MissedTickBehavior};
use tracing::info;

use crate::config::Config;
use crate::main_lib::AppState;
use crate::render;

/// Runs up to `config.days` simulated days, rendering as it goes.
pub async fn run_game(state: AppState, config: &Config) -> anyhow::Result<()> {
    let AppState {
        engine,
        event_sink,
        mut driver,
        mut decisions,
        ..
    } = state;
    let mut events = event_sink
        .take_receiver()
        .ok_or_else(|| anyhow::anyhow!("console event receiver already taken"))?;
    let start = config.start_date.unwrap_or_else(local_today);

    {
        let mut engine = engine.lock().await;
        ensure_active_goal(&mut engine, &config.goal)?;
        flush_events(&mut events, engine.catalog());
        println!("{}", render::dashboard(&engine.status(), engine.ai_racers(), start));
    }

    let mut ticker = (!config.tick.is_zero()).then(|| {
        let mut ticker = interval(config.tick.max(Duration::from_millis(1)));
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        ticker
    });

    for today in consecutive_days(start, config.days) {
        match ticker.as_mut() {
            Some(ticker) => {
                ticker.tick().await;
            }
            None => tokio::task::yield_now().await,
        }

        let mut engine = engine.lock().await;
        let report = driver.step(&mut engine, today, &mut decisions)?;
        flush_events(&mut events, engine.catalog());
        println!("{}", render::day_summary(&report));

        let Some(completed) = report.completed_goal() else {
            continue;
        };
        println!("\n{}", render::ceremony(completed));
        println!("\n{}", render::certificate(completed));
        println!("\n{}", render::gallery(engine.gallery()));

        if !config.repeat_on_complete {
            info!("Goal complete, exiting");
            return Ok(());
        }
        let next = next_goal_id(engine.catalog(), &completed.goal.id);
        engine.reset_for_new_goal();
        engine.select_goal(&next)?;
        flush_events(&mut events, engine.catalog());
        println!("\n{}", render::dashboard(&engine.status(), engine.ai_racers(), today));
    }

    let engine = engine.lock().await;
    let end = last_day(start, config.days);
    println!("\n{}", render::dashboard(&engine.status(), engine.ai_racers(), end));
    Ok(())
}

/// Selects `goal_id` unless a goal is already in progress.
fn ensure_active_goal(engine: &mut SavingsEngine, goal_id: &str) -> anyhow::Result<()> {
    if engine.state().has_active_goal() {
        info!("Resuming saved goal");
        return Ok(());
    }
    engine.select_goal(goal_id)?;
    Ok(())
}

fn flush_events(events: &mut UnboundedReceiver<GameEvent>, catalog: &Catalog) {
    while let Ok(event) = events.try_recv() {
        if let Some(line) = render::event_line(&event, catalog) {
            println!("{}", line);
        }
    }
}

/// The catalog goal after `current`, wrapping around.
fn next_goal_id(catalog: &Catalog, current: &str) -> String {
    let position = catalog.goals.iter().position(|g| g.id == current);
    let next = position.map_or(0, |i| (i + 1) % catalog.goals.len().max(1));
    catalog
        .goals
        .get(next)
        .map(|g| g.id.clone())
        .unwrap_or_else(|| current.to_string())
}

fn last_day(start: NaiveDate, days: u32) -> NaiveDate {
    consecutive_days(start, days).pop().unwrap_or(start)
}
