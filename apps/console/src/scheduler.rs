//! Background scheduler for AI racer noise.
//!
//! Advances the racers on their own interval, independent of the day loop.
//! Each tick locks the engine for one complete `advance_ai_racers` call.

use std::sync::Arc;
use std::time::Duration;

use piggybank_core::simulation::sample_racer_factor;
use piggybank_core::SavingsEngine;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};
use tracing::{debug, info};

/// Starts the racer ticker. Returns `None` when `period` is zero.
pub fn start_racer_ticker(
    engine: Arc<Mutex<SavingsEngine>>,
    period: Duration,
    seed: u64,
) -> Option<JoinHandle<()>> {
    if period.is_zero() {
        debug!("Racer ticker disabled");
        return None;
    }

    Some(tokio::spawn(async move {
        info!("Racer ticker started ({:?} interval)", period);
        let mut rng = StdRng::seed_from_u64(seed);
        let mut ticker = interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // First tick completes immediately; racers already moved for today.
        ticker.tick().await;

        loop {
            ticker.tick().await;
            let mut engine = engine.lock().await;
            let racers = engine.advance_ai_racers(|| sample_racer_factor(&mut rng));
            debug!(
                "Racers advanced: {}",
                racers
                    .iter()
                    .map(|r| format!("{} {}", r.name, r.savings))
                    .collect::<Vec<_>>()
                    .join(", ")
            );
        }
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use piggybank_core::events::NoOpGameEventSink;
    use piggybank_core::state::{GameState, InMemoryStateRepository};
    use piggybank_core::{Catalog, GameSettings};
    use rust_decimal::Decimal;

    fn shared_engine() -> Arc<Mutex<SavingsEngine>> {
        let engine = SavingsEngine::new(
            Arc::new(Catalog::builtin()),
            GameSettings::default(),
            GameState::default(),
            Arc::new(InMemoryStateRepository::new()),
            Arc::new(NoOpGameEventSink),
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
        )
        .unwrap();
        Arc::new(Mutex::new(engine))
    }

    fn savings(engine: &SavingsEngine) -> Vec<Decimal> {
        engine.ai_racers().iter().map(|r| r.savings).collect()
    }

    #[tokio::test]
    async fn test_zero_period_disables_ticker() {
        assert!(start_racer_ticker(shared_engine(), Duration::ZERO, 1).is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_ticker_advances_racers_up_to_their_targets() {
        let engine = shared_engine();
        let start = savings(&*engine.lock().await);

        let handle = start_racer_ticker(engine.clone(), Duration::from_millis(10), 3)
            .expect("ticker should start");

        tokio::time::sleep(Duration::from_millis(35)).await;
        {
            let engine = engine.lock().await;
            let moved = savings(&engine);
            assert!(moved.iter().zip(&start).all(|(now, before)| now > before));
            assert!(engine.ai_racers().iter().all(|r| r.savings < r.target));
        }

        // 500 more ticks, far more than any racer needs to finish.
        tokio::time::sleep(Duration::from_secs(5)).await;
        {
            let engine = engine.lock().await;
            assert!(engine.ai_racers().iter().all(|r| r.savings <= r.target));
            assert!(engine.ai_racers().iter().all(|r| r.is_finished()));
        }

        handle.abort();
    }
}
