#[cfg(test)]
mod tests {
    use crate::catalog::{Catalog, MiniGame, Temptation};
    use crate::events::{CollectingGameEventSink, GameEvent};
    use crate::minigames::{MiniGameAnswer, MiniGamePuzzle};
    use crate::savings::{SavingsEngine, TemptationChoice};
    use crate::settings::{BatchDecisionSettings, GameSettings, SimulationSettings};
    use crate::simulation::{
        sample_racer_factor, BatchDecisions, DailySimulationDriver, DayDecisions, TemptationReport,
    };
    use crate::state::{GameState, InMemoryStateRepository};
    use chrono::NaiveDate;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use std::sync::Arc;

    // --- Player with fixed answers ---
    struct ScriptedDecisions {
        chores: bool,
        choice: TemptationChoice,
        correct: bool,
    }

    impl ScriptedDecisions {
        fn idle() -> Self {
            Self {
                chores: false,
                choice: TemptationChoice::Save,
                correct: false,
            }
        }
    }

    impl DayDecisions for ScriptedDecisions {
        fn accept_chore(&mut self, _state: &GameState) -> bool {
            self.chores
        }

        fn temptation_choice(
            &mut self,
            _temptation: &Temptation,
            _state: &GameState,
        ) -> TemptationChoice {
            self.choice
        }

        fn answer_mini_game(
            &mut self,
            _game: &MiniGame,
            puzzle: &MiniGamePuzzle,
        ) -> MiniGameAnswer {
            if self.correct {
                puzzle.solution()
            } else {
                MiniGameAnswer::None
            }
        }
    }

    fn day(n: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, n).unwrap()
    }

    fn engine_with(
        settings: GameSettings,
        goal_id: &str,
    ) -> (SavingsEngine, Arc<CollectingGameEventSink>) {
        let sink = Arc::new(CollectingGameEventSink::new());
        let mut engine = SavingsEngine::new(
            Arc::new(Catalog::builtin()),
            settings,
            GameState::default(),
            Arc::new(InMemoryStateRepository::new()),
            sink.clone(),
            day(1),
        )
        .unwrap();
        engine.select_goal(goal_id).unwrap();
        (engine, sink)
    }

    fn quiet_settings() -> SimulationSettings {
        SimulationSettings {
            temptation_probability: 0.0,
            mini_game_probability: 0.0,
        }
    }

    fn always(temptation: bool, mini_game: bool) -> SimulationSettings {
        SimulationSettings {
            temptation_probability: if temptation { 1.0 } else { 0.0 },
            mini_game_probability: if mini_game { 1.0 } else { 0.0 },
        }
    }

    #[test]
    fn test_rejects_invalid_probabilities() {
        let settings = SimulationSettings {
            temptation_probability: 2.0,
            ..SimulationSettings::default()
        };
        assert!(DailySimulationDriver::from_seed(settings, 1).is_err());
    }

    #[test]
    fn test_quiet_day_collects_allowance_once() {
        let (mut engine, _) = engine_with(GameSettings::default(), "bike");
        let mut driver = DailySimulationDriver::from_seed(quiet_settings(), 5).unwrap();
        let mut player = ScriptedDecisions::idle();

        let report = driver.step(&mut engine, day(1), &mut player).unwrap();
        assert_eq!(report.allowance.as_ref().unwrap().amount, dec!(1));
        assert!(report.interest.is_none());
        assert!(report.chore.is_none());
        assert!(report.temptation.is_none());
        assert!(report.mini_game.is_none());
        assert_eq!(report.racers.len(), 3);
        assert_eq!(report.status.savings, dec!(1));

        let report = driver.step(&mut engine, day(1), &mut player).unwrap();
        assert!(report.allowance.is_none());
        assert_eq!(report.status.savings, dec!(1));
    }

    #[test]
    fn test_interest_arrives_on_day_seven() {
        let (mut engine, _) = engine_with(GameSettings::default(), "bike");
        let mut driver = DailySimulationDriver::from_seed(quiet_settings(), 5).unwrap();
        let mut player = ScriptedDecisions::idle();

        let reports = driver.run(&mut engine, day(1), 15, &mut player).unwrap();
        let interest_days: Vec<NaiveDate> = reports
            .iter()
            .filter(|r| r.interest.is_some())
            .map(|r| r.date)
            .collect();
        assert_eq!(interest_days, vec![day(8), day(15)]);
        assert_eq!(engine.state().current_savings, dec!(16));
    }

    #[test]
    fn test_accepted_chore_is_credited() {
        let (mut engine, _) = engine_with(GameSettings::default(), "bike");
        let mut driver = DailySimulationDriver::from_seed(quiet_settings(), 5).unwrap();
        let mut player = ScriptedDecisions {
            chores: true,
            ..ScriptedDecisions::idle()
        };

        let report = driver.step(&mut engine, day(1), &mut player).unwrap();
        assert_eq!(report.chore.unwrap().new_total, dec!(3));
    }

    #[test]
    fn test_unaffordable_temptation_is_reported() {
        let (mut engine, _) = engine_with(GameSettings::default(), "bike");
        let mut driver = DailySimulationDriver::from_seed(always(true, false), 9).unwrap();
        let mut player = ScriptedDecisions {
            choice: TemptationChoice::Spend,
            ..ScriptedDecisions::idle()
        };

        let report = driver.step(&mut engine, day(1), &mut player).unwrap();
        match report.temptation.unwrap() {
            TemptationReport::Unaffordable {
                required,
                available,
                choice,
                ..
            } => {
                assert!(required > dec!(1));
                assert_eq!(available, dec!(1));
                assert_eq!(choice, TemptationChoice::Spend);
            }
            other => panic!("Expected Unaffordable, got {:?}", other),
        }
        assert_eq!(engine.state().current_savings, dec!(1));
    }

    #[test]
    fn test_saved_temptation_earns_bonus() {
        let (mut engine, _) = engine_with(GameSettings::default(), "bike");
        let mut driver = DailySimulationDriver::from_seed(always(true, false), 9).unwrap();
        let mut player = ScriptedDecisions::idle();

        let report = driver.step(&mut engine, day(1), &mut player).unwrap();
        assert!(matches!(
            report.temptation,
            Some(TemptationReport::Resolved { .. })
        ));
        assert_eq!(report.status.savings, dec!(1.50));
    }

    #[test]
    fn test_mini_game_correctness_comes_from_player() {
        let (mut engine, _) = engine_with(GameSettings::default(), "bike");
        let mut driver = DailySimulationDriver::from_seed(always(false, true), 3).unwrap();

        let mut wrong = ScriptedDecisions::idle();
        let report = driver.step(&mut engine, day(1), &mut wrong).unwrap();
        let mini_game = report.mini_game.unwrap();
        assert_eq!(mini_game.answer, MiniGameAnswer::None);
        assert!(mini_game.outcome.credited().is_none());
        assert_eq!(engine.state().current_savings, dec!(1));

        let mut right = ScriptedDecisions {
            correct: true,
            ..ScriptedDecisions::idle()
        };
        let report = driver.step(&mut engine, day(2), &mut right).unwrap();
        let mini_game = report.mini_game.unwrap();
        assert!(mini_game.puzzle.check(&mini_game.answer));
        let reward = mini_game.outcome.game().reward;
        assert_eq!(engine.state().current_savings, dec!(2) + reward);
    }

    #[test]
    fn test_bike_completes_after_hundred_allowances() {
        let settings = GameSettings {
            weekly_interest: Decimal::ZERO,
            ..GameSettings::default()
        };
        let (mut engine, sink) = engine_with(settings, "bike");
        let mut driver = DailySimulationDriver::from_seed(quiet_settings(), 1).unwrap();
        let mut player = ScriptedDecisions::idle();

        let reports = driver.run(&mut engine, day(1), 150, &mut player).unwrap();
        assert_eq!(reports.len(), 100);
        assert_eq!(engine.state().current_savings, dec!(100));

        let last = reports.last().unwrap();
        assert_eq!(last.completed_goal().unwrap().goal.id, "bike");
        assert_eq!(last.milestones(), vec![100]);
        assert_eq!(engine.gallery().len(), 1);

        let completions = sink
            .events()
            .iter()
            .filter(|e| matches!(e, GameEvent::GoalCompleted { .. }))
            .count();
        assert_eq!(completions, 1);
    }

    #[test]
    fn test_same_seed_same_day_sequence() {
        let simulate = |seed: u64| {
            let (mut engine, _) = engine_with(GameSettings::default(), "bike");
            let mut driver =
                DailySimulationDriver::from_seed(SimulationSettings::default(), seed).unwrap();
            let mut player =
                BatchDecisions::from_seed(BatchDecisionSettings::default(), seed).unwrap();
            driver
                .run(&mut engine, day(1), 20, &mut player)
                .unwrap()
                .into_iter()
                .map(|r| (r.status.savings, r.racers))
                .collect::<Vec<_>>()
        };

        assert_eq!(simulate(77), simulate(77));
    }

    #[test]
    fn test_racer_noise_does_not_change_events() {
        let temptations = |racer_seed: u64| {
            let (mut engine, _) = engine_with(GameSettings::default(), "bike");
            let mut driver = DailySimulationDriver::new(
                SimulationSettings::default(),
                StdRng::seed_from_u64(10),
                StdRng::seed_from_u64(racer_seed),
            )
            .unwrap();
            let mut player = ScriptedDecisions::idle();
            driver
                .run(&mut engine, day(1), 30, &mut player)
                .unwrap()
                .into_iter()
                .map(|r| r.temptation.map(|t| t.temptation().id.clone()))
                .collect::<Vec<_>>()
        };

        assert_eq!(temptations(1), temptations(2));
    }

    #[test]
    fn test_racers_stay_within_targets() {
        let (mut engine, _) = engine_with(GameSettings::default(), "bike");
        let mut driver = DailySimulationDriver::from_seed(quiet_settings(), 21).unwrap();
        let mut player = ScriptedDecisions::idle();

        let reports = driver.run(&mut engine, day(1), 31, &mut player).unwrap();
        for report in &reports {
            for racer in &report.racers {
                assert!(racer.savings <= racer.target);
            }
        }
        let ruby = &reports.last().unwrap().racers[2];
        assert_eq!(ruby.name, "Ruby");
        assert_eq!(ruby.savings, ruby.target);
    }

    #[test]
    fn test_racer_factor_range() {
        let mut rng = StdRng::seed_from_u64(4);
        for _ in 0..1000 {
            let factor = sample_racer_factor(&mut rng);
            assert!(factor >= dec!(0.75) && factor <= dec!(1.25));
        }
    }
}
