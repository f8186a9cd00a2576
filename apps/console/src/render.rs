//! Plain-text rendering of the game for the console.
//!
//! Every function returns a `String` so the day loop decides when to print.

use chrono::NaiveDate;
use piggybank_core::catalog::Catalog;
use piggybank_core::events::GameEvent;
use piggybank_core::savings::{GameStatus, MiniGameOutcome, TemptationOutcome};
use piggybank_core::simulation::{DayReport, TemptationReport};
use piggybank_core::state::{AiRacer, CompletedGoal};
use piggybank_core::utils::money::format_money;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

const BAR_BLOCKS: u32 = 50;
const RULE: &str = "+-------------------------------------------------------------+";
const SPARKLES: &str = "🎉✨🎊✨🎉✨🎊✨🎉";

fn whole_percent(percent: Decimal) -> Decimal {
    percent.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// `[█████░░░…] 28%` with one block per two percent, capped at 100%.
pub fn progress_bar(percent: Decimal) -> String {
    let capped = percent.clamp(Decimal::ZERO, Decimal::ONE_HUNDRED);
    let filled = (capped / Decimal::TWO).floor().to_u32().unwrap_or(0);
    format!(
        "[{}{}] {}%",
        "█".repeat(filled as usize),
        "░".repeat((BAR_BLOCKS - filled) as usize),
        whole_percent(capped)
    )
}

pub fn dashboard(status: &GameStatus, racers: &[AiRacer], today: NaiveDate) -> String {
    let mut lines = vec![
        RULE.to_string(),
        "|                    🐷 The Piggy Bank Race                   |".to_string(),
        RULE.to_string(),
    ];

    match &status.current_goal {
        Some(goal) => {
            let percent = if status.target > Decimal::ZERO {
                status.savings / status.target * Decimal::ONE_HUNDRED
            } else {
                Decimal::ZERO
            };
            lines.push(format!(
                "| Goal: {} {}  Target: {}   Saved: {}",
                goal.icon,
                goal.name,
                format_money(status.target),
                format_money(status.savings)
            ));
            lines.push(format!("| Progress: {}", progress_bar(percent)));
            if let Some(date) = status.estimated_completion_date(today) {
                lines.push(format!(
                    "| Estimated Completion: 📅 {}",
                    date.format("%b %-d")
                ));
            }
        }
        None => lines.push("| No goal selected".to_string()),
    }

    lines.push(RULE.to_string());
    lines.push("|  [ AI Racers ]".to_string());
    lines.extend(racers.iter().map(|racer| {
        format!(
            "|  {} {}: {}/{}   Progress: {}%",
            racer.emoji,
            racer.name,
            format_money(racer.savings),
            format_money(racer.target),
            whole_percent(racer.progress_percent())
        )
    }));
    lines.push(RULE.to_string());
    lines.join("\n")
}

/// One console line per engine event. Goal completion gets its own ceremony.
pub fn event_line(event: &GameEvent, catalog: &Catalog) -> Option<String> {
    match event {
        GameEvent::GoalSelected { goal } => Some(format!(
            "🎯 New goal: {} {} - save {}!",
            goal.icon,
            goal.name,
            format_money(goal.price)
        )),
        GameEvent::Credited {
            source,
            amount,
            new_total,
        } => Some(format!(
            "💰 {}: +{} (total {})",
            source.label(),
            format_money(*amount),
            format_money(*new_total)
        )),
        GameEvent::Debited {
            temptation_id,
            amount,
            new_total,
            days_delayed,
        } => {
            let item = catalog
                .temptation(temptation_id)
                .map(|t| format!("{} {}", t.emoji, t.item))
                .unwrap_or_else(|| temptation_id.clone());
            Some(format!(
                "🛒 Bought {} for {} (total {}). That's {} more day(s) until your goal.",
                item,
                format_money(*amount),
                format_money(*new_total),
                days_delayed
            ))
        }
        GameEvent::MilestoneReached { threshold } => Some(format!(
            "🎉 MILESTONE REACHED: {}%! 💬 {}",
            threshold,
            Catalog::milestone_message(*threshold)
        )),
        GameEvent::GoalCompleted { .. } => None,
        GameEvent::PersistenceFailed { message } => {
            Some(format!("⚠️  Progress could not be saved: {}", message))
        }
    }
}

/// Short recap of the day's choices.
pub fn day_summary(report: &DayReport) -> String {
    let mut parts = Vec::new();
    if report.chore.is_some() {
        parts.push("chore done".to_string());
    }
    match &report.temptation {
        Some(TemptationReport::Resolved {
            outcome: TemptationOutcome::Saved { temptation, .. },
        }) => parts.push(format!("resisted {}", temptation.item)),
        Some(TemptationReport::Resolved {
            outcome: TemptationOutcome::Spent { temptation, .. },
        }) => parts.push(format!("bought {}", temptation.item)),
        Some(TemptationReport::Unaffordable { temptation, .. }) => {
            parts.push(format!("couldn't afford {}", temptation.item))
        }
        None => {}
    }
    if let Some(mini_game) = &report.mini_game {
        let result = match &mini_game.outcome {
            MiniGameOutcome::Rewarded { .. } => "correct",
            MiniGameOutcome::TryAgain { .. } => "try again",
        };
        parts.push(format!("{}: {}", mini_game.outcome.game().name, result));
    }
    if parts.is_empty() {
        parts.push("quiet day".to_string());
    }

    format!(
        "📅 {}: {} | saved {} ({}%)",
        report.date,
        parts.join(", "),
        format_money(report.status.savings),
        report.status.progress_percent
    )
}

pub fn ceremony(completed: &CompletedGoal) -> String {
    let goal = &completed.goal;
    format!(
        "🏆 GOAL COMPLETED! 🏆\n\n🎊 VIRTUAL PURCHASE CEREMONY 🎊\n{}\n🛍️ Congratulations! You can now buy your {}!\n{} Here's your virtual {}! {}\n{}",
        SPARKLES, goal.name, goal.icon, goal.name, goal.icon, SPARKLES
    )
}

pub fn certificate(completed: &CompletedGoal) -> String {
    let lines = [
        "🏆 SAVINGS CHAMPION 🏆".to_string(),
        String::new(),
        format!("Successfully saved {}", format_money(completed.goal.price)),
        format!("for {}", completed.goal.name),
        String::new(),
        format!("Completed: {}", completed.completed_date.format("%-m/%-d/%Y")),
        String::new(),
        "🌟 WELL DONE! 🌟".to_string(),
    ];

    let body: Vec<String> = lines
        .iter()
        .map(|line| format!("║ {:^36} ║", line))
        .collect();
    format!(
        "📜 CERTIFICATE OF ACHIEVEMENT 📜\n╔══════════════════════════════════════╗\n{}\n╚══════════════════════════════════════╝",
        body.join("\n")
    )
}

pub fn gallery(completed_goals: &[CompletedGoal]) -> String {
    if completed_goals.is_empty() {
        return "📸 Your gallery is empty. Complete a goal to add a photo!".to_string();
    }
    let entries = completed_goals.iter().enumerate().map(|(index, completed)| {
        format!(
            "{}. {} {} - Completed: {}",
            index + 1,
            completed.goal.icon,
            completed.goal.name,
            completed.completed_date.format("%-m/%-d/%Y")
        )
    });
    std::iter::once("📸 Photo Gallery:".to_string())
        .chain(entries)
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use piggybank_core::catalog::Goal;
    use piggybank_core::events::CreditSource;
    use piggybank_core::state::GamePhase;
    use rust_decimal_macros::dec;

    fn basketball() -> Goal {
        Catalog::builtin().goal("basketball").unwrap().clone()
    }

    fn completed() -> CompletedGoal {
        CompletedGoal {
            goal: basketball(),
            completed_date: Utc.with_ymd_and_hms(2024, 3, 9, 12, 0, 0).unwrap(),
            final_amount: dec!(25.50),
        }
    }

    #[test]
    fn test_progress_bar_blocks() {
        let bar = progress_bar(dec!(28));
        assert_eq!(bar.matches('█').count(), 14);
        assert_eq!(bar.matches('░').count(), 36);
        assert!(bar.ends_with("] 28%"));

        let full = progress_bar(dec!(130));
        assert_eq!(full.matches('█').count(), 50);
        assert!(full.ends_with("] 100%"));

        assert_eq!(progress_bar(Decimal::ZERO).matches('░').count(), 50);
    }

    #[test]
    fn test_dashboard_shows_goal_and_racers() {
        let status = GameStatus {
            phase: GamePhase::Dashboard,
            current_goal: Some(basketball()),
            savings: dec!(7),
            target: dec!(25),
            progress_percent: 28,
            completed_goals: 0,
            goal_completed: false,
            estimated_days_remaining: Some(9),
        };
        let racers: Vec<AiRacer> = Catalog::builtin()
            .racers
            .iter()
            .map(AiRacer::from_profile)
            .collect();
        let today = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();

        let text = dashboard(&status, &racers, today);
        assert!(text.contains("Basketball  Target: $25.00   Saved: $7.00"));
        assert!(text.contains("] 28%"));
        assert!(text.contains("📅 Mar 10"));
        assert!(text.contains("Mia: $8.00/$25.00   Progress: 32%"));
    }

    #[test]
    fn test_dashboard_without_goal() {
        let status = GameStatus {
            phase: GamePhase::GoalSelection,
            current_goal: None,
            savings: Decimal::ZERO,
            target: Decimal::ZERO,
            progress_percent: 0,
            completed_goals: 0,
            goal_completed: false,
            estimated_days_remaining: None,
        };
        let today = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();

        let text = dashboard(&status, &[], today);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 7);
        assert_eq!(lines.first(), Some(&RULE));
        assert_eq!(lines.last(), Some(&RULE));
        assert_eq!(lines[3], "| No goal selected");
        assert!(!text.ends_with('\n'));
    }

    #[test]
    fn test_event_lines() {
        let catalog = Catalog::builtin();
        let credited = GameEvent::credited(CreditSource::Allowance, dec!(1), dec!(7));
        assert_eq!(
            event_line(&credited, &catalog).unwrap(),
            "💰 Daily Allowance: +$1.00 (total $7.00)"
        );

        let debited = GameEvent::debited("candy".to_string(), dec!(2), dec!(5), 1);
        assert!(event_line(&debited, &catalog).unwrap().contains("🍭 candy"));

        let milestone = event_line(&GameEvent::milestone_reached(50), &catalog).unwrap();
        assert!(milestone.contains("Halfway there!"));
    }

    #[test]
    fn test_certificate_and_gallery() {
        let certificate = certificate(&completed());
        assert!(certificate.contains("Successfully saved $25.00"));
        assert!(certificate.contains("Completed: 3/9/2024"));
        assert_eq!(certificate.lines().count(), 11);

        let gallery = gallery(&[completed()]);
        assert_eq!(
            gallery.lines().collect::<Vec<_>>(),
            vec!["📸 Photo Gallery:", "1. 🏀 Basketball - Completed: 3/9/2024"]
        );
        assert!(super::gallery(&[]).contains("empty"));
    }

    #[test]
    fn test_ceremony_names_goal() {
        assert!(ceremony(&completed()).contains("You can now buy your Basketball!"));
    }
}
