//! Daily generation: determinism, bounds, and the run-info record.

use hrot_core::{parse, Neighborhood};
use hrot_daily::{DailyRuleGenerator, DailySeed};
use hrot_engine::{RunInfo, Simulation};
use hrot_grid::snapshot_path;
use hrot_test_utils::TempOutputDir;
use proptest::prelude::*;

fn seed() -> DailySeed {
    DailySeed::from_date(2025, 11, 22).unwrap()
}

#[test]
fn same_seed_same_rule_and_first_grid() {
    let a = DailyRuleGenerator::new(seed()).generate().unwrap();
    let b = DailyRuleGenerator::new(seed()).generate().unwrap();
    assert_eq!(a.rule_text(), b.rule_text());
    assert_eq!(a.rule(), b.rule());

    let mut a = a;
    let mut b = b;
    a.config_mut().write_output = false;
    b.config_mut().write_output = false;
    let sa = a.into_simulation().unwrap();
    let sb = b.into_simulation().unwrap();
    assert_eq!(sa.grid(), sb.grid());
    assert_eq!(sa.grid().dims(), (100, 100));
}

#[test]
fn adjacent_days_draw_different_setups() {
    let texts: Vec<String> = (1..=7)
        .map(|d| {
            let s = DailySeed::from_date(2025, 3, d).unwrap();
            DailyRuleGenerator::new(s)
                .generate()
                .unwrap()
                .rule_text()
                .to_string()
        })
        .collect();
    let mut unique = texts.clone();
    unique.sort();
    unique.dedup();
    assert!(unique.len() > 1, "a week of identical rules: {texts:?}");
}

#[test]
fn rule_text_parses_back_to_the_same_behaviour() {
    let run = DailyRuleGenerator::new(seed()).generate().unwrap();
    let parsed = parse(run.rule_text()).unwrap();
    assert!(parsed.behaves_like(run.rule()));
}

#[test]
fn daily_config_is_fixed() {
    let run = DailyRuleGenerator::new(seed()).generate().unwrap();
    let c = run.config();
    assert_eq!((c.width, c.height), (100, 100));
    assert_eq!(c.max_generations, 200);
    assert!(c.edge.wraps());
    assert_eq!(c.seed, Some(20251122));
}

#[test]
fn daily_grid_continues_the_rule_stream() {
    let mut run = DailyRuleGenerator::new(seed()).generate().unwrap();
    run.config_mut().write_output = false;
    let reseeded = Simulation::new(run.config().clone(), run.rule().clone()).unwrap();
    let daily = run.into_simulation().unwrap();
    assert_eq!(daily.seed(), Some(20251122));
    assert_eq!(reseeded.seed(), Some(20251122));
    assert_ne!(daily.grid(), reseeded.grid());
}

#[test]
fn run_writes_header_then_activity() {
    let dir = TempOutputDir::new("daily_run");
    let mut run = DailyRuleGenerator::new(seed())
        .output_folder(dir.path())
        .generate()
        .unwrap();
    run.config_mut().width = 16;
    run.config_mut().height = 16;
    run.config_mut().max_generations = 3;
    let text = run.rule_text().to_string();
    let nb = run.rule().neighborhood().name();

    let summary = run.run().unwrap();
    assert_eq!(summary.generations, 3);
    assert!(snapshot_path(dir.path(), 2).exists());

    let info = RunInfo::read(&RunInfo::path(dir.path())).unwrap();
    let keys: Vec<&str> = info.iter().map(|(k, _)| k).collect();
    assert_eq!(
        keys,
        ["Seed", "Rule", "Generations", "Neighborhood", "Activity"]
    );
    assert_eq!(info.get("Seed"), Some("20251122"));
    assert_eq!(info.get("Rule"), Some(text.as_str()));
    assert_eq!(info.get("Generations"), Some("3"));
    assert_eq!(info.get("Neighborhood"), Some(nb));
    assert_eq!(
        info.get("Activity"),
        Some(format!("{:.2}%", summary.activity_score()).as_str())
    );
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn drawn_rule_is_within_bounds(value in any::<u64>()) {
        let run = DailyRuleGenerator::new(DailySeed::new(value)).generate().unwrap();
        let rule = run.rule();
        prop_assert!((1..=8).contains(&rule.range()));
        prop_assert!((2..=16).contains(&rule.states()));
        let max = rule.max_neighbours();
        prop_assert!(rule.survive().iter().all(|n| n <= max));
        prop_assert!(rule.birth().iter().all(|n| n <= max));
        prop_assert_eq!(
            run.rule_text().ends_with(",NN"),
            rule.neighborhood() == Neighborhood::VonNeumann
        );
    }
}
