use std::sync::Arc;

use super::*;
use crate::{
    canon::book::{Book, Category, Theme},
    plan::generator::{PlanOptions, UnitsPerPeriod, generate_plan},
    progress::store::InMemoryStore,
};

fn small_canon() -> Canon {
    Canon::new(vec![
        Book::new("Genesis", 3, Category::Pentateuch, Theme::Creation),
        Book::new("Exodus", 2, Category::Pentateuch, Theme::Exodus),
    ])
    .unwrap()
}

fn id(raw: &str) -> UnitId {
    UnitId::from_raw(raw)
}

fn small_schedule(canon: &Canon) -> Schedule {
    generate_plan(
        canon,
        &PlanOptions::daily(2).with_units_per_period(UnitsPerPeriod::Fixed(3)),
    )
    .unwrap()
}

#[test]
fn day_completes_only_after_all_units() {
    let canon = small_canon();
    let schedule = small_schedule(&canon);
    let tracker = ProgressTracker::open(&canon, InMemoryStore::new());
    let day1 = &schedule.periods[0];

    assert!(tracker.toggle(&id("Genesis-2")).unwrap());
    assert!(!tracker.period_completion(day1));
    tracker.toggle(&id("Genesis-1")).unwrap();
    assert!(!tracker.period_completion(day1));
    tracker.toggle(&id("Genesis-3")).unwrap();
    assert!(tracker.period_completion(day1));
    assert_eq!(tracker.aggregate_percentage(), 60);
    assert_eq!(tracker.period_progress(&schedule.periods[1]), PeriodProgress { done: 0, total: 2 });
}

#[test]
fn toggle_twice_is_a_no_op() {
    let canon = small_canon();
    let tracker = ProgressTracker::open(&canon, InMemoryStore::with_ids(["Exodus-1"]));
    let before = tracker.completed_ids();

    assert!(tracker.toggle(&id("Genesis-1")).unwrap());
    assert!(!tracker.toggle(&id("Genesis-1")).unwrap());
    assert_eq!(tracker.completed_ids(), before);
    assert_eq!(tracker.store().save_count(), 2);
    assert_eq!(tracker.store().contents().unwrap(), before);
}

#[test]
fn stale_ids_are_ignored_in_percentages() {
    let canon = small_canon();
    let tracker = ProgressTracker::open(&canon, InMemoryStore::with_ids(["Leviticus-1"]));
    assert_eq!(tracker.aggregate_percentage(), 0);
    assert_eq!(tracker.completed_count(), 0);
    assert_eq!(tracker.completed_ids(), vec![id("Leviticus-1")]);
}

#[test]
fn duplicate_and_stale_entries_keep_percentage_in_bounds() {
    let canon = small_canon();
    let store = InMemoryStore::with_ids([
        "Genesis-1",
        "Genesis-1",
        "Genesis-2",
        "Genesis-3",
        "Exodus-1",
        "Exodus-2",
        "Exodus-2",
        "Exodus-3",
        "nonsense",
    ]);
    let tracker = ProgressTracker::open(&canon, store);
    assert_eq!(tracker.aggregate_percentage(), 100);
    assert_eq!(tracker.completed_count(), 5);
}

#[test]
fn unreadable_store_starts_empty() {
    let canon = small_canon();
    let store = InMemoryStore::with_ids(["Genesis-1"]);
    store.set_fail_loads(true);
    let tracker = ProgressTracker::open(&canon, store);
    assert!(tracker.completed_ids().is_empty());
    assert_eq!(tracker.aggregate_percentage(), 0);
}

#[test]
fn failed_write_keeps_in_memory_change() {
    let canon = small_canon();
    let tracker = ProgressTracker::open(&canon, InMemoryStore::new());
    tracker.store().set_fail_saves(true);

    let err = tracker.toggle(&id("Exodus-2")).unwrap_err();
    assert!(matches!(err, ScripturaError::Persistence(_)));
    assert!(tracker.is_complete(&id("Exodus-2")));
    assert_eq!(tracker.store().contents(), None);

    tracker.store().set_fail_saves(false);
    tracker.toggle(&id("Exodus-1")).unwrap();
    let stored = tracker.store().contents().unwrap();
    assert_eq!(stored, vec![id("Exodus-1"), id("Exodus-2")]);
}

#[test]
fn invalid_ids_are_rejected_without_mutation() {
    let canon = small_canon();
    let tracker = ProgressTracker::open(&canon, InMemoryStore::new());
    for raw in ["Leviticus-1", "Genesis-4", "Genesis-0", "Genesis", ""] {
        let err = tracker.toggle(&id(raw)).unwrap_err();
        assert!(err.is_validation(), "{raw}: {err}");
    }
    assert!(tracker.completed_ids().is_empty());
    assert_eq!(tracker.store().save_count(), 0);
}

#[test]
fn set_complete_only_writes_on_change() {
    let canon = small_canon();
    let tracker = ProgressTracker::open(&canon, InMemoryStore::new());
    assert!(tracker.set_complete(&id("Genesis-1"), true).unwrap());
    assert!(!tracker.set_complete(&id("Genesis-1"), true).unwrap());
    assert_eq!(tracker.store().save_count(), 1);
    assert!(tracker.set_complete(&id("Genesis-1"), false).unwrap());
    assert!(!tracker.is_complete(&id("Genesis-1")));
    assert_eq!(tracker.store().save_count(), 2);
}

#[test]
fn empty_period_is_vacuously_complete() {
    let canon = small_canon();
    let tracker = ProgressTracker::open(&canon, InMemoryStore::new());
    let empty = SchedulePeriod {
        index: 9,
        label: "Day 9".to_string(),
        title: String::new(),
        units: vec![],
    };
    assert!(tracker.period_completion(&empty));
}

#[test]
fn complete_period_marks_every_unit_once() {
    let canon = small_canon();
    let schedule = small_schedule(&canon);
    let tracker = ProgressTracker::open(&canon, InMemoryStore::with_ids(["Genesis-2"]));
    assert_eq!(tracker.complete_period(&schedule.periods[0]).unwrap(), 2);
    assert!(tracker.period_completion(&schedule.periods[0]));
    assert_eq!(tracker.store().save_count(), 1);
}

#[test]
fn summary_reports_next_unread_period() {
    let canon = small_canon();
    let schedule = small_schedule(&canon);
    let tracker = ProgressTracker::open(&canon, InMemoryStore::new());
    assert_eq!(tracker.summary(&schedule).next_period, Some(1));

    tracker.complete_period(&schedule.periods[0]).unwrap();
    let summary = tracker.summary(&schedule);
    assert_eq!(summary.completed, 3);
    assert_eq!(summary.total, 5);
    assert_eq!(summary.percentage, 60);
    assert_eq!(summary.periods_complete, 1);
    assert_eq!(summary.periods_total, 2);
    assert_eq!(summary.next_period, Some(2));
}

#[test]
fn percentage_rounds_half_up() {
    assert_eq!(percentage(0, 1189), 0);
    assert_eq!(percentage(1, 1189), 0);
    assert_eq!(percentage(6, 1189), 1);
    assert_eq!(percentage(1, 8), 13);
    assert_eq!(percentage(1189, 1189), 100);
    assert_eq!(percentage(5000, 1189), 100);
    assert_eq!(percentage(3, 0), 0);
}

#[test]
fn concurrent_toggles_do_not_lose_updates() {
    let canon = Canon::standard();
    let tracker = Arc::new(ProgressTracker::open(&canon, InMemoryStore::new()));
    let units: Vec<UnitId> = canon.flatten().map(|u| u.id()).collect();

    let handles: Vec<_> = units
        .chunks(100)
        .map(|chunk| {
            let tracker = Arc::clone(&tracker);
            let chunk = chunk.to_vec();
            std::thread::spawn(move || {
                for id in &chunk {
                    tracker.toggle(id).unwrap();
                }
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }

    assert_eq!(tracker.aggregate_percentage(), 100);
    let stored = tracker.store().contents().unwrap();
    assert_eq!(stored.len(), canon.total_chapters());
    assert_eq!(stored, tracker.completed_ids());
}
