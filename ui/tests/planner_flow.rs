//! End-to-end planner session driven through the public state API, the same
//! sequence of transitions the heatmap, day editor and search box trigger.

use std::rc::Rc;

use time::{macros::date, Duration};
use ui::core::{color::lightness, format, PlannerConfig};
use ui::planner::{ModalState, PlannerState};

fn seeded(day_count: usize) -> PlannerState {
    let config = PlannerConfig::default().with_seed(2024).with_day_count(day_count);
    PlannerState::new(&config).expect("default config is valid")
}

#[test]
fn fresh_session_covers_the_year() {
    let state = PlannerState::new(&PlannerConfig::default().with_seed(1)).unwrap();

    assert_eq!(state.days.len(), 365);
    assert_eq!(state.days[0].date, date!(2024 - 01 - 01));
    assert_eq!(state.days[364].date, date!(2024 - 12 - 30));
    for pair in state.days.windows(2) {
        assert_eq!(pair[1].date - pair[0].date, Duration::days(1));
    }
    for day in state.days.iter() {
        assert!((0.0..1.0).contains(&day.intensity));
        assert!(day.events.is_empty());
    }

    let analytics = &state.analytics;
    assert_eq!(analytics.task_completion.len(), 12);
    assert_eq!(analytics.productivity_trend.len(), 12);
    assert!(analytics
        .task_completion
        .iter()
        .all(|p| (0.0..100.0).contains(&p.value)));
    assert!(analytics
        .productivity_trend
        .iter()
        .all(|p| (50.0..100.0).contains(&p.value)));
    let total: f64 = analytics.category_breakdown.iter().map(|c| c.value).sum();
    assert_eq!(total, 100.0);
}

#[test]
fn add_event_then_find_it() {
    let target = date!(2024 - 01 - 03);
    let start = seeded(7);
    let before = start.day(target).unwrap().intensity;

    let editing = start.select_day(target).unwrap().set_draft("Dentist appointment");
    assert_eq!(editing.modal, ModalState::Open(target));
    assert_eq!(format::format_day(target), "Wed Jan 03 2024");

    let saved = editing.submit_draft();
    assert_eq!(saved.modal, ModalState::Closed);
    assert!(saved.draft.is_empty());

    let day = saved.day(target).unwrap();
    assert_eq!(day.events, vec!["Dentist appointment".to_string()]);
    assert!((day.intensity - (before + 0.2).min(1.0)).abs() < 1e-9);
    assert!(lightness(day.intensity) <= lightness(before));

    for (old, new) in start.days.iter().zip(saved.days.iter()) {
        if old.date == target {
            assert!(!Rc::ptr_eq(old, new));
        } else {
            assert!(Rc::ptr_eq(old, new));
        }
    }

    let searched = saved.set_search("DENTIST");
    let hits = searched.search_results();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].date, target);
    assert_eq!(hits[0].events, vec!["Dentist appointment".to_string()]);

    assert!(searched.set_search("plumber").search_results().is_empty());
}

#[test]
fn search_keeps_only_matching_events() {
    let first = date!(2024 - 01 - 01);
    let second = date!(2024 - 01 - 02);
    let state = seeded(3)
        .select_day(first)
        .unwrap()
        .submit_event("Gym")
        .select_day(first)
        .unwrap()
        .submit_event("Groceries")
        .select_day(second)
        .unwrap()
        .submit_event("gym with Sam");

    let hits = state.set_search("gym").search_results();
    let dates: Vec<_> = hits.iter().map(|h| h.date).collect();
    assert_eq!(dates, vec![first, second]);
    assert_eq!(hits[0].events, vec!["Gym".to_string()]);
    assert_eq!(hits[1].events, vec!["gym with Sam".to_string()]);
}

#[test]
fn cancelling_the_editor_changes_nothing() {
    let start = seeded(5);
    let target = date!(2024 - 01 - 02);
    let closed = start
        .select_day(target)
        .unwrap()
        .set_draft("never saved")
        .close_modal();

    assert_eq!(closed.days, start.days);
    assert_eq!(closed.modal, ModalState::Closed);
    assert!(closed.draft.is_empty());
}

#[test]
fn theme_toggle_round_trips() {
    let state = seeded(2);
    assert!(!state.dark_mode);
    let dark = state.toggle_theme();
    assert!(dark.dark_mode);
    assert_eq!(dark.toggle_theme().dark_mode, state.dark_mode);
    assert!(Rc::ptr_eq(&dark.analytics, &state.analytics));
}

#[test]
fn json_config_drives_the_session() {
    let config =
        PlannerConfig::from_json_str(r#"{"epoch": "2025-03-01", "day_count": 4, "seed": 5}"#)
            .unwrap();
    let state = PlannerState::new(&config).unwrap();
    let dates: Vec<_> = state.days.iter().map(|d| d.date).collect();
    assert_eq!(
        dates,
        vec![
            date!(2025 - 03 - 01),
            date!(2025 - 03 - 02),
            date!(2025 - 03 - 03),
            date!(2025 - 03 - 04),
        ]
    );
    assert!(PlannerConfig::from_json_str(r#"{"hue": -1}"#).is_err());
}
