use super::*;

fn step(delay_ms: u32, selector: &str) -> HeroStep {
    HeroStep { delay_ms, selector: selector.to_owned() }
}

fn stock_schedule() -> HeroSchedule {
    HeroSchedule::new(vec![
        step(100, ".hero-title"),
        step(300, ".hero-subtitle"),
        step(500, ".hero-description"),
        step(700, ".scroll-arrow"),
    ])
}

// =============================================================
// RevealSet
// =============================================================

#[test]
fn new_set_is_empty() {
    let set = RevealSet::new();
    assert!(set.is_empty());
    assert_eq!(set.len(), 0);
}

#[test]
fn first_mark_reports_true() {
    let mut set = RevealSet::new();
    assert!(set.mark(RevealId(3)));
    assert!(set.contains(RevealId(3)));
}

#[test]
fn repeated_mark_reports_false_and_stays_marked() {
    let mut set = RevealSet::new();
    assert!(set.mark(RevealId(0)));
    for _ in 0..5 {
        assert!(!set.mark(RevealId(0)));
        assert!(set.contains(RevealId(0)));
    }
    assert_eq!(set.len(), 1);
}

#[test]
fn marks_are_independent() {
    let mut set = RevealSet::new();
    set.mark(RevealId(1));
    assert!(!set.contains(RevealId(2)));
    assert!(set.mark(RevealId(2)));
    assert_eq!(set.len(), 2);
}

// =============================================================
// HeroSchedule
// =============================================================

#[test]
fn nothing_due_before_first_delay() {
    let mut s = stock_schedule();
    assert!(s.due(0.0).is_empty());
    assert!(s.due(99.9).is_empty());
}

#[test]
fn title_due_at_exactly_first_delay() {
    let mut s = stock_schedule();
    assert_eq!(s.due(100.0), vec![".hero-title".to_owned()]);
}

#[test]
fn each_step_released_once() {
    let mut s = stock_schedule();
    assert_eq!(s.due(150.0).len(), 1);
    assert!(s.due(150.0).is_empty());
    assert!(s.due(299.0).is_empty());
}

#[test]
fn late_poll_releases_all_elapsed_steps_in_order() {
    let mut s = stock_schedule();
    assert_eq!(
        s.due(550.0),
        vec![".hero-title".to_owned(), ".hero-subtitle".to_owned(), ".hero-description".to_owned()]
    );
    assert!(!s.is_finished());
    assert_eq!(s.due(700.0), vec![".scroll-arrow".to_owned()]);
    assert!(s.is_finished());
}

#[test]
fn steps_are_sorted_by_delay() {
    let s = HeroSchedule::new(vec![step(500, ".b"), step(100, ".a")]);
    let delays: Vec<u32> = s.steps().iter().map(|st| st.delay_ms).collect();
    assert_eq!(delays, vec![100, 500]);
}

#[test]
fn empty_schedule_is_finished() {
    let mut s = HeroSchedule::new(Vec::new());
    assert!(s.is_finished());
    assert!(s.due(10_000.0).is_empty());
}
