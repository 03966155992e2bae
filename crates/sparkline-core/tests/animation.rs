// File: crates/sparkline-core/tests/animation.rs
// Purpose: Reveal schedule construction and the phase tracker's retrigger rules.

use std::time::Duration;

use sparkline_core::{schedule, Easing, RevealAnimator, RevealPhase, Series, REVEAL_DURATION};

#[test]
fn schedule_hides_then_reveals() {
    let s = schedule(120.0, true).expect("enabled schedule");
    assert_eq!(s.length, 120.0);
    assert_eq!(s.start_offset, 120.0);
    assert_eq!(s.end_offset, 0.0);
    assert_eq!(s.duration, Duration::from_millis(1500));
    assert_eq!(s.easing, Easing::EaseInOut);
}

#[test]
fn no_schedule_when_disabled_or_degenerate() {
    assert!(schedule(120.0, false).is_none());
    assert!(schedule(0.0, true).is_none());
    assert!(schedule(-3.0, true).is_none());
    assert!(schedule(f64::NAN, true).is_none());
    assert!(schedule(f64::INFINITY, true).is_none());
}

#[test]
fn hidden_frame_precedes_transition() {
    let key = Series::new(vec![1.0, 2.0]).key();
    let mut a = RevealAnimator::new();
    assert!(a.sync(key, true, 50.0));
    assert!(matches!(a.phase(), RevealPhase::Hidden(_)));

    // time does not move a transition that has not started
    a.advance(Duration::from_secs(5));
    assert!(matches!(a.phase(), RevealPhase::Hidden(_)));

    a.commit_frame();
    match a.phase() {
        RevealPhase::Running { elapsed, schedule } => {
            assert_eq!(elapsed, Duration::ZERO);
            assert_eq!(schedule.start_offset, 50.0);
        }
        other => panic!("expected running, got {other:?}"),
    }

    a.advance(Duration::from_secs(1));
    assert!(matches!(a.phase(), RevealPhase::Running { .. }));
    a.advance(REVEAL_DURATION);
    assert_eq!(a.phase(), RevealPhase::Complete);
}

#[test]
fn retriggers_on_new_data_only() {
    let first = Series::new(vec![1.0, 2.0, 3.0]).key();
    let same = Series::new(vec![1.0, 2.0, 3.0]).key();
    let other = Series::new(vec![3.0, 2.0, 1.0]).key();

    let mut a = RevealAnimator::new();
    assert!(a.sync(first, true, 80.0));
    a.commit_frame();
    a.advance(REVEAL_DURATION);
    assert_eq!(a.phase(), RevealPhase::Complete);

    assert!(!a.sync(same, true, 80.0));
    assert_eq!(a.phase(), RevealPhase::Complete);

    assert!(a.sync(other, true, 80.0));
    assert!(matches!(a.phase(), RevealPhase::Hidden(_)));
}

#[test]
fn toggling_animation_on_restarts() {
    let key = Series::new(vec![0.0, 1.0]).key();
    let mut a = RevealAnimator::new();
    assert!(!a.sync(key, false, 40.0));
    assert_eq!(a.phase(), RevealPhase::Static);
    assert!(a.sync(key, true, 40.0));
    assert!(matches!(a.phase(), RevealPhase::Hidden(_)));
}

#[test]
fn zero_length_path_stays_static() {
    let key = Series::new(vec![7.0]).key();
    let mut a = RevealAnimator::new();
    assert!(!a.sync(key, true, 0.0));
    assert_eq!(a.phase(), RevealPhase::Static);
}

#[test]
fn resize_keeps_phase_but_follows_length() {
    let key = Series::new(vec![1.0, 5.0]).key();
    let mut a = RevealAnimator::new();
    a.sync(key, true, 100.0);
    a.commit_frame();
    a.advance(Duration::from_millis(200));
    assert!(!a.sync(key, true, 250.0));
    match a.phase() {
        RevealPhase::Running { schedule, elapsed } => {
            assert_eq!(schedule.length, 250.0);
            assert_eq!(elapsed, Duration::from_millis(200));
        }
        other => panic!("expected running, got {other:?}"),
    }
}

#[test]
fn finish_skips_to_complete() {
    let key = Series::new(vec![1.0, 3.0]).key();
    let mut a = RevealAnimator::new();
    a.sync(key, true, 60.0);
    a.finish();
    assert_eq!(a.phase(), RevealPhase::Complete);

    let mut still = RevealAnimator::new();
    still.sync(key, false, 60.0);
    still.finish();
    assert_eq!(still.phase(), RevealPhase::Static);
}
