use crate::*;

use tilepager::{Pager, PagerOptions};

fn sample_options(count: usize) -> PagerOptions {
    PagerOptions::new(count, 300.0, 100.0, 10.0)
}

fn projection(translation: f32, velocity: f32) -> f32 {
    translation + velocity / 1000.0 * DECELERATION_RATE / (1.0 - DECELERATION_RATE)
}

#[test]
fn tween_progresses_toward_signed_target() {
    let tw = Tween::new(100.0, -120.0, 0, 100, Easing::Linear);
    assert_eq!(tw.sample(0), 100.0);
    assert_eq!(tw.sample(50), -10.0);
    assert_eq!(tw.sample(100), -120.0);
    assert_eq!(tw.sample(160), -120.0);
    assert!(!tw.is_done(99));
    assert!(tw.is_done(100));
}

#[test]
fn easing_endpoints_and_midpoints() {
    for easing in [Easing::Linear, Easing::SmoothStep, Easing::EaseInOutCubic] {
        assert_eq!(easing.sample(0.0), 0.0);
        assert_eq!(easing.sample(1.0), 1.0);
        assert_eq!(easing.sample(0.5), 0.5);
    }
    // The curves differ away from the midpoint.
    assert!(Easing::SmoothStep.sample(0.25) < 0.25);
    assert!(Easing::EaseInOutCubic.sample(0.25) < Easing::SmoothStep.sample(0.25));
}

#[test]
fn tween_retarget_continues_from_current_sample() {
    let mut tw = Tween::new(0.0, 100.0, 0, 100, Easing::Linear);
    tw.retarget(50, 0.0, 100);
    assert_eq!(tw.from, 50.0);
    assert_eq!(tw.sample(100), 25.0);
}

#[test]
fn tracker_estimates_velocity_and_projects_momentum() {
    let mut t = DragTracker::new();
    t.begin(0.0, 0);
    assert_eq!(t.move_to(-16.0, 16), Some(-16.0));
    assert_eq!(t.move_to(-32.0, 32), Some(-32.0));
    assert_eq!(t.move_to(-48.0, 48), Some(-48.0));
    assert!(t.is_active());
    assert_eq!(t.velocity(), -1000.0);

    let expected = projection(-48.0, -1000.0);
    assert_eq!(t.predicted_end_translation(), expected);
    assert_eq!(
        t.finish(),
        DragOutcome::Drag {
            translation: -48.0,
            predicted_end: expected,
        }
    );
    assert!(!t.is_active());
    assert_eq!(t.translation(), 0.0);
}

#[test]
fn tiny_motion_is_a_tap() {
    let mut t = DragTracker::new();
    t.begin(100.0, 0);
    assert_eq!(t.move_to(103.0, 16), None);
    assert_eq!(t.move_to(96.0, 32), None);
    assert_eq!(t.finish(), DragOutcome::Tap);
}

#[test]
fn velocity_uses_trailing_window_only() {
    let mut t = DragTracker::new();
    t.begin(0.0, 0);
    t.move_to(-100.0, 10);
    // A long hold expires the early fast samples.
    t.move_to(-100.0, 150);
    t.move_to(-101.0, 200);
    assert_eq!(t.velocity(), -20.0);
}

#[test]
fn velocity_is_clamped() {
    let mut t = DragTracker::new();
    t.begin(0.0, 0);
    t.move_to(-10_000.0, 1);
    assert_eq!(t.velocity(), -MAX_FLING_VELOCITY);
}

#[test]
fn velocity_with_no_elapsed_time_is_zero() {
    let mut t = DragTracker::new();
    t.begin(0.0, 0);
    t.move_to(-50.0, 0);
    assert_eq!(t.velocity(), 0.0);
}

#[test]
fn flick_advances_page_and_tween_settles() {
    let mut c = Controller::new(sample_options(3));
    c.pointer_down(200.0, 0);
    c.pointer_move(180.0, 16);
    c.pointer_move(160.0, 32);
    c.pointer_move(140.0, 48);
    assert!(c.pager().is_dragging());

    let snap = c.pointer_up(48).unwrap();
    assert!(snap.animated);
    assert_eq!(snap.from, 40.0);
    assert_eq!(snap.to, -120.0);
    assert_eq!(c.pager().page(), 2);
    assert!(c.is_animating());

    let mut last = c.visual_offset(48);
    assert_eq!(last, 40.0);
    let mut now = 48;
    loop {
        now += 16;
        match c.tick(now) {
            Some(off) => {
                assert!(off <= last);
                last = off;
            }
            None => break,
        }
    }
    assert!(!c.is_animating());
    assert_eq!(last, -120.0);
    assert_eq!(c.visual_offset(now), c.pager().scroll_offset());
}

#[test]
fn slow_short_drag_snaps_back() {
    let mut c = Controller::new(sample_options(3));
    c.pointer_down(200.0, 0);
    c.pointer_move(188.0, 100);

    let snap = c.pointer_up(300).unwrap();
    assert!(snap.animated);
    assert_eq!(snap.to, 100.0);
    assert_eq!(c.pager().page(), 0);
}

#[test]
fn tap_leaves_pager_untouched() {
    let mut c = Controller::new(sample_options(3));
    c.pointer_down(50.0, 0);
    c.pointer_move(53.0, 16);
    assert!(!c.pager().is_dragging());
    assert_eq!(c.pointer_up(32), None);
    assert_eq!(c.pager().page(), 0);
    assert!(!c.is_animating());
}

#[test]
fn wraparound_drag_jumps_without_tween() {
    let mut c = Controller::new(sample_options(3).with_carousel(true));
    assert_eq!(c.pager().page(), 0);

    c.pointer_down(0.0, 0);
    c.pointer_move(30.0, 16);
    c.pointer_move(60.0, 32);
    let snap = c.pointer_up(32).unwrap();

    assert!(!snap.animated);
    assert!(!c.is_animating());
    assert_eq!(c.tick(40), None);
    assert_eq!(c.pager().page(), 2);
    assert_eq!(
        c.visual_offset(40),
        c.pager().layout().offset_for_index(c.pager().selected_slot())
    );
}

#[test]
fn indicator_tap_retargets_mid_flight() {
    let mut c = Controller::new(sample_options(3));

    let snap = c.indicator_tap(2, 0);
    assert!(snap.animated);
    assert!(c.is_animating());
    assert_eq!(c.visual_offset(100), 12.0);

    // A second tap mid-flight continues from the in-flight offset.
    c.indicator_tap(0, 100);
    assert_eq!(c.visual_offset(100), 12.0);
    assert_eq!(c.pager().page(), 0);

    assert_eq!(c.tick(350), Some(100.0));
    assert_eq!(c.tick(351), None);
    assert_eq!(c.visual_offset(351), 100.0);
}

#[test]
fn jump_to_page_is_instant() {
    let mut c = Controller::new(sample_options(3));
    c.jump_to_page(2);
    assert!(!c.is_animating());
    assert_eq!(c.pager().page(), 2);
    assert_eq!(c.visual_offset(0), -120.0);
}

#[test]
fn pointer_down_cancels_running_snap() {
    let mut c = Controller::new(sample_options(3));
    c.indicator_tap(2, 0);
    assert!(c.is_animating());

    c.pointer_down(10.0, 50);
    assert!(!c.is_animating());
    assert_eq!(c.visual_offset(50), c.pager().scroll_offset());
}

#[test]
fn drag_cancel_restores_settled_state() {
    let mut c = Controller::new(sample_options(3));
    c.pointer_down(0.0, 0);
    c.pointer_move(-30.0, 16);
    assert!(c.pager().is_dragging());

    c.drag_cancel();
    assert!(!c.pager().is_dragging());
    assert!(!c.is_animating());
    assert_eq!(c.pager().page(), 0);
    assert_eq!(c.pager().scroll_offset(), 100.0);
    assert_eq!(c.pointer_up(32), None);
}

#[test]
fn controller_round_trips_its_pager() {
    let c = Controller::from_pager(Pager::new(sample_options(5).with_initial_page(3)));
    let p = c.into_pager();
    assert_eq!(p.page(), 3);
}
