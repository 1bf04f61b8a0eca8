// Host-side tests for pointer and offset tracking.

use glam::{DVec2, IVec2};
use liquid_core::pointer::axis_direction;
use liquid_core::{CanvasOffset, PointerTracker};

#[test]
fn direction_sign_follows_each_axis() {
    assert_eq!(axis_direction(10.0, 11.0), 1);
    assert_eq!(axis_direction(10.0, 9.0), -1);
    assert_eq!(axis_direction(10.0, 10.0), 0);
}

#[test]
fn mouse_moves_update_direction_per_sample() {
    let mut t = PointerTracker::new();
    t.mouse_move(DVec2::new(5.0, 5.0));
    assert_eq!(t.state().direction, IVec2::new(1, 1));
    t.mouse_move(DVec2::new(2.0, 5.0));
    assert_eq!(t.state().direction, IVec2::new(-1, 0));
    t.mouse_move(DVec2::new(2.0, 9.0));
    assert_eq!(t.state().direction, IVec2::new(0, 1));
}

#[test]
fn first_sample_at_origin_has_no_direction() {
    let mut t = PointerTracker::new();
    t.mouse_move(DVec2::ZERO);
    assert_eq!(t.state().direction, IVec2::ZERO);
}

#[test]
fn mouse_is_ignored_during_touch() {
    let mut t = PointerTracker::new();
    t.touch_start(Some(DVec2::new(40.0, 40.0)));
    assert!(t.state().is_touch);
    assert!(!t.mouse_move(DVec2::new(400.0, 400.0)));
    assert_eq!(t.state().position, DVec2::new(40.0, 40.0));

    t.touch_move(Some(DVec2::new(50.0, 35.0)));
    assert_eq!(t.state().position, DVec2::new(50.0, 35.0));
    assert_eq!(t.state().direction, IVec2::new(1, -1));

    t.touch_end();
    assert!(!t.state().is_touch);
    assert!(t.mouse_move(DVec2::new(60.0, 35.0)));
}

#[test]
fn touch_without_points_only_flags_touch() {
    let mut t = PointerTracker::new();
    t.mouse_move(DVec2::new(7.0, 8.0));
    t.touch_start(None);
    assert!(t.state().is_touch);
    assert_eq!(t.state().position, DVec2::new(7.0, 8.0));
    t.touch_move(None);
    assert_eq!(t.state().position, DVec2::new(7.0, 8.0));
}

#[test]
fn touch_end_zeroes_speed() {
    let mut t = PointerTracker::new();
    t.touch_start(Some(DVec2::new(0.0, 0.0)));
    t.touch_move(Some(DVec2::new(30.0, 10.0)));
    t.sample_speed();
    assert_eq!(t.state().speed, DVec2::new(30.0, 10.0));
    t.touch_end();
    assert_eq!(t.state().speed, DVec2::ZERO);
}

#[test]
fn speed_is_sampled_not_accumulated_per_event() {
    let mut t = PointerTracker::new();
    t.mouse_move(DVec2::new(10.0, 0.0));
    t.mouse_move(DVec2::new(20.0, 0.0));
    t.mouse_move(DVec2::new(25.0, 4.0));
    // untouched until the sampling tick
    assert_eq!(t.state().speed, DVec2::ZERO);
    t.sample_speed();
    assert_eq!(t.state().speed, DVec2::new(25.0, 4.0));
    assert_eq!(t.state().last_position, DVec2::new(25.0, 4.0));
    // stationary pointer reads zero on the next tick
    t.sample_speed();
    assert_eq!(t.state().speed, DVec2::ZERO);
}

#[test]
fn relative_position_tracks_offset_and_pointer() {
    let mut t = PointerTracker::new();
    t.mouse_move(DVec2::new(300.0, 200.0));
    assert_eq!(t.state().relative_position, DVec2::new(300.0, 200.0));

    t.set_offset(CanvasOffset {
        left: 100.0,
        top: 50.0,
    });
    assert_eq!(t.state().relative_position, DVec2::new(200.0, 150.0));

    t.mouse_move(DVec2::new(110.0, 60.0));
    assert_eq!(t.state().relative_position, DVec2::new(10.0, 10.0));
}

#[test]
fn offset_includes_scroll() {
    let o = CanvasOffset::from_client_rect(12.0, 30.0, DVec2::new(0.0, 400.0));
    assert_eq!(o, CanvasOffset { left: 12.0, top: 430.0 });
    assert_eq!(o.to_local(DVec2::new(20.0, 440.0)), DVec2::new(8.0, 10.0));
}
