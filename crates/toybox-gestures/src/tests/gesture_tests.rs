use super::*;

use toybox_geometry::Point;

#[test]
fn threshold_is_inclusive() {
    assert_eq!(
        classify_release(500.0, 500.0),
        Release::Swipe(SwipeDirection::Up)
    );
    assert_eq!(
        classify_release(-500.0, 500.0),
        Release::Swipe(SwipeDirection::Down)
    );
}

#[test]
fn slow_release_settles() {
    assert_eq!(classify_release(499.9, 500.0), Release::Settle);
    assert_eq!(classify_release(-12.0, 500.0), Release::Settle);
}

#[test]
fn zero_velocity_never_swipes() {
    assert_eq!(classify_release(0.0, 0.0), Release::Settle);
}

#[test]
fn sampler_feeds_classifier() {
    let mut sampler = SwipeSampler::new();
    sampler.push(100.0);
    sampler.push(150.0);
    let velocity = sampler.average_velocity(0.25);
    assert_eq!(
        classify_release(velocity, DEFAULT_SWIPE_VELOCITY),
        Release::Swipe(SwipeDirection::Up)
    );
}

#[test]
fn fresh_session_is_a_tap() {
    let mut session = TouchSession::begin(Point::new(10.0, 10.0), Point::new(0.0, 400.0));
    session.accumulate(0.1);
    assert!(session.is_tap(DEFAULT_MAX_TAP_DURATION));
    assert_eq!(session.follow_target, Point::new(0.0, 400.0));
}

#[test]
fn long_press_is_not_a_tap() {
    let mut session = TouchSession::begin(Point::ZERO, Point::ZERO);
    session.accumulate(0.15);
    session.accumulate(0.15);
    assert!(!session.is_tap(DEFAULT_MAX_TAP_DURATION));
}

#[test]
fn tap_duration_boundary_is_inclusive() {
    let mut session = TouchSession::begin(Point::ZERO, Point::ZERO);
    session.accumulate(0.125);
    assert!(session.is_tap(0.125));
}

#[test]
fn moving_marks_drag_and_returns_previous() {
    let mut session = TouchSession::begin(Point::new(0.0, 100.0), Point::ZERO);
    let previous = session.record_move(Point::new(0.0, 120.0));
    assert_eq!(previous, Point::new(0.0, 100.0));
    assert_eq!(session.last_pointer(), Point::new(0.0, 120.0));
    assert!(session.dragged());
    assert!(!session.is_tap(DEFAULT_MAX_TAP_DURATION));
}

#[test]
fn slop_measures_from_origin() {
    let session = TouchSession::begin(Point::new(0.0, 0.0), Point::ZERO);
    assert!(!session.exceeded_slop(Point::new(0.0, DRAG_THRESHOLD), DRAG_THRESHOLD));
    assert!(session.exceeded_slop(Point::new(0.0, DRAG_THRESHOLD + 1.0), DRAG_THRESHOLD));
}

#[test]
fn negative_time_is_ignored() {
    let mut session = TouchSession::begin(Point::ZERO, Point::ZERO);
    session.accumulate(-1.0);
    assert_eq!(session.elapsed(), 0.0);
}

#[test]
fn pointer_event_builders() {
    let event = PointerEvent::moved(Point::new(1.0, 2.0)).with_id(7);
    assert_eq!(event.kind, PointerEventKind::Move);
    assert_eq!(event.id, 7);
    assert_eq!(event.position, Point::new(1.0, 2.0));
}
