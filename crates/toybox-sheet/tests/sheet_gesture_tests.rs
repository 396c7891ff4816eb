//! End-to-end gesture scenarios driven through the frame harness.

use toybox_testing::prelude::*;

const X: f32 = 540.0;

fn harness() -> SheetHarness {
    SheetHarness::new(SheetConfig::default()).expect("default config is valid")
}

#[test]
fn taps_cycle_through_every_detent() {
    let mut h = harness();
    let count = h.sheet().detents().len();
    for _ in 0..(count * 2) {
        let before = h.sheet().current_detent();
        h.tap(Point::new(X, 500.0));
        let expected = (before + 1) % count;
        assert_eq!(h.sheet().current_detent(), expected);
        h.settle();
        assert_eq!(h.sheet().position().y, h.detent_y(expected));
    }
    // Each full lap reaches the top once and wraps to the bottom once.
    assert_eq!(h.recorder().count(SheetEvent::Opened), 2);
    assert_eq!(h.recorder().count(SheetEvent::Closed), 2);
}

#[test]
fn fast_flick_up_jumps_one_detent() {
    let mut h = harness();
    h.drag(Point::new(X, 800.0), Point::new(X, 1400.0), 4);
    assert!(h.sheet().average_swipe_velocity() >= 500.0);
    assert_eq!(h.sheet().current_detent(), 1);

    h.settle();
    assert_eq!(h.sheet().position().y, h.detent_y(1));
    assert!(h.recorder().is_empty(), "middle detent emits nothing");
}

#[test]
fn fast_flick_down_from_top() {
    let mut h = harness();
    h.sheet_mut().animate_to_detent(2);
    h.settle();
    h.recorder().take();

    h.drag(Point::new(X, 1500.0), Point::new(X, 900.0), 4);
    assert_eq!(h.sheet().current_detent(), 1);
    h.settle();
    assert_eq!(h.sheet().position().y, h.detent_y(1));
}

#[test]
fn slow_drag_settles_on_nearest() {
    let mut h = harness();
    h.drag(Point::new(X, 800.0), Point::new(X, 860.0), 60);
    assert!(h.sheet().average_swipe_velocity() < 500.0);
    assert_eq!(h.sheet().current_detent(), 0);

    h.settle();
    assert_eq!(h.sheet().position().y, h.detent_y(0));
}

#[test]
fn open_close_round_trip_for_many_layouts() {
    let layouts: [&[f32]; 5] = [
        &[0.4, 0.7, 0.94],
        &[0.0, 1.0],
        &[0.25],
        &[0.1, 0.2, 0.3, 0.4, 0.5],
        &[0.94, 0.4, 0.7],
    ];
    for layout in layouts {
        let config = SheetConfig::default().with_detents(layout.iter().copied());
        let mut h = SheetHarness::new(config).expect("valid layout");
        h.sheet_mut().open();
        h.settle();
        h.sheet_mut().close();
        h.settle();
        assert_eq!(h.sheet().current_detent(), 0, "layout {:?}", layout);
        assert_eq!(h.sheet().position().y, h.detent_y(0), "layout {:?}", layout);
    }
}

#[test]
fn tap_interrupts_open_animation() {
    let mut h = harness();
    h.sheet_mut().open();
    h.advance(1);
    assert!(h.sheet().is_animating());

    h.tap(Point::new(X, 500.0));
    assert_eq!(h.sheet().current_detent(), 2);
    h.settle();
    assert_eq!(h.sheet().position().y, h.detent_y(2));
    assert_eq!(h.recorder().events(), vec![SheetEvent::Opened]);
}

#[test]
fn close_button_dismisses_after_grace_delay() {
    let mut h = harness();
    h.sheet_mut().open();
    h.settle();

    h.sheet_mut().request_close();
    h.advance(29);
    assert!(!h.sheet().is_dismissed());
    assert_eq!(h.sheet().position().y, h.detent_y(0));

    h.advance(2);
    assert!(h.sheet().is_dismissed());
    assert_eq!(
        h.recorder().events(),
        vec![SheetEvent::Closed, SheetEvent::Dismissed]
    );
}

#[test]
fn reference_height_slows_travel() {
    let mut plain = harness();
    plain.sheet_mut().open();
    let plain_frames = plain.settle();

    let config = SheetConfig::default().with_reference_height(DEFAULT_VIEWPORT_HEIGHT * 2.0);
    let mut scaled = SheetHarness::new(config).expect("valid config");
    assert_eq!(scaled.sheet().scale_factor(), 2.0);
    scaled.sheet_mut().open();
    let scaled_frames = scaled.settle();

    assert!(
        scaled_frames > plain_frames,
        "{} frames vs {}",
        scaled_frames,
        plain_frames
    );
}

#[test]
fn invalid_config_is_rejected_by_harness() {
    let result = SheetHarness::new(SheetConfig::default().with_detents([]));
    assert!(result.is_err());
}
