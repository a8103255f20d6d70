//! Peek protocol tests: delayed shallow reveal on edge touch, cancellation,
//! and seamless drag takeover

mod common;

use std::time::{Duration, Instant};

use common::{pt, settle, test_layout};
use slideout::{DrawerState, Edge, PointerEvent, PointerId};

/// Default edge band size over a 300 px drawer
const PEEK_OPENNESS: f32 = 20.0 / 300.0;

// ============================================================================
// Firing
// ============================================================================

#[test]
fn test_peek_fires_after_delay() {
    let (mut layout, _log) = test_layout(&[(Edge::Right, 300.0)]);
    let t0 = Instant::now();

    layout.handle_event(&PointerEvent::down(PointerId::PRIMARY, pt(790.0, 300.0), t0));
    assert!(!layout.drawer(Edge::Right).unwrap().is_peeking());

    // The deadline is armed for 160 ms out
    let deadline = layout.next_deadline().expect("peek scheduled");
    assert_eq!(deadline, t0 + Duration::from_millis(160));

    layout.tick(t0 + Duration::from_millis(170));
    assert!(layout.drawer(Edge::Right).unwrap().is_peeking());

    settle(&mut layout, t0 + Duration::from_millis(170));
    let openness = layout.openness(Edge::Right);
    assert!(
        (openness - PEEK_OPENNESS).abs() < 1e-5,
        "peeked at {} instead of the edge band depth",
        openness
    );
    // A shallow reveal is not "open"
    assert!(!layout.is_drawer_open(Edge::Right));
}

#[test]
fn test_peek_does_not_fire_early() {
    let (mut layout, _log) = test_layout(&[(Edge::Right, 300.0)]);
    let t0 = Instant::now();

    layout.handle_event(&PointerEvent::down(PointerId::PRIMARY, pt(790.0, 300.0), t0));
    layout.tick(t0 + Duration::from_millis(100));

    assert!(!layout.drawer(Edge::Right).unwrap().is_peeking());
    assert_eq!(layout.openness(Edge::Right), 0.0);
}

#[test]
fn test_touch_outside_band_never_peeks() {
    let (mut layout, _log) = test_layout(&[(Edge::Right, 300.0)]);
    let t0 = Instant::now();

    layout.handle_event(&PointerEvent::down(PointerId::PRIMARY, pt(400.0, 300.0), t0));

    assert!(layout.next_deadline().is_none());
    layout.tick(t0 + Duration::from_millis(500));
    assert_eq!(layout.openness(Edge::Right), 0.0);
}

#[test]
fn test_peek_release_closes_drawer() {
    let (mut layout, log) = test_layout(&[(Edge::Right, 300.0)]);
    let t0 = Instant::now();

    layout.handle_event(&PointerEvent::down(PointerId::PRIMARY, pt(790.0, 300.0), t0));
    layout.tick(t0 + Duration::from_millis(170));
    settle(&mut layout, t0 + Duration::from_millis(170));
    assert!(layout.is_drawer_visible(Edge::Right));

    // Lift without ever dragging
    let up = t0 + Duration::from_millis(400);
    layout.handle_event(&PointerEvent::up(PointerId::PRIMARY, pt(790.0, 300.0), up));
    settle(&mut layout, up);

    assert_eq!(layout.openness(Edge::Right), 0.0);
    assert!(!layout.drawer(Edge::Right).unwrap().is_peeking());
    // The drawer never settled open, so no opened/closed events
    assert_eq!(log.opened_count(Edge::Right), 0);
    assert_eq!(log.closed_count(Edge::Right), 0);
}

// ============================================================================
// Cancellation
// ============================================================================

#[test]
fn test_motion_past_slop_cancels_pending_peek() {
    let (mut layout, _log) = test_layout(&[(Edge::Right, 300.0)]);
    let t0 = Instant::now();

    layout.handle_event(&PointerEvent::down(PointerId::PRIMARY, pt(790.0, 300.0), t0));
    // Slide along the edge, perpendicular to the drawer's axis: no capture,
    // but clearly not a resting edge touch either
    layout.handle_event(&PointerEvent::moved(
        PointerId::PRIMARY,
        pt(790.0, 450.0),
        t0 + Duration::from_millis(30),
    ));

    assert!(layout.next_deadline().is_none());
    layout.tick(t0 + Duration::from_millis(300));
    assert!(!layout.drawer(Edge::Right).unwrap().is_peeking());
    assert_eq!(layout.openness(Edge::Right), 0.0);
}

#[test]
fn test_capture_before_deadline_cancels_peek() {
    let (mut layout, _log) = test_layout(&[(Edge::Right, 300.0)]);
    let t0 = Instant::now();

    layout.handle_event(&PointerEvent::down(PointerId::PRIMARY, pt(790.0, 300.0), t0));
    // A real drag starts well before the deadline
    layout.handle_event(&PointerEvent::moved(
        PointerId::PRIMARY,
        pt(760.0, 300.0),
        t0 + Duration::from_millis(30),
    ));
    assert_eq!(layout.state(), DrawerState::Dragging);
    assert!(layout.next_deadline().is_none());

    layout.tick(t0 + Duration::from_millis(300));
    assert!(!layout.drawer(Edge::Right).unwrap().is_peeking());
}

#[test]
fn test_peek_respects_locked_edge() {
    let (mut layout, _log) = test_layout(&[(Edge::Right, 300.0)]);
    layout
        .set_lock_mode(Edge::Right, slideout::LockMode::LockedClosed)
        .unwrap();
    let t0 = Instant::now();

    layout.handle_event(&PointerEvent::down(PointerId::PRIMARY, pt(790.0, 300.0), t0));
    layout.tick(t0 + Duration::from_millis(300));

    assert!(!layout.drawer(Edge::Right).unwrap().is_peeking());
    assert_eq!(layout.openness(Edge::Right), 0.0);
}

// ============================================================================
// Mutual exclusion and takeover
// ============================================================================

#[test]
fn test_peek_closes_other_open_drawer() {
    let (mut layout, log) = test_layout(&[(Edge::Left, 300.0), (Edge::Right, 300.0)]);
    layout.open_drawer(Edge::Left).unwrap();
    let t0 = settle(&mut layout, Instant::now());
    assert!(layout.is_drawer_open(Edge::Left));

    layout.handle_event(&PointerEvent::down(PointerId::PRIMARY, pt(790.0, 300.0), t0));
    layout.tick(t0 + Duration::from_millis(170));
    settle(&mut layout, t0 + Duration::from_millis(170));

    assert!(layout.drawer(Edge::Right).unwrap().is_peeking());
    assert_eq!(layout.openness(Edge::Left), 0.0);
    assert_eq!(log.closed_count(Edge::Left), 1);
}

#[test]
fn test_drag_takes_over_peek_without_jump() {
    let (mut layout, log) = test_layout(&[(Edge::Right, 300.0)]);
    let t0 = Instant::now();

    layout.handle_event(&PointerEvent::down(PointerId::PRIMARY, pt(790.0, 300.0), t0));
    layout.tick(t0 + Duration::from_millis(170));
    let peeked_at = settle(&mut layout, t0 + Duration::from_millis(170));
    let peeked = layout.openness(Edge::Right);
    assert!(peeked > 0.0);

    // Without lifting, pull the drawer out the rest of the way
    let mut t = peeked_at;
    for i in 1..=8u64 {
        t = peeked_at + Duration::from_millis(20 * i);
        let x = 790.0 - 180.0 * i as f32 / 8.0;
        layout.handle_event(&PointerEvent::moved(PointerId::PRIMARY, pt(x, 300.0), t));
    }
    assert_eq!(layout.state(), DrawerState::Dragging);
    assert!(!layout.drawer(Edge::Right).unwrap().is_peeking());

    // The drag picked up from the peeked position: openness grew by the
    // dragged distance, and no slide sample jumped
    let expected = peeked + 180.0 / 300.0;
    assert!(
        (layout.openness(Edge::Right) - expected).abs() < 0.02,
        "openness {} after takeover, expected about {}",
        layout.openness(Edge::Right),
        expected
    );
    let slides = log.slides(Edge::Right);
    for pair in slides.windows(2) {
        assert!(
            (pair[1] - pair[0]).abs() < 0.15,
            "slide jumped from {} to {}",
            pair[0],
            pair[1]
        );
    }
}

#[test]
fn test_reschedule_replaces_pending_deadline() {
    let (mut layout, _log) = test_layout(&[(Edge::Right, 300.0)]);
    let t0 = Instant::now();

    layout.handle_event(&PointerEvent::down(PointerId::PRIMARY, pt(790.0, 300.0), t0));
    let first = layout.next_deadline().unwrap();

    // A second finger lands in the band; the deadline moves, it does not
    // double up
    let t1 = t0 + Duration::from_millis(80);
    layout.handle_event(&PointerEvent::down(PointerId(1), pt(795.0, 200.0), t1));
    let second = layout.next_deadline().unwrap();
    assert_eq!(second, t1 + Duration::from_millis(160));
    assert!(second > first);

    // The original deadline passing fires nothing
    layout.tick(first + Duration::from_millis(1));
    assert!(!layout.drawer(Edge::Right).unwrap().is_peeking());

    layout.tick(second);
    assert!(layout.drawer(Edge::Right).unwrap().is_peeking());
}
