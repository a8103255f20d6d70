//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use slideout::{
    DrawerLayout, DrawerListener, DrawerState, Edge, LayoutConfig, Point, PointerEvent, PointerId,
    Size,
};

/// Container dimensions used by every test
pub const BOUNDS: Size = Size {
    width: 800.0,
    height: 600.0,
};

/// One recorded listener callback
#[derive(Debug, Clone, PartialEq)]
pub enum Recorded {
    Slide(Edge, f32),
    Opened(Edge),
    Closed(Edge),
    StateChanged(DrawerState),
}

/// Shared handle onto the callbacks a layout dispatched
#[derive(Clone, Default)]
pub struct EventLog {
    events: Rc<RefCell<Vec<Recorded>>>,
}

impl EventLog {
    pub fn events(&self) -> Vec<Recorded> {
        self.events.borrow().clone()
    }

    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }

    pub fn opened_count(&self, edge: Edge) -> usize {
        self.events
            .borrow()
            .iter()
            .filter(|e| **e == Recorded::Opened(edge))
            .count()
    }

    pub fn closed_count(&self, edge: Edge) -> usize {
        self.events
            .borrow()
            .iter()
            .filter(|e| **e == Recorded::Closed(edge))
            .count()
    }

    /// All openness values dispatched for an edge, in order
    pub fn slides(&self, edge: Edge) -> Vec<f32> {
        self.events
            .borrow()
            .iter()
            .filter_map(|e| match e {
                Recorded::Slide(slide_edge, openness) if *slide_edge == edge => Some(*openness),
                _ => None,
            })
            .collect()
    }

    /// All aggregate states dispatched, in order
    pub fn states(&self) -> Vec<DrawerState> {
        self.events
            .borrow()
            .iter()
            .filter_map(|e| match e {
                Recorded::StateChanged(state) => Some(*state),
                _ => None,
            })
            .collect()
    }
}

struct RecordingListener {
    log: EventLog,
}

impl DrawerListener for RecordingListener {
    fn on_drawer_slide(&mut self, edge: Edge, openness: f32) {
        self.log
            .events
            .borrow_mut()
            .push(Recorded::Slide(edge, openness));
    }

    fn on_drawer_opened(&mut self, edge: Edge) {
        self.log.events.borrow_mut().push(Recorded::Opened(edge));
    }

    fn on_drawer_closed(&mut self, edge: Edge) {
        self.log.events.borrow_mut().push(Recorded::Closed(edge));
    }

    fn on_drawer_state_changed(&mut self, state: DrawerState) {
        self.log
            .events
            .borrow_mut()
            .push(Recorded::StateChanged(state));
    }
}

/// Build a laid-out 800x600 container with the given drawers and a
/// recording listener
pub fn test_layout(drawers: &[(Edge, f32)]) -> (DrawerLayout, EventLog) {
    let mut layout = DrawerLayout::new(LayoutConfig::default());
    let log = EventLog::default();
    layout.set_listener(Box::new(RecordingListener { log: log.clone() }));
    for &(edge, extent) in drawers {
        layout.add_drawer(edge).expect("edge free");
        layout.set_drawer_extent(edge, extent).expect("drawer added");
    }
    layout.finish_layout(BOUNDS);
    (layout, log)
}

pub fn pt(x: f32, y: f32) -> Point {
    Point::new(x, y)
}

/// Interpolate `steps` move events from `from` to `to`, `step_ms` apart.
/// Does not release the pointer.
pub fn drag_moves(
    layout: &mut DrawerLayout,
    from: Point,
    to: Point,
    steps: u32,
    start: Instant,
    step_ms: u64,
) -> Instant {
    let mut t = start;
    layout.handle_event(&PointerEvent::down(PointerId::PRIMARY, from, t));
    for i in 1..=steps {
        t = start + Duration::from_millis(step_ms * u64::from(i));
        let f = i as f32 / steps as f32;
        let p = pt(from.x + (to.x - from.x) * f, from.y + (to.y - from.y) * f);
        layout.handle_event(&PointerEvent::moved(PointerId::PRIMARY, p, t));
    }
    t
}

/// Like [`drag_moves`], but with a frame tick after every move, the way a
/// live host interleaves input with its render loop. Lets animations on
/// other edges advance while the drag runs.
pub fn ticked_drag_moves(
    layout: &mut DrawerLayout,
    from: Point,
    to: Point,
    steps: u32,
    start: Instant,
    step_ms: u64,
) -> Instant {
    let mut t = start;
    layout.handle_event(&PointerEvent::down(PointerId::PRIMARY, from, t));
    layout.tick(t);
    for i in 1..=steps {
        t = start + Duration::from_millis(step_ms * u64::from(i));
        let f = i as f32 / steps as f32;
        let p = pt(from.x + (to.x - from.x) * f, from.y + (to.y - from.y) * f);
        layout.handle_event(&PointerEvent::moved(PointerId::PRIMARY, p, t));
        layout.tick(t);
    }
    t
}

/// Full drag gesture with a slow release: the pointer rests at `to` long
/// enough that the tracked release velocity is zero, then lifts. Returns
/// the time of the up event.
pub fn slow_drag(layout: &mut DrawerLayout, from: Point, to: Point, start: Instant) -> Instant {
    let t = drag_moves(layout, from, to, 8, start, 20);
    // Rest at the destination so the velocity window drains
    let hold = t + Duration::from_millis(200);
    layout.handle_event(&PointerEvent::moved(PointerId::PRIMARY, to, hold));
    let up = hold + Duration::from_millis(10);
    layout.handle_event(&PointerEvent::up(PointerId::PRIMARY, to, up));
    up
}

/// Full drag gesture released at speed: rapid moves straight into the up,
/// so the tracked velocity is the drag velocity
pub fn fast_drag(layout: &mut DrawerLayout, from: Point, to: Point, start: Instant) -> Instant {
    let t = drag_moves(layout, from, to, 5, start, 10);
    let up = t + Duration::from_millis(10);
    layout.handle_event(&PointerEvent::up(PointerId::PRIMARY, to, up));
    up
}

/// Tick until every animation completes. Panics if the layout never goes
/// idle; no settle should outlive a couple of seconds of frames.
pub fn settle(layout: &mut DrawerLayout, from: Instant) -> Instant {
    let mut t = from;
    for _ in 0..240 {
        t += Duration::from_millis(16);
        if !layout.tick(t) {
            return t;
        }
    }
    panic!("layout still animating after {:?}", t - from);
}
