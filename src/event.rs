//! Canonical pointer-event stream consumed by the container
//!
//! The host (window system glue, test harness) converts its native input
//! into this small event vocabulary. The container never hit-tests against
//! arbitrary shapes, only rectangular edge bands and drawer bounding
//! boxes, using the coordinates carried here.

use std::time::Instant;

use crate::geometry::Point;

/// Identifies one finger/pointer within a gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PointerId(pub u64);

impl PointerId {
    /// The primary pointer (the mouse, or the first finger down)
    pub const PRIMARY: PointerId = PointerId(0);
}

/// Release velocity in pixels per second
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Velocity {
    pub x: f32,
    pub y: f32,
}

impl Velocity {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Phase of a pointer event
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerPhase {
    Down,
    Move,
    /// Release. The host may supply a derived velocity; when absent the
    /// controller computes one from its own recent samples.
    Up { velocity: Option<Velocity> },
    Cancel,
}

/// One pointer event in container coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub phase: PointerPhase,
    pub pointer: PointerId,
    pub position: Point,
    /// When the event occurred. Drives velocity tracking, the peek delay,
    /// and settle-animation start times.
    pub time: Instant,
}

impl PointerEvent {
    pub fn down(pointer: PointerId, position: Point, time: Instant) -> Self {
        Self {
            phase: PointerPhase::Down,
            pointer,
            position,
            time,
        }
    }

    pub fn moved(pointer: PointerId, position: Point, time: Instant) -> Self {
        Self {
            phase: PointerPhase::Move,
            pointer,
            position,
            time,
        }
    }

    pub fn up(pointer: PointerId, position: Point, time: Instant) -> Self {
        Self {
            phase: PointerPhase::Up { velocity: None },
            pointer,
            position,
            time,
        }
    }

    pub fn up_with_velocity(
        pointer: PointerId,
        position: Point,
        velocity: Velocity,
        time: Instant,
    ) -> Self {
        Self {
            phase: PointerPhase::Up {
                velocity: Some(velocity),
            },
            pointer,
            position,
            time,
        }
    }

    pub fn cancel(pointer: PointerId, position: Point, time: Instant) -> Self {
        Self {
            phase: PointerPhase::Cancel,
            pointer,
            position,
            time,
        }
    }
}
