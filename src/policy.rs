//! Edge-specific interaction decisions
//!
//! One policy is paired with each drag controller. The controller owns the
//! mechanics of a gesture; the policy owns the judgment calls: whether a
//! drawer may be captured at all, how a raw position maps to openness,
//! where a release should snap, and when an undisturbed edge touch turns
//! into a peek.

use std::time::{Duration, Instant};

use crate::config::LayoutConfig;
use crate::drawer::{Drawer, LockMode};
use crate::edge::Edge;
use crate::geometry::Size;

/// Where a released drawer settles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapTarget {
    Open,
    Closed,
}

/// Decision logic for one edge
#[derive(Debug)]
pub(crate) struct EdgePolicy {
    edge: Edge,
    min_fling_velocity: f32,
    peek_delay: Duration,
    peek_deadline: Option<Instant>,
}

impl EdgePolicy {
    pub(crate) fn new(edge: Edge, config: &LayoutConfig) -> Self {
        Self {
            edge,
            min_fling_velocity: config.min_fling_velocity,
            peek_delay: Duration::from_millis(config.peek_delay_ms),
            peek_deadline: None,
        }
    }

    /// A drawer may only be captured by user interaction while unlocked
    pub(crate) fn can_capture(&self, drawer: &Drawer) -> bool {
        drawer.lock_mode() == LockMode::Unlocked
    }

    /// Map an along-axis position to openness in [0, 1]
    ///
    /// A zero extent has no meaningful openness; it reads as closed.
    pub(crate) fn position_to_openness(&self, position: f32, extent: f32, bounds: Size) -> f32 {
        if extent <= 0.0 {
            return 0.0;
        }
        let revealed = match self.edge {
            Edge::Left | Edge::Top => extent + position,
            Edge::Right | Edge::Bottom => self.edge.container_extent(bounds) - position,
        };
        (revealed / extent).clamp(0.0, 1.0)
    }

    /// Inverse of [`position_to_openness`](Self::position_to_openness)
    pub(crate) fn openness_to_position(&self, openness: f32, extent: f32, bounds: Size) -> f32 {
        self.edge.closed_position(extent, bounds) + self.edge.open_sign() * openness * extent
    }

    /// Snap decision on release
    ///
    /// A fling above the velocity threshold wins outright in its own
    /// direction. Slow releases fall back to position, with the midpoint
    /// counting as open.
    pub(crate) fn snap_target(&self, openness: f32, velocity_along: f32) -> SnapTarget {
        let toward_open = velocity_along * self.edge.open_sign();
        if toward_open.abs() >= self.min_fling_velocity {
            if toward_open > 0.0 {
                SnapTarget::Open
            } else {
                SnapTarget::Closed
            }
        } else if openness >= 0.5 {
            SnapTarget::Open
        } else {
            SnapTarget::Closed
        }
    }

    /// Arm the peek timer. An already-pending deadline is replaced, never
    /// doubled.
    pub(crate) fn schedule_peek(&mut self, now: Instant) {
        self.peek_deadline = Some(now + self.peek_delay);
    }

    pub(crate) fn cancel_peek(&mut self) {
        self.peek_deadline = None;
    }

    pub(crate) fn peek_deadline(&self) -> Option<Instant> {
        self.peek_deadline
    }

    /// Consume the deadline if it has passed
    pub(crate) fn take_due_peek(&mut self, now: Instant) -> bool {
        match self.peek_deadline {
            Some(deadline) if now >= deadline => {
                self.peek_deadline = None;
                true
            }
            _ => false,
        }
    }
}
