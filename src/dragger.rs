//! Per-edge drag controller
//!
//! One `EdgeDragger` exists per container edge, all four instances of the
//! same type parameterized by their [`Edge`] descriptor. A dragger owns the
//! low-level pointer state machine for its edge: touch-slop detection,
//! capture arbitration, velocity tracking, clamped positioning, and
//! settle-by-animation.
//!
//! Draggers never call back into the container. Every observable change is
//! returned as a [`DragEffect`] and the container interprets the batch:
//! this keeps the fan-out ("all four controllers see every event") free of
//! re-entrancy.
//!
//! Both the interception path and the processing path feed the same state
//! machine, and the host may deliver one event through both. This is safe
//! by construction: the drag position derives from the absolute pointer
//! position minus the grab offset (never from accumulated deltas), and the
//! velocity tracker drops same-timestamp samples.

use std::time::Instant;

use crate::config::LayoutConfig;
use crate::drawer::{Drawer, DrawerState};
use crate::edge::{Axis, Edge};
use crate::event::{PointerEvent, PointerId, PointerPhase, Velocity};
use crate::geometry::{Point, Size};
use crate::policy::{EdgePolicy, SnapTarget};
use crate::settle::{settle_duration, SettleAnimation};
use crate::velocity::VelocityTracker;

/// Observable outcome of feeding an event to a dragger, interpreted by the
/// container
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum DragEffect {
    /// A pointer went down inside this edge's hit band; the container may
    /// arm the peek timer
    EdgeTouched,
    /// This dragger claimed the gesture for its drawer
    Captured,
    /// The drawer's openness changed to the carried value
    Moved { openness: f32 },
    /// The dragger transitioned phases; the container re-aggregates
    Phase { state: DrawerState },
}

/// Read-only view of the world a dragger needs while handling one event
#[derive(Clone, Copy)]
pub(crate) struct DragContext<'a> {
    pub drawer: Option<&'a Drawer>,
    pub bounds: Size,
    /// Another edge already owns the current gesture
    pub claimed: bool,
}

#[derive(Debug)]
pub(crate) struct EdgeDragger {
    edge: Edge,
    config: LayoutConfig,
    phase: DrawerState,
    /// Pointers seen this gesture, with where they first went down
    initial_points: Vec<(PointerId, Point)>,
    active_pointer: Option<PointerId>,
    captured: bool,
    /// Along-axis offset between the active pointer and the drawer's
    /// leading corner, fixed at capture so takeover never jumps
    grab_offset: f32,
    edge_touched: bool,
    velocity: VelocityTracker,
    settle: Option<SettleAnimation>,
}

impl EdgeDragger {
    pub(crate) fn new(edge: Edge, config: &LayoutConfig) -> Self {
        Self {
            edge,
            config: config.clone(),
            phase: DrawerState::Idle,
            initial_points: Vec::new(),
            active_pointer: None,
            captured: false,
            grab_offset: 0.0,
            edge_touched: false,
            velocity: VelocityTracker::new(),
            settle: None,
        }
    }

    pub(crate) fn phase(&self) -> DrawerState {
        self.phase
    }

    pub(crate) fn is_dragging(&self) -> bool {
        self.phase == DrawerState::Dragging
    }

    /// Feed one pointer event through the state machine
    pub(crate) fn feed(
        &mut self,
        event: &PointerEvent,
        policy: &EdgePolicy,
        ctx: DragContext<'_>,
    ) -> Vec<DragEffect> {
        match event.phase {
            PointerPhase::Down => self.on_down(event, policy, ctx),
            PointerPhase::Move => self.on_move(event, policy, ctx),
            PointerPhase::Up { velocity } => self.on_up(event, velocity, policy, ctx),
            PointerPhase::Cancel => self.on_cancel(event, policy, ctx),
        }
    }

    fn on_down(
        &mut self,
        event: &PointerEvent,
        policy: &EdgePolicy,
        ctx: DragContext<'_>,
    ) -> Vec<DragEffect> {
        let mut effects = Vec::new();

        // First pointer down starts a fresh gesture
        if self.initial_points.is_empty() {
            self.edge_touched = false;
        }
        self.set_initial(event.pointer, event.position);
        if !self.captured {
            self.velocity.clear();
        }
        if !self.captured || self.active_pointer == Some(event.pointer) {
            self.velocity.add_sample(event.time, event.position);
        }

        let Some(drawer) = ctx.drawer else {
            return effects;
        };

        if self
            .edge
            .band_rect(self.config.edge_size, ctx.bounds)
            .contains(event.position)
        {
            self.edge_touched = true;
            effects.push(DragEffect::EdgeTouched);
        }

        // A settling drawer can be caught under the finger
        if self.phase == DrawerState::Settling && !ctx.claimed && policy.can_capture(drawer) {
            let position =
                policy.openness_to_position(drawer.openness(), drawer.extent(), ctx.bounds);
            let rect = self.edge.drawer_rect(position, drawer.extent(), ctx.bounds);
            if rect.contains(event.position) {
                self.settle = None;
                self.capture(
                    drawer,
                    policy,
                    ctx.bounds,
                    event.pointer,
                    event.position,
                    &mut effects,
                );
            }
        }

        effects
    }

    fn on_move(
        &mut self,
        event: &PointerEvent,
        policy: &EdgePolicy,
        ctx: DragContext<'_>,
    ) -> Vec<DragEffect> {
        let mut effects = Vec::new();
        let Some(drawer) = ctx.drawer else {
            return effects;
        };

        if !self.captured {
            let Some(initial) = self.initial_point(event.pointer) else {
                // Move with no matching down on record; nothing to track
                return effects;
            };
            if ctx.claimed || !policy.can_capture(drawer) {
                return effects;
            }
            if drawer.extent() <= 0.0 || self.edge.container_extent(ctx.bounds) <= 0.0 {
                // Degenerate geometry reads as closed; the interaction
                // simply does not begin.
                return effects;
            }
            let along_delta = self.edge.along(event.position) - self.edge.along(initial);
            if along_delta.abs() < self.config.touch_slop {
                return effects;
            }
            let inward = along_delta * self.edge.open_sign() > 0.0;
            let from_edge = self.edge_touched && inward;
            let on_body = drawer.is_visible() && {
                let position =
                    policy.openness_to_position(drawer.openness(), drawer.extent(), ctx.bounds);
                self.edge
                    .drawer_rect(position, drawer.extent(), ctx.bounds)
                    .contains(initial)
            };
            if !(from_edge || on_body) {
                return effects;
            }
            self.settle = None;
            self.capture(drawer, policy, ctx.bounds, event.pointer, initial, &mut effects);
        }

        if self.captured && self.active_pointer == Some(event.pointer) {
            self.velocity.add_sample(event.time, event.position);
            let raw = self.edge.along(event.position) - self.grab_offset;
            let clamped = self.edge.clamp_position(raw, drawer.extent(), ctx.bounds);
            let openness = policy.position_to_openness(clamped, drawer.extent(), ctx.bounds);
            if openness != drawer.openness() {
                effects.push(DragEffect::Moved { openness });
            }
        }

        effects
    }

    fn on_up(
        &mut self,
        event: &PointerEvent,
        host_velocity: Option<Velocity>,
        policy: &EdgePolicy,
        ctx: DragContext<'_>,
    ) -> Vec<DragEffect> {
        let mut effects = Vec::new();
        let known_pointer = self.initial_point(event.pointer).is_some();

        if self.captured && self.active_pointer == Some(event.pointer) {
            match ctx.drawer {
                Some(drawer) => {
                    self.velocity.add_sample(event.time, event.position);
                    let (vx, vy) = match host_velocity {
                        Some(v) => (v.x, v.y),
                        None => self.velocity.velocity(),
                    };
                    let along_velocity = match self.edge.axis() {
                        Axis::Horizontal => vx,
                        Axis::Vertical => vy,
                    };
                    self.release(drawer, policy, along_velocity, event.time, &mut effects);
                }
                None => {
                    // Drawer vanished mid-drag; drop the capture.
                    self.captured = false;
                    self.active_pointer = None;
                    self.set_phase(DrawerState::Idle, &mut effects);
                }
            }
        } else if !known_pointer && !self.initial_points.is_empty() {
            // An unknown pointer lifted mid-gesture: the host delivered a
            // malformed sequence. Absorb it by resetting to a clean slate.
            tracing::warn!(
                edge = %self.edge,
                pointer = ?event.pointer,
                "pointer up without a matching down; resetting gesture state"
            );
            self.initial_points.clear();
            self.edge_touched = false;
        }

        self.clear_initial(event.pointer);
        if self.initial_points.is_empty() {
            self.edge_touched = false;
        }
        effects
    }

    fn on_cancel(
        &mut self,
        event: &PointerEvent,
        policy: &EdgePolicy,
        ctx: DragContext<'_>,
    ) -> Vec<DragEffect> {
        let mut effects = Vec::new();
        if self.captured && self.active_pointer == Some(event.pointer) {
            if let Some(drawer) = ctx.drawer {
                // A canceled drag settles by position alone
                self.release(drawer, policy, 0.0, event.time, &mut effects);
            } else {
                self.captured = false;
                self.active_pointer = None;
                self.set_phase(DrawerState::Idle, &mut effects);
            }
        }
        self.clear_initial(event.pointer);
        if self.initial_points.is_empty() {
            self.edge_touched = false;
        }
        effects
    }

    /// Claim the gesture. `anchor` is the capturing pointer's initial
    /// down point: motion since the anchor is applied on top of the
    /// drawer's position at capture, so a drag that starts on a peeked or
    /// settling drawer takes over from where the drawer already is, and a
    /// drag from the bare edge reveals exactly the distance traveled.
    fn capture(
        &mut self,
        drawer: &Drawer,
        policy: &EdgePolicy,
        bounds: Size,
        pointer: PointerId,
        anchor: Point,
        effects: &mut Vec<DragEffect>,
    ) {
        self.captured = true;
        self.active_pointer = Some(pointer);
        let current = policy.openness_to_position(drawer.openness(), drawer.extent(), bounds);
        self.grab_offset = self.edge.along(anchor) - current;
        effects.push(DragEffect::Captured);
        self.set_phase(DrawerState::Dragging, effects);
        tracing::debug!(edge = %self.edge, "drawer captured");
    }

    fn release(
        &mut self,
        drawer: &Drawer,
        policy: &EdgePolicy,
        along_velocity: f32,
        now: Instant,
        effects: &mut Vec<DragEffect>,
    ) {
        let target = match policy.snap_target(drawer.openness(), along_velocity) {
            SnapTarget::Open => 1.0,
            SnapTarget::Closed => 0.0,
        };
        tracing::debug!(
            edge = %self.edge,
            openness = drawer.openness(),
            velocity = along_velocity,
            target,
            "drawer released"
        );
        self.captured = false;
        self.active_pointer = None;
        self.begin_settle(drawer.openness(), target, drawer.extent(), along_velocity, now, effects);
    }

    fn begin_settle(
        &mut self,
        from: f32,
        to: f32,
        extent: f32,
        velocity: f32,
        now: Instant,
        effects: &mut Vec<DragEffect>,
    ) {
        if from == to {
            // Already there; land immediately with the exact value.
            self.settle = None;
            effects.push(DragEffect::Moved { openness: to });
            self.set_phase(DrawerState::Idle, effects);
            return;
        }
        let duration = settle_duration(from, to, extent, velocity, &self.config);
        self.settle = Some(SettleAnimation::new(from, to, now, duration));
        self.set_phase(DrawerState::Settling, effects);
    }

    /// Advance the settle animation one frame. Returns whether more frames
    /// are needed, plus effects to apply.
    pub(crate) fn continue_settling(&mut self, now: Instant) -> (bool, Vec<DragEffect>) {
        let mut effects = Vec::new();
        if self.phase != DrawerState::Settling {
            return (false, effects);
        }
        let Some(anim) = self.settle else {
            // Settling with no animation is an internal inconsistency;
            // recover to idle.
            tracing::warn!(edge = %self.edge, "settling without an animation; going idle");
            self.set_phase(DrawerState::Idle, &mut effects);
            return (false, effects);
        };
        let (value, done) = anim.value_at(now);
        effects.push(DragEffect::Moved { openness: value });
        if done {
            self.settle = None;
            self.set_phase(DrawerState::Idle, &mut effects);
            (false, effects)
        } else {
            (true, effects)
        }
    }

    /// Begin animating toward `target` openness from `current`. Returns
    /// whether an animation actually started (false when already there).
    pub(crate) fn smooth_slide_to(
        &mut self,
        target: f32,
        current: f32,
        extent: f32,
        now: Instant,
    ) -> (bool, Vec<DragEffect>) {
        let mut effects = Vec::new();
        self.captured = false;
        self.active_pointer = None;
        if current == target && self.settle.map_or(true, |a| a.target() == target) {
            self.settle = None;
            self.set_phase(DrawerState::Idle, &mut effects);
            return (false, effects);
        }
        let duration = settle_duration(current, target, extent, 0.0, &self.config);
        self.settle = Some(SettleAnimation::new(current, target, now, duration));
        self.set_phase(DrawerState::Settling, &mut effects);
        (true, effects)
    }

    /// Hard reset to idle: discards any captured drawer and in-flight
    /// animation without dispatching a settle. Used when locking an edge,
    /// removing a drawer, or detaching from the display surface.
    pub(crate) fn cancel(&mut self) -> Vec<DragEffect> {
        let mut effects = Vec::new();
        self.captured = false;
        self.active_pointer = None;
        self.settle = None;
        self.initial_points.clear();
        self.edge_touched = false;
        self.velocity.clear();
        self.set_phase(DrawerState::Idle, &mut effects);
        effects
    }

    fn set_phase(&mut self, phase: DrawerState, effects: &mut Vec<DragEffect>) {
        if self.phase != phase {
            self.phase = phase;
            effects.push(DragEffect::Phase { state: phase });
        }
    }

    fn set_initial(&mut self, pointer: PointerId, position: Point) {
        match self.initial_points.iter_mut().find(|(p, _)| *p == pointer) {
            Some(entry) => entry.1 = position,
            None => self.initial_points.push((pointer, position)),
        }
    }

    fn initial_point(&self, pointer: PointerId) -> Option<Point> {
        self.initial_points
            .iter()
            .find(|(p, _)| *p == pointer)
            .map(|(_, pos)| *pos)
    }

    fn clear_initial(&mut self, pointer: PointerId) {
        self.initial_points.retain(|(p, _)| *p != pointer);
    }
}
