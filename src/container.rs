//! Drawer container orchestration
//!
//! [`DrawerLayout`] owns the four per-edge (dragger, policy) pairs and the
//! drawer records, fans pointer events out to every edge, arbitrates which
//! edge owns a gesture, manages lock modes, drives the open/close/peek
//! operations, and aggregates the per-edge motion states into one
//! container state with exactly-once lifecycle dispatch.
//!
//! The layout does not draw and does not run an event loop. The host:
//! 1. registers drawers and supplies their extents from its layout pass,
//! 2. routes pointer events through [`should_intercept`](DrawerLayout::should_intercept)
//!    and [`handle_event`](DrawerLayout::handle_event),
//! 3. calls [`tick`](DrawerLayout::tick) once per frame while it returns
//!    true (and schedules a wakeup at [`next_deadline`](DrawerLayout::next_deadline)
//!    for pending peeks),
//! 4. reads openness/scrim/shadow values back when painting.

use std::time::Instant;

use crate::config::LayoutConfig;
use crate::dragger::{DragContext, DragEffect, EdgeDragger};
use crate::drawer::{Drawer, DrawerState, LockMode};
use crate::edge::{Edge, EdgeMap};
use crate::event::{PointerEvent, PointerPhase};
use crate::geometry::{Point, Rect, Size};
use crate::policy::EdgePolicy;

/// Observer for drawer lifecycle events
///
/// All methods default to no-ops; implement the ones you care about.
/// Callbacks fire synchronously from the thread driving events.
pub trait DrawerListener {
    /// The drawer's revealed fraction changed
    fn on_drawer_slide(&mut self, edge: Edge, openness: f32) {
        let _ = (edge, openness);
    }

    /// The drawer settled fully open
    fn on_drawer_opened(&mut self, edge: Edge) {
        let _ = edge;
    }

    /// The drawer settled fully closed
    fn on_drawer_closed(&mut self, edge: Edge) {
        let _ = edge;
    }

    /// The aggregate motion state changed
    fn on_drawer_state_changed(&mut self, state: DrawerState) {
        let _ = state;
    }
}

/// Configuration errors surfaced synchronously at the call site
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawerError {
    /// No drawer occupies the named edge
    NoDrawer(Edge),
    /// A drawer already occupies the named edge
    EdgeOccupied(Edge),
}

impl std::fmt::Display for DrawerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DrawerError::NoDrawer(edge) => {
                write!(f, "no drawer anchored to the {} edge", edge)
            }
            DrawerError::EdgeOccupied(edge) => {
                write!(f, "a drawer already occupies the {} edge", edge)
            }
        }
    }
}

impl std::error::Error for DrawerError {}

/// Interactive container hosting up to four edge-anchored drawers
pub struct DrawerLayout {
    config: LayoutConfig,
    bounds: Size,
    first_layout: bool,
    drawers: EdgeMap<Option<Drawer>>,
    draggers: EdgeMap<EdgeDragger>,
    policies: EdgeMap<EdgePolicy>,
    state: DrawerState,
    scrim_opacity: f32,
    /// Edge that owns the current gesture; first claim wins
    gesture_owner: Option<Edge>,
    initial_motion: Option<Point>,
    /// Child views had their touch canceled this gesture (peek started);
    /// keeps interception sticky until the next down/up/cancel
    children_canceled: bool,
    listener: Option<Box<dyn DrawerListener>>,
}

impl DrawerLayout {
    pub fn new(config: LayoutConfig) -> Self {
        let draggers = EdgeMap::from_fn(|edge| EdgeDragger::new(edge, &config));
        let policies = EdgeMap::from_fn(|edge| EdgePolicy::new(edge, &config));
        Self {
            config,
            bounds: Size::default(),
            first_layout: true,
            drawers: EdgeMap::from_fn(|_| None),
            draggers,
            policies,
            state: DrawerState::Idle,
            scrim_opacity: 0.0,
            gesture_owner: None,
            initial_motion: None,
            children_canceled: false,
            listener: None,
        }
    }

    /// Set the lifecycle observer, replacing any previous one
    pub fn set_listener(&mut self, listener: Box<dyn DrawerListener>) {
        self.listener = Some(listener);
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    // ========================================================================
    // Drawer registration and the layout collaborator
    // ========================================================================

    /// Register a drawer on an edge. At most one drawer per edge.
    pub fn add_drawer(&mut self, edge: Edge) -> Result<(), DrawerError> {
        let slot = self.drawers.get_mut(edge);
        if slot.is_some() {
            return Err(DrawerError::EdgeOccupied(edge));
        }
        *slot = Some(Drawer::new(edge));
        tracing::debug!(edge = %edge, "drawer added");
        Ok(())
    }

    /// Remove the drawer on an edge, canceling any interaction with it
    pub fn remove_drawer(&mut self, edge: Edge) -> Result<(), DrawerError> {
        if self.drawers.get(edge).is_none() {
            return Err(DrawerError::NoDrawer(edge));
        }
        let effects = self.draggers.get_mut(edge).cancel();
        self.apply_effects(edge, effects, Instant::now());
        self.policies.get_mut(edge).cancel_peek();
        if self.gesture_owner == Some(edge) {
            self.gesture_owner = None;
        }
        *self.drawers.get_mut(edge) = None;
        self.recompute_scrim();
        tracing::debug!(edge = %edge, "drawer removed");
        Ok(())
    }

    /// Set a drawer's size along its sliding axis. Called by the external
    /// layout pass; user code never positions drawers directly.
    pub fn set_drawer_extent(&mut self, edge: Edge, extent: f32) -> Result<(), DrawerError> {
        match self.drawers.get_mut(edge) {
            Some(drawer) => {
                drawer.extent = extent.max(0.0);
                Ok(())
            }
            None => Err(DrawerError::NoDrawer(edge)),
        }
    }

    /// Record the container bounds and complete a layout pass
    ///
    /// The first completed pass switches [`open_drawer`](Self::open_drawer)
    /// and [`close_drawer`](Self::close_drawer) from instantaneous to
    /// animated behavior.
    pub fn finish_layout(&mut self, bounds: Size) {
        self.bounds = bounds;
        self.first_layout = false;
    }

    /// Forget the display surface: cancels all interaction and makes the
    /// next open/close instantaneous until a new layout pass completes
    pub fn detach(&mut self) {
        for edge in Edge::ALL {
            let effects = self.draggers.get_mut(edge).cancel();
            self.apply_effects(edge, effects, Instant::now());
            self.policies.get_mut(edge).cancel_peek();
        }
        self.gesture_owner = None;
        self.initial_motion = None;
        self.children_canceled = false;
        self.first_layout = true;
    }

    // ========================================================================
    // Public operations
    // ========================================================================

    /// Reveal the drawer on `edge`
    ///
    /// Animated after the first layout pass; before it, openness is set
    /// directly since the geometry is not yet known.
    pub fn open_drawer(&mut self, edge: Edge) -> Result<(), DrawerError> {
        if self.drawers.get(edge).is_none() {
            return Err(DrawerError::NoDrawer(edge));
        }
        tracing::debug!(edge = %edge, "open drawer requested");
        if self.first_layout {
            if let Some(drawer) = self.drawers.get_mut(edge) {
                drawer.openness = 1.0;
                drawer.known_open = true;
            }
            // At most one drawer is ever open; pre-layout opens included
            for other in Edge::ALL {
                if other == edge {
                    continue;
                }
                if let Some(drawer) = self.drawers.get_mut(other) {
                    drawer.openness = 0.0;
                    drawer.known_open = false;
                    drawer.is_peeking = false;
                }
            }
            self.recompute_scrim();
        } else {
            self.smooth_slide(edge, 1.0, Instant::now());
        }
        Ok(())
    }

    /// Hide the drawer on `edge`; animated after the first layout pass
    pub fn close_drawer(&mut self, edge: Edge) -> Result<(), DrawerError> {
        if self.drawers.get(edge).is_none() {
            return Err(DrawerError::NoDrawer(edge));
        }
        tracing::debug!(edge = %edge, "close drawer requested");
        if self.first_layout {
            if let Some(drawer) = self.drawers.get_mut(edge) {
                drawer.openness = 0.0;
                drawer.known_open = false;
                drawer.is_peeking = false;
            }
            self.recompute_scrim();
        } else {
            self.smooth_slide(edge, 0.0, Instant::now());
        }
        Ok(())
    }

    /// Close every drawer by animating it out of view
    pub fn close_drawers(&mut self) {
        self.close_drawers_inner(false, Instant::now());
    }

    /// Change a drawer's lock mode
    ///
    /// Cancels any in-progress drag on the edge; LockedOpen/LockedClosed
    /// synchronously force the drawer fully open/closed with no animation.
    /// Unlocking does not itself change state.
    pub fn set_lock_mode(&mut self, edge: Edge, mode: LockMode) -> Result<(), DrawerError> {
        let Some(drawer) = self.drawers.get_mut(edge) else {
            return Err(DrawerError::NoDrawer(edge));
        };
        drawer.lock_mode = mode;
        if mode != LockMode::Unlocked {
            let effects = self.draggers.get_mut(edge).cancel();
            self.apply_effects(edge, effects, Instant::now());
            self.policies.get_mut(edge).cancel_peek();
        }
        match mode {
            LockMode::LockedOpen => self.force_openness(edge, 1.0),
            LockMode::LockedClosed => self.force_openness(edge, 0.0),
            LockMode::Unlocked => {}
        }
        tracing::debug!(edge = %edge, ?mode, "lock mode set");
        Ok(())
    }

    /// Apply one lock mode to every occupied edge
    pub fn set_lock_mode_all(&mut self, mode: LockMode) {
        for edge in Edge::ALL {
            if self.drawers.get(edge).is_some() {
                let _ = self.set_lock_mode(edge, mode);
            }
        }
    }

    /// Lock mode of the drawer on `edge`; unoccupied edges read Unlocked
    pub fn lock_mode(&self, edge: Edge) -> LockMode {
        self.drawers
            .get(edge)
            .as_ref()
            .map_or(LockMode::Unlocked, |d| d.lock_mode)
    }

    // ========================================================================
    // Queries
    // ========================================================================

    pub fn drawer(&self, edge: Edge) -> Option<&Drawer> {
        self.drawers.get(edge).as_ref()
    }

    /// True once the drawer on `edge` has settled fully open
    pub fn is_drawer_open(&self, edge: Edge) -> bool {
        self.drawer(edge).is_some_and(|d| d.known_open)
    }

    /// True while any part of the drawer on `edge` is revealed
    pub fn is_drawer_visible(&self, edge: Edge) -> bool {
        self.drawer(edge).is_some_and(|d| d.is_visible())
    }

    /// Edge of the settled-open drawer, if any
    pub fn open_drawer_edge(&self) -> Option<Edge> {
        Edge::ALL.into_iter().find(|&e| self.is_drawer_open(e))
    }

    /// Aggregate motion state across all four edges
    pub fn state(&self) -> DrawerState {
        self.state
    }

    // ========================================================================
    // Input surface
    // ========================================================================

    /// Decide whether the container should steal the event stream from its
    /// children
    ///
    /// True when an edge drag is in progress, a down lands on dimmed
    /// content (tap-to-close affordance), a drawer is peeking, or child
    /// touches were already canceled this gesture.
    pub fn should_intercept(&mut self, event: &PointerEvent) -> bool {
        let now = event.time;
        self.feed_all(event);

        let intercept_for_drag = Edge::ALL
            .iter()
            .any(|&e| self.draggers.get(e).is_dragging());
        let mut intercept_for_tap = false;

        match event.phase {
            PointerPhase::Down => {
                self.initial_motion = Some(event.position);
                self.children_canceled = false;
                if self.scrim_opacity > 0.0 && self.point_over_content(event.position) {
                    intercept_for_tap = true;
                }
            }
            PointerPhase::Move => {
                // Once the touch travels past slop it is not a resting
                // edge touch; no delayed peek should fire for it.
                if let Some(initial) = self.initial_motion {
                    let slop = self.config.touch_slop;
                    if initial.distance_sq(event.position) > slop * slop {
                        self.cancel_all_peeks();
                    }
                }
            }
            PointerPhase::Up { .. } | PointerPhase::Cancel => {
                self.close_drawers_inner(true, now);
                self.children_canceled = false;
            }
        }

        intercept_for_drag
            || intercept_for_tap
            || self.has_peeking_drawer()
            || self.children_canceled
    }

    /// Process one pointer event. Every edge sees every event; nothing is
    /// short-circuited. Always wants the rest of the gesture.
    pub fn handle_event(&mut self, event: &PointerEvent) -> bool {
        let now = event.time;
        self.feed_all(event);

        match event.phase {
            PointerPhase::Down => {
                self.initial_motion = Some(event.position);
                self.children_canceled = false;
            }
            PointerPhase::Move => {
                if let Some(initial) = self.initial_motion {
                    let slop = self.config.touch_slop;
                    if initial.distance_sq(event.position) > slop * slop {
                        self.cancel_all_peeks();
                    }
                }
            }
            PointerPhase::Up { .. } => {
                let mut peeking_only = true;
                let is_tap = self.initial_motion.is_some_and(|initial| {
                    let slop = self.config.touch_slop;
                    initial.distance_sq(event.position) < slop * slop
                });
                if is_tap && self.point_over_content(event.position) {
                    // Taps close a dimmed open drawer, unless it is locked
                    // open.
                    if let Some(open_edge) = self.open_drawer_edge() {
                        peeking_only = self.lock_mode(open_edge) == LockMode::LockedOpen;
                    }
                }
                self.close_drawers_inner(peeking_only, now);
                self.children_canceled = false;
            }
            PointerPhase::Cancel => {
                self.close_drawers_inner(true, now);
                self.children_canceled = false;
            }
        }
        true
    }

    /// Dismiss input (e.g. the back key) pressed. Returns true when the
    /// container wants to consume it, i.e. a drawer is visible.
    pub fn dismiss_key_down(&mut self) -> bool {
        self.find_visible_drawer().is_some()
    }

    /// Dismiss input released: closes the visible drawer if it is
    /// unlocked. Returns true when the input was consumed.
    pub fn dismiss_key_up(&mut self) -> bool {
        let Some(edge) = self.find_visible_drawer() else {
            return false;
        };
        if self.lock_mode(edge) == LockMode::Unlocked {
            self.close_drawers();
        }
        true
    }

    /// True while child views should treat their touches as canceled
    pub fn children_touch_canceled(&self) -> bool {
        self.children_canceled
    }

    // ========================================================================
    // Render loop
    // ========================================================================

    /// Fire due peek deadlines and advance all settle animations one frame
    ///
    /// Call once per frame while this returns true. It keeps returning
    /// true for the whole of a drag, so a release flows straight into its
    /// settle frames; once every controller is idle it returns false and
    /// no further frames are needed.
    pub fn tick(&mut self, now: Instant) -> bool {
        for edge in Edge::ALL {
            if self.policies.get_mut(edge).take_due_peek(now) {
                self.fire_peek(edge, now);
            }
        }
        let mut more = false;
        for edge in Edge::ALL {
            let (still_settling, effects) = self.draggers.get_mut(edge).continue_settling(now);
            more |= still_settling || self.draggers.get(edge).is_dragging();
            if !effects.is_empty() {
                self.apply_effects(edge, effects, now);
            }
        }
        more
    }

    /// Earliest pending peek deadline, for hosts that sleep between events
    pub fn next_deadline(&self) -> Option<Instant> {
        Edge::ALL
            .iter()
            .filter_map(|&e| self.policies.get(e).peek_deadline())
            .min()
    }

    // ========================================================================
    // Painter inputs
    // ========================================================================

    /// Revealed fraction of the drawer on `edge`; unoccupied edges read 0
    pub fn openness(&self, edge: Edge) -> f32 {
        self.drawer(edge).map_or(0.0, |d| d.openness)
    }

    /// Opacity of the dimming overlay over content: the maximum openness
    /// across all drawers
    pub fn scrim_opacity(&self) -> f32 {
        self.scrim_opacity
    }

    /// Bounding box of the drawer on `edge` at its current openness
    pub fn drawer_rect(&self, edge: Edge) -> Option<Rect> {
        let drawer = self.drawer(edge)?;
        let position =
            self.policies
                .get(edge)
                .openness_to_position(drawer.openness, drawer.extent, self.bounds);
        Some(edge.drawer_rect(position, drawer.extent, self.bounds))
    }

    /// Intensity of the edge shadow for the drawer on `edge`: revealed
    /// pixels over the edge band size, clamped to [0, 1]
    pub fn shadow_alpha(&self, edge: Edge) -> f32 {
        let Some(drawer) = self.drawer(edge) else {
            return 0.0;
        };
        if self.config.edge_size <= 0.0 {
            return 0.0;
        }
        (drawer.openness * drawer.extent / self.config.edge_size).clamp(0.0, 1.0)
    }

    /// Content area not covered by any revealed drawer; the region the
    /// scrim dims. Painters may clip content to it when drawers are
    /// opaque.
    pub fn content_rect(&self) -> Rect {
        let mut x0 = 0.0f32;
        let mut y0 = 0.0f32;
        let mut x1 = self.bounds.width;
        let mut y1 = self.bounds.height;
        for edge in Edge::ALL {
            let Some(drawer) = self.drawer(edge) else {
                continue;
            };
            if !drawer.is_visible() {
                continue;
            }
            let position = self.policies.get(edge).openness_to_position(
                drawer.openness,
                drawer.extent,
                self.bounds,
            );
            match edge {
                Edge::Left => x0 = x0.max(position + drawer.extent),
                Edge::Right => x1 = x1.min(position),
                Edge::Top => y0 = y0.max(position + drawer.extent),
                Edge::Bottom => y1 = y1.min(position),
            }
        }
        Rect::new(x0, y0, (x1 - x0).max(0.0), (y1 - y0).max(0.0))
    }

    // ========================================================================
    // Event fan-out and effect interpretation
    // ========================================================================

    fn feed_all(&mut self, event: &PointerEvent) {
        if matches!(event.phase, PointerPhase::Down) {
            // A fresh gesture is unowned, unless a dragger is somehow
            // still mid-drag (its claim stands until it releases).
            self.gesture_owner = Edge::ALL
                .into_iter()
                .find(|&e| self.draggers.get(e).is_dragging());
        }
        for edge in Edge::ALL {
            let ctx = DragContext {
                drawer: self.drawers.get(edge).as_ref(),
                bounds: self.bounds,
                claimed: self.gesture_owner.is_some_and(|owner| owner != edge),
            };
            let effects = self
                .draggers
                .get_mut(edge)
                .feed(event, self.policies.get(edge), ctx);
            if !effects.is_empty() {
                self.apply_effects(edge, effects, event.time);
            }
        }
    }

    fn apply_effects(&mut self, edge: Edge, effects: Vec<DragEffect>, now: Instant) {
        for effect in effects {
            match effect {
                DragEffect::EdgeTouched => {
                    self.policies.get_mut(edge).schedule_peek(now);
                }
                DragEffect::Captured => {
                    if let Some(drawer) = self.drawers.get_mut(edge) {
                        drawer.is_peeking = false;
                    }
                    self.policies.get_mut(edge).cancel_peek();
                    self.gesture_owner = Some(edge);
                    self.close_other_drawers(edge, now);
                }
                DragEffect::Moved { openness } => {
                    self.set_drawer_openness(edge, openness);
                }
                DragEffect::Phase { state } => {
                    if state != DrawerState::Dragging && self.gesture_owner == Some(edge) {
                        self.gesture_owner = None;
                    }
                    self.update_drawer_state(edge);
                }
            }
        }
    }

    /// Write a new openness and dispatch the slide callback. The value is
    /// deduplicated so repeated delivery of one event stays silent.
    fn set_drawer_openness(&mut self, edge: Edge, openness: f32) {
        let Some(drawer) = self.drawers.get_mut(edge) else {
            return;
        };
        if drawer.openness == openness {
            return;
        }
        drawer.openness = openness;
        self.recompute_scrim();
        self.notify_slide(edge, openness);
        if openness == 1.0 {
            // A fully revealed drawer evicts everything else on the spot;
            // a still-running close animation on another edge may not
            // outlive it.
            self.finish_closing_others(edge);
        }
    }

    /// Cut short any other drawer's close animation: snap it to fully
    /// closed immediately
    fn finish_closing_others(&mut self, keep: Edge) {
        for edge in Edge::ALL {
            if edge == keep || !self.is_drawer_visible(edge) {
                continue;
            }
            let effects = self.draggers.get_mut(edge).cancel();
            self.apply_effects(edge, effects, Instant::now());
            if let Some(drawer) = self.drawers.get_mut(edge) {
                drawer.is_peeking = false;
            }
            self.set_drawer_openness(edge, 0.0);
            self.update_drawer_state(edge);
        }
    }

    /// Re-aggregate motion state and dispatch settled open/closed events
    /// for `edge` if its controller just reached idle
    fn update_drawer_state(&mut self, edge: Edge) {
        if self.draggers.get(edge).phase() == DrawerState::Idle {
            let settled = self.drawers.get(edge).as_ref().map(|d| d.openness);
            match settled {
                Some(o) if o == 0.0 => self.dispatch_closed(edge),
                Some(o) if o == 1.0 => self.dispatch_opened(edge),
                _ => {}
            }
        }

        let aggregate = Edge::ALL
            .iter()
            .map(|&e| self.draggers.get(e).phase())
            .max()
            .unwrap_or(DrawerState::Idle);
        if aggregate != self.state {
            self.state = aggregate;
            tracing::debug!(?aggregate, "container state changed");
            self.notify_state_changed(aggregate);
        }
    }

    fn dispatch_closed(&mut self, edge: Edge) {
        let Some(drawer) = self.drawers.get_mut(edge) else {
            return;
        };
        drawer.is_peeking = false;
        if drawer.known_open {
            drawer.known_open = false;
            self.notify_closed(edge);
        }
    }

    fn dispatch_opened(&mut self, edge: Edge) {
        let Some(drawer) = self.drawers.get_mut(edge) else {
            return;
        };
        drawer.is_peeking = false;
        if !drawer.known_open {
            drawer.known_open = true;
            self.notify_opened(edge);
        }
    }

    // ========================================================================
    // Internal operations
    // ========================================================================

    /// Animate the drawer on `edge` toward a target openness. Returns
    /// whether an animation started.
    fn smooth_slide(&mut self, edge: Edge, target: f32, now: Instant) -> bool {
        let Some(drawer) = self.drawers.get(edge).as_ref() else {
            return false;
        };
        let (current, extent) = (drawer.openness, drawer.extent);
        let (started, effects) = self
            .draggers
            .get_mut(edge)
            .smooth_slide_to(target, current, extent, now);
        self.apply_effects(edge, effects, now);
        started
    }

    /// Synchronously pin the drawer at fully open/closed, with dispatch
    /// but no animation. Used by the lock modes.
    fn force_openness(&mut self, edge: Edge, target: f32) {
        if let Some(drawer) = self.drawers.get_mut(edge) {
            drawer.is_peeking = false;
        }
        self.set_drawer_openness(edge, target);
        self.update_drawer_state(edge);
    }

    fn close_drawers_inner(&mut self, peeking_only: bool, now: Instant) {
        for edge in Edge::ALL {
            let Some(drawer) = self.drawers.get(edge).as_ref() else {
                continue;
            };
            if peeking_only && !drawer.is_peeking {
                continue;
            }
            self.smooth_slide(edge, 0.0, now);
            if let Some(drawer) = self.drawers.get_mut(edge) {
                drawer.is_peeking = false;
            }
        }
        self.cancel_all_peeks();
    }

    /// Mutual exclusion: at most one drawer visible at a time
    fn close_other_drawers(&mut self, keep: Edge, now: Instant) {
        for edge in Edge::ALL {
            if edge == keep {
                continue;
            }
            let visible = self
                .drawers
                .get(edge)
                .as_ref()
                .is_some_and(|d| d.is_visible() || d.is_peeking);
            if visible {
                self.smooth_slide(edge, 0.0, now);
                if let Some(drawer) = self.drawers.get_mut(edge) {
                    drawer.is_peeking = false;
                }
            }
            self.policies.get_mut(edge).cancel_peek();
        }
    }

    fn fire_peek(&mut self, edge: Edge, now: Instant) {
        let Some(drawer) = self.drawers.get(edge).as_ref() else {
            return;
        };
        if drawer.lock_mode != LockMode::Unlocked || drawer.extent <= 0.0 {
            return;
        }
        let peek_openness = (self.config.edge_size / drawer.extent).min(1.0);
        if drawer.openness >= peek_openness {
            return;
        }
        // A capture cancels the deadline, so a drag in progress here means
        // it started on another edge; the peek loses.
        if self.draggers.get(edge).is_dragging() || self.gesture_owner.is_some() {
            return;
        }
        tracing::debug!(edge = %edge, "peeking drawer");
        self.smooth_slide(edge, peek_openness, now);
        if let Some(drawer) = self.drawers.get_mut(edge) {
            drawer.is_peeking = true;
        }
        self.close_other_drawers(edge, now);
        // The gesture now belongs to the container; children must not keep
        // reacting to the touch.
        self.children_canceled = true;
    }

    fn cancel_all_peeks(&mut self) {
        for edge in Edge::ALL {
            self.policies.get_mut(edge).cancel_peek();
        }
    }

    fn has_peeking_drawer(&self) -> bool {
        Edge::ALL
            .iter()
            .any(|&e| self.drawer(e).is_some_and(|d| d.is_peeking))
    }

    fn find_visible_drawer(&self) -> Option<Edge> {
        Edge::ALL.into_iter().find(|&e| self.is_drawer_visible(e))
    }

    /// True when the point is over the content surface rather than any
    /// revealed drawer
    fn point_over_content(&self, point: Point) -> bool {
        for edge in Edge::ALL {
            if !self.is_drawer_visible(edge) {
                continue;
            }
            if self.drawer_rect(edge).is_some_and(|r| r.contains(point)) {
                return false;
            }
        }
        true
    }

    fn recompute_scrim(&mut self) {
        self.scrim_opacity = Edge::ALL
            .iter()
            .filter_map(|&e| self.drawer(e).map(|d| d.openness))
            .fold(0.0, f32::max);
    }

    // ========================================================================
    // Listener dispatch
    // ========================================================================

    fn notify_slide(&mut self, edge: Edge, openness: f32) {
        if let Some(listener) = self.listener.as_deref_mut() {
            listener.on_drawer_slide(edge, openness);
        }
    }

    fn notify_opened(&mut self, edge: Edge) {
        tracing::debug!(edge = %edge, "drawer opened");
        if let Some(listener) = self.listener.as_deref_mut() {
            listener.on_drawer_opened(edge);
        }
    }

    fn notify_closed(&mut self, edge: Edge) {
        tracing::debug!(edge = %edge, "drawer closed");
        if let Some(listener) = self.listener.as_deref_mut() {
            listener.on_drawer_closed(edge);
        }
    }

    fn notify_state_changed(&mut self, state: DrawerState) {
        if let Some(listener) = self.listener.as_deref_mut() {
            listener.on_drawer_state_changed(state);
        }
    }
}

impl Default for DrawerLayout {
    fn default() -> Self {
        Self::new(LayoutConfig::default())
    }
}
