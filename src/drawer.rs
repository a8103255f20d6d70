//! Per-drawer record owned by the container
//!
//! One record exists per occupied edge. The openness/known-open/peeking
//! fields are written exclusively by the container and its drag
//! controllers; external callers request target states through the
//! container's open/close/lock operations instead.

use serde::{Deserialize, Serialize};

use crate::edge::Edge;

/// Motion state of one drag controller, and of the container aggregate
///
/// The variants are ordered so that the container state is simply the
/// maximum across the four controllers: Dragging > Settling > Idle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum DrawerState {
    /// Settled; no interaction or animation in progress
    #[default]
    Idle,
    /// Animating toward a settle target
    Settling,
    /// Actively dragged by the user
    Dragging,
}

/// Per-drawer override of user interaction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LockMode {
    /// Normal interactive behavior
    #[default]
    Unlocked,
    /// User may not open the drawer; programmatic calls still work
    LockedClosed,
    /// User may not close the drawer; programmatic calls still work
    LockedOpen,
}

/// State of one edge-anchored drawer
#[derive(Debug, Clone)]
pub struct Drawer {
    pub(crate) edge: Edge,
    /// Size along the sliding axis; written only by the layout pass
    pub(crate) extent: f32,
    /// Revealed fraction in [0, 1]; drives render position, scrim, shadow
    pub(crate) openness: f32,
    /// True only once openness has settled at 1.0
    pub(crate) known_open: bool,
    /// True while held in a shallow reveal pending a user decision
    pub(crate) is_peeking: bool,
    pub(crate) lock_mode: LockMode,
}

impl Drawer {
    pub(crate) fn new(edge: Edge) -> Self {
        Self {
            edge,
            extent: 0.0,
            openness: 0.0,
            known_open: false,
            is_peeking: false,
            lock_mode: LockMode::Unlocked,
        }
    }

    pub fn edge(&self) -> Edge {
        self.edge
    }

    pub fn extent(&self) -> f32 {
        self.extent
    }

    pub fn openness(&self) -> f32 {
        self.openness
    }

    /// True once the drawer has settled fully open. Partial visibility
    /// (mid-drag, peeking) does not count.
    pub fn is_open(&self) -> bool {
        self.known_open
    }

    /// True while any part of the drawer is revealed
    pub fn is_visible(&self) -> bool {
        self.openness > 0.0
    }

    pub fn is_peeking(&self) -> bool {
        self.is_peeking
    }

    pub fn lock_mode(&self) -> LockMode {
        self.lock_mode
    }
}
