//! Drawer state persistence across container recreation
//!
//! Captures the little that survives a process or display restart: which
//! edge (if any) is settled open, and the four lock modes. Drag velocity
//! and in-flight animations are deliberately not persisted. Restoring
//! replays the normal open/lock operations, so a restore before the first
//! layout pass lands instantaneously and one afterwards animates.

use serde::{Deserialize, Serialize};

use crate::container::DrawerLayout;
use crate::drawer::LockMode;
use crate::edge::{Edge, EdgeMap};

/// Snapshot of the persistable drawer state
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedState {
    /// Edge whose drawer was settled open, if any (at most one drawer is
    /// ever open)
    pub open_edge: Option<Edge>,
    /// Lock mode per edge; unoccupied edges read Unlocked
    pub lock_modes: EdgeMap<LockMode>,
}

impl DrawerLayout {
    /// Snapshot the state worth persisting
    pub fn save_state(&self) -> SavedState {
        SavedState {
            open_edge: self.open_drawer_edge(),
            lock_modes: EdgeMap::from_fn(|edge| self.lock_mode(edge)),
        }
    }

    /// Re-apply a snapshot through the normal open/lock operations
    ///
    /// Edges in the snapshot without a registered drawer are skipped with
    /// a diagnostic; restoring is best-effort.
    pub fn restore_state(&mut self, state: &SavedState) {
        if let Some(edge) = state.open_edge {
            if self.open_drawer(edge).is_err() {
                tracing::warn!(edge = %edge, "saved open drawer has no drawer to restore");
            }
        }
        for edge in Edge::ALL {
            let mode = *state.lock_modes.get(edge);
            if self.drawer(edge).is_some() {
                let _ = self.set_lock_mode(edge, mode);
            } else if mode != LockMode::Unlocked {
                tracing::warn!(edge = %edge, ?mode, "saved lock mode has no drawer to restore");
            }
        }
    }
}
