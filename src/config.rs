//! Interaction tunables
//!
//! All thresholds that shape how drags, flings, and peeks feel. Hosts
//! normally scale the pixel-valued fields by their display's density
//! before constructing the layout.

use serde::{Deserialize, Serialize};

/// Default touch slop in pixels before a press becomes a drag
pub const DEFAULT_TOUCH_SLOP: f32 = 8.0;

/// Default width/height of the edge band that starts edge drags (and the
/// distance a peeking drawer is revealed)
pub const DEFAULT_EDGE_SIZE: f32 = 20.0;

/// Delay before an undisturbed edge touch peeks the drawer
pub const DEFAULT_PEEK_DELAY_MS: u64 = 160;

/// Minimum release velocity that counts as a fling, pixels per second
pub const DEFAULT_MIN_FLING_VELOCITY: f32 = 400.0;

/// Settle duration used for slow releases, scaled by remaining distance
pub const DEFAULT_BASE_SETTLE_MS: u64 = 256;

/// Upper bound on any settle animation
pub const DEFAULT_MAX_SETTLE_MS: u64 = 600;

/// Interaction tunables for a [`DrawerLayout`](crate::DrawerLayout)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Distance a pointer must travel before a press becomes a drag
    pub touch_slop: f32,
    /// Edge band size for drag detection; also the peek reveal distance
    pub edge_size: f32,
    /// Milliseconds an edge touch must rest before the drawer peeks
    pub peek_delay_ms: u64,
    /// Release velocity (px/s) above which position is ignored and the
    /// fling direction picks the snap target
    pub min_fling_velocity: f32,
    /// Settle duration for a zero-velocity release covering the full
    /// sliding range; shorter releases scale down proportionally
    pub base_settle_ms: u64,
    /// Hard cap on settle duration regardless of distance or velocity
    pub max_settle_ms: u64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            touch_slop: DEFAULT_TOUCH_SLOP,
            edge_size: DEFAULT_EDGE_SIZE,
            peek_delay_ms: DEFAULT_PEEK_DELAY_MS,
            min_fling_velocity: DEFAULT_MIN_FLING_VELOCITY,
            base_settle_ms: DEFAULT_BASE_SETTLE_MS,
            max_settle_ms: DEFAULT_MAX_SETTLE_MS,
        }
    }
}
