//! Settle animation for released and programmatically-moved drawers
//!
//! After a release (or an open/close/peek request) the drawer glides from
//! its current openness to the snap target. The curve is a quintic
//! ease-out, so motion starts at the release speed's feel and lands
//! softly. The terminal frame always reports the exact target value,
//! never a near-boundary float.

use std::time::{Duration, Instant};

use crate::config::LayoutConfig;

/// In-flight interpolation toward a settle target
#[derive(Debug, Clone, Copy)]
pub(crate) struct SettleAnimation {
    from: f32,
    to: f32,
    start: Instant,
    duration: Duration,
}

impl SettleAnimation {
    pub(crate) fn new(from: f32, to: f32, start: Instant, duration: Duration) -> Self {
        Self {
            from,
            to,
            start,
            duration,
        }
    }

    pub(crate) fn target(&self) -> f32 {
        self.to
    }

    /// Openness at `now`, plus whether the target has been reached
    pub(crate) fn value_at(&self, now: Instant) -> (f32, bool) {
        let elapsed = now.saturating_duration_since(self.start);
        if self.duration.is_zero() || elapsed >= self.duration {
            return (self.to, true);
        }
        let t = elapsed.as_secs_f32() / self.duration.as_secs_f32();
        (self.from + (self.to - self.from) * ease_out(t), false)
    }
}

/// Quintic ease-out: fast start, soft landing
fn ease_out(t: f32) -> f32 {
    let t = t - 1.0;
    t * t * t * t * t + 1.0
}

/// Pick a settle duration from the distance to cover and the release
/// velocity
///
/// A fling rides its own speed (distance / velocity), a slow release uses
/// the base duration scaled by the fraction of the sliding range left to
/// cover. Both are capped by the configured maximum.
pub(crate) fn settle_duration(
    from: f32,
    to: f32,
    extent: f32,
    velocity: f32,
    config: &LayoutConfig,
) -> Duration {
    let fraction = (to - from).abs().clamp(0.0, 1.0);
    if fraction == 0.0 {
        return Duration::ZERO;
    }
    let speed = velocity.abs();
    let ms = if speed >= config.min_fling_velocity && extent > 0.0 {
        (fraction * extent / speed * 1000.0).round() as u64
    } else {
        (config.base_settle_ms as f32 * fraction).round() as u64
    };
    Duration::from_millis(ms.clamp(1, config.max_settle_ms))
}
