//! Pointer velocity tracking for fling detection
//!
//! Keeps a short ring of timestamped samples from the active pointer and
//! derives a release velocity over the most recent window. Used when the
//! host's input surface does not supply its own derived velocity on
//! release.

use std::time::{Duration, Instant};

use crate::geometry::Point;

/// Samples older than this do not contribute to the release velocity
const SAMPLE_WINDOW: Duration = Duration::from_millis(100);

/// Ring capacity; at 120 Hz input this covers more than the window
const MAX_SAMPLES: usize = 20;

#[derive(Debug, Clone)]
pub(crate) struct VelocityTracker {
    samples: Vec<(Instant, Point)>,
}

impl VelocityTracker {
    pub(crate) fn new() -> Self {
        Self {
            samples: Vec::with_capacity(MAX_SAMPLES),
        }
    }

    pub(crate) fn clear(&mut self) {
        self.samples.clear();
    }

    /// Record a sample. A sample with the same timestamp as the last one
    /// is dropped, which makes double delivery of an event harmless.
    pub(crate) fn add_sample(&mut self, time: Instant, position: Point) {
        if let Some(&(last, _)) = self.samples.last() {
            if last == time {
                return;
            }
        }
        if self.samples.len() == MAX_SAMPLES {
            self.samples.remove(0);
        }
        self.samples.push((time, position));
    }

    /// Velocity in pixels per second over the recent sample window, as
    /// (x, y). Returns zero when fewer than two usable samples exist.
    pub(crate) fn velocity(&self) -> (f32, f32) {
        let Some(&(newest_time, newest_pos)) = self.samples.last() else {
            return (0.0, 0.0);
        };
        let cutoff = newest_time.checked_sub(SAMPLE_WINDOW);
        let oldest = self
            .samples
            .iter()
            .find(|(t, _)| match cutoff {
                Some(c) => *t >= c,
                None => true,
            })
            .copied();
        let Some((oldest_time, oldest_pos)) = oldest else {
            return (0.0, 0.0);
        };
        let dt = newest_time.duration_since(oldest_time).as_secs_f32();
        if dt <= 0.0 {
            return (0.0, 0.0);
        }
        (
            (newest_pos.x - oldest_pos.x) / dt,
            (newest_pos.y - oldest_pos.y) / dt,
        )
    }
}
