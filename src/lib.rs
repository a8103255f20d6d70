//! Slideout - edge-anchored sliding drawer panels
//!
//! This crate provides the interaction core for a container hosting one
//! content surface plus up to four drawers, one per edge. Drawers are
//! revealed by dragging from their edge or by programmatic call, with
//! velocity-aware settle animations, a delayed "peek" reveal on edge
//! touch, mutual exclusion between drawers, per-edge lock modes, and a
//! dimming scrim over content.
//!
//! Rendering, layout, and the event loop stay with the host: the crate
//! consumes a canonical pointer-event stream and hands back openness,
//! scrim, and shadow values to paint with.

pub mod config;
pub mod container;
pub mod drawer;
pub mod edge;
pub mod event;
pub mod geometry;
pub mod persist;
#[cfg(feature = "winit")]
pub mod winit_adapter;

mod dragger;
mod policy;
mod settle;
mod velocity;

// Re-export commonly used types
pub use config::LayoutConfig;
pub use container::{DrawerError, DrawerLayout, DrawerListener};
pub use drawer::{Drawer, DrawerState, LockMode};
pub use edge::{Axis, Edge, EdgeMap};
pub use event::{PointerEvent, PointerId, PointerPhase, Velocity};
pub use geometry::{Point, Rect, Size};
pub use persist::SavedState;
