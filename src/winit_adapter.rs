//! Adapter to convert winit window events to our pointer events
//!
//! winit splits pointer input across `CursorMoved`/`MouseInput`/`Touch`;
//! the drawer layout wants one flat stream. The adapter tracks the cursor
//! position and button state so mouse motion only becomes drag input while
//! the primary button is held.

use std::time::Instant;

use winit::event::{ElementState, MouseButton, TouchPhase, WindowEvent};

use crate::event::{PointerEvent, PointerId};
use crate::geometry::Point;

/// Stateful translator from winit window events to [`PointerEvent`]s
#[derive(Debug, Default)]
pub struct WinitPointerAdapter {
    cursor: Point,
    mouse_down: bool,
}

impl WinitPointerAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Convert one window event
    ///
    /// Returns None for events that carry no pointer input (or mouse
    /// motion while no button is held).
    pub fn convert(&mut self, event: &WindowEvent) -> Option<PointerEvent> {
        let now = Instant::now();
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = Point::new(position.x as f32, position.y as f32);
                if self.mouse_down {
                    Some(PointerEvent::moved(PointerId::PRIMARY, self.cursor, now))
                } else {
                    None
                }
            }
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => match state {
                ElementState::Pressed => {
                    self.mouse_down = true;
                    Some(PointerEvent::down(PointerId::PRIMARY, self.cursor, now))
                }
                ElementState::Released => {
                    self.mouse_down = false;
                    Some(PointerEvent::up(PointerId::PRIMARY, self.cursor, now))
                }
            },
            WindowEvent::Touch(touch) => {
                let position = Point::new(touch.location.x as f32, touch.location.y as f32);
                // Touch ids are offset past the mouse pointer id
                let pointer = PointerId(touch.id + 1);
                let event = match touch.phase {
                    TouchPhase::Started => PointerEvent::down(pointer, position, now),
                    TouchPhase::Moved => PointerEvent::moved(pointer, position, now),
                    TouchPhase::Ended => PointerEvent::up(pointer, position, now),
                    TouchPhase::Cancelled => PointerEvent::cancel(pointer, position, now),
                };
                Some(event)
            }
            _ => None,
        }
    }
}
