//=========================================================================
// Input Processor
//=========================================================================
//
// Converts winit `WindowEvent`s into toolkit-neutral `NativeEvent`s.
//
// Architecture:
//   WindowEvent → InputProcessor → NativeEvent → EventHandler (bridge)
//
// Stateful tracking: winit reports modifiers and cursor position as
// separate events, so both are cached here and stamped onto every
// subsequent key / button / wheel event.
//
//=========================================================================

//=== External Dependencies ===============================================

use winit::event::{MouseScrollDelta, WindowEvent};
use winit::keyboard::ModifiersState;

//=== Internal Dependencies ===============================================

use crate::core::input::Point;
use crate::core::platform_bridge::NativeEvent;

//=== InputProcessor ======================================================

/// Converts winit events to native bridge events with cached modifier
/// and cursor state.
pub(crate) struct InputProcessor {
    current_modifiers: ModifiersState,
    cursor: Point,
}

impl InputProcessor {
    //--- Construction -----------------------------------------------------

    pub(crate) fn new() -> Self {
        Self {
            current_modifiers: ModifiersState::empty(),
            cursor: Point::default(),
        }
    }

    //--- Event Processing -------------------------------------------------

    /// Converts one window event. Kinds the bridge does not handle (and
    /// modifier updates, which only change cached state) map to
    /// `NativeEvent::Other`.
    pub(crate) fn process(&mut self, event: &WindowEvent) -> NativeEvent {
        match event {
            WindowEvent::KeyboardInput { event: key_event, .. } => NativeEvent::Key {
                key: key_event.logical_key.clone(),
                location: key_event.location,
                state: key_event.state,
                text: key_event.text.clone(),
                repeat: key_event.repeat,
                modifiers: self.current_modifiers,
            },

            WindowEvent::ModifiersChanged(modifiers) => {
                self.current_modifiers = modifiers.state();
                NativeEvent::Other
            }

            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = Point::new(position.x as i32, position.y as i32);
                NativeEvent::MouseMove {
                    position: self.cursor,
                }
            }

            WindowEvent::MouseInput { state, button, .. } => NativeEvent::MouseButton {
                button: *button,
                state: *state,
                position: self.cursor,
            },

            WindowEvent::MouseWheel { delta, .. } => NativeEvent::Wheel {
                delta_y: Self::vertical_delta(delta),
                position: self.cursor,
            },

            WindowEvent::Resized(size) => NativeEvent::Resize {
                width: size.width,
                height: size.height,
            },

            WindowEvent::CloseRequested => NativeEvent::Close,

            _ => NativeEvent::Other,
        }
    }

    //--- Internal Helpers -------------------------------------------------

    fn vertical_delta(delta: &MouseScrollDelta) -> f64 {
        match delta {
            MouseScrollDelta::LineDelta(_, y) => f64::from(*y),
            MouseScrollDelta::PixelDelta(position) => position.y,
        }
    }

    //--- Test Accessors ---------------------------------------------------

    #[cfg(test)]
    pub(crate) fn current_modifiers(&self) -> ModifiersState {
        self.current_modifiers
    }

    #[cfg(test)]
    pub(crate) fn cursor(&self) -> Point {
        self.cursor
    }
}

//=========================================================================
// Tests
//=========================================================================
