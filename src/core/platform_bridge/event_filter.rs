//=========================================================================
// Event Filter
//=========================================================================
//
// Producer half of the bridge. Runs on the toolkit's UI thread, turns
// each native event into at most one normalized event and enqueues it.
//
// Architecture:
//   NativeEvent → EventFilter::handle() → translate (no lock held)
//                                       → EventQueue::push() (lock, append, unlock)
//
// Per native kind:
// - Key           → KeyDown / KeyUp (unmapped keys become `Invalid`)
// - MouseMove     → MouseMove at the display-clamped position
// - MouseButton   → ButtonDown / ButtonUp, other buttons consumed silently
// - Wheel         → WheelUp / WheelDown by delta sign, zero produces nothing
// - Resize        → pending-resize slot only (requires an attached display)
// - Close         → Quit
// - Other         → not consumed
//
//=========================================================================

//=== External Dependencies ===============================================

use std::sync::Arc;

use log::trace;
use winit::event::ElementState;

//=== Internal Dependencies ===============================================

use super::bridge_state::BridgeState;
use super::interface::{EventHandler, NativeEvent};
use super::key_mapper::{translate_button, translate_key};
use crate::core::input::{Event, KeyState, Modifiers, Point};

//=== EventFilter =========================================================

/// UI-thread handle that translates native events into the bridge queue.
///
/// Obtained from [`EventSource::event_filter`](super::EventSource::event_filter).
/// Cheap to clone; all clones feed the same queue. Once the owning
/// `EventSource` is dropped, the filter stops consuming events.
#[derive(Clone)]
pub struct EventFilter {
    state: Arc<BridgeState>,
}

impl EventFilter {
    pub(crate) fn new(state: Arc<BridgeState>) -> Self {
        Self { state }
    }

    /// Returns `false` once the consumer side has shut down.
    pub fn is_active(&self) -> bool {
        self.state.is_active()
    }

    //--- Internal Helpers -------------------------------------------------

    fn enqueue(&self, event: Event) {
        trace!(target: "bridge", "Enqueue {:?}", event);
        self.state.queue.push(event);
    }

    /// Offers the position to the display, which may clamp it.
    fn offer_position(&self, mut position: Point) -> Point {
        if let Some(display) = self.state.display() {
            if !display.notify_mouse_position(&mut position) {
                trace!(target: "bridge", "Pointer clamped to {:?}", position);
            }
        }
        position
    }

    fn key_event(key_state: KeyState, state: ElementState) -> Event {
        match state {
            ElementState::Pressed => Event::KeyDown(key_state),
            ElementState::Released => Event::KeyUp(key_state),
        }
    }
}

//=== EventHandler ========================================================

impl EventHandler for EventFilter {
    fn handle(&self, event: NativeEvent) -> bool {
        if !self.state.is_active() {
            trace!(target: "bridge", "Filter inactive, passing event through");
            return false;
        }

        match event {
            NativeEvent::Key {
                key,
                location,
                state,
                text,
                repeat,
                modifiers,
            } => {
                let key_state = KeyState {
                    keycode: translate_key(&key, location),
                    text: text.as_deref().and_then(|t| t.chars().next()),
                    repeat,
                    modifiers: Modifiers::from(modifiers),
                };
                self.enqueue(Self::key_event(key_state, state));
                true
            }

            NativeEvent::MouseMove { position } => {
                let position = self.offer_position(position);
                self.enqueue(Event::MouseMove(position));
                true
            }

            NativeEvent::MouseButton {
                button,
                state,
                position,
            } => {
                let Some(button) = translate_button(button) else {
                    trace!(target: "bridge", "Ignoring unsupported mouse button");
                    return true;
                };

                let position = self.offer_position(position);
                let event = match state {
                    ElementState::Pressed => Event::MouseButtonDown { button, position },
                    ElementState::Released => Event::MouseButtonUp { button, position },
                };
                self.enqueue(event);
                true
            }

            NativeEvent::Wheel { delta_y, position } => {
                let position = self.offer_position(position);
                if delta_y > 0.0 {
                    self.enqueue(Event::WheelUp(position));
                } else if delta_y < 0.0 {
                    self.enqueue(Event::WheelDown(position));
                }
                true
            }

            NativeEvent::Resize { width, height } => {
                if self.state.has_display() {
                    trace!(target: "bridge", "Pending resize {}x{}", width, height);
                    self.state.queue.set_pending_resize(width, height);
                }
                true
            }

            NativeEvent::Close => {
                self.enqueue(Event::Quit);
                true
            }

            NativeEvent::Other => false,
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::{KeyCode, MouseButton};
    use crate::core::platform_bridge::WindowSurface;
    use winit::event::MouseButton as WinitMouseButton;
    use winit::keyboard::{Key, KeyLocation, ModifiersState, NamedKey, SmolStr};

    //--- Test Helpers -----------------------------------------------------

    fn filter() -> (EventFilter, Arc<BridgeState>) {
        let state = Arc::new(BridgeState::new(16));
        (EventFilter::new(Arc::clone(&state)), state)
    }

    fn filter_with_surface(width: u32, height: u32) -> (EventFilter, Arc<BridgeState>) {
        let (filter, state) = filter();
        state.set_display(Some(Arc::new(WindowSurface::new(width, height))));
        (filter, state)
    }

    fn drain(state: &BridgeState) -> Vec<Event> {
        std::iter::from_fn(|| state.queue.try_pop()).collect()
    }

    fn key(text: &str, state: ElementState) -> NativeEvent {
        NativeEvent::Key {
            key: Key::Character(SmolStr::new(text)),
            location: KeyLocation::Standard,
            state,
            text: Some(SmolStr::new(text)),
            repeat: false,
            modifiers: ModifiersState::empty(),
        }
    }

    fn button(button: WinitMouseButton, state: ElementState) -> NativeEvent {
        NativeEvent::MouseButton {
            button,
            state,
            position: Point::new(10, 20),
        }
    }

    fn wheel(delta_y: f64) -> NativeEvent {
        NativeEvent::Wheel {
            delta_y,
            position: Point::new(1, 2),
        }
    }

    //=====================================================================
    // Keyboard
    //=====================================================================

    #[test]
    fn key_press_and_release() {
        let (filter, state) = filter();

        assert!(filter.handle(key("a", ElementState::Pressed)));
        assert!(filter.handle(key("a", ElementState::Released)));

        let expected = KeyState::new(KeyCode::KeyA).with_text('a');
        assert_eq!(drain(&state), vec![Event::KeyDown(expected), Event::KeyUp(expected)]);
    }

    #[test]
    fn key_carries_repeat_and_modifiers() {
        let (filter, state) = filter();

        filter.handle(NativeEvent::Key {
            key: Key::Character(SmolStr::new("S")),
            location: KeyLocation::Standard,
            state: ElementState::Pressed,
            text: Some(SmolStr::new("S")),
            repeat: true,
            modifiers: ModifiersState::SHIFT | ModifiersState::CONTROL,
        });

        match drain(&state).as_slice() {
            [Event::KeyDown(k)] => {
                assert_eq!(k.keycode, KeyCode::KeyS);
                assert_eq!(k.text, Some('S'));
                assert!(k.repeat);
                assert_eq!(k.modifiers, Modifiers::SHIFT | Modifiers::CTRL);
            }
            other => panic!("Expected one KeyDown, got {:?}", other),
        }
    }

    #[test]
    fn unmapped_key_is_enqueued_as_invalid() {
        let (filter, state) = filter();

        filter.handle(NativeEvent::Key {
            key: Key::Named(NamedKey::LaunchMail),
            location: KeyLocation::Standard,
            state: ElementState::Pressed,
            text: None,
            repeat: false,
            modifiers: ModifiersState::empty(),
        });

        assert_eq!(drain(&state), vec![Event::KeyDown(KeyState::new(KeyCode::Invalid))]);
    }

    #[test]
    fn text_uses_first_character() {
        let (filter, state) = filter();
        filter.handle(key("ab", ElementState::Pressed));

        let events = drain(&state);
        assert_eq!(events[0].key().and_then(|k| k.text), Some('a'));
    }

    //=====================================================================
    // Mouse
    //=====================================================================

    #[test]
    fn mouse_move_without_display_is_unmodified() {
        let (filter, state) = filter();
        filter.handle(NativeEvent::MouseMove { position: Point::new(-5, 9000) });
        assert_eq!(drain(&state), vec![Event::MouseMove(Point::new(-5, 9000))]);
    }

    #[test]
    fn mouse_move_is_clamped_by_display() {
        let (filter, state) = filter_with_surface(320, 200);
        filter.handle(NativeEvent::MouseMove { position: Point::new(400, -1) });
        assert_eq!(drain(&state), vec![Event::MouseMove(Point::new(319, 0))]);
    }

    #[test]
    fn standard_buttons_produce_events() {
        let (filter, state) = filter();

        filter.handle(button(WinitMouseButton::Left, ElementState::Pressed));
        filter.handle(button(WinitMouseButton::Middle, ElementState::Pressed));
        filter.handle(button(WinitMouseButton::Right, ElementState::Released));

        let p = Point::new(10, 20);
        assert_eq!(
            drain(&state),
            vec![
                Event::MouseButtonDown { button: MouseButton::Left, position: p },
                Event::MouseButtonDown { button: MouseButton::Middle, position: p },
                Event::MouseButtonUp { button: MouseButton::Right, position: p },
            ]
        );
    }

    #[test]
    fn unsupported_buttons_produce_nothing() {
        let (filter, state) = filter();

        assert!(filter.handle(button(WinitMouseButton::Back, ElementState::Pressed)));
        assert!(filter.handle(button(WinitMouseButton::Forward, ElementState::Released)));
        assert!(filter.handle(button(WinitMouseButton::Other(5), ElementState::Pressed)));

        assert!(drain(&state).is_empty());
    }

    //=====================================================================
    // Wheel
    //=====================================================================

    #[test]
    fn wheel_direction_by_sign() {
        let (filter, state) = filter();

        filter.handle(wheel(120.0));
        filter.handle(wheel(-0.5));

        let p = Point::new(1, 2);
        assert_eq!(drain(&state), vec![Event::WheelUp(p), Event::WheelDown(p)]);
    }

    #[test]
    fn zero_wheel_delta_produces_nothing() {
        let (filter, state) = filter();
        assert!(filter.handle(wheel(0.0)));
        assert!(drain(&state).is_empty());
    }

    //=====================================================================
    // Window
    //=====================================================================

    #[test]
    fn close_produces_quit() {
        let (filter, state) = filter();
        assert!(filter.handle(NativeEvent::Close));
        assert_eq!(drain(&state), vec![Event::Quit]);
    }

    #[test]
    fn resize_fills_slot_not_queue() {
        let (filter, state) = filter_with_surface(100, 100);

        assert!(filter.handle(NativeEvent::Resize { width: 200, height: 150 }));

        assert!(state.queue.is_empty());
        assert_eq!(state.queue.take_pending_resize(), Some((200, 150)));
    }

    #[test]
    fn resize_without_display_is_dropped() {
        let (filter, state) = filter();

        assert!(filter.handle(NativeEvent::Resize { width: 200, height: 150 }));
        assert_eq!(state.queue.take_pending_resize(), None);
    }

    #[test]
    fn other_events_are_not_consumed() {
        let (filter, state) = filter();
        assert!(!filter.handle(NativeEvent::Other));
        assert!(drain(&state).is_empty());
    }

    //=====================================================================
    // Activation
    //=====================================================================

    #[test]
    fn inactive_filter_passes_everything_through() {
        let (filter, state) = filter();
        state.deactivate();

        assert!(!filter.is_active());
        assert!(!filter.handle(NativeEvent::Close));
        assert!(!filter.handle(key("x", ElementState::Pressed)));
        assert!(state.queue.is_empty());
    }

    #[test]
    fn clones_share_one_queue() {
        let (filter, state) = filter();
        let other = filter.clone();

        filter.handle(NativeEvent::Close);
        other.handle(NativeEvent::MouseMove { position: Point::new(3, 4) });

        assert_eq!(drain(&state), vec![Event::Quit, Event::MouseMove(Point::new(3, 4))]);
    }
}
