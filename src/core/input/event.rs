//=========================================================================
// Normalized Event Types
//
// Defines the engine-side representation of everything the platform
// reports: keyboard and mouse input, wheel rotation, window close and
// display changes.
//
// Responsibilities:
// - Represent input in a stable, toolkit-independent way
// - Carry the data the engine loop needs (key code, produced character,
//   repeat flag, modifiers, pointer position)
// - Stay `Copy`, so events can cross the thread boundary without
//   allocation
//
// Event Flow:
// ```text
// Platform Layer (winit)
//         ↓
//    NativeEvent
//         ↓
//    EventFilter (translation, UI thread)
//         ↓
//    Event (this module) ──► EventQueue ──► EventSource::poll_event()
// ```
//
//=========================================================================

//=== External Crates =====================================================

use bitflags::bitflags;

//=== Internal Imports ====================================================

use super::key_code::KeyCode;

//=== Point ===============================================================

/// Integer position in window coordinates (pixels, top-left origin).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

//=== MouseButton =========================================================

/// Logical mouse button.
///
/// Only the three buttons the engine understands are representable.
/// Native events for any other button (side buttons, thumb buttons) are
/// dropped by the producer instead of being mapped to a catch-all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
}

//=== Modifiers ===========================================================

bitflags! {
    /// Modifier keys held while an event was produced.
    ///
    /// Bits are tested independently of the key code, so a Shift press
    /// reports `RShift` together with the `SHIFT` flag.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Modifiers: u8 {
        const CTRL = 1 << 0;
        const ALT = 1 << 1;
        const SHIFT = 1 << 2;
        const META = 1 << 3;
    }
}

//=== KeyState ============================================================

/// Payload of `KeyDown` / `KeyUp` events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyState {
    /// Portable key code (`KeyCode::Invalid` for unmapped keys).
    pub keycode: KeyCode,

    /// First character of the text the key press composed, if any.
    pub text: Option<char>,

    /// `true` when the event was generated by key auto-repeat.
    pub repeat: bool,

    /// Modifier flags at the time of the event.
    pub modifiers: Modifiers,
}

impl KeyState {
    /// Creates a key payload with no text, no repeat and no modifiers.
    pub fn new(keycode: KeyCode) -> Self {
        Self {
            keycode,
            text: None,
            repeat: false,
            modifiers: Modifiers::empty(),
        }
    }

    pub fn with_text(mut self, text: char) -> Self {
        self.text = Some(text);
        self
    }

    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    pub fn with_repeat(mut self, repeat: bool) -> Self {
        self.repeat = repeat;
        self
    }
}

//=== Event ===============================================================

/// Normalized event delivered to the engine loop.
///
/// # Event Types
///
/// - **KeyDown/KeyUp**: keyboard input with code, text, repeat, modifiers
/// - **MouseMove**: pointer moved (position already clamped by the display)
/// - **MouseButtonDown/MouseButtonUp**: Left/Middle/Right only
/// - **WheelUp/WheelDown**: vertical wheel rotation at a pointer position
/// - **Resize**: window resized (never produced by the bridge itself,
///   resizes are coalesced and surface as `ScreenChanged`)
/// - **ScreenChanged**: the display surface changed identity; advisory
/// - **Quit**: the user asked to close the window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Event {
    KeyDown(KeyState),
    KeyUp(KeyState),
    MouseMove(Point),
    MouseButtonDown { button: MouseButton, position: Point },
    MouseButtonUp { button: MouseButton, position: Point },
    WheelUp(Point),
    WheelDown(Point),
    Resize { width: u32, height: u32 },
    ScreenChanged,
    Quit,
}

//--- Implementation ------------------------------------------------------

impl Event {
    /// Returns the pointer position carried by mouse and wheel events.
    pub fn position(&self) -> Option<Point> {
        match self {
            Self::MouseMove(p) | Self::WheelUp(p) | Self::WheelDown(p) => Some(*p),
            Self::MouseButtonDown { position, .. } | Self::MouseButtonUp { position, .. } => {
                Some(*position)
            }
            _ => None,
        }
    }

    /// Returns the key payload of `KeyDown` / `KeyUp` events.
    pub fn key(&self) -> Option<&KeyState> {
        match self {
            Self::KeyDown(state) | Self::KeyUp(state) => Some(state),
            _ => None,
        }
    }

    /// Returns `true` for `Quit`.
    pub fn is_quit(&self) -> bool {
        matches!(self, Self::Quit)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
