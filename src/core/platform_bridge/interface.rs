//=========================================================================
// Platform Bridge Interface
//=========================================================================
//
// Contract between the toolkit side and the bridge: the native event
// record, the handler capability the toolkit calls into, the display
// collaborator the bridge calls out to, and platform errors.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::io;

use winit::error::{EventLoopError, OsError};
use winit::event::{ElementState, MouseButton as WinitMouseButton};
use winit::keyboard::{Key, KeyLocation, ModifiersState, SmolStr};

//=== Internal Dependencies ===============================================

use crate::core::input::Point;

//=== NativeEvent =========================================================

/// Raw UI event as delivered by the toolkit, before translation.
///
/// Built by the platform layer from winit's `WindowEvent`, with the
/// stateful parts (current modifiers, last cursor position) already
/// filled in. Never crosses the queue lock.
#[derive(Debug, Clone, PartialEq)]
pub enum NativeEvent {
    /// Key pressed or released.
    Key {
        key: Key,
        location: KeyLocation,
        state: ElementState,
        text: Option<SmolStr>,
        repeat: bool,
        modifiers: ModifiersState,
    },

    /// Pointer moved.
    MouseMove { position: Point },

    /// Mouse button pressed or released at the current pointer position.
    MouseButton {
        button: WinitMouseButton,
        state: ElementState,
        position: Point,
    },

    /// Wheel rotated; only the vertical delta is used.
    Wheel { delta_y: f64, position: Point },

    /// Drawable area resized.
    Resize { width: u32, height: u32 },

    /// User asked to close the window.
    Close,

    /// Anything the bridge does not handle.
    Other,
}

//=== EventHandler ========================================================

/// Capability the toolkit's event loop calls for every native event.
///
/// Returns `true` when the event was consumed. Unconsumed events get the
/// platform's default processing.
pub trait EventHandler {
    fn handle(&self, event: NativeEvent) -> bool;
}

//=== GraphicsManager =====================================================

/// Display collaborator the bridge reports to.
///
/// Called from both threads: `notify_mouse_position` from the UI thread,
/// `notify_resize` and `screen_change_generation` from the engine loop.
/// Implementations use interior mutability.
pub trait GraphicsManager: Send + Sync {
    /// Informs the display that the drawable area changed size.
    fn notify_resize(&self, width: u32, height: u32);

    /// Offers a pointer position for validation.
    ///
    /// May rewrite `position` (clamping it into the drawable area).
    /// Returns `false` if the original position was outside it.
    fn notify_mouse_position(&self, position: &mut Point) -> bool;

    /// Counter bumped whenever the active display surface changes.
    fn screen_change_generation(&self) -> u32;
}

//=== PlatformError =======================================================

/// Platform initialization and runtime errors.
#[derive(Debug)]
pub enum PlatformError {
    /// Event loop creation failed (OS-level issue).
    EventLoopCreation(EventLoopError),

    /// Event loop execution error.
    EventLoopExecution(EventLoopError),

    /// The OS refused to create the window.
    WindowCreation(OsError),

    /// The engine loop thread could not be started.
    EngineThreadSpawn(io::Error),
}

impl std::fmt::Display for PlatformError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EventLoopCreation(e) => write!(f, "Event loop creation failed: {}", e),
            Self::EventLoopExecution(e) => write!(f, "Event loop error: {}", e),
            Self::WindowCreation(e) => write!(f, "Window creation failed: {}", e),
            Self::EngineThreadSpawn(e) => write!(f, "Engine thread spawn failed: {}", e),
        }
    }
}

impl std::error::Error for PlatformError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::EventLoopCreation(e) | Self::EventLoopExecution(e) => Some(e),
            Self::WindowCreation(e) => Some(e),
            Self::EngineThreadSpawn(e) => Some(e),
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
