//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use aetheric_event_bridge::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Runtime
pub use crate::engine::{Backend, BackendBuilder};

// Event vocabulary
pub use crate::core::input::{Event, KeyCode, KeyState, Modifiers, MouseButton, Point};

// Event bridge
pub use crate::core::platform_bridge::{
    EventFilter, EventHandler, EventSource, GraphicsManager, NativeEvent, PlatformError,
    WindowSurface,
};
