//=========================================================================
// Core
//
// Toolkit-independent half of the backend.
//
// Responsibilities:
// - Define the engine's event vocabulary (`input`)
// - Own the cross-thread event bridge between the UI thread and the
//   engine loop (`platform_bridge`)
//
// Notes:
// Nothing in here creates windows or runs an event loop. The `platform`
// module feeds native events in; the engine loop pulls normalized
// events out.
//
//=========================================================================

pub mod input;
pub mod platform_bridge;
