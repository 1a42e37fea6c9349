//=========================================================================
// Input Types
//
// Engine-facing input vocabulary shared by the producer (UI thread) and
// the consumer (engine loop).
//
// Components:
// - `event`: normalized events, pointer positions, modifiers
// - `key_code`: portable key code set with its `Invalid` sentinel
//
//=========================================================================

//=== Submodules ==========================================================

pub mod event;
pub mod key_code;

//=== Public API ==========================================================

pub use event::{Event, KeyState, Modifiers, MouseButton, Point};
pub use key_code::KeyCode;
