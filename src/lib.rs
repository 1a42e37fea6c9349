//=========================================================================
// Aetheric Event Bridge — Library Root
//
// Platform backend that binds an engine's abstract OS interface to winit.
//
// Responsibilities:
// - Translate winit window events into the engine's event vocabulary
// - Carry them across threads: UI thread (producer) → engine loop
//   (consumer) through a locked FIFO and a coalescing resize slot
// - Run the window and the engine loop as a single `Backend`
//
// Typical usage:
// ```no_run
// use aetheric_event_bridge::BackendBuilder;
//
// fn main() {
//     BackendBuilder::new()
//         .build()
//         .run(|mut events| {
//             while !matches!(events.poll_event(), Some(e) if e.is_quit()) {}
//         })
//         .unwrap();
// }
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` holds the toolkit-independent pieces: event types and the
// cross-thread bridge. Engines embedding the bridge in their own loop
// use it directly.
//
pub mod core;
pub mod prelude;

//--- Internal Modules ----------------------------------------------------
//
// `platform` owns the winit event loop and window; it is not part of the
// public API surface.
//
// `engine` defines the runtime entry point and its builder.
//
mod engine;
mod platform;

//--- Public Exports ------------------------------------------------------

pub use engine::{Backend, BackendBuilder};
