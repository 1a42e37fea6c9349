//=========================================================================
// Platform Bridge
//=========================================================================
//
// Cross-thread event bridge between the toolkit's UI thread and the
// engine loop.
//
// Architecture:
// ```text
//  UI Thread:                          Engine Thread:
//  ┌────────────────────────┐          ┌──────────────────────────┐
//  │  winit event loop      │          │  engine loop             │
//  │   ↓ NativeEvent        │          │   ↑ Option<Event>        │
//  │  EventFilter           │          │  EventSource::poll_event │
//  │   ├─ translate         │          │   ├─ resize slot first   │
//  │   └─ push ─────────────┼──► EventQueue ──► pop               │
//  └────────────────────────┘          └──────────────────────────┘
//                 ╲                        ╱
//                  GraphicsManager (clamp, resize, generation)
// ```
//
// Components:
// - `interface`: native event record, handler/display traits, errors
// - `event_queue`: locked FIFO + pending-resize slot
// - `event_filter`: producer (translation)
// - `event_source`: consumer (polling)
// - `surface`: reference display collaborator
//
//=========================================================================

//=== Module Declarations =================================================

mod bridge_state;
pub(crate) mod event_filter;
pub(crate) mod event_queue;
pub(crate) mod event_source;
pub(crate) mod interface;
mod key_mapper;
pub(crate) mod surface;

//=== Public API ==========================================================

pub use event_filter::EventFilter;
pub use event_queue::EventQueue;
pub use event_source::EventSource;
pub use interface::{EventHandler, GraphicsManager, NativeEvent, PlatformError};
pub use surface::WindowSurface;
