//=========================================================================
// Event Source
//=========================================================================
//
// Consumer half of the bridge, polled by the engine loop.
//
// Architecture:
//   engine loop ──poll_event()──► 1. pending resize? → display → ScreenChanged
//                                 2. fake mouse move queued? → MouseMove
//                                 3. EventQueue::try_pop() → Event / None
//
// The display collaborator is never called with the queue lock held:
// the pending size is copied out under the lock and forwarded after it
// is released.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::sync::Arc;

use log::{debug, info, trace};

//=== Internal Dependencies ===============================================

use super::bridge_state::BridgeState;
use super::event_filter::EventFilter;
use super::interface::GraphicsManager;
use crate::core::input::{Event, Point};

//=== EventSource =========================================================

/// Engine-side end of the event bridge.
///
/// Owns the consumer state (last seen screen generation, queued fake
/// mouse move) and hands out [`EventFilter`]s for the UI thread.
///
/// # Lifecycle
///
/// 1. **Construction**: `EventSource::new()` creates the queue and slot
/// 2. **Wiring**: `event_filter()` goes to the platform, `attach()` sets
///    the display collaborator
/// 3. **Polling**: the engine loop calls `poll_event()` once or more per frame
/// 4. **Shutdown**: dropping the source deactivates every filter first;
///    unpolled events are discarded
pub struct EventSource {
    state: Arc<BridgeState>,
    last_screen_generation: u32,
    fake_mouse_move: Option<Event>,
}

impl EventSource {
    //--- Construction -----------------------------------------------------

    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates a source whose queue has room for `capacity` events.
    pub fn with_capacity(capacity: usize) -> Self {
        debug!(target: "bridge", "Event bridge created (capacity: {})", capacity);
        Self {
            state: Arc::new(BridgeState::new(capacity)),
            last_screen_generation: 0,
            fake_mouse_move: None,
        }
    }

    /// Returns a producer handle feeding this source.
    pub fn event_filter(&self) -> EventFilter {
        EventFilter::new(Arc::clone(&self.state))
    }

    //--- Display Collaborator ---------------------------------------------

    /// Attaches the display used for pointer clamping and resize handling.
    pub fn attach(&self, display: Arc<dyn GraphicsManager>) {
        info!(target: "bridge", "Display attached");
        self.state.set_display(Some(display));
    }

    /// Detaches the display. Pointer positions pass through unmodified
    /// and resizes are ignored until a new display is attached.
    pub fn detach(&self) {
        info!(target: "bridge", "Display detached");
        self.state.set_display(None);
    }

    //--- Polling ----------------------------------------------------------

    /// Returns the next event, or `None` if nothing is pending.
    ///
    /// Never blocks beyond the O(1) queue critical section. A dirty resize
    /// slot is handled before the FIFO; it yields `ScreenChanged` only if
    /// the display's generation moved, otherwise the same call continues
    /// with the queue.
    pub fn poll_event(&mut self) -> Option<Event> {
        if let Some(event) = self.check_screen_change() {
            return Some(event);
        }

        if let Some(event) = self.fake_mouse_move.take() {
            return Some(event);
        }

        self.state.queue.try_pop()
    }

    /// Queues a synthetic mouse move returned by the next poll.
    ///
    /// Used when the engine warps the pointer but the OS cursor cannot be
    /// moved. Only the most recent warp is kept.
    pub fn fake_warp_mouse(&mut self, x: i32, y: i32) {
        trace!(target: "bridge", "Fake mouse warp to ({}, {})", x, y);
        self.fake_mouse_move = Some(Event::MouseMove(Point::new(x, y)));
    }

    /// Number of events waiting in the queue.
    pub fn pending(&self) -> usize {
        self.state.queue.len()
    }

    //--- Internal Helpers -------------------------------------------------

    fn check_screen_change(&mut self) -> Option<Event> {
        let display = self.state.display()?;
        let (width, height) = self.state.queue.take_pending_resize()?;

        display.notify_resize(width, height);

        let generation = display.screen_change_generation();
        if generation == self.last_screen_generation {
            trace!(target: "bridge", "Resize {}x{} without screen change", width, height);
            return None;
        }

        debug!(
            target: "bridge",
            "Screen changed (generation {} -> {})",
            self.last_screen_generation,
            generation
        );
        self.last_screen_generation = generation;
        Some(Event::ScreenChanged)
    }
}

impl Default for EventSource {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for EventSource {
    fn drop(&mut self) {
        self.state.deactivate();
        debug!(
            target: "bridge",
            "Event bridge shut down ({} unpolled events discarded)",
            self.state.queue.len()
        );
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
