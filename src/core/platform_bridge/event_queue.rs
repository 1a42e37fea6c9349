//=========================================================================
// Event Queue
//=========================================================================
//
// Thread-safe FIFO of normalized events plus the pending-resize slot.
//
// Architecture:
//   EventFilter (UI thread) ──push()──► [ Mutex<QueueInner> ] ──try_pop()──► EventSource
//                           ──set_pending_resize()──►   ──take_pending_resize()──►
//
// The queue owns its lock; callers only ever see atomic operations, so
// lock/unlock can never be mismatched. Every critical section is O(1).
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::VecDeque;

use parking_lot::Mutex;

//=== Internal Dependencies ===============================================

use crate::core::input::Event;

//=== PendingResize =======================================================

/// Coalescing slot for resize notifications (latest size wins).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct PendingResize {
    dirty: bool,
    width: u32,
    height: u32,
}

//=== EventQueue ==========================================================

struct QueueInner {
    events: VecDeque<Event>,
    resize: PendingResize,
}

/// Unbounded FIFO of translated events guarded by a single mutex.
///
/// Only fully translated [`Event`]s are stored. The resize slot lives
/// under the same lock but is not part of the FIFO: repeated resizes
/// overwrite each other instead of queuing.
pub struct EventQueue {
    inner: Mutex<QueueInner>,
}

impl EventQueue {
    //--- Construction -----------------------------------------------------

    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates a queue with room for `capacity` events before reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: Mutex::new(QueueInner {
                events: VecDeque::with_capacity(capacity),
                resize: PendingResize::default(),
            }),
        }
    }

    //--- Producer Side ----------------------------------------------------

    /// Appends an event at the tail.
    pub fn push(&self, event: Event) {
        self.inner.lock().events.push_back(event);
    }

    /// Records the latest drawable size and marks the slot dirty.
    pub fn set_pending_resize(&self, width: u32, height: u32) {
        let mut inner = self.inner.lock();
        inner.resize = PendingResize {
            dirty: true,
            width,
            height,
        };
    }

    //--- Consumer Side ----------------------------------------------------

    /// Removes and returns the oldest event.
    pub fn try_pop(&self) -> Option<Event> {
        self.inner.lock().events.pop_front()
    }

    /// Returns the pending size and clears the dirty flag in one step.
    ///
    /// Returns `None` when no resize arrived since the last call.
    pub fn take_pending_resize(&self) -> Option<(u32, u32)> {
        let mut inner = self.inner.lock();
        if !inner.resize.dirty {
            return None;
        }
        inner.resize.dirty = false;
        Some((inner.resize.width, inner.resize.height))
    }

    //--- Utilities --------------------------------------------------------

    pub fn len(&self) -> usize {
        self.inner.lock().events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().events.is_empty()
    }
}

impl Default for EventQueue {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
