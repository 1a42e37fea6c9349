//=========================================================================
// Bridge State
//
// State shared by the producer (`EventFilter`) and the consumer
// (`EventSource`): the event queue, the attached display collaborator and
// the producer's activation flag.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;

//=== Internal Dependencies ===============================================

use super::event_queue::EventQueue;
use super::interface::GraphicsManager;

//=== BridgeState =========================================================

pub(crate) struct BridgeState {
    pub(crate) queue: EventQueue,
    display: RwLock<Option<Arc<dyn GraphicsManager>>>,
    active: AtomicBool,
}

impl BridgeState {
    pub(crate) fn new(queue_capacity: usize) -> Self {
        Self {
            queue: EventQueue::with_capacity(queue_capacity),
            display: RwLock::new(None),
            active: AtomicBool::new(true),
        }
    }

    //--- Display Collaborator ---------------------------------------------

    /// Returns a handle to the attached display.
    ///
    /// The read lock is released before returning, so callers never hold
    /// it while calling into the collaborator.
    pub(crate) fn display(&self) -> Option<Arc<dyn GraphicsManager>> {
        self.display.read().clone()
    }

    pub(crate) fn set_display(&self, display: Option<Arc<dyn GraphicsManager>>) {
        *self.display.write() = display;
    }

    pub(crate) fn has_display(&self) -> bool {
        self.display.read().is_some()
    }

    //--- Activation -------------------------------------------------------

    pub(crate) fn is_active(&self) -> bool {
        self.active.load(Ordering::Acquire)
    }

    pub(crate) fn deactivate(&self) {
        self.active.store(false, Ordering::Release);
    }
}
