//=========================================================================
// Backend Runtime
//
// Wires the platform (UI thread) to the engine loop (spawned thread)
// through the event bridge.
//
// Architecture:
// ```text
//     BackendBuilder  ──build()──>  Backend  ──run(engine_loop)──>  [Runtime]
//         │                            │
//         ├─ with_title()              ├─ creates EventSource + WindowSurface
//         ├─ with_window_size()        ├─ spawns engine thread
//         ├─ with_queue_capacity()     ├─ runs platform (blocks)
//         └─ with_shutdown_poll_…()    └─ joins engine thread
// ```
//
//=========================================================================

//=== External Dependencies ===============================================

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crossbeam_channel::bounded;
use log::{error, info, warn};

//=== Internal Dependencies ===============================================

use crate::core::platform_bridge::{
    EventHandler, EventSource, NativeEvent, PlatformError, WindowSurface,
};
use crate::platform::{EngineSignal, Platform, WindowConfig};

//=== BackendBuilder ======================================================

/// Builder for configuring and constructing a [`Backend`].
///
/// # Default Values
///
/// - **Title**: "Aetheric Engine"
/// - **Window size**: 800x600 (logical pixels)
/// - **Queue capacity**: 128 events (initial, the queue grows as needed)
/// - **Shutdown poll interval**: 16 ms
///
/// # Examples
///
/// ```no_run
/// use aetheric_event_bridge::BackendBuilder;
///
/// BackendBuilder::new()
///     .with_title("Demo")
///     .with_window_size(1024, 768)
///     .build()
///     .run(|mut events| {
///         loop {
///             while let Some(event) = events.poll_event() {
///                 if event.is_quit() {
///                     return;
///                 }
///             }
///             std::thread::sleep(std::time::Duration::from_millis(16));
///         }
///     })
///     .unwrap();
/// ```
pub struct BackendBuilder {
    title: String,
    width: u32,
    height: u32,
    queue_capacity: usize,
    shutdown_poll_interval: Duration,
}

impl BackendBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            title: "Aetheric Engine".to_string(),
            width: 800,
            height: 600,
            queue_capacity: 128,
            shutdown_poll_interval: Duration::from_millis(16),
        }
    }

    /// Sets the window title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the initial window size in logical pixels.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    pub fn with_window_size(mut self, width: u32, height: u32) -> Self {
        assert!(width > 0 && height > 0, "Window size must be positive, got {}x{}", width, height);
        self.width = width;
        self.height = height;
        self
    }

    /// Sets the initial event queue capacity.
    ///
    /// The queue is unbounded; this only avoids reallocation during
    /// input bursts.
    ///
    /// # Panics
    ///
    /// Panics if `capacity == 0`.
    pub fn with_queue_capacity(mut self, capacity: usize) -> Self {
        assert!(capacity > 0, "Queue capacity must be positive");
        self.queue_capacity = capacity;
        self
    }

    /// Sets how often the idle event loop wakes to check for engine
    /// shutdown.
    ///
    /// # Panics
    ///
    /// Panics if `interval` is zero.
    pub fn with_shutdown_poll_interval(mut self, interval: Duration) -> Self {
        assert!(!interval.is_zero(), "Shutdown poll interval must be positive");
        self.shutdown_poll_interval = interval;
        self
    }

    /// Builds the backend.
    pub fn build(self) -> Backend {
        info!(
            "Building backend ({}x{}, queue: {})",
            self.width, self.height, self.queue_capacity
        );

        Backend {
            window: WindowConfig {
                title: self.title,
                width: self.width,
                height: self.height,
                shutdown_poll_interval: self.shutdown_poll_interval,
            },
            queue_capacity: self.queue_capacity,
        }
    }
}

impl Default for BackendBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//=== Backend =============================================================

/// Configured backend, ready to run.
///
/// # Architecture
///
/// ```text
/// Backend (Main Thread)
///   ├─► Platform (winit event loop)
///   │     └─► EventFilter ──► EventQueue
///   │
///   └─► Engine thread
///         └─► engine_loop(EventSource) ──poll_event()──► EventQueue
///
/// Shutdown: engine_loop returns → EngineSignal::Shutdown → event loop exits
/// ```
pub struct Backend {
    window: WindowConfig,
    queue_capacity: usize,
}

impl Backend {
    /// Runs the backend and blocks until both threads have finished.
    ///
    /// # Lifecycle
    ///
    /// 1. Creates the event bridge and attaches a [`WindowSurface`]
    /// 2. Spawns the engine thread running `engine_loop`
    /// 3. Runs the platform event loop (blocks here)
    /// 4. Delivers a final `Quit` in case the platform stopped first
    /// 5. Joins the engine thread
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError`] if the engine thread cannot be spawned or
    /// the platform fails. An engine-thread panic is logged, not returned.
    pub fn run<F>(self, engine_loop: F) -> Result<(), PlatformError>
    where
        F: FnOnce(EventSource) + Send + 'static,
    {
        info!("Starting backend runtime");

        //--- 1. Create the bridge ----------------------------------------
        // Sized from the config until the platform seeds the physical size
        let surface = Arc::new(WindowSurface::new(self.window.width, self.window.height));
        let source = EventSource::with_capacity(self.queue_capacity);
        source.attach(surface.clone());
        let filter = source.event_filter();
        let fallback_filter = source.event_filter();

        //--- 2. Spawn the engine thread ----------------------------------
        let (tx, rx) = bounded(1);
        let engine_handle = thread::Builder::new()
            .name("engine".into())
            .spawn(move || {
                engine_loop(source);
                // The receiver may already be gone if the platform failed
                let _ = tx.send(EngineSignal::Shutdown);
            })
            .map_err(PlatformError::EngineThreadSpawn)?;
        info!("Engine thread spawned");

        //--- 3. Launch the platform --------------------------------------
        let result = Platform::new(filter, rx, self.window)
            .with_surface(surface)
            .run();
        match &result {
            Ok(()) => info!("Platform event loop exited"),
            Err(e) => error!("Platform error: {}", e),
        }

        //--- 4. Make sure the engine loop sees Quit -----------------------
        if fallback_filter.handle(NativeEvent::Close) {
            warn!("Platform stopped before the engine loop, sent Quit");
        }

        //--- 5. Wait for the engine thread -------------------------------
        match engine_handle.join() {
            Ok(()) => info!("Engine thread terminated cleanly"),
            Err(e) => error!("Engine thread panicked: {:?}", e),
        }

        info!("Backend shutdown complete");
        result
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
