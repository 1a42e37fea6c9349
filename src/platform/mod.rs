//=========================================================================
// Platform Subsystem
//
// Runs the winit event loop on the UI thread and feeds every window
// event into the bridge's producer.
//
// Architecture:
// ```text
//  UI Thread:                          Engine Thread:
//  ┌──────────────────────────┐       ┌──────────────────┐
//  │  Winit Event Loop        │       │  engine loop     │
//  │   ↓                      │       │   ↑              │
//  │  InputProcessor          │       │  EventSource     │
//  │   ├─ Converts Winit      │       │   poll_event()   │
//  │   └─ Tracks modifiers,   │       │                  │
//  │      cursor position     │       │                  │
//  │   ↓ NativeEvent          │       │                  │
//  │  EventHandler ───────────┼──► EventQueue            │
//  │   ↓ (not consumed)       │       │                  │
//  │  default processing      │       │                  │
//  │                          │       │                  │
//  │  about_to_wait ◄─────────┼───────┤ EngineSignal     │
//  └──────────────────────────┘       └──────────────────┘
// ```
//
// Key Design Decisions:
// - **Close does not exit**: CloseRequested only becomes `Quit` for the
//   engine; the loop exits when the engine thread signals shutdown
// - **Physical coordinates**: the window is sized in logical pixels but
//   cursor positions arrive in physical ones, so the attached surface is
//   seeded from `inner_size()` as soon as the window exists
// - **Shutdown polling**: the loop wakes every poll interval to check
//   the shutdown channel, a disconnected channel counts as shutdown
// - **Main thread requirement**: Winit mandates main thread on macOS/iOS,
//   so this runs on the thread that called `Backend::run()`
//
//=========================================================================

//=== Submodules ==========================================================

mod input_processor;

//=== External Crates =====================================================

use std::sync::Arc;
use std::time::Duration;

use crossbeam_channel::{Receiver, TryRecvError};
use log::*;
use winit::{
    application::ApplicationHandler,
    dpi::{LogicalSize, PhysicalSize},
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowAttributes, WindowId},
};

//=== Internal Imports ====================================================

use crate::core::platform_bridge::{EventHandler, PlatformError, WindowSurface};
use input_processor::InputProcessor;

//=== EngineSignal ========================================================

/// Messages sent from the engine thread back to the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum EngineSignal {
    /// The engine loop returned; the event loop should exit.
    Shutdown,
}

//=== WindowConfig ========================================================

/// Window parameters the platform creates its window with.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct WindowConfig {
    pub(crate) title: String,
    pub(crate) width: u32,
    pub(crate) height: u32,
    pub(crate) shutdown_poll_interval: Duration,
}

//=== Platform ============================================================

/// Window owner and native event source.
///
/// # Lifecycle
///
/// 1. **Construction**: `Platform::new(handler, shutdown, config)`
/// 2. **Execution**: `platform.run()` blocks in the winit event loop
/// 3. **Event processing**: every window event goes to the handler;
///    unconsumed ones get default processing
/// 4. **Shutdown**: engine thread sends `EngineSignal::Shutdown` (or hangs
///    up) → the loop exits → `run()` returns
///
/// # Thread Safety
///
/// Not Send/Sync by intent: it owns the window and must stay on the
/// thread running the event loop.
pub(crate) struct Platform<H: EventHandler> {
    /// OS window handle (None until `resumed()` called).
    window: Option<Window>,

    /// Receives native events (the bridge producer in production).
    handler: H,

    /// Converts winit events to native events.
    input_processor: InputProcessor,

    /// Shutdown notifications from the engine thread.
    shutdown: Receiver<EngineSignal>,

    config: WindowConfig,

    /// Display seeded with the window's physical size once it exists.
    surface: Option<Arc<WindowSurface>>,

    /// First fatal error hit inside the event loop.
    error: Option<PlatformError>,
}

impl<H: EventHandler> Platform<H> {
    //--- Construction -----------------------------------------------------

    /// Creates a new platform. The window is created lazily in `resumed()`.
    pub(crate) fn new(handler: H, shutdown: Receiver<EngineSignal>, config: WindowConfig) -> Self {
        info!(target: "platform", "Platform subsystem initialized");
        Self {
            window: None,
            handler,
            input_processor: InputProcessor::new(),
            shutdown,
            config,
            surface: None,
            error: None,
        }
    }

    /// Sets the surface to seed with the created window's size.
    pub(crate) fn with_surface(mut self, surface: Arc<WindowSurface>) -> Self {
        self.surface = Some(surface);
        self
    }

    //--- Execution --------------------------------------------------------

    /// Runs the event loop until the engine signals shutdown.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError`] if the event loop cannot be created or
    /// fails while running, or if the window could not be created.
    pub(crate) fn run(mut self) -> Result<(), PlatformError> {
        debug!(target: "platform", "Starting Winit event loop");

        let event_loop = EventLoop::new().map_err(PlatformError::EventLoopCreation)?;

        event_loop
            .run_app(&mut self)
            .map_err(PlatformError::EventLoopExecution)?;

        match self.error.take() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }

    //--- Internal Helpers -------------------------------------------------

    /// Forwards a window event to the handler, falling back to default
    /// processing when it is not consumed.
    fn dispatch(&mut self, event: &WindowEvent) {
        let native = self.input_processor.process(event);
        if !self.handler.handle(native) {
            self.default_processing(event);
        }
    }

    fn default_processing(&self, event: &WindowEvent) {
        match event {
            WindowEvent::RedrawRequested => {}
            WindowEvent::ModifiersChanged(state) => {
                trace!(target: "platform::input", "Modifiers changed: {:?}", state.state());
            }
            other => {
                trace!(target: "platform", "Unhandled window event: {:?}", other);
            }
        }
    }

    /// Brings the attached surface in line with the real window.
    fn window_created(&self, size: PhysicalSize<u32>) {
        if let Some(surface) = &self.surface {
            surface.seed_size(size.width, size.height);
        }
    }

    /// Records a fatal error. Only the first one is kept.
    ///
    /// The engine loop is not notified here; the runtime delivers its
    /// `Quit` once the event loop has returned.
    fn fail(&mut self, error: PlatformError) {
        error!(target: "platform", "{}", error);
        if self.error.is_none() {
            self.error = Some(error);
        }
    }

    /// Returns `true` once the engine thread has asked to stop.
    fn shutdown_requested(&self) -> bool {
        match self.shutdown.try_recv() {
            Ok(EngineSignal::Shutdown) => {
                info!(target: "platform", "Engine requested shutdown");
                true
            }
            Err(TryRecvError::Disconnected) => {
                warn!(target: "platform", "Engine channel disconnected");
                true
            }
            Err(TryRecvError::Empty) => false,
        }
    }

    //--- Test Accessors ---------------------------------------------------

    #[cfg(test)]
    pub(crate) fn window(&self) -> Option<&Window> {
        self.window.as_ref()
    }
}

//=== Winit Integration ===================================================

impl<H: EventHandler> ApplicationHandler for Platform<H> {
    /// Called when app becomes active (startup or mobile resume).
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            debug!(target: "platform", "Window already exists (mobile resume?)");
            return;
        }

        let attrs = WindowAttributes::default()
            .with_title(self.config.title.clone())
            .with_inner_size(LogicalSize::new(self.config.width, self.config.height));

        match event_loop.create_window(attrs) {
            Ok(window) => {
                info!(
                    target: "platform",
                    "Window created: {}x{} @ {}x DPI",
                    window.inner_size().width,
                    window.inner_size().height,
                    window.scale_factor()
                );
                self.window_created(window.inner_size());
                self.window = Some(window);
            }
            Err(e) => {
                self.fail(PlatformError::WindowCreation(e));
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, _event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        if matches!(event, WindowEvent::CloseRequested) {
            info!(target: "platform", "Window close requested");
        }
        self.dispatch(&event);
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.shutdown_requested() {
            event_loop.exit();
            return;
        }
        event_loop.set_control_flow(ControlFlow::wait_duration(self.config.shutdown_poll_interval));
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
