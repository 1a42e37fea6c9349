//=========================================================================
// Window Surface
//
// Reference display collaborator tracking the drawable area of a single
// window. The runtime attaches one of these to the bridge at startup and
// the platform seeds it with the window's physical size once the window
// exists; renderers can provide their own `GraphicsManager` instead.
//
// Behavior:
// - `seed_size` stores the size without touching the generation
// - `notify_resize` with the current size is a no-op; any other size is
//   stored and bumps the screen-change generation
// - `notify_mouse_position` clamps the pointer into [0, w-1] x [0, h-1]
//
//=========================================================================

//=== External Dependencies ===============================================

use log::debug;
use parking_lot::Mutex;

//=== Internal Dependencies ===============================================

use super::interface::GraphicsManager;
use crate::core::input::Point;

//=== WindowSurface =======================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct SurfaceState {
    width: u32,
    height: u32,
    generation: u32,
}

/// Drawable-area tracker implementing [`GraphicsManager`].
pub struct WindowSurface {
    state: Mutex<SurfaceState>,
}

impl WindowSurface {
    /// Creates a surface of the given initial size at generation 0.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            state: Mutex::new(SurfaceState {
                width,
                height,
                generation: 0,
            }),
        }
    }

    /// Replaces the size without reporting a screen change.
    ///
    /// Used once the real window exists, so that a later `notify_resize`
    /// with the same physical size is recognized as a no-op.
    pub fn seed_size(&self, width: u32, height: u32) {
        let mut state = self.state.lock();
        state.width = width;
        state.height = height;
        debug!(target: "bridge", "Surface seeded at {}x{}", width, height);
    }

    /// Current drawable size.
    pub fn size(&self) -> (u32, u32) {
        let state = self.state.lock();
        (state.width, state.height)
    }
}

impl GraphicsManager for WindowSurface {
    fn notify_resize(&self, width: u32, height: u32) {
        let mut state = self.state.lock();
        if state.width == width && state.height == height {
            return;
        }

        state.width = width;
        state.height = height;
        state.generation = state.generation.wrapping_add(1);

        debug!(
            target: "bridge",
            "Surface resized to {}x{} (generation {})",
            width,
            height,
            state.generation
        );
    }

    fn notify_mouse_position(&self, position: &mut Point) -> bool {
        let (width, height) = self.size();
        let max_x = i32::try_from(width).unwrap_or(i32::MAX).saturating_sub(1).max(0);
        let max_y = i32::try_from(height).unwrap_or(i32::MAX).saturating_sub(1).max(0);

        let clamped = Point::new(position.x.clamp(0, max_x), position.y.clamp(0, max_y));
        let inside = width > 0 && height > 0 && clamped == *position;
        *position = clamped;
        inside
    }

    fn screen_change_generation(&self) -> u32 {
        self.state.lock().generation
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_generation_zero() {
        let surface = WindowSurface::new(320, 200);
        assert_eq!(surface.size(), (320, 200));
        assert_eq!(surface.screen_change_generation(), 0);
    }

    #[test]
    fn same_size_resize_keeps_generation() {
        let surface = WindowSurface::new(320, 200);
        surface.notify_resize(320, 200);
        assert_eq!(surface.screen_change_generation(), 0);
    }

    #[test]
    fn new_size_bumps_generation() {
        let surface = WindowSurface::new(320, 200);
        surface.notify_resize(640, 400);
        surface.notify_resize(800, 600);
        assert_eq!(surface.size(), (800, 600));
        assert_eq!(surface.screen_change_generation(), 2);
    }

    #[test]
    fn seeded_size_keeps_generation() {
        let surface = WindowSurface::new(800, 600);
        surface.seed_size(1200, 900);
        assert_eq!(surface.size(), (1200, 900));
        assert_eq!(surface.screen_change_generation(), 0);

        surface.notify_resize(1200, 900);
        assert_eq!(surface.screen_change_generation(), 0);
    }

    #[test]
    fn inside_point_is_accepted_unchanged() {
        let surface = WindowSurface::new(100, 50);
        let mut p = Point::new(99, 49);
        assert!(surface.notify_mouse_position(&mut p));
        assert_eq!(p, Point::new(99, 49));
    }

    #[test]
    fn outside_point_is_clamped() {
        let surface = WindowSurface::new(100, 50);

        let mut p = Point::new(150, -3);
        assert!(!surface.notify_mouse_position(&mut p));
        assert_eq!(p, Point::new(99, 0));

        let mut p = Point::new(-20, 75);
        assert!(!surface.notify_mouse_position(&mut p));
        assert_eq!(p, Point::new(0, 49));
    }

    #[test]
    fn zero_sized_surface_clamps_to_origin() {
        let surface = WindowSurface::new(0, 0);
        let mut p = Point::new(5, 5);
        assert!(!surface.notify_mouse_position(&mut p));
        assert_eq!(p, Point::new(0, 0));
    }
}
