//! Keeps the drawing surface sized to its container.

use super::surface::Surface;

/// Backing-buffer size derived from the container; never stored separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceSize {
    pub width: u32,
    pub height: u32,
}

impl SurfaceSize {
    /// Derives the buffer size from the container's available width and the
    /// configured strip height. Negative or non-finite widths map to zero.
    pub fn from_container(container_width: f32, height: u32) -> Self {
        let width = if container_width.is_finite() {
            container_width.max(0.0).floor() as u32
        } else {
            0
        };
        Self { width, height }
    }
}

/// Owns the drawing surface and resizes it on layout changes.
///
/// A resize leaves the surface blank; the owner must redraw right after
/// every [`SurfaceManager::sync`].
#[derive(Debug)]
pub struct SurfaceManager<S: Surface> {
    surface: S,
}

impl<S: Surface> SurfaceManager<S> {
    pub fn new(surface: S) -> Self {
        Self { surface }
    }

    /// Resizes the surface to `size` if it differs. Returns true if a resize happened.
    pub fn sync(&mut self, size: SurfaceSize) -> bool {
        if self.surface.size() == (size.width, size.height) {
            return false;
        }
        log::debug!("Resizing ruler surface to {}x{}", size.width, size.height);
        self.surface.resize(size.width, size.height);
        true
    }

    /// Returns the current surface size.
    pub fn size(&self) -> SurfaceSize {
        let (width, height) = self.surface.size();
        SurfaceSize { width, height }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rendering::surface::Canvas;

    #[test]
    fn test_size_from_container() {
        assert_eq!(SurfaceSize::from_container(640.7, 30), SurfaceSize { width: 640, height: 30 });
        assert_eq!(SurfaceSize::from_container(-3.0, 30).width, 0);
        assert_eq!(SurfaceSize::from_container(f32::INFINITY, 30).width, 0);
    }

    #[test]
    fn test_sync_resizes_only_on_change() {
        let mut manager = SurfaceManager::new(Canvas::default());
        assert!(manager.sync(SurfaceSize::from_container(500.0, 30)));
        assert!(!manager.sync(SurfaceSize::from_container(500.0, 30)));
        assert!(manager.sync(SurfaceSize::from_container(500.0, 40)));
        assert_eq!(manager.size(), SurfaceSize { width: 500, height: 40 });
    }
}
