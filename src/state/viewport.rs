//! Visible-strip state of the ruler.
//!
//! This module encapsulates the horizontal scroll position and the pixel
//! dimensions of the strip. Nothing here is persisted; the host pushes new
//! values on scroll and layout changes.

/// State related to the visible part of the timeline.
///
/// Responsibilities:
/// - Tracking the horizontal scroll offset (pixels scrolled)
/// - Tracking the visible width and the fixed strip height
/// - Enforcing non-negative, finite values
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportState {
    /// Horizontal scroll offset in timeline pixels
    scroll_offset: f32,
    /// Visible width in pixels
    width: u32,
    /// Fixed strip height in pixels
    height: u32,
}

impl Default for ViewportState {
    fn default() -> Self {
        Self::new(0, 0)
    }
}

impl ViewportState {
    /// Creates a viewport with no scroll.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            scroll_offset: 0.0,
            width,
            height,
        }
    }

    // ===== Viewport Queries =====

    /// Returns the horizontal scroll offset in pixels.
    pub fn scroll_offset(&self) -> f32 {
        self.scroll_offset
    }

    /// Returns the visible width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the strip height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    // ===== Viewport Mutations =====

    /// Sets the scroll offset, clamping negative and non-finite input to zero.
    pub fn set_scroll_offset(&mut self, offset: f32) {
        self.scroll_offset = if offset.is_finite() { offset.max(0.0) } else { 0.0 };
    }

    /// Sets the visible width.
    pub fn set_width(&mut self, width: u32) {
        self.width = width;
    }

    /// Sets the strip height.
    pub fn set_height(&mut self, height: u32) {
        self.height = height;
    }
}
