//! Drawing surface abstraction and the retained display-list canvas.
//!
//! The ruler never talks to a toolkit directly. It draws through [`Surface`],
//! and [`Canvas`] records the calls as [`DrawCommand`]s that a frontend replays
//! (see `crate::widget::paint_canvas`). Like an HTML canvas, resizing a
//! [`Canvas`] discards its contents.

use egui::Color32;

/// A 2D drawing target with a resizable backing buffer.
pub trait Surface {
    /// Resizes the backing buffer. Existing content is discarded.
    fn resize(&mut self, width: u32, height: u32);

    /// Returns the backing buffer size as (width, height).
    fn size(&self) -> (u32, u32);

    /// Removes all content.
    fn clear(&mut self);

    /// Returns the rendered width of `text` at `font_size`.
    fn measure_text(&self, text: &str, font_size: f32) -> f32;

    /// Draws `text` with its top-left corner at (x, y).
    fn fill_text(&mut self, text: &str, x: f32, y: f32, font_size: f32, color: Color32);

    /// Strokes a straight line.
    fn stroke_line(&mut self, from: [f32; 2], to: [f32; 2], width: f32, color: Color32);
}

/// One recorded drawing operation.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Text {
        text: String,
        x: f32,
        y: f32,
        font_size: f32,
        color: Color32,
    },
    Line {
        from: [f32; 2],
        to: [f32; 2],
        width: f32,
        color: Color32,
    },
}

/// Display-list surface with fixed-advance text metrics.
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    width: u32,
    height: u32,
    /// Average glyph advance as a fraction of the font size
    glyph_width_ratio: f32,
    commands: Vec<DrawCommand>,
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new(0.6)
    }
}

impl Canvas {
    /// Creates an empty zero-sized canvas.
    pub fn new(glyph_width_ratio: f32) -> Self {
        Self {
            width: 0,
            height: 0,
            glyph_width_ratio,
            commands: Vec::new(),
        }
    }

    /// Returns the recorded commands in draw order.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Returns the recorded text commands in draw order.
    pub fn texts(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands.iter().filter(|c| matches!(c, DrawCommand::Text { .. }))
    }

    /// Returns the recorded line commands in draw order.
    pub fn lines(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands.iter().filter(|c| matches!(c, DrawCommand::Line { .. }))
    }
}

impl Surface for Canvas {
    fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.commands.clear();
    }

    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn clear(&mut self) {
        self.commands.clear();
    }

    fn measure_text(&self, text: &str, font_size: f32) -> f32 {
        text.chars().count() as f32 * font_size * self.glyph_width_ratio
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32, font_size: f32, color: Color32) {
        if self.width == 0 || self.height == 0 {
            return;
        }
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            x,
            y,
            font_size,
            color,
        });
    }

    fn stroke_line(&mut self, from: [f32; 2], to: [f32; 2], width: f32, color: Color32) {
        if self.width == 0 || self.height == 0 {
            return;
        }
        self.commands.push(DrawCommand::Line { from, to, width, color });
    }
}
