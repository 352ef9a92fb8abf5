//! The time ruler component.
//!
//! [`TimeRuler`] composes the surface manager, the tick renderer and the
//! gesture interpreter. Every setter that can change what the strip shows
//! redraws synchronously before returning, so the surface is never stale
//! relative to the current scroll, scale and size.

use crate::config::RulerConfig;
use crate::input::{DocumentEvent, DocumentListeners, GestureInterpreter, GestureOutcome};
use crate::rendering::tick_renderer::{self, TickLayout};
use crate::rendering::{Canvas, Surface, SurfaceManager, SurfaceSize};
use crate::scale::ScaleConfig;
use crate::state::ViewportState;
use crate::theme::RulerPalette;
use crate::utils::format_timestamp;

/// Turns a tick time value into label text.
pub type LabelFormat = Box<dyn Fn(f64) -> String>;

/// Receives absolute timeline-pixel offsets on press and drag.
pub type SeekCallback = Box<dyn FnMut(f32)>;

/// A zoomable, scrubbable time ruler drawn onto a [`Surface`].
pub struct TimeRuler<S: Surface = Canvas> {
    config: RulerConfig,
    scale: ScaleConfig,
    viewport: ViewportState,
    palette: RulerPalette,
    label_format: LabelFormat,
    on_seek: Option<SeekCallback>,
    surface: SurfaceManager<S>,
    gestures: GestureInterpreter,
    /// Left edge of the interactive region, in pointer coordinates
    region_left: f32,
    layout: TickLayout,
}

impl<S: Surface> std::fmt::Debug for TimeRuler<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TimeRuler")
            .field("scale", &self.scale)
            .field("viewport", &self.viewport)
            .field("region_left", &self.region_left)
            .field("dragging", &self.gestures.is_dragging())
            .finish_non_exhaustive()
    }
}

impl TimeRuler<Canvas> {
    /// Creates a ruler drawing into a [`Canvas`] whose text metrics follow `config`.
    pub fn with_canvas(config: RulerConfig, scale: ScaleConfig, document: DocumentListeners) -> Self {
        let canvas = Canvas::new(config.glyph_width_ratio);
        Self::new(canvas, config, scale, document)
    }
}

impl<S: Surface> TimeRuler<S> {
    /// Mounts the ruler: sizes the surface to a zero-width container and draws.
    pub fn new(surface: S, config: RulerConfig, scale: ScaleConfig, document: DocumentListeners) -> Self {
        let gestures = GestureInterpreter::new(document, config.left_offset);
        let viewport = ViewportState::new(0, config.height);
        let mut ruler = Self {
            config,
            scale,
            viewport,
            palette: RulerPalette::default(),
            label_format: Box::new(format_timestamp),
            on_seek: None,
            surface: SurfaceManager::new(surface),
            gestures,
            region_left: 0.0,
            layout: TickLayout::default(),
        };
        ruler.refresh();
        ruler
    }

    /// Replaces the label formatter.
    pub fn with_label_format(mut self, label_format: impl Fn(f64) -> String + 'static) -> Self {
        self.set_label_format(label_format);
        self
    }

    /// Installs the seek callback.
    pub fn with_on_seek(mut self, on_seek: impl FnMut(f32) + 'static) -> Self {
        self.on_seek = Some(Box::new(on_seek));
        self
    }

    pub fn with_palette(mut self, palette: RulerPalette) -> Self {
        self.set_palette(palette);
        self
    }

    // ===== Queries =====

    pub fn config(&self) -> &RulerConfig {
        &self.config
    }

    pub fn scale(&self) -> &ScaleConfig {
        &self.scale
    }

    pub fn viewport(&self) -> &ViewportState {
        &self.viewport
    }

    pub fn palette(&self) -> &RulerPalette {
        &self.palette
    }

    pub fn surface(&self) -> &S {
        self.surface.surface()
    }

    pub fn surface_size(&self) -> SurfaceSize {
        self.surface.size()
    }

    /// Returns the layout produced by the most recent redraw.
    pub fn layout(&self) -> &TickLayout {
        &self.layout
    }

    pub fn is_dragging(&self) -> bool {
        self.gestures.is_dragging()
    }

    pub fn region_left(&self) -> f32 {
        self.region_left
    }

    // ===== Redrawing setters =====

    pub fn set_scroll_offset(&mut self, scroll_offset: f32) {
        self.viewport.set_scroll_offset(scroll_offset);
        self.refresh();
    }

    pub fn set_scale(&mut self, scale: ScaleConfig) {
        self.scale = scale;
        self.refresh();
    }

    /// Follows a container layout change.
    pub fn set_container_width(&mut self, container_width: f32) {
        let size = SurfaceSize::from_container(container_width, self.viewport.height());
        self.viewport.set_width(size.width);
        self.refresh();
    }

    pub fn set_height(&mut self, height: u32) {
        self.viewport.set_height(height);
        self.refresh();
    }

    pub fn set_label_format(&mut self, label_format: impl Fn(f64) -> String + 'static) {
        self.label_format = Box::new(label_format);
        self.refresh();
    }

    pub fn set_palette(&mut self, palette: RulerPalette) {
        self.palette = palette;
        self.refresh();
    }

    /// Replaces the layout constants. The strip height follows `config.height`.
    pub fn set_config(&mut self, config: RulerConfig) {
        self.gestures.set_leading_offset(config.left_offset);
        self.viewport.set_height(config.height);
        self.config = config;
        self.refresh();
    }

    /// Installs or removes the seek callback. A missing callback makes gestures no-ops.
    pub fn set_on_seek(&mut self, on_seek: Option<SeekCallback>) {
        self.on_seek = on_seek;
    }

    /// Records where the interactive region starts in pointer coordinates.
    pub fn set_region_left(&mut self, region_left: f32) {
        self.region_left = region_left;
    }

    /// Resizes the surface if the derived size changed, then redraws.
    fn refresh(&mut self) {
        let size = SurfaceSize {
            width: self.viewport.width(),
            height: self.viewport.height(),
        };
        self.surface.sync(size);
        self.layout = tick_renderer::draw(
            self.surface.surface_mut(),
            &self.viewport,
            &self.scale,
            &self.config,
            &self.palette,
            &*self.label_format,
        );
    }

    // ===== Gestures =====

    /// Maps a pointer x to an absolute timeline-pixel offset without seeking.
    pub fn map_screen_to_timeline(&self, client_x: f32) -> Option<f32> {
        self.gestures
            .map_screen_to_timeline(client_x, self.region_left, self.viewport.scroll_offset())
    }

    /// Press over the interactive region: starts a drag and seeks once.
    pub fn pointer_pressed(&mut self, client_x: f32) -> Option<f32> {
        let position = self
            .gestures
            .press(client_x, self.region_left, self.viewport.scroll_offset());
        self.emit_seek(position)
    }

    /// Dispatches a document-scope move, then handles whatever the drag
    /// session received. Returns the last seek position, if any.
    pub fn pointer_moved(&mut self, client_x: f32) -> Option<f32> {
        self.gestures
            .document()
            .dispatch(DocumentEvent::PointerMove { x: client_x });
        self.process_document_events().seeks.last().copied()
    }

    /// Dispatches a document-scope release. Returns true if it ended a drag.
    pub fn pointer_released(&mut self) -> bool {
        self.gestures.document().dispatch(DocumentEvent::PointerRelease);
        self.process_document_events().released
    }

    /// Handles events other code dispatched on the shared document since
    /// the last call, seeking once per queued move.
    pub fn process_document_events(&mut self) -> GestureOutcome {
        let outcome = self
            .gestures
            .process_document_events(self.region_left, self.viewport.scroll_offset());
        for &position in &outcome.seeks {
            self.emit_seek(Some(position));
        }
        outcome
    }

    /// Ends any active drag and releases its listeners.
    pub fn teardown(&mut self) {
        self.gestures.cancel();
    }

    fn emit_seek(&mut self, position: Option<f32>) -> Option<f32> {
        let position = position?;
        if let Some(on_seek) = self.on_seek.as_mut() {
            log::trace!("Ruler seek to timeline offset {}", position);
            on_seek(position);
        }
        Some(position)
    }
}
