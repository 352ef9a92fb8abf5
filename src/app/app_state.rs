//! Centralized state for the ruler demo.
//!
//! Owns the ruler, the palette selection and the last seek result. Seek
//! positions arrive from the ruler callback in absolute timeline pixels and
//! are converted to playback time here, which is the host's job.

use std::cell::Cell;
use std::rc::Rc;

use timeruler::{
    format_frame_count, format_timestamp, DocumentListeners, MediaAsset, PaletteManager, RulerConfig,
    ScaleConfig, TimeRuler,
};

const MIN_ZOOM: f32 = 0.001;
const MAX_ZOOM: f32 = 10.0;
const DEMO_FRAME_RATE: f64 = 24.0;

/// How tick labels are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelMode {
    Timestamp,
    Frames,
}

/// Main demo state.
pub struct AppState {
    /// The ruler widget state
    pub ruler: TimeRuler,
    /// Palette registry and current selection
    pub palettes: PaletteManager,
    /// Most recent seek position delivered by the ruler callback
    pending_seek: Rc<Cell<Option<f32>>>,
    /// Playhead time in milliseconds
    playhead_ms: f64,
    /// Length of the demo timeline in milliseconds
    duration_ms: u64,
    /// Index into the demo catalog of the selected clip
    selected_media: Option<usize>,
    label_mode: LabelMode,
}

impl AppState {
    /// Creates the demo state with settings loaded from storage.
    pub fn new(config: RulerConfig, scale: ScaleConfig, palette_name: &str, duration_ms: u64) -> Self {
        let mut palettes = PaletteManager::new();
        if let Err(e) = palettes.set_current_palette(palette_name) {
            log::warn!("{}; using {}", e, palettes.current_palette().name);
        }

        let pending_seek = Rc::new(Cell::new(None));
        let sink = pending_seek.clone();
        let ruler = TimeRuler::with_canvas(config, scale, DocumentListeners::new())
            .with_palette(palettes.current_palette().clone())
            .with_on_seek(move |position| sink.set(Some(position)));

        Self {
            ruler,
            palettes,
            pending_seek,
            playhead_ms: 0.0,
            duration_ms,
            selected_media: None,
            label_mode: LabelMode::Timestamp,
        }
    }

    // ===== Queries =====

    pub fn playhead_ms(&self) -> f64 {
        self.playhead_ms
    }

    pub fn duration_ms(&self) -> u64 {
        self.duration_ms
    }

    pub fn selected_media(&self) -> Option<usize> {
        self.selected_media
    }

    pub fn label_mode(&self) -> LabelMode {
        self.label_mode
    }

    /// Pixels per millisecond at the current zoom.
    pub fn pixels_per_ms(&self) -> f32 {
        self.ruler.scale().zoom() * self.ruler.config().base_pixels_per_frame
    }

    /// Full timeline length in pixels.
    pub fn timeline_width_px(&self) -> f32 {
        self.duration_ms as f32 * self.pixels_per_ms()
    }

    /// Largest scroll offset that still shows the end of the timeline.
    pub fn max_scroll(&self) -> f32 {
        let visible = self.ruler.viewport().width() as f32 - self.ruler.config().left_offset;
        (self.timeline_width_px() - visible).max(0.0)
    }

    /// Playhead x relative to the ruler strip.
    pub fn playhead_x(&self) -> f32 {
        self.ruler.config().left_offset + self.playhead_ms as f32 * self.pixels_per_ms()
            - self.ruler.viewport().scroll_offset()
    }

    // ===== Mutations =====

    /// Applies the latest seek from the ruler, if any. Returns true if the playhead moved.
    pub fn apply_pending_seek(&mut self) -> bool {
        let Some(position) = self.pending_seek.take() else {
            return false;
        };
        let ms = (position / self.pixels_per_ms()) as f64;
        self.playhead_ms = ms.clamp(0.0, self.duration_ms as f64);
        true
    }

    /// Scrolls horizontally by `delta` pixels, clamped to the timeline.
    pub fn pan_by(&mut self, delta: f32) {
        let scroll = (self.ruler.viewport().scroll_offset() + delta).clamp(0.0, self.max_scroll());
        self.ruler.set_scroll_offset(scroll);
    }

    /// Zooms by `factor`, keeping the time under strip position `focus_x` in place.
    pub fn zoom_around(&mut self, factor: f32, focus_x: f32) {
        let old_ppm = self.pixels_per_ms();
        let local = (focus_x - self.ruler.config().left_offset).max(0.0);
        let focus_ms = (self.ruler.viewport().scroll_offset() + local) / old_ppm;

        let zoom = (self.ruler.scale().zoom() * factor).clamp(MIN_ZOOM, MAX_ZOOM);
        self.ruler.set_scale(self.ruler.scale().with_zoom(zoom));

        let scroll = (focus_ms * self.pixels_per_ms() - local).clamp(0.0, self.max_scroll());
        self.ruler.set_scroll_offset(scroll);
    }

    /// Selects a palette by name and pushes it to the ruler.
    pub fn select_palette(&mut self, name: &str) {
        match self.palettes.set_current_palette(name) {
            Ok(()) => self.ruler.set_palette(self.palettes.current_palette().clone()),
            Err(e) => log::warn!("{}", e),
        }
    }

    /// Switches tick labels between timestamps and 24 fps frame counts.
    pub fn set_label_mode(&mut self, mode: LabelMode) {
        self.label_mode = mode;
        match mode {
            LabelMode::Timestamp => self.ruler.set_label_format(format_timestamp),
            LabelMode::Frames => self
                .ruler
                .set_label_format(|ms| format_frame_count(ms * DEMO_FRAME_RATE / 1000.0)),
        }
    }

    /// Selects a clip and moves the playhead to its start on the demo timeline.
    pub fn select_media(&mut self, index: usize, catalog: &[MediaAsset]) {
        if index >= catalog.len() {
            return;
        }
        self.selected_media = Some(index);
        self.playhead_ms = catalog[..index].iter().map(|a| a.duration_ms as f64).sum();
    }
}
