use anyhow::Result;
use std::cell::RefCell;
use std::rc::Rc;
use timeruler::widget::show_time_ruler;
use timeruler::{Canvas, DocumentListeners, RulerConfig, ScaleConfig, TimeRuler};

/// Drives the ruler widget through headless egui frames.
struct Harness {
    ctx: egui::Context,
    time: f64,
    ruler: TimeRuler<Canvas>,
    seen: Rc<RefCell<Vec<f32>>>,
}

impl Harness {
    fn new() -> Self {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let ruler = TimeRuler::with_canvas(RulerConfig::default(), ScaleConfig::default(), DocumentListeners::new())
            .with_on_seek(move |position| sink.borrow_mut().push(position));
        let mut harness = Self {
            ctx: egui::Context::default(),
            time: 0.0,
            ruler,
            seen,
        };
        // Lays the strip out before any input arrives.
        harness.frame(Vec::new());
        harness
    }

    /// Runs one 16 ms frame with the given input events.
    fn frame(&mut self, events: Vec<egui::Event>) {
        let raw_input = egui::RawInput {
            screen_rect: Some(egui::Rect::from_min_size(egui::Pos2::ZERO, egui::vec2(800.0, 600.0))),
            time: Some(self.time),
            events,
            ..Default::default()
        };
        self.time += 0.016;
        let ruler = &mut self.ruler;
        let _ = self.ctx.run(raw_input, |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                show_time_ruler(ui, ruler);
            });
        });
    }

    fn idle_frames(&mut self, count: usize) {
        for _ in 0..count {
            self.frame(Vec::new());
        }
    }

    /// Timeline offset expected for a pointer at `x` with no scroll.
    fn expected(&self, x: f32) -> f32 {
        x - self.ruler.region_left() - self.ruler.config().left_offset
    }

    fn seen(&self) -> Vec<f32> {
        self.seen.borrow().clone()
    }
}

fn button(x: f32, y: f32, pressed: bool) -> egui::Event {
    egui::Event::PointerButton {
        pos: egui::pos2(x, y),
        button: egui::PointerButton::Primary,
        pressed,
        modifiers: egui::Modifiers::default(),
    }
}

fn moved(x: f32, y: f32) -> egui::Event {
    egui::Event::PointerMoved(egui::pos2(x, y))
}

#[test]
fn test_each_move_event_seeks_once() -> Result<()> {
    let mut harness = Harness::new();
    assert_eq!(harness.ruler.surface_size().height, 30);

    harness.frame(vec![moved(200.0, 20.0), button(200.0, 20.0, true)]);
    assert_eq!(harness.seen(), vec![harness.expected(200.0)]);
    assert!(harness.ruler.is_dragging());

    harness.idle_frames(5);
    assert_eq!(harness.seen().len(), 1);

    harness.frame(vec![moved(400.0, 20.0)]);
    // Reported in the frame the move arrived in.
    assert_eq!(harness.seen(), vec![harness.expected(200.0), harness.expected(400.0)]);

    harness.idle_frames(5);
    assert_eq!(harness.seen(), vec![harness.expected(200.0), harness.expected(400.0)]);
    Ok(())
}

#[test]
fn test_press_outside_strip_does_not_start_drag() -> Result<()> {
    let mut harness = Harness::new();
    harness.frame(vec![moved(200.0, 300.0), button(200.0, 300.0, true)]);
    assert!(!harness.ruler.is_dragging());

    harness.frame(vec![moved(250.0, 20.0)]);
    harness.frame(vec![button(250.0, 20.0, false)]);
    assert!(harness.seen().is_empty());
    Ok(())
}

#[test]
fn test_moves_outside_strip_keep_scrubbing() -> Result<()> {
    let mut harness = Harness::new();
    harness.frame(vec![button(200.0, 20.0, true)]);
    harness.frame(vec![moved(700.0, 500.0)]);
    harness.frame(vec![moved(650.0, 590.0), button(650.0, 590.0, false)]);

    assert_eq!(
        harness.seen(),
        vec![harness.expected(200.0), harness.expected(700.0), harness.expected(650.0)]
    );
    assert!(!harness.ruler.is_dragging());
    Ok(())
}

#[test]
fn test_nothing_fires_after_release() -> Result<()> {
    let mut harness = Harness::new();
    harness.frame(vec![button(200.0, 20.0, true)]);
    harness.frame(vec![button(200.0, 20.0, false)]);
    assert!(!harness.ruler.is_dragging());

    harness.frame(vec![moved(300.0, 20.0)]);
    harness.idle_frames(3);
    harness.frame(vec![moved(500.0, 200.0)]);
    assert_eq!(harness.seen(), vec![harness.expected(200.0)]);
    Ok(())
}

#[test]
fn test_events_within_one_frame_apply_in_order() -> Result<()> {
    let mut harness = Harness::new();
    harness.frame(vec![
        button(200.0, 20.0, true),
        moved(260.0, 20.0),
        moved(240.0, 20.0),
        button(240.0, 20.0, false),
        moved(600.0, 20.0),
    ]);

    assert_eq!(
        harness.seen(),
        vec![harness.expected(200.0), harness.expected(260.0), harness.expected(240.0)]
    );
    assert!(!harness.ruler.is_dragging());
    Ok(())
}
