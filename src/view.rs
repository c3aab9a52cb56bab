use egui::Color32;

use crate::observer::CanvasObserver;
use crate::segment::Segment;

/// Presentation state behind one canvas window.
///
/// A view observes the model and keeps whatever immediate-mode rendering
/// needs each frame: the segments drawn so far, whether the window should
/// be shown yet, and the status line. It never talks to the model itself;
/// the app routes pointer and button input to the model and the model's
/// events come back through the `CanvasObserver` impl. Two views of the
/// same model therefore always show the same drawing.
pub struct CanvasView {
    title: String,
    segments: Vec<Segment>,
    status: String,
    stroke_color: Color32,
    visible: bool,
}

impl CanvasView {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            segments: Vec::new(),
            status: String::from("Start Painting"),
            stroke_color: Color32::BLACK,
            visible: false,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn stroke_color(&self) -> Color32 {
        self.stroke_color
    }

    /// Hidden until the model fires ready.
    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

impl CanvasObserver for CanvasView {
    fn on_canvas_ready(&mut self) {
        self.visible = true;
    }

    fn on_line_drawn(&mut self, segment: Segment) {
        self.segments.push(segment);
    }

    fn on_canvas_cleared(&mut self) {
        self.segments.clear();
        self.status.clear();
    }
}
