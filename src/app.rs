use std::cell::RefCell;
use std::rc::Rc;

use egui::Color32;

use crate::error::RegistryError;
use crate::logger::SegmentLogger;
use crate::model::CanvasModel;
use crate::observer::SharedObserver;
use crate::view::CanvasView;

const CANVAS_WIDTH: i32 = 600;
const CANVAS_HEIGHT: i32 = 600;

/// The application shell: one model, two views of it, and a logger.
///
/// All wiring is explicit construction here; there is no global state.
/// Each view gets its own egui window, and because both observe the same
/// model, drawing in either window shows up in both.
pub struct CanvasApp {
    model: CanvasModel,
    views: Vec<Rc<RefCell<CanvasView>>>,
    logger: Rc<RefCell<SegmentLogger>>,
}

impl CanvasApp {
    /// Called once before the first frame. Builds the model, registers the
    /// observers, and starts the canvas so the views become visible.
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Result<Self, RegistryError> {
        let mut model = CanvasModel::new(CANVAS_WIDTH, CANVAS_HEIGHT);

        let views = vec![
            Rc::new(RefCell::new(CanvasView::new("Canvas 1"))),
            Rc::new(RefCell::new(CanvasView::new("Canvas 2"))),
        ];
        let logger = Rc::new(RefCell::new(SegmentLogger::new()));

        for view in &views {
            let observer: SharedObserver = view.clone();
            model.register(Rc::downgrade(&observer))?;
        }
        let observer: SharedObserver = logger.clone();
        model.register(Rc::downgrade(&observer))?;

        model.start();

        Ok(Self {
            model,
            views,
            logger,
        })
    }

    fn show_view(&mut self, ctx: &egui::Context, index: usize) {
        let view = self.views[index].clone();
        if !view.borrow().is_visible() {
            return;
        }
        let title = view.borrow().title().to_owned();

        egui::Window::new(title)
            .id(egui::Id::new(("canvas-view", index)))
            .resizable(false)
            .show(ctx, |ui| {
                if ui.button("Clear").clicked() {
                    self.model.clear();
                }

                let size = egui::vec2(self.model.width() as f32, self.model.height() as f32);
                let (response, painter) = ui.allocate_painter(size, egui::Sense::drag());
                let rect = response.rect;

                painter.rect_filled(rect, 0.0, Color32::WHITE);
                painter.rect_stroke(rect, 0.0, egui::Stroke::new(1.0, Color32::BLACK));
                {
                    // Borrow ends before any model call below; the model
                    // re-borrows every view when it dispatches.
                    let view = view.borrow();
                    for segment in view.segments() {
                        let from =
                            rect.min + egui::vec2(segment.start_x() as f32, segment.start_y() as f32);
                        let to =
                            rect.min + egui::vec2(segment.end_x() as f32, segment.end_y() as f32);
                        painter.line_segment([from, to], egui::Stroke::new(1.5, view.stroke_color()));
                    }
                }

                // Bounds policy belongs to the model; raw coordinates go in
                // as-is, including points dragged past the canvas edge.
                if let Some(pos) = response.interact_pointer_pos() {
                    let x = (pos.x - rect.min.x).round() as i32;
                    let y = (pos.y - rect.min.y).round() as i32;
                    if response.drag_started() {
                        self.model.set_start_position(x, y);
                    } else if response.dragged() {
                        self.model.set_end_position(x, y);
                    }
                }

                ui.label(view.borrow().status().to_owned());
            });
    }
}

impl eframe::App for CanvasApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Scribble");
            ui.label(format!(
                "{} observers, {} segments logged",
                self.model.observer_count(),
                self.logger.borrow().len()
            ));
        });

        for index in 0..self.views.len() {
            self.show_view(ctx, index);
        }
    }
}
