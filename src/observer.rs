use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::segment::Segment;

/// Callback contract between the canvas model and its collaborators.
///
/// Views and loggers implement these three methods and register with a
/// `CanvasModel`; the model invokes them synchronously, in registration
/// order, on every matching state change. Implementations must not
/// register or deregister observers from inside a callback — the model is
/// mid-dispatch and the shared `RefCell` will panic.
pub trait CanvasObserver {
    /// Fired once per `CanvasModel::start`. Views make themselves visible here.
    fn on_canvas_ready(&mut self);

    /// Fired once per accepted end position with the committed segment.
    fn on_line_drawn(&mut self, segment: Segment);

    /// Fired once per `CanvasModel::clear`. Retained drawings are discarded.
    fn on_canvas_cleared(&mut self);
}

/// Owning handle to an observer, shared between the application and the model.
pub type SharedObserver = Rc<RefCell<dyn CanvasObserver>>;

/// Non-owning handle the model keeps in its registry. The model routes
/// events through these and checks presence by allocation identity; it
/// never owns the observers themselves.
pub type ObserverRef = Weak<RefCell<dyn CanvasObserver>>;
