use std::fmt;

use crate::error::RegistryError;
use crate::observer::ObserverRef;
use crate::segment::Segment;

/// The shared drawing surface.
///
/// Owns the canvas dimensions and the current drag state, and broadcasts
/// three event kinds (ready, line-drawn, clear) to an insertion-ordered
/// registry of observers. Several views can register with the same model
/// and will all see the same drawing; a drag that wanders off the canvas
/// is simply frozen until the pointer comes back in bounds, so the next
/// valid point connects to the last one accepted.
///
/// Everything here is synchronous, single-threaded, in-memory computation.
/// If multiple input sources drive one model from different execution
/// contexts, synchronization is the caller's problem.
pub struct CanvasModel {
    observers: Vec<ObserverRef>,
    width: i32,
    height: i32,
    start_x: i32,
    start_y: i32,
    end_x: i32,
    end_y: i32,
}

impl CanvasModel {
    /// Creates a model for a `width` x `height` canvas with the drag state
    /// at the default position. Dimensions are fixed for the model's
    /// lifetime.
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            observers: Vec::new(),
            width,
            height,
            start_x: 0,
            start_y: 0,
            end_x: 0,
            end_y: 0,
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Signals observers that setup is complete. Views become visible on
    /// receipt.
    pub fn start(&mut self) {
        log::info!("canvas {}x{} started", self.width, self.height);
        self.notify_ready();
    }

    /// Begins a new (possibly disjoint) line at `(x, y)`. Out-of-bounds
    /// points are dropped without touching the drag state.
    pub fn set_start_position(&mut self, x: i32, y: i32) {
        if self.in_bounds(x, y) {
            self.start_x = x;
            self.start_y = y;
        }
    }

    /// Commits the segment from the current start point to `(x, y)`,
    /// notifies observers, then advances the start point to `(x, y)` so a
    /// continuing drag chains segment to segment. Out-of-bounds points are
    /// dropped; the drag state stays frozen until the next in-bounds point.
    pub fn set_end_position(&mut self, x: i32, y: i32) {
        if self.in_bounds(x, y) {
            self.end_x = x;
            self.end_y = y;
            let segment = Segment::new(self.start_x, self.start_y, self.end_x, self.end_y);
            self.notify_line_drawn(segment);
            self.start_x = self.end_x;
            self.start_y = self.end_y;
        }
    }

    /// Resets the drag state to the default position and tells every
    /// observer to discard its drawing. Fires unconditionally.
    pub fn clear(&mut self) {
        log::debug!("canvas cleared");
        self.default_position();
        self.notify_cleared();
    }

    fn default_position(&mut self) {
        self.start_x = 0;
        self.start_y = 0;
        self.end_x = 0;
        self.end_y = 0;
    }

    // Edge-inclusive on purpose: a point sitting exactly on the canvas
    // border still counts as drawable.
    fn in_bounds(&self, x: i32, y: i32) -> bool {
        if x < 0 || x > self.width {
            return false;
        }
        if y < 0 || y > self.height {
            return false;
        }
        true
    }

    /// Appends an observer to the registry.
    ///
    /// Fails with `InvalidArgument` if the handle no longer upgrades, and
    /// with `AlreadyRegistered` if the same instance is already present.
    /// Presence is decided by allocation identity, never by observer
    /// state, so two observers with identical contents stay distinct.
    pub fn register(&mut self, observer: ObserverRef) -> Result<(), RegistryError> {
        if observer.upgrade().is_none() {
            return Err(RegistryError::InvalidArgument);
        }
        if self.observers.iter().any(|o| o.ptr_eq(&observer)) {
            return Err(RegistryError::AlreadyRegistered);
        }
        self.observers.push(observer);
        log::debug!("observer registered ({} total)", self.observers.len());
        Ok(())
    }

    /// Removes an observer from the registry.
    ///
    /// Fails with `EmptyRegistry` if nothing is registered, with
    /// `InvalidArgument` if the handle no longer upgrades, and with
    /// `NotRegistered` if this instance is not present.
    pub fn deregister(&mut self, observer: ObserverRef) -> Result<(), RegistryError> {
        if self.observers.is_empty() {
            return Err(RegistryError::EmptyRegistry);
        }
        if observer.upgrade().is_none() {
            return Err(RegistryError::InvalidArgument);
        }
        let position = self
            .observers
            .iter()
            .position(|o| o.ptr_eq(&observer))
            .ok_or(RegistryError::NotRegistered)?;
        self.observers.remove(position);
        log::debug!("observer deregistered ({} total)", self.observers.len());
        Ok(())
    }

    /// Number of currently registered observers.
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    // Dispatch walks the registry in insertion order and that order is the
    // only guarantee given. Handles whose observer has been dropped are
    // skipped.
    fn notify_ready(&self) {
        for observer in &self.observers {
            if let Some(observer) = observer.upgrade() {
                observer.borrow_mut().on_canvas_ready();
            }
        }
    }

    fn notify_line_drawn(&self, segment: Segment) {
        for observer in &self.observers {
            if let Some(observer) = observer.upgrade() {
                observer.borrow_mut().on_line_drawn(segment);
            }
        }
    }

    fn notify_cleared(&self) {
        for observer in &self.observers {
            if let Some(observer) = observer.upgrade() {
                observer.borrow_mut().on_canvas_cleared();
            }
        }
    }
}

impl fmt::Display for CanvasModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "canvas {}x{}", self.width, self.height)
    }
}

impl fmt::Debug for CanvasModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CanvasModel")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("start", &(self.start_x, self.start_y))
            .field("end", &(self.end_x, self.end_y))
            .field("observers", &format!("<{} observers>", self.observers.len()))
            .finish()
    }
}
