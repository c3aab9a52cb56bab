#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod error;
pub mod logger;
pub mod model;
pub mod observer;
pub mod segment;
pub mod view;

pub use app::CanvasApp;
pub use error::RegistryError;
pub use logger::SegmentLogger;
pub use model::CanvasModel;
pub use observer::{CanvasObserver, ObserverRef, SharedObserver};
pub use segment::Segment;
pub use view::CanvasView;
