use std::cell::RefCell;
use std::rc::Rc;

use scribble::{CanvasModel, Segment, SegmentLogger, SharedObserver};

const MAX_X: i32 = 600;
const MAX_Y: i32 = 600;

fn setup() -> (CanvasModel, Rc<RefCell<SegmentLogger>>) {
    let mut model = CanvasModel::new(MAX_X, MAX_Y);
    let logger = Rc::new(RefCell::new(SegmentLogger::new()));
    let observer: SharedObserver = logger.clone();
    model.register(Rc::downgrade(&observer)).unwrap();
    model.start();
    (model, logger)
}

#[test]
fn test_add_one_line() {
    let (mut model, logger) = setup();

    model.set_start_position(1, 1);
    model.set_end_position(2, 2);

    assert_eq!(logger.borrow().last(), Some(Segment::new(1, 1, 2, 2)));
}

#[test]
fn test_degenerate_segment_at_same_point() {
    let (mut model, logger) = setup();

    model.set_start_position(10, 20);
    model.set_end_position(10, 20);

    let last = logger.borrow().last().unwrap();
    assert_eq!(last, Segment::new(10, 20, 10, 20));
    assert!(last.is_degenerate());
}

// After an end position is committed, the start of the continuation must be
// the previous end, not the original press point.
#[test]
fn test_drag_advances_start_to_previous_end() {
    let (mut model, logger) = setup();

    model.set_start_position(1, 1);
    model.set_end_position(2, 2);
    model.set_end_position(4, 3);

    assert_eq!(logger.borrow().last(), Some(Segment::new(2, 2, 4, 3)));

    model.set_end_position(5, 6);
    assert_eq!(logger.borrow().last(), Some(Segment::new(4, 3, 5, 6)));
}

// A new start position begins a disjoint line; the earlier line's segments
// stay logged.
#[test]
fn test_two_disjoint_lines() {
    let (mut model, logger) = setup();

    model.set_start_position(1, 1);
    model.set_end_position(2, 2);
    model.set_end_position(5, 6);
    model.set_start_position(3, 3);
    model.set_end_position(1, 100);

    let logger = logger.borrow();
    assert_eq!(logger.last(), Some(Segment::new(3, 3, 1, 100)));
    assert_eq!(logger.second_last(), Some(Segment::new(2, 2, 5, 6)));
}

// The bounds check is inclusive on both ends: a point exactly on the canvas
// edge is drawable, one past it is not.
#[test]
fn test_boundary_is_edge_inclusive() {
    let (mut model, logger) = setup();

    model.set_start_position(0, 0);
    model.set_end_position(MAX_X, MAX_Y);
    assert_eq!(logger.borrow().last(), Some(Segment::new(0, 0, MAX_X, MAX_Y)));

    let before = logger.borrow().len();
    model.set_end_position(MAX_X + 1, 10);
    assert_eq!(logger.borrow().len(), before);
    assert_eq!(logger.borrow().last(), Some(Segment::new(0, 0, MAX_X, MAX_Y)));
}

// An out-of-bounds end position fires no event and leaves the drag state
// untouched.
#[test]
fn test_out_of_bounds_point_is_skipped() {
    let (mut model, logger) = setup();

    model.set_start_position(1, 1);
    model.set_end_position(400, 400);
    model.set_end_position(-5, 5);

    assert_eq!(logger.borrow().last(), Some(Segment::new(1, 1, 400, 400)));
}

// A drag that leaves the canvas reconnects to the last accepted point once
// it comes back in bounds.
#[test]
fn test_drag_reconnects_after_leaving_bounds() {
    let (mut model, logger) = setup();

    model.set_start_position(1, 1);
    model.set_end_position(2, MAX_Y + 1);
    model.set_end_position(500, 600);

    assert_eq!(logger.borrow().last(), Some(Segment::new(1, 1, 500, 600)));
}

// An out-of-bounds start press is dropped entirely.
#[test]
fn test_out_of_bounds_start_is_dropped() {
    let (mut model, logger) = setup();

    model.set_start_position(5, 5);
    model.set_end_position(6, 6);
    model.set_start_position(-1, 0);
    model.set_end_position(9, 9);

    // The start point stayed at the previous end position.
    assert_eq!(logger.borrow().last(), Some(Segment::new(6, 6, 9, 9)));
}

#[test]
fn test_clear_resets_state_and_empties_logger() {
    let (mut model, logger) = setup();

    model.set_start_position(1, 1);
    model.set_end_position(2, 2);
    model.set_start_position(300, 500);
    model.set_end_position(200, 250);
    model.clear();

    assert!(logger.borrow().is_empty());

    // Drag state is back at the default position: an end position with no
    // new start connects from (0, 0).
    model.set_end_position(7, 8);
    assert_eq!(logger.borrow().last(), Some(Segment::new(0, 0, 7, 8)));
}

#[test]
fn test_clear_fires_even_when_already_clear() {
    let (mut model, logger) = setup();

    model.clear();
    assert!(logger.borrow().is_empty());

    // Still logged: the ready event pushed the default segment, clear
    // removed it again.
    model.clear();
    assert!(logger.borrow().is_empty());
}

#[test]
fn test_dimensions_are_fixed_at_construction() {
    let model = CanvasModel::new(320, 240);
    assert_eq!(model.width(), 320);
    assert_eq!(model.height(), 240);
    assert_eq!(model.to_string(), "canvas 320x240");
}
