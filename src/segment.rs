/// A single drawn line segment with integer start and end coordinates.
///
/// Segments are immutable values. The model produces one per accepted end
/// position and hands it to observers; it keeps none itself. Anything that
/// needs the drawing after the fact (a view repainting, a logger) retains
/// its own copies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Segment {
    start_x: i32,
    start_y: i32,
    end_x: i32,
    end_y: i32,
}

impl Segment {
    pub fn new(start_x: i32, start_y: i32, end_x: i32, end_y: i32) -> Self {
        Self {
            start_x,
            start_y,
            end_x,
            end_y,
        }
    }

    pub fn start_x(&self) -> i32 {
        self.start_x
    }

    pub fn start_y(&self) -> i32 {
        self.start_y
    }

    pub fn end_x(&self) -> i32 {
        self.end_x
    }

    pub fn end_y(&self) -> i32 {
        self.end_y
    }

    /// A segment whose start and end coincide draws as a single point.
    pub fn is_degenerate(&self) -> bool {
        self.start_x == self.end_x && self.start_y == self.end_y
    }
}
