use crate::observer::CanvasObserver;
use crate::segment::Segment;

/// An observer that keeps the history of drawn segments.
///
/// The model retains nothing, so this is where a drawing lives once it has
/// been dispatched: every `on_line_drawn` appends, every `on_canvas_cleared`
/// discards the lot. Several loggers can follow the same model. The
/// accessors exist for status display and for asserting on dispatch results
/// in tests.
#[derive(Debug, Default)]
pub struct SegmentLogger {
    segments: Vec<Segment>,
}

impl SegmentLogger {
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recently drawn segment, if any.
    pub fn last(&self) -> Option<Segment> {
        self.segments.last().copied()
    }

    /// The segment drawn just before the last one, if any.
    pub fn second_last(&self) -> Option<Segment> {
        let len = self.segments.len();
        if len < 2 {
            return None;
        }
        Some(self.segments[len - 2])
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }
}

impl CanvasObserver for SegmentLogger {
    // The ready event records the default position as the first entry.
    fn on_canvas_ready(&mut self) {
        self.segments.push(Segment::default());
    }

    fn on_line_drawn(&mut self, segment: Segment) {
        log::trace!(
            "segment ({}, {}) -> ({}, {})",
            segment.start_x(),
            segment.start_y(),
            segment.end_x(),
            segment.end_y()
        );
        self.segments.push(segment);
    }

    fn on_canvas_cleared(&mut self) {
        self.segments.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ready_logs_the_default_position() {
        let mut logger = SegmentLogger::new();
        logger.on_canvas_ready();

        assert_eq!(logger.last(), Some(Segment::default()));
        assert!(!logger.is_empty());
    }

    #[test]
    fn test_segments_accumulate_in_draw_order() {
        let mut logger = SegmentLogger::new();
        logger.on_line_drawn(Segment::new(1, 1, 2, 2));
        logger.on_line_drawn(Segment::new(2, 2, 4, 3));

        assert_eq!(logger.len(), 2);
        assert_eq!(logger.last(), Some(Segment::new(2, 2, 4, 3)));
        assert_eq!(logger.second_last(), Some(Segment::new(1, 1, 2, 2)));
    }

    #[test]
    fn test_second_last_needs_two_segments() {
        let mut logger = SegmentLogger::new();
        assert_eq!(logger.second_last(), None);

        logger.on_line_drawn(Segment::new(0, 0, 1, 1));
        assert_eq!(logger.second_last(), None);
    }

    #[test]
    fn test_clear_discards_history() {
        let mut logger = SegmentLogger::new();
        logger.on_canvas_ready();
        logger.on_line_drawn(Segment::new(1, 1, 2, 2));
        logger.on_canvas_cleared();

        assert!(logger.is_empty());
        assert_eq!(logger.last(), None);
    }
}
