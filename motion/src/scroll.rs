//! Frame snapshots and scroll-linked spans.

/// Visible area of the host document, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn is_usable(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

/// Everything an animation may read during one frame.
///
/// The host samples scroll position, viewport and clock once per frame and
/// hands the same snapshot to every subscriber, so two animations tied to
/// the same scroll offset can never disagree within a frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameContext {
    /// Seconds on a monotonic clock.
    pub time: f64,
    /// Seconds since the previous frame (0 on the first frame).
    pub delta: f64,
    /// Document vertical scroll offset.
    pub scroll_y: f64,
    pub viewport: Viewport,
}

impl FrameContext {
    pub fn new(time: f64, scroll_y: f64, viewport: Viewport) -> Self {
        Self {
            time,
            delta: 0.0,
            scroll_y,
            viewport,
        }
    }

    /// Next snapshot; `delta` is derived from the previous one.
    pub fn advance(&self, time: f64, scroll_y: f64, viewport: Viewport) -> Self {
        Self {
            time,
            delta: (time - self.time).max(0.0),
            scroll_y,
            viewport,
        }
    }
}

/// A range of document scroll offsets over which something plays.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollSpan {
    pub start: f64,
    pub end: f64,
}

impl ScrollSpan {
    pub fn new(start: f64, end: f64) -> Self {
        Self {
            start,
            end: end.max(start),
        }
    }

    pub fn len(&self) -> f64 {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.len() <= 0.0
    }

    pub fn contains(&self, scroll_y: f64) -> bool {
        scroll_y >= self.start && scroll_y <= self.end
    }

    /// Distance travelled into the span, clamped to `0..=len`.
    pub fn offset(&self, scroll_y: f64) -> f64 {
        (scroll_y - self.start).clamp(0.0, self.len())
    }

    /// Normalised progress; an empty span reports 0 before and 1 after its start.
    pub fn progress(&self, scroll_y: f64) -> f64 {
        if self.is_empty() {
            return if scroll_y >= self.start { 1.0 } else { 0.0 };
        }
        self.offset(scroll_y) / self.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn span_offset_and_progress_are_clamped() {
        let span = ScrollSpan::new(100.0, 300.0);
        assert_eq!(span.offset(50.0), 0.0);
        assert_eq!(span.offset(150.0), 50.0);
        assert_eq!(span.offset(900.0), 200.0);
        assert_eq!(span.progress(200.0), 0.5);
        assert!(span.contains(300.0));
        assert!(!span.contains(300.5));
    }

    #[test]
    fn inverted_span_collapses_to_empty() {
        let span = ScrollSpan::new(400.0, 100.0);
        assert!(span.is_empty());
        assert_eq!(span.progress(399.0), 0.0);
        assert_eq!(span.progress(400.0), 1.0);
    }

    #[test]
    fn advance_computes_delta() {
        let viewport = Viewport::new(1280.0, 800.0);
        let first = FrameContext::new(1.0, 0.0, viewport);
        let second = first.advance(1.016, 12.0, viewport);
        assert!((second.delta - 0.016).abs() < 1e-9);
        assert_eq!(first.delta, 0.0);
    }

    #[test]
    fn unusable_viewports() {
        assert!(!Viewport::new(0.0, 800.0).is_usable());
        assert!(!Viewport::new(f64::NAN, 800.0).is_usable());
        assert!(Viewport::new(375.0, 667.0).is_usable());
    }
}
