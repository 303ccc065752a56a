//! Background drift tied to scroll position.

use crate::scroll::ScrollSpan;
use crate::style::Style;

/// Scroll-scrubbed background drift.
///
/// Plays from the moment the element's top reaches the viewport bottom until
/// its bottom leaves through the viewport top, moving `y_percent_end` percent
/// of the element's height over that span.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parallax {
    y_percent_end: f64,
}

impl Parallax {
    pub fn new(y_percent_end: f64) -> Self {
        Self { y_percent_end }
    }

    /// Scroll span for an element at document offset `element_top`.
    pub fn span(element_top: f64, element_height: f64, viewport_height: f64) -> ScrollSpan {
        ScrollSpan::new(element_top - viewport_height, element_top + element_height)
    }

    pub fn style_at(&self, scroll_y: f64, span: ScrollSpan) -> Style {
        Style::default().with_y_percent(self.y_percent_end * span.progress(scroll_y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hero_at_top_of_page_is_already_midway() {
        // hero at offset 0, 800 tall, 800 viewport: span -800..800
        let span = Parallax::span(0.0, 800.0, 800.0);
        let parallax = Parallax::new(-50.0);

        assert_eq!(parallax.style_at(0.0, span).y_percent, -25.0);
        assert_eq!(parallax.style_at(800.0, span).y_percent, -50.0);
        assert_eq!(parallax.style_at(5000.0, span).y_percent, -50.0);
    }

    #[test]
    fn scrubbed_value_is_reversible() {
        let span = Parallax::span(1200.0, 600.0, 800.0);
        let parallax = Parallax::new(-50.0);

        let there = parallax.style_at(900.0, span);
        let _ = parallax.style_at(1700.0, span);
        assert_eq!(parallax.style_at(900.0, span), there);
        assert_eq!(parallax.style_at(0.0, span).y_percent, 0.0);
    }
}
