//! Pinned horizontal scrolling.
//!
//! A section one viewport tall holds a strip of `n` full-width panels. While
//! the document scroll offset is inside the pin range the section stays fixed
//! on screen and the strip slides left 1:1 with vertical scroll; before and
//! after the range the page scrolls normally.
//!
//! [`StripLayout`] is the pure geometry: every value it returns is a function
//! of the scroll offset alone, so scrolling back to an offset reproduces the
//! exact same target. [`HorizontalScroll`] owns a layout plus the scrub
//! smoothing and resize bookkeeping.

use crate::config::MotionConfig;
use crate::error::{MotionError, Result};
use crate::scroll::{FrameContext, ScrollSpan, Viewport};
use crate::scrub::Scrub;
use crate::style::Style;
use crate::tween::Tween;

/// Measurements the host takes before laying out the strip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StripGeometry {
    pub panel_count: usize,
    pub viewport: Viewport,
    /// Document offset of the pinned container's top edge.
    pub container_top: f64,
}

/// Where the scroll offset sits relative to the pin range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinPhase {
    Before,
    Pinned,
    After,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StripLayout {
    pub panel_count: usize,
    pub viewport: Viewport,
    pub strip_width: f64,
    pub pin: ScrollSpan,
}

impl StripLayout {
    /// Lay out the strip. Zero panels never pin and yield `Ok(None)`.
    pub fn compute(geometry: StripGeometry) -> Result<Option<Self>> {
        if geometry.panel_count == 0 {
            return Ok(None);
        }
        let viewport = geometry.viewport;
        if !viewport.is_usable() || !geometry.container_top.is_finite() {
            return Err(MotionError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }

        let strip_width = geometry.panel_count as f64 * viewport.width;
        let travel = strip_width - viewport.width;
        Ok(Some(Self {
            panel_count: geometry.panel_count,
            viewport,
            strip_width,
            pin: ScrollSpan::new(geometry.container_top, geometry.container_top + travel),
        }))
    }

    /// Horizontal travel available to the strip.
    pub fn max_travel(&self) -> f64 {
        self.strip_width - self.viewport.width
    }

    /// `-clamp(scroll_y - pin_start, 0, strip_width - viewport_width)`.
    pub fn translate_for(&self, scroll_y: f64) -> f64 {
        let travel = self.pin.offset(scroll_y);
        if travel == 0.0 { 0.0 } else { -travel }
    }

    pub fn phase(&self, scroll_y: f64) -> PinPhase {
        if scroll_y < self.pin.start {
            PinPhase::Before
        } else if scroll_y > self.pin.end {
            PinPhase::After
        } else {
            PinPhase::Pinned
        }
    }

    /// Fraction of the strip travelled. A single panel has nothing to travel.
    pub fn progress(&self, scroll_y: f64) -> f64 {
        if self.pin.is_empty() {
            return 0.0;
        }
        self.pin.progress(scroll_y)
    }

    /// Panel closest to filling the viewport at the given translation.
    pub fn active_panel(&self, translate: f64) -> usize {
        let index = (-translate / self.viewport.width).round();
        (index.max(0.0) as usize).min(self.panel_count - 1)
    }

    /// Reveal progress of one panel: 0 until its left edge reaches the
    /// viewport centre, 1 once its right edge has.
    pub fn panel_progress(&self, index: usize, translate: f64) -> f64 {
        let width = self.viewport.width;
        let left = index as f64 * width + translate;
        let centre = width / 2.0;
        ((centre - left) / width).clamp(0.0, 1.0)
    }

    /// Scroll length the pin spacer reserves: one viewport plus the pin travel.
    pub fn spacer_height(&self) -> f64 {
        self.viewport.height + self.max_travel()
    }
}

/// Output of [`HorizontalScroll::frame`] for the host to apply.
#[derive(Debug, Clone, PartialEq)]
pub struct StripFrame {
    /// Exact, unsmoothed translation for this scroll offset.
    pub target_x: f64,
    /// Smoothed translation to render.
    pub translate_x: f64,
    pub phase: PinPhase,
    pub progress: f64,
    pub active_panel: usize,
    /// Content style per panel, derived from `translate_x`.
    pub panels: Vec<Style>,
}

impl StripFrame {
    pub fn strip_style(&self) -> Style {
        Style::default().with_x(self.translate_x)
    }
}

pub struct HorizontalScroll {
    panel_count: usize,
    layout: Option<StripLayout>,
    geometry: Option<StripGeometry>,
    dirty: bool,
    scrub: Scrub,
    panel_tween: Tween,
}

impl HorizontalScroll {
    pub fn new(panel_count: usize, config: &MotionConfig) -> Self {
        Self {
            panel_count,
            layout: None,
            geometry: None,
            dirty: true,
            scrub: Scrub::new(config.scrub_lag),
            panel_tween: Tween::from_to(Style::hidden().with_y(100.0), Style::default()),
        }
    }

    pub fn panel_count(&self) -> usize {
        self.panel_count
    }

    pub fn layout(&self) -> Option<&StripLayout> {
        self.layout.as_ref()
    }

    pub fn is_pinned(&self) -> bool {
        self.layout.is_some()
    }

    /// Whether the host must re-measure and call [`HorizontalScroll::refresh`].
    pub fn needs_refresh(&self) -> bool {
        self.dirty && self.panel_count > 0
    }

    /// Drop the current layout; the next refresh recomputes from scratch.
    pub fn invalidate(&mut self) {
        self.dirty = true;
    }

    /// Recompute the layout from fresh measurements.
    ///
    /// On failure the controller is left unpinned and still dirty, so the
    /// next resize (or frame) retries.
    pub fn refresh(&mut self, geometry: StripGeometry) -> Result<()> {
        let geometry = StripGeometry {
            panel_count: self.panel_count,
            ..geometry
        };
        match StripLayout::compute(geometry) {
            Ok(layout) => {
                if layout.is_some() && self.layout.map(|l| l.viewport) != layout.map(|l| l.viewport) {
                    self.scrub.reset();
                }
                tracing::debug!(
                    panels = self.panel_count,
                    pinned = layout.is_some(),
                    "horizontal scroll layout refreshed"
                );
                self.layout = layout;
                self.geometry = Some(geometry);
                self.dirty = false;
                Ok(())
            }
            Err(err) => {
                tracing::warn!("horizontal scroll refresh failed, retrying on next resize: {err}");
                self.layout = None;
                self.geometry = None;
                self.dirty = true;
                Err(err)
            }
        }
    }

    /// Advance one frame. `None` while unpinned (no panels, or awaiting a
    /// successful refresh); the host then leaves the strip untouched.
    pub fn frame(&mut self, frame: &FrameContext) -> Option<StripFrame> {
        if let Some(geometry) = self.geometry {
            if geometry.viewport != frame.viewport {
                self.invalidate();
            }
        }
        if self.dirty {
            return None;
        }
        let layout = self.layout?;

        let target_x = layout.translate_for(frame.scroll_y);
        let translate_x = self.scrub.step(target_x, frame.delta);
        let panels = (0..layout.panel_count)
            .map(|index| {
                self.panel_tween
                    .sample_progress(layout.panel_progress(index, translate_x))
            })
            .collect();

        Some(StripFrame {
            target_x,
            translate_x,
            phase: layout.phase(frame.scroll_y),
            progress: layout.progress(frame.scroll_y),
            active_panel: layout.active_panel(translate_x),
            panels,
        })
    }
}
