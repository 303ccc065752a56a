//! Clock-driven tweens and timelines.
//!
//! A [`Tween`] interpolates between two [`Style`]s over time. A [`Timeline`]
//! lays several tweens out on one clock, either back to back or overlapping
//! via [`Position::Offset`].

use crate::easing::Ease;
use crate::style::Style;

#[derive(Debug, Clone, PartialEq)]
pub struct Tween {
    pub from: Style,
    pub to: Style,
    /// Seconds.
    pub duration: f64,
    /// Seconds before the tween starts moving.
    pub delay: f64,
    pub ease: Ease,
}

impl Tween {
    /// A one second power3.out tween, the page's default reveal.
    pub fn from_to(from: Style, to: Style) -> Self {
        Self {
            from,
            to,
            duration: 1.0,
            delay: 0.0,
            ease: Ease::Power3Out,
        }
    }

    pub fn with_duration(mut self, duration: f64) -> Self {
        self.duration = duration.max(0.0);
        self
    }

    pub fn with_delay(mut self, delay: f64) -> Self {
        self.delay = delay.max(0.0);
        self
    }

    pub fn with_ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    pub fn end_time(&self) -> f64 {
        self.delay + self.duration
    }

    /// Linear progress at `elapsed` seconds since the tween was started.
    pub fn progress_at(&self, elapsed: f64) -> f64 {
        let local = elapsed - self.delay;
        if self.duration <= 0.0 {
            return if local >= 0.0 { 1.0 } else { 0.0 };
        }
        (local / self.duration).clamp(0.0, 1.0)
    }

    pub fn sample(&self, elapsed: f64) -> Style {
        self.sample_progress(self.progress_at(elapsed))
    }

    /// Style at an externally supplied progress (scrubbing).
    pub fn sample_progress(&self, progress: f64) -> Style {
        self.from.lerp(&self.to, self.ease.apply(progress))
    }

    pub fn is_complete(&self, elapsed: f64) -> bool {
        elapsed >= self.end_time()
    }
}

/// Where a tween is placed on a [`Timeline`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Position {
    /// Right after the previous entry ends.
    Sequential,
    /// Relative to the previous entry's end; negative values overlap ("-=0.8").
    Offset(f64),
    /// Absolute time from the timeline start.
    At(f64),
}

#[derive(Debug, Clone, Default)]
pub struct Timeline {
    delay: f64,
    entries: Vec<(f64, Tween)>,
    cursor: f64,
}

impl Timeline {
    pub fn new(delay: f64) -> Self {
        Self {
            delay: delay.max(0.0),
            entries: Vec::new(),
            cursor: 0.0,
        }
    }

    /// Append a tween and return its index for [`Timeline::sample`].
    ///
    /// The tween's own delay is honoured on top of the placement.
    pub fn add(&mut self, tween: Tween, position: Position) -> usize {
        let start = match position {
            Position::Sequential => self.cursor,
            Position::Offset(offset) => (self.cursor + offset).max(0.0),
            Position::At(at) => at.max(0.0),
        };
        self.cursor = self.cursor.max(start + tween.end_time());
        self.entries.push((start, tween));
        self.entries.len() - 1
    }

    pub fn then(mut self, tween: Tween, position: Position) -> Self {
        self.add(tween, position);
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total run time including the initial delay.
    pub fn duration(&self) -> f64 {
        self.delay + self.cursor
    }

    pub fn start_of(&self, index: usize) -> Option<f64> {
        self.entries.get(index).map(|(start, _)| self.delay + start)
    }

    pub fn sample(&self, index: usize, elapsed: f64) -> Option<Style> {
        self.entries
            .get(index)
            .map(|(start, tween)| tween.sample(elapsed - self.delay - start))
    }

    pub fn sample_all(&self, elapsed: f64) -> Vec<Style> {
        (0..self.entries.len())
            .filter_map(|index| self.sample(index, elapsed))
            .collect()
    }

    pub fn is_complete(&self, elapsed: f64) -> bool {
        elapsed >= self.duration()
    }
}

/// Start delay for the `index`-th item of a staggered group.
pub fn stagger(index: usize, each: f64, base_delay: f64) -> f64 {
    base_delay + each * index as f64
}
