//! Count-up animation for headline statistics.

use crate::easing::Ease;

/// Format a counter value the way the stats cards display it.
///
/// Targets of 1000 and above round to whole numbers, smaller ones to one
/// decimal. Thousands are grouped with commas and a zero fraction is dropped,
/// so `95.0` renders as `95`.
pub fn format_stat(value: f64, target: f64, prefix: &str, suffix: &str) -> String {
    let rounded = if target >= 1000.0 {
        value.round()
    } else {
        (value * 10.0).round() / 10.0
    };
    format!("{prefix}{}{suffix}", group_thousands(rounded))
}

fn group_thousands(value: f64) -> String {
    let negative = value < 0.0;
    let tenths = (value.abs() * 10.0).round() as u64;
    let whole = tenths / 10;
    let fraction = tenths % 10;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 3);
    if negative && tenths > 0 {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if fraction > 0 {
        grouped.push('.');
        grouped.push(char::from(b'0' + fraction as u8));
    }
    grouped
}

#[derive(Debug, Clone)]
pub struct Counter {
    target: f64,
    prefix: String,
    suffix: String,
    duration: f64,
    ease: Ease,
    started_at: Option<f64>,
    finished: bool,
}

impl Counter {
    pub fn new(target: f64, prefix: impl Into<String>, suffix: impl Into<String>) -> Self {
        Self {
            target,
            prefix: prefix.into(),
            suffix: suffix.into(),
            duration: 2.0,
            ease: Ease::Power2Out,
            started_at: None,
            finished: false,
        }
    }

    pub fn with_duration(mut self, duration: f64) -> Self {
        self.duration = duration.max(0.0);
        self
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    /// Raw value `elapsed` seconds into the run.
    pub fn value_at(&self, elapsed: f64) -> f64 {
        if self.duration <= 0.0 || elapsed >= self.duration {
            return self.target;
        }
        self.target * self.ease.apply(elapsed / self.duration)
    }

    pub fn display_at(&self, elapsed: f64) -> String {
        format_stat(self.value_at(elapsed), self.target, &self.prefix, &self.suffix)
    }

    /// Text shown before the counter runs.
    pub fn initial_text(&self) -> String {
        format_stat(0.0, self.target, &self.prefix, &self.suffix)
    }

    /// Arm the counter. Returns `false` if it was already started; a counter
    /// runs exactly once.
    pub fn start(&mut self, now: f64) -> bool {
        if self.started_at.is_some() {
            return false;
        }
        self.started_at = Some(now);
        true
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Text for this frame, or `None` before start and after the final value
    /// has been emitted once.
    pub fn frame(&mut self, now: f64) -> Option<String> {
        let start = self.started_at?;
        if self.finished {
            return None;
        }
        let elapsed = (now - start).max(0.0);
        if elapsed >= self.duration {
            self.finished = true;
        }
        Some(self.display_at(elapsed))
    }
}
