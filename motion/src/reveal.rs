//! One-shot reveal animations keyed to visibility.
//!
//! A [`RevealTrigger`] turns a stream of "is it in view?" observations into
//! rising-edge fire events, honouring a [`ReplayPolicy`]. A [`Reveal`] pairs a
//! trigger with the [`Timeline`] it plays.

use serde::{Deserialize, Serialize};

use crate::style::Style;
use crate::tween::Timeline;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplayPolicy {
    /// Fire on the first entry only.
    #[default]
    Once,
    /// Fire every time the element enters after having left.
    EveryEntry,
}

#[derive(Debug, Clone)]
pub struct RevealTrigger {
    /// Viewport fraction the element's top edge must pass (0.8 = "top 80%").
    start_fraction: f64,
    policy: ReplayPolicy,
    inside: bool,
    fired: u32,
}

impl RevealTrigger {
    pub fn new(start_fraction: f64, policy: ReplayPolicy) -> Self {
        Self {
            start_fraction: start_fraction.clamp(0.0, 1.0),
            policy,
            inside: false,
            fired: 0,
        }
    }

    /// Whether an element whose top sits `element_top` px below the viewport
    /// top has crossed the start line.
    pub fn crossed(&self, element_top: f64, viewport_height: f64) -> bool {
        element_top <= viewport_height * self.start_fraction
    }

    /// Feed one observation; returns `true` when the animation should start.
    pub fn observe(&mut self, in_view: bool) -> bool {
        let entering = in_view && !self.inside;
        self.inside = in_view;
        if !entering {
            return false;
        }
        match self.policy {
            ReplayPolicy::Once if self.fired > 0 => false,
            _ => {
                self.fired += 1;
                true
            }
        }
    }

    pub fn has_fired(&self) -> bool {
        self.fired > 0
    }

    pub fn times_fired(&self) -> u32 {
        self.fired
    }
}


#[derive(Debug, Clone)]
pub struct Reveal {
    trigger: RevealTrigger,
    timeline: Timeline,
    started_at: Option<f64>,
}

impl Reveal {
    pub fn new(trigger: RevealTrigger, timeline: Timeline) -> Self {
        Self {
            trigger,
            timeline,
            started_at: None,
        }
    }

    pub fn trigger(&self) -> &RevealTrigger {
        &self.trigger
    }

    pub fn is_playing(&self, now: f64) -> bool {
        self.started_at
            .is_some_and(|start| !self.timeline.is_complete(now - start))
    }

    /// Initial (pre-reveal) style of every item, for the host to apply on mount.
    pub fn initial(&self) -> Vec<Style> {
        self.timeline.sample_all(0.0)
    }

    /// Feed visibility for this frame. Returns item styles while the timeline
    /// runs (including the frame it completes on), `None` otherwise.
    pub fn frame(&mut self, in_view: bool, now: f64) -> Option<Vec<Style>> {
        if self.trigger.observe(in_view) {
            tracing::debug!(fired = self.trigger.times_fired(), "reveal triggered");
            self.started_at = Some(now);
        }
        let start = self.started_at?;
        let elapsed = now - start;
        let styles = self.timeline.sample_all(elapsed);
        if self.timeline.is_complete(elapsed) {
            self.started_at = None;
        }
        Some(styles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tween::{Position, Tween};

    #[test]
    fn once_policy_fires_on_first_entry_only() {
        let mut trigger = RevealTrigger::new(0.8, ReplayPolicy::Once);

        assert!(!trigger.observe(false));
        assert!(trigger.observe(true));
        assert!(!trigger.observe(true));
        assert!(!trigger.observe(false));
        assert!(!trigger.observe(true));
        assert_eq!(trigger.times_fired(), 1);
    }

    #[test]
    fn every_entry_policy_refires_after_leaving() {
        let mut trigger = RevealTrigger::new(0.8, ReplayPolicy::EveryEntry);

        assert!(trigger.observe(true));
        assert!(!trigger.observe(true));
        assert!(!trigger.observe(false));
        assert!(trigger.observe(true));
        assert_eq!(trigger.times_fired(), 2);
    }

    #[test]
    fn crossing_uses_viewport_fraction() {
        let trigger = RevealTrigger::new(0.8, ReplayPolicy::Once);
        assert!(!trigger.crossed(700.0, 800.0));
        assert!(trigger.crossed(640.0, 800.0));
        assert!(trigger.crossed(-200.0, 800.0));
    }

    #[test]
    fn reveal_plays_once_then_goes_quiet() {
        let timeline = Timeline::new(0.0).then(
            Tween::from_to(Style::hidden().with_y(50.0), Style::default()),
            Position::Sequential,
        );
        let mut reveal = Reveal::new(RevealTrigger::new(0.8, ReplayPolicy::Once), timeline);

        assert_eq!(reveal.initial(), vec![Style::hidden().with_y(50.0)]);
        assert_eq!(reveal.frame(false, 0.0), None);

        let first = reveal.frame(true, 10.0).unwrap();
        assert_eq!(first[0], Style::hidden().with_y(50.0));
        assert!(reveal.is_playing(10.5));

        let last = reveal.frame(true, 11.0).unwrap();
        assert_eq!(last[0], Style::default());
        assert_eq!(reveal.frame(true, 11.1), None);

        // leaving and re-entering does not replay
        assert_eq!(reveal.frame(false, 12.0), None);
        assert_eq!(reveal.frame(true, 13.0), None);
        assert_eq!(reveal.trigger().times_fired(), 1);
    }
}
