//! Bindings between animation state and paintable [`Target`]s.
//!
//! Each binding is driven from an [`Engine`](crate::engine::Engine) frame
//! callback and only touches the explicit element handles it was given.

use crate::config::MotionConfig;
use crate::counter::Counter;
use crate::engine::Target;
use crate::horizontal::{HorizontalScroll, StripFrame, StripGeometry};
use crate::parallax::Parallax;
use crate::reveal::{Reveal, ReplayPolicy, RevealTrigger};
use crate::scroll::{FrameContext, ScrollSpan};
use crate::tween::Timeline;

/// A reveal timeline painted onto one target per timeline entry.
pub struct RevealGroup<T: Target> {
    reveal: Reveal,
    targets: Vec<T>,
}

impl<T: Target> RevealGroup<T> {
    /// Extra targets beyond the timeline length are ignored.
    pub fn new(reveal: Reveal, targets: Vec<T>) -> Self {
        Self { reveal, targets }
    }

    pub fn reveal(&self) -> &Reveal {
        &self.reveal
    }

    pub fn targets(&self) -> &[T] {
        &self.targets
    }

    /// Paint the pre-reveal state.
    pub fn mount(&self) {
        for (target, style) in self.targets.iter().zip(self.reveal.initial()) {
            target.apply(&style);
        }
    }

    /// Returns `true` on frames where something was painted.
    pub fn frame(&mut self, in_view: bool, now: f64) -> bool {
        match self.reveal.frame(in_view, now) {
            Some(styles) => {
                for (target, style) in self.targets.iter().zip(styles) {
                    target.apply(&style);
                }
                true
            }
            None => false,
        }
    }

    pub fn unmount(&self) {
        for target in &self.targets {
            target.reset();
        }
    }
}

/// Hero entrance timeline plus scrubbed background parallax.
pub struct HeroAnimator<T: Target> {
    entrance: Timeline,
    items: Vec<T>,
    background: Option<T>,
    parallax: Parallax,
    started_at: Option<f64>,
    entrance_done: bool,
}

impl<T: Target> HeroAnimator<T> {
    pub fn new(config: &MotionConfig, items: Vec<T>, background: Option<T>) -> Self {
        Self {
            entrance: crate::presets::hero_entrance(config),
            items,
            background,
            parallax: Parallax::new(config.parallax_y_percent),
            started_at: None,
            entrance_done: false,
        }
    }

    pub fn mount(&self) {
        for (target, style) in self.items.iter().zip(self.entrance.sample_all(0.0)) {
            target.apply(&style);
        }
    }

    pub fn is_entrance_done(&self) -> bool {
        self.entrance_done
    }

    /// `span` is the hero's parallax scroll span, measured by the host.
    pub fn frame(&mut self, frame: &FrameContext, span: ScrollSpan) {
        let start = *self.started_at.get_or_insert(frame.time);
        if !self.entrance_done {
            let elapsed = frame.time - start;
            for (target, style) in self.items.iter().zip(self.entrance.sample_all(elapsed)) {
                target.apply(&style);
            }
            self.entrance_done = self.entrance.is_complete(elapsed);
        }
        if let Some(background) = &self.background {
            background.apply(&self.parallax.style_at(frame.scroll_y, span));
        }
    }

    pub fn unmount(&self) {
        for target in self.items.iter().chain(self.background.iter()) {
            target.reset();
        }
    }
}

/// Stats reveal with an explicit "has animated" guard and delayed counters.
pub struct StatsAnimator<T: Target> {
    group: RevealGroup<T>,
    counters: Vec<(Counter, T)>,
    counter_delay: f64,
    has_animated: bool,
    revealed_at: Option<f64>,
}

impl<T: Target> StatsAnimator<T> {
    /// `items` follow [`presets::stats_timeline`](crate::presets::stats_timeline)
    /// order: background, title lines, cards.
    pub fn new(
        config: &MotionConfig,
        title_count: usize,
        items: Vec<T>,
        counters: Vec<(Counter, T)>,
    ) -> Self {
        let card_count = items.len().saturating_sub(1 + title_count);
        let reveal = Reveal::new(
            // the guard below makes the section one-shot regardless of policy
            RevealTrigger::new(0.0, ReplayPolicy::Once),
            crate::presets::stats_timeline(title_count, card_count),
        );
        let counters = counters
            .into_iter()
            .map(|(counter, target)| (counter.with_duration(config.counter_duration), target))
            .collect();
        Self {
            group: RevealGroup::new(reveal, items),
            counters,
            counter_delay: config.counter_delay,
            has_animated: false,
            revealed_at: None,
        }
    }

    pub fn has_animated(&self) -> bool {
        self.has_animated
    }

    pub fn mount(&self) {
        self.group.mount();
        for (counter, target) in &self.counters {
            target.set_text(&counter.initial_text());
        }
    }

    /// Visibility report from the host's intersection observer.
    /// Returns `true` only for the notification that starts the animation.
    pub fn notify_visible(&mut self, visible: bool, now: f64) -> bool {
        if !visible || self.has_animated {
            return false;
        }
        self.has_animated = true;
        self.revealed_at = Some(now);
        self.group.frame(true, now);
        true
    }

    pub fn frame(&mut self, now: f64) {
        let Some(revealed_at) = self.revealed_at else {
            return;
        };
        self.group.frame(true, now);
        if now - revealed_at < self.counter_delay {
            return;
        }
        let counters_start = revealed_at + self.counter_delay;
        for (counter, target) in &mut self.counters {
            counter.start(counters_start);
            if let Some(text) = counter.frame(now) {
                target.set_text(&text);
            }
        }
    }

    pub fn is_finished(&self) -> bool {
        self.has_animated && self.counters.iter().all(|(counter, _)| counter.is_finished())
    }

    pub fn unmount(&self) {
        self.group.unmount();
    }
}

/// Horizontal strip controller bound to the strip and its panel contents.
pub struct StripAnimator<T: Target> {
    controller: HorizontalScroll,
    strip: T,
    panels: Vec<T>,
    last_translate: Option<f64>,
}

impl<T: Target> StripAnimator<T> {
    pub fn new(config: &MotionConfig, strip: T, panels: Vec<T>) -> Self {
        Self {
            controller: HorizontalScroll::new(panels.len(), config),
            strip,
            panels,
            last_translate: None,
        }
    }

    pub fn controller(&self) -> &HorizontalScroll {
        &self.controller
    }

    pub fn needs_refresh(&self) -> bool {
        self.controller.needs_refresh()
    }

    pub fn invalidate(&mut self) {
        self.controller.invalidate();
        self.last_translate = None;
    }

    /// Re-measure the strip. The next frame repaints the strip and every panel.
    pub fn refresh(&mut self, geometry: StripGeometry) -> crate::error::Result<()> {
        self.last_translate = None;
        self.controller.refresh(geometry)
    }

    /// Paint one frame. Repaints are skipped while the rendered translation
    /// and the layout are unchanged.
    pub fn frame(&mut self, frame: &FrameContext) -> Option<StripFrame> {
        let out = self.controller.frame(frame)?;
        if self.last_translate != Some(out.translate_x) {
            self.strip.apply(&out.strip_style());
            for (target, style) in self.panels.iter().zip(&out.panels) {
                target.apply(style);
            }
            self.last_translate = Some(out.translate_x);
        }
        Some(out)
    }

    pub fn unmount(&mut self) {
        self.strip.reset();
        for panel in &self.panels {
            panel.reset();
        }
        self.last_translate = None;
    }
}
