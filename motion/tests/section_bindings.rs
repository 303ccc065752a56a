//! Section animators driven through the engine against recording targets.

use std::cell::RefCell;
use std::rc::Rc;

use aon_motion::bind::{HeroAnimator, RevealGroup, StatsAnimator, StripAnimator};
use aon_motion::counter::Counter;
use aon_motion::horizontal::StripGeometry;
use aon_motion::parallax::Parallax;
use aon_motion::reveal::ReplayPolicy;
use aon_motion::{Engine, FrameContext, HandleKind, MotionConfig, Style, Target, Viewport, presets};
use pretty_assertions::assert_eq;

#[derive(Debug, Clone, PartialEq)]
enum Paint {
    Style(Style),
    Text(String),
    Reset,
}

#[derive(Clone, Default)]
struct Recorder {
    log: Rc<RefCell<Vec<Paint>>>,
}

impl Recorder {
    fn last_style(&self) -> Option<Style> {
        self.log.borrow().iter().rev().find_map(|paint| match paint {
            Paint::Style(style) => Some(*style),
            _ => None,
        })
    }

    fn last_text(&self) -> Option<String> {
        self.log.borrow().iter().rev().find_map(|paint| match paint {
            Paint::Text(text) => Some(text.clone()),
            _ => None,
        })
    }

    fn paints(&self) -> usize {
        self.log.borrow().len()
    }

    fn was_reset(&self) -> bool {
        self.log.borrow().last() == Some(&Paint::Reset)
    }
}

impl Target for Recorder {
    fn apply(&self, style: &Style) {
        self.log.borrow_mut().push(Paint::Style(*style));
    }

    fn set_text(&self, text: &str) {
        self.log.borrow_mut().push(Paint::Text(text.to_string()));
    }

    fn reset(&self) {
        self.log.borrow_mut().push(Paint::Reset);
    }
}

const VIEWPORT: Viewport = Viewport {
    width: 1280.0,
    height: 800.0,
};

#[test]
fn stats_counters_end_on_formatted_targets_and_never_replay() {
    let config = MotionConfig::default();
    let items: Vec<Recorder> = (0..7).map(|_| Recorder::default()).collect();
    let colleagues = Recorder::default();
    let assets = Recorder::default();
    let mut stats = StatsAnimator::new(
        &config,
        2,
        items.clone(),
        vec![
            (Counter::new(50_000.0, "", "+"), colleagues.clone()),
            (Counter::new(4.8, "$", "T"), assets.clone()),
        ],
    );

    stats.mount();
    assert_eq!(colleagues.last_text().as_deref(), Some("0+"));
    assert_eq!(assets.last_text().as_deref(), Some("$0T"));
    assert_eq!(items[0].last_style().unwrap().scale, 1.2);

    assert!(!stats.notify_visible(false, 0.0));
    assert!(stats.notify_visible(true, 1.0));
    for step in 0..=240 {
        stats.frame(1.0 + step as f64 / 60.0);
    }

    assert!(stats.is_finished());
    assert_eq!(colleagues.last_text().as_deref(), Some("50,000+"));
    assert_eq!(assets.last_text().as_deref(), Some("$4.8T"));
    assert_eq!(items[6].last_style(), Some(Style::default()));

    let painted = colleagues.paints();
    assert!(!stats.notify_visible(false, 10.0));
    assert!(!stats.notify_visible(true, 11.0));
    stats.frame(12.0);
    assert_eq!(colleagues.paints(), painted);
}

#[test]
fn counters_wait_for_the_configured_delay() {
    let config = MotionConfig::default();
    let target = Recorder::default();
    let mut stats = StatsAnimator::new(
        &config,
        0,
        vec![Recorder::default()],
        vec![(Counter::new(120.0, "", "+"), target.clone())],
    );
    stats.mount();
    stats.notify_visible(true, 0.0);
    stats.frame(0.5);
    assert_eq!(target.last_text().as_deref(), Some("0+"));
    assert_eq!(target.paints(), 1);

    stats.frame(1.0);
    assert_eq!(target.paints(), 2);
}

#[test]
fn services_reveal_respects_replay_policy() {
    for (policy, expected_fires) in [(ReplayPolicy::Once, 1), (ReplayPolicy::EveryEntry, 2)] {
        let config = MotionConfig {
            replay: policy,
            ..MotionConfig::default()
        };
        let cards: Vec<Recorder> = (0..6).map(|_| Recorder::default()).collect();
        let mut group = RevealGroup::new(presets::services_cards(&config, 6), cards.clone());
        group.mount();

        let mut now = 0.0;
        for in_view in [true, true, false, true] {
            for _ in 0..180 {
                group.frame(in_view, now);
                now += 1.0 / 60.0;
            }
        }

        assert_eq!(group.reveal().trigger().times_fired(), expected_fires);
        assert_eq!(cards[5].last_style(), Some(Style::default()));
    }
}

#[test]
fn hero_entrance_completes_and_parallax_scrubs() {
    let config = MotionConfig::default();
    let items: Vec<Recorder> = (0..3).map(|_| Recorder::default()).collect();
    let background = Recorder::default();
    let mut hero = HeroAnimator::new(&config, items.clone(), Some(background.clone()));
    hero.mount();
    assert_eq!(items[0].last_style().unwrap().opacity, 0.0);

    let span = Parallax::span(0.0, 800.0, 800.0);
    let mut frame = FrameContext::new(100.0, 0.0, VIEWPORT);
    hero.frame(&frame, span);
    for step in 1..=180 {
        frame = frame.advance(100.0 + step as f64 / 60.0, 0.0, VIEWPORT);
        hero.frame(&frame, span);
    }
    assert!(hero.is_entrance_done());
    assert_eq!(items[2].last_style(), Some(Style::default()));

    frame = frame.advance(104.0, 800.0, VIEWPORT);
    hero.frame(&frame, span);
    assert_eq!(background.last_style().unwrap().y_percent, -50.0);

    hero.unmount();
    assert!(background.was_reset());
    assert!(items.iter().all(Recorder::was_reset));
}

#[test]
fn strip_paints_only_when_translation_changes() {
    let config = MotionConfig {
        scrub_lag: 0.0,
        ..MotionConfig::default()
    };
    let strip = Recorder::default();
    let panels: Vec<Recorder> = (0..5).map(|_| Recorder::default()).collect();
    let mut animator = StripAnimator::new(&config, strip.clone(), panels.clone());
    assert!(animator.needs_refresh());
    animator
        .refresh(StripGeometry {
            panel_count: 5,
            viewport: VIEWPORT,
            container_top: 800.0,
        })
        .unwrap();

    let frame = FrameContext::new(0.0, 2080.0, VIEWPORT);
    let out = animator.frame(&frame).unwrap();
    assert_eq!(out.active_panel, 1);
    assert_eq!(strip.last_style().unwrap().x, -1280.0);
    let painted = strip.paints();

    animator.frame(&frame.advance(0.016, 2080.0, VIEWPORT));
    assert_eq!(strip.paints(), painted);

    animator.unmount();
    assert!(strip.was_reset());
    assert!(panels.iter().all(Recorder::was_reset));
}

#[test]
fn strip_repaints_panels_after_resize_at_unchanged_translation() {
    let config = MotionConfig {
        scrub_lag: 0.0,
        ..MotionConfig::default()
    };
    let strip = Recorder::default();
    let panels: Vec<Recorder> = (0..3).map(|_| Recorder::default()).collect();
    let mut animator = StripAnimator::new(&config, strip.clone(), panels.clone());
    let narrow = Viewport::new(1000.0, 800.0);
    let wide = Viewport::new(1200.0, 800.0);
    let geometry = |viewport| StripGeometry {
        panel_count: 3,
        viewport,
        container_top: 800.0,
    };

    animator.refresh(geometry(narrow)).unwrap();
    let frame = FrameContext::new(0.0, 1300.0, narrow);
    let before = animator.frame(&frame).unwrap();
    assert_eq!(before.translate_x, -500.0);
    assert_eq!(panels[0].last_style(), Some(before.panels[0]));

    animator.invalidate();
    animator.refresh(geometry(wide)).unwrap();
    let after = animator.frame(&frame.advance(0.016, 1300.0, wide)).unwrap();

    // same translation, different panel progress: panels must be repainted
    assert_eq!(after.translate_x, -500.0);
    assert_ne!(after.panels[0], before.panels[0]);
    assert_eq!(panels[0].last_style(), Some(after.panels[0]));
    assert_eq!(strip.last_style().unwrap().x, -500.0);
}

#[test]
fn unmounting_sections_returns_registry_to_baseline() {
    let engine = Engine::new(MotionConfig::default());
    let mut page = engine.scope("page");
    page.register(HandleKind::FrameLoop, || {});
    let baseline = engine.live_handles();

    let strip = Recorder::default();
    {
        let mut scope = engine.scope("horizontal-scroll");
        let animator = Rc::new(RefCell::new(StripAnimator::new(
            engine.config(),
            strip.clone(),
            vec![Recorder::default(); 3],
        )));
        scope.register(HandleKind::ResizeListener, || {});
        let teardown = animator.clone();
        scope.register(HandleKind::PinSpacer, move || teardown.borrow_mut().unmount());
        let frame_target = animator.clone();
        engine.on_frame(&mut scope, move |frame| {
            let mut animator = frame_target.borrow_mut();
            if animator.needs_refresh() {
                let _ = animator.refresh(StripGeometry {
                    panel_count: 3,
                    viewport: frame.viewport,
                    container_top: 0.0,
                });
            }
            animator.frame(frame);
        });

        engine.tick(FrameContext::new(0.0, 640.0, VIEWPORT));
        assert_eq!(engine.live_handles(), baseline + 3);
        assert_eq!(strip.last_style().unwrap().x, -640.0);
    }

    assert_eq!(engine.live_handles(), baseline);
    assert_eq!(engine.subscriber_count(), 0);
    assert!(strip.was_reset());

    engine.tick(FrameContext::new(0.016, 900.0, VIEWPORT));
    assert!(strip.was_reset());
}
