//! Scroll-to-translation contract of the pinned horizontal strip.

use aon_motion::horizontal::{HorizontalScroll, PinPhase, StripGeometry, StripLayout};
use aon_motion::{FrameContext, MotionConfig, Viewport};
use pretty_assertions::assert_eq;

const VIEWPORT: Viewport = Viewport {
    width: 1440.0,
    height: 900.0,
};

fn layout(panels: usize, container_top: f64) -> StripLayout {
    StripLayout::compute(StripGeometry {
        panel_count: panels,
        viewport: VIEWPORT,
        container_top,
    })
    .unwrap()
    .unwrap()
}

#[test]
fn translation_matches_clamp_formula_everywhere() {
    let layout = layout(5, 900.0);
    let max = layout.strip_width - VIEWPORT.width;

    let mut offset = 0.0;
    while offset < 10_000.0 {
        let expected = -(offset - layout.pin.start).clamp(0.0, max);
        assert_eq!(layout.translate_for(offset), expected, "offset {offset}");
        offset += 37.5;
    }
}

#[test]
fn translation_is_monotonic_and_continuous() {
    let layout = layout(5, 900.0);
    let step = 1.0;
    let mut previous = layout.translate_for(0.0);
    let mut offset = step;
    while offset < 8_000.0 {
        let current = layout.translate_for(offset);
        assert!(current <= previous, "not monotonic at {offset}");
        assert!(previous - current <= step + 1e-9, "jump at {offset}");
        previous = current;
        offset += step;
    }
}

#[test]
fn reverse_scroll_restores_exact_translation() {
    let config = MotionConfig {
        scrub_lag: 0.0,
        ..MotionConfig::default()
    };
    let mut scroll = HorizontalScroll::new(5, &config);
    scroll
        .refresh(StripGeometry {
            panel_count: 5,
            viewport: VIEWPORT,
            container_top: 900.0,
        })
        .unwrap();

    let offsets = [0.0, 1200.0, 3300.0, 6800.0, 12_000.0, 6800.0, 3300.0, 1200.0, 0.0];
    let mut frame = FrameContext::new(0.0, offsets[0], VIEWPORT);
    let mut seen = Vec::new();
    for (i, offset) in offsets.iter().enumerate() {
        frame = frame.advance(i as f64 / 60.0, *offset, VIEWPORT);
        let out = scroll.frame(&frame).unwrap();
        seen.push((out.target_x, out.translate_x, out.panels.clone()));
    }

    for (forward, backward) in [(0, 8), (1, 7), (2, 6), (3, 5)] {
        assert_eq!(seen[forward], seen[backward]);
    }
}

#[test]
fn smoothed_targets_ignore_history() {
    // with smoothing on, the rendered value lags, but the target does not
    let mut scroll = HorizontalScroll::new(4, &MotionConfig::default());
    scroll
        .refresh(StripGeometry {
            panel_count: 4,
            viewport: VIEWPORT,
            container_top: 0.0,
        })
        .unwrap();

    let mut frame = FrameContext::new(0.0, 500.0, VIEWPORT);
    let first = scroll.frame(&frame).unwrap().target_x;
    frame = frame.advance(0.016, 4000.0, VIEWPORT);
    let far = scroll.frame(&frame).unwrap();
    assert!(far.translate_x > far.target_x);
    frame = frame.advance(0.032, 500.0, VIEWPORT);
    assert_eq!(scroll.frame(&frame).unwrap().target_x, first);
}

#[test]
fn pin_phase_brackets_the_range() {
    let layout = layout(3, 2000.0);
    assert_eq!(layout.phase(0.0), PinPhase::Before);
    assert_eq!(layout.phase(2000.0 + 1440.0), PinPhase::Pinned);
    assert_eq!(layout.phase(2000.0 + 2880.0 + 1.0), PinPhase::After);
}

#[test]
fn zero_panels_apply_nothing() {
    let config = MotionConfig::default();
    let mut scroll = HorizontalScroll::new(0, &config);
    let _ = scroll.refresh(StripGeometry {
        panel_count: 0,
        viewport: VIEWPORT,
        container_top: 0.0,
    });

    assert!(!scroll.is_pinned());
    let frame = FrameContext::new(0.0, 300.0, VIEWPORT);
    assert_eq!(scroll.frame(&frame), None);
}
