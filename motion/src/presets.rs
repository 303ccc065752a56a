//! Timelines for each page section.
//!
//! Offsets are in seconds and mirror the shipped design: 0.2 s card stagger,
//! 0.1 s form field stagger, power3.out throughout.

use crate::config::MotionConfig;
use crate::reveal::{Reveal, RevealTrigger};
use crate::style::Style;
use crate::tween::{Position, Timeline, Tween, stagger};

/// Hero title, subtitle and call-to-action, overlapping as they enter.
pub fn hero_entrance(config: &MotionConfig) -> Timeline {
    Timeline::new(config.hero_delay)
        .then(
            Tween::from_to(Style::hidden().with_y(100.0), Style::default()).with_duration(1.2),
            Position::Sequential,
        )
        .then(
            Tween::from_to(Style::hidden().with_y(50.0), Style::default()).with_duration(1.0),
            Position::Offset(-0.8),
        )
        .then(
            Tween::from_to(Style::hidden().with_y(30.0), Style::default()).with_duration(0.8),
            Position::Offset(-0.6),
        )
}

/// `count` items sharing one tween, each delayed by `each` after the previous.
pub fn staggered(tween: &Tween, count: usize, each: f64, base_delay: f64) -> Timeline {
    let mut timeline = Timeline::new(0.0);
    for index in 0..count {
        timeline.add(tween.clone(), Position::At(stagger(index, each, base_delay)));
    }
    timeline
}

fn fade_up(y: f64) -> Tween {
    Tween::from_to(Style::hidden().with_y(y), Style::default())
}

fn pop_in() -> Tween {
    Tween::from_to(Style::hidden().with_y(100.0).with_scale(0.8), Style::default())
        .with_duration(0.8)
}

pub fn services_title(config: &MotionConfig, count: usize) -> Reveal {
    Reveal::new(
        RevealTrigger::new(config.services_start, config.replay),
        staggered(&fade_up(50.0), count, 0.0, 0.0),
    )
}

pub fn services_cards(config: &MotionConfig, count: usize) -> Reveal {
    Reveal::new(
        RevealTrigger::new(config.services_cards_start, config.replay),
        staggered(&pop_in(), count, 0.2, 0.0),
    )
}

pub fn contact_content(config: &MotionConfig, count: usize) -> Reveal {
    Reveal::new(
        RevealTrigger::new(config.contact_start, config.replay),
        staggered(&fade_up(100.0), count, 0.0, 0.0),
    )
}

pub fn contact_fields(config: &MotionConfig, count: usize) -> Reveal {
    let slide = Tween::from_to(Style::hidden().with_x(-50.0), Style::default()).with_duration(0.8);
    Reveal::new(
        RevealTrigger::new(config.contact_fields_start, config.replay),
        staggered(&slide, count, 0.1, 0.0),
    )
}

pub fn contact_info(config: &MotionConfig, count: usize) -> Reveal {
    let slide = Tween::from_to(Style::hidden().with_x(50.0), Style::default()).with_duration(0.8);
    Reveal::new(
        RevealTrigger::new(config.contact_fields_start, config.replay),
        staggered(&slide, count, 0.1, 0.0),
    )
}

/// Stats background, title lines and cards. Item order: background,
/// `title_count` title lines, then `card_count` cards.
pub fn stats_timeline(title_count: usize, card_count: usize) -> Timeline {
    let mut timeline = Timeline::new(0.0);
    timeline.add(
        Tween::from_to(Style::hidden().with_scale(1.2), Style::default()).with_duration(1.5),
        Position::At(0.0),
    );
    for _ in 0..title_count {
        timeline.add(fade_up(50.0), Position::At(0.3));
    }
    for index in 0..card_count {
        timeline.add(pop_in(), Position::At(stagger(index, 0.2, 0.6)));
    }
    timeline
}
