//! # aon-motion
//!
//! Scroll-linked animation core for the Aon landing page.
//!
//! Everything here is host-independent: the page (a Leptos CSR app) measures
//! the DOM, samples scroll position once per animation frame and feeds the
//! resulting [`FrameContext`] into an [`Engine`]. The engine fans the frame
//! out to per-section bindings, which paint explicit element handles through
//! the [`Target`] trait.
//!
//! ## Quick Start
//!
//! ```rust
//! use aon_motion::{Engine, FrameContext, MotionConfig, Viewport};
//! use aon_motion::horizontal::{StripGeometry, StripLayout};
//!
//! let engine = Engine::new(MotionConfig::default());
//! let mut scope = engine.scope("example");
//!
//! let layout = StripLayout::compute(StripGeometry {
//!     panel_count: 5,
//!     viewport: Viewport::new(1280.0, 800.0),
//!     container_top: 800.0,
//! })
//! .unwrap()
//! .unwrap();
//!
//! engine.on_frame(&mut scope, move |frame| {
//!     let _x = layout.translate_for(frame.scroll_y);
//! });
//! engine.tick(FrameContext::new(0.0, 1440.0, Viewport::new(1280.0, 800.0)));
//!
//! drop(scope);
//! assert_eq!(engine.live_handles(), 0);
//! ```
//!
//! ## Architecture
//!
//! - [`engine`] - frame fan-out and the [`Target`] paint seam
//! - [`registry`] - scoped handle ownership and teardown
//! - [`horizontal`] - pinned horizontal strip geometry and controller
//! - [`reveal`], [`tween`], [`presets`] - one-shot reveal timelines
//! - [`counter`] - count-up statistics
//! - [`parallax`] - scrubbed background drift
//! - [`bind`] - section animators that paint targets
//! - [`form`] - contact form state and validation
//! - [`config`], [`error`] - settings and error types

#![warn(rustdoc::missing_crate_level_docs)]

pub mod bind;
pub mod config;
pub mod counter;
pub mod easing;
pub mod engine;
pub mod error;
pub mod form;
pub mod horizontal;
pub mod parallax;
pub mod presets;
pub mod registry;
pub mod reveal;
pub mod scroll;
pub mod scrub;
pub mod style;
pub mod tween;

pub use config::MotionConfig;
pub use engine::{Engine, Target};
pub use error::{FormError, MotionError, Result};
pub use registry::{HandleId, HandleKind, HandleRegistry, Scope};
pub use scroll::{FrameContext, ScrollSpan, Viewport};
pub use style::Style;
