//! Easing curves.

/// Easing curves used by the page. `PowerNOut` follow the usual
/// "power" naming: power2 is cubic, power3 is quartic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Ease {
    /// No easing; used for scrubbed, scroll-linked motion.
    #[default]
    Linear,
    Power2Out,
    Power3Out,
}

impl Ease {
    /// Map linear progress `t` (clamped to 0..=1) onto the curve.
    pub fn apply(self, t: f64) -> f64 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        match self {
            Ease::Linear => t,
            Ease::Power2Out => 1.0 - (1.0 - t).powi(3),
            Ease::Power3Out => 1.0 - (1.0 - t).powi(4),
        }
    }
}
