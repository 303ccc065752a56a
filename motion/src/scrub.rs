//! Lagged smoothing for scrubbed, scroll-linked values.

/// Follows a scroll-derived target with a configurable lag.
///
/// With `lag == 0` the value tracks the target exactly. Otherwise it closes
/// roughly 95% of the remaining gap every `lag` seconds and snaps once it is
/// within half a pixel.
#[derive(Debug, Clone)]
pub struct Scrub {
    lag: f64,
    current: Option<f64>,
}

const SNAP_DISTANCE: f64 = 0.5;

impl Scrub {
    pub fn new(lag: f64) -> Self {
        Self {
            lag: if lag.is_finite() { lag.max(0.0) } else { 0.0 },
            current: None,
        }
    }

    pub fn current(&self) -> Option<f64> {
        self.current
    }

    /// Advance by `delta` seconds towards `target` and return the new value.
    pub fn step(&mut self, target: f64, delta: f64) -> f64 {
        let next = match self.current {
            None => target,
            Some(_) if self.lag == 0.0 => target,
            Some(current) => {
                let alpha = 1.0 - (-3.0 * delta.max(0.0) / self.lag).exp();
                let next = current + (target - current) * alpha;
                if (target - next).abs() < SNAP_DISTANCE {
                    target
                } else {
                    next
                }
            }
        };
        self.current = Some(next);
        next
    }

    pub fn is_settled(&self, target: f64) -> bool {
        self.current == Some(target)
    }

    /// Forget the current value; the next step jumps straight to its target.
    pub fn reset(&mut self) {
        self.current = None;
    }
}
