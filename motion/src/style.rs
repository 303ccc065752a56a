//! Animatable element properties.

/// The subset of visual properties the page animates.
///
/// `x`/`y` are pixel offsets, `y_percent` is an offset relative to the
/// element's own height. [`Style::default`] is the identity (fully opaque,
/// untransformed), which is also what reveals settle on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Style {
    pub opacity: f64,
    pub x: f64,
    pub y: f64,
    pub y_percent: f64,
    pub scale: f64,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            opacity: 1.0,
            x: 0.0,
            y: 0.0,
            y_percent: 0.0,
            scale: 1.0,
        }
    }
}

impl Style {
    pub fn hidden() -> Self {
        Self {
            opacity: 0.0,
            ..Self::default()
        }
    }

    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    pub fn with_x(mut self, x: f64) -> Self {
        self.x = x;
        self
    }

    pub fn with_y(mut self, y: f64) -> Self {
        self.y = y;
        self
    }

    pub fn with_y_percent(mut self, y_percent: f64) -> Self {
        self.y_percent = y_percent;
        self
    }

    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    /// Linear interpolation between two styles; `t` is not clamped.
    pub fn lerp(&self, to: &Style, t: f64) -> Style {
        let mix = |a: f64, b: f64| a + (b - a) * t;
        Style {
            opacity: mix(self.opacity, to.opacity),
            x: mix(self.x, to.x),
            y: mix(self.y, to.y),
            y_percent: mix(self.y_percent, to.y_percent),
            scale: mix(self.scale, to.scale),
        }
    }

    /// CSS `transform` value for this style.
    pub fn transform_css(&self) -> String {
        let mut css = format!("translate3d({:.2}px, {:.2}px, 0px)", self.x, self.y);
        if self.y_percent != 0.0 {
            css.push_str(&format!(" translateY({:.2}%)", self.y_percent));
        }
        if self.scale != 1.0 {
            css.push_str(&format!(" scale({:.4})", self.scale));
        }
        css
    }

    /// CSS `opacity` value, clamped to the valid range.
    pub fn opacity_css(&self) -> String {
        format!("{:.3}", self.opacity.clamp(0.0, 1.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn lerp_halfway() {
        let from = Style::hidden().with_y(100.0).with_scale(0.8);
        let mid = from.lerp(&Style::default(), 0.5);

        assert_eq!(mid.opacity, 0.5);
        assert_eq!(mid.y, 50.0);
        assert!((mid.scale - 0.9).abs() < 1e-12);
    }

    #[test]
    fn identity_transform_is_plain_translate() {
        assert_eq!(
            Style::default().transform_css(),
            "translate3d(0.00px, 0.00px, 0px)"
        );
    }

    #[test]
    fn transform_includes_percent_and_scale_when_set() {
        let css = Style::default()
            .with_x(-1280.0)
            .with_y_percent(-25.0)
            .with_scale(1.2)
            .transform_css();

        assert_eq!(
            css,
            "translate3d(-1280.00px, 0.00px, 0px) translateY(-25.00%) scale(1.2000)"
        );
    }

    #[test]
    fn opacity_is_clamped_for_css() {
        assert_eq!(Style::default().with_opacity(1.4).opacity_css(), "1.000");
        assert_eq!(Style::default().with_opacity(-0.2).opacity_css(), "0.000");
    }
}
