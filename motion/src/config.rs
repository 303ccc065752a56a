//! Runtime-tunable animation settings.
//!
//! Every field has a default matching the shipped page, so an empty JSON
//! object (or no config at all) yields the stock behaviour. Hosts usually
//! embed overrides as inline JSON and load them with [`MotionConfig::from_json`].

use serde::{Deserialize, Serialize};

use crate::error::{MotionError, Result};
use crate::reveal::ReplayPolicy;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    /// Seconds the rendered strip position lags behind the scroll position. 0 snaps.
    pub scrub_lag: f64,
    /// Delay before the hero entrance timeline starts, in seconds.
    pub hero_delay: f64,
    /// Hero background travel over the section's scroll span, in percent of its height.
    pub parallax_y_percent: f64,
    /// Counter run time in seconds.
    pub counter_duration: f64,
    /// Counters start this many seconds after the stats section is revealed.
    pub counter_delay: f64,
    /// Fraction of the stats section that must be visible to trigger it.
    pub stats_threshold: f64,
    /// Viewport fraction the services section top must pass ("top 80%").
    pub services_start: f64,
    pub services_cards_start: f64,
    pub contact_start: f64,
    pub contact_fields_start: f64,
    /// Whether scroll reveals may replay after the section leaves and re-enters.
    pub replay: ReplayPolicy,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            scrub_lag: 1.0,
            hero_delay: 0.5,
            parallax_y_percent: -50.0,
            counter_duration: 2.0,
            counter_delay: 1.0,
            stats_threshold: 0.3,
            services_start: 0.8,
            services_cards_start: 0.6,
            contact_start: 0.7,
            contact_fields_start: 0.6,
            replay: ReplayPolicy::Once,
        }
    }
}

impl MotionConfig {
    /// Parse and validate a JSON document. Missing keys fall back to defaults.
    pub fn from_json(raw: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        non_negative("scrub_lag", self.scrub_lag)?;
        non_negative("hero_delay", self.hero_delay)?;
        non_negative("counter_duration", self.counter_duration)?;
        non_negative("counter_delay", self.counter_delay)?;
        if !self.parallax_y_percent.is_finite() {
            return Err(MotionError::InvalidConfig {
                field: "parallax_y_percent",
                reason: "must be finite".into(),
            });
        }

        for (field, value) in [
            ("stats_threshold", self.stats_threshold),
            ("services_start", self.services_start),
            ("services_cards_start", self.services_cards_start),
            ("contact_start", self.contact_start),
            ("contact_fields_start", self.contact_fields_start),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(MotionError::InvalidConfig {
                    field,
                    reason: format!("{value} is outside 0..=1"),
                });
            }
        }
        Ok(())
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(MotionError::InvalidConfig {
            field,
            reason: format!("{value} must be a finite number >= 0"),
        })
    }
}
