//! Page-level motion settings.
//!
//! Deployments can override timings without a rebuild by embedding
//! `<script id="motion-config" type="application/json">{...}</script>`
//! in `index.html`. Anything missing or malformed falls back to defaults.

use aon_motion::MotionConfig;

pub const CONFIG_ELEMENT_ID: &str = "motion-config";

pub fn load() -> MotionConfig {
    let raw = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|element| element.text_content());
    parse(raw.as_deref())
}

pub fn parse(raw: Option<&str>) -> MotionConfig {
    let Some(raw) = raw.map(str::trim).filter(|raw| !raw.is_empty()) else {
        tracing::debug!("no inline motion config, using defaults");
        return MotionConfig::default();
    };
    match MotionConfig::from_json(raw) {
        Ok(config) => {
            tracing::debug!(?config, "loaded inline motion config");
            config
        }
        Err(err) => {
            tracing::warn!(%err, "ignoring inline motion config");
            MotionConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_or_blank_config_uses_defaults() {
        assert_eq!(parse(None), MotionConfig::default());
        assert_eq!(parse(Some("  \n")), MotionConfig::default());
    }

    #[test]
    fn partial_config_overrides_named_fields() {
        let config = parse(Some(r#"{ "hero_delay": 0.25 }"#));
        assert_eq!(config.hero_delay, 0.25);
        assert_eq!(config.counter_delay, MotionConfig::default().counter_delay);
    }

    #[test]
    fn malformed_config_falls_back() {
        assert_eq!(parse(Some("{ not json")), MotionConfig::default());
        assert_eq!(parse(Some(r#"{ "scrub_lag": -1 }"#)), MotionConfig::default());
    }
}
