use log::debug;
use web_sys::{window, Event};

use crate::config;
use crate::i18n::storage::{LanguageStore, LocalStore};

/// The offered step written as `value`, if any.
pub fn offered(value: &str) -> Option<f64> {
    let value = value.trim().parse::<f64>().ok()?;
    config::FONT_SCALES
        .iter()
        .copied()
        .find(|scale| (scale - value).abs() < 1e-6)
}

/// Stored scale if it is one of the offered steps, otherwise 1.
pub fn parse_scale(stored: Option<&str>) -> f64 {
    stored.and_then(offered).unwrap_or(1.0)
}

/// Whether a button labelled with `data-scale` stands for `current`.
pub fn is_current(button_scale: Option<&str>, current: f64) -> bool {
    button_scale
        .and_then(offered)
        .map_or(false, |scale| (scale - current).abs() < 1e-6)
}

pub fn stored() -> f64 {
    parse_scale(LocalStore::new(config::SCALE_STORAGE_KEY).load().as_deref())
}

/// Zooms the whole page, then lets layout-dependent code re-measure.
pub fn apply(scale: f64) {
    let Some(window) = window() else { return };
    if let Some(body) = window.document().and_then(|d| d.body()) {
        let _ = body.style().set_property("zoom", &scale.to_string());
    }
    if let Ok(event) = Event::new("resize") {
        let _ = window.dispatch_event(&event);
    }
    debug!("page scale set to {}", scale);
}

pub fn select(scale: f64) {
    apply(scale);
    LocalStore::new(config::SCALE_STORAGE_KEY).save(&scale.to_string());
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(None, 1.0)]
    #[case(Some("1"), 1.0)]
    #[case(Some("1.15"), 1.15)]
    #[case(Some(" 1.3 "), 1.3)]
    #[case(Some("2"), 1.0)]
    #[case(Some("large"), 1.0)]
    fn only_offered_scales_are_restored(#[case] stored: Option<&str>, #[case] expected: f64) {
        assert_eq!(parse_scale(stored), expected);
    }

    #[rstest]
    #[case(Some("1.15"), 1.15, true)]
    #[case(Some("1"), 1.15, false)]
    #[case(Some("1.0"), 1.0, true)]
    #[case(Some("huge"), 1.0, false)]
    #[case(None, 1.0, false)]
    fn marks_the_current_button(#[case] attr: Option<&str>, #[case] current: f64, #[case] active: bool) {
        assert_eq!(is_current(attr, current), active);
    }

    #[test]
    fn offered_scales_survive_storage_format() {
        for scale in config::FONT_SCALES {
            assert_eq!(parse_scale(Some(&scale.to_string())), *scale);
        }
    }
}
