// Site tunables, overridable from a JSON block in the page (#site-config)

use serde::Deserialize;

use crate::state::transform::{MAX_SCALE, MIN_SCALE};

pub const CONFIG_ELEMENT_ID: &str = "site-config";

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub nav: NavConfig,
    pub reveal: RevealConfig,
    pub lightbox: LightboxConfig,
    pub gesture: GestureConfig,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    /// Vertical scroll (px) past which the navbar gets its scrolled style.
    pub scroll_threshold: f64,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            scroll_threshold: 60.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    pub selector: String,
    pub threshold: f64,
    pub root_margin: String,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            selector: [
                ".about__grid",
                ".brands__col",
                ".brands__photo",
                ".gallery__category",
                ".services__content",
                ".casestudy__item",
                ".contact__info",
            ]
            .join(", "),
            threshold: 0.15,
            root_margin: "0px 0px -40px 0px".to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct LightboxConfig {
    pub selector: String,
    pub loop_gallery: bool,
    pub close_on_outside_click: bool,
}

impl Default for LightboxConfig {
    fn default() -> Self {
        Self {
            selector: ".glightbox".to_string(),
            loop_gallery: false,
            close_on_outside_click: true,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct GestureConfig {
    /// A gesture ending at or below this scale snaps back to identity.
    pub snap_back_below: f64,
    pub double_tap_scale: f64,
    pub double_tap_window_ms: f64,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            snap_back_below: 1.05,
            double_tap_scale: 2.5,
            double_tap_window_ms: 300.0,
        }
    }
}

impl GestureConfig {
    /// Replaces non-finite or out-of-range values so the scale limits hold
    /// whatever the page supplied.
    pub fn sanitized(self) -> Self {
        let d = Self::default();
        let scale = |v: f64, fallback: f64| {
            if v.is_finite() {
                v.clamp(MIN_SCALE, MAX_SCALE)
            } else {
                fallback
            }
        };
        Self {
            snap_back_below: scale(self.snap_back_below, d.snap_back_below),
            double_tap_scale: scale(self.double_tap_scale, d.double_tap_scale),
            double_tap_window_ms: if self.double_tap_window_ms.is_finite()
                && self.double_tap_window_ms >= 0.0
            {
                self.double_tap_window_ms
            } else {
                d.double_tap_window_ms
            },
        }
    }
}

impl SiteConfig {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Reads the page's config block. Missing block means defaults; a broken
    /// one is logged and ignored.
    pub fn load() -> Self {
        let raw = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());
        let Some(raw) = raw else {
            return Self::default();
        };
        match Self::from_json(&raw) {
            Ok(cfg) => {
                log::info!("loaded site config from #{CONFIG_ELEMENT_ID}");
                cfg
            }
            Err(err) => {
                log::warn!("ignoring invalid #{CONFIG_ELEMENT_ID}: {err}");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_page_script() {
        let cfg = SiteConfig::default();
        assert_eq!(cfg.nav.scroll_threshold, 60.0);
        assert_eq!(cfg.reveal.threshold, 0.15);
        assert_eq!(cfg.reveal.root_margin, "0px 0px -40px 0px");
        assert!(cfg.reveal.selector.starts_with(".about__grid, .brands__col"));
        assert!(cfg.reveal.selector.ends_with(".contact__info"));
        assert_eq!(cfg.lightbox.selector, ".glightbox");
        assert!(!cfg.lightbox.loop_gallery);
        assert_eq!(cfg.gesture.snap_back_below, 1.05);
    }

    #[test]
    fn partial_json_keeps_other_defaults() {
        let cfg = SiteConfig::from_json(
            r#"{"nav": {"scroll_threshold": 120}, "gesture": {"double_tap_scale": 3}}"#,
        )
        .unwrap();
        assert_eq!(cfg.nav.scroll_threshold, 120.0);
        assert_eq!(cfg.gesture.double_tap_scale, 3.0);
        assert_eq!(cfg.gesture.double_tap_window_ms, 300.0);
        assert_eq!(cfg.lightbox, LightboxConfig::default());
    }

    #[test]
    fn empty_object_is_default() {
        assert_eq!(SiteConfig::from_json("{}").unwrap(), SiteConfig::default());
    }

    #[test]
    fn scale_limits_are_not_configurable() {
        // unknown keys are ignored; the [1, 5] range is fixed
        let cfg =
            SiteConfig::from_json(r#"{"gesture": {"min_scale": 3, "max_scale": 2}}"#).unwrap();
        assert_eq!(cfg.gesture, GestureConfig::default());
    }

    #[test]
    fn sanitize_pulls_gesture_values_into_range() {
        let cfg = GestureConfig {
            snap_back_below: 0.2,
            double_tap_scale: 40.0,
            double_tap_window_ms: -5.0,
        }
        .sanitized();
        assert_eq!(cfg.snap_back_below, 1.0);
        assert_eq!(cfg.double_tap_scale, 5.0);
        assert_eq!(cfg.double_tap_window_ms, 300.0);

        let cfg = GestureConfig {
            snap_back_below: f64::NAN,
            double_tap_scale: f64::INFINITY,
            double_tap_window_ms: f64::NAN,
        }
        .sanitized();
        assert_eq!(cfg, GestureConfig::default());
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(SiteConfig::from_json("{nav:").is_err());
    }
}
