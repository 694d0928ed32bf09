//! Page controller configuration.
//!
//! Every field defaults to the values in [`crate::consts`], so a page whose
//! markup follows the stock ids and class names needs no config at all. Pages
//! that differ embed a JSON block and override only the fields they need:
//!
//! ```html
//! <script type="application/json" id="pagewire-config">
//!   { "scrolled_threshold_px": 80, "animate_class": "is-visible" }
//! </script>
//! ```

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::consts;
use crate::error::PageError;

/// One step of the staggered hero entrance.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HeroStep {
    /// Delay after arm time before the element animates.
    pub delay_ms: u32,
    /// Selector of the element; the first match is used.
    pub selector: String,
}

/// Tunables and DOM hooks for every behavior.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub nav_toggle_id: String,
    pub nav_menu_id: String,
    pub navbar_selector: String,
    pub nav_link_selector: String,
    pub scroll_arrow_id: String,
    pub container_id: String,

    pub active_class: String,
    pub scrolled_class: String,
    pub animate_class: String,

    /// Navbar is "scrolled" when the offset is strictly greater than this.
    pub scrolled_threshold_px: f64,
    /// A swipe must move strictly further than this to count.
    pub swipe_threshold_px: f64,
    /// Visible fraction in `[0, 1]` at which reveal targets animate.
    pub reveal_threshold: f64,
    pub reveal_root_margin: String,

    pub reveal_selectors: Vec<String>,
    pub hero_schedule: Vec<HeroStep>,
    pub scroll_keys: Vec<String>,

    /// `log` level name for the console logger (`"error"` .. `"trace"`).
    pub log_level: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            nav_toggle_id: consts::NAV_TOGGLE_ID.to_owned(),
            nav_menu_id: consts::NAV_MENU_ID.to_owned(),
            navbar_selector: consts::NAVBAR_SELECTOR.to_owned(),
            nav_link_selector: consts::NAV_LINK_SELECTOR.to_owned(),
            scroll_arrow_id: consts::SCROLL_ARROW_ID.to_owned(),
            container_id: consts::CONTAINER_ID.to_owned(),
            active_class: consts::ACTIVE_CLASS.to_owned(),
            scrolled_class: consts::SCROLLED_CLASS.to_owned(),
            animate_class: consts::ANIMATE_CLASS.to_owned(),
            scrolled_threshold_px: consts::SCROLLED_THRESHOLD_PX,
            swipe_threshold_px: consts::SWIPE_THRESHOLD_PX,
            reveal_threshold: consts::REVEAL_THRESHOLD,
            reveal_root_margin: consts::REVEAL_ROOT_MARGIN.to_owned(),
            reveal_selectors: consts::REVEAL_SELECTORS.iter().map(|s| (*s).to_owned()).collect(),
            hero_schedule: consts::HERO_SCHEDULE
                .iter()
                .map(|(delay_ms, selector)| HeroStep { delay_ms: *delay_ms, selector: (*selector).to_owned() })
                .collect(),
            scroll_keys: consts::SCROLL_KEYS.iter().map(|s| (*s).to_owned()).collect(),
            log_level: "info".to_owned(),
        }
    }
}

impl PageConfig {
    /// Parse and validate a JSON config block. Missing fields keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::Config`] for malformed JSON and
    /// [`PageError::InvalidConfig`] when [`PageConfig::validate`] rejects it.
    pub fn from_json(raw: &str) -> Result<Self, PageError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges that serde cannot express.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::InvalidConfig`] naming the first offending field.
    pub fn validate(&self) -> Result<(), PageError> {
        for (name, value) in [
            ("scrolled_threshold_px", self.scrolled_threshold_px),
            ("swipe_threshold_px", self.swipe_threshold_px),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(PageError::InvalidConfig(format!("{name} must be a finite, non-negative number")));
            }
        }
        if !(0.0..=1.0).contains(&self.reveal_threshold) {
            return Err(PageError::InvalidConfig("reveal_threshold must be within [0, 1]".to_owned()));
        }
        for (name, class) in [
            ("active_class", &self.active_class),
            ("scrolled_class", &self.scrolled_class),
            ("animate_class", &self.animate_class),
        ] {
            if class.trim().is_empty() || class.contains(char::is_whitespace) {
                return Err(PageError::InvalidConfig(format!("{name} must be a single class name")));
            }
        }
        if let Some(step) = self.hero_schedule.iter().find(|step| step.selector.trim().is_empty()) {
            return Err(PageError::InvalidConfig(format!("hero step at {}ms has an empty selector", step.delay_ms)));
        }
        self.log_filter()?;
        Ok(())
    }

    /// The configured console log level.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::InvalidConfig`] when `log_level` names no level.
    pub fn log_filter(&self) -> Result<log::Level, PageError> {
        self.log_level
            .parse()
            .map_err(|_| PageError::InvalidConfig(format!("unknown log_level {:?}", self.log_level)))
    }
}
