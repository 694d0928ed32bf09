//! Default identifiers, class names, and thresholds for the page controller.
//!
//! These are the values [`crate::config::PageConfig::default`] starts from.
//! Markup that uses different ids or class names overrides them through the
//! JSON config block instead of editing this file.

// ── Element lookups ─────────────────────────────────────────────

/// Id of the hamburger button that opens the mobile menu.
pub const NAV_TOGGLE_ID: &str = "nav-toggle";

/// Id of the collapsible menu panel.
pub const NAV_MENU_ID: &str = "nav-menu";

/// Selector for the fixed navbar whose style changes on scroll.
pub const NAVBAR_SELECTOR: &str = ".navbar";

/// Selector for links inside the menu; clicking one closes the menu.
pub const NAV_LINK_SELECTOR: &str = ".nav-link";

/// Id of the "scroll down" arrow in the hero section.
pub const SCROLL_ARROW_ID: &str = "scrollArrow";

/// Id of the scroll-snapping container holding the full-viewport sections.
pub const CONTAINER_ID: &str = "container";

/// Id of the optional `<script type="application/json">` config block.
pub const CONFIG_ELEMENT_ID: &str = "pagewire-config";

// ── Presentation classes ────────────────────────────────────────

/// Class applied to the menu and toggle while the menu is open.
pub const ACTIVE_CLASS: &str = "active";

/// Class applied to the navbar once the page has scrolled past the threshold.
pub const SCROLLED_CLASS: &str = "scrolled";

/// Class applied to reveal targets once they have entered the viewport.
pub const ANIMATE_CLASS: &str = "animate";

// ── Thresholds ──────────────────────────────────────────────────

/// Vertical scroll offset in pixels beyond which the navbar is "scrolled".
pub const SCROLLED_THRESHOLD_PX: f64 = 50.0;

/// Minimum vertical swipe distance in pixels that counts as a gesture.
pub const SWIPE_THRESHOLD_PX: f64 = 50.0;

/// Visible fraction of a reveal target required before it animates.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Observer root margin; the negative bottom inset delays reveals slightly.
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

// ── Catalogs ────────────────────────────────────────────────────

/// Elements observed for reveal-on-scroll.
pub const REVEAL_SELECTORS: [&str; 9] = [
    ".hero-title",
    ".hero-subtitle",
    ".hero-description",
    ".scroll-arrow",
    ".section-title",
    ".about-content",
    ".services-list li",
    ".portfolio-item",
    ".cta-button",
];

/// Staggered hero entrance: `(delay_ms, selector)` measured from arm time.
pub const HERO_SCHEDULE: [(u32, &str); 4] = [
    (100, ".hero-title"),
    (300, ".hero-subtitle"),
    (500, ".hero-description"),
    (700, ".scroll-arrow"),
];

/// Keys that advance to the next section. `" "` is the space bar.
pub const SCROLL_KEYS: [&str; 2] = ["ArrowDown", " "];
