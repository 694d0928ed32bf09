use crate::config::PageConfig;
use crate::input::{Key, SwipeDirection, SwipeTracker};
use crate::reveal::{HeroSchedule, RevealId, RevealSet};

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

/// Elements an [`Action`] can address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    NavToggle,
    NavMenu,
    Navbar,
    Reveal(RevealId),
}

/// Named visual modes; the class name for each comes from [`PageConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presentation {
    Active,
    Scrolled,
    Animate,
}

/// DOM effects returned from event handlers for the browser layer to apply.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Add (`on`) or remove the presentation class on `target`.
    SetClass { target: Target, presentation: Presentation, on: bool },
    /// Smoothly scroll the section container to `top` pixels.
    ScrollContainer { top: f64 },
    /// Suppress the browser's default handling of the triggering event.
    PreventDefault,
}

/// All page interaction state, independent of the DOM.
///
/// Kept apart from `Page` so every behavior can be driven from native tests.
#[derive(Debug, Clone)]
pub struct PageCore {
    menu_open: bool,
    navbar_scrolled: bool,
    viewport_height: f64,
    swipe: SwipeTracker,
    revealed: RevealSet,
    hero: HeroSchedule,
    armed_at_ms: Option<f64>,
    scrolled_threshold_px: f64,
    reveal_threshold: f64,
    scroll_keys: Vec<String>,
}

impl Default for PageCore {
    fn default() -> Self {
        Self::new(&PageConfig::default())
    }
}

impl PageCore {
    #[must_use]
    pub fn new(config: &PageConfig) -> Self {
        Self {
            menu_open: false,
            navbar_scrolled: false,
            viewport_height: 0.0,
            swipe: SwipeTracker::new(config.swipe_threshold_px),
            revealed: RevealSet::new(),
            hero: HeroSchedule::new(config.hero_schedule.clone()),
            armed_at_ms: None,
            scrolled_threshold_px: config.scrolled_threshold_px,
            reveal_threshold: config.reveal_threshold,
            scroll_keys: config.scroll_keys.clone(),
        }
    }

    // --- Navigation toggle ---

    /// Flip the menu and its toggle button between open and closed.
    pub fn on_nav_toggle_click(&mut self) -> Vec<Action> {
        self.menu_open = !self.menu_open;
        self.menu_actions()
    }

    /// A menu link was followed; close the menu whatever its state.
    pub fn on_nav_link_click(&mut self) -> Vec<Action> {
        self.menu_open = false;
        self.menu_actions()
    }

    fn menu_actions(&self) -> Vec<Action> {
        vec![
            Action::SetClass { target: Target::NavMenu, presentation: Presentation::Active, on: self.menu_open },
            Action::SetClass { target: Target::NavToggle, presentation: Presentation::Active, on: self.menu_open },
        ]
    }

    // --- Navbar ---

    /// Recompute the navbar style for the current window scroll offset.
    pub fn on_scroll(&mut self, scroll_y: f64) -> Vec<Action> {
        self.navbar_scrolled = scroll_y > self.scrolled_threshold_px;
        vec![Action::SetClass { target: Target::Navbar, presentation: Presentation::Scrolled, on: self.navbar_scrolled }]
    }

    // --- Section navigator ---

    /// Update the viewport height used as the scroll destination.
    pub fn set_viewport_height(&mut self, height: f64) {
        self.viewport_height = height;
    }

    #[must_use]
    pub fn on_scroll_arrow_click(&self) -> Vec<Action> {
        vec![self.advance()]
    }

    /// Advance on the configured keys, suppressing the browser's own scrolling.
    #[must_use]
    pub fn on_key_down(&self, key: &Key) -> Vec<Action> {
        if !key.is_section_advance(&self.scroll_keys) {
            return Vec::new();
        }
        vec![Action::PreventDefault, self.advance()]
    }

    pub fn on_touch_start(&mut self, y: f64) {
        self.swipe.begin(y);
    }

    /// Only an upward swipe advances; downward swipes are left alone.
    pub fn on_touch_end(&mut self, y: f64) -> Vec<Action> {
        match self.swipe.end(y) {
            Some(SwipeDirection::Up) => vec![self.advance()],
            Some(SwipeDirection::Down) | None => Vec::new(),
        }
    }

    // The destination is always the second section, not "one section down".
    fn advance(&self) -> Action {
        Action::ScrollContainer { top: self.viewport_height }
    }

    // --- Reveal ---

    /// Arm the reveal animator. Returns `false` if it was already armed.
    pub fn arm(&mut self, now_ms: f64) -> bool {
        if self.armed_at_ms.is_some() {
            return false;
        }
        self.armed_at_ms = Some(now_ms);
        true
    }

    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.armed_at_ms.is_some()
    }

    /// Clock reading passed to the first successful [`PageCore::arm`].
    #[must_use]
    pub fn armed_at_ms(&self) -> Option<f64> {
        self.armed_at_ms
    }

    /// Hero selectors whose entrance delay has elapsed since arming.
    pub fn hero_due(&mut self, now_ms: f64) -> Vec<String> {
        let Some(armed_at) = self.armed_at_ms else {
            return Vec::new();
        };
        self.hero.due(now_ms - armed_at)
    }

    /// The hero steps to schedule timers for.
    #[must_use]
    pub fn hero_schedule(&self) -> &HeroSchedule {
        &self.hero
    }

    /// An observed target's visibility changed.
    pub fn on_intersection(&mut self, id: RevealId, ratio: f64, is_intersecting: bool) -> Vec<Action> {
        if !is_intersecting || ratio < self.reveal_threshold {
            return Vec::new();
        }
        self.reveal(id)
    }

    /// Mark `id` revealed; emits the class change only the first time.
    pub fn reveal(&mut self, id: RevealId) -> Vec<Action> {
        if !self.revealed.mark(id) {
            return Vec::new();
        }
        vec![Action::SetClass { target: Target::Reveal(id), presentation: Presentation::Animate, on: true }]
    }

    // --- Queries ---

    #[must_use]
    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    #[must_use]
    pub fn navbar_scrolled(&self) -> bool {
        self.navbar_scrolled
    }

    #[must_use]
    pub fn viewport_height(&self) -> f64 {
        self.viewport_height
    }

    #[must_use]
    pub fn is_revealed(&self, id: RevealId) -> bool {
        self.revealed.contains(id)
    }
}
