//! Browser wiring for [`PageCore`].
//!
//! `Page` resolves the elements each behavior needs, registers DOM listeners
//! once, and applies the [`Action`]s returned by the core. Listeners and
//! timers are page-lifetime, so their closures are leaked with `forget`.
//!
//! Behaviors install independently: a missing element disables only the
//! behavior that needed it.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use js_sys::{Array, Date};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, Event, EventTarget, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, KeyboardEvent, NodeList, ScrollBehavior, ScrollToOptions, TouchEvent, TouchList, Window,
};

use crate::config::PageConfig;
use crate::consts::CONFIG_ELEMENT_ID;
use crate::controller::{Action, PageCore, Presentation, Target};
use crate::error::PageError;
use crate::input::Key;
use crate::reveal::RevealId;

/// Read the optional JSON config block; no block means defaults.
///
/// # Errors
///
/// Returns an error when there is no document or the block is invalid.
pub fn load_config() -> Result<PageConfig, PageError> {
    let document = web_sys::window().ok_or(PageError::NoWindow)?.document().ok_or(PageError::NoDocument)?;
    let Some(block) = document.get_element_by_id(CONFIG_ELEMENT_ID) else {
        return Ok(PageConfig::default());
    };
    PageConfig::from_json(&block.text_content().unwrap_or_default())
}

/// The live page: resolved DOM handles plus the shared [`PageCore`].
pub struct Page {
    window: Window,
    document: Document,
    config: PageConfig,
    core: RefCell<PageCore>,
    nav_toggle: Option<Element>,
    nav_menu: Option<Element>,
    navbar: Option<Element>,
    scroll_arrow: Option<Element>,
    container: Option<Element>,
    reveal_targets: RefCell<Vec<Element>>,
}

impl Page {
    /// Resolve the window, document and behavior elements.
    ///
    /// # Errors
    ///
    /// Fails only when there is no window/document or a configured selector
    /// is malformed. Absent elements are reported later, per behavior.
    pub fn boot(config: PageConfig) -> Result<Rc<Self>, PageError> {
        let window = web_sys::window().ok_or(PageError::NoWindow)?;
        let document = window.document().ok_or(PageError::NoDocument)?;
        let page = Self {
            nav_toggle: document.get_element_by_id(&config.nav_toggle_id),
            nav_menu: document.get_element_by_id(&config.nav_menu_id),
            navbar: document.query_selector(&config.navbar_selector)?,
            scroll_arrow: document.get_element_by_id(&config.scroll_arrow_id),
            container: document.get_element_by_id(&config.container_id),
            core: RefCell::new(PageCore::new(&config)),
            reveal_targets: RefCell::new(Vec::new()),
            window,
            document,
            config,
        };
        Ok(Rc::new(page))
    }

    /// Install every behavior, logging the ones that could not be wired.
    pub fn install(self: &Rc<Self>) {
        let results = [
            ("menu toggle", self.install_menu()),
            ("navbar scroll", self.install_navbar()),
            ("section navigator", self.install_navigator()),
            ("scroll reveal", self.install_reveal()),
        ];
        for (behavior, result) in results {
            match result {
                Ok(()) => log::info!("{behavior}: installed"),
                Err(err) => log::error!("{behavior}: disabled: {err}"),
            }
        }
    }

    // --- Navigation toggle ---

    fn install_menu(self: &Rc<Self>) -> Result<(), PageError> {
        let toggle = require(self.nav_toggle.as_ref(), "nav toggle", &self.config.nav_toggle_id)?;
        require(self.nav_menu.as_ref(), "nav menu", &self.config.nav_menu_id)?;

        let page = Rc::clone(self);
        listen(toggle, "click", move |_| {
            let actions = page.core.borrow_mut().on_nav_toggle_click();
            page.apply(&actions, None);
        })?;

        for link in elements(&self.document.query_selector_all(&self.config.nav_link_selector)?) {
            let page = Rc::clone(self);
            listen(&link, "click", move |_| {
                let actions = page.core.borrow_mut().on_nav_link_click();
                page.apply(&actions, None);
            })?;
        }
        Ok(())
    }

    // --- Navbar ---

    fn install_navbar(self: &Rc<Self>) -> Result<(), PageError> {
        require(self.navbar.as_ref(), "navbar", &self.config.navbar_selector)?;

        let page = Rc::clone(self);
        listen(&self.window, "scroll", move |_| match page.window.scroll_y() {
            Ok(scroll_y) => {
                let actions = page.core.borrow_mut().on_scroll(scroll_y);
                page.apply(&actions, None);
            }
            Err(err) => log::warn!("scroll offset unavailable: {}", PageError::from(err)),
        })
    }

    // --- Section navigator ---

    fn install_navigator(self: &Rc<Self>) -> Result<(), PageError> {
        let arrow = require(self.scroll_arrow.as_ref(), "scroll arrow", &self.config.scroll_arrow_id)?;
        let container = require(self.container.as_ref(), "scroll container", &self.config.container_id)?;

        let page = Rc::clone(self);
        listen(arrow, "click", move |_| {
            page.refresh_viewport();
            let actions = page.core.borrow().on_scroll_arrow_click();
            page.apply(&actions, None);
        })?;

        let page = Rc::clone(self);
        listen(&self.document, "keydown", move |event| {
            let Some(keyboard) = event.dyn_ref::<KeyboardEvent>() else {
                return;
            };
            page.refresh_viewport();
            let actions = page.core.borrow().on_key_down(&Key(keyboard.key()));
            page.apply(&actions, Some(&event));
        })?;

        let page = Rc::clone(self);
        listen(container, "touchstart", move |event| {
            if let Some(y) = event.dyn_ref::<TouchEvent>().and_then(|touch| first_client_y(&touch.touches())) {
                page.core.borrow_mut().on_touch_start(y);
            }
        })?;

        let page = Rc::clone(self);
        listen(container, "touchend", move |event| {
            let Some(y) = event.dyn_ref::<TouchEvent>().and_then(|touch| first_client_y(&touch.changed_touches()))
            else {
                return;
            };
            page.refresh_viewport();
            let actions = page.core.borrow_mut().on_touch_end(y);
            page.apply(&actions, None);
        })
    }

    fn refresh_viewport(&self) {
        match self.window.inner_height() {
            Ok(height) => {
                if let Some(height) = height.as_f64() {
                    self.core.borrow_mut().set_viewport_height(height);
                }
            }
            Err(err) => log::warn!("viewport height unavailable: {}", PageError::from(err)),
        }
    }

    // --- Reveal ---

    fn install_reveal(self: &Rc<Self>) -> Result<(), PageError> {
        if self.document.ready_state() != "loading" {
            return self.arm_reveal();
        }
        let page = Rc::clone(self);
        listen(&self.document, "DOMContentLoaded", move |_| {
            if let Err(err) = page.arm_reveal() {
                log::error!("scroll reveal: disabled: {err}");
            }
        })
    }

    fn arm_reveal(self: &Rc<Self>) -> Result<(), PageError> {
        if !self.core.borrow_mut().arm(Date::now()) {
            log::debug!("scroll reveal already armed");
            return Ok(());
        }

        let observer = self.reveal_observer()?;
        let mut observed = 0_usize;
        for selector in &self.config.reveal_selectors {
            for element in elements(&self.document.query_selector_all(selector)?) {
                self.register(&element);
                observer.observe(&element);
                observed += 1;
            }
        }
        log::debug!("observing {observed} reveal targets");

        for step in self.core.borrow().hero_schedule().steps() {
            let page = Rc::clone(self);
            let delay_ms = step.delay_ms;
            Timeout::new(delay_ms, move || page.release_hero(delay_ms)).forget();
        }
        Ok(())
    }

    fn reveal_observer(self: &Rc<Self>) -> Result<IntersectionObserver, PageError> {
        let page = Rc::clone(self);
        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    let target = entry.target();
                    let Some(id) = page.reveal_id(&target) else {
                        continue;
                    };
                    let actions =
                        page.core.borrow_mut().on_intersection(id, entry.intersection_ratio(), entry.is_intersecting());
                    page.apply(&actions, None);
                    if page.core.borrow().is_revealed(id) {
                        observer.unobserve(&target);
                    }
                }
            },
        );

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(self.config.reveal_threshold));
        init.set_root_margin(&self.config.reveal_root_margin);
        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
        callback.forget();
        Ok(observer)
    }

    /// Reveal hero elements whose delay has passed. Hero elements are optional.
    fn release_hero(&self, fired_after_ms: u32) {
        let Some(armed_at) = self.core.borrow().armed_at_ms() else {
            return;
        };
        // The timer has waited at least its delay even if the clocks disagree.
        let now = Date::now().max(armed_at + f64::from(fired_after_ms));
        let due = self.core.borrow_mut().hero_due(now);
        for selector in due {
            match self.document.query_selector(&selector) {
                Ok(Some(element)) => {
                    let id = self.register(&element);
                    let actions = self.core.borrow_mut().reveal(id);
                    self.apply(&actions, None);
                }
                Ok(None) => log::debug!("hero element {selector} not present"),
                Err(err) => log::warn!("hero selector {selector}: {}", PageError::from(err)),
            }
        }
    }

    fn register(&self, element: &Element) -> RevealId {
        let mut targets = self.reveal_targets.borrow_mut();
        if let Some(index) = targets.iter().position(|known| known == element) {
            return RevealId(index);
        }
        targets.push(element.clone());
        RevealId(targets.len() - 1)
    }

    fn reveal_id(&self, element: &Element) -> Option<RevealId> {
        self.reveal_targets.borrow().iter().position(|known| known == element).map(RevealId)
    }

    // --- Actions ---

    fn apply(&self, actions: &[Action], event: Option<&Event>) {
        for action in actions {
            if let Err(err) = self.apply_one(action, event) {
                log::warn!("{action:?} failed: {err}");
            }
        }
    }

    fn apply_one(&self, action: &Action, event: Option<&Event>) -> Result<(), PageError> {
        match action {
            Action::SetClass { target, presentation, on } => {
                let element = self.target_element(*target).ok_or_else(|| PageError::MissingElement {
                    what: "action target",
                    selector: format!("{target:?}"),
                })?;
                let class = self.class_name(*presentation);
                if *on {
                    element.class_list().add_1(class)?;
                } else {
                    element.class_list().remove_1(class)?;
                }
            }
            Action::ScrollContainer { top } => {
                let container = require(self.container.as_ref(), "scroll container", &self.config.container_id)?;
                let options = ScrollToOptions::new();
                options.set_top(*top);
                options.set_behavior(ScrollBehavior::Smooth);
                container.scroll_to_with_scroll_to_options(&options);
            }
            Action::PreventDefault => {
                if let Some(event) = event {
                    event.prevent_default();
                }
            }
        }
        Ok(())
    }

    fn target_element(&self, target: Target) -> Option<Element> {
        match target {
            Target::NavToggle => self.nav_toggle.clone(),
            Target::NavMenu => self.nav_menu.clone(),
            Target::Navbar => self.navbar.clone(),
            Target::Reveal(id) => self.reveal_targets.borrow().get(id.0).cloned(),
        }
    }

    fn class_name(&self, presentation: Presentation) -> &str {
        match presentation {
            Presentation::Active => &self.config.active_class,
            Presentation::Scrolled => &self.config.scrolled_class,
            Presentation::Animate => &self.config.animate_class,
        }
    }
}

fn require<'a>(element: Option<&'a Element>, what: &'static str, selector: &str) -> Result<&'a Element, PageError> {
    element.ok_or_else(|| PageError::MissingElement { what, selector: selector.to_owned() })
}

fn listen(target: &EventTarget, event: &str, handler: impl FnMut(Event) + 'static) -> Result<(), PageError> {
    let callback = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
    callback.forget();
    Ok(())
}

fn elements(list: &NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_ref::<Element>().cloned())
        .collect()
}

fn first_client_y(touches: &TouchList) -> Option<f64> {
    touches.get(0).map(|touch| f64::from(touch.client_y()))
}
