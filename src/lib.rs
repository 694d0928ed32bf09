//! Page interaction controller for the marketing site.
//!
//! This crate is compiled to WebAssembly and attached to a static page. It
//! wires four independent behaviors onto existing markup: the mobile menu
//! toggle, the navbar style change on scroll, smooth "next section" scrolling
//! from click/keyboard/swipe, and reveal-on-scroll animations. The host page
//! only provides the markup and the CSS for the `active`, `scrolled` and
//! `animate` classes.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`controller`] | DOM-free [`controller::PageCore`] and the [`controller::Action`]s it emits |
//! | [`page`] | Browser layer: element lookup, listeners, observer, timers |
//! | [`input`] | Key and swipe gesture types |
//! | [`reveal`] | Monotonic reveal set and the hero entrance schedule |
//! | [`config`] | JSON-overridable [`config::PageConfig`] |
//! | [`consts`] | Default ids, classes, thresholds and catalogs |
//! | [`error`] | [`error::PageError`] |

pub mod config;
pub mod consts;
pub mod controller;
pub mod error;
pub mod input;
pub mod page;
pub mod reveal;

use wasm_bindgen::prelude::wasm_bindgen;

use crate::config::PageConfig;
use crate::page::Page;

/// Module entry point, run once when the wasm module is instantiated.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    let loaded = page::load_config();
    let level = match &loaded {
        Ok(config) => config.log_filter().unwrap_or(log::Level::Info),
        Err(_) => log::Level::Info,
    };
    if let Err(err) = console_log::init_with_level(level) {
        log::warn!("console logger not installed: {err}");
    }

    let config = match loaded {
        Ok(config) => config,
        Err(err) => {
            log::error!("ignoring page config: {err}");
            PageConfig::default()
        }
    };

    match Page::boot(config) {
        Ok(page) => page.install(),
        Err(err) => log::error!("page controller not started: {err}"),
    }
}
