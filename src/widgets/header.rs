use std::cell::Cell;

use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, MouseEvent, ScrollBehavior, ScrollToOptions, Window};

use crate::config;
use crate::error::SiteResult;
use crate::widgets::dom::{listen, set_class};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HeaderLook {
    pub scrolled: bool,
    pub hidden: bool,
}

/// Sticky header that slides away while reading down and returns on the
/// way back up.
#[derive(Debug, Default)]
pub struct HeaderState {
    last_scroll: Cell<f64>,
}

impl HeaderState {
    pub fn update(&self, scroll_y: f64) -> HeaderLook {
        let last = self.last_scroll.replace(scroll_y);
        HeaderLook {
            scrolled: scroll_y > config::HEADER_SCROLLED_AFTER,
            hidden: scroll_y > last && scroll_y > config::HEADER_HIDE_AFTER,
        }
    }
}

pub fn scroll_top_visible(scroll_y: f64) -> bool {
    scroll_y > config::SCROLL_TOP_VISIBLE_AFTER
}

pub fn install(window: &Window, document: &Document) -> SiteResult<()> {
    let header = document
        .query_selector(".archer-header")
        .ok()
        .flatten()
        .or_else(|| document.query_selector("header").ok().flatten());
    let scroll_button = document.get_element_by_id("scroll-top-btn");

    if header.is_none() && scroll_button.is_none() {
        debug!("no header or scroll button on this page");
        return Ok(());
    }

    if let Some(button) = &scroll_button {
        let window = window.clone();
        listen(button, "click", move |e: MouseEvent| {
            e.prevent_default();
            let options = ScrollToOptions::new();
            options.set_top(0.0);
            options.set_behavior(ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        })?;
    }

    let state = HeaderState::default();
    let scroll_window = window.clone();
    let scroll_callback = Closure::wrap(Box::new(move || {
        let scroll_y = scroll_window.scroll_y().unwrap_or(0.0);
        if let Some(header) = &header {
            let look = state.update(scroll_y);
            set_class(header, "header-scrolled", look.scrolled);
            set_class(header, "header-hidden", look.hidden);
        }
        if let Some(button) = &scroll_button {
            set_class(button, "visible", scroll_top_visible(scroll_y));
        }
    }) as Box<dyn FnMut()>);

    window.add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref())?;

    // Initial check for pages restored mid-scroll
    scroll_callback
        .as_ref()
        .unchecked_ref::<web_sys::js_sys::Function>()
        .call0(&wasm_bindgen::JsValue::NULL)?;
    scroll_callback.forget();
    Ok(())
}
