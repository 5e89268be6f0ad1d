use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::debug;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlInputElement, KeyboardEvent, MouseEvent, Window};

use crate::config;
use crate::error::SiteResult;
use crate::widgets::dom::{listen, lock_body_scroll, set_class};
use crate::widgets::overlay::{OverlayView, OverlayWidget};

/// Results page address for a query, or `None` when there is nothing to search.
pub fn search_url(query: &str) -> Option<String> {
    let query = query.trim();
    if query.is_empty() {
        return None;
    }
    Some(format!(
        "{}?q={}",
        config::SEARCH_PAGE,
        urlencoding::encode(query)
    ))
}

struct SearchView {
    document: Document,
    overlay: Element,
    input: Option<HtmlInputElement>,
}

impl OverlayView for SearchView {
    fn show(&self) {
        set_class(&self.overlay, "active", true);
        lock_body_scroll(&self.document, true);
        if let Some(input) = self.input.clone() {
            // The overlay fades in; focusing right away is ignored by some browsers.
            Timeout::new(config::SEARCH_FOCUS_DELAY_MS, move || {
                let _ = input.focus();
            })
            .forget();
        }
    }

    fn hide(&self) {
        set_class(&self.overlay, "active", false);
        lock_body_scroll(&self.document, false);
    }
}

pub fn install(window: &Window, document: &Document) -> SiteResult<()> {
    let (Some(button), Some(overlay)) = (
        document.get_element_by_id("search-btn"),
        document.get_element_by_id("search-overlay"),
    ) else {
        debug!("no search overlay on this page");
        return Ok(());
    };
    let input = overlay
        .query_selector("input")
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok());

    let widget = Rc::new(RefCell::new(OverlayWidget::new(SearchView {
        document: document.clone(),
        overlay: overlay.clone(),
        input: input.clone(),
    })));

    {
        let widget = widget.clone();
        listen(&button, "click", move |e: MouseEvent| {
            e.prevent_default();
            e.stop_propagation();
            widget.borrow_mut().open();
        })?;
    }

    if let Some(close) = document.get_element_by_id("search-close") {
        let widget = widget.clone();
        listen(&close, "click", move |e: MouseEvent| {
            e.prevent_default();
            e.stop_propagation();
            widget.borrow_mut().close();
        })?;
    }

    if let Some(input) = input {
        let window = window.clone();
        let field = input.clone();
        listen(&input, "keydown", move |e: KeyboardEvent| {
            if e.key() != "Enter" {
                return;
            }
            e.prevent_default();
            if let Some(url) = search_url(&field.value()) {
                let _ = window.location().set_href(&url);
            }
        })?;
    }

    {
        let widget = widget.clone();
        let backdrop = overlay.clone();
        listen(&overlay, "click", move |e: Event| {
            let on_backdrop = e
                .target()
                .and_then(|t| t.dyn_into::<Element>().ok())
                .map_or(false, |t| t == backdrop);
            if on_backdrop {
                widget.borrow_mut().close();
            }
        })?;
    }

    listen(document, "keydown", move |e: KeyboardEvent| {
        if e.key() == "Escape" {
            widget.borrow_mut().close();
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("joby", Some("search.html?q=joby"))]
    #[case("  Joby S4  ", Some("search.html?q=Joby%20S4"))]
    #[case("Алатау & UAM", Some("search.html?q=%D0%90%D0%BB%D0%B0%D1%82%D0%B0%D1%83%20%26%20UAM"))]
    #[case("   ", None)]
    #[case("", None)]
    fn builds_results_address(#[case] query: &str, #[case] expected: Option<&str>) {
        assert_eq!(search_url(query).as_deref(), expected);
    }
}
