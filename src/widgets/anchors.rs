use log::debug;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, MouseEvent, ScrollBehavior, ScrollToOptions, Window};

use crate::error::SiteResult;
use crate::widgets::dom::listen;

/// Selector for the in-page target of a link, or `None` for a bare `#`.
pub fn anchor_target(href: Option<&str>) -> Option<&str> {
    let href = href?.trim();
    (href.starts_with('#') && href.len() > 1).then_some(href)
}

/// In-page links glide to their section instead of jumping.
pub fn install(window: &Window, document: &Document) -> SiteResult<()> {
    let links = document.query_selector_all("a[href^=\"#\"]")?;
    for link in (0..links.length())
        .filter_map(|i| links.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
    {
        let window = window.clone();
        let document = document.clone();
        let source = link.clone();
        listen(&link, "click", move |e: MouseEvent| {
            let href = source.get_attribute("href");
            let Some(selector) = anchor_target(href.as_deref()) else {
                return;
            };
            e.prevent_default();
            // Hrefs like "#!" are not valid selectors; those links just stay put.
            if let Some(target) = document.query_selector(selector).ok().flatten() {
                let top = target.get_bounding_client_rect().top() + window.scroll_y().unwrap_or(0.0);
                let options = ScrollToOptions::new();
                options.set_top(top);
                options.set_behavior(ScrollBehavior::Smooth);
                window.scroll_to_with_scroll_to_options(&options);
            }
        })?;
    }
    debug!("{} anchor links smoothed", links.length());
    Ok(())
}
