use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{
    Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
};

use crate::config;
use crate::error::SiteResult;
use crate::widgets::dom::set_class;

const PENDING_CLASS: &str = "fade-in-element";
const VISIBLE_CLASS: &str = "is-visible";

pub fn reveal_selector(targets: &[&str]) -> String {
    targets
        .iter()
        .map(|target| target.trim())
        .filter(|target| !target.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Fades content blocks in the first time they scroll into view.
pub fn install(document: &Document) -> SiteResult<()> {
    let selector = reveal_selector(config::REVEAL_TARGETS);
    let nodes = document.query_selector_all(&selector)?;
    if nodes.length() == 0 {
        debug!("nothing to reveal on this page");
        return Ok(());
    }

    let on_enter = Closure::wrap(Box::new(|entries: Array, observer: IntersectionObserver| {
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                continue;
            };
            if entry.is_intersecting() {
                let target = entry.target();
                set_class(&target, VISIBLE_CLASS, true);
                // Revealed once; scrolling back up keeps it visible.
                observer.unobserve(&target);
            }
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(config::REVEAL_THRESHOLD));
    options.set_root_margin(config::REVEAL_ROOT_MARGIN);
    let observer =
        IntersectionObserver::new_with_options(on_enter.as_ref().unchecked_ref(), &options)?;
    on_enter.forget();

    for element in (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
    {
        set_class(&element, PENDING_CLASS, true);
        observer.observe(&element);
    }
    debug!("watching {} blocks for reveal", nodes.length());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(&[".feature-card"], ".feature-card")]
    #[case(&[".feature-card", " .team-member "], ".feature-card, .team-member")]
    #[case(&[".feature-card", "", ".section-header"], ".feature-card, .section-header")]
    fn joins_reveal_targets(#[case] targets: &[&str], #[case] expected: &str) {
        assert_eq!(reveal_selector(targets), expected);
    }

    #[test]
    fn site_targets_cover_content_blocks() {
        assert_eq!(
            reveal_selector(config::REVEAL_TARGETS),
            ".feature-card, .service-item, .roadmap-item, .team-member, .section-header"
        );
    }
}
