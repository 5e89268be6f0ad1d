use gloo_timers::callback::Timeout;
use log::{debug, info};
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, HtmlFormElement, HtmlInputElement};

use crate::config;
use crate::error::SiteResult;
use crate::widgets::dom::{listen, set_class};

/// The footer form only collects an address; blank input is ignored.
pub fn accepts(email: &str) -> bool {
    !email.trim().is_empty()
}

pub fn install(document: &Document) -> SiteResult<()> {
    let (Some(form), Some(toast)) = (
        document
            .get_element_by_id("footer-contact-form")
            .and_then(|el| el.dyn_into::<HtmlFormElement>().ok()),
        document.get_element_by_id("success-toast"),
    ) else {
        debug!("no footer form on this page");
        return Ok(());
    };

    let target = form.clone();
    listen(&form, "submit", move |e: Event| {
        e.prevent_default();
        let email = target
            .query_selector("input")
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
            .map(|input| input.value())
            .unwrap_or_default();
        if !accepts(&email) {
            return;
        }

        // Nothing is sent anywhere; the form just acknowledges.
        info!("footer form submitted");
        target.reset();
        set_class(&toast, "show", true);
        let toast = toast.clone();
        Timeout::new(config::TOAST_DURATION_MS, move || set_class(&toast, "show", false)).forget();
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_addresses_are_ignored() {
        assert!(!accepts(""));
        assert!(!accepts("   \t"));
        assert!(accepts("pilot@alatau.kz"));
    }
}
