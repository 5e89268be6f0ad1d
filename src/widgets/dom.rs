use std::cell::Cell;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::JsCast;
use web_sys::{Document, EventTarget};

use crate::error::SiteResult;

/// Registers `handler` for the lifetime of the page.
pub fn listen<E>(target: &EventTarget, event: &str, handler: impl FnMut(E) + 'static) -> SiteResult<()>
where
    E: FromWasmAbi + 'static,
{
    let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
    callback.forget();
    Ok(())
}

/// Open overlays holding the page still. Every widget releases only what it
/// acquired, so the body unlocks when the last one closes.
#[derive(Debug, Default)]
pub struct ScrollLocks(Cell<usize>);

impl ScrollLocks {
    /// Returns whether the page stays locked after the change.
    pub fn acquire(&self) -> bool {
        self.0.set(self.0.get() + 1);
        true
    }

    pub fn release(&self) -> bool {
        let held = self.0.get().saturating_sub(1);
        self.0.set(held);
        held > 0
    }
}

thread_local! {
    static BODY_LOCKS: ScrollLocks = ScrollLocks::default();
}

/// Stops the page behind an open overlay from scrolling.
pub fn lock_body_scroll(document: &Document, locked: bool) {
    let hold = BODY_LOCKS.with(|locks| if locked { locks.acquire() } else { locks.release() });
    if let Some(body) = document.body() {
        let value = if hold { "hidden" } else { "" };
        let _ = body.style().set_property("overflow", value);
    }
}

pub fn set_class(element: &web_sys::Element, class: &str, on: bool) {
    let _ = element.class_list().toggle_with_force(class, on);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_unlocks_with_the_last_overlay() {
        let locks = ScrollLocks::default();
        assert!(locks.acquire()); // mobile menu
        assert!(locks.acquire()); // search
        assert!(locks.release()); // search closes, menu still open
        assert!(!locks.release());
    }

    #[test]
    fn stray_release_does_not_underflow() {
        let locks = ScrollLocks::default();
        assert!(!locks.release());
        assert!(locks.acquire());
        assert!(!locks.release());
    }
}
