use std::cell::RefCell;
use std::rc::Rc;

use log::debug;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlIFrameElement, KeyboardEvent, MouseEvent};

use crate::config;
use crate::error::SiteResult;
use crate::widgets::dom::{listen, lock_body_scroll, set_class};
use crate::widgets::overlay::{OverlayView, OverlayWidget};

/// Element ids making up one modal in the page markup.
pub struct ModalIds {
    pub modal: &'static str,
    pub open: &'static [&'static str],
    pub close: &'static str,
    pub player: Option<&'static str>,
}

pub const CONTACT_MODAL: ModalIds = ModalIds {
    modal: "contact-modal",
    open: &["open-contact"],
    close: "contact-close",
    player: None,
};

pub const VIDEO_MODAL: ModalIds = ModalIds {
    modal: "video-modal",
    open: &["open-video-btn", "open-video"],
    close: "video-close",
    player: Some("video-iframe"),
};

pub struct ModalView {
    document: Document,
    modal: Element,
    player: Option<HtmlIFrameElement>,
}

impl OverlayView for ModalView {
    fn show(&self) {
        if let Some(player) = &self.player {
            player.set_src(config::VIDEO_EMBED_URL);
        }
        set_class(&self.modal, "open", true);
        let _ = self.modal.set_attribute("aria-hidden", "false");
        lock_body_scroll(&self.document, true);
    }

    fn hide(&self) {
        // Clearing the source is what stops playback.
        if let Some(player) = &self.player {
            player.set_src("");
        }
        set_class(&self.modal, "open", false);
        let _ = self.modal.set_attribute("aria-hidden", "true");
        lock_body_scroll(&self.document, false);
    }
}

pub fn install(document: &Document, ids: &ModalIds) -> SiteResult<()> {
    let Some(modal) = document.get_element_by_id(ids.modal) else {
        debug!("no #{} on this page", ids.modal);
        return Ok(());
    };
    let player = match ids.player {
        Some(id) => match document
            .get_element_by_id(id)
            .and_then(|el| el.dyn_into::<HtmlIFrameElement>().ok())
        {
            Some(player) => Some(player),
            None => {
                debug!("#{} has no player, skipping", ids.modal);
                return Ok(());
            }
        },
        None => None,
    };

    let widget = Rc::new(RefCell::new(OverlayWidget::new(ModalView {
        document: document.clone(),
        modal: modal.clone(),
        player,
    })));

    for id in ids.open {
        if let Some(button) = document.get_element_by_id(id) {
            let widget = widget.clone();
            listen(&button, "click", move |e: MouseEvent| {
                e.prevent_default();
                widget.borrow_mut().open();
            })?;
        }
    }

    if let Some(button) = document.get_element_by_id(ids.close) {
        let widget = widget.clone();
        listen(&button, "click", move |_: MouseEvent| widget.borrow_mut().close())?;
    }

    {
        let widget = widget.clone();
        let backdrop = modal.clone();
        listen(&modal, "click", move |e: Event| {
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
