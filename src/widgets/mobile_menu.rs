use std::cell::RefCell;
use std::rc::Rc;

use log::debug;
use web_sys::{Document, Element, KeyboardEvent, MouseEvent};

use crate::error::SiteResult;
use crate::widgets::dom::{listen, lock_body_scroll, set_class};
use crate::widgets::overlay::{OverlayView, OverlayWidget};

const OPEN_ICON: &str = r#"<i class="fa-solid fa-bars"></i>"#;
const CLOSE_ICON: &str = r#"<i class="fa-solid fa-xmark"></i>"#;

struct MenuView {
    document: Document,
    button: Element,
    nav: Element,
    overlay: Element,
}

impl MenuView {
    fn apply(&self, open: bool) {
        set_class(&self.nav, "active", open);
        set_class(&self.overlay, "active", open);
        self.button
            .set_inner_html(if open { CLOSE_ICON } else { OPEN_ICON });
        lock_body_scroll(&self.document, open);
    }
}

impl OverlayView for MenuView {
    fn show(&self) {
        self.apply(true);
    }

    fn hide(&self) {
        self.apply(false);
    }
}

pub fn install(document: &Document) -> SiteResult<()> {
    let (Some(button), Some(nav), Some(overlay)) = (
        document.get_element_by_id("mobile-menu-btn"),
        document.get_element_by_id("navbar-nav"),
        document.get_element_by_id("mobile-overlay"),
    ) else {
        debug!("no mobile menu on this page");
        return Ok(());
    };

    let links = nav.query_selector_all("a")?;
    let widget = Rc::new(RefCell::new(OverlayWidget::new(MenuView {
        document: document.clone(),
        button: button.clone(),
        nav,
        overlay: overlay.clone(),
    })));

    {
        let widget = widget.clone();
        listen(&button, "click", move |e: MouseEvent| {
            e.prevent_default();
            e.stop_propagation();
            widget.borrow_mut().toggle();
        })?;
    }

    {
        let widget = widget.clone();
        listen(&overlay, "click", move |e: MouseEvent| {
            e.prevent_default();
            widget.borrow_mut().close();
        })?;
    }

    for i in 0..links.length() {
        if let Some(link) = links.item(i) {
            let widget = widget.clone();
            listen(&link, "click", move |_: MouseEvent| widget.borrow_mut().close())?;
        }
    }

    listen(document, "keydown", move |e: KeyboardEvent| {
        if e.key() == "Escape" {
            widget.borrow_mut().close();
        }
    })
}
