use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, error, info};
use web_sys::{window, Document, Element};

use crate::components::header_controls::{HeaderControls, HeaderControlsProps, LocalizerHandle};
use crate::config;
use crate::error::{SiteError, SiteResult};
use crate::halftone;
use crate::i18n::engine::Localizer;
use crate::i18n::storage::LocalStore;
use crate::i18n::table::{Dictionary, TranslationTable};
use crate::i18n::web::{attach_page_observers, scan_bindings};
use crate::widgets::{
    anchors, font_scale, footer_form, header, mobile_menu, modal, page_controls, reveal, search,
};

/// Wires every page behavior. A failing step is logged and the rest still run.
pub fn boot() {
    let Some(window) = window() else {
        error!("{}", SiteError::NoWindow);
        return;
    };
    let Some(document) = window.document() else {
        error!("{}", SiteError::NoDocument);
        return;
    };

    match localize(&document) {
        Ok(localizer) => install_controls(&document, localizer),
        Err(err) => error!("localization unavailable: {}", err),
    }

    font_scale::apply(font_scale::stored());

    match halftone::web::install(&window, &document) {
        Ok(()) => {}
        Err(SiteError::MissingElement(id)) => debug!("no #{} on this page", id),
        Err(err) => error!("halftone transition disabled: {}", err),
    }

    report("contact modal", modal::install(&document, &modal::CONTACT_MODAL));
    report("video modal", modal::install(&document, &modal::VIDEO_MODAL));
    report("search", search::install(&window, &document));
    report("mobile menu", mobile_menu::install(&document));
    report("header", header::install(&window, &document));
    report("footer form", footer_form::install(&document));
    report("anchor links", anchors::install(&window, &document));
    report("scroll reveal", reveal::install(&document));

    info!("page ready");
}

fn localize(document: &Document) -> SiteResult<Rc<RefCell<Localizer<Element>>>> {
    let page = document
        .body()
        .and_then(|body| body.get_attribute(config::PAGE_ATTR));
    let dictionary = Dictionary::for_page(page.as_deref());
    let table = TranslationTable::load(dictionary)?;
    debug!(
        "{:?} dictionary loaded ({} keys for {})",
        dictionary,
        table.key_count(config::DEFAULT_LANGUAGE),
        config::DEFAULT_LANGUAGE
    );
    let index = scan_bindings(document)?;

    let mut localizer = Localizer::new(
        table,
        index,
        Box::new(LocalStore::new(config::LANGUAGE_STORAGE_KEY)),
        config::DEFAULT_LANGUAGE,
    );
    attach_page_observers(&mut localizer, document);
    localizer.start();
    Ok(Rc::new(RefCell::new(localizer)))
}

/// Mounts the Yew header controls where the page offers a mount point,
/// otherwise binds the dropdown and font buttons already in the markup.
fn install_controls(document: &Document, localizer: Rc<RefCell<Localizer<Element>>>) {
    let Some(root) = document.get_element_by_id(config::HEADER_CONTROLS_ID) else {
        debug!("no #{}, binding static header controls", config::HEADER_CONTROLS_ID);
        report("page controls", page_controls::install(document, localizer));
        return;
    };
    let props = HeaderControlsProps {
        localizer: LocalizerHandle(localizer),
    };
    yew::Renderer::<HeaderControls>::with_root_and_props(root, props).render();
}

fn report(step: &str, result: SiteResult<()>) {
    if let Err(err) = result {
        error!("{} not installed: {}", step, err);
    }
}
