use log::{debug, warn};
use serde::Serialize;
use wasm_bindgen::JsCast;
use web_sys::{CustomEvent, CustomEventInit, Document, Element};

use crate::config;
use crate::error::SiteResult;
use crate::i18n::binding::{BindingIndex, BoundNode};
use crate::i18n::engine::Localizer;
use crate::i18n::language::Language;

impl BoundNode for Element {
    fn markup(&self) -> String {
        self.inner_html()
    }

    fn set_text(&self, text: &str) {
        self.set_text_content(Some(text));
    }

    fn set_markup(&self, markup: &str) {
        self.set_inner_html(markup);
    }

    fn set_placeholder(&self, text: &str) {
        let _ = self.set_attribute("placeholder", text);
    }
}

/// Collects every element carrying a text or placeholder key.
pub fn scan_bindings(document: &Document) -> SiteResult<BindingIndex<Element>> {
    let selector = format!(
        "[{}], [{}]",
        config::TEXT_KEY_ATTR,
        config::PLACEHOLDER_KEY_ATTR
    );
    let nodes = document.query_selector_all(&selector)?;
    let mut index = BindingIndex::new();
    for element in (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
    {
        let text_key = element.get_attribute(config::TEXT_KEY_ATTR);
        let placeholder_key = element.get_attribute(config::PLACEHOLDER_KEY_ATTR);
        index.bind(text_key, placeholder_key, element);
    }
    debug!("bound {} localized elements", index.len());
    Ok(index)
}

#[derive(Serialize)]
struct LanguageChanged<'a> {
    lang: &'a str,
}

/// Current-language label, `<html lang>` and the page-wide change event.
pub fn attach_page_observers(localizer: &mut Localizer<Element>, document: &Document) {
    if let Some(label) = document.get_element_by_id(config::CURRENT_LANGUAGE_LABEL_ID) {
        localizer.subscribe(move |lang| label.set_text_content(Some(lang.code())));
    }

    if let Some(root) = document.document_element() {
        localizer.subscribe(move |lang| {
            let _ = root.set_attribute("lang", lang.html_lang());
        });
    }

    let target = document.clone();
    localizer.subscribe(move |lang| broadcast(&target, lang));
}

fn broadcast(document: &Document, lang: Language) {
    let detail = match serde_wasm_bindgen::to_value(&LanguageChanged { lang: lang.code() }) {
        Ok(detail) => detail,
        Err(err) => {
            warn!("could not encode language event: {}", err);
            return;
        }
    };
    let init = CustomEventInit::new();
    init.set_detail(&detail);
    match CustomEvent::new_with_event_init_dict(config::LANGUAGE_EVENT, &init) {
        Ok(event) => {
            let _ = document.dispatch_event(&event);
        }
        Err(err) => warn!("could not create {} event: {:?}", config::LANGUAGE_EVENT, err),
    }
}
