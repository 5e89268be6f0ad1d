use std::cell::RefCell;
use std::rc::Rc;

use log::debug;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, MouseEvent, NodeList};

use crate::config;
use crate::error::SiteResult;
use crate::i18n::engine::Localizer;
use crate::i18n::language::Language;
use crate::widgets::dom::{listen, set_class};
use crate::widgets::font_scale;
use crate::widgets::overlay::{OverlayView, OverlayWidget};

/// Language a dropdown link switches to, if its `data-lang` names one.
pub fn link_language(data_lang: Option<&str>) -> Option<Language> {
    data_lang.and_then(Language::from_code)
}

struct PanelView(Element);

impl OverlayView for PanelView {
    fn show(&self) {
        set_class(&self.0, "active", true);
    }

    fn hide(&self) {
        set_class(&self.0, "active", false);
    }
}

type Panel = Rc<RefCell<OverlayWidget<PanelView>>>;

/// Binds the language dropdown and font-size buttons already present in the
/// page header, for pages rendered without the header controls mount.
pub fn install(document: &Document, localizer: Rc<RefCell<Localizer<Element>>>) -> SiteResult<()> {
    install_language_dropdown(document, localizer)?;
    install_access_panel(document)
}

fn install_language_dropdown(
    document: &Document,
    localizer: Rc<RefCell<Localizer<Element>>>,
) -> SiteResult<()> {
    let Some((dropdown, panel)) =
        toggled_panel(document, config::LANG_BUTTON_ID, config::LANG_DROPDOWN_ID)?
    else {
        debug!("no language dropdown on this page");
        return Ok(());
    };

    for link in elements(&dropdown.query_selector_all("a[data-lang]")?) {
        let localizer = localizer.clone();
        let panel = panel.clone();
        let source = link.clone();
        listen(&link, "click", move |e: MouseEvent| {
            e.prevent_default();
            if let Some(lang) = link_language(source.get_attribute("data-lang").as_deref()) {
                localizer.borrow_mut().set_language(lang.code());
            }
            panel.borrow_mut().close();
        })?;
    }
    Ok(())
}

fn install_access_panel(document: &Document) -> SiteResult<()> {
    if let Some((element, _)) =
        toggled_panel(document, config::ACCESS_BUTTON_ID, config::ACCESS_PANEL_ID)?
    {
        // Picking a size keeps the panel open.
        listen(&element, "click", |e: MouseEvent| e.stop_propagation())?;
    }

    let buttons = Rc::new(elements(&document.query_selector_all(".font-btn")?));
    mark_current(&buttons, font_scale::stored());

    for button in buttons.iter() {
        let buttons = buttons.clone();
        let source = button.clone();
        listen(button, "click", move |_: MouseEvent| {
            let attr = source.get_attribute("data-scale");
            if let Some(scale) = attr.as_deref().and_then(font_scale::offered) {
                font_scale::select(scale);
                mark_current(&buttons, scale);
            }
        })?;
    }
    Ok(())
}

/// Panel opened by its button and closed by any other click on the page.
fn toggled_panel(
    document: &Document,
    button_id: &str,
    panel_id: &str,
) -> SiteResult<Option<(Element, Panel)>> {
    let (Some(button), Some(element)) = (
        document.get_element_by_id(button_id),
        document.get_element_by_id(panel_id),
    ) else {
        return Ok(None);
    };
    let panel: Panel = Rc::new(RefCell::new(OverlayWidget::new(PanelView(element.clone()))));

    {
        let panel = panel.clone();
        listen(&button, "click", move |e: MouseEvent| {
            e.stop_propagation();
            panel.borrow_mut().toggle();
        })?;
    }
    {
        let panel = panel.clone();
        listen(document, "click", move |_: MouseEvent| panel.borrow_mut().close())?;
    }
    Ok(Some((element, panel)))
}

fn mark_current(buttons: &[Element], scale: f64) {
    for button in buttons {
        let active = font_scale::is_current(button.get_attribute("data-scale").as_deref(), scale);
        set_class(button, "active", active);
    }
}

fn elements(nodes: &NodeList) -> Vec<Element> {
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}
