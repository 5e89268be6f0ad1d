use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use web_sys::{Element, MouseEvent};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config;
use crate::i18n::engine::Localizer;
use crate::i18n::language::Language;
use crate::widgets::font_scale;

/// Shared access to the page localizer from Yew components.
#[derive(Clone)]
pub struct LocalizerHandle(pub Rc<RefCell<Localizer<Element>>>);

impl PartialEq for LocalizerHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

#[derive(Properties, PartialEq)]
pub struct HeaderControlsProps {
    pub localizer: LocalizerHandle,
}

#[function_component(HeaderControls)]
pub fn header_controls(props: &HeaderControlsProps) -> Html {
    let current = use_state(|| props.localizer.0.borrow().active_language());
    let lang_open = use_state(|| false);
    let access_open = use_state(|| false);
    let scale = use_state(font_scale::stored);
    // Read once at mount; rendering must not borrow the localizer while a
    // switch is notifying observers.
    let font_labels = use_state(|| {
        let localizer = props.localizer.0.borrow();
        Language::ALL
            .iter()
            .map(|lang| {
                let label = localizer.lookup(*lang, "font-size").unwrap_or("Aa");
                (*lang, label.to_string())
            })
            .collect::<HashMap<_, _>>()
    });
    let lang_ref = use_node_ref();
    let access_ref = use_node_ref();

    // Follow switches made anywhere on the page, not only from this dropdown.
    {
        let setter = current.setter();
        use_effect_with_deps(
            move |localizer: &LocalizerHandle| {
                let id = localizer.0.borrow_mut().subscribe(move |lang| setter.set(lang));
                let localizer = localizer.clone();
                move || localizer.0.borrow_mut().unsubscribe(id)
            },
            props.localizer.clone(),
        );
    }

    {
        let lang_open = lang_open.clone();
        use_click_away(lang_ref.clone(), move |_: Event| lang_open.set(false));
    }
    {
        let access_open = access_open.clone();
        use_click_away(access_ref.clone(), move |_: Event| access_open.set(false));
    }

    let toggle_lang = {
        let lang_open = lang_open.clone();
        let access_open = access_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            e.stop_propagation();
            lang_open.set(!*lang_open);
            access_open.set(false);
        })
    };

    let toggle_access = {
        let lang_open = lang_open.clone();
        let access_open = access_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            e.stop_propagation();
            access_open.set(!*access_open);
            lang_open.set(false);
        })
    };

    let choose_language = |lang: Language| {
        let localizer = props.localizer.clone();
        let lang_open = lang_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            localizer.0.borrow_mut().set_language(lang.code());
            lang_open.set(false);
        })
    };

    let choose_scale = |value: f64| {
        let scale = scale.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            font_scale::select(value);
            scale.set(value);
        })
    };

    let font_label = font_labels.get(&*current).cloned().unwrap_or_default();

    html! {
        <div class="header-controls">
            <div class="lang-switcher" ref={lang_ref}>
                <button class="lang-btn" onclick={toggle_lang}>
                    <span class="curr-lang-text">{ current.code() }</span>
                </button>
                <div class={classes!("lang-dropdown", (*lang_open).then(|| "active"))}>
                    {
                        for Language::ALL.iter().map(|lang| html! {
                            <a
                                href="#"
                                data-lang={lang.code()}
                                class={classes!((*lang == *current).then(|| "active"))}
                                onclick={choose_language(*lang)}
                            >
                                { lang.code() }
                            </a>
                        })
                    }
                </div>
            </div>
            <div class="access-wrapper" ref={access_ref}>
                <button class="access-btn" onclick={toggle_access}>{"Aa"}</button>
                <div class={classes!("access-panel", (*access_open).then(|| "active"))}>
                    <span class="access-label">{ font_label }</span>
                    {
                        for config::FONT_SCALES.iter().map(|value| html! {
                            <button
                                class={classes!("font-btn", ((*value - *scale).abs() < 1e-6).then(|| "active"))}
                                data-scale={value.to_string()}
                                onclick={choose_scale(*value)}
                            >
                                { format!("{}%", (value * 100.0).round()) }
                            </button>
                        })
                    }
                </div>
            </div>
        </div>
    }
}
