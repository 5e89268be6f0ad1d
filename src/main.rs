use log::info;

mod config;
mod error;
mod site;

mod i18n {
    pub mod language;
    pub mod table;
    pub mod markup;
    pub mod binding;
    pub mod storage;
    pub mod engine;
    pub mod web;
}

mod halftone {
    pub mod grid;
    pub mod canvas;
    pub mod scroll;
    pub mod driver;
    pub mod web;
}

mod widgets {
    pub mod overlay;
    pub mod dom;
    pub mod modal;
    pub mod search;
    pub mod mobile_menu;
    pub mod header;
    pub mod footer_form;
    pub mod font_scale;
    pub mod page_controls;
    pub mod anchors;
    pub mod reveal;
}

mod components {
    pub mod header_controls;
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting site scripts");
    site::boot();
}
