use log::Level;

use crate::i18n::language::Language;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

pub const DEFAULT_LANGUAGE: Language = Language::Ru;
pub const LANGUAGE_STORAGE_KEY: &str = "archer_lang";
pub const SCALE_STORAGE_KEY: &str = "archer_scale";

pub const TEXT_KEY_ATTR: &str = "data-i18n";
pub const PLACEHOLDER_KEY_ATTR: &str = "data-i18n-placeholder";
pub const PAGE_ATTR: &str = "data-page";
pub const LANGUAGE_EVENT: &str = "languageChanged";
pub const CURRENT_LANGUAGE_LABEL_ID: &str = "curr-lang-text";
pub const HEADER_CONTROLS_ID: &str = "header-controls";

pub const HALFTONE_CANVAS_ID: &str = "transition-canvas";
pub const HALFTONE_SPACING: f64 = 60.0;
pub const HALFTONE_RADIUS_FACTOR: f64 = 0.8;
/// Radii at or below this are treated as invisible.
pub const HALFTONE_IDLE_RADIUS: f64 = 0.5;
pub const HALFTONE_COLOR: &str = "#3B2E73";
/// Sections whose bottom edge starts a halftone transition.
pub const HALFTONE_TRIGGERS: &[&str] = &["#hero", ".archer-concept", ".archer-hud"];
/// Transition length as a fraction of the viewport height.
pub const HALFTONE_TRIGGER_SPAN: f64 = 0.5;

pub const HEADER_SCROLLED_AFTER: f64 = 100.0;
pub const HEADER_HIDE_AFTER: f64 = 300.0;
pub const SCROLL_TOP_VISIBLE_AFTER: f64 = 500.0;

pub const TOAST_DURATION_MS: u32 = 3000;
pub const SEARCH_FOCUS_DELAY_MS: u32 = 100;
pub const SEARCH_PAGE: &str = "search.html";

pub const VIDEO_EMBED_URL: &str =
    "https://www.youtube.com/embed/cuJEf4v05Z0?si=c1L1a1DtBTk72V8h&autoplay=1";

pub const FONT_SCALES: &[f64] = &[1.0, 1.15, 1.3];

pub const REVEAL_TARGETS: &[&str] = &[
    ".feature-card",
    ".service-item",
    ".roadmap-item",
    ".team-member",
    ".section-header",
];
pub const REVEAL_THRESHOLD: f64 = 0.15;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

pub const LANG_BUTTON_ID: &str = "lang-btn";
pub const LANG_DROPDOWN_ID: &str = "lang-dropdown";
pub const ACCESS_BUTTON_ID: &str = "access-btn";
pub const ACCESS_PANEL_ID: &str = "access-panel";
