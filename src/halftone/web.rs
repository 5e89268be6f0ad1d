use std::cell::RefCell;
use std::rc::Rc;

use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlCanvasElement, Window};

use crate::config;
use crate::error::{SiteError, SiteResult};
use crate::halftone::canvas::CanvasSurface;
use crate::halftone::driver::HalftoneDriver;

type SharedDriver = Rc<RefCell<HalftoneDriver<CanvasSurface>>>;

/// Attaches the transition canvas to resize events and the frame loop.
pub fn install(window: &Window, document: &Document) -> SiteResult<()> {
    let canvas = document
        .get_element_by_id(config::HALFTONE_CANVAS_ID)
        .ok_or_else(|| SiteError::MissingElement(config::HALFTONE_CANVAS_ID.to_string()))?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| SiteError::Canvas("transition canvas is not a <canvas>".to_string()))?;

    let surface = CanvasSurface::new(canvas, config::HALFTONE_COLOR)?;
    let driver: SharedDriver = Rc::new(RefCell::new(HalftoneDriver::new(surface)));
    fit(&driver, window, document);

    let on_resize = {
        let driver = driver.clone();
        let window = window.clone();
        let document = document.clone();
        Closure::wrap(Box::new(move || fit(&driver, &window, &document)) as Box<dyn FnMut()>)
    };
    window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())?;
    on_resize.forget();

    start_frame_loop(window.clone(), driver)
}

fn fit(driver: &SharedDriver, window: &Window, document: &Document) {
    let width = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let height = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let scroll_y = window.scroll_y().unwrap_or(0.0);

    let bottoms: Vec<f64> = config::HALFTONE_TRIGGERS
        .iter()
        .filter_map(|selector| document.query_selector(selector).ok().flatten())
        .map(|section| section.get_bounding_client_rect().bottom() + scroll_y)
        .collect();

    debug!("halftone fitted to {}x{} with {} transitions", width, height, bottoms.len());
    driver
        .borrow_mut()
        .fit(width.max(0.0) as u32, height.max(0.0) as u32, &bottoms);
}

fn start_frame_loop(window: Window, driver: SharedDriver) -> SiteResult<()> {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let next = tick.clone();
    let frame_window = window.clone();

    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move |_timestamp: f64| {
        let scroll_y = frame_window.scroll_y().unwrap_or(0.0);
        driver.borrow_mut().frame(scroll_y);
        if let Some(callback) = next.borrow().as_ref() {
            let _ = frame_window.request_animation_frame(callback.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut(f64)>));

    if let Some(callback) = tick.borrow().as_ref() {
        window.request_animation_frame(callback.as_ref().unchecked_ref())?;
    }
    Ok(())
}
