use std::f64::consts::TAU;

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::error::{SiteError, SiteResult};
use crate::halftone::grid::Surface;

pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
    color: &'static str,
}

impl CanvasSurface {
    pub fn new(canvas: HtmlCanvasElement, color: &'static str) -> SiteResult<Self> {
        let context = canvas
            .get_context("2d")?
            .ok_or_else(|| SiteError::Canvas("2d context not supported".to_string()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| SiteError::Canvas("unexpected context type".to_string()))?;
        Ok(Self {
            canvas,
            context,
            color,
        })
    }
}

impl Surface for CanvasSurface {
    fn resize(&mut self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }

    fn clear(&mut self) {
        self.context.clear_rect(
            0.0,
            0.0,
            f64::from(self.canvas.width()),
            f64::from(self.canvas.height()),
        );
    }

    fn fill_circles(&mut self, centers: &mut dyn Iterator<Item = (f64, f64)>, radius: f64) {
        self.context.set_fill_style_str(self.color);
        self.context.begin_path();
        for (x, y) in centers {
            // Without the move each arc would be joined to the previous one.
            self.context.move_to(x + radius, y);
            let _ = self.context.arc(x, y, radius, 0.0, TAU);
        }
        self.context.fill();
    }
}
