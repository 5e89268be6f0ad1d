use crate::config;
use crate::halftone::grid::{HalftoneRenderer, RevealRadius, Surface};
use crate::halftone::scroll::{reveal_radius, TransitionTrigger};

/// Owns the reveal radius and feeds it to the renderer once per frame.
pub struct HalftoneDriver<S> {
    renderer: HalftoneRenderer<S>,
    radius: RevealRadius,
    triggers: Vec<TransitionTrigger>,
}

impl<S: Surface> HalftoneDriver<S> {
    pub fn new(surface: S) -> Self {
        let radius = RevealRadius::default();
        Self {
            renderer: HalftoneRenderer::new(surface, config::HALFTONE_SPACING, radius.clone()),
            radius,
            triggers: Vec::new(),
        }
    }

    /// Resizes the grid and re-measures the transitions. `section_bottoms`
    /// are page offsets of the sections that hand over to the next one.
    pub fn fit(&mut self, width: u32, height: u32, section_bottoms: &[f64]) {
        self.renderer.resize(width, height);
        let viewport = f64::from(height);
        self.triggers = section_bottoms
            .iter()
            .map(|bottom| {
                TransitionTrigger::at_section_bottom(*bottom, viewport, config::HALFTONE_TRIGGER_SPAN)
            })
            .collect();
    }

    pub fn frame(&mut self, scroll_y: f64) {
        let max = self.renderer.grid().max_radius;
        self.radius.set(reveal_radius(&self.triggers, scroll_y, max));
        self.renderer.draw();
    }

    #[cfg(test)]
    pub fn radius(&self) -> f64 {
        self.radius.get()
    }

    #[cfg(test)]
    pub fn renderer(&self) -> &HalftoneRenderer<S> {
        &self.renderer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct CountingSurface {
        fills: usize,
    }

    impl Surface for CountingSurface {
        fn resize(&mut self, _width: u32, _height: u32) {}

        fn clear(&mut self) {}

        fn fill_circles(&mut self, _centers: &mut dyn Iterator<Item = (f64, f64)>, _radius: f64) {
            self.fills += 1;
        }
    }

    #[test]
    fn radius_peaks_mid_transition() {
        let mut driver = HalftoneDriver::new(CountingSurface::default());
        // Hero ends at 1800px on an 800px viewport: transition spans 1000..1400.
        driver.fit(1280, 800, &[1800.0]);

        driver.frame(0.0);
        assert_eq!(driver.radius(), 0.0);
        assert!(!driver.renderer().is_visible());

        driver.frame(1200.0);
        assert_eq!(driver.radius(), 48.0);
        assert!(driver.renderer().is_visible());

        driver.frame(1400.0);
        assert_eq!(driver.radius(), 0.0);
        assert!(!driver.renderer().is_visible());
    }

    #[test]
    fn refit_moves_transitions() {
        let mut driver = HalftoneDriver::new(CountingSurface::default());
        driver.fit(1280, 800, &[1800.0]);
        driver.fit(1280, 600, &[1800.0]);
        // Now 1200..1500, peak at 1350.
        driver.frame(1350.0);
        assert_eq!(driver.radius(), 48.0);
        driver.frame(1100.0);
        assert_eq!(driver.radius(), 0.0);
    }
}
