use std::cell::Cell;
use std::rc::Rc;

use crate::config;

/// Scalar controlling dot size, written by the scroll driver and read by
/// the renderer each frame.
#[derive(Debug, Clone, Default)]
pub struct RevealRadius(Rc<Cell<f64>>);

impl RevealRadius {
    pub fn get(&self) -> f64 {
        self.0.get()
    }

    pub fn set(&self, radius: f64) {
        self.0.set(radius);
    }
}

/// Staggered dot layout covering the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DotGrid {
    pub spacing: f64,
    pub columns: u32,
    pub rows: u32,
    pub max_radius: f64,
}

impl DotGrid {
    pub fn new(spacing: f64) -> Self {
        Self {
            spacing,
            columns: 0,
            rows: 0,
            max_radius: spacing * config::HALFTONE_RADIUS_FACTOR,
        }
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        // One extra column and row so the stagger never leaves an edge bare.
        self.columns = (width / self.spacing).ceil() as u32 + 1;
        self.rows = (height / self.spacing).ceil() as u32 + 1;
        self.max_radius = self.spacing * config::HALFTONE_RADIUS_FACTOR;
    }

    pub fn row_offset(&self, row: u32) -> f64 {
        if row % 2 == 0 {
            0.0
        } else {
            self.spacing / 2.0
        }
    }

    /// Dot centers, row by row.
    pub fn centers(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        (0..self.rows).flat_map(move |row| {
            let y = f64::from(row) * self.spacing;
            let offset = self.row_offset(row);
            (0..self.columns).map(move |col| (f64::from(col) * self.spacing + offset, y))
        })
    }
}

/// Paint target for the grid.
pub trait Surface {
    fn resize(&mut self, width: u32, height: u32);
    fn clear(&mut self);
    /// Every circle goes into one path filled once.
    fn fill_circles(&mut self, centers: &mut dyn Iterator<Item = (f64, f64)>, radius: f64);
}

pub struct HalftoneRenderer<S> {
    surface: S,
    grid: DotGrid,
    radius: RevealRadius,
    visible: bool,
}

impl<S: Surface> HalftoneRenderer<S> {
    pub fn new(surface: S, spacing: f64, radius: RevealRadius) -> Self {
        Self {
            surface,
            grid: DotGrid::new(spacing),
            radius,
            visible: false,
        }
    }

    pub fn grid(&self) -> &DotGrid {
        &self.grid
    }

    #[cfg(test)]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.surface.resize(width, height);
        self.grid.resize(f64::from(width), f64::from(height));
    }

    /// Runs every animation frame, so the idle path must stay free.
    pub fn draw(&mut self) {
        let radius = self.radius.get();
        if radius <= config::HALFTONE_IDLE_RADIUS {
            if self.visible {
                self.surface.clear();
                self.visible = false;
            }
            return;
        }

        self.surface.clear();
        self.surface.fill_circles(&mut self.grid.centers(), radius);
        self.visible = true;
    }
}
