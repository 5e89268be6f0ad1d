/// Open/closed state shared by every modal-like widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Overlay {
    #[default]
    Closed,
    Open,
}

impl Overlay {
    pub fn is_open(self) -> bool {
        self == Overlay::Open
    }

    /// Each transition returns whether the state actually changed.
    pub fn open(&mut self) -> bool {
        let changed = !self.is_open();
        *self = Overlay::Open;
        changed
    }

    pub fn close(&mut self) -> bool {
        let changed = self.is_open();
        *self = Overlay::Closed;
        changed
    }

    pub fn toggle(&mut self) -> bool {
        if self.is_open() {
            self.close()
        } else {
            self.open()
        }
    }
}

/// How a widget shows itself in the page.
pub trait OverlayView {
    fn show(&self);
    fn hide(&self);
}

/// Couples an [`Overlay`] state with its view, touching the DOM only when
/// the state changes.
pub struct OverlayWidget<V> {
    state: Overlay,
    view: V,
}

impl<V: OverlayView> OverlayWidget<V> {
    pub fn new(view: V) -> Self {
        Self {
            state: Overlay::Closed,
            view,
        }
    }

    #[cfg(test)]
    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    #[cfg(test)]
    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn open(&mut self) {
        if self.state.open() {
            self.view.show();
        }
    }

    pub fn close(&mut self) {
        if self.state.close() {
            self.view.hide();
        }
    }

    pub fn toggle(&mut self) {
        if self.state.is_open() {
            self.close();
        } else {
            self.open();
        }
    }
}
