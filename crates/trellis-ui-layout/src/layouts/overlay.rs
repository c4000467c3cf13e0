use trellis_ui_graphics::{Rect, Size};

use crate::{
    Alignment, Arranged, Flexibility, Layout, LayoutMeasurement, LayoutNode, Measured, ViewConfig,
};

/// Stacks layouts behind and in front of a primary layout.
///
/// The primary decides size and flexibility; every background and overlay
/// layout is arranged into the primary's rect. Sublayout order in results is
/// backgrounds, primary, overlays.
pub struct OverlayLayout {
    primary: LayoutNode,
    background: Vec<LayoutNode>,
    overlay: Vec<LayoutNode>,
    alignment: Alignment,
    view: Option<ViewConfig>,
}

impl OverlayLayout {
    pub fn new(primary: impl Into<LayoutNode>) -> Self {
        Self {
            primary: primary.into(),
            background: Vec::new(),
            overlay: Vec::new(),
            alignment: Alignment::FILL,
            view: None,
        }
    }

    pub fn background(mut self, layouts: Vec<LayoutNode>) -> Self {
        self.background = layouts;
        self
    }

    pub fn overlay(mut self, layouts: Vec<LayoutNode>) -> Self {
        self.overlay = layouts;
        self
    }

    pub fn alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    pub fn view(mut self, view: ViewConfig) -> Self {
        self.view = Some(view);
        self
    }
}

impl Layout for OverlayLayout {
    fn measure(&self, max_size: Size) -> Measured {
        let primary = self.primary.measurement(max_size);
        let size = primary.size;
        let mut sublayouts = Vec::with_capacity(self.background.len() + 1 + self.overlay.len());
        sublayouts.extend(
            self.background
                .iter()
                .map(|layout| layout.measurement(primary.max_size)),
        );
        let overlays: Vec<LayoutMeasurement> = self
            .overlay
            .iter()
            .map(|layout| layout.measurement(primary.max_size))
            .collect();
        sublayouts.push(primary);
        sublayouts.extend(overlays);
        Measured { size, sublayouts }
    }

    fn arrange(&self, rect: Rect, measurement: &LayoutMeasurement) -> Arranged {
        let frame = self.alignment.position(measurement.size, rect);
        if measurement.sublayouts.len() <= self.background.len() {
            return Arranged::leaf(frame);
        }
        let inner = Rect::from_size(frame.size());
        let sublayouts = measurement
            .sublayouts
            .iter()
            .map(|sublayout| sublayout.arrangement(inner))
            .collect();
        Arranged { frame, sublayouts }
    }

    fn flexibility(&self) -> Flexibility {
        self.primary.flexibility()
    }

    fn view_config(&self) -> Option<&ViewConfig> {
        self.view.as_ref()
    }

    fn debug_name(&self) -> &str {
        "Overlay"
    }
}
