use trellis_ui_graphics::{EdgeInsets, Rect, Size};

use crate::{
    Alignment, Arranged, Flexibility, Layout, LayoutMeasurement, LayoutNode, Measured, ViewConfig,
};

/// Pads a single child by fixed insets.
pub struct InsetLayout {
    insets: EdgeInsets,
    alignment: Alignment,
    view: Option<ViewConfig>,
    sublayout: LayoutNode,
}

impl InsetLayout {
    pub fn new(insets: EdgeInsets, sublayout: impl Into<LayoutNode>) -> Self {
        Self {
            insets,
            alignment: Alignment::FILL,
            view: None,
            sublayout: sublayout.into(),
        }
    }

    pub fn uniform(inset: f32, sublayout: impl Into<LayoutNode>) -> Self {
        Self::new(EdgeInsets::uniform(inset), sublayout)
    }

    pub fn alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    pub fn view(mut self, view: ViewConfig) -> Self {
        self.view = Some(view);
        self
    }

    pub fn insets(&self) -> EdgeInsets {
        self.insets
    }
}

impl Layout for InsetLayout {
    fn measure(&self, max_size: Size) -> Measured {
        let inner_max = max_size
            .decreased_by_insets(self.insets)
            .increased_to(Size::ZERO);
        let measurement = self.sublayout.measurement(inner_max);
        Measured {
            size: measurement.size.increased_by_insets(self.insets).decreased_to(max_size),
            sublayouts: vec![measurement],
        }
    }

    fn arrange(&self, rect: Rect, measurement: &LayoutMeasurement) -> Arranged {
        let frame = self.alignment.position(measurement.size, rect);
        let inner = Rect::from_size(frame.size()).inset_by(self.insets);
        let sublayouts = measurement
            .sublayouts
            .iter()
            .map(|sublayout| sublayout.arrangement(inner))
            .collect();
        Arranged { frame, sublayouts }
    }

    fn flexibility(&self) -> Flexibility {
        self.sublayout.flexibility()
    }

    fn view_config(&self) -> Option<&ViewConfig> {
        self.view.as_ref()
    }

    fn debug_name(&self) -> &str {
        "Inset"
    }
}
