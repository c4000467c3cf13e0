use trellis_ui_graphics::{Rect, Size};

use crate::{
    Alignment, Arranged, Axis, Flexibility, Layout, LayoutMeasurement, LayoutNode, Measured,
    StackLayout, StackSpec, ViewConfig,
};

/// A horizontal stack that turns vertical when it does not fit the width.
///
/// The chosen stack's measurement is kept as the only sublayout, so
/// arrangement follows the decision made while measuring.
pub struct AutoRotateStackLayout {
    horizontal: LayoutNode,
    vertical: LayoutNode,
    alignment: Alignment,
    flexibility: Flexibility,
    view: Option<ViewConfig>,
}

impl AutoRotateStackLayout {
    /// Builds both stacks from `spec`; its axis is ignored. Without an
    /// explicit flexibility the layout is inflexible.
    pub fn new(spec: StackSpec, sublayouts: Vec<LayoutNode>) -> Self {
        let flexibility = spec.flexibility.unwrap_or(Flexibility::INFLEXIBLE);
        let inner = |axis: Axis| -> LayoutNode {
            let stack_spec = StackSpec::new(axis)
                .spacing(spec.spacing)
                .distribution(spec.distribution)
                .alignment(Alignment::FILL)
                .flexibility(flexibility);
            StackLayout::new(stack_spec, sublayouts.clone()).into()
        };
        Self {
            horizontal: inner(Axis::Horizontal),
            vertical: inner(Axis::Vertical),
            alignment: spec.alignment.clone(),
            flexibility,
            view: spec.view.clone(),
        }
    }
}

impl Layout for AutoRotateStackLayout {
    fn measure(&self, max_size: Size) -> Measured {
        let unconstrained = self.horizontal.measurement(Size::INFINITE);
        let stack = if unconstrained.size.width > max_size.width {
            &self.vertical
        } else {
            &self.horizontal
        };
        let measurement = stack.measurement(max_size);
        Measured {
            size: measurement.size,
            sublayouts: vec![measurement],
        }
    }

    fn arrange(&self, rect: Rect, measurement: &LayoutMeasurement) -> Arranged {
        let frame = self.alignment.position(measurement.size, rect);
        let sublayouts = measurement
            .sublayouts
            .iter()
            .map(|sublayout| sublayout.arrangement(Rect::from_size(frame.size())))
            .collect();
        Arranged { frame, sublayouts }
    }

    fn flexibility(&self) -> Flexibility {
        self.flexibility
    }

    fn view_config(&self) -> Option<&ViewConfig> {
        self.view.as_ref()
    }

    fn debug_name(&self) -> &str {
        "AutoRotateStack"
    }
}
