use trellis_ui_graphics::{Rect, Size};

use crate::{
    Alignment, Arranged, Flex, Flexibility, Horizontal, Layout, LayoutMeasurement, LayoutNode,
    Measured, Vertical, ViewConfig,
};

const PINNED_EPSILON: f32 = 0.0001;

/// Size constraints of a [`SizeLayout`]. Pinning a dimension sets its
/// minimum and maximum to the same value.
#[derive(Clone, Debug, Default)]
pub struct SizeSpec {
    pub min_width: Option<f32>,
    pub max_width: Option<f32>,
    pub min_height: Option<f32>,
    pub max_height: Option<f32>,
    pub alignment: Option<Alignment>,
    pub flexibility: Option<Flexibility>,
    pub view: Option<ViewConfig>,
}

impl SizeSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fixed(size: Size) -> Self {
        Self::new().width(size.width).height(size.height)
    }

    pub fn width(mut self, width: f32) -> Self {
        self.min_width = Some(width);
        self.max_width = Some(width);
        self
    }

    pub fn height(mut self, height: f32) -> Self {
        self.min_height = Some(height);
        self.max_height = Some(height);
        self
    }

    pub fn min_width(mut self, width: f32) -> Self {
        self.min_width = Some(width);
        self
    }

    pub fn max_width(mut self, width: f32) -> Self {
        self.max_width = Some(width);
        self
    }

    pub fn min_height(mut self, height: f32) -> Self {
        self.min_height = Some(height);
        self
    }

    pub fn max_height(mut self, height: f32) -> Self {
        self.max_height = Some(height);
        self
    }

    pub fn alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = Some(alignment);
        self
    }

    pub fn flexibility(mut self, flexibility: Flexibility) -> Self {
        self.flexibility = Some(flexibility);
        self
    }

    pub fn view(mut self, view: ViewConfig) -> Self {
        self.view = Some(view);
        self
    }
}

/// Constrains an optional child to minimum and maximum dimensions.
pub struct SizeLayout {
    min_size: Size,
    max_size: Size,
    alignment: Alignment,
    flexibility: Flexibility,
    view: Option<ViewConfig>,
    sublayout: Option<LayoutNode>,
}

impl SizeLayout {
    pub fn new(spec: SizeSpec) -> Self {
        Self::build(spec, None)
    }

    pub fn wrapping(spec: SizeSpec, sublayout: impl Into<LayoutNode>) -> Self {
        Self::build(spec, Some(sublayout.into()))
    }

    /// A childless layout pinned to `size`.
    pub fn fixed(size: Size) -> Self {
        Self::new(SizeSpec::fixed(size))
    }

    fn build(spec: SizeSpec, sublayout: Option<LayoutNode>) -> Self {
        let alignment = spec.alignment.unwrap_or_else(|| {
            let horizontal = if spec.max_width.is_some() {
                Horizontal::Center
            } else {
                Horizontal::Fill
            };
            let vertical = if spec.max_height.is_some() {
                Vertical::Center
            } else {
                Vertical::Fill
            };
            Alignment::new(vertical, horizontal)
        });
        let flexibility = spec.flexibility.unwrap_or_else(|| {
            Flexibility::new(
                default_flex(spec.min_width, spec.max_width),
                default_flex(spec.min_height, spec.max_height),
            )
        });
        Self {
            min_size: Size::new(
                spec.min_width.unwrap_or(0.0),
                spec.min_height.unwrap_or(0.0),
            ),
            max_size: Size::new(
                spec.max_width.unwrap_or(f32::INFINITY),
                spec.max_height.unwrap_or(f32::INFINITY),
            ),
            alignment,
            flexibility,
            view: spec.view,
            sublayout,
        }
    }
}

/// Inflexible when the dimension is pinned, default otherwise.
fn default_flex(min: Option<f32>, max: Option<f32>) -> Flex {
    match (min, max) {
        (Some(min), Some(max)) if (max - min).abs() < PINNED_EPSILON => {
            Flexibility::INFLEXIBLE_FLEX
        }
        _ => Flexibility::DEFAULT_FLEX,
    }
}

impl Layout for SizeLayout {
    fn measure(&self, max_size: Size) -> Measured {
        let available = max_size.decreased_to(self.max_size);
        let sublayouts: Vec<LayoutMeasurement> = self
            .sublayout
            .iter()
            .map(|sublayout| sublayout.measurement(available))
            .collect();
        let content = sublayouts
            .first()
            .map_or(Size::ZERO, |measurement| measurement.size);
        Measured {
            size: content.increased_to(self.min_size).decreased_to(available),
            sublayouts,
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
        "Size"
    }
}
