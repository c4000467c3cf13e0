//! The layout node abstraction: a capability trait plus a closed set of
//! built-in node kinds behind a shared handle.

use std::fmt;
use std::sync::Arc;

use trellis_core::{ReuseId, View};
use trellis_ui_graphics::{Point, Rect, Size};

use crate::{
    AutoRotateStackLayout, Flexibility, InsetLayout, LabelLayout, LayoutArrangement,
    LayoutMeasurement, OverlayLayout, SizeLayout, StackLayout, TextViewLayout, ViewConfig,
};

/// Output of [`Layout::measure`]; the node handle is attached by [`LayoutNode`].
#[derive(Clone, Debug)]
pub struct Measured {
    pub size: Size,
    pub sublayouts: Vec<LayoutMeasurement>,
}

impl Measured {
    pub fn leaf(size: Size) -> Self {
        Self {
            size,
            sublayouts: Vec::new(),
        }
    }
}

/// Output of [`Layout::arrange`].
#[derive(Clone, Debug)]
pub struct Arranged {
    pub frame: Rect,
    pub sublayouts: Vec<LayoutArrangement>,
}

impl Arranged {
    pub fn leaf(frame: Rect) -> Self {
        Self {
            frame,
            sublayouts: Vec::new(),
        }
    }
}

/// A measurable, arrangeable node.
///
/// Both passes only read `self`, so they can run on any thread. `measure`
/// must not return a size larger than `max_size`, and composite layouts must
/// never grow the budget they hand to their children.
pub trait Layout: Send + Sync + 'static {
    fn measure(&self, max_size: Size) -> Measured;

    /// Places the node within `rect` using a measurement of this same node.
    fn arrange(&self, rect: Rect, measurement: &LayoutMeasurement) -> Arranged;

    fn flexibility(&self) -> Flexibility;

    fn view_config(&self) -> Option<&ViewConfig> {
        None
    }

    fn needs_view(&self) -> bool {
        self.view_config().is_some_and(ViewConfig::needs_view)
    }

    /// Applies node configuration to a made or recycled view.
    fn configure_view(&self, view: &mut dyn View) {
        if let Some(config) = self.view_config() {
            config.apply(view);
        }
    }

    fn debug_name(&self) -> &str {
        "Layout"
    }
}

pub enum LayoutKind {
    Stack(StackLayout),
    Inset(InsetLayout),
    Size(SizeLayout),
    Label(LabelLayout),
    TextView(TextViewLayout),
    Overlay(OverlayLayout),
    AutoRotateStack(AutoRotateStackLayout),
    Custom(Box<dyn Layout>),
}

impl LayoutKind {
    pub fn as_layout(&self) -> &dyn Layout {
        match self {
            LayoutKind::Stack(layout) => layout,
            LayoutKind::Inset(layout) => layout,
            LayoutKind::Size(layout) => layout,
            LayoutKind::Label(layout) => layout,
            LayoutKind::TextView(layout) => layout,
            LayoutKind::Overlay(layout) => layout,
            LayoutKind::AutoRotateStack(layout) => layout,
            LayoutKind::Custom(layout) => layout.as_ref(),
        }
    }
}

/// Shared, immutable handle to a layout node.
///
/// Cloning is cheap and the same tree may be measured any number of times
/// from any thread.
#[derive(Clone)]
pub struct LayoutNode(Arc<LayoutKind>);

impl LayoutNode {
    pub fn new(kind: LayoutKind) -> Self {
        Self(Arc::new(kind))
    }

    pub fn custom(layout: impl Layout) -> Self {
        Self::new(LayoutKind::Custom(Box::new(layout)))
    }

    pub fn kind(&self) -> &LayoutKind {
        &self.0
    }

    fn layout(&self) -> &dyn Layout {
        self.0.as_layout()
    }

    pub fn measurement(&self, max_size: Size) -> LayoutMeasurement {
        let Measured { size, sublayouts } = self.layout().measure(max_size);
        let size = if size.fits_within(max_size) {
            size
        } else {
            log::warn!(
                "{} measured {} x {} within {} x {}; clamping",
                self.debug_name(),
                size.width,
                size.height,
                max_size.width,
                max_size.height
            );
            size.decreased_to(max_size)
        };
        LayoutMeasurement {
            layout: self.clone(),
            size,
            max_size,
            sublayouts,
        }
    }

    pub fn arrangement(&self, rect: Rect, measurement: &LayoutMeasurement) -> LayoutArrangement {
        let Arranged { frame, sublayouts } = self.layout().arrange(rect, measurement);
        LayoutArrangement {
            layout: self.clone(),
            frame,
            sublayouts,
        }
    }

    /// Measures with `(width ?? inf, height ?? inf)` and arranges at `origin`
    /// with the measured size, overridden by any explicit dimension.
    pub fn arrangement_at(
        &self,
        origin: Point,
        width: Option<f32>,
        height: Option<f32>,
    ) -> LayoutArrangement {
        let max_size = Size::new(
            width.unwrap_or(f32::INFINITY),
            height.unwrap_or(f32::INFINITY),
        );
        let measurement = self.measurement(max_size);
        let size = Size::new(
            width.unwrap_or(measurement.size.width),
            height.unwrap_or(measurement.size.height),
        );
        self.arrangement(Rect::from_origin_size(origin, size), &measurement)
    }

    pub fn flexibility(&self) -> Flexibility {
        self.layout().flexibility()
    }

    pub fn needs_view(&self) -> bool {
        self.layout().needs_view()
    }

    pub fn view_config(&self) -> Option<&ViewConfig> {
        self.layout().view_config()
    }

    pub fn reuse_id(&self) -> Option<&ReuseId> {
        self.view_config().and_then(ViewConfig::reuse_id)
    }

    /// Makes a fresh, configured view for this node, if it needs one.
    pub fn make_view(&self) -> Option<Box<dyn View>> {
        if !self.needs_view() {
            return None;
        }
        let config = self.view_config()?;
        let mut view = config.make_view();
        self.configure_view(view.as_mut());
        Some(view)
    }

    pub fn configure_view(&self, view: &mut dyn View) {
        self.layout().configure_view(view);
    }

    pub fn debug_name(&self) -> &str {
        self.layout().debug_name()
    }

    pub fn ptr_eq(&self, other: &LayoutNode) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for LayoutNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("LayoutNode")
            .field(&self.debug_name())
            .finish()
    }
}

macro_rules! impl_into_layout_node {
    ($($layout:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$layout> for LayoutNode {
                fn from(layout: $layout) -> Self {
                    LayoutNode::new(LayoutKind::$variant(layout))
                }
            }
        )*
    };
}

impl_into_layout_node! {
    StackLayout => Stack,
    InsetLayout => Inset,
    SizeLayout => Size,
    LabelLayout => Label,
    TextViewLayout => TextView,
    OverlayLayout => Overlay,
    AutoRotateStackLayout => AutoRotateStack,
}
