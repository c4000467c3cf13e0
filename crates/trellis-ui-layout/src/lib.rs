//! Measure and arrange engine for Trellis
//!
//! A tree of [`LayoutNode`]s is measured bottom-up into a
//! [`LayoutMeasurement`] tree, then arranged top-down into a
//! [`LayoutArrangement`] tree of frames. Both passes are pure and may run on
//! any thread.

mod alignment;
mod axis;
mod flexibility;
mod layout;
mod layouts;
mod measurement;
mod text;
mod view_config;

pub use alignment::*;
pub use axis::*;
pub use flexibility::*;
pub use layout::*;
pub use layouts::*;
pub use measurement::*;
pub use text::*;
pub use view_config::*;

pub mod prelude {
    pub use crate::alignment::{Alignment, Horizontal, Vertical};
    pub use crate::axis::Axis;
    pub use crate::flexibility::{Flex, Flexibility};
    pub use crate::layout::{Layout, LayoutNode};
    pub use crate::layouts::{
        AutoRotateStackLayout, InsetLayout, LabelLayout, LabelSpec, OverlayLayout, SizeLayout,
        SizeSpec, StackDistribution, StackLayout, StackSpec, TextViewLayout, TextViewSpec,
    };
    pub use crate::measurement::{LayoutArrangement, LayoutMeasurement};
    pub use crate::text::{MonospacedTextMeasurer, TextContext, TextMeasurer};
    pub use crate::view_config::{ViewConfig, ViewKind};
}

#[cfg(test)]
#[path = "tests/alignment_tests.rs"]
mod alignment_tests;

#[cfg(test)]
#[path = "tests/axis_tests.rs"]
mod axis_tests;

#[cfg(test)]
#[path = "tests/flexibility_tests.rs"]
mod flexibility_tests;

#[cfg(test)]
#[path = "tests/stack_tests.rs"]
mod stack_tests;

#[cfg(test)]
#[path = "tests/layout_tests.rs"]
mod layout_tests;

#[cfg(test)]
#[path = "tests/text_tests.rs"]
mod text_tests;
