//! Headless stock views produced by the built-in layouts.

use std::any::Any;

use trellis_ui_graphics::{EdgeInsets, Font, LineBreakMode};

use crate::View;

/// A plain view whose only job is to hold subviews.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContainerView;

impl View for ContainerView {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct LabelView {
    pub text: String,
    pub font: Font,
    pub number_of_lines: usize,
    pub line_break_mode: LineBreakMode,
}

impl View for LabelView {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// Scrollable, editable text. `text_container_inset` and
/// `line_fragment_padding` mirror the text container geometry the layout
/// measured with.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TextView {
    pub text: String,
    pub font: Font,
    pub text_container_inset: EdgeInsets,
    pub line_fragment_padding: f32,
}

impl View for TextView {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
