use trellis_core::{TextView, View};
use trellis_ui_graphics::{EdgeInsets, Font, Rect, Size};

use crate::{
    Alignment, Arranged, Flexibility, Layout, LayoutMeasurement, Measured, TextContext, ViewConfig,
};

#[derive(Clone, Debug)]
pub struct TextViewSpec {
    pub font: Option<Font>,
    pub text_container_inset: EdgeInsets,
    /// Padding on each side of every line fragment.
    pub line_fragment_padding: f32,
    pub alignment: Alignment,
    pub flexibility: Flexibility,
    pub view: Option<ViewConfig>,
}

impl TextViewSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn font(mut self, font: Font) -> Self {
        self.font = Some(font);
        self
    }

    pub fn text_container_inset(mut self, inset: EdgeInsets) -> Self {
        self.text_container_inset = inset;
        self
    }

    pub fn line_fragment_padding(mut self, padding: f32) -> Self {
        self.line_fragment_padding = padding;
        self
    }

    pub fn alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    pub fn flexibility(mut self, flexibility: Flexibility) -> Self {
        self.flexibility = flexibility;
        self
    }

    pub fn view(mut self, view: ViewConfig) -> Self {
        self.view = Some(view);
        self
    }
}

impl Default for TextViewSpec {
    fn default() -> Self {
        Self {
            font: None,
            text_container_inset: EdgeInsets::ZERO,
            line_fragment_padding: 0.0,
            alignment: Alignment::TOP_LEADING,
            flexibility: Flexibility::FLEXIBLE,
            view: None,
        }
    }
}

/// Non-scrolling text view; measures like a label inside its text container.
pub struct TextViewLayout {
    text: String,
    font: Font,
    text_container_inset: EdgeInsets,
    line_fragment_padding: f32,
    alignment: Alignment,
    flexibility: Flexibility,
    view: ViewConfig,
    context: TextContext,
}

impl TextViewLayout {
    pub fn new(context: &TextContext, text: impl Into<String>, spec: TextViewSpec) -> Self {
        Self {
            text: text.into(),
            font: spec
                .font
                .unwrap_or_else(|| context.default_font().clone()),
            text_container_inset: spec.text_container_inset,
            line_fragment_padding: spec.line_fragment_padding,
            alignment: spec.alignment,
            flexibility: spec.flexibility,
            view: spec
                .view
                .unwrap_or_else(ViewConfig::of::<TextView>)
                .required(),
            context: context.clone(),
        }
    }

    fn text_size(&self, max_size: Size) -> Size {
        let padding = self.line_fragment_padding * 2.0;
        let mut inner_max = max_size.decreased_by_insets(self.text_container_inset);
        inner_max.width -= padding;
        let inner_max = inner_max.increased_to(Size::ZERO);

        let measurer = self.context.measurer();
        let line_break = self.context.default_line_break_mode();
        let measured = if self.text.is_empty() {
            // Empty text keeps the height of one line.
            let space = measurer.measure(" ", &self.font, inner_max, line_break);
            Size::new(0.0, space.height)
        } else {
            measurer.measure(&self.text, &self.font, inner_max, line_break)
        };

        let mut size = self
            .context
            .round_up_size(measured)
            .increased_by_insets(self.text_container_inset);
        size.width += padding;
        size
    }
}

impl Layout for TextViewLayout {
    fn measure(&self, max_size: Size) -> Measured {
        Measured::leaf(self.text_size(max_size).decreased_to(max_size))
    }

    fn arrange(&self, rect: Rect, measurement: &LayoutMeasurement) -> Arranged {
        Arranged::leaf(self.alignment.position(measurement.size, rect))
    }

    fn flexibility(&self) -> Flexibility {
        self.flexibility
    }

    fn view_config(&self) -> Option<&ViewConfig> {
        Some(&self.view)
    }

    fn configure_view(&self, view: &mut dyn View) {
        if let Some(text_view) = view.downcast_mut::<TextView>() {
            text_view.text.clone_from(&self.text);
            text_view.font = self.font.clone();
            text_view.text_container_inset = self.text_container_inset;
            text_view.line_fragment_padding = self.line_fragment_padding;
        }
        self.view.apply(view);
    }

    fn debug_name(&self) -> &str {
        "TextView"
    }
}
