use trellis_core::{LabelView, View};
use trellis_ui_graphics::{Font, LineBreakMode, Rect, Size};

use crate::{
    Alignment, Arranged, Flexibility, Layout, LayoutMeasurement, Measured, TextContext, ViewConfig,
};

#[derive(Clone, Debug)]
pub struct LabelSpec {
    pub font: Option<Font>,
    /// Maximum number of lines; 0 means unlimited.
    pub number_of_lines: usize,
    pub line_break_mode: Option<LineBreakMode>,
    pub alignment: Alignment,
    pub flexibility: Flexibility,
    pub view: Option<ViewConfig>,
}

impl LabelSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn font(mut self, font: Font) -> Self {
        self.font = Some(font);
        self
    }

    pub fn number_of_lines(mut self, lines: usize) -> Self {
        self.number_of_lines = lines;
        self
    }

    pub fn line_break_mode(mut self, mode: LineBreakMode) -> Self {
        self.line_break_mode = Some(mode);
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

    /// View configuration for the label. The label always gets a view, so
    /// this is only needed for a reuse id or extra configuration.
    pub fn view(mut self, view: ViewConfig) -> Self {
        self.view = Some(view);
        self
    }
}

impl Default for LabelSpec {
    fn default() -> Self {
        Self {
            font: None,
            number_of_lines: 0,
            line_break_mode: None,
            alignment: Alignment::TOP_LEADING,
            flexibility: Flexibility::FLEXIBLE,
            view: None,
        }
    }
}

/// A single- or multi-line label measured by the context's text measurer.
pub struct LabelLayout {
    text: String,
    font: Font,
    number_of_lines: usize,
    line_break_mode: LineBreakMode,
    alignment: Alignment,
    flexibility: Flexibility,
    view: ViewConfig,
    context: TextContext,
}

impl LabelLayout {
    pub fn new(context: &TextContext, text: impl Into<String>, spec: LabelSpec) -> Self {
        Self {
            text: text.into(),
            font: spec
                .font
                .unwrap_or_else(|| context.default_font().clone()),
            number_of_lines: spec.number_of_lines,
            line_break_mode: spec
                .line_break_mode
                .unwrap_or_else(|| context.default_line_break_mode()),
            alignment: spec.alignment,
            flexibility: spec.flexibility,
            view: spec
                .view
                .unwrap_or_else(ViewConfig::of::<LabelView>)
                .required(),
            context: context.clone(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    fn text_size(&self, max_size: Size) -> Size {
        let measured = self.context.measurer().measure(
            &self.text,
            &self.font,
            max_size,
            self.line_break_mode,
        );
        let size = self.context.round_up_size(measured);
        if self.number_of_lines == 0 {
            return size;
        }
        let line_height = self.context.measurer().line_height(&self.font);
        let max_height = self
            .context
            .round_up(self.number_of_lines as f32 * line_height);
        if size.height > max_height {
            let width = if max_size.width.is_finite() {
                max_size.width
            } else {
                size.width
            };
            Size::new(width, max_height)
        } else {
            size
        }
    }
}

impl Layout for LabelLayout {
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
        if let Some(label) = view.downcast_mut::<LabelView>() {
            label.text.clone_from(&self.text);
            label.font = self.font.clone();
            label.number_of_lines = self.number_of_lines;
            label.line_break_mode = self.line_break_mode;
        }
        self.view.apply(view);
    }

    fn debug_name(&self) -> &str {
        "Label"
    }
}
