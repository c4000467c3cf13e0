//! Text measurement collaborator and the context the text layouts share.

use std::sync::Arc;

use trellis_ui_graphics::{Font, LineBreakMode, Size};

/// Measures text for the leaf text layouts.
///
/// Implementations must be deterministic, and measuring within a larger box
/// must never produce a smaller result than measuring the same text within a
/// smaller one.
pub trait TextMeasurer: Send + Sync + 'static {
    fn measure(&self, text: &str, font: &Font, max_size: Size, line_break: LineBreakMode) -> Size;

    /// Height of one line of `font`.
    fn line_height(&self, font: &Font) -> f32;
}

/// Fixed-advance measurer: every character is half the font size wide and a
/// line is 1.25 font sizes tall. With the default 16pt font a character is 8
/// wide and a line is 20 high.
#[derive(Clone, Copy, Debug, Default)]
pub struct MonospacedTextMeasurer;

impl MonospacedTextMeasurer {
    const CHAR_WIDTH_RATIO: f32 = 0.5;
    const LINE_HEIGHT_RATIO: f32 = 1.25;

    fn char_width(font: &Font) -> f32 {
        font.size * Self::CHAR_WIDTH_RATIO
    }
}

impl TextMeasurer for MonospacedTextMeasurer {
    fn measure(&self, text: &str, font: &Font, max_size: Size, line_break: LineBreakMode) -> Size {
        let char_width = Self::char_width(font);
        let line_height = self.line_height(font);
        if text.is_empty() || char_width <= 0.0 {
            return Size::ZERO;
        }
        let chars_per_line = if max_size.width.is_finite() {
            ((max_size.width / char_width).floor() as usize).max(1)
        } else {
            usize::MAX
        };

        let mut widest = 0usize;
        let mut lines = 0usize;
        for paragraph in text.split('\n') {
            let count = paragraph.chars().count();
            if line_break.wraps() {
                widest = widest.max(count.min(chars_per_line));
                lines += count.div_ceil(chars_per_line).max(1);
            } else {
                widest = widest.max(count);
                lines += 1;
            }
        }

        let width = (widest as f32 * char_width).min(max_size.width);
        Size::new(width, lines as f32 * line_height)
    }

    fn line_height(&self, font: &Font) -> f32 {
        font.size * Self::LINE_HEIGHT_RATIO
    }
}

/// Engine-wide text configuration handed to label and text view layouts.
#[derive(Clone)]
pub struct TextContext {
    measurer: Arc<dyn TextMeasurer>,
    font: Font,
    line_break_mode: LineBreakMode,
    scale: f32,
}

impl TextContext {
    pub fn new(measurer: impl TextMeasurer) -> Self {
        Self {
            measurer: Arc::new(measurer),
            font: Font::default(),
            line_break_mode: LineBreakMode::default(),
            scale: 1.0,
        }
    }

    /// A context backed by [`MonospacedTextMeasurer`].
    pub fn monospaced() -> Self {
        Self::new(MonospacedTextMeasurer)
    }

    pub fn font(mut self, font: Font) -> Self {
        self.font = font;
        self
    }

    pub fn line_break_mode(mut self, mode: LineBreakMode) -> Self {
        self.line_break_mode = mode;
        self
    }

    /// Device pixels per point; measured lengths round up to whole pixels.
    pub fn scale(mut self, scale: f32) -> Self {
        self.scale = if scale > 0.0 { scale } else { 1.0 };
        self
    }

    pub fn default_font(&self) -> &Font {
        &self.font
    }

    pub fn default_line_break_mode(&self) -> LineBreakMode {
        self.line_break_mode
    }

    pub fn measurer(&self) -> &dyn TextMeasurer {
        &*self.measurer
    }

    /// Rounds `value` up to the next device pixel.
    pub fn round_up(&self, value: f32) -> f32 {
        if value.is_finite() {
            (value * self.scale).ceil() / self.scale
        } else {
            value
        }
    }

    pub fn round_up_size(&self, size: Size) -> Size {
        Size::new(self.round_up(size.width), self.round_up(size.height))
    }
}

impl Default for TextContext {
    fn default() -> Self {
        Self::monospaced()
    }
}

impl std::fmt::Debug for TextContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextContext")
            .field("font", &self.font)
            .field("line_break_mode", &self.line_break_mode)
            .field("scale", &self.scale)
            .finish()
    }
}
