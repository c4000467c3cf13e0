//! Typography descriptors consumed by text measurement

use std::sync::Arc;

/// Font weight (100-900)
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FontWeight(pub u16);

impl FontWeight {
    pub const LIGHT: FontWeight = FontWeight(300);
    pub const NORMAL: FontWeight = FontWeight(400);
    pub const MEDIUM: FontWeight = FontWeight(500);
    pub const BOLD: FontWeight = FontWeight(700);
}

impl Default for FontWeight {
    fn default() -> Self {
        FontWeight::NORMAL
    }
}

/// A font description. Metrics come from the text measurer, never from here.
#[derive(Clone, Debug, PartialEq)]
pub struct Font {
    pub family: Option<Arc<str>>,
    pub size: f32,
    pub weight: FontWeight,
}

impl Font {
    pub const DEFAULT_SIZE: f32 = 16.0;

    pub fn system(size: f32) -> Self {
        Self {
            family: None,
            size,
            weight: FontWeight::NORMAL,
        }
    }

    pub fn named(family: impl Into<Arc<str>>, size: f32) -> Self {
        Self {
            family: Some(family.into()),
            size,
            weight: FontWeight::NORMAL,
        }
    }

    pub fn weight(mut self, weight: FontWeight) -> Self {
        self.weight = weight;
        self
    }
}

impl Default for Font {
    fn default() -> Self {
        Font::system(Self::DEFAULT_SIZE)
    }
}

/// How text that does not fit on one line is broken or truncated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LineBreakMode {
    #[default]
    WordWrap,
    CharWrap,
    Clip,
    TruncateHead,
    TruncateTail,
    TruncateMiddle,
}

impl LineBreakMode {
    /// True when overflowing text continues on a following line.
    pub fn wraps(self) -> bool {
        matches!(self, LineBreakMode::WordWrap | LineBreakMode::CharWrap)
    }
}
