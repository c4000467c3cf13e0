//! Alignment utilities for positioning a measured size inside a rect

use std::fmt;
use std::sync::Arc;

use trellis_ui_graphics::{Rect, Size};

/// Alignment along the horizontal axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Horizontal {
    Leading,
    Trailing,
    Center,
    /// Takes the whole available length, ignoring the requested one.
    Fill,
}

impl Horizontal {
    /// Resolves `(offset, length)` for a requested `length` inside
    /// `available` space starting at `offset`.
    pub fn align(self, length: f32, available: f32, offset: f32) -> (f32, f32) {
        let excess = available - length;
        let clamped = length.min(available);
        match self {
            Horizontal::Leading => (offset, clamped),
            Horizontal::Trailing => (offset + excess, clamped),
            Horizontal::Center => (offset + excess / 2.0, clamped),
            Horizontal::Fill => (offset, available),
        }
    }
}

/// Alignment along the vertical axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Vertical {
    Top,
    Bottom,
    Center,
    Fill,
}

impl Vertical {
    fn as_horizontal(self) -> Horizontal {
        match self {
            Vertical::Top => Horizontal::Leading,
            Vertical::Bottom => Horizontal::Trailing,
            Vertical::Center => Horizontal::Center,
            Vertical::Fill => Horizontal::Fill,
        }
    }

    pub fn align(self, length: f32, available: f32, offset: f32) -> (f32, f32) {
        self.as_horizontal().align(length, available, offset)
    }
}

type AlignFn = dyn Fn(Size, Rect) -> Rect + Send + Sync;

#[derive(Clone)]
enum Aligner {
    Axes {
        vertical: Vertical,
        horizontal: Horizontal,
    },
    AspectFit,
    Custom(Arc<AlignFn>),
}

/// Positions a measured size inside an available rect.
#[derive(Clone)]
pub struct Alignment {
    aligner: Aligner,
}

impl Alignment {
    pub const fn new(vertical: Vertical, horizontal: Horizontal) -> Self {
        Self {
            aligner: Aligner::Axes {
                vertical,
                horizontal,
            },
        }
    }

    /// An alignment computed by an arbitrary function.
    pub fn custom(position: impl Fn(Size, Rect) -> Rect + Send + Sync + 'static) -> Self {
        Self {
            aligner: Aligner::Custom(Arc::new(position)),
        }
    }

    pub const CENTER: Self = Self::new(Vertical::Center, Horizontal::Center);
    pub const CENTER_LEADING: Self = Self::new(Vertical::Center, Horizontal::Leading);
    pub const CENTER_TRAILING: Self = Self::new(Vertical::Center, Horizontal::Trailing);
    pub const CENTER_FILL: Self = Self::new(Vertical::Center, Horizontal::Fill);

    pub const TOP_LEADING: Self = Self::new(Vertical::Top, Horizontal::Leading);
    pub const TOP_TRAILING: Self = Self::new(Vertical::Top, Horizontal::Trailing);
    pub const TOP_CENTER: Self = Self::new(Vertical::Top, Horizontal::Center);
    pub const TOP_FILL: Self = Self::new(Vertical::Top, Horizontal::Fill);

    pub const BOTTOM_LEADING: Self = Self::new(Vertical::Bottom, Horizontal::Leading);
    pub const BOTTOM_TRAILING: Self = Self::new(Vertical::Bottom, Horizontal::Trailing);
    pub const BOTTOM_CENTER: Self = Self::new(Vertical::Bottom, Horizontal::Center);
    pub const BOTTOM_FILL: Self = Self::new(Vertical::Bottom, Horizontal::Fill);

    pub const FILL_LEADING: Self = Self::new(Vertical::Fill, Horizontal::Leading);
    pub const FILL_TRAILING: Self = Self::new(Vertical::Fill, Horizontal::Trailing);
    pub const FILL_CENTER: Self = Self::new(Vertical::Fill, Horizontal::Center);
    pub const FILL: Self = Self::new(Vertical::Fill, Horizontal::Fill);

    /// Scales the size to the largest rect of the same aspect ratio that fits,
    /// then centers it.
    pub const ASPECT_FIT: Self = Self {
        aligner: Aligner::AspectFit,
    };

    pub fn position(&self, size: Size, rect: Rect) -> Rect {
        match &self.aligner {
            Aligner::Axes {
                vertical,
                horizontal,
            } => {
                let (x, width) = horizontal.align(size.width, rect.width, rect.x);
                let (y, height) = vertical.align(size.height, rect.height, rect.y);
                Rect::new(x, y, width, height)
            }
            Aligner::AspectFit => aspect_fit(size, rect),
            Aligner::Custom(position) => position(size, rect),
        }
    }

    /// The per-dimension policies, if this is not a computed alignment.
    pub fn axes(&self) -> Option<(Vertical, Horizontal)> {
        match self.aligner {
            Aligner::Axes {
                vertical,
                horizontal,
            } => Some((vertical, horizontal)),
            _ => None,
        }
    }
}

impl Default for Alignment {
    fn default() -> Self {
        Self::FILL
    }
}

impl fmt::Debug for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.aligner {
            Aligner::Axes {
                vertical,
                horizontal,
            } => f
                .debug_struct("Alignment")
                .field("vertical", vertical)
                .field("horizontal", horizontal)
                .finish(),
            Aligner::AspectFit => f.write_str("Alignment::ASPECT_FIT"),
            Aligner::Custom(_) => f.write_str("Alignment::custom(..)"),
        }
    }
}

fn aspect_fit(size: Size, rect: Rect) -> Rect {
    if size.width <= 0.0 || size.height <= 0.0 || rect.width <= 0.0 || rect.height <= 0.0 {
        return Alignment::CENTER.position(size, rect);
    }
    let size_ratio = size.width / size.height;
    let rect_ratio = rect.width / rect.height;
    let fitted = if rect_ratio > size_ratio {
        Size::new(rect.height * size_ratio, rect.height)
    } else {
        Size::new(rect.width, rect.width / size_ratio)
    };
    Alignment::CENTER.position(fitted, rect)
}
