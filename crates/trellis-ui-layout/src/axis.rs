//! Orientation-agnostic views over 2-D geometry.
//!
//! Each wrapper pairs a value with an [`Axis`] and exposes it as an axis
//! component (along the axis) and a cross component (perpendicular to it), so
//! the stack algorithms can be written once for both orientations.

use trellis_ui_graphics::{Point, Rect, Size};

use crate::{Flex, Flexibility};

/// The primary axis of a stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Axis runs left to right; cross runs top to bottom.
    Horizontal,
    /// Axis runs top to bottom; cross runs left to right.
    Vertical,
}

impl Axis {
    /// Returns the opposite axis.
    #[inline]
    pub fn cross_axis(self) -> Self {
        match self {
            Axis::Horizontal => Axis::Vertical,
            Axis::Vertical => Axis::Horizontal,
        }
    }

    #[inline]
    pub fn is_horizontal(self) -> bool {
        matches!(self, Axis::Horizontal)
    }

    #[inline]
    pub fn is_vertical(self) -> bool {
        matches!(self, Axis::Vertical)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisPoint {
    pub axis: Axis,
    pub point: Point,
}

impl AxisPoint {
    pub fn new(axis: Axis, point: Point) -> Self {
        Self { axis, point }
    }

    pub fn from_offsets(axis: Axis, axis_offset: f32, cross_offset: f32) -> Self {
        let mut value = Self::new(axis, Point::ZERO);
        value.set_axis_offset(axis_offset);
        value.set_cross_offset(cross_offset);
        value
    }

    pub fn axis_offset(&self) -> f32 {
        match self.axis {
            Axis::Horizontal => self.point.x,
            Axis::Vertical => self.point.y,
        }
    }

    pub fn set_axis_offset(&mut self, offset: f32) {
        match self.axis {
            Axis::Horizontal => self.point.x = offset,
            Axis::Vertical => self.point.y = offset,
        }
    }

    pub fn cross_offset(&self) -> f32 {
        match self.axis {
            Axis::Horizontal => self.point.y,
            Axis::Vertical => self.point.x,
        }
    }

    pub fn set_cross_offset(&mut self, offset: f32) {
        match self.axis {
            Axis::Horizontal => self.point.y = offset,
            Axis::Vertical => self.point.x = offset,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisSize {
    pub axis: Axis,
    pub size: Size,
}

impl AxisSize {
    pub fn new(axis: Axis, size: Size) -> Self {
        Self { axis, size }
    }

    pub fn from_lengths(axis: Axis, axis_length: f32, cross_length: f32) -> Self {
        let mut value = Self::new(axis, Size::ZERO);
        value.set_axis_length(axis_length);
        value.set_cross_length(cross_length);
        value
    }

    pub fn axis_length(&self) -> f32 {
        match self.axis {
            Axis::Horizontal => self.size.width,
            Axis::Vertical => self.size.height,
        }
    }

    pub fn set_axis_length(&mut self, length: f32) {
        match self.axis {
            Axis::Horizontal => self.size.width = length,
            Axis::Vertical => self.size.height = length,
        }
    }

    pub fn cross_length(&self) -> f32 {
        match self.axis {
            Axis::Horizontal => self.size.height,
            Axis::Vertical => self.size.width,
        }
    }

    pub fn set_cross_length(&mut self, length: f32) {
        match self.axis {
            Axis::Horizontal => self.size.height = length,
            Axis::Vertical => self.size.width = length,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisRect {
    pub axis: Axis,
    pub rect: Rect,
}

impl AxisRect {
    pub fn new(axis: Axis, rect: Rect) -> Self {
        Self { axis, rect }
    }

    pub fn from_parts(axis: Axis, origin: AxisPoint, size: AxisSize) -> Self {
        let origin = AxisPoint::from_offsets(axis, origin.axis_offset(), origin.cross_offset());
        let size = AxisSize::from_lengths(axis, size.axis_length(), size.cross_length());
        Self::new(axis, Rect::from_origin_size(origin.point, size.size))
    }

    pub fn origin(&self) -> AxisPoint {
        AxisPoint::new(self.axis, self.rect.origin())
    }

    pub fn set_origin(&mut self, origin: AxisPoint) {
        let origin = AxisPoint::from_offsets(self.axis, origin.axis_offset(), origin.cross_offset());
        self.rect.x = origin.point.x;
        self.rect.y = origin.point.y;
    }

    pub fn size(&self) -> AxisSize {
        AxisSize::new(self.axis, self.rect.size())
    }

    pub fn set_size(&mut self, size: AxisSize) {
        let size = AxisSize::from_lengths(self.axis, size.axis_length(), size.cross_length());
        self.rect.width = size.size.width;
        self.rect.height = size.size.height;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisFlexibility {
    pub axis: Axis,
    pub flexibility: Flexibility,
}

impl AxisFlexibility {
    pub fn new(axis: Axis, flexibility: Flexibility) -> Self {
        Self { axis, flexibility }
    }

    pub fn from_flexes(axis: Axis, axis_flex: Flex, cross_flex: Flex) -> Self {
        let mut value = Self::new(axis, Flexibility::INFLEXIBLE);
        value.set_axis_flex(axis_flex);
        value.set_cross_flex(cross_flex);
        value
    }

    pub fn axis_flex(&self) -> Flex {
        self.flexibility.flex(self.axis)
    }

    pub fn set_axis_flex(&mut self, flex: Flex) {
        match self.axis {
            Axis::Horizontal => self.flexibility.horizontal = flex,
            Axis::Vertical => self.flexibility.vertical = flex,
        }
    }

    pub fn cross_flex(&self) -> Flex {
        self.flexibility.flex(self.axis.cross_axis())
    }

    pub fn set_cross_flex(&mut self, flex: Flex) {
        match self.axis {
            Axis::Horizontal => self.flexibility.vertical = flex,
            Axis::Vertical => self.flexibility.horizontal = flex,
        }
    }
}
