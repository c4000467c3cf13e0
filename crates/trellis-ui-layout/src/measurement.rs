//! Immutable results of the measure and arrange passes.

use std::fmt;

use trellis_ui_graphics::{Rect, Size};

use crate::LayoutNode;

/// The size a node resolved to within `max_size`, plus the measurements of
/// the children it actually measured, in child order.
#[derive(Clone, Debug)]
pub struct LayoutMeasurement {
    pub layout: LayoutNode,
    pub size: Size,
    pub max_size: Size,
    pub sublayouts: Vec<LayoutMeasurement>,
}

impl LayoutMeasurement {
    /// Arranges the measured node within `rect`.
    pub fn arrangement(&self, rect: Rect) -> LayoutArrangement {
        self.layout.arrangement(rect, self)
    }

    fn fmt_tree(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        writeln!(
            f,
            "{}{}: {} x {} (max {} x {})",
            "  ".repeat(depth),
            self.layout.debug_name(),
            self.size.width,
            self.size.height,
            self.max_size.width,
            self.max_size.height
        )?;
        for sublayout in &self.sublayouts {
            sublayout.fmt_tree(f, depth + 1)?;
        }
        Ok(())
    }
}

impl fmt::Display for LayoutMeasurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_tree(f, 0)
    }
}

/// Final frames of a node and its children. Child frames are relative to the
/// origin of the parent's frame.
#[derive(Clone, Debug)]
pub struct LayoutArrangement {
    pub layout: LayoutNode,
    pub frame: Rect,
    pub sublayouts: Vec<LayoutArrangement>,
}

impl LayoutArrangement {
    /// Visits every arrangement depth-first with its frame translated into
    /// the coordinate space of the root's parent.
    pub fn visit_absolute(&self, visit: &mut impl FnMut(&LayoutArrangement, Rect)) {
        self.visit_with_origin(0.0, 0.0, visit);
    }

    fn visit_with_origin(
        &self,
        dx: f32,
        dy: f32,
        visit: &mut impl FnMut(&LayoutArrangement, Rect),
    ) {
        let frame = self.frame.translate(dx, dy);
        visit(self, frame);
        for sublayout in &self.sublayouts {
            sublayout.visit_with_origin(frame.x, frame.y, visit);
        }
    }

    fn fmt_tree(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        write!(
            f,
            "{}{}: {}",
            "  ".repeat(depth),
            self.layout.debug_name(),
            self.frame
        )?;
        if let Some(reuse_id) = self.layout.reuse_id() {
            write!(f, " #{reuse_id}")?;
        }
        writeln!(f)?;
        for sublayout in &self.sublayouts {
            sublayout.fmt_tree(f, depth + 1)?;
        }
        Ok(())
    }
}

impl fmt::Display for LayoutArrangement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_tree(f, 0)
    }
}
