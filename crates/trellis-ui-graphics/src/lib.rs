//! Pure math/data for Trellis layouts
//!
//! This crate contains the geometry primitives and typography descriptors
//! shared by the layout engine and the view system.

mod geometry;
mod typography;

pub use geometry::*;
pub use typography::*;

pub mod prelude {
    pub use crate::geometry::{EdgeInsets, Point, Rect, Size};
    pub use crate::typography::{Font, FontWeight, LineBreakMode};
}

#[cfg(test)]
#[path = "tests/geometry_tests.rs"]
mod tests;
