//! View reconciliation for Trellis
//!
//! Materializes arrangement trees produced by `trellis-ui-layout` into views
//! on a [`trellis_core::ViewHost`], recycling views across passes by reuse id.

mod animation;
mod materialize;
mod recycler;

pub use animation::*;
pub use materialize::*;
pub use recycler::*;

pub mod prelude {
    pub use crate::animation::{Animation, Transition};
    pub use crate::materialize::Materialize;
    pub use crate::recycler::ViewRecycler;
    pub use trellis_core::prelude::*;
    pub use trellis_ui_graphics::prelude::*;
    pub use trellis_ui_layout::prelude::*;
}

#[cfg(test)]
#[path = "tests/recycler_tests.rs"]
mod recycler_tests;

#[cfg(test)]
#[path = "tests/materialize_tests.rs"]
mod materialize_tests;

#[cfg(test)]
#[path = "tests/animation_tests.rs"]
mod animation_tests;
