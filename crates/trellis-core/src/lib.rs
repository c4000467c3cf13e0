//! View system interface for Trellis
//!
//! Views are owned by a [`ViewHost`] and addressed by [`ViewId`]. The host
//! stores the hierarchy, frames and reuse tags; views themselves only carry
//! their kind-specific content.

pub mod collections;
mod host;
mod view;
mod views;

pub use host::*;
pub use view::*;
pub use views::*;

pub mod prelude {
    pub use crate::host::{MemoryViewHost, ViewError, ViewHost};
    pub use crate::view::{LayoutDirection, ReuseId, View, ViewId, ViewTag};
    pub use crate::views::{ContainerView, LabelView, TextView};
}

#[cfg(test)]
#[path = "tests/host_tests.rs"]
mod tests;
