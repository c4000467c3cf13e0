//! Built-in layout node kinds.

mod auto_rotate;
mod inset;
mod label;
mod overlay;
mod size;
mod stack;
mod text_view;

pub use auto_rotate::*;
pub use inset::*;
pub use label::*;
pub use overlay::*;
pub use size::*;
pub use stack::*;
pub use text_view::*;
