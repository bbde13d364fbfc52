//! Output of rendered documents
//!
//! Documents go either to stdout or to one `<name>.tf` file each.

mod writer;

pub use writer::{OutputTarget, RenderedDocument};
