//! Grid geometry primitives

pub mod line;
pub mod key;

pub use line::{rasterize, Line};
pub use key::{CellKey, KeyCodec};
