//! Text storage primitives for the engine.
//!
//! - [`TextBuffer`] / [`TextBufferMut`]: traits abstracting over buffer implementations
//! - [`RopeBuffer`]: buffer for multi-line documents (backed by `ropey::Rope`)
//! - [`Selection`]: anchor/head pair of char offsets
//!
//! Literal search lives on the [`TextBuffer`] trait so every component shares
//! one definition of "match inside a window".

mod buffer;
mod selection;

pub use buffer::{RopeBuffer, TextBuffer, TextBufferMut};
pub use selection::Selection;
