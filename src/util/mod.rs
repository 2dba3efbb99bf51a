//! Utility modules

pub mod text;

pub use text::{char_len, count_lines, indent_continuation_lines, is_identifier, is_word_char};
