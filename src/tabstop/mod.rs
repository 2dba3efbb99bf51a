//! Tab-stop navigation through inserted templates

mod args;
mod session;

pub use args::{argument_template, Parameter, SignatureLookup};
pub use session::{search_target, LineSpan, SessionKind, SessionState, TabStopSession};
