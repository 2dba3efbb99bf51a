//! tabstop - snippet expansion and tab-stop navigation for code editors
//!
//! This crate provides the editor-side engine for inserting templates and
//! tabbing through their placeholders, along with two collaborators that
//! share the same buffer: a line-marker registry that follows structural
//! edits, and an anchored find/replace controller. State changes follow
//! the Elm Architecture pattern (`Msg` in, `Cmd` out).

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod editable;
pub mod markers;
pub mod messages;
pub mod model;
pub mod search;
pub mod tabstop;
pub mod template;
pub mod tracing;
pub mod update;
pub mod util;
pub mod vocabulary;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::EditorConfig;
pub use messages::Msg;
pub use model::AppModel;
