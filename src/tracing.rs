//! Debug tracing infrastructure for development diagnostics
//!
//! Provides structured logging with scoped filtering for debugging
//! tab-stop sessions, marker renumbering and search anchors.
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=state=debug` - one line per message that changed editor state
//! - `RUST_LOG=tabstop::tabstop=trace` - module-level filtering
//!
//! # Log Files
//!
//! Logs are written to `~/.config/tabstop/logs/tabstop.log` with daily rotation.
//! File logging uses debug level by default for more verbose troubleshooting.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::model::AppModel;
use crate::tabstop::SessionState;

/// Initialize tracing subscriber with console and file logging
///
/// Console output goes to stderr and respects RUST_LOG (default `warn`).
/// File logging writes to `~/.config/tabstop/logs/tabstop.log` with daily rotation.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // Console layer - respects RUST_LOG; stdout is reserved for output
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    // File layer - always debug level for troubleshooting
    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, "tabstop.log");
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

/// Lightweight snapshot of editor state for diffing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateSnapshot {
    pub anchor: usize,
    pub head: usize,
    pub caret_line: usize,
    pub revision: u64,
    pub session: Option<SessionState>,
    pub remaining_placeholders: usize,
    pub marker_lines: Vec<usize>,
}

impl StateSnapshot {
    pub fn from_model(model: &AppModel) -> Self {
        let selection = model.document.selection();
        Self {
            anchor: selection.anchor,
            head: selection.head,
            caret_line: model.document.caret_line(),
            revision: model.document.revision,
            session: model.session.as_ref().map(|s| s.state()),
            remaining_placeholders: model
                .session
                .as_ref()
                .map_or(0, |s| s.remaining().count()),
            marker_lines: model.markers.lines(),
        }
    }

    /// Generate a diff description between two snapshots
    pub fn diff(&self, other: &StateSnapshot) -> Option<String> {
        let mut changes = Vec::new();

        if (self.anchor, self.head) != (other.anchor, other.head) {
            changes.push(format!(
                "selection {}..{} → {}..{}",
                self.anchor, self.head, other.anchor, other.head
            ));
        }
        if self.revision != other.revision {
            changes.push(format!("revision {} → {}", self.revision, other.revision));
        }
        if self.session != other.session
            || self.remaining_placeholders != other.remaining_placeholders
        {
            changes.push(format!(
                "session {:?}/{} → {:?}/{}",
                self.session,
                self.remaining_placeholders,
                other.session,
                other.remaining_placeholders
            ));
        }
        if self.marker_lines != other.marker_lines {
            changes.push(format!(
                "markers {:?} → {:?}",
                self.marker_lines, other.marker_lines
            ));
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}
