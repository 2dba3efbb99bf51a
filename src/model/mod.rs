//! Application model - the complete state of one editor instance
//!
//! This module contains all the state types following the Elm Architecture pattern.

pub mod document;

pub use document::{Document, LineEdit};

use std::sync::Arc;

use crate::config::EditorConfig;
use crate::markers::{MarkerObserver, MarkerRegistry};
use crate::search::{SearchController, SearchObserver};
use crate::tabstop::{SessionKind, TabStopSession};
use crate::template::{SnippetLibrary, Template, TemplateCatalog};
use crate::vocabulary::Vocabulary;

/// The complete application model
#[derive(Debug)]
pub struct AppModel {
    /// The open document
    pub document: Document,
    /// Most recent tab-stop session. Only an `Active` one receives Tabs;
    /// a finished one is kept for inspection until the next trigger.
    pub session: Option<TabStopSession>,
    /// Line markers for the open document
    pub markers: MarkerRegistry,
    /// Find/replace state
    pub search: SearchController,
    /// Keyword templates and user snippets
    pub catalog: TemplateCatalog,
    /// Persisted editor configuration
    pub config: EditorConfig,
    /// Completion words and callable signatures, swapped as a whole
    vocabulary: Arc<Vocabulary>,
}

impl AppModel {
    pub fn new(
        document: Document,
        config: EditorConfig,
        catalog: TemplateCatalog,
        vocabulary: Arc<Vocabulary>,
    ) -> Self {
        Self {
            document,
            session: None,
            markers: MarkerRegistry::default(),
            search: SearchController::default(),
            catalog,
            config,
            vocabulary,
        }
    }

    /// Model over `text` with default config, no snippets and the
    /// built-in vocabulary
    pub fn with_text(text: &str) -> Self {
        Self::new(
            Document::with_text(text),
            EditorConfig::default(),
            TemplateCatalog::default(),
            Arc::new(Vocabulary::builtin()),
        )
    }

    /// Load everything the config points at
    pub fn from_config(document: Document, config: EditorConfig) -> Self {
        let snippets = match config.resolved_snippets_dir() {
            Some(dir) => SnippetLibrary::load_dir(&dir).unwrap_or_else(|e| {
                tracing::warn!("Failed to load snippets from {}: {}", dir.display(), e);
                SnippetLibrary::new()
            }),
            None => SnippetLibrary::new(),
        };
        let vocabulary = Vocabulary::load(config.resolved_vocabulary_file().as_deref());
        Self::new(
            document,
            config,
            TemplateCatalog::new(snippets),
            Arc::new(vocabulary),
        )
    }

    pub fn with_marker_observer(mut self, observer: Box<dyn MarkerObserver>) -> Self {
        self.markers = MarkerRegistry::new(observer);
        self
    }

    pub fn with_search_observer(mut self, observer: Box<dyn SearchObserver>) -> Self {
        self.search = SearchController::new(observer);
        self
    }

    pub fn vocabulary(&self) -> &Arc<Vocabulary> {
        &self.vocabulary
    }

    /// Swap the vocabulary; components holding the old `Arc` keep theirs
    pub fn set_vocabulary(&mut self, vocabulary: Arc<Vocabulary>) {
        tracing::info!("Vocabulary replaced ({} words)", vocabulary.words().len());
        self.vocabulary = vocabulary;
    }

    /// The session currently receiving Tabs, if any
    pub fn active_session(&self) -> Option<&TabStopSession> {
        self.session.as_ref().filter(|s| s.is_active())
    }

    /// Cancel the active session, if any
    pub fn cancel_session(&mut self) {
        if let Some(session) = self.session.as_mut() {
            session.cancel();
        }
    }

    /// Insert `template` at the caret and start navigating it.
    /// A still-active session is cancelled first.
    pub fn start_session(&mut self, template: &Template, indent_columns: usize, kind: SessionKind) {
        self.cancel_session();
        let offset = self.document.caret();
        self.session = Some(TabStopSession::begin(
            &mut self.document,
            offset,
            template,
            indent_columns,
            kind,
        ));
    }

    /// Replace the document; markers, session and search anchors belong to
    /// the old one and are dropped.
    pub fn replace_document(&mut self, document: Document) {
        self.document = document;
        self.session = None;
        self.markers.clear();
        self.search.reset();
    }

    /// Renumber markers for every structural edit since the last call
    pub fn sync_line_edits(&mut self) {
        for edit in self.document.take_line_edits() {
            if let Some((lines, onto)) = edit.absorbed() {
                self.markers.collapse(lines, onto);
            }
            self.markers.shift(edit.from_line, edit.delta);
        }
    }

    /// Cancel the session when the caret is no longer on its lines
    pub fn check_session_bounds(&mut self) {
        let line = self.document.caret_line();
        if let Some(session) = self.session.as_mut() {
            session.on_caret_moved(line);
        }
    }
}
