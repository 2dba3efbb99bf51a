//! Tab key dispatch
//!
//! Tab is overloaded. The first matching rule wins:
//!
//! 1. an active tab-stop session whose lines hold the caret advances
//! 2. word completion for the word before the caret
//! 3. keyword template when the line is exactly a keyword
//! 4. argument fill after a known callable
//! 5. otherwise the host inserts its indent

use crate::commands::Cmd;
use crate::model::AppModel;
use crate::tabstop::{argument_template, SessionKind};
use crate::template::TemplateCatalog;
use crate::util::is_word_char;

/// What a Tab press resolves to in the current state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TabAction {
    AdvanceSession,
    Complete { prefix: String, candidates: Vec<String> },
    ExpandKeyword(String),
    FillArguments(String),
    Indent,
}

/// Decide what Tab does, without changing anything
pub fn resolve_tab(model: &AppModel) -> TabAction {
    let doc = &model.document;
    let caret_line = doc.caret_line();

    if model
        .active_session()
        .is_some_and(|s| s.bounding_range().contains(caret_line))
    {
        return TabAction::AdvanceSession;
    }

    let (_, word) = doc.word_before_caret();

    if model.config.word_completion
        && doc.char_before_caret().is_some_and(is_word_char)
        && word.chars().count() >= model.config.completion_min_prefix
    {
        let candidates: Vec<String> = model
            .vocabulary()
            .completions(&word)
            .into_iter()
            .map(str::to_string)
            .collect();
        if !candidates.is_empty() {
            return TabAction::Complete {
                prefix: word,
                candidates,
            };
        }
    }

    let line_text = doc.line_text(caret_line);
    if !word.is_empty() && line_text.trim() == word && TemplateCatalog::is_keyword(&word) {
        return TabAction::ExpandKeyword(word);
    }

    if model.vocabulary().is_callable(&word) {
        return TabAction::FillArguments(word);
    }

    TabAction::Indent
}

pub(super) fn handle_tab(model: &mut AppModel) -> Option<Cmd> {
    let action = resolve_tab(model);
    tracing::debug!(?action, "Tab");

    match action {
        TabAction::AdvanceSession => {
            let session = model.session.as_mut()?;
            session.on_tab(&mut model.document);
            Some(Cmd::Redraw)
        }
        TabAction::Complete { prefix, candidates } => {
            Some(Cmd::ShowCompletions { prefix, candidates })
        }
        TabAction::ExpandKeyword(keyword) => {
            let template = match model.catalog.keyword(&keyword)? {
                Ok(template) => template,
                Err(e) => {
                    tracing::warn!("Keyword template {} rejected: {}", keyword, e);
                    return None;
                }
            };
            let indent = model.document.indentation(model.document.caret_line());
            model.start_session(&template, indent, SessionKind::Template);
            Some(Cmd::Redraw)
        }
        TabAction::FillArguments(callable) => {
            let vocabulary = model.vocabulary().clone();
            let template = argument_template(vocabulary.as_ref(), &callable)?;
            model.start_session(&template, 0, SessionKind::ArgumentFill);
            Some(Cmd::Redraw)
        }
        TabAction::Indent => {
            // A session the caret has left is stale
            model.cancel_session();
            Some(Cmd::InsertIndent)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model_at_end(text: &str) -> AppModel {
        let mut model = AppModel::with_text(text);
        let len = model.document.len_chars();
        model.document.set_caret(len);
        model
    }

    #[test]
    fn test_resolve_keyword() {
        let model = model_at_end("    for");
        assert_eq!(resolve_tab(&model), TabAction::ExpandKeyword("for".into()));
    }

    #[test]
    fn test_keyword_must_be_whole_line() {
        let model = model_at_end("x = for");
        assert_eq!(resolve_tab(&model), TabAction::Indent);
    }

    #[test]
    fn test_resolve_completion_before_callable() {
        let model = model_at_end("midi");
        assert!(matches!(resolve_tab(&model), TabAction::Complete { .. }));

        let model = model_at_end("a = Sine");
        assert_eq!(resolve_tab(&model), TabAction::FillArguments("Sine".into()));
    }

    #[test]
    fn test_completion_can_be_disabled() {
        let mut model = model_at_end("midi");
        model.config.word_completion = false;
        assert_eq!(resolve_tab(&model), TabAction::Indent);
    }

    #[test]
    fn test_completion_min_prefix() {
        let mut model = model_at_end("mi");
        model.config.completion_min_prefix = 3;
        assert_eq!(resolve_tab(&model), TabAction::Indent);
    }

    #[test]
    fn test_plain_indent_after_whitespace() {
        let model = model_at_end("x = 1 ");
        assert_eq!(resolve_tab(&model), TabAction::Indent);
    }
}
