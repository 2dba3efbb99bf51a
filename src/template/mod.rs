//! Template catalog: turns blueprints into insertable templates.
//!
//! Two blueprint sources feed the same parser:
//! - the built-in keyword table ([`builtins`])
//! - user snippets loaded from disk ([`SnippetLibrary`])

pub mod builtins;
mod parser;
pub mod shortcut;
mod snippets;

pub use parser::{Segment, Template, TemplateError, PLACEHOLDER_DELIMITER};
pub use shortcut::{parse_shortcut, Keystroke, Modifiers, ShortcutError};
pub use snippets::{Snippet, SnippetError, SnippetLibrary, SnippetRecord};

/// Blueprint sources available to the editor
#[derive(Debug, Clone, Default)]
pub struct TemplateCatalog {
    snippets: SnippetLibrary,
}

impl TemplateCatalog {
    pub fn new(snippets: SnippetLibrary) -> Self {
        Self { snippets }
    }

    /// Parse a blueprint (pure; no side effects)
    pub fn parse(blueprint: &str) -> Result<Template, TemplateError> {
        Template::parse(blueprint)
    }

    pub fn is_keyword(word: &str) -> bool {
        builtins::keyword_blueprint(word).is_some()
    }

    /// Template for a language keyword
    pub fn keyword(&self, keyword: &str) -> Option<Result<Template, TemplateError>> {
        builtins::keyword_blueprint(keyword).map(Template::parse)
    }

    /// Template for a stored snippet
    pub fn snippet(&self, category: &str, name: &str) -> Option<Result<Template, TemplateError>> {
        self.snippets
            .get(category, name)
            .map(|s| Template::parse(&s.value))
    }

    pub fn snippet_for_shortcut(&self, keystroke: &Keystroke) -> Option<&Snippet> {
        self.snippets.find_by_shortcut(keystroke)
    }

    pub fn snippets(&self) -> &SnippetLibrary {
        &self.snippets
    }

    pub fn snippets_mut(&mut self) -> &mut SnippetLibrary {
        &mut self.snippets
    }
}
