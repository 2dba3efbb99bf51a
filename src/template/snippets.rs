//! User-authored snippets stored as declarative YAML records
//!
//! Layout on disk: `<root>/<category>/<name>.yaml`, each file holding
//!
//! ```yaml
//! value: "for `i` in range(`4`):\n    `pass`\n"
//! shortcut: Shift-Ctrl-F
//! ```
//!
//! Records are parsed as data, never evaluated.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use super::shortcut::{parse_shortcut, Keystroke};

const SNIPPET_EXTENSION: &str = "yaml";

/// On-disk snippet record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnippetRecord {
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shortcut: Option<String>,
}

/// A loaded snippet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snippet {
    pub category: String,
    pub name: String,
    /// Raw blueprint
    pub value: String,
    pub shortcut: Option<Keystroke>,
}

/// Snippets grouped by category, both sorted by name
#[derive(Debug, Clone, Default)]
pub struct SnippetLibrary {
    root: Option<PathBuf>,
    categories: BTreeMap<String, BTreeMap<String, Snippet>>,
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.starts_with('.'))
}

/// Category and snippet names become path components under the root, so
/// anything that could leave its directory is refused.
fn check_name(kind: &str, name: &str) -> Result<(), SnippetError> {
    if name.is_empty() || name.starts_with('.') || name.contains(|c| c == '/' || c == '\\') {
        return Err(SnippetError::Io(format!("Invalid {} name: {:?}", kind, name)));
    }
    Ok(())
}

impl SnippetLibrary {
    /// An empty in-memory library
    pub fn new() -> Self {
        Self::default()
    }

    /// Load every snippet under `root`. A missing directory yields an empty
    /// library bound to `root`; unreadable records are skipped with a warning.
    pub fn load_dir(root: &Path) -> Result<Self, SnippetError> {
        let mut library = Self {
            root: Some(root.to_path_buf()),
            categories: BTreeMap::new(),
        };

        if !root.is_dir() {
            tracing::debug!("Snippet directory {} not found", root.display());
            return Ok(library);
        }

        for entry in fs::read_dir(root).map_err(|e| SnippetError::Io(e.to_string()))? {
            let path = entry.map_err(|e| SnippetError::Io(e.to_string()))?.path();
            if !path.is_dir() || is_hidden(&path) {
                continue;
            }
            let Some(category) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            library.categories.entry(category.to_string()).or_default();

            for file in fs::read_dir(&path).map_err(|e| SnippetError::Io(e.to_string()))? {
                let file = file.map_err(|e| SnippetError::Io(e.to_string()))?.path();
                if !file.is_file() || is_hidden(&file) {
                    continue;
                }
                match load_snippet_file(category, &file) {
                    Ok(snippet) => library.insert(snippet),
                    Err(e) => tracing::warn!("Skipping snippet {}: {}", file.display(), e),
                }
            }
        }

        tracing::info!(
            "Loaded {} snippets in {} categories from {}",
            library.len(),
            library.categories.len(),
            root.display()
        );
        Ok(library)
    }

    pub fn root(&self) -> Option<&Path> {
        self.root.as_deref()
    }

    pub fn len(&self) -> usize {
        self.categories.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.categories.keys().map(String::as_str)
    }

    pub fn snippets(&self, category: &str) -> impl Iterator<Item = &Snippet> {
        self.categories
            .get(category)
            .into_iter()
            .flat_map(|snippets| snippets.values())
    }

    pub fn get(&self, category: &str, name: &str) -> Option<&Snippet> {
        self.categories.get(category)?.get(name)
    }

    pub fn find_by_shortcut(&self, keystroke: &Keystroke) -> Option<&Snippet> {
        self.categories
            .values()
            .flat_map(|snippets| snippets.values())
            .find(|s| s.shortcut.as_ref() == Some(keystroke))
    }

    /// Add or replace a snippet in memory
    pub fn insert(&mut self, snippet: Snippet) {
        self.categories
            .entry(snippet.category.clone())
            .or_default()
            .insert(snippet.name.clone(), snippet);
    }

    /// Create a category (and its directory when the library is disk-backed)
    pub fn add_category(&mut self, category: &str) -> Result<(), SnippetError> {
        check_name("category", category)?;
        if let Some(root) = &self.root {
            fs::create_dir_all(root.join(category)).map_err(|e| SnippetError::Io(e.to_string()))?;
        }
        self.categories.entry(category.to_string()).or_default();
        Ok(())
    }

    /// Remove a category with all of its snippets
    pub fn remove_category(&mut self, category: &str) -> Result<(), SnippetError> {
        check_name("category", category)?;
        if let Some(root) = &self.root {
            let dir = root.join(category);
            if dir.is_dir() {
                fs::remove_dir_all(&dir).map_err(|e| SnippetError::Io(e.to_string()))?;
            }
        }
        self.categories.remove(category);
        Ok(())
    }

    /// Save a snippet, writing its record when the library is disk-backed
    pub fn save(
        &mut self,
        category: &str,
        name: &str,
        value: &str,
        shortcut: Option<&str>,
    ) -> Result<(), SnippetError> {
        check_name("category", category)?;
        check_name("snippet", name)?;
        let shortcut = shortcut.filter(|s| !s.trim().is_empty());
        let keystroke = match shortcut {
            Some(s) => parse_shortcut(s).map_err(|e| SnippetError::Shortcut(e.to_string()))?,
            None => None,
        };

        if let Some(root) = &self.root {
            let dir = root.join(category);
            fs::create_dir_all(&dir).map_err(|e| SnippetError::Io(e.to_string()))?;
            let record = SnippetRecord {
                value: value.to_string(),
                shortcut: shortcut.map(str::to_string),
            };
            let content =
                serde_yaml::to_string(&record).map_err(|e| SnippetError::Parse(e.to_string()))?;
            let path = dir.join(format!("{}.{}", name, SNIPPET_EXTENSION));
            fs::write(&path, content).map_err(|e| SnippetError::Io(e.to_string()))?;
            tracing::info!("Saved snippet to {}", path.display());
        }

        self.insert(Snippet {
            category: category.to_string(),
            name: name.to_string(),
            value: value.to_string(),
            shortcut: keystroke,
        });
        Ok(())
    }

    /// Remove a snippet; no-op when it does not exist
    pub fn remove(&mut self, category: &str, name: &str) -> Result<(), SnippetError> {
        check_name("category", category)?;
        check_name("snippet", name)?;
        if let Some(root) = &self.root {
            let path = root
                .join(category)
                .join(format!("{}.{}", name, SNIPPET_EXTENSION));
            if path.is_file() {
                fs::remove_file(&path).map_err(|e| SnippetError::Io(e.to_string()))?;
            }
        }
        if let Some(snippets) = self.categories.get_mut(category) {
            snippets.remove(name);
        }
        Ok(())
    }
}

fn load_snippet_file(category: &str, path: &Path) -> Result<Snippet, SnippetError> {
    let name = path
        .file_stem()
        .and_then(|n| n.to_str())
        .ok_or_else(|| SnippetError::Io(format!("Invalid file name: {}", path.display())))?;
    let content = fs::read_to_string(path).map_err(|e| SnippetError::Io(e.to_string()))?;
    let record: SnippetRecord =
        serde_yaml::from_str(&content).map_err(|e| SnippetError::Parse(e.to_string()))?;

    let shortcut = match record.shortcut.as_deref() {
        Some(s) => match parse_shortcut(s) {
            Ok(keystroke) => keystroke,
            Err(e) => {
                tracing::warn!("Ignoring shortcut of snippet {}: {}", name, e);
                None
            }
        },
        None => None,
    };

    Ok(Snippet {
        category: category.to_string(),
        name: name.to_string(),
        value: record.value,
        shortcut,
    })
}

/// Errors that can occur when loading or saving snippets
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnippetError {
    Io(String),
    Parse(String),
    Shortcut(String),
}

impl fmt::Display for SnippetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SnippetError::Io(e) => write!(f, "IO error: {}", e),
            SnippetError::Parse(e) => write!(f, "Parse error: {}", e),
            SnippetError::Shortcut(e) => write!(f, "Shortcut error: {}", e),
        }
    }
}

impl std::error::Error for SnippetError {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::shortcut::Modifiers;

    #[test]
    fn test_load_missing_dir_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let library = SnippetLibrary::load_dir(&dir.path().join("nope")).unwrap();
        assert!(library.is_empty());
    }

    #[test]
    fn test_save_then_reload() {
        let dir = tempfile::tempdir().unwrap();
        let mut library = SnippetLibrary::load_dir(dir.path()).unwrap();
        library
            .save("Audio", "metro", "m = Metro(`0.125`).play()\n", Some("Shift-XCtrl-M"))
            .unwrap();
        library.save("Audio", "sine", "Sine(`440`)", None).unwrap();

        let reloaded = SnippetLibrary::load_dir(dir.path()).unwrap();
        assert_eq!(reloaded.len(), 2);
        assert_eq!(reloaded.categories().collect::<Vec<_>>(), ["Audio"]);

        let metro = reloaded.get("Audio", "metro").unwrap();
        assert_eq!(metro.value, "m = Metro(`0.125`).play()\n");
        let keystroke = Keystroke::new('m', Modifiers::SHIFT | Modifiers::CTRL);
        assert_eq!(metro.shortcut, Some(keystroke));
        assert_eq!(reloaded.find_by_shortcut(&keystroke).unwrap().name, "metro");
        assert_eq!(reloaded.get("Audio", "sine").unwrap().shortcut, None);
    }

    #[test]
    fn test_malformed_record_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let category = dir.path().join("Misc");
        fs::create_dir_all(&category).unwrap();
        fs::write(category.join("good.yaml"), "value: ok\n").unwrap();
        fs::write(category.join("bad.yaml"), "value: [unclosed\n").unwrap();
        fs::write(category.join(".hidden.yaml"), "value: hidden\n").unwrap();

        let library = SnippetLibrary::load_dir(dir.path()).unwrap();
        assert_eq!(library.len(), 1);
        assert!(library.get("Misc", "good").is_some());
    }

    #[test]
    fn test_remove_snippet_and_category() {
        let dir = tempfile::tempdir().unwrap();
        let mut library = SnippetLibrary::load_dir(dir.path()).unwrap();
        library.save("A", "one", "1", None).unwrap();
        library.save("B", "two", "2", None).unwrap();

        library.remove("A", "one").unwrap();
        assert!(library.get("A", "one").is_none());
        assert!(!dir.path().join("A").join("one.yaml").exists());

        library.remove_category("B").unwrap();
        assert!(!dir.path().join("B").exists());
        assert_eq!(library.categories().collect::<Vec<_>>(), ["A"]);
    }

    #[test]
    fn test_save_rejects_bad_shortcut() {
        let mut library = SnippetLibrary::new();
        let err = library.save("A", "x", "x", Some("Shift-??")).unwrap_err();
        assert!(matches!(err, SnippetError::Shortcut(_)));
        assert!(library.is_empty());
    }

    #[test]
    fn test_names_cannot_escape_the_root() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("snippets");
        let mut library = SnippetLibrary::load_dir(&root).unwrap();
        library.save("A", "keep", "1", None).unwrap();
        fs::write(dir.path().join("outside.yaml"), "value: x\n").unwrap();

        for bad in ["", ".", "..", "../A", "a/b", "a\\b", ".hidden"] {
            assert!(matches!(
                library.save(bad, "x", "x", None),
                Err(SnippetError::Io(_))
            ));
            assert!(matches!(
                library.save("A", bad, "x", None),
                Err(SnippetError::Io(_))
            ));
            assert!(library.add_category(bad).is_err());
            assert!(library.remove_category(bad).is_err());
        }
        assert!(library.remove("A", "../../outside").is_err());
        assert!(library.remove("..", "outside").is_err());

        assert!(dir.path().join("outside.yaml").exists());
        assert!(root.join("A").join("keep.yaml").exists());
        assert_eq!(library.len(), 1);
    }
}
