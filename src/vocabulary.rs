//! Completion vocabulary and callable signatures
//!
//! Loaded once from `vocabulary.yaml` (or the built-in table) and shared
//! behind an `Arc`. Replacing the vocabulary swaps the whole `Arc`; the
//! value itself is never mutated after construction.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::tabstop::{Parameter, SignatureLookup};

/// ```yaml
/// words: [midiToHz, sampsToSec]
/// signatures:
///   Metro:
///     - { name: time, default: "1" }
///     - { name: poly, default: "1" }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vocabulary {
    #[serde(default)]
    words: Vec<String>,
    #[serde(default)]
    signatures: BTreeMap<String, Vec<Parameter>>,
}

fn params(list: &[(&str, Option<&str>)]) -> Vec<Parameter> {
    list.iter()
        .map(|(name, default)| Parameter::new(name, *default))
        .collect()
}

impl Vocabulary {
    pub fn new(words: Vec<String>, signatures: BTreeMap<String, Vec<Parameter>>) -> Self {
        let mut vocabulary = Self { words, signatures };
        vocabulary.normalize();
        vocabulary
    }

    /// Small default table of audio objects and helper functions
    pub fn builtin() -> Self {
        let mut signatures = BTreeMap::new();
        signatures.insert(
            "Sine".to_string(),
            params(&[
                ("freq", Some("1000")),
                ("phase", Some("0")),
                ("mul", Some("1")),
                ("add", Some("0")),
            ]),
        );
        signatures.insert(
            "Phasor".to_string(),
            params(&[
                ("freq", Some("100")),
                ("phase", Some("0")),
                ("mul", Some("1")),
                ("add", Some("0")),
            ]),
        );
        signatures.insert(
            "Metro".to_string(),
            params(&[("time", Some("1")), ("poly", Some("1"))]),
        );
        signatures.insert(
            "Noise".to_string(),
            params(&[("mul", Some("1")), ("add", Some("0"))]),
        );
        signatures.insert(
            "Fader".to_string(),
            params(&[
                ("fadein", Some("0.01")),
                ("fadeout", Some("0.1")),
                ("dur", Some("0")),
                ("mul", Some("1")),
                ("add", Some("0")),
            ]),
        );
        signatures.insert(
            "Delay".to_string(),
            params(&[
                ("input", None),
                ("delay", Some("0.25")),
                ("feedback", Some("0")),
                ("maxdelay", Some("1")),
                ("mul", Some("1")),
                ("add", Some("0")),
            ]),
        );
        signatures.insert(
            "Freeverb".to_string(),
            params(&[
                ("input", None),
                ("size", Some("0.5")),
                ("damp", Some("0.5")),
                ("bal", Some("0.5")),
                ("mul", Some("1")),
                ("add", Some("0")),
            ]),
        );
        signatures.insert(
            "Pan".to_string(),
            params(&[
                ("input", None),
                ("outs", Some("2")),
                ("pan", Some("0.5")),
                ("spread", Some("0.5")),
                ("mul", Some("1")),
                ("add", Some("0")),
            ]),
        );

        let words = ["midiToHz", "midiToTranspo", "sampsToSec", "secToSamps", "Server"]
            .iter()
            .map(|w| w.to_string())
            .collect();
        Self::new(words, signatures)
    }

    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        let mut vocabulary: Self = serde_yaml::from_str(content)?;
        vocabulary.normalize();
        Ok(vocabulary)
    }

    /// Load from `path`, falling back to the built-in table when the file is
    /// missing or unreadable.
    pub fn load(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::builtin();
        };
        if !path.exists() {
            tracing::debug!("Vocabulary file not found at {}, using builtin", path.display());
            return Self::builtin();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_yaml(&content) {
                Ok(vocabulary) => {
                    tracing::info!(
                        "Loaded {} words from {}",
                        vocabulary.words.len(),
                        path.display()
                    );
                    vocabulary
                }
                Err(e) => {
                    tracing::warn!("Failed to parse vocabulary at {}: {}", path.display(), e);
                    Self::builtin()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read vocabulary at {}: {}", path.display(), e);
                Self::builtin()
            }
        }
    }

    /// Callables are completion words too; keep the list sorted and unique
    fn normalize(&mut self) {
        self.words.extend(self.signatures.keys().cloned());
        self.words.sort();
        self.words.dedup();
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Words starting with `prefix`, excluding `prefix` itself
    pub fn completions(&self, prefix: &str) -> Vec<&str> {
        if prefix.is_empty() {
            return Vec::new();
        }
        self.words
            .iter()
            .map(String::as_str)
            .filter(|w| w.starts_with(prefix) && *w != prefix)
            .collect()
    }

    pub fn is_callable(&self, name: &str) -> bool {
        self.signatures.contains_key(name)
    }
}

impl SignatureLookup for Vocabulary {
    fn signature(&self, callable: &str) -> Option<&[Parameter]> {
        self.signatures.get(callable).map(Vec::as_slice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_signatures() {
        let vocabulary = Vocabulary::builtin();
        assert_eq!(
            vocabulary.call_tip("Metro").as_deref(),
            Some("(time=1, poly=1)")
        );
        assert!(vocabulary.is_callable("Sine"));
        assert!(vocabulary.signature("sine").is_none());
    }

    #[test]
    fn test_completions_exclude_exact_match() {
        let vocabulary = Vocabulary::builtin();
        assert_eq!(vocabulary.completions("midi"), ["midiToHz", "midiToTranspo"]);
        assert!(vocabulary.completions("Sine").is_empty());
        assert!(vocabulary.completions("").is_empty());
    }

    #[test]
    fn test_from_yaml() {
        let yaml = r#"
words: [zeta, alpha]
signatures:
  Osc:
    - { name: table }
    - { name: freq, default: "440" }
"#;
        let vocabulary = Vocabulary::from_yaml(yaml).unwrap();
        assert_eq!(vocabulary.words(), ["Osc", "alpha", "zeta"]);
        assert_eq!(vocabulary.call_tip("Osc").as_deref(), Some("(table, freq=440)"));
    }

    #[test]
    fn test_load_falls_back_to_builtin() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("vocabulary.yaml");
        assert_eq!(Vocabulary::load(Some(&missing)), Vocabulary::builtin());

        std::fs::write(&missing, "words: [unclosed").unwrap();
        assert_eq!(Vocabulary::load(Some(&missing)), Vocabulary::builtin());

        std::fs::write(&missing, "words: [foo]\n").unwrap();
        assert_eq!(Vocabulary::load(Some(&missing)).words(), ["foo"]);
    }
}
