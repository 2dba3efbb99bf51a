//! Blueprint parsing
//!
//! A blueprint is plain text in which pairs of backticks mark placeholder
//! spans. Parsing strips the delimiters and records each span, left to right.

use std::fmt;
use std::ops::Range;

/// Reserved character that opens and closes a placeholder span
pub const PLACEHOLDER_DELIMITER: char = '`';

/// A parsed blueprint: insertable text plus its ordered placeholders
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    literal_text: String,
    placeholders: Vec<String>,
    /// Char ranges of each placeholder inside `literal_text`
    spans: Vec<Range<usize>>,
}

/// A piece of a template's literal text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    Literal(&'a str),
    Placeholder(&'a str),
}

impl Template {
    /// Parse a blueprint. Fails without partial output when the delimiter
    /// count is odd.
    pub fn parse(blueprint: &str) -> Result<Self, TemplateError> {
        let delimiters = blueprint
            .chars()
            .filter(|c| *c == PLACEHOLDER_DELIMITER)
            .count();
        if delimiters % 2 != 0 {
            return Err(TemplateError::Malformed { delimiters });
        }

        let mut literal_text = String::with_capacity(blueprint.len());
        let mut placeholders = Vec::with_capacity(delimiters / 2);
        let mut spans = Vec::with_capacity(delimiters / 2);

        let mut offset = 0;
        let mut open: Option<(usize, String)> = None;
        for ch in blueprint.chars() {
            if ch == PLACEHOLDER_DELIMITER {
                match open.take() {
                    Some((start, text)) => {
                        spans.push(start..offset);
                        placeholders.push(text);
                    }
                    None => open = Some((offset, String::new())),
                }
                continue;
            }
            literal_text.push(ch);
            if let Some((_, text)) = open.as_mut() {
                text.push(ch);
            }
            offset += 1;
        }

        Ok(Self {
            literal_text,
            placeholders,
            spans,
        })
    }

    /// Build a template from literal text and the placeholders it contains,
    /// locating each placeholder by a forward scan.
    pub fn from_parts(literal_text: String, placeholders: Vec<String>) -> Self {
        let chars: Vec<char> = literal_text.chars().collect();
        let mut spans = Vec::with_capacity(placeholders.len());
        let mut cursor = 0;
        for placeholder in &placeholders {
            let needle: Vec<char> = placeholder.chars().collect();
            let found = crate::util::text::find_chars(&chars[cursor..], &needle, true)
                .map(|i| cursor + i);
            let start = found.unwrap_or(cursor);
            let end = if found.is_some() {
                start + needle.len()
            } else {
                start
            };
            spans.push(start..end);
            cursor = end;
        }
        Self {
            literal_text,
            placeholders,
            spans,
        }
    }

    pub fn literal_text(&self) -> &str {
        &self.literal_text
    }

    pub fn placeholders(&self) -> &[String] {
        &self.placeholders
    }

    pub fn spans(&self) -> &[Range<usize>] {
        &self.spans
    }

    pub fn has_placeholders(&self) -> bool {
        !self.placeholders.is_empty()
    }

    /// Split the literal text into alternating literal and placeholder pieces
    pub fn segments(&self) -> Vec<Segment<'_>> {
        let byte_at = |char_idx: usize| {
            self.literal_text
                .char_indices()
                .nth(char_idx)
                .map_or(self.literal_text.len(), |(i, _)| i)
        };

        let mut segments = Vec::with_capacity(self.spans.len() * 2 + 1);
        let mut last = 0;
        for span in &self.spans {
            let (start, end) = (byte_at(span.start), byte_at(span.end));
            if start > last {
                segments.push(Segment::Literal(&self.literal_text[last..start]));
            }
            segments.push(Segment::Placeholder(&self.literal_text[start..end]));
            last = end;
        }
        if last < self.literal_text.len() {
            segments.push(Segment::Literal(&self.literal_text[last..]));
        }
        segments
    }
}

/// Errors produced while parsing a blueprint
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// Odd number of placeholder delimiters
    Malformed { delimiters: usize },
}

impl fmt::Display for TemplateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateError::Malformed { delimiters } => write!(
                f,
                "Malformed template: {} placeholder delimiters (must be even)",
                delimiters
            ),
        }
    }
}

impl std::error::Error for TemplateError {}
