//! Utility functions for text editing

/// Check if a character belongs to a word (identifier-ish)
pub fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}

/// Check if `s` is a non-empty run of word characters
pub fn is_identifier(s: &str) -> bool {
    !s.is_empty() && s.chars().all(is_word_char)
}

fn chars_eq(a: char, b: char, case_sensitive: bool) -> bool {
    if case_sensitive || a == b {
        a == b
    } else {
        a.to_lowercase().eq(b.to_lowercase())
    }
}

fn matches_at(haystack: &[char], needle: &[char], at: usize, case_sensitive: bool) -> bool {
    haystack[at..at + needle.len()]
        .iter()
        .zip(needle)
        .all(|(a, b)| chars_eq(*a, *b, case_sensitive))
}

/// Index of the first occurrence of `needle` in `haystack`
pub fn find_chars(haystack: &[char], needle: &[char], case_sensitive: bool) -> Option<usize> {
    if needle.is_empty() || needle.len() > haystack.len() {
        return None;
    }
    (0..=haystack.len() - needle.len()).find(|&i| matches_at(haystack, needle, i, case_sensitive))
}

/// Index of the last occurrence of `needle` in `haystack`
pub fn rfind_chars(haystack: &[char], needle: &[char], case_sensitive: bool) -> Option<usize> {
    if needle.is_empty() || needle.len() > haystack.len() {
        return None;
    }
    (0..=haystack.len() - needle.len())
        .rev()
        .find(|&i| matches_at(haystack, needle, i, case_sensitive))
}

/// Number of lines in `text`, counted like a line splitter:
/// a trailing newline does not start another line, and "" has zero lines.
pub fn count_lines(text: &str) -> usize {
    if text.is_empty() {
        return 0;
    }
    let newlines = text.matches('\n').count();
    if text.ends_with('\n') {
        newlines
    } else {
        newlines + 1
    }
}

/// Prefix every line after the first with `indent` spaces
pub fn indent_continuation_lines(text: &str, indent: usize) -> String {
    if indent == 0 {
        return text.to_string();
    }
    let pad = " ".repeat(indent);
    let mut out = String::with_capacity(text.len() + pad.len() * count_lines(text));
    for (i, line) in text.split_inclusive('\n').enumerate() {
        if i > 0 {
            out.push_str(&pad);
        }
        out.push_str(line);
    }
    out
}

/// Char length of a string
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_find_and_rfind_chars() {
        let hay = chars("abcabc");
        assert_eq!(find_chars(&hay, &chars("bc"), true), Some(1));
        assert_eq!(rfind_chars(&hay, &chars("bc"), true), Some(4));
        assert_eq!(find_chars(&hay, &chars("BC"), true), None);
        assert_eq!(find_chars(&hay, &chars("BC"), false), Some(1));
        assert_eq!(find_chars(&hay, &chars(""), true), None);
        assert_eq!(find_chars(&chars("ab"), &chars("abc"), true), None);
    }

    #[test]
    fn test_count_lines() {
        assert_eq!(count_lines(""), 0);
        assert_eq!(count_lines("x"), 1);
        assert_eq!(count_lines("x\n"), 1);
        assert_eq!(count_lines("x\ny"), 2);
        assert_eq!(count_lines("x\ny\n"), 2);
        assert_eq!(count_lines("\n\n"), 2);
    }

    #[test]
    fn test_indent_continuation_lines() {
        assert_eq!(
            indent_continuation_lines("a:\n    b\n", 4),
            "a:\n        b\n"
        );
        assert_eq!(indent_continuation_lines("a\nb", 0), "a\nb");
        assert_eq!(indent_continuation_lines("single", 8), "single");
    }

    #[test]
    fn test_is_identifier() {
        assert!(is_identifier("freq"));
        assert!(is_identifier("mul_2"));
        assert!(!is_identifier("i -"));
        assert!(!is_identifier(""));
    }
}
