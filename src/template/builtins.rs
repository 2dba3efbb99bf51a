//! Control-flow skeletons keyed by language keyword
//!
//! Each blueprint continues the keyword already typed on the line, so it
//! starts with the text that follows the keyword (usually a space or `:`).

const FROM: &str = " `module` import `*`\n";

const EXEC: &str = " \"`expression`\" in `self.locals`\n";

const RAISE: &str = " Exception(\"`An exception occurred...`\")\n";

const TRY: &str = ":\n    `expression`\nexcept:\n    `print \"Ouch!\"`\n";

const IF: &str = " `expression1`:\n    `pass`\nelif `expression2`:\n    `pass`\nelse:\n    `pass`\n";

const DEF: &str = " `fname`():\n    `\"\"\"Doc string for fname function.\"\"\"`\n    `pass`\n";

const CLASS: &str = " `Cname`:\n    `\"\"\"Doc string for Cname class.\"\"\"`\n    def __init__(self):\n        `\"\"\"Doc string for __init__ function.\"\"\"`\n        `pass`\n";

const FOR: &str = " i in range(`10`):\n    `print i`\n";

const WHILE: &str = " `i` `>` `0`:\n    `i -= 1`\n    `print i`\n";

const ASSERT: &str = " `expression` `>` `0`, \"`expression should be positive`\"\n";

/// Keyword → blueprint table
pub static KEYWORD_BLUEPRINTS: &[(&str, &str)] = &[
    ("from", FROM),
    ("exec", EXEC),
    ("raise", RAISE),
    ("try", TRY),
    ("if", IF),
    ("def", DEF),
    ("class", CLASS),
    ("for", FOR),
    ("while", WHILE),
    ("assert", ASSERT),
];

/// Blueprint for `keyword`, if it has one
pub fn keyword_blueprint(keyword: &str) -> Option<&'static str> {
    KEYWORD_BLUEPRINTS
        .iter()
        .find(|(kw, _)| *kw == keyword)
        .map(|(_, blueprint)| *blueprint)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::Template;

    #[test]
    fn test_every_builtin_parses() {
        for (keyword, blueprint) in KEYWORD_BLUEPRINTS {
            let template = Template::parse(blueprint)
                .unwrap_or_else(|e| panic!("{} failed to parse: {}", keyword, e));
            assert!(template.has_placeholders(), "{} has no placeholders", keyword);
        }
    }

    #[test]
    fn test_keyword_lookup() {
        assert_eq!(keyword_blueprint("for"), Some(FOR));
        assert_eq!(keyword_blueprint("match"), None);
    }

    #[test]
    fn test_while_placeholders_in_order() {
        let t = Template::parse(WHILE).unwrap();
        assert_eq!(t.placeholders(), ["i", ">", "0", "i -= 1", "print i"]);
    }
}
