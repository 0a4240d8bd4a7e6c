//! Explicit tag detection
//!
//! `serde_yaml` resolves `!!name` and verbatim `!<...>` tags to plain scalars,
//! so a value such as `!!python/str 'x'` would silently become a string.
//! This scanner walks the source once before deserialization and reports
//! the first explicit tag that is not part of the YAML core schema.
//!
//! Primary tags (`!Local`) are not reported here: `serde_yaml` keeps them as
//! tagged values and the translator rejects them when it reaches them.

/// Core schema tags that resolve to native values
const CORE_TAGS: &[&str] = &["str", "int", "float", "bool", "null", "seq", "map"];

const CORE_PREFIX: &str = "tag:yaml.org,2002:";

/// An explicit tag found in the source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoundTag {
    /// Tag as written, e.g. `!!python/str`
    pub tag: String,
    /// 1-based line number
    pub line: usize,
}

/// Find the first explicit tag outside the core schema
pub fn find_unsupported_tag(source: &str) -> Option<FoundTag> {
    let mut scanner = Scanner::default();

    for (index, line) in source.lines().enumerate() {
        if let Some(tag) = scanner.scan_line(line) {
            log::debug!("unsupported tag {} on line {}", tag, index + 1);
            return Some(FoundTag {
                tag,
                line: index + 1,
            });
        }
    }

    None
}

/// Check whether an explicit tag resolves to a native value
pub fn is_core_tag(tag: &str) -> bool {
    if let Some(inner) = tag.strip_prefix("!<").and_then(|t| t.strip_suffix('>')) {
        return inner
            .strip_prefix(CORE_PREFIX)
            .map_or(false, |name| CORE_TAGS.contains(&name));
    }

    match tag.strip_prefix("!!") {
        Some(name) => CORE_TAGS.contains(&name),
        None => true,
    }
}

/// Lexical state carried across lines
#[derive(Default)]
struct Scanner {
    /// Open quote character of a multi-line quoted scalar
    quote: Option<char>,
    /// Nesting depth of flow collections
    flow_depth: usize,
    /// Indentation of the line that opened a block scalar
    block_indent: Option<usize>,
    /// Indentation of the line whose plain scalar may continue on deeper lines
    plain_indent: Option<usize>,
}

impl Scanner {
    fn scan_line(&mut self, line: &str) -> Option<String> {
        let indent = line.len() - line.trim_start_matches(' ').len();
        let content = line.trim();

        if let Some(parent) = self.block_indent {
            if content.is_empty() || indent > parent {
                return None;
            }
            self.block_indent = None;
        }

        if let Some(parent) = self.plain_indent {
            if content.is_empty() || (indent > parent && !content.starts_with('#')) {
                return None;
            }
            self.plain_indent = None;
        }

        if self.quote.is_none()
            && (content.starts_with('%') || content == "---" || content == "...")
        {
            return None;
        }

        let chars: Vec<char> = line.chars().collect();
        let mut expect_node = self.quote.is_none();
        let mut in_plain = false;
        let mut i = 0;

        while i < chars.len() {
            let c = chars[i];

            if let Some(quote) = self.quote {
                if quote == '"' && c == '\\' {
                    i += 1;
                } else if quote == '\'' && c == '\'' && chars.get(i + 1) == Some(&'\'') {
                    i += 1;
                } else if c == quote {
                    self.quote = None;
                    expect_node = false;
                }
                i += 1;
                continue;
            }

            if c.is_whitespace() {
                i += 1;
                continue;
            }

            if c == '#' && (i == 0 || chars[i - 1].is_whitespace()) {
                in_plain = false;
                break;
            }

            if expect_node {
                match c {
                    '!' => {
                        let end = self.token_end(&chars, i);
                        let tag: String = chars[i..end].iter().collect();
                        if !is_core_tag(&tag) {
                            return Some(tag);
                        }
                        i = end;
                        continue;
                    }
                    '&' => {
                        i = self.token_end(&chars, i);
                        continue;
                    }
                    '"' | '\'' => {
                        in_plain = false;
                        self.quote = Some(c);
                        i += 1;
                        continue;
                    }
                    '|' | '>' if is_block_header(&chars[i + 1..]) => {
                        self.block_indent = Some(indent);
                        return None;
                    }
                    '[' | '{' => {
                        self.flow_depth += 1;
                        i += 1;
                        continue;
                    }
                    _ => in_plain = self.flow_depth == 0,
                }
            }

            expect_node = match c {
                ']' | '}' if self.flow_depth > 0 => {
                    self.flow_depth -= 1;
                    false
                }
                ',' if self.flow_depth > 0 => true,
                ':' | '-' | '?' if chars.get(i + 1).map_or(true, |n| n.is_whitespace()) => {
                    in_plain = false;
                    true
                }
                _ => false,
            };
            i += 1;
        }

        if in_plain && self.quote.is_none() && self.flow_depth == 0 {
            self.plain_indent = Some(indent);
        }

        None
    }

    /// End index of a tag or anchor token starting at `start`
    fn token_end(&self, chars: &[char], start: usize) -> usize {
        if chars.get(start + 1) == Some(&'<') {
            return chars[start..]
                .iter()
                .position(|&c| c == '>')
                .map_or(chars.len(), |offset| start + offset + 1);
        }

        let mut end = start + 1;
        while end < chars.len() {
            let c = chars[end];
            if c.is_whitespace() || (self.flow_depth > 0 && matches!(c, ',' | '[' | ']' | '{' | '}')) {
                break;
            }
            end += 1;
        }
        end
    }
}

/// Check that the rest of a line after `|` or `>` is a block scalar header
fn is_block_header(rest: &[char]) -> bool {
    let rest: String = rest.iter().collect();
    let rest = rest
        .trim_start_matches(|c: char| c == '+' || c == '-' || c.is_ascii_digit())
        .trim_start();
    rest.is_empty() || rest.starts_with('#')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tag_of(source: &str) -> Option<String> {
        find_unsupported_tag(source).map(|found| found.tag)
    }

    #[test]
    fn test_flags_python_tag() {
        let yaml = "InvalidValue:\n  SomeKey: !!python/str 'undefined'\n";
        let found = find_unsupported_tag(yaml).unwrap();
        assert_eq!(found.tag, "!!python/str");
        assert_eq!(found.line, 2);
    }

    #[test]
    fn test_flags_non_core_secondary_tags() {
        assert_eq!(tag_of("Data: !!binary aGVsbG8=\n"), Some("!!binary".to_string()));
        assert_eq!(tag_of("When: !!timestamp 2001-12-14\n"), Some("!!timestamp".to_string()));
    }

    #[test]
    fn test_flags_verbatim_tag() {
        assert_eq!(
            tag_of("Key: !<tag:example.com,2024:thing> x\n"),
            Some("!<tag:example.com,2024:thing>".to_string())
        );
        assert_eq!(tag_of("Key: !<tag:yaml.org,2002:str> x\n"), None);
    }

    #[test]
    fn test_allows_core_tags() {
        let yaml = "A: !!str 123\nB: !!int \"7\"\nC: !!float 1\nD: !!seq [1]\n";
        assert_eq!(tag_of(yaml), None);
    }

    #[test]
    fn test_leaves_primary_tags_alone() {
        assert_eq!(tag_of("Key: !Custom value\n"), None);
        assert_eq!(tag_of("Key: ! value\n"), None);
    }

    #[test]
    fn test_ignores_tags_in_quotes() {
        assert_eq!(tag_of("Key: \"!!python/str\"\n"), None);
        assert_eq!(tag_of("Key: '!!python/str'\n"), None);
        assert_eq!(tag_of("Key: 'it''s !!fine'\n"), None);
        assert_eq!(tag_of("Key: \"a \\\" !!b\"\n"), None);
    }

    #[test]
    fn test_ignores_tags_in_multiline_quotes() {
        let yaml = "Key: \"first line\n  !!python/str\"\nOther: 1\n";
        assert_eq!(tag_of(yaml), None);
    }

    #[test]
    fn test_ignores_comments_and_plain_scalars() {
        assert_eq!(tag_of("Key: 1 # !!python/str\n"), None);
        assert_eq!(tag_of("# !!python/str\nKey: 1\n"), None);
        assert_eq!(tag_of("Key: wow!!python/str\n"), None);
        assert_eq!(tag_of("Key: hello !!python/str\n"), None);
        assert_eq!(tag_of("Key: hello\n  !!python/str world\n"), None);
        assert_eq!(tag_of("- item\n  !!python/str more\n"), None);
    }

    #[test]
    fn test_plain_continuation_ends_at_sibling_key() {
        let yaml = "Key: hello\n  !!python/str world\n\n  again\nNext: !!python/int 1\n";
        let found = find_unsupported_tag(yaml).unwrap();
        assert_eq!(found.tag, "!!python/int");
        assert_eq!(found.line, 5);
    }

    #[test]
    fn test_value_on_next_line_is_scanned() {
        assert_eq!(tag_of("Key:\n  !!python/str x\n"), Some("!!python/str".to_string()));
        assert_eq!(tag_of("-\n  !!python/str x\n"), Some("!!python/str".to_string()));
        assert_eq!(tag_of("Key: a # note\n  !!python/str x\n"), Some("!!python/str".to_string()));
    }

    #[test]
    fn test_ignores_block_scalars() {
        let yaml = "Text: |\n  !!python/str inside\n  more\nNext: !!python/int 1\n";
        let found = find_unsupported_tag(yaml).unwrap();
        assert_eq!(found.tag, "!!python/int");
        assert_eq!(found.line, 4);
    }

    #[test]
    fn test_flags_tags_in_flow_and_block_sequences() {
        assert_eq!(tag_of("Ports: [1, !!python/int 2]\n"), Some("!!python/int".to_string()));
        assert_eq!(tag_of("Map: {a: !!set x}\n"), Some("!!set".to_string()));
        assert_eq!(tag_of("Items:\n  - !!python/none\n"), Some("!!python/none".to_string()));
    }

    #[test]
    fn test_tag_after_anchor() {
        assert_eq!(tag_of("Key: &anchor !!python/str x\n"), Some("!!python/str".to_string()));
    }

    #[test]
    fn test_is_core_tag() {
        assert!(is_core_tag("!!str"));
        assert!(is_core_tag("!Local"));
        assert!(!is_core_tag("!!omap"));
        assert!(!is_core_tag("!<!local>"));
    }
}
