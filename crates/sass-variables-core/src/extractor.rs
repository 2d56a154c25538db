//! # Extractor - Variable Declarations
//!
//! Scans comment-stripped source line by line and collects `$name: value;`
//! declarations into a [`VariableMap`].
//!
//! Lines are trimmed and concatenated, with nothing in between, into a pending
//! buffer until the buffer holds a complete declaration:
//!
//! ```text
//! "$color:"   → pending "$color:"           (no match yet)
//! "  red;"    → pending "$color:red;"       → Declaration { color, red }
//! ```
//!
//! A match consumes the whole buffer, including anything after the final `;`.
//! Text that never completes a declaration is dropped at end of input.

use std::sync::{Arc, OnceLock};

use regex::Regex;

use crate::case::to_camel_case;
use crate::comments::strip_comments;
use crate::resolver::resolve;
use crate::variables::VariableMap;

fn declaration_regex() -> &'static Regex {
    static DECLARATION_REGEX: OnceLock<Regex> = OnceLock::new();
    DECLARATION_REGEX
        .get_or_init(|| Regex::new(r"\$(.+?):\s*(.+);").expect("Invalid declaration regex"))
}

fn modifier_regex() -> &'static Regex {
    static MODIFIER_REGEX: OnceLock<Regex> = OnceLock::new();
    MODIFIER_REGEX
        .get_or_init(|| Regex::new(r"!default|!important").expect("Invalid modifier regex"))
}

/// A single `$key: value;` statement with its modifiers removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub key: String,
    pub value: String,
}

impl Declaration {
    /// The camel-cased alias of the key.
    pub fn alias(&self) -> String {
        to_camel_case(&self.key)
    }
}

/// Reassembles declarations that span several lines.
#[derive(Debug, Default)]
pub struct DeclarationScanner {
    pending: String,
}

impl DeclarationScanner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds one line, returning a declaration once one is complete.
    pub fn push(&mut self, line: &str) -> Option<Declaration> {
        self.pending.push_str(line.trim());

        let (key, value) = {
            let captures = declaration_regex().captures(&self.pending)?;
            let value = modifier_regex().replace_all(&captures[2], "");
            (captures[1].trim().to_string(), value.trim().to_string())
        };
        self.pending.clear();

        Some(Declaration { key, value })
    }

    /// Text buffered so far that has not formed a declaration.
    pub fn pending(&self) -> &str {
        &self.pending
    }
}

/// Extracts every variable declared in `source`.
///
/// Each variable is stored under its raw name and under its camel-cased
/// alias; both entries share one value.
pub fn extract(source: &str) -> VariableMap {
    let stripped = strip_comments(source);
    let mut scanner = DeclarationScanner::new();
    let mut variables = VariableMap::new();

    for line in stripped.split('\n') {
        let Some(declaration) = scanner.push(line) else {
            continue;
        };

        let value = Arc::new(resolve(&declaration.value));
        let alias = declaration.alias();
        log::debug!("${} = {:?} (alias {})", declaration.key, value, alias);

        variables.insert(declaration.key, Arc::clone(&value));
        variables.insert(alias, value);
    }

    if !scanner.pending().is_empty() {
        log::trace!("dropping incomplete statement {:?}", scanner.pending());
    }

    variables
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::variables::ResolvedValue;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn scan(lines: &[&str]) -> Vec<Declaration> {
        let mut scanner = DeclarationScanner::new();
        lines.iter().filter_map(|line| scanner.push(line)).collect()
    }

    fn declaration(key: &str, value: &str) -> Declaration {
        Declaration {
            key: key.to_string(),
            value: value.to_string(),
        }
    }

    #[test]
    fn single_line_declaration() {
        assert_eq!(scan(&["$foo: bar;"]), vec![declaration("foo", "bar")]);
    }

    #[test]
    fn declaration_split_over_lines() {
        let mut scanner = DeclarationScanner::new();
        assert_eq!(scanner.push("$color:"), None);
        assert_eq!(scanner.pending(), "$color:");
        assert_eq!(scanner.push("  red;"), Some(declaration("color", "red")));
        assert_eq!(scanner.pending(), "");
    }

    #[test]
    fn fragments_are_joined_without_separator() {
        assert_eq!(
            scan(&["$list: (1,", "  2,", "  3);"]),
            vec![declaration("list", "(1,2,3)")]
        );
    }

    #[rstest]
    #[case("$x: 10px !default;", "10px")]
    #[case("$x: 10px !important;", "10px")]
    #[case("$x: 1px!default !important;", "1px")]
    #[case("$x: red !DEFAULT;", "red !DEFAULT")]
    fn strips_modifiers(#[case] line: &str, #[case] expected: &str) {
        assert_eq!(scan(&[line]), vec![declaration("x", expected)]);
    }

    #[test]
    fn key_stops_at_first_colon() {
        assert_eq!(
            scan(&["$map: (key: value);"]),
            vec![declaration("map", "(key: value)")]
        );
    }

    #[test]
    fn value_runs_to_last_semicolon() {
        assert_eq!(scan(&["$a: 1; $b: 2;"]), vec![declaration("a", "1; $b: 2")]);
    }

    #[test]
    fn lines_without_declarations_keep_accumulating() {
        assert_eq!(
            scan(&["body {", "margin: 0;", "}", "$gap: 4px;"]),
            vec![declaration("gap", "4px")]
        );
    }

    #[test]
    fn extract_stores_value_under_both_keys() {
        let variables = extract("$primary-color: #333;\n");

        assert_eq!(
            variables.keys().collect::<Vec<_>>(),
            vec!["primary-color", "primaryColor"]
        );
        let raw = variables.get_shared("primary-color").unwrap();
        let alias = variables.get_shared("primaryColor").unwrap();
        assert!(Arc::ptr_eq(raw, alias));
        assert_eq!(raw.as_ref(), &ResolvedValue::from("#333"));
    }

    #[test]
    fn alias_equal_to_key_is_stored_once() {
        let variables = extract("$foo: bar;");
        assert_eq!(variables.len(), 1);
        assert_eq!(variables.get("foo"), Some(&ResolvedValue::from("bar")));
    }

    #[test]
    fn later_declaration_replaces_earlier() {
        let variables = extract("$gap: 1px;\n$gap: 2px;");
        assert_eq!(variables.get("gap"), Some(&ResolvedValue::from("2px")));
        assert_eq!(variables.len(), 1);
    }

    #[test]
    fn incomplete_trailing_statement_is_dropped() {
        let variables = extract("$a: 1;\n$b: 2");
        assert_eq!(variables.keys().collect::<Vec<_>>(), vec!["a"]);
    }

    #[test]
    fn commented_declarations_are_ignored() {
        let source = "// $hidden: 1;\n/* $also-hidden: 2;\n$still-hidden: 3; */\n$shown: 4;";
        let variables = extract(source);
        assert_eq!(variables.keys().collect::<Vec<_>>(), vec!["shown"]);
    }

    #[test]
    fn empty_source() {
        assert!(extract("").is_empty());
    }
}
