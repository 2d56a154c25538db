//! # Matcher - Nested Delimiter Spans
//!
//! Finds every top-level span enclosed by an opener/closer pair, allowing the
//! pair to nest to any depth inside the span:
//!
//! ```text
//! "(t(e)s)()t"   with (...)   → ["t(e)s", ""]
//! "t<<e>>st"     with <...>   → ["<e>"]
//! "<|t<e<|s|>t|>" with <|...|> → ["t<e<|s|>t"]
//! ```
//!
//! Only the outermost level is reported. Deeper levels are reached by matching
//! again on a captured span, which is what [`crate::resolver`] does.
//!
//! ## Scanning
//!
//! The text is walked once, left to right, by a `TokenScanner`. At every
//! position the opener is tried before the closer, so when the two tokens
//! overlap the opener wins. A depth counter tracks nesting; closers seen at
//! depth zero are plain text.
//!
//! A pass that ends with openers still pending has no closer for its last
//! top-level opener. The scan then resumes just past that opener with the
//! counter reset, so the unclosed opener is treated as text and any balanced
//! spans after it are still found. Every resume point lies strictly after the
//! previous one, so the loop terminates.

use std::ops::Range;
use std::str::FromStr;

use crate::error::ConfigurationError;

/// Separator between the opener and closer in a format descriptor.
pub const FORMAT_SEPARATOR: &str = "...";

/// An opener/closer pair, e.g. `(` and `)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delimiters {
    opener: String,
    closer: String,
}

impl Delimiters {
    /// Creates a pair from explicit tokens.
    pub fn new(
        opener: impl Into<String>,
        closer: impl Into<String>,
    ) -> Result<Self, ConfigurationError> {
        let opener = opener.into();
        let closer = closer.into();

        if opener.is_empty() || closer.is_empty() {
            return Err(ConfigurationError::EmptyToken);
        }
        if opener == closer {
            return Err(ConfigurationError::IdenticalTokens(opener));
        }

        Ok(Self { opener, closer })
    }

    /// Parses a `"<opener>...<closer>"` format descriptor.
    ///
    /// The opener is the shortest non-empty prefix followed by `...` that
    /// still leaves a non-empty closer, so `"a...b...c"` yields `a` and `b...c`.
    pub fn parse(format: &str) -> Result<Self, ConfigurationError> {
        let (opener, closer) = split_format(format)
            .ok_or_else(|| ConfigurationError::MissingSeparator(format.to_string()))?;
        Self::new(opener, closer)
    }

    /// The `(`/`)` pair used for SCSS lists.
    pub fn parens() -> Self {
        Self {
            opener: "(".to_string(),
            closer: ")".to_string(),
        }
    }

    pub fn opener(&self) -> &str {
        &self.opener
    }

    pub fn closer(&self) -> &str {
        &self.closer
    }

    /// Byte ranges of the contents of every balanced top-level span, in order.
    ///
    /// Ranges exclude the delimiters themselves.
    pub fn spans(&self, text: &str) -> Vec<Range<usize>> {
        let mut spans = Vec::new();
        let mut resume = 0;

        loop {
            let mut depth = 0usize;
            let mut start = resume;

            for token in TokenScanner::new(text, resume, &self.opener, &self.closer) {
                match token {
                    Token::Open { end } => {
                        if depth == 0 {
                            start = end;
                        }
                        depth += 1;
                    }
                    Token::Close { at } => {
                        if depth == 0 {
                            continue;
                        }
                        depth -= 1;
                        if depth == 0 {
                            spans.push(start..at);
                        }
                    }
                }
            }

            if depth == 0 {
                return spans;
            }

            log::trace!(
                "unbalanced {:?} at byte {}, rescanning past it",
                self.opener,
                start - self.opener.len()
            );
            resume = start;
        }
    }

    /// Contents of every balanced top-level span, in order.
    pub fn find(&self, text: &str) -> Vec<String> {
        self.spans(text)
            .into_iter()
            .map(|span| text[span].to_string())
            .collect()
    }
}

impl FromStr for Delimiters {
    type Err = ConfigurationError;

    fn from_str(format: &str) -> Result<Self, Self::Err> {
        Self::parse(format)
    }
}

/// Matches `text` against a `"<opener>...<closer>"` format, returning the
/// contents of every top-level span.
pub fn match_recursive(text: &str, format: &str) -> Result<Vec<String>, ConfigurationError> {
    Ok(Delimiters::parse(format)?.find(text))
}

fn split_format(format: &str) -> Option<(&str, &str)> {
    format.char_indices().skip(1).find_map(|(i, _)| {
        let rest = &format[i..];
        if rest.starts_with(FORMAT_SEPARATOR) && rest.len() > FORMAT_SEPARATOR.len() {
            Some((&format[..i], &rest[FORMAT_SEPARATOR.len()..]))
        } else {
            None
        }
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token {
    /// An opener; `end` is the byte just past it.
    Open { end: usize },
    /// A closer starting at byte `at`.
    Close { at: usize },
}

/// Yields opener and closer occurrences from a starting byte offset.
struct TokenScanner<'a> {
    text: &'a str,
    pos: usize,
    opener: &'a str,
    closer: &'a str,
}

impl<'a> TokenScanner<'a> {
    fn new(text: &'a str, pos: usize, opener: &'a str, closer: &'a str) -> Self {
        Self {
            text,
            pos,
            opener,
            closer,
        }
    }
}

impl Iterator for TokenScanner<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        while let Some(rest) = self.text.get(self.pos..).filter(|rest| !rest.is_empty()) {
            if rest.starts_with(self.opener) {
                self.pos += self.opener.len();
                return Some(Token::Open { end: self.pos });
            }
            if rest.starts_with(self.closer) {
                let at = self.pos;
                self.pos += self.closer.len();
                return Some(Token::Close { at });
            }
            self.pos += rest.chars().next().map_or(1, char::len_utf8);
        }
        None
    }
}
