//! Comment removal for SCSS-like source.
//!
//! `//` comments run to the end of the line and `/* */` comments to their
//! closing marker (or the end of input). Comment text is overwritten with
//! spaces while line breaks are kept, so the output has the same lines as
//! the input. Quoted strings are copied untouched.

/// A character cursor over the source being stripped.
struct Cursor<'a> {
    s: &'a str,
    i: usize,
}

impl<'a> Cursor<'a> {
    fn new(s: &'a str) -> Self {
        Self { s, i: 0 }
    }

    fn peek(&self) -> Option<char> {
        self.s[self.i..].chars().next()
    }

    fn starts_with(&self, pat: &str) -> bool {
        self.s[self.i..].starts_with(pat)
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.i += c.len_utf8();
        Some(c)
    }

    /// Advances past `pat`, which the caller has already checked with `starts_with`.
    fn bump_str(&mut self, pat: &str) {
        self.i += pat.len();
    }
}

/// Removes `//` and `/* */` comments from `source`.
pub fn strip_comments(source: &str) -> String {
    let mut out = String::with_capacity(source.len());
    let mut cur = Cursor::new(source);

    while let Some(c) = cur.peek() {
        if c == '"' || c == '\'' {
            copy_quoted(&mut cur, &mut out, c);
        } else if cur.starts_with("//") {
            blank_line_comment(&mut cur, &mut out);
        } else if cur.starts_with("/*") {
            blank_block_comment(&mut cur, &mut out);
        } else {
            out.push(c);
            cur.bump();
        }
    }

    out
}

fn copy_quoted(cur: &mut Cursor<'_>, out: &mut String, quote: char) {
    if let Some(open) = cur.bump() {
        out.push(open);
    }
    while let Some(c) = cur.bump() {
        out.push(c);
        if c == '\\' {
            if let Some(escaped) = cur.bump() {
                out.push(escaped);
            }
        } else if c == quote {
            return;
        }
    }
}

fn blank_line_comment(cur: &mut Cursor<'_>, out: &mut String) {
    while let Some(c) = cur.peek() {
        if c == '\n' {
            return;
        }
        out.push(blank(c));
        cur.bump();
    }
}

fn blank_block_comment(cur: &mut Cursor<'_>, out: &mut String) {
    cur.bump_str("/*");
    out.push_str("  ");
    while !cur.starts_with("*/") {
        match cur.bump() {
            Some(c) => out.push(blank(c)),
            None => return,
        }
    }
    cur.bump_str("*/");
    out.push_str("  ");
}

fn blank(c: char) -> char {
    if c.is_whitespace() { c } else { ' ' }
}
