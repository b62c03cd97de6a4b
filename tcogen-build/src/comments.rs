//! Comment association for Rust sources.
//!
//! `syn` discards ordinary `//` comments, so markers are found with a small
//! lexer pass over the raw text. It groups comments the way they appear on
//! the page and records which line of code follows each group. The scanner
//! then asks for the groups that lead into a given item.

use std::collections::BTreeMap;
use std::ops::RangeInclusive;

/// A single comment token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    /// The token's own text: `//...` without the line terminator, or the
    /// complete `/* ... */`.
    pub text: String,
    /// 1-based line the comment starts on.
    pub line: usize,
}

/// Comments on consecutive lines with no blank line or code between them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentGroup {
    pub comments: Vec<Comment>,
    pub start_line: usize,
    pub end_line: usize,
    /// Line of the last code token before the group, if any.
    pub previous_code_line: Option<usize>,
    /// Line of the first code token after the group, if any.
    pub next_code_line: Option<usize>,
    /// The group follows code on its first line and belongs to that code.
    pub trailing: bool,
}

impl CommentGroup {
    /// Whether any comment in the group is exactly `text`.
    pub fn contains(&self, text: &str) -> bool {
        self.comments.iter().any(|comment| comment.text == text)
    }

    /// The group starts right under code and a blank line separates it from
    /// the code that follows, so it closes the item above.
    pub fn closes_previous(&self) -> bool {
        self.previous_code_line.is_some_and(|line| line + 1 == self.start_line)
            && self.next_code_line.is_some_and(|line| line > self.end_line + 1)
    }
}

/// Comment groups of one file, keyed by the line of code that follows them.
#[derive(Debug, Clone, Default)]
pub struct CommentMap {
    by_next_line: BTreeMap<usize, Vec<CommentGroup>>,
    unattached: Vec<CommentGroup>,
}

impl CommentMap {
    /// Lex `source` and associate every comment group with the code after it.
    pub fn build(source: &str) -> Self {
        let mut map = CommentMap::default();
        for group in Lexer::new(source).run() {
            match group.next_code_line {
                Some(line) if !group.trailing && !group.closes_previous() => {
                    map.by_next_line.entry(line).or_default().push(group)
                }
                _ => map.unattached.push(group),
            }
        }
        map
    }

    /// Groups that lead into code starting somewhere in `lines`.
    pub fn attached(&self, lines: RangeInclusive<usize>) -> impl Iterator<Item = &CommentGroup> {
        self.by_next_line.range(lines).flat_map(|(_, groups)| groups.iter())
    }

    /// Every group in the file: attached ones by following line, then the rest in source order.
    pub fn groups(&self) -> impl Iterator<Item = &CommentGroup> {
        self.by_next_line.values().flatten().chain(self.unattached.iter())
    }
}

struct Lexer<'a> {
    chars: std::iter::Peekable<std::str::CharIndices<'a>>,
    source: &'a str,
    line: usize,
    /// Line on which the most recent code token appeared.
    last_code_line: Option<usize>,
    groups: Vec<CommentGroup>,
    /// A code token was seen since the last comment was pushed.
    code_since_comment: bool,
}

impl<'a> Lexer<'a> {
    fn new(source: &'a str) -> Self {
        Self {
            chars: source.char_indices().peekable(),
            source,
            line: 1,
            last_code_line: None,
            groups: Vec::new(),
            code_since_comment: true,
        }
    }

    fn run(mut self) -> Vec<CommentGroup> {
        while let Some((offset, ch)) = self.chars.next() {
            match ch {
                '\n' => self.line += 1,
                c if c.is_whitespace() => {}
                '/' if self.peek_is('/') => self.line_comment(offset),
                '/' if self.peek_is('*') => self.block_comment(offset),
                '"' => {
                    self.code();
                    self.quoted('"');
                }
                '\'' => {
                    self.code();
                    self.char_or_lifetime();
                }
                c if c == '_' || c.is_alphabetic() => {
                    self.code();
                    self.word(offset, c);
                }
                _ => self.code(),
            }
        }
        self.groups
    }

    fn peek_is(&mut self, expected: char) -> bool {
        matches!(self.chars.peek(), Some((_, c)) if *c == expected)
    }

    fn bump(&mut self) -> Option<char> {
        let (_, ch) = self.chars.next()?;
        if ch == '\n' {
            self.line += 1;
        }
        Some(ch)
    }

    fn code(&mut self) {
        self.last_code_line = Some(self.line);
        self.code_since_comment = true;
        for group in self.groups.iter_mut().rev() {
            if group.next_code_line.is_some() {
                break;
            }
            group.next_code_line = Some(self.line);
        }
    }

    fn line_comment(&mut self, start: usize) {
        let line = self.line;
        let mut end = self.source.len();
        while let Some(&(offset, ch)) = self.chars.peek() {
            if ch == '\n' {
                end = offset;
                break;
            }
            self.chars.next();
        }
        let text = self.source[start..end].trim_end_matches('\r').to_string();
        self.push(text, line, line);
    }

    fn block_comment(&mut self, start: usize) {
        let line = self.line;
        self.chars.next();
        let mut depth = 1usize;
        let mut end = self.source.len();
        while let Some((offset, ch)) = self.chars.next() {
            match ch {
                '\n' => self.line += 1,
                '/' if self.peek_is('*') => {
                    self.chars.next();
                    depth += 1;
                }
                '*' if self.peek_is('/') => {
                    self.chars.next();
                    depth -= 1;
                    if depth == 0 {
                        end = offset + 2;
                        break;
                    }
                }
                _ => {}
            }
        }
        let text = self.source[start..end].to_string();
        self.push(text, line, self.line);
    }

    fn push(&mut self, text: String, line: usize, end_line: usize) {
        let trailing = self.last_code_line == Some(line);
        let comment = Comment { text, line };

        if let Some(group) = self.groups.last_mut()
            && !self.code_since_comment
            && !trailing
            && !group.trailing
            && line <= group.end_line + 1
        {
            group.comments.push(comment);
            group.end_line = end_line;
        } else {
            self.groups.push(CommentGroup {
                comments: vec![comment],
                start_line: line,
                end_line,
                previous_code_line: self.last_code_line,
                next_code_line: None,
                trailing,
            });
        }
        self.code_since_comment = false;
    }

    /// Skip a `"`-delimited literal with backslash escapes.
    fn quoted(&mut self, close: char) {
        while let Some(ch) = self.bump() {
            if ch == '\\' {
                self.bump();
            } else if ch == close {
                break;
            }
        }
    }

    /// Skip a raw string body terminated by `"` plus `hashes` pound signs.
    fn raw_quoted(&mut self, hashes: usize) {
        while let Some(ch) = self.bump() {
            if ch != '"' {
                continue;
            }
            let mut seen = 0;
            while seen < hashes && self.peek_is('#') {
                self.chars.next();
                seen += 1;
            }
            if seen == hashes {
                break;
            }
        }
    }

    /// Identifiers, keywords, and the prefixes of raw and byte strings.
    fn word(&mut self, start: usize, first: char) {
        let mut end = start + first.len_utf8();
        while let Some(&(offset, ch)) = self.chars.peek() {
            if ch == '_' || ch.is_alphanumeric() {
                self.chars.next();
                end = offset + ch.len_utf8();
            } else {
                break;
            }
        }

        let source = self.source;
        match &source[start..end] {
            "r" | "br" | "cr" => {
                let rest = &source[end..];
                let hashes = rest.chars().take_while(|c| *c == '#').count();
                if rest[hashes..].starts_with('"') {
                    for _ in 0..=hashes {
                        self.chars.next();
                    }
                    self.raw_quoted(hashes);
                }
            }
            "b" | "c" if self.peek_is('"') => {
                self.chars.next();
                self.quoted('"');
            }
            "b" if self.peek_is('\'') => {
                self.chars.next();
                self.quoted('\'');
            }
            _ => {}
        }
    }

    /// `'a'`, `'\n'`, and `'\u{..}'` are literals; `'a` and `'static` are lifetimes.
    fn char_or_lifetime(&mut self) {
        let mut ahead = self.chars.clone();
        match (ahead.next(), ahead.next()) {
            (Some((_, '\\')), _) => self.quoted('\''),
            (Some((_, ch)), Some((_, '\''))) if ch != '\n' => {
                self.chars.next();
                self.chars.next();
            }
            _ => {}
        }
    }
}
