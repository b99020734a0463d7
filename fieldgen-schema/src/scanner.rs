//! Record block scanning.
//!
//! The scanner is a plain function over its input. Every call starts at the
//! beginning of the text it is given and returns all matches at once.

use std::sync::LazyLock;

use miette::SourceSpan;
use regex::Regex;

/// `model <Identifier> { <body> }` with a non-nested body.
static BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\bmodel\s+(\w+)\s*\{([^}]*)\}").expect("block pattern is valid")
});

/// `model <Identifier> {`, matched whether or not the body ever closes.
static HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bmodel\s+(\w+)\s*\{").expect("header pattern is valid"));

/// A record block as it appears in the source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawBlock<'a> {
    /// Identifier following the `model` keyword.
    pub name: &'a str,
    /// Everything between the opening and the first closing brace.
    pub body: &'a str,
    /// 1-based line number on which the body starts.
    pub body_line: usize,
}

impl<'a> RawBlock<'a> {
    /// Physical body lines paired with their 1-based line numbers.
    pub fn lines(&self) -> impl Iterator<Item = (usize, &'a str)> + 'a {
        let first = self.body_line;
        self.body
            .split('\n')
            .enumerate()
            .map(move |(offset, line)| (first + offset, line))
    }
}

/// Find every record block in `text`, in source order.
///
/// Nested braces are not supported: a body ends at the first `}`.
pub fn scan_blocks(text: &str) -> Vec<RawBlock<'_>> {
    BLOCK
        .captures_iter(text)
        .filter_map(|caps| {
            let name = caps.get(1)?;
            let body = caps.get(2)?;
            Some(RawBlock {
                name: name.as_str(),
                body: body.as_str(),
                body_line: line_of(text, body.start()),
            })
        })
        .collect()
}

/// A block header that no scanned block starts at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct UnclosedHeader<'a> {
    pub name: &'a str,
    pub line: usize,
}

/// Span of `model <Identifier>` for the first block header in `text`, if any.
pub(crate) fn first_header(text: &str) -> Option<SourceSpan> {
    let caps = HEADER.captures(text)?;
    let start = caps.get(0)?.start();
    let end = caps.get(1)?.end();
    Some(SourceSpan::from(start..end))
}

/// Headers whose block was never matched: the body has no closing brace, or
/// an earlier unclosed block swallowed it.
pub(crate) fn unclosed_headers(text: &str) -> Vec<UnclosedHeader<'_>> {
    let starts: Vec<usize> = BLOCK.find_iter(text).map(|m| m.start()).collect();

    HEADER
        .captures_iter(text)
        .filter_map(|caps| {
            let header = caps.get(0)?;
            if starts.contains(&header.start()) {
                return None;
            }
            Some(UnclosedHeader {
                name: caps.get(1)?.as_str(),
                line: line_of(text, header.start()),
            })
        })
        .collect()
}

fn line_of(text: &str, offset: usize) -> usize {
    text[..offset].matches('\n').count() + 1
}
