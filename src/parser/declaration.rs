//! Exported declaration scanner.
//!
//! Recognizes, left to right and without overlap:
//!
//! ```text
//! MARKER <ws>+ <type> <ws>* ['*' <ws>*]* <ident> <ws>* '(' <params> ')'
//! ```
//!
//! where `<type>` is a run of `[A-Za-z0-9_*]`, `<ident>` a run of word
//! characters and `<params>` anything up to the first `)`. Whitespace
//! includes newlines, so a signature may wrap.

use crate::error::ParseError;
use crate::model::{FunctionDeclaration, Parameter};
use crate::types::PrimitiveType;
use std::ops::Range;

/// A declaration as it appears in the text, before type resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawDeclaration<'a> {
    /// Byte span of the whole match, marker through `)`
    pub span: Range<usize>,
    pub return_type: String,
    pub name: &'a str,
    pub params: &'a str,
}

/// Find every marker declaration in `text`, in source order.
pub fn scan<'a>(text: &'a str, marker: &str) -> Vec<RawDeclaration<'a>> {
    let mut found = Vec::new();
    if marker.is_empty() {
        return found;
    }

    let mut from = 0;
    while let Some(rel) = text[from..].find(marker) {
        let start = from + rel;
        match match_at(text, start, marker) {
            Some(decl) => {
                from = decl.span.end;
                found.push(decl);
            }
            None => {
                from = start + text[start..].chars().next().map_or(1, char::len_utf8);
            }
        }
    }
    found
}

/// Scan `text` and resolve every declaration into a doc-less
/// [`FunctionDeclaration`], keeping the match span for comment lookup.
pub fn extract(
    text: &str,
    marker: &str,
) -> Result<Vec<(Range<usize>, FunctionDeclaration)>, ParseError> {
    scan(text, marker)
        .into_iter()
        .map(|raw| {
            tracing::debug!(function = raw.name, offset = raw.span.start, "matched declaration");
            let return_type = resolve_type(&raw.return_type, raw.name)?;
            let parameters = parse_parameters(raw.params, raw.name)?;
            let decl = FunctionDeclaration {
                name: raw.name.to_string(),
                parameters,
                return_type,
                doc: None,
            };
            Ok((raw.span, decl))
        })
        .collect()
}

/// Split a raw parameter list into typed parameters.
///
/// An empty list yields no parameters.
pub fn parse_parameters(raw: &str, function: &str) -> Result<Vec<Parameter>, ParseError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(Vec::new());
    }

    let mut params = Vec::new();
    for segment in raw.split(',') {
        let segment = segment.trim();
        if segment.is_empty() {
            continue;
        }
        params.push(parse_parameter(segment, function)?);
    }
    Ok(params)
}

fn parse_parameter(segment: &str, function: &str) -> Result<Parameter, ParseError> {
    let malformed = || ParseError::MalformedParameter {
        segment: segment.to_string(),
        function: function.to_string(),
    };

    let split = segment
        .char_indices()
        .rev()
        .find(|(_, c)| c.is_whitespace())
        .ok_or_else(malformed)?;
    let (ty, name) = (&segment[..split.0], &segment[split.0 + split.1.len_utf8()..]);

    // `int *p` binds the star to the type
    let bare_name = name.trim_start_matches('*');
    let name_stars = name.len() - bare_name.len();
    if bare_name.is_empty() {
        return Err(malformed());
    }

    let mut spelling = normalize_type(ty);
    spelling.push_str(&"*".repeat(name_stars));

    Ok(Parameter {
        ty: resolve_type(&spelling, function)?,
        name: bare_name.to_string(),
    })
}

/// Collapse whitespace between a type keyword and its pointer stars:
/// `char *` and `char*` both become `char*`.
fn normalize_type(ty: &str) -> String {
    let keyword = ty.trim_end_matches(|c: char| c == '*' || c.is_whitespace());
    let stars = ty[keyword.len()..].chars().filter(|&c| c == '*').count();
    let mut spelling = keyword.trim().to_string();
    spelling.push_str(&"*".repeat(stars));
    spelling
}

fn resolve_type(spelling: &str, function: &str) -> Result<PrimitiveType, ParseError> {
    PrimitiveType::resolve(spelling).ok_or_else(|| ParseError::UnknownType {
        token: spelling.to_string(),
        function: function.to_string(),
    })
}

// -- Scanner ------------------------------------------------------------------

fn is_word(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

struct Cursor<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn peek(&self) -> Option<u8> {
        self.text.as_bytes().get(self.pos).copied()
    }

    /// Advance over ASCII whitespace, returning how many bytes were skipped.
    fn skip_ws(&mut self) -> usize {
        let start = self.pos;
        while self.peek().is_some_and(|b| b.is_ascii_whitespace()) {
            self.pos += 1;
        }
        self.pos - start
    }

    fn take_while(&mut self, pred: impl Fn(u8) -> bool) -> &'a str {
        let text = self.text;
        let start = self.pos;
        while self.peek().is_some_and(&pred) {
            self.pos += 1;
        }
        &text[start..self.pos]
    }
}

fn match_at<'a>(text: &'a str, start: usize, marker: &str) -> Option<RawDeclaration<'a>> {
    // The marker must not be the tail of a longer identifier.
    if start > 0 && is_word(text.as_bytes()[start - 1]) {
        return None;
    }

    let mut cur = Cursor {
        text,
        pos: start + marker.len(),
    };
    if cur.skip_ws() == 0 {
        return None;
    }

    let ty = cur.take_while(|b| is_word(b) || b == b'*');
    if ty.is_empty() {
        return None;
    }
    let mut return_type = normalize_type(ty);
    cur.skip_ws();
    while cur.peek() == Some(b'*') {
        return_type.push('*');
        cur.pos += 1;
        cur.skip_ws();
    }

    let name = cur.take_while(is_word);
    if name.is_empty() {
        return None;
    }
    cur.skip_ws();
    if cur.peek() != Some(b'(') {
        return None;
    }

    let params_start = cur.pos + 1;
    let close = params_start + text[params_start..].find(')')?;
    Some(RawDeclaration {
        span: start..close + 1,
        return_type,
        name,
        params: &text[params_start..close],
    })
}
