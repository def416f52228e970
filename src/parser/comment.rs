//! Doc comment association by backward line scan from a declaration.
//!
//! Starting at the line above a declaration, lines are collected upward until
//! the comment block ends. Three shapes are recognized:
//!
//! - `/* text */` on one line: summary only
//! - `/** ... */` spanning lines: summary plus `@param` / `@return` tags
//! - a run of `//` lines: summary only, tags are not interpreted

use crate::model::DocComment;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    /// No block closer seen yet; `//` lines extend the run.
    Scanning,
    /// Inside a `/* ... */` block, looking for its opener.
    InsideBlock,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentStyle {
    WrappedLine,
    Block,
    LineRun,
}

/// Find and parse the doc comment for the declaration starting at `offset`.
///
/// Returns `None` when the line above the declaration is not a comment.
pub fn associate(text: &str, offset: usize) -> Option<DocComment> {
    let (style, raw) = collect(text, offset)?;
    tracing::debug!(?style, offset, "found doc comment");
    let doc = match style {
        CommentStyle::WrappedLine => parse_wrapped_line(&raw),
        CommentStyle::Block => parse_block(&raw),
        CommentStyle::LineRun => parse_line_run(&raw),
    };
    Some(doc)
}

/// Collect the raw comment text directly above `offset`, in forward order.
pub fn collect(text: &str, offset: usize) -> Option<(CommentStyle, String)> {
    let mut lines: Vec<&str> = text[..offset].split('\n').collect();
    // Fragment of the declaration's own line (usually indentation)
    lines.pop();

    let mut state = ScanState::Scanning;
    let mut collected: Vec<&str> = Vec::new();

    for line in lines.into_iter().rev() {
        match state {
            ScanState::Scanning => {
                if line.contains("*/") {
                    if line.contains("/*") {
                        return Some((CommentStyle::WrappedLine, line.to_string()));
                    }
                    collected.push(line);
                    state = ScanState::InsideBlock;
                } else if line.contains("//") {
                    collected.push(line);
                } else {
                    break;
                }
            }
            ScanState::InsideBlock => {
                collected.push(line);
                if line.contains("/*") {
                    break;
                }
            }
        }
    }

    // An unterminated block simply runs to the start of the text.
    if collected.is_empty() {
        return None;
    }
    collected.reverse();
    let style = match state {
        ScanState::Scanning => CommentStyle::LineRun,
        ScanState::InsideBlock => CommentStyle::Block,
    };
    Some((style, collected.join("\n")))
}

// -- Shape parsers ------------------------------------------------------------

fn parse_wrapped_line(line: &str) -> DocComment {
    let text = strip_closer(&strip_opener(line)).trim().to_string();
    DocComment::from_summary(trim_blank_edges(vec![text]))
}

fn parse_block(block: &str) -> DocComment {
    let body = strip_closer(&strip_opener(block));
    let mut doc = DocComment::default();
    let mut summary = Vec::new();

    for line in body.trim().lines() {
        let line = line.trim().trim_start_matches('*').trim();

        if let Some(rest) = tag_text(line, "@param") {
            let rest = rest.trim();
            let (name, description) = match rest.split_once(char::is_whitespace) {
                Some((name, description)) => (name, description.trim()),
                None => (rest, ""),
            };
            if !name.is_empty() {
                doc.set_param(name, description);
            }
        } else if let Some(rest) = tag_text(line, "@returns").or_else(|| tag_text(line, "@return")) {
            doc.returns = rest.trim().to_string();
        } else {
            summary.push(line.to_string());
        }
    }

    doc.summary = trim_blank_edges(summary);
    doc
}

fn parse_line_run(block: &str) -> DocComment {
    let summary = block
        .lines()
        .map(|line| match line.find("//") {
            Some(pos) => {
                let after = line[pos..].trim_start_matches('/');
                format!("{}{}", &line[..pos], after).trim().to_string()
            }
            None => line.trim().to_string(),
        })
        .collect();
    DocComment::from_summary(trim_blank_edges(summary))
}

// -- Helpers ------------------------------------------------------------------

/// Text following the first occurrence of `tag`.
fn tag_text<'a>(line: &'a str, tag: &str) -> Option<&'a str> {
    line.find(tag).map(|pos| &line[pos + tag.len()..])
}

/// Remove the first `/*`, `/**`, ... opener.
fn strip_opener(text: &str) -> String {
    match text.find("/*") {
        Some(pos) => {
            let rest = text[pos + 1..].trim_start_matches('*');
            format!("{}{}", &text[..pos], rest)
        }
        None => text.to_string(),
    }
}

/// Remove the first `*/`, `**/`, ... closer.
fn strip_closer(text: &str) -> String {
    match text.find("*/") {
        Some(pos) => {
            let start = text[..pos].trim_end_matches('*').len();
            format!("{}{}", &text[..start], &text[pos + 2..])
        }
        None => text.to_string(),
    }
}

fn trim_blank_edges(mut lines: Vec<String>) -> Vec<String> {
    while lines.last().is_some_and(|l| l.is_empty()) {
        lines.pop();
    }
    let leading = lines.iter().take_while(|l| l.is_empty()).count();
    lines.drain(..leading);
    lines
}
