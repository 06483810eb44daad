//! Lexical splitting of source files into function segments.
//!
//! Segments are found by indentation alone. A definition line starts a segment
//! and the segment runs until the next line of code that is indented at or
//! below the definition. Lines inside triple-quoted strings and inside an open
//! parameter list never end a segment.

use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

fn def_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^([ \t]*)(?:async[ \t]+)?def[ \t]+(\w+)[ \t]*\(")
            .expect("definition pattern is valid")
    })
}

/// One function definition cut out of a larger source text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FunctionSegment {
    /// Function name
    pub name: String,
    /// 1-based line of the `def`
    pub line: usize,
    /// Source text from the `def` line to the end of the body
    pub text: String,
}

/// Split `source` into one segment per function definition.
///
/// Nested definitions and methods get their own segment in addition to being
/// part of the enclosing one. Segments are returned in source order.
///
/// ```
/// use docgrade::segment::split_functions;
///
/// let source = "def a():\n    return 1\n\ndef b():\n    return 2\n";
/// let names: Vec<_> = split_functions(source).into_iter().map(|s| s.name).collect();
/// assert_eq!(names, ["a", "b"]);
/// ```
pub fn split_functions(source: &str) -> Vec<FunctionSegment> {
    let lines: Vec<&str> = source.lines().collect();
    let scans = scan_lines(&lines);
    let mut segments = Vec::new();

    for (start, line) in lines.iter().enumerate() {
        if scans[start].in_string {
            continue;
        }
        let Some(caps) = def_regex().captures(line) else {
            continue;
        };
        let indent = caps[1].len();
        let end = segment_end(&lines, &scans, start, indent);

        segments.push(FunctionSegment {
            name: caps[2].to_string(),
            line: start + 1,
            text: lines[start..end].join("\n"),
        });
    }

    segments
}

/// Exclusive end index of the segment starting at `start`.
fn segment_end(lines: &[&str], scans: &[LineScan], start: usize, indent: usize) -> usize {
    let mut paren_depth = scans[start].paren_delta;
    let mut end = lines.len();

    for (idx, line) in lines.iter().enumerate().skip(start + 1) {
        if paren_depth > 0 {
            paren_depth += scans[idx].paren_delta;
            continue;
        }
        if scans[idx].in_string || is_trivia(line) {
            continue;
        }
        if indentation(line) <= indent {
            end = idx;
            break;
        }
    }

    // Blank lines and outdented comments trailing the body belong to nobody.
    while end > start + 1 {
        let last = lines[end - 1];
        let trailing = !scans[end - 1].in_string
            && (last.trim().is_empty() || (is_trivia(last) && indentation(last) <= indent));
        if !trailing {
            break;
        }
        end -= 1;
    }

    end
}

/// Lexical facts about one source line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct LineScan {
    /// The line begins inside a triple-quoted string
    in_string: bool,
    /// Parentheses opened minus closed, outside strings and comments
    paren_delta: i32,
}

/// Scan every line, tracking triple-quoted strings across lines. Quoted
/// text and `#` comments contribute no parentheses and open no strings.
fn scan_lines(lines: &[&str]) -> Vec<LineScan> {
    let mut open: Option<&'static str> = None;
    let mut scans = Vec::with_capacity(lines.len());

    for line in lines {
        let in_string = open.is_some();
        let bytes = line.as_bytes();
        let mut paren_delta = 0;
        let mut i = 0;

        while i < bytes.len() {
            if let Some(delim) = open {
                match line[i..].find(delim) {
                    Some(pos) => {
                        i += pos + delim.len();
                        open = None;
                        continue;
                    }
                    None => break,
                }
            }

            match bytes[i] {
                b'#' => break,
                quote @ (b'"' | b'\'') => {
                    let triple = if quote == b'"' { "\"\"\"" } else { "\'\'\'" };
                    if line[i..].starts_with(triple) {
                        open = Some(triple);
                        i += triple.len();
                        continue;
                    }
                    i = skip_short_string(bytes, i);
                }
                b'(' => paren_delta += 1,
                b')' => paren_delta -= 1,
                _ => {}
            }
            i += 1;
        }

        scans.push(LineScan {
            in_string,
            paren_delta,
        });
    }

    scans
}

/// Index of the quote closing the single-line string opened at `start`, or
/// the last byte of the line when it never closes.
fn skip_short_string(bytes: &[u8], start: usize) -> usize {
    let quote = bytes[start];
    let mut i = start + 1;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            c if c == quote => return i,
            _ => i += 1,
        }
    }
    bytes.len().saturating_sub(1)
}

fn indentation(line: &str) -> usize {
    line.len() - line.trim_start().len()
}

fn is_trivia(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.is_empty() || trimmed.starts_with('#')
}
