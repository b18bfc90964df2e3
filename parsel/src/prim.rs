//! Primitive parsers over characters and strings.
//!
//! These are the leaves everything else is built from: predicate-based
//! single-character matching, prefix taking, fixed strings and end of input.
//! All of them are ordinary [`Parser`] values. Matching is byte/ASCII
//! oriented; Unicode-aware tokenization is out of scope.
use crate::{ParseResult, Parser};

/// Longest prefix that should appear in a "got" message.
const FOUND_LIMIT: usize = 60;

/// Describes the input at a failure position.
///
/// This returns the input up to the next ASCII whitespace, capped at
/// [`FOUND_LIMIT`] bytes, or `"end of input"` when there is none left.
fn found(input: &str) -> String {
    match input.chars().next() {
        None => "end of input".to_owned(),
        Some(ch) if ch.is_ascii_whitespace() => format!("{ch:?}"),
        Some(_) => {
            let end = input
                .char_indices()
                .take_while(|&(idx, ch)| idx < FOUND_LIMIT && !ch.is_ascii_whitespace())
                .last()
                .map(|(idx, ch)| idx + ch.len_utf8())
                .unwrap_or(0);
            input[..end].to_owned()
        }
    }
}

/// Length of the longest prefix of `input` whose characters all satisfy
/// `pred`.
fn prefix_len(input: &str, pred: &impl Fn(char) -> bool) -> usize {
    for (idx, ch) in input.char_indices() {
        if !pred(ch) {
            return idx;
        }
    }
    input.len()
}

/// Parses a single character satisfying `pred`.
///
/// Fails with `label` as the expectation on a mismatch or at the end of the
/// input.
pub fn satisfy(pred: impl Fn(char) -> bool + 'static, label: impl Into<String>) -> Parser<char> {
    let label = label.into();
    Parser::new(move |input| match input.chars().next() {
        Some(ch) if pred(ch) => ParseResult::success(ch, &input[ch.len_utf8()..]),
        _ => ParseResult::fail(label.clone(), found(input), input),
    })
}

/// Parses any single character, failing only at the end of the input.
pub fn any_char() -> Parser<char> {
    satisfy(|_| true, "any character")
}

/// Consumes nothing and always succeeds, with a discarded result.
pub fn nothing() -> Parser<()> {
    Parser::new(|input: &str| ParseResult::discard(input))
}

/// Consumes the entire remaining input, succeeding even when it is empty.
pub fn everything() -> Parser<String> {
    Parser::new(|input: &str| ParseResult::success(input.to_owned(), &input[input.len()..]))
}

/// Succeeds, with a discarded result, only at the end of the input.
pub fn eof() -> Parser<()> {
    Parser::new(|input: &str| {
        if input.is_empty() {
            ParseResult::discard(input)
        } else {
            ParseResult::fail("end of input", found(input), input)
        }
    })
}

/// Parses the longest, possibly empty, prefix whose characters satisfy
/// `pred`.
///
/// This never fails; at the end of the input it succeeds with an empty
/// output.
pub fn take_while(pred: impl Fn(char) -> bool + 'static) -> Parser<String> {
    Parser::new(move |input| {
        let end = prefix_len(input, &pred);
        ParseResult::success(input[..end].to_owned(), &input[end..])
    })
}

/// Like [`take_while`], but fails with `label` as the expectation when the
/// prefix is empty.
pub fn take_while1(
    pred: impl Fn(char) -> bool + 'static,
    label: impl Into<String>,
) -> Parser<String> {
    let label = label.into();
    Parser::new(move |input| {
        let end = prefix_len(input, &pred);
        if end == 0 {
            ParseResult::fail(label.clone(), found(input), input)
        } else {
            ParseResult::success(input[..end].to_owned(), &input[end..])
        }
    })
}

/// Parses a fixed string.
pub fn literal(fixed: impl Into<String>) -> Parser<String> {
    let fixed = fixed.into();
    Parser::new(move |input| match input.strip_prefix(fixed.as_str()) {
        Some(rest) => ParseResult::success(fixed.clone(), rest),
        None => ParseResult::fail(format!("{fixed:?}"), found(input), input),
    })
}

/// Parses one or more ASCII digits as a decimal `i64`.
///
/// Fails without consuming input when the value would overflow.
pub fn digits() -> Parser<i64> {
    Parser::new(|input: &str| {
        let end = prefix_len(input, &|ch: char| ch.is_ascii_digit());
        if end == 0 {
            return ParseResult::fail("digits", found(input), input);
        }
        let mut value: i64 = 0;
        for byte in input[..end].bytes() {
            value = match value
                .checked_mul(10)
                .and_then(|v| v.checked_add(i64::from(byte - b'0')))
            {
                Some(v) => v,
                None => {
                    return ParseResult::fail(
                        "digits",
                        format!("out-of-range integer {}", &input[..end]),
                        input,
                    )
                }
            };
        }
        ParseResult::success(value, &input[end..])
    })
}
