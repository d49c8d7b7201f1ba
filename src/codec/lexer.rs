//! Tokenizer for the flat JSON dialect used by the expenses file
//!
//! Splits text into top-level items while respecting quoted strings (with
//! backslash escapes) and nested braces/brackets, then turns an object into
//! a map of field name to raw value. Quote handling lives in `unquote` and
//! `escape` so each piece can be exercised on its own.

use std::collections::BTreeMap;

use crate::error::{ExpenseError, ExpenseResult};

/// Field name -> unquoted value
pub type FieldMap = BTreeMap<String, String>;

fn malformed(msg: impl Into<String>) -> ExpenseError {
    ExpenseError::Validation(format!("Malformed stored expense: {}", msg.into()))
}

/// Byte offsets of every `delimiter` outside strings and nesting
fn top_level_positions(body: &str, delimiter: char) -> ExpenseResult<Vec<usize>> {
    let mut positions = Vec::new();
    let mut depth: i32 = 0;
    let mut in_string = false;
    let mut escaped = false;

    for (idx, c) in body.char_indices() {
        if in_string {
            match c {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }

        match c {
            '"' => in_string = true,
            '{' | '[' => depth += 1,
            '}' | ']' => {
                depth -= 1;
                if depth < 0 {
                    return Err(malformed(format!("unexpected '{}'", c)));
                }
            }
            _ if c == delimiter && depth == 0 => positions.push(idx),
            _ => {}
        }
    }

    if in_string {
        return Err(malformed("unterminated string"));
    }
    if depth != 0 {
        return Err(malformed("unbalanced braces"));
    }
    Ok(positions)
}

/// Split a comma-separated body into its top-level items
///
/// Items are trimmed; empty items are dropped.
pub fn split_top_level(body: &str) -> ExpenseResult<Vec<&str>> {
    let mut items = Vec::new();
    let mut start = 0;
    for pos in top_level_positions(body, ',')? {
        items.push(body[start..pos].trim());
        start = pos + 1;
    }
    items.push(body[start..].trim());
    items.retain(|item| !item.is_empty());
    Ok(items)
}

/// Split a `key: value` pair at its first top-level colon
///
/// Returns `None` when the item has no colon.
pub fn split_pair(item: &str) -> ExpenseResult<Option<(&str, &str)>> {
    let item = item.trim();
    Ok(top_level_positions(item, ':')?
        .first()
        .map(|&pos| (item[..pos].trim(), item[pos + 1..].trim())))
}

/// Remove surrounding quotes and resolve backslash escapes
///
/// Unquoted input is returned trimmed and untouched. Only `\"`, `\\`, `\n`
/// and `\t` are escapes; any other backslash is kept as written.
pub fn unquote(raw: &str) -> ExpenseResult<String> {
    let raw = raw.trim();
    let Some(inner) = raw.strip_prefix('"') else {
        return Ok(raw.to_string());
    };

    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => match chars.next() {
                Some('n') => out.push('\n'),
                Some('t') => out.push('\t'),
                Some(c @ ('"' | '\\')) => out.push(c),
                // unescaped backslash from an older file, keep it
                Some(other) => {
                    out.push('\\');
                    out.push(other);
                }
                None => return Err(malformed("dangling escape")),
            },
            '"' => {
                if !chars.as_str().trim().is_empty() {
                    return Err(malformed(format!("trailing text after string {}", raw)));
                }
                return Ok(out);
            }
            _ => out.push(c),
        }
    }

    Err(malformed("unterminated string"))
}

/// Escape a value for embedding inside quotes
pub fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            _ => out.push(c),
        }
    }
    out
}

/// Parse a `{ "key": value, ... }` object into a field map
///
/// Items without a colon are skipped. A repeated key keeps its last value.
pub fn parse_object(text: &str) -> ExpenseResult<FieldMap> {
    let text = text.trim();
    let body = text
        .strip_prefix('{')
        .and_then(|t| t.strip_suffix('}'))
        .ok_or_else(|| malformed(format!("expected an object, found {}", preview(text))))?;

    let mut fields = FieldMap::new();
    for item in split_top_level(body)? {
        if let Some((key, value)) = split_pair(item)? {
            fields.insert(unquote(key)?, unquote(value)?);
        }
    }
    Ok(fields)
}

fn preview(text: &str) -> String {
    let mut short: String = text.chars().take(30).collect();
    if short.len() < text.len() {
        short.push_str("...");
    }
    short
}
