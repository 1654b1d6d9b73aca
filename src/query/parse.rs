//! Query string tokenizer and value parsers.
//!
//! Splits `key=value` pairs, percent-decodes them and routes each key to its
//! instruction field.

use alloc::string::String;
use alloc::vec::Vec;

use super::ParseWarning;
use super::instructions::Instructions;
use crate::breakpoint::ViewPreset;
use crate::last_row::LastRow;

/// Parse a query string into Instructions + warnings.
pub(crate) fn parse_query(query: &str) -> (Instructions, Vec<ParseWarning>) {
    let mut inst = Instructions::new();
    let mut warnings = Vec::new();

    for pair in split_query(query) {
        let (raw_key, raw_value) = split_pair(pair);
        let key = percent_decode(raw_key);
        let value = percent_decode(raw_value);
        let key_lower = key.to_ascii_lowercase();

        dispatch_key(&key_lower, &value, &mut inst, &mut warnings);
    }

    (inst, warnings)
}

fn dispatch_key(key: &str, value: &str, inst: &mut Instructions, warnings: &mut Vec<ParseWarning>) {
    match key {
        "w" | "width" | "container_width" => {
            let parsed = parse_length(value, false);
            apply(&mut inst.width, parsed, "width", value, warnings);
        }
        "h" | "height" | "row_height" | "target_row_height" => {
            let parsed = parse_length(value, false);
            apply(&mut inst.row_height, parsed, "row_height", value, warnings);
        }
        "gap" | "spacing" => {
            let parsed = parse_length(value, true);
            apply(&mut inst.gap, parsed, "gap", value, warnings);
        }
        "viewport" | "vw" => {
            let parsed = parse_length(value, false);
            apply(&mut inst.viewport, parsed, "viewport", value, warnings);
        }
        "last_row" | "lastrow" => {
            let parsed = parse_last_row(value)
                .ok_or("expected left|justify");
            apply(&mut inst.last_row, parsed, "last_row", value, warnings);
        }
        "preset" | "view" => {
            let parsed = ViewPreset::by_name(value.trim())
                .ok_or("expected gallery|playground|projects");
            apply(&mut inst.preset, parsed, "preset", value, warnings);
        }
        _ => warnings.push(ParseWarning::KeyNotRecognized {
            key: String::from(key),
            value: String::from(value),
        }),
    }
}

/// Set a field, warning on duplicates and unparseable values.
fn apply<T>(
    field: &mut Option<T>,
    parsed: Result<T, &'static str>,
    key: &'static str,
    value: &str,
    warnings: &mut Vec<ParseWarning>,
) {
    match parsed {
        Ok(v) => {
            if field.is_some() {
                warnings.push(ParseWarning::DuplicateKey {
                    key,
                    value: String::from(value),
                });
            }
            *field = Some(v);
        }
        Err(reason) => warnings.push(ParseWarning::ValueInvalid {
            key,
            value: String::from(value),
            reason,
        }),
    }
}

// ---- Value parsers ----

/// Parse a CSS-pixel length, tolerating a trailing `px`.
fn parse_length(s: &str, allow_zero: bool) -> Result<f64, &'static str> {
    let s = s.trim();
    let s = s
        .strip_suffix("px")
        .or_else(|| s.strip_suffix("PX"))
        .unwrap_or(s)
        .trim_end();
    let v: f64 = s.parse().map_err(|_| "expected a number")?;
    if !v.is_finite() {
        return Err("expected a finite number");
    }
    match (allow_zero, v) {
        (true, v) if v >= 0.0 => Ok(v),
        (false, v) if v > 0.0 => Ok(v),
        (true, _) => Err("expected a non-negative length"),
        (false, _) => Err("expected a positive length"),
    }
}

fn parse_last_row(s: &str) -> Option<LastRow> {
    match s.trim().to_ascii_lowercase().as_str() {
        "left" | "align" | "alignleft" | "start" => Some(LastRow::AlignLeft),
        "justify" | "stretch" | "fill" => Some(LastRow::Justify),
        _ => None,
    }
}

// ---- Query string tokenizer ----

/// Split query string on '&'.
fn split_query(query: &str) -> impl Iterator<Item = &str> {
    // Strip leading '?' if present (caller may or may not have stripped it)
    let query = query.strip_prefix('?').unwrap_or(query);
    query.split('&').filter(|s| !s.is_empty())
}

/// Split a single "key=value" pair on the first '='.
fn split_pair(pair: &str) -> (&str, &str) {
    pair.split_once('=').unwrap_or((pair, ""))
}

/// Percent-decode a URL component. Also handles '+' as space.
fn percent_decode(s: &str) -> String {
    let bytes = s.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            b'%' if i + 2 < bytes.len() => {
                if let (Some(hi), Some(lo)) = (hex_digit(bytes[i + 1]), hex_digit(bytes[i + 2])) {
                    out.push(hi << 4 | lo);
                    i += 3;
                } else {
                    out.push(b'%');
                    i += 1;
                }
            }
            b => {
                out.push(b);
                i += 1;
            }
        }
    }
    String::from_utf8_lossy(&out).into_owned()
}

fn hex_digit(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}
