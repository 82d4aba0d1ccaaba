//! Masking of delimiter and escape characters inside name components.
//!
//! A *masked* component carries every delimiter as `\<delimiter>` and every
//! escape character as `\\`, so a masked component never contains a bare
//! delimiter and the joined form can be split back without ambiguity.

use crate::types::ESCAPE_CHARACTER;

/// Masks a raw component for `delimiter`.
///
/// Equivalent to first doubling every escape character and then prefixing
/// every delimiter with one, done in a single pass.
pub fn mask(raw: &str, delimiter: char) -> String {
    let mut result = String::with_capacity(raw.len() * 2);

    for ch in raw.chars() {
        if ch == ESCAPE_CHARACTER || ch == delimiter {
            result.push(ESCAPE_CHARACTER);
        }
        result.push(ch);
    }

    result
}

/// Strips the masking from a component. An escape character that opens no
/// valid pair is kept as a literal character.
pub fn unmask(masked: &str, delimiter: char) -> String {
    let mut result = String::with_capacity(masked.len());
    let mut chars = masked.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch != ESCAPE_CHARACTER {
            result.push(ch);
            continue;
        }
        match chars.peek() {
            Some(&next) if next == ESCAPE_CHARACTER || next == delimiter => {
                result.push(next);
                chars.next();
            }
            _ => result.push(ESCAPE_CHARACTER),
        }
    }

    result
}

/// Whether `s` is a well formed masked component: no bare delimiter, and
/// every escape character opens a `\\` or `\<delimiter>` pair.
pub fn is_masked(s: &str, delimiter: char) -> bool {
    let mut chars = s.chars();

    while let Some(ch) = chars.next() {
        if ch == ESCAPE_CHARACTER {
            match chars.next() {
                Some(next) if next == ESCAPE_CHARACTER || next == delimiter => {}
                _ => return false,
            }
        } else if ch == delimiter {
            return false;
        }
    }

    true
}

/// Splits a joined masked string on its unescaped delimiters.
///
/// Escape pairs stay in the parts untouched. An empty input yields one empty
/// part.
pub fn split(joined: &str, delimiter: char) -> Vec<String> {
    let mut parts = Vec::new();
    let mut current = String::new();
    let mut chars = joined.chars();

    while let Some(ch) = chars.next() {
        if ch == ESCAPE_CHARACTER {
            current.push(ch);
            if let Some(next) = chars.next() {
                current.push(next);
            }
        } else if ch == delimiter {
            parts.push(std::mem::take(&mut current));
        } else {
            current.push(ch);
        }
    }
    parts.push(current);

    parts
}

pub fn join<S: AsRef<str>>(parts: &[S], delimiter: char) -> String {
    let mut result = String::new();

    for (i, part) in parts.iter().enumerate() {
        if i > 0 {
            result.push(delimiter);
        }
        result.push_str(part.as_ref());
    }

    result
}

/// Brings a user supplied delimited string into canonical masked form.
///
/// Bare delimiters stay separators and valid escape pairs are kept. An escape
/// character that opens no pair is taken literally and doubled.
pub fn canonicalize(source: &str, delimiter: char) -> String {
    let mut result = String::with_capacity(source.len() + 4);
    let mut chars = source.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch != ESCAPE_CHARACTER {
            result.push(ch);
            continue;
        }
        result.push(ESCAPE_CHARACTER);
        match chars.peek() {
            Some(&next) if next == ESCAPE_CHARACTER || next == delimiter => {
                result.push(next);
                chars.next();
            }
            _ => result.push(ESCAPE_CHARACTER),
        }
    }

    result
}

/// Re-encodes a component masked for `from` so that it is masked for `to`.
pub fn remask(masked: &str, from: char, to: char) -> String {
    if from == to {
        return masked.to_string();
    }
    mask(&unmask(masked, from), to)
}
