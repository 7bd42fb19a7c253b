// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Tag-list payload decoding.
//!
//! A `TAGS` reply payload is a flattened, suffix-indexed key/value list:
//! a count line, then pairs of `<basekey>_<digits>` / `<value>` lines.
//! Repeated base keys collect their values in document order.

use indexmap::IndexMap;

use crate::{decode, WireError};

/// Decoded tag dictionary: base key to its values, both in document order.
pub type TagDict = IndexMap<String, Vec<String>>;

/// Decode a full `TAGS` reply frame into a [`TagDict`].
///
/// Validates the status line via [`decode`] first (propagating its
/// errors), then drops the status line and the count header. The count
/// header is read but never validated against the actual entry count —
/// the daemon is equally permissive.
pub fn decode_tags(raw: &str) -> Result<TagDict, WireError> {
    decode(raw)?;

    let mut lines = raw.lines();
    lines.next(); // status line
    lines.next(); // count header

    let mut dict = TagDict::new();
    while let Some(key_line) = lines.next() {
        let value = lines.next().ok_or(WireError::TruncatedTagList)?;
        let base = base_key(key_line).ok_or_else(|| WireError::MalformedTagEntry {
            line: key_line.to_string(),
        })?;

        dict.entry(base.to_string())
            .or_default()
            .push(value.to_string());
    }

    Ok(dict)
}

/// Match a key line against `^(.*)_([0-9]+)$` and return the base key.
///
/// Only the last underscore can start an all-digit suffix, so a reverse
/// search is equivalent to the greedy pattern. The suffix participates
/// only in matching the line shape, never in ordering.
fn base_key(line: &str) -> Option<&str> {
    let idx = line.rfind('_')?;
    let suffix = &line[idx + 1..];
    if suffix.is_empty() || !suffix.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    Some(&line[..idx])
}

#[cfg(test)]
#[path = "tags_tests.rs"]
mod tests;
