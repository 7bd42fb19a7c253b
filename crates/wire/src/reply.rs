// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Reply status-line decoding.
//!
//! Every reply frame starts with a status line of the shape
//! `^([A-Z]+)\s?(.*)$`: an uppercase code token, at most one separator,
//! and a remainder. `OK` is the only success code; any other token is a
//! failure and the remainder is the daemon's error message.

use crate::WireError;

/// Decode a reply frame's status line.
///
/// Returns the remainder of the status line on `OK` (possibly empty; a
/// bare `OK` is valid). A non-`OK` code fails with
/// [`WireError::CommandFailed`] carrying the remainder as the message; a
/// first line that is not a status line at all (including empty input)
/// fails with [`WireError::MalformedReply`].
pub fn decode(raw: &str) -> Result<&str, WireError> {
    let line = raw.lines().next().ok_or(WireError::MalformedReply)?;

    let code_len = line.bytes().take_while(u8::is_ascii_uppercase).count();
    if code_len == 0 {
        return Err(WireError::MalformedReply);
    }

    let (code, rest) = line.split_at(code_len);
    // `\s?` — at most one separator between code and remainder
    let remainder = rest
        .strip_prefix(|c: char| c.is_ascii_whitespace())
        .unwrap_or(rest);

    if code == "OK" {
        Ok(remainder)
    } else {
        Err(WireError::CommandFailed { message: remainder.to_string() })
    }
}

#[cfg(test)]
#[path = "reply_tests.rs"]
mod tests;
