// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Protocol error types.

use thiserror::Error;

/// Errors from encoding, decoding, or framing protocol messages.
#[derive(Debug, Error)]
pub enum WireError {
    /// The first line of a reply does not match the status-line grammar.
    #[error("malformed reply: first line is not a status line")]
    MalformedReply,

    /// The daemon answered with a non-`OK` status code.
    #[error("command failed: {message}")]
    CommandFailed { message: String },

    /// A tag payload key line is missing its `_N` suffix.
    #[error("malformed tag entry: {line:?}")]
    MalformedTagEntry { line: String },

    /// A tag payload ended with a dangling key line and no value.
    #[error("truncated tag list: key without a value")]
    TruncatedTagList,

    /// A frame exceeds [`MAX_FRAME_LEN`](crate::MAX_FRAME_LEN).
    #[error("frame of {len} bytes exceeds the frame size limit")]
    FrameTooLarge { len: usize },

    /// An inbound frame is not valid UTF-8 text.
    #[error("frame is not valid UTF-8")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),

    /// Channel I/O failure while reading or writing a frame.
    #[error("channel I/O failed")]
    Io(#[from] std::io::Error),
}

impl WireError {
    /// True if this error carries a daemon-reported failure (as opposed to
    /// a malformed or undeliverable frame).
    pub fn is_command_failure(&self) -> bool {
        matches!(self, WireError::CommandFailed { .. })
    }
}
