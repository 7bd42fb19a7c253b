// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Text protocol for playd daemon communication.
//!
//! Wire format: newline-delimited text frames, carried as 4-byte
//! length-prefixed (big-endian) messages on the channel. A reply frame's
//! first line is a status line (`OK ...` or a failure code); payload lines
//! follow, one entry per line.

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

mod command;
mod error;
mod frame;
mod reply;
mod tags;

pub use command::Command;
pub use error::WireError;
pub use frame::{read_message, write_message, MAX_FRAME_LEN};
pub use reply::decode;
pub use tags::{decode_tags, TagDict};
