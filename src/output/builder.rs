// Copyright (c) 2025 Ant Group
//
// SPDX-License-Identifier: Apache-2.0
//

//! In-memory string building demo.

use std::io::Write;

use anyhow::{Context, Result};

/// Fixed line accumulated by [`build_message`].
pub const BUILDER_PAYLOAD: &str = "strings.Builder example\n";

/// Accumulates the fixed payload in an owned buffer.
pub fn build_message() -> String {
    let mut message = String::new();
    message.push_str(BUILDER_PAYLOAD);

    message
}

/// Builds the message in memory, then emits it to `sink`.
pub fn print_message<W: Write>(sink: &mut W) -> Result<()> {
    sink.write_all(build_message().as_bytes())
        .context("write built message")
}
