// Copyright (c) 2025 Ant Group
//
// SPDX-License-Identifier: Apache-2.0
//

//! Standard-output write demo.

use std::io::{self, Write};

use anyhow::{Context, Result};

/// Fixed line emitted by [`write_stdout`].
pub const STDOUT_PAYLOAD: &str = "os.Stdout example\n";

/// Writes the fixed payload to `sink`.
pub fn write_to<W: Write>(sink: &mut W) -> Result<()> {
    sink.write_all(STDOUT_PAYLOAD.as_bytes())
        .context("write stdout payload")
}

/// Writes the fixed payload to the standard output stream.
pub fn write_stdout() -> Result<()> {
    write_to(&mut io::stdout())
}
