// Copyright (c) 2025 Ant Group
//
// SPDX-License-Identifier: Apache-2.0
//

//! Plain-text file write demo.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

/// Fixed line written by [`write_text_file`].
pub const TEXT_PAYLOAD: &str = "os.File example\n";

/// Default artifact name for the plain-text write demo.
pub const DEFAULT_TEXT_FILE: &str = "test.txt";

/// Creates `path` and writes the fixed payload into it, returning the
/// number of bytes written.
pub fn write_text_file<P: AsRef<Path>>(path: P) -> Result<usize> {
    let path = path.as_ref();
    let mut file =
        File::create(path).with_context(|| format!("create {}", path.display()))?;
    file.write_all(TEXT_PAYLOAD.as_bytes())
        .with_context(|| format!("write {}", path.display()))?;

    Ok(TEXT_PAYLOAD.len())
}
