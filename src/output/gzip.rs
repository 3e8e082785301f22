// Copyright (c) 2025 Ant Group
//
// SPDX-License-Identifier: Apache-2.0
//

//! Gzip-compressed file write demo.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use flate2::{Compression, GzBuilder};

/// Fixed line compressed by [`write_compressed_file`].
pub const GZIP_PAYLOAD: &str = "gzip.writer example\n";

/// Member name recorded in the gzip header.
pub const GZIP_MEMBER_NAME: &str = "test.txt";

/// Default artifact name for the compressed write demo.
pub const DEFAULT_GZIP_FILE: &str = "test.txt.gz";

/// Creates `path`, wraps it in a gzip stream carrying
/// [`GZIP_MEMBER_NAME`] in the header, writes the fixed payload and
/// finishes the stream so the trailer lands on disk.
pub fn write_compressed_file<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).with_context(|| format!("create {}", path.display()))?;

    let mut encoder = GzBuilder::new()
        .filename(GZIP_MEMBER_NAME)
        .write(file, Compression::default());
    encoder
        .write_all(GZIP_PAYLOAD.as_bytes())
        .context("write gzip payload")?;
    encoder.finish().context("finish gzip stream")?;

    Ok(())
}
