// Copyright (c) 2025 Ant Group
//
// SPDX-License-Identifier: Apache-2.0
//

//! Fan-out writing to multiple destinations.

use std::fs::File;
use std::io::{self, ErrorKind, Write};
use std::path::Path;

use anyhow::{Context, Result};

/// Fixed line written by [`broadcast`].
pub const MULTI_PAYLOAD: &str = "io.MultiWriter example\n";

/// Default artifact name for the fan-out write demo.
pub const DEFAULT_MULTI_FILE: &str = "multiwriter.txt";

/// Fans every write out to all destinations in order.
///
/// A short write on any destination is an error, and writing stops at the
/// first destination that fails.
pub struct MultiWriter {
    sinks: Vec<Box<dyn Write + Send>>,
}

impl MultiWriter {
    pub fn new() -> Self {
        MultiWriter { sinks: Vec::new() }
    }

    /// Adds `sink` as a destination for subsequent writes.
    pub fn push<W: Write + Send + 'static>(&mut self, sink: W) {
        self.sinks.push(Box::new(sink));
    }

    pub fn len(&self) -> usize {
        self.sinks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }
}

impl Default for MultiWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl Write for MultiWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        for sink in self.sinks.iter_mut() {
            let n = sink.write(buf)?;
            if n < buf.len() {
                return Err(io::Error::new(ErrorKind::WriteZero, "short write"));
            }
        }

        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        for sink in self.sinks.iter_mut() {
            sink.flush()?;
        }

        Ok(())
    }
}

/// Writes the fixed payload simultaneously to a file at `path` and to the
/// standard output stream.
pub fn broadcast<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).with_context(|| format!("create {}", path.display()))?;

    let mut writer = MultiWriter::new();
    writer.push(file);
    writer.push(io::stdout());

    writer
        .write_all(MULTI_PAYLOAD.as_bytes())
        .context("fan out payload")?;
    writer.flush().context("flush destinations")
}
