// Copyright (c) 2025 Ant Group
//
// SPDX-License-Identifier: Apache-2.0
//

//! Logger construction for the crate's drain chain.

use std::io::Write;

use slog::{o, Drain};

// XXX: 'writer' param used to make testing possible.
pub fn create_logger<W>(name: &str, source: &str, level: slog::Level, writer: W) -> slog::Logger
where
    W: Write + Send + 'static,
{
    let term_drain = slog_term::FullFormat::new(slog_term::PlainDecorator::new(writer))
        .build()
        .fuse();

    // Allow filtering of records by log level
    let filter_drain = term_drain.filter_level(level).fuse();

    // Ensure the logger is thread-safe
    let async_drain = slog_async::Async::new(filter_drain).build().fuse();

    // Add some "standard" fields
    slog::Logger::root(
        async_drain,
        o!("version" => env!("CARGO_PKG_VERSION"),
            "subsystem" => "root",
            "name" => name.to_string(),
            "source" => source.to_string()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use slog::{debug, info, Level};
    use std::io;
    use std::sync::{Arc, Mutex};

    #[derive(Clone)]
    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl SharedBuf {
        fn new() -> Self {
            SharedBuf(Arc::new(Mutex::new(Vec::new())))
        }

        fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_create_logger_writes_records() {
        let buf = SharedBuf::new();
        let logger = create_logger("iowriter", "test", Level::Info, buf.clone());

        info!(logger, "logger-smoke-test");

        // Dropping the logger drains the async worker.
        drop(logger);

        assert!(buf.contents().contains("logger-smoke-test"));
    }

    #[test]
    fn test_create_logger_filters_by_level() {
        let buf = SharedBuf::new();
        let logger = create_logger("iowriter", "test", Level::Info, buf.clone());

        debug!(logger, "filtered-record");

        drop(logger);

        assert!(!buf.contents().contains("filtered-record"));
    }
}
