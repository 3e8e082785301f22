// Copyright (c) 2025 Ant Group
//
// SPDX-License-Identifier: Apache-2.0
//

//! iowriter is a collection of isolated example operations over basic I/O
//! primitives: trait-object dispatch, plain-text file writing, standard
//! output writing, in-memory string building, raw TCP dialing, a minimal
//! HTTP server, fan-out writing and gzip-compressed file writing.
//!
//! Each operation is self-contained and shares no state with the others.
//! Fixed payloads and artifact names are exposed as constants so that
//! embedding code and tests can check the produced bytes.
//!
//! The network operations log through the `slog-scope` global logger;
//! [`logging::create_logger`] builds a suitable root logger for embedding
//! code to install.

pub mod greet;
pub mod logging;
pub mod net;
pub mod output;
