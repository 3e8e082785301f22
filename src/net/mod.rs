// Copyright (c) 2025 Ant Group
//
// SPDX-License-Identifier: Apache-2.0
//

//! Network primitives: a raw TCP client and a minimal HTTP server.

pub mod client;
pub mod server;
