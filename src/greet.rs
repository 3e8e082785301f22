// Copyright (c) 2025 Ant Group
//
// SPDX-License-Identifier: Apache-2.0
//

//! Trait-object dispatch demo: a value constructed behind a `dyn` seam
//! introduces itself through a single polymorphic method.

use std::io::Write;

use anyhow::{Context, Result};

/// Name spoken by [`greeting`].
pub const DEFAULT_NAME: &str = "wozozo";

/// Something that can introduce itself to a sink.
pub trait Talker {
    fn talk(&self, sink: &mut dyn Write) -> Result<()>;
}

/// Introduces itself with a fixed sentence carrying its name.
pub struct Greeter {
    name: String,
}

impl Greeter {
    pub fn new<S: Into<String>>(name: S) -> Self {
        Greeter { name: name.into() }
    }
}

impl Talker for Greeter {
    fn talk(&self, sink: &mut dyn Write) -> Result<()> {
        writeln!(sink, "Hello, my name is {}", self.name).context("write greeting")
    }
}

/// Builds a [`Greeter`] for [`DEFAULT_NAME`] and drives it through the
/// trait object.
pub fn greeting(sink: &mut dyn Write) -> Result<()> {
    let talker: &dyn Talker = &Greeter::new(DEFAULT_NAME);
    talker.talk(sink)
}
