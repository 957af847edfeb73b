//! I/O handling
//!
//! Collects PRN output and optionally forwards each value, as a decimal line,
//! to a writer.

use std::fmt;
use std::io::Write;

#[derive(Default)]
pub struct IOHandler {
    outputs: Vec<u8>,
    sink: Option<Box<dyn Write>>,
}

impl IOHandler {
    pub fn new() -> Self {
        IOHandler {
            outputs: Vec::new(),
            sink: None,
        }
    }

    pub fn with_sink(sink: Box<dyn Write>) -> Self {
        IOHandler {
            outputs: Vec::new(),
            sink: Some(sink),
        }
    }

    pub fn write(&mut self, value: u8) -> std::io::Result<()> {
        self.outputs.push(value);
        if let Some(sink) = self.sink.as_mut() {
            writeln!(sink, "{}", value)?;
        }
        Ok(())
    }

    pub fn flush(&mut self) -> std::io::Result<()> {
        match self.sink.as_mut() {
            Some(sink) => sink.flush(),
            None => Ok(()),
        }
    }

    pub fn outputs(&self) -> &[u8] {
        &self.outputs
    }

    pub fn take_outputs(&mut self) -> Vec<u8> {
        std::mem::take(&mut self.outputs)
    }
}

impl fmt::Debug for IOHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IOHandler")
            .field("outputs", &self.outputs)
            .field("sink", &self.sink.is_some())
            .finish()
    }
}
