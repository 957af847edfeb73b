//! # Execution Trace Types
//!
//! A trace row captures the machine state just before an instruction runs.

use serde::{Deserialize, Serialize};
use std::fmt;
use crate::{Address, NUM_REGISTERS};

/// A single execution trace row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceRow {
    /// Step number (0-based)
    pub step: u64,

    /// Program counter
    pub pc: Address,

    /// Memory at pc, pc + 1, pc + 2 (zero past the end of memory)
    pub bytes: [u8; 3],

    /// Register values before execution
    pub registers: [u8; NUM_REGISTERS],
}

impl TraceRow {
    pub fn new(step: u64, pc: Address, bytes: [u8; 3], registers: [u8; NUM_REGISTERS]) -> Self {
        Self { step, pc, bytes, registers }
    }
}

/// `TRACE: 00 | 82 00 08 | 00 00 00 00 00 00 00 F4`
impl fmt::Display for TraceRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "TRACE: {:02X} | {:02X} {:02X} {:02X} |",
            self.pc, self.bytes[0], self.bytes[1], self.bytes[2]
        )?;
        for reg in &self.registers {
            write!(f, " {:02X}", reg)?;
        }
        Ok(())
    }
}
