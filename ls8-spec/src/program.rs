//! # Program Image for LS-8
//!
//! A program is the raw byte sequence deposited into memory starting at
//! `PROGRAM_BASE`. It must fit in memory.

use serde::{Deserialize, Serialize};
use std::fmt;
use crate::error::{Result, SpecError};
use crate::instruction::Instruction;
use crate::MEMORY_SIZE;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Program {
    /// Instruction bytes, in load order
    pub code: Vec<u8>,
}

impl Program {
    /// Create an empty program
    pub fn new() -> Self {
        Self { code: Vec::new() }
    }

    /// Create a program from raw bytes
    pub fn from_bytes(code: Vec<u8>) -> Result<Self> {
        let program = Self { code };
        program.validate()?;
        Ok(program)
    }

    /// Encode a sequence of instructions into a program
    pub fn from_instructions(instructions: &[Instruction]) -> Result<Self> {
        let code = instructions.iter().flat_map(Instruction::encode).collect();
        Self::from_bytes(code)
    }

    /// Check that the program fits in memory
    pub fn validate(&self) -> Result<()> {
        if self.code.len() > MEMORY_SIZE {
            return Err(SpecError::ProgramTooLarge { len: self.code.len() });
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.code.len()
    }

    pub fn is_empty(&self) -> bool {
        self.code.is_empty()
    }
}

/// Renders the program in loader source form: one 8-digit binary literal per line.
impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.code {
            writeln!(f, "{:08b}", byte)?;
        }
        Ok(())
    }
}
