//! Memory subsystem
//!
//! Flat 256-byte RAM shared by code and stack. Every access is bounds-checked.

use ls8_spec::{Address, Program, SpecError, MEMORY_SIZE, PROGRAM_BASE};
use crate::error::{Result, RuntimeError};

#[derive(Debug, Clone)]
pub struct Memory {
    data: [u8; MEMORY_SIZE],
}

impl Memory {
    pub fn new() -> Self {
        Memory { data: [0; MEMORY_SIZE] }
    }

    #[inline]
    fn index(address: Address) -> Result<usize> {
        let index = address as usize;
        if index >= MEMORY_SIZE {
            return Err(RuntimeError::OutOfBounds { address });
        }
        Ok(index)
    }

    pub fn read(&self, address: Address) -> Result<u8> {
        Ok(self.data[Self::index(address)?])
    }

    pub fn write(&mut self, address: Address, value: u8) -> Result<()> {
        self.data[Self::index(address)?] = value;
        Ok(())
    }

    /// Read without faulting; addresses past the end read as zero
    pub fn peek(&self, address: Address) -> u8 {
        self.data.get(address as usize).copied().unwrap_or(0)
    }

    /// Copy program bytes to memory starting at `PROGRAM_BASE`
    pub fn load_program(&mut self, program: &Program) -> Result<()> {
        program.validate()?;
        let base = PROGRAM_BASE as usize;
        let end = base + program.len();
        let dest = self
            .data
            .get_mut(base..end)
            .ok_or(SpecError::ProgramTooLarge { len: program.len() })?;
        dest.copy_from_slice(&program.code);
        Ok(())
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}
