//! VM state for LS-8

use ls8_spec::Address;
use crate::memory::Memory;
use crate::registers::RegisterFile;

/// VM state
#[derive(Debug, Clone)]
pub struct VMState {
    /// Register file (R0-R6 + stack pointer)
    pub registers: RegisterFile,

    /// Program counter
    pub pc: Address,

    /// Memory
    pub memory: Memory,

    /// Instructions executed so far
    pub steps: u64,

    /// Why execution stopped; `None` while running
    pub halt_reason: Option<HaltReason>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HaltReason {
    /// HLT instruction
    Halt,
    /// Host step limit reached
    StepLimit,
}

impl VMState {
    pub fn new() -> Self {
        VMState {
            registers: RegisterFile::new(),
            pc: ls8_spec::PROGRAM_BASE,
            memory: Memory::new(),
            steps: 0,
            halt_reason: None,
        }
    }

    #[inline]
    pub fn is_halted(&self) -> bool {
        self.halt_reason.is_some()
    }

    /// Halt execution
    pub fn halt(&mut self, reason: HaltReason) {
        self.halt_reason = Some(reason);
    }
}

impl Default for VMState {
    fn default() -> Self {
        Self::new()
    }
}
