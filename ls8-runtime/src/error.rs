//! Runtime error types for LS-8

use thiserror::Error;
use ls8_spec::{Address, SpecError};

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("Spec error: {0}")]
    Spec(#[from] SpecError),

    #[error("Memory out of bounds: address {address:#x}")]
    OutOfBounds { address: Address },

    #[error("Illegal instruction {opcode:#010b} at PC {pc:#04x}")]
    IllegalInstruction { pc: Address, opcode: u8 },

    #[error("Invalid register index {index} at PC {pc:#04x}")]
    InvalidRegister { pc: Address, index: u8 },

    #[error("Unsupported ALU operation: {0}")]
    UnsupportedAluOperation(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl RuntimeError {
    /// Attach the faulting PC to a decode error
    pub(crate) fn at(pc: Address, err: SpecError) -> Self {
        match err {
            SpecError::InvalidOpcode(opcode) => RuntimeError::IllegalInstruction { pc, opcode },
            SpecError::InvalidRegister(index) => RuntimeError::InvalidRegister { pc, index },
            other => RuntimeError::Spec(other),
        }
    }
}

pub type Result<T> = std::result::Result<T, RuntimeError>;
