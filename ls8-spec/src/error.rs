//! # Error Types for LS-8

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SpecError {
    #[error("Invalid opcode: {0:#04x}")]
    InvalidOpcode(u8),

    #[error("Invalid register index: {0} (valid range: 0-7)")]
    InvalidRegister(u8),

    #[error("Truncated instruction: missing opcode or operand bytes")]
    Truncated,

    #[error("Program too large: {len} bytes (memory holds {max})", max = crate::MEMORY_SIZE)]
    ProgramTooLarge { len: usize },
}

pub type Result<T> = std::result::Result<T, SpecError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SpecError::InvalidRegister(8);
        assert_eq!(err.to_string(), "Invalid register index: 8 (valid range: 0-7)");

        let err = SpecError::InvalidOpcode(0xFF);
        assert_eq!(err.to_string(), "Invalid opcode: 0xff");
    }

    #[test]
    fn test_program_too_large_display() {
        let err = SpecError::ProgramTooLarge { len: 300 };
        assert_eq!(err.to_string(), "Program too large: 300 bytes (memory holds 256)");
    }
}
