//! # LS-8 Specification
//!
//! 8-bit register machine instruction set.
//!
//! ## Key Features
//! - 256 bytes of byte-addressed memory (code and stack share it)
//! - 8 registers, R7 doubles as the stack pointer
//! - Variable-length instructions: one opcode byte followed by 0-2 operand bytes
//! - Operand count encoded in the top two bits of every opcode
//! - Downward-growing stack starting at `STACK_TOP`

pub mod error;
pub mod opcode;
pub mod register;
pub mod instruction;
pub mod program;
pub mod trace;

pub use error::{SpecError, Result};
pub use opcode::Opcode;
pub use register::{Register, NUM_REGISTERS};
pub use instruction::Instruction;
pub use program::Program;
pub use trace::TraceRow;

/// Memory size in bytes
pub const MEMORY_SIZE: usize = 256;

/// Initial stack pointer value; the stack grows down from here
pub const STACK_TOP: u8 = 0xF4;

/// Address of the first instruction
pub const PROGRAM_BASE: Address = 0;

/// Memory address. Wider than a byte so that `pc + n` past the end of
/// memory is representable and can be reported.
pub type Address = u16;

/// Memory cell / register value
pub type Word = u8;
