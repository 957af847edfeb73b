//! # LS-8 Runtime
//!
//! Execute LS-8 programs: a 256-byte memory, eight 8-bit registers and a
//! downward-growing stack.
//!
//! ## Features
//!
//! - **Bounds-checked memory**: out-of-range accesses fault instead of wrapping
//! - **9 instructions**: HLT, LDI, PRN, ADD, MUL, PUSH, POP, CALL, RET
//! - **8-bit ALU**: ADD, SUB, MUL with wraparound
//! - **Tracing**: per-step trace rows via `tracing` or collected in the result
//!
//! ## Example
//!
//! ```rust
//! use ls8_runtime::{VM, VMConfig};
//! use ls8_spec::{Instruction, Program, Register};
//!
//! let program = Program::from_instructions(&[
//!     Instruction::Ldi { rd: Register::R0, imm: 8 },
//!     Instruction::Prn { rs: Register::R0 },
//!     Instruction::Hlt,
//! ]).unwrap();
//! let vm = VM::new(&program, VMConfig::default()).unwrap();
//! let result = vm.run().unwrap();
//! assert_eq!(result.outputs, vec![8]);
//! ```

pub mod error;
pub mod memory;
pub mod registers;
pub mod alu;
pub mod state;
pub mod io;
pub mod execute;
pub mod vm;

pub use error::{RuntimeError, Result};
pub use memory::Memory;
pub use registers::RegisterFile;
pub use alu::AluOp;
pub use state::{VMState, HaltReason};
pub use io::IOHandler;
pub use vm::{VM, VMConfig, ExecutionResult};

/// Simple execution helper
///
/// Runs a program with the default configuration and returns the printed values.
pub fn run(program: &ls8_spec::Program) -> Result<Vec<u8>> {
    let vm = VM::new(program, VMConfig::default())?;
    Ok(vm.run()?.outputs)
}
