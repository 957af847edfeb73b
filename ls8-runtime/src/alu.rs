//! Arithmetic-logic unit
//!
//! Register-to-register arithmetic with 8-bit wraparound.

use std::fmt;
use std::str::FromStr;
use ls8_spec::{Opcode, Register};
use crate::error::{Result, RuntimeError};
use crate::registers::RegisterFile;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AluOp {
    Add,
    /// No opcode dispatches SUB; it is only reachable through `apply`.
    Sub,
    Mul,
}

impl AluOp {
    #[inline]
    pub fn eval(self, a: u8, b: u8) -> u8 {
        match self {
            AluOp::Add => a.wrapping_add(b),
            AluOp::Sub => a.wrapping_sub(b),
            AluOp::Mul => a.wrapping_mul(b),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            AluOp::Add => "ADD",
            AluOp::Sub => "SUB",
            AluOp::Mul => "MUL",
        }
    }
}

impl TryFrom<Opcode> for AluOp {
    type Error = RuntimeError;

    fn try_from(opcode: Opcode) -> Result<Self> {
        if !opcode.is_alu() {
            return Err(RuntimeError::UnsupportedAluOperation(opcode.to_string()));
        }
        match opcode {
            Opcode::Add => Ok(AluOp::Add),
            Opcode::Mul => Ok(AluOp::Mul),
            other => Err(RuntimeError::UnsupportedAluOperation(other.to_string())),
        }
    }
}

impl FromStr for AluOp {
    type Err = RuntimeError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "ADD" => Ok(AluOp::Add),
            "SUB" => Ok(AluOp::Sub),
            "MUL" => Ok(AluOp::Mul),
            other => Err(RuntimeError::UnsupportedAluOperation(other.to_string())),
        }
    }
}

impl fmt::Display for AluOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// `registers[dest] = registers[dest] <op> registers[src]`
#[inline]
pub fn apply(registers: &mut RegisterFile, op: AluOp, dest: Register, src: Register) {
    let result = op.eval(registers.read(dest), registers.read(src));
    registers.write(dest, result);
}
