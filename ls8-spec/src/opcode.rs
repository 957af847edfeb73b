//! # LS-8 Opcode Definitions
//!
//! Every instruction is a single opcode byte followed by its operand bytes.
//!
//! ## Opcode Encoding
//!
//! ```text
//! bit   7 6   5     4      3 2 1 0
//!       A A   B     C      D D D D
//! ```
//!
//! - `AA`: number of operand bytes that follow (0-2)
//! - `B`: 1 if the instruction is handled by the ALU
//! - `C`: 1 if the instruction sets the PC itself
//! - `DDDD`: instruction identifier
//!
//! The operand count drives PC advancement for every instruction that does
//! not set the PC, so the decoder never hardcodes instruction lengths.

use serde::{Deserialize, Serialize};
use crate::error::{Result, SpecError};

/// Instruction opcode
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Opcode {
    // ========== System ==========
    /// HLT: stop the machine
    Hlt = 0b0000_0001,

    // ========== Register / immediate ==========
    /// LDI: reg[a] = imm
    Ldi = 0b1000_0010,
    /// PRN: print reg[a] as decimal
    Prn = 0b0100_0111,

    // ========== ALU ==========
    /// ADD: reg[a] = reg[a] + reg[b]
    Add = 0b1010_0000,
    /// MUL: reg[a] = reg[a] * reg[b]
    Mul = 0b1010_0010,

    // ========== Stack ==========
    /// PUSH: sp -= 1; mem[sp] = reg[a]
    Push = 0b0100_0101,
    /// POP: reg[a] = mem[sp]; sp += 1
    Pop = 0b0100_0110,

    // ========== Subroutines ==========
    /// CALL: push pc + 2; pc = reg[a]
    Call = 0b0101_0000,
    /// RET: pc = pop
    Ret = 0b0001_0001,
}

impl Opcode {
    /// Shift of the operand count field
    pub const OPERAND_COUNT_SHIFT: u8 = 6;

    /// ALU flag bit
    pub const ALU_FLAG: u8 = 0b0010_0000;

    /// "Sets PC" flag bit
    pub const SETS_PC_FLAG: u8 = 0b0001_0000;

    /// Every defined opcode
    pub const ALL: [Opcode; 9] = [
        Opcode::Hlt,
        Opcode::Ldi,
        Opcode::Prn,
        Opcode::Add,
        Opcode::Mul,
        Opcode::Push,
        Opcode::Pop,
        Opcode::Call,
        Opcode::Ret,
    ];

    /// Try to convert from u8
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0b0000_0001 => Some(Opcode::Hlt),
            0b1000_0010 => Some(Opcode::Ldi),
            0b0100_0111 => Some(Opcode::Prn),
            0b1010_0000 => Some(Opcode::Add),
            0b1010_0010 => Some(Opcode::Mul),
            0b0100_0101 => Some(Opcode::Push),
            0b0100_0110 => Some(Opcode::Pop),
            0b0101_0000 => Some(Opcode::Call),
            0b0001_0001 => Some(Opcode::Ret),
            _ => None,
        }
    }

    /// Convert to u8
    #[inline]
    pub const fn to_u8(self) -> u8 {
        self as u8
    }

    /// Number of operand bytes encoded in a raw opcode byte
    ///
    /// Works for any byte, including undefined opcodes.
    #[inline]
    pub const fn operand_count_raw(byte: u8) -> u8 {
        byte >> Self::OPERAND_COUNT_SHIFT
    }

    /// Number of operand bytes following this opcode
    #[inline]
    pub const fn operand_count(self) -> u8 {
        Self::operand_count_raw(self as u8)
    }

    /// Total instruction length in bytes
    #[inline]
    pub const fn size(self) -> u8 {
        1 + self.operand_count()
    }

    /// Check if the ALU handles this opcode
    #[inline]
    pub const fn is_alu(self) -> bool {
        self as u8 & Self::ALU_FLAG != 0
    }

    /// Check if this opcode writes the PC itself
    #[inline]
    pub const fn sets_pc(self) -> bool {
        self as u8 & Self::SETS_PC_FLAG != 0
    }

    /// Upper-case mnemonic
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Opcode::Hlt => "HLT",
            Opcode::Ldi => "LDI",
            Opcode::Prn => "PRN",
            Opcode::Add => "ADD",
            Opcode::Mul => "MUL",
            Opcode::Push => "PUSH",
            Opcode::Pop => "POP",
            Opcode::Call => "CALL",
            Opcode::Ret => "RET",
        }
    }
}

impl TryFrom<u8> for Opcode {
    type Error = SpecError;

    fn try_from(value: u8) -> Result<Self> {
        Self::from_u8(value).ok_or(SpecError::InvalidOpcode(value))
    }
}

impl std::fmt::Display for Opcode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.mnemonic())
    }
}
