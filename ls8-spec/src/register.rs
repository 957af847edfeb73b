//! Register definitions for LS-8

use serde::{Deserialize, Serialize};
use std::fmt;
use crate::error::{Result, SpecError};

/// Number of registers
pub const NUM_REGISTERS: usize = 8;

/// Register (R0-R7)
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Register {
    R0 = 0,
    R1 = 1,
    R2 = 2,
    R3 = 3,
    R4 = 4,
    R5 = 5,
    R6 = 6,
    R7 = 7, // sp - stack pointer
}

impl Register {
    pub const SP: Self = Self::R7;

    pub const ALL: [Register; NUM_REGISTERS] = [
        Self::R0,
        Self::R1,
        Self::R2,
        Self::R3,
        Self::R4,
        Self::R5,
        Self::R6,
        Self::R7,
    ];

    #[inline]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    #[inline]
    pub fn is_sp(self) -> bool {
        self == Self::SP
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::R0 => "r0",
            Self::R1 => "r1",
            Self::R2 => "r2",
            Self::R3 => "r3",
            Self::R4 => "r4",
            Self::R5 => "r5",
            Self::R6 => "r6",
            Self::R7 => "sp",
        }
    }
}

impl TryFrom<u8> for Register {
    type Error = SpecError;

    fn try_from(index: u8) -> Result<Self> {
        Self::from_index(index as usize).ok_or(SpecError::InvalidRegister(index))
    }
}

impl fmt::Display for Register {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
