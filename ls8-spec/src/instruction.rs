//! LS-8 instruction set

use serde::{Deserialize, Serialize};
use std::fmt;
use crate::error::{Result, SpecError};
use crate::opcode::Opcode;
use crate::register::Register;

/// Decoded instruction
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Instruction {
    /// Stop execution
    Hlt,
    /// rd = imm
    Ldi { rd: Register, imm: u8 },
    /// print rs
    Prn { rs: Register },
    /// rd = rd + rs (wrapping)
    Add { rd: Register, rs: Register },
    /// rd = rd * rs (wrapping)
    Mul { rd: Register, rs: Register },
    /// sp -= 1; mem[sp] = rs
    Push { rs: Register },
    /// rd = mem[sp]; sp += 1
    Pop { rd: Register },
    /// push return address; pc = target
    Call { target: Register },
    /// pc = pop
    Ret,
}

impl Instruction {
    /// Build an instruction from its opcode byte and operand bytes.
    ///
    /// `operands` must hold at least the number of operand bytes the opcode
    /// encodes; extra bytes are ignored.
    pub fn decode(opcode: u8, operands: &[u8]) -> Result<Self> {
        let op = Opcode::try_from(opcode)?;
        if operands.len() < op.operand_count() as usize {
            return Err(SpecError::Truncated);
        }

        let reg = |i: usize| Register::try_from(operands[i]);

        let instr = match op {
            Opcode::Hlt => Instruction::Hlt,
            Opcode::Ldi => Instruction::Ldi { rd: reg(0)?, imm: operands[1] },
            Opcode::Prn => Instruction::Prn { rs: reg(0)? },
            Opcode::Add => Instruction::Add { rd: reg(0)?, rs: reg(1)? },
            Opcode::Mul => Instruction::Mul { rd: reg(0)?, rs: reg(1)? },
            Opcode::Push => Instruction::Push { rs: reg(0)? },
            Opcode::Pop => Instruction::Pop { rd: reg(0)? },
            Opcode::Call => Instruction::Call { target: reg(0)? },
            Opcode::Ret => Instruction::Ret,
        };
        Ok(instr)
    }

    /// Opcode of this instruction
    pub fn opcode(&self) -> Opcode {
        match self {
            Instruction::Hlt => Opcode::Hlt,
            Instruction::Ldi { .. } => Opcode::Ldi,
            Instruction::Prn { .. } => Opcode::Prn,
            Instruction::Add { .. } => Opcode::Add,
            Instruction::Mul { .. } => Opcode::Mul,
            Instruction::Push { .. } => Opcode::Push,
            Instruction::Pop { .. } => Opcode::Pop,
            Instruction::Call { .. } => Opcode::Call,
            Instruction::Ret => Opcode::Ret,
        }
    }

    /// Encoded length in bytes
    #[inline]
    pub fn size(&self) -> u8 {
        self.opcode().size()
    }

    /// Encode to bytes (opcode followed by operands)
    pub fn encode(&self) -> Vec<u8> {
        let mut bytes = vec![self.opcode().to_u8()];
        match *self {
            Instruction::Hlt | Instruction::Ret => {}
            Instruction::Ldi { rd, imm } => bytes.extend([rd as u8, imm]),
            Instruction::Prn { rs } | Instruction::Push { rs } => bytes.push(rs as u8),
            Instruction::Pop { rd } => bytes.push(rd as u8),
            Instruction::Add { rd, rs } | Instruction::Mul { rd, rs } => {
                bytes.extend([rd as u8, rs as u8])
            }
            Instruction::Call { target } => bytes.push(target as u8),
        }
        bytes
    }
}

impl TryFrom<&[u8]> for Instruction {
    type Error = SpecError;

    /// Decode from a byte slice starting at the opcode; trailing bytes are ignored.
    fn try_from(bytes: &[u8]) -> Result<Self> {
        let (&opcode, rest) = bytes.split_first().ok_or(SpecError::Truncated)?;
        Self::decode(opcode, rest)
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let op = self.opcode();
        match self {
            Instruction::Hlt | Instruction::Ret => write!(f, "{}", op),
            Instruction::Ldi { rd, imm } => write!(f, "{} {}, {}", op, rd, imm),
            Instruction::Prn { rs } | Instruction::Push { rs } => write!(f, "{} {}", op, rs),
            Instruction::Pop { rd } => write!(f, "{} {}", op, rd),
            Instruction::Add { rd, rs } | Instruction::Mul { rd, rs } => {
                write!(f, "{} {}, {}", op, rd, rs)
            }
            Instruction::Call { target } => write!(f, "{} {}", op, target),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_ldi() {
        let instr = Instruction::decode(0b1000_0010, &[0, 8]).unwrap();
        assert_eq!(instr, Instruction::Ldi { rd: Register::R0, imm: 8 });
    }

    #[test]
    fn test_decode_bad_register() {
        let err = Instruction::decode(Opcode::Prn.to_u8(), &[9]).unwrap_err();
        assert_eq!(err, SpecError::InvalidRegister(9));
    }

    #[test]
    fn test_decode_missing_operand() {
        let err = Instruction::decode(Opcode::Add.to_u8(), &[0]).unwrap_err();
        assert_eq!(err, SpecError::Truncated);
    }

    #[test]
    fn test_decode_bad_opcode() {
        let err = Instruction::decode(0xFF, &[]).unwrap_err();
        assert_eq!(err, SpecError::InvalidOpcode(0xFF));
    }

    #[test]
    fn test_encode_sizes_match_opcode() {
        let instrs = [
            Instruction::Hlt,
            Instruction::Ldi { rd: Register::R1, imm: 200 },
            Instruction::Prn { rs: Register::R1 },
            Instruction::Add { rd: Register::R0, rs: Register::R1 },
            Instruction::Mul { rd: Register::R0, rs: Register::R1 },
            Instruction::Push { rs: Register::R2 },
            Instruction::Pop { rd: Register::R2 },
            Instruction::Call { target: Register::R3 },
            Instruction::Ret,
        ];
        for instr in instrs {
            assert_eq!(instr.encode().len(), instr.size() as usize, "{}", instr);
        }
    }

    #[test]
    fn test_try_from_slice_ignores_trailing() {
        let bytes = [0b0100_0111, 0b0000_0000, 0b0000_0001];
        let instr = Instruction::try_from(&bytes[..]).unwrap();
        assert_eq!(instr, Instruction::Prn { rs: Register::R0 });
    }

    #[test]
    fn test_try_from_slice_truncated() {
        let bytes = [Opcode::Ldi.to_u8(), 0];
        assert_eq!(Instruction::try_from(&bytes[..]), Err(SpecError::Truncated));
        assert_eq!(Instruction::try_from(&[] as &[u8]), Err(SpecError::Truncated));
    }

    #[test]
    fn test_display() {
        assert_eq!(Instruction::Ldi { rd: Register::R0, imm: 8 }.to_string(), "LDI r0, 8");
        assert_eq!(Instruction::Add { rd: Register::R0, rs: Register::R1 }.to_string(), "ADD r0, r1");
        assert_eq!(Instruction::Push { rs: Register::R7 }.to_string(), "PUSH sp");
        assert_eq!(Instruction::Ret.to_string(), "RET");
    }
}
