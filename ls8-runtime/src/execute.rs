//! Instruction execution for LS-8

use ls8_spec::{Address, Instruction};
use crate::alu::{self, AluOp};
use crate::error::{Result, RuntimeError};
use crate::io::IOHandler;
use crate::state::{HaltReason, VMState};

/// Execute a single decoded instruction.
///
/// Instructions that do not set the PC themselves advance it by
/// `1 + operand_count`, taken from the opcode encoding. HLT leaves the PC on
/// the HLT byte.
pub fn execute(instr: &Instruction, state: &mut VMState, io: &mut IOHandler) -> Result<()> {
    let opcode = instr.opcode();

    match *instr {
        Instruction::Hlt => {
            state.halt(HaltReason::Halt);
            return Ok(());
        }

        Instruction::Ldi { rd, imm } => {
            state.registers.write(rd, imm);
        }

        Instruction::Prn { rs } => {
            io.write(state.registers.read(rs))?;
        }

        Instruction::Add { rd, rs } | Instruction::Mul { rd, rs } => {
            alu::apply(&mut state.registers, AluOp::try_from(opcode)?, rd, rs);
        }

        // ========== Stack ==========

        Instruction::Push { rs } => {
            let sp = state.registers.dec_sp();
            let value = state.registers.read(rs);
            state.memory.write(sp as Address, value)?;
        }

        Instruction::Pop { rd } => {
            let value = state.memory.read(state.registers.sp() as Address)?;
            state.registers.write(rd, value);
            state.registers.inc_sp();
        }

        Instruction::Call { target } => {
            let target_addr = state.registers.read(target);
            let return_addr = state.pc + instr.size() as Address;
            let return_byte = u8::try_from(return_addr)
                .map_err(|_| RuntimeError::OutOfBounds { address: return_addr })?;

            let sp = state.registers.dec_sp();
            state.memory.write(sp as Address, return_byte)?;
            state.pc = target_addr as Address;
        }

        Instruction::Ret => {
            let return_addr = state.memory.read(state.registers.sp() as Address)?;
            state.pc = return_addr as Address;
            state.registers.inc_sp();
        }
    }

    if !opcode.sets_pc() {
        state.pc += opcode.size() as Address;
    }

    Ok(())
}
