//! Integration tests for the LS-8 runtime
//!
//! Programs are written as loader source so the tests read like the files
//! users run.

use ls8_loader::parse;
use ls8_runtime::{HaltReason, RuntimeError, VMConfig, VM};
use ls8_spec::{Instruction, Program, Register};

fn run_source(source: &str) -> ls8_runtime::ExecutionResult {
    let program = parse(source).expect("Parse failed");
    VM::new(&program, VMConfig::default())
        .expect("Load failed")
        .run()
        .expect("Execution failed")
}

// ============================================================================
// Basic Instruction Tests
// ============================================================================

#[test]
fn test_ldi_prn_every_value() {
    for value in [0u8, 1, 8, 127, 128, 255] {
        let program = Program::from_instructions(&[
            Instruction::Ldi { rd: Register::R3, imm: value },
            Instruction::Prn { rs: Register::R3 },
            Instruction::Hlt,
        ])
        .unwrap();
        let result = VM::new(&program, VMConfig::default()).unwrap().run().unwrap();
        assert_eq!(result.outputs, vec![value]);
    }
}

#[test]
fn test_add_prints_eight() {
    let result = run_source(
        r#"
        10000010 # LDI R0,5
        00000000
        00000101
        10000010 # LDI R1,3
        00000001
        00000011
        10100000 # ADD R0,R1
        00000000
        00000001
        01000111 # PRN R0
        00000000
        00000001 # HLT
    "#,
    );
    assert_eq!(result.outputs, vec![8]);
}

#[test]
fn test_mul_prints_fifteen() {
    let result = run_source(
        r#"
        10000010 # LDI R0,5
        00000000
        00000101
        10000010 # LDI R1,3
        00000001
        00000011
        10100010 # MUL R0,R1
        00000000
        00000001
        01000111 # PRN R0
        00000000
        00000001 # HLT
    "#,
    );
    assert_eq!(result.outputs, vec![15]);
}

#[test]
fn test_mul_wraps_to_eight_bits() {
    let program = Program::from_instructions(&[
        Instruction::Ldi { rd: Register::R0, imm: 200 },
        Instruction::Ldi { rd: Register::R1, imm: 2 },
        Instruction::Mul { rd: Register::R0, rs: Register::R1 },
        Instruction::Prn { rs: Register::R0 },
        Instruction::Hlt,
    ])
    .unwrap();
    assert_eq!(ls8_runtime::run(&program).unwrap(), vec![144]);
}

// ============================================================================
// Halt Tests
// ============================================================================

#[test]
fn test_final_pc_is_hlt_address() {
    let program = Program::from_instructions(&[
        Instruction::Ldi { rd: Register::R0, imm: 1 },
        Instruction::Push { rs: Register::R0 },
        Instruction::Pop { rd: Register::R1 },
        Instruction::Prn { rs: Register::R1 },
        Instruction::Hlt,
    ])
    .unwrap();
    let hlt_address = (program.len() - 1) as u16;

    let result = VM::new(&program, VMConfig::default()).unwrap().run().unwrap();
    assert_eq!(result.halt_reason, HaltReason::Halt);
    assert_eq!(result.final_pc, hlt_address);
}

#[test]
fn test_code_after_hlt_not_executed() {
    let program = Program::from_instructions(&[
        Instruction::Hlt,
        Instruction::Ldi { rd: Register::R0, imm: 9 },
        Instruction::Prn { rs: Register::R0 },
    ])
    .unwrap();
    let result = VM::new(&program, VMConfig::default()).unwrap().run().unwrap();
    assert!(result.outputs.is_empty());
    assert_eq!(result.steps, 1);
    assert_eq!(result.final_pc, 0);
}

// ============================================================================
// Subroutine Tests
// ============================================================================

#[test]
fn test_call_resumes_after_call() {
    // 0: LDI R1,10   3: CALL R1   5: PRN R0   7: HLT
    // 8: (padding)  10: LDI R0,42  13: RET
    let mut code = Program::from_instructions(&[
        Instruction::Ldi { rd: Register::R1, imm: 10 },
        Instruction::Call { target: Register::R1 },
        Instruction::Prn { rs: Register::R0 },
        Instruction::Hlt,
    ])
    .unwrap()
    .code;
    code.extend([0, 0]);
    code.extend(Instruction::Ldi { rd: Register::R0, imm: 42 }.encode());
    code.extend(Instruction::Ret.encode());
    let program = Program::from_bytes(code).unwrap();

    let config = VMConfig { enable_execution_trace: true, ..VMConfig::default() };
    let result = VM::new(&program, config).unwrap().run().unwrap();

    assert_eq!(result.outputs, vec![42]);
    let pcs: Vec<u16> = result.execution_trace.iter().map(|row| row.pc).collect();
    assert_eq!(pcs, vec![0, 3, 10, 13, 5, 7]);
    assert_eq!(result.registers[Register::SP.index()], ls8_spec::STACK_TOP);
}

#[test]
fn test_nested_calls() {
    // main:  0 LDI R1,20   3 LDI R2,30   6 CALL R1   8 PRN R0   10 HLT
    // f(20): 20 LDI R0,1   23 CALL R2   25 ADD R0,R0   28 RET
    // g(30): 30 LDI R3,5   33 ADD R0,R3   36 RET
    let mut code = vec![0u8; 37];
    let mut put = |addr: usize, instr: Instruction| {
        let bytes = instr.encode();
        code[addr..addr + bytes.len()].copy_from_slice(&bytes);
    };
    put(0, Instruction::Ldi { rd: Register::R1, imm: 20 });
    put(3, Instruction::Ldi { rd: Register::R2, imm: 30 });
    put(6, Instruction::Call { target: Register::R1 });
    put(8, Instruction::Prn { rs: Register::R0 });
    put(10, Instruction::Hlt);
    put(20, Instruction::Ldi { rd: Register::R0, imm: 1 });
    put(23, Instruction::Call { target: Register::R2 });
    put(25, Instruction::Add { rd: Register::R0, rs: Register::R0 });
    put(28, Instruction::Ret);
    put(30, Instruction::Ldi { rd: Register::R3, imm: 5 });
    put(33, Instruction::Add { rd: Register::R0, rs: Register::R3 });
    put(36, Instruction::Ret);
    let program = Program::from_bytes(code).unwrap();

    let result = VM::new(&program, VMConfig::default()).unwrap().run().unwrap();
    assert_eq!(result.outputs, vec![12]);
    assert_eq!(result.final_pc, 10);
}

// ============================================================================
// Fault Tests
// ============================================================================

#[test]
fn test_illegal_instruction_is_fatal() {
    let result = parse("10000010\n00000000\n00000001\n11111111\n")
        .map(|p| VM::new(&p, VMConfig::default()).unwrap().run());
    assert!(matches!(
        result,
        Ok(Err(RuntimeError::IllegalInstruction { pc: 3, opcode: 0xFF }))
    ));
}

#[test]
fn test_runaway_recursion_hits_step_limit() {
    let program = Program::from_instructions(&[
        Instruction::Ldi { rd: Register::R0, imm: 3 },
        Instruction::Call { target: Register::R0 },
    ])
    .unwrap();
    let config = VMConfig { max_steps: 50, ..VMConfig::default() };
    let result = VM::new(&program, config).unwrap().run().unwrap();
    assert_eq!(result.halt_reason, HaltReason::StepLimit);
    assert_eq!(result.steps, 50);
    // Every step after the first is a CALL
    assert_eq!(result.registers[Register::SP.index()], ls8_spec::STACK_TOP - 49);
}
