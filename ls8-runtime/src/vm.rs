//! Virtual Machine for LS-8

use std::io::Write;
use ls8_spec::{Address, Instruction, Opcode, Program, TraceRow, NUM_REGISTERS};
use crate::error::{Result, RuntimeError};
use crate::execute::execute;
use crate::io::IOHandler;
use crate::memory::Memory;
use crate::registers::RegisterFile;
use crate::state::{HaltReason, VMState};

/// VM configuration
#[derive(Debug, Clone)]
pub struct VMConfig {
    /// Maximum number of instructions before halting
    pub max_steps: u64,

    /// Emit a trace line per step through `tracing`
    pub trace: bool,

    /// Collect trace rows into the execution result
    pub enable_execution_trace: bool,
}

impl Default for VMConfig {
    fn default() -> Self {
        Self {
            max_steps: 1_000_000,
            trace: false,
            enable_execution_trace: false,
        }
    }
}

/// Execution result
#[derive(Debug, Clone)]
pub struct ExecutionResult {
    /// Number of instructions executed (HLT included)
    pub steps: u64,

    /// Values printed by PRN, in order
    pub outputs: Vec<u8>,

    /// Reason for halting
    pub halt_reason: HaltReason,

    /// PC at halt; the HLT address for programs that halt normally
    pub final_pc: Address,

    /// Final register values (R0-R7)
    pub registers: [u8; NUM_REGISTERS],

    /// Execution trace (if execution trace collection enabled)
    pub execution_trace: Vec<TraceRow>,
}

/// LS-8 Virtual Machine
pub struct VM {
    /// VM state (registers, PC, memory)
    state: VMState,

    /// I/O handler
    io: IOHandler,

    /// Configuration
    config: VMConfig,

    /// Execution trace (if enabled)
    execution_trace: Vec<TraceRow>,
}

impl VM {
    /// Create a new VM with the program loaded at address 0
    pub fn new(program: &Program, config: VMConfig) -> Result<Self> {
        Self::with_io(program, config, IOHandler::new())
    }

    /// Create a new VM whose PRN output is also written to `sink`
    pub fn with_output(program: &Program, config: VMConfig, sink: Box<dyn Write>) -> Result<Self> {
        Self::with_io(program, config, IOHandler::with_sink(sink))
    }

    fn with_io(program: &Program, config: VMConfig, io: IOHandler) -> Result<Self> {
        let mut state = VMState::new();
        state.memory.load_program(program)?;

        Ok(Self {
            state,
            io,
            config,
            execution_trace: Vec::new(),
        })
    }

    /// Run the VM until halt
    pub fn run(mut self) -> Result<ExecutionResult> {
        tracing::debug!(max_steps = self.config.max_steps, "starting execution");

        let halt_reason = loop {
            if let Some(reason) = self.state.halt_reason {
                break reason;
            }
            if self.state.steps >= self.config.max_steps {
                tracing::debug!(steps = self.state.steps, "step limit reached");
                self.state.halt(HaltReason::StepLimit);
                break HaltReason::StepLimit;
            }
            self.step()?;
        };

        self.io.flush()?;

        tracing::debug!(
            steps = self.state.steps,
            pc = self.state.pc,
            ?halt_reason,
            "execution finished"
        );

        Ok(ExecutionResult {
            steps: self.state.steps,
            outputs: self.io.take_outputs(),
            halt_reason,
            final_pc: self.state.pc,
            registers: self.state.registers.snapshot(),
            execution_trace: self.execution_trace,
        })
    }

    /// Fetch, decode, and execute one instruction.
    ///
    /// On a fault the state is left as it was before the faulting
    /// instruction's side effects, except for memory writes already
    /// completed by that instruction.
    pub fn step(&mut self) -> Result<()> {
        if self.config.trace || self.config.enable_execution_trace {
            let row = self.trace_row();
            if self.config.trace {
                tracing::trace!(target: "ls8_runtime::trace", "{}", row);
            }
            if self.config.enable_execution_trace {
                self.execution_trace.push(row);
            }
        }

        let inst = self.fetch_and_decode()?;
        execute(&inst, &mut self.state, &mut self.io)?;
        self.state.steps += 1;
        Ok(())
    }

    /// Fetch and decode the instruction at PC
    fn fetch_and_decode(&self) -> Result<Instruction> {
        let pc = self.state.pc;
        let opcode = self.state.memory.read(pc)?;
        let op = Opcode::try_from(opcode).map_err(|e| RuntimeError::at(pc, e))?;

        let count = op.operand_count() as usize;
        let mut operands = [0u8; 2];
        for (i, operand) in operands.iter_mut().take(count).enumerate() {
            *operand = self.state.memory.read(pc + 1 + i as Address)?;
        }

        Instruction::decode(opcode, &operands[..count]).map_err(|e| RuntimeError::at(pc, e))
    }

    fn trace_row(&self) -> TraceRow {
        let pc = self.state.pc;
        let mem = &self.state.memory;
        TraceRow::new(
            self.state.steps,
            pc,
            [mem.peek(pc), mem.peek(pc + 1), mem.peek(pc + 2)],
            self.state.registers.snapshot(),
        )
    }

    pub fn ram_read(&self, address: Address) -> Result<u8> {
        self.state.memory.read(address)
    }

    pub fn ram_write(&mut self, address: Address, value: u8) -> Result<()> {
        self.state.memory.write(address, value)
    }

    /// Get current state (for debugging)
    pub fn state(&self) -> &VMState {
        &self.state
    }

    pub fn registers(&self) -> &RegisterFile {
        &self.state.registers
    }

    pub fn memory(&self) -> &Memory {
        &self.state.memory
    }
}
