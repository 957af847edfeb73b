//! `ls8`: load a program file and run it on the LS-8 machine.
//!
//! PRN output goes to stdout; logs and trace lines go to stderr.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use ls8_runtime::{ExecutionResult, HaltReason, VMConfig, VM};
use tracing_subscriber::EnvFilter;

/// LS-8 register machine emulator
#[derive(Parser, Debug)]
#[command(name = "ls8", version, about)]
struct Args {
    /// Program file: one binary literal per line, `#` starts a comment
    program: PathBuf,

    /// Print the machine state before every instruction
    #[arg(long)]
    trace: bool,

    /// Stop after this many instructions
    #[arg(long, default_value_t = 1_000_000)]
    max_steps: u64,

    /// Fail if the program file does not exist instead of running an empty machine
    #[arg(long)]
    strict: bool,
}

impl Args {
    fn vm_config(&self) -> VMConfig {
        VMConfig {
            max_steps: self.max_steps,
            trace: self.trace,
            ..VMConfig::default()
        }
    }
}

fn init_tracing(trace: bool) -> Result<()> {
    let mut filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    if trace {
        filter = filter.add_directive("ls8_runtime::trace=trace".parse()?);
    }

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
    Ok(())
}

/// Load and run the program named by `args`, writing PRN lines to `out`.
///
/// Returns `None` when nothing was loaded and the machine was not started.
fn run(args: &Args, out: Box<dyn Write>) -> Result<Option<ExecutionResult>> {
    let program = if args.strict {
        ls8_loader::load_file(&args.program)
    } else {
        ls8_loader::load_file_or_empty(&args.program)
    }
    .with_context(|| format!("failed to load {}", args.program.display()))?;

    // Zeroed memory holds no valid opcode
    if program.is_empty() {
        tracing::warn!("no instructions loaded, nothing to run");
        return Ok(None);
    }

    let vm = VM::with_output(&program, args.vm_config(), out)?;
    let result = vm
        .run()
        .with_context(|| format!("execution of {} failed", args.program.display()))?;

    if result.halt_reason == HaltReason::StepLimit {
        tracing::warn!(steps = result.steps, "stopped at step limit without reaching HLT");
    }

    Ok(Some(result))
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.trace)?;
    run(&args, Box::new(std::io::stdout()))?;
    Ok(())
}
