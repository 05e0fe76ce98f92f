use std::fs;
use std::io;
use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use interpreter::vm::{Interpreter as _, Vm, DEFAULT_TAPE_SIZE};

#[derive(Parser, Debug)]
#[command(name = "bfvm")]
#[command(about = "Run a brainfuck program on the standard streams")]
struct Cli {
  /// Path to the brainfuck source file
  program: PathBuf,

  /// Number of cells on the tape
  #[arg(long, default_value_t = DEFAULT_TAPE_SIZE)]
  tape_size: usize,
}

fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::from_default_env())
    .init();

  let cli = Cli::parse();
  let source = fs::read_to_string(&cli.program)
    .with_context(|| format!("failed to read {}", cli.program.display()))?;

  let stdout = io::stdout();
  let stdin = io::stdin();
  let mut vm = Vm::with_io(&source, stdout.lock(), stdin.lock(), cli.tape_size)?;
  vm.execute().context("program faulted")?;
  Ok(())
}
