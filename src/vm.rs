use std::io::{self, Read, Write};

use tracing::{debug, trace};

use crate::instruction::Instruction;
use crate::program::Program;

/// Number of tape cells allocated by the convenience constructor
pub const DEFAULT_TAPE_SIZE: usize = 1024;

#[derive(Debug, Clone, Copy, PartialEq)]
enum State {
  Running,
  Halted,
}

/// An error raised while building or running an interpreter
#[derive(thiserror::Error, Debug)]
pub enum Error {
  #[error("program cannot be empty")]
  EmptyProgram,

  #[error("tape size cannot be less than 1")]
  TapeSizeTooSmall,

  #[error("tape pointer {0} left the tape")]
  PointerOutOfRange(isize),
}

/// Something that can run a brainfuck program to completion.
///
/// There is exactly one implementation, [`Vm`]; the trait is the seam that
/// keeps embedding callers away from the machine's mutable state.
pub trait Interpreter {
  /// Run the bound program until the program counter falls off the end of
  /// the command text, or a tape fault aborts the run.
  fn execute(&mut self) -> Result<(), Error>;
}

/// A brainfuck virtual machine.
///
/// Owns the program, a fixed-size byte tape, both cursors, and the two I/O
/// handles for the duration of its life. The handles are never closed here;
/// hand in `&mut` borrows if you want them back after the run.
///
/// State carries over between [`Interpreter::execute`] calls: a halted
/// machine stays halted, and a faulted one resumes at the instruction that
/// faulted.
#[derive(Debug)]
pub struct Vm<R, W> {
  program: Program,
  tape: Vec<u8>,
  pointer: isize,
  pc: usize,
  state: State,
  input: R,
  output: W,
}

impl Vm<io::Stdin, io::Stdout> {
  /// Create an interpreter over the standard streams with a tape of
  /// [`DEFAULT_TAPE_SIZE`] cells
  pub fn new(program: &str) -> Result<Self, Error> {
    Self::with_io(program, io::stdout(), io::stdin(), DEFAULT_TAPE_SIZE)
  }
}

impl<R, W> Vm<R, W>
where
  R: Read,
  W: Write,
{
  /// Bind a program, an output sink, an input source, and a fresh tape of
  /// `tape_size` zeroed cells into one machine.
  ///
  /// Fails with [`Error::EmptyProgram`] or [`Error::TapeSizeTooSmall`]
  /// before the tape is allocated.
  pub fn with_io(program: &str, output: W, input: R, tape_size: usize) -> Result<Self, Error> {
    if program.is_empty() {
      return Err(Error::EmptyProgram);
    }
    if tape_size < 1 {
      return Err(Error::TapeSizeTooSmall);
    }
    let program = Program::from(program);
    debug!(commands = program.len(), tape_size, "interpreter ready");
    Ok(Self {
      program,
      tape: vec![0; tape_size],
      pointer: 0,
      pc: 0,
      state: State::Running,
      input,
      output,
    })
  }

  fn cell(&self) -> Result<u8, Error> {
    let pointer = self.pointer;
    usize::try_from(pointer)
      .ok()
      .and_then(|index| self.tape.get(index).copied())
      .ok_or(Error::PointerOutOfRange(pointer))
  }

  fn cell_mut(&mut self) -> Result<&mut u8, Error> {
    let pointer = self.pointer;
    usize::try_from(pointer)
      .ok()
      .and_then(|index| self.tape.get_mut(index))
      .ok_or(Error::PointerOutOfRange(pointer))
  }

  /// Dispatch the character under the program counter, then advance past it
  fn step(&mut self) -> Result<(), Error> {
    let command = self.program.get(self.pc);
    match command.and_then(Instruction::decode) {
      Some(Instruction::Right) => self.pointer += 1,
      Some(Instruction::Left) => self.pointer -= 1,
      Some(Instruction::Increment) => {
        let cell = self.cell_mut()?;
        *cell = cell.wrapping_add(1);
      }
      Some(Instruction::Decrement) => {
        let cell = self.cell_mut()?;
        *cell = cell.wrapping_sub(1);
      }
      Some(Instruction::Output) => {
        // a failing sink does not fault the program
        let value = self.cell()?;
        let _ = self.output.write_all(&[value]);
      }
      Some(Instruction::Input) => {
        // an exhausted or failing source leaves the cell untouched
        let mut byte = [0u8; 1];
        if self.input.read_exact(&mut byte).is_ok() {
          *self.cell_mut()? = byte[0];
        }
      }
      Some(Instruction::LoopStart) => {
        if self.cell()? == 0 {
          self.jump();
        }
      }
      Some(Instruction::LoopEnd) => {
        if self.cell()? != 0 {
          self.jump();
        }
      }
      // every other character is commentary
      None => {}
    }
    self.pc += 1;
    Ok(())
  }

  /// Reposition the program counter onto the partner of the bracket it is
  /// currently on; the post-dispatch increment then resumes execution one
  /// past the partner. An unmatched bracket parks the counter past the end
  /// of the program, which halts on the next fetch.
  fn jump(&mut self) {
    let target = self.program.matching_bracket(self.pc);
    trace!(from = self.pc, to = ?target, "jump");
    self.pc = target.unwrap_or_else(|| self.program.len());
  }
}

impl<R, W> Interpreter for Vm<R, W>
where
  R: Read,
  W: Write,
{
  fn execute(&mut self) -> Result<(), Error> {
    if self.state == State::Halted {
      return Ok(());
    }
    while self.pc < self.program.len() {
      self.step()?;
    }
    self.state = State::Halted;
    let _ = self.output.flush();
    Ok(())
  }
}
