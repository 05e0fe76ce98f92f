#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
  /// Moves the tape pointer one cell to the right.
  ///
  /// | Operation     | Semantics/RTL   | Command |
  /// |---------------|-----------------|---------|
  /// | Pointer Right | `ptr ← ptr + 1` | `>`     |
  Right,

  /// Moves the tape pointer one cell to the left.
  ///
  /// | Operation    | Semantics/RTL   | Command |
  /// |--------------|-----------------|---------|
  /// | Pointer Left | `ptr ← ptr - 1` | `<`     |
  Left,

  /// Increments the byte under the tape pointer, wrapping modulo 256.
  ///
  /// | Operation | Semantics/RTL                   | Command |
  /// |-----------|---------------------------------|---------|
  /// | Increment | `m[ptr] ← (m[ptr] + 1) mod 256` | `+`     |
  Increment,

  /// Decrements the byte under the tape pointer, wrapping modulo 256.
  ///
  /// | Operation | Semantics/RTL                   | Command |
  /// |-----------|---------------------------------|---------|
  /// | Decrement | `m[ptr] ← (m[ptr] - 1) mod 256` | `-`     |
  Decrement,

  /// Writes the byte under the tape pointer to the output sink.
  ///
  /// | Operation | Semantics/RTL   | Command |
  /// |-----------|-----------------|---------|
  /// | Output    | `out ← m[ptr]`  | `.`     |
  Output,

  /// Reads one byte from the input source into the cell under the tape
  /// pointer. An exhausted or failing source leaves the cell unchanged.
  ///
  /// | Operation | Semantics/RTL  | Command |
  /// |-----------|----------------|---------|
  /// | Input     | `m[ptr] ← in`  | `,`     |
  Input,

  /// Jumps forward past the matching `]` when the current cell is zero,
  /// otherwise falls through into the loop body.
  ///
  /// | Operation  | Semantics/RTL                        | Command |
  /// |------------|--------------------------------------|---------|
  /// | Loop Start | `if m[ptr] == 0 : pc ← match(pc)`    | `[`     |
  LoopStart,

  /// Jumps backward to the matching `[` when the current cell is non-zero,
  /// otherwise falls through out of the loop.
  ///
  /// | Operation | Semantics/RTL                        | Command |
  /// |-----------|--------------------------------------|---------|
  /// | Loop End  | `if m[ptr] != 0 : pc ← match(pc)`    | `]`     |
  LoopEnd,
}

impl Instruction {
  /// Decode a single program character.
  ///
  /// Anything outside the eight commands is commentary and decodes to
  /// `None`; the machine skips over it.
  pub fn decode(command: char) -> Option<Self> {
    match command {
      '>' => Some(Self::Right),
      '<' => Some(Self::Left),
      '+' => Some(Self::Increment),
      '-' => Some(Self::Decrement),
      '.' => Some(Self::Output),
      ',' => Some(Self::Input),
      '[' => Some(Self::LoopStart),
      ']' => Some(Self::LoopEnd),
      _ => None,
    }
  }
}
