//! Bare-bones virtual machine for the brainfuck esoteric language
//!
//! <https://esolangs.org/wiki/Brainfuck>
//!
//! eight commands, one byte tape, and whatever i/o you hand it...

pub mod instruction;
pub mod program;
pub mod vm;
