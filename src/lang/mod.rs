/*!
# Rust Language Module

This Rust module defines the Brainfuck language: the eight instruction
symbols and the errors a run can produce. Everything that is not an
instruction symbol is a comment.

*/

#[macro_use]
mod error;

pub use error::Error;
pub use error::ErrorCode;

pub mod symbol;
