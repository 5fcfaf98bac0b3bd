//! # Streaming Brainfuck
//!
//! A Brainfuck interpreter that never parses ahead. The program is pulled
//! from its source stream one byte at a time, exactly as far as execution
//! has reached, so a program arriving over a slow pipe starts running
//! before it has finished arriving. Loop targets are discovered on first
//! use and memoized, which makes repeat iterations jump in constant time.
//!
//! Begin by opening a terminal and running the executable with a program
//! file, or with no arguments for an interactive session. See the
//! [Introduction](_Introduction) for a tour of the language.
//!
//! The machine is also usable as a library. Streams are borrowed for the
//! duration of a run and never closed:
//!
//! ```
//! use brainfuck::mach::Machine;
//!
//! let mut source = "++[>++<-]>.".as_bytes();
//! let mut output = Vec::new();
//! let mut machine = Machine::<u8>::new(&mut source, &mut output, None);
//! machine.run().unwrap();
//! drop(machine); // releases the borrowed streams
//! assert_eq!(output, [4]);
//! ```

#[path = "doc/introduction.rs"]
#[allow(non_snake_case)]
pub mod _Introduction;

pub mod lang;
pub mod mach;
pub mod term;
