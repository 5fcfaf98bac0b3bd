//! # Brainfuck
//!
//! A streaming interpreter for the Brainfuck programming language.

fn main() {
    brainfuck::term::main()
}
