use super::{Address, Cell, Dispatch, Operation, Stack};
use crate::error;
use crate::lang::{symbol, Error};
use std::collections::HashMap;
use std::io::{Read, Write};

type Result<T> = std::result::Result<T, Error>;

const DATA_LENGTH: usize = 300;
const TAPE_CAPACITY: usize = 30000;

/// ## The streaming machine
///
/// Owns the whole interpreter state for one run: the lazily filled
/// program tape, the data tape, both pointers, the loop stack, and the
/// jump map. The three streams are borrowed for the life of the machine
/// and never closed here; that belongs to the host.
///
/// `run` drives a program to the end of its source stream. `step` fetches
/// and dispatches a single instruction, for hosts that need their own
/// loop (the terminal front end uses it to poll for CTRL-C).
pub struct Machine<'a, C: Cell> {
    source: &'a mut dyn Read,
    output: &'a mut dyn Write,
    input: Option<&'a mut dyn Read>,
    program: Vec<u8>,
    data: Vec<C>,
    pc: Address,
    dp: Address,
    dispatch: Dispatch<'a, C>,
    loop_stack: Stack<Address>,
    jump_map: HashMap<Address, Address>,
}

impl<'a, C: Cell> Machine<'a, C> {
    pub fn new(
        source: &'a mut dyn Read,
        output: &'a mut dyn Write,
        input: Option<&'a mut dyn Read>,
    ) -> Machine<'a, C> {
        let mut data = Vec::with_capacity(TAPE_CAPACITY);
        data.resize(DATA_LENGTH, C::ZERO);
        Machine {
            source,
            output,
            input,
            program: Vec::with_capacity(TAPE_CAPACITY),
            data,
            pc: 0,
            dp: 0,
            dispatch: Dispatch::new(),
            loop_stack: Stack::new(),
            jump_map: HashMap::new(),
        }
    }

    pub fn pc(&self) -> Address {
        self.pc
    }
    pub fn set_pc(&mut self, pc: Address) {
        self.pc = pc
    }
    pub fn data_pointer(&self) -> Address {
        self.dp
    }
    /// Moves the data pointer, growing the data tape to cover it.
    pub fn set_data_pointer(&mut self, dp: Address) {
        if dp >= self.data.len() {
            self.data.resize(dp + 1, C::ZERO);
        }
        self.dp = dp;
    }
    pub fn cell(&self) -> C {
        self.data[self.dp]
    }
    pub fn set_cell(&mut self, value: C) {
        self.data[self.dp] = value
    }
    pub fn data(&self) -> &[C] {
        &self.data
    }
    pub fn program(&self) -> &[u8] {
        &self.program
    }
    pub fn jump_target(&self, open: Address) -> Option<Address> {
        self.jump_map.get(&open).copied()
    }
    pub fn loop_depth(&self) -> usize {
        self.loop_stack.len()
    }

    pub fn set_operation(&mut self, symbol: u8, operation: Operation<'a, C>) {
        self.dispatch.set(symbol, operation)
    }
    pub fn remove_operation(&mut self, symbol: u8) -> Option<Operation<'a, C>> {
        self.dispatch.remove(symbol)
    }
    pub fn operation(&self, symbol: u8) -> Option<Operation<'a, C>> {
        self.dispatch.get(symbol)
    }

    /// Return the instruction at the program counter, pulling bytes from
    /// the source stream as needed. Bytes the dispatch table does not
    /// recognize are comments and never occupy a program position.
    pub fn next_symbol(&mut self) -> Result<u8> {
        while self.pc >= self.program.len() {
            let symbol = self.read_source()?;
            if self.dispatch.recognizes(symbol) {
                self.program.push(symbol);
            }
        }
        Ok(self.program[self.pc])
    }

    /// Fetch the instruction at the program counter and dispatch it.
    pub fn step(&mut self) -> Result<()> {
        let symbol = self.next_symbol()?;
        match self.dispatch.get(symbol) {
            Some(operation) => operation(self),
            None => Err(error!(UnknownInstruction, self.pc)),
        }
    }

    /// Run until the source stream is exhausted, which is the normal halt.
    /// Any other error aborts the run.
    pub fn run(&mut self) -> Result<()> {
        loop {
            if let Err(error) = self.step() {
                if error.is_end_of_program() {
                    return Ok(());
                }
                return Err(error);
            }
        }
    }

    fn read_source(&mut self) -> Result<u8> {
        let mut buf = [0; 1];
        match self.source.read(&mut buf) {
            Ok(0) => Err(error!(EndOfProgram)),
            Ok(_) => Ok(buf[0]),
            Err(error) => Err(error!(ReadFailure, self.pc; &error.to_string())),
        }
    }

    /// Scan the source stream forward for the `]` matching the `[` at the
    /// program counter, recording every pair discovered on the way. Nested
    /// loops are tracked with an explicit stack, not recursion, so nesting
    /// depth is bounded by memory rather than the call stack. Running out
    /// of stream mid-scan means the loop never closes.
    fn seek_loop_close(&mut self) -> Result<Address> {
        let mut pending = Stack::new();
        pending.push(self.pc);
        let mut index = self.program.len();
        loop {
            let symbol = match self.read_source() {
                Ok(symbol) => symbol,
                Err(error) => {
                    if error.is_end_of_program() {
                        return Err(error!(UnmatchedLoop, self.pc));
                    }
                    return Err(error);
                }
            };
            if !self.dispatch.recognizes(symbol) {
                continue;
            }
            self.program.push(symbol);
            match symbol {
                symbol::LOOP_OPEN => pending.push(index),
                symbol::LOOP_CLOSE => {
                    let open = pending.pop();
                    self.jump_map.insert(open, index);
                    if pending.is_empty() {
                        return Ok(index);
                    }
                }
                _ => {}
            }
            index += 1;
        }
    }

    /// `>`
    pub fn forward(&mut self) -> Result<()> {
        self.dp += 1;
        if self.dp >= self.data.len() {
            let dp = self.dp;
            self.data.resize(dp + 1, C::ZERO);
        }
        self.pc += 1;
        Ok(())
    }

    /// `<`
    pub fn back(&mut self) -> Result<()> {
        if self.dp == 0 {
            return Err(error!(PointerOutOfRange, self.pc));
        }
        self.dp -= 1;
        self.pc += 1;
        Ok(())
    }

    /// `+`
    pub fn increment(&mut self) -> Result<()> {
        self.data[self.dp] = self.data[self.dp].next();
        self.pc += 1;
        Ok(())
    }

    /// `-`
    pub fn decrement(&mut self) -> Result<()> {
        self.data[self.dp] = self.data[self.dp].prev();
        self.pc += 1;
        Ok(())
    }

    /// `.` A failed write is reported and the run continues.
    pub fn put(&mut self) -> Result<()> {
        let ch = self
            .cell()
            .code_point()
            .unwrap_or(std::char::REPLACEMENT_CHARACTER);
        let mut buf = [0; 4];
        if let Err(error) = self.output.write_all(ch.encode_utf8(&mut buf).as_bytes()) {
            report(error!(WriteFailure, self.pc; &error.to_string()));
        }
        self.pc += 1;
        Ok(())
    }

    /// `,` Reads one byte into the current cell. End of input or a failed
    /// read is reported and leaves the cell alone; a machine built without
    /// an input stream fails instead of guessing.
    pub fn take(&mut self) -> Result<()> {
        let input = match &mut self.input {
            Some(input) => input,
            None => return Err(error!(NoInput, self.pc)),
        };
        let mut buf = [0; 1];
        match input.read(&mut buf) {
            Ok(0) => report(error!(InputFailure, self.pc; "END OF INPUT")),
            Ok(_) => self.data[self.dp] = C::from_byte(buf[0]),
            Err(error) => report(error!(InputFailure, self.pc; &error.to_string())),
        }
        self.pc += 1;
        Ok(())
    }

    /// `[`
    pub fn loop_open(&mut self) -> Result<()> {
        self.loop_stack.push(self.pc);
        if self.cell().is_zero() {
            let open = *self.loop_stack.peek();
            let close = match self.jump_map.get(&open).copied() {
                Some(close) => close,
                None => self.seek_loop_close()?,
            };
            self.pc = close;
        } else {
            self.pc += 1;
        }
        Ok(())
    }

    /// `]`
    pub fn loop_close(&mut self) -> Result<()> {
        let open = self.loop_stack.pop();
        self.jump_map.insert(open, self.pc);
        if self.cell().is_zero() {
            self.pc += 1;
        } else {
            self.pc = open;
        }
        Ok(())
    }
}

// Degraded output and input failures are reported, never fatal.
fn report(error: Error) {
    eprintln!("{}", error);
}
