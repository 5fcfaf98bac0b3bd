use super::{Cell, Machine};
use crate::lang::symbol;
use crate::lang::Error;
use std::collections::HashMap;
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

/// A dispatched instruction. Operations mutate the machine and are
/// responsible for leaving the program counter on the next instruction.
pub type Operation<'a, C> = Rc<dyn Fn(&mut Machine<'a, C>) -> Result<()> + 'a>;

/// ## Instruction dispatch table
///
/// Maps instruction bytes to operations. Seeded with the eight built-ins;
/// the host may add, override, or remove instructions at any time, even
/// while a program runs. A byte with no entry is a comment to the
/// streamer and a fault to the driver.
pub struct Dispatch<'a, C: Cell> {
    map: HashMap<u8, Operation<'a, C>>,
}

impl<'a, C: Cell> Dispatch<'a, C> {
    pub fn new() -> Dispatch<'a, C> {
        let mut dispatch = Dispatch {
            map: HashMap::new(),
        };
        dispatch.set(symbol::FORWARD, Rc::new(|machine| machine.forward()));
        dispatch.set(symbol::BACK, Rc::new(|machine| machine.back()));
        dispatch.set(symbol::INCREMENT, Rc::new(|machine| machine.increment()));
        dispatch.set(symbol::DECREMENT, Rc::new(|machine| machine.decrement()));
        dispatch.set(symbol::OUTPUT, Rc::new(|machine| machine.put()));
        dispatch.set(symbol::INPUT, Rc::new(|machine| machine.take()));
        dispatch.set(symbol::LOOP_OPEN, Rc::new(|machine| machine.loop_open()));
        dispatch.set(symbol::LOOP_CLOSE, Rc::new(|machine| machine.loop_close()));
        dispatch
    }
    pub fn set(&mut self, symbol: u8, operation: Operation<'a, C>) {
        self.map.insert(symbol, operation);
    }
    pub fn remove(&mut self, symbol: u8) -> Option<Operation<'a, C>> {
        self.map.remove(&symbol)
    }
    pub fn get(&self, symbol: u8) -> Option<Operation<'a, C>> {
        self.map.get(&symbol).cloned()
    }
    pub fn recognizes(&self, symbol: u8) -> bool {
        self.map.contains_key(&symbol)
    }
}
