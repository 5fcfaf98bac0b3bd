use brainfuck::mach::Cell;
use brainfuck::mach::Machine;
use std::rc::Rc;

#[test]
fn test_custom_zero_instruction() {
    let mut source = "+++++0.".as_bytes();
    let mut output = Vec::new();
    let mut machine = Machine::<u8>::new(&mut source, &mut output, None);
    machine.set_operation(
        b'0',
        Rc::new(|machine| {
            machine.set_cell(0);
            let pc = machine.pc();
            machine.set_pc(pc + 1);
            Ok(())
        }),
    );
    machine.run().expect("program failed");
    drop(machine);
    assert_eq!(output, [0]);
}

#[test]
fn test_custom_instruction_built_from_builtins() {
    // '2' steps right twice by reusing the built-in operation
    let mut source = "+>+>+2.".as_bytes();
    let mut output = Vec::new();
    let mut machine = Machine::<u8>::new(&mut source, &mut output, None);
    machine.set_operation(
        b'2',
        Rc::new(|machine| {
            let pc = machine.pc();
            machine.back()?;
            machine.back()?;
            machine.set_pc(pc + 1);
            Ok(())
        }),
    );
    machine.run().expect("program failed");
    drop(machine);
    assert_eq!(output, [1]);
}

#[test]
fn test_override_changes_behavior() {
    let mut source = "+.".as_bytes();
    let mut output = Vec::new();
    let mut machine = Machine::<u8>::new(&mut source, &mut output, None);
    machine.set_operation(
        b'+',
        Rc::new(|machine| {
            machine.set_cell(machine.cell().next().next());
            let pc = machine.pc();
            machine.set_pc(pc + 1);
            Ok(())
        }),
    );
    machine.run().expect("program failed");
    drop(machine);
    assert_eq!(output, [2]);
}

#[test]
fn test_removed_instruction_becomes_comment() {
    let mut source = "+-+.".as_bytes();
    let mut output = Vec::new();
    let mut machine = Machine::<u8>::new(&mut source, &mut output, None);
    machine.remove_operation(b'-').expect("builtin missing");
    machine.run().expect("program failed");
    assert_eq!(machine.program(), b"++.");
    drop(machine);
    assert_eq!(output, [2]);
}
