use super::*;


fn exec(program: &str) -> String {
    let mut source = program.as_bytes();
    let mut output = Vec::new();
    let mut machine = Machine::<u8>::new(&mut source, &mut output, None);
    machine.run().expect("program failed");
    drop(machine);
    String::from_utf8(output).expect("output not utf-8")
}

fn exec_with_input(program: &str, input: &str) -> String {
    let mut source = program.as_bytes();
    let mut input = input.as_bytes();
    let mut output = Vec::new();
    let mut machine = Machine::<u8>::new(&mut source, &mut output, Some(&mut input));
    machine.run().expect("program failed");
    drop(machine);
    String::from_utf8(output).expect("output not utf-8")
}
