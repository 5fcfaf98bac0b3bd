extern crate ansi_term;
extern crate ctrlc;
extern crate linefeed;
use crate::mach::{Cell, Machine};
use crate::{error, lang::Error};
use ansi_term::Style;
use linefeed::{Interface, ReadResult};
use std::env;
use std::fs::File;
use std::io::{self, BufReader, ErrorKind, Read, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

// Instructions executed between checks of the CTRL-C flag.
const STEP_CHUNK: usize = 5000;

pub fn main() {
    let interrupted = Arc::new(AtomicBool::new(false));
    let int_moved = interrupted.clone();
    ctrlc::set_handler(move || {
        int_moved.store(true, Ordering::SeqCst);
    })
    .expect("Error setting Ctrl-C handler");

    let mut byte_cells = false;
    let mut location: Option<String> = None;
    for arg in env::args().skip(1) {
        if arg == "-b" || arg == "--bytes" {
            byte_cells = true;
        } else if location.is_none() && !arg.starts_with('-') {
            location = Some(arg);
        } else {
            eprintln!("Usage: brainfuck [-b] [file-or-url]");
            std::process::exit(2);
        }
    }

    let result = match &location {
        Some(location) => run_location(location, byte_cells, &interrupted),
        None => shell(byte_cells, &interrupted),
    };
    if let Err(error) = result {
        eprintln!("{}", Style::new().bold().paint(error.to_string()));
        std::process::exit(1);
    }
}

fn run_location(
    location: &str,
    byte_cells: bool,
    interrupted: &AtomicBool,
) -> Result<(), Error> {
    if location.starts_with("http://") || location.starts_with("https://") {
        let body = fetch(location)?;
        let mut source = body.as_slice();
        execute(&mut source, byte_cells, interrupted)
    } else {
        let file = match File::open(location) {
            Ok(file) => file,
            Err(error) => {
                let message = error.to_string();
                return Err(match error.kind() {
                    ErrorKind::NotFound => error!(FileNotFound; &message),
                    _ => error!(ReadFailure; &message),
                });
            }
        };
        let mut source = BufReader::new(file);
        execute(&mut source, byte_cells, interrupted)
    }
}

/// Runs a program with stdin as its input stream and stdout as its sink.
fn execute(
    source: &mut dyn Read,
    byte_cells: bool,
    interrupted: &AtomicBool,
) -> Result<(), Error> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut input = stdin.lock();
    let mut output = stdout.lock();
    let result = if byte_cells {
        let mut machine = Machine::<u8>::new(source, &mut output, Some(&mut input));
        drive(&mut machine, interrupted)
    } else {
        let mut machine = Machine::<i64>::new(source, &mut output, Some(&mut input));
        drive(&mut machine, interrupted)
    };
    if let Err(error) = output.flush() {
        eprintln!("{}", error!(WriteFailure; &error.to_string()));
    }
    result
}

fn drive<C: Cell>(machine: &mut Machine<C>, interrupted: &AtomicBool) -> Result<(), Error> {
    loop {
        if interrupted.swap(false, Ordering::SeqCst) {
            return Err(error!(Break, machine.pc()));
        }
        for _ in 0..STEP_CHUNK {
            if let Err(error) = machine.step() {
                if error.is_end_of_program() {
                    return Ok(());
                }
                return Err(error);
            }
        }
    }
}

fn fetch(url: &str) -> Result<Vec<u8>, Error> {
    let response = match reqwest::blocking::get(url) {
        Ok(response) => response,
        Err(error) => return Err(error!(ReadFailure; &error.to_string())),
    };
    if !response.status().is_success() {
        return Err(error!(FileNotFound; &format!("{} {}", response.status(), url)));
    }
    match response.bytes() {
        Ok(bytes) => Ok(bytes.to_vec()),
        Err(error) => Err(error!(ReadFailure; &error.to_string())),
    }
}

/// Interactive session. Each entered line runs as a complete program on a
/// fresh machine. Lines run without an input stream, so `,` reports
/// NO INPUT SOURCE.
fn shell(byte_cells: bool, interrupted: &AtomicBool) -> Result<(), Error> {
    let interface = match Interface::new("brainfuck") {
        Ok(interface) => interface,
        Err(error) => return Err(error!(InternalError; &error.to_string())),
    };
    if let Err(error) = interface.set_prompt("] ") {
        return Err(error!(InternalError; &error.to_string()));
    }
    loop {
        match interface.read_line() {
            Ok(ReadResult::Input(line)) => {
                if line.trim().is_empty() {
                    continue;
                }
                let (output, result) = execute_direct(&line, byte_cells, interrupted);
                if !output.is_empty() {
                    let _ = interface
                        .write_fmt(format_args!("{}\n", String::from_utf8_lossy(&output)));
                }
                if let Err(error) = result {
                    let _ = interface.write_fmt(format_args!(
                        "{}\n",
                        Style::new().bold().paint(error.to_string())
                    ));
                }
                interface.add_history_unique(line);
            }
            Ok(ReadResult::Eof) | Ok(ReadResult::Signal(_)) => break,
            Err(error) => return Err(error!(ReadFailure; &error.to_string())),
        }
    }
    Ok(())
}

fn execute_direct(
    line: &str,
    byte_cells: bool,
    interrupted: &AtomicBool,
) -> (Vec<u8>, Result<(), Error>) {
    let mut source = line.as_bytes();
    let mut output = Vec::new();
    let result = if byte_cells {
        let mut machine = Machine::<u8>::new(&mut source, &mut output, None);
        drive(&mut machine, interrupted)
    } else {
        let mut machine = Machine::<i64>::new(&mut source, &mut output, None);
        drive(&mut machine, interrupted)
    };
    (output, result)
}
