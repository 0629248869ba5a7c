//! Interactive bounded stack demo: choose a capacity, fill the stack, then
//! unwind it from the top down.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use linear_structures::console::{self, accept_any};
use linear_structures::BoundedStack;

fn main() -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    loop {
        run_round(&mut input, &mut output)?;
        if !console::request_continue(&mut input, &mut output)? {
            break;
        }
    }
    Ok(())
}

fn run_round<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<()> {
    let capacity: usize = console::request_input(
        input,
        output,
        "How many items would you like to put on the stack? ",
        |out, c: &usize| {
            if *c == 0 {
                writeln!(out, "The capacity must be greater than 0.\n")?;
                return Ok(false);
            }
            Ok(true)
        },
    )?;
    let mut stack: BoundedStack<i64> = BoundedStack::new(capacity)?;

    for i in 1..=stack.capacity() {
        let prompt = format!("What value would you like for item #{}? ", i);
        let value = console::request_input(input, output, &prompt, accept_any)?;
        stack.push(value)?;
    }

    writeln!(output, "\nUnwinding your stack:")?;
    while !stack.is_empty() {
        let position = stack.len();
        writeln!(output, "[{}]: {}", position, stack.pop()?)?;
    }
    writeln!(output)?;
    Ok(())
}
