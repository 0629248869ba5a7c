//! Interactive dynamic stack demo: push values until the sentinel `-1`,
//! then unwind the stack from the top down.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use linear_structures::console::{self, accept_any};
use linear_structures::DynamicStack;

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
    let mut stack: DynamicStack<i64> = DynamicStack::new();

    for i in 1.. {
        let prompt = format!(
            "What value would you like for item #{}? (Enter -1 to stop entering values) ",
            i
        );
        let value: i64 = console::request_input(input, output, &prompt, accept_any)?;
        if value == -1 {
            break;
        }
        stack.push(value);
    }

    writeln!(output, "\nUnwinding your stack:")?;
    while !stack.is_empty() {
        let position = stack.len();
        writeln!(output, "[{}]: {}", position, stack.pop()?)?;
    }
    writeln!(output)?;
    Ok(())
}
