//! Interactive bounded queue demo: choose a capacity, fill the queue, then
//! replay it front to back.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use linear_structures::console::{self, accept_any};
use linear_structures::BoundedQueue;

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
        "How many items would you like to put in the queue? ",
        |out, c: &usize| {
            if *c == 0 {
                writeln!(out, "The capacity must be greater than 0.\n")?;
                return Ok(false);
            }
            Ok(true)
        },
    )?;
    let mut queue: BoundedQueue<i64> = BoundedQueue::new(capacity)?;

    for i in 1..=queue.capacity() {
        let prompt = format!("What value would you like for item #{}? ", i);
        let value = console::request_input(input, output, &prompt, accept_any)?;
        queue.enqueue(value)?;
    }

    writeln!(output, "\nReplaying your queue:")?;
    for i in 1..=capacity {
        writeln!(output, "[{}]: {}", i, queue.dequeue()?)?;
    }
    writeln!(output)?;
    Ok(())
}
