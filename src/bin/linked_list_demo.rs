//! Interactive linked list demo: append, insert, delete, and deep-copy a
//! list of numbers through a small menu.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use linear_structures::console::{self, accept_any};
use linear_structures::LinkedList;

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
    let mut list: LinkedList<i64> = LinkedList::new();

    loop {
        writeln!(output, "== List ==")?;
        print_list(output, &list)?;

        writeln!(output, "Options:")?;
        writeln!(output, "[a] Append")?;
        writeln!(output, "[i] Insert")?;
        writeln!(output, "[d] Delete")?;
        writeln!(output, "[c] Copy")?;
        writeln!(output, "[q] Quit")?;
        writeln!(output)?;

        let choice: String = console::request_input(
            input,
            output,
            "What would you like to do? ",
            |out, choice: &String| {
                if matches!(choice.as_str(), "a" | "i" | "d" | "c" | "q") {
                    Ok(true)
                } else {
                    writeln!(out, "Your choice must be a, i, d, c, or q.\n")?;
                    Ok(false)
                }
            },
        )?;

        match choice.as_str() {
            "a" => prompt_append(input, output, &mut list)?,
            "i" => prompt_insert(input, output, &mut list)?,
            "d" => prompt_delete(input, output, &mut list)?,
            // Continue with a deep copy as the working list.
            "c" => list = list.clone(),
            _ => break,
        }
    }
    Ok(())
}

fn print_list<W: Write>(output: &mut W, list: &LinkedList<i64>) -> Result<()> {
    if list.is_empty() {
        writeln!(output, "The list is empty.\n")?;
    } else {
        for (i, value) in list.iter().enumerate() {
            writeln!(output, "[{}] {}", i, value)?;
        }
        writeln!(output)?;
    }
    Ok(())
}

fn prompt_append<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    list: &mut LinkedList<i64>,
) -> Result<()> {
    let value = console::request_input(
        input,
        output,
        "What number would you like to append? ",
        accept_any,
    )?;
    list.append(value);
    Ok(())
}

fn prompt_insert<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    list: &mut LinkedList<i64>,
) -> Result<()> {
    let length = list.len();
    let index: usize = console::request_input(
        input,
        output,
        "Before what index would you like to insert your number? ",
        |out, i: &usize| {
            if *i > length {
                writeln!(out, "{} is not a valid index.\n", i)?;
                return Ok(false);
            }
            Ok(true)
        },
    )?;

    let value = console::request_input(
        input,
        output,
        "What number would you like to insert? ",
        accept_any,
    )?;

    list.insert(index, value)?;
    Ok(())
}

fn prompt_delete<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    list: &mut LinkedList<i64>,
) -> Result<()> {
    let length = list.len();
    if length == 0 {
        writeln!(output, "The list is empty; there is nothing to delete.\n")?;
        return Ok(());
    }

    let index: usize = console::request_input(
        input,
        output,
        "What index would you like to delete? ",
        |out, i: &usize| {
            if *i >= length {
                writeln!(out, "{} is not a valid index.\n", i)?;
                return Ok(false);
            }
            Ok(true)
        },
    )?;

    list.delete(index)?;
    Ok(())
}
