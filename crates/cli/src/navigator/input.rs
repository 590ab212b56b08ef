//! Plain line-based selection, used when the terminal cannot enter raw mode
//! (piped input, dumb terminals, odd CI environments).

use std::io::{stdin, stdout, Write};

use quickpick_core::error::{Error, Result};

/// Prints the options as a one-based numbered list and reads the pick as a
/// typed number.
///
/// An empty line cancels and returns `Ok(None)`; anything unparseable or out
/// of range re-prompts. The selection is made by number, so duplicate
/// display strings still resolve to the row the user asked for.
pub fn prompt_numbered_choice(header: &str, options: &[String]) -> Result<Option<usize>> {
    println!("\n{header}");
    for (i, option) in options.iter().enumerate() {
        println!("  {}. {option}", i + 1);
    }

    loop {
        print!(
            "Enter a number (1-{}), or leave empty to cancel: ",
            options.len()
        );
        stdout().flush()?;

        let mut input = String::new();
        if stdin().read_line(&mut input)? == 0 {
            return Err(Error::InputClosed);
        }

        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }

        match trimmed.parse::<usize>() {
            Ok(n) if (1..=options.len()).contains(&n) => return Ok(Some(n - 1)),
            _ => println!("Please enter a number between 1 and {}.", options.len()),
        }
    }
}
