//! Interactive prefix input.

use anyhow::{bail, Context, Result};
use std::io::{BufRead, Write};

use wordlist::prefix::Prefix;

/// Print `Enter prefix: `, read one line from `input` and validate it.
pub fn read_prefix<R: BufRead, W: Write>(mut input: R, mut out: W) -> Result<Prefix> {
    write!(out, "Enter prefix: ").context("Failed to write prompt")?;
    out.flush().context("Failed to write prompt")?;

    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .context("Error reading input")?;
    if read == 0 {
        bail!("No prefix provided (end of input)");
    }

    Prefix::parse(&line).context("Invalid prefix")
}
