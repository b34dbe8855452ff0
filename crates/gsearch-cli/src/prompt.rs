//! Interactive prompts for the search term and page count
//!
//! Both prompts re-ask until they get valid input. Reaching end of input
//! yields `None`.

use std::io::{self, BufRead, Write};

/// Ask for a non-empty search term
pub fn read_search_term<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> io::Result<Option<String>> {
    write!(output, "Please enter search term: ")?;
    output.flush()?;

    while let Some(line) = next_line(input)? {
        if !line.trim().is_empty() {
            return Ok(Some(line));
        }
        write!(output, "Invalid string supplied, try again: ")?;
        output.flush()?;
    }
    Ok(None)
}

/// Ask for a positive page count
pub fn read_page_count<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> io::Result<Option<u32>> {
    write!(output, "How many Google pages do you want to scrape? ")?;
    output.flush()?;

    while let Some(line) = next_line(input)? {
        match line.trim().parse::<u32>() {
            Ok(pages) if pages > 0 => return Ok(Some(pages)),
            _ => {
                write!(output, "Please supply a positive number, try again: ")?;
                output.flush()?;
            }
        }
    }
    Ok(None)
}

/// One line without its terminator, `None` at end of input
fn next_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}
