use std::fs;
use std::io::{self, Read};

use crate::error::Result;

/// Read input from a file or stdin
///
/// If `file` is `Some`, reads from the specified file path.
/// If `file` is `None`, reads from stdin.
pub(crate) fn read_input(file: Option<&str>) -> Result<String> {
    let bytes = match file {
        Some(path) => fs::read(path)?,
        None => {
            let mut buffer = Vec::new();
            io::stdin().read_to_end(&mut buffer)?;
            buffer
        }
    };
    Ok(String::from_utf8(bytes)?)
}

/// Use the given values, or one value per non-empty stdin line if none were given
pub(crate) fn values_or_stdin(values: Vec<String>) -> Result<Vec<String>> {
    if !values.is_empty() {
        return Ok(values);
    }
    let input = read_input(None)?;
    Ok(input
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}
