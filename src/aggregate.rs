use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use crate::error::MysteryError;
use crate::extract::parse_line;

/// Parse every line of `reader` and concatenate the numbers in line order.
pub fn parse_reader<R: BufRead>(reader: R) -> io::Result<Vec<u64>> {
    let mut result = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let before = result.len();
        result.extend(parse_line(&line));
        log::trace!("line {}: {} numbers", index + 1, result.len() - before);
    }
    Ok(result)
}

/// Parse all the numbers out of the file at `path`.
///
/// Returns [`MysteryError::Io`] without partial results if the file cannot be
/// opened or read.
pub fn parse_file(path: impl AsRef<Path>) -> Result<Vec<u64>, MysteryError> {
    let path = path.as_ref();
    let io_err = |source| MysteryError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(io_err)?;
    let nums = parse_reader(BufReader::new(file)).map_err(io_err)?;
    log::debug!("parsed {} numbers from {}", nums.len(), path.display());
    Ok(nums)
}
