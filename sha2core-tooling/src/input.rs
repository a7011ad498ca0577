use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use anyhow::{ensure, Context, Result};
use log::{debug, trace};

use crate::error::Error;

/// Path naming standard input.
pub const STDIN_PATH: &str = "-";

/// Reads the whole of `path` (or stdin for `-`) into memory, refusing inputs over `limit` bytes.
pub fn read_input(path: &Path, limit: u64) -> Result<Vec<u8>> {
    if path == Path::new(STDIN_PATH) {
        trace!("reading stdin");
        let stdin = io::stdin();
        return read_limited(stdin.lock(), limit);
    }

    let file = File::open(path).with_context(|| format!("could not open {}", path.display()))?;
    let size = file
        .metadata()
        .with_context(|| format!("could not stat {}", path.display()))?
        .len();
    ensure!(size <= limit, Error::InputTooLarge { size, limit });

    debug!("reading {} ({} bytes)", path.display(), size);
    read_limited(file, limit).with_context(|| format!("could not read {}", path.display()))
}

/// Reads `reader` to the end, failing once more than `limit` bytes have been seen.
pub fn read_limited<R: Read>(reader: R, limit: u64) -> Result<Vec<u8>> {
    let mut data = Vec::new();
    reader
        .take(limit.saturating_add(1))
        .read_to_end(&mut data)
        .map_err(Error::from)?;

    let size = data.len() as u64;
    ensure!(size <= limit, Error::InputTooLarge { size, limit });

    Ok(data)
}

/// Hashes the contents of `path` (or stdin for `-`).
pub fn hash_path(path: &Path, limit: u64) -> Result<[u8; sha2core::DIGEST_LEN]> {
    let data = read_input(path, limit)?;
    Ok(sha2core::hash(&data))
}
