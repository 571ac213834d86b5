//! Bounded reads of a single input document.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use anyhow::{bail, Context, Result};

/// Read `source` (a path, or `-` for stdin), refusing more than `max_bytes`.
pub fn read_input(source: &str, max_bytes: u64) -> Result<String> {
    if source == "-" {
        read_bounded(io::stdin().lock(), max_bytes).context("failed to read stdin")
    } else {
        let path = Path::new(source);
        let file = File::open(path)
            .with_context(|| format!("failed to open '{}'", path.display()))?;
        read_bounded(file, max_bytes).with_context(|| format!("failed to read '{}'", path.display()))
    }
}

fn read_bounded<R: Read>(reader: R, max_bytes: u64) -> Result<String> {
    let mut buf = String::new();
    // One extra byte tells an exact fit apart from an oversized input.
    reader.take(max_bytes.saturating_add(1)).read_to_string(&mut buf)?;
    if buf.len() as u64 > max_bytes {
        bail!("input exceeds {} bytes", max_bytes);
    }
    Ok(buf)
}
