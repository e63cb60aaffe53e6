//! Storage module
//!
//! Appends status lines to the output file. The file is opened and
//! closed on every write; nothing is held between cycles.

use std::fs::OpenOptions;
use std::io::Write;
#[cfg(unix)]
use std::os::unix::fs::OpenOptionsExt;
use std::path::Path;

use crate::error::Result;

/// Append `line` plus a newline to `path`, creating the file if needed
pub fn append_line(path: &Path, line: &str) -> Result<()> {
    let mut options = OpenOptions::new();
    options.read(true).append(true).create(true);
    #[cfg(unix)]
    options.mode(0o660);

    let mut file = options.open(path)?;

    let mut buf = String::with_capacity(line.len() + 1);
    buf.push_str(line);
    buf.push('\n');
    file.write_all(buf.as_bytes())?;

    log::debug!("Appended {} bytes to {}", buf.len(), path.display());
    Ok(())
}
