//! Output path derivation and file persistence.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Path of the icon file for `size` under `dir`: `pwa-<N>x<N>.png`.
pub fn icon_path(dir: &Path, size: u32) -> PathBuf {
    dir.join(format!("pwa-{size}x{size}.png"))
}

/// Write `bytes` to `path`, creating or overwriting the file.
///
/// The parent directory is a precondition; it is never created here. Any
/// filesystem failure surfaces as [`Error::Write`] and is fatal to the run.
pub fn write_bytes(path: &Path, bytes: &[u8]) -> Result<()> {
    fs::write(path, bytes).map_err(|source| Error::Write {
        path: path.to_path_buf(),
        source,
    })
}
