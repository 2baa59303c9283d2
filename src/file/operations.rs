use std::fs;
use std::io;
use std::path::Path;
use tracing::{debug, error};

use crate::error::{RewriteError, RewriteResult};

/// Runs a filesystem operation, logging the failure with the path it touched
fn fs_operation<T, F, E>(
    operation: F,
    path: &Path,
    operation_name: &str,
    wrap: E,
) -> RewriteResult<T>
where
    F: FnOnce() -> io::Result<T>,
    E: FnOnce(io::Error, &Path) -> RewriteError,
{
    operation().map_err(|e| {
        let cause = e.to_string();
        let err = wrap(e, path);
        error!(kind = %err.kind(), "{} failed on {}: {}", operation_name, path.display(), cause);
        err
    })
}

/// Read the whole file as UTF-8 text.
///
/// The handle is closed before this returns. Content that is not valid UTF-8
/// is reported as a read error.
pub fn read_text(path: &Path) -> RewriteResult<String> {
    let content = fs_operation(
        || fs::read_to_string(path),
        path,
        "Read",
        |e, p| RewriteError::read_error(e, p),
    )?;
    debug!("Read {} bytes from {}", content.len(), path.display());
    Ok(content)
}

/// Truncate the file and write `contents` in full.
pub fn write_text(path: &Path, contents: &str) -> RewriteResult<()> {
    fs_operation(
        || fs::write(path, contents),
        path,
        "Write",
        |e, p| RewriteError::write_error(e, p),
    )?;
    debug!("Wrote {} bytes to {}", contents.len(), path.display());
    Ok(())
}
