//! Destination writer for resolved config files and resources.

use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs_utf8::{Dir, OpenOptions};
use std::io::Write;

use crate::error::{Result, SccError};

/// Write `contents` to `path`, creating parent directories as needed.
///
/// An existing file is truncated.
///
/// # Errors
///
/// Returns [`SccError::Io`] if the directory cannot be created or the file
/// cannot be written.
pub fn write_output(path: &Utf8Path, contents: &[u8]) -> Result<()> {
    let io_error = |source| SccError::Io {
        path: path.to_path_buf(),
        source,
    };
    let file_name = path.file_name().ok_or_else(|| {
        io_error(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "destination does not name a file",
        ))
    })?;
    let parent = match path.parent() {
        Some(dir) if !dir.as_str().is_empty() => dir,
        _ => Utf8Path::new("."),
    };
    let dir = ensure_dir(parent)?;
    let mut file = dir
        .open_with(
            file_name,
            OpenOptions::new().write(true).create(true).truncate(true),
        )
        .map_err(io_error)?;
    file.write_all(contents).map_err(io_error)?;
    Ok(())
}

fn ensure_dir(path: &Utf8Path) -> Result<Dir> {
    let io_error = |source| SccError::Io {
        path: path.to_path_buf(),
        source,
    };
    match Dir::open_ambient_dir(path, ambient_authority()) {
        Ok(dir) => Ok(dir),
        Err(open_err) if open_err.kind() == std::io::ErrorKind::NotFound => {
            Dir::create_ambient_dir_all(path, ambient_authority()).map_err(io_error)?;
            Dir::open_ambient_dir(path, ambient_authority()).map_err(io_error)
        }
        Err(open_err) => Err(io_error(open_err)),
    }
}
