//! Capability-based file helpers for manifests and log files.

use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs_utf8::{Dir, File};

use crate::error::RatingError;

/// Reads a UTF-8 file into a string.
///
/// # Errors
///
/// Returns [`RatingError::Io`] when the parent directory cannot be opened or
/// the file cannot be read.
pub(crate) fn read_to_string(path: &Utf8Path) -> Result<String, RatingError> {
    let (dir, file_name) = open_parent_dir(path)?;
    dir.read_to_string(file_name)
        .map_err(|error| RatingError::Io {
            message: format!("failed to read '{path}': {error}"),
        })
}

/// Opens `path` for appending, creating the file and its parent
/// directories when missing.
///
/// # Errors
///
/// Returns [`RatingError::Io`] when a directory or the file cannot be
/// created.
pub(crate) fn open_append(path: &Utf8Path) -> Result<File, RatingError> {
    let parent = parent_of(path);
    Dir::create_ambient_dir_all(parent, ambient_authority()).map_err(|error| {
        RatingError::Io {
            message: format!("failed to create directory '{parent}': {error}"),
        }
    })?;

    let (dir, file_name) = open_parent_dir(path)?;
    let mut options = cap_std::fs::OpenOptions::new();
    options.create(true).append(true);
    dir.open_with(file_name, &options)
        .map_err(|error| RatingError::Io {
            message: format!("failed to open '{path}': {error}"),
        })
}

fn parent_of(path: &Utf8Path) -> &Utf8Path {
    match path.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent,
        _ => Utf8Path::new("."),
    }
}

fn open_parent_dir(path: &Utf8Path) -> Result<(Dir, &str), RatingError> {
    let file_name = path.file_name().ok_or_else(|| RatingError::Io {
        message: format!("invalid path '{path}': no file name"),
    })?;
    let parent = parent_of(path);
    let dir = Dir::open_ambient_dir(parent, ambient_authority()).map_err(|error| {
        RatingError::Io {
            message: format!("failed to open directory '{parent}': {error}"),
        }
    })?;
    Ok((dir, file_name))
}
