use std::path::{Path, PathBuf};

/// Output path for `input`: the final extension is replaced by `marker`, or
/// `marker` is appended when there is none. Directories are left alone.
///
/// `a.jpg` → `a.pola.tif`, `a.b.jpg` → `a.b.pola.tif`, `a` → `a.pola.tif`.
pub fn output_path(input: &Path, marker: &str) -> PathBuf {
    input.with_extension(marker)
}

/// True when `path` already carries the output marker, i.e. it is a previous
/// run's output and must not be framed again.
pub fn is_framed_output(path: &Path, marker: &str) -> bool {
    let Some(name) = path.file_name() else {
        return false;
    };
    let name = name.to_string_lossy().to_ascii_lowercase();
    let suffix = format!(".{}", marker.to_ascii_lowercase());
    name.ends_with(&suffix)
}
