//! Path utilities: expand `~` and resolve output locations.

use std::path::PathBuf;

pub fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}

/// Directory for downloads: the given one, else the current directory.
pub fn output_dir(dir: Option<&str>) -> PathBuf {
    match dir {
        Some(d) => expand_tilde(d),
        None => PathBuf::from("."),
    }
}
