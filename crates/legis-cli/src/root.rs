use std::path::{Path, PathBuf};

/// Resolve the data directory for this invocation.
///
/// An explicit path (flag or `LEGIS_DATA`) wins. Otherwise walk upward from
/// the current directory looking for a `data/` directory, falling back to
/// `./data` so that a first `legis` run has somewhere to point at.
pub fn resolve_data(explicit: Option<&Path>) -> PathBuf {
    if let Some(path) = explicit {
        return path.to_path_buf();
    }

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let mut dir = cwd.as_path();
    loop {
        let candidate = dir.join("data");
        if candidate.is_dir() {
            return candidate;
        }
        match dir.parent() {
            Some(parent) => dir = parent,
            None => break,
        }
    }

    cwd.join("data")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
