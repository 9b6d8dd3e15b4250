use std::path::{Path, PathBuf};
use std::time::SystemTime;

use tracing::debug;

use crate::input::{InputError, path_display};

/// Picks the authoritative export for one dataset directory: newest
/// modification time wins, equal timestamps fall back to lexicographic
/// path order so repeated runs agree. A missing directory or one with
/// no recognized files yields `None`.
pub fn resolve_source_file(dir: &Path) -> Result<Option<PathBuf>, InputError> {
    if !dir.is_dir() {
        return Ok(None);
    }

    let mut candidates: Vec<(SystemTime, PathBuf)> = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let path = entry.path();
        if !is_source_file(&path) {
            continue;
        }
        let modified = entry.metadata()?.modified()?;
        candidates.push((modified, path));
    }

    if candidates.is_empty() {
        return Ok(None);
    }

    candidates.sort_by(|(a_time, a_path), (b_time, b_path)| {
        b_time.cmp(a_time).then_with(|| a_path.cmp(b_path))
    });

    if candidates.len() > 1 {
        debug!(
            count = candidates.len(),
            selected = %path_display(&candidates[0].1),
            "multiple exports found; selecting newest"
        );
    }

    Ok(Some(candidates.swap_remove(0).1))
}

fn is_source_file(path: &Path) -> bool {
    let Some(name) = path.file_name().and_then(|s| s.to_str()) else {
        return false;
    };
    if name.ends_with(".csv") {
        return true;
    }
    #[cfg(feature = "gz")]
    if name.ends_with(".csv.gz") {
        return true;
    }
    false
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/resolver.rs"]
mod tests;
