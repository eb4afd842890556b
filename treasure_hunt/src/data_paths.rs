//! Locates the directory holding `config.toml` and the input history file.

use std::env;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

/// Environment variable that pins the data directory explicitly.
pub const DATA_DIR_ENV: &str = "TREASURE_HUNT_DATA";
const DATA_DIR: &str = "treasure_hunt/data";

static DATA_ROOT: LazyLock<PathBuf> = LazyLock::new(|| {
    let override_dir = env::var_os(DATA_DIR_ENV).map(PathBuf::from);
    resolve_data_root(override_dir, &default_candidates())
});

/// Construct a path relative to the resolved data root.
pub fn data_path(relative: impl AsRef<Path>) -> PathBuf {
    DATA_ROOT.join(relative)
}

/// Candidate data directories, checked in order: working directory first, then next to the
/// executable and its parent (covers `target/debug` runs).
fn default_candidates() -> Vec<PathBuf> {
    let mut candidates = vec![PathBuf::from(DATA_DIR), PathBuf::from("data")];
    if let Some(exe_dir) = env::current_exe().ok().and_then(|exe| exe.parent().map(Path::to_path_buf)) {
        for base in std::iter::once(exe_dir.as_path()).chain(exe_dir.parent()) {
            candidates.push(base.join(DATA_DIR));
            candidates.push(base.join("data"));
        }
    }
    candidates
}

/// Pick the data root: an explicit override wins, otherwise the first existing candidate.
fn resolve_data_root(override_dir: Option<PathBuf>, candidates: &[PathBuf]) -> PathBuf {
    if let Some(dir) = override_dir {
        return dir;
    }
    candidates
        .iter()
        .find(|candidate| candidate.is_dir())
        .cloned()
        .unwrap_or_else(|| PathBuf::from(DATA_DIR))
}
