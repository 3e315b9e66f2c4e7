use std::path::PathBuf;

/// Returns the root Forecourt directory path.
///
/// Resolution order:
/// 1. `FORECOURT_ROOT` environment variable (if set)
/// 2. Current working directory + `.forecourt`
pub fn forecourt_root() -> PathBuf {
    if let Ok(root) = std::env::var("FORECOURT_ROOT") {
        PathBuf::from(root)
    } else {
        PathBuf::from(".forecourt")
    }
}

/// Returns the directory holding persisted listing blobs.
pub fn data_dir() -> PathBuf {
    forecourt_root().join("data")
}
