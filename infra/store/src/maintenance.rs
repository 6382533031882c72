use std::path::Path;
use std::time::{Duration, SystemTime};
use tracing::{info, warn};

const STALE_THRESHOLD: Duration = Duration::from_secs(300);

/// Removes orphaned temp files under the store root.
///
/// Entry documents live flat under the root, so a plain directory scan is
/// enough. Recent temp files are skipped in case another handle is mid-write.
pub(crate) fn purge_tmp(root: &Path) {
    let now = SystemTime::now();
    let mut removed = 0usize;
    let mut failed = 0usize;

    let Ok(entries) = std::fs::read_dir(root) else {
        warn!(path = %root.display(), "Store root scan failed, skipping temp cleanup");
        return;
    };

    for entry in entries.flatten() {
        let path = entry.path();
        if !path.is_file() || !is_tmp(&path) || !is_stale(&path, now) {
            continue;
        }
        match std::fs::remove_file(&path) {
            Ok(()) => removed += 1,
            Err(err) => {
                warn!(path = %path.display(), error = %err, "Temp file removal failed");
                failed += 1;
            },
        }
    }

    if removed > 0 || failed > 0 {
        info!(removed, failed, "Cleaned up temporary files");
    }
}

fn is_tmp(path: &Path) -> bool {
    path.file_name().and_then(|name| name.to_str()).is_some_and(|name| name.contains(".cdtmp."))
}

fn is_stale(path: &Path, now: SystemTime) -> bool {
    std::fs::metadata(path)
        .ok()
        .and_then(|m| m.modified().ok())
        .and_then(|modified| now.duration_since(modified).ok())
        .is_none_or(|age| age > STALE_THRESHOLD)
}
