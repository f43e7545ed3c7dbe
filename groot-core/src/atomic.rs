use crate::error::Result;
use std::fs;
use std::io::Write;
use std::path::Path;
use uuid::Uuid;

/// Replaces `target` with `contents` so that readers see either the old file
/// or the new one, never a partial write.
///
/// The temp file lives next to the target so the final `rename` stays on one
/// filesystem.
pub(crate) fn write_atomic(target: &Path, contents: &[u8]) -> Result<()> {
    let dir = target.parent().unwrap_or_else(|| Path::new("."));
    let file_name = target
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let temp_path = dir.join(format!(".{}.{}.tmp", file_name, Uuid::new_v4()));

    let result = (|| -> Result<()> {
        let mut temp_file = fs::File::create(&temp_path)?;
        temp_file.write_all(contents)?;
        temp_file.sync_all()?;
        drop(temp_file);
        fs::rename(&temp_path, target)?;
        Ok(())
    })();

    if result.is_err() {
        let _ = fs::remove_file(&temp_path);
    }
    result
}
