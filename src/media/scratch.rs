use std::path::{Path, PathBuf};

use crate::foundation::error::{EditorError, EditorResult};

/// Temporary file handed to `ffmpeg`/`ffprobe`, removed on drop.
pub(crate) struct ScratchFile {
    path: PathBuf,
}

impl ScratchFile {
    /// Reserve a unique path with extension `ext` without creating the file.
    pub(crate) fn reserve(ext: &str) -> Self {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_nanos())
            .unwrap_or(0);
        let seq = NEXT.fetch_add(1, std::sync::atomic::Ordering::Relaxed);
        let name = if ext.is_empty() {
            format!("mediadesk_{}_{nanos}_{seq}", std::process::id())
        } else {
            format!("mediadesk_{}_{nanos}_{seq}.{ext}", std::process::id())
        };
        Self {
            path: std::env::temp_dir().join(name),
        }
    }

    /// Reserve a path and write `bytes` to it.
    pub(crate) fn write(ext: &str, bytes: &[u8]) -> EditorResult<Self> {
        let f = Self::reserve(ext);
        std::fs::write(&f.path, bytes).map_err(|e| {
            EditorError::unavailable(format!(
                "failed to stage '{}' for ffmpeg: {e}",
                f.path.display()
            ))
        })?;
        Ok(f)
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }

    pub(crate) fn read(&self) -> EditorResult<Vec<u8>> {
        std::fs::read(&self.path).map_err(|e| {
            EditorError::unavailable(format!(
                "failed to read ffmpeg output '{}': {e}",
                self.path.display()
            ))
        })
    }
}

impl Drop for ScratchFile {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.path);
    }
}

static NEXT: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(0);
