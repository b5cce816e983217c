use crate::foundation::error::{EditorError, EditorResult};

/// Re-encodes media bytes. The editor only needs a head trim for now.
pub trait Transcoder {
    /// Whether the service can accept work. Callers check this before invoking a tool.
    fn is_ready(&self) -> bool;

    /// Keep the first `seconds` of an MP4 clip, stream-copied.
    fn trim_head(&self, input: &[u8], seconds: f64) -> EditorResult<Vec<u8>>;
}

/// `ffmpeg` process-backed transcoder.
#[derive(Clone, Copy, Debug, Default)]
pub struct FfmpegTranscoder;

#[cfg(feature = "media-ffmpeg")]
impl Transcoder for FfmpegTranscoder {
    fn is_ready(&self) -> bool {
        std::process::Command::new("ffmpeg")
            .arg("-version")
            .stdout(std::process::Stdio::null())
            .stderr(std::process::Stdio::null())
            .status()
            .map(|s| s.success())
            .unwrap_or(false)
    }

    #[tracing::instrument(skip(self, input), fields(len = input.len()))]
    fn trim_head(&self, input: &[u8], seconds: f64) -> EditorResult<Vec<u8>> {
        use crate::media::scratch::ScratchFile;

        if !(seconds.is_finite() && seconds > 0.0) {
            return Err(EditorError::validation(format!(
                "trim length must be a positive number of seconds, got {seconds}"
            )));
        }

        let src = ScratchFile::write("mp4", input)?;
        let dst = ScratchFile::reserve("mp4");
        let out = std::process::Command::new("ffmpeg")
            .args(["-v", "error", "-y", "-i"])
            .arg(src.path())
            .args(["-t", &format!("{seconds:.3}"), "-c", "copy"])
            .arg(dst.path())
            .output()
            .map_err(|e| EditorError::unavailable(format!("failed to run ffmpeg: {e}")))?;
        if !out.status.success() {
            return Err(EditorError::unavailable(format!(
                "ffmpeg trim failed: {}",
                String::from_utf8_lossy(&out.stderr).trim()
            )));
        }
        dst.read()
    }
}

#[cfg(not(feature = "media-ffmpeg"))]
impl Transcoder for FfmpegTranscoder {
    fn is_ready(&self) -> bool {
        false
    }

    fn trim_head(&self, _input: &[u8], _seconds: f64) -> EditorResult<Vec<u8>> {
        Err(EditorError::unavailable(
            "video cutting requires the 'media-ffmpeg' feature",
        ))
    }
}
