use std::io::Cursor;

use crate::{
    foundation::error::{EditorError, EditorResult},
    media::kind::{MediaKind, extension},
};

/// Pixel dimensions of a decoded image.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ImageInfo {
    pub width: u32,
    pub height: u32,
}

/// Stream parameters of a decoded audio clip.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AudioInfo {
    pub sample_rate: u32,
    pub channels: u16,
    pub duration_sec: f64,
}

/// Stream parameters of a decoded video clip.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct VideoInfo {
    pub width: u32,
    pub height: u32,
    pub fps_num: u32,
    pub fps_den: u32,
    pub duration_sec: f64,
    pub has_audio: bool,
}

impl VideoInfo {
    pub fn fps(&self) -> f64 {
        if self.fps_den == 0 {
            0.0
        } else {
            f64::from(self.fps_num) / f64::from(self.fps_den)
        }
    }
}

/// Geometry summary of a decoded mesh.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct MeshInfo {
    pub triangles: u64,
}

/// Renderable handle produced by a decoder, one variant per routable kind.
#[derive(Clone, Debug, PartialEq)]
pub enum MediaHandle {
    Image(ImageInfo),
    Audio(AudioInfo),
    Video(VideoInfo),
    Mesh(MeshInfo),
}

impl MediaHandle {
    pub fn kind(&self) -> MediaKind {
        match self {
            MediaHandle::Image(_) => MediaKind::Image,
            MediaHandle::Audio(_) => MediaKind::Audio,
            MediaHandle::Video(_) => MediaKind::Video,
            MediaHandle::Mesh(_) => MediaKind::Cad,
        }
    }
}

/// Turns raw file bytes into a renderable handle.
///
/// Implementations either produce a handle of the requested kind or fail; they never touch
/// editor state.
pub trait MediaDecoder {
    fn decode(&self, kind: MediaKind, name: &str, bytes: &[u8]) -> EditorResult<MediaHandle>;
}

/// Default decoder: header probing for images and STL meshes, `ffprobe` for audio and video.
#[derive(Clone, Copy, Debug, Default)]
pub struct ProbeDecoder;

impl MediaDecoder for ProbeDecoder {
    #[tracing::instrument(skip(self, bytes), fields(len = bytes.len()))]
    fn decode(&self, kind: MediaKind, name: &str, bytes: &[u8]) -> EditorResult<MediaHandle> {
        match kind {
            MediaKind::Image => probe_image(bytes).map(MediaHandle::Image),
            MediaKind::Audio => probe_audio(name, bytes).map(MediaHandle::Audio),
            MediaKind::Video => probe_video(name, bytes).map(MediaHandle::Video),
            MediaKind::Cad => probe_mesh(name, bytes).map(MediaHandle::Mesh),
            MediaKind::Unknown => Err(EditorError::unsupported_format(name)),
        }
    }
}

pub fn probe_image(bytes: &[u8]) -> EditorResult<ImageInfo> {
    let reader = image::ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| EditorError::unavailable(format!("image format sniffing failed: {e}")))?;
    let (width, height) = reader
        .into_dimensions()
        .map_err(|e| EditorError::unavailable(format!("image decode failed: {e}")))?;
    Ok(ImageInfo { width, height })
}

pub fn probe_mesh(name: &str, bytes: &[u8]) -> EditorResult<MeshInfo> {
    if extension(name) != "stl" {
        return Err(EditorError::unavailable(format!(
            "no mesh loader for '{name}' (only STL is supported)"
        )));
    }
    let triangles = stl_triangle_count(bytes)
        .ok_or_else(|| EditorError::unavailable(format!("'{name}' is not a valid STL file")))?;
    Ok(MeshInfo { triangles })
}

/// Triangle count of a binary or ASCII STL file.
fn stl_triangle_count(bytes: &[u8]) -> Option<u64> {
    const HEADER: usize = 80;
    const FACET: usize = 50;

    // Binary STL is identified by its exact size; ASCII files may also start with "solid".
    if bytes.len() >= HEADER + 4 {
        let n = u32::from_le_bytes(bytes[HEADER..HEADER + 4].try_into().ok()?);
        if (HEADER + 4).checked_add((n as usize).checked_mul(FACET)?)? == bytes.len() {
            return Some(u64::from(n));
        }
    }

    let text = std::str::from_utf8(bytes).ok()?;
    if !text.trim_start().starts_with("solid") {
        return None;
    }
    let facets = text
        .lines()
        .filter(|l| l.trim_start().starts_with("facet"))
        .count();
    Some(facets as u64)
}

#[cfg(feature = "media-ffmpeg")]
mod ffprobe {
    #[derive(serde::Deserialize)]
    pub(super) struct Stream {
        pub(super) codec_type: Option<String>,
        pub(super) width: Option<u32>,
        pub(super) height: Option<u32>,
        pub(super) r_frame_rate: Option<String>,
        pub(super) sample_rate: Option<String>,
        pub(super) channels: Option<u16>,
    }

    #[derive(serde::Deserialize)]
    pub(super) struct Format {
        pub(super) duration: Option<String>,
    }

    #[derive(serde::Deserialize)]
    pub(super) struct Output {
        pub(super) streams: Vec<Stream>,
        pub(super) format: Option<Format>,
    }

    impl Output {
        pub(super) fn stream(&self, codec_type: &str) -> Option<&Stream> {
            self.streams
                .iter()
                .find(|s| s.codec_type.as_deref() == Some(codec_type))
        }

        pub(super) fn duration_sec(&self) -> f64 {
            self.format
                .as_ref()
                .and_then(|f| f.duration.as_ref())
                .and_then(|s| s.parse::<f64>().ok())
                .unwrap_or(0.0)
        }
    }
}

#[cfg(feature = "media-ffmpeg")]
fn run_ffprobe(name: &str, bytes: &[u8]) -> EditorResult<ffprobe::Output> {
    let input = crate::media::scratch::ScratchFile::write(&extension(name), bytes)?;
    let out = std::process::Command::new("ffprobe")
        .args([
            "-v",
            "error",
            "-print_format",
            "json",
            "-show_streams",
            "-show_format",
        ])
        .arg(input.path())
        .output()
        .map_err(|e| EditorError::unavailable(format!("failed to run ffprobe: {e}")))?;
    if !out.status.success() {
        return Err(EditorError::unavailable(format!(
            "ffprobe failed for '{name}': {}",
            String::from_utf8_lossy(&out.stderr).trim()
        )));
    }
    serde_json::from_slice(&out.stdout)
        .map_err(|e| EditorError::unavailable(format!("ffprobe json parse failed: {e}")))
}

#[cfg(feature = "media-ffmpeg")]
pub fn probe_audio(name: &str, bytes: &[u8]) -> EditorResult<AudioInfo> {
    let parsed = run_ffprobe(name, bytes)?;
    let stream = parsed
        .stream("audio")
        .ok_or_else(|| EditorError::unavailable("no audio stream found"))?;
    let sample_rate = stream
        .sample_rate
        .as_deref()
        .and_then(|s| s.parse::<u32>().ok())
        .ok_or_else(|| EditorError::unavailable("missing audio sample rate from ffprobe"))?;
    let channels = stream
        .channels
        .ok_or_else(|| EditorError::unavailable("missing audio channel count from ffprobe"))?;
    Ok(AudioInfo {
        sample_rate,
        channels,
        duration_sec: parsed.duration_sec(),
    })
}

#[cfg(feature = "media-ffmpeg")]
pub fn probe_video(name: &str, bytes: &[u8]) -> EditorResult<VideoInfo> {
    let parsed = run_ffprobe(name, bytes)?;
    let stream = parsed
        .stream("video")
        .ok_or_else(|| EditorError::unavailable("no video stream found"))?;
    let width = stream
        .width
        .ok_or_else(|| EditorError::unavailable("missing video width from ffprobe"))?;
    let height = stream
        .height
        .ok_or_else(|| EditorError::unavailable("missing video height from ffprobe"))?;
    let (fps_num, fps_den) = parse_ff_ratio(stream.r_frame_rate.as_deref().unwrap_or("0/1"))
        .ok_or_else(|| EditorError::unavailable("invalid video r_frame_rate"))?;
    Ok(VideoInfo {
        width,
        height,
        fps_num,
        fps_den,
        duration_sec: parsed.duration_sec(),
        has_audio: parsed.stream("audio").is_some(),
    })
}

#[cfg(not(feature = "media-ffmpeg"))]
pub fn probe_audio(_name: &str, _bytes: &[u8]) -> EditorResult<AudioInfo> {
    Err(EditorError::unavailable(
        "audio files require the 'media-ffmpeg' feature",
    ))
}

#[cfg(not(feature = "media-ffmpeg"))]
pub fn probe_video(_name: &str, _bytes: &[u8]) -> EditorResult<VideoInfo> {
    Err(EditorError::unavailable(
        "video files require the 'media-ffmpeg' feature",
    ))
}

#[cfg_attr(not(feature = "media-ffmpeg"), allow(dead_code))]
fn parse_ff_ratio(s: &str) -> Option<(u32, u32)> {
    let (num, den) = s.split_once('/')?;
    let num = num.trim().parse::<u32>().ok()?;
    let den = den.trim().parse::<u32>().ok()?;
    if den == 0 {
        return None;
    }
    Some((num, den))
}

#[cfg(test)]
#[path = "../../tests/unit/media/decode.rs"]
mod tests;
