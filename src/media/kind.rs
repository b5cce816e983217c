/// Media category a file is routed to, decided by its extension alone.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaKind {
    /// Raster image.
    Image,
    /// Audio clip.
    Audio,
    /// Video clip.
    Video,
    /// CAD mesh.
    Cad,
    /// No known extension matched. Callers must reject the file.
    Unknown,
}

const IMAGE_EXTS: &[&str] = &["jpg", "jpeg", "png", "gif", "bmp", "webp"];
const AUDIO_EXTS: &[&str] = &["mp3", "wav", "ogg", "aac"];
const VIDEO_EXTS: &[&str] = &["mp4", "webm", "mov", "avi"];
const CAD_EXTS: &[&str] = &["stl", "step", "iges"];

/// Lower-cased text after the last `.`, or `""` when there is none.
pub fn extension(filename: &str) -> String {
    match filename.rfind('.') {
        Some(i) => filename[i + 1..].to_lowercase(),
        None => String::new(),
    }
}

/// Route a file name to its media kind.
///
/// Total over every input, the empty string included.
pub fn classify(filename: &str) -> MediaKind {
    let ext = extension(filename);
    let ext = ext.as_str();
    if IMAGE_EXTS.contains(&ext) {
        MediaKind::Image
    } else if AUDIO_EXTS.contains(&ext) {
        MediaKind::Audio
    } else if VIDEO_EXTS.contains(&ext) {
        MediaKind::Video
    } else if CAD_EXTS.contains(&ext) {
        MediaKind::Cad
    } else {
        MediaKind::Unknown
    }
}

impl MediaKind {
    /// Extensions routed to this kind.
    pub fn extensions(self) -> &'static [&'static str] {
        match self {
            MediaKind::Image => IMAGE_EXTS,
            MediaKind::Audio => AUDIO_EXTS,
            MediaKind::Video => VIDEO_EXTS,
            MediaKind::Cad => CAD_EXTS,
            MediaKind::Unknown => &[],
        }
    }

    /// Formats offered when exporting a file of this kind.
    pub fn export_formats(self) -> &'static [&'static str] {
        match self {
            MediaKind::Image => &["PNG", "JPG", "PDF"],
            MediaKind::Audio => &["MP3", "WAV"],
            MediaKind::Video => &["MP4", "GIF"],
            MediaKind::Cad => &["STL", "OBJ", "PDF"],
            MediaKind::Unknown => &["PDF"],
        }
    }

    /// Human label used in status lines.
    pub fn label(self) -> &'static str {
        match self {
            MediaKind::Image => "image",
            MediaKind::Audio => "audio",
            MediaKind::Video => "video",
            MediaKind::Cad => "CAD model",
            MediaKind::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for MediaKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// File-picker filter accepting every routable file.
pub fn open_dialog_filter() -> String {
    [
        MediaKind::Image,
        MediaKind::Audio,
        MediaKind::Video,
        MediaKind::Cad,
    ]
    .iter()
    .flat_map(|k| k.extensions())
    .map(|e| format!(".{e}"))
    .collect::<Vec<_>>()
    .join(",")
}
