use crate::{
    foundation::core::FileDescriptor,
    media::{
        decode::{AudioInfo, ImageInfo, MediaHandle, MeshInfo, VideoInfo},
        kind::MediaKind,
    },
};

/// What the preview area shows. Re-rendered from scratch on restore.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Preview {
    /// Nothing loaded.
    #[default]
    Empty,
    Image(ImageInfo),
    Audio(AudioInfo),
    Video(VideoInfo),
    Mesh(MeshInfo),
}

impl Preview {
    /// Media kind on display, `None` for an empty preview.
    pub fn kind(&self) -> Option<MediaKind> {
        match self {
            Preview::Empty => None,
            Preview::Image(_) => Some(MediaKind::Image),
            Preview::Audio(_) => Some(MediaKind::Audio),
            Preview::Video(_) => Some(MediaKind::Video),
            Preview::Mesh(_) => Some(MediaKind::Cad),
        }
    }
}

impl From<MediaHandle> for Preview {
    fn from(h: MediaHandle) -> Self {
        match h {
            MediaHandle::Image(i) => Preview::Image(i),
            MediaHandle::Audio(a) => Preview::Audio(a),
            MediaHandle::Video(v) => Preview::Video(v),
            MediaHandle::Mesh(m) => Preview::Mesh(m),
        }
    }
}

/// Editor state as reported by a [`SnapshotProvider`](crate::SnapshotProvider).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Capture {
    pub content: Preview,
    pub active_file: Option<FileDescriptor>,
}

/// Immutable history entry.
#[derive(Clone, Debug, PartialEq)]
pub struct Snapshot {
    content: Preview,
    active_file: Option<FileDescriptor>,
    description: String,
}

impl Snapshot {
    pub fn new(capture: Capture, description: impl Into<String>) -> Self {
        Self {
            content: capture.content,
            active_file: capture.active_file,
            description: description.into(),
        }
    }

    pub fn content(&self) -> &Preview {
        &self.content
    }

    pub fn active_file(&self) -> Option<&FileDescriptor> {
        self.active_file.as_ref()
    }

    /// Label of the action that produced this snapshot.
    pub fn description(&self) -> &str {
        &self.description
    }
}
