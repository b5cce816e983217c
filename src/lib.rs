//! Mediadesk is the core of a media editor shell.
//!
//! It routes files to a media kind by extension, keeps a bounded linear undo/redo history of
//! editor snapshots, and persists a small project reference, the recent files list, and the
//! theme to a key-value store. Decoding and transcoding are delegated to pluggable services.
//!
//! - Open an [`Editor`] on a [`KeyValueStore`]
//! - Load files with [`Editor::load_file`], undo and redo with [`Editor::undo`] / [`Editor::redo`]
//! - Save explicitly with [`Editor::save`] or let [`Editor::tick`] autosave
#![forbid(unsafe_code)]

mod foundation;
mod history;
mod media;
mod persist;
mod session;

pub use crate::foundation::core::{FileDescriptor, Theme, Zoom};
pub use crate::foundation::error::{EditorError, EditorResult};

pub use crate::history::{
    Capture, DEFAULT_HISTORY_CAPACITY, History, Preview, RestoreTarget, Snapshot,
    SnapshotProvider,
};
pub use crate::media::decode::{
    AudioInfo, ImageInfo, MediaDecoder, MediaHandle, MeshInfo, ProbeDecoder, VideoInfo,
};
pub use crate::media::kind::{MediaKind, classify, extension, open_dialog_filter};
pub use crate::media::transcode::{FfmpegTranscoder, Transcoder};
pub use crate::persist::project::{
    PROJECT_KEY, ProjectRecord, clear_project, load_project, save_project,
};
pub use crate::persist::recent::{DEFAULT_RECENT_CAPACITY, RECENT_FILES_KEY, RecentFiles};
pub use crate::persist::store::{DirStore, KeyValueStore, MemoryStore};
pub use crate::persist::theme::{THEME_KEY, load_theme, save_theme};
pub use crate::session::autosave::AutoSave;
pub use crate::session::config::EditorConfig;
pub use crate::session::editor::{Editor, SaveMode, Services, Status, Tool, Workspace};
pub use crate::session::properties::Properties;
