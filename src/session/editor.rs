use std::time::Instant;

use crate::{
    foundation::{
        core::{FileDescriptor, Theme, Zoom},
        error::{EditorError, EditorResult},
    },
    history::{Capture, History, Preview, RestoreTarget, Snapshot, SnapshotProvider},
    media::{
        decode::{MediaDecoder, ProbeDecoder},
        kind::{MediaKind, classify},
        transcode::{FfmpegTranscoder, Transcoder},
    },
    persist::{
        project::{ProjectRecord, clear_project, load_project, save_project},
        recent::RecentFiles,
        store::KeyValueStore,
        theme::{load_theme, save_theme},
    },
    session::{autosave::AutoSave, config::EditorConfig, properties::Properties},
};

/// Media services the editor delegates decoding and transcoding to.
pub struct Services {
    pub decoder: Box<dyn MediaDecoder>,
    pub transcoder: Box<dyn Transcoder>,
}

impl Default for Services {
    fn default() -> Self {
        Self {
            decoder: Box::new(ProbeDecoder),
            transcoder: Box::new(FfmpegTranscoder),
        }
    }
}

/// The part of editor state that history snapshots cover.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Workspace {
    active_file: Option<FileDescriptor>,
    preview: Preview,
}

impl Workspace {
    pub fn active_file(&self) -> Option<&FileDescriptor> {
        self.active_file.as_ref()
    }

    pub fn preview(&self) -> &Preview {
        &self.preview
    }
}

impl SnapshotProvider for Workspace {
    fn capture(&self) -> EditorResult<Capture> {
        Ok(Capture {
            content: self.preview.clone(),
            active_file: self.active_file.clone(),
        })
    }
}

impl RestoreTarget for Workspace {
    fn restore(&mut self, snapshot: &Snapshot) -> EditorResult<()> {
        self.active_file = snapshot.active_file().cloned();
        self.preview = snapshot.content().clone();
        Ok(())
    }
}

/// Editing tools, each bound to one media kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tool {
    Crop,
    Adjust,
    Equalizer,
    Cut,
    Measure,
}

impl Tool {
    pub fn required_kind(self) -> MediaKind {
        match self {
            Tool::Crop | Tool::Adjust => MediaKind::Image,
            Tool::Equalizer => MediaKind::Audio,
            Tool::Cut => MediaKind::Video,
            Tool::Measure => MediaKind::Cad,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tool::Crop => "crop",
            Tool::Adjust => "adjust",
            Tool::Equalizer => "equalizer",
            Tool::Cut => "cut",
            Tool::Measure => "measure",
        }
    }
}

impl std::fmt::Display for Tool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SaveMode {
    /// Operator-requested; a missing file is an error.
    Explicit,
    /// Periodic; a missing file is skipped quietly.
    Silent,
}

/// Status bar contents.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Status {
    pub file_info: String,
    pub selection: String,
    pub zoom: Zoom,
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} | {} | {}", self.file_info, self.selection, self.zoom)
    }
}

/// Top-level controller owning all editor state.
///
/// Every operation runs to completion on the caller's thread; errors leave state as it was.
pub struct Editor<S: KeyValueStore> {
    config: EditorConfig,
    store: S,
    services: Services,
    workspace: Workspace,
    history: History,
    recent: RecentFiles,
    theme: Theme,
    zoom: Zoom,
    active_tool: Option<Tool>,
    autosave: AutoSave,
}

impl<S: KeyValueStore> Editor<S> {
    /// Start an editor on `store`, restoring theme, recent files, and the saved project.
    ///
    /// A stored project that does not parse fails the whole call.
    #[tracing::instrument(skip_all)]
    pub fn open(config: EditorConfig, store: S, services: Services) -> EditorResult<Self> {
        config.validate()?;
        let theme = load_theme(&store)?;
        let recent = RecentFiles::load(&store, config.recent_capacity)?;

        let mut workspace = Workspace::default();
        if let Some(record) = load_project(&store)? {
            workspace.preview = record.preview()?;
            tracing::info!(file = %record.active_file_name, "project restored");
            workspace.active_file = Some(FileDescriptor::named(record.active_file_name));
        }

        Ok(Self {
            history: History::new(config.history_capacity)?,
            autosave: AutoSave::new(config.autosave_interval(), Instant::now()),
            config,
            store,
            services,
            workspace,
            recent,
            theme,
            zoom: Zoom::DEFAULT,
            active_tool: None,
        })
    }

    /// Route, decode, and show a file, then record it in history and recent files.
    ///
    /// Unknown extensions and decoder failures leave the editor untouched.
    #[tracing::instrument(skip(self, bytes), fields(len = bytes.len()))]
    pub fn load_file(
        &mut self,
        name: &str,
        mime_type: Option<&str>,
        bytes: &[u8],
    ) -> EditorResult<MediaKind> {
        let kind = classify(name);
        if kind == MediaKind::Unknown {
            tracing::warn!("unsupported file format");
            return Err(EditorError::unsupported_format(format!(
                "'{name}' is not an image, audio, video, or CAD file"
            )));
        }

        let handle = self.services.decoder.decode(kind, name, bytes)?;
        if handle.kind() != kind {
            return Err(EditorError::unavailable(format!(
                "decoder returned {} data for {kind} file '{name}'",
                handle.kind()
            )));
        }

        let next = Workspace {
            active_file: Some(FileDescriptor::new(
                name,
                mime_type.map(str::to_owned),
                bytes.len() as u64,
            )),
            preview: handle.into(),
        };
        // Store writes go first; nothing in memory changes until they succeed.
        self.recent.add(name, &mut self.store)?;
        self.history.record(format!("Loaded file: {name}"), &next)?;
        self.workspace = next;
        self.active_tool = None;
        tracing::info!(%kind, "file loaded");
        Ok(kind)
    }

    /// Close the current file and forget its history.
    pub fn new_file(&mut self) {
        self.workspace = Workspace::default();
        self.history.clear();
        self.active_tool = None;
    }

    /// Write the project record for the active file.
    pub fn save(&mut self, mode: SaveMode) -> EditorResult<Option<ProjectRecord>> {
        self.save_at(mode, Instant::now())
    }

    /// Run a silent save if the autosave interval has elapsed at `now`.
    pub fn tick(&mut self, now: Instant) -> EditorResult<Option<ProjectRecord>> {
        if !self.autosave.is_due(now) {
            return Ok(None);
        }
        // The next attempt waits a full interval even when this one fails.
        self.autosave.mark(now);
        self.save_at(SaveMode::Silent, now)
    }

    fn save_at(&mut self, mode: SaveMode, now: Instant) -> EditorResult<Option<ProjectRecord>> {
        if self.workspace.active_file.is_none() {
            return match mode {
                SaveMode::Explicit => Err(EditorError::no_active_file("nothing to save")),
                SaveMode::Silent => Ok(None),
            };
        }
        let record = save_project(&mut self.store, &self.workspace)?;
        self.autosave.mark(now);
        if mode == SaveMode::Explicit {
            tracing::info!(file = %record.active_file_name, "project saved");
        }
        Ok(Some(record))
    }

    /// Drop the stored project without touching the open file.
    pub fn discard_saved_project(&mut self) -> EditorResult<()> {
        clear_project(&mut self.store)
    }

    pub fn undo(&mut self) -> EditorResult<bool> {
        let moved = self.history.undo(&mut self.workspace)?;
        self.drop_stale_tool();
        Ok(moved)
    }

    pub fn redo(&mut self) -> EditorResult<bool> {
        let moved = self.history.redo(&mut self.workspace)?;
        self.drop_stale_tool();
        Ok(moved)
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    fn drop_stale_tool(&mut self) {
        if self
            .active_tool
            .is_some_and(|t| self.active_kind() != Some(t.required_kind()))
        {
            self.active_tool = None;
        }
    }

    /// Change zoom by `delta` percent, clamped to the preview range.
    pub fn adjust_zoom(&mut self, delta: i32) -> Zoom {
        self.zoom = self.zoom.adjusted(delta);
        self.zoom
    }

    pub fn zoom_in(&mut self) -> Zoom {
        self.adjust_zoom(i32::from(self.config.zoom_step))
    }

    pub fn zoom_out(&mut self) -> Zoom {
        self.adjust_zoom(-i32::from(self.config.zoom_step))
    }

    /// Flip and persist the theme.
    pub fn toggle_theme(&mut self) -> EditorResult<Theme> {
        let next = self.theme.toggled();
        save_theme(&mut self.store, next)?;
        self.theme = next;
        Ok(next)
    }

    /// Arm `tool`; the active file must be of the kind the tool works on.
    pub fn activate_tool(&mut self, tool: Tool) -> EditorResult<()> {
        let required = tool.required_kind();
        if self.active_kind() != Some(required) {
            return Err(EditorError::no_active_file(format!(
                "select a {required} before using the {tool} tool"
            )));
        }
        self.active_tool = Some(tool);
        Ok(())
    }

    /// Keep the head of the active video and make the result the active file.
    ///
    /// `bytes` are the active video's contents; the trimmed output is returned for export.
    #[tracing::instrument(skip(self, bytes), fields(len = bytes.len()))]
    pub fn cut_video(&mut self, bytes: &[u8]) -> EditorResult<Vec<u8>> {
        let source = match (&self.workspace.active_file, self.active_kind()) {
            (Some(f), Some(MediaKind::Video)) => f.clone(),
            _ => {
                return Err(EditorError::no_active_file(
                    "select a video before using the cut tool",
                ));
            }
        };
        if !self.services.transcoder.is_ready() {
            return Err(EditorError::unavailable(
                "transcoder is not ready yet; try again shortly",
            ));
        }

        let out = self
            .services
            .transcoder
            .trim_head(bytes, self.config.cut_seconds)?;
        let name = format!("{}-cut.mp4", source.stem());
        let handle = self.services.decoder.decode(MediaKind::Video, &name, &out)?;

        let next = Workspace {
            active_file: Some(FileDescriptor::new(
                name,
                Some("video/mp4".to_string()),
                out.len() as u64,
            )),
            preview: handle.into(),
        };
        self.history.record("Video cut", &next)?;
        self.workspace = next;
        Ok(out)
    }

    /// Export formats for the active file.
    pub fn export_formats(&self) -> EditorResult<&'static [&'static str]> {
        let active = self
            .workspace
            .active_file
            .as_ref()
            .ok_or_else(|| EditorError::no_active_file("nothing to export"))?;
        Ok(classify(&active.name).export_formats())
    }

    pub fn remove_recent(&mut self, name: &str) -> EditorResult<()> {
        self.recent.remove(name, &mut self.store)
    }

    pub fn status(&self) -> Status {
        Status {
            file_info: self
                .workspace
                .active_file
                .as_ref()
                .map_or_else(|| "no file open".to_string(), |f| f.name.clone()),
            selection: self
                .active_kind()
                .map_or_else(|| "no selection".to_string(), |k| k.label().to_string()),
            zoom: self.zoom,
        }
    }

    /// Properties panel for the active file, `None` while nothing is on display.
    pub fn properties(&self) -> Option<Properties> {
        let file = self.workspace.active_file.as_ref()?;
        Properties::of(file, &self.workspace.preview)
    }

    fn active_kind(&self) -> Option<MediaKind> {
        self.workspace.preview.kind()
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn recent(&self) -> &[String] {
        self.recent.list()
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn zoom(&self) -> Zoom {
        self.zoom
    }

    pub fn active_tool(&self) -> Option<Tool> {
        self.active_tool
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }
}
