use std::{path::Path, time::Duration};

use crate::{
    foundation::{
        core::Zoom,
        error::{EditorError, EditorResult},
    },
    history::DEFAULT_HISTORY_CAPACITY,
    persist::recent::DEFAULT_RECENT_CAPACITY,
};

/// Editor tunables, read from JSON. Missing fields take their defaults.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EditorConfig {
    /// Undo entries kept.
    pub history_capacity: usize,
    /// Recent file names kept.
    pub recent_capacity: usize,
    /// Seconds between silent autosaves.
    pub autosave_interval_secs: u64,
    /// Percent added or removed by one zoom step.
    pub zoom_step: u16,
    /// Length kept by the video cut tool.
    pub cut_seconds: f64,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            recent_capacity: DEFAULT_RECENT_CAPACITY,
            autosave_interval_secs: 30,
            zoom_step: 10,
            cut_seconds: 5.0,
        }
    }
}

impl EditorConfig {
    /// Read and validate a JSON config file.
    pub fn from_path(path: &Path) -> EditorResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            EditorError::validation(format!("read config '{}': {e}", path.display()))
        })?;
        Self::from_json_str(&text)
    }

    pub fn from_json_str(s: &str) -> EditorResult<Self> {
        let cfg: Self = serde_json::from_str(s)
            .map_err(|e| EditorError::validation(format!("config does not parse: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> EditorResult<()> {
        if self.history_capacity == 0 {
            return Err(EditorError::validation("history_capacity must be >= 1"));
        }
        if self.recent_capacity == 0 {
            return Err(EditorError::validation("recent_capacity must be >= 1"));
        }
        if self.autosave_interval_secs == 0 {
            return Err(EditorError::validation("autosave_interval_secs must be >= 1"));
        }
        let span = Zoom::MAX.percent() - Zoom::MIN.percent();
        if self.zoom_step == 0 || self.zoom_step > span {
            return Err(EditorError::validation(format!(
                "zoom_step must be within 1..={span}"
            )));
        }
        if !(self.cut_seconds.is_finite() && self.cut_seconds > 0.0) {
            return Err(EditorError::validation("cut_seconds must be > 0"));
        }
        Ok(())
    }

    pub fn autosave_interval(&self) -> Duration {
        Duration::from_secs(self.autosave_interval_secs)
    }
}
