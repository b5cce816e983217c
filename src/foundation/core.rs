use crate::foundation::error::{EditorError, EditorResult};

/// Metadata of the file currently open in the editor.
///
/// Only the name is guaranteed: a project restored from storage carries the file name alone.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FileDescriptor {
    /// File name as chosen by the operator, extension included.
    pub name: String,
    /// MIME type reported by the file picker, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
    /// Size in bytes, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size_bytes: Option<u64>,
}

impl FileDescriptor {
    /// Descriptor for a freshly loaded file.
    pub fn new(name: impl Into<String>, mime_type: Option<String>, size_bytes: u64) -> Self {
        Self {
            name: name.into(),
            mime_type,
            size_bytes: Some(size_bytes),
        }
    }

    /// Descriptor carrying only a name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            mime_type: None,
            size_bytes: None,
        }
    }

    /// File name without its last extension.
    ///
    /// A dotfile such as `.mp4` yields the name without its leading dot.
    pub fn stem(&self) -> &str {
        match self.name.rfind('.') {
            None => &self.name,
            Some(0) => &self.name[1..],
            Some(i) => &self.name[..i],
        }
    }
}

/// Preview zoom in whole percent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
pub struct Zoom(u16);

impl Zoom {
    /// Smallest zoom the preview accepts.
    pub const MIN: Zoom = Zoom(50);
    /// Largest zoom the preview accepts.
    pub const MAX: Zoom = Zoom(200);
    /// Zoom at startup.
    pub const DEFAULT: Zoom = Zoom(100);

    /// Create a validated zoom inside `[MIN, MAX]`.
    pub fn new(percent: u16) -> EditorResult<Self> {
        if !(Self::MIN.0..=Self::MAX.0).contains(&percent) {
            return Err(EditorError::validation(format!(
                "zoom must be within {}..={} percent, got {percent}",
                Self::MIN.0,
                Self::MAX.0
            )));
        }
        Ok(Self(percent))
    }

    /// Zoom in whole percent.
    pub fn percent(self) -> u16 {
        self.0
    }

    /// Shift by `delta` percent, saturating at the bounds.
    pub fn adjusted(self, delta: i32) -> Self {
        let v = i32::from(self.0)
            .saturating_add(delta)
            .clamp(i32::from(Self::MIN.0), i32::from(Self::MAX.0));
        Self(v as u16)
    }

    /// Scale factor (`1.0` at 100%).
    pub fn scale(self) -> f64 {
        f64::from(self.0) / 100.0
    }
}

impl Default for Zoom {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl std::fmt::Display for Zoom {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// UI color scheme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    /// Light scheme.
    #[default]
    Light,
    /// Dark scheme.
    Dark,
}

impl Theme {
    /// Stored literal for this theme.
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Parse a stored literal. Anything but `"dark"` reads as light.
    pub fn from_stored(s: &str) -> Self {
        if s == "dark" { Theme::Dark } else { Theme::Light }
    }

    /// The other theme.
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
