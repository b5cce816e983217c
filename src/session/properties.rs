use crate::{
    foundation::core::FileDescriptor,
    history::Preview,
    media::{decode::MediaHandle, kind::extension},
};

/// Properties panel for the active file.
#[derive(Clone, Debug, PartialEq)]
pub struct Properties {
    /// Upper-cased extension of the file name, `""` when it has none.
    pub format: String,
    pub media: MediaHandle,
}

impl Properties {
    /// Panel for `file` shown as `preview`; `None` while nothing is on display.
    pub fn of(file: &FileDescriptor, preview: &Preview) -> Option<Self> {
        let media = match preview {
            Preview::Empty => return None,
            Preview::Image(i) => MediaHandle::Image(*i),
            Preview::Audio(a) => MediaHandle::Audio(*a),
            Preview::Video(v) => MediaHandle::Video(*v),
            Preview::Mesh(m) => MediaHandle::Mesh(*m),
        };
        Some(Self {
            format: extension(&file.name).to_uppercase(),
            media,
        })
    }

    /// Labelled values in display order, format last.
    pub fn rows(&self) -> Vec<(&'static str, String)> {
        let mut rows = match &self.media {
            MediaHandle::Image(i) => vec![
                ("width", format!("{}px", i.width)),
                ("height", format!("{}px", i.height)),
            ],
            MediaHandle::Audio(a) => vec![("duration", format!("{:.2}s", a.duration_sec))],
            MediaHandle::Video(v) => vec![
                ("resolution", format!("{}x{}", v.width, v.height)),
                ("duration", format!("{:.2}s", v.duration_sec)),
            ],
            MediaHandle::Mesh(m) => vec![("triangles", m.triangles.to_string())],
        };
        rows.push(("format", self.format.clone()));
        rows
    }
}

impl std::fmt::Display for Properties {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, (label, value)) in self.rows().iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{label}: {value}")?;
        }
        Ok(())
    }
}
