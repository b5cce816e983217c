use crate::{
    foundation::error::{EditorError, EditorResult},
    history::{Preview, SnapshotProvider},
    persist::store::KeyValueStore,
};

/// Store key holding the last saved project.
pub const PROJECT_KEY: &str = "project";

/// Minimal persisted reference to the last edited project.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecord {
    /// JSON-encoded [`Preview`]; opaque at this layer.
    pub content: String,
    pub active_file_name: String,
}

impl ProjectRecord {
    /// Decode the stored preview.
    pub fn preview(&self) -> EditorResult<Preview> {
        serde_json::from_str(&self.content).map_err(|e| {
            EditorError::corrupt(format!(
                "project content for '{}' does not parse: {e}",
                self.active_file_name
            ))
        })
    }
}

/// Capture the current state and overwrite the stored project with it.
///
/// Fails with [`EditorError::NoActiveFile`] when nothing is open.
#[tracing::instrument(skip_all)]
pub fn save_project<S, P>(store: &mut S, provider: &P) -> EditorResult<ProjectRecord>
where
    S: KeyValueStore + ?Sized,
    P: SnapshotProvider + ?Sized,
{
    let capture = provider.capture()?;
    let active = capture
        .active_file
        .ok_or_else(|| EditorError::no_active_file("nothing to save"))?;
    let record = ProjectRecord {
        content: serde_json::to_string(&capture.content)
            .map_err(|e| EditorError::Other(anyhow::Error::new(e)))?,
        active_file_name: active.name,
    };
    let text =
        serde_json::to_string(&record).map_err(|e| EditorError::Other(anyhow::Error::new(e)))?;
    store.set(PROJECT_KEY, &text)?;
    tracing::debug!(file = %record.active_file_name, "project saved");
    Ok(record)
}

/// Read the stored project, `None` when nothing was ever saved.
pub fn load_project<S>(store: &S) -> EditorResult<Option<ProjectRecord>>
where
    S: KeyValueStore + ?Sized,
{
    let Some(text) = store.get(PROJECT_KEY)? else {
        return Ok(None);
    };
    let record = serde_json::from_str(&text)
        .map_err(|e| EditorError::corrupt(format!("stored project does not parse: {e}")))?;
    Ok(Some(record))
}

/// Forget the stored project.
pub fn clear_project<S>(store: &mut S) -> EditorResult<()>
where
    S: KeyValueStore + ?Sized,
{
    store.remove(PROJECT_KEY)
}
