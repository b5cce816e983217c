use crate::{
    foundation::error::{EditorError, EditorResult},
    persist::store::KeyValueStore,
};

/// Store key holding the recent file names.
pub const RECENT_FILES_KEY: &str = "recentFiles";

/// Default number of names kept.
pub const DEFAULT_RECENT_CAPACITY: usize = 5;

/// Unique file names, most recent first. Every mutation is written through to the store.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecentFiles {
    names: Vec<String>,
    capacity: usize,
}

impl RecentFiles {
    pub fn new(capacity: usize) -> EditorResult<Self> {
        if capacity == 0 {
            return Err(EditorError::validation("recent files capacity must be >= 1"));
        }
        Ok(Self {
            names: Vec::with_capacity(capacity + 1),
            capacity,
        })
    }

    /// Read the stored list; an absent key yields an empty list.
    ///
    /// Lists longer than `capacity` are cut down and duplicates dropped, keeping the first.
    pub fn load<S>(store: &S, capacity: usize) -> EditorResult<Self>
    where
        S: KeyValueStore + ?Sized,
    {
        let mut out = Self::new(capacity)?;
        let Some(text) = store.get(RECENT_FILES_KEY)? else {
            return Ok(out);
        };
        let stored: Vec<String> = serde_json::from_str(&text)
            .map_err(|e| EditorError::corrupt(format!("stored recent files do not parse: {e}")))?;
        for name in stored {
            if !out.names.contains(&name) {
                out.names.push(name);
            }
        }
        out.names.truncate(capacity);
        Ok(out)
    }

    /// Move `name` to the front (inserting it if new) and persist.
    ///
    /// The in-memory list changes only after the store accepted the write.
    pub fn add<S>(&mut self, name: &str, store: &mut S) -> EditorResult<()>
    where
        S: KeyValueStore + ?Sized,
    {
        let mut next = Vec::with_capacity(self.capacity + 1);
        next.push(name.to_string());
        next.extend(self.names.iter().filter(|n| *n != name).cloned());
        next.truncate(self.capacity);
        self.commit(next, store)
    }

    /// Drop `name` (exact match) and persist.
    pub fn remove<S>(&mut self, name: &str, store: &mut S) -> EditorResult<()>
    where
        S: KeyValueStore + ?Sized,
    {
        let next = self.names.iter().filter(|n| *n != name).cloned().collect();
        self.commit(next, store)
    }

    pub fn list(&self) -> &[String] {
        &self.names
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    fn commit<S>(&mut self, next: Vec<String>, store: &mut S) -> EditorResult<()>
    where
        S: KeyValueStore + ?Sized,
    {
        let text = serde_json::to_string(&next)
            .map_err(|e| EditorError::Other(anyhow::Error::new(e)))?;
        store.set(RECENT_FILES_KEY, &text)?;
        self.names = next;
        Ok(())
    }
}

impl Default for RecentFiles {
    fn default() -> Self {
        Self {
            names: Vec::new(),
            capacity: DEFAULT_RECENT_CAPACITY,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/persist/recent.rs"]
mod tests;
