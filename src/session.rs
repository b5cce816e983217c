pub(crate) mod autosave;
pub(crate) mod config;
pub(crate) mod editor;
pub(crate) mod properties;
