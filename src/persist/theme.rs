use crate::{
    foundation::{core::Theme, error::EditorResult},
    persist::store::KeyValueStore,
};

/// Store key holding the theme literal.
pub const THEME_KEY: &str = "theme";

/// Stored theme; light unless the store holds exactly `"dark"`.
pub fn load_theme<S>(store: &S) -> EditorResult<Theme>
where
    S: KeyValueStore + ?Sized,
{
    Ok(store
        .get(THEME_KEY)?
        .map(|s| Theme::from_stored(&s))
        .unwrap_or_default())
}

pub fn save_theme<S>(store: &mut S, theme: Theme) -> EditorResult<()>
where
    S: KeyValueStore + ?Sized,
{
    store.set(THEME_KEY, theme.as_str())
}
