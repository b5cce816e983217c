use super::*;
use crate::persist::store::MemoryStore;

/// Store that serves reads from `inner` and refuses every write.
struct ReadOnlyStore {
    inner: MemoryStore,
}

impl KeyValueStore for ReadOnlyStore {
    fn get(&self, key: &str) -> EditorResult<Option<String>> {
        self.inner.get(key)
    }

    fn set(&mut self, key: &str, _value: &str) -> EditorResult<()> {
        Err(EditorError::storage(format!("write '{key}': disk full")))
    }

    fn remove(&mut self, key: &str) -> EditorResult<()> {
        Err(EditorError::storage(format!("remove '{key}': disk full")))
    }
}

#[test]
fn re_adding_moves_to_front_once() {
    let mut store = MemoryStore::new();
    let mut r = RecentFiles::default();
    r.add("a.png", &mut store).unwrap();
    r.add("b.png", &mut store).unwrap();
    r.add("a.png", &mut store).unwrap();
    assert_eq!(r.list(), ["a.png", "b.png"]);

    r.add("a.png", &mut store).unwrap();
    assert_eq!(r.list(), ["a.png", "b.png"]);
}

#[test]
fn list_is_capped_at_capacity() {
    let mut store = MemoryStore::new();
    let mut r = RecentFiles::default();
    for i in 0..8 {
        r.add(&format!("f{i}.mp3"), &mut store).unwrap();
    }
    assert_eq!(r.list(), ["f7.mp3", "f6.mp3", "f5.mp3", "f4.mp3", "f3.mp3"]);
}

#[test]
fn matching_is_case_sensitive() {
    let mut store = MemoryStore::new();
    let mut r = RecentFiles::default();
    r.add("A.png", &mut store).unwrap();
    r.add("a.png", &mut store).unwrap();
    assert_eq!(r.list(), ["a.png", "A.png"]);

    r.remove("A.PNG", &mut store).unwrap();
    assert_eq!(r.list().len(), 2);
    r.remove("A.png", &mut store).unwrap();
    assert_eq!(r.list(), ["a.png"]);
}

#[test]
fn every_mutation_is_persisted() {
    let mut store = MemoryStore::new();
    let mut r = RecentFiles::default();
    r.add("a.png", &mut store).unwrap();
    r.add("b.wav", &mut store).unwrap();
    assert_eq!(
        store.get(RECENT_FILES_KEY).unwrap().as_deref(),
        Some(r#"["b.wav","a.png"]"#)
    );

    r.remove("b.wav", &mut store).unwrap();
    let reloaded = RecentFiles::load(&store, DEFAULT_RECENT_CAPACITY).unwrap();
    assert_eq!(reloaded.list(), ["a.png"]);
}

#[test]
fn load_tolerates_oversized_and_duplicate_lists() {
    let mut store = MemoryStore::new();
    store
        .set(RECENT_FILES_KEY, r#"["a","b","a","c","d","e","f"]"#)
        .unwrap();
    let r = RecentFiles::load(&store, 5).unwrap();
    assert_eq!(r.list(), ["a", "b", "c", "d", "e"]);
}

#[test]
fn load_of_missing_key_is_empty_and_corrupt_is_error() {
    let mut store = MemoryStore::new();
    assert!(RecentFiles::load(&store, 5).unwrap().list().is_empty());

    store.set(RECENT_FILES_KEY, r#"{"oops":1}"#).unwrap();
    assert!(matches!(
        RecentFiles::load(&store, 5),
        Err(EditorError::CorruptPersistedState(_))
    ));
    assert!(RecentFiles::new(0).is_err());
}

#[test]
fn failed_write_leaves_list_untouched() {
    let mut inner = MemoryStore::new();
    let mut r = RecentFiles::default();
    r.add("a.png", &mut inner).unwrap();
    r.add("b.wav", &mut inner).unwrap();
    let mut store = ReadOnlyStore { inner };

    let err = r.remove("b.wav", &mut store).unwrap_err();
    assert!(matches!(err, EditorError::Storage(_)));
    assert_eq!(r.list(), ["b.wav", "a.png"]);

    assert!(r.add("c.mp4", &mut store).is_err());
    assert!(r.add("a.png", &mut store).is_err());
    assert_eq!(r.list(), ["b.wav", "a.png"]);

    let reloaded = RecentFiles::load(&store, DEFAULT_RECENT_CAPACITY).unwrap();
    assert_eq!(reloaded.list(), r.list());
}
