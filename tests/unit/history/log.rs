use std::cell::Cell;

use super::*;
use crate::{
    foundation::core::FileDescriptor,
    media::decode::{ImageInfo, MeshInfo},
};

/// Provider whose capture is whatever `state` currently holds.
struct Fake {
    state: Capture,
    captures: Cell<usize>,
}

impl Fake {
    fn new() -> Self {
        Self {
            state: Capture::default(),
            captures: Cell::new(0),
        }
    }

    fn show(&mut self, name: &str, width: u32) {
        self.state = Capture {
            content: Preview::Image(ImageInfo { width, height: 1 }),
            active_file: Some(FileDescriptor::named(name)),
        };
    }
}

impl SnapshotProvider for Fake {
    fn capture(&self) -> EditorResult<Capture> {
        self.captures.set(self.captures.get() + 1);
        Ok(self.state.clone())
    }
}

#[derive(Default)]
struct Sink {
    restored: Vec<String>,
}

impl RestoreTarget for Sink {
    fn restore(&mut self, snapshot: &Snapshot) -> EditorResult<()> {
        self.restored.push(snapshot.description().to_string());
        Ok(())
    }
}

struct Failing;

impl SnapshotProvider for Failing {
    fn capture(&self) -> EditorResult<Capture> {
        Err(EditorError::no_active_file("capture failed"))
    }
}

fn descriptions(h: &History) -> Vec<&str> {
    h.entries().map(Snapshot::description).collect()
}

#[test]
fn load_then_edit_then_undo_redo() {
    let mut h = History::default();
    let mut p = Fake::new();
    let mut sink = Sink::default();
    assert_eq!(h.cursor(), None);
    assert!(!h.can_undo());
    assert!(!h.can_redo());

    p.show("x.png", 1);
    h.record("load X", &p).unwrap();
    assert_eq!(h.cursor(), Some(0));
    assert!(!h.can_undo());
    assert!(!h.can_redo());

    p.show("x.png", 2);
    h.record("edit Y", &p).unwrap();
    assert_eq!(h.cursor(), Some(1));
    assert!(h.can_undo());

    assert!(h.undo(&mut sink).unwrap());
    assert_eq!(h.cursor(), Some(0));
    assert_eq!(sink.restored, ["load X"]);

    assert!(h.redo(&mut sink).unwrap());
    assert_eq!(h.cursor(), Some(1));
    assert_eq!(sink.restored, ["load X", "edit Y"]);
    assert_eq!(p.captures.get(), 2);
}

#[test]
fn record_never_leaves_redo_available() {
    let mut h = History::new(4).unwrap();
    let mut p = Fake::new();
    let mut sink = Sink::default();
    for i in 0..10u32 {
        p.show("a.png", i + 1);
        h.record(format!("step {i}"), &p).unwrap();
        assert!(!h.can_redo());
        if i % 3 == 2 {
            h.undo(&mut sink).unwrap();
            h.undo(&mut sink).unwrap();
        }
    }
}

#[test]
fn undo_then_redo_restores_same_snapshot() {
    let mut h = History::default();
    let mut p = Fake::new();
    for (i, d) in ["a", "b", "c"].iter().enumerate() {
        p.show("m.png", i as u32 + 1);
        h.record(*d, &p).unwrap();
    }
    let before = h.current().cloned().unwrap();
    let mut sink = Sink::default();
    h.undo(&mut sink).unwrap();
    h.redo(&mut sink).unwrap();
    assert_eq!(h.current(), Some(&before));
    assert_eq!(sink.restored, ["b", "c"]);
}

#[test]
fn record_after_undo_prunes_redo_branch() {
    let mut h = History::default();
    let p = Fake::new();
    let mut sink = Sink::default();
    for d in ["A", "B", "C"] {
        h.record(d, &p).unwrap();
    }
    h.undo(&mut sink).unwrap();
    assert_eq!(h.cursor(), Some(1));

    h.record("D", &p).unwrap();
    assert_eq!(descriptions(&h), ["A", "B", "D"]);
    assert_eq!(h.cursor(), Some(2));
    assert!(!h.can_redo());
}

#[test]
fn capacity_evicts_oldest_and_keeps_relative_position() {
    let mut h = History::default();
    let p = Fake::new();
    for i in 0..DEFAULT_HISTORY_CAPACITY {
        h.record(format!("e{i}"), &p).unwrap();
    }
    assert_eq!(h.len(), 50);
    assert_eq!(h.cursor(), Some(49));

    h.record("e50", &p).unwrap();
    assert_eq!(h.len(), 50);
    assert_eq!(h.cursor(), Some(49));
    assert_eq!(h.entries().next().unwrap().description(), "e1");

    let mut sink = Sink::default();
    while h.undo(&mut sink).unwrap() {}
    assert_eq!(sink.restored.len(), 49);
    assert_eq!(sink.restored.first().unwrap(), "e49");
    assert_eq!(sink.restored.last().unwrap(), "e1");
    assert_eq!(h.cursor(), Some(0));
}

#[test]
fn eviction_while_not_at_tail_still_prunes_first() {
    let mut h = History::new(3).unwrap();
    let p = Fake::new();
    let mut sink = Sink::default();
    for d in ["a", "b", "c"] {
        h.record(d, &p).unwrap();
    }
    h.undo(&mut sink).unwrap();
    h.record("d", &p).unwrap();
    assert_eq!(descriptions(&h), ["a", "b", "d"]);

    h.record("e", &p).unwrap();
    assert_eq!(descriptions(&h), ["b", "d", "e"]);
    assert_eq!(h.cursor(), Some(2));
}

#[test]
fn undo_and_redo_are_noops_at_the_edges() {
    let mut h = History::default();
    let mut sink = Sink::default();
    assert!(!h.undo(&mut sink).unwrap());
    assert!(!h.redo(&mut sink).unwrap());

    h.record("only", &Fake::new()).unwrap();
    assert!(!h.undo(&mut sink).unwrap());
    assert!(!h.redo(&mut sink).unwrap());
    assert!(sink.restored.is_empty());
    assert_eq!(h.cursor(), Some(0));
}

#[test]
fn provider_failure_leaves_log_untouched() {
    let mut h = History::default();
    let p = Fake::new();
    let mut sink = Sink::default();
    h.record("a", &p).unwrap();
    h.record("b", &p).unwrap();
    h.undo(&mut sink).unwrap();

    let err = h.record("c", &Failing).unwrap_err();
    assert!(matches!(err, EditorError::NoActiveFile(_)));
    assert_eq!(descriptions(&h), ["a", "b"]);
    assert!(h.can_redo());
}

#[test]
fn snapshots_keep_captured_state() {
    let mut h = History::default();
    let mut p = Fake::new();
    p.state = Capture {
        content: Preview::Mesh(MeshInfo { triangles: 12 }),
        active_file: Some(FileDescriptor::named("part.stl")),
    };
    let snap = h.record("load part", &p).unwrap().clone();
    p.show("other.png", 5);
    assert_eq!(snap.content(), &Preview::Mesh(MeshInfo { triangles: 12 }));
    assert_eq!(snap.active_file().unwrap().name, "part.stl");
}

#[test]
fn zero_capacity_is_rejected_and_clear_resets() {
    assert!(History::new(0).is_err());
    let mut h = History::new(2).unwrap();
    h.record("a", &Fake::new()).unwrap();
    h.clear();
    assert!(h.is_empty());
    assert_eq!(h.cursor(), None);
    assert_eq!(h.capacity(), 2);
}

#[test]
fn preview_json_is_tagged_by_kind() {
    let json = serde_json::to_string(&Preview::Image(ImageInfo {
        width: 4,
        height: 2,
    }))
    .unwrap();
    assert_eq!(json, r#"{"kind":"image","width":4,"height":2}"#);
    let empty: Preview = serde_json::from_str(r#"{"kind":"empty"}"#).unwrap();
    assert_eq!(empty, Preview::Empty);
}
