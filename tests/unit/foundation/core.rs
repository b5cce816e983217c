use super::*;

#[test]
fn zoom_adjust_saturates_at_bounds() {
    let z = Zoom::DEFAULT;
    assert_eq!(z.adjusted(10).percent(), 110);
    assert_eq!(z.adjusted(-10).percent(), 90);
    assert_eq!(Zoom::new(195).unwrap().adjusted(10), Zoom::MAX);
    assert_eq!(Zoom::new(55).unwrap().adjusted(-10), Zoom::MIN);
    assert_eq!(Zoom::MIN.adjusted(-1000), Zoom::MIN);
}

#[test]
fn zoom_adjust_by_extreme_delta_stays_in_range() {
    assert_eq!(Zoom::DEFAULT.adjusted(i32::MAX), Zoom::MAX);
    assert_eq!(Zoom::MAX.adjusted(i32::MAX), Zoom::MAX);
    assert_eq!(Zoom::DEFAULT.adjusted(i32::MIN), Zoom::MIN);
    assert_eq!(Zoom::MIN.adjusted(i32::MIN), Zoom::MIN);
}

#[test]
fn zoom_new_rejects_out_of_range() {
    assert!(Zoom::new(49).is_err());
    assert!(Zoom::new(201).is_err());
    assert_eq!(Zoom::new(150).unwrap().scale(), 1.5);
    assert_eq!(Zoom::new(120).unwrap().to_string(), "120%");
}

#[test]
fn theme_reads_dark_only_from_exact_literal() {
    assert_eq!(Theme::from_stored("dark"), Theme::Dark);
    assert_eq!(Theme::from_stored("light"), Theme::Light);
    assert_eq!(Theme::from_stored("DARK"), Theme::Light);
    assert_eq!(Theme::from_stored(""), Theme::Light);
    assert_eq!(Theme::Dark.toggled(), Theme::Light);
    assert_eq!(Theme::Light.toggled().as_str(), "dark");
}

#[test]
fn descriptor_stem_strips_last_extension() {
    assert_eq!(FileDescriptor::named("clip.final.mp4").stem(), "clip.final");
    assert_eq!(FileDescriptor::named("README").stem(), "README");
}

#[test]
fn descriptor_stem_of_dotfile_drops_leading_dot() {
    assert_eq!(FileDescriptor::named(".mp4").stem(), "mp4");
    assert_eq!(FileDescriptor::named(".hidden").stem(), "hidden");
    assert_eq!(FileDescriptor::named(".").stem(), "");
}

#[test]
fn descriptor_json_omits_unknown_fields() {
    let json = serde_json::to_string(&FileDescriptor::named("a.png")).unwrap();
    assert_eq!(json, r#"{"name":"a.png"}"#);

    let full = FileDescriptor::new("a.png", Some("image/png".to_string()), 12);
    let back: FileDescriptor = serde_json::from_str(&serde_json::to_string(&full).unwrap()).unwrap();
    assert_eq!(back, full);
}
