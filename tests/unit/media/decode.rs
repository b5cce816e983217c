use std::io::Cursor;

use super::*;

fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let img = image::RgbaImage::from_pixel(width, height, image::Rgba([10, 20, 30, 255]));
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    buf
}

fn binary_stl(triangles: u32) -> Vec<u8> {
    let mut out = vec![0u8; 80];
    out.extend_from_slice(&triangles.to_le_bytes());
    out.extend(std::iter::repeat_n(0u8, 50 * triangles as usize));
    out
}

#[test]
fn image_probe_reads_dimensions() {
    let handle = ProbeDecoder
        .decode(MediaKind::Image, "a.png", &png_bytes(3, 2))
        .unwrap();
    assert_eq!(
        handle,
        MediaHandle::Image(ImageInfo {
            width: 3,
            height: 2
        })
    );
    assert_eq!(handle.kind(), MediaKind::Image);
}

#[test]
fn image_probe_rejects_garbage() {
    let err = ProbeDecoder
        .decode(MediaKind::Image, "a.png", b"definitely not an image")
        .unwrap_err();
    assert!(matches!(err, EditorError::ExternalServiceUnavailable(_)));
}

#[test]
fn binary_stl_counts_triangles() {
    let handle = ProbeDecoder
        .decode(MediaKind::Cad, "part.STL", &binary_stl(4))
        .unwrap();
    assert_eq!(handle, MediaHandle::Mesh(MeshInfo { triangles: 4 }));
}

#[test]
fn ascii_stl_counts_facets() {
    let text = "solid cube\n  facet normal 0 0 1\n    outer loop\n    endloop\n  endfacet\n  facet normal 0 1 0\n  endfacet\nendsolid cube\n";
    let info = probe_mesh("cube.stl", text.as_bytes()).unwrap();
    assert_eq!(info.triangles, 2);
}

#[test]
fn truncated_binary_stl_is_rejected() {
    let mut bytes = binary_stl(2);
    bytes.pop();
    assert!(probe_mesh("part.stl", &bytes).is_err());
}

#[test]
fn step_and_iges_have_no_loader() {
    for name in ["part.step", "part.iges"] {
        let err = probe_mesh(name, b"ISO-10303-21;").unwrap_err();
        assert!(err.to_string().contains("no mesh loader"));
    }
}

#[test]
fn unknown_kind_is_unsupported() {
    let err = ProbeDecoder
        .decode(MediaKind::Unknown, "x.txt", b"")
        .unwrap_err();
    assert!(matches!(err, EditorError::UnsupportedFormat(_)));
}

#[cfg(not(feature = "media-ffmpeg"))]
#[test]
fn audio_and_video_need_ffmpeg_feature() {
    assert!(matches!(
        ProbeDecoder.decode(MediaKind::Audio, "a.wav", b"RIFF"),
        Err(EditorError::ExternalServiceUnavailable(_))
    ));
    assert!(matches!(
        ProbeDecoder.decode(MediaKind::Video, "a.mp4", b""),
        Err(EditorError::ExternalServiceUnavailable(_))
    ));
}

#[test]
fn ff_ratio_parsing() {
    assert_eq!(parse_ff_ratio("30000/1001"), Some((30000, 1001)));
    assert_eq!(parse_ff_ratio("25/0"), None);
    assert_eq!(parse_ff_ratio("abc"), None);
}

#[test]
fn video_fps_guards_zero_denominator() {
    let v = VideoInfo {
        width: 1,
        height: 1,
        fps_num: 30,
        fps_den: 0,
        duration_sec: 0.0,
        has_audio: false,
    };
    assert_eq!(v.fps(), 0.0);
}
