//! Library-level tests for `generate`, driven through real files.

use std::fs;

use esp32_cam_codegen::{generate, CodegenError, ErrorKind, CODE_TEMPLATES};
use tempfile::NamedTempFile;

fn write_doc(contents: &str) -> NamedTempFile {
    let file = NamedTempFile::new().unwrap();
    fs::write(file.path(), contents).unwrap();
    file
}

#[test]
fn line_count_matches_templates() {
    for contents in [
        "{}",
        r#"{"quality": 5}"#,
        r#"{"0xd3": 1, "unknown": [1, 2], "framesize": 3}"#,
    ] {
        let file = write_doc(contents);
        let code = generate(file.path()).unwrap();
        assert_eq!(code.len(), CODE_TEMPLATES.len(), "{contents}");
    }
}

#[test]
fn output_follows_template_order() {
    let file = write_doc(r#"{"led_intensity": 50, "framesize": 4}"#);
    let code = generate(file.path()).unwrap();
    for (line, t) in code.lines().iter().zip(CODE_TEMPLATES) {
        let call = t.template.split('{').next().unwrap();
        assert!(line.starts_with(call), "{line} vs {}", t.template);
    }
}

#[test]
fn defaults_and_overrides() {
    let file = write_doc(r#"{"aec_value": 300}"#);
    let code = generate(file.path()).unwrap();
    assert_eq!(code.line_for("aec_value"), Some("s->set_aec_value(s, 300);"));
    assert_eq!(code.line_for("awb"), Some("s->set_whitebal(s, 1);"));
    assert_eq!(code.line_for("vflip"), Some("s->set_vflip(s, 0);"));
}

#[test]
fn generation_is_idempotent() {
    let file = write_doc(r#"{"quality": 5, "hmirror": 1}"#);
    let a = generate(file.path()).unwrap().to_string();
    let b = generate(file.path()).unwrap().to_string();
    assert_eq!(a, b);
}

#[test]
fn missing_file_is_resource_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = generate(dir.path().join("absent.json")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Resource);
    assert!(matches!(err, CodegenError::Read { .. }));
}

#[test]
fn directory_is_resource_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = generate(dir.path()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Resource);
}

#[test]
fn malformed_file_is_format_error() {
    let file = write_doc(r#"{"quality": 5,"#);
    let err = generate(file.path()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Format);
}

#[test]
fn scalar_document_is_format_error() {
    let file = write_doc("42");
    let err = generate(file.path()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Format);
}

#[test]
fn non_numeric_values_are_accepted() {
    let file = write_doc(r#"{"framesize": "FRAMESIZE_VGA", "vflip": true, "quality": 100000000000000000000}"#);
    let code = generate(file.path()).unwrap();
    assert_eq!(code.line_for("framesize"), Some("s->set_framesize(s, (framesize_t)FRAMESIZE_VGA);"));
    assert_eq!(code.line_for("vflip"), Some("s->set_vflip(s, true);"));
    assert_eq!(code.line_for("quality"), Some("s->set_quality(s, 100000000000000000000);"));
}
