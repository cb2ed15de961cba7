use std::io::Write;
use std::path::Path;

use indoc::indoc;
use litmatch_core::{LimitsConfig, LiteralError, RawLiteralError};
use tempfile::NamedTempFile;

use super::loader::{ConfigError, load_limits, load_literals};

fn file(contents: &str) -> NamedTempFile {
    let mut f = NamedTempFile::new().unwrap();
    f.write_all(contents.as_bytes()).unwrap();
    f
}

#[test]
fn loads_literal_file() {
    let f = file(indoc! {r#"
        [
            { "id": 1, "s": "foo" },
            { "id": 2, "bytes": [0, 255], "nocase": true, "groups": 6 },
            { "id": 3, "s": "bar", "msk": [255], "cmp": [114] }
        ]
    "#});

    let lits = load_literals(f.path()).unwrap();
    assert_eq!(lits.len(), 3);

    assert_eq!(lits[0].bytes(), b"foo");
    assert_eq!(lits[0].groups(), u64::MAX);

    assert_eq!(lits[1].bytes(), &[0, 255]);
    assert!(lits[1].nocase());
    assert_eq!(lits[1].groups(), 6);

    assert_eq!(lits[2].mask().unwrap().msk(), &[255]);
}

#[test]
fn invalid_literal_names_its_index() {
    let f = file(indoc! {r#"
        [
            { "id": 1, "s": "ok" },
            { "id": 2, "s": "" }
        ]
    "#});

    let err = load_literals(f.path()).unwrap_err();
    let ConfigError::Literal { index, source, .. } = &err else {
        panic!("expected a literal error, got {err:?}");
    };
    assert_eq!(*index, 1);
    assert_eq!(*source, RawLiteralError::Literal(LiteralError::Empty { id: 2 }));
}

#[test]
fn malformed_json_is_reported() {
    let f = file(r#"[{ "id": 1, "s": "foo", "colour": 3 }]"#);

    let err = load_literals(f.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Json { .. }));
    assert!(err.to_string().starts_with("invalid JSON in '"));
}

#[test]
fn missing_file_is_reported() {
    let err = load_literals(Path::new("/nonexistent/lits.json")).unwrap_err();
    assert!(matches!(err, ConfigError::Read { .. }));
}

#[test]
fn limits_default_without_file() {
    assert_eq!(load_limits(None).unwrap(), LimitsConfig::default());
}

#[test]
fn limits_file_overrides_fields() {
    let f = file(indoc! {r#"
        { "max_literal_count": 10, "allow_single_literal": false }
    "#});

    let limits = load_limits(Some(f.path())).unwrap();
    assert_eq!(limits.max_literal_count, 10);
    assert!(!limits.allow_single_literal);
    assert_eq!(limits.max_literal_len, LimitsConfig::default().max_literal_len);
}

#[test]
fn limits_file_rejects_unknown_fields() {
    let f = file(r#"{ "max_literals": 10 }"#);
    assert!(matches!(
        load_limits(Some(f.path())),
        Err(ConfigError::Json { .. })
    ));
}
