use crate::tables::bucket::BUCKET_SMALL;
use crate::tables::needle::NEEDLE_NOCASE;
use crate::test_utils::{bucket_payload, needle_payload};
use crate::{BytecodeObject, EngineTag, SizeTable, dump};

#[test]
fn dump_needle() {
    let payload = needle_payload(7, 1, b"FOO", NEEDLE_NOCASE);
    let object = BytecodeObject::from_parts(EngineTag::Single, &payload);

    insta::assert_snapshot!(dump(&object, &SizeTable::REFERENCE), @r#"
    tag      single
    header   64
    payload  24
    size     88

    id       7
    groups   0000000000000001
    nocase   true
    key      "FOO"
    "#);
}

#[test]
fn dump_buckets() {
    let payload = bucket_payload(
        &[
            &[(1, &b"ab"[..]), (20, &b"a\tb"[..])],
            &[(300, &b"xyz"[..])],
        ],
        BUCKET_SMALL,
    );
    let object = BytecodeObject::from_parts(EngineTag::Multi, &payload);

    insta::assert_snapshot!(dump(&object, &SizeTable::REFERENCE), @r#"
    tag      multi
    header   64
    payload  152
    size     216

    literals 3
    buckets  2 small
    B0      1  "ab"
    B0     20  "a\tb"
    B1    300  "xyz"
    "#);
}

#[test]
fn dump_foreign_payload() {
    let object = BytecodeObject::from_parts(EngineTag::Single, &[0u8; 16]);

    insta::assert_snapshot!(dump(&object, &SizeTable::REFERENCE), @r"
    tag      single
    header   64
    payload  16
    size     0

    (payload is not a reference table)
    ");
}
