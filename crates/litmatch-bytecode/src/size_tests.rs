use crate::test_utils::{bucket_payload, needle_payload};
use crate::{
    BytecodeObject, EngineTag, HEADER_REGION, SizeTable, bytecode_size, bytecode_size_raw,
};

fn fixed_40(_: &[u8]) -> usize {
    40
}

fn invalid(_: &[u8]) -> usize {
    0
}

#[test]
fn reference_single() {
    let payload = needle_payload(1, 1, b"abcdef", 0);
    let object = BytecodeObject::from_parts(EngineTag::Single, &payload);

    assert_eq!(payload.len(), 32);
    assert_eq!(bytecode_size(&object, &SizeTable::REFERENCE), HEADER_REGION + 32);
}

#[test]
fn reference_multi() {
    let payload = bucket_payload(&[&[(1, &b"ab"[..])], &[(2, &b"cd"[..])]], 0);
    let object = BytecodeObject::from_parts(EngineTag::Multi, &payload);

    assert_eq!(
        bytecode_size(&object, &SizeTable::default()),
        HEADER_REGION + payload.len()
    );
}

#[test]
fn dispatches_on_tag() {
    let sizes = SizeTable {
        single: fixed_40,
        multi: invalid,
    };
    let single = BytecodeObject::from_parts(EngineTag::Single, &[0u8; 40]);
    let multi = BytecodeObject::from_parts(EngineTag::Multi, &[0u8; 40]);

    assert_eq!(bytecode_size(&single, &sizes), HEADER_REGION + 40);
    assert_eq!(bytecode_size(&multi, &sizes), 0);
}

#[test]
fn zero_engine_size_propagates() {
    let object = BytecodeObject::from_parts(EngineTag::Single, &[0u8; 16]);
    assert_eq!(bytecode_size(&object, &SizeTable::REFERENCE), 0);
}

#[test]
fn raw_matches_object() {
    let payload = needle_payload(5, 1, b"xyz", 0);
    let object = BytecodeObject::from_parts(EngineTag::Single, &payload);

    assert_eq!(
        bytecode_size_raw(object.as_bytes(), &SizeTable::REFERENCE),
        bytecode_size(&object, &SizeTable::REFERENCE)
    );
}

#[test]
#[should_panic(expected = "unknown engine tag 0x09")]
fn raw_unknown_tag_panics() {
    let mut bytes = vec![0u8; 128];
    bytes[0] = 9;
    bytecode_size_raw(&bytes, &SizeTable::REFERENCE);
}

#[test]
#[should_panic(expected = "shorter than the 64-byte header region")]
fn raw_short_buffer_panics() {
    bytecode_size_raw(&[1u8; 10], &SizeTable::REFERENCE);
}
