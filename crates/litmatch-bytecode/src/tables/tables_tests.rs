use crate::tables::bucket::{self, BUCKET_SMALL, BUCKET_WIDE, BucketView, records_offset};
use crate::tables::needle::{self, NEEDLE_NOCASE, NeedleView};
use crate::tables::pad_table;
use crate::test_utils::{bucket_payload, needle_payload};

#[test]
fn pad_to_eight() {
    assert_eq!(pad_table(0), 0);
    assert_eq!(pad_table(1), 8);
    assert_eq!(pad_table(8), 8);
    assert_eq!(pad_table(21), 24);
}

#[test]
fn needle_view_decodes() {
    let payload = needle_payload(42, 0xf0, b"FOO", NEEDLE_NOCASE);
    let view = NeedleView::new(&payload).unwrap();

    assert_eq!(view.id(), 42);
    assert_eq!(view.groups(), 0xf0);
    assert!(view.nocase());
    assert_eq!(view.key(), b"FOO");
}

#[test]
fn needle_size_ignores_trailing_bytes() {
    let mut payload = needle_payload(1, 1, b"a", 0);
    let size = payload.len();
    payload.extend_from_slice(&[0xee; 16]);

    assert_eq!(needle::table_size(&payload), size);
}

#[test]
fn needle_size_rejects_truncation() {
    let payload = needle_payload(1, 1, b"abcdefgh", 0);
    assert_eq!(needle::table_size(&payload[..payload.len() - 1]), 0);
    assert_eq!(needle::table_size(&payload[..3]), 0);
    assert_eq!(needle::table_size(&[]), 0);
}

#[test]
fn needle_view_rejects_bad_key_len() {
    let mut payload = needle_payload(1, 1, b"abc", 0);
    payload[16..18].copy_from_slice(&200u16.to_le_bytes());
    assert!(NeedleView::new(&payload).is_none());
}

#[test]
fn bucket_view_decodes() {
    let payload = bucket_payload(
        &[&[(1, &b"a"[..]), (2, &b"bb"[..])], &[], &[(3, &b"ccc"[..])]],
        BUCKET_SMALL | BUCKET_WIDE,
    );
    let view = BucketView::new(&payload).unwrap();

    assert_eq!(view.literal_count(), 3);
    assert_eq!(view.bucket_count(), 3);
    assert!(view.is_small());
    assert!(view.is_wide());

    let ids: Vec<Vec<u32>> = (0..3)
        .map(|b| view.bucket(b).map(|r| r.id()).collect())
        .collect();
    assert_eq!(ids, vec![vec![1, 2], vec![], vec![3]]);

    let record = view.bucket(2).next().unwrap();
    assert_eq!(record.bytes(), b"ccc");
    assert_eq!(record.groups(), u64::MAX);
    assert!(!record.nocase());
    assert_eq!(record.mask(), (&[][..], &[][..]));
}

#[test]
fn bucket_size_matches_layout() {
    let payload = bucket_payload(&[&[(1, &b"abc"[..])]], 0);

    assert_eq!(payload.len(), records_offset(1) + 40);
    assert_eq!(bucket::table_size(&payload), payload.len());
}

#[test]
fn bucket_view_rejects_unordered_starts() {
    let mut payload = bucket_payload(&[&[(1, &b"a"[..])], &[(2, &b"b"[..])]], 0);
    // Second bucket start before the first.
    payload[20..24].copy_from_slice(&0u32.to_le_bytes());
    assert!(BucketView::new(&payload).is_none());
}

#[test]
fn records_stop_at_malformed_entry() {
    let mut payload = bucket_payload(&[&[(1, &b"a"[..]), (2, &b"b"[..])]], 0);
    let second = records_offset(1) + 40;
    payload[second + 4..second + 6].copy_from_slice(&0u16.to_le_bytes());

    let view = BucketView::new(&payload).unwrap();
    let ids: Vec<u32> = view.bucket(0).map(|r| r.id()).collect();
    assert_eq!(ids, vec![1]);
}
