//! Human-readable object dump for debugging.

use std::fmt::Write as _;

use super::constants::HEADER_REGION;
use super::header::EngineTag;
use super::object::BytecodeObject;
use super::size::{SizeTable, bytecode_size};
use super::tables::bucket::BucketView;
use super::tables::needle::NeedleView;

/// Dump an object: header summary, then the decoded reference table.
///
/// Payloads that are not reference tables are summarized by size only.
pub fn dump(object: &BytecodeObject, sizes: &SizeTable) -> String {
    let mut out = String::new();
    let tag = object.tag();
    let payload = object.payload();

    writeln!(out, "tag      {tag}").unwrap();
    writeln!(out, "header   {HEADER_REGION}").unwrap();
    writeln!(out, "payload  {}", payload.len()).unwrap();
    writeln!(out, "size     {}", bytecode_size(object, sizes)).unwrap();
    out.push('\n');

    let decoded = match tag {
        EngineTag::Single => NeedleView::new(payload).map(|v| dump_needle(&mut out, &v)),
        EngineTag::Multi => BucketView::new(payload).map(|v| dump_buckets(&mut out, &v)),
    };
    if decoded.is_none() {
        out.push_str("(payload is not a reference table)\n");
    }

    out
}

fn dump_needle(out: &mut String, view: &NeedleView<'_>) {
    writeln!(out, "id       {}", view.id()).unwrap();
    writeln!(out, "groups   {:016x}", view.groups()).unwrap();
    writeln!(out, "nocase   {}", view.nocase()).unwrap();
    writeln!(out, "key      \"{}\"", escape(view.key())).unwrap();
}

fn dump_buckets(out: &mut String, view: &BucketView<'_>) {
    writeln!(out, "literals {}", view.literal_count()).unwrap();
    write!(out, "buckets  {}", view.bucket_count()).unwrap();
    if view.is_small() {
        out.push_str(" small");
    }
    if view.is_wide() {
        out.push_str(" wide");
    }
    out.push('\n');

    for bucket in 0..view.bucket_count() {
        for record in view.bucket(bucket) {
            write!(out, "B{bucket:<2} {:>5}  \"{}\"", record.id(), escape(record.bytes())).unwrap();
            if record.nocase() {
                out.push_str(" nc");
            }
            let (msk, cmp) = record.mask();
            if !msk.is_empty() {
                write!(out, " msk={} cmp={}", hex(msk), hex(cmp)).unwrap();
            }
            out.push('\n');
        }
    }
}

fn escape(bytes: &[u8]) -> String {
    bytes
        .iter()
        .flat_map(|&b| std::ascii::escape_default(b))
        .map(char::from)
        .collect()
}

fn hex(bytes: &[u8]) -> String {
    bytes.iter().fold(String::new(), |mut s, b| {
        write!(s, "{b:02x}").unwrap();
        s
    })
}
