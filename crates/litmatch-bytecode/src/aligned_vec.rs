//! Cache-line aligned byte storage for bytecode objects.
//!
//! Object payloads sit at a cache-line offset, so the buffer itself must
//! start on a cache line. `Vec<u8>` does not guarantee that.

use std::ops::Deref;

/// Alignment of every object buffer.
pub const ALIGN: usize = 64;

#[repr(C, align(64))]
#[derive(Clone, Copy)]
struct Line([u8; ALIGN]);

const _: () = assert!(std::mem::size_of::<Line>() == ALIGN);

/// Fixed-length byte buffer starting on a 64-byte boundary.
///
/// Backed by `Vec<Line>`: element alignment of the `Vec` gives buffer
/// alignment. Bytes past `len` in the last line stay zero.
#[derive(Clone)]
pub struct AlignedVec {
    lines: Vec<Line>,
    len: usize,
}

impl AlignedVec {
    /// Allocate `len` zeroed bytes.
    pub fn zeroed(len: usize) -> Self {
        Self {
            lines: vec![Line([0; ALIGN]); len.div_ceil(ALIGN)],
            len,
        }
    }

    /// Copy bytes into aligned storage.
    pub fn copy_from_slice(bytes: &[u8]) -> Self {
        let mut vec = Self::zeroed(bytes.len());
        vec.as_mut_slice().copy_from_slice(bytes);
        vec
    }

    /// Read a file into aligned storage.
    pub fn from_file(path: impl AsRef<std::path::Path>) -> std::io::Result<Self> {
        let bytes = std::fs::read(path)?;
        Ok(Self::copy_from_slice(&bytes))
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn as_slice(&self) -> &[u8] {
        if self.lines.is_empty() {
            return &[];
        }
        assert!(
            self.len <= self.lines.len() * ALIGN,
            "AlignedVec: len {} exceeds capacity {}",
            self.len,
            self.lines.len() * ALIGN
        );
        // SAFETY: Line is repr(C) over [u8; ALIGN], so the lines form one
        // contiguous initialized byte region of at least `len` bytes.
        unsafe { std::slice::from_raw_parts(self.lines.as_ptr().cast::<u8>(), self.len) }
    }

    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        if self.lines.is_empty() {
            return &mut [];
        }
        assert!(
            self.len <= self.lines.len() * ALIGN,
            "AlignedVec: len {} exceeds capacity {}",
            self.len,
            self.lines.len() * ALIGN
        );
        // SAFETY: as in `as_slice`; the exclusive borrow of `self` makes the
        // returned slice the only live view.
        unsafe { std::slice::from_raw_parts_mut(self.lines.as_mut_ptr().cast::<u8>(), self.len) }
    }
}

impl Deref for AlignedVec {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        self.as_slice()
    }
}

impl std::fmt::Debug for AlignedVec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AlignedVec")
            .field("len", &self.len)
            .field(
                "aligned",
                &(self.lines.as_ptr() as usize % ALIGN == 0),
            )
            .finish()
    }
}
