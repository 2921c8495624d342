//! Borrowed byte-range views.
//!
//! A [`ByteView`] is the c2 equivalent of a `(pointer, length)` pair into
//! someone else's storage. The lifetime parameter ties the view to that
//! storage, so a view can never outlive the bytes it points at.

use std::cmp::Ordering;
use std::ffi::CStr;
use std::fmt;

/// An immutable, non-owning view over a contiguous byte range.
///
/// Views are `Copy`; narrowing one (`remove_prefix`, `remove_suffix`,
/// `clear`) never affects other copies or the underlying storage.
#[derive(Clone, Copy, Default)]
pub struct ByteView<'a> {
    data: &'a [u8],
}

impl<'a> ByteView<'a> {
    /// Creates a view over `data`.
    pub const fn new(data: &'a [u8]) -> Self {
        Self { data }
    }

    /// Creates a view over `data` up to (not including) its first NUL byte.
    ///
    /// If `data` holds no NUL the whole slice is viewed.
    pub fn from_nul_terminated(data: &'a [u8]) -> Self {
        let len = data.iter().position(|&b| b == 0).unwrap_or(data.len());
        Self { data: &data[..len] }
    }

    /// Creates a view over the bytes of a C string, excluding the terminator.
    pub fn from_cstr(s: &'a CStr) -> Self {
        Self { data: s.to_bytes() }
    }

    /// Returns the referenced bytes.
    pub const fn data(&self) -> &'a [u8] {
        self.data
    }

    /// Returns the length of the referenced data in bytes.
    pub const fn size(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the view covers zero bytes.
    pub const fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the byte at index `n`.
    ///
    /// Negative indices count from the end: `at(-1)` is the last byte.
    ///
    /// # Panics
    ///
    /// Panics unless `-size() <= n < size()`.
    pub fn at(&self, n: isize) -> u8 {
        let len = self.data.len();
        let idx = if n < 0 {
            len.checked_sub(n.unsigned_abs())
        } else {
            Some(n as usize)
        };
        match idx {
            Some(i) if i < len => self.data[i],
            _ => panic!("byte view index {n} out of range for length {len}"),
        }
    }

    /// Makes this view empty.
    pub fn clear(&mut self) {
        self.data = &[];
    }

    /// Drops the first `n` bytes from the view.
    ///
    /// # Panics
    ///
    /// Panics if `n > size()`.
    pub fn remove_prefix(&mut self, n: usize) {
        assert!(
            n <= self.data.len(),
            "remove_prefix({n}) exceeds view length {}",
            self.data.len()
        );
        self.data = &self.data[n..];
    }

    /// Drops the last `n` bytes from the view.
    ///
    /// # Panics
    ///
    /// Panics if `n > size()`.
    pub fn remove_suffix(&mut self, n: usize) {
        assert!(
            n <= self.data.len(),
            "remove_suffix({n}) exceeds view length {}",
            self.data.len()
        );
        self.data = &self.data[..self.data.len() - n];
    }

    /// Copies the referenced bytes into a new vector.
    pub fn to_vec(&self) -> Vec<u8> {
        self.data.to_vec()
    }

    /// Copies the referenced bytes into a new string.
    ///
    /// Invalid UTF-8 sequences are replaced with `U+FFFD`; use [`to_vec`]
    /// when the exact bytes matter.
    ///
    /// [`to_vec`]: ByteView::to_vec
    pub fn to_owned_string(&self) -> String {
        String::from_utf8_lossy(self.data).into_owned()
    }

    /// Copies the suffix starting at `start` into a new vector.
    ///
    /// # Panics
    ///
    /// Panics if `start > size()`.
    pub fn substr(&self, start: usize) -> Vec<u8> {
        assert!(
            start <= self.data.len(),
            "substr start {start} exceeds view length {}",
            self.data.len()
        );
        self.data[start..].to_vec()
    }

    /// Returns true if `prefix` is a prefix of this view.
    pub fn starts_with(&self, prefix: ByteView<'_>) -> bool {
        self.data.starts_with(prefix.data)
    }

    /// Returns true if `suffix` is a suffix of this view.
    pub fn ends_with(&self, suffix: ByteView<'_>) -> bool {
        self.data.ends_with(suffix.data)
    }

    /// Three-way comparison by unsigned byte-wise lexicographic order.
    ///
    /// When one view is a strict prefix of the other, the shorter is less.
    pub fn compare(&self, other: ByteView<'_>) -> Ordering {
        let min_len = self.data.len().min(other.data.len());
        match self.data[..min_len].cmp(&other.data[..min_len]) {
            Ordering::Equal => self.data.len().cmp(&other.data.len()),
            unequal => unequal,
        }
    }
}

impl PartialEq for ByteView<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl Eq for ByteView<'_> {}

impl PartialOrd for ByteView<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ByteView<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(*other)
    }
}

impl std::hash::Hash for ByteView<'_> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.data.hash(state);
    }
}

impl AsRef<[u8]> for ByteView<'_> {
    fn as_ref(&self) -> &[u8] {
        self.data
    }
}

impl<'a> From<&'a [u8]> for ByteView<'a> {
    fn from(data: &'a [u8]) -> Self {
        Self::new(data)
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for ByteView<'a> {
    fn from(data: &'a [u8; N]) -> Self {
        Self::new(data)
    }
}

impl<'a> From<&'a str> for ByteView<'a> {
    fn from(s: &'a str) -> Self {
        Self::new(s.as_bytes())
    }
}

impl<'a> From<&'a String> for ByteView<'a> {
    fn from(s: &'a String) -> Self {
        Self::new(s.as_bytes())
    }
}

impl<'a> From<&'a Vec<u8>> for ByteView<'a> {
    fn from(v: &'a Vec<u8>) -> Self {
        Self::new(v)
    }
}

impl<'a> From<&'a CStr> for ByteView<'a> {
    fn from(s: &'a CStr) -> Self {
        Self::from_cstr(s)
    }
}

impl fmt::Debug for ByteView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "b\"{}\"", self.data.escape_ascii())
    }
}
