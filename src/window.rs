//! Immutable byte windows
//!
//! A [`ByteWindow`] holds the serialized form of exactly one value. The bytes
//! live inline, so producing a window never allocates.

use core::fmt;
use core::ops::Deref;

use crate::error::{Error, Result};

/// Largest window any numeric type may declare (128-bit integers)
pub const WINDOW_CAPACITY: usize = 16;

// Evaluated per `N` when `from_array` is instantiated.
struct FitsWindow<const N: usize>;

impl<const N: usize> FitsWindow<N> {
    const CHECK: () = assert!(N <= WINDOW_CAPACITY, "array does not fit in a ByteWindow");
}

/// Fixed-length, immutable, ordered sequence of bytes for one value
#[derive(Clone, Copy)]
pub struct ByteWindow {
    buf: [u8; WINDOW_CAPACITY],
    len: usize,
}

impl ByteWindow {
    /// Build a window from a fixed-size array
    ///
    /// Arrays longer than [`WINDOW_CAPACITY`] are rejected at compile time:
    ///
    /// ```compile_fail
    /// let _ = fixint::ByteWindow::from_array([0u8; 17]);
    /// ```
    #[inline]
    pub fn from_array<const N: usize>(bytes: [u8; N]) -> Self {
        let () = FitsWindow::<N>::CHECK;
        let mut buf = [0u8; WINDOW_CAPACITY];
        buf[..N].copy_from_slice(&bytes);
        Self { buf, len: N }
    }

    /// Build a window by copying a slice
    ///
    /// Returns `Error::InvalidEncoding` if the slice is longer than
    /// [`WINDOW_CAPACITY`].
    #[inline]
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        if bytes.len() > WINDOW_CAPACITY {
            return Err(Error::InvalidEncoding);
        }
        let mut buf = [0u8; WINDOW_CAPACITY];
        buf[..bytes.len()].copy_from_slice(bytes);
        Ok(Self {
            buf,
            len: bytes.len(),
        })
    }

    /// Window contents
    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    /// Copy the window into a fixed-size array
    ///
    /// Returns `Error::InvalidEncoding` if `N` differs from the window length.
    #[inline]
    pub fn to_array<const N: usize>(&self) -> Result<[u8; N]> {
        self.as_slice()
            .try_into()
            .map_err(|_| Error::InvalidEncoding)
    }

    /// Copy the window into a newly allocated vector
    pub fn to_vec(&self) -> alloc::vec::Vec<u8> {
        self.as_slice().to_vec()
    }
}

impl Deref for ByteWindow {
    type Target = [u8];

    #[inline]
    fn deref(&self) -> &[u8] {
        self.as_slice()
    }
}

impl AsRef<[u8]> for ByteWindow {
    #[inline]
    fn as_ref(&self) -> &[u8] {
        self.as_slice()
    }
}

impl PartialEq for ByteWindow {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl Eq for ByteWindow {}

impl PartialEq<[u8]> for ByteWindow {
    fn eq(&self, other: &[u8]) -> bool {
        self.as_slice() == other
    }
}

impl<const N: usize> PartialEq<[u8; N]> for ByteWindow {
    fn eq(&self, other: &[u8; N]) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl fmt::Debug for ByteWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ByteWindow").field(&self.as_slice()).finish()
    }
}

impl<'a> IntoIterator for &'a ByteWindow {
    type Item = &'a u8;
    type IntoIter = core::slice::Iter<'a, u8>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_array() {
        let window = ByteWindow::from_array([0x9c, 0xff]);
        assert_eq!(window.len(), 2);
        assert_eq!(window, [0x9c, 0xff]);
        assert_eq!(window.to_array::<2>(), Ok([0x9c, 0xff]));
    }

    #[test]
    fn test_from_array_full_capacity() {
        let bytes: [u8; WINDOW_CAPACITY] = core::array::from_fn(|i| i as u8);
        let window = ByteWindow::from_array(bytes);
        assert_eq!(window.len(), WINDOW_CAPACITY);
        assert_eq!(window, bytes);
        assert_eq!(window.to_array::<WINDOW_CAPACITY>(), Ok(bytes));
    }

    #[test]
    fn test_from_slice_bounds() {
        assert!(ByteWindow::from_slice(&[0u8; WINDOW_CAPACITY]).is_ok());
        assert_eq!(
            ByteWindow::from_slice(&[0u8; WINDOW_CAPACITY + 1]),
            Err(Error::InvalidEncoding)
        );

        let empty = ByteWindow::from_slice(&[]).unwrap();
        assert!(empty.is_empty());
    }

    #[test]
    fn test_to_array_length_mismatch() {
        let window = ByteWindow::from_array([1, 2, 3, 4]);
        assert_eq!(window.to_array::<2>(), Err(Error::InvalidEncoding));
        assert_eq!(window.to_array::<4>(), Ok([1, 2, 3, 4]));
    }

    #[test]
    fn test_equality_ignores_spare_capacity() {
        let a = ByteWindow::from_array([7u8]);
        let b = ByteWindow::from_slice(&[7]).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, ByteWindow::from_array([7u8, 0]));
    }
}
