//! Sequential stream adapters over borrowed collections
//!
//! Readers hold a cursor into a borrowed slice that only moves forward.
//! Every read is checked against the remaining length before the cursor is
//! touched, so a failed read leaves the stream exactly as it was.
//!
//! Writers append to a borrowed collection and are all-or-nothing: either
//! every value is stored or none is.
//!
//! Streams are not synchronized; use one stream instance per caller.

use alloc::vec::Vec;

use log::{debug, trace};

use crate::error::{Error, Result};

/// Read-only, cursor-based stream of `E`
pub trait ReadStream<E> {
    /// Current cursor position
    fn position(&self) -> usize;

    /// Number of elements left to read
    fn remaining(&self) -> usize;

    /// Check if the cursor is at the end
    #[inline]
    fn is_at_end(&self) -> bool {
        self.remaining() == 0
    }

    /// Look at the next `count` elements without advancing
    fn peek(&self, count: usize) -> Result<&[E]>;

    /// Advance past `count` elements
    ///
    /// Fails with `Error::OutOfRange` without moving if fewer remain.
    fn skip(&mut self, count: usize) -> Result<()>;

    /// Read exactly `count` elements and advance past them
    ///
    /// Fails with `Error::OutOfRange` without moving if fewer remain.
    fn read(&mut self, count: usize) -> Result<&[E]>;
}

/// Write-only stream of `E`
pub trait WriteStream<E> {
    /// Append every value, in order
    fn write(&mut self, values: &[E]) -> Result<()>;
}

impl<E, S: ReadStream<E> + ?Sized> ReadStream<E> for &mut S {
    fn position(&self) -> usize {
        (**self).position()
    }

    fn remaining(&self) -> usize {
        (**self).remaining()
    }

    fn peek(&self, count: usize) -> Result<&[E]> {
        (**self).peek(count)
    }

    fn skip(&mut self, count: usize) -> Result<()> {
        (**self).skip(count)
    }

    fn read(&mut self, count: usize) -> Result<&[E]> {
        (**self).read(count)
    }
}

impl<E, S: WriteStream<E> + ?Sized> WriteStream<E> for &mut S {
    fn write(&mut self, values: &[E]) -> Result<()> {
        (**self).write(values)
    }
}

/// Reader over a borrowed slice
#[derive(Debug)]
pub struct SliceReader<'a, E> {
    buf: &'a [E],
    pos: usize,
}

impl<'a, E> SliceReader<'a, E> {
    /// Create a reader positioned at the start of `buf`
    #[inline]
    pub fn new(buf: &'a [E]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Create a reader, failing with `Error::InvalidArgument` if `buf` is absent
    #[inline]
    pub fn try_wrap(buf: Option<&'a [E]>) -> Result<Self> {
        buf.map(Self::new).ok_or_else(|| {
            debug!("refusing to wrap an absent collection as a read stream");
            Error::InvalidArgument
        })
    }

    /// Check `count` against what remains without touching the cursor
    #[inline]
    fn span(&self, count: usize) -> Result<core::ops::Range<usize>> {
        if count > self.buf.len() - self.pos {
            debug!(
                "read of {} elements at position {} exceeds remaining {}",
                count,
                self.pos,
                self.buf.len() - self.pos
            );
            return Err(Error::OutOfRange);
        }
        Ok(self.pos..self.pos + count)
    }

    /// Read exactly `count` elements, borrowing them for the source lifetime
    #[inline]
    pub fn take(&mut self, count: usize) -> Result<&'a [E]> {
        let span = self.span(count)?;
        let buf: &'a [E] = self.buf;
        self.pos = span.end;
        trace!("read {} elements, cursor now {}", count, self.pos);
        Ok(&buf[span])
    }
}

impl<E> ReadStream<E> for SliceReader<'_, E> {
    #[inline]
    fn position(&self) -> usize {
        self.pos
    }

    #[inline]
    fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    #[inline]
    fn peek(&self, count: usize) -> Result<&[E]> {
        let span = self.span(count)?;
        Ok(&self.buf[span])
    }

    #[inline]
    fn skip(&mut self, count: usize) -> Result<()> {
        self.take(count).map(|_| ())
    }

    #[inline]
    fn read(&mut self, count: usize) -> Result<&[E]> {
        self.take(count)
    }
}

/// Writer appending to a borrowed, growable vector
#[derive(Debug)]
pub struct VecWriter<'a, E> {
    buf: &'a mut Vec<E>,
}

impl<'a, E> VecWriter<'a, E> {
    /// Create a writer appending to `buf`
    #[inline]
    pub fn new(buf: &'a mut Vec<E>) -> Self {
        Self { buf }
    }

    /// Create a writer, failing with `Error::InvalidArgument` if `buf` is absent
    #[inline]
    pub fn try_wrap(buf: Option<&'a mut Vec<E>>) -> Result<Self> {
        buf.map(Self::new).ok_or_else(|| {
            debug!("refusing to wrap an absent collection as a write stream");
            Error::InvalidArgument
        })
    }

    /// Number of elements in the backing vector
    #[inline]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Check if the backing vector is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }
}

impl<E: Clone> WriteStream<E> for VecWriter<'_, E> {
    fn write(&mut self, values: &[E]) -> Result<()> {
        // reserve up front so a failed allocation leaves the vector untouched
        self.buf.try_reserve(values.len()).map_err(|_| {
            debug!("could not reserve room for {} elements", values.len());
            Error::OutOfRange
        })?;
        self.buf.extend_from_slice(values);
        trace!("appended {} elements, length now {}", values.len(), self.buf.len());
        Ok(())
    }
}

/// Writer filling a borrowed, fixed-capacity slice from the front
#[derive(Debug)]
pub struct SliceWriter<'a, E> {
    buf: &'a mut [E],
    pos: usize,
}

impl<'a, E> SliceWriter<'a, E> {
    /// Create a writer starting at the front of `buf`
    #[inline]
    pub fn new(buf: &'a mut [E]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Create a writer, failing with `Error::InvalidArgument` if `buf` is absent
    #[inline]
    pub fn try_wrap(buf: Option<&'a mut [E]>) -> Result<Self> {
        buf.map(Self::new).ok_or_else(|| {
            debug!("refusing to wrap an absent slice as a write stream");
            Error::InvalidArgument
        })
    }

    /// Number of elements written so far
    #[inline]
    pub fn written(&self) -> usize {
        self.pos
    }

    /// Free capacity left in the slice
    #[inline]
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    /// The filled prefix of the slice
    #[inline]
    pub fn filled(&self) -> &[E] {
        &self.buf[..self.pos]
    }
}

impl<E: Clone> WriteStream<E> for SliceWriter<'_, E> {
    fn write(&mut self, values: &[E]) -> Result<()> {
        if values.len() > self.remaining() {
            debug!(
                "write of {} elements exceeds remaining capacity {}",
                values.len(),
                self.remaining()
            );
            return Err(Error::OutOfRange);
        }
        let end = self.pos + values.len();
        self.buf[self.pos..end].clone_from_slice(values);
        self.pos = end;
        trace!("wrote {} elements, cursor now {}", values.len(), self.pos);
        Ok(())
    }
}

/// Wrap a collection as a read stream
///
/// Fails with `Error::InvalidArgument` if `source` is absent.
#[inline]
pub fn wrap_read<E>(source: Option<&[E]>) -> Result<SliceReader<'_, E>> {
    SliceReader::try_wrap(source)
}

/// Wrap a growable collection as a write stream
///
/// Fails with `Error::InvalidArgument` if `sink` is absent.
#[inline]
pub fn wrap_write<E>(sink: Option<&mut Vec<E>>) -> Result<VecWriter<'_, E>> {
    VecWriter::try_wrap(sink)
}
