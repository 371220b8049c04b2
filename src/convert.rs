//! Generic byte conversion engine
//!
//! The engine is stateless and never inspects concrete types: every call
//! resolves the capability strategy for `T` through its provider and
//! delegates to it. New numeric types plug in by implementing
//! [`Provider`](crate::contracts::Provider) for the capabilities they support.
//!
//! # Example
//!
//! ```rust
//! use fixint::convert::{from_bytes, get_bytes, stream_read, stream_write};
//! use fixint::stream::{SliceReader, VecWriter};
//! use fixint::{Int16, UInt32};
//!
//! let window = get_bytes(&Int16::new(-100));
//! assert_eq!(window.as_slice(), &[0x9c, 0xff]);
//! assert_eq!(from_bytes::<Int16>(&window)?, Int16::new(-100));
//!
//! let mut buf = Vec::new();
//! let mut writer = VecWriter::new(&mut buf);
//! stream_write(&mut writer, &Int16::new(7))?;
//! stream_write(&mut writer, &UInt32::new(42))?;
//!
//! let mut reader = SliceReader::new(&buf[..]);
//! assert_eq!(stream_read::<Int16, _>(&mut reader)?, Int16::new(7));
//! assert_eq!(stream_read::<UInt32, _>(&mut reader)?, UInt32::new(42));
//! # Ok::<(), fixint::Error>(())
//! ```

use alloc::string::String;

use log::debug;

use crate::contracts::{byte_converter, text_converter, ByteConvertible, TextConvertible};
use crate::error::{Error, Result};
use crate::stream::{ReadStream, WriteStream};
use crate::window::ByteWindow;

#[cfg(feature = "random")]
use crate::contracts::{random_generator, RandomGenerable};
#[cfg(feature = "random")]
use core::ops::RangeInclusive;
#[cfg(feature = "random")]
use rand::RngCore;

/// Serialized length of every value of `T`
#[inline]
pub fn byte_len<T: ByteConvertible>() -> usize {
    byte_converter::<T>().byte_len()
}

/// Serialize a value into its byte window
#[inline]
pub fn get_bytes<T: ByteConvertible>(value: &T) -> ByteWindow {
    let converter = byte_converter::<T>();
    let window = converter.get_bytes(value);
    debug_assert_eq!(window.len(), converter.byte_len());
    window
}

/// Deserialize a value from its byte window
///
/// Returns `Error::InvalidEncoding` if `window` is empty or its length does
/// not match `byte_len::<T>()`.
#[inline]
pub fn from_bytes<T: ByteConvertible>(window: &[u8]) -> Result<T> {
    let converter = byte_converter::<T>();
    if window.is_empty() || window.len() != converter.byte_len() {
        debug!(
            "byte window of length {} rejected, expected {}",
            window.len(),
            converter.byte_len()
        );
        return Err(Error::InvalidEncoding);
    }
    converter.from_bytes(window)
}

/// Read one value from a byte stream
///
/// Consumes exactly `byte_len::<T>()` bytes. Returns `Error::OutOfRange` if
/// fewer remain; on any error the cursor does not move.
#[inline]
pub fn stream_read<T, S>(stream: &mut S) -> Result<T>
where
    T: ByteConvertible,
    S: ReadStream<u8> + ?Sized,
{
    let len = byte_len::<T>();
    let value = from_bytes::<T>(stream.peek(len)?)?;
    stream.skip(len)?;
    Ok(value)
}

/// Write one value to a byte stream
///
/// The whole window is written in a single call, so the stream either
/// receives every byte or none.
#[inline]
pub fn stream_write<T, S>(stream: &mut S, value: &T) -> Result<()>
where
    T: ByteConvertible,
    S: WriteStream<u8> + ?Sized,
{
    let window = get_bytes(value);
    stream.write(&window)
}

/// Parse a value from locale-invariant text
#[inline]
pub fn parse<T: TextConvertible>(text: &str) -> Result<T> {
    text_converter::<T>().parse(text)
}

/// Format a value as locale-invariant text
#[inline]
pub fn format<T: TextConvertible>(value: &T) -> String {
    text_converter::<T>().format(value)
}

/// Draw a random value from `source`, optionally within inclusive `bounds`
#[cfg(feature = "random")]
#[inline]
pub fn next_random<T: RandomGenerable>(
    source: &mut dyn RngCore,
    bounds: Option<RangeInclusive<T>>,
) -> Result<T> {
    random_generator::<T>().next_random(source, bounds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::num::{Int128, Int16, Int64, Int8, UInt16, UInt32, UInt64, UInt8};
    use crate::stream::{SliceReader, SliceWriter, VecWriter};
    use alloc::vec::Vec;

    #[test]
    fn test_byte_lengths() {
        assert_eq!(byte_len::<Int8>(), 1);
        assert_eq!(byte_len::<UInt16>(), 2);
        assert_eq!(byte_len::<UInt32>(), 4);
        assert_eq!(byte_len::<Int64>(), 8);
        assert_eq!(byte_len::<Int128>(), 16);
    }

    #[test]
    fn test_roundtrip_edge_values() {
        for v in [Int16::MIN, Int16::new(-1), Int16::ZERO, Int16::ONE, Int16::MAX] {
            let window = get_bytes(&v);
            assert_eq!(window.len(), 2);
            assert_eq!(from_bytes::<Int16>(&window), Ok(v));
        }
        for v in [UInt64::MIN, UInt64::new(1 << 40), UInt64::MAX] {
            assert_eq!(from_bytes::<UInt64>(&get_bytes(&v)), Ok(v));
        }
    }

    #[test]
    fn test_from_bytes_rejects_bad_lengths() {
        assert_eq!(from_bytes::<Int16>(&[]), Err(Error::InvalidEncoding));
        assert_eq!(from_bytes::<UInt8>(&[]), Err(Error::InvalidEncoding));
        assert_eq!(from_bytes::<Int16>(&[1, 2, 3]), Err(Error::InvalidEncoding));
        assert_eq!(from_bytes::<UInt32>(&[1, 2]), Err(Error::InvalidEncoding));
    }

    #[test]
    fn test_stream_roundtrip_mixed_types() {
        let mut buf = Vec::new();
        let mut writer = VecWriter::new(&mut buf);
        stream_write(&mut writer, &Int16::new(-100)).unwrap();
        stream_write(&mut writer, &UInt8::new(7)).unwrap();
        stream_write(&mut writer, &Int64::MIN).unwrap();
        assert_eq!(buf.len(), 2 + 1 + 8);

        let mut reader = SliceReader::new(&buf[..]);
        assert_eq!(stream_read::<Int16, _>(&mut reader), Ok(Int16::new(-100)));
        assert_eq!(stream_read::<UInt8, _>(&mut reader), Ok(UInt8::new(7)));
        assert_eq!(stream_read::<Int64, _>(&mut reader), Ok(Int64::MIN));
        assert!(reader.is_at_end());
    }

    #[test]
    fn test_stream_read_short_keeps_cursor() {
        let buf = [0x01, 0x02, 0x03];
        let mut reader = SliceReader::new(&buf[..]);

        assert_eq!(stream_read::<UInt32, _>(&mut reader), Err(Error::OutOfRange));
        assert_eq!(reader.position(), 0);

        assert_eq!(stream_read::<UInt16, _>(&mut reader), Ok(UInt16::new(0x0201)));
        assert_eq!(stream_read::<UInt16, _>(&mut reader), Err(Error::OutOfRange));
        assert_eq!(reader.position(), 2);
        assert_eq!(stream_read::<UInt8, _>(&mut reader), Ok(UInt8::new(3)));
    }

    // One-byte type whose converter refuses the byte 7.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    struct Flag(u8);

    struct FlagConverter;

    static FLAG_CONVERTER: FlagConverter = FlagConverter;

    impl crate::contracts::ByteConverter<Flag> for FlagConverter {
        fn byte_len(&self) -> usize {
            1
        }

        fn get_bytes(&self, value: &Flag) -> ByteWindow {
            ByteWindow::from_array([value.0])
        }

        fn from_bytes(&self, bytes: &[u8]) -> Result<Flag> {
            match bytes {
                [7] => Err(Error::InvalidEncoding),
                [b] => Ok(Flag(*b)),
                _ => Err(Error::InvalidEncoding),
            }
        }
    }

    impl crate::contracts::Provider<dyn crate::contracts::ByteConverter<Flag>> for Flag {
        fn provide() -> &'static dyn crate::contracts::ByteConverter<Flag> {
            &FLAG_CONVERTER
        }
    }

    #[test]
    fn test_stream_read_bad_decode_keeps_cursor() {
        let buf = [7u8, 1];
        let mut reader = SliceReader::new(&buf[..]);

        assert_eq!(stream_read::<Flag, _>(&mut reader), Err(Error::InvalidEncoding));
        assert_eq!(reader.position(), 0);
        assert_eq!(reader.remaining(), 2);

        reader.skip(1).unwrap();
        assert_eq!(stream_read::<Flag, _>(&mut reader), Ok(Flag(1)));
        assert!(reader.is_at_end());
    }

    #[test]
    fn test_stream_write_fixed_capacity() {
        let mut buf = [0u8; 5];
        let mut writer = SliceWriter::new(&mut buf);
        stream_write(&mut writer, &UInt32::new(0x0403_0201)).unwrap();
        assert_eq!(stream_write(&mut writer, &UInt16::MAX), Err(Error::OutOfRange));
        assert_eq!(writer.written(), 4);
        stream_write(&mut writer, &UInt8::new(5)).unwrap();
        assert_eq!(buf, [1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_text_dispatch() {
        assert_eq!(parse::<Int16>("-100"), Ok(Int16::new(-100)));
        assert_eq!(parse::<Int16>("99999"), Err(Error::Overflow));
        assert_eq!(parse::<UInt8>("abc"), Err(Error::FormatInvalid));
        assert_eq!(format(&Int64::new(-12345)), "-12345");
    }

    #[cfg(feature = "random")]
    #[test]
    fn test_random_dispatch() {
        use rand::rngs::StdRng;
        use rand::SeedableRng;

        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let v: Int16 = next_random(&mut rng, Some(Int16::new(-3)..=Int16::new(3))).unwrap();
            assert!((-3..=3).contains(&v.get()));
        }

        let pinned: UInt32 = next_random(&mut rng, Some(UInt32::new(9)..=UInt32::new(9))).unwrap();
        assert_eq!(pinned, UInt32::new(9));

        assert_eq!(
            next_random::<Int8>(&mut rng, Some(Int8::new(5)..=Int8::new(-5))),
            Err(Error::InvalidArgument)
        );
    }

    #[cfg(feature = "random")]
    #[test]
    fn test_random_is_reproducible() {
        use rand::rngs::StdRng;
        use rand::SeedableRng;

        let draw = |seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            (0..16)
                .map(|_| next_random::<UInt64>(&mut rng, None).unwrap())
                .collect::<Vec<_>>()
        };
        assert_eq!(draw(42), draw(42));
        assert_ne!(draw(42), draw(43));
    }
}
