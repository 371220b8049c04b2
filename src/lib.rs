//! fixint: fixed-width wrapping integers with capability-driven byte conversion
//!
//! Each numeric type describes, through a small set of capability contracts,
//! how it converts to and from bytes, how it parses and formats as text, and
//! how random instances are generated. A generic, stateless engine dispatches
//! on those contracts, and cursor-based stream adapters move typed values in
//! and out of any borrowed collection.
//!
//! # Byte Layout
//!
//! ```text
//! +----------------+-------+-------------------------------+
//! | Type           | Bytes | Encoding                      |
//! +----------------+-------+-------------------------------+
//! | Int8 / UInt8   |     1 | two's complement / unsigned   |
//! | Int16 / UInt16 |     2 | little-endian                 |
//! | Int32 / UInt32 |     4 | little-endian                 |
//! | Int64 / UInt64 |     8 | little-endian                 |
//! | Int128/UInt128 |    16 | little-endian                 |
//! +----------------+-------+-------------------------------+
//! ```
//!
//! A window's length is fixed per type; there are no length prefixes and no
//! variable-length encodings.
//!
//! # Features
//!
//! - Allocation-free conversion into inline [`ByteWindow`]s
//! - Wrapping arithmetic modulo `2^BITS`, checked parsing
//! - Strongly exception-safe stream reads (a failed read never moves the cursor)
//! - Seedable random generation through an explicitly passed `rand` source
//! - `no_std` support with `alloc`
//!
//! # Example
//!
//! ```rust
//! use fixint::*;
//!
//! let value: Int16 = "-100".parse()?;
//! assert_eq!(convert::get_bytes(&value).as_slice(), &[0x9c, 0xff]);
//! assert_eq!(Int16::MAX * Int16::MAX, Int16::new(1));
//!
//! let mut buf = Vec::new();
//! let mut writer = stream::wrap_write(Some(&mut buf))?;
//! convert::stream_write(&mut writer, &value)?;
//!
//! let mut reader = stream::wrap_read(Some(&buf[..]))?;
//! assert_eq!(convert::stream_read::<Int16, _>(&mut reader)?, value);
//! # Ok::<(), fixint::Error>(())
//! ```

#![no_std]
#![deny(unsafe_code)]
#![warn(missing_docs)]

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

pub mod contracts;
pub mod convert;
pub mod error;
pub mod float_bits;
pub mod num;
pub mod stream;
pub mod window;

#[cfg(feature = "std")]
pub mod bench;

// Re-export main types
pub use contracts::{ByteConvertible, Provider, TextConvertible};
pub use error::{Error, Result};
pub use num::{Int128, Int16, Int32, Int64, Int8, UInt128, UInt16, UInt32, UInt64, UInt8};
pub use stream::{ReadStream, SliceReader, SliceWriter, VecWriter, WriteStream};
pub use window::ByteWindow;

#[cfg(feature = "random")]
pub use contracts::RandomGenerable;
