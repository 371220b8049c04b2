//! Capability contracts and the provider indirection
//!
//! A numeric type takes part in a generic subsystem by providing a strategy
//! object for the matching capability. Strategies are plain trait objects:
//!
//! - [`ByteConverter`]: fixed-length byte layout
//! - [`TextConverter`]: decimal parsing and formatting
//! - [`RandomGenerator`]: random instances, optionally bounded
//!
//! The [`Provider`] trait maps a `(capability, type)` pair to exactly one
//! `'static` strategy instance. Resolution happens at compile time through
//! trait impls, so every lookup returns the same instance and no
//! initialization is ever performed.
//!
//! # Example
//!
//! ```rust
//! use fixint::contracts::{provider_for, ByteConverter};
//! use fixint::Int16;
//!
//! let converter = provider_for::<dyn ByteConverter<Int16>, Int16>();
//! assert_eq!(converter.byte_len(), 2);
//! ```

use alloc::string::String;

#[cfg(feature = "random")]
use core::ops::RangeInclusive;

#[cfg(feature = "random")]
use rand::RngCore;

use crate::error::Result;
use crate::window::ByteWindow;

/// Strategy converting values of `T` to and from a fixed-length byte window
pub trait ByteConverter<T> {
    /// Number of bytes in every window produced for `T`
    fn byte_len(&self) -> usize;

    /// Serialize a value; the window is always `byte_len()` long
    fn get_bytes(&self, value: &T) -> ByteWindow;

    /// Deserialize a value
    ///
    /// Fails with `Error::InvalidEncoding` if `bytes.len() != byte_len()`.
    fn from_bytes(&self, bytes: &[u8]) -> Result<T>;
}

/// Strategy converting values of `T` to and from locale-invariant text
pub trait TextConverter<T> {
    /// Parse a value, failing with `Error::FormatInvalid` or `Error::Overflow`
    fn parse(&self, text: &str) -> Result<T>;

    /// Format a value
    fn format(&self, value: &T) -> String;
}

/// Strategy generating random values of `T`
#[cfg(feature = "random")]
pub trait RandomGenerator<T> {
    /// Draw the next value from `source`
    ///
    /// With `bounds`, the value lies within the inclusive range; without,
    /// the full representable range is eligible. Fails with
    /// `Error::InvalidArgument` if the range is inverted.
    fn next_random(&self, source: &mut dyn RngCore, bounds: Option<RangeInclusive<T>>)
        -> Result<T>;
}

/// Supplies the strategy for capability `C` on the implementing type
pub trait Provider<C: ?Sized + 'static> {
    /// The one strategy instance for this `(C, Self)` pair
    fn provide() -> &'static C;
}

/// Resolve the strategy for capability `C` on type `T`
#[inline]
pub fn provider_for<C, T>() -> &'static C
where
    C: ?Sized + 'static,
    T: Provider<C>,
{
    T::provide()
}

/// Types that provide a [`ByteConverter`] for themselves
pub trait ByteConvertible: Sized + 'static + Provider<dyn ByteConverter<Self>> {}

impl<T> ByteConvertible for T where T: 'static + Provider<dyn ByteConverter<T>> {}

/// Types that provide a [`TextConverter`] for themselves
pub trait TextConvertible: Sized + 'static + Provider<dyn TextConverter<Self>> {}

impl<T> TextConvertible for T where T: 'static + Provider<dyn TextConverter<T>> {}

/// Types that provide a [`RandomGenerator`] for themselves
#[cfg(feature = "random")]
pub trait RandomGenerable: Sized + 'static + Provider<dyn RandomGenerator<Self>> {}

#[cfg(feature = "random")]
impl<T> RandomGenerable for T where T: 'static + Provider<dyn RandomGenerator<T>> {}

/// Byte strategy for `T`
#[inline]
pub fn byte_converter<T: ByteConvertible>() -> &'static dyn ByteConverter<T> {
    provider_for::<dyn ByteConverter<T>, T>()
}

/// Text strategy for `T`
#[inline]
pub fn text_converter<T: TextConvertible>() -> &'static dyn TextConverter<T> {
    provider_for::<dyn TextConverter<T>, T>()
}

/// Random strategy for `T`
#[cfg(feature = "random")]
#[inline]
pub fn random_generator<T: RandomGenerable>() -> &'static dyn RandomGenerator<T> {
    provider_for::<dyn RandomGenerator<T>, T>()
}
