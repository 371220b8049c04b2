//! Fixed-width wrapping integer types
//!
//! Every width is its own type. Arithmetic operators wrap modulo
//! `2^BITS`; parsing never wraps and reports `Error::Overflow` instead.
//! Division is only available through [`Int16::try_div`]-style methods so a
//! zero divisor surfaces as `Error::DivideByZero` rather than a panic.
//!
//! Each type provides three strategies through [`Provider`]:
//!
//! | Capability | Strategy | Behavior |
//! |---|---|---|
//! | [`ByteConverter`] | [`LittleEndian`] | `BYTES` bytes, little-endian, two's complement |
//! | [`TextConverter`] | [`Decimal`] | optional sign, ASCII decimal digits |
//! | `RandomGenerator` | `Uniform` | uniform over the type or the given bounds |

use alloc::string::{String, ToString};
use core::fmt;
use core::num::{IntErrorKind, ParseIntError};
use core::ops::{
    Add, AddAssign, BitAnd, BitOr, BitXor, Mul, MulAssign, Neg, Not, Shl, Shr, Sub, SubAssign,
};
use core::str::FromStr;

use log::debug;

use crate::contracts::{ByteConverter, Provider, TextConverter};
use crate::error::{Error, Result};
use crate::window::ByteWindow;

#[cfg(feature = "random")]
use crate::contracts::RandomGenerator;
#[cfg(feature = "random")]
use core::ops::RangeInclusive;
#[cfg(feature = "random")]
use rand::{Rng, RngCore};

/// Little-endian, two's-complement byte layout
#[derive(Debug, Clone, Copy, Default)]
pub struct LittleEndian;

/// Locale-invariant decimal text
#[derive(Debug, Clone, Copy, Default)]
pub struct Decimal;

/// Uniform random generation
#[cfg(feature = "random")]
#[derive(Debug, Clone, Copy, Default)]
pub struct Uniform;

/// Shared byte strategy instance
pub static LITTLE_ENDIAN: LittleEndian = LittleEndian;

/// Shared text strategy instance
pub static DECIMAL: Decimal = Decimal;

/// Shared random strategy instance
#[cfg(feature = "random")]
pub static UNIFORM: Uniform = Uniform;

fn parse_decimal<P>(text: &str) -> Result<P>
where
    P: FromStr<Err = ParseIntError>,
{
    text.parse::<P>().map_err(|e| {
        let err = match e.kind() {
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => Error::Overflow,
            _ => Error::FormatInvalid,
        };
        debug!("rejected integer text {:?}: {}", text, err);
        err
    })
}

macro_rules! wrapped_int {
    ($(#[$meta:meta])* $name:ident, $prim:ty, $bytes:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
        #[repr(transparent)]
        pub struct $name($prim);

        impl $name {
            /// Smallest representable value
            pub const MIN: Self = Self(<$prim>::MIN);
            /// Largest representable value
            pub const MAX: Self = Self(<$prim>::MAX);
            /// Zero
            pub const ZERO: Self = Self(0);
            /// One
            pub const ONE: Self = Self(1);
            /// Width in bits
            pub const BITS: u32 = <$prim>::BITS;
            /// Serialized length in bytes
            pub const BYTES: usize = $bytes;

            /// Wrap a primitive value
            #[inline]
            pub const fn new(value: $prim) -> Self {
                Self(value)
            }

            /// The primitive value
            #[inline]
            pub const fn get(self) -> $prim {
                self.0
            }

            /// Divide, wrapping `MIN / -1` back to `MIN`
            ///
            /// Returns `Error::DivideByZero` if `rhs` is zero.
            #[inline]
            pub fn try_div(self, rhs: Self) -> Result<Self> {
                if rhs.0 == 0 {
                    return Err(Error::DivideByZero);
                }
                Ok(Self(self.0.wrapping_div(rhs.0)))
            }

            /// Remainder, wrapping `MIN % -1` to zero
            ///
            /// Returns `Error::DivideByZero` if `rhs` is zero.
            #[inline]
            pub fn try_rem(self, rhs: Self) -> Result<Self> {
                if rhs.0 == 0 {
                    return Err(Error::DivideByZero);
                }
                Ok(Self(self.0.wrapping_rem(rhs.0)))
            }

            /// Raise to a power, wrapping on overflow
            #[inline]
            pub const fn wrapping_pow(self, exp: u32) -> Self {
                Self(self.0.wrapping_pow(exp))
            }

            /// Widen to `f32` with standard integer-to-float rounding
            #[inline]
            pub fn to_f32(self) -> f32 {
                self.0 as f32
            }

            /// Widen to `f64` with standard integer-to-float rounding
            #[inline]
            pub fn to_f64(self) -> f64 {
                self.0 as f64
            }
        }

        impl From<$prim> for $name {
            #[inline]
            fn from(value: $prim) -> Self {
                Self(value)
            }
        }

        impl From<$name> for $prim {
            #[inline]
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl Add for $name {
            type Output = Self;

            #[inline]
            fn add(self, rhs: Self) -> Self {
                Self(self.0.wrapping_add(rhs.0))
            }
        }

        impl Sub for $name {
            type Output = Self;

            #[inline]
            fn sub(self, rhs: Self) -> Self {
                Self(self.0.wrapping_sub(rhs.0))
            }
        }

        impl Mul for $name {
            type Output = Self;

            #[inline]
            fn mul(self, rhs: Self) -> Self {
                Self(self.0.wrapping_mul(rhs.0))
            }
        }

        impl Neg for $name {
            type Output = Self;

            #[inline]
            fn neg(self) -> Self {
                Self(self.0.wrapping_neg())
            }
        }

        impl Not for $name {
            type Output = Self;

            #[inline]
            fn not(self) -> Self {
                Self(!self.0)
            }
        }

        impl BitAnd for $name {
            type Output = Self;

            #[inline]
            fn bitand(self, rhs: Self) -> Self {
                Self(self.0 & rhs.0)
            }
        }

        impl BitOr for $name {
            type Output = Self;

            #[inline]
            fn bitor(self, rhs: Self) -> Self {
                Self(self.0 | rhs.0)
            }
        }

        impl BitXor for $name {
            type Output = Self;

            #[inline]
            fn bitxor(self, rhs: Self) -> Self {
                Self(self.0 ^ rhs.0)
            }
        }

        // shift amounts are masked to the width
        impl Shl<u32> for $name {
            type Output = Self;

            #[inline]
            fn shl(self, rhs: u32) -> Self {
                Self(self.0.wrapping_shl(rhs))
            }
        }

        impl Shr<u32> for $name {
            type Output = Self;

            #[inline]
            fn shr(self, rhs: u32) -> Self {
                Self(self.0.wrapping_shr(rhs))
            }
        }

        impl AddAssign for $name {
            #[inline]
            fn add_assign(&mut self, rhs: Self) {
                *self = *self + rhs;
            }
        }

        impl SubAssign for $name {
            #[inline]
            fn sub_assign(&mut self, rhs: Self) {
                *self = *self - rhs;
            }
        }

        impl MulAssign for $name {
            #[inline]
            fn mul_assign(&mut self, rhs: Self) {
                *self = *self * rhs;
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(&self.0, f)
            }
        }

        impl FromStr for $name {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self> {
                TextConverter::<$name>::parse(&DECIMAL, s)
            }
        }

        impl ByteConverter<$name> for LittleEndian {
            #[inline]
            fn byte_len(&self) -> usize {
                $bytes
            }

            #[inline]
            fn get_bytes(&self, value: &$name) -> ByteWindow {
                ByteWindow::from_array(value.0.to_le_bytes())
            }

            #[inline]
            fn from_bytes(&self, bytes: &[u8]) -> Result<$name> {
                let raw: [u8; $bytes] = bytes.try_into().map_err(|_| {
                    debug!(
                        "{} expects {} bytes, got {}",
                        stringify!($name),
                        $bytes,
                        bytes.len()
                    );
                    Error::InvalidEncoding
                })?;
                Ok($name(<$prim>::from_le_bytes(raw)))
            }
        }

        impl TextConverter<$name> for Decimal {
            fn parse(&self, text: &str) -> Result<$name> {
                parse_decimal::<$prim>(text).map($name)
            }

            fn format(&self, value: &$name) -> String {
                value.0.to_string()
            }
        }

        #[cfg(feature = "random")]
        impl RandomGenerator<$name> for Uniform {
            fn next_random(
                &self,
                source: &mut dyn RngCore,
                bounds: Option<RangeInclusive<$name>>,
            ) -> Result<$name> {
                let Some(bounds) = bounds else {
                    return Ok($name(source.gen()));
                };
                let (min, max) = bounds.into_inner();
                if min > max {
                    debug!(
                        "inverted bounds {}..={} for {}",
                        min,
                        max,
                        stringify!($name)
                    );
                    return Err(Error::InvalidArgument);
                }
                Ok($name(source.gen_range(min.0..=max.0)))
            }
        }

        impl Provider<dyn ByteConverter<$name>> for $name {
            #[inline]
            fn provide() -> &'static dyn ByteConverter<$name> {
                &LITTLE_ENDIAN
            }
        }

        impl Provider<dyn TextConverter<$name>> for $name {
            #[inline]
            fn provide() -> &'static dyn TextConverter<$name> {
                &DECIMAL
            }
        }

        #[cfg(feature = "random")]
        impl Provider<dyn RandomGenerator<$name>> for $name {
            #[inline]
            fn provide() -> &'static dyn RandomGenerator<$name> {
                &UNIFORM
            }
        }

        impl num_traits::Bounded for $name {
            fn min_value() -> Self {
                Self::MIN
            }

            fn max_value() -> Self {
                Self::MAX
            }
        }

        impl num_traits::Zero for $name {
            fn zero() -> Self {
                Self::ZERO
            }

            fn is_zero(&self) -> bool {
                self.0 == 0
            }
        }

        impl num_traits::One for $name {
            fn one() -> Self {
                Self::ONE
            }
        }

        impl num_traits::WrappingAdd for $name {
            fn wrapping_add(&self, v: &Self) -> Self {
                *self + *v
            }
        }

        impl num_traits::WrappingSub for $name {
            fn wrapping_sub(&self, v: &Self) -> Self {
                *self - *v
            }
        }

        impl num_traits::WrappingMul for $name {
            fn wrapping_mul(&self, v: &Self) -> Self {
                *self * *v
            }
        }

        impl num_traits::WrappingNeg for $name {
            fn wrapping_neg(&self) -> Self {
                -*self
            }
        }

        impl num_traits::ToPrimitive for $name {
            fn to_i64(&self) -> Option<i64> {
                num_traits::ToPrimitive::to_i64(&self.0)
            }

            fn to_u64(&self) -> Option<u64> {
                num_traits::ToPrimitive::to_u64(&self.0)
            }

            fn to_i128(&self) -> Option<i128> {
                num_traits::ToPrimitive::to_i128(&self.0)
            }

            fn to_u128(&self) -> Option<u128> {
                num_traits::ToPrimitive::to_u128(&self.0)
            }

            fn to_f64(&self) -> Option<f64> {
                Some(self.0 as f64)
            }
        }
    };
}

macro_rules! signed_extras {
    ($($name:ident),*) => {
        $(
            impl $name {
                /// Absolute value, wrapping `MIN` to itself
                #[inline]
                pub const fn wrapping_abs(self) -> Self {
                    Self(self.0.wrapping_abs())
                }

                /// Check if the value is below zero
                #[inline]
                pub const fn is_negative(self) -> bool {
                    self.0 < 0
                }
            }
        )*
    };
}

wrapped_int!(
    /// 8-bit signed wrapping integer
    Int8, i8, 1
);
wrapped_int!(
    /// 16-bit signed wrapping integer
    Int16, i16, 2
);
wrapped_int!(
    /// 32-bit signed wrapping integer
    Int32, i32, 4
);
wrapped_int!(
    /// 64-bit signed wrapping integer
    Int64, i64, 8
);
wrapped_int!(
    /// 128-bit signed wrapping integer
    Int128, i128, 16
);
wrapped_int!(
    /// 8-bit unsigned wrapping integer
    UInt8, u8, 1
);
wrapped_int!(
    /// 16-bit unsigned wrapping integer
    UInt16, u16, 2
);
wrapped_int!(
    /// 32-bit unsigned wrapping integer
    UInt32, u32, 4
);
wrapped_int!(
    /// 64-bit unsigned wrapping integer
    UInt64, u64, 8
);
wrapped_int!(
    /// 128-bit unsigned wrapping integer
    UInt128, u128, 16
);

signed_extras!(Int8, Int16, Int32, Int64, Int128);
