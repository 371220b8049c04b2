//! IEEE-754 classification on raw bit patterns
//!
//! Values are moved into their same-width unsigned representation with
//! `to_bits` and classified with the documented sign, exponent and
//! mantissa masks. No pointer casts are involved.

/// Bit-level view of an IEEE-754 binary float
pub trait FloatBits: Copy {
    /// Same-width unsigned representation
    type Bits: Copy + Eq;

    /// Sign bit mask
    const SIGN_MASK: Self::Bits;
    /// Biased exponent mask
    const EXPONENT_MASK: Self::Bits;
    /// Mantissa (fraction) mask
    const MANTISSA_MASK: Self::Bits;

    /// Raw bits
    fn bits(self) -> Self::Bits;

    /// Sign bit set
    fn sign_bit(self) -> bool;

    /// Biased exponent field
    fn exponent_bits(self) -> Self::Bits;

    /// Mantissa field
    fn mantissa_bits(self) -> Self::Bits;

    /// Exponent all ones, mantissa non-zero
    fn is_nan_bits(self) -> bool;

    /// Exponent all ones, mantissa zero
    fn is_infinite_bits(self) -> bool;

    /// Exponent not all ones
    fn is_finite_bits(self) -> bool;

    /// Exponent zero, mantissa non-zero
    fn is_subnormal_bits(self) -> bool;

    /// `+inf`
    fn is_positive_infinity(self) -> bool {
        self.is_infinite_bits() && !self.sign_bit()
    }

    /// `-inf`
    fn is_negative_infinity(self) -> bool {
        self.is_infinite_bits() && self.sign_bit()
    }

    /// Sign bit set on anything except NaN
    fn is_negative_bits(self) -> bool {
        self.sign_bit() && !self.is_nan_bits()
    }

    /// `-0.0`
    fn is_negative_zero(self) -> bool;
}

macro_rules! float_bits {
    ($float:ty, $bits:ty, $sign:expr, $exponent:expr, $mantissa:expr) => {
        impl FloatBits for $float {
            type Bits = $bits;

            const SIGN_MASK: $bits = $sign;
            const EXPONENT_MASK: $bits = $exponent;
            const MANTISSA_MASK: $bits = $mantissa;

            #[inline]
            fn bits(self) -> $bits {
                self.to_bits()
            }

            #[inline]
            fn sign_bit(self) -> bool {
                self.to_bits() & Self::SIGN_MASK != 0
            }

            #[inline]
            fn exponent_bits(self) -> $bits {
                self.to_bits() & Self::EXPONENT_MASK
            }

            #[inline]
            fn mantissa_bits(self) -> $bits {
                self.to_bits() & Self::MANTISSA_MASK
            }

            #[inline]
            fn is_nan_bits(self) -> bool {
                self.exponent_bits() == Self::EXPONENT_MASK && self.mantissa_bits() != 0
            }

            #[inline]
            fn is_infinite_bits(self) -> bool {
                self.exponent_bits() == Self::EXPONENT_MASK && self.mantissa_bits() == 0
            }

            #[inline]
            fn is_finite_bits(self) -> bool {
                self.exponent_bits() != Self::EXPONENT_MASK
            }

            #[inline]
            fn is_subnormal_bits(self) -> bool {
                self.exponent_bits() == 0 && self.mantissa_bits() != 0
            }

            #[inline]
            fn is_negative_zero(self) -> bool {
                self.to_bits() == Self::SIGN_MASK
            }
        }
    };
}

float_bits!(f32, u32, 0x8000_0000, 0x7f80_0000, 0x007f_ffff);
float_bits!(
    f64,
    u64,
    0x8000_0000_0000_0000,
    0x7ff0_0000_0000_0000,
    0x000f_ffff_ffff_ffff
);
