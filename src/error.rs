//! Error types for fixint

/// Errors that can occur during conversion, streaming, parsing or arithmetic
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A required backing collection was absent
    InvalidArgument,
    /// Byte window is empty or its length does not match the target type
    InvalidEncoding,
    /// Stream operation requested more elements than remain
    OutOfRange,
    /// Text is not a valid decimal integer
    FormatInvalid,
    /// Parsed magnitude exceeds the representable range
    Overflow,
    /// Division or remainder by zero
    DivideByZero,
}

impl Error {
    /// Returns a human-readable description of the error
    pub const fn description(&self) -> &'static str {
        match self {
            Error::InvalidArgument => "required argument was absent or invalid",
            Error::InvalidEncoding => "byte window length does not match the target type",
            Error::OutOfRange => "stream does not have enough elements",
            Error::FormatInvalid => "text is not a valid decimal integer",
            Error::Overflow => "value exceeds the representable range",
            Error::DivideByZero => "division by zero",
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.description())
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

/// Result type alias for fixint operations
pub type Result<T> = core::result::Result<T, Error>;
