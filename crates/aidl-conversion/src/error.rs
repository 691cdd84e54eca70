//! The single failure kind shared by every converter.

use std::num::TryFromIntError;

use thiserror::Error;

/// Reason a conversion was refused.
///
/// A value with no counterpart in the target schema and a value exceeding a
/// structural limit of the target are both reported as a bad value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ConversionError {
    #[error("bad value")]
    BadValue,
}

impl ConversionError {
    /// Native status code to report for this error.
    pub const fn status(self) -> i32 {
        match self {
            ConversionError::BadValue => audio_legacy::BAD_VALUE,
        }
    }
}

impl From<TryFromIntError> for ConversionError {
    fn from(_: TryFromIntError) -> Self {
        ConversionError::BadValue
    }
}

/// Outcome of a conversion: the converted value or the first failure.
pub type ConversionResult<T> = Result<T, ConversionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bad_value_maps_to_einval() {
        assert_eq!(ConversionError::BadValue.status(), -22);
        assert_eq!(ConversionError::BadValue.to_string(), "bad value");
    }

    #[test]
    fn integer_overflow_is_bad_value() {
        let err: ConversionError = u8::try_from(300i32).unwrap_err().into();
        assert_eq!(err, ConversionError::BadValue);
    }
}
