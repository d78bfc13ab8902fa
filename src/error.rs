//! Errors reported by the generator and the executor.
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Everything that can go wrong when building a descriptor or running a transform.
///
/// Both variants are deterministic: the same inputs always produce the same error,
/// so there is nothing to retry.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum FftError {
    /// The length is zero, has a prime factor outside `{2, 3, 5}`, does not fit the
    /// `i32` table format, or needs more stages than the factor table can hold.
    UnsupportedLength { length: usize },
    /// A buffer handed to the executor does not have the length of its descriptor.
    DescriptorMismatch { expected: usize, actual: usize },
}

impl Error for FftError {}

impl Display for FftError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            FftError::UnsupportedLength { length } => f.write_fmt(format_args!(
                "Length {length} cannot be factored into radix 2, 3, 4 and 5 stages"
            )),
            FftError::DescriptorMismatch { expected, actual } => f.write_fmt(format_args!(
                "Buffer length expected to be {expected}, but it was {actual}"
            )),
        }
    }
}
