//! Fixed-size mixed-radix FFT and IFFT for lengths whose prime factors are 2, 3 and 5.
//!
//! A [`TransformDescriptor`] holds everything one length needs: the radix-4/2/5/3 stage
//! plan and a single twiddle table. Build one with [`TransformDescriptor::build`] or fetch
//! the shared one from the process-wide cache with [`planner::descriptor`], then run
//! transforms with [`fft_32_with_plan`] or [`fft_32_with_opts_and_plan`].
//!
//! The forward transform is scaled by `1 / N` and the inverse is not, so a forward
//! transform followed by an inverse one returns the original signal.
//!
//! ```
//! use mixfft::{fft_32, Complex32, Direction};
//!
//! let mut signal = vec![Complex32::new(1.0, 0.0); 480];
//! fft_32(&mut signal, Direction::Forward).unwrap();
//! assert!((signal[0].re - 1.0).abs() < 1e-6);
//!
//! fft_32(&mut signal, Direction::Inverse).unwrap();
//! assert!((signal[7].re - 1.0).abs() < 1e-5);
//! ```
//!
//! Real-valued signals of even length go through [`r2c_32`] and [`c2r_32`].

pub use num_complex::Complex32;

pub use crate::algorithms::mixed_radix::{
    fft_32_with_opts_and_plan, fft_32_with_plan, transform,
};
pub use crate::error::FftError;
pub use crate::planner::{Direction, TransformDescriptor};
pub use crate::real::{c2r_32, c2r_32_with_plan, r2c_32, r2c_32_with_plan, RealDescriptor};

use crate::utils::{combine_re_im, separate_re_im};

pub mod algorithms;
pub mod error;
pub mod factors;
mod kernels;
pub mod options;
pub mod planner;
pub mod real;
pub mod twiddles;
pub mod utils;

/// FFT of `buffer`, in place, using the cached descriptor for `buffer.len()`.
///
/// # Errors
///
/// [`FftError::UnsupportedLength`] if no descriptor can be built for `buffer.len()`.
pub fn fft_32(buffer: &mut [Complex32], direction: Direction) -> Result<(), FftError> {
    let descriptor = planner::descriptor(buffer.len())?;
    fft_32_with_plan(buffer, direction, &descriptor)
}

/// FFT of a signal held as separate real and imaginary parts, in place.
///
/// # Errors
///
/// [`FftError::DescriptorMismatch`] if `reals.len() != imags.len()`, and
/// [`FftError::UnsupportedLength`] if no descriptor can be built for their length.
pub fn fft_32_split(
    reals: &mut [f32],
    imags: &mut [f32],
    direction: Direction,
) -> Result<(), FftError> {
    if reals.len() != imags.len() {
        return Err(FftError::DescriptorMismatch {
            expected: reals.len(),
            actual: imags.len(),
        });
    }

    let mut buffer = combine_re_im(reals, imags);
    fft_32(&mut buffer, direction)?;

    let (out_re, out_im) = separate_re_im(&buffer);
    reals.copy_from_slice(&out_re);
    imags.copy_from_slice(&out_im);
    Ok(())
}
