//! Mixed-Radix Stockham FFT
//!
//! Runs the passes recorded in a [`TransformDescriptor`] back and forth between the
//! caller's buffer and one scratch buffer. Stockham autosort needs no digit-reversal
//! permutation: every pass writes its output already in natural order.
//!
//! ## Algorithm Overview
//!
//! 1. For the inverse direction, conjugate the input
//! 2. Run each pass (radix 2, 3, 4 or 5) in execution order, ping-ponging buffers
//! 3. Copy the result back if it ended up in the scratch buffer
//! 4. Conjugate again for the inverse direction and apply the descriptor's scale
//!
use num_complex::Complex32;
use num_traits::Zero;

use crate::error::FftError;
use crate::kernels::stockham::{pass_scalar, pass_vectorized};
use crate::options::{KernelStrategy, Options};
use crate::planner::{Direction, TransformDescriptor};

/// FFT of `buffer`, in place, with options and a pre-computed descriptor
///
/// The inverse transform is computed as `conj(F(conj(x)))` against the forward table.
/// The output is scaled by [`TransformDescriptor::scale`].
///
/// # Errors
///
/// [`FftError::DescriptorMismatch`] if `buffer.len() != descriptor.len()`. The buffer is
/// left untouched in that case.
pub fn fft_32_with_opts_and_plan(
    buffer: &mut [Complex32],
    direction: Direction,
    opts: &Options,
    descriptor: &TransformDescriptor,
) -> Result<(), FftError> {
    if buffer.len() != descriptor.len() {
        return Err(FftError::DescriptorMismatch {
            expected: descriptor.len(),
            actual: buffer.len(),
        });
    }

    // Handle inverse transform
    if direction == Direction::Inverse {
        buffer.iter_mut().for_each(|z| z.im = -z.im);
    }

    let passes = descriptor.passes();
    if !passes.is_empty() {
        let strategy = opts.kernel.resolve(buffer.len());
        let table = descriptor.twiddles_forward();
        let mut scratch = vec![Complex32::zero(); buffer.len()];

        let mut input: &mut [Complex32] = &mut *buffer;
        let mut output: &mut [Complex32] = &mut scratch;
        for pass in passes {
            match strategy {
                KernelStrategy::Vectorized => pass_vectorized(pass, table, input, output),
                _ => pass_scalar(pass, table, input, output),
            }
            std::mem::swap(&mut input, &mut output);
        }

        // After an odd number of passes the result sits in the scratch buffer
        if passes.len() % 2 == 1 {
            output.copy_from_slice(input);
        }
    }

    let conjugate = direction == Direction::Inverse;
    match descriptor.scale(direction) {
        Some(scaling_factor) => {
            let im_factor = if conjugate {
                -scaling_factor
            } else {
                scaling_factor
            };
            buffer.iter_mut().for_each(|z| {
                z.re *= scaling_factor;
                z.im *= im_factor;
            });
        }
        None if conjugate => buffer.iter_mut().for_each(|z| z.im = -z.im),
        None => {}
    }

    Ok(())
}

/// Same as [`fft_32_with_opts_and_plan`], with options guessed from the transform size.
pub fn fft_32_with_plan(
    buffer: &mut [Complex32],
    direction: Direction,
    descriptor: &TransformDescriptor,
) -> Result<(), FftError> {
    let opts = Options::guess_options(descriptor.len());
    fft_32_with_opts_and_plan(buffer, direction, &opts, descriptor)
}

/// Out-of-place transform: returns the transform of `input` and leaves `input` untouched.
pub fn transform(
    descriptor: &TransformDescriptor,
    input: &[Complex32],
    direction: Direction,
) -> Result<Vec<Complex32>, FftError> {
    if input.len() != descriptor.len() {
        return Err(FftError::DescriptorMismatch {
            expected: descriptor.len(),
            actual: input.len(),
        });
    }
    let mut output = input.to_vec();
    fft_32_with_plan(&mut output, direction, descriptor)?;
    Ok(output)
}
