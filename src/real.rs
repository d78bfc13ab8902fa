//! Implementation of Real valued FFT
//!
//! A real signal of `length` points is packed into a complex signal of `length / 2`
//! points (even samples as real parts, odd samples as imaginary parts), transformed with
//! the complex engine, then split back apart with the super-twiddles
//! `W^k = e^{-2πi k / length}`. Only the non-redundant half of the spectrum is produced:
//! bins `0..=length / 2`, DC through Nyquist.
use std::sync::Arc;

use num_complex::Complex32;

use crate::algorithms::mixed_radix::fft_32_with_plan;
use crate::error::FftError;
use crate::kernels::common::rotate_neg_i;
use crate::planner::{self, Direction, TransformDescriptor};
use crate::twiddles::unit_root;

/// Tables for real-input transforms of one (even) length.
#[derive(Debug, Clone)]
pub struct RealDescriptor {
    length: usize,
    half: Arc<TransformDescriptor>,
    super_twiddles: Vec<Complex32>,
}

impl RealDescriptor {
    /// Build the tables for real transforms of `length` points.
    ///
    /// # Errors
    ///
    /// [`FftError::UnsupportedLength`] if `length` is odd, zero, or `length / 2` is not a
    /// supported complex length.
    pub fn new(length: usize) -> Result<Self, FftError> {
        if length == 0 || length % 2 != 0 {
            return Err(FftError::UnsupportedLength { length });
        }
        let half_len = length / 2;
        let half =
            planner::descriptor(half_len).map_err(|_| FftError::UnsupportedLength { length })?;

        // One extra entry so the Nyquist bin reads W^{length/2} = -1 like every other bin
        let super_twiddles = (0..=half_len).map(|k| unit_root(k, length)).collect();

        Ok(Self {
            length,
            half,
            super_twiddles,
        })
    }

    /// Number of real samples.
    pub fn len(&self) -> usize {
        self.length
    }

    /// Never true: zero-length descriptors cannot be built.
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Number of spectrum bins, `len() / 2 + 1`.
    pub fn spectrum_len(&self) -> usize {
        self.length / 2 + 1
    }

    /// The complex descriptor of the packed half-length transform.
    pub fn half(&self) -> &TransformDescriptor {
        &self.half
    }
}

/// Forward transform of a real signal, scaled by `1 / length`.
///
/// `output` receives bins `0..=length / 2`.
///
/// # Errors
///
/// [`FftError::DescriptorMismatch`] if `input.len() != plan.len()` or
/// `output.len() != plan.spectrum_len()`.
pub fn r2c_32_with_plan(
    input: &[f32],
    output: &mut [Complex32],
    plan: &RealDescriptor,
) -> Result<(), FftError> {
    check_len(plan.len(), input.len())?;
    check_len(plan.spectrum_len(), output.len())?;

    let half_len = plan.len() / 2;

    // z[n] = x[2n] + i x[2n+1]
    let mut z: Vec<Complex32> = input
        .chunks_exact(2)
        .map(|pair| Complex32::new(pair[0], pair[1]))
        .collect();

    // Scaled by 1 / half_len
    fft_32_with_plan(&mut z, Direction::Forward, &plan.half)?;

    // Zx = (Z[k] + conj(Z[H-k])) / 2 is the spectrum of the even samples,
    // Zy = -i (Z[k] - conj(Z[H-k])) / 2 that of the odd samples
    output
        .iter_mut()
        .zip(plan.super_twiddles.iter())
        .enumerate()
        .for_each(|(k, (out, w))| {
            let a = z[k % half_len];
            let b = z[(half_len - k % half_len) % half_len].conj();
            let zx = (a + b) * 0.5;
            let zy = rotate_neg_i(a - b) * 0.5;
            *out = (zx + w * zy) * 0.5;
        });

    Ok(())
}

/// Inverse transform of a half spectrum (`0..=length / 2`) back to a real signal.
///
/// Unscaled, so it undoes [`r2c_32_with_plan`]. The imaginary parts of the DC and Nyquist
/// bins are ignored.
///
/// # Errors
///
/// [`FftError::DescriptorMismatch`] if `input.len() != plan.spectrum_len()` or
/// `output.len() != plan.len()`.
pub fn c2r_32_with_plan(
    input: &[Complex32],
    output: &mut [f32],
    plan: &RealDescriptor,
) -> Result<(), FftError> {
    check_len(plan.spectrum_len(), input.len())?;
    check_len(plan.len(), output.len())?;

    let half_len = plan.len() / 2;
    let bin = |k: usize| {
        if k == 0 || k == half_len {
            Complex32::new(input[k].re, 0.0)
        } else {
            input[k]
        }
    };

    // Z[k] = (X[k] + conj(X[H-k])) + i (X[k] - conj(X[H-k])) conj(W^k)
    let mut z: Vec<Complex32> = (0..half_len)
        .map(|k| {
            let a = bin(k);
            let b = bin(half_len - k).conj();
            let odd = (a - b) * plan.super_twiddles[k].conj();
            (a + b) + Complex32::new(-odd.im, odd.re)
        })
        .collect();

    fft_32_with_plan(&mut z, Direction::Inverse, &plan.half)?;

    output
        .chunks_exact_mut(2)
        .zip(z.iter())
        .for_each(|(pair, value)| {
            pair[0] = value.re;
            pair[1] = value.im;
        });

    Ok(())
}

/// [`r2c_32_with_plan`] with the cached descriptor for `input.len()`.
pub fn r2c_32(input: &[f32], output: &mut [Complex32]) -> Result<(), FftError> {
    let plan = planner::real_descriptor(input.len())?;
    r2c_32_with_plan(input, output, &plan)
}

/// [`c2r_32_with_plan`] with the cached descriptor for `output.len()`.
pub fn c2r_32(input: &[Complex32], output: &mut [f32]) -> Result<(), FftError> {
    let plan = planner::real_descriptor(output.len())?;
    c2r_32_with_plan(input, output, &plan)
}

fn check_len(expected: usize, actual: usize) -> Result<(), FftError> {
    if expected == actual {
        Ok(())
    } else {
        Err(FftError::DescriptorMismatch { expected, actual })
    }
}
