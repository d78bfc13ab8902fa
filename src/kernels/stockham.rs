//! Stockham Pass Kernels
//!
//! One pass reads `src` and writes `dst`. For a pass of radix `R` with `mstride`
//! (product of the radices already applied) and `fstride` butterfly groups:
//!
//! `dst[f*R*m + s*m + q] = Σ_k W_{R*m}^{k*q} * W_R^{k*s} * src[f*m + q + k*fstride*m]`
//!
//! The `W_{R*m}^{k*q}` factors come from the pass' twiddle line, laid out as
//! `line[(k - 1) * m + q]` by [`crate::twiddles::generate`]. The first pass (`m == 1`)
//! has no twiddles.
//!
use num_complex::Complex32;

use crate::factors::Radix;
use crate::kernels::common::{butterfly_2, butterfly_3, butterfly_4, butterfly_5};
use crate::twiddles::Pass;

#[inline(always)]
fn first_pass<const R: usize>(
    src: &[Complex32],
    dst: &mut [Complex32],
    fstride: usize,
    butterfly: impl Fn([Complex32; R]) -> [Complex32; R],
) {
    dst.chunks_exact_mut(R)
        .enumerate()
        .for_each(|(f, out)| {
            let x = std::array::from_fn(|k| src[f + k * fstride]);
            out.copy_from_slice(&butterfly(x));
        });
}

#[inline(always)]
fn twiddled_pass<const R: usize>(
    src: &[Complex32],
    dst: &mut [Complex32],
    line: &[Complex32],
    mstride: usize,
    fstride: usize,
    butterfly: impl Fn([Complex32; R]) -> [Complex32; R],
) {
    debug_assert_eq!(line.len(), (R - 1) * mstride);
    let span = fstride * mstride;

    dst.chunks_exact_mut(R * mstride)
        .enumerate()
        .for_each(|(f, out)| {
            let column = &src[f * mstride..];
            for q in 0..mstride {
                let x = std::array::from_fn(|k| {
                    let value = column[q + k * span];
                    if k == 0 {
                        value
                    } else {
                        value * line[(k - 1) * mstride + q]
                    }
                });
                for (s, value) in butterfly(x).into_iter().enumerate() {
                    out[s * mstride + q] = value;
                }
            }
        });
}

/// Runs one pass, picking the butterfly from the pass' radix.
#[inline(always)]
fn run_pass(pass: &Pass, table: &[Complex32], src: &[Complex32], dst: &mut [Complex32]) {
    debug_assert_eq!(src.len(), dst.len());
    debug_assert_eq!(pass.radix.get() * pass.mstride * pass.fstride, src.len());

    let Pass {
        radix,
        mstride,
        fstride,
        twiddles,
    } = *pass;

    if mstride == 1 {
        match radix {
            Radix::Two => first_pass::<2>(src, dst, fstride, butterfly_2),
            Radix::Three => first_pass::<3>(src, dst, fstride, butterfly_3),
            Radix::Four => first_pass::<4>(src, dst, fstride, butterfly_4),
            Radix::Five => first_pass::<5>(src, dst, fstride, butterfly_5),
        }
        return;
    }

    let line = twiddles.slice(table);
    match radix {
        Radix::Two => twiddled_pass::<2>(src, dst, line, mstride, fstride, butterfly_2),
        Radix::Three => twiddled_pass::<3>(src, dst, line, mstride, fstride, butterfly_3),
        Radix::Four => twiddled_pass::<4>(src, dst, line, mstride, fstride, butterfly_4),
        Radix::Five => twiddled_pass::<5>(src, dst, line, mstride, fstride, butterfly_5),
    }
}

/// Portable pass, compiled for the baseline target only.
pub(crate) fn pass_scalar(
    pass: &Pass,
    table: &[Complex32],
    src: &[Complex32],
    dst: &mut [Complex32],
) {
    run_pass(pass, table, src, dst);
}

/// The same pass, compiled once per listed feature set and dispatched at runtime.
#[multiversion::multiversion(targets(
    "x86_64+avx2+fma",
    "x86_64+sse4.2",
    "x86+avx2+fma",
    "x86+sse4.2",
    "x86+sse2",
    "aarch64+neon",
))]
pub(crate) fn pass_vectorized(
    pass: &Pass,
    table: &[Complex32],
    src: &[Complex32],
    dst: &mut [Complex32],
) {
    run_pass(pass, table, src, dst);
}
