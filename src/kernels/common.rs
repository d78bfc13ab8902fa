//! Butterfly Primitives
//!
//! Forward DFTs of sizes 2, 3, 4 and 5 on a handful of values. The pass loops in
//! [`crate::kernels::stockham`] feed them already twiddled inputs.
//!
use num_complex::Complex32;

// Rounded from double precision, like the twiddle table
const SIN_2PI_3: f32 = 0.866_025_403_784_438_6_f64 as f32;
const COS_2PI_5: f32 = 0.309_016_994_374_947_45_f64 as f32;
const SIN_2PI_5: f32 = 0.951_056_516_295_153_5_f64 as f32;
const COS_4PI_5: f32 = -0.809_016_994_374_947_5_f64 as f32;
const SIN_4PI_5: f32 = 0.587_785_252_292_473_1_f64 as f32;

/// Multiply by `-i`: (a + bi) * (-i) = b - ai
#[inline(always)]
pub(crate) fn rotate_neg_i(z: Complex32) -> Complex32 {
    Complex32::new(z.im, -z.re)
}

#[inline(always)]
pub(crate) fn butterfly_2([x0, x1]: [Complex32; 2]) -> [Complex32; 2] {
    [x0 + x1, x0 - x1]
}

#[inline(always)]
pub(crate) fn butterfly_3([x0, x1, x2]: [Complex32; 3]) -> [Complex32; 3] {
    let sum = x1 + x2;
    let diff = rotate_neg_i(x1 - x2) * SIN_2PI_3;
    let mid = x0 - sum * 0.5;
    [x0 + sum, mid + diff, mid - diff]
}

#[inline(always)]
pub(crate) fn butterfly_4([x0, x1, x2, x3]: [Complex32; 4]) -> [Complex32; 4] {
    let t0 = x0 + x2;
    let t1 = x0 - x2;
    let t2 = x1 + x3;
    // W_4^1 = -i
    let t3 = rotate_neg_i(x1 - x3);
    [t0 + t2, t1 + t3, t0 - t2, t1 - t3]
}

#[inline(always)]
pub(crate) fn butterfly_5([x0, x1, x2, x3, x4]: [Complex32; 5]) -> [Complex32; 5] {
    let s14 = x1 + x4;
    let d14 = x1 - x4;
    let s23 = x2 + x3;
    let d23 = x2 - x3;

    let a = x0 + s14 * COS_2PI_5 + s23 * COS_4PI_5;
    let b = x0 + s14 * COS_4PI_5 + s23 * COS_2PI_5;
    let ra = rotate_neg_i(d14 * SIN_2PI_5 + d23 * SIN_4PI_5);
    let rb = rotate_neg_i(d14 * SIN_4PI_5 - d23 * SIN_2PI_5);

    [x0 + s14 + s23, a + ra, b + rb, b - rb, a - ra]
}

#[cfg(test)]
mod tests {
    use utilities::{assert_complex_closeness, assert_float_closeness};

    use super::*;
    use crate::twiddles::unit_root;

    fn naive_dft<const R: usize>(x: [Complex32; R]) -> [Complex32; R] {
        std::array::from_fn(|k| {
            x.iter()
                .enumerate()
                .map(|(n, value)| value * unit_root(n * k, R))
                .sum()
        })
    }

    fn sample<const R: usize>() -> [Complex32; R] {
        std::array::from_fn(|n| Complex32::new(n as f32 + 1.0, 0.5 - n as f32 * 0.25))
    }

    #[test]
    fn butterflies_match_naive_dft() {
        assert_complex_closeness(&butterfly_2(sample()), &naive_dft::<2>(sample()), 1e-5);
        assert_complex_closeness(&butterfly_3(sample()), &naive_dft::<3>(sample()), 1e-5);
        assert_complex_closeness(&butterfly_4(sample()), &naive_dft::<4>(sample()), 1e-5);
        assert_complex_closeness(&butterfly_5(sample()), &naive_dft::<5>(sample()), 1e-5);
    }

    #[test]
    fn constants_match_unit_roots() {
        // unit_root gives e^{-iθ}, so the sines come out negated
        let w3 = unit_root(1, 3);
        let w5 = unit_root(1, 5);
        let w5_2 = unit_root(2, 5);
        assert_float_closeness(-w3.im, SIN_2PI_3, f32::EPSILON);
        assert_float_closeness(w5.re, COS_2PI_5, f32::EPSILON);
        assert_float_closeness(-w5.im, SIN_2PI_5, f32::EPSILON);
        assert_float_closeness(w5_2.re, COS_4PI_5, f32::EPSILON);
        assert_float_closeness(-w5_2.im, SIN_4PI_5, f32::EPSILON);
    }

    #[test]
    fn rotation() {
        let z = rotate_neg_i(Complex32::new(1.0, 2.0));
        assert_eq!(z, Complex32::new(2.0, -1.0));
    }
}
