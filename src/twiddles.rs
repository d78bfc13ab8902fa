//! Twiddle-factor generation.
//!
//! One table of `length` entries is generated per descriptor. Its first `working_len`
//! entries hold the per-stage "lines" consumed by the mixed-radix passes; in quartered
//! mode the remaining `3 * working_len` entries hold the twiddles of the final radix-4
//! pass. The layout is walked once, and the same walk records where each pass finds
//! its twiddles, so the executor never recomputes offsets on its own.
use std::f64::consts::PI;
use std::sync::Arc;

use num_complex::Complex32;
use num_traits::One;

use crate::factors::{Factorization, Radix};

/// A read-only window into a shared twiddle table.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct TwiddleView {
    offset: usize,
    len: usize,
}

impl TwiddleView {
    pub(crate) const fn new(offset: usize, len: usize) -> Self {
        Self { offset, len }
    }

    /// Index of the first entry of this view in the shared table.
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Resolves the view against the table it was generated for.
    ///
    /// # Panics
    ///
    /// Panics if `table` is shorter than `offset + len`, i.e. if the view is used with a
    /// table it was not generated for.
    pub fn slice<'a>(&self, table: &'a [Complex32]) -> &'a [Complex32] {
        &table[self.offset..self.offset + self.len]
    }
}

/// One butterfly pass as the executor runs it.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) struct Pass {
    pub(crate) radix: Radix,
    /// Product of the radices of all earlier passes.
    pub(crate) mstride: usize,
    /// Number of independent butterfly groups, `length / (mstride * radix)`.
    pub(crate) fstride: usize,
    pub(crate) twiddles: TwiddleView,
}

/// Output of [`generate`].
pub(crate) struct TwiddleLayout {
    pub(crate) table: Arc<[Complex32]>,
    pub(crate) stage: TwiddleView,
    pub(crate) last: TwiddleView,
    pub(crate) passes: Vec<Pass>,
}

/// `e^{-2πi * numerator / denominator}`, evaluated in double precision.
///
/// The numerator is reduced modulo the denominator first so that large indices do not
/// lose accuracy to argument reduction.
pub(crate) fn unit_root(numerator: usize, denominator: usize) -> Complex32 {
    let reduced = (numerator % denominator) as f64;
    let angle = -2.0 * PI * reduced / denominator as f64;
    let (sin, cos) = angle.sin_cos();
    Complex32::new(cos as f32, sin as f32)
}

/// Appends the twiddles of one pass: `mstride * (radix - 1)` entries, grouped by `k`.
fn push_line(
    table: &mut Vec<Complex32>,
    mstride: usize,
    fstride: usize,
    radix: usize,
    working_len: usize,
) {
    for k in 1..radix {
        for j in 0..mstride {
            table.push(unit_root(fstride * k * j, working_len));
        }
    }
}

/// Generates the twiddle table of a transform of `length` points whose inner passes
/// follow `factorization`.
///
/// `length` is either `factorization.working_len()` or four times it (quartered mode,
/// which appends a final radix-4 pass).
pub(crate) fn generate(length: usize, factorization: &Factorization) -> TwiddleLayout {
    let working_len = factorization.working_len();
    let quartered = length != working_len;
    debug_assert!(!quartered || length == 4 * working_len);

    let mut table: Vec<Complex32> = Vec::with_capacity(length);
    let mut passes = Vec::with_capacity(factorization.stage_count() + 1);
    let mut mstride = 1;

    for (index, radix) in factorization.radices().rev().enumerate() {
        let r = radix.get();
        let offset = table.len();
        if index == 0 {
            // The first pass needs no twiddles. Odd radices still reserve a unit block
            // so the table keeps the layout of the generated codec modes.
            if r % 2 == 1 {
                table.resize(r, Complex32::one());
            }
        } else {
            let fstride = working_len / (mstride * r);
            push_line(&mut table, mstride, fstride, r, working_len);
        }
        passes.push(Pass {
            radix,
            mstride,
            fstride: length / (mstride * r),
            twiddles: TwiddleView::new(offset, table.len() - offset),
        });
        mstride *= r;
    }

    debug_assert!(table.len() <= working_len);
    table.resize(working_len, Complex32::one());
    let stage = TwiddleView::new(0, working_len);

    let last = if quartered {
        let offset = table.len();
        for k in 1..4 {
            for j in 0..working_len {
                table.push(unit_root(k * j, length));
            }
        }
        let last = TwiddleView::new(offset, 3 * working_len);
        passes.push(Pass {
            radix: Radix::Four,
            mstride: working_len,
            fstride: 1,
            twiddles: last,
        });
        last
    } else {
        TwiddleView::new(working_len, 0)
    };

    // DC entry, pinned to exactly 1 + 0i.
    if let Some(first) = table.first_mut() {
        *first = Complex32::one();
    }

    TwiddleLayout {
        table: table.into(),
        stage,
        last,
        passes,
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::FRAC_1_SQRT_2;

    use utilities::assert_float_closeness;

    use super::*;

    fn layout(length: usize, working_len: usize) -> TwiddleLayout {
        generate(length, &Factorization::new(working_len).unwrap())
    }

    #[test]
    fn unit_roots() {
        let w = unit_root(1, 8);
        assert_float_closeness(w.re, FRAC_1_SQRT_2, 1e-7);
        assert_float_closeness(w.im, -FRAC_1_SQRT_2, 1e-7);

        let w = unit_root(2, 8);
        assert_float_closeness(w.re, 0.0, 1e-7);
        assert_float_closeness(w.im, -1.0, 1e-7);

        // Reduced modulo the denominator.
        assert_eq!(unit_root(9, 8), unit_root(1, 8));
    }

    #[test]
    fn table_covers_whole_length() {
        for (length, working_len) in [(480, 120), (240, 60), (120, 30), (60, 15), (64, 16), (45, 45)]
        {
            let layout = layout(length, working_len);
            assert_eq!(layout.table.len(), length);
            assert_eq!(layout.stage, TwiddleView::new(0, working_len));
            assert_eq!(layout.last.offset(), working_len);
            assert_eq!(layout.last.len(), length - working_len);
        }
    }

    #[test]
    fn pass_views_follow_the_lines() {
        // 120 = 4 * 2 * 5 * 3, executed as 3, 5, 2, 4 and then the quartered radix-4.
        let layout = layout(480, 120);
        let summary: Vec<_> = layout
            .passes
            .iter()
            .map(|pass| {
                (
                    pass.radix.get(),
                    pass.mstride,
                    pass.fstride,
                    pass.twiddles.offset(),
                    pass.twiddles.len(),
                )
            })
            .collect();
        assert_eq!(
            summary,
            vec![
                (3, 1, 160, 0, 3),
                (5, 3, 32, 3, 12),
                (2, 15, 16, 15, 15),
                (4, 30, 4, 30, 90),
                (4, 120, 1, 120, 360),
            ]
        );
    }

    #[test]
    fn even_first_radix_pads_with_unity() {
        // 16 = 4 * 4: first pass needs nothing, second needs 12 entries.
        let layout = layout(64, 16);
        assert!(layout.table[12..16]
            .iter()
            .all(|w| *w == Complex32::one()));
        assert_eq!(layout.passes[0].twiddles.len(), 0);
        assert_eq!(layout.passes[1].twiddles, TwiddleView::new(0, 12));
    }

    #[test]
    fn view_resolves_against_table() {
        let layout = layout(60, 15);
        let last = layout.last.slice(&layout.table);
        assert_eq!(last.len(), 45);
        assert_eq!(last[0], Complex32::one());
        assert_eq!(last[1], unit_root(1, 60));
        assert_eq!(last[15 + 1], unit_root(2, 60));
        assert_eq!(last[30 + 1], unit_root(3, 60));
    }
}
