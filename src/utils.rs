//! Utility functions such as interleave/deinterleave

use bytemuck::cast_slice;
use num_complex::Complex;
use num_traits::Float;

/// Views a complex slice as interleaved `[re, im, re, im, ...]` pairs, without copying.
pub fn as_interleaved<T: bytemuck::Pod>(signal: &[Complex<T>]) -> &[T] {
    cast_slice(signal)
}

/// Separates data like `[1, 2, 3, 4]` into `([1, 3], [2, 4])` for any length
///
/// A trailing unpaired element is dropped.
pub(crate) fn deinterleave<T: Copy>(input: &[T]) -> (Vec<T>, Vec<T>) {
    input.chunks_exact(2).map(|c| (c[0], c[1])).unzip()
}

/// Utility function to separate a slice of complex numbers
/// into one vector of real parts and one of imaginary parts.
pub(crate) fn separate_re_im<T: bytemuck::Pod>(signal: &[Complex<T>]) -> (Vec<T>, Vec<T>) {
    deinterleave(as_interleaved(signal))
}

/// Utility function to combine separate vectors of real and imaginary components
/// into a single vector of Complex Number Structs.
///
/// # Panics
///
/// Panics if `reals.len() != imags.len()`.
pub(crate) fn combine_re_im<T: Float>(reals: &[T], imags: &[T]) -> Vec<Complex<T>> {
    assert_eq!(reals.len(), imags.len());

    reals
        .iter()
        .zip(imags.iter())
        .map(|(z_re, z_im)| Complex::new(*z_re, *z_im))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gen_test_vec(len: usize) -> Vec<usize> {
        (0..len).collect()
    }

    #[test]
    fn deinterleaving_correctness() {
        for len in [0, 1, 2, 3, 15, 16, 17, 128, 129] {
            let input = gen_test_vec(len);
            let (evens, odds) = deinterleave(&input);
            assert_eq!(evens.len(), len / 2);
            assert!(evens.iter().all(|x| x % 2 == 0));
            assert!(odds.iter().zip(evens.iter()).all(|(o, e)| *o == e + 1));
        }
    }

    #[test]
    fn interleaved_view() {
        let signal = [Complex::new(1.0f32, 2.0), Complex::new(3.0, 4.0)];
        assert_eq!(as_interleaved(&signal), &[1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_separate_and_combine_re_im() {
        let complex_vec: Vec<_> = vec![
            Complex::new(1.0f32, 2.0),
            Complex::new(3.0, 4.0),
            Complex::new(5.0, 6.0),
            Complex::new(7.0, 8.0),
        ];

        let (reals, imags) = separate_re_im(&complex_vec);
        assert_eq!(reals, vec![1.0, 3.0, 5.0, 7.0]);

        let recombined_vec = combine_re_im(&reals, &imags);

        assert_eq!(complex_vec, recombined_vec);
    }
}
