pub extern crate rustfft;

// export rustfft to mixfft
use rand::{distributions::Uniform, prelude::*};
use rustfft::num_complex::Complex32;
use rustfft::num_traits::Float;
use rustfft::FftPlanner;

/// Asserts that two fp numbers are approximately equal.
///
/// # Panics
///
/// Panics if `actual` and `expected` are too far from each other
#[allow(dead_code)]
#[track_caller]
pub fn assert_float_closeness<T: Float + std::fmt::Display>(actual: T, expected: T, epsilon: T) {
    if (actual - expected).abs() >= epsilon {
        panic!(
            "Assertion failed: {actual} too far from expected value {expected} (with epsilon {epsilon})",
        );
    }
}

/// Asserts that two complex slices are approximately equal, component by component.
///
/// # Panics
///
/// Panics if the lengths differ or any component is `epsilon` or more away from its
/// expected value
#[track_caller]
pub fn assert_complex_closeness(actual: &[Complex32], expected: &[Complex32], epsilon: f32) {
    assert_eq!(
        actual.len(),
        expected.len(),
        "Slices must be of equal length"
    );

    for (i, (a, e)) in actual.iter().zip(expected.iter()).enumerate() {
        if (a.re - e.re).abs() >= epsilon || (a.im - e.im).abs() >= epsilon {
            panic!(
                "Assertion failed at index {i}: {a} too far from expected value {e} (with epsilon {epsilon})",
            );
        }
    }
}

/// Fill `signal` with random complex values, both parts uniform in `[-1, 1)`
pub fn gen_random_signal(signal: &mut [Complex32]) {
    let mut rng = thread_rng();

    let uniform_dist = Uniform::new(-1.0f32, 1.0);
    for z in signal.iter_mut() {
        *z = Complex32::new(uniform_dist.sample(&mut rng), uniform_dist.sample(&mut rng));
    }
}

/// A random real signal of `len` samples, uniform in `[-1, 1)`
pub fn gen_random_reals(len: usize) -> Vec<f32> {
    let uniform_dist = Uniform::new(-1.0f32, 1.0);
    thread_rng().sample_iter(uniform_dist).take(len).collect()
}

/// Unscaled forward DFT of `signal`, computed by rustfft
pub fn reference_fft(signal: &[Complex32]) -> Vec<Complex32> {
    let mut buffer = signal.to_vec();
    if buffer.is_empty() {
        return buffer;
    }
    let fft = FftPlanner::<f32>::new().plan_fft_forward(buffer.len());
    fft.process(&mut buffer);
    buffer
}
