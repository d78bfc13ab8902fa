/// Options to tune to improve performance depending on the hardware and input size.
///
/// Calling FFT routines without specifying options will automatically select reasonable defaults
/// depending on the input size and the detected CPU features.
///
/// You only need to tune these options if you are trying to squeeze maximum performance
/// out of a known hardware platform, or if you want to pin the portable kernels for
/// reproducibility across machines.
#[non_exhaustive]
#[derive(Debug, Clone, Default)]
pub struct Options {
    pub kernel: KernelStrategy,
}

impl Options {
    /// Picks the kernel tier for transforms of `input_size` points on this machine.
    pub fn guess_options(input_size: usize) -> Options {
        let mut options = Options::default();
        options.kernel = KernelStrategy::Auto.resolve(input_size);
        options
    }

    /// Options that force the given kernel tier.
    pub fn with_kernel(kernel: KernelStrategy) -> Options {
        Options { kernel }
    }
}

/// Below this size the vectorized tier has too little work per pass to pay off.
const VECTORIZE_THRESHOLD: usize = 16;

/// Which butterfly kernels run the passes.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum KernelStrategy {
    #[default]
    /// Decide per call from [`Capability::detect`] and the transform size
    Auto,
    /// Portable kernels, compiled for the baseline target
    Scalar,
    /// The same kernels compiled for the best instruction set the CPU offers
    /// (AVX2+FMA or SSE4.2 on x86, NEON on aarch64), picked at runtime
    Vectorized,
}

impl KernelStrategy {
    /// Replaces `Auto` with a concrete tier.
    pub fn resolve(self, input_size: usize) -> KernelStrategy {
        match self {
            KernelStrategy::Auto => {
                if Capability::detect() == Capability::Simd && input_size >= VECTORIZE_THRESHOLD
                {
                    KernelStrategy::Vectorized
                } else {
                    KernelStrategy::Scalar
                }
            }
            concrete => concrete,
        }
    }
}

/// What the CPU running this process can do.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Capability {
    Scalar,
    Simd,
}

impl Capability {
    /// Runtime feature detection. The standard library caches the CPUID/auxv lookups.
    pub fn detect() -> Capability {
        #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
        {
            let avx2_fma = std::arch::is_x86_feature_detected!("avx2")
                && std::arch::is_x86_feature_detected!("fma");
            if avx2_fma || std::arch::is_x86_feature_detected!("sse4.2") {
                return Capability::Simd;
            }
        }
        #[cfg(target_arch = "aarch64")]
        {
            if std::arch::is_aarch64_feature_detected!("neon") {
                return Capability::Simd;
            }
        }
        Capability::Scalar
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn concrete_strategies_are_kept() {
        assert_eq!(
            KernelStrategy::Scalar.resolve(4096),
            KernelStrategy::Scalar
        );
        assert_eq!(
            KernelStrategy::Vectorized.resolve(2),
            KernelStrategy::Vectorized
        );
    }

    #[test]
    fn guessed_options_are_concrete() {
        for size in [1, 15, 16, 480] {
            assert_ne!(Options::guess_options(size).kernel, KernelStrategy::Auto);
        }
        assert_eq!(
            Options::guess_options(4).kernel,
            KernelStrategy::Scalar
        );
    }

    #[test]
    fn auto_follows_capability() {
        let expected = match Capability::detect() {
            Capability::Simd => KernelStrategy::Vectorized,
            Capability::Scalar => KernelStrategy::Scalar,
        };
        assert_eq!(KernelStrategy::Auto.resolve(480), expected);
    }
}
