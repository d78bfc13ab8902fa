//! Greedy radix factorization and the flat factor table format.
//!
//! A length is split into radix-4, radix-2, radix-5 and radix-3 stages, in that
//! priority. The extraction order matters: the executor runs the stages in the
//! reverse order, and the twiddle layout in [`crate::twiddles`] is derived from it.
//! Changing the priority here changes every generated table.
use crate::error::FftError;

/// Maximum number of stages a factor table can describe.
///
/// The flat table format reserves 64 `i32` slots, i.e. 32 `(radix, remaining)` pairs.
pub const MAX_STAGES: usize = 32;

/// The butterfly sizes the executor has kernels for.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Radix {
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
}

impl Radix {
    /// The fan-in of the butterfly.
    pub const fn get(self) -> usize {
        self as usize
    }

    /// Picks the next radix to extract from `n`, or `None` if `n` has no supported factor.
    fn extract_from(n: usize) -> Option<Radix> {
        if n % 4 == 0 {
            Some(Radix::Four)
        } else if n % 2 == 0 {
            Some(Radix::Two)
        } else if n % 5 == 0 {
            Some(Radix::Five)
        } else if n % 3 == 0 {
            Some(Radix::Three)
        } else {
            None
        }
    }
}

/// Which family of kernels a factorization needs.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Algorithm {
    /// Only radix-2 and radix-4 stages.
    Radix24 = 0,
    /// At least one radix-3 or radix-5 stage.
    Mixed = 1,
}

/// One extracted factor together with what was left of the length after extracting it.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Stage {
    pub radix: Radix,
    pub remaining: usize,
}

/// The ordered stages of a working length, in extraction order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Factorization {
    working_len: usize,
    stages: Vec<Stage>,
}

impl Factorization {
    /// Factors `working_len` greedily.
    ///
    /// Fails with [`FftError::UnsupportedLength`] (carrying `working_len`) when a prime
    /// factor other than 2, 3 or 5 remains, or when more than [`MAX_STAGES`] stages are
    /// needed. A working length of 1 has no stages.
    pub fn new(working_len: usize) -> Result<Self, FftError> {
        let unsupported = FftError::UnsupportedLength {
            length: working_len,
        };
        if working_len == 0 {
            return Err(unsupported);
        }

        let mut stages = Vec::new();
        let mut n = working_len;
        while n > 1 {
            let radix = Radix::extract_from(n).ok_or(unsupported)?;
            n /= radix.get();
            stages.push(Stage {
                radix,
                remaining: n,
            });
            if stages.len() > MAX_STAGES {
                return Err(unsupported);
            }
        }

        Ok(Self {
            working_len,
            stages,
        })
    }

    /// The length that was factored.
    pub fn working_len(&self) -> usize {
        self.working_len
    }

    /// Stages in extraction order. The executor runs them back to front.
    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    pub fn stage_count(&self) -> usize {
        self.stages.len()
    }

    /// Radices in extraction order.
    pub fn radices(&self) -> impl DoubleEndedIterator<Item = Radix> + '_ {
        self.stages.iter().map(|stage| stage.radix)
    }

    /// Product of all radices; always equal to [`Self::working_len`].
    pub fn product(&self) -> usize {
        self.radices().map(Radix::get).product()
    }

    /// Stride of the first pass the executor runs, i.e. `working_len` divided by the
    /// last extracted radix.
    pub fn first_stride(&self) -> usize {
        match self.stages.last() {
            Some(stage) => self.working_len / stage.radix.get(),
            None => self.working_len,
        }
    }

    pub fn algorithm(&self) -> Algorithm {
        if self
            .radices()
            .all(|radix| matches!(radix, Radix::Two | Radix::Four))
        {
            Algorithm::Radix24
        } else {
            Algorithm::Mixed
        }
    }

    /// The flat table:
    /// `[stage_count, first_stride, radix_1, remaining_1, .., radix_s, remaining_s, algorithm]`.
    ///
    /// The trailing `remaining_s` is always 1; together with the algorithm flag it ends
    /// the sequence where the fixed-size format would start zero padding.
    ///
    /// Lengths are limited to `i32::MAX` by [`crate::planner::TransformDescriptor::build`].
    pub fn table(&self) -> Vec<i32> {
        let mut table = Vec::with_capacity(2 * self.stages.len() + 3);
        table.push(self.stages.len() as i32);
        table.push(self.first_stride() as i32);
        for stage in &self.stages {
            table.push(stage.radix.get() as i32);
            table.push(stage.remaining as i32);
        }
        table.push(self.algorithm() as i32);
        table
    }
}
