//! The planner builds [`TransformDescriptor`]s: the factorization and twiddle tables for
//! one transform length, plus the scaling convention. Descriptors are immutable once
//! built, so a single descriptor can serve any number of concurrent transforms.
//!
//! [`descriptor`] keeps a process-wide cache so that each length is built at most once,
//! no matter how many threads ask for it at the same time.
use std::collections::HashMap;
use std::sync::{Arc, LazyLock, Mutex, OnceLock, PoisonError};

use num_complex::Complex32;

use crate::error::FftError;
use crate::factors::Factorization;
use crate::real::RealDescriptor;
use crate::twiddles::{generate, Pass, TwiddleView};

/// Forward is for running the regular FFT
/// Inverse is for running the Inverse Fast Fourier Transform (IFFT)
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Analysis, `e^{-2πi kn/N}` kernel
    Forward,
    /// Synthesis, `e^{+2πi kn/N}` kernel
    Inverse,
}

/// Everything the executor needs to run transforms of one length.
///
/// Lengths divisible by 4 are run "quartered": the mixed-radix passes cover
/// `length / 4` points per lane and a final radix-4 pass combines the four lanes. Its
/// twiddles live behind [`Self::last_twiddles`], in the same buffer as the stage twiddles.
///
/// The forward direction is scaled by `1 / length`, the inverse direction is not, so a
/// forward transform followed by an inverse one reproduces the input.
#[derive(Debug, Clone)]
pub struct TransformDescriptor {
    length: usize,
    factorization: Factorization,
    twiddles: Arc<[Complex32]>,
    stage: TwiddleView,
    last: TwiddleView,
    passes: Vec<Pass>,
    is_forward_scaled: bool,
    is_backward_scaled: bool,
}

impl TransformDescriptor {
    /// Build the descriptor of a transform of `length` points.
    ///
    /// This is a pure function of `length`: two calls produce bit-identical tables.
    ///
    /// # Errors
    ///
    /// [`FftError::UnsupportedLength`] if `length` is zero, larger than `i32::MAX`, has a
    /// prime factor other than 2, 3 or 5, or needs more than
    /// [`crate::factors::MAX_STAGES`] inner stages.
    pub fn build(length: usize) -> Result<Self, FftError> {
        if length == 0 || length > i32::MAX as usize {
            return Err(FftError::UnsupportedLength { length });
        }

        let working_len = if length % 4 == 0 { length / 4 } else { length };
        let factorization = Factorization::new(working_len)
            .map_err(|_| FftError::UnsupportedLength { length })?;
        let layout = generate(length, &factorization);

        Ok(Self {
            length,
            factorization,
            twiddles: layout.table,
            stage: layout.stage,
            last: layout.last,
            passes: layout.passes,
            is_forward_scaled: true,
            is_backward_scaled: false,
        })
    }

    /// Transform length `N`.
    pub fn len(&self) -> usize {
        self.length
    }

    /// Always `false`: descriptors of zero points cannot be built.
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Length covered by the mixed-radix passes: `N / 4` in quartered mode, `N` otherwise.
    pub fn working_len(&self) -> usize {
        self.factorization.working_len()
    }

    /// Whether a final radix-4 pass combines four quarter-length lanes.
    pub fn is_quartered(&self) -> bool {
        !self.last.is_empty()
    }

    pub fn factors(&self) -> &Factorization {
        &self.factorization
    }

    /// The flat factor table, see [`Factorization::table`].
    pub fn factor_table(&self) -> Vec<i32> {
        self.factorization.table()
    }

    /// The whole twiddle table, `N` entries.
    pub fn twiddles_forward(&self) -> &[Complex32] {
        &self.twiddles
    }

    /// Twiddles of the mixed-radix passes, the first `working_len` entries.
    pub fn stage_twiddles(&self) -> &[Complex32] {
        self.stage.slice(&self.twiddles)
    }

    /// Twiddles of the final radix-4 pass, an offset view into [`Self::twiddles_forward`].
    ///
    /// Empty unless the descriptor is quartered.
    #[doc(alias = "twiddles_backward")]
    pub fn last_twiddles(&self) -> &[Complex32] {
        self.last.slice(&self.twiddles)
    }

    /// Position of [`Self::last_twiddles`] inside the shared table.
    #[doc(alias = "twiddles_backward")]
    pub fn last_twiddles_view(&self) -> TwiddleView {
        self.last
    }

    pub fn is_forward_scaled(&self) -> bool {
        self.is_forward_scaled
    }

    pub fn is_backward_scaled(&self) -> bool {
        self.is_backward_scaled
    }

    /// The factor applied to the output of a transform in `direction`, if any.
    pub fn scale(&self, direction: Direction) -> Option<f32> {
        let scaled = match direction {
            Direction::Forward => self.is_forward_scaled,
            Direction::Inverse => self.is_backward_scaled,
        };
        scaled.then(|| (self.length as f32).recip())
    }

    pub(crate) fn passes(&self) -> &[Pass] {
        &self.passes
    }
}

/// Same as [`TransformDescriptor::build`].
pub fn build(length: usize) -> Result<TransformDescriptor, FftError> {
    TransformDescriptor::build(length)
}

type Slot<T> = Arc<OnceLock<Result<Arc<T>, FftError>>>;

/// Lazily built, never mutated values keyed by transform length.
///
/// The map lock is only held while looking up a slot. Building happens inside the slot's
/// [`OnceLock`], so callers asking for different lengths never wait on each other, and
/// callers asking for the same length wait for a single build.
pub(crate) struct Cache<T> {
    slots: LazyLock<Mutex<HashMap<usize, Slot<T>>>>,
}

fn empty_slots<T>() -> Mutex<HashMap<usize, Slot<T>>> {
    Mutex::new(HashMap::new())
}

impl<T> Cache<T> {
    pub(crate) const fn new() -> Self {
        Self {
            slots: LazyLock::new(empty_slots::<T>),
        }
    }

    pub(crate) fn get_or_build(
        &self,
        length: usize,
        build: impl FnOnce(usize) -> Result<T, FftError>,
    ) -> Result<Arc<T>, FftError> {
        let slot = {
            let mut slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
            Arc::clone(slots.entry(length).or_default())
        };
        slot.get_or_init(|| build(length).map(Arc::new)).clone()
    }

    /// Lengths whose descriptor was built successfully.
    pub(crate) fn lengths(&self) -> Vec<usize> {
        let slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
        let mut lengths: Vec<usize> = slots
            .iter()
            .filter(|(_, slot)| matches!(slot.get(), Some(Ok(_))))
            .map(|(length, _)| *length)
            .collect();
        lengths.sort_unstable();
        lengths
    }

    pub(crate) fn clear(&self) {
        self.slots
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

static DESCRIPTORS: Cache<TransformDescriptor> = Cache::new();
static REAL_DESCRIPTORS: Cache<RealDescriptor> = Cache::new();

/// The shared descriptor for `length`, built on first use.
///
/// # Errors
///
/// Same as [`TransformDescriptor::build`]. Failures are remembered as well.
pub fn descriptor(length: usize) -> Result<Arc<TransformDescriptor>, FftError> {
    DESCRIPTORS.get_or_build(length, TransformDescriptor::build)
}

/// The shared real-input descriptor for `length`, built on first use.
///
/// Its half-length complex descriptor comes from [`descriptor`], so the two caches share
/// tables.
///
/// # Errors
///
/// Same as [`RealDescriptor::new`].
pub fn real_descriptor(length: usize) -> Result<Arc<RealDescriptor>, FftError> {
    REAL_DESCRIPTORS.get_or_build(length, RealDescriptor::new)
}

/// Lengths currently held by the descriptor cache, in ascending order.
pub fn cached_lengths() -> Vec<usize> {
    DESCRIPTORS.lengths()
}

/// Drops every cached descriptor (complex and real).
///
/// Descriptors still held by callers stay valid; later lookups build new ones.
pub fn clear_cache() {
    DESCRIPTORS.clear();
    REAL_DESCRIPTORS.clear();
}
