use log::debug;
use rand::rngs::StdRng;
use rand::seq::index;
use rand::{Rng, SeedableRng};

/// Largest distance between two inserted sentence spaces.
pub(crate) const MAX_WORD_GAP: usize = 12;

/// Pseudo-random sampler scoped to a single generation call.
///
/// The seed is logged at debug level on creation so a failing test can be
/// replayed by passing it back explicitly.
///
/// ## Invariants
/// - Two samplers built from the same seed produce the same draws
/// - A sampler is never shared between calls
#[derive(Debug)]
pub(crate) struct RandomSampler {
	rng: StdRng,
}

impl RandomSampler {
	/// Creates a sampler from `seed`, or from a fresh random seed when `None`.
	pub fn new(seed: Option<u64>) -> Self {
		let seed = seed.unwrap_or_else(|| rand::rng().random());
		debug!("random seed used: {seed}");
		Self {
			rng: StdRng::seed_from_u64(seed),
		}
	}

	/// Draws `length` characters without replacement from `pool` repeated `length` times.
	///
	/// The inflated pool allows more draws than the base pool holds while
	/// still using each slot at most once. It is addressed by index modulo
	/// the base pool, so it is never built in memory.
	///
	/// Returns an empty vector if `pool` is empty or `length` is zero.
	pub fn sample(&mut self, pool: &[char], length: usize) -> Vec<char> {
		if pool.is_empty() || length == 0 {
			return Vec::new();
		}

		self.slots(pool.len(), length)
			.into_iter()
			.map(|slot| pool[slot % pool.len()])
			.collect()
	}

	/// Draws `length` distinct slots out of `pool_len * length`.
	fn slots(&mut self, pool_len: usize, length: usize) -> Vec<usize> {
		let pool_size = pool_len.saturating_mul(length);
		index::sample(&mut self.rng, pool_size, length).into_vec()
	}

	/// Draws the distance to the next sentence space, in `1..=MAX_WORD_GAP`.
	pub fn gap(&mut self) -> usize {
		self.rng.random_range(1..=MAX_WORD_GAP)
	}
}
