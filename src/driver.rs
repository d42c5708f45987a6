//! The mutation driver: periodic snapshot replacement.

use crate::key::{Item, Snapshot};
use core::fmt::{self, Display, Formatter};
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};
use std::rc::Rc;
use tracing::debug;

/// Ticks between mutations, in time units.
pub const MUTATION_PERIOD: u64 = 3;

/// How the list mutates on each tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeStrategy {
	/// Replace every item with `{id: id+1, value: value+1}`, preserving order and length.
	/// Structurally all items are new; a fresh id appears at the logical tail.
	Increment,
	/// Reorder the existing item instances uniformly at random. Nothing is created or
	/// mutated in place.
	Shuffle,
}

impl ChangeStrategy {
	/// Permissive query-parameter parse; unknown values select no mutation branch.
	#[must_use]
	pub fn parse(raw: &str) -> Option<Self> {
		match raw {
			"increment" => Some(Self::Increment),
			"shuffle" => Some(Self::Shuffle),
			_ => None,
		}
	}

	#[must_use]
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Increment => "increment",
			Self::Shuffle => "shuffle",
		}
	}
}

impl Display for ChangeStrategy {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Produces the next snapshot on each tick. Owns the RNG used by the shuffle policy so
/// tests can seed it.
#[derive(Debug)]
pub struct MutationDriver {
	rng: StdRng,
}

impl MutationDriver {
	#[must_use]
	pub fn new() -> Self {
		Self { rng: StdRng::from_entropy() }
	}

	#[must_use]
	pub fn seeded(seed: u64) -> Self {
		Self { rng: StdRng::seed_from_u64(seed) }
	}

	/// Derives the next snapshot. Never changes the list length.
	pub fn tick(&mut self, snapshot: &Snapshot, strategy: ChangeStrategy) -> Snapshot {
		debug!(%strategy, len = snapshot.len(), "mutation tick");
		let next = match strategy {
			ChangeStrategy::Increment => snapshot
				.iter()
				.map(|item| Rc::new(Item { id: item.id + 1, value: item.value + 1 }))
				.collect(),
			ChangeStrategy::Shuffle => {
				let mut next: Snapshot = snapshot.iter().map(Rc::clone).collect();
				next.shuffle(&mut self.rng);
				next
			}
		};
		debug_assert_eq!(next.len(), snapshot.len());
		next
	}
}

impl Default for MutationDriver {
	fn default() -> Self {
		Self::new()
	}
}
