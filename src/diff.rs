//! The keyed reconciler.
//!
//! Given the keyed row sequences of the previous and current render pass, [`KeyedDiffer`]
//! partitions the result into reused, created and destroyed nodes and applies it to an
//! [`Arena`]:
//!
//! 1. a key present in both cycles reuses its existing node at the new position,
//!    re-evaluating only the content binding;
//! 2. a key present only in the previous cycle destroys its node;
//! 3. a key present only in the current cycle creates a node;
//! 4. a node is never reused across two different keys.
//!
//! Destroys run before creates, so state held by a doomed node (input focus, typed text)
//! is released rather than transplanted.

use crate::{
	arena::{Arena, NodeId},
	key::Key,
};
use hashbrown::{HashMap, HashSet};
use tracing::{error, info, trace_span};

/// One pass's partitions, in row order for `reused` and `created`.
#[derive(Debug, Clone, Default)]
pub struct DiffOutcome {
	pub reused: Vec<(Key, NodeId)>,
	pub created: Vec<(Key, NodeId)>,
	pub destroyed: Vec<(Key, NodeId)>,
}

impl DiffOutcome {
	/// The created-node handles of this pass, for first-paint dispatch.
	#[must_use]
	pub fn created_ids(&self) -> HashSet<NodeId> {
		self.created.iter().map(|&(_, id)| id).collect()
	}
}

/// Reconciles an [`Arena`]'s row nodes across passes. It remembers the previous pass's
/// keyed rows, so callers only supply the current ones.
#[derive(Debug, Default)]
pub struct KeyedDiffer {
	previous: Vec<(Key, NodeId)>,
}

impl KeyedDiffer {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Reconciles `next` against the previous pass and applies the result to `arena`.
	///
	/// `next` pairs each key with the text binding to display; `stateful` decides whether
	/// *created* nodes carry an input control. Duplicate keys within one cycle are a caller
	/// bug; the duplicate row is dropped with an error log (and panics under debug
	/// assertions).
	pub fn reconcile(&mut self, arena: &mut Arena, next: &[(Key, String)], stateful: bool) -> DiffOutcome {
		let span = trace_span!("reconcile", previous = self.previous.len(), next = next.len());
		let _enter = span.enter();

		let mut available: HashMap<Key, NodeId> = self.previous.drain(..).collect();

		let mut seen = HashSet::with_capacity(next.len());
		let mut outcome = DiffOutcome::default();

		// Partition first so every destroy lands before any create.
		let mut pending: Vec<(&Key, &str, Option<NodeId>)> = Vec::with_capacity(next.len());
		for (key, text) in next {
			if !seen.insert(key.clone()) {
				debug_assert!(false, "duplicate key encountered: {:?}", key);
				error!(?key, "duplicate key encountered; dropping the duplicate row");
				continue;
			}
			pending.push((key, text.as_str(), available.remove(key)));
		}

		for (key, id) in available {
			arena.destroy(id);
			outcome.destroyed.push((key, id));
		}

		let mut order = Vec::with_capacity(pending.len());
		for (key, text, id) in pending {
			let id = match id {
				Some(id) => {
					arena.set_text(id, text);
					outcome.reused.push((key.clone(), id));
					id
				}
				None => {
					let id = arena.create(text, stateful);
					outcome.created.push((key.clone(), id));
					id
				}
			};
			order.push(id);
			self.previous.push((key.clone(), id));
		}
		arena.set_order(order);

		info!(
			reused = outcome.reused.len(),
			created = outcome.created.len(),
			destroyed = outcome.destroyed.len(),
			"pass reconciled"
		);
		outcome
	}
}
