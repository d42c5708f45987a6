//! The identity registry: last-recorded display value per rendered node.
//!
//! This is an explicitly scoped service injected into the change tracker, not process-wide
//! state. Entries for destroyed nodes stay orphaned until [`IdentityRegistry::clear`] runs
//! at a reset boundary; the leak is bounded by the list size between resets.

use crate::arena::NodeId;
use hashbrown::HashMap;

#[derive(Debug, Default)]
pub struct IdentityRegistry(HashMap<NodeId, String>);

impl IdentityRegistry {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Records the value a node displayed at its first paint.
	pub fn record(&mut self, id: NodeId, value: impl Into<String>) {
		self.0.insert(id, value.into());
	}

	#[must_use]
	pub fn recorded(&self, id: NodeId) -> Option<&str> {
		self.0.get(&id).map(String::as_str)
	}

	/// Wholesale wipe, invoked exactly at reset boundaries.
	pub fn clear(&mut self) {
		self.0.clear();
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.0.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}
