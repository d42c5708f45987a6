//! Items, tracking strategies and the key selector.
//!
//! The key produced here is the *sole* input the reconciler in [`crate::diff`] uses to decide
//! node reuse across two render passes, so the whole demo pivots on this module.

use core::{
	fmt::{self, Debug, Display, Formatter},
	hash::{Hash, Hasher},
};
use std::rc::Rc;

/// A list entry. `id` is the stable logical identity, `value` the mutable display content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Item {
	pub id: u64,
	pub value: u64,
}

/// An ordered view of the list. Snapshots are *always* treated as changed when published,
/// without comparing contents, to force a render pass per publish.
pub type Snapshot = Vec<Rc<Item>>;

/// Number of items in a freshly initialised list.
pub const BATCH_SIZE: u64 = 10;

/// A fresh batch with `id == value == index` for `index in [0, BATCH_SIZE)`.
#[must_use]
pub fn fresh_snapshot() -> Snapshot {
	(0..BATCH_SIZE).map(|index| Rc::new(Item { id: index, value: index })).collect()
}

/// How row keys are derived for the reconciler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackingStrategy {
	/// Key by list position. Stable keys under any mutation, so nodes are always reused
	/// and only their bindings update.
	Index,
	/// Key by item instance. Two keys are equal iff they wrap the same allocation.
	Identity,
	/// Key by the item's `id` field.
	Id,
}

impl TrackingStrategy {
	/// Parses a query-parameter value. Unknown values yield `None` rather than an error;
	/// they pass through the UI verbatim and simply select no rendering branch.
	#[must_use]
	pub fn parse(raw: &str) -> Option<Self> {
		match raw {
			"index" => Some(Self::Index),
			"identity" => Some(Self::Identity),
			"id" => Some(Self::Id),
			_ => None,
		}
	}

	#[must_use]
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Index => "index",
			Self::Identity => "identity",
			Self::Id => "id",
		}
	}

	/// The human-readable track expression shown on screen for this strategy.
	#[must_use]
	pub fn expression(self) -> &'static str {
		match self {
			Self::Index => "track $index",
			Self::Identity => "track item",
			Self::Id => "track item.id",
		}
	}
}

impl Display for TrackingStrategy {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// An [`Item`] reference that hashes and compares by allocation address,
/// for the `identity` tracking strategy.
#[derive(Clone)]
pub struct ItemHandle(Rc<Item>);

impl ItemHandle {
	#[must_use]
	pub fn new(item: Rc<Item>) -> Self {
		Self(item)
	}

	#[must_use]
	pub fn item(&self) -> &Item {
		&self.0
	}
}

impl PartialEq for ItemHandle {
	fn eq(&self, other: &Self) -> bool {
		Rc::ptr_eq(&self.0, &other.0)
	}
}
impl Eq for ItemHandle {}

impl Hash for ItemHandle {
	fn hash<H: Hasher>(&self, state: &mut H) {
		(Rc::as_ptr(&self.0) as usize).hash(state);
	}
}

impl Debug for ItemHandle {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		write!(f, "ItemHandle({:p} -> {:?})", Rc::as_ptr(&self.0), self.0)
	}
}

/// A row key as consumed by the reconciler. Keys from different strategies never collide
/// because the variant participates in equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
	Index(usize),
	Id(u64),
	Identity(ItemHandle),
}

/// Maps a row to its tracking key. Pure and deterministic for fixed inputs.
#[must_use]
pub fn select_key(position: usize, item: &Rc<Item>, strategy: TrackingStrategy) -> Key {
	match strategy {
		TrackingStrategy::Index => Key::Index(position),
		TrackingStrategy::Identity => Key::Identity(ItemHandle::new(Rc::clone(item))),
		TrackingStrategy::Id => Key::Id(item.id),
	}
}
