//! The view controller: reactive demo state and its query-parameter persistence.
//!
//! Selections are stored as the raw query-parameter strings and parsed on use. Unknown
//! values are accepted as-is (no validation error); they round-trip through the location
//! untouched and simply match no rendering or mutation branch. See the sandbox for the
//! reset protocol that runs when a selection changes.

use crate::{
	driver::ChangeStrategy,
	key::{Snapshot, TrackingStrategy},
	location::Location,
};
use core::fmt::{self, Display, Formatter};
use tracing::info;

/// Whether rendered rows are pure text or hold an input control with typed state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomStrategy {
	Stateless,
	Stateful,
}

impl DomStrategy {
	/// Permissive query-parameter parse; unknown values select no rendering branch.
	#[must_use]
	pub fn parse(raw: &str) -> Option<Self> {
		match raw {
			"stateless" => Some(Self::Stateless),
			"stateful" => Some(Self::Stateful),
			_ => None,
		}
	}

	#[must_use]
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Stateless => "stateless",
			Self::Stateful => "stateful",
		}
	}
}

impl Display for DomStrategy {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

pub const TRACKING_PARAM: &str = "tracking";
pub const DOM_PARAM: &str = "dom";
pub const CHANGE_PARAM: &str = "change";

#[derive(Debug)]
pub struct ViewController {
	snapshot: Snapshot,
	tracking_raw: String,
	dom_raw: String,
	change_raw: String,
	location: Location,
}

impl ViewController {
	/// Reads the three selections from `location`, falling back to the defaults
	/// `{index, stateless, increment}` for missing parameters. Present-but-unknown values
	/// are kept verbatim.
	#[must_use]
	pub fn from_location(location: Location) -> Self {
		let tracking_raw = location.get(TRACKING_PARAM).unwrap_or_else(|| TrackingStrategy::Index.as_str().to_owned());
		let dom_raw = location.get(DOM_PARAM).unwrap_or_else(|| DomStrategy::Stateless.as_str().to_owned());
		let change_raw = location.get(CHANGE_PARAM).unwrap_or_else(|| ChangeStrategy::Increment.as_str().to_owned());
		info!(%tracking_raw, %dom_raw, %change_raw, "selections restored from location");
		Self {
			snapshot: Vec::new(),
			tracking_raw,
			dom_raw,
			change_raw,
			location,
		}
	}

	#[must_use]
	pub fn snapshot(&self) -> &Snapshot {
		&self.snapshot
	}

	/// Publishes a snapshot. Snapshots are never compared; every publish counts as a
	/// change, and the caller renders unconditionally.
	pub fn set_snapshot(&mut self, snapshot: Snapshot) {
		self.snapshot = snapshot;
	}

	#[must_use]
	pub fn tracking(&self) -> Option<TrackingStrategy> {
		TrackingStrategy::parse(&self.tracking_raw)
	}

	#[must_use]
	pub fn dom(&self) -> Option<DomStrategy> {
		DomStrategy::parse(&self.dom_raw)
	}

	#[must_use]
	pub fn change(&self) -> Option<ChangeStrategy> {
		ChangeStrategy::parse(&self.change_raw)
	}

	#[must_use]
	pub fn tracking_raw(&self) -> &str {
		&self.tracking_raw
	}

	#[must_use]
	pub fn dom_raw(&self) -> &str {
		&self.dom_raw
	}

	#[must_use]
	pub fn change_raw(&self) -> &str {
		&self.change_raw
	}

	/// The track expression displayed on screen. Unknown raw selections render verbatim.
	#[must_use]
	pub fn track_expression(&self) -> String {
		match self.tracking() {
			Some(strategy) => strategy.expression().to_owned(),
			None => format!("track {}", self.tracking_raw),
		}
	}

	/// Selects a tracking strategy; returns whether the selection changed.
	/// Changes are mirrored into the location immediately.
	pub fn select_tracking(&mut self, strategy: TrackingStrategy) -> bool {
		Self::select(&mut self.tracking_raw, &mut self.location, TRACKING_PARAM, strategy.as_str())
	}

	/// Selects a DOM strategy; returns whether the selection changed.
	pub fn select_dom(&mut self, strategy: DomStrategy) -> bool {
		Self::select(&mut self.dom_raw, &mut self.location, DOM_PARAM, strategy.as_str())
	}

	/// Selects a change strategy; returns whether the selection changed.
	pub fn select_change(&mut self, strategy: ChangeStrategy) -> bool {
		Self::select(&mut self.change_raw, &mut self.location, CHANGE_PARAM, strategy.as_str())
	}

	fn select(raw: &mut String, location: &mut Location, param: &str, value: &str) -> bool {
		if raw == value {
			return false;
		}
		info!(param, from = %raw, to = value, "selection changed");
		*raw = value.to_owned();
		location.set(param, value);
		true
	}

	#[must_use]
	pub fn location(&self) -> &Location {
		&self.location
	}
}
