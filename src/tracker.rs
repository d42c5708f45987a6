//! The per-node change tracker.
//!
//! Runs once per render pass, after the reconciler settles, over every rendered row in
//! order. Two hooks per node:
//!
//! - **first paint** (once, on the pass that created the node): record the displayed value
//!   into the [`IdentityRegistry`] and flag a transient [`Marker::Created`];
//! - **every refresh** (each pass, including the first): compare the displayed value
//!   against the registry and flag a transient [`Marker::Updated`] when it differs (or was
//!   never recorded).
//!
//! The first-paint hook runs *before* the same pass's refresh hook, mirroring the
//! init-before-checked lifecycle ordering of host frameworks; a freshly created node gets
//! its created marker without a spurious updated marker. Both hooks are observational:
//! they toggle markers and registry entries only and never publish state, so they cannot
//! re-trigger the pass that invoked them.

use crate::{
	arena::{Arena, Marker, NodeId},
	registry::IdentityRegistry,
	schedule::{Scheduler, Task},
};
use hashbrown::HashSet;
use tracing::{trace, trace_span, warn};

/// Time units a transient marker stays applied.
pub const MARKER_DURATION: u64 = 1;

#[derive(Debug, Default)]
pub struct ChangeTracker;

impl ChangeTracker {
	#[must_use]
	pub fn new() -> Self {
		Self
	}

	/// Observes every row of the pass that just settled. `created` is the set of nodes the
	/// pass freshly created.
	pub fn observe_pass(&self, arena: &mut Arena, registry: &mut IdentityRegistry, scheduler: &mut Scheduler, created: &HashSet<NodeId>) {
		let span = trace_span!("observe_pass", rows = arena.rows().len(), created = created.len());
		let _enter = span.enter();

		let rows: Vec<NodeId> = arena.rows().to_vec();
		for id in rows {
			let displayed = match arena.display_value(id) {
				Some(displayed) => displayed,
				None => {
					warn!(?id, "rendered row has no displayable value");
					String::new()
				}
			};

			if created.contains(&id) {
				trace!(?id, %displayed, "first paint");
				registry.record(id, displayed.clone());
				Self::flag(arena, scheduler, id, Marker::Created);
			}

			match registry.recorded(id) {
				Some(recorded) if recorded == displayed => {}
				recorded => {
					trace!(?id, %displayed, ?recorded, "binding updated");
					Self::flag(arena, scheduler, id, Marker::Updated);
				}
			}
		}
	}

	fn flag(arena: &mut Arena, scheduler: &mut Scheduler, id: NodeId, marker: Marker) {
		arena.set_marker(id, marker);
		scheduler.schedule_in(MARKER_DURATION, Task::RemoveMarker(id, marker));
	}
}
