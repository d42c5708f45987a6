//! The composition root: wires the scheduler, arena, reconciler, registry, tracker,
//! driver and controller into the render loop, and exposes the user input surface.
//!
//! A render pass is synchronous: snapshot publish → row build via the key selector →
//! keyed reconcile → tracker hooks in row order → post-paint queue drain. Post-paint work
//! may itself publish (the two-phase reset), nesting one further complete pass before the
//! current step ends; passes never overlap. Everything is owned, so dropping the sandbox
//! cancels the mutation timer and any pending post-paint callbacks.

use crate::{
	arena::{Arena, NodeId},
	controller::{DomStrategy, ViewController},
	diff::{DiffOutcome, KeyedDiffer},
	driver::{ChangeStrategy, MutationDriver, MUTATION_PERIOD},
	key::{fresh_snapshot, select_key, Key, Snapshot, TrackingStrategy},
	location::Location,
	registry::IdentityRegistry,
	schedule::{Scheduler, Task},
	tracker::ChangeTracker,
};
use tracing::{instrument, trace, trace_span, warn};

#[derive(Debug)]
pub struct Sandbox {
	scheduler: Scheduler,
	arena: Arena,
	differ: KeyedDiffer,
	registry: IdentityRegistry,
	tracker: ChangeTracker,
	driver: MutationDriver,
	controller: ViewController,
	explanation: Option<NodeId>,
	last_outcome: DiffOutcome,
}

impl Sandbox {
	/// A sandbox with default selections and an entropy-seeded shuffle RNG.
	#[must_use]
	pub fn new() -> Self {
		Self::assemble(Location::new(), MutationDriver::new())
	}

	/// Restores selections from `location`, as a page load would.
	#[must_use]
	pub fn from_location(location: Location) -> Self {
		Self::assemble(location, MutationDriver::new())
	}

	/// Like [`Self::from_location`], with a deterministic shuffle RNG.
	#[must_use]
	pub fn seeded(location: Location, seed: u64) -> Self {
		Self::assemble(location, MutationDriver::seeded(seed))
	}

	fn assemble(location: Location, driver: MutationDriver) -> Self {
		let mut sandbox = Self {
			scheduler: Scheduler::new(),
			arena: Arena::new(),
			differ: KeyedDiffer::new(),
			registry: IdentityRegistry::new(),
			tracker: ChangeTracker::new(),
			driver,
			controller: ViewController::from_location(location),
			explanation: None,
			last_outcome: DiffOutcome::default(),
		};
		sandbox.explanation = Some(sandbox.arena.create("How tracking works", false));
		sandbox.scheduler.schedule_in(MUTATION_PERIOD, Task::MutationTick);
		sandbox.publish(fresh_snapshot());
		sandbox
	}

	/// Advances the logical clock by `units`, running every timer that falls due.
	#[instrument(skip(self))]
	pub fn advance(&mut self, units: u64) {
		for _ in 0..units {
			for task in self.scheduler.step() {
				self.run_task(task);
			}
		}
	}

	fn run_task(&mut self, task: Task) {
		match task {
			Task::MutationTick => {
				self.scheduler.schedule_in(MUTATION_PERIOD, Task::MutationTick);
				match self.controller.change() {
					Some(strategy) => {
						let next = self.driver.tick(self.controller.snapshot(), strategy);
						self.publish(next);
					}
					None => warn!(change = self.controller.change_raw(), "unknown change strategy; skipping mutation"),
				}
			}
			Task::RemoveMarker(id, marker) => self.arena.remove_marker(id, marker),
			Task::PublishFresh => {
				self.registry.clear();
				self.publish(fresh_snapshot());
			}
		}
	}

	/// Publishes a snapshot and synchronously renders it. Snapshot equality is "always
	/// unequal": no content comparison gates the pass.
	fn publish(&mut self, snapshot: Snapshot) {
		self.controller.set_snapshot(snapshot);
		self.render();
	}

	fn render(&mut self) {
		let span = trace_span!("render", clock = self.scheduler.now());
		let _enter = span.enter();

		let rows = self.build_rows();
		let stateful = self.controller.dom() == Some(DomStrategy::Stateful);
		let outcome = self.differ.reconcile(&mut self.arena, &rows, stateful);

		// The pass has settled; everything below is the post-paint phase.
		self.tracker.observe_pass(&mut self.arena, &mut self.registry, &mut self.scheduler, &outcome.created_ids());
		self.last_outcome = outcome;

		for task in self.scheduler.drain_after_paint() {
			self.run_task(task);
		}
		trace!(pending_timers = self.scheduler.pending_timers(), "pass settled");
	}

	/// The keyed rows of the current snapshot. A selection that matches no branch renders
	/// no rows at all, mirroring a template switch with no matching case.
	fn build_rows(&self) -> Vec<(Key, String)> {
		let tracking = match self.controller.tracking() {
			Some(tracking) => tracking,
			None => {
				warn!(tracking = self.controller.tracking_raw(), "unknown tracking strategy; rendering no rows");
				return Vec::new();
			}
		};
		if self.controller.dom().is_none() {
			warn!(dom = self.controller.dom_raw(), "unknown DOM strategy; rendering no rows");
			return Vec::new();
		}
		self.controller
			.snapshot()
			.iter()
			.enumerate()
			.map(|(position, item)| (select_key(position, item, tracking), item.value.to_string()))
			.collect()
	}

	/// Two-phase reset, run whenever a strategy selection changes: immediately publish an
	/// empty snapshot (no key survives an empty set, so every node is destroyed regardless
	/// of tracking strategy), then, after that paint settles, clear the identity registry
	/// and publish a fresh batch. The clear precedes the fresh paint so new nodes are never
	/// compared against a previous strategy's recordings.
	fn reset(&mut self) {
		self.scheduler.after_paint(Task::PublishFresh);
		self.publish(Vec::new());
	}

	/// User toggle: tracking strategy.
	pub fn set_tracking(&mut self, strategy: TrackingStrategy) {
		if self.controller.select_tracking(strategy) {
			self.reset();
		}
	}

	/// User toggle: DOM strategy.
	pub fn set_dom(&mut self, strategy: DomStrategy) {
		if self.controller.select_dom(strategy) {
			self.reset();
		}
	}

	/// User toggle: change strategy.
	pub fn set_change(&mut self, strategy: ChangeStrategy) {
		if self.controller.select_change(strategy) {
			self.reset();
		}
	}

	/// The "scroll to explanation" link: smooth-scrolls in place of navigation, and
	/// degrades to a no-op when the anchor is absent.
	pub fn reveal_explanation(&mut self) {
		if let Some(anchor) = self.explanation {
			self.arena.scroll_to(anchor);
		}
	}

	/// Types into the row at `position`, as a user would into a stateful row's input.
	pub fn type_into_row(&mut self, position: usize, value: &str) {
		match self.arena.rows().get(position).copied() {
			Some(id) => self.arena.type_into(id, value),
			None => warn!(position, "typed into a row that is not rendered"),
		}
	}

	/// Focuses the row at `position`'s input control.
	pub fn focus_row(&mut self, position: usize) {
		match self.arena.rows().get(position).copied() {
			Some(id) => self.arena.focus(id),
			None => warn!(position, "focused a row that is not rendered"),
		}
	}

	#[must_use]
	pub fn arena(&self) -> &Arena {
		&self.arena
	}

	#[must_use]
	pub fn registry(&self) -> &IdentityRegistry {
		&self.registry
	}

	#[must_use]
	pub fn controller(&self) -> &ViewController {
		&self.controller
	}

	/// Partitions of the most recent render pass.
	#[must_use]
	pub fn last_outcome(&self) -> &DiffOutcome {
		&self.last_outcome
	}

	/// Rendered rows of the most recent pass, in order.
	#[must_use]
	pub fn rows(&self) -> &[NodeId] {
		self.arena.rows()
	}

	/// Current tick of the logical clock.
	#[must_use]
	pub fn now(&self) -> u64 {
		self.scheduler.now()
	}
}

impl Default for Sandbox {
	fn default() -> Self {
		Self::new()
	}
}
