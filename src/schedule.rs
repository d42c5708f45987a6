//! The single-threaded scheduler: a logical clock in whole time units, a due-time-ordered
//! timer queue and a post-paint queue.
//!
//! The post-paint queue is the phase barrier of the render loop: work registered as
//! "after this rendering cycle settles" executes strictly after every binding of that cycle
//! is applied and before the next cycle begins. Render passes never overlap.
//!
//! All queues are owned; dropping the scheduler cancels every pending timer and post-paint
//! callback, which is the only cancellation the demo needs (view teardown).

use crate::arena::{Marker, NodeId};
use std::collections::{BTreeMap, VecDeque};

/// A deferred unit of work, interpreted by the sandbox's run loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Task {
	/// Periodic list mutation (see [`crate::driver`]).
	MutationTick,
	/// Transient-marker expiry. Fire-and-forget; removing an absent marker is a no-op.
	RemoveMarker(NodeId, Marker),
	/// Phase two of the reset protocol: clear the registry and publish a fresh batch.
	PublishFresh,
}

#[derive(Debug, Default)]
pub struct Scheduler {
	now: u64,
	seq: u64,
	timers: BTreeMap<(u64, u64), Task>,
	after_paint: VecDeque<Task>,
}

impl Scheduler {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Current tick of the logical clock.
	#[must_use]
	pub fn now(&self) -> u64 {
		self.now
	}

	/// Runs `task` once `delay` time units from now have elapsed.
	/// Timers due on the same tick fire in scheduling order.
	pub fn schedule_in(&mut self, delay: u64, task: Task) {
		let due = self.now + delay;
		let seq = self.seq;
		self.seq += 1;
		self.timers.insert((due, seq), task);
	}

	/// Registers `task` to run after the current (or next) render pass settles.
	pub fn after_paint(&mut self, task: Task) {
		self.after_paint.push_back(task);
	}

	/// Advances the clock by one unit and takes every timer now due.
	pub(crate) fn step(&mut self) -> Vec<Task> {
		self.now += 1;
		let still_pending = self.timers.split_off(&(self.now + 1, 0));
		let due = core::mem::replace(&mut self.timers, still_pending);
		due.into_iter().map(|(_, task)| task).collect()
	}

	/// Drains the post-paint queue for the pass that just settled.
	pub(crate) fn drain_after_paint(&mut self) -> Vec<Task> {
		self.after_paint.drain(..).collect()
	}

	#[must_use]
	pub fn pending_timers(&self) -> usize {
		self.timers.len()
	}
}
