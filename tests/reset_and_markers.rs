use retrack::{arena::Marker, key::TrackingStrategy};

use fixture_::sandbox;

#[test]
fn boot_paints_a_fresh_batch() {
	let sandbox = sandbox("");
	assert_eq!(sandbox.rows().len(), 10);
	assert_eq!(sandbox.last_outcome().created.len(), 10);
	assert_eq!(sandbox.registry().len(), 10);
	for (position, &id) in sandbox.rows().iter().enumerate() {
		assert_eq!(sandbox.arena().text(id), Some(position.to_string().as_str()));
		assert!(sandbox.arena().has_marker(id, Marker::Created));
		assert!(!sandbox.arena().has_marker(id, Marker::Updated));
	}
}

#[test]
fn strategy_change_trashes_and_recreates() {
	let mut sandbox = sandbox("");
	sandbox.advance(3);
	let before = sandbox.rows().to_vec();

	sandbox.set_tracking(TrackingStrategy::Id);

	for &id in &before {
		assert!(!sandbox.arena().is_live(id), "a pre-reset node survived the reset");
	}
	assert_eq!(sandbox.last_outcome().created.len(), 10);
	assert!(sandbox.last_outcome().reused.is_empty());

	// The registry was cleared at the boundary; only the fresh batch is recorded.
	assert_eq!(sandbox.registry().len(), 10);

	for (position, &id) in sandbox.rows().iter().enumerate() {
		assert_eq!(sandbox.arena().text(id), Some(position.to_string().as_str()));
		assert!(sandbox.arena().has_marker(id, Marker::Created));
		assert!(!sandbox.arena().has_marker(id, Marker::Updated));
	}
}

#[test]
fn reselecting_the_active_strategy_does_not_reset() {
	let mut sandbox = sandbox("");
	let before = sandbox.rows().to_vec();

	sandbox.set_tracking(TrackingStrategy::Index);

	assert_eq!(sandbox.rows(), before.as_slice());
	for &id in &before {
		assert!(sandbox.arena().is_live(id));
	}
}

#[test]
fn markers_expire_after_one_time_unit() {
	let mut sandbox = sandbox("");
	let rows = sandbox.rows().to_vec();
	for &id in &rows {
		assert!(sandbox.arena().has_marker(id, Marker::Created));
	}

	sandbox.advance(1);

	for &id in &rows {
		assert!(!sandbox.arena().has_marker(id, Marker::Created));
		assert!(!sandbox.arena().has_marker(id, Marker::Updated));
	}
}

#[test]
fn mutation_keeps_ticking_after_a_reset() {
	let mut sandbox = sandbox("tracking=id&change=increment");
	sandbox.set_change(retrack::driver::ChangeStrategy::Shuffle);

	sandbox.advance(3);

	let outcome = sandbox.last_outcome();
	assert_eq!(outcome.reused.len(), 10);
	assert!(outcome.created.is_empty());
	assert!(outcome.destroyed.is_empty());
}

#[test]
fn reveal_explanation_scrolls_to_the_anchor() {
	let mut sandbox = sandbox("");
	assert_eq!(sandbox.arena().scroll_target(), None);
	sandbox.reveal_explanation();
	let target = sandbox.arena().scroll_target().expect("anchor present");
	assert_eq!(sandbox.arena().text(target), Some("How tracking works"));
}
