use retrack::{arena::Marker, key::Key};

use fixture_::sandbox;

#[test]
fn id_tracking_creates_one_and_reuses_nine() {
	let mut sandbox = sandbox("tracking=id&change=increment");
	let before = sandbox.rows().to_vec();

	sandbox.advance(3);

	let outcome = sandbox.last_outcome();
	assert_eq!(outcome.reused.len(), 9);
	assert_eq!(outcome.created.len(), 1);
	assert_eq!(outcome.destroyed.len(), 1);
	assert_eq!(outcome.created[0].0, Key::Id(10));
	assert_eq!(outcome.destroyed[0].0, Key::Id(0));

	// Reused handles come from the previous pass; the created one does not.
	for (_, id) in &outcome.reused {
		assert!(before.contains(id));
	}
	assert!(!before.contains(&outcome.created[0].1));

	// With `id == value`, a reused id still displays the same value: no updated marker.
	for (_, id) in &outcome.reused {
		assert!(!sandbox.arena().has_marker(*id, Marker::Updated));
	}
	let fresh = outcome.created[0].1;
	assert!(sandbox.arena().has_marker(fresh, Marker::Created));
	assert!(!sandbox.arena().has_marker(fresh, Marker::Updated));
}

#[test]
fn index_tracking_reuses_all_and_updates_all() {
	let mut sandbox = sandbox("change=increment");
	let before = sandbox.rows().to_vec();

	sandbox.advance(3);

	assert_eq!(sandbox.rows(), before.as_slice());
	let outcome = sandbox.last_outcome();
	assert_eq!(outcome.reused.len(), 10);
	assert!(outcome.created.is_empty());
	assert!(outcome.destroyed.is_empty());
	for &id in sandbox.rows() {
		assert!(sandbox.arena().has_marker(id, Marker::Updated));
		assert!(!sandbox.arena().has_marker(id, Marker::Created));
	}

	// The registry keeps the first-paint value, so every later tick updates again.
	sandbox.advance(3);
	for &id in sandbox.rows() {
		assert!(sandbox.arena().has_marker(id, Marker::Updated));
	}
}

#[test]
fn increment_replaces_every_item() {
	let mut sandbox = sandbox("tracking=id&change=increment");

	sandbox.advance(3);

	let snapshot = sandbox.controller().snapshot();
	let ids: Vec<u64> = snapshot.iter().map(|item| item.id).collect();
	let values: Vec<u64> = snapshot.iter().map(|item| item.value).collect();
	assert_eq!(ids, (1..=10).collect::<Vec<_>>());
	assert_eq!(values, (1..=10).collect::<Vec<_>>());
}

#[test]
fn ticks_never_change_the_list_length() {
	for query in &["change=increment", "tracking=id&change=shuffle"] {
		let mut sandbox = sandbox(query);
		for _ in 0..5 {
			sandbox.advance(3);
			assert_eq!(sandbox.controller().snapshot().len(), 10);
			assert_eq!(sandbox.rows().len(), 10);
		}
	}
}
