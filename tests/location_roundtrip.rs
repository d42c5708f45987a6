use retrack::{controller::DomStrategy, driver::ChangeStrategy, key::TrackingStrategy};

use fixture_::sandbox;

#[test]
fn selections_round_trip_through_the_query_string() {
	let mut first = sandbox("");
	first.set_tracking(TrackingStrategy::Identity);
	first.set_dom(DomStrategy::Stateful);
	first.set_change(ChangeStrategy::Shuffle);

	let query = first.controller().location().query().to_owned();
	let second = sandbox(&query);

	assert_eq!(second.controller().tracking(), Some(TrackingStrategy::Identity));
	assert_eq!(second.controller().dom(), Some(DomStrategy::Stateful));
	assert_eq!(second.controller().change(), Some(ChangeStrategy::Shuffle));
}

#[test]
fn writing_a_selection_merges_with_unrelated_parameters() {
	let mut sandbox = sandbox("lang=en&tracking=id");
	sandbox.set_change(ChangeStrategy::Shuffle);

	let location = sandbox.controller().location();
	assert_eq!(location.get("lang").as_deref(), Some("en"));
	assert_eq!(location.get("tracking").as_deref(), Some("id"));
	assert_eq!(location.get("change").as_deref(), Some("shuffle"));
}

#[test]
fn missing_parameters_fall_back_to_defaults() {
	let sandbox = sandbox("");
	assert_eq!(sandbox.controller().tracking(), Some(TrackingStrategy::Index));
	assert_eq!(sandbox.controller().dom(), Some(DomStrategy::Stateless));
	assert_eq!(sandbox.controller().change(), Some(ChangeStrategy::Increment));
	assert_eq!(sandbox.controller().track_expression(), "track $index");
}

#[test]
fn track_expressions_follow_the_selection() {
	let mut sandbox = sandbox("tracking=id");
	assert_eq!(sandbox.controller().track_expression(), "track item.id");
	sandbox.set_tracking(TrackingStrategy::Identity);
	assert_eq!(sandbox.controller().track_expression(), "track item");
}

#[test]
fn unknown_tracking_values_pass_through_and_render_nothing() {
	let mut sandbox = sandbox("tracking=bogus");
	assert_eq!(sandbox.controller().tracking(), None);
	assert_eq!(sandbox.controller().tracking_raw(), "bogus");
	assert_eq!(sandbox.controller().track_expression(), "track bogus");
	assert!(sandbox.rows().is_empty());

	// The list still mutates underneath; it is just not rendered.
	sandbox.advance(3);
	assert!(sandbox.rows().is_empty());
	assert_eq!(sandbox.controller().snapshot().len(), 10);

	// Selecting a real strategy recovers through the usual reset.
	sandbox.set_tracking(TrackingStrategy::Id);
	assert_eq!(sandbox.rows().len(), 10);
}

#[test]
fn unknown_change_values_skip_mutation() {
	let mut sandbox = sandbox("change=whenever");
	let before: Vec<u64> = sandbox.controller().snapshot().iter().map(|item| item.value).collect();

	sandbox.advance(9);

	let after: Vec<u64> = sandbox.controller().snapshot().iter().map(|item| item.value).collect();
	assert_eq!(after, before);
	assert_eq!(sandbox.rows().len(), 10);
	assert_eq!(sandbox.controller().change_raw(), "whenever");
}
