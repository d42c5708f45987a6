//! Kept separate: installing the process-wide hook would swallow other binaries' panic output.

#[test]
fn uncaught_errors_are_routed_to_the_listener() {
	retrack::install_global_error_listener();

	let caught = std::panic::catch_unwind(|| panic!("boom"));
	assert!(caught.is_err());

	let _ = std::panic::take_hook();
}
