#![doc(html_root_url = "https://docs.rs/retrack/0.0.1")]
#![warn(clippy::pedantic)]

//! A keyed list-reconciliation sandbox.
//!
//! `retrack` simulates the classic list-tracking demo (ten items, periodically mutated,
//! rendered through a keyed reconciler) without any UI framework or browser: nodes live
//! in a simulated [`arena`](crate::arena), time is a logical clock advanced in whole
//! units, and the reconciliation the host framework would normally hide is an explicit,
//! testable [`diff`](crate::diff) step. Change highlighting shows, per pass, which nodes
//! were freshly created and which merely had a binding updated.
//!
//! Drive it through [`sandbox::Sandbox`]; see the README for a worked example.

#[cfg(doctest)]
pub mod readme {
	doc_comment::doctest!("../README.md");
}

pub mod arena;
pub mod controller;
pub mod diff;
pub mod driver;
pub mod key;
pub mod location;
pub mod registry;
pub mod sandbox;
pub mod schedule;
pub mod tracker;

/// Routes uncaught panics to [`tracing::error!`] for logging only; no recovery applies.
/// The demo equivalent of a process-wide error listener.
pub fn install_global_error_listener() {
	std::panic::set_hook(Box::new(|panic_info| {
		tracing::error!("uncaught error: {}", panic_info);
	}));
}
