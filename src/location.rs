//! The navigable location: the demo's only persistence surface.
//!
//! Strategy selections are read from the query string at startup and mirrored back on
//! every change, merged with (never replacing) unrelated parameters, so a configuration
//! is shareable and restorable by URL alone.

use tracing::warn;
use url::Url;

const BASE: &str = "https://retrack.invalid/demo";

#[derive(Debug, Clone)]
pub struct Location {
	url: Url,
}

impl Location {
	/// A location with an empty query string.
	#[must_use]
	pub fn new() -> Self {
		Self::from_query("")
	}

	/// Builds a location from a raw query string (without the leading `?`).
	/// Malformed input degrades to an empty query with a warning; nothing is rejected.
	#[must_use]
	pub fn from_query(query: &str) -> Self {
		let mut url = match Url::parse(BASE) {
			Ok(url) => url,
			Err(error) => {
				warn!(%error, "location base failed to parse; this is a bug");
				return Self { url: Url::parse("data:,").unwrap_or_else(|_| unreachable!()) };
			}
		};
		url.set_query(if query.is_empty() { None } else { Some(query) });
		Self { url }
	}

	/// The first value for `key`, percent-decoded.
	#[must_use]
	pub fn get(&self, key: &str) -> Option<String> {
		self.url.query_pairs().find_map(|(name, value)| if name == key { Some(value.into_owned()) } else { None })
	}

	/// Sets `key` to `value`, preserving every other parameter and their order.
	pub fn set(&mut self, key: &str, value: &str) {
		let mut pairs: Vec<(String, String)> = self.url.query_pairs().map(|(name, value)| (name.into_owned(), value.into_owned())).collect();
		match pairs.iter_mut().find(|(name, _)| name.as_str() == key) {
			Some(pair) => pair.1 = value.to_owned(),
			None => pairs.push((key.to_owned(), value.to_owned())),
		}
		self.url.query_pairs_mut().clear().extend_pairs(pairs);
	}

	/// The current query string, without the leading `?`.
	#[must_use]
	pub fn query(&self) -> &str {
		self.url.query().unwrap_or("")
	}

	/// The full shareable URL.
	#[must_use]
	pub fn href(&self) -> &str {
		self.url.as_str()
	}
}

impl Default for Location {
	fn default() -> Self {
		Self::new()
	}
}
