//! The simulated DOM: a pool of rendered row nodes with stable handles.
//!
//! Handles are never recycled, so a destroyed node's [`NodeId`] can linger as an orphaned
//! key in the identity registry without ever aliasing a later node.

use hashbrown::HashMap;
use tracing::{error, trace};

/// Ownership handle of a rendered node. Strictly increasing, never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u64);

/// Transient visual highlight applied by the change tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
	/// The node was created in the most recent render pass.
	Created,
	/// The node's displayed binding differs from its recorded value.
	Updated,
}

/// Typed state of a contained input control, present on stateful rows only.
/// It survives node reuse and is lost with the node on destroy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputControl {
	pub value: String,
	pub focused: bool,
}

#[derive(Debug)]
struct Node {
	text: String,
	input: Option<InputControl>,
	created_marker: bool,
	updated_marker: bool,
}

/// Node pool plus current row order. The reconciler owns the row order; nodes created
/// outside of it (such as the explanation anchor) are never part of a row sequence.
#[derive(Debug, Default)]
pub struct Arena {
	nodes: HashMap<NodeId, Node>,
	order: Vec<NodeId>,
	next_id: u64,
	scroll_target: Option<NodeId>,
}

impl Arena {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a node displaying `text`; `with_input` attaches an (initially empty) input control.
	pub fn create(&mut self, text: impl Into<String>, with_input: bool) -> NodeId {
		let id = NodeId(self.next_id);
		self.next_id += 1;
		let text = text.into();
		trace!(?id, %text, with_input, "creating node");
		self.nodes.insert(
			id,
			Node {
				text,
				input: if with_input { Some(InputControl::default()) } else { None },
				created_marker: false,
				updated_marker: false,
			},
		);
		id
	}

	pub fn destroy(&mut self, id: NodeId) {
		trace!(?id, "destroying node");
		if self.nodes.remove(&id).is_none() {
			error!(?id, "expected to destroy a live node but found none");
		}
		if self.scroll_target == Some(id) {
			self.scroll_target = None;
		}
	}

	pub fn set_text(&mut self, id: NodeId, text: impl Into<String>) {
		match self.nodes.get_mut(&id) {
			Some(node) => node.text = text.into(),
			None => error!(?id, "expected to update a live node but found none"),
		}
	}

	#[must_use]
	pub fn text(&self, id: NodeId) -> Option<&str> {
		self.nodes.get(&id).map(|node| node.text.as_str())
	}

	/// The value a node currently displays: its text content, falling back to the value of
	/// a contained input control when the text is empty.
	#[must_use]
	pub fn display_value(&self, id: NodeId) -> Option<String> {
		let node = self.nodes.get(&id)?;
		if node.text.is_empty() {
			node.input.as_ref().map(|input| input.value.clone())
		} else {
			Some(node.text.clone())
		}
	}

	/// Replaces the typed value of the node's input control, as a user typing would.
	/// Nodes without a control log and ignore the input.
	pub fn type_into(&mut self, id: NodeId, value: impl Into<String>) {
		match self.nodes.get_mut(&id).and_then(|node| node.input.as_mut()) {
			Some(input) => input.value = value.into(),
			None => error!(?id, "typed into a node without an input control"),
		}
	}

	#[must_use]
	pub fn input(&self, id: NodeId) -> Option<&InputControl> {
		self.nodes.get(&id).and_then(|node| node.input.as_ref())
	}

	/// Moves input focus to `id`, dropping it from every other node.
	pub fn focus(&mut self, id: NodeId) {
		for (node_id, node) in &mut self.nodes {
			if let Some(input) = node.input.as_mut() {
				input.focused = *node_id == id;
			}
		}
	}

	#[must_use]
	pub fn focused(&self) -> Option<NodeId> {
		self.nodes.iter().find_map(|(id, node)| match &node.input {
			Some(input) if input.focused => Some(*id),
			_ => None,
		})
	}

	pub fn set_marker(&mut self, id: NodeId, marker: Marker) {
		if let Some(node) = self.nodes.get_mut(&id) {
			match marker {
				Marker::Created => node.created_marker = true,
				Marker::Updated => node.updated_marker = true,
			}
		}
	}

	/// Idempotent; removing an absent marker (or from an already-destroyed node) is a no-op.
	pub fn remove_marker(&mut self, id: NodeId, marker: Marker) {
		if let Some(node) = self.nodes.get_mut(&id) {
			match marker {
				Marker::Created => node.created_marker = false,
				Marker::Updated => node.updated_marker = false,
			}
		}
	}

	#[must_use]
	pub fn has_marker(&self, id: NodeId, marker: Marker) -> bool {
		self.nodes.get(&id).map_or(false, |node| match marker {
			Marker::Created => node.created_marker,
			Marker::Updated => node.updated_marker,
		})
	}

	pub(crate) fn set_order(&mut self, order: Vec<NodeId>) {
		self.order = order;
	}

	/// Currently rendered rows, in order.
	#[must_use]
	pub fn rows(&self) -> &[NodeId] {
		&self.order
	}

	#[must_use]
	pub fn is_live(&self, id: NodeId) -> bool {
		self.nodes.contains_key(&id)
	}

	/// Total live nodes, rows and anchors alike.
	#[must_use]
	pub fn len(&self) -> usize {
		self.nodes.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.nodes.is_empty()
	}

	/// Smooth-scrolls the viewport to `id`. Scrolling to a destroyed node is ignored.
	pub fn scroll_to(&mut self, id: NodeId) {
		if self.nodes.contains_key(&id) {
			trace!(?id, "smooth-scrolling viewport");
			self.scroll_target = Some(id);
		} else {
			error!(?id, "scroll target is not a live node");
		}
	}

	#[must_use]
	pub fn scroll_target(&self) -> Option<NodeId> {
		self.scroll_target
	}
}
