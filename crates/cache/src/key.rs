//! Canonical cache keys for parameterized queries.
//!
//! A cache entry is identified by `(QueryId, Variables)`. Key equality must
//! be structural: the key built at write time and the key built later at
//! read time are different objects, and the two views silently diverge if
//! they ever disagree. Variables therefore live in a sorted map, making
//! equality, hashing, and the log rendering independent of insertion order.

use std::collections::BTreeMap;
use std::fmt;

use gazette_model::{AlbumId, CommentId, PostId, UserId};

/// Identity of one query document, e.g. `postsByUser`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QueryId(&'static str);

impl QueryId {
	/// Wraps a query document name.
	#[must_use]
	pub const fn new(name: &'static str) -> Self {
		Self(name)
	}

	/// Returns the query document name.
	#[must_use]
	pub const fn name(self) -> &'static str {
		self.0
	}
}

impl fmt::Display for QueryId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.0)
	}
}

/// One scalar variable value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum VarValue {
	/// A boolean flag.
	Bool(bool),
	/// A record id.
	Id(u64),
	/// Free-form text.
	Text(String),
}

impl fmt::Display for VarValue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Bool(value) => value.fmt(f),
			Self::Id(value) => value.fmt(f),
			Self::Text(value) => write!(f, "{value:?}"),
		}
	}
}

impl From<bool> for VarValue {
	fn from(value: bool) -> Self {
		Self::Bool(value)
	}
}

impl From<u64> for VarValue {
	fn from(value: u64) -> Self {
		Self::Id(value)
	}
}

impl From<&str> for VarValue {
	fn from(value: &str) -> Self {
		Self::Text(value.to_string())
	}
}

impl From<String> for VarValue {
	fn from(value: String) -> Self {
		Self::Text(value)
	}
}

impl From<UserId> for VarValue {
	fn from(id: UserId) -> Self {
		Self::Id(id.get())
	}
}

impl From<PostId> for VarValue {
	fn from(id: PostId) -> Self {
		Self::Id(id.get())
	}
}

impl From<CommentId> for VarValue {
	fn from(id: CommentId) -> Self {
		Self::Id(id.get())
	}
}

impl From<AlbumId> for VarValue {
	fn from(id: AlbumId) -> Self {
		Self::Id(id.get())
	}
}

/// Canonical variable set for one query invocation.
///
/// Backed by a sorted map: insertion order never affects equality or
/// hashing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Variables(BTreeMap<&'static str, VarValue>);

impl Variables {
	/// Creates an empty variable set.
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds a variable, consuming and returning the set for chaining.
	#[must_use]
	pub fn with(mut self, name: &'static str, value: impl Into<VarValue>) -> Self {
		self.insert(name, value);
		self
	}

	/// Adds or replaces a variable.
	pub fn insert(&mut self, name: &'static str, value: impl Into<VarValue>) {
		self.0.insert(name, value.into());
	}

	/// Looks up a variable by name.
	#[must_use]
	pub fn get(&self, name: &str) -> Option<&VarValue> {
		self.0.get(name)
	}

	/// Returns the number of variables.
	#[must_use]
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Returns `true` when no variables are set.
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

impl fmt::Display for Variables {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let mut first = true;
		for (name, value) in &self.0 {
			if !first {
				f.write_str(", ")?;
			}
			write!(f, "{name}={value}")?;
			first = false;
		}
		Ok(())
	}
}

/// Composite cache key: query identity plus canonical variables.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryKey {
	query: QueryId,
	variables: Variables,
}

impl QueryKey {
	/// Builds a key from a query identity and its variables.
	#[must_use]
	pub fn new(query: QueryId, variables: Variables) -> Self {
		Self { query, variables }
	}

	/// Returns the query identity.
	#[must_use]
	pub const fn query(&self) -> QueryId {
		self.query
	}

	/// Returns the variables.
	#[must_use]
	pub const fn variables(&self) -> &Variables {
		&self.variables
	}
}

impl fmt::Display for QueryKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if self.variables.is_empty() {
			self.query.fmt(f)
		} else {
			write!(f, "{}({})", self.query, self.variables)
		}
	}
}
