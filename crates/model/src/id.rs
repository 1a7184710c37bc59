//! Server-assigned record identifiers.
//!
//! All ids are stable `u64` newtypes. Equality and ordering follow the raw
//! value, so ids can key maps and sort collections deterministically.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Unique identifier for a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub u64);

impl UserId {
	/// Wraps a raw id value.
	#[must_use]
	pub const fn new(raw: u64) -> Self {
		Self(raw)
	}

	/// Returns the raw id value.
	#[must_use]
	pub const fn get(self) -> u64 {
		self.0
	}
}

impl fmt::Display for UserId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		self.0.fmt(f)
	}
}

/// Unique identifier for a post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostId(pub u64);

impl PostId {
	/// Id for a post created locally that the server has not assigned yet.
	pub const UNSAVED: PostId = PostId(0);

	/// Wraps a raw id value.
	#[must_use]
	pub const fn new(raw: u64) -> Self {
		Self(raw)
	}

	/// Returns the raw id value.
	#[must_use]
	pub const fn get(self) -> u64 {
		self.0
	}

	/// Returns `true` for ids the server has not assigned.
	#[must_use]
	pub const fn is_unsaved(self) -> bool {
		self.0 == Self::UNSAVED.0
	}
}

impl fmt::Display for PostId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		self.0.fmt(f)
	}
}

/// Unique identifier for a comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommentId(pub u64);

impl CommentId {
	/// Wraps a raw id value.
	#[must_use]
	pub const fn new(raw: u64) -> Self {
		Self(raw)
	}

	/// Returns the raw id value.
	#[must_use]
	pub const fn get(self) -> u64 {
		self.0
	}
}

impl fmt::Display for CommentId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		self.0.fmt(f)
	}
}

/// Unique identifier for an album.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AlbumId(pub u64);

impl AlbumId {
	/// Wraps a raw id value.
	#[must_use]
	pub const fn new(raw: u64) -> Self {
		Self(raw)
	}

	/// Returns the raw id value.
	#[must_use]
	pub const fn get(self) -> u64 {
		self.0
	}
}

impl fmt::Display for AlbumId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		self.0.fmt(f)
	}
}
