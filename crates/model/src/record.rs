//! Server-owned record types.
//!
//! Field names serialize in camelCase to match the upstream API's JSON, which
//! is also the shape cache entries are stored in.

use serde::{Deserialize, Serialize};

use crate::id::{AlbumId, CommentId, PostId, UserId};

/// A post owned by a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
	/// Server-assigned id.
	pub id: PostId,
	/// Owning user.
	pub user_id: UserId,
	/// Display title.
	pub title: String,
	/// Body text; may span multiple lines.
	pub body: String,
}

impl Post {
	/// Creates a post record.
	pub fn new(id: PostId, user_id: UserId, title: impl Into<String>, body: impl Into<String>) -> Self {
		Self {
			id,
			user_id,
			title: title.into(),
			body: body.into(),
		}
	}
}

/// A user account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
	/// Server-assigned id.
	pub id: UserId,
	/// Full display name.
	pub name: String,
	/// Login handle.
	pub username: String,
	/// Contact address.
	pub email: String,
}

/// A comment attached to a post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
	/// Server-assigned id.
	pub id: CommentId,
	/// The post this comment belongs to.
	pub post_id: PostId,
	/// Author contact address.
	pub email: String,
	/// Comment text.
	pub body: String,
}

/// A photo album owned by a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Album {
	/// Server-assigned id.
	pub id: AlbumId,
	/// Owning user.
	pub user_id: UserId,
	/// Display title.
	pub title: String,
}
