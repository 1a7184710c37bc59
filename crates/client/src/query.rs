//! Typed query documents and their canonical cache keys.
//!
//! Every query builds its [`QueryKey`] in exactly one place. Readers and
//! writers of the same logical view therefore always meet on structurally
//! equal keys — the invariant the cache synchronizer depends on.

use gazette_cache::{QueryId, QueryKey, Variables};
use gazette_model::{PostId, UserId};

/// Identity of the posts-by-user collection query.
pub const POSTS_BY_USER: QueryId = QueryId::new("postsByUser");

/// Identity of the user profile query.
pub const USER_DETAIL: QueryId = QueryId::new("userDetail");

/// Identity of the comments-by-post collection query.
pub const COMMENTS_BY_POST: QueryId = QueryId::new("commentsByPost");

/// Identity of the albums-by-user collection query.
pub const ALBUMS_BY_USER: QueryId = QueryId::new("albumsByUser");

/// The collection of posts owned by one user.
///
/// This is the view the delete synchronizer maintains: its variables are
/// the partition key of the affected collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PostsByUser {
	/// Owning user.
	pub user: UserId,
}

impl PostsByUser {
	/// Query for the given owner.
	#[must_use]
	pub const fn new(user: UserId) -> Self {
		Self { user }
	}

	/// Canonical cache key for this invocation.
	#[must_use]
	pub fn key(&self) -> QueryKey {
		QueryKey::new(POSTS_BY_USER, Variables::new().with("user", self.user))
	}
}

/// A single user's profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserDetail {
	/// The requested user.
	pub user: UserId,
}

impl UserDetail {
	/// Query for the given user.
	#[must_use]
	pub const fn new(user: UserId) -> Self {
		Self { user }
	}

	/// Canonical cache key for this invocation.
	#[must_use]
	pub fn key(&self) -> QueryKey {
		QueryKey::new(USER_DETAIL, Variables::new().with("user", self.user))
	}
}

/// The comments under one post.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommentsByPost {
	/// The commented post.
	pub post: PostId,
}

impl CommentsByPost {
	/// Query for the given post.
	#[must_use]
	pub const fn new(post: PostId) -> Self {
		Self { post }
	}

	/// Canonical cache key for this invocation.
	#[must_use]
	pub fn key(&self) -> QueryKey {
		QueryKey::new(COMMENTS_BY_POST, Variables::new().with("post", self.post))
	}
}

/// The albums owned by one user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlbumsByUser {
	/// Owning user.
	pub user: UserId,
}

impl AlbumsByUser {
	/// Query for the given owner.
	#[must_use]
	pub const fn new(user: UserId) -> Self {
		Self { user }
	}

	/// Canonical cache key for this invocation.
	#[must_use]
	pub fn key(&self) -> QueryKey {
		QueryKey::new(ALBUMS_BY_USER, Variables::new().with("user", self.user))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_same_invocation_builds_equal_keys() {
		let a = PostsByUser::new(UserId::new(7)).key();
		let b = PostsByUser::new(UserId::new(7)).key();
		assert_eq!(a, b);
	}

	#[test]
	fn test_queries_with_shared_variables_stay_distinct() {
		// Same owner id, different query identity.
		let posts = PostsByUser::new(UserId::new(7)).key();
		let albums = AlbumsByUser::new(UserId::new(7)).key();
		assert_ne!(posts, albums);
	}
}
