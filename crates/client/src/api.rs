//! The async boundary to the post service.

use async_trait::async_trait;
use gazette_model::{Album, Comment, Post, PostId, User, UserId};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// Result payload of a successful delete mutation.
///
/// The id inside is the server's word on what was removed. Cache
/// synchronization trusts it over any locally remembered id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeletedPost {
	/// Id of the record the server removed.
	pub id: PostId,
}

/// Query and mutation executor for the post service.
///
/// Implementations own transport, retries, and failure surfacing; this core
/// performs no retries of its own. Every call suspends the calling task
/// until the server has answered, so a delete flow that awaits
/// [`delete_post`](Self::delete_post) resumes with an acknowledged result
/// and can synchronize the cache in the same event-loop turn.
#[async_trait]
pub trait Api: Send + Sync {
	/// The ordered collection of posts owned by `user`.
	async fn posts_by_user(&self, user: UserId) -> Result<Vec<Post>, ApiError>;

	/// A single user's profile.
	async fn user_detail(&self, user: UserId) -> Result<User, ApiError>;

	/// The ordered comments under a post.
	async fn comments_by_post(&self, post: PostId) -> Result<Vec<Comment>, ApiError>;

	/// The ordered albums owned by `user`.
	async fn albums_by_user(&self, user: UserId) -> Result<Vec<Album>, ApiError>;

	/// Deletes a post server-side.
	///
	/// Resolves only after the server acknowledged the removal; an `Err`
	/// means the record still exists remotely and nothing local may change.
	async fn delete_post(&self, post: PostId) -> Result<DeletedPost, ApiError>;
}
