//! In-memory [`Api`] implementation.
//!
//! Serves fixtures from process memory with the same ordering and failure
//! semantics a remote service would have. Tests and the demo shell run
//! against this; the injection hooks let tests script the failure paths
//! without a network in the loop.

use std::collections::BTreeMap;

use async_trait::async_trait;
use gazette_model::{Album, AlbumId, Comment, CommentId, Post, PostId, User, UserId};
use parking_lot::Mutex;

use crate::api::{Api, DeletedPost};
use crate::error::ApiError;

#[derive(Debug, Default)]
struct State {
	users: BTreeMap<UserId, User>,
	posts: BTreeMap<PostId, Post>,
	comments: BTreeMap<CommentId, Comment>,
	albums: BTreeMap<AlbumId, Album>,
	/// Consumed by the next `delete_post` call, which then fails without
	/// touching the records.
	fail_delete: Option<ApiError>,
}

/// Fixture-backed server double.
///
/// Collections iterate in id order, so query results are deterministic.
/// Deleting a post cascades to its comments, mirroring what the real
/// service does server-side.
#[derive(Debug, Default)]
pub struct MemoryApi {
	state: Mutex<State>,
}

impl MemoryApi {
	/// An empty server. Every query answers with an empty collection and
	/// every targeted lookup misses.
	pub fn new() -> Self {
		Self::default()
	}

	/// A server pre-populated with a small, fixed data set: two users,
	/// five posts, comments under the first two posts, and three albums.
	pub fn seeded() -> Self {
		let api = Self::new();
		api.insert_user(User {
			id: UserId::new(1),
			name: "Leanne Graham".to_owned(),
			username: "Bret".to_owned(),
			email: "Sincere@april.biz".to_owned(),
		});
		api.insert_user(User {
			id: UserId::new(2),
			name: "Ervin Howell".to_owned(),
			username: "Antonette".to_owned(),
			email: "Shanna@melissa.tv".to_owned(),
		});

		api.insert_post(Post::new(
			PostId::new(1),
			UserId::new(1),
			"sunt aut facere repellat",
			"quia et suscipit recusandae consequuntur expedita",
		));
		api.insert_post(Post::new(
			PostId::new(2),
			UserId::new(1),
			"qui est esse",
			"est rerum tempore vitae sequi sint nihil",
		));
		api.insert_post(Post::new(
			PostId::new(3),
			UserId::new(1),
			"ea molestias quasi exercitationem",
			"et iusto sed quo iure voluptatem occaecati",
		));
		api.insert_post(Post::new(
			PostId::new(4),
			UserId::new(2),
			"eum et est occaecati",
			"ullam et saepe reiciendis voluptatem adipisci",
		));
		api.insert_post(Post::new(
			PostId::new(5),
			UserId::new(2),
			"nesciunt quas odio",
			"repudiandae veniam quaerat sunt sed alias aut",
		));

		api.insert_comment(Comment {
			id: CommentId::new(1),
			post_id: PostId::new(1),
			email: "Eliseo@gardner.biz".to_owned(),
			body: "laudantium enim quasi est quidem magnam".to_owned(),
		});
		api.insert_comment(Comment {
			id: CommentId::new(2),
			post_id: PostId::new(1),
			email: "Jayne_Kuhic@sydney.com".to_owned(),
			body: "est natus enim nihil est dolore".to_owned(),
		});
		api.insert_comment(Comment {
			id: CommentId::new(3),
			post_id: PostId::new(2),
			email: "Nikita@garfield.biz".to_owned(),
			body: "quia molestiae reprehenderit quasi aspernatur".to_owned(),
		});

		api.insert_album(Album {
			id: AlbumId::new(1),
			user_id: UserId::new(1),
			title: "quidem molestiae enim".to_owned(),
		});
		api.insert_album(Album {
			id: AlbumId::new(2),
			user_id: UserId::new(1),
			title: "sunt qui excepturi placeat culpa".to_owned(),
		});
		api.insert_album(Album {
			id: AlbumId::new(3),
			user_id: UserId::new(2),
			title: "omnis laborum odio".to_owned(),
		});
		api
	}

	/// Inserts or replaces a user record.
	pub fn insert_user(&self, user: User) {
		self.state.lock().users.insert(user.id, user);
	}

	/// Inserts or replaces a post record.
	pub fn insert_post(&self, post: Post) {
		self.state.lock().posts.insert(post.id, post);
	}

	/// Inserts or replaces a comment record.
	pub fn insert_comment(&self, comment: Comment) {
		self.state.lock().comments.insert(comment.id, comment);
	}

	/// Inserts or replaces an album record.
	pub fn insert_album(&self, album: Album) {
		self.state.lock().albums.insert(album.id, album);
	}

	/// Arms a one-shot failure: the next `delete_post` call returns
	/// `error` and leaves every record in place.
	pub fn fail_next_delete(&self, error: ApiError) {
		self.state.lock().fail_delete = Some(error);
	}

	/// Current server-side copy of a post, if it still exists.
	pub fn post(&self, id: PostId) -> Option<Post> {
		self.state.lock().posts.get(&id).cloned()
	}

	/// Number of posts currently stored, across all owners.
	pub fn post_count(&self) -> usize {
		self.state.lock().posts.len()
	}

	/// Number of comments currently stored, across all posts.
	pub fn comment_count(&self) -> usize {
		self.state.lock().comments.len()
	}
}

#[async_trait]
impl Api for MemoryApi {
	async fn posts_by_user(&self, user: UserId) -> Result<Vec<Post>, ApiError> {
		let state = self.state.lock();
		Ok(state.posts.values().filter(|post| post.user_id == user).cloned().collect())
	}

	async fn user_detail(&self, user: UserId) -> Result<User, ApiError> {
		let state = self.state.lock();
		state
			.users
			.get(&user)
			.cloned()
			.ok_or(ApiError::NotFound { kind: "user", id: user.get() })
	}

	async fn comments_by_post(&self, post: PostId) -> Result<Vec<Comment>, ApiError> {
		let state = self.state.lock();
		Ok(state.comments.values().filter(|comment| comment.post_id == post).cloned().collect())
	}

	async fn albums_by_user(&self, user: UserId) -> Result<Vec<Album>, ApiError> {
		let state = self.state.lock();
		Ok(state.albums.values().filter(|album| album.user_id == user).cloned().collect())
	}

	async fn delete_post(&self, post: PostId) -> Result<DeletedPost, ApiError> {
		let mut state = self.state.lock();

		if let Some(error) = state.fail_delete.take() {
			tracing::debug!(post = %post, error = %error, "Injected delete failure, records untouched");
			return Err(error);
		}

		let removed = state
			.posts
			.remove(&post)
			.ok_or(ApiError::NotFound { kind: "post", id: post.get() })?;

		let before = state.comments.len();
		state.comments.retain(|_, comment| comment.post_id != post);
		let cascaded = before - state.comments.len();

		tracing::debug!(post = %removed.id, owner = %removed.user_id, cascaded, "Post deleted");
		Ok(DeletedPost { id: removed.id })
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[tokio::test]
	async fn test_posts_come_back_in_id_order_per_owner() {
		let api = MemoryApi::seeded();

		let posts = api.posts_by_user(UserId::new(1)).await.expect("query should succeed");

		let ids: Vec<u64> = posts.iter().map(|p| p.id.get()).collect();
		assert_eq!(ids, vec![1, 2, 3]);
		assert!(posts.iter().all(|p| p.user_id == UserId::new(1)));
	}

	#[tokio::test]
	async fn test_delete_cascades_to_comments() {
		let api = MemoryApi::seeded();
		assert_eq!(api.comment_count(), 3);

		let deleted = api.delete_post(PostId::new(1)).await.expect("delete should succeed");

		assert_eq!(deleted.id, PostId::new(1));
		assert_eq!(api.post(PostId::new(1)), None);
		// Post 1 carried two comments; post 2's survives.
		assert_eq!(api.comment_count(), 1);
		let remaining = api.comments_by_post(PostId::new(2)).await.expect("query should succeed");
		assert_eq!(remaining.len(), 1);
	}

	#[tokio::test]
	async fn test_deleting_a_missing_post_reports_not_found() {
		let api = MemoryApi::seeded();

		let error = api.delete_post(PostId::new(99)).await.expect_err("delete should miss");

		assert!(matches!(error, ApiError::NotFound { kind: "post", id: 99 }));
		assert_eq!(api.post_count(), 5);
	}

	#[tokio::test]
	async fn test_injected_failure_fires_once_and_mutates_nothing() {
		let api = MemoryApi::seeded();
		api.fail_next_delete(ApiError::Server { status: 500 });

		let error = api.delete_post(PostId::new(1)).await.expect_err("armed delete should fail");
		assert!(matches!(error, ApiError::Server { status: 500 }));
		assert_eq!(api.post_count(), 5, "a failed delete must not remove anything");
		assert_eq!(api.comment_count(), 3);

		// The injection is one-shot; the retry goes through.
		let deleted = api.delete_post(PostId::new(1)).await.expect("retry should succeed");
		assert_eq!(deleted.id, PostId::new(1));
		assert_eq!(api.post_count(), 4);
	}

	#[tokio::test]
	async fn test_user_detail_misses_cleanly() {
		let api = MemoryApi::seeded();

		let user = api.user_detail(UserId::new(2)).await.expect("lookup should succeed");
		assert_eq!(user.username, "Antonette");

		let error = api.user_detail(UserId::new(42)).await.expect_err("lookup should miss");
		assert!(matches!(error, ApiError::NotFound { kind: "user", id: 42 }));
	}
}
