//! Cache-populating loaders for the read-side queries.
//!
//! Each query comes as a trio: `fetch_*` always asks the server and stores
//! the answer under the query's canonical key, `cached_*` only consults the
//! store, and `load_*` is the cache-first composition containers use. A
//! cache hit is served as-is — staleness between mutations is what the
//! delete synchronizer exists to repair.
//!
//! Cache trouble never fails a load. An unreadable entry is treated as a
//! miss and a failed write-back only means the result is served uncached;
//! both paths warn and move on.

use gazette_cache::{CollectionStore, QueryKey};
use gazette_model::{Album, Comment, Post, PostId, User, UserId};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::api::Api;
use crate::error::ApiError;
use crate::query::{AlbumsByUser, CommentsByPost, PostsByUser, UserDetail};


fn read_or_warn<T: DeserializeOwned, S: CollectionStore>(store: &S, key: &QueryKey) -> Option<T> {
	match store.read_value(key) {
		Ok(entry) => entry,
		Err(error) => {
			tracing::warn!(error = %error, "Treating unreadable cache entry as a miss");
			None
		}
	}
}

fn write_or_warn<T: Serialize, S: CollectionStore>(store: &mut S, key: QueryKey, value: &T) {
	if let Err(error) = store.write_value(key, value) {
		tracing::warn!(error = %error, "Fetched result will be served uncached");
	}
}

/// Fetches a user's posts from the server and caches them.
pub async fn fetch_posts<S: CollectionStore>(api: &dyn Api, store: &mut S, user: UserId) -> Result<Vec<Post>, ApiError> {
	let posts = api.posts_by_user(user).await?;
	write_or_warn(store, PostsByUser::new(user).key(), &posts);
	Ok(posts)
}

/// Returns the cached posts collection for `user`, if one is stored.
pub fn cached_posts<S: CollectionStore>(store: &S, user: UserId) -> Option<Vec<Post>> {
	read_or_warn(store, &PostsByUser::new(user).key())
}

/// Cache-first load of a user's posts.
pub async fn load_posts<S: CollectionStore>(api: &dyn Api, store: &mut S, user: UserId) -> Result<Vec<Post>, ApiError> {
	match cached_posts(store, user) {
		Some(posts) => Ok(posts),
		None => fetch_posts(api, store, user).await,
	}
}

/// Fetches a user's profile from the server and caches it.
pub async fn fetch_user<S: CollectionStore>(api: &dyn Api, store: &mut S, user: UserId) -> Result<User, ApiError> {
	let detail = api.user_detail(user).await?;
	write_or_warn(store, UserDetail::new(user).key(), &detail);
	Ok(detail)
}

/// Returns the cached profile for `user`, if one is stored.
pub fn cached_user<S: CollectionStore>(store: &S, user: UserId) -> Option<User> {
	read_or_warn(store, &UserDetail::new(user).key())
}

/// Cache-first load of a user's profile.
pub async fn load_user<S: CollectionStore>(api: &dyn Api, store: &mut S, user: UserId) -> Result<User, ApiError> {
	match cached_user(store, user) {
		Some(detail) => Ok(detail),
		None => fetch_user(api, store, user).await,
	}
}

/// Fetches a post's comments from the server and caches them.
pub async fn fetch_comments<S: CollectionStore>(
	api: &dyn Api,
	store: &mut S,
	post: PostId,
) -> Result<Vec<Comment>, ApiError> {
	let comments = api.comments_by_post(post).await?;
	write_or_warn(store, CommentsByPost::new(post).key(), &comments);
	Ok(comments)
}

/// Returns the cached comments collection for `post`, if one is stored.
pub fn cached_comments<S: CollectionStore>(store: &S, post: PostId) -> Option<Vec<Comment>> {
	read_or_warn(store, &CommentsByPost::new(post).key())
}

/// Cache-first load of a post's comments.
pub async fn load_comments<S: CollectionStore>(
	api: &dyn Api,
	store: &mut S,
	post: PostId,
) -> Result<Vec<Comment>, ApiError> {
	match cached_comments(store, post) {
		Some(comments) => Ok(comments),
		None => fetch_comments(api, store, post).await,
	}
}

/// Fetches a user's albums from the server and caches them.
pub async fn fetch_albums<S: CollectionStore>(
	api: &dyn Api,
	store: &mut S,
	user: UserId,
) -> Result<Vec<Album>, ApiError> {
	let albums = api.albums_by_user(user).await?;
	write_or_warn(store, AlbumsByUser::new(user).key(), &albums);
	Ok(albums)
}

/// Returns the cached albums collection for `user`, if one is stored.
pub fn cached_albums<S: CollectionStore>(store: &S, user: UserId) -> Option<Vec<Album>> {
	read_or_warn(store, &AlbumsByUser::new(user).key())
}

/// Cache-first load of a user's albums.
pub async fn load_albums<S: CollectionStore>(
	api: &dyn Api,
	store: &mut S,
	user: UserId,
) -> Result<Vec<Album>, ApiError> {
	match cached_albums(store, user) {
		Some(albums) => Ok(albums),
		None => fetch_albums(api, store, user).await,
	}
}
