//! Page containers: a user's profile with tabbed collections, and a single
//! post with its comments.

use gazette_cache::CollectionStore;
use gazette_client::{Api, ApiError, loader};
use gazette_model::{Album, Comment, Post, User, UserId};

use crate::card::PostCard;
use crate::list::PostList;

/// Which collection a user page is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UserTab {
	/// The posts column, the landing tab.
	#[default]
	Posts,
	/// The albums listing.
	Albums,
}

/// A user's page: profile header, posts tab, albums tab.
///
/// Opening the page loads the profile and the posts; albums load lazily the
/// first time their tab is shown and are served from cache afterwards.
#[derive(Debug)]
pub struct UserPage {
	user: User,
	tab: UserTab,
	posts: PostList,
	albums: Vec<Album>,
}

impl UserPage {
	/// Loads the page for `user`, landing on the posts tab.
	pub async fn open<S: CollectionStore>(api: &dyn Api, store: &mut S, user: UserId) -> Result<Self, ApiError> {
		let detail = loader::load_user(api, store, user).await?;
		let mut posts = PostList::new(user);
		posts.load(api, store).await?;
		tracing::debug!(user = %user, posts = posts.len(), "User page opened");
		Ok(Self {
			user: detail,
			tab: UserTab::Posts,
			posts,
			albums: Vec::new(),
		})
	}

	pub fn user(&self) -> &User {
		&self.user
	}

	pub fn tab(&self) -> UserTab {
		self.tab
	}

	pub fn posts(&self) -> &PostList {
		&self.posts
	}

	pub fn posts_mut(&mut self) -> &mut PostList {
		&mut self.posts
	}

	/// Albums shown on the albums tab; empty until that tab first loads.
	pub fn albums(&self) -> &[Album] {
		&self.albums
	}

	/// Switches to the albums tab, loading the collection on first show.
	pub async fn show_albums<S: CollectionStore>(&mut self, api: &dyn Api, store: &mut S) -> Result<(), ApiError> {
		self.albums = loader::load_albums(api, store, self.user.id).await?;
		self.tab = UserTab::Albums;
		Ok(())
	}

	/// Switches back to the posts tab. The cards are still there; no load
	/// happens.
	pub fn show_posts(&mut self) {
		self.tab = UserTab::Posts;
	}
}

/// A single post's page: the card (detail variant) plus its comments.
#[derive(Debug)]
pub struct PostPage {
	card: PostCard,
	comments: Vec<Comment>,
}

impl PostPage {
	/// Loads the detail page for `post`.
	///
	/// The card is built in its detail-page variant, so a delete started
	/// here navigates back to the owner's posts on success.
	pub async fn open<S: CollectionStore>(api: &dyn Api, store: &mut S, post: &Post) -> Result<Self, ApiError> {
		let comments = loader::load_comments(api, store, post.id).await?;
		tracing::debug!(post = %post.id, comments = comments.len(), "Post page opened");
		Ok(Self {
			card: PostCard::from_post(post, true),
			comments,
		})
	}

	pub fn card(&self) -> &PostCard {
		&self.card
	}

	pub fn card_mut(&mut self) -> &mut PostCard {
		&mut self.card
	}

	pub fn comments(&self) -> &[Comment] {
		&self.comments
	}
}
