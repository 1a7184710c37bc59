//! Routes and the navigation seam.

use std::fmt;

use gazette_model::{PostId, UserId};

/// Addressable locations in the interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
	/// A user's page with the posts tab active.
	UserPosts(UserId),
	/// A user's page with the albums tab active.
	UserAlbums(UserId),
	/// A single post with its comments.
	PostDetail(PostId),
}

impl Route {
	/// The location path for this route.
	pub fn path(&self) -> String {
		match self {
			Self::UserPosts(user) => format!("/user/{user}"),
			Self::UserAlbums(user) => format!("/user/{user}/albums"),
			Self::PostDetail(post) => format!("/post/{post}"),
		}
	}
}

impl fmt::Display for Route {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.path())
	}
}

/// Where the delete flow reports its post-success navigation.
///
/// Implementations wrap whatever location mechanism the host has. The only
/// operation is a history replacement: after deleting the record a detail
/// page showed, going back to that page would be going back to a dead
/// route, so the flow swaps the current entry instead of pushing one.
pub trait Navigator {
	/// Replaces the current location with `route`.
	fn replace(&mut self, route: Route);
}

/// Recording [`Navigator`] for tests and the demo shell.
#[derive(Debug, Default)]
pub struct RouteLog {
	routes: Vec<Route>,
}

impl RouteLog {
	pub fn new() -> Self {
		Self::default()
	}

	/// The active route, if any navigation happened.
	pub fn current(&self) -> Option<Route> {
		self.routes.last().copied()
	}

	/// Every replacement in arrival order.
	pub fn log(&self) -> &[Route] {
		&self.routes
	}
}

impl Navigator for RouteLog {
	fn replace(&mut self, route: Route) {
		tracing::debug!(route = %route, "Replacing current location");
		self.routes.push(route);
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_route_paths() {
		assert_eq!(Route::UserPosts(UserId::new(7)).path(), "/user/7");
		assert_eq!(Route::UserAlbums(UserId::new(7)).path(), "/user/7/albums");
		assert_eq!(Route::PostDetail(PostId::new(3)).path(), "/post/3");
	}

	#[test]
	fn test_route_log_tracks_the_latest_replacement() {
		let mut nav = RouteLog::new();
		assert_eq!(nav.current(), None);

		nav.replace(Route::PostDetail(PostId::new(3)));
		nav.replace(Route::UserPosts(UserId::new(7)));

		assert_eq!(nav.current(), Some(Route::UserPosts(UserId::new(7))));
		assert_eq!(nav.log().len(), 2);
	}
}
