//! Client-side data layer: typed queries, the async API boundary, and the
//! cache synchronization protocol for delete mutations.
//!
//! The flow this crate exists for: a card issues [`Api::delete_post`]; once
//! the server acknowledges, [`apply_post_deletion`] rewrites the cached
//! `postsByUser` collection in place. No refetch, and no divergence between
//! the key that was read and the key that is written.

pub mod api;
pub mod error;
pub mod loader;
pub mod memory;
pub mod query;
pub mod sync;

pub use api::{Api, DeletedPost};
pub use error::ApiError;
pub use memory::MemoryApi;
pub use query::{AlbumsByUser, CommentsByPost, PostsByUser, UserDetail};
pub use sync::{SyncOutcome, apply_post_deletion};
