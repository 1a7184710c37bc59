//! Core record types for the gazette data layer.
//!
//! Records are transient copies of server-owned rows: the server assigns ids
//! and stays the source of truth. [`Draft`] is the one purely local type,
//! holding unsaved edits until a card commits or discards them.

pub mod draft;
pub mod id;
pub mod record;

pub use draft::Draft;
pub use id::{AlbumId, CommentId, PostId, UserId};
pub use record::{Album, Comment, Post, User};
