//! View-model layer over the gazette data stack.
//!
//! A [`PostCard`] is one record's interactive surface: it toggles between
//! viewing and editing, holds the draft while an edit is open, and gates the
//! delete button while a delete is in flight. [`PostList`] keeps a column of
//! cards reconciled with the cached collection, and [`submit_delete`] runs
//! the whole delete flow (mutation, cache synchronization, navigation) in
//! one awaited call.
//!
//! Nothing here talks to a real renderer. The types model exactly the state
//! a frontend needs to draw from, which keeps every interaction testable
//! without one.

pub mod card;
pub mod flow;
pub mod list;
pub mod nav;
pub mod pages;

pub use card::{CardMode, DeleteTicket, PostCard};
pub use flow::{DeleteReport, submit_delete};
pub use list::PostList;
pub use nav::{Navigator, Route, RouteLog};
pub use pages::{PostPage, UserPage, UserTab};
