//! Query-keyed collection cache.
//!
//! This crate provides the storage half of the cache synchronization
//! protocol:
//! * [`QueryKey`]: canonical composite key — query identity plus a sorted
//!   variable map, so independently constructed keys for the same invocation
//!   compare and hash equal
//! * [`CollectionStore`]: the injected store seam with raw and typed access
//! * [`MemoryStore`]: the in-memory implementation, stamping a monotonic
//!   [`Revision`] on every write so containers can cheaply detect change
//!
//! Entries are stored as JSON documents. Typed reads decode on access; a
//! document that does not match the requested shape surfaces as
//! [`CacheError::Decode`], which callers on the synchronization path treat
//! as "leave the entry alone", never as a crash.

#![warn(missing_docs)]

pub mod key;
pub mod store;

pub use key::{QueryId, QueryKey, VarValue, Variables};
pub use store::{CacheError, CollectionStore, MemoryStore, Revision};
