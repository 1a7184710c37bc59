//! The injected store seam and its in-memory implementation.

use std::collections::HashMap;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

use crate::key::QueryKey;

/// Monotonic stamp assigned to an entry at write time.
///
/// The store's clock only moves forward, so a container remembering the
/// revision it last rendered can detect change with a single compare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Revision(pub u64);

impl std::fmt::Display for Revision {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		self.0.fmt(f)
	}
}

/// Errors from typed cache access.
#[derive(Debug, Error)]
pub enum CacheError {
	/// The stored document does not match the requested shape.
	#[error("cache entry for {key} is unreadable: {source}")]
	Decode {
		/// Key of the offending entry.
		key: QueryKey,
		/// The underlying decode failure.
		source: serde_json::Error,
	},

	/// The value could not be serialized for storage.
	#[error("failed to encode cache entry for {key}: {source}")]
	Encode {
		/// Key the write was aimed at.
		key: QueryKey,
		/// The underlying encode failure.
		source: serde_json::Error,
	},
}

/// Keyed store for query results.
///
/// The store is deliberately dumb: it maps canonical [`QueryKey`]s to JSON
/// documents and stamps a [`Revision`] per write. Whether a document holds a
/// collection or a single record is the caller's business, expressed through
/// the typed helpers. Handles are passed explicitly into whatever needs
/// them — there is no ambient global cache.
pub trait CollectionStore {
	/// Returns the raw document at `key`, if present.
	fn read_raw(&self, key: &QueryKey) -> Option<&Value>;

	/// Replaces the document at `key`, stamping a fresh revision.
	///
	/// A write is a full overwrite of the entry, never a merge.
	fn write_raw(&mut self, key: QueryKey, value: Value);

	/// Returns the revision of the last write to `key`, if present.
	fn revision(&self, key: &QueryKey) -> Option<Revision>;

	/// Decodes the entry at `key` into a typed value.
	///
	/// `Ok(None)` means no entry exists; `Err` means an entry exists but
	/// does not have the requested shape.
	fn read_value<T: DeserializeOwned>(&self, key: &QueryKey) -> Result<Option<T>, CacheError> {
		let Some(raw) = self.read_raw(key) else {
			return Ok(None);
		};
		match T::deserialize(raw) {
			Ok(value) => Ok(Some(value)),
			Err(source) => Err(CacheError::Decode { key: key.clone(), source }),
		}
	}

	/// Encodes `value` and stores it at `key`.
	///
	/// The entry is only replaced when encoding succeeds; an encode failure
	/// leaves whatever was stored before untouched.
	fn write_value<T: Serialize>(&mut self, key: QueryKey, value: &T) -> Result<(), CacheError> {
		let raw = match serde_json::to_value(value) {
			Ok(raw) => raw,
			Err(source) => return Err(CacheError::Encode { key, source }),
		};
		self.write_raw(key, raw);
		Ok(())
	}

	/// Decodes the entry at `key` as an ordered collection.
	fn read_collection<T: DeserializeOwned>(&self, key: &QueryKey) -> Result<Option<Vec<T>>, CacheError> {
		self.read_value(key)
	}

	/// Encodes `items` as an ordered collection and stores it at `key`.
	fn write_collection<T: Serialize>(&mut self, key: QueryKey, items: &[T]) -> Result<(), CacheError> {
		let raw = match serde_json::to_value(items) {
			Ok(raw) => raw,
			Err(source) => return Err(CacheError::Encode { key, source }),
		};
		self.write_raw(key, raw);
		Ok(())
	}
}

/// Entry payload plus its write stamp.
#[derive(Debug, Clone)]
struct Slot {
	value: Value,
	revision: Revision,
}

/// In-memory [`CollectionStore`].
///
/// Single-threaded by design: the store is `&mut`-threaded through whatever
/// flow is running, and a read–transform–write sequence completes within one
/// event-loop turn, so no interior locking is needed.
#[derive(Debug, Default)]
pub struct MemoryStore {
	entries: HashMap<QueryKey, Slot>,
	clock: u64,
}

impl MemoryStore {
	/// Creates an empty store.
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Returns the number of cached entries.
	#[must_use]
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Returns `true` when nothing is cached.
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Returns `true` when an entry exists at `key`.
	#[must_use]
	pub fn contains(&self, key: &QueryKey) -> bool {
		self.entries.contains_key(key)
	}

	/// Iterates over all cached keys, in no particular order.
	pub fn keys(&self) -> impl Iterator<Item = &QueryKey> {
		self.entries.keys()
	}
}

impl CollectionStore for MemoryStore {
	fn read_raw(&self, key: &QueryKey) -> Option<&Value> {
		self.entries.get(key).map(|slot| &slot.value)
	}

	fn write_raw(&mut self, key: QueryKey, value: Value) {
		self.clock += 1;
		let revision = Revision(self.clock);
		tracing::trace!(key = %key, revision = revision.0, "Cache entry written");
		self.entries.insert(key, Slot { value, revision });
	}

	fn revision(&self, key: &QueryKey) -> Option<Revision> {
		self.entries.get(key).map(|slot| slot.revision)
	}
}

#[cfg(test)]
mod tests {
	use serde::Deserialize;
	use serde_json::json;

	use super::*;
	use crate::key::{QueryId, Variables};

	#[derive(Debug, PartialEq, Serialize, Deserialize)]
	struct Row {
		id: u64,
	}

	fn key(user: u64) -> QueryKey {
		QueryKey::new(QueryId::new("rowsByUser"), Variables::new().with("user", user))
	}

	#[test]
	fn test_read_of_absent_key_is_none_not_error() {
		let store = MemoryStore::new();
		let rows = store.read_collection::<Row>(&key(1)).expect("absent entry should not error");
		assert!(rows.is_none());
		assert!(store.revision(&key(1)).is_none());
	}

	#[test]
	fn test_write_then_typed_read() {
		let mut store = MemoryStore::new();
		store.write_collection(key(1), &[Row { id: 10 }, Row { id: 11 }]).expect("encode should succeed");

		let rows = store.read_collection::<Row>(&key(1)).expect("entry should decode").expect("entry should exist");
		assert_eq!(rows, vec![Row { id: 10 }, Row { id: 11 }]);
	}

	#[test]
	fn test_each_write_advances_the_revision() {
		let mut store = MemoryStore::new();
		store.write_raw(key(1), json!([]));
		let first = store.revision(&key(1)).expect("entry should have a revision");

		// Reads never move the clock.
		let _ = store.read_raw(&key(1));
		assert_eq!(store.revision(&key(1)), Some(first));

		store.write_raw(key(1), json!([{"id": 1}]));
		let second = store.revision(&key(1)).expect("entry should have a revision");
		assert!(second > first);
	}

	#[test]
	fn test_write_is_a_full_overwrite() {
		let mut store = MemoryStore::new();
		store.write_raw(key(1), json!([{"id": 1}, {"id": 2}]));
		store.write_raw(key(1), json!([{"id": 2}]));

		let rows = store.read_collection::<Row>(&key(1)).expect("entry should decode").expect("entry should exist");
		assert_eq!(rows, vec![Row { id: 2 }]);
		assert_eq!(store.len(), 1);
	}

	#[test]
	fn test_malformed_entry_surfaces_as_decode_error() {
		let mut store = MemoryStore::new();
		store.write_raw(key(1), json!("not a collection"));

		let err = store.read_collection::<Row>(&key(1)).expect_err("shape mismatch should error");
		assert!(matches!(err, CacheError::Decode { .. }));
	}
}
