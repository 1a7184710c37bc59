//! Cache synchronization for completed delete mutations.
//!
//! When a delete mutation resolves, the cached `postsByUser` collection for
//! the owner still lists the dead record. [`apply_post_deletion`] rewrites
//! that one entry in place (read, filter, write back under the same key) so
//! every view rendering from it sees the record disappear without a
//! collection refetch. It runs only with an acknowledged mutation result in
//! hand; on the failure path it is never invoked and the cache keeps its
//! previous contents.

use gazette_cache::CollectionStore;
use gazette_model::{Post, PostId, UserId};

use crate::query::PostsByUser;


/// Outcome of one synchronization pass.
///
/// Every variant is a success from the caller's point of view: the two
/// degraded cases are deliberate no-ops, never propagated failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
	/// The entry was rewritten without the deleted record.
	Updated {
		/// Records removed: 1 in the normal case, more only if the entry
		/// somehow held duplicates of the id.
		removed: usize,
	},
	/// The entry already lacked the record; nothing was written.
	AlreadyConsistent,
	/// No entry is cached for the owner's collection. A future load will
	/// exclude the record naturally, so there is nothing to reconcile.
	Miss,
	/// An entry exists but could not be decoded (or the filtered result
	/// could not be re-encoded); it was left exactly as stored. Views may
	/// show stale data until the next full load.
	Unreadable,
}

/// Removes `deleted` from the cached posts collection of `owner`.
///
/// `deleted` must come from the mutation result, the server's statement of
/// what was removed, not from a locally guessed id. The key is constructed
/// once and used for both the read and the write-back, so the rewritten view
/// is exactly the one that was read.
///
/// The write-back is a full overwrite of the entry. When the collection was
/// never cached, or the stored entry is unreadable, the store is left
/// untouched and the outcome says which case occurred.
pub fn apply_post_deletion<S: CollectionStore>(store: &mut S, deleted: PostId, owner: UserId) -> SyncOutcome {
	let key = PostsByUser::new(owner).key();

	let posts: Vec<Post> = match store.read_collection(&key) {
		Ok(Some(posts)) => posts,
		Ok(None) => {
			tracing::trace!(key = %key, post = %deleted, "No cached collection to reconcile");
			return SyncOutcome::Miss;
		}
		Err(error) => {
			tracing::warn!(key = %key, error = %error, "Leaving unreadable cache entry untouched");
			return SyncOutcome::Unreadable;
		}
	};

	let before = posts.len();
	let kept: Vec<Post> = posts.into_iter().filter(|post| post.id != deleted).collect();
	let removed = before - kept.len();

	if removed == 0 {
		tracing::trace!(key = %key, post = %deleted, "Cached collection already consistent");
		return SyncOutcome::AlreadyConsistent;
	}

	if let Err(error) = store.write_collection(key.clone(), &kept) {
		tracing::warn!(key = %key, error = %error, "Failed to store filtered collection, keeping stale entry");
		return SyncOutcome::Unreadable;
	}

	tracing::debug!(key = %key, post = %deleted, removed, remaining = kept.len(), "Cache entry synchronized after delete");
	SyncOutcome::Updated { removed }
}
