//! The delete flow: mutation, cache synchronization, navigation.

use gazette_cache::CollectionStore;
use gazette_client::{Api, ApiError, DeletedPost, SyncOutcome, apply_post_deletion};

use crate::card::DeleteTicket;
use crate::nav::{Navigator, Route};

/// What one successful delete flow did end to end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteReport {
	/// The server's confirmation of what was removed.
	pub deleted: DeletedPost,
	/// How the cached collection was reconciled.
	pub sync: SyncOutcome,
	/// The route navigated to, when the delete started on a detail page.
	pub navigated: Option<Route>,
}

/// Runs a delete to completion.
///
/// Awaits the mutation first; only a confirmed result touches anything
/// local. On success the owner's cached collection is synchronized and,
/// when the ticket came from a detail page, the current location is
/// replaced with the owner's posts page — the page the dead record lived
/// on has nothing left to show.
///
/// On `Err` the cache and navigator are exactly as they were; the caller
/// re-enables the card with
/// [`PostCard::delete_failed`](crate::PostCard::delete_failed) and may issue
/// a fresh ticket to retry.
pub async fn submit_delete<S, N>(
	ticket: DeleteTicket,
	api: &dyn Api,
	store: &mut S,
	nav: &mut N,
) -> Result<DeleteReport, ApiError>
where
	S: CollectionStore,
	N: Navigator,
{
	let deleted = match api.delete_post(ticket.post()).await {
		Ok(deleted) => deleted,
		Err(error) => {
			tracing::warn!(post = %ticket.post(), error = %error, "Delete mutation failed, local state untouched");
			return Err(error);
		}
	};

	// The server's id, not the ticket's, drives synchronization.
	let sync = apply_post_deletion(store, deleted.id, ticket.owner());

	let navigated = if ticket.from_detail() {
		let route = Route::UserPosts(ticket.owner());
		nav.replace(route);
		Some(route)
	} else {
		None
	};

	tracing::info!(post = %deleted.id, owner = %ticket.owner(), sync = ?sync, "Delete flow completed");
	Ok(DeleteReport { deleted, sync, navigated })
}
