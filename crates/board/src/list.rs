//! A column of post cards kept in step with the cached collection.

use gazette_cache::{CollectionStore, Revision};
use gazette_client::{Api, ApiError, PostsByUser, loader};
use gazette_model::{Post, PostId, UserId};

use crate::card::PostCard;

/// The posts of one owner, rendered as cards.
///
/// The list never owns the data; the cached collection does. After anything
/// rewrites that entry (a refetch, the delete synchronizer), a cheap
/// [`refresh`](Self::refresh) re-derives the cards from it. Purely local
/// card state (an open draft, a pending delete, an unsaved new card)
/// survives reconciliation; cards whose record left the collection do not.
#[derive(Debug)]
pub struct PostList {
	owner: UserId,
	cards: Vec<PostCard>,
	seen: Option<Revision>,
}

impl PostList {
	/// An empty list for `owner`. Call [`load`](Self::load) to populate it.
	pub fn new(owner: UserId) -> Self {
		Self { owner, cards: Vec::new(), seen: None }
	}

	pub fn owner(&self) -> UserId {
		self.owner
	}

	pub fn cards(&self) -> &[PostCard] {
		&self.cards
	}

	pub fn len(&self) -> usize {
		self.cards.len()
	}

	pub fn is_empty(&self) -> bool {
		self.cards.is_empty()
	}

	/// The card for a record, if the list currently shows it.
	pub fn card(&self, id: PostId) -> Option<&PostCard> {
		self.cards.iter().find(|card| card.id() == id)
	}

	/// Mutable access to a card, for driving its transitions.
	pub fn card_mut(&mut self, id: PostId) -> Option<&mut PostCard> {
		self.cards.iter_mut().find(|card| card.id() == id)
	}

	/// Loads the owner's collection (cache-first) and rebuilds the cards.
	pub async fn load<S: CollectionStore>(&mut self, api: &dyn Api, store: &mut S) -> Result<(), ApiError> {
		let posts = loader::load_posts(api, store, self.owner).await?;
		self.reconcile(&posts);
		self.seen = store.revision(&PostsByUser::new(self.owner).key());
		Ok(())
	}

	/// Re-derives the cards when the cached entry changed since they were
	/// last built.
	///
	/// Returns `true` when the cards were rebuilt. The revision check makes
	/// the no-change case a single compare, so hosts can call this after
	/// every flow without re-reading the entry. An entry that stopped
	/// decoding leaves the current cards standing.
	pub fn refresh<S: CollectionStore>(&mut self, store: &S) -> bool {
		let revision = store.revision(&PostsByUser::new(self.owner).key());
		if revision == self.seen {
			return false;
		}
		let Some(posts) = loader::cached_posts(store, self.owner) else {
			return false;
		};
		self.reconcile(&posts);
		self.seen = revision;
		true
	}

	/// Appends a brand-new card, open for editing, and returns it.
	pub fn start_new(&mut self) -> &mut PostCard {
		self.cards.push(PostCard::draft_new(self.owner));
		self.cards.last_mut().expect("just pushed")
	}

	/// Rebuilds the card column to mirror `posts`.
	///
	/// Records keep their existing card (mode, draft, pending flag intact)
	/// and take the collection's order; records without a card get a fresh
	/// viewing card. Unsaved cards stay at the tail; every other card whose
	/// record is gone is dropped.
	fn reconcile(&mut self, posts: &[Post]) {
		let mut next = Vec::with_capacity(posts.len());
		for post in posts {
			match self.cards.iter().position(|card| card.id() == post.id) {
				Some(index) => {
					let mut card = self.cards.remove(index);
					card.refresh_content(post);
					next.push(card);
				}
				None => next.push(PostCard::from_post(post, false)),
			}
		}
		let dropped = self.cards.iter().filter(|card| !card.is_unsaved()).count();
		if dropped > 0 {
			tracing::debug!(owner = %self.owner, dropped, "Cards dropped during reconciliation");
		}
		next.extend(self.cards.drain(..).filter(PostCard::is_unsaved));
		self.cards = next;
	}
}

#[cfg(test)]
mod tests {
	use gazette_cache::MemoryStore;
	use gazette_client::{MemoryApi, apply_post_deletion};
	use gazette_model::UserId;
	use serde_json::json;

	use super::*;
	use crate::card::CardMode;

	async fn loaded_list() -> (MemoryApi, MemoryStore, PostList) {
		let api = MemoryApi::seeded();
		let mut store = MemoryStore::new();
		let mut list = PostList::new(UserId::new(1));
		list.load(&api, &mut store).await.expect("load should succeed");
		(api, store, list)
	}

	fn card_ids(list: &PostList) -> Vec<u64> {
		list.cards().iter().map(|card| card.id().get()).collect()
	}

	#[tokio::test]
	async fn test_load_builds_cards_in_collection_order() {
		let (_api, _store, list) = loaded_list().await;

		assert_eq!(card_ids(&list), vec![1, 2, 3]);
		assert!(list.cards().iter().all(|card| !card.is_editing()));
		assert_eq!(list.card(PostId::new(2)).map(|c| c.title()), Some("qui est esse"));
	}

	#[tokio::test]
	async fn test_refresh_without_change_is_a_cheap_no_op() {
		let (_api, store, mut list) = loaded_list().await;

		assert!(!list.refresh(&store));
		assert_eq!(list.len(), 3);
	}

	#[tokio::test]
	async fn test_refresh_picks_up_a_synchronized_deletion() {
		let (_api, mut store, mut list) = loaded_list().await;

		apply_post_deletion(&mut store, PostId::new(2), UserId::new(1));

		assert!(list.refresh(&store));
		assert_eq!(card_ids(&list), vec![1, 3]);
		// A second refresh sees the same revision and does nothing.
		assert!(!list.refresh(&store));
	}

	#[tokio::test]
	async fn test_reconciliation_preserves_sibling_card_state() {
		let (_api, mut store, mut list) = loaded_list().await;
		let editing = list.card_mut(PostId::new(3)).expect("card should exist");
		editing.set_editing(true);
		editing.update_draft("mid-edit", "text");

		apply_post_deletion(&mut store, PostId::new(1), UserId::new(1));
		assert!(list.refresh(&store));

		assert_eq!(card_ids(&list), vec![2, 3]);
		let survivor = list.card(PostId::new(3)).expect("card should survive");
		match survivor.mode() {
			CardMode::Editing(draft) => assert_eq!(draft.title, "mid-edit"),
			CardMode::Viewing => panic!("the open edit should survive reconciliation"),
		}
	}

	#[tokio::test]
	async fn test_unsaved_card_survives_at_the_tail() {
		let (_api, mut store, mut list) = loaded_list().await;
		list.start_new().update_draft("drafting", "away");
		assert_eq!(list.len(), 4);

		apply_post_deletion(&mut store, PostId::new(2), UserId::new(1));
		assert!(list.refresh(&store));

		assert_eq!(card_ids(&list), vec![1, 3, PostId::UNSAVED.get()]);
		let tail = list.cards().last().expect("tail card should exist");
		assert!(tail.is_unsaved() && tail.is_editing());
	}

	#[tokio::test]
	async fn test_unreadable_entry_keeps_the_current_cards() {
		let (_api, mut store, mut list) = loaded_list().await;

		store.write_raw(PostsByUser::new(UserId::new(1)).key(), json!("scrambled"));

		assert!(!list.refresh(&store), "a broken entry must not clear the column");
		assert_eq!(card_ids(&list), vec![1, 2, 3]);
	}
}
