//! End-to-end coverage of the delete flow: card, mutation, cache
//! synchronization, reconciliation, and navigation working together.

use gazette_board::{PostList, PostPage, Route, RouteLog, UserPage, submit_delete};
use gazette_cache::{CollectionStore, MemoryStore};
use gazette_client::{ApiError, MemoryApi, PostsByUser, SyncOutcome, loader};
use gazette_model::{Post, PostId, UserId};
use serde_json::json;

#[tokio::test]
async fn test_list_delete_flows_through_without_a_refetch() {
	let api = MemoryApi::seeded();
	let mut store = MemoryStore::new();
	let mut nav = RouteLog::new();
	let mut page = UserPage::open(&api, &mut store, UserId::new(1)).await.expect("open should succeed");

	// A record added server-side after the load. If anything refetched,
	// it would surface in the cards below.
	api.insert_post(Post::new(PostId::new(80), UserId::new(1), "added later", "never fetched"));

	let ticket = page
		.posts_mut()
		.card_mut(PostId::new(2))
		.expect("card should exist")
		.begin_delete()
		.expect("ticket should issue");
	let report = submit_delete(ticket, &api, &mut store, &mut nav).await.expect("flow should succeed");
	assert_eq!(report.sync, SyncOutcome::Updated { removed: 1 });

	assert!(page.posts_mut().refresh(&store), "the rewrite should be visible");
	let ids: Vec<u64> = page.posts().cards().iter().map(|c| c.id().get()).collect();
	assert_eq!(ids, vec![1, 3], "deleted record gone, late arrival absent, order kept");
	assert_eq!(nav.current(), None, "list deletes do not navigate");
}

#[tokio::test]
async fn test_detail_delete_navigates_to_the_owner() {
	let api = MemoryApi::seeded();
	let mut store = MemoryStore::new();
	let mut nav = RouteLog::new();
	let posts = loader::fetch_posts(&api, &mut store, UserId::new(1)).await.expect("fetch should succeed");
	let mut page = PostPage::open(&api, &mut store, &posts[0]).await.expect("open should succeed");

	let ticket = page.card_mut().begin_delete().expect("ticket should issue");
	let report = submit_delete(ticket, &api, &mut store, &mut nav).await.expect("flow should succeed");

	assert_eq!(report.navigated, Some(Route::UserPosts(UserId::new(1))));
	assert_eq!(nav.current(), Some(Route::UserPosts(UserId::new(1))));

	// The page the route now points at reads the already-synchronized
	// entry; no fetch is needed to render it correctly.
	let cached = loader::cached_posts(&store, UserId::new(1)).expect("entry should remain cached");
	assert!(cached.iter().all(|p| p.id != PostId::new(1)));
}

#[tokio::test]
async fn test_failed_delete_changes_nothing_and_allows_retry() {
	let api = MemoryApi::seeded();
	let mut store = MemoryStore::new();
	let mut nav = RouteLog::new();
	let mut page = UserPage::open(&api, &mut store, UserId::new(1)).await.expect("open should succeed");
	let entry_before = store.revision(&PostsByUser::new(UserId::new(1)).key());
	api.fail_next_delete(ApiError::Server { status: 500 });

	let ticket = page
		.posts_mut()
		.card_mut(PostId::new(1))
		.expect("card should exist")
		.begin_delete()
		.expect("ticket should issue");
	let error = submit_delete(ticket, &api, &mut store, &mut nav).await.expect_err("flow should fail");
	assert!(matches!(error, ApiError::Server { status: 500 }));

	// Cache entry untouched, no navigation, record alive server-side.
	assert_eq!(store.revision(&PostsByUser::new(UserId::new(1)).key()), entry_before);
	assert!(!page.posts_mut().refresh(&store));
	assert_eq!(page.posts().len(), 3);
	assert_eq!(nav.current(), None);
	assert!(api.post(PostId::new(1)).is_some());

	// Acknowledging the failure re-arms the card and the retry lands.
	let card = page.posts_mut().card_mut(PostId::new(1)).expect("card should exist");
	card.delete_failed();
	let ticket = card.begin_delete().expect("retry ticket should issue");
	submit_delete(ticket, &api, &mut store, &mut nav).await.expect("retry should succeed");
	assert!(page.posts_mut().refresh(&store));
	assert_eq!(page.posts().len(), 2);
}

#[tokio::test]
async fn test_every_view_over_the_entry_sees_one_write() {
	let api = MemoryApi::seeded();
	let mut store = MemoryStore::new();
	let mut nav = RouteLog::new();

	// Two independent columns rendering the same cached collection.
	let mut first = PostList::new(UserId::new(1));
	first.load(&api, &mut store).await.expect("load should succeed");
	let mut second = PostList::new(UserId::new(1));
	second.load(&api, &mut store).await.expect("load should succeed");

	let ticket = first
		.card_mut(PostId::new(3))
		.expect("card should exist")
		.begin_delete()
		.expect("ticket should issue");
	submit_delete(ticket, &api, &mut store, &mut nav).await.expect("flow should succeed");

	assert!(first.refresh(&store));
	assert!(second.refresh(&store), "the sibling view reads the same rewrite");
	let ids = |list: &PostList| list.cards().iter().map(|c| c.id().get()).collect::<Vec<_>>();
	assert_eq!(ids(&first), vec![1, 2]);
	assert_eq!(ids(&second), vec![1, 2]);
	assert_eq!(store.len(), 1, "one entry serves both views");
}

#[tokio::test]
async fn test_corrupted_entry_degrades_to_stale_and_heals_on_reload() {
	let api = MemoryApi::seeded();
	let mut store = MemoryStore::new();
	let mut nav = RouteLog::new();
	let mut list = PostList::new(UserId::new(1));
	list.load(&api, &mut store).await.expect("load should succeed");

	// Something mangles the stored entry behind the list's back.
	store.write_raw(PostsByUser::new(UserId::new(1)).key(), json!({"not": "a collection"}));
	assert!(!list.refresh(&store), "unreadable data must not clear the column");
	assert_eq!(list.len(), 3);

	// The delete still runs; only the cache rewrite degrades.
	let ticket = list
		.card_mut(PostId::new(2))
		.expect("card should exist")
		.begin_delete()
		.expect("ticket should issue");
	let report = submit_delete(ticket, &api, &mut store, &mut nav).await.expect("flow should succeed");
	assert_eq!(report.sync, SyncOutcome::Unreadable);
	assert!(api.post(PostId::new(2)).is_none(), "the record is gone server-side");
	assert_eq!(list.len(), 3, "the stale column is still rendered");

	// The next load treats the broken entry as a miss, refetches, and the
	// collection self-corrects: the deleted record is gone from the server.
	list.load(&api, &mut store).await.expect("reload should succeed");
	let ids: Vec<u64> = list.cards().iter().map(|c| c.id().get()).collect();
	assert_eq!(ids, vec![1, 3]);
}

#[tokio::test]
async fn test_deleting_the_last_post_leaves_an_empty_collection() {
	let api = MemoryApi::new();
	api.insert_post(Post::new(PostId::new(10), UserId::new(5), "only one", "post"));
	let mut store = MemoryStore::new();
	let mut nav = RouteLog::new();
	let mut list = PostList::new(UserId::new(5));
	list.load(&api, &mut store).await.expect("load should succeed");
	assert_eq!(list.len(), 1);

	let ticket = list
		.card_mut(PostId::new(10))
		.expect("card should exist")
		.begin_delete()
		.expect("ticket should issue");
	let report = submit_delete(ticket, &api, &mut store, &mut nav).await.expect("flow should succeed");

	assert_eq!(report.sync, SyncOutcome::Updated { removed: 1 });
	assert!(list.refresh(&store));
	assert!(list.is_empty());
	// The entry itself survives as an empty collection, not a miss.
	assert_eq!(loader::cached_posts(&store, UserId::new(5)), Some(Vec::new()));
}
