//! Gazette demo binary.
//!
//! Runs a scripted session against the in-memory API: open a user's page,
//! edit a card, delete from the list and from a detail page, and print the
//! cache state each step leaves behind. Turn the log filter up (`--log
//! debug` or `RUST_LOG=gazette_cache=trace`) to watch the entry rewrites.

use clap::Parser;
use gazette_board::{PostPage, RouteLog, UserPage, submit_delete};
use gazette_cache::MemoryStore;
use gazette_client::{MemoryApi, loader};
use gazette_model::{PostId, UserId};
use tracing::info;

/// Demo command line arguments.
#[derive(Parser, Debug)]
#[command(name = "gazette")]
#[command(about = "Scripted tour of the gazette list/detail core")]
struct Args {
	/// User whose page the session opens
	#[arg(short, long, default_value_t = 1)]
	user: u64,

	/// Log filter directives, e.g. `debug` or `gazette_cache=trace`
	#[arg(short, long, default_value = "info")]
	log: String,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
	let args = Args::parse();
	setup_tracing(&args.log);

	let api = MemoryApi::seeded();
	let mut store = MemoryStore::new();
	let mut nav = RouteLog::new();
	let user = UserId::new(args.user);

	info!(user = %user, "Opening user page");
	let mut page = UserPage::open(&api, &mut store, user).await?;
	println!("{} (@{})", page.user().name, page.user().username);
	print_cards(&page);

	let ids: Vec<PostId> = page.posts().cards().iter().map(|card| card.id()).collect();
	let Some(&edit_id) = ids.first() else {
		anyhow::bail!("user {user} has no posts to walk through");
	};

	// Edit the first card and commit the draft.
	if let Some(card) = page.posts_mut().card_mut(edit_id) {
		card.set_editing(true);
		let title = format!("{} [edited]", card.title());
		let body = card.body().to_owned();
		card.update_draft(title, body);
		card.save();
		info!(post = %edit_id, "Edit committed");
	}

	// Open an edit on the second card, then walk away from it.
	if let Some(&cancel_id) = ids.get(1)
		&& let Some(card) = page.posts_mut().card_mut(cancel_id)
	{
		card.set_editing(true);
		card.update_draft("a draft nobody will see", "discarded on cancel");
		card.set_editing(false);
		info!(post = %cancel_id, "Edit cancelled, draft discarded");
	}

	// Delete the last card from the list and watch the entry rewrite.
	if let Some(&victim) = ids.last()
		&& let Some(ticket) = page.posts_mut().card_mut(victim).and_then(|card| card.begin_delete())
	{
		let report = submit_delete(ticket, &api, &mut store, &mut nav).await?;
		info!(deleted = %report.deleted.id, sync = ?report.sync, "List delete completed");
		page.posts_mut().refresh(&store);
		print_cards(&page);
	}

	// Visit a detail page and delete from there; the route falls back to
	// the owner's posts.
	let remaining = loader::cached_posts(&store, user).unwrap_or_default();
	if let Some(post) = remaining.first() {
		let mut detail = PostPage::open(&api, &mut store, post).await?;
		println!("--- {} ---", detail.card().title());
		for comment in detail.comments() {
			println!("    {} | {}", comment.email, comment.body);
		}

		if let Some(ticket) = detail.card_mut().begin_delete() {
			let report = submit_delete(ticket, &api, &mut store, &mut nav).await?;
			info!(deleted = %report.deleted.id, sync = ?report.sync, "Detail delete completed");
			if let Some(route) = report.navigated {
				println!("navigated to {route}");
			}
		}
		page.posts_mut().refresh(&store);
		print_cards(&page);
	}

	println!("cache entries:");
	let mut keys: Vec<String> = store.keys().map(|key| key.to_string()).collect();
	keys.sort();
	for key in keys {
		println!("    {key}");
	}

	Ok(())
}

fn print_cards(page: &UserPage) {
	println!("posts of {}:", page.user().name);
	for card in page.posts().cards() {
		println!("    [{}] {}", card.id(), card.title());
	}
}

fn setup_tracing(directives: &str) {
	use tracing_subscriber::EnvFilter;

	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directives));
	tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();
}
