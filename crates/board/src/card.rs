//! The per-record card: an inline view/edit surface with a delete control.

use gazette_model::{Draft, Post, PostId, UserId};

/// Interaction mode of a card.
///
/// The draft lives inside the editing variant, so it exists exactly as long
/// as an edit is open. Leaving [`Editing`](CardMode::Editing) without a save
/// drops the draft with the variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardMode {
	/// Showing committed content; edit and delete controls are live.
	Viewing,
	/// An edit is open; the draft shadows the committed content.
	Editing(Draft),
}

/// One post rendered as an interactive card.
///
/// The card carries the only state its widget needs: committed content, the
/// current [`CardMode`], and whether a delete is awaiting the server. All
/// transitions are synchronous; the async part of a delete happens in
/// [`submit_delete`](crate::submit_delete) after [`begin_delete`] hands out
/// the ticket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostCard {
	id: PostId,
	owner: UserId,
	title: String,
	body: String,
	on_detail_page: bool,
	mode: CardMode,
	delete_pending: bool,
}

impl PostCard {
	/// Builds a viewing card for an existing record.
	pub fn from_post(post: &Post, on_detail_page: bool) -> Self {
		Self {
			id: post.id,
			owner: post.user_id,
			title: post.title.clone(),
			body: post.body.clone(),
			on_detail_page,
			mode: CardMode::Viewing,
			delete_pending: false,
		}
	}

	/// Builds a card for a record that does not exist yet.
	///
	/// New cards open directly in editing mode with an empty draft; there is
	/// no committed content to view.
	pub fn draft_new(owner: UserId) -> Self {
		Self {
			id: PostId::UNSAVED,
			owner,
			title: String::new(),
			body: String::new(),
			on_detail_page: false,
			mode: CardMode::Editing(Draft::empty()),
			delete_pending: false,
		}
	}

	pub fn id(&self) -> PostId {
		self.id
	}

	pub fn owner(&self) -> UserId {
		self.owner
	}

	/// Committed title, untouched by any open draft.
	pub fn title(&self) -> &str {
		&self.title
	}

	/// Committed body, untouched by any open draft.
	pub fn body(&self) -> &str {
		&self.body
	}

	pub fn mode(&self) -> &CardMode {
		&self.mode
	}

	pub fn is_editing(&self) -> bool {
		matches!(self.mode, CardMode::Editing(_))
	}

	/// `true` for a card created by [`draft_new`](Self::draft_new) that has
	/// never been committed.
	pub fn is_unsaved(&self) -> bool {
		self.id.is_unsaved()
	}

	pub fn on_detail_page(&self) -> bool {
		self.on_detail_page
	}

	/// `true` while a delete mutation is in flight for this card.
	pub fn delete_pending(&self) -> bool {
		self.delete_pending
	}

	/// Switches between viewing and editing.
	///
	/// Requesting the mode the card is already in changes nothing; in
	/// particular, a repeated `set_editing(true)` keeps the open draft
	/// rather than reseeding it. Entering edit mode seeds the draft from
	/// the committed content; leaving without a save discards it.
	pub fn set_editing(&mut self, editing: bool) {
		match (&self.mode, editing) {
			(CardMode::Viewing, true) => {
				self.mode = CardMode::Editing(Draft::seeded(&self.title, &self.body));
			}
			(CardMode::Editing(_), false) => {
				self.mode = CardMode::Viewing;
			}
			_ => {}
		}
	}

	/// Applies in-progress edits to the open draft.
	///
	/// Returns `false` without touching anything when no edit is open;
	/// a viewing card has no draft to write into. No shape or length rules
	/// are applied to the values.
	pub fn update_draft(&mut self, title: impl Into<String>, body: impl Into<String>) -> bool {
		match &mut self.mode {
			CardMode::Editing(draft) => {
				draft.set(title, body);
				true
			}
			CardMode::Viewing => false,
		}
	}

	/// Commits the open draft into the committed content and returns to
	/// viewing. Returns `false` when no edit was open.
	pub fn save(&mut self) -> bool {
		match std::mem::replace(&mut self.mode, CardMode::Viewing) {
			CardMode::Editing(draft) => {
				self.title = draft.title;
				self.body = draft.body;
				true
			}
			CardMode::Viewing => false,
		}
	}

	/// Overwrites the committed content from a fresh server copy.
	///
	/// An open draft keeps the user's text; the new content sits underneath
	/// it and loses to the draft on save.
	pub fn refresh_content(&mut self, post: &Post) {
		self.title = post.title.clone();
		self.body = post.body.clone();
	}

	/// Starts a delete, handing out the one ticket that can drive it.
	///
	/// Returns `None` (and changes nothing) while a delete is already in
	/// flight, while an edit is open, or for an unsaved card that has no
	/// server-side record to remove. A `Some` return flips the card into
	/// its pending state, so a second call cannot start a concurrent
	/// delete for the same card.
	pub fn begin_delete(&mut self) -> Option<DeleteTicket> {
		if self.delete_pending || self.is_editing() || self.is_unsaved() {
			return None;
		}
		self.delete_pending = true;
		Some(DeleteTicket {
			post: self.id,
			owner: self.owner,
			from_detail: self.on_detail_page,
		})
	}

	/// Re-enables the card after a failed delete mutation.
	pub fn delete_failed(&mut self) {
		self.delete_pending = false;
	}
}

/// Authorization to run one delete flow for one card.
///
/// Only [`PostCard::begin_delete`] creates tickets and each card hands out
/// at most one per attempt, so holding a ticket proves the card is gated.
/// The type is deliberately not `Clone`: consuming it in
/// [`submit_delete`](crate::submit_delete) uses the attempt up.
#[derive(Debug, PartialEq, Eq)]
pub struct DeleteTicket {
	post: PostId,
	owner: UserId,
	from_detail: bool,
}

impl DeleteTicket {
	/// The record the mutation will target.
	pub fn post(&self) -> PostId {
		self.post
	}

	/// Owner of the collection to synchronize afterwards.
	pub fn owner(&self) -> UserId {
		self.owner
	}

	/// Whether success must navigate away from a now-dead detail page.
	pub fn from_detail(&self) -> bool {
		self.from_detail
	}
}
