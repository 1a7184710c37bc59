//! Unsaved edit state for a post's editable fields.

/// A local, unsaved shadow of a post's title and body.
///
/// A draft belongs to exactly one editing card and is never visible to other
/// components: cancelling discards it, saving replaces the committed values
/// with it. There is deliberately no validation here; empty titles and
/// bodies are accepted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
	/// Working title text.
	pub title: String,
	/// Working body text.
	pub body: String,
}

impl Draft {
	/// Creates an empty draft, as used by a newly created post.
	#[must_use]
	pub fn empty() -> Self {
		Self::default()
	}

	/// Creates a draft seeded from the committed field values.
	#[must_use]
	pub fn seeded(title: &str, body: &str) -> Self {
		Self {
			title: title.to_string(),
			body: body.to_string(),
		}
	}

	/// Replaces both working fields.
	pub fn set(&mut self, title: impl Into<String>, body: impl Into<String>) {
		self.title = title.into();
		self.body = body.into();
	}
}
