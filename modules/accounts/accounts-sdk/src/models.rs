//! Public models for the accounts module.
//!
//! These are transport-agnostic data structures shared by the loader, the
//! REST layer and in-process consumers. Wire and column encodings live next
//! to the code that needs them; the only encoding defined here is the one for
//! [`Tags`], because it is shared by storage and transport.

/// An account record.
///
/// `id` is the primary key and never changes after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub id: String,
    /// Formatted currency text, e.g. `"$1,234.56"`.
    pub balance: String,
    pub credit: i64,
    pub picture: String,
    pub name_first: String,
    pub name_last: String,
    pub employer: String,
    pub email: String,
    /// Kept as text so leading zeros and punctuation survive.
    pub phone: String,
    pub address: String,
    pub comments: String,
    pub created: String,
    pub tags: Tags,
}

/// Full replacement of every account field except the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountUpdate {
    pub balance: String,
    pub credit: i64,
    pub picture: String,
    pub name_first: String,
    pub name_last: String,
    pub employer: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub comments: String,
    pub created: String,
    pub tags: Tags,
}

impl Account {
    /// Build an account from an id and the remaining fields.
    #[must_use]
    pub fn from_update(id: String, fields: AccountUpdate) -> Self {
        Self {
            id,
            balance: fields.balance,
            credit: fields.credit,
            picture: fields.picture,
            name_first: fields.name_first,
            name_last: fields.name_last,
            employer: fields.employer,
            email: fields.email,
            phone: fields.phone,
            address: fields.address,
            comments: fields.comments,
            created: fields.created,
            tags: fields.tags,
        }
    }

    /// Overwrite every field except `id`.
    pub fn apply(&mut self, update: AccountUpdate) {
        let id = std::mem::take(&mut self.id);
        *self = Self::from_update(id, update);
    }
}

/// Ordered list of account tags.
///
/// The canonical text form is the compact JSON array encoding
/// (`["a","b"]`). It round-trips exactly, so element boundaries survive
/// storage and transport.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Tags(Vec<String>);

impl Tags {
    #[must_use]
    pub fn new(tags: Vec<String>) -> Self {
        Self(tags)
    }

    /// Compact JSON array text, e.g. `["id","quis"]`.
    #[must_use]
    pub fn encode(&self) -> String {
        // A Vec<String> always serializes.
        serde_json::to_string(&self.0).unwrap_or_else(|_| String::from("[]"))
    }

    /// Parse the JSON array text produced by [`Tags::encode`].
    ///
    /// # Errors
    /// Returns an error if `text` is not a JSON array of strings.
    pub fn decode(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<Vec<String>>(text).map(Self)
    }
}

impl From<Vec<String>> for Tags {
    fn from(tags: Vec<String>) -> Self {
        Self(tags)
    }
}

impl<S: Into<String>> FromIterator<S> for Tags {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}
