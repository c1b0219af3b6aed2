use chrono::{DateTime, Utc};

/// Author of a channel or item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    pub name: String,
    pub email: String,
}

impl Author {
    pub fn new(name: &str, email: &str) -> Self {
        Self {
            name: name.to_string(),
            email: email.to_string(),
        }
    }

    /// RSS 2.0 editor format: `email (name)`.
    pub fn as_editor(&self) -> String {
        format!("{} ({})", self.email, self.name)
    }
}

/// In-memory representation of an RSS channel.
///
/// `title`, `link`, `description`, and `author` are present in every scenario
/// that uses the model; `created` is optional so a scenario can deliberately
/// omit the channel `<pubDate>`.
#[derive(Debug, Clone)]
pub struct Feed {
    pub title: String,
    pub link: String,
    pub description: String,
    pub author: Author,
    pub created: Option<DateTime<Utc>>,
    /// Items render in insertion order; order is significant in the output.
    pub items: Vec<Item>,
}

/// A single channel entry.
#[derive(Debug, Clone)]
pub struct Item {
    pub title: String,
    pub link: Option<String>,
    /// May be empty; an empty description still renders as an element.
    pub description: String,
    pub author: Author,
    pub created: Option<DateTime<Utc>>,
}
