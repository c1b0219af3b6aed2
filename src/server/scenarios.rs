//! Canned scenario generators.
//!
//! Each generator is stateless and builds its feed fresh per request, so no
//! state leaks across requests. Three scenarios go through the feed model;
//! the broken one deliberately does not, keeping invalid XML out of the
//! well-formed types.

use chrono::Utc;

use crate::feed::{Author, Feed, Item};

fn fixture_author() -> Author {
    Author::new("Jane Doe", "editor@feeds.example.com")
}

/// Canonical happy-path feed: channel `pubDate` set to the current time, two
/// items with every field populated.
pub fn baseline() -> Feed {
    let now = Utc::now();
    let author = fixture_author();

    Feed {
        title: "Fixture feed".to_string(),
        link: "https://feeds.example.com/".to_string(),
        description: "A well-formed RSS 2.0 feed with every field populated".to_string(),
        author: author.clone(),
        created: Some(now),
        items: vec![
            Item {
                title: "Writing a zero-copy XML parser".to_string(),
                link: Some("https://feeds.example.com/posts/zero-copy-xml".to_string()),
                description: "Borrowed buffers and event-based parsing without allocation"
                    .to_string(),
                author: author.clone(),
                created: Some(now),
            },
            Item {
                title: "Benchmarking async runtime schedulers".to_string(),
                link: Some("https://feeds.example.com/posts/runtime-benchmarks".to_string()),
                description: "Measuring task wake-up latency under contention".to_string(),
                author,
                created: Some(now),
            },
        ],
    }
}

/// Spec-compliant but sparse feed: the channel and both items omit `created`,
/// so no `<pubDate>` appears anywhere. The channel link points at the
/// `/missing` path and the description differs from the baseline. A robust
/// client must still parse this.
pub fn missing_fields() -> Feed {
    let author = fixture_author();

    Feed {
        title: "Fixture feed".to_string(),
        link: "https://feeds.example.com/missing".to_string(),
        description: "A sparse feed omitting every optional pubDate".to_string(),
        author: author.clone(),
        created: None,
        items: vec![
            Item {
                title: "Writing a zero-copy XML parser".to_string(),
                link: Some("https://feeds.example.com/posts/zero-copy-xml".to_string()),
                description: "Borrowed buffers and event-based parsing without allocation"
                    .to_string(),
                author: author.clone(),
                created: None,
            },
            Item {
                title: "Benchmarking async runtime schedulers".to_string(),
                link: Some("https://feeds.example.com/posts/runtime-benchmarks".to_string()),
                description: String::new(),
                author,
                created: None,
            },
        ],
    }
}

/// Truncated document: opens `<rss>`, `<channel>`, and a single `<item>` and
/// never closes any of them. Kept as a literal rather than a feed-model
/// variant so the model never has to represent invalid states. The `pubDate`
/// is hard-coded so the response is byte-stable across requests.
pub const BROKEN_RSS: &str = r#"<?xml version="1.0" encoding="UTF-8"?><rss version="2.0">
  <channel>
    <title>Fixture feed</title>
    <link>https://feeds.example.com/</link>
    <description>A truncated RSS 2.0 document</description>
    <managingEditor>editor@feeds.example.com (Jane Doe)</managingEditor>
    <pubDate>Fri, 9 Aug 2024 10:30:00 +0000</pubDate>
    <item>"#;
