use anyhow::Result;
use feed_rs::parser;
use sha2::{Digest, Sha256};

/// A single item parsed out of a feed.
///
/// The guid is taken from the feed when present, otherwise derived by
/// hashing link, title, and publish time, so two parses of the same item
/// agree on identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub guid: String,
    pub title: String,
    pub link: Option<String>,
    pub published: Option<i64>,
    pub summary: Option<String>,
}

/// Parse RSS/Atom bytes into entries, in document order.
pub fn parse_entries(bytes: &[u8]) -> Result<Vec<Entry>> {
    let feed = parser::parse(bytes)?;

    let entries: Vec<Entry> = feed
        .entries
        .into_iter()
        .map(|entry| {
            let link = entry.links.first().map(|l| l.href.clone());
            let published = entry.published.or(entry.updated).map(|dt| dt.timestamp());
            let summary = entry
                .summary
                .map(|s| s.content)
                .or_else(|| entry.content.and_then(|c| c.body));
            let title = entry
                .title
                .map(|t| t.content)
                .unwrap_or_else(|| "Untitled".to_string());

            let existing_id = if entry.id.is_empty() {
                None
            } else {
                Some(entry.id.as_str())
            };
            let guid = generate_guid(existing_id, link.as_deref(), &title, published);

            Entry {
                guid,
                title,
                link,
                published,
                summary,
            }
        })
        .collect();

    Ok(entries)
}

fn generate_guid(
    existing: Option<&str>,
    link: Option<&str>,
    title: &str,
    published: Option<i64>,
) -> String {
    if let Some(guid) = existing {
        let trimmed = guid.trim();
        if !trimmed.is_empty() {
            return trimmed.to_string();
        }
    }

    let input = format!(
        "{}|{}|{}",
        link.unwrap_or(""),
        title,
        published.map(|p| p.to_string()).unwrap_or_default()
    );
    let hash = Sha256::digest(input.as_bytes());
    format!("{:x}", hash)
}
