//! Catalog data model: raw records as served, normalised entries as rendered.

use serde::Deserialize;

use crate::error::MenuError;

pub const DEFAULT_AUTHOR: &str = "Unknown";
pub const DEFAULT_DESCRIPTION: &str = "No description";

/// One record of the remote catalog, as it appears in the JSON array.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct RawGameRecord {
    pub name: String,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub cover: String,
    pub url: String,
}

/// A normalised catalog entry. Immutable once loaded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameEntry {
    /// Slug derived from the name.
    pub id: String,
    pub name: String,
    pub author: String,
    pub description: String,
    pub cover_url: String,
    pub game_url: String,
    /// True when `game_url` uses an http(s) scheme.
    pub is_external: bool,
}

impl From<RawGameRecord> for GameEntry {
    fn from(raw: RawGameRecord) -> Self {
        let is_external = raw.url.starts_with("http");
        GameEntry {
            id: slugify(&raw.name),
            author: non_empty_or(raw.author, DEFAULT_AUTHOR),
            description: non_empty_or(raw.description, DEFAULT_DESCRIPTION),
            name: raw.name,
            cover_url: raw.cover,
            game_url: raw.url,
            is_external,
        }
    }
}

fn non_empty_or(value: Option<String>, fallback: &str) -> String {
    match value {
        Some(v) if !v.is_empty() => v,
        _ => fallback.to_string(),
    }
}

/// Collapses every whitespace run into a single `_` and lowercases the rest.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut in_space = false;
    for c in name.chars() {
        if c.is_whitespace() {
            if !in_space {
                slug.push('_');
                in_space = true;
            }
        } else {
            in_space = false;
            slug.extend(c.to_lowercase());
        }
    }
    slug
}

/// Parses the catalog body (a JSON array of records) into entries.
pub fn parse_catalog(text: &str) -> Result<Vec<GameEntry>, MenuError> {
    let records: Vec<RawGameRecord> = serde_json::from_str(text)?;
    Ok(records.into_iter().map(GameEntry::from).collect())
}

pub fn normalize_query(raw: &str) -> String {
    raw.to_lowercase().trim().to_string()
}

/// Case-insensitive substring match on the name, catalog order preserved.
/// An empty (or all-whitespace) query keeps everything.
pub fn filter_games(games: &[GameEntry], raw_query: &str) -> Vec<GameEntry> {
    let query = normalize_query(raw_query);
    if query.is_empty() {
        return games.to_vec();
    }
    games
        .iter()
        .filter(|g| g.name.to_lowercase().contains(&query))
        .cloned()
        .collect()
}

pub fn search_placeholder(loaded: Option<usize>) -> String {
    match loaded {
        Some(count) => format!("Search {count} games..."),
        None => "Search games...".to_string(),
    }
}
