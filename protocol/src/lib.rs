//! Wire records of the jservice trivia API.
//!
//! Only the fields the game consumes are declared, everything else in the
//! responses is ignored on decode.

use serde::Deserialize;

pub type CategoryId = u64;

pub const DEFAULT_API_BASE: &str = "https://jservice.io";
pub const CATEGORIES_PATH: &str = "/api/categories";
pub const CATEGORY_PATH: &str = "/api/category";

/// One entry of the `/api/categories` listing.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct CategorySummary {
    pub id: CategoryId,
    /// Number of clues the API holds for the category, some of which may be unusable.
    #[serde(default)]
    pub clues_count: Option<usize>,
}

/// Full `/api/category` record.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct CategoryRecord {
    pub title: String,
    #[serde(default)]
    pub clues: Vec<ClueRecord>,
}

/// The API has clues with `null` question or answer text, so both are optional here and
/// filtered during normalization.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ClueRecord {
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub answer: Option<String>,
}

fn trim_base(base: &str) -> &str {
    base.trim_end_matches('/')
}

pub fn categories_url(base: &str, count: usize, offset: u32) -> String {
    format!(
        "{}{}?count={}&offset={}",
        trim_base(base),
        CATEGORIES_PATH,
        count,
        offset
    )
}

pub fn category_url(base: &str, id: CategoryId) -> String {
    format!("{}{}?id={}", trim_base(base), CATEGORY_PATH, id)
}
