use alloc::vec::Vec;
use futures_util::future::try_join_all;
use jeopardy_protocol::{CategoryId, CategoryRecord, CategorySummary};

use crate::*;

/// How many listing entries are requested per board column, so that short categories can be
/// skipped without a second request.
pub const LISTING_OVERSAMPLE: usize = 3;

/// Remote supplier of trivia data.
#[allow(async_fn_in_trait)]
pub trait TriviaSource {
    /// Random sample of `count` category summaries.
    async fn category_listing(&self, count: usize) -> TriviaResult<Vec<CategorySummary>>;

    async fn category(&self, id: CategoryId) -> TriviaResult<CategoryRecord>;
}

/// Keeps the first `config.categories` ids whose advertised clue count can fill a column.
/// Summaries without a clue count are kept.
pub fn pick_category_ids(
    listing: &[CategorySummary],
    config: GameConfig,
) -> TriviaResult<Vec<CategoryId>> {
    let ids: Vec<CategoryId> = listing
        .iter()
        .filter(|summary| {
            summary
                .clues_count
                .is_none_or(|count| count >= config.clues_per_category)
        })
        .map(|summary| summary.id)
        .take(config.categories)
        .collect();

    if ids.len() < config.categories {
        return Err(TriviaError::TooFewCategories {
            expected: config.categories,
            got: ids.len(),
        });
    }
    Ok(ids)
}

/// Fetches a full board: the category listing once, then every picked category concurrently.
///
/// The categories keep the order of the listing regardless of which request finishes first. Any
/// failure aborts the whole load.
pub async fn load_board<S: TriviaSource>(source: &S, config: GameConfig) -> TriviaResult<Board> {
    let listing = source
        .category_listing(config.categories * LISTING_OVERSAMPLE)
        .await?;
    let ids = pick_category_ids(&listing, config)?;
    log::debug!("category ids: {:?} (from {} listed)", ids, listing.len());

    let categories = try_join_all(ids.into_iter().map(|id| async move {
        let record = source.category(id).await?;
        Category::from_record(id, record, config.clues_per_category)
    }))
    .await?;

    Ok(Board::new(categories, config)?)
}
