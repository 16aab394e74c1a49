use alloc::string::{String, ToString};
use alloc::vec::Vec;
use jeopardy_protocol::{CategoryId, CategoryRecord};

use crate::*;

/// Explicit cell address: `category` is the column, `clue` the row.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClueTag {
    pub category: usize,
    pub clue: usize,
}

impl ClueTag {
    pub const fn new(category: usize, clue: usize) -> Self {
        Self { category, clue }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Category {
    title: String,
    clues: Vec<Clue>,
}

impl Category {
    pub fn new(title: impl Into<String>, clues: Vec<Clue>) -> Self {
        Self {
            title: title.into(),
            clues,
        }
    }

    /// Normalizes a remote record, keeping the first `clue_count` clues that have both question and
    /// answer text.
    pub fn from_record(
        id: CategoryId,
        record: CategoryRecord,
        clue_count: usize,
    ) -> TriviaResult<Self> {
        let available = record.clues.len();
        let clues: Vec<Clue> = record
            .clues
            .into_iter()
            .filter_map(|clue| {
                let question = clue.question.filter(|text| !text.trim().is_empty())?;
                let answer = clue.answer.filter(|text| !text.trim().is_empty())?;
                Some(Clue::new(question.trim(), answer.trim()))
            })
            .take(clue_count)
            .collect();

        if clues.len() < clue_count {
            return Err(TriviaError::IncompleteCategory {
                id,
                usable: clues.len(),
                needed: clue_count,
            });
        }

        if available > clues.len() {
            log::trace!(
                "category {}: kept {} of {} clues",
                id,
                clues.len(),
                available
            );
        }

        Ok(Self::new(record.title.trim().to_string(), clues))
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn clues(&self) -> &[Clue] {
        &self.clues
    }
}

/// What a single board cell shows.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CellView<'a> {
    pub tag: ClueTag,
    pub showing: RevealState,
    pub text: &'a str,
}

/// The loaded categories. Always rectangular: every category has the same number of clues.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Board {
    categories: Vec<Category>,
}

impl Board {
    pub fn new(categories: Vec<Category>, config: GameConfig) -> Result<Self> {
        if categories.len() != config.categories
            || categories
                .iter()
                .any(|category| category.clues.len() != config.clues_per_category)
        {
            return Err(GameError::InvalidBoardShape);
        }
        Ok(Self { categories })
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn column_count(&self) -> usize {
        self.categories.len()
    }

    pub fn row_count(&self) -> usize {
        self.categories
            .first()
            .map_or(0, |category| category.clues.len())
    }

    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(Category::title)
    }

    pub fn clue(&self, tag: ClueTag) -> Option<&Clue> {
        self.categories.get(tag.category)?.clues.get(tag.clue)
    }

    fn clue_mut(&mut self, tag: ClueTag) -> Result<&mut Clue> {
        self.categories
            .get_mut(tag.category)
            .and_then(|category| category.clues.get_mut(tag.clue))
            .ok_or(GameError::InvalidTag {
                category: tag.category,
                clue: tag.clue,
            })
    }

    pub fn reveal(&mut self, tag: ClueTag) -> Result<RevealOutcome> {
        Ok(self.clue_mut(tag)?.reveal())
    }

    /// True when no clue has been revealed yet.
    pub fn is_pristine(&self) -> bool {
        self.categories
            .iter()
            .flat_map(|category| category.clues.iter())
            .all(|clue| clue.showing().is_hidden())
    }

    /// Row-major projection of the grid, one item per body row.
    pub fn rows(&self) -> impl Iterator<Item = Vec<CellView<'_>>> + '_ {
        (0..self.row_count()).map(move |row| {
            self.categories
                .iter()
                .enumerate()
                .map(|(col, category)| {
                    let clue = &category.clues[row];
                    CellView {
                        tag: ClueTag::new(col, row),
                        showing: clue.showing(),
                        text: clue.display_text(),
                    }
                })
                .collect()
        })
    }
}
