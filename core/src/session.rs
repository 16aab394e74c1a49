use crate::*;

/// Identifies one load request; only the latest one may commit a board.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Generation(u64);

/// Visual mode of the board and its start control.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    /// Nothing has been loaded yet.
    #[default]
    Ready,
    Loading,
    Idle,
    Failed(TriviaError),
}

impl Phase {
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub const fn control_label(&self) -> &'static str {
        match self {
            Self::Ready => "Start",
            Self::Loading => "Loading...",
            Self::Idle => "Restart",
            Self::Failed(_) => "Retry",
        }
    }

    pub const fn control_enabled(&self) -> bool {
        !self.is_loading()
    }

    pub const fn error(&self) -> Option<&TriviaError> {
        match self {
            Self::Failed(err) => Some(err),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoadOutcome {
    Committed,
    Failed,
    /// A newer load was started since this one, the result was dropped.
    Stale,
}

impl LoadOutcome {
    pub const fn has_update(&self) -> bool {
        !matches!(self, Self::Stale)
    }
}

/// Game state owned by the front-end: the board, the current phase and the load generation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GameSession {
    config: GameConfig,
    board: Board,
    phase: Phase,
    generation: Generation,
}

impl GameSession {
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Clears the board and enters [`Phase::Loading`], invalidating every earlier load.
    pub fn begin_load(&mut self) -> Generation {
        self.generation.0 += 1;
        self.board = Board::default();
        self.phase = Phase::Loading;
        log::debug!("begin load #{}", self.generation.0);
        self.generation
    }

    pub fn finish_load(
        &mut self,
        generation: Generation,
        result: TriviaResult<Board>,
    ) -> LoadOutcome {
        if generation != self.generation {
            log::warn!(
                "dropping result of load #{}, latest is #{}",
                generation.0,
                self.generation.0
            );
            return LoadOutcome::Stale;
        }

        match result {
            Ok(board) => {
                log::debug!("load #{} committed", generation.0);
                self.board = board;
                self.phase = Phase::Idle;
                LoadOutcome::Committed
            }
            Err(err) => {
                log::error!("load #{} failed: {}", generation.0, err);
                self.board = Board::default();
                self.phase = Phase::Failed(err);
                LoadOutcome::Failed
            }
        }
    }

    pub fn reveal(&mut self, tag: ClueTag) -> Result<RevealOutcome> {
        self.board.reveal(tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::tests::board;
    use crate::source::tests::{FakeSource, block_on};
    use alloc::borrow::ToOwned;
    use alloc::vec::Vec;

    fn start(session: &mut GameSession, source: &FakeSource) -> LoadOutcome {
        let generation = session.begin_load();
        let result = block_on(load_board(source, session.config()));
        session.finish_load(generation, result)
    }

    #[test]
    fn control_follows_phase() {
        let mut session = GameSession::default();
        assert_eq!(session.phase().control_label(), "Start");

        session.begin_load();
        assert!(session.phase().is_loading());
        assert!(!session.phase().control_enabled());
        assert_eq!(session.phase().control_label(), "Loading...");

        let generation = session.generation();
        session.finish_load(generation, Ok(board()));
        assert!(session.phase().control_enabled());
        assert_eq!(session.phase().control_label(), "Restart");
    }

    #[test]
    fn begin_load_clears_board_and_is_idempotent() {
        let mut session = GameSession::default();
        let generation = session.begin_load();
        session.finish_load(generation, Ok(board()));

        session.begin_load();
        session.begin_load();

        assert!(session.board().is_empty());
        assert_eq!(*session.phase(), Phase::Loading);
    }

    #[test]
    fn scenario_reveals_question_then_answer() {
        let source = FakeSource::scenario();
        let mut session = GameSession::default();

        assert_eq!(start(&mut session, &source), LoadOutcome::Committed);

        let board = session.board();
        assert_eq!(board.titles().count(), 6);
        assert_eq!(board.rows().count(), 5);
        assert!(board.rows().flatten().all(|cell| cell.text == PLACEHOLDER));

        let tag = ClueTag::new(0, 0);
        let text = |session: &GameSession| {
            session.board().clue(tag).unwrap().display_text().to_owned()
        };

        assert_eq!(session.reveal(tag), Ok(RevealOutcome::ShowedQuestion));
        assert_eq!(text(&session), "title 10 question 0");
        assert_eq!(session.reveal(tag), Ok(RevealOutcome::ShowedAnswer));
        assert_eq!(text(&session), "title 10 answer 0");
        assert_eq!(session.reveal(tag), Ok(RevealOutcome::NoChange));
        assert_eq!(text(&session), "title 10 answer 0");
    }

    #[test]
    fn restart_replaces_revealed_board_with_fresh_one() {
        let source = FakeSource::scenario();
        let mut session = GameSession::default();
        start(&mut session, &source);
        session.reveal(ClueTag::new(3, 2)).unwrap();
        session.reveal(ClueTag::new(3, 2)).unwrap();
        session.reveal(ClueTag::new(5, 4)).unwrap();
        assert!(!session.board().is_pristine());

        for _ in 0..3 {
            assert_eq!(start(&mut session, &source), LoadOutcome::Committed);
            assert!(session.board().is_pristine());
            assert_eq!(session.board().column_count(), 6);
            assert_eq!(session.board().row_count(), 5);
        }
    }

    #[test]
    fn stale_load_is_discarded() {
        let mut session = GameSession::default();
        let first = session.begin_load();
        let second = session.begin_load();

        assert_eq!(session.finish_load(first, Ok(board())), LoadOutcome::Stale);
        assert!(session.board().is_empty());
        assert!(session.phase().is_loading());

        assert_eq!(session.finish_load(second, Ok(board())), LoadOutcome::Committed);
        assert_eq!(*session.phase(), Phase::Idle);

        // a late result for an old generation must not replace the live board
        session.reveal(ClueTag::new(0, 0)).unwrap();
        assert_eq!(session.finish_load(first, Ok(board())), LoadOutcome::Stale);
        assert!(!session.board().is_pristine());
    }

    #[test]
    fn failed_load_surfaces_error() {
        let source = FakeSource::default();
        let mut session = GameSession::default();

        assert_eq!(start(&mut session, &source), LoadOutcome::Failed);

        assert!(session.board().is_empty());
        assert_eq!(session.phase().control_label(), "Retry");
        assert!(session.phase().control_enabled());
        assert!(matches!(
            session.phase().error(),
            Some(TriviaError::Transport(_))
        ));
    }

    #[test]
    fn clicks_against_cleared_board_are_rejected() {
        let source = FakeSource::scenario();
        let mut session = GameSession::default();
        start(&mut session, &source);
        session.begin_load();

        let outcomes: Vec<_> = [ClueTag::new(0, 0), ClueTag::new(5, 4)]
            .into_iter()
            .map(|tag| session.reveal(tag))
            .collect();

        assert!(outcomes.iter().all(Result::is_err));
    }
}
