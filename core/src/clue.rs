use alloc::string::String;

/// Text shown on a cell that has not been revealed yet.
pub const PLACEHOLDER: &str = "?";

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum RevealState {
    #[default]
    Hidden,
    Question,
    Answer,
}

impl RevealState {
    pub const fn is_hidden(self) -> bool {
        matches!(self, Self::Hidden)
    }

    /// Next state in the `Hidden -> Question -> Answer` progression, `Answer` is terminal.
    pub const fn next(self) -> Self {
        use RevealState::*;
        match self {
            Hidden => Question,
            Question | Answer => Answer,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    NoChange,
    ShowedQuestion,
    ShowedAnswer,
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Clue {
    question: String,
    answer: String,
    showing: RevealState,
}

impl Clue {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
            showing: RevealState::Hidden,
        }
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    pub fn showing(&self) -> RevealState {
        self.showing
    }

    pub fn display_text(&self) -> &str {
        use RevealState::*;
        match self.showing {
            Hidden => PLACEHOLDER,
            Question => &self.question,
            Answer => &self.answer,
        }
    }

    pub fn reveal(&mut self) -> RevealOutcome {
        let next = self.showing.next();
        if next == self.showing {
            return RevealOutcome::NoChange;
        }
        self.showing = next;
        match next {
            RevealState::Question => RevealOutcome::ShowedQuestion,
            _ => RevealOutcome::ShowedAnswer,
        }
    }
}
