use std::sync::Arc;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::models::question::{Question, QuestionSet};

/// Where a quiz attempt currently stands. The two variants are the only
/// shapes a session can take, so "answered but finished" states cannot be
/// represented at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizState {
    InProgress {
        current: usize,
        selected: Option<usize>,
        score: u32,
    },
    Finished {
        score: u32,
        total: usize,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResultSummary {
    pub score: u32,
    pub total: usize,
    pub percentage: u32,
}

#[derive(Debug, Clone)]
pub struct QuizSession {
    set: Arc<QuestionSet>,
    state: QuizState,
}

impl QuizSession {
    pub fn new(set: Arc<QuestionSet>) -> Self {
        debug_assert!(!set.is_empty(), "loader never hands out an empty set");
        Self {
            set,
            state: QuizState::InProgress {
                current: 0,
                selected: None,
                score: 0,
            },
        }
    }

    pub fn question_set(&self) -> &Arc<QuestionSet> {
        &self.set
    }

    pub fn state(&self) -> &QuizState {
        &self.state
    }

    pub fn current_question(&self) -> Option<(usize, &Question)> {
        match self.state {
            QuizState::InProgress { current, .. } => {
                self.set.question(current).map(|q| (current, q))
            }
            QuizState::Finished { .. } => None,
        }
    }

    /// Record an answer choice for the current question. Re-selecting
    /// replaces the previous choice until the question is advanced past.
    pub fn select(&mut self, option: usize) -> Result<()> {
        let option_count = match self.state {
            QuizState::InProgress { current, .. } => {
                self.set.question(current).map_or(0, |q| q.options.len())
            }
            QuizState::Finished { .. } => {
                return Err(Error::Precondition(
                    "Cannot select an option on a finished quiz".to_string(),
                ))
            }
        };

        if option >= option_count {
            return Err(Error::Precondition(format!(
                "Option {} is out of range for a question with {} options",
                option, option_count
            )));
        }

        if let QuizState::InProgress { selected, .. } = &mut self.state {
            *selected = Some(option);
        }
        Ok(())
    }

    /// Grade the current selection and move on. The last question moves the
    /// session to `Finished` instead of past the end of the set.
    pub fn advance(&mut self) -> Result<&QuizState> {
        let (current, selected, score) = match self.state {
            QuizState::InProgress {
                current,
                selected,
                score,
            } => (current, selected, score),
            QuizState::Finished { .. } => {
                return Err(Error::Precondition(
                    "Cannot advance a finished quiz".to_string(),
                ))
            }
        };

        let Some(selected) = selected else {
            return Err(Error::Precondition(
                "Cannot advance before an option is selected".to_string(),
            ));
        };

        let correct = self
            .set
            .question(current)
            .map_or(false, |q| q.correct_index == selected);
        let score = if correct { score + 1 } else { score };

        let next = current + 1;
        self.state = if next == self.set.len() {
            QuizState::Finished {
                score,
                total: self.set.len(),
            }
        } else {
            QuizState::InProgress {
                current: next,
                selected: None,
                score,
            }
        };

        Ok(&self.state)
    }

    /// Start over on the same question set. No reload happens here, the
    /// existing `Arc<QuestionSet>` is reused as-is.
    pub fn restart(&mut self) {
        self.state = QuizState::InProgress {
            current: 0,
            selected: None,
            score: 0,
        };
    }

    /// Fraction of the quiz completed, in `[0.0, 1.0]`.
    pub fn progress(&self) -> f64 {
        match self.state {
            QuizState::InProgress { current, .. } => current as f64 / self.set.len() as f64,
            QuizState::Finished { .. } => 1.0,
        }
    }

    /// Only available once the quiz is finished.
    pub fn summary(&self) -> Option<ResultSummary> {
        match self.state {
            QuizState::Finished { score, total } => Some(ResultSummary {
                score,
                total,
                percentage: ((score as f64 / total as f64) * 100.0).round() as u32,
            }),
            QuizState::InProgress { .. } => None,
        }
    }
}
