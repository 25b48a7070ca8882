use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Question {
    pub id: i64,
    #[serde(rename = "question")]
    pub prompt: String,
    pub options: Vec<String>,
    #[serde(rename = "answer")]
    pub correct_index: usize,
}

/// An immutable, validated set of quiz questions. Construction goes through
/// [`QuestionSet::parse`], so a value of this type always holds at least one
/// question and every answer index points at a real option.
#[derive(Debug, Clone, PartialEq)]
pub struct QuestionSet {
    pub test_id: String,
    pub title: String,
    pub questions: Vec<Question>,
}

impl QuestionSet {
    /// Parse the raw `content` payload of a mock test document. Authors
    /// paste this JSON by hand, so everything about it is suspect.
    pub fn parse(test_id: &str, title: &str, content: &str) -> Result<Self> {
        let questions: Vec<Question> = serde_json::from_str(content).map_err(|e| {
            Error::InvalidQuestionSet(format!(
                "Content of test '{}' is not a question array: {}",
                test_id, e
            ))
        })?;

        if questions.is_empty() {
            return Err(Error::InvalidQuestionSet(format!(
                "Test '{}' contains no questions",
                test_id
            )));
        }

        let mut seen = HashSet::new();
        for question in &questions {
            if question.options.len() < 2 {
                return Err(Error::InvalidQuestionSet(format!(
                    "Question {} has fewer than two options",
                    question.id
                )));
            }
            if question.correct_index >= question.options.len() {
                return Err(Error::InvalidQuestionSet(format!(
                    "Question {} marks answer {} but only has {} options",
                    question.id,
                    question.correct_index,
                    question.options.len()
                )));
            }
            if !seen.insert(question.id) {
                return Err(Error::InvalidQuestionSet(format!(
                    "Question id {} appears more than once",
                    question.id
                )));
            }
        }

        Ok(Self {
            test_id: test_id.to_string(),
            title: title.to_string(),
            questions,
        })
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn question(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }
}
