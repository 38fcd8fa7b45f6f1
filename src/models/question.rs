use serde::Deserialize;
use thiserror::Error;

/// A single multiple-choice question.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Question {
    #[serde(alias = "question")]
    pub prompt: String,
    pub options: Vec<String>,
    #[serde(alias = "answer")]
    pub correct_answer: String,
}

/// Why a question was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuestionError {
    #[error("prompt is empty")]
    EmptyPrompt,
    #[error("needs at least 2 options, found {0}")]
    TooFewOptions(usize),
    #[error("option {0:?} appears more than once")]
    DuplicateOption(String),
    #[error("correct answer {0:?} is not one of the options")]
    AnswerNotAnOption(String),
}

impl Question {
    pub fn new<S: Into<String>>(
        prompt: impl Into<String>,
        options: impl IntoIterator<Item = S>,
        correct_answer: impl Into<String>,
    ) -> Self {
        Self {
            prompt: prompt.into(),
            options: options.into_iter().map(Into::into).collect(),
            correct_answer: correct_answer.into(),
        }
    }

    pub fn validate(&self) -> Result<(), QuestionError> {
        if self.prompt.trim().is_empty() {
            return Err(QuestionError::EmptyPrompt);
        }
        if self.options.len() < 2 {
            return Err(QuestionError::TooFewOptions(self.options.len()));
        }
        for (i, option) in self.options.iter().enumerate() {
            if self.options[..i].contains(option) {
                return Err(QuestionError::DuplicateOption(option.clone()));
            }
        }
        if !self.has_option(&self.correct_answer) {
            return Err(QuestionError::AnswerNotAnOption(
                self.correct_answer.clone(),
            ));
        }
        Ok(())
    }

    pub fn has_option(&self, choice: &str) -> bool {
        self.options.iter().any(|option| option == choice)
    }

    pub fn is_correct(&self, choice: &str) -> bool {
        self.correct_answer == choice
    }
}
