use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::models::{Question, QuestionError};

/// Error returned when a question bank can't be loaded.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse questions: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("question bank must contain at least one question")]
    Empty,
    #[error("question {position} is invalid: {source}")]
    Invalid {
        position: usize,
        #[source]
        source: QuestionError,
    },
}

/// The built-in question bank.
pub fn default_questions() -> Vec<Question> {
    vec![
        Question::new(
            "What sound does a cat make?",
            ["Bhau-Bhau", "Meow-Meow", "Oink-Oink"],
            "Meow-Meow",
        ),
        Question::new(
            "What would you probably find in your fridge?",
            ["Shoes", "Ice Cream", "Books"],
            "Ice Cream",
        ),
        Question::new("What color are bananas?", ["Blue", "Yellow", "Red"], "Yellow"),
        Question::new(
            "How many stars are in the sky?",
            ["Two", "Infinite", "One Hundred"],
            "Infinite",
        ),
    ]
}

pub fn load_questions_from_json<P: AsRef<Path>>(path: P) -> Result<Vec<Question>, LoadError> {
    let path = path.as_ref();

    let json_content = fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let questions = parse_questions(&json_content)?;
    debug!(path = %path.display(), count = questions.len(), "loaded question bank");
    Ok(questions)
}

pub fn parse_questions(json: &str) -> Result<Vec<Question>, LoadError> {
    let questions: Vec<Question> = serde_json::from_str(json)?;
    validate_bank(&questions)?;
    Ok(questions)
}

pub fn validate_bank(questions: &[Question]) -> Result<(), LoadError> {
    if questions.is_empty() {
        return Err(LoadError::Empty);
    }

    for (index, question) in questions.iter().enumerate() {
        question.validate().map_err(|source| LoadError::Invalid {
            position: index + 1,
            source,
        })?;
    }

    Ok(())
}
