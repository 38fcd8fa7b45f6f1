mod question;
mod session;

pub use question::{Question, QuestionError};
pub use session::QuizSession;

/// Where the quiz currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizState {
    /// Viewing the question at this 0-based index.
    InProgress(usize),
    /// Every question has been committed.
    Finished,
}
