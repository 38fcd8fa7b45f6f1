use thiserror::Error;
use tracing::{debug, info, warn};

use crate::data::{LoadError, default_questions, validate_bank};
use crate::models::{Question, QuizSession, QuizState};

/// Why a selection was refused. State is left untouched in every case.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectError {
    #[error("{choice:?} is not an option of question {question}")]
    UnknownOption { choice: String, question: usize },
    #[error("question {question} has no option at position {position}")]
    OutOfRange { position: usize, question: usize },
    #[error("the quiz is finished")]
    Finished,
}

/// Owns the question bank and the one session played over it.
///
/// All mutation goes through [`select_option`](Self::select_option),
/// [`advance`](Self::advance), [`retreat`](Self::retreat) and
/// [`restart`](Self::restart). Each runs to completion, so the session is
/// never observed half-updated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizController {
    questions: Vec<Question>,
    session: QuizSession,
    current_selection: Option<String>,
}

impl QuizController {
    /// Controller over the built-in question bank.
    pub fn new() -> Self {
        Self::from_valid_bank(default_questions())
    }

    /// Controller over a custom bank, rejected if it is empty or any
    /// question is malformed.
    pub fn with_questions(questions: Vec<Question>) -> Result<Self, LoadError> {
        validate_bank(&questions)?;
        Ok(Self::from_valid_bank(questions))
    }

    fn from_valid_bank(questions: Vec<Question>) -> Self {
        let session = QuizSession::new(questions.len());

        Self {
            questions,
            session,
            current_selection: None,
        }
    }

    pub fn state(&self) -> QuizState {
        self.session.state()
    }

    pub fn is_finished(&self) -> bool {
        self.session.finished
    }

    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn answers(&self) -> &[Option<String>] {
        &self.session.selected_answers
    }

    pub fn current_question(&self) -> &Question {
        &self.questions[self.session.question_index]
    }

    pub fn current_question_index(&self) -> usize {
        self.session.question_index
    }

    pub fn current_question_number(&self) -> usize {
        self.session.question_index + 1
    }

    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    pub fn current_selection(&self) -> Option<&str> {
        self.current_selection.as_deref()
    }

    /// Fraction of the bank reached, counting the question on screen.
    pub fn progress_ratio(&self) -> f64 {
        if self.session.finished {
            return 1.0;
        }
        self.current_question_number() as f64 / self.total_questions() as f64
    }

    pub fn can_retreat(&self) -> bool {
        !self.session.finished && self.session.question_index > 0
    }

    pub fn can_advance(&self) -> bool {
        !self.session.finished && self.current_selection.is_some()
    }

    /// Highlight `choice` for the current question without committing it.
    pub fn select_option(&mut self, choice: &str) -> Result<(), SelectError> {
        if self.session.finished {
            warn!(choice, "selection ignored, quiz is finished");
            return Err(SelectError::Finished);
        }
        if !self.current_question().has_option(choice) {
            warn!(choice, question = self.current_question_number(), "unknown option");
            return Err(SelectError::UnknownOption {
                choice: choice.to_string(),
                question: self.current_question_number(),
            });
        }

        if self.current_selection.as_deref() != Some(choice) {
            debug!(choice, question = self.current_question_number(), "option selected");
            self.current_selection = Some(choice.to_string());
        }
        Ok(())
    }

    /// Select by 0-based position in the current question's options.
    pub fn select_option_at(&mut self, position: usize) -> Result<(), SelectError> {
        if self.session.finished {
            return Err(SelectError::Finished);
        }
        let Some(choice) = self.current_question().options.get(position).cloned() else {
            return Err(SelectError::OutOfRange {
                position,
                question: self.current_question_number(),
            });
        };
        self.select_option(&choice)
    }

    /// Move the highlight `step` options forward (negative for backward),
    /// wrapping around. With nothing selected, forward starts at the first
    /// option and backward at the last.
    pub fn cycle_selection(&mut self, step: isize) {
        if self.session.finished || step == 0 {
            return;
        }

        let options = &self.current_question().options;
        let len = options.len() as isize;
        let position = match self.current_selection() {
            Some(choice) => {
                let current = options
                    .iter()
                    .position(|option| option == choice)
                    .unwrap_or(0) as isize;
                (current + step).rem_euclid(len)
            }
            None if step > 0 => (step - 1).rem_euclid(len),
            None => (len + step).rem_euclid(len),
        };

        // position is always within bounds here
        let _ = self.select_option_at(position as usize);
    }

    /// Commit the current selection and move on. Returns `false` without
    /// touching anything if there is nothing to commit.
    pub fn advance(&mut self) -> bool {
        if self.session.finished {
            return false;
        }
        let Some(choice) = self.current_selection.take() else {
            return false;
        };

        let index = self.session.question_index;
        debug!(
            question = index + 1,
            choice = %choice,
            correct = self.questions[index].is_correct(&choice),
            "answer committed"
        );
        self.session.selected_answers[index] = Some(choice);

        if index + 1 < self.questions.len() {
            self.session.question_index = index + 1;
            self.current_selection = self.session.committed(index + 1).map(str::to_string);
        } else {
            self.session.finished = true;
            info!(
                score = self.score(),
                total = self.total_questions(),
                percentage = self.final_score_percentage(),
                "quiz finished"
            );
        }
        true
    }

    /// Step back one question, restoring whatever was committed there.
    /// Returns `false` on the first question.
    pub fn retreat(&mut self) -> bool {
        if !self.can_retreat() {
            return false;
        }

        let index = self.session.question_index - 1;
        self.session.question_index = index;
        self.current_selection = self.session.committed(index).map(str::to_string);
        debug!(question = index + 1, "moved back");
        true
    }

    /// Discard all progress.
    pub fn restart(&mut self) {
        self.session = QuizSession::new(self.questions.len());
        self.current_selection = None;
        info!("quiz restarted");
    }

    /// Number of committed answers that are correct.
    pub fn score(&self) -> usize {
        self.session.score(&self.questions)
    }

    /// `score / N * 100`, rounded to the nearest integer with ties away
    /// from zero.
    pub fn final_score_percentage(&self) -> u32 {
        percentage(self.score(), self.total_questions())
    }
}

impl Default for QuizController {
    fn default() -> Self {
        Self::new()
    }
}

pub(crate) fn percentage(score: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((score * 200 + total) / (total * 2)) as u32
}
