use super::{Question, QuizState};

/// The mutable half of a quiz attempt.
///
/// The score is never stored. It is derived from `selected_answers` on
/// demand so overwriting an answer can't leave a stale count behind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSession {
    pub question_index: usize,
    pub selected_answers: Vec<Option<String>>,
    pub finished: bool,
}

impl QuizSession {
    pub fn new(num_questions: usize) -> Self {
        Self {
            question_index: 0,
            selected_answers: vec![None; num_questions],
            finished: false,
        }
    }

    pub fn state(&self) -> QuizState {
        if self.finished {
            QuizState::Finished
        } else {
            QuizState::InProgress(self.question_index)
        }
    }

    pub fn committed(&self, index: usize) -> Option<&str> {
        self.selected_answers.get(index)?.as_deref()
    }

    pub fn score(&self, questions: &[Question]) -> usize {
        self.selected_answers
            .iter()
            .zip(questions.iter())
            .filter(|(answer, question)| {
                answer
                    .as_deref()
                    .is_some_and(|choice| question.is_correct(choice))
            })
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_is_blank() {
        let session = QuizSession::new(3);
        assert_eq!(session.question_index, 0);
        assert_eq!(session.selected_answers, vec![None, None, None]);
        assert!(!session.finished);
        assert_eq!(session.state(), QuizState::InProgress(0));
    }

    #[test]
    fn test_score_counts_only_correct_commits() {
        let questions = vec![
            Question::new("one", ["a", "b"], "a"),
            Question::new("two", ["a", "b"], "b"),
            Question::new("three", ["a", "b"], "a"),
        ];
        let mut session = QuizSession::new(questions.len());
        assert_eq!(session.score(&questions), 0);

        session.selected_answers[0] = Some("a".to_string());
        session.selected_answers[1] = Some("a".to_string());
        assert_eq!(session.score(&questions), 1);

        session.selected_answers[1] = Some("b".to_string());
        assert_eq!(session.score(&questions), 2);
        assert_eq!(session.committed(1), Some("b"));
        assert_eq!(session.committed(2), None);
        assert_eq!(session.committed(7), None);
    }
}
