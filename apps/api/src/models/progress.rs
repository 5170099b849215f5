use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A candidate's answer to one screening question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TechnicalAnswer {
    pub question: String,
    pub answer: String,
    pub answered_at: DateTime<Utc>,
}

/// Selected screening questions and the answers given so far.
///
/// The question list is fixed at construction. The cursor is the number of
/// recorded answers and never exceeds the number of questions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionProgress {
    questions: Vec<String>,
    answers: Vec<TechnicalAnswer>,
}

impl QuestionProgress {
    pub fn new(questions: Vec<String>) -> Self {
        Self {
            questions,
            answers: Vec::new(),
        }
    }

    pub fn questions(&self) -> &[String] {
        &self.questions
    }

    pub fn answers(&self) -> &[TechnicalAnswer] {
        &self.answers
    }

    pub fn answered_count(&self) -> usize {
        self.answers.len()
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    /// The question awaiting an answer, if any remain.
    pub fn current_question(&self) -> Option<&str> {
        self.questions.get(self.answered_count()).map(String::as_str)
    }

    pub fn is_complete(&self) -> bool {
        self.answered_count() >= self.total()
    }

    /// Records `answer` against the current question and advances the cursor by one.
    /// Returns `false` without recording anything once every question is answered.
    pub(crate) fn record_answer(&mut self, answer: &str) -> bool {
        let Some(question) = self.current_question() else {
            return false;
        };
        let entry = TechnicalAnswer {
            question: question.to_string(),
            answer: answer.to_string(),
            answered_at: Utc::now(),
        };
        self.answers.push(entry);
        true
    }
}
