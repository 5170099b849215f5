//! Question Selector: builds the bounded, ordered list of screening questions
//! for a candidate's extracted tech stack.

use tracing::debug;

use crate::screening::question_bank::{questions_for, GENERAL_QUESTIONS};
use crate::screening::tech_extractor::TechTag;

/// Only the first few extracted tags drive question selection.
const MAX_TAGS_CONSIDERED: usize = 3;
const QUESTIONS_PER_TAG: usize = 2;
const GENERAL_FALLBACK_COUNT: usize = 3;
pub const MAX_QUESTIONS: usize = 5;

/// Selects screening questions for `tags`.
///
/// Algorithm:
/// 1. Consider at most the first 3 tags, in extractor order
/// 2. For each tag with a bank entry, take its first 2 questions
/// 3. If nothing was taken, fall back to the first 3 general questions
/// 4. Truncate to 5
pub fn select_questions(tags: &[TechTag]) -> Vec<String> {
    let mut questions: Vec<String> = tags
        .iter()
        .take(MAX_TAGS_CONSIDERED)
        .filter_map(|tag| questions_for(*tag))
        .flat_map(|bank| bank.iter().take(QUESTIONS_PER_TAG))
        .map(|q| q.to_string())
        .collect();

    if questions.is_empty() {
        debug!("No banked technology among leading tags, using general questions");
        questions = GENERAL_QUESTIONS
            .iter()
            .take(GENERAL_FALLBACK_COUNT)
            .map(|q| q.to_string())
            .collect();
    }

    questions.truncate(MAX_QUESTIONS);
    questions
}
