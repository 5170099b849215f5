// Technical screening: keyword extraction from the candidate's tech stack answer,
// the static question bank, and question selection.
// No LLM calls and no randomness; the same answer always yields the same questions.

pub mod question_bank;
pub mod question_selector;
pub mod tech_extractor;
