//! Dialogue Engine: the intake state machine.
//!
//! One [`DialogueState`] value holds everything the engine decides from: the
//! current [`Stage`], the [`SessionRecord`] and the [`QuestionProgress`].
//! [`DialogueState::step`] consumes the state and one utterance and returns the
//! next state plus exactly one assistant reply. Nothing else mutates the state.

use tracing::{debug, info, warn};

use crate::intake::prompts::*;
use crate::intake::validation::{validate_email, validate_phone};
use crate::models::candidate::SessionRecord;
use crate::models::progress::QuestionProgress;
use crate::models::stage::Stage;
use crate::screening::question_selector::select_questions;
use crate::screening::tech_extractor::{extract_tech_stack, join_labels};

/// Utterances that end the conversation early. Matched exactly after trimming,
/// case-insensitively, so answers merely containing these words are unaffected.
const EXIT_KEYWORDS: &[&str] = &["exit", "quit", "bye", "goodbye"];

pub fn is_exit_request(text: &str) -> bool {
    let normalized = text.trim().to_lowercase();
    EXIT_KEYWORDS.contains(&normalized.as_str())
}

#[derive(Debug, Clone, PartialEq)]
pub struct DialogueState {
    stage: Stage,
    record: SessionRecord,
    progress: Option<QuestionProgress>,
    terminated: bool,
}

/// Result of one engine step.
#[derive(Debug, Clone)]
pub struct Transition {
    pub state: DialogueState,
    pub reply: String,
}

impl Default for DialogueState {
    fn default() -> Self {
        Self::new()
    }
}

impl DialogueState {
    /// Fresh state at `Greeting` with an empty record and no questions.
    pub fn new() -> Self {
        Self {
            stage: Stage::Greeting,
            record: SessionRecord::default(),
            progress: None,
            terminated: false,
        }
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn record(&self) -> &SessionRecord {
        &self.record
    }

    pub fn progress(&self) -> Option<&QuestionProgress> {
        self.progress.as_ref()
    }

    pub fn is_terminated(&self) -> bool {
        self.terminated
    }

    /// Runs one transition. Total: every input yields a next state and a reply.
    pub fn step(mut self, input: &str) -> Transition {
        let reply = self.handle(input.trim());
        Transition { state: self, reply }
    }

    fn handle(&mut self, text: &str) -> String {
        if self.terminated {
            return FAREWELL.to_string();
        }

        let collects_input = !matches!(self.stage, Stage::Greeting | Stage::Conclusion);
        if collects_input && is_exit_request(text) {
            self.terminated = true;
            info!("Candidate ended the session at stage: {}", self.stage.as_str());
            return EXIT_GOODBYE.to_string();
        }

        if collects_input && text.is_empty() {
            return self.reprompt(blank_reprompt(self.stage));
        }

        match self.stage {
            Stage::Greeting => {
                self.advance();
                WELCOME.to_string()
            }
            Stage::Name => {
                self.record.full_name = text.to_string();
                self.advance();
                ASK_EMAIL_TEMPLATE.replace("{full_name}", text)
            }
            Stage::Email => {
                if !validate_email(text) {
                    return self.reprompt(REPROMPT_EMAIL);
                }
                self.record.email = text.to_string();
                self.advance();
                ASK_PHONE.to_string()
            }
            Stage::Phone => {
                if !validate_phone(text) {
                    return self.reprompt(REPROMPT_PHONE);
                }
                self.record.phone = text.to_string();
                self.advance();
                ASK_EXPERIENCE.to_string()
            }
            Stage::Experience => {
                self.record.experience_years = text.to_string();
                self.advance();
                ASK_POSITION.to_string()
            }
            Stage::Position => {
                self.record.desired_position = text.to_string();
                self.advance();
                ASK_LOCATION.to_string()
            }
            Stage::Location => {
                self.record.location = text.to_string();
                self.advance();
                ASK_TECH_STACK.to_string()
            }
            Stage::TechStack => self.accept_tech_stack(text),
            Stage::TechnicalQuestions => self.accept_answer(text),
            Stage::Conclusion => {
                self.terminated = true;
                info!("Intake session concluded");
                FAREWELL.to_string()
            }
        }
    }

    fn accept_tech_stack(&mut self, text: &str) -> String {
        let tags = extract_tech_stack(text);
        if tags.is_empty() {
            return self.reprompt(REPROMPT_TECH_STACK_UNRECOGNIZED);
        }

        let progress = QuestionProgress::new(select_questions(&tags));
        let reply = TECH_STACK_ACCEPTED_TEMPLATE
            .replace("{tech_list}", &join_labels(&tags))
            .replace("{question_count}", &progress.total().to_string())
            .replace("{first_question}", progress.current_question().unwrap_or_default());

        debug!(
            "Selected {} screening questions for {} technologies",
            progress.total(),
            tags.len()
        );
        self.record.tech_stack = tags;
        self.progress = Some(progress);
        self.advance();
        reply
    }

    /// Progress is always present here: `TechnicalQuestions` is only entered
    /// from `accept_tech_stack`, which installs it. A state without progress,
    /// or with every question already answered, is closed out as complete
    /// rather than re-prompted forever.
    fn accept_answer(&mut self, text: &str) -> String {
        let Some(progress) = self.progress.as_mut() else {
            warn!("No question progress at stage: {}", self.stage.as_str());
            return self.complete(0);
        };

        if !progress.record_answer(text) {
            warn!("Answer received after the last screening question");
            let question_count = progress.total();
            return self.complete(question_count);
        }

        if let Some(next) = progress.current_question() {
            return NEXT_QUESTION_TEMPLATE
                .replace("{number}", &(progress.answered_count() + 1).to_string())
                .replace("{question}", next);
        }

        let question_count = progress.total();
        self.complete(question_count)
    }

    fn complete(&mut self, question_count: usize) -> String {
        self.advance();
        // Candidate text goes in last so braces in it are never read as placeholders.
        COMPLETION_TEMPLATE
            .replace("{question_count}", &question_count.to_string())
            .replace("{summary}", &self.completion_summary())
    }

    fn completion_summary(&self) -> String {
        let record = &self.record;
        [
            ("Name", record.full_name.clone()),
            ("Position", record.desired_position.clone()),
            ("Experience", record.experience_years.clone()),
            ("Location", record.location.clone()),
            ("Tech Stack", join_labels(&record.tech_stack)),
        ]
        .iter()
        .map(|(label, value)| format!("• **{label}:** {value}"))
        .collect::<Vec<_>>()
        .join("\n")
    }

    fn advance(&mut self) {
        self.stage = self.stage.next();
        info!("Advanced to stage: {}", self.stage.as_str());
    }

    /// Self-loop: the stage, record and progress are left untouched.
    fn reprompt(&self, prompt: &str) -> String {
        debug!("Re-prompting at stage: {}", self.stage.as_str());
        prompt.to_string()
    }
}

fn blank_reprompt(stage: Stage) -> &'static str {
    match stage {
        Stage::Name => REPROMPT_NAME,
        Stage::Email => REPROMPT_EMAIL,
        Stage::Phone => REPROMPT_PHONE,
        Stage::Experience => REPROMPT_EXPERIENCE,
        Stage::Position => REPROMPT_POSITION,
        Stage::Location => REPROMPT_LOCATION,
        Stage::TechStack => REPROMPT_TECH_STACK_BLANK,
        Stage::TechnicalQuestions => REPROMPT_ANSWER,
        Stage::Greeting | Stage::Conclusion => FAREWELL,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screening::question_bank::{questions_for, GENERAL_QUESTIONS};
    use crate::screening::tech_extractor::TechTag;

    fn started() -> DialogueState {
        DialogueState::new().step("").state
    }

    /// Drives a fresh session through every field up to `TechStack`.
    fn at_tech_stack() -> DialogueState {
        let mut state = started();
        for input in [
            "Jane Doe",
            "jane@x.co",
            "555-123-4567",
            "5 years",
            "Backend Engineer",
            "Berlin, Germany",
        ] {
            state = state.step(input).state;
        }
        assert_eq!(state.stage(), Stage::TechStack);
        state
    }

    #[test]
    fn test_greeting_ignores_input_and_asks_for_name() {
        let t = DialogueState::new().step("anything at all");
        assert_eq!(t.state.stage(), Stage::Name);
        assert_eq!(t.reply, WELCOME);
        assert!(t.state.record().is_empty());
    }

    #[test]
    fn test_end_to_end_contact_details() {
        let t = started().step("Jane Doe");
        assert_eq!(t.state.stage(), Stage::Email);
        assert_eq!(t.state.record().full_name, "Jane Doe");
        assert!(t.reply.contains("Jane Doe"));

        let t = t.state.step("not-an-email");
        assert_eq!(t.state.stage(), Stage::Email);
        assert!(t.reply.contains("john@example.com"));
        assert_eq!(t.state.record().email, "");

        let t = t.state.step("jane@x.co");
        assert_eq!(t.state.stage(), Stage::Phone);
        assert_eq!(t.state.record().email, "jane@x.co");

        let t = t.state.step("555-123-4567");
        assert_eq!(t.state.stage(), Stage::Experience);
        assert_eq!(t.state.record().phone, "555-123-4567");
    }

    #[test]
    fn test_name_is_trimmed() {
        let t = started().step("   Jane Doe  \n");
        assert_eq!(t.state.record().full_name, "Jane Doe");
    }

    #[test]
    fn test_email_advances_iff_valid() {
        let at_email = started().step("Jane Doe").state;
        for (input, valid) in [
            ("jane@x.co", true),
            ("  jane@x.co  ", true),
            ("jane@x", false),
            ("jane@@x.co", false),
            ("jane", false),
        ] {
            let t = at_email.clone().step(input);
            assert_eq!(t.state.stage() == Stage::Phone, valid, "input {input:?}");
            assert_eq!(!t.state.record().email.is_empty(), valid, "input {input:?}");
        }
    }

    #[test]
    fn test_phone_digit_boundaries() {
        let at_phone = started().step("Jane Doe").state.step("jane@x.co").state;
        for (input, valid) in [
            ("123456789", false),
            ("1234567890", true),
            ("123456789012345", true),
            ("1234567890123456", false),
            ("+44 20 7946 0958", true),
        ] {
            let t = at_phone.clone().step(input);
            assert_eq!(t.state.stage() == Stage::Experience, valid, "input {input:?}");
        }
    }

    #[test]
    fn test_blank_input_reprompts_without_mutation_at_every_collecting_stage() {
        let mut state = started();
        let inputs = [
            "Jane Doe",
            "jane@x.co",
            "555-123-4567",
            "5 years",
            "Backend Engineer",
            "Berlin",
            "Python",
            "An answer",
        ];
        for input in inputs {
            let before = state.clone();
            let t = state.step("   \t ");
            assert_eq!(t.state, before, "blank input mutated stage {:?}", before.stage());
            assert!(!t.reply.is_empty());
            state = t.state.step(input).state;
        }
    }

    #[test]
    fn test_tech_stack_extraction_and_first_question() {
        let t = at_tech_stack().step("I use Python and React with Postgresql");
        assert_eq!(t.state.stage(), Stage::TechnicalQuestions);
        assert_eq!(
            t.state.record().tech_stack,
            &[TechTag::Python, TechTag::React, TechTag::PostgreSql]
        );
        assert!(t.reply.contains("Python, React, Postgresql"));

        let progress = t.state.progress().unwrap();
        let python = questions_for(TechTag::Python).unwrap();
        assert_eq!(progress.questions()[0], python[0]);
        assert_eq!(progress.answered_count(), 0);
        assert!(t.reply.contains(&format!("**Question 1:** {}", python[0])));
        assert!(t.reply.contains("ask you 4 technical questions"));
    }

    #[test]
    fn test_unrecognized_tech_stack_reprompts() {
        let before = at_tech_stack();
        let t = before.clone().step("COBOL and Fortran");
        assert_eq!(t.state, before);
        assert_eq!(t.reply, REPROMPT_TECH_STACK_UNRECOGNIZED);
        assert!(t.state.progress().is_none());
    }

    #[test]
    fn test_unbanked_stack_uses_general_questions() {
        let t = at_tech_stack().step("Docker and Kubernetes on AWS");
        let progress = t.state.progress().unwrap();
        assert_eq!(progress.questions(), GENERAL_QUESTIONS);
    }

    #[test]
    fn test_question_cursor_walks_every_question_then_concludes() {
        let mut t = at_tech_stack().step("python");
        let questions = t.state.progress().unwrap().questions().to_vec();
        assert_eq!(questions.len(), 2);

        t = t.state.step("Lists are mutable, tuples are not.");
        assert_eq!(t.state.stage(), Stage::TechnicalQuestions);
        assert_eq!(t.state.progress().unwrap().answered_count(), 1);
        assert!(t.reply.contains(&format!("**Question 2:** {}", questions[1])));

        // blank answers leave the cursor where it is
        let before = t.state.clone();
        t = t.state.step("");
        assert_eq!(t.state, before);
        assert_eq!(t.reply, REPROMPT_ANSWER);

        t = t.state.step("It serializes bytecode execution.");
        assert_eq!(t.state.stage(), Stage::Conclusion);
        let progress = t.state.progress().unwrap();
        assert_eq!(progress.answered_count(), progress.total());
        assert!(t.reply.contains("completed all the technical questions"));
        assert!(t.reply.contains("**Name:** Jane Doe"));
        assert!(t.reply.contains("**Questions Completed:** 2"));
        assert!(!t.state.is_terminated());
    }

    #[test]
    fn test_conclusion_is_absorbing() {
        let mut state = at_tech_stack().step("python").state;
        state = state.step("a1").state.step("a2").state;
        assert_eq!(state.stage(), Stage::Conclusion);

        let t = state.step("One more thing");
        assert_eq!(t.reply, FAREWELL);
        assert!(t.state.is_terminated());

        let frozen = t.state.clone();
        let t = t.state.step("jane@other.io");
        assert_eq!(t.reply, FAREWELL);
        assert_eq!(t.state, frozen);
    }

    #[test]
    fn test_stage_never_decreases() {
        let inputs = [
            "", "Jane", "bad", "jane@x.co", "12", "5551234567", "", "3", "Dev", "Paris",
            "nothing", "react", "", "a", "b", "c",
        ];
        let mut state = started();
        for input in inputs {
            let before = state.stage();
            state = state.step(input).state;
            assert!(state.stage() >= before);
        }
    }

    #[test]
    fn test_exit_keyword_terminates_without_mutation() {
        let at_email = started().step("Jane Doe").state;
        let t = at_email.clone().step("  EXIT ");
        assert_eq!(t.reply, EXIT_GOODBYE);
        assert!(t.state.is_terminated());
        assert_eq!(t.state.stage(), at_email.stage());
        assert_eq!(t.state.record(), at_email.record());

        let t = t.state.step("jane@x.co");
        assert_eq!(t.reply, FAREWELL);
        assert_eq!(t.state.record().email, "");
    }

    #[test]
    fn test_exit_keyword_at_conclusion_gets_farewell() {
        let state = at_tech_stack().step("python").state;
        let state = state.step("a1").state.step("a2").state;
        assert_eq!(state.stage(), Stage::Conclusion);

        let t = state.step("bye");
        assert_eq!(t.reply, FAREWELL);
        assert!(t.state.is_terminated());
        assert_eq!(t.state.stage(), Stage::Conclusion);
    }

    #[test]
    fn test_placeholder_text_in_answers_is_echoed_verbatim() {
        let mut state = started();
        for input in [
            "{question_count}",
            "jane@x.co",
            "555-123-4567",
            "{summary} years",
            "{number}",
            "{question}",
            "python",
            "a1",
        ] {
            state = state.step(input).state;
        }
        let t = state.step("a2");
        assert_eq!(t.state.stage(), Stage::Conclusion);
        assert!(t.reply.contains("• **Name:** {question_count}"));
        assert!(t.reply.contains("• **Experience:** {summary} years"));
        assert!(t.reply.contains("• **Position:** {number}"));
        assert!(t.reply.contains("• **Location:** {question}"));
        assert!(t.reply.contains("**Questions Completed:** 2"));
    }

    #[test]
    fn test_missing_progress_closes_out_instead_of_inventing_questions() {
        let state = DialogueState {
            stage: Stage::TechnicalQuestions,
            record: SessionRecord::default(),
            progress: None,
            terminated: false,
        };
        let t = state.step("an answer");
        assert_eq!(t.state.stage(), Stage::Conclusion);
        assert!(t.state.progress().is_none());
        assert!(t.reply.contains("**Questions Completed:** 0"));
    }

    #[test]
    fn test_exhausted_progress_closes_out() {
        let mut progress = QuestionProgress::new(vec!["Q1".to_string()]);
        progress.record_answer("done");
        let state = DialogueState {
            stage: Stage::TechnicalQuestions,
            record: SessionRecord::default(),
            progress: Some(progress.clone()),
            terminated: false,
        };
        let t = state.step("extra");
        assert_eq!(t.state.stage(), Stage::Conclusion);
        assert_eq!(t.state.progress(), Some(&progress));
    }

    #[test]
    fn test_exit_keyword_must_match_exactly() {
        assert!(is_exit_request("Goodbye"));
        assert!(!is_exit_request("Byers Smith"));
        assert!(!is_exit_request("exit strategies in distributed systems"));

        let t = started().step("Byers Smith");
        assert_eq!(t.state.stage(), Stage::Email);
    }
}
