//! Static bank of screening questions keyed by technology.

use crate::screening::tech_extractor::TechTag;

const PYTHON_QUESTIONS: &[&str] = &[
    "What is the difference between list and tuple in Python?",
    "Explain Python's GIL (Global Interpreter Lock) and its implications.",
    "How do you handle exceptions in Python? Provide an example.",
];

const JAVASCRIPT_QUESTIONS: &[&str] = &[
    "What is the difference between == and === in JavaScript?",
    "Explain closures in JavaScript with an example.",
    "What is the event loop in JavaScript and how does it work?",
];

const REACT_QUESTIONS: &[&str] = &[
    "What is the difference between state and props in React?",
    "Explain the React component lifecycle methods.",
    "What are React Hooks and why are they useful?",
];

/// Asked when none of the candidate's leading technologies has a bank entry.
pub const GENERAL_QUESTIONS: &[&str] = &[
    "Describe a challenging technical problem you've solved recently.",
    "How do you stay updated with new technologies in your field?",
    "What's your approach to debugging complex issues in your code?",
];

/// Bank entry for a tag, or `None` when the bank has no questions for it.
pub fn questions_for(tag: TechTag) -> Option<&'static [&'static str]> {
    match tag {
        TechTag::Python => Some(PYTHON_QUESTIONS),
        TechTag::JavaScript => Some(JAVASCRIPT_QUESTIONS),
        TechTag::React => Some(REACT_QUESTIONS),
        TechTag::Java
        | TechTag::TypeScript
        | TechTag::Angular
        | TechTag::Vue
        | TechTag::NodeJs
        | TechTag::Django
        | TechTag::Flask
        | TechTag::Spring
        | TechTag::Express
        | TechTag::MySql
        | TechTag::PostgreSql
        | TechTag::MongoDb
        | TechTag::Redis
        | TechTag::Aws
        | TechTag::Azure
        | TechTag::Gcp
        | TechTag::Docker
        | TechTag::Kubernetes
        | TechTag::Git => None,
    }
}
