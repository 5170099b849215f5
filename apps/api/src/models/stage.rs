use serde::{Deserialize, Serialize};

/// A point in the fixed intake sequence. Declaration order is conversation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Greeting,
    Name,
    Email,
    Phone,
    Experience,
    Position,
    Location,
    TechStack,
    TechnicalQuestions,
    Conclusion,
}

impl Stage {
    pub const ALL: [Stage; 10] = [
        Stage::Greeting,
        Stage::Name,
        Stage::Email,
        Stage::Phone,
        Stage::Experience,
        Stage::Position,
        Stage::Location,
        Stage::TechStack,
        Stage::TechnicalQuestions,
        Stage::Conclusion,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    /// The stage after this one. `Conclusion` is absorbing.
    pub fn next(self) -> Stage {
        Stage::ALL
            .get(self.index() + 1)
            .copied()
            .unwrap_or(Stage::Conclusion)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Stage::Greeting => "greeting",
            Stage::Name => "name",
            Stage::Email => "email",
            Stage::Phone => "phone",
            Stage::Experience => "experience",
            Stage::Position => "position",
            Stage::Location => "location",
            Stage::TechStack => "tech_stack",
            Stage::TechnicalQuestions => "technical_questions",
            Stage::Conclusion => "conclusion",
        }
    }

    /// Human-readable label shown next to the progress bar.
    pub fn display_name(self) -> &'static str {
        match self {
            Stage::Greeting => "Welcome",
            Stage::Name => "Personal Info",
            Stage::Email => "Contact Details",
            Stage::Phone => "Phone Verification",
            Stage::Experience => "Experience",
            Stage::Position => "Position Interest",
            Stage::Location => "Location",
            Stage::TechStack => "Technical Skills",
            Stage::TechnicalQuestions => "Technical Assessment",
            Stage::Conclusion => "Completion",
        }
    }

    pub fn progress_percent(self) -> f64 {
        self.index() as f64 / Stage::ALL.len() as f64 * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_is_in_declaration_order() {
        for (i, stage) in Stage::ALL.iter().enumerate() {
            assert_eq!(stage.index(), i);
        }
    }

    #[test]
    fn test_next_walks_the_sequence_and_stops_at_conclusion() {
        assert_eq!(Stage::Greeting.next(), Stage::Name);
        assert_eq!(Stage::TechStack.next(), Stage::TechnicalQuestions);
        assert_eq!(Stage::TechnicalQuestions.next(), Stage::Conclusion);
        assert_eq!(Stage::Conclusion.next(), Stage::Conclusion);
    }

    #[test]
    fn test_serde_uses_snake_case() {
        let json = serde_json::to_string(&Stage::TechnicalQuestions).unwrap();
        assert_eq!(json, r#""technical_questions""#);
        let stage: Stage = serde_json::from_str(r#""tech_stack""#).unwrap();
        assert_eq!(stage, Stage::TechStack);
    }

    #[test]
    fn test_as_str_matches_serde_name() {
        for stage in Stage::ALL {
            let json = serde_json::to_string(&stage).unwrap();
            assert_eq!(json, format!("\"{}\"", stage.as_str()));
        }
    }

    #[test]
    fn test_progress_percent() {
        assert_eq!(Stage::Greeting.progress_percent(), 0.0);
        assert!((Stage::Phone.progress_percent() - 30.0).abs() < 1e-9);
        assert!((Stage::Conclusion.progress_percent() - 90.0).abs() < 1e-9);
    }
}
