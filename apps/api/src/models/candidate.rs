use serde::{Deserialize, Serialize};

use crate::screening::tech_extractor::{join_labels, TechTag};

/// The candidate profile accumulated over one intake conversation.
///
/// Fields are written once, in stage order, by the dialogue engine, which only
/// ever hands out shared references. An empty string means the stage has not
/// been reached yet.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionRecord {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub experience_years: String,
    pub desired_position: String,
    pub location: String,
    pub tech_stack: Vec<TechTag>,
}

impl SessionRecord {
    pub fn is_empty(&self) -> bool {
        *self == SessionRecord::default()
    }

    /// Markdown summary of the populated fields, one `**Label:** value` per line.
    pub fn summary(&self) -> String {
        let mut lines = Vec::new();
        if !self.full_name.is_empty() {
            lines.push(format!("**Name:** {}", self.full_name));
        }
        if !self.email.is_empty() {
            lines.push(format!("**Email:** {}", self.email));
        }
        if !self.phone.is_empty() {
            lines.push(format!("**Phone:** {}", self.phone));
        }
        if !self.experience_years.is_empty() {
            lines.push(format!("**Experience:** {}", self.experience_years));
        }
        if !self.desired_position.is_empty() {
            lines.push(format!("**Position:** {}", self.desired_position));
        }
        if !self.location.is_empty() {
            lines.push(format!("**Location:** {}", self.location));
        }
        if !self.tech_stack.is_empty() {
            lines.push(format!("**Tech Stack:** {}", join_labels(&self.tech_stack)));
        }

        if lines.is_empty() {
            "No information collected yet.".to_string()
        } else {
            lines.join("\n")
        }
    }
}
