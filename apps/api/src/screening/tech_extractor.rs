//! Tech Extractor: maps a free-text tech stack answer to recognized technology tags.

use serde::{Deserialize, Serialize};

/// A technology from the fixed vocabulary. Declaration order is vocabulary order,
/// which is also the order tags are reported in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TechTag {
    Python,
    Java,
    #[serde(rename = "Javascript")]
    JavaScript,
    #[serde(rename = "Typescript")]
    TypeScript,
    React,
    Angular,
    Vue,
    #[serde(rename = "Node.js")]
    NodeJs,
    Django,
    Flask,
    Spring,
    Express,
    #[serde(rename = "Mysql")]
    MySql,
    #[serde(rename = "Postgresql")]
    PostgreSql,
    #[serde(rename = "Mongodb")]
    MongoDb,
    Redis,
    Aws,
    Azure,
    Gcp,
    Docker,
    Kubernetes,
    Git,
}

impl TechTag {
    pub const VOCABULARY: [TechTag; 22] = [
        TechTag::Python,
        TechTag::Java,
        TechTag::JavaScript,
        TechTag::TypeScript,
        TechTag::React,
        TechTag::Angular,
        TechTag::Vue,
        TechTag::NodeJs,
        TechTag::Django,
        TechTag::Flask,
        TechTag::Spring,
        TechTag::Express,
        TechTag::MySql,
        TechTag::PostgreSql,
        TechTag::MongoDb,
        TechTag::Redis,
        TechTag::Aws,
        TechTag::Azure,
        TechTag::Gcp,
        TechTag::Docker,
        TechTag::Kubernetes,
        TechTag::Git,
    ];

    /// Lower-case keyword searched for in the candidate's answer.
    pub fn keyword(self) -> &'static str {
        match self {
            TechTag::Python => "python",
            TechTag::Java => "java",
            TechTag::JavaScript => "javascript",
            TechTag::TypeScript => "typescript",
            TechTag::React => "react",
            TechTag::Angular => "angular",
            TechTag::Vue => "vue",
            TechTag::NodeJs => "node.js",
            TechTag::Django => "django",
            TechTag::Flask => "flask",
            TechTag::Spring => "spring",
            TechTag::Express => "express",
            TechTag::MySql => "mysql",
            TechTag::PostgreSql => "postgresql",
            TechTag::MongoDb => "mongodb",
            TechTag::Redis => "redis",
            TechTag::Aws => "aws",
            TechTag::Azure => "azure",
            TechTag::Gcp => "gcp",
            TechTag::Docker => "docker",
            TechTag::Kubernetes => "kubernetes",
            TechTag::Git => "git",
        }
    }

    /// Display label: the keyword with only its first character upper-cased.
    pub fn label(self) -> &'static str {
        match self {
            TechTag::Python => "Python",
            TechTag::Java => "Java",
            TechTag::JavaScript => "Javascript",
            TechTag::TypeScript => "Typescript",
            TechTag::React => "React",
            TechTag::Angular => "Angular",
            TechTag::Vue => "Vue",
            TechTag::NodeJs => "Node.js",
            TechTag::Django => "Django",
            TechTag::Flask => "Flask",
            TechTag::Spring => "Spring",
            TechTag::Express => "Express",
            TechTag::MySql => "Mysql",
            TechTag::PostgreSql => "Postgresql",
            TechTag::MongoDb => "Mongodb",
            TechTag::Redis => "Redis",
            TechTag::Aws => "Aws",
            TechTag::Azure => "Azure",
            TechTag::Gcp => "Gcp",
            TechTag::Docker => "Docker",
            TechTag::Kubernetes => "Kubernetes",
            TechTag::Git => "Git",
        }
    }
}

impl std::fmt::Display for TechTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Returns every vocabulary tag whose keyword occurs anywhere in `text`
/// (case-insensitive substring match), in vocabulary order.
///
/// Matching is plain containment, so "javascript" also yields `Java` and
/// "github" yields `Git`. Callers rely on this exact behaviour; do not
/// switch to word-boundary matching without changing the question selection tests.
pub fn extract_tech_stack(text: &str) -> Vec<TechTag> {
    let lower = text.to_lowercase();
    TechTag::VOCABULARY
        .iter()
        .copied()
        .filter(|tag| lower.contains(tag.keyword()))
        .collect()
}

/// Joins tag labels with ", " for display in replies and summaries.
pub fn join_labels(tags: &[TechTag]) -> String {
    tags.iter()
        .map(|t| t.label())
        .collect::<Vec<_>>()
        .join(", ")
}
