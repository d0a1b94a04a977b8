//! Skill tags and the required-skills input parser.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A required skill, matched case-insensitively as a substring.
///
/// The tag keeps the label exactly as the user typed it (for messages) and a
/// lowercased copy used for matching. Tags are never interpreted as patterns.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct SkillTag {
    label: String,
    needle: String,
}

impl SkillTag {
    /// Creates a tag from user input, trimming surrounding whitespace.
    ///
    /// # Examples
    ///
    /// ```
    /// use vts_core::SkillTag;
    ///
    /// let tag = SkillTag::new(" Python ");
    /// assert_eq!(tag.as_str(), "Python");
    /// assert!(tag.matches("sql python"));
    /// ```
    pub fn new<S: AsRef<str>>(label: S) -> Self {
        let label = label.as_ref().trim().to_string();
        let needle = label.to_lowercase();
        Self { label, needle }
    }

    /// Returns the tag as the user typed it.
    pub fn as_str(&self) -> &str {
        &self.label
    }

    /// Returns `true` if `skills` contains this tag anywhere, ignoring case.
    pub fn matches(&self, skills: &str) -> bool {
        skills.to_lowercase().contains(&self.needle)
    }

    /// Returns `true` if the tag has no characters.
    ///
    /// An empty tag would match every record; the input parser never
    /// produces one.
    pub fn is_empty(&self) -> bool {
        self.label.is_empty()
    }
}

impl fmt::Display for SkillTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label)
    }
}

impl From<String> for SkillTag {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for SkillTag {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<SkillTag> for String {
    fn from(tag: SkillTag) -> Self {
        tag.label
    }
}

impl AsRef<str> for SkillTag {
    fn as_ref(&self) -> &str {
        &self.label
    }
}

/// Parses a comma-separated skills field into tags.
///
/// Entries are trimmed, empty entries dropped, and order kept. Repeated
/// entries are kept too; each one gets its own candidate pool.
///
/// ```
/// use vts_core::types::parse_skill_list;
///
/// let tags = parse_skill_list("python, sql,, ");
/// let labels: Vec<&str> = tags.iter().map(|t| t.as_str()).collect();
/// assert_eq!(labels, vec!["python", "sql"]);
/// ```
pub fn parse_skill_list(input: &str) -> Vec<SkillTag> {
    input
        .split(',')
        .map(SkillTag::new)
        .filter(|tag| !tag.is_empty())
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_keeps_label_case() {
        let tag = SkillTag::new("SQL");
        assert_eq!(tag.as_str(), "SQL");
        assert_eq!(tag.to_string(), "SQL");
    }

    #[test]
    fn test_matches_ignores_case() {
        let tag = SkillTag::new("Python");
        assert!(tag.matches("PYTHON sql"));
        assert!(tag.matches("python"));
        assert!(!tag.matches("java"));
    }

    #[test]
    fn test_matches_substring_of_other_word() {
        let tag = SkillTag::new("java");
        assert!(tag.matches("JavaScript"));
    }

    #[test]
    fn test_pattern_characters_are_literal() {
        let tag = SkillTag::new("c++");
        assert!(tag.matches("C++ rust"));
        assert!(!tag.matches("c rust"));

        let dot = SkillTag::new(".net");
        assert!(!dot.matches("dotnet"));
    }

    #[test]
    fn test_empty_skills_never_match() {
        assert!(!SkillTag::new("sql").matches(""));
    }

    #[test]
    fn test_parse_skill_list_trims_and_drops_empty() {
        let tags = parse_skill_list(" python ,sql,, ,rust");
        let labels: Vec<&str> = tags.iter().map(SkillTag::as_str).collect();
        assert_eq!(labels, vec!["python", "sql", "rust"]);
    }

    #[test]
    fn test_parse_skill_list_empty_input() {
        assert!(parse_skill_list("").is_empty());
        assert!(parse_skill_list(" , ,").is_empty());
    }

    #[test]
    fn test_parse_skill_list_keeps_repeats() {
        assert_eq!(parse_skill_list("sql,sql").len(), 2);
    }

    #[test]
    fn test_tag_serializes_as_label() {
        let json = serde_json::to_string(&SkillTag::new("Rust")).unwrap();
        assert_eq!(json, "\"Rust\"");
        let back: SkillTag = serde_json::from_str(&json).unwrap();
        assert_eq!(back, SkillTag::new("Rust"));
    }
}
