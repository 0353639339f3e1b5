//! Resume data accessor: flattens content-backend property wrappers into plain values.
//!
//! Every extractor takes `Option<&Value>` and returns a type-appropriate empty
//! default (`""`, `0.0`, `[]`) when the property or any nested field is absent
//! or has the wrong shape. A malformed property never fails the record.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

use crate::models::record::RawRecord;

/// Number of skills shown as badges on a card before collapsing into "+N more".
pub const VISIBLE_SKILL_BADGES: usize = 3;

/// Concatenates the `plain_text` of every fragment of a `title` or `rich_text`
/// property, in fragment order.
pub fn extract_text(property: Option<&Value>) -> String {
    let Some(property) = property else {
        return String::new();
    };
    ["title", "rich_text"]
        .iter()
        .find_map(|key| property.get(key).and_then(Value::as_array))
        .map(|fragments| join_fragments(fragments))
        .unwrap_or_default()
}

fn join_fragments(fragments: &[Value]) -> String {
    fragments
        .iter()
        .filter_map(|fragment| {
            fragment
                .get("plain_text")
                .and_then(Value::as_str)
                // Write payloads carry `text.content` instead of `plain_text`.
                .or_else(|| fragment.pointer("/text/content").and_then(Value::as_str))
        })
        .collect()
}

/// Reads an `email` property; falls back to title/rich text, since some
/// databases store the address in the title column.
pub fn extract_email(property: Option<&Value>) -> String {
    property
        .and_then(|p| p.get("email"))
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_else(|| extract_text(property))
}

pub fn extract_phone_number(property: Option<&Value>) -> String {
    property
        .and_then(|p| p.get("phone_number"))
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_else(|| extract_text(property))
}

/// `null` and missing numbers both read as 0.
pub fn extract_number(property: Option<&Value>) -> f64 {
    property
        .and_then(|p| p.get("number"))
        .and_then(Value::as_f64)
        .unwrap_or(0.0)
}

pub fn extract_select(property: Option<&Value>) -> String {
    property
        .and_then(|p| p.pointer("/select/name"))
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

pub fn extract_multi_select(property: Option<&Value>) -> Vec<String> {
    property
        .and_then(|p| p.get("multi_select"))
        .and_then(Value::as_array)
        .map(|options| {
            options
                .iter()
                .filter_map(|o| o.get("name").and_then(Value::as_str))
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

/// A chef resume flattened to scalar and collection values.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ChefProfile {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    /// Total experience in years.
    pub experience: f64,
    pub profession: String,
    pub education: String,
    pub skills: Vec<String>,
    pub salary: String,
    pub availability: String,
    pub languages: Vec<String>,
    pub certifications: Vec<String>,
    pub last_updated: Option<DateTime<Utc>>,
}

impl ChefProfile {
    pub fn from_record(record: &RawRecord) -> Self {
        Self {
            id: record.id.clone(),
            name: extract_text(record.property("name")),
            email: extract_email(record.property("email")),
            phone: extract_phone_number(record.property("mobile")),
            location: extract_text(record.property("location")),
            experience: extract_number(record.property("experience")),
            profession: extract_select(record.property("profession")),
            education: extract_text(record.property("education")),
            skills: extract_multi_select(record.property("skills")),
            salary: extract_text(record.property("salary")),
            availability: extract_select(record.property("availability")),
            languages: extract_multi_select(record.property("languages")),
            certifications: extract_multi_select(record.property("certifications")),
            last_updated: record.last_edited_time,
        }
    }

    /// Experience rendered the way the search box matches it: `5`, `5.5`.
    pub fn experience_label(&self) -> String {
        self.experience.to_string()
    }
}

/// Skill badges for a card: the first few skills plus a count of the rest.
#[derive(Debug, Clone, Serialize, PartialEq, Default)]
pub struct SkillBadges {
    pub shown: Vec<String>,
    pub more: usize,
}

impl SkillBadges {
    pub fn from_skills(skills: &[String]) -> Self {
        let visible = skills.len().min(VISIBLE_SKILL_BADGES);
        Self {
            shown: skills[..visible].to_vec(),
            more: skills.len() - visible,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(properties: Value) -> RawRecord {
        serde_json::from_value(json!({ "id": "r1", "properties": properties })).unwrap()
    }

    #[test]
    fn test_text_concatenates_fragments_in_order() {
        let prop = json!({ "rich_text": [{ "plain_text": "Goa, " }, { "plain_text": "India" }] });
        assert_eq!(extract_text(Some(&prop)), "Goa, India");
    }

    #[test]
    fn test_text_reads_title_and_write_payload_fragments() {
        let prop = json!({ "title": [{ "text": { "content": "chef@" } }, { "plain_text": "example.com" }] });
        assert_eq!(extract_text(Some(&prop)), "chef@example.com");
    }

    #[test]
    fn test_missing_and_malformed_properties_default() {
        assert_eq!(extract_text(None), "");
        assert_eq!(extract_text(Some(&json!({ "rich_text": "oops" }))), "");
        assert_eq!(extract_number(Some(&json!({ "number": null }))), 0.0);
        assert_eq!(extract_number(Some(&json!("7"))), 0.0);
        assert_eq!(extract_select(Some(&json!({ "select": null }))), "");
        assert!(extract_multi_select(Some(&json!({ "multi_select": [{ "id": 1 }] }))).is_empty());
    }

    #[test]
    fn test_email_prefers_email_wrapper_then_title() {
        assert_eq!(extract_email(Some(&json!({ "email": "a@b.com" }))), "a@b.com");
        assert_eq!(
            extract_email(Some(&json!({ "title": [{ "plain_text": "c@d.com" }] }))),
            "c@d.com"
        );
    }

    #[test]
    fn test_profile_from_full_record() {
        let r = record(json!({
            "name": { "rich_text": [{ "plain_text": "Ravi Kumar" }] },
            "email": { "title": [{ "plain_text": "ravi@example.com" }] },
            "mobile": { "phone_number": "+91 98765 43210" },
            "location": { "rich_text": [{ "plain_text": "Pune" }] },
            "experience": { "number": 7.5 },
            "profession": { "select": { "name": "Head Chef" } },
            "skills": { "multi_select": [{ "name": "Tandoor" }, { "name": "Curry" }] },
            "salary": { "rich_text": [{ "plain_text": "60k" }] },
            "availability": { "select": { "name": "Immediate" } }
        }));

        let profile = ChefProfile::from_record(&r);
        assert_eq!(profile.name, "Ravi Kumar");
        assert_eq!(profile.email, "ravi@example.com");
        assert_eq!(profile.phone, "+91 98765 43210");
        assert_eq!(profile.experience, 7.5);
        assert_eq!(profile.profession, "Head Chef");
        assert_eq!(profile.skills, vec!["Tandoor", "Curry"]);
        assert_eq!(profile.availability, "Immediate");
        assert!(profile.languages.is_empty());
        assert_eq!(profile.experience_label(), "7.5");
    }

    #[test]
    fn test_record_without_skills_yields_empty_badges() {
        let profile = ChefProfile::from_record(&record(json!({})));
        assert!(profile.skills.is_empty());
        assert_eq!(SkillBadges::from_skills(&profile.skills), SkillBadges::default());
    }

    #[test]
    fn test_skill_badges_overflow() {
        let skills: Vec<String> = ["a", "b", "c", "d", "e"].iter().map(|s| s.to_string()).collect();
        let badges = SkillBadges::from_skills(&skills);
        assert_eq!(badges.shown, vec!["a", "b", "c"]);
        assert_eq!(badges.more, 2);
    }

    #[test]
    fn test_whole_number_experience_label() {
        let profile = ChefProfile::from_record(&record(json!({ "experience": { "number": 5 } })));
        assert_eq!(profile.experience_label(), "5");
    }
}
