use serde::Serialize;

use crate::directory::accessor::{extract_email, extract_select, extract_text};
use crate::directory::masking::Role;
use crate::models::record::RawRecord;

/// A signed-in viewer's entry in the users database.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    /// Whether the user registered as a chef ("yes"/"no" select); empty when unset.
    pub chef: String,
}

impl UserProfile {
    pub fn from_record(record: &RawRecord) -> Self {
        Self {
            id: record.id.clone(),
            name: extract_text(record.property("name")),
            email: extract_email(record.property("email")),
            role: Role::from_directory_value(&extract_select(record.property("role"))),
            chef: extract_select(record.property("chef")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_profile_from_record() {
        let record: RawRecord = serde_json::from_value(json!({
            "id": "u1",
            "properties": {
                "name": { "title": [{ "plain_text": "Asha" }, { "plain_text": " Rao" }] },
                "email": { "email": "asha@example.com" },
                "role": { "select": { "name": "Pro" } },
                "chef": { "select": { "name": "no" } }
            }
        }))
        .unwrap();

        let profile = UserProfile::from_record(&record);
        assert_eq!(profile.name, "Asha Rao");
        assert_eq!(profile.email, "asha@example.com");
        assert_eq!(profile.role, Role::Pro);
        assert_eq!(profile.chef, "no");
    }

    #[test]
    fn test_missing_role_defaults_to_basic() {
        let record: RawRecord = serde_json::from_value(json!({ "id": "u2" })).unwrap();
        let profile = UserProfile::from_record(&record);
        assert_eq!(profile.role, Role::Basic);
        assert!(profile.name.is_empty());
    }
}
