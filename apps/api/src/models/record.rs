use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One page (row) of a content-backend database, as returned by a query.
///
/// Properties stay untyped: each value is a typed wrapper such as
/// `{"type": "rich_text", "rich_text": [...]}` and any of them may be missing
/// or malformed. Use the extractors in `directory::accessor` to read them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawRecord {
    pub id: String,
    #[serde(default)]
    pub properties: Map<String, Value>,
    #[serde(default)]
    pub created_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub last_edited_time: Option<DateTime<Utc>>,
}

impl RawRecord {
    pub fn property(&self, key: &str) -> Option<&Value> {
        self.properties.get(key)
    }
}
