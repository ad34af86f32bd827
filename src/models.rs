//! Record types for the crawler-populated schema.
//!
//! All rows are written by the external crawler; this service only reads
//! them. Relationships are plain foreign-key fields, related rows are
//! fetched through the locator rather than walked as an object graph.

use serde::{Deserialize, Serialize};

/// One discovered file on an SMB server (`mss_files`)
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct MssFile {
    pub id: i64,
    pub file_path: String,
    /// Date the crawler last saw the file, RFC 3339
    pub last_seen: Option<String>,
    pub name: String,
    pub server_name: String,
}

/// A named, typed metadata field definable across files (`mss_attributes`)
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct MssAttribute {
    pub id: i64,
    pub name: String,
    /// Type tag telling which value slot of a parameter is meaningful
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub type_tag: String,
}

/// One metadata fact about one file (`mss_parameters`).
///
/// `(attr_id, file_id)` is the composite primary key, so a file carries at
/// most one value per attribute. Exactly one of the three value slots is
/// populated, as indicated by the attribute's type tag.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct MssParameter {
    pub attr_id: i64,
    pub file_id: i64,
    pub bool_value: Option<bool>,
    pub num_value: Option<i64>,
    pub str_value: Option<String>,
}

/// A parameter joined with its attribute, for file-detail views
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct FileParameter {
    pub attr_id: i64,
    pub attr_name: String,
    pub attr_type: String,
    pub bool_value: Option<bool>,
    pub num_value: Option<i64>,
    pub str_value: Option<String>,
}
