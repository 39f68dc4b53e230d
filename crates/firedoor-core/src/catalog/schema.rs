use crate::model::Priority;
use serde::{Deserialize, Serialize};

/// A catalog of remedial actions as they appear on the inspection template.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogDef {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub version: String,
    /// Ordered list of actions; tasks keep this order before sorting.
    pub actions: Vec<ActionDef>,
}

/// A single remedial action within a catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionDef {
    /// Checklist phrase exactly as printed on the template, e.g. "Handle - To be replaced".
    pub phrase: String,
    /// Raw regex used instead of the phrase when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    pub title: String,
    pub description: String,
    pub category: String,
    pub priority: Priority,
}
