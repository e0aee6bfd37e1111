use crate::Value;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Settings shared by every class a [`Driver`](crate::Driver) loads.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// If set, prefix all table names with this string
    pub table_name_prefix: Option<String>,

    /// Options given to every table that does not set them itself
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub table_options: IndexMap<String, Value>,
}
