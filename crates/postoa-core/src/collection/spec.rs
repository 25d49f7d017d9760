use serde::Deserialize;

use super::item::Item;
use super::nullable;
use super::request::description;

/// Collection metadata.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Info {
    #[serde(rename = "_postman_id", default)]
    pub postman_id: Option<String>,

    #[serde(default, deserialize_with = "nullable")]
    pub name: String,

    #[serde(default, deserialize_with = "description")]
    pub description: String,

    #[serde(default)]
    pub schema: Option<String>,
}

/// Top-level Postman collection (v2.0 / v2.1 export).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Collection {
    pub info: Info,

    #[serde(rename = "item")]
    pub items: Vec<Item>,
}
