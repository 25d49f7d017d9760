use serde::Deserialize;

use super::nullable;
use super::request::Request;

/// A node of the collection tree: a folder, a request, or both.
///
/// The presence of `request` marks the node as a request leaf.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Item {
    #[serde(default, deserialize_with = "nullable")]
    pub name: String,

    #[serde(default)]
    pub request: Option<Request>,

    #[serde(rename = "item", default, deserialize_with = "nullable")]
    pub items: Vec<Item>,
}

impl Item {
    /// A folder holding the given children.
    pub fn folder(name: impl Into<String>, items: Vec<Item>) -> Self {
        Self {
            name: name.into(),
            request: None,
            items,
        }
    }

    /// A request leaf.
    pub fn request(name: impl Into<String>, request: Request) -> Self {
        Self {
            name: name.into(),
            request: Some(request),
            items: Vec::new(),
        }
    }
}
