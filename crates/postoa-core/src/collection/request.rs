use serde::{Deserialize, Deserializer};

use super::nullable;
use super::url::Url;

/// A request header. Carried through decoding but not used by the converter.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Header {
    #[serde(default, deserialize_with = "nullable")]
    pub key: String,

    #[serde(default, deserialize_with = "nullable")]
    pub value: String,

    #[serde(default, deserialize_with = "description")]
    pub description: String,

    #[serde(rename = "type", default)]
    pub kind: Option<String>,

    #[serde(default)]
    pub disabled: bool,
}

/// The request half of a leaf item.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Request {
    #[serde(default, deserialize_with = "nullable")]
    pub method: String,

    #[serde(rename = "header", default, deserialize_with = "nullable")]
    pub headers: Vec<Header>,

    #[serde(default, deserialize_with = "nullable")]
    pub url: Url,

    #[serde(default, deserialize_with = "description")]
    pub description: String,
}

impl Request {
    pub fn new(method: impl Into<String>, url: Url) -> Self {
        Self {
            method: method.into(),
            url,
            ..Self::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum DescriptionRepr {
    Text(String),
    Rich {
        #[serde(default, deserialize_with = "nullable")]
        content: String,
    },
}

/// Postman descriptions are either a plain string or `{ "content", "type" }`.
pub(crate) fn description<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let repr = Option::<DescriptionRepr>::deserialize(deserializer)?;
    Ok(match repr {
        None => String::new(),
        Some(DescriptionRepr::Text(text)) => text,
        Some(DescriptionRepr::Rich { content }) => content,
    })
}
