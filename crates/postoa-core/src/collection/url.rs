use serde::{Deserialize, Deserializer};

use super::nullable;
use super::request::description;

/// A query string entry.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Query {
    #[serde(default, deserialize_with = "nullable")]
    pub key: String,

    #[serde(default, deserialize_with = "nullable")]
    pub value: String,

    #[serde(default, deserialize_with = "description")]
    pub description: String,

    #[serde(default)]
    pub disabled: bool,
}

impl Query {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            ..Self::default()
        }
    }
}

/// A request URL in structured form.
///
/// Postman exports either the structured object or just the raw string;
/// both decode into this shape.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "UrlRepr")]
pub struct Url {
    pub raw: String,
    pub host: Vec<String>,
    pub path: Vec<String>,
    pub query: Vec<Query>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum UrlRepr {
    Raw(String),
    Structured(UrlParts),
}

#[derive(Deserialize)]
struct UrlParts {
    #[serde(default, deserialize_with = "nullable")]
    raw: String,
    #[serde(default, deserialize_with = "segments")]
    host: Vec<String>,
    #[serde(default, deserialize_with = "segments")]
    path: Vec<String>,
    #[serde(default, deserialize_with = "nullable")]
    query: Vec<Query>,
}

impl From<UrlRepr> for Url {
    fn from(repr: UrlRepr) -> Self {
        match repr {
            UrlRepr::Raw(raw) => Url::parse_raw(&raw),
            UrlRepr::Structured(parts) => Url {
                raw: parts.raw,
                host: parts.host,
                path: parts.path,
                query: parts.query,
            },
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Segments {
    Joined(String),
    List(Vec<String>),
}

/// `host` and `path` may be a single joined string or a list of segments.
fn segments<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Segments>::deserialize(deserializer)? {
        None => Vec::new(),
        Some(Segments::List(list)) => list,
        Some(Segments::Joined(joined)) => joined
            .trim_start_matches('/')
            .split('/')
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect(),
    })
}

impl Url {
    pub fn new(raw: impl Into<String>, path: &[&str]) -> Self {
        Self {
            raw: raw.into(),
            path: path.iter().map(|s| s.to_string()).collect(),
            ..Self::default()
        }
    }

    pub fn with_query(mut self, query: Query) -> Self {
        self.query.push(query);
        self
    }

    /// Split a raw URL string into host, path segments and query pairs the
    /// way Postman does when it exports the structured form.
    pub fn parse_raw(raw: &str) -> Self {
        let without_scheme = &raw[authority_offset(raw)..];
        let without_fragment = without_scheme
            .split_once('#')
            .map_or(without_scheme, |(head, _)| head);
        let (location, query_string) = match without_fragment.split_once('?') {
            Some((location, query)) => (location, Some(query)),
            None => (without_fragment, None),
        };
        let (host, path) = match location.split_once('/') {
            Some((host, path)) => (host, Some(path)),
            None => (location, None),
        };

        let host = if host.is_empty() {
            Vec::new()
        } else {
            host.split('.').map(str::to_string).collect()
        };
        let path = path
            .map(|p| p.split('/').map(str::to_string).collect())
            .unwrap_or_default();
        let query = query_string
            .map(|qs| {
                qs.split('&')
                    .filter(|pair| !pair.is_empty())
                    .map(|pair| match pair.split_once('=') {
                        Some((key, value)) => Query::new(key, value),
                        None => Query::new(pair, ""),
                    })
                    .collect()
            })
            .unwrap_or_default();

        Url {
            raw: raw.to_string(),
            host,
            path,
            query,
        }
    }
}

/// Byte offset where the authority starts: just past a leading `scheme://`,
/// or 0 when the URL has no scheme (the usual `{{baseUrl}}/...` form).
pub fn authority_offset(raw: &str) -> usize {
    match raw.find("://") {
        Some(idx)
            if idx > 0
                && raw[..idx]
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.')) =>
        {
            idx + 3
        }
        _ => 0,
    }
}
