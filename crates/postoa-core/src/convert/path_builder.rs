use std::sync::LazyLock;

use log::{debug, warn};
use regex::Regex;

use crate::collection::item::Item;
use crate::collection::request::Request;
use crate::collection::url::{Query, authority_offset};
use crate::config::ConvertOptions;
use crate::openapi::method::HttpMethod;
use crate::openapi::operation::{Operation, PathItem};
use crate::openapi::parameter::Parameter;
use crate::openapi::response::Responses;

/// A Postman variable reference: `{{name}}`, no nested braces.
static TEMPLATE_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{([^{}]*)\}\}").expect("template token pattern is valid"));

/// Rewrite every `{{name}}` token to the OpenAPI `{name}` form.
pub fn to_openapi_template(path: &str) -> String {
    TEMPLATE_TOKEN.replace_all(path, "{${1}}").into_owned()
}

/// `/` + segments joined with `/`, with templates rewritten.
pub fn build_path(segments: &[String]) -> String {
    to_openapi_template(&format!("/{}", segments.join("/")))
}

/// One required path parameter per `{{name}}` token in the raw URL.
///
/// A token sitting where the host begins is the base-URL variable and is
/// skipped.
pub fn path_parameters(raw: &str) -> Vec<Parameter> {
    let host_offset = authority_offset(raw);
    TEMPLATE_TOKEN
        .captures_iter(raw)
        .filter(|caps| caps.get(0).is_some_and(|m| m.start() != host_offset))
        .map(|caps| Parameter::path(&caps[1]))
        .collect()
}

/// One query parameter per query entry, example set to the literal value.
pub fn query_parameters(queries: &[Query], skip_disabled: bool) -> Vec<Parameter> {
    queries
        .iter()
        .filter(|q| !(skip_disabled && q.disabled))
        .map(|q| Parameter {
            description: non_empty(&q.description),
            example: Some(serde_json::Value::String(q.value.clone())),
            ..Parameter::query(&q.key)
        })
        .collect()
}

/// `<METHOD>_<raw url>`, method kept exactly as written in the collection.
pub fn operation_id(request: &Request) -> String {
    format!("{}_{}", request.method, request.url.raw)
}

pub fn build_operation(request: &Request, options: &ConvertOptions) -> Operation {
    let mut parameters = path_parameters(&request.url.raw);
    parameters.extend(query_parameters(
        &request.url.query,
        options.skip_disabled_queries,
    ));

    Operation {
        description: non_empty(&request.description),
        operation_id: Some(operation_id(request)),
        parameters,
        responses: Responses::new(),
        ..Operation::default()
    }
}

/// Build the path entry for a request item.
///
/// Returns `None` for folders, for methods without a path item slot, and
/// for requests that produce an empty path.
pub fn build_path_item(item: &Item, options: &ConvertOptions) -> Option<(String, PathItem)> {
    let request = item.request.as_ref()?;

    let Some(method) = HttpMethod::parse(&request.method) else {
        warn!(
            "skipping request '{}': unsupported method '{}'",
            item.name, request.method
        );
        return None;
    };

    let path = build_path(&request.url.path);
    if path.is_empty() {
        return None;
    }
    debug!("request '{}' maps to {} {}", item.name, method, path);

    let mut path_item = PathItem {
        summary: Some(item.name.clone()),
        description: Some(request.description.clone()),
        ..PathItem::default()
    };
    *path_item.operation_mut(method) = Some(build_operation(request, options));

    Some((path, path_item))
}

fn non_empty(text: &str) -> Option<String> {
    (!text.is_empty()).then(|| text.to_string())
}
