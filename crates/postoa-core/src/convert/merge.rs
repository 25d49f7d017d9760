use crate::openapi::operation::PathItem;
use crate::openapi::parameter::Parameter;
use crate::openapi::server::Server;

use super::dedup::dedup_concat;

/// Parameters are identified by name only, whatever their location.
pub fn merge_parameters(first: Vec<Parameter>, second: Vec<Parameter>) -> Vec<Parameter> {
    dedup_concat(first, second, |p| p.name.clone())
}

pub fn merge_servers(first: Vec<Server>, second: Vec<Server>) -> Vec<Server> {
    dedup_concat(first, second, |s| s.url.clone())
}

/// Merge two path items claiming the same path. `first` wins every field it
/// has set; `second` only fills gaps.
///
/// `description` is never taken from `second`, even when `first` has none.
/// Two operations on the same method are not combined: `second`'s is dropped.
pub fn merge_path_items(mut first: PathItem, second: PathItem) -> PathItem {
    let PathItem {
        ref_path: _,
        summary,
        description: _,
        get,
        put,
        post,
        delete,
        options,
        head,
        patch,
        trace,
        servers,
        parameters,
    } = second;

    first.summary = first.summary.or(summary);

    first.parameters = merge_parameters(std::mem::take(&mut first.parameters), parameters);
    first.servers = merge_servers(std::mem::take(&mut first.servers), servers);

    first.get = first.get.or(get);
    first.put = first.put.or(put);
    first.post = first.post.or(post);
    first.delete = first.delete.or(delete);
    first.options = first.options.or(options);
    first.head = first.head.or(head);
    first.patch = first.patch.or(patch);
    first.trace = first.trace.or(trace);

    first
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::openapi::operation::Operation;
    use crate::openapi::parameter::ParameterLocation;

    fn op(id: &str) -> Operation {
        Operation {
            operation_id: Some(id.to_string()),
            ..Operation::default()
        }
    }

    fn sample() -> PathItem {
        PathItem {
            summary: Some("Users".to_string()),
            description: Some("user collection".to_string()),
            get: Some(op("GET_users")),
            parameters: vec![Parameter::path("id"), Parameter::query("limit")],
            servers: vec![Server::new("https://api.example.com")],
            ..PathItem::default()
        }
    }

    #[test]
    fn test_merge_with_self_is_identity() {
        let item = sample();
        assert_eq!(merge_path_items(item.clone(), item.clone()), item);
    }

    #[test]
    fn test_merge_with_self_collapses_internal_duplicates() {
        let mut item = sample();
        item.parameters.push(Parameter::path("id"));
        let merged = merge_path_items(item.clone(), item);
        assert_eq!(merged.parameters, sample().parameters);
    }

    #[test]
    fn test_summary_filled_from_second() {
        let first = PathItem::default();
        let second = PathItem {
            summary: Some("second".to_string()),
            ..PathItem::default()
        };
        let merged = merge_path_items(first, second);
        assert_eq!(merged.summary.as_deref(), Some("second"));
    }

    #[test]
    fn test_summary_kept_from_first() {
        let first = PathItem {
            summary: Some("first".to_string()),
            ..PathItem::default()
        };
        let second = PathItem {
            summary: Some("second".to_string()),
            ..PathItem::default()
        };
        let merged = merge_path_items(first, second);
        assert_eq!(merged.summary.as_deref(), Some("first"));
    }

    #[test]
    fn test_description_never_filled() {
        let first = PathItem::default();
        let second = PathItem {
            description: Some("d".to_string()),
            ..PathItem::default()
        };
        let merged = merge_path_items(first, second);
        assert_eq!(merged.description, None);
    }

    #[test]
    fn test_operations_first_wins_per_slot() {
        let first = PathItem {
            get: Some(op("first_get")),
            ..PathItem::default()
        };
        let second = PathItem {
            get: Some(op("second_get")),
            post: Some(op("second_post")),
            trace: Some(op("second_trace")),
            ..PathItem::default()
        };
        let merged = merge_path_items(first, second);
        assert_eq!(merged.get, Some(op("first_get")));
        assert_eq!(merged.post, Some(op("second_post")));
        assert_eq!(merged.trace, Some(op("second_trace")));
        assert!(merged.put.is_none());
    }

    #[test]
    fn test_parameters_dedup_by_name_only() {
        let first = vec![Parameter::path("id")];
        let second = vec![Parameter::query("id"), Parameter::query("sort")];
        let merged = merge_parameters(first, second);
        assert_eq!(merged.len(), 2);
        assert_eq!(merged[0].location, ParameterLocation::Path);
        assert_eq!(merged[1].name, "sort");
    }

    #[test]
    fn test_servers_dedup_by_url() {
        let first = vec![Server::new("https://a"), Server::new("https://a")];
        let mut described = Server::new("https://a");
        described.description = Some("dup".to_string());
        let second = vec![described, Server::new("https://b")];
        let merged = merge_servers(first, second);
        let urls: Vec<&str> = merged.iter().map(|s| s.url.as_str()).collect();
        assert_eq!(urls, vec!["https://a", "https://b"]);
        assert!(merged[0].description.is_none());
    }
}
