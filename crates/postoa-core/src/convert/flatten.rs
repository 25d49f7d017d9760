use indexmap::IndexMap;
use indexmap::map::Entry;
use log::debug;

use crate::collection::item::Item;
use crate::config::ConvertOptions;
use crate::openapi::operation::PathItem;

use super::merge::merge_path_items;
use super::path_builder::build_path_item;

/// Path string to path item.
pub type PathMap = IndexMap<String, PathItem>;

/// Flatten one node of the collection tree into its own path map.
///
/// The node's own request comes first, then each child subtree in order. A
/// path already in the map takes precedence over the same path arriving
/// from a later child.
pub fn flatten_item(item: &Item, options: &ConvertOptions) -> PathMap {
    let mut paths = PathMap::new();

    if let Some((path, path_item)) = build_path_item(item, options) {
        paths.insert(path, path_item);
    }

    for child in &item.items {
        merge_into(&mut paths, flatten_item(child, options));
    }

    paths
}

/// Merge `incoming` into `paths`, existing entries taking precedence.
pub fn merge_into(paths: &mut PathMap, incoming: PathMap) {
    for (path, path_item) in incoming {
        match paths.entry(path) {
            Entry::Occupied(mut entry) => {
                debug!("path {} already exists, merging", entry.key());
                let existing = std::mem::take(entry.get_mut());
                *entry.get_mut() = merge_path_items(existing, path_item);
            }
            Entry::Vacant(entry) => {
                debug!("adding path {}", entry.key());
                entry.insert(path_item);
            }
        }
    }
}
