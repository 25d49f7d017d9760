pub mod dedup;
pub mod flatten;
pub mod merge;
pub mod path_builder;

use log::info;

use crate::collection::spec::Collection;
use crate::config::ConvertOptions;
use crate::openapi::spec::{Info, OpenApiSpec};

pub use flatten::{PathMap, flatten_item, merge_into};
pub use merge::merge_path_items;

/// Convert a parsed collection into an OpenAPI document with default options.
pub fn convert(collection: &Collection) -> OpenApiSpec {
    convert_with_options(collection, &ConvertOptions::default())
}

/// Convert with explicit options.
pub fn convert_with_options(collection: &Collection, options: &ConvertOptions) -> OpenApiSpec {
    let mut paths = PathMap::new();
    for item in &collection.items {
        merge_into(&mut paths, flatten_item(item, options));
    }
    info!(
        "converted collection '{}' into {} paths",
        collection.info.name,
        paths.len()
    );

    OpenApiSpec {
        openapi: options.openapi_version.clone(),
        info: Info {
            title: collection.info.name.clone(),
            description: collection.info.description.clone(),
            version: options.api_version.clone(),
        },
        servers: Vec::new(),
        paths,
    }
}
