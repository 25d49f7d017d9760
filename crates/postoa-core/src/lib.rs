pub mod collection;
pub mod config;
pub mod convert;
pub mod error;
pub mod openapi;

use config::ConvertOptions;
use error::ConvertError;

/// Convert raw Postman collection bytes into encoded OpenAPI JSON bytes.
///
/// Nothing is produced unless the whole pipeline succeeds.
pub fn convert_bytes(source: &[u8], options: &ConvertOptions) -> Result<Vec<u8>, ConvertError> {
    let collection = collection::from_slice(source)?;
    let spec = convert::convert_with_options(&collection, options);
    let encoded = if options.pretty {
        openapi::to_vec_pretty(&spec)?
    } else {
        openapi::to_vec(&spec)?
    };
    Ok(encoded)
}
