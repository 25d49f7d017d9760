pub mod method;
pub mod operation;
pub mod parameter;
pub mod response;
pub mod server;
pub mod spec;

use crate::error::EncodeError;
use spec::OpenApiSpec;

/// Encode an OpenAPI document as compact JSON.
pub fn to_vec(spec: &OpenApiSpec) -> Result<Vec<u8>, EncodeError> {
    Ok(serde_json::to_vec(spec)?)
}

/// Encode an OpenAPI document as indented JSON.
pub fn to_vec_pretty(spec: &OpenApiSpec) -> Result<Vec<u8>, EncodeError> {
    Ok(serde_json::to_vec_pretty(spec)?)
}
