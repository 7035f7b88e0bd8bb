//! In-memory OpenAPI description model and the loader that produces it.
//!
//! The [`Description`] is built once at startup and then only read.

pub mod loader;
pub mod location;
pub mod model;
mod raw;
mod refs;

pub use loader::{LoadOptions, load_description, parse_description};
pub use location::{DocumentSource, resolve_document_location};
pub use model::{
    Description, HttpMethod, Operation, Parameter, ParameterLocation, PathItem, RequestBody,
    Resolved,
};
