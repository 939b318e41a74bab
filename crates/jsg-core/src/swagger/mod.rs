//! Typed Swagger 2.0 document model.
//!
//! Every map is an [`indexmap::IndexMap`], so serialization follows insertion
//! order and building the same dataset twice yields identical output.

pub mod document;
pub mod operation;
pub mod parameter;
pub mod response;
pub mod schema;

pub use document::{Info, SwaggerDocument};
pub use operation::{Operation, PathItem};
pub use parameter::{Parameter, ParameterLocation};
pub use response::Response;
pub use schema::{Schema, SchemaOrRef, SchemaType};
