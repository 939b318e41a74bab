//! Inference of a Swagger document from a json-server dataset.
//!
//! Each top-level collection contributes one definition (plus one per nested
//! object) and its collection paths. Collections are independent; the
//! [`DocumentBuilder`] accumulates their output into a single document.

pub mod path_synth;
pub mod schema_synth;
pub mod type_name;

use log::{debug, warn};
use serde_json::Value;

use crate::error::InferError;
use crate::parse::dataset::{Collection, Dataset};
use crate::swagger::SwaggerDocument;

pub use path_synth::{ERROR_RESPONSE, error_response_schema, synthesize_paths};
pub use schema_synth::synthesize_schema;
pub use type_name::{capitalize, derive_type_name};

/// Default bound on exemplar nesting.
pub const DEFAULT_MAX_DEPTH: usize = 32;

/// HTTP methods json-server serves that are not described in the generated
/// document.
pub const UNSUPPORTED_OPERATIONS: &[&str] = &["delete"];

/// Options controlling inference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InferOptions {
    /// Deepest nested object accepted, counting the collection record as 0.
    pub max_depth: usize,
}

impl Default for InferOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Create the empty document served from `host`.
pub fn init_document(host: &str) -> SwaggerDocument {
    SwaggerDocument::new(host)
}

/// Accumulates definitions and paths across collections.
#[derive(Debug, Clone)]
pub struct DocumentBuilder {
    document: SwaggerDocument,
    options: InferOptions,
}

impl DocumentBuilder {
    pub fn new(host: &str) -> Self {
        Self {
            document: init_document(host),
            options: InferOptions::default(),
        }
    }

    pub fn with_options(mut self, options: InferOptions) -> Self {
        self.options = options;
        self
    }

    /// Infer the definitions and paths for one collection.
    ///
    /// On error the builder may hold a partially processed collection and
    /// should be discarded.
    pub fn add_collection(&mut self, name: &str, data: &Value) -> Result<(), InferError> {
        self.add(name, Collection::new(data))
    }

    fn add(&mut self, name: &str, collection: Collection<'_>) -> Result<(), InferError> {
        if name.is_empty() {
            return Err(InferError::EmptyCollectionName);
        }

        let type_name = derive_type_name(name);
        let is_list = collection.is_list();
        let exemplar = collection.exemplar();
        debug!("adding /{name} as {type_name} (list: {is_list})");

        if exemplar.is_none() {
            warn!(
                "{name}: no example record (found {}), {type_name} will have no properties",
                collection.exemplar_kind()
            );
        }

        synthesize_schema(
            &mut self.document.definitions,
            &type_name,
            exemplar,
            &self.options,
        )?;

        if is_list && !self.document.definitions.contains_key(ERROR_RESPONSE) {
            self.document
                .definitions
                .insert(ERROR_RESPONSE.to_string(), error_response_schema());
        }

        synthesize_paths(&mut self.document.paths, &type_name, name, is_list);
        Ok(())
    }

    /// Hand over the finished document.
    pub fn finish(self) -> SwaggerDocument {
        self.document
    }
}

/// Build the document for a whole dataset. Fails without producing a
/// document if any collection fails.
pub fn build(dataset: &Dataset, host: &str) -> Result<SwaggerDocument, InferError> {
    build_with_options(dataset, host, InferOptions::default())
}

pub fn build_with_options(
    dataset: &Dataset,
    host: &str,
    options: InferOptions,
) -> Result<SwaggerDocument, InferError> {
    let mut builder = DocumentBuilder::new(host).with_options(options);
    for (name, collection) in dataset.collections() {
        builder.add(name, collection)?;
    }
    Ok(builder.finish())
}
