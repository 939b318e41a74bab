pub mod config;
pub mod error;
pub mod infer;
pub mod parse;
pub mod swagger;

use error::InferError;
use infer::InferOptions;
use swagger::SwaggerDocument;

/// Parse a JSON dataset and infer its Swagger document in one step.
pub fn generate_from_json(
    input: &str,
    host: &str,
    options: InferOptions,
) -> Result<SwaggerDocument, InferError> {
    let dataset = parse::from_json(input)?;
    infer::build_with_options(&dataset, host, options)
}
