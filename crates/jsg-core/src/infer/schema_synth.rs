use indexmap::IndexMap;
use log::{debug, warn};
use serde_json::{Map, Number, Value};

use crate::error::InferError;
use crate::parse::dataset::value_kind;
use crate::swagger::{Schema, SchemaOrRef};

use super::InferOptions;
use super::type_name::nested_type_name;

/// Infer the definition `type_name` from `exemplar` and register it in
/// `definitions`, replacing any earlier definition of the same name.
///
/// Object-valued fields become definitions of their own, named
/// `<type_name><Field>`, and are referenced with `$ref`. Numbers become
/// `integer/int64` or `number/double`, strings `string`. Fields of any other
/// kind (boolean, null, array) are left out. A missing exemplar yields an
/// object schema without properties.
pub fn synthesize_schema(
    definitions: &mut IndexMap<String, Schema>,
    type_name: &str,
    exemplar: Option<&Map<String, Value>>,
    options: &InferOptions,
) -> Result<Schema, InferError> {
    synthesize_at_depth(definitions, type_name, exemplar, options, 0)
}

fn synthesize_at_depth(
    definitions: &mut IndexMap<String, Schema>,
    type_name: &str,
    exemplar: Option<&Map<String, Value>>,
    options: &InferOptions,
    depth: usize,
) -> Result<Schema, InferError> {
    if depth > options.max_depth {
        return Err(InferError::ExemplarTooDeep {
            type_name: type_name.to_string(),
            max_depth: options.max_depth,
        });
    }

    let mut schema = Schema::object();

    for (field, value) in exemplar.into_iter().flatten() {
        let property = match value {
            Value::Object(nested) => {
                let nested_name = nested_type_name(type_name, field);
                synthesize_at_depth(definitions, &nested_name, Some(nested), options, depth + 1)?;
                SchemaOrRef::definition(&nested_name)
            }
            Value::Number(n) => number_schema(n).into(),
            Value::String(_) => Schema::string().into(),
            other => {
                warn!(
                    "{type_name}.{field}: unhandled {} value, field omitted",
                    value_kind(other)
                );
                continue;
            }
        };
        debug!("{type_name}.{field} -> {property:?}");
        schema.insert_property(field.as_str(), property);
    }

    definitions.insert(type_name.to_string(), schema.clone());
    Ok(schema)
}

/// Integral values (including `3.0`) map to `int64`, everything else to `double`.
fn number_schema(n: &Number) -> Schema {
    let integral = n.is_i64() || n.is_u64() || n.as_f64().is_some_and(|f| f.fract() == 0.0);
    if integral {
        Schema::int64()
    } else {
        Schema::double()
    }
}
