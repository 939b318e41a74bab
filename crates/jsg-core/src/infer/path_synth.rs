use indexmap::IndexMap;

use crate::swagger::{Operation, Parameter, PathItem, Response, Schema, SchemaOrRef};

/// Name of the definition used for 404 responses on individual paths.
pub const ERROR_RESPONSE: &str = "ErrorResponse";

/// Emit the paths for one collection.
///
/// `/<collection>` always gets `get` and `post`. List collections also get
/// `/<collection>/{id}` with `get`, `patch` and `put`. No `delete` operation
/// is produced.
pub fn synthesize_paths(
    paths: &mut IndexMap<String, PathItem>,
    type_name: &str,
    collection_name: &str,
    is_list: bool,
) {
    paths.insert(
        format!("/{collection_name}"),
        PathItem {
            get: Some(collection_get(type_name, is_list)),
            post: Some(collection_post(type_name)),
            ..Default::default()
        },
    );

    if is_list {
        paths.insert(
            format!("/{collection_name}/{{id}}"),
            individual_path(type_name),
        );
    }
}

/// The `ErrorResponse` definition referenced by 404 responses.
pub fn error_response_schema() -> Schema {
    let mut schema = Schema::object();
    schema.insert_property("code", Schema::int64().into());
    schema.insert_property("message", Schema::string().into());
    schema
}

fn collection_get(type_name: &str, is_list: bool) -> Operation {
    let item = SchemaOrRef::definition(type_name);
    let (summary, description, operation_id, response) = if is_list {
        (
            format!("Get all {type_name}"),
            format!("Get the instances of {type_name} that matches the search conditions"),
            format!("getall{type_name}"),
            Response::new(format!("A list of {type_name}"), Schema::array_of(item).into()),
        )
    } else {
        (
            format!("Get the {type_name}"),
            format!("Get the one {type_name}"),
            format!("get{type_name}"),
            Response::new(format!("A {type_name}"), item),
        )
    };

    Operation {
        summary,
        description,
        operation_id,
        parameters: Vec::new(),
        responses: IndexMap::from([("200".to_string(), response)]),
    }
}

fn collection_post(type_name: &str) -> Operation {
    Operation {
        summary: format!("Post a new {type_name}"),
        description: format!("Add a new {type_name}"),
        operation_id: format!("post{type_name}"),
        parameters: vec![body_parameter(type_name, "to be added")],
        responses: IndexMap::from([(
            "200".to_string(),
            Response::new(
                format!("The added {type_name}"),
                SchemaOrRef::definition(type_name),
            ),
        )]),
    }
}

fn individual_path(type_name: &str) -> PathItem {
    let responses = individual_responses(type_name);

    let get = Operation {
        summary: format!("Get one {type_name}"),
        description: format!("Get the {type_name} with the given id"),
        operation_id: format!("get{type_name}Individual"),
        parameters: Vec::new(),
        responses: responses.clone(),
    };

    PathItem {
        parameters: vec![Parameter::path_id()],
        get: Some(get),
        put: Some(individual_update(type_name, "Put", "put", &responses)),
        patch: Some(individual_update(type_name, "Patch", "patch", &responses)),
        ..Default::default()
    }
}

/// `patch` and `put` differ only in wording and operationId prefix.
fn individual_update(
    type_name: &str,
    verb: &str,
    id_prefix: &str,
    responses: &IndexMap<String, Response>,
) -> Operation {
    Operation {
        summary: format!("{verb} the {type_name}"),
        description: format!("{verb} the {type_name} with the given id"),
        operation_id: format!("{id_prefix}{type_name}"),
        parameters: vec![body_parameter(type_name, "with the new values")],
        responses: responses.clone(),
    }
}

fn individual_responses(type_name: &str) -> IndexMap<String, Response> {
    IndexMap::from([
        (
            "200".to_string(),
            Response::new(
                format!("The {type_name} with the given id"),
                SchemaOrRef::definition(type_name),
            ),
        ),
        (
            "404".to_string(),
            Response::new(
                format!("No {type_name} with the given id"),
                SchemaOrRef::definition(ERROR_RESPONSE),
            ),
        ),
    ])
}

fn body_parameter(type_name: &str, purpose: &str) -> Parameter {
    Parameter::body(
        format!("bodyAdd{type_name}"),
        format!("{type_name} object {purpose}"),
        SchemaOrRef::definition(type_name),
    )
}
