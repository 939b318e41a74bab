use jsg_core::error::InferError;
use jsg_core::infer::{self, InferOptions};
use jsg_core::parse;
use jsg_core::swagger::{Schema, SchemaOrRef};
use serde_json::json;

const DB: &str = include_str!("fixtures/db.json");
const HOST: &str = "localhost:3000";

fn build(input: serde_json::Value) -> jsg_core::swagger::SwaggerDocument {
    let dataset = parse::dataset::Dataset::from_value(input).unwrap();
    infer::build(&dataset, HOST).unwrap()
}

#[test]
fn build_db_fixture() {
    let dataset = parse::from_json(DB).unwrap();
    let doc = infer::build(&dataset, HOST).unwrap();

    assert_eq!(doc.host, HOST);
    let paths: Vec<&str> = doc.paths.keys().map(String::as_str).collect();
    assert_eq!(
        paths,
        vec![
            "/posts",
            "/posts/{id}",
            "/comments",
            "/comments/{id}",
            "/profile",
            "/news",
            "/news/{id}",
        ]
    );

    let definitions: Vec<&str> = doc.definitions.keys().map(String::as_str).collect();
    assert_eq!(
        definitions,
        vec![
            "PostMetaEditor",
            "PostMeta",
            "Post",
            "ErrorResponse",
            "Comment",
            "ProfileAddress",
            "Profile",
            "New",
        ]
    );

    let post = &doc.definitions["Post"];
    let post_props: Vec<&str> = post
        .properties
        .as_ref()
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(post_props, vec!["id", "title", "author", "views", "meta"]);
    assert_eq!(
        post.property("meta"),
        Some(&SchemaOrRef::definition("PostMeta"))
    );
    assert_eq!(
        doc.definitions["PostMetaEditor"].property("rating"),
        Some(&SchemaOrRef::from(Schema::double()))
    );

    assert!(doc.definitions["Comment"].property("deletedAt").is_none());
    assert_eq!(doc.definitions["New"], Schema::object());
    assert!(doc.unresolved_refs().is_empty());
}

#[test]
fn build_post_definition() {
    let doc = build(json!({
        "posts": [{"id": 1, "title": "hi", "views": 3.5, "author": {"name": "x"}}]
    }));

    assert_eq!(
        serde_json::to_value(&doc.definitions["Post"]).unwrap()["properties"],
        json!({
            "id": {"type": "integer", "format": "int64"},
            "title": {"type": "string"},
            "views": {"type": "number", "format": "double"},
            "author": {"$ref": "#/definitions/PostAuthor"}
        })
    );
    assert_eq!(
        serde_json::to_value(&doc.definitions["PostAuthor"]).unwrap()["properties"],
        json!({"name": {"type": "string"}})
    );
}

#[test]
fn build_list_collection() {
    let doc = build(json!({"posts": [{"id": 1, "title": "a"}]}));

    let root = &doc.paths["/posts"];
    assert!(root.get.is_some());
    assert!(root.post.is_some());

    let individual = &doc.paths["/posts/{id}"];
    assert!(individual.get.is_some());
    assert!(individual.patch.is_some());
    assert!(individual.put.is_some());
}

#[test]
fn build_singleton_collection() {
    let doc = build(json!({"profile": {"id": 1, "name": "x"}}));

    assert_eq!(doc.paths.len(), 1);
    let root = &doc.paths["/profile"];
    assert!(root.get.is_some());
    assert!(root.post.is_some());
    assert!(!doc.paths.contains_key("/profile/{id}"));
    assert!(!doc.definitions.contains_key("ErrorResponse"));

    insta::assert_json_snapshot!(root, @r###"
    {
      "get": {
        "summary": "Get the Profile",
        "description": "Get the one Profile",
        "operationId": "getProfile",
        "responses": {
          "200": {
            "description": "A Profile",
            "schema": {
              "$ref": "#/definitions/Profile"
            }
          }
        }
      },
      "post": {
        "summary": "Post a new Profile",
        "description": "Add a new Profile",
        "operationId": "postProfile",
        "parameters": [
          {
            "name": "bodyAddProfile",
            "in": "body",
            "description": "Profile object to be added",
            "required": true,
            "schema": {
              "$ref": "#/definitions/Profile"
            }
          }
        ],
        "responses": {
          "200": {
            "description": "The added Profile",
            "schema": {
              "$ref": "#/definitions/Profile"
            }
          }
        }
      }
    }
    "###);
}

#[test]
fn build_individual_path_shape() {
    let doc = build(json!({"posts": [{"id": 1}]}));
    let value = serde_json::to_value(&doc.paths["/posts/{id}"]).unwrap();

    assert_eq!(
        value["parameters"],
        json!([{
            "name": "id",
            "in": "path",
            "required": true,
            "type": "integer",
            "format": "int64"
        }])
    );
    assert_eq!(value["get"]["operationId"], "getPostIndividual");
    assert_eq!(
        value["get"]["responses"]["404"]["schema"],
        json!({"$ref": "#/definitions/ErrorResponse"})
    );
    assert_eq!(value["patch"]["operationId"], "patchPost");
    assert_eq!(value["put"]["operationId"], "putPost");
    assert_eq!(
        value["put"]["parameters"][0],
        json!({
            "name": "bodyAddPost",
            "in": "body",
            "description": "Post object with the new values",
            "required": true,
            "schema": {"$ref": "#/definitions/Post"}
        })
    );
    assert!(value.get("delete").is_none());
}

#[test]
fn build_has_no_dangling_refs() {
    let doc = build(json!({
        "users": [{"id": 1, "profile": {"bio": "x", "links": {"site": "y"}}}],
        "settings": {"theme": {"dark": true, "accent": "blue"}},
        "empty": [],
        "scalars": ["a", "b"]
    }));
    assert!(doc.unresolved_refs().is_empty());
}

#[test]
fn build_is_idempotent() {
    let dataset = parse::from_json(DB).unwrap();
    let first = serde_json::to_string_pretty(&infer::build(&dataset, HOST).unwrap()).unwrap();
    let second = serde_json::to_string_pretty(&infer::build(&dataset, HOST).unwrap()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn build_document_roundtrips_through_json() {
    let dataset = parse::from_json(DB).unwrap();
    let doc = infer::build(&dataset, HOST).unwrap();
    let text = serde_json::to_string_pretty(&doc).unwrap();
    let reparsed: jsg_core::swagger::SwaggerDocument = serde_json::from_str(&text).unwrap();
    assert_eq!(reparsed, doc);
}

#[test]
fn build_omits_unrecognized_fields() {
    let doc = build(json!({
        "todos": [{"id": 1, "done": true, "tags": [], "parent": null, "title": "t"}]
    }));
    let props = doc.definitions["Todo"].properties.as_ref().unwrap();
    let keys: Vec<&str> = props.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["id", "title"]);
}

#[test]
fn build_rejects_deep_exemplar() {
    let mut nested = json!({"leaf": 1});
    for _ in 0..5 {
        nested = json!({"child": nested});
    }
    let dataset = parse::dataset::Dataset::from_value(json!({"trees": [nested]})).unwrap();

    let err = infer::build_with_options(&dataset, HOST, InferOptions { max_depth: 3 })
        .unwrap_err();
    assert!(matches!(err, InferError::ExemplarTooDeep { max_depth: 3, .. }));

    let doc = infer::build_with_options(&dataset, HOST, InferOptions { max_depth: 5 }).unwrap();
    assert!(doc.definitions.contains_key("TreeChildChildChildChildChild"));
}

#[test]
fn generate_from_malformed_json() {
    let err = jsg_core::generate_from_json("{\"posts\": [", HOST, InferOptions::default())
        .unwrap_err();
    assert!(matches!(err, InferError::Parse(_)));
}

#[test]
fn generate_records_host() {
    let doc = jsg_core::generate_from_json(
        r#"{"posts": []}"#,
        "api.example.com",
        InferOptions::default(),
    )
    .unwrap();
    assert_eq!(doc.host, "api.example.com");
    assert_eq!(doc.swagger, "2.0");
}
