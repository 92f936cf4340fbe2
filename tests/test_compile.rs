use js2sql::ddl::compile;
use js2sql::error::CompileError;
use js2sql::schema::{SchemaType, parse_schema};
use js2sql::test_utils::{COMPILE_TESTS_FILE, TestCompileData};

#[test]
fn test_should_compile() {
    let compile_test_file =
        std::fs::read_to_string(COMPILE_TESTS_FILE).expect("Cannot open compile test cases");
    let test_compile_data: TestCompileData =
        toml::from_str(&compile_test_file).expect("Cannot parse test cases defined in toml");

    for test in test_compile_data.tests {
        println!("Testing compilation for schema: {}", &test.schema);
        let table = test.table.as_deref().unwrap_or("test");
        let ddl = compile(test.schema.as_bytes(), table);
        if let Err(err) = &ddl {
            println!("{}", err);
        }
        assert!(ddl.is_ok());
        assert_eq!(ddl.unwrap(), test.ddl);
    }
}

#[test]
fn test_should_not_compile() {
    let schemas = [
        // Not valid JSON
        r#"{"type": "object""#,
        // Same-document pointers outside definitions/$defs
        r##"{"properties": {"alias": {"$ref": "#/properties/name"}, "name": {"type": "string"}}}"##,
        // External references
        r#"{"properties": {"address": {"$ref": "https://example.com/address.json"}}}"#,
        // Missing definition
        r##"{"properties": {"address": {"$ref": "#/definitions/address"}}}"##,
        // Missing definition referenced from array items
        r##"{"properties": {"tags": {"type": "array", "items": {"$ref": "#/$defs/tag"}}}}"##,
        // `type` must be a string or an array of strings
        r#"{"properties": {"age": {"type": 3}}}"#,
    ];
    for schema in schemas {
        println!("Testing compile error for schema: {}", schema);
        assert!(compile(schema.as_bytes(), "test").is_err());
    }
}

#[test]
fn test_reference_error_kinds() {
    let unsupported = compile(
        br##"{"properties": {"alias": {"$ref": "#/properties/name"}, "name": {"type": "string"}}}"##,
        "test",
    )
    .unwrap_err();
    assert!(matches!(
        unsupported,
        CompileError::UnsupportedReference(pointer) if pointer == "#/properties/name"
    ));

    let missing = compile(
        br##"{"properties": {"address": {"$ref": "#/definitions/address"}}}"##,
        "test",
    )
    .unwrap_err();
    assert!(matches!(
        missing,
        CompileError::ReferenceNotFound(pointer) if pointer == "#/definitions/address"
    ));
}

#[test]
fn test_cyclic_definitions_are_rejected() {
    let schema = r##"
    {
      "properties": {"a": {"$ref": "#/definitions/a"}},
      "definitions": {
        "a": {"type": "object", "properties": {"b": {"$ref": "#/definitions/b"}}},
        "b": {"type": "object", "properties": {"a": {"$ref": "#/definitions/a"}}}
      }
    }"##;
    let err = compile(schema.as_bytes(), "test").unwrap_err();
    assert!(matches!(err, CompileError::ReferenceDepthExceeded(_)));
}

#[test]
fn test_deterministic_output() {
    let schema = br#"
    {
      "type": "object",
      "properties": {
        "zeta": {"type": "number"},
        "alpha": {"type": "string"},
        "mid": {"type": "object", "properties": {"b": {"type": "boolean"}, "a": {"type": "integer"}}}
      }
    }"#;
    let first = compile(schema, "test").unwrap();
    for _ in 0..5 {
        assert_eq!(compile(schema, "test").unwrap(), first);
    }
    assert_eq!(
        first,
        "create table test (\n\tid varchar primary key\n\t, alpha varchar\n\t, mid row(a integer, b boolean)\n\t, zeta double\n);"
    );
}

#[test]
fn test_parse_schema_model() {
    let raw = br#"
    {
      "type": "object",
      "title": "person",
      "properties": {
        "name": {"type": "string"},
        "age": {"type": "integer"}
      }
    }"#;
    let schema = parse_schema(raw).expect("Cannot parse schema document");
    assert_eq!(schema.r#type, SchemaType::Object);
    assert_eq!(schema.title, "person");
    assert_eq!(schema.properties.len(), 2);
    assert_eq!(schema.properties["name"].r#type, SchemaType::String);
    assert_eq!(schema.properties["age"].r#type, SchemaType::Integer);
}
