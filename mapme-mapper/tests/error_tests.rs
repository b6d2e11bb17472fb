mod common;

use common::{DummyMappingModel, test_data};
use mapme_mapper::{
    FieldDescriptor, MappingError, MappingSchema, ResolutionError, Resolved, Resolver,
    ResolverError, SchemaError, build_from_model,
};
use serde_json::json;

fn schema_with(resolver: Resolver) -> MappingSchema {
    MappingSchema::builder()
        .field(FieldDescriptor::path("name", "user_info.first_name").unwrap())
        .field(FieldDescriptor::function("full_name", resolver))
        .build()
        .unwrap()
}

#[test]
fn programming_errors_are_not_normalized() {
    let schema = schema_with(Resolver::new(|_, _, _| {
        Err(ResolverError::other("resolver signature bug"))
    }));
    let err = build_from_model::<DummyMappingModel>(&schema, &test_data(), None).unwrap_err();
    match err {
        MappingError::Resolver { field, source } => {
            assert_eq!(field, "full_name");
            assert_eq!(source.to_string(), "resolver signature bug");
        }
        other => panic!("expected resolver error, got {other:?}"),
    }
}

#[test]
fn anyhow_errors_convert_into_resolver_errors() {
    let schema = schema_with(Resolver::new(|_, _, _| {
        let n: i64 = "not a number".parse::<i64>().map_err(anyhow::Error::from)?;
        Ok(Resolved::Present(json!(n)))
    }));
    let err = build_from_model::<DummyMappingModel>(&schema, &test_data(), None).unwrap_err();
    assert!(err.as_validation().is_none());
    assert!(err.to_string().contains("full_name"));
}

#[test]
fn resolution_errors_raised_in_resolvers_are_normalized() {
    let schema = schema_with(Resolver::new(|_, _, _| {
        Err(ResolutionError::NotAttributeBearing {
            kind: "str",
            attribute: "first_name".into(),
        }
        .into())
    }));
    let err = build_from_model::<DummyMappingModel>(&schema, &test_data(), None).unwrap_err();
    let err = err.as_validation().expect("normalized");
    assert_eq!(err.field(), Some("full_name"));
    assert!(!err.is_validation());
}

#[test]
fn resolver_type_mismatch_is_a_validation_error() {
    let schema = schema_with(Resolver::new(|_, _, _| {
        Ok(Resolved::Present(json!({"first": "John"})))
    }));
    let err = build_from_model::<DummyMappingModel>(&schema, &test_data(), None).unwrap_err();
    let err = err.as_validation().expect("normalized");
    assert!(err.is_validation());
    assert_eq!(err.field(), Some("full_name"));
}

#[test]
fn mapping_error_display_is_the_message() {
    let mut data = test_data();
    data["user_info"] = json!(true);
    let schema = schema_with(Resolver::new(|_, default, _| Ok(default)));
    let err = build_from_model::<DummyMappingModel>(&schema, &data, None).unwrap_err();
    assert_eq!(
        err.to_string(),
        "failed to map field 'name': 'bool' object has no attribute 'first_name'"
    );
}

#[test]
fn schema_error_display() {
    let err = SchemaError::DuplicateField("name".into());
    assert_eq!(err.to_string(), "duplicate field 'name'");
}

#[test]
fn schema_error_from_serde_json() {
    let serde_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
    let err: SchemaError = serde_err.into();
    assert!(err.to_string().contains("schema deserialization"));
}
