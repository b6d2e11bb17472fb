//! Shared fixtures for mapping tests.

#![allow(dead_code)]

use std::sync::OnceLock;

use mapme_mapper::{
    AttributeSource, FieldDescriptor, MappingModel, MappingSchema, Resolved, Resolver,
};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

// ── Source side ──────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct UserInfo {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CurrentJob {
    pub has_project: Option<bool>,
    pub since: Option<String>,
    pub documents: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct WorkProfile {
    pub title: Option<String>,
    pub worked_for: Vec<String>,
    pub current_job: Option<CurrentJob>,
    pub skills: Vec<Skill>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DummyModel {
    pub nickname: Option<String>,
    pub user_info: Option<UserInfo>,
    pub work_profile: Option<WorkProfile>,
}

pub fn dummy_model() -> DummyModel {
    DummyModel {
        nickname: Some("baobab".into()),
        user_info: Some(UserInfo {
            first_name: Some("John".into()),
            last_name: Some("Smith".into()),
        }),
        work_profile: Some(WorkProfile {
            title: Some("Developer".into()),
            worked_for: vec!["Google".into(), "Amazon".into()],
            current_job: Some(CurrentJob {
                has_project: Some(false),
                since: Some("10-10-2022".into()),
                documents: vec![],
            }),
            skills: vec![
                Skill {
                    name: "Python".into(),
                },
                Skill { name: "Js".into() },
            ],
        }),
    }
}

/// The same data as [`dummy_model`], as a freely editable JSON value.
pub fn test_data() -> Value {
    json!({
        "nickname": "baobab",
        "user_info": {"first_name": "John", "last_name": "Smith"},
        "work_profile": {
            "title": "Developer",
            "salary": "",
            "worked_for": ["Google", "Amazon"],
            "current_job": {
                "has_project": false,
                "since": "10-10-2022",
                "documents": [],
                "salary": ""
            },
            "skills": [{"name": "Python"}, {"name": "Js"}]
        }
    })
}

// ── Destination side ─────────────────────────────────────────────

fn default_value() -> String {
    "default_value".into()
}

fn no_full_name() -> Option<String> {
    Some("NoFullName".into())
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DummyMappingModel {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub surname: Option<String>,
    #[serde(default)]
    pub nickname: Option<String>,
    #[serde(default)]
    pub is_working: Option<bool>,
    #[serde(default)]
    pub documents: Vec<String>,
    #[serde(default)]
    pub previous_companies: Vec<String>,
    #[serde(default = "default_value")]
    pub field_with_default_value: String,
    #[serde(default)]
    pub current_work_started_since: Option<String>,
    #[serde(default)]
    pub non_existing: Option<String>,
    #[serde(default)]
    pub age: Option<i64>,
    #[serde(default = "no_full_name")]
    pub full_name: Option<String>,
    #[serde(default)]
    pub skills: Vec<Skill>,
}

impl DummyMappingModel {
    /// The model as it looks when every source field is present and no
    /// context is supplied.
    pub fn expected() -> Self {
        Self {
            name: Some("John".into()),
            surname: Some("Smith".into()),
            nickname: Some("baobab".into()),
            is_working: Some(false),
            documents: vec![],
            previous_companies: vec!["Google".into(), "Amazon".into()],
            field_with_default_value: "default_value".into(),
            current_work_started_since: Some("10-10-2022".into()),
            non_existing: None,
            age: None,
            full_name: Some("John Smith".into()),
            skills: vec![
                Skill {
                    name: "Python".into(),
                },
                Skill { name: "Js".into() },
            ],
        }
    }
}

/// Returns the `age` context entry, or `null` without one.
pub fn get_age() -> Resolver {
    Resolver::new(|_source, _default, context| {
        Ok(Resolved::Present(
            context.get("age").cloned().unwrap_or(Value::Null),
        ))
    })
    .with_params(["age"])
}

/// Joins first and last name, falling back to the field default.
pub fn get_full_name() -> Resolver {
    Resolver::new(|source: &dyn AttributeSource, default, _context| {
        let Some(user_info) = source.get_attribute("user_info")? else {
            return Ok(default);
        };
        match (
            user_info.get_str("first_name")?,
            user_info.get_str("last_name")?,
        ) {
            (Some(first), Some(last)) if !first.is_empty() && !last.is_empty() => {
                Ok(Resolved::Present(json!(format!("{first} {last}"))))
            }
            _ => Ok(default),
        }
    })
}

pub fn dummy_schema() -> MappingSchema {
    MappingSchema::builder()
        .field(FieldDescriptor::path("name", "user_info.first_name").unwrap())
        .field(FieldDescriptor::path("surname", "user_info.last_name").unwrap())
        .field(FieldDescriptor::path("nickname", "nickname").unwrap())
        .field(
            FieldDescriptor::path("is_working", "work_profile.current_job.has_project").unwrap(),
        )
        .field(
            FieldDescriptor::path("documents", "work_profile.current_job.documents").unwrap(),
        )
        .field(FieldDescriptor::path("previous_companies", "work_profile.worked_for").unwrap())
        .field(FieldDescriptor::implicit("field_with_default_value"))
        .field(
            FieldDescriptor::path("current_work_started_since", "work_profile.current_job.since")
                .unwrap(),
        )
        .field(FieldDescriptor::path("non_existing", "no_such_field_or_model").unwrap())
        .field(FieldDescriptor::named("age", "get_age"))
        .field(FieldDescriptor::named("full_name", "get_full_name").with_default("NoFullName"))
        .field(FieldDescriptor::path("skills", "work_profile.skills").unwrap())
        .resolver("get_age", get_age())
        .resolver("get_full_name", get_full_name())
        .build()
        .unwrap()
}

impl MappingModel for DummyMappingModel {
    fn mapping_schema() -> &'static MappingSchema {
        static SCHEMA: OnceLock<MappingSchema> = OnceLock::new();
        SCHEMA.get_or_init(dummy_schema)
    }
}
