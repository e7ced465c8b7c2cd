//! Qiita Team projects.

use serde::{Deserialize, Serialize};

use crate::Timestamp;
use crate::compare::{Comparison, Mismatch, ValueEq, partial_eq_by_value};
use crate::decode::Resource;
use crate::schema::{Field, Kind, Schema};
use crate::tag::{TAGGING_SCHEMA, Taggings};

/// A project page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: i64,

    /// HTML rendering of `body`.
    pub rendered_body: String,

    pub archived: bool,

    /// Markdown source.
    pub body: String,

    pub created_at: Timestamp,

    pub name: String,

    pub reactions_count: i64,

    pub updated_at: Timestamp,
}

/// List payload of projects.
pub type Projects = Vec<Project>;

pub const PROJECT_SCHEMA: Schema = Schema::new(
    "project",
    &[
        Field::required("id", Kind::Integer),
        Field::required("rendered_body", Kind::String),
        Field::required("archived", Kind::Boolean),
        Field::required("body", Kind::String),
        Field::required("created_at", Kind::Timestamp),
        Field::required("name", Kind::String),
        Field::required("reactions_count", Kind::Integer),
        Field::required("updated_at", Kind::Timestamp),
    ],
);

impl Resource for Project {
    const SCHEMA: &'static Schema = &PROJECT_SCHEMA;
}

impl ValueEq for Project {
    fn diff(&self, other: &Self) -> Option<Mismatch> {
        Comparison::new(self, other)
            .field("id", |p| &p.id)
            .field("rendered_body", |p| &p.rendered_body)
            .field("archived", |p| &p.archived)
            .field("body", |p| &p.body)
            .field("created_at", |p| &p.created_at)
            .field("name", |p| &p.name)
            .field("reactions_count", |p| &p.reactions_count)
            .field("updated_at", |p| &p.updated_at)
            .finish()
    }
}

/// Request body for creating or updating a project.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewProject {
    pub archived: bool,

    pub body: String,

    pub name: String,

    pub tags: Taggings,
}

pub const NEW_PROJECT_SCHEMA: Schema = Schema::new(
    "new_project",
    &[
        Field::required("archived", Kind::Boolean),
        Field::required("body", Kind::String),
        Field::required("name", Kind::String),
        Field::required("tags", Kind::RecordList(&TAGGING_SCHEMA)),
    ],
);

impl Resource for NewProject {
    const SCHEMA: &'static Schema = &NEW_PROJECT_SCHEMA;
}

impl ValueEq for NewProject {
    fn diff(&self, other: &Self) -> Option<Mismatch> {
        Comparison::new(self, other)
            .field("archived", |p| &p.archived)
            .field("body", |p| &p.body)
            .field("name", |p| &p.name)
            .field("tags", |p| &p.tags)
            .finish()
    }
}

partial_eq_by_value!(Project, NewProject);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{self, epoch, tagging, ts};

    fn kobiro() -> Project {
        Project {
            id: 1,
            rendered_body: "<h1>Example</h1>".into(),
            archived: false,
            body: "# Example".into(),
            created_at: epoch(),
            name: "Kobiro Project".into(),
            reactions_count: 100,
            updated_at: epoch(),
        }
    }

    #[test]
    fn offsets_do_not_matter() {
        let shifted = Project {
            created_at: ts("2000-01-01T09:00:00+09:00"),
            updated_at: ts("1999-12-31T19:00:00-05:00"),
            ..kobiro()
        };
        assert_eq!(kobiro(), shifted);
    }

    #[test]
    fn legacy_keys_in_every_list_element() {
        let json = br#"[
            {
                "rendered_body": "<h1>Example</h1>",
                "archived": false,
                "body": "Example",
                "craeated_at": "2000-01-01T00:00:00+00:00",
                "id": 1,
                "name": "Kobiro Project",
                "reactions_count": 100,
                "updated_at": "2000-01-01T00:00:00+00:00"
            },
            {
                "rendered_body": "<h1>Example</h1>",
                "archived": true,
                "body": "Example",
                "craeated_at": "2001-01-01T09:00:00+09:00",
                "id": 2,
                "name": "Retired Project",
                "reactions_count": 0,
                "updated_at": "2001-01-01T00:00:00+00:00"
            }
        ]"#;

        let projects = Project::list_from_json(json).unwrap();
        let expected = vec![
            Project {
                body: "Example".into(),
                ..kobiro()
            },
            Project {
                id: 2,
                archived: true,
                body: "Example".into(),
                created_at: ts("2001-01-01T00:00:00+00:00"),
                name: "Retired Project".into(),
                reactions_count: 0,
                updated_at: ts("2001-01-01T00:00:00+00:00"),
                ..kobiro()
            },
        ];
        assert_eq!(projects, expected);
    }

    #[test]
    fn space_separated_timestamp_decodes() {
        let mut value = serde_json::to_value(kobiro()).unwrap();
        value["created_at"] = serde_json::json!("2000-01-01 09:00:00+09:00");
        let project = Project::from_json(&serde_json::to_vec(&value).unwrap()).unwrap();
        assert_eq!(project, kobiro());
    }

    #[test]
    fn archived_flag_is_compared() {
        let archived = Project {
            archived: true,
            ..kobiro()
        };
        assert_eq!(kobiro().diff(&archived).unwrap().path(), "archived");
    }

    #[test]
    fn new_project_tags_are_ordered() {
        let a = NewProject {
            archived: false,
            body: "# Example".into(),
            name: "Kobiro Project".into(),
            tags: vec![tagging("Ruby", &["0.0.1"]), tagging("Go", &["1.10"])],
        };
        let mut b = a.clone();
        b.tags.reverse();
        assert!(!a.value_eq(&b));
        assert!(a.value_eq(&a.clone()));
    }

    #[test]
    fn schema_matches_serialized_keys() {
        fixtures::assert_schema_keys(&kobiro());
        fixtures::assert_schema_keys(&NewProject {
            archived: true,
            body: String::new(),
            name: String::new(),
            tags: vec![tagging("Ruby", &["0.0.1"])],
        });
    }
}
