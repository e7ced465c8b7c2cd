//! Qiita Team post templates.

use serde::{Deserialize, Serialize};

use crate::compare::{Comparison, Mismatch, ValueEq, partial_eq_by_value};
use crate::decode::Resource;
use crate::schema::{Field, Kind, Schema};
use crate::tag::{TAGGING_SCHEMA, Taggings};

/// A post template. Placeholders such as `%{Year}` are expanded into the
/// `expanded_*` fields for the current date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Template {
    pub id: i64,

    pub body: String,

    pub name: String,

    pub expanded_body: String,

    pub expanded_tags: Taggings,

    pub expanded_title: String,

    pub tags: Taggings,

    pub title: String,
}

/// List payload of templates.
pub type Templates = Vec<Template>;

pub const TEMPLATE_SCHEMA: Schema = Schema::new(
    "template",
    &[
        Field::required("id", Kind::Integer),
        Field::required("body", Kind::String),
        Field::required("name", Kind::String),
        Field::required("expanded_body", Kind::String),
        Field::required("expanded_tags", Kind::RecordList(&TAGGING_SCHEMA)),
        Field::required("expanded_title", Kind::String),
        Field::required("tags", Kind::RecordList(&TAGGING_SCHEMA)),
        Field::required("title", Kind::String),
    ],
);

impl Resource for Template {
    const SCHEMA: &'static Schema = &TEMPLATE_SCHEMA;
}

impl ValueEq for Template {
    fn diff(&self, other: &Self) -> Option<Mismatch> {
        Comparison::new(self, other)
            .field("id", |t| &t.id)
            .field("body", |t| &t.body)
            .field("name", |t| &t.name)
            .field("expanded_body", |t| &t.expanded_body)
            .field("expanded_tags", |t| &t.expanded_tags)
            .field("expanded_title", |t| &t.expanded_title)
            .field("tags", |t| &t.tags)
            .field("title", |t| &t.title)
            .finish()
    }
}

/// Request body for creating or updating a template.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewTemplate {
    pub body: String,

    pub name: String,

    pub tags: Taggings,

    pub title: String,
}

pub const NEW_TEMPLATE_SCHEMA: Schema = Schema::new(
    "new_template",
    &[
        Field::required("body", Kind::String),
        Field::required("name", Kind::String),
        Field::required("tags", Kind::RecordList(&TAGGING_SCHEMA)),
        Field::required("title", Kind::String),
    ],
);

impl Resource for NewTemplate {
    const SCHEMA: &'static Schema = &NEW_TEMPLATE_SCHEMA;
}

impl ValueEq for NewTemplate {
    fn diff(&self, other: &Self) -> Option<Mismatch> {
        Comparison::new(self, other)
            .field("body", |t| &t.body)
            .field("name", |t| &t.name)
            .field("tags", |t| &t.tags)
            .field("title", |t| &t.title)
            .finish()
    }
}

/// Preview of a template with its placeholders expanded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpandedTemplate {
    pub body: String,

    pub tags: Taggings,

    pub title: String,
}

pub const EXPANDED_TEMPLATE_SCHEMA: Schema = Schema::new(
    "expanded_template",
    &[
        Field::required("body", Kind::String),
        Field::required("tags", Kind::RecordList(&TAGGING_SCHEMA)),
        Field::required("title", Kind::String),
    ],
);

impl Resource for ExpandedTemplate {
    const SCHEMA: &'static Schema = &EXPANDED_TEMPLATE_SCHEMA;
}

impl ValueEq for ExpandedTemplate {
    fn diff(&self, other: &Self) -> Option<Mismatch> {
        Comparison::new(self, other)
            .field("body", |t| &t.body)
            .field("tags", |t| &t.tags)
            .field("title", |t| &t.title)
            .finish()
    }
}

partial_eq_by_value!(Template, NewTemplate, ExpandedTemplate);
