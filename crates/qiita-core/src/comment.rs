//! Comments on posts.

use serde::{Deserialize, Serialize};

use crate::Timestamp;
use crate::compare::{Comparison, Mismatch, ValueEq, partial_eq_by_value};
use crate::decode::Resource;
use crate::schema::{Field, Kind, Schema};
use crate::user::{USER_SCHEMA, User};

/// A comment on a post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    pub id: String,

    /// Markdown source.
    pub body: String,

    pub created_at: Timestamp,

    /// HTML rendering of `body`.
    pub rendered_body: String,

    pub updated_at: Timestamp,

    pub user: User,
}

pub const COMMENT_SCHEMA: Schema = Schema::new(
    "comment",
    &[
        Field::required("id", Kind::String),
        Field::required("body", Kind::String),
        Field::required("created_at", Kind::Timestamp),
        Field::required("rendered_body", Kind::String),
        Field::required("updated_at", Kind::Timestamp),
        Field::required("user", Kind::Record(&USER_SCHEMA)),
    ],
);

impl Resource for Comment {
    const SCHEMA: &'static Schema = &COMMENT_SCHEMA;
}

impl ValueEq for Comment {
    fn diff(&self, other: &Self) -> Option<Mismatch> {
        Comparison::new(self, other)
            .field("id", |c| &c.id)
            .field("body", |c| &c.body)
            .field("created_at", |c| &c.created_at)
            .field("rendered_body", |c| &c.rendered_body)
            .field("updated_at", |c| &c.updated_at)
            .field("user", |c| &c.user)
            .finish()
    }
}

partial_eq_by_value!(Comment);
