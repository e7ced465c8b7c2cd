//! Groups.

use serde::{Deserialize, Serialize};

use crate::Timestamp;
use crate::compare::{Comparison, Mismatch, ValueEq, partial_eq_by_value};
use crate::decode::Resource;
use crate::schema::{Field, Kind, Schema};

/// A group within a Qiita Team.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Group {
    pub id: i64,

    pub created_at: Timestamp,

    pub name: String,

    pub private: bool,

    pub updated_at: Timestamp,

    /// Group identifier used in URLs.
    pub url_name: String,
}

pub const GROUP_SCHEMA: Schema = Schema::new(
    "group",
    &[
        Field::required("id", Kind::Integer),
        Field::required("created_at", Kind::Timestamp),
        Field::required("name", Kind::String),
        Field::required("private", Kind::Boolean),
        Field::required("updated_at", Kind::Timestamp),
        Field::required("url_name", Kind::String),
    ],
);

impl Resource for Group {
    const SCHEMA: &'static Schema = &GROUP_SCHEMA;
}

impl ValueEq for Group {
    fn diff(&self, other: &Self) -> Option<Mismatch> {
        Comparison::new(self, other)
            .field("id", |g| &g.id)
            .field("created_at", |g| &g.created_at)
            .field("name", |g| &g.name)
            .field("private", |g| &g.private)
            .field("updated_at", |g| &g.updated_at)
            .field("url_name", |g| &g.url_name)
            .finish()
    }
}

partial_eq_by_value!(Group);
