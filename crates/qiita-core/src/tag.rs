//! Tags and taggings.

use serde::{Deserialize, Serialize};

use crate::compare::{Comparison, Mismatch, ValueEq, partial_eq_by_value};
use crate::decode::Resource;
use crate::schema::{Field, Kind, Schema};

/// A tag attached to a post, template or project, with the versions it
/// applies to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tagging {
    pub name: String,

    /// Ordered; `["1.0", "2.0"]` and `["2.0", "1.0"]` are different taggings.
    pub versions: Vec<String>,
}

/// Ordered list of taggings.
pub type Taggings = Vec<Tagging>;

pub const TAGGING_SCHEMA: Schema = Schema::new(
    "tagging",
    &[
        Field::required("name", Kind::String),
        Field::required("versions", Kind::StringList),
    ],
);

impl Resource for Tagging {
    const SCHEMA: &'static Schema = &TAGGING_SCHEMA;
}

impl ValueEq for Tagging {
    fn diff(&self, other: &Self) -> Option<Mismatch> {
        Comparison::new(self, other)
            .field("name", |t| &t.name)
            .field("versions", |t| &t.versions)
            .finish()
    }
}

/// A tag as listed by the tags endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tag {
    pub id: String,

    pub followers_count: i64,

    #[serde(default)]
    pub icon_url: Option<String>,

    pub items_count: i64,
}

/// List payload of tags.
pub type Tags = Vec<Tag>;

pub const TAG_SCHEMA: Schema = Schema::new(
    "tag",
    &[
        Field::required("id", Kind::String),
        Field::required("followers_count", Kind::Integer),
        Field::optional("icon_url", Kind::String),
        Field::required("items_count", Kind::Integer),
    ],
);

impl Resource for Tag {
    const SCHEMA: &'static Schema = &TAG_SCHEMA;
}

impl ValueEq for Tag {
    fn diff(&self, other: &Self) -> Option<Mismatch> {
        Comparison::new(self, other)
            .field("id", |t| &t.id)
            .field("followers_count", |t| &t.followers_count)
            .field("icon_url", |t| &t.icon_url)
            .field("items_count", |t| &t.items_count)
            .finish()
    }
}

partial_eq_by_value!(Tagging, Tag);
