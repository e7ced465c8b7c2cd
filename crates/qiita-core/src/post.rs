//! Posts ("items" in the API paths).

use serde::{Deserialize, Serialize};

use crate::Timestamp;
use crate::compare::{Comparison, Mismatch, ValueEq, partial_eq_by_value};
use crate::decode::Resource;
use crate::group::{GROUP_SCHEMA, Group};
use crate::schema::{Field, Kind, Schema};
use crate::tag::{TAGGING_SCHEMA, Taggings};
use crate::user::{USER_SCHEMA, User};

/// A post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: String,

    /// HTML rendering of `body`.
    pub rendered_body: String,

    /// Markdown source.
    pub body: String,

    pub coediting: bool,

    pub comments_count: i64,

    pub created_at: Timestamp,

    /// Group the post is shared with; `None` outside Qiita Team.
    #[serde(default)]
    pub group: Option<Group>,

    pub likes_count: i64,

    pub private: bool,

    pub reactions_count: i64,

    pub tags: Taggings,

    pub title: String,

    pub updated_at: Timestamp,

    pub url: String,

    pub user: User,

    /// Only sent to the post's author.
    #[serde(default)]
    pub page_views_count: Option<i64>,
}

/// List payload of posts.
pub type Posts = Vec<Post>;

pub const POST_SCHEMA: Schema = Schema::new(
    "post",
    &[
        Field::required("id", Kind::String),
        Field::required("rendered_body", Kind::String),
        Field::required("body", Kind::String),
        Field::required("coediting", Kind::Boolean),
        Field::required("comments_count", Kind::Integer),
        Field::required("created_at", Kind::Timestamp),
        Field::optional("group", Kind::Record(&GROUP_SCHEMA)),
        Field::required("likes_count", Kind::Integer),
        Field::required("private", Kind::Boolean),
        Field::required("reactions_count", Kind::Integer),
        Field::required("tags", Kind::RecordList(&TAGGING_SCHEMA)),
        Field::required("title", Kind::String),
        Field::required("updated_at", Kind::Timestamp),
        Field::required("url", Kind::String),
        Field::required("user", Kind::Record(&USER_SCHEMA)),
        Field::optional("page_views_count", Kind::Integer),
    ],
);

impl Resource for Post {
    const SCHEMA: &'static Schema = &POST_SCHEMA;
}

impl ValueEq for Post {
    fn diff(&self, other: &Self) -> Option<Mismatch> {
        Comparison::new(self, other)
            .field("id", |p| &p.id)
            .field("rendered_body", |p| &p.rendered_body)
            .field("body", |p| &p.body)
            .field("coediting", |p| &p.coediting)
            .field("comments_count", |p| &p.comments_count)
            .field("created_at", |p| &p.created_at)
            .field("group", |p| &p.group)
            .field("likes_count", |p| &p.likes_count)
            .field("private", |p| &p.private)
            .field("reactions_count", |p| &p.reactions_count)
            .field("tags", |p| &p.tags)
            .field("title", |p| &p.title)
            .field("updated_at", |p| &p.updated_at)
            .field("url", |p| &p.url)
            .field("user", |p| &p.user)
            .field("page_views_count", |p| &p.page_views_count)
            .finish()
    }
}

partial_eq_by_value!(Post);
