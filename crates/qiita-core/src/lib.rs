//! Typed bindings for the JSON resources of Qiita API v2.
//!
//! Every resource is a plain value type that decodes from the wire format
//! documented at <https://qiita.com/api/v2/docs> and compares field by field
//! through [`ValueEq`]. Optional wire fields are `Option`s, so an absent value
//! and an empty string are different states.
//!
//! Types whose name starts with `New` are request bodies for the `POST`
//! endpoints sharing a path with a `GET` resource.

pub mod comment;
pub mod compare;
pub mod decode;
pub mod error;
pub mod group;
pub mod post;
pub mod project;
pub mod reaction;
pub mod schema;
pub mod tag;
pub mod team;
pub mod template;
pub mod user;

#[cfg(test)]
pub(crate) mod fixtures;

pub use comment::Comment;
pub use compare::{Mismatch, ValueEq, value_eq};
pub use decode::{DecodeOptions, Decoder, Resource};
pub use error::{DecodeError, Result};
pub use group::Group;
pub use post::{Post, Posts};
pub use project::{NewProject, Project, Projects};
pub use reaction::{Reaction, ReactionName, Reactions};
pub use schema::{Field, Kind, Schema};
pub use tag::{Tag, Tagging, Taggings, Tags};
pub use team::{Team, Teams};
pub use template::{ExpandedTemplate, NewTemplate, Template, Templates};
pub use user::{AuthenticatedUser, User, Users};

/// A point in time as sent by the API, keeping its original UTC offset.
///
/// Two timestamps are equal when they denote the same instant, whatever
/// offset they were written with.
pub type Timestamp = chrono::DateTime<chrono::FixedOffset>;
