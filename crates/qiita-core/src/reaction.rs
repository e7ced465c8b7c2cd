//! Emoji reactions.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::Timestamp;
use crate::compare::{Comparison, Mismatch, ValueEq, partial_eq_by_value};
use crate::decode::Resource;
use crate::schema::{Field, Kind, Schema};
use crate::user::{USER_SCHEMA, User};

/// Emoji name of a reaction, e.g. `"+1"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReactionName(pub String);

impl ReactionName {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ReactionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ReactionName {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl ValueEq for ReactionName {
    fn diff(&self, other: &Self) -> Option<Mismatch> {
        self.0.diff(&other.0)
    }
}

/// A reaction left by a user on a post, comment or project.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reaction {
    pub created_at: Timestamp,

    pub image_url: String,

    pub name: ReactionName,

    pub user: User,
}

/// List payload of reactions.
pub type Reactions = Vec<Reaction>;

pub const REACTION_SCHEMA: Schema = Schema::new(
    "reaction",
    &[
        Field::required("created_at", Kind::Timestamp),
        Field::required("image_url", Kind::String),
        Field::required("name", Kind::String),
        Field::required("user", Kind::Record(&USER_SCHEMA)),
    ],
);

impl Resource for Reaction {
    const SCHEMA: &'static Schema = &REACTION_SCHEMA;
}

impl ValueEq for Reaction {
    fn diff(&self, other: &Self) -> Option<Mismatch> {
        Comparison::new(self, other)
            .field("created_at", |r| &r.created_at)
            .field("image_url", |r| &r.image_url)
            .field("name", |r| &r.name)
            .field("user", |r| &r.user)
            .finish()
    }
}

partial_eq_by_value!(Reaction);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{self, yaotti};

    const REACTIONS_JSON: &[u8] = br#"[
        {
            "created_at": "2000-01-01T00:00:00+00:00",
            "image_url": "https://cdn.qiita.com/emoji/twemoji/unicode/1f44d.png",
            "name": "+1",
            "user": {
                "description": "Hello, world.",
                "facebook_id": "yaotti",
                "followees_count": 100,
                "followers_count": 200,
                "github_login_name": "yaotti",
                "id": "yaotti",
                "items_count": 300,
                "linkedin_id": "yaotti",
                "location": "Tokyo, Japan",
                "name": "Hiroshige Umino",
                "organization": "Increments Inc",
                "permanent_id": 1,
                "profile_image_url": "https://si0.twimg.com/profile_images/2309761038/1ijg13pfs0dg84sk2y0h_normal.jpeg",
                "twitter_screen_name": "yaotti",
                "website_url": "http://yaotti.hatenablog.com"
            }
        }
    ]"#;

    fn thumbs_up() -> Reaction {
        Reaction {
            created_at: fixtures::epoch(),
            image_url: "https://cdn.qiita.com/emoji/twemoji/unicode/1f44d.png".into(),
            name: ReactionName::from("+1"),
            user: yaotti(),
        }
    }

    #[test]
    fn decode_reactions() {
        let reactions = Reaction::list_from_json(REACTIONS_JSON).unwrap();
        assert_eq!(reactions, vec![thumbs_up()]);
        assert_eq!(reactions[0].name.to_string(), "+1");
    }

    #[test]
    fn name_is_compared() {
        let tada = Reaction {
            name: ReactionName::from("tada"),
            ..thumbs_up()
        };
        assert_eq!(thumbs_up().diff(&tada).unwrap().path(), "name");
    }

    #[test]
    fn schema_matches_serialized_keys() {
        fixtures::assert_schema_keys(&thumbs_up());
    }
}
