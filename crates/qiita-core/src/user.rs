//! Users and the authenticated account.

use serde::{Deserialize, Serialize};

use crate::compare::{Comparison, Mismatch, ValueEq, partial_eq_by_value};
use crate::decode::Resource;
use crate::schema::{Field, Kind, Schema};

/// A Qiita user.
///
/// Most profile attributes are independently nullable; an attribute the user
/// never filled in is `None`, which is distinct from `Some("")`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub facebook_id: Option<String>,

    pub followees_count: i64,

    pub followers_count: i64,

    #[serde(default)]
    pub github_login_name: Option<String>,

    pub items_count: i64,

    #[serde(default)]
    pub linkedin_id: Option<String>,

    #[serde(default)]
    pub location: Option<String>,

    /// Display name.
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub organization: Option<String>,

    pub permanent_id: i64,

    pub profile_image_url: String,

    #[serde(default)]
    pub twitter_screen_name: Option<String>,

    #[serde(default)]
    pub website_url: Option<String>,
}

/// List payload of users.
pub type Users = Vec<User>;

pub const USER_SCHEMA: Schema = Schema::new(
    "user",
    &[
        Field::required("id", Kind::String),
        Field::optional("description", Kind::String),
        Field::optional("facebook_id", Kind::String),
        Field::required("followees_count", Kind::Integer),
        Field::required("followers_count", Kind::Integer),
        Field::optional("github_login_name", Kind::String),
        Field::required("items_count", Kind::Integer),
        Field::optional("linkedin_id", Kind::String),
        Field::optional("location", Kind::String),
        Field::optional("name", Kind::String),
        Field::optional("organization", Kind::String),
        Field::required("permanent_id", Kind::Integer),
        Field::required("profile_image_url", Kind::String),
        Field::optional("twitter_screen_name", Kind::String),
        Field::optional("website_url", Kind::String),
    ],
);

impl Resource for User {
    const SCHEMA: &'static Schema = &USER_SCHEMA;
}

impl ValueEq for User {
    fn diff(&self, other: &Self) -> Option<Mismatch> {
        Comparison::new(self, other)
            .field("id", |u| &u.id)
            .field("description", |u| &u.description)
            .field("facebook_id", |u| &u.facebook_id)
            .field("followees_count", |u| &u.followees_count)
            .field("followers_count", |u| &u.followers_count)
            .field("github_login_name", |u| &u.github_login_name)
            .field("items_count", |u| &u.items_count)
            .field("linkedin_id", |u| &u.linkedin_id)
            .field("location", |u| &u.location)
            .field("name", |u| &u.name)
            .field("organization", |u| &u.organization)
            .field("permanent_id", |u| &u.permanent_id)
            .field("profile_image_url", |u| &u.profile_image_url)
            .field("twitter_screen_name", |u| &u.twitter_screen_name)
            .field("website_url", |u| &u.website_url)
            .finish()
    }
}

/// The user the access token belongs to, with account quota fields.
///
/// The profile fields sit at the top level of the payload next to the quota
/// fields; they are kept in an embedded [`User`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    #[serde(flatten)]
    pub user: User,

    pub image_monthly_upload_limit: i64,

    pub image_monthly_upload_remaining: i64,

    pub team_only: bool,
}

pub const AUTHENTICATED_USER_SCHEMA: Schema = Schema::extending(
    "authenticated_user",
    &USER_SCHEMA,
    &[
        Field::required("image_monthly_upload_limit", Kind::Integer),
        Field::required("image_monthly_upload_remaining", Kind::Integer),
        Field::required("team_only", Kind::Boolean),
    ],
);

impl Resource for AuthenticatedUser {
    const SCHEMA: &'static Schema = &AUTHENTICATED_USER_SCHEMA;
}

impl ValueEq for AuthenticatedUser {
    fn diff(&self, other: &Self) -> Option<Mismatch> {
        Comparison::new(self, other)
            .embedded(|u| &u.user)
            .field("image_monthly_upload_limit", |u| &u.image_monthly_upload_limit)
            .field("image_monthly_upload_remaining", |u| {
                &u.image_monthly_upload_remaining
            })
            .field("team_only", |u| &u.team_only)
            .finish()
    }
}

partial_eq_by_value!(User, AuthenticatedUser);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use pretty_assertions::assert_eq;

    #[test]
    fn omitted_optional_fields_decode_as_absent() {
        let json = br#"{
            "id": "qiita",
            "followees_count": 0,
            "followers_count": 0,
            "items_count": 0,
            "permanent_id": 2,
            "profile_image_url": "https://example.com/qiita.png",
            "organization": null
        }"#;
        let user = User::from_json(json).unwrap();
        assert_eq!(user.description, None);
        assert_eq!(user.organization, None);
        assert_eq!(user.website_url, None);
    }

    #[test]
    fn empty_string_differs_from_absent() {
        let absent = User {
            location: None,
            ..fixtures::yaotti()
        };
        let empty = User {
            location: Some(String::new()),
            ..fixtures::yaotti()
        };
        assert!(!absent.value_eq(&empty));
        assert_eq!(absent.diff(&empty).unwrap().path(), "location");
    }

    #[test]
    fn every_field_is_compared_across_instances() {
        let base = fixtures::yaotti();
        let changed = User {
            profile_image_url: "https://example.com/other.png".into(),
            ..fixtures::yaotti()
        };
        assert_eq!(base.diff(&changed).unwrap().path(), "profile_image_url");
        assert!(base.value_eq(&fixtures::yaotti()));
    }

    #[test]
    fn authenticated_user_flattens_profile() {
        let json = br#"{
            "id": "yaotti",
            "followees_count": 100,
            "followers_count": 200,
            "items_count": 300,
            "permanent_id": 1,
            "profile_image_url": "https://example.com/yaotti.png",
            "image_monthly_upload_limit": 1048576,
            "image_monthly_upload_remaining": 524288,
            "team_only": false
        }"#;
        let me = AuthenticatedUser::from_json(json).unwrap();
        assert_eq!(me.user.id, "yaotti");
        assert_eq!(me.user.name, None);
        assert_eq!(me.image_monthly_upload_remaining, 524288);
    }

    #[test]
    fn authenticated_user_compares_every_field() {
        let me = AuthenticatedUser {
            user: fixtures::yaotti(),
            image_monthly_upload_limit: 1048576,
            image_monthly_upload_remaining: 524288,
            team_only: false,
        };
        let team_only = AuthenticatedUser {
            team_only: true,
            ..me.clone()
        };
        assert_eq!(me.diff(&team_only).unwrap().path(), "team_only");

        let renamed = AuthenticatedUser {
            user: User {
                name: None,
                ..fixtures::yaotti()
            },
            ..me.clone()
        };
        assert_eq!(me.diff(&renamed).unwrap().path(), "name");
    }

    #[test]
    fn authenticated_user_missing_quota_field() {
        let json = br#"{
            "id": "yaotti",
            "followees_count": 100,
            "followers_count": 200,
            "items_count": 300,
            "permanent_id": 1,
            "profile_image_url": "https://example.com/yaotti.png",
            "image_monthly_upload_limit": 1048576,
            "team_only": false
        }"#;
        let err = AuthenticatedUser::from_json(json).unwrap_err();
        assert_eq!(err.resource(), "authenticated_user");
        assert_eq!(err.field(), Some("image_monthly_upload_remaining"));
    }

    #[test]
    fn schema_matches_serialized_keys() {
        fixtures::assert_schema_keys(&fixtures::yaotti());
        fixtures::assert_schema_keys(&AuthenticatedUser {
            user: fixtures::yaotti(),
            image_monthly_upload_limit: 1,
            image_monthly_upload_remaining: 1,
            team_only: true,
        });
    }
}
