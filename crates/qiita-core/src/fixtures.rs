//! Shared values for unit tests, modelled on the API documentation samples.

use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::decode::Resource;
use crate::schema::{Kind, Schema};
use crate::{Group, Tagging, Timestamp, User};

pub fn ts(s: &str) -> Timestamp {
    chrono::DateTime::parse_from_rfc3339(s).unwrap()
}

pub fn epoch() -> Timestamp {
    ts("2000-01-01T00:00:00+00:00")
}

pub fn yaotti() -> User {
    User {
        id: "yaotti".into(),
        description: Some("Hello, world.".into()),
        facebook_id: Some("yaotti".into()),
        followees_count: 100,
        followers_count: 200,
        github_login_name: Some("yaotti".into()),
        items_count: 300,
        linkedin_id: Some("yaotti".into()),
        location: Some("Tokyo, Japan".into()),
        name: Some("Hiroshige Umino".into()),
        organization: Some("Increments Inc".into()),
        permanent_id: 1,
        profile_image_url: "https://si0.twimg.com/profile_images/2309761038/1ijg13pfs0dg84sk2y0h_normal.jpeg".into(),
        twitter_screen_name: Some("yaotti".into()),
        website_url: Some("http://yaotti.hatenablog.com".into()),
    }
}

pub fn tagging(name: &str, versions: &[&str]) -> Tagging {
    Tagging {
        name: name.into(),
        versions: versions.iter().map(|v| v.to_string()).collect(),
    }
}

pub fn dev_group() -> Group {
    Group {
        id: 1,
        created_at: epoch(),
        name: "Dev".into(),
        private: false,
        updated_at: epoch(),
        url_name: "dev".into(),
    }
}

/// Asserts that serializing `resource` yields exactly the keys its schema
/// declares, recursing into nested records that are present.
pub fn assert_schema_keys<R: Resource>(resource: &R) {
    let value = serde_json::to_value(resource).unwrap();
    assert_object_keys(R::SCHEMA, &value);
}

fn assert_object_keys(schema: &Schema, value: &Value) {
    let object = value.as_object().unwrap();
    let mut actual: Vec<&str> = object.keys().map(String::as_str).collect();
    let mut expected = schema.keys();
    actual.sort_unstable();
    expected.sort_unstable();
    assert_eq!(actual, expected, "keys of {}", schema.resource);

    for field in schema.all_fields() {
        match (field.kind, &object[field.key]) {
            (Kind::Record(nested), inner @ Value::Object(_)) => assert_object_keys(nested, inner),
            (Kind::RecordList(nested), Value::Array(items)) => {
                for item in items {
                    assert_object_keys(nested, item);
                }
            }
            _ => {}
        }
    }
}
