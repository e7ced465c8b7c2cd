//! Qiita Team memberships.

use serde::{Deserialize, Serialize};

use crate::compare::{Comparison, Mismatch, ValueEq, partial_eq_by_value};
use crate::decode::Resource;
use crate::schema::{Field, Kind, Schema};

/// A Qiita Team the authenticated user belongs to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
    pub id: String,

    pub active: bool,

    pub name: String,
}

/// List payload of teams.
pub type Teams = Vec<Team>;

pub const TEAM_SCHEMA: Schema = Schema::new(
    "team",
    &[
        Field::required("id", Kind::String),
        Field::required("active", Kind::Boolean),
        Field::required("name", Kind::String),
    ],
);

impl Resource for Team {
    const SCHEMA: &'static Schema = &TEAM_SCHEMA;
}

impl ValueEq for Team {
    fn diff(&self, other: &Self) -> Option<Mismatch> {
        Comparison::new(self, other)
            .field("id", |t| &t.id)
            .field("active", |t| &t.active)
            .field("name", |t| &t.name)
            .finish()
    }
}

partial_eq_by_value!(Team);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    fn increments() -> Team {
        Team {
            id: "increments".into(),
            active: true,
            name: "Increments Inc.".into(),
        }
    }

    #[test]
    fn decode_team() {
        let team = Team::from_json(
            br#"{"active": true, "id": "increments", "name": "Increments Inc."}"#,
        )
        .unwrap();
        assert_eq!(team, increments());
    }

    #[test]
    fn missing_required_field() {
        let err = Team::from_json(br#"{"active": true, "id": "increments"}"#).unwrap_err();
        insta::assert_snapshot!(err.to_string(), @"team: missing required field `name`");
    }

    #[test]
    fn schema_matches_serialized_keys() {
        fixtures::assert_schema_keys(&increments());
    }
}
