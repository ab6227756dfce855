//! Player and team records.
//!
//! These mirror what the players and teams APIs return. The roster engine
//! only reads them; ownership stays with the league backend.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Backend player identifier.
pub type PlayerId = i64;

/// Backend team identifier.
pub type TeamId = i64;

/// A player from the league's player list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    /// Stable unique ID
    pub id: PlayerId,

    /// Display name
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,

    /// Playing position, e.g. "Forward"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,

    /// Team the player is registered with in the backend
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team: Option<TeamId>,

    /// Avatar URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl Player {
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            age: None,
            position: None,
            team: None,
            avatar: None,
        }
    }

    /// Compact view used when rendering roster columns.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "id": self.id,
            "name": self.name,
        })
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (#{})", self.name, self.id)
    }
}

/// A team from the league's team list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
}

impl Team {
    pub fn new(id: TeamId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}
