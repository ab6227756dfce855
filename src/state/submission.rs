//! Submission gate.
//!
//! Decides whether the rosters may be submitted and maps the current
//! state into the payload the match-creation API accepts. There is no
//! stored mode: "submittable" is just [`can_submit`] evaluated against the
//! latest snapshot.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::player::{PlayerId, TeamId};
use super::roster::{Group, MatchMetadata, RosterSnapshot, TeamSelection};

/// Minimum players each roster needs before a match can be created.
pub const MIN_ROSTER_SIZE: usize = 11;

/// Payload for creating a match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchDraft {
    pub title: String,
    pub match_date: Option<NaiveDate>,
    pub venue: String,
    pub team_a_id: Option<TeamId>,
    pub team_b_id: Option<TeamId>,
    /// Team A player IDs in roster order
    pub team_a_players: Vec<PlayerId>,
    /// Team B player IDs in roster order
    pub team_b_players: Vec<PlayerId>,
}

/// How many players each roster still needs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RosterShortfall {
    pub team_a: usize,
    pub team_b: usize,
}

impl RosterShortfall {
    pub fn is_met(&self) -> bool {
        self.team_a == 0 && self.team_b == 0
    }
}

/// A draft was requested while a roster is below the minimum size.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "both teams need at least {minimum} players (team A short by {}, team B short by {})",
    .shortfall.team_a,
    .shortfall.team_b
)]
pub struct IncompleteRosterError {
    pub minimum: usize,
    pub shortfall: RosterShortfall,
}

/// Players missing from each roster relative to `minimum`.
pub fn shortfall(snapshot: &RosterSnapshot, minimum: usize) -> RosterShortfall {
    RosterShortfall {
        team_a: minimum.saturating_sub(snapshot.len(Group::TeamA)),
        team_b: minimum.saturating_sub(snapshot.len(Group::TeamB)),
    }
}

pub fn can_submit(snapshot: &RosterSnapshot) -> bool {
    can_submit_with(snapshot, MIN_ROSTER_SIZE)
}

pub fn can_submit_with(snapshot: &RosterSnapshot, minimum: usize) -> bool {
    shortfall(snapshot, minimum).is_met()
}

pub fn build_draft(
    snapshot: &RosterSnapshot,
    metadata: &MatchMetadata,
    teams: &TeamSelection,
) -> Result<MatchDraft, IncompleteRosterError> {
    build_draft_with(snapshot, metadata, teams, MIN_ROSTER_SIZE)
}

/// Map the rosters, metadata and team selection into a [`MatchDraft`].
///
/// Metadata and team selection are copied as-is; only roster size is
/// checked.
pub fn build_draft_with(
    snapshot: &RosterSnapshot,
    metadata: &MatchMetadata,
    teams: &TeamSelection,
    minimum: usize,
) -> Result<MatchDraft, IncompleteRosterError> {
    let shortfall = shortfall(snapshot, minimum);
    if !shortfall.is_met() {
        return Err(IncompleteRosterError { minimum, shortfall });
    }

    Ok(MatchDraft {
        title: metadata.title.clone(),
        match_date: metadata.match_date,
        venue: metadata.venue.clone(),
        team_a_id: teams.team_a.as_ref().map(|t| t.id),
        team_b_id: teams.team_b.as_ref().map(|t| t.id),
        team_a_players: snapshot.ids(Group::TeamA),
        team_b_players: snapshot.ids(Group::TeamB),
    })
}
